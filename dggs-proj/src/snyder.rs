// Copyright 2025 contributors to the GeoPlegmata project.
//
// Licenced under the Apache Licence, Version 2.0 <LICENCE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENCE-MIT or http://opensource.org/licenses/MIT>, at your
// discretion. This file may not be copied, modified, or distributed
// except according to those terms

//! Snyder's equal-area projection for polyhedral globes (Snyder 1992,
//! "An Equal-Area Projection for Polyhedral Globes", Cartographica Vol.
//! 29 No. 1), specialised to the icosahedron's triangular faces.
//!
//! Each face has 6-fold dihedral symmetry: the three lines from its
//! centre to its vertices and the three to its edge midpoints split it
//! into six congruent right spherical triangles. We fold an incoming
//! azimuth into the nearest such wedge (measured from its edge-midpoint
//! side) and use the SAS spherical-excess identity to find the area
//! swept out between that side and the point, then place the point at
//! the planar radius that sweeps the same area in the equivalent flat
//! wedge. Because the wedge boundary (the face edge) is the `az = w`
//! ray in both the spherical and planar constructions, this keeps edges
//! straight as well as areas true — the property the plain Lambert
//! azimuthal equal-area projection lacks.

use crate::error::ProjError;
use crate::icosahedron::{self, FaceDef, FACES, FACE_CIRCUMRADIUS, G, THETA};
use std::f64::consts::PI;

/// Planar coordinate within a single face, plus the face it belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceCoordinate {
    pub face: u8,
    pub x: f64,
    pub y: f64,
}

/// Azimuthal half-width of one of the six symmetric wedges a face
/// splits into: half the 120-degree spacing between adjacent vertices.
fn wedge_width() -> f64 {
    2.0 * THETA
}

/// Spherical distance from a face's centre to the midpoint of one of
/// its edges, found from the right triangle centre/edge-midpoint/vertex
/// (right angle at the edge midpoint) via Napier's rule
/// `tan(h) = tan(g) * cos(w)`.
fn centre_to_edge_midpoint() -> f64 {
    (G.tan() * wedge_width().cos()).atan()
}

/// Planar distance from a face's centre to the midpoint of one of its
/// edges: the inradius of the face's equilateral triangle, half its
/// circumradius.
fn planar_centre_to_edge_midpoint() -> f64 {
    FACE_CIRCUMRADIUS / 2.0
}

/// Spherical excess (steradians, unit sphere) of the triangle with two
/// sides `b`, `c` and the angle `a` between them, via the half-angle SAS
/// identity `tan(E/2) = (tan(b/2) tan(c/2) sin a) / (1 + tan(b/2)
/// tan(c/2) cos a)`.
fn spherical_excess(b: f64, c: f64, a: f64) -> f64 {
    let t = (b / 2.0).tan() * (c / 2.0).tan();
    2.0 * (t * a.sin() / (1.0 + t * a.cos())).atan()
}

/// The area-matching scale factor `k` such that a point exactly at a
/// face's vertex (`z = g`, `phi = w`) lands exactly at the face's
/// planar circumradius.
fn radial_scale() -> f64 {
    let h = centre_to_edge_midpoint();
    let w = wedge_width();
    let full_excess = spherical_excess(h, G, w);
    FACE_CIRCUMRADIUS * planar_centre_to_edge_midpoint() * w.sin() / full_excess
}

/// Fold a face-relative azimuth to its signed offset from the nearest
/// of the three vertex directions (spaced 120 degrees apart), in
/// `[-w, w]` where `w` is [`wedge_width`].
fn fold_to_nearest_vertex(az: f64) -> f64 {
    let spacing = 2.0 * PI / 3.0;
    let k = (az / spacing).round();
    az - k * spacing
}

const AZIMUTH_EPS: f64 = 1e-9;

/// Planar radius for a point at spherical distance `z` from the face
/// centre and azimuth `az` (already folded to the nearest vertex
/// direction, `[-w, w]`), preserving the area swept from the nearest
/// edge midpoint out to the point.
fn radius_for(z: f64, az: f64) -> f64 {
    let h = centre_to_edge_midpoint();
    let h_planar = planar_centre_to_edge_midpoint();
    let k = radial_scale();
    let phi = wedge_width() - az.abs();
    let a = (h / 2.0).tan() * (z / 2.0).tan();
    if phi.abs() < AZIMUTH_EPS {
        return k * 2.0 * a / ((1.0 + a) * h_planar);
    }
    k * spherical_excess(h, z, phi) / (h_planar * phi.sin())
}

/// Invert [`radius_for`]: the spherical distance `z` for a point at
/// planar radius `rho` and folded azimuth `az`.
fn z_for_radius(rho: f64, az: f64) -> f64 {
    let h = centre_to_edge_midpoint();
    let h_planar = planar_centre_to_edge_midpoint();
    let k = radial_scale();
    let phi = wedge_width() - az.abs();
    let b = (h / 2.0).tan();
    let t = if phi.abs() < AZIMUTH_EPS {
        let target = rho * h_planar / k;
        target / (b * (2.0 - target))
    } else {
        let excess_target = rho * h_planar * phi.sin() / k;
        let tan_half_excess = (excess_target / 2.0).tan();
        let denom = phi.sin() - phi.cos() * tan_half_excess;
        (tan_half_excess / denom) / b
    };
    2.0 * t.atan()
}

fn face_by_index(face: u8) -> Result<&'static FaceDef, ProjError> {
    FACES.get(face as usize).ok_or_else(|| ProjError::InvalidCoordinate {
        detail: format!("face index {face} is out of range [0, 19]"),
    })
}

/// Project a spherical point (radians) onto the plane of the face that
/// contains it, choosing the face via [`icosahedron::nearest_face`].
pub fn forward(lat: f64, lon: f64) -> Result<FaceCoordinate, ProjError> {
    if !(-PI / 2.0..=PI / 2.0).contains(&lat) {
        return Err(ProjError::InvalidCoordinate {
            detail: format!("latitude {lat} rad is outside [-pi/2, pi/2]"),
        });
    }
    let face_index = icosahedron::nearest_face(lat, lon);
    forward_on_face(face_index, lat, lon)
}

/// Project a spherical point onto a specific face's plane, without
/// re-deriving which face it belongs to. Used by callers that already
/// know the face (e.g. when projecting a cell's own geometry).
pub fn forward_on_face(face_index: u8, lat: f64, lon: f64) -> Result<FaceCoordinate, ProjError> {
    let face = face_by_index(face_index)?;
    let z = icosahedron::angular_distance(face.lat, face.lon, lat, lon);
    let raw_az = icosahedron::bearing(face.lat, face.lon, lat, lon) - face.orientation;
    let folded = fold_to_nearest_vertex(raw_az);
    let rho = radius_for(z, folded);
    Ok(FaceCoordinate {
        face: face_index,
        x: rho * raw_az.sin(),
        y: rho * raw_az.cos(),
    })
}

/// Invert a face-plane coordinate back to a spherical point (radians).
pub fn inverse(coord: FaceCoordinate) -> Result<(f64, f64), ProjError> {
    let face = face_by_index(coord.face)?;
    let rho = (coord.x * coord.x + coord.y * coord.y).sqrt();
    let raw_az = coord.x.atan2(coord.y);
    let folded = fold_to_nearest_vertex(raw_az);
    let z = z_for_radius(rho, folded).min(G);
    let az = raw_az + face.orientation;

    let lat = (face.lat.sin() * z.cos() + face.lat.cos() * z.sin() * az.cos())
        .clamp(-1.0, 1.0)
        .asin();
    let lon = face.lon
        + (az.sin() * z.sin() * face.lat.cos()).atan2(z.cos() - face.lat.sin() * lat.sin());
    Ok((lat, lon))
}

/// Area of a spherical cap of angular radius `angle`, relative to the
/// area of one icosahedron face (a twentieth of the whole sphere),
/// clamped to `1.0` once the cap grows past a single face.
pub fn accuracy_angle_to_relative_area(angle: f64) -> f64 {
    let cap_area = 2.0 * PI * (1.0 - angle.cos());
    let face_area = 4.0 * PI / 20.0;
    (cap_area / face_area).min(1.0)
}

/// Invert [`accuracy_angle_to_relative_area`]. Lossy at the clamped
/// boundary: a relative area of `1.0` always inverts to the angle that
/// exactly covers one face, never the (possibly larger) angle that was
/// originally clamped down to it.
pub fn relative_area_to_accuracy_angle(relative_area: f64) -> f64 {
    let clamped = relative_area.clamp(0.0, 1.0);
    let face_area = 4.0 * PI / 20.0;
    let cap_area = clamped * face_area;
    (1.0 - cap_area / (2.0 * PI)).clamp(-1.0, 1.0).acos()
}
