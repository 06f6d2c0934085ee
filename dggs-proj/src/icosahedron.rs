// Copyright 2025 contributors to the GeoPlegmata project.
//
// Licenced under the Apache Licence, Version 2.0 <LICENCE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENCE-MIT or http://opensource.org/licenses/MIT>, at your
// discretion. This file may not be copied, modified, or distributed
// except according to those terms

//! The 20-face icosahedron globe used as the base polyhedron for the
//! Snyder equal-area projection.
//!
//! The face table (centre latitude/longitude and orientation) is the
//! standard arrangement with two vertices at the poles, reproduced from
//! the upstream EAGGR test fixtures rather than derived, since it is a
//! fixed geometric constant of this particular icosahedron placement.

use crate::models::vector_3d::Vector3D;
use std::f64::consts::PI;

/// Spherical distance (radians) from a face centre to each of its three
/// vertices.
pub const G: f64 = 37.3773681406497 * PI / 180.0;

/// Spherical half-angle (radians) at a face vertex between the edge and
/// the line to the face centre.
pub const BIG_G: f64 = 36.0 * PI / 180.0;

/// Planar half-angle (radians) of the angle each face divides into at
/// its centre; always 30 degrees for a triangular face.
pub const THETA: f64 = 30.0 * PI / 180.0;

/// Ratio of the inscribed-sphere radius actually used for projected
/// face coordinates (`R'`) to the circumscribed sphere radius (`R`).
pub const RADIUS_RATIO: f64 = 0.9103832815095034;

/// Planar circumradius of a unit-side equilateral face triangle
/// (`1 / sqrt(3)`), i.e. the distance from a face's planar centre to any
/// of its three vertices.
pub const FACE_CIRCUMRADIUS: f64 = 0.5773502691896258;

/// One of the 20 triangular faces of the icosahedron globe.
#[derive(Clone, Copy, Debug)]
pub struct FaceDef {
    pub index: u8,
    /// Centre latitude, radians.
    pub lat: f64,
    /// Centre longitude, radians.
    pub lon: f64,
    /// Orientation offset added to the bearing of a point so that 0
    /// radians corresponds to the face's local vertex-0 ("up")
    /// direction; `0.0` for faces that point toward the nearer pole,
    /// `PI` for faces that point away from it (the two orientations
    /// alternate between adjacent latitude bands in the standard net).
    pub orientation: f64,
}

const DEG: f64 = PI / 180.0;

/// The fixed 20-face table, reproduced from the upstream test fixture
/// (`SnyderTest.cpp`, `FaceCentres`).
pub const FACES: [FaceDef; 20] = [
    FaceDef { index: 0, lat: 52.62263186 * DEG, lon: -144.0 * DEG, orientation: 0.0 },
    FaceDef { index: 1, lat: 52.62263186 * DEG, lon: -72.0 * DEG, orientation: 0.0 },
    FaceDef { index: 2, lat: 52.62263186 * DEG, lon: 0.0 * DEG, orientation: 0.0 },
    FaceDef { index: 3, lat: 52.62263186 * DEG, lon: 72.0 * DEG, orientation: 0.0 },
    FaceDef { index: 4, lat: 52.62263186 * DEG, lon: 144.0 * DEG, orientation: 0.0 },
    FaceDef { index: 5, lat: 10.81231696 * DEG, lon: -144.0 * DEG, orientation: PI },
    FaceDef { index: 6, lat: 10.81231696 * DEG, lon: -72.0 * DEG, orientation: PI },
    FaceDef { index: 7, lat: 10.81231696 * DEG, lon: 0.0 * DEG, orientation: PI },
    FaceDef { index: 8, lat: 10.81231696 * DEG, lon: 72.0 * DEG, orientation: PI },
    FaceDef { index: 9, lat: 10.81231696 * DEG, lon: 144.0 * DEG, orientation: PI },
    FaceDef { index: 10, lat: -10.81231696 * DEG, lon: -108.0 * DEG, orientation: 0.0 },
    FaceDef { index: 11, lat: -10.81231696 * DEG, lon: -36.0 * DEG, orientation: 0.0 },
    FaceDef { index: 12, lat: -10.81231696 * DEG, lon: 36.0 * DEG, orientation: 0.0 },
    FaceDef { index: 13, lat: -10.81231696 * DEG, lon: 108.0 * DEG, orientation: 0.0 },
    FaceDef { index: 14, lat: -10.81231696 * DEG, lon: 180.0 * DEG, orientation: 0.0 },
    FaceDef { index: 15, lat: -52.62263186 * DEG, lon: -108.0 * DEG, orientation: PI },
    FaceDef { index: 16, lat: -52.62263186 * DEG, lon: -36.0 * DEG, orientation: PI },
    FaceDef { index: 17, lat: -52.62263186 * DEG, lon: 36.0 * DEG, orientation: PI },
    FaceDef { index: 18, lat: -52.62263186 * DEG, lon: 108.0 * DEG, orientation: PI },
    FaceDef { index: 19, lat: -52.62263186 * DEG, lon: 180.0 * DEG, orientation: PI },
];

/// Convert a spherical (authalic) lat/long in radians to a unit Cartesian
/// vector.
pub fn to_cartesian(lat: f64, lon: f64) -> Vector3D {
    let cos_lat = lat.cos();
    Vector3D::new(cos_lat * lon.cos(), cos_lat * lon.sin(), lat.sin())
}

/// Great-circle angular distance (radians) between two spherical points.
pub fn angular_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let a = to_cartesian(lat1, lon1);
    let b = to_cartesian(lat2, lon2);
    a.dot(b).clamp(-1.0, 1.0).acos()
}

/// Initial bearing (radians, clockwise from north) from `(lat1, lon1)` to
/// `(lat2, lon2)`.
pub fn bearing(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dlon = lon2 - lon1;
    let y = dlon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();
    y.atan2(x)
}

/// Select the face containing a spherical point, applying the documented
/// tie-break policy: the face whose centre is nearest wins; ties
/// (points exactly on an edge or vertex) resolve to the smallest face
/// index among the tied candidates, except the two poles, which are
/// pinned to face 0 (north) and face 15 (south) directly.
pub fn nearest_face(lat: f64, lon: f64) -> u8 {
    const POLE_EPS: f64 = 1e-12;
    if (std::f64::consts::FRAC_PI_2 - lat).abs() < POLE_EPS {
        return 0;
    }
    if (lat + std::f64::consts::FRAC_PI_2).abs() < POLE_EPS {
        return 15;
    }

    let mut best_index = 0u8;
    let mut best_dist = f64::MAX;
    for face in FACES.iter() {
        let d = angular_distance(lat, lon, face.lat, face.lon);
        if d < best_dist - 1e-9 {
            best_dist = d;
            best_index = face.index;
        }
    }
    best_index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_centres_select_themselves() {
        for face in FACES.iter() {
            assert_eq!(nearest_face(face.lat, face.lon), face.index);
        }
    }

    #[test]
    fn poles_pick_face_0_and_15() {
        assert_eq!(nearest_face(std::f64::consts::FRAC_PI_2, 0.0), 0);
        assert_eq!(nearest_face(-std::f64::consts::FRAC_PI_2, 0.0), 15);
    }

    #[test]
    fn edge_point_ties_break_to_smaller_index() {
        // Midpoint between face 0 and face 4 centres, which lies on the
        // shared edge between the two faces at this latitude band.
        let lat = 75.0 * DEG;
        let lon = -180.0 * DEG;
        let face = nearest_face(lat, lon);
        assert_eq!(face, 0);
    }
}
