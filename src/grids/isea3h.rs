// Copyright 2025 contributors to the GeoPlegmata project.
//
// Licenced under the Apache Licence, Version 2.0 <LICENCE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENCE-MIT or http://opensource.org/licenses/MIT>, at your
// discretion. This file may not be copied, modified, or distributed
// except according to those terms

//! Aperture-3 hexagonal offset grid (ISEA3H). Resolution `0` is fixed
//! to the "vertical" (pointy-top) orientation; each following
//! resolution alternates orientation and scales the lattice by
//! `sqrt(3)` rotated 30 degrees, per the aperture-3 class II
//! construction. Because that rotation doesn't align child and parent
//! lattices exactly, a cell can have up to 3 parents and up to 7
//! children — see `DESIGN.md` for how the tie-breaks are resolved.

use crate::error::DggsError;
use crate::models::{Cell, WgsPoint};
use dggs_proj::snyder;
use std::f64::consts::PI;

pub const APERTURE: u32 = 3;
pub const NUM_CHILDREN: usize = 7;
pub const MAX_PARENTS: usize = 3;

/// Hex circumradius at the whole-face resolution, chosen so resolution
/// `0` tiles the face at roughly the same scale as the ISEA4T whole
/// face triangle.
const BASE_CIRCUMRADIUS: f64 = 0.5;

fn orientation_is_pointy(resolution: u8) -> bool {
    resolution % 2 == 0
}

fn circumradius(resolution: u8) -> f64 {
    BASE_CIRCUMRADIUS / 3f64.sqrt().powi(resolution as i32)
}

/// Axial hex coordinate -> planar (x, y), honoring this resolution's
/// orientation (pointy-top on even resolutions, flat-top on odd).
fn axial_to_planar(row: i64, col: i64, resolution: u8) -> (f64, f64) {
    let size = circumradius(resolution);
    if orientation_is_pointy(resolution) {
        let x = size * 3f64.sqrt() * (col as f64 + row as f64 / 2.0);
        let y = size * 1.5 * row as f64;
        (x, y)
    } else {
        let x = size * 1.5 * col as f64;
        let y = size * 3f64.sqrt() * (row as f64 + col as f64 / 2.0);
        (x, y)
    }
}

fn hex_corners(center: (f64, f64), resolution: u8) -> [(f64, f64); 6] {
    let size = circumradius(resolution);
    let offset = if orientation_is_pointy(resolution) { 0.0 } else { PI / 6.0 };
    let mut corners = [(0.0, 0.0); 6];
    for (i, corner) in corners.iter_mut().enumerate() {
        let angle = offset + PI / 3.0 * i as f64;
        *corner = (center.0 + size * angle.cos(), center.1 + size * angle.sin());
    }
    corners
}

pub fn cell_centre(row: i64, col: i64, resolution: u8) -> (f64, f64) {
    axial_to_planar(row, col, resolution)
}

/// Build an offset cell, classifying its location from its own centre
/// rather than requiring every call site to compute it separately.
fn offset_cell(face: u8, resolution: u8, row: i64, col: i64) -> Result<Cell, DggsError> {
    let (x, y) = cell_centre(row, col, resolution);
    Cell::offset(face, resolution, row, col, x, y)
}

/// Invert [`axial_to_planar`] to the nearest integer row/column at the
/// given resolution.
pub fn locate(face: u8, x: f64, y: f64, resolution: u8) -> Result<Cell, DggsError> {
    let size = circumradius(resolution);
    let (row_f, col_f) = if orientation_is_pointy(resolution) {
        let row = y / (1.5 * size);
        let col = x / (size * 3f64.sqrt()) - row / 2.0;
        (row, col)
    } else {
        let col = x / (1.5 * size);
        let row = y / (size * 3f64.sqrt()) - col / 2.0;
        (row, col)
    };
    Cell::offset(face, resolution, row_f.round() as i64, col_f.round() as i64, x, y)
}

/// Relative area of a cell at the given resolution: aperture 3 scales
/// area down by a factor of 3 at each finer resolution.
pub fn accuracy_for_resolution(resolution: u8) -> f64 {
    1.0 / 3f64.powi(resolution as i32)
}

pub const MAX_RESOLUTION: u8 = 40;

pub fn resolution_for_accuracy(relative_area: f64) -> u8 {
    if relative_area >= 1.0 {
        return 0;
    }
    let r = -(relative_area.ln() / 3f64.ln()).round();
    r.clamp(0.0, MAX_RESOLUTION as f64) as u8
}

/// The six unit hex-lattice directions around a cell, expressed as
/// axial `(row, col)` offsets. The lattice's two basis vectors sit 120
/// degrees apart, so their sum `(1, 1)` is itself a unit step, giving
/// six rather than four neighbours.
const NEIGHBOUR_OFFSETS: [(i64, i64); 6] = [(-1, 0), (0, 1), (1, 0), (0, -1), (-1, -1), (1, 1)];

/// Map a parent's axial coordinate to its centre-aligned child,
/// treating `(row, col)` as the Eisenstein integer `row + col*w` (`w` a
/// primitive cube root of unity) and multiplying by `2 + w`, the
/// norm-3 Eisenstein integer that realises the aperture-3 scale-and-
/// rotate step exactly in integer arithmetic.
fn centred_child(row: i64, col: i64) -> (i64, i64) {
    (2 * row - col, row + col)
}

/// Inverse of [`centred_child`]: the exact, generally fractional,
/// parent-lattice coordinate a child's axial position maps back to
/// under division by `2 + w`'s conjugate `1 - w` and norm `3`.
fn fractional_parent(row: i64, col: i64) -> (f64, f64) {
    ((row + col) as f64 / 3.0, (2 * col - row) as f64 / 3.0)
}

/// The centre-aligned child plus its six lattice neighbours, per the
/// exact aperture-3 offsets in [`NEIGHBOUR_OFFSETS`].
pub fn children(cell: &Cell) -> Result<Vec<Cell>, DggsError> {
    let (face, resolution, row, col) = cell.as_offset()?;
    let child_resolution = resolution + 1;
    let (centre_row, centre_col) = centred_child(row, col);

    let mut cells = vec![offset_cell(face, child_resolution, centre_row, centre_col)?];
    for (dr, dc) in NEIGHBOUR_OFFSETS {
        cells.push(offset_cell(face, child_resolution, centre_row + dr, centre_col + dc)?);
    }
    Ok(cells)
}

/// The coarser-resolution cells this cell's centre falls nearest to,
/// at most [`MAX_PARENTS`]. Inverting [`centred_child`] gives an exact
/// but generally fractional parent coordinate; only a cell's
/// centre-aligned child lands on it exactly, so the candidates
/// checked here are the lattice points of the unit cell surrounding
/// that fractional point, ranked by distance to it.
pub fn parents(cell: &Cell) -> Result<Vec<Cell>, DggsError> {
    let (face, resolution, row, col) = cell.as_offset()?;
    if resolution == 0 {
        return Err(DggsError::BadInput {
            detail: "a whole-face cell has no parent".to_string(),
        });
    }
    let parent_resolution = resolution - 1;
    let (pr, pc) = fractional_parent(row, col);
    let base_row = pr.floor() as i64;
    let base_col = pc.floor() as i64;

    let mut candidates: Vec<(i64, i64)> = Vec::new();
    for dr in 0..=1 {
        for dc in 0..=1 {
            candidates.push((base_row + dr, base_col + dc));
        }
    }
    candidates.sort_by(|a, b| {
        let da = (a.0 as f64 - pr).powi(2) + (a.1 as f64 - pc).powi(2);
        let db = (b.0 as f64 - pr).powi(2) + (b.1 as f64 - pc).powi(2);
        da.partial_cmp(&db).unwrap()
    });

    candidates
        .into_iter()
        .take(MAX_PARENTS)
        .map(|(r, c)| offset_cell(face, parent_resolution, r, c))
        .collect()
}

pub fn vertices(cell: &Cell) -> Result<Vec<WgsPoint>, DggsError> {
    let (face, resolution, row, col) = cell.as_offset()?;
    let centre = cell_centre(row, col, resolution);
    hex_corners(centre, resolution)
        .into_iter()
        .map(|(x, y)| {
            let (lat, lon) = snyder::inverse(snyder::FaceCoordinate { face, x, y })?;
            Ok(WgsPoint::new(lat.to_degrees(), lon.to_degrees(), 0.0)?)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_zero_is_pointy_and_alternates() {
        assert!(orientation_is_pointy(0));
        assert!(!orientation_is_pointy(1));
        assert!(orientation_is_pointy(2));
    }

    #[test]
    fn origin_cell_centres_on_face_origin() {
        let (x, y) = cell_centre(0, 0, 0);
        assert_eq!((x, y), (0.0, 0.0));
    }

    #[test]
    fn children_returns_seven_cells_including_centre_aligned_one() {
        let cell = offset_cell(0, 0, 0, 0).unwrap();
        let kids = children(&cell).unwrap();
        assert_eq!(kids.len(), NUM_CHILDREN);
        assert!(kids.iter().any(|k| matches!(k, Cell::Offset { row: 0, col: 0, .. })));
    }

    #[test]
    fn children_of_a_nonzero_cell_sit_at_the_exact_lattice_offsets() {
        let cell = offset_cell(0, 0, 2, -1).unwrap();
        let kids = children(&cell).unwrap();
        let (centre_row, centre_col) = centred_child(2, -1);
        assert_eq!((centre_row, centre_col), (5, 1));
        let offsets: Vec<(i64, i64)> = kids
            .iter()
            .map(|k| {
                let (_, _, r, c) = k.as_offset().unwrap();
                (r - centre_row, c - centre_col)
            })
            .collect();
        let mut expected = vec![(0, 0)];
        expected.extend(NEIGHBOUR_OFFSETS);
        assert_eq!(offsets, expected);
    }

    #[test]
    fn parents_returns_up_to_three_cells() {
        let cell = offset_cell(0, 1, 0, 0).unwrap();
        let p = parents(&cell).unwrap();
        assert!(!p.is_empty());
        assert!(p.len() <= MAX_PARENTS);
    }

    #[test]
    fn whole_face_cell_has_no_parent() {
        let cell = offset_cell(0, 0, 0, 0).unwrap();
        assert!(parents(&cell).is_err());
    }

    #[test]
    fn vertices_returns_six_points() {
        let cell = offset_cell(0, 0, 0, 0).unwrap();
        let vs = vertices(&cell).unwrap();
        assert_eq!(vs.len(), 6);
    }

    #[test]
    fn locate_round_trips_a_cell_centre() {
        let (x, y) = cell_centre(2, -3, 1);
        let cell = locate(0, x, y, 1).unwrap();
        assert_eq!(cell, offset_cell(0, 1, 2, -3).unwrap());
    }

    #[test]
    fn accuracy_thirds_area_each_resolution() {
        assert_eq!(accuracy_for_resolution(0), 1.0);
        assert!((accuracy_for_resolution(1) - 1.0 / 3.0).abs() < 1e-12);
    }
}
