// Copyright 2025 contributors to the GeoPlegmata project.
//
// Licenced under the Apache Licence, Version 2.0 <LICENCE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENCE-MIT or http://opensource.org/licenses/MIT>, at your
// discretion. This file may not be copied, modified, or distributed
// except according to those terms

//! The facade tying together point projection, cell indexing and
//! lineage queries across both tiling schemes.

use crate::error::DggsError;
use crate::grids::{isea3h, isea4t, DggrsKind};
use crate::models::{Cell, WgsPoint};
use dggs_grid::constants::WGS84;
use dggs_proj::snyder;
use std::f64::consts::PI;

/// Area of the whole authalic sphere, in square metres.
fn sphere_area_m2() -> f64 {
    4.0 * PI * WGS84::AUTHALIC_RADIUS * WGS84::AUTHALIC_RADIUS
}

/// Convert an accuracy expressed as an area in square metres into the
/// angular radius (radians) of the spherical cap of that area on the
/// authalic sphere, clamped to the whole sphere.
fn accuracy_area_to_angle(accuracy_m2: f64) -> f64 {
    let fraction = (accuracy_m2 / sphere_area_m2()).clamp(0.0, 1.0);
    (1.0 - 2.0 * fraction).clamp(-1.0, 1.0).acos()
}

/// Convert an angular accuracy radius (radians) back into an area in
/// square metres on the authalic sphere.
fn accuracy_angle_to_area(angle: f64) -> f64 {
    let cap_area = 2.0 * PI * (1.0 - angle.cos());
    cap_area * sphere_area_m2() / (4.0 * PI)
}

/// Project a point to a cell of the requested kind, at the resolution
/// implied by the point's accuracy (an area in square metres,
/// converted to a relative fraction of a face's area; `0` means the
/// whole face).
pub fn point_to_cell(point: &WgsPoint, kind: DggrsKind) -> Result<Cell, DggsError> {
    let authalic_lat = match dggs_grid::geodetic_to_authalic(point.lat.to_radians()) {
        Ok(lat) => lat,
        Err(err) => {
            tracing::error!(%point, ?kind, %err, "failed to convert latitude to the authalic sphere");
            return Err(err.into());
        }
    };
    let lon = point.lon.to_radians();
    let face_coord = match snyder::forward(authalic_lat, lon) {
        Ok(coord) => coord,
        Err(err) => {
            tracing::error!(%point, ?kind, %err, "failed to project point onto an icosahedron face");
            return Err(err.into());
        }
    };
    let accuracy_angle = accuracy_area_to_angle(point.accuracy);
    let relative_area = snyder::accuracy_angle_to_relative_area(accuracy_angle);

    let cell = match kind {
        DggrsKind::Isea4t => {
            let resolution = isea4t::resolution_for_accuracy(relative_area);
            isea4t::locate(face_coord.face, face_coord.x, face_coord.y, resolution)
        }
        DggrsKind::Isea3h => {
            let resolution = isea3h::resolution_for_accuracy(relative_area);
            isea3h::locate(face_coord.face, face_coord.x, face_coord.y, resolution)
        }
    };
    if let Err(ref err) = cell {
        tracing::warn!(%point, ?kind, %err, "could not index point to a cell");
    }
    cell
}

/// Build a cell directly from a face index and resolution path,
/// bypassing point projection. Useful for tests and bounding-cell
/// checks where the digit path or offset is already known.
pub fn create_cell(kind: DggrsKind, face: u8, path: &[i64]) -> Result<Cell, DggsError> {
    match kind {
        DggrsKind::Isea4t => {
            let digits = path
                .iter()
                .map(|&d| u8::try_from(d).map_err(|_| DggsError::RangeOverflow {
                    detail: format!("Cell index, '{d}', exceeds maximum (maximum = {})", isea4t::MAX_CELL_INDEX),
                }))
                .collect::<Result<Vec<_>, _>>()?;
            Cell::hierarchical(face, digits)
        }
        DggrsKind::Isea3h => {
            if path.len() != 3 {
                return Err(DggsError::BadInput {
                    detail: "an ISEA3H cell needs [resolution, row, col]".to_string(),
                });
            }
            let resolution = u8::try_from(path[0]).map_err(|_| DggsError::BadInput {
                detail: format!("resolution, '{}', is out of range", path[0]),
            })?;
            let (x, y) = isea3h::cell_centre(path[1], path[2], resolution);
            Cell::offset(face, resolution, path[1], path[2], x, y)
        }
    }
}

/// The centre point of a cell, found by inverting its planar centroid
/// back to the authalic sphere.
pub fn cell_to_point(cell: &Cell) -> Result<WgsPoint, DggsError> {
    let (face, x, y) = match cell {
        Cell::Hierarchical { face, digits, .. } => {
            let (x, y) = isea4t::cell_centre(digits)?;
            (*face, x, y)
        }
        Cell::Offset { face, resolution, row, col, .. } => {
            let (x, y) = isea3h::cell_centre(*row, *col, *resolution);
            (*face, x, y)
        }
    };
    let (authalic_lat, lon) = snyder::inverse(snyder::FaceCoordinate { face, x, y })?;
    let lat = dggs_grid::authalic_to_geodetic(authalic_lat)?;
    let relative_area = match cell {
        Cell::Hierarchical { digits, .. } => isea4t::accuracy_for_resolution(digits.len()),
        Cell::Offset { resolution, .. } => isea3h::accuracy_for_resolution(*resolution),
    };
    let accuracy_angle = snyder::relative_area_to_accuracy_angle(relative_area);
    let accuracy = accuracy_angle_to_area(accuracy_angle);
    WgsPoint::new(lat.to_degrees(), lon.to_degrees(), accuracy)
}

pub fn parents(cell: &Cell) -> Result<Vec<Cell>, DggsError> {
    match cell {
        Cell::Hierarchical { .. } => Ok(vec![isea4t::parent(cell)?]),
        Cell::Offset { .. } => isea3h::parents(cell),
    }
}

pub fn children(cell: &Cell) -> Result<Vec<Cell>, DggsError> {
    match cell {
        Cell::Hierarchical { .. } => isea4t::children(cell),
        Cell::Offset { .. } => isea3h::children(cell),
    }
}

pub fn cell_vertices(cell: &Cell) -> Result<Vec<WgsPoint>, DggsError> {
    match cell {
        Cell::Hierarchical { .. } => isea4t::vertices(cell),
        Cell::Offset { .. } => isea3h::vertices(cell),
    }
}

/// The smallest-resolution cell that contains every one of `cells`,
/// all of which must sit on the same face and be of the same kind.
///
/// Hierarchical cells nest by construction, so this is their longest
/// common digit prefix. Offset cells have no such path; the aperture-3
/// lattice rotates between resolutions, so an offset cell's ancestors
/// are found by re-locating its planar centre at coarser and coarser
/// resolutions until the inputs stop agreeing on a single cell.
pub fn bounding_cell(cells: &[Cell]) -> Result<Cell, DggsError> {
    let Some(first) = cells.first() else {
        return Err(DggsError::BadInput {
            detail: "bounding_cell requires at least one cell".to_string(),
        });
    };
    let face = first.face();
    if cells.iter().any(|c| c.face() != face) {
        return Err(DggsError::BadInput {
            detail: "all cells must share the same face to have a bounding cell".to_string(),
        });
    }

    match first {
        Cell::Hierarchical { .. } => {
            let digit_paths = cells
                .iter()
                .map(|c| c.as_hierarchical().map(|(_, digits)| digits))
                .collect::<Result<Vec<_>, _>>()?;
            let shortest = digit_paths.iter().map(|d| d.len()).min().unwrap_or(0);
            let mut common = 0;
            while common < shortest
                && digit_paths.iter().all(|d| d[common] == digit_paths[0][common])
            {
                common += 1;
            }
            Cell::hierarchical(face, digit_paths[0][..common].to_vec())
        }
        Cell::Offset { .. } => {
            let offsets = cells
                .iter()
                .map(|c| c.as_offset())
                .collect::<Result<Vec<_>, _>>()?;
            let min_resolution = offsets.iter().map(|(_, resolution, ..)| *resolution).min().unwrap_or(0);
            let centres: Vec<(f64, f64)> = offsets
                .iter()
                .map(|(_, resolution, row, col)| isea3h::cell_centre(*row, *col, *resolution))
                .collect();

            let mut bounding = isea3h::locate(face, centres[0].0, centres[0].1, 0)?;
            for resolution in 1..=min_resolution {
                let located = centres
                    .iter()
                    .map(|(x, y)| isea3h::locate(face, *x, *y, resolution))
                    .collect::<Result<Vec<_>, _>>()?;
                if located.windows(2).all(|pair| pair[0] == pair[1]) {
                    bounding = located.into_iter().next().unwrap();
                } else {
                    break;
                }
            }
            Ok(bounding)
        }
    }
}

/// The cells sharing a parent with `cell`, excluding `cell` itself.
///
/// Walks each parent's children in order, skipping the input cell and
/// any child already collected, so the result preserves first-seen
/// order rather than being sorted.
pub fn siblings(cell: &Cell) -> Result<Vec<Cell>, DggsError> {
    let cell_id = cell.to_string();
    let mut seen = vec![cell_id];
    let mut result = Vec::new();

    for parent in parents(cell)? {
        for child in children(&parent)? {
            let id = child.to_string();
            if seen.contains(&id) {
                continue;
            }
            seen.push(id);
            result.push(child);
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_to_cell_round_trips_through_cell_to_point() {
        let point = WgsPoint::new(1.234, 2.345, 0.01).unwrap();
        let cell = point_to_cell(&point, DggrsKind::Isea4t).unwrap();
        let back = cell_to_point(&cell).unwrap();
        assert!((point.lat - back.lat).abs() < 0.5);
        assert!((point.lon - back.lon).abs() < 0.5);
    }

    #[test]
    fn create_cell_rejects_hierarchical_digit_above_max() {
        let err = create_cell(DggrsKind::Isea4t, 0, &[4]).unwrap_err();
        assert_eq!(
            err,
            DggsError::RangeOverflow {
                detail: "Cell index, '4', exceeds maximum (maximum = 3)".to_string()
            }
        );
    }

    #[test]
    fn siblings_excludes_the_input_cell() {
        let cell = Cell::hierarchical(0, vec![2]).unwrap();
        let sibs = siblings(&cell).unwrap();
        assert!(!sibs.contains(&cell));
        assert_eq!(sibs.len(), 3);
    }

    #[test]
    fn bounding_cell_of_hierarchical_cells_is_their_longest_common_digit_prefix() {
        let cells = vec![
            crate::identifiers::parse_identifier("07231").unwrap(),
            crate::identifiers::parse_identifier("0723102").unwrap(),
            crate::identifiers::parse_identifier("07230130").unwrap(),
        ];
        let bound = bounding_cell(&cells).unwrap();
        assert_eq!(bound.to_string(), "0723");
    }

    #[test]
    fn bounding_cell_of_offset_cells_ascends_to_their_common_coarser_ancestor() {
        let cells = vec![
            crate::identifiers::parse_identifier("070400,0").unwrap(),
            crate::identifiers::parse_identifier("070400,1").unwrap(),
            crate::identifiers::parse_identifier("070400,-1").unwrap(),
        ];
        let bound = bounding_cell(&cells).unwrap();
        assert_eq!(bound.to_string(), "07020,0");
    }

    #[test]
    fn bounding_cell_rejects_mismatched_faces() {
        let cells = vec![
            Cell::hierarchical(0, vec![1]).unwrap(),
            Cell::hierarchical(1, vec![1]).unwrap(),
        ];
        assert!(bounding_cell(&cells).is_err());
    }
}
