// Copyright 2025 contributors to the GeoPlegmata project.
//
// Licenced under the Apache Licence, Version 2.0 <LICENCE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENCE-MIT or http://opensource.org/licenses/MIT>, at your
// discretion. This file may not be copied, modified, or distributed
// except according to those terms

//! The two cell identifier shapes: the aperture-4 hierarchical digit
//! string (ISEA4T) and the aperture-3 offset row/column pair (ISEA3H).

use crate::error::DggsError;
use dggs_proj::triangular_face::{self, CellLocation};
use std::fmt;

/// Whether a cell's triangle sits in its face's default orientation or
/// has been mirrored about its centroid.
///
/// For a hierarchical cell this flips under an odd number of central
/// (digit `0`) partitions; for an offset cell it alternates with the
/// hex lattice's pointy/flat-top alternation every resolution level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Standard,
    Rotated,
}

fn hierarchical_orientation(digits: &[u8]) -> Orientation {
    let flips = digits.iter().filter(|&&d| d == 0).count();
    if flips % 2 == 1 {
        Orientation::Rotated
    } else {
        Orientation::Standard
    }
}

fn offset_orientation(resolution: u8) -> Orientation {
    if resolution % 2 == 0 {
        Orientation::Standard
    } else {
        Orientation::Rotated
    }
}

/// Maximum number of digits after the face index in an ISEA4T
/// identifier, matching the upstream `HierarchicalCell` resolution cap.
pub const MAX_HIERARCHICAL_RESOLUTION: usize = 40;

/// One step of an ISEA4T partition walk: which of the four
/// sub-triangles a child occupies within its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellPartition {
    Center = 0,
    Top = 1,
    BottomLeft = 2,
    BottomRight = 3,
}

impl CellPartition {
    pub fn from_digit(digit: u8) -> Result<Self, DggsError> {
        match digit {
            0 => Ok(CellPartition::Center),
            1 => Ok(CellPartition::Top),
            2 => Ok(CellPartition::BottomLeft),
            3 => Ok(CellPartition::BottomRight),
            other => Err(DggsError::RangeOverflow {
                detail: format!(
                    "Cell index, '{other}', exceeds maximum (maximum = 3)"
                ),
            }),
        }
    }

    pub fn digit(self) -> u8 {
        self as u8
    }
}

/// A DGGS cell, identified either by an ISEA4T digit path or an ISEA3H
/// offset coordinate. Which variant an operation accepts is part of
/// its contract; passing the wrong one is a [`DggsError::CellKind`].
///
/// Both varieties carry the common capabilities `face`, `resolution`,
/// `orientation` and `location`, reachable through the accessor
/// methods below rather than as bare fields, since an offset cell's
/// location depends on its planar position and must be supplied by
/// the caller that already knows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Hierarchical {
        face: u8,
        digits: Vec<u8>,
        orientation: Orientation,
    },
    Offset {
        face: u8,
        resolution: u8,
        row: i64,
        col: i64,
        orientation: Orientation,
        location: CellLocation,
    },
}

impl Cell {
    pub fn hierarchical(face: u8, digits: Vec<u8>) -> Result<Self, DggsError> {
        if face > 19 {
            return Err(DggsError::RangeOverflow {
                detail: format!("Face index, '{face}', exceeds maximum (maximum = 19)"),
            });
        }
        if digits.len() > MAX_HIERARCHICAL_RESOLUTION {
            return Err(DggsError::InvalidIdentifier {
                detail: format!(
                    "Cell ID exceeds maximum length (by {} characters)",
                    digits.len() - MAX_HIERARCHICAL_RESOLUTION
                ),
            });
        }
        for &d in &digits {
            CellPartition::from_digit(d)?;
        }
        let orientation = hierarchical_orientation(&digits);
        Ok(Cell::Hierarchical { face, digits, orientation })
    }

    /// Build an offset cell, classifying its location from the planar
    /// face coordinate `(x, y)` of its centre.
    pub fn offset(face: u8, resolution: u8, row: i64, col: i64, x: f64, y: f64) -> Result<Self, DggsError> {
        if face > 19 {
            return Err(DggsError::RangeOverflow {
                detail: format!("Face index, '{face}', exceeds maximum (maximum = 19)"),
            });
        }
        Ok(Cell::Offset {
            face,
            resolution,
            row,
            col,
            orientation: offset_orientation(resolution),
            location: triangular_face::classify(x, y),
        })
    }

    pub fn face(&self) -> u8 {
        match self {
            Cell::Hierarchical { face, .. } => *face,
            Cell::Offset { face, .. } => *face,
        }
    }

    pub fn resolution(&self) -> usize {
        match self {
            Cell::Hierarchical { digits, .. } => digits.len(),
            Cell::Offset { resolution, .. } => *resolution as usize,
        }
    }

    pub fn orientation(&self) -> Orientation {
        match self {
            Cell::Hierarchical { orientation, .. } => *orientation,
            Cell::Offset { orientation, .. } => *orientation,
        }
    }

    /// Hierarchical cells always sit in the interior of their face;
    /// offset cells carry the location classified at construction.
    pub fn location(&self) -> CellLocation {
        match self {
            Cell::Hierarchical { .. } => CellLocation::Face,
            Cell::Offset { location, .. } => *location,
        }
    }

    pub fn as_hierarchical(&self) -> Result<(u8, &[u8]), DggsError> {
        match self {
            Cell::Hierarchical { face, digits, .. } => Ok((*face, digits)),
            Cell::Offset { .. } => Err(DggsError::CellKind {
                detail: "expected an ISEA4T hierarchical cell, found an ISEA3H offset cell"
                    .to_string(),
            }),
        }
    }

    pub fn as_offset(&self) -> Result<(u8, u8, i64, i64), DggsError> {
        match self {
            Cell::Offset { face, resolution, row, col, .. } => Ok((*face, *resolution, *row, *col)),
            Cell::Hierarchical { .. } => Err(DggsError::CellKind {
                detail: "expected an ISEA3H offset cell, found an ISEA4T hierarchical cell"
                    .to_string(),
            }),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Hierarchical { face, digits, .. } => {
                write!(f, "{face:02}")?;
                for d in digits {
                    write!(f, "{d}")?;
                }
                Ok(())
            }
            Cell::Offset { face, resolution, row, col, .. } => {
                write!(f, "{face:02}{resolution:02}{row},{col}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hierarchical_display_zero_pads_face() {
        let cell = Cell::hierarchical(7, vec![2, 3, 1]).unwrap();
        assert_eq!(cell.to_string(), "07231");
    }

    #[test]
    fn hierarchical_rejects_digit_above_three() {
        let err = Cell::hierarchical(0, vec![4]).unwrap_err();
        assert_eq!(
            err,
            DggsError::RangeOverflow {
                detail: "Cell index, '4', exceeds maximum (maximum = 3)".to_string()
            }
        );
    }

    #[test]
    fn hierarchical_rejects_identifiers_past_resolution_cap() {
        let digits = vec![0u8; MAX_HIERARCHICAL_RESOLUTION + 3];
        let err = Cell::hierarchical(0, digits).unwrap_err();
        assert_eq!(
            err,
            DggsError::InvalidIdentifier {
                detail: "Cell ID exceeds maximum length (by 3 characters)".to_string()
            }
        );
    }

    #[test]
    fn offset_display_uses_comma_separated_signed_coordinates() {
        let cell = Cell::offset(7, 28, -549628, -522499, 0.0, 0.0).unwrap();
        assert_eq!(cell.to_string(), "0728-549628,-522499");
    }

    #[test]
    fn offset_classifies_location_from_its_planar_coordinate() {
        let centre = Cell::offset(0, 0, 0, 0, 0.0, 0.0).unwrap();
        assert_eq!(centre.location(), CellLocation::Face);

        let (vx, vy) = triangular_face::FACE_VERTICES[0];
        let at_vertex = Cell::offset(0, 0, 0, 0, vx, vy).unwrap();
        assert_eq!(at_vertex.location(), CellLocation::Vertex);
    }

    #[test]
    fn hierarchical_location_is_always_face() {
        let cell = Cell::hierarchical(0, vec![1, 2]).unwrap();
        assert_eq!(cell.location(), CellLocation::Face);
    }

    #[test]
    fn hierarchical_orientation_flips_on_an_odd_number_of_central_digits() {
        assert_eq!(Cell::hierarchical(0, vec![]).unwrap().orientation(), Orientation::Standard);
        assert_eq!(Cell::hierarchical(0, vec![0]).unwrap().orientation(), Orientation::Rotated);
        assert_eq!(Cell::hierarchical(0, vec![0, 0]).unwrap().orientation(), Orientation::Standard);
        assert_eq!(Cell::hierarchical(0, vec![1]).unwrap().orientation(), Orientation::Standard);
    }

    #[test]
    fn offset_orientation_alternates_with_resolution() {
        assert_eq!(Cell::offset(0, 0, 0, 0, 0.0, 0.0).unwrap().orientation(), Orientation::Standard);
        assert_eq!(Cell::offset(0, 1, 0, 0, 0.0, 0.0).unwrap().orientation(), Orientation::Rotated);
    }

    #[test]
    fn as_hierarchical_rejects_offset_cell() {
        let cell = Cell::offset(0, 0, 0, 0, 0.0, 0.0).unwrap();
        assert!(cell.as_hierarchical().is_err());
    }
}
