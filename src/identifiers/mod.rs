// Copyright 2025 contributors to the GeoPlegmata project.
//
// Licenced under the Apache Licence, Version 2.0 <LICENCE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENCE-MIT or http://opensource.org/licenses/MIT>, at your
// discretion. This file may not be copied, modified, or distributed
// except according to those terms

//! Parsing and formatting of the two cell identifier grammars.
//!
//! ISEA4T: `^\d{2}[0-3]{0,40}$` — a two-digit face index followed by up
//! to 40 base-4 partition digits.
//!
//! ISEA3H: `^\d{2}\d{2}-?\d+,-?\d+$` — a two-digit face index, a
//! two-digit resolution, then a signed row and column separated by a
//! comma.
//!
//! Formatting is handled by `Display` on [`Cell`]; this module only
//! parses identifier strings back into cells.

use crate::grids::isea3h;
use crate::models::Cell;
use crate::models::cell::MAX_HIERARCHICAL_RESOLUTION;
use crate::DggsError;

fn invalid(detail: impl Into<String>) -> DggsError {
    DggsError::InvalidIdentifier { detail: detail.into() }
}

fn parse_face(prefix: &str) -> Result<u8, DggsError> {
    if prefix.len() != 2 || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(format!(
            "Cell identifier, '{prefix}', must start with a two-digit face index"
        )));
    }
    prefix
        .parse::<u8>()
        .map_err(|_| invalid(format!("Face index, '{prefix}', is not a valid number")))
}

/// Parse an ISEA4T identifier: two-digit face index plus up to 40
/// digits in `0..=3`.
pub fn parse_hierarchical(id: &str) -> Result<Cell, DggsError> {
    if id.len() < 2 {
        return Err(invalid(format!(
            "Cell identifier, '{id}', is shorter than the two-digit face index"
        )));
    }
    let (face_str, digit_str) = id.split_at(2);
    let face = parse_face(face_str)?;

    if digit_str.len() > MAX_HIERARCHICAL_RESOLUTION {
        return Err(invalid(format!(
            "Cell ID exceeds maximum length (by {} characters)",
            digit_str.len() - MAX_HIERARCHICAL_RESOLUTION
        )));
    }

    let mut digits = Vec::with_capacity(digit_str.len());
    for c in digit_str.chars() {
        let Some(d) = c.to_digit(10) else {
            return Err(invalid(format!(
                "Cell identifier, '{id}', contains a non-digit partition character '{c}'"
            )));
        };
        if d > 3 {
            return Err(DggsError::RangeOverflow {
                detail: format!("Cell index, '{d}', exceeds maximum (maximum = 3)"),
            });
        }
        digits.push(d as u8);
    }
    Cell::hierarchical(face, digits)
}

/// Parse an ISEA3H identifier: two-digit face, two-digit resolution,
/// then `row,col` with each of `row`/`col` optionally signed.
pub fn parse_offset(id: &str) -> Result<Cell, DggsError> {
    if id.len() < 4 {
        return Err(invalid(format!(
            "Cell identifier, '{id}', is shorter than the four-digit face and resolution prefix"
        )));
    }
    let (face_str, rest) = id.split_at(2);
    let face = parse_face(face_str)?;
    let (resolution_str, coords) = rest.split_at(2);
    if resolution_str.len() != 2 || !resolution_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(format!(
            "Cell identifier, '{id}', must carry a two-digit resolution after the face index"
        )));
    }
    let resolution = resolution_str
        .parse::<u8>()
        .map_err(|_| invalid(format!("Resolution, '{resolution_str}', is not a valid number")))?;

    let Some((row_str, col_str)) = coords.split_once(',') else {
        return Err(invalid(format!(
            "Invalid offset coordinates, '{coords}', must be two integer values separated by ','"
        )));
    };
    let row = row_str.parse::<i64>().map_err(|_| {
        invalid(format!(
            "Invalid offset coordinates, '{coords}', must be two integer values separated by ','"
        ))
    })?;
    let col = col_str.parse::<i64>().map_err(|_| {
        invalid(format!(
            "Invalid offset coordinates, '{coords}', must be two integer values separated by ','"
        ))
    })?;
    let (x, y) = isea3h::cell_centre(row, col, resolution);
    Cell::offset(face, resolution, row, col, x, y)
}

/// Parse either grammar, dispatching on whether the identifier carries
/// a comma (only the ISEA3H grammar does).
pub fn parse_identifier(id: &str) -> Result<Cell, DggsError> {
    if id.contains(',') {
        parse_offset(id)
    } else {
        parse_hierarchical(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hierarchical_identifier() {
        let cell = parse_identifier("07231131111113100331001").unwrap();
        assert_eq!(cell.to_string(), "07231131111113100331001");
    }

    #[test]
    fn parses_offset_identifier() {
        let cell = parse_identifier("0728-549628,-522499").unwrap();
        let (face, resolution, row, col) = cell.as_offset().unwrap();
        assert_eq!((face, resolution, row, col), (7, 28, -549628, -522499));
    }

    #[test]
    fn rejects_identifier_past_maximum_length() {
        let id = format!("00{}", "1".repeat(MAX_HIERARCHICAL_RESOLUTION + 3));
        let err = parse_hierarchical(&id).unwrap_err();
        assert_eq!(
            err,
            DggsError::InvalidIdentifier {
                detail: "Cell ID exceeds maximum length (by 3 characters)".to_string()
            }
        );
    }

    #[test]
    fn rejects_offset_coordinates_without_separator() {
        let err = parse_offset("00280001").unwrap_err();
        assert!(matches!(err, DggsError::InvalidIdentifier { .. }));
    }
}
