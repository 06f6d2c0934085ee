// Copyright 2025 contributors to the GeoPlegmata project.
//
// Licenced under the Apache Licence, Version 2.0 <LICENCE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENCE-MIT or http://opensource.org/licenses/MIT>, at your
// discretion. This file may not be copied, modified, or distributed
// except according to those terms

use dggs_grid::GridError;
use dggs_proj::ProjError;
use thiserror::Error;

/// Errors raised by the DGGS geometric engine.
///
/// Each variant corresponds to one of the error kinds named by the
/// public contract: invalid coordinate input, a malformed cell
/// identifier, a cell-kind mismatch (an ISEA4T operation applied to an
/// ISEA3H cell or vice versa), an out-of-range index, or any other bad
/// input that doesn't fit the other kinds.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DggsError {
    #[error("invalid coordinate: {detail}")]
    InvalidCoordinate { detail: String },

    #[error("invalid identifier: {detail}")]
    InvalidIdentifier { detail: String },

    #[error("cell kind mismatch: {detail}")]
    CellKind { detail: String },

    #[error("{detail}")]
    RangeOverflow { detail: String },

    #[error("bad input: {detail}")]
    BadInput { detail: String },
}

impl From<GridError> for DggsError {
    fn from(err: GridError) -> Self {
        match err {
            GridError::InvalidCoordinate { detail } => DggsError::InvalidCoordinate { detail },
        }
    }
}

impl From<ProjError> for DggsError {
    fn from(err: ProjError) -> Self {
        match err {
            ProjError::InvalidCoordinate { detail } => DggsError::InvalidCoordinate { detail },
            ProjError::Grid(inner) => inner.into(),
            ProjError::NoFaceFound => DggsError::InvalidCoordinate {
                detail: "no icosahedron face contains the given point".to_string(),
            },
        }
    }
}
