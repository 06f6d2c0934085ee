// Copyright 2025 contributors to the GeoPlegmata project.
//
// Licenced under the Apache Licence, Version 2.0 <LICENCE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENCE-MIT or http://opensource.org/licenses/MIT>, at your
// discretion. This file may not be copied, modified, or distributed
// except according to those terms

use dggs_grid::GridError;
use thiserror::Error;

/// Errors raised by the icosahedron geometry and Snyder projection.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProjError {
    #[error("invalid coordinate: {detail}")]
    InvalidCoordinate { detail: String },

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("no icosahedron face contains the given point")]
    NoFaceFound,
}
