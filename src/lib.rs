// Copyright 2025 contributors to the GeoPlegmata project.
//
// Licenced under the Apache Licence, Version 2.0 <LICENCE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENCE-MIT or http://opensource.org/licenses/MIT>, at your
// discretion. This file may not be copied, modified, or distributed
// except according to those terms

//! A Discrete Global Grid System geometric engine: Snyder equal-area
//! projection onto an icosahedron, the ISEA4T (aperture-4 triangular)
//! and ISEA3H (aperture-3 hexagonal) tilings, and the cell identifier
//! and lineage operations built on top of them.

pub mod dggs;
pub mod error;
pub mod grids;
pub mod identifiers;
pub mod models;

pub use dggs::{
    bounding_cell, cell_to_point, cell_vertices, children, create_cell, parents, point_to_cell,
    siblings,
};
pub use error::DggsError;
pub use grids::DggrsKind;
pub use identifiers::parse_identifier;
pub use models::{Cell, CellLocation, Orientation, WgsPoint};
