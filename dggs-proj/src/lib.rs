// Copyright 2025 contributors to the GeoPlegmata project.
//
// Licenced under the Apache Licence, Version 2.0 <LICENCE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENCE-MIT or http://opensource.org/licenses/MIT>, at your
// discretion. This file may not be copied, modified, or distributed
// except according to those terms

//! Icosahedron geometry and the Snyder equal-area projection onto it.

pub mod error;
pub mod icosahedron;
pub mod models;
pub mod snyder;
pub mod triangular_face;

pub use error::ProjError;
pub use models::Vector3D;
pub use snyder::FaceCoordinate;
pub use triangular_face::CellLocation;
