// Copyright 2025 contributors to the GeoPlegmata project.
//
// Licenced under the Apache Licence, Version 2.0 <LICENCE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENCE-MIT or http://opensource.org/licenses/MIT>, at your
// discretion. This file may not be copied, modified, or distributed
// except according to those terms

//! Ellipsoid constants, numerical tolerances, and the geodetic/authalic
//! latitude conversion shared by the rest of this workspace.

pub mod constants;
pub mod error;
pub mod latitude;

pub use constants::{Tolerance, ToleranceConversion, WGS84};
pub use error::GridError;
pub use latitude::{authalic_to_geodetic, geodetic_to_authalic};
