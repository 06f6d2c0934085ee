// Copyright 2025 contributors to the GeoPlegmata project.
//
// Licenced under the Apache Licence, Version 2.0 <LICENCE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENCE-MIT or http://opensource.org/licenses/MIT>, at your
// discretion. This file may not be copied, modified, or distributed
// except according to those terms

use thiserror::Error;

/// Errors raised while converting between geodetic and authalic latitude.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GridError {
    #[error("invalid coordinate: {detail}")]
    InvalidCoordinate { detail: String },
}
