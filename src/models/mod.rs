// Copyright 2025 contributors to the GeoPlegmata project.
//
// Licenced under the Apache Licence, Version 2.0 <LICENCE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENCE-MIT or http://opensource.org/licenses/MIT>, at your
// discretion. This file may not be copied, modified, or distributed
// except according to those terms

//! Public data types: spherical points, face coordinates, cell
//! identifiers and the newtypes that keep relative and angular
//! accuracy from being mixed up by accident.

pub mod cell;

use crate::error::DggsError;
use std::fmt;

pub use cell::{Cell, CellPartition, Orientation};
pub use dggs_proj::CellLocation;

/// A point on the WGS84 ellipsoid, in degrees, with an accuracy
/// describing how precisely the point is known: the area, in square
/// metres, that the point could actually be anywhere within.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WgsPoint {
    pub lat: f64,
    pub lon: f64,
    pub accuracy: f64,
}

impl WgsPoint {
    pub fn new(lat: f64, lon: f64, accuracy: f64) -> Result<Self, DggsError> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(DggsError::InvalidCoordinate {
                detail: format!("Latitude, '{lat}', must be between -90 and 90 degrees."),
            });
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(DggsError::InvalidCoordinate {
                detail: format!("Longitude, '{lon}', must be between -180 and 180 degrees."),
            });
        }
        if accuracy < 0.0 {
            return Err(DggsError::InvalidCoordinate {
                detail: "Accuracy cannot be negative.".to_string(),
            });
        }
        Ok(Self { lat, lon, accuracy })
    }
}

impl fmt::Display for WgsPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}

impl From<WgsPoint> for geo::Point<f64> {
    fn from(point: WgsPoint) -> Self {
        geo::Point::new(point.lon, point.lat)
    }
}

impl TryFrom<geo::Point<f64>> for WgsPoint {
    type Error = DggsError;

    fn try_from(point: geo::Point<f64>) -> Result<Self, DggsError> {
        WgsPoint::new(point.y(), point.x(), 0.0)
    }
}

/// The fraction of an icosahedron face's area a cell covers, in `[0,
/// 1]`. Distinct from [`AccuracyArea`] so the two units of precision
/// can never be passed to the wrong parameter by accident.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct RelativeArea(f64);

impl RelativeArea {
    pub fn new(value: f64) -> Result<Self, DggsError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(DggsError::InvalidCoordinate {
                detail: format!("Relative area, '{value}', must be between 0 and 1."),
            });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// An accuracy, as an area in square metres. Always non-negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct AccuracyArea(f64);

impl AccuracyArea {
    pub fn new(value: f64) -> Result<Self, DggsError> {
        if value < 0.0 {
            return Err(DggsError::InvalidCoordinate {
                detail: "Accuracy cannot be negative.".to_string(),
            });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wgs_point_rejects_negative_accuracy() {
        let err = WgsPoint::new(1.0, 2.0, -1.0).unwrap_err();
        assert_eq!(
            err,
            DggsError::InvalidCoordinate {
                detail: "Accuracy cannot be negative.".to_string()
            }
        );
    }

    #[test]
    fn wgs_point_rejects_out_of_range_latitude() {
        assert!(WgsPoint::new(91.0, 0.0, 0.0).is_err());
    }

    #[test]
    fn wgs_point_round_trips_through_geo_point() {
        let point = WgsPoint::new(1.234, 2.345, 0.0).unwrap();
        let geo_point: geo::Point<f64> = point.into();
        let back = WgsPoint::try_from(geo_point).unwrap();
        assert_eq!(point.lat, back.lat);
        assert_eq!(point.lon, back.lon);
    }

    #[test]
    fn relative_area_rejects_values_outside_unit_interval() {
        assert!(RelativeArea::new(1.5).is_err());
        assert!(RelativeArea::new(-0.1).is_err());
        assert!(RelativeArea::new(0.5).is_ok());
    }
}
