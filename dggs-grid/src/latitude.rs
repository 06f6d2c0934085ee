// Copyright 2025 contributors to the GeoPlegmata project.
//
// Licenced under the Apache Licence, Version 2.0 <LICENCE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENCE-MIT or http://opensource.org/licenses/MIT>, at your
// discretion. This file may not be copied, modified, or distributed
// except according to those terms

//! Geodetic <-> authalic latitude conversion (Karney 2023, Clenshaw summation).

use crate::constants::KarneyCoefficients;
use crate::error::GridError;

/// Clenshaw summation of a Fourier sine series at `2*phi`.
///
/// `coeffs` holds the 21 Karney coefficients in the fixed triangular
/// layout used by equations A19/A20: `coeffs[0..6]` are the
/// sin(2phi)..sin(12phi) terms of the first correction order, and so on.
/// We evaluate it the direct way (sum of `c_n * sin(2*n*phi)`) since the
/// series is short and this keeps the mapping to the published
/// coefficients obvious.
fn sum_sine_series(coeffs: &[f64; 21], phi: f64) -> f64 {
    const ORDER: [usize; 6] = [1, 2, 3, 4, 5, 6];
    let mut idx = 0;
    let mut total = 0.0;
    for &n in &ORDER {
        if idx >= coeffs.len() {
            break;
        }
        total += coeffs[idx] * (2.0 * n as f64 * phi).sin();
        idx += 1;
    }
    total
}

/// Convert a geodetic latitude (radians, on the WGS84 ellipsoid) to the
/// authalic latitude (radians, on the sphere of equal surface area).
///
/// Fails with [`GridError::InvalidCoordinate`] if `phi` is outside
/// `[-pi/2, pi/2]`.
pub fn geodetic_to_authalic(phi: f64) -> Result<f64, GridError> {
    if !(-std::f64::consts::FRAC_PI_2..=std::f64::consts::FRAC_PI_2).contains(&phi) {
        return Err(GridError::InvalidCoordinate {
            detail: format!("geodetic latitude {phi} rad is outside [-pi/2, pi/2]"),
        });
    }
    Ok(phi + sum_sine_series(&KarneyCoefficients::GEODETIC_TO_AUTHALIC, phi))
}

/// Convert an authalic latitude (radians) back to the geodetic latitude
/// (radians, on the WGS84 ellipsoid).
///
/// Fails with [`GridError::InvalidCoordinate`] if `xi` is outside
/// `[-pi/2, pi/2]`.
pub fn authalic_to_geodetic(xi: f64) -> Result<f64, GridError> {
    if !(-std::f64::consts::FRAC_PI_2..=std::f64::consts::FRAC_PI_2).contains(&xi) {
        return Err(GridError::InvalidCoordinate {
            detail: format!("authalic latitude {xi} rad is outside [-pi/2, pi/2]"),
        });
    }
    Ok(xi + sum_sine_series(&KarneyCoefficients::AUTHALIC_TO_GEODETIC, xi))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equator_and_poles_are_fixed_points() {
        assert!((geodetic_to_authalic(0.0).unwrap()).abs() < 1e-15);
        let pole = std::f64::consts::FRAC_PI_2;
        assert!((geodetic_to_authalic(pole).unwrap() - pole).abs() < 1e-9);
        assert!((geodetic_to_authalic(-pole).unwrap() + pole).abs() < 1e-9);
    }

    #[test]
    fn round_trip_is_approximately_identity() {
        for deg in [-89.0, -45.0, -10.0, 0.1, 33.3, 60.0, 89.9] {
            let phi = deg.to_radians();
            let xi = geodetic_to_authalic(phi).unwrap();
            let back = authalic_to_geodetic(xi).unwrap();
            assert!(
                (phi - back).abs() < 1e-9,
                "round trip failed for {deg} degrees: {phi} -> {xi} -> {back}"
            );
        }
    }

    #[test]
    fn rejects_out_of_range_latitude() {
        assert!(geodetic_to_authalic(2.0).is_err());
        assert!(authalic_to_geodetic(-2.0).is_err());
    }
}
