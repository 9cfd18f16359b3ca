// Copyright (c) 2025 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The trig module contains the closed form spherical trigonometry functions
//! shared by the navigation algorithms.
//!
//! All of the functions take latitudes, longitudes and bearings in radians
//! and return radians, except for the haversine functions which work on
//! dimensionless ratios.
//!
//! The functions are total: degenerate inputs, e.g. coincident points or
//! positions exactly at a pole, are not trapped and may produce `NaN` results.

use core::f64::consts::{PI, TAU};

/// The haversine of an angle: `(1 - cos θ) / 2`.
/// * `theta` - the angle in radians.
///
/// # Examples
/// ```
/// use spherical_nav::trig::haversine;
///
/// assert_eq!(0.0, haversine(0.0));
/// assert_eq!(1.0, haversine(core::f64::consts::PI));
/// ```
#[must_use]
pub fn haversine(theta: f64) -> f64 {
    0.5 * (1.0 - libm::cos(theta))
}

/// The inverse haversine: `acos(1 - 2y)`.
///
/// Uses `acos` rather than `2 * asin(sqrt(y))` to avoid the square root.
/// * `y` - the haversine of an angle, in the range [0, 1].
///
/// returns the angle in radians, in the range [0, π].
#[must_use]
pub fn inverse_haversine(y: f64) -> f64 {
    libm::acos(1.0 - 2.0 * y)
}

/// Calculate the central angle between a pair of positions using the
/// haversine formula.
///
/// Well conditioned for small distances but loses precision for nearly
/// antipodal positions.
/// * `lat1`, `lon1` - the first position.
/// * `lat2`, `lon2` - the second position.
///
/// returns the central angle in radians, in the range [0, π].
#[must_use]
pub fn central_angle_haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    inverse_haversine(
        haversine(lat2 - lat1) + libm::cos(lat1) * libm::cos(lat2) * haversine(lon2 - lon1),
    )
}

/// Calculate the central angle between a pair of positions using the
/// spherical law of cosines in its `atan2` form, also known as the Vincenty
/// formula for a sphere.
///
/// The `atan2` of the cross and dot products of the position vectors is
/// accurate over the whole range of distances, including antipodal positions.
/// * `lat1`, `lon1` - the first position.
/// * `lat2`, `lon2` - the second position.
///
/// returns the central angle in radians, in the range [0, π].
///
/// # Examples
/// ```
/// use spherical_nav::trig::central_angle;
/// use angle_sc::is_within_tolerance;
/// use core::f64::consts::{FRAC_PI_2, PI};
///
/// // From the Equator to the North pole
/// let result = central_angle(0.0, 0.0, FRAC_PI_2, 0.0);
/// assert!(is_within_tolerance(FRAC_PI_2, result, f64::EPSILON));
///
/// // Antipodal positions on the Equator
/// let result = central_angle(0.0, 0.0, 0.0, PI);
/// assert!(is_within_tolerance(PI, result, f64::EPSILON));
/// ```
#[must_use]
pub fn central_angle(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (sin_lat1, cos_lat1) = (libm::sin(lat1), libm::cos(lat1));
    let (sin_lat2, cos_lat2) = (libm::sin(lat2), libm::cos(lat2));
    let delta_lon = lon2 - lon1;
    let (sin_delta_lon, cos_delta_lon) = (libm::sin(delta_lon), libm::cos(delta_lon));

    // the magnitude of the cross product of the position vectors
    let y = libm::hypot(
        cos_lat2 * sin_delta_lon,
        cos_lat1 * sin_lat2 - sin_lat1 * cos_lat2 * cos_delta_lon,
    );
    // the dot product of the position vectors
    let x = sin_lat1 * sin_lat2 + cos_lat1 * cos_lat2 * cos_delta_lon;

    libm::atan2(y, x)
}

/// Normalise an angle in radians into the range [0, 2π).
/// * `angle` - the angle in radians, greater than -2π.
#[must_use]
pub fn normalise_bearing(angle: f64) -> f64 {
    libm::fmod(angle + TAU, TAU)
}

/// Calculate the initial bearing of the great circle path from the first
/// position to the second position.
/// * `lat1`, `lon1` - the start position.
/// * `lat2`, `lon2` - the finish position.
///
/// returns the bearing in radians clockwise from true North, in the range [0, 2π).
#[must_use]
pub fn initial_bearing(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let delta_lon = lon2 - lon1;
    let cos_lat2 = libm::cos(lat2);
    let y = libm::sin(delta_lon) * cos_lat2;
    let x = libm::cos(lat1) * libm::sin(lat2) - libm::sin(lat1) * cos_lat2 * libm::cos(delta_lon);
    normalise_bearing(libm::atan2(y, x))
}

/// Calculate the final bearing of the great circle path from the first
/// position to the second position, i.e. the bearing on arrival.
/// * `lat1`, `lon1` - the start position.
/// * `lat2`, `lon2` - the finish position.
///
/// returns the bearing in radians clockwise from true North, in the range [0, 2π).
#[must_use]
pub fn final_bearing(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    normalise_bearing(initial_bearing(lat2, lon2, lat1, lon1) + PI)
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::{Angle, Degrees, Radians, is_within_tolerance};
    use core::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    fn radians(degrees: f64) -> f64 {
        Radians::from(Angle::from(Degrees(degrees))).0
    }

    fn degrees(radians: f64) -> f64 {
        Degrees::from(Radians(radians)).0
    }

    #[test]
    fn test_haversine_and_inverse() {
        assert_eq!(0.0, haversine(0.0));
        assert!(is_within_tolerance(0.5, haversine(FRAC_PI_2), f64::EPSILON));
        assert_eq!(1.0, haversine(PI));

        assert_eq!(0.0, inverse_haversine(0.0));
        assert_eq!(FRAC_PI_2, inverse_haversine(0.5));
        assert_eq!(PI, inverse_haversine(1.0));

        for i in 0..=180 {
            let theta = PI * f64::from(i) / 180.0;
            assert!(is_within_tolerance(
                theta,
                inverse_haversine(haversine(theta)),
                1.0e-7
            ));
        }
    }

    #[test]
    fn test_central_angle_istanbul_washington() {
        let (lat1, lon1) = (radians(42.0), radians(29.0));
        let (lat2, lon2) = (radians(39.0), radians(-77.0));

        let result = central_angle(lat1, lon1, lat2, lon2);
        assert!(is_within_tolerance(1.3057974941893142, result, 1.0e-14));

        let result_hav = central_angle_haversine(lat1, lon1, lat2, lon2);
        assert!(is_within_tolerance(result, result_hav, 1.0e-12));

        // symmetry
        assert!(is_within_tolerance(
            result,
            central_angle(lat2, lon2, lat1, lon1),
            1.0e-15
        ));
    }

    #[test]
    fn test_central_angle_antipodal() {
        let lat = radians(30.0);
        let lon = radians(45.0);

        let result = central_angle(lat, lon, -lat, lon - PI);
        assert!(is_within_tolerance(PI, result, 1.0e-15));

        let result = central_angle(lat, lon, lat, lon);
        assert_eq!(0.0, result);
    }

    #[test]
    fn test_normalise_bearing() {
        assert_eq!(0.0, normalise_bearing(0.0));
        assert_eq!(0.0, normalise_bearing(-0.0));
        assert_eq!(PI, normalise_bearing(-PI));
        assert_eq!(PI, normalise_bearing(PI));
        assert!(is_within_tolerance(
            3.0 * FRAC_PI_2,
            normalise_bearing(-FRAC_PI_2),
            f64::EPSILON
        ));
        assert_eq!(0.0, normalise_bearing(-f64::EPSILON * f64::EPSILON));
    }

    #[test]
    fn test_bearings_cardinal_directions() {
        // North along a meridian
        assert_eq!(0.0, initial_bearing(0.0, 0.0, FRAC_PI_4, 0.0));
        // South along a meridian
        assert_eq!(PI, initial_bearing(FRAC_PI_4, 0.0, 0.0, 0.0));
        // East along the Equator
        assert_eq!(FRAC_PI_2, initial_bearing(0.0, 0.0, 0.0, FRAC_PI_4));
        // West along the Equator
        assert_eq!(3.0 * FRAC_PI_2, initial_bearing(0.0, 0.0, 0.0, -FRAC_PI_4));

        assert_eq!(FRAC_PI_2, final_bearing(0.0, 0.0, 0.0, FRAC_PI_4));
    }

    #[test]
    fn test_bearings_istanbul_washington() {
        let (lat1, lon1) = (radians(42.0), radians(29.0));
        let (lat2, lon2) = (radians(39.0), radians(-77.0));

        let initial = initial_bearing(lat1, lon1, lat2, lon2);
        assert!(is_within_tolerance(
            309.2800284531682,
            degrees(initial),
            1.0e-12
        ));

        let result = final_bearing(lat1, lon1, lat2, lon2);
        assert!(is_within_tolerance(
            227.74801026694442,
            degrees(result),
            1.0e-12
        ));

        // The final bearing is the reverse of the initial bearing back.
        let reverse = initial_bearing(lat2, lon2, lat1, lon1);
        assert!(is_within_tolerance(
            normalise_bearing(reverse + PI),
            result,
            f64::EPSILON
        ));
    }

    #[test]
    fn test_bearing_coincident_points() {
        // atan2(0, 0) is zero, so a coincident point is due North
        let lat = 0.5;
        assert_eq!(0.0, initial_bearing(lat, 0.5, lat, 0.5));
    }
}
