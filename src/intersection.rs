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

//! The `intersection` module contains the function for calculating the
//! intersection of two great circle paths, each defined by a start position
//! and an initial bearing.
//!
//! Two great circles intersect at a pair of antipodal points. The
//! intersection returned is the one ahead of the first start position,
//! along its initial bearing.
//!
//! The solution forms the spherical triangle between the two start
//! positions and the intersection, see Ed Williams'
//! [Aviation Formulary](https://edwilliams.org/avform147.htm#Intersection).

use crate::{Degrees, GeoPosition, Radians, trig};
use angle_sc::Angle;
use core::f64::consts::{PI, TAU};

/// Calculate the great circle distance from the start of the first path to
/// the intersection of two great circle paths.
/// * `a` - the start position of the first path.
/// * `bearing_a` - the initial bearing of the first path in radians.
/// * `b` - the start position of the second path.
/// * `bearing_b` - the initial bearing of the second path in radians.
///
/// returns the distance along the first path on the unit sphere, in the range [0, π).
/// The result is `NaN` if the start positions are coincident.
#[must_use]
pub fn calculate_intersection_distance(
    a: &GeoPosition,
    bearing_a: Radians,
    b: &GeoPosition,
    bearing_b: Radians,
) -> Radians {
    let (lat1, lon1) = (a.latitude_radians().0, a.longitude_radians().0);
    let (lat2, lon2) = (b.latitude_radians().0, b.longitude_radians().0);

    // the base of the triangle between the start positions
    let d12 = trig::central_angle(lat1, lon1, lat2, lon2);
    let (sin_d12, cos_d12) = (libm::sin(d12), libm::cos(d12));

    // the bearings along the base, from each start position to the other
    let (sin_lat1, sin_lat2) = (libm::sin(lat1), libm::sin(lat2));
    let cos_theta_a = (sin_lat2 - sin_lat1 * cos_d12) / (sin_d12 * libm::cos(lat1));
    let cos_theta_b = (sin_lat1 - sin_lat2 * cos_d12) / (sin_d12 * libm::cos(lat2));
    let theta_a = libm::acos(cos_theta_a.clamp(-1.0, 1.0));
    let theta_b = libm::acos(cos_theta_b.clamp(-1.0, 1.0));
    let (theta12, theta21) = if 0.0 < libm::sin(lon2 - lon1) {
        (theta_a, TAU - theta_b)
    } else {
        (TAU - theta_a, theta_b)
    };

    // the angles of the triangle at each start position
    let alpha1 = bearing_a.0 - theta12;
    let alpha2 = theta21 - bearing_b.0;
    let (sin_alpha1, cos_alpha1) = (libm::sin(alpha1), libm::cos(alpha1));
    let (sin_alpha2, cos_alpha2) = (libm::sin(alpha2), libm::cos(alpha2));

    // the angle of the triangle at the intersection
    let cos_alpha3 = -cos_alpha1 * cos_alpha2 + sin_alpha1 * sin_alpha2 * cos_d12;

    let d13 = libm::atan2(
        sin_d12 * sin_alpha1 * sin_alpha2,
        cos_alpha2 + cos_alpha1 * cos_alpha3,
    );

    // a negative distance is to the intersection behind the first start
    // position, its antipode is ahead
    Radians(if d13 < 0.0 { d13 + PI } else { d13 })
}

/// Calculate the intersection of two great circle paths, each defined by a
/// start position and an initial bearing.
///
/// Of the pair of antipodal intersections, the one ahead of `a` along
/// `bearing_a` is returned.
///
/// The result is `NaN` if the start positions are coincident. If the paths
/// are on the same great circle, the result is `a` or its antipode.
/// * `a` - the start position of the first path.
/// * `bearing_a` - the initial bearing of the first path.
/// * `b` - the start position of the second path.
/// * `bearing_b` - the initial bearing of the second path.
///
/// returns the intersection position, with the default altitude.
///
/// # Examples
/// ```
/// use spherical_nav::*;
/// use angle_sc::is_within_tolerance;
///
/// // Veness' example
/// let a = GeoPosition::new(Degrees(51.8853), Degrees(0.2545));
/// let b = GeoPosition::new(Degrees(49.0034), Degrees(2.5735));
///
/// let result = intersection_of_paths(&a, Degrees(108.547), &b, Degrees(32.435));
/// assert!(is_within_tolerance(50.907_808_699, result.latitude().0, 1e-9));
/// assert!(is_within_tolerance(4.508_409_907, result.longitude().0, 1e-9));
/// ```
#[must_use]
pub fn intersection_of_paths(
    a: &GeoPosition,
    bearing_a: Degrees,
    b: &GeoPosition,
    bearing_b: Degrees,
) -> GeoPosition {
    let d13 = calculate_intersection_distance(
        a,
        Radians::from(Angle::from(bearing_a)),
        b,
        Radians::from(Angle::from(bearing_b)),
    );
    crate::navigation::destination_point(a, bearing_a, d13)
}
