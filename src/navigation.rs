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

//! The navigation module contains the great circle navigation functions
//! between `GeoPosition`s.
//!
//! Positions are converted to radians once and passed to the functions in the
//! `trig` module. Distances are central angles multiplied by a radius, so
//! a distance is in the units of the radius, see the `earth` module.
//!
//! Bearings are in degrees clockwise from true North, in the range [0°, 360°).

use crate::earth::MEAN_RADIUS;
use crate::{Degrees, GeoPosition, Metres, NauticalMiles, Radians, trig};
use angle_sc::Angle;

/// Calculate the central angle between a pair of positions.
/// * `a`, `b` - the positions.
///
/// returns the great circle distance on the unit sphere, in the range [0, π].
#[must_use]
pub fn angular_distance(a: &GeoPosition, b: &GeoPosition) -> Radians {
    Radians(trig::central_angle(
        a.latitude_radians().0,
        a.longitude_radians().0,
        b.latitude_radians().0,
        b.longitude_radians().0,
    ))
}

/// Calculate the great circle distance between a pair of positions.
/// * `a`, `b` - the positions.
/// * `radius` - the radius of the sphere.
///
/// returns the distance in the units of `radius`.
///
/// # Examples
/// ```
/// use spherical_nav::*;
/// use angle_sc::is_within_tolerance;
///
/// let lax = GeoPosition::new(Degrees(33.9425), Degrees(-118.4081));
/// let jfk = GeoPosition::new(Degrees(40.6413), Degrees(-73.7781));
///
/// let result = distance(&lax, &jfk, EarthRadius::Mean.nautical_miles());
/// assert!(is_within_tolerance(2145.93, result, 0.01));
///
/// let result = distance(&lax, &jfk, EarthRadius::Mean.miles());
/// assert!(is_within_tolerance(2469.50, result, 0.01));
/// ```
#[must_use]
pub fn distance(a: &GeoPosition, b: &GeoPosition, radius: f64) -> f64 {
    radius * angular_distance(a, b).0
}

/// Calculate the great circle distance between a pair of positions using
/// the haversine formula.
///
/// The haversine formula is well conditioned for short distances, but loses
/// precision for nearly antipodal positions, see `trig::central_angle_haversine`.
/// * `a`, `b` - the positions.
/// * `radius` - the radius of the sphere.
///
/// returns the distance in the units of `radius`.
#[must_use]
pub fn distance_haversine(a: &GeoPosition, b: &GeoPosition, radius: f64) -> f64 {
    radius
        * trig::central_angle_haversine(
            a.latitude_radians().0,
            a.longitude_radians().0,
            b.latitude_radians().0,
            b.longitude_radians().0,
        )
}

/// Calculate the great circle distance between a pair of positions on a
/// sphere with the mean radius of the Earth.
/// * `a`, `b` - the positions.
///
/// returns the distance in `Metres`.
#[must_use]
pub fn distance_metres(a: &GeoPosition, b: &GeoPosition) -> Metres {
    Metres(distance(a, b, MEAN_RADIUS.0))
}

/// Calculate the great circle distance between a pair of positions on a
/// sphere with the mean radius of the Earth.
/// * `a`, `b` - the positions.
///
/// returns the distance in `NauticalMiles`.
#[must_use]
pub fn distance_nautical_miles(a: &GeoPosition, b: &GeoPosition) -> NauticalMiles {
    NauticalMiles::from(distance_metres(a, b))
}

/// Convert a bearing in radians in the range [0, 2π) to degrees in the range [0°, 360°).
fn to_bearing_degrees(bearing: f64) -> Degrees {
    let degrees = Degrees::from(Radians(bearing)).0;
    // bearings within rounding error of 2π are due North
    Degrees(if degrees < 360.0 { degrees } else { 0.0 })
}

/// Calculate the initial bearing of the great circle path from `a` to `b`.
/// * `a`, `b` - the start and finish positions.
///
/// returns the bearing in the range [0°, 360°).
#[must_use]
pub fn initial_bearing(a: &GeoPosition, b: &GeoPosition) -> Degrees {
    to_bearing_degrees(trig::initial_bearing(
        a.latitude_radians().0,
        a.longitude_radians().0,
        b.latitude_radians().0,
        b.longitude_radians().0,
    ))
}

/// Calculate the final bearing of the great circle path from `a` to `b`,
/// i.e. the bearing on arrival at `b`.
/// * `a`, `b` - the start and finish positions.
///
/// returns the bearing in the range [0°, 360°).
#[must_use]
pub fn final_bearing(a: &GeoPosition, b: &GeoPosition) -> Degrees {
    to_bearing_degrees(trig::final_bearing(
        a.latitude_radians().0,
        a.longitude_radians().0,
        b.latitude_radians().0,
        b.longitude_radians().0,
    ))
}

/// Calculate the destination position given a start position, an initial
/// bearing and a great circle distance on the unit sphere.
/// * `start` - the start position.
/// * `bearing` - the initial bearing.
/// * `angular_distance` - the distance divided by the radius of the sphere.
///
/// returns the destination position, with the default altitude.
///
/// # Examples
/// ```
/// use spherical_nav::*;
/// use angle_sc::is_within_tolerance;
/// use std::f64::consts::FRAC_PI_2;
///
/// let start = GeoPosition::new(Degrees(0.0), Degrees(0.0));
/// let result = destination_point(&start, Degrees(90.0), Radians(FRAC_PI_2));
/// assert!(is_within_tolerance(0.0, result.latitude().0, 1e-12));
/// assert!(is_within_tolerance(90.0, result.longitude().0, 1e-12));
/// ```
#[must_use]
pub fn destination_point(
    start: &GeoPosition,
    bearing: Degrees,
    angular_distance: Radians,
) -> GeoPosition {
    let lat1 = start.latitude_radians().0;
    let (sin_lat1, cos_lat1) = (libm::sin(lat1), libm::cos(lat1));
    let (sin_d, cos_d) = (libm::sin(angular_distance.0), libm::cos(angular_distance.0));
    let theta = Angle::from(bearing);

    let lat2 = libm::asin(sin_lat1 * cos_d + cos_lat1 * sin_d * theta.cos().0);
    let delta_lon = libm::atan2(
        theta.sin().0 * sin_d * cos_lat1,
        cos_d - sin_lat1 * libm::sin(lat2),
    );
    let lon2 = start.longitude_radians().0 + delta_lon;

    GeoPosition::new(Degrees::from(Radians(lat2)), Degrees::from(Radians(lon2)))
}

/// Calculate the destination position given a start position, an initial
/// bearing and a distance.
/// * `start` - the start position.
/// * `bearing` - the initial bearing.
/// * `distance` - the distance along the great circle.
/// * `radius` - the radius of the sphere, in the same units as `distance`.
///
/// returns the destination position, with the default altitude.
#[must_use]
pub fn destination_point_at_distance(
    start: &GeoPosition,
    bearing: Degrees,
    distance: f64,
    radius: f64,
) -> GeoPosition {
    destination_point(start, bearing, Radians(distance / radius))
}

/// Calculate the position at a fraction of the way along the great circle
/// arc between a pair of positions.
///
/// The result is `NaN` if the positions are coincident.
/// * `a`, `b` - the start and finish positions.
/// * `fraction` - the fraction of the distance from `a` to `b`, in [0, 1].
///
/// returns the intermediate position, with the default altitude.
#[must_use]
pub fn intermediate_point(a: &GeoPosition, b: &GeoPosition, fraction: f64) -> GeoPosition {
    let (lat1, lon1) = (a.latitude_radians().0, a.longitude_radians().0);
    let (lat2, lon2) = (b.latitude_radians().0, b.longitude_radians().0);
    let delta = trig::central_angle(lat1, lon1, lat2, lon2);
    let sin_delta = libm::sin(delta);

    let f_a = libm::sin((1.0 - fraction) * delta) / sin_delta;
    let f_b = libm::sin(fraction * delta) / sin_delta;

    let (cos_lat1, cos_lat2) = (libm::cos(lat1), libm::cos(lat2));
    let x = f_a * cos_lat1 * libm::cos(lon1) + f_b * cos_lat2 * libm::cos(lon2);
    let y = f_a * cos_lat1 * libm::sin(lon1) + f_b * cos_lat2 * libm::sin(lon2);
    let z = f_a * libm::sin(lat1) + f_b * libm::sin(lat2);

    let lat = libm::atan2(z, libm::hypot(x, y));
    let lon = libm::atan2(y, x);

    GeoPosition::new(Degrees::from(Radians(lat)), Degrees::from(Radians(lon)))
}

/// Calculate the mid point of the great circle arc between a pair of positions.
/// * `a`, `b` - the start and finish positions, not antipodal.
///
/// returns the mid point, with the default altitude.
#[must_use]
pub fn midpoint(a: &GeoPosition, b: &GeoPosition) -> GeoPosition {
    let (lat1, lon1) = (a.latitude_radians().0, a.longitude_radians().0);
    let lat2 = b.latitude_radians().0;
    let delta_lon = b.longitude_radians().0 - lon1;

    let cos_lat1 = libm::cos(lat1);
    let cos_lat2 = libm::cos(lat2);
    let bx = cos_lat2 * libm::cos(delta_lon);
    let by = cos_lat2 * libm::sin(delta_lon);

    let lat = libm::atan2(
        libm::sin(lat1) + libm::sin(lat2),
        libm::hypot(cos_lat1 + bx, by),
    );
    let lon = lon1 + libm::atan2(by, cos_lat1 + bx);

    GeoPosition::new(Degrees::from(Radians(lat)), Degrees::from(Radians(lon)))
}

/// Calculate the along track and cross track central angles of a position
/// relative to the great circle track from `start` to `end`.
///
/// returns the along track and cross track distances on the unit sphere.
#[must_use]
fn calculate_atd_and_xtd(
    start: &GeoPosition,
    end: &GeoPosition,
    point: &GeoPosition,
) -> (f64, f64) {
    let (lat1, lon1) = (start.latitude_radians().0, start.longitude_radians().0);
    let (lat3, lon3) = (point.latitude_radians().0, point.longitude_radians().0);

    let d13 = trig::central_angle(lat1, lon1, lat3, lon3);
    let theta13 = trig::initial_bearing(lat1, lon1, lat3, lon3);
    let theta12 = trig::initial_bearing(
        lat1,
        lon1,
        end.latitude_radians().0,
        end.longitude_radians().0,
    );
    let delta_theta = theta13 - theta12;

    let xtd = libm::asin(libm::sin(d13) * libm::sin(delta_theta));

    // clamp to guard acos against rounding, the ratio cannot exceed one
    let ratio = (libm::cos(d13) / libm::cos(xtd)).clamp(-1.0, 1.0);
    // negative if the point is behind the start of the track
    let atd = libm::copysign(libm::acos(ratio), libm::cos(delta_theta));

    (atd, xtd)
}

/// Calculate the along track and cross track distances of a position
/// relative to the great circle track from `start` to `end`.
/// * `start`, `end` - the start and end positions of the track.
/// * `point` - the position.
/// * `radius` - the radius of the sphere.
///
/// returns the along track and cross track distances in the units of `radius`.
/// The along track distance is negative if `point` is behind `start`.
/// The cross track distance is positive if `point` is to the right of the
/// track and negative if it is to the left.
///
/// # Examples
/// ```
/// use spherical_nav::*;
/// use angle_sc::is_within_tolerance;
///
/// let istanbul = GeoPosition::new(Degrees(42.0), Degrees(29.0));
/// let washington = GeoPosition::new(Degrees(39.0), Degrees(-77.0));
/// let reyjavik = GeoPosition::new(Degrees(64.0), Degrees(-22.0));
///
/// let (atd, xtd) = along_and_cross_track_distances(&istanbul, &washington, &reyjavik, 1.0);
/// assert!(is_within_tolerance(0.615_051_664, atd, 1e-9));
/// assert!(is_within_tolerance(0.159_115_704, xtd, 1e-9));
/// ```
#[must_use]
pub fn along_and_cross_track_distances(
    start: &GeoPosition,
    end: &GeoPosition,
    point: &GeoPosition,
    radius: f64,
) -> (f64, f64) {
    let (atd, xtd) = calculate_atd_and_xtd(start, end, point);
    (radius * atd, radius * xtd)
}

/// Calculate the along track distance of a position: the distance from the
/// start of the track to the closest point on the track to the position.
/// * `start`, `end` - the start and end positions of the track.
/// * `point` - the position.
/// * `radius` - the radius of the sphere.
///
/// returns the along track distance in the units of `radius`,
/// negative if `point` is behind `start`.
#[must_use]
pub fn along_track_distance(
    start: &GeoPosition,
    end: &GeoPosition,
    point: &GeoPosition,
    radius: f64,
) -> f64 {
    along_and_cross_track_distances(start, end, point, radius).0
}

/// Calculate the cross track distance of a position: its distance from the
/// great circle track.
/// * `start`, `end` - the start and end positions of the track.
/// * `point` - the position.
/// * `radius` - the radius of the sphere.
///
/// returns the cross track distance in the units of `radius`,
/// positive to the right of the track, negative to the left.
#[must_use]
pub fn cross_track_distance(
    start: &GeoPosition,
    end: &GeoPosition,
    point: &GeoPosition,
    radius: f64,
) -> f64 {
    along_and_cross_track_distances(start, end, point, radius).1
}

/// Calculate the maximum latitude reached by a great circle path using
/// Clairaut's relation: `acos(|sin(bearing) * cos(latitude)|)`.
/// * `latitude` - a latitude on the path.
/// * `bearing` - the bearing of the path at `latitude`.
///
/// returns the maximum latitude, in the range [0°, 90°].
///
/// # Examples
/// ```
/// use spherical_nav::*;
/// use angle_sc::is_within_tolerance;
///
/// // A path heading due East along the Equator stays on the Equator.
/// assert!(is_within_tolerance(0.0, maximum_latitude(Degrees(0.0), Degrees(90.0)).0, 1e-12));
///
/// // A path heading due North passes over the pole.
/// assert!(is_within_tolerance(90.0, maximum_latitude(Degrees(45.0), Degrees(0.0)).0, 1e-12));
/// ```
#[must_use]
pub fn maximum_latitude(latitude: Degrees, bearing: Degrees) -> Degrees {
    let clairaut = Angle::from(bearing).sin().0 * Angle::from(latitude).cos().0;
    Degrees::from(Radians(libm::acos(libm::fabs(clairaut))))
}

/// Calculate the minimum latitude reached by a great circle path,
/// the negative of its maximum latitude.
/// * `latitude` - a latitude on the path.
/// * `bearing` - the bearing of the path at `latitude`.
///
/// returns the minimum latitude, in the range [-90°, 0°].
#[must_use]
pub fn minimum_latitude(latitude: Degrees, bearing: Degrees) -> Degrees {
    Degrees(-maximum_latitude(latitude, bearing).0)
}
