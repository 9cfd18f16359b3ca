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

//! spherical-nav
//!
//! A library for performing great circle navigation calculations on a
//! spherical model of the Earth.
//!
//! The shortest path between two points on the surface of a sphere is a
//! [great circle](https://en.wikipedia.org/wiki/Great_circle) arc.
//! This library uses the closed form formulae of spherical trigonometry to
//! calculate:
//!
//! - the distance, initial bearing and final bearing between two positions;
//! - the destination position given a start position, bearing and distance;
//! - intermediate positions and the mid point along a great circle arc;
//! - the along track and cross track distances of a position relative to a
//!   great circle track;
//! - the intersection of two great circle paths;
//! - the maximum latitude of a great circle path, from Clairaut's relation;
//! - the compass point of a bearing.
//!
//! It also provides a simple cylindrical Mercator projection onto a pixel
//! canvas, see the `mercator` module.
//!
//! ## Design
//!
//! Positions are `GeoPosition`s: a latitude and longitude in degrees and an
//! altitude in metres. The latitude and longitude are normalised on
//! construction, so every `GeoPosition` is within range.
//!
//! The navigation functions convert positions to radians once and delegate
//! to the functions in the `trig` module. Central angles are converted into
//! distances by multiplying by a radius, see the `earth` module.
//! The default radius is the mean radius of the Earth in metres.
//!
//! The formulae are not iterative and do not trap degenerate inputs:
//! e.g. an intermediate point between coincident positions is `NaN`.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Degrees`
//!   and `Radians`;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to define `LatLong`;
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres` and
//!   `NauticalMiles` and perform conversions between them.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications.

#![cfg_attr(not(test), no_std)]

extern crate angle_sc;
extern crate icao_units;
extern crate unit_sphere;

pub mod compass;
pub mod earth;
pub mod intersection;
pub mod mercator;
pub mod navigation;
pub mod position;
pub mod trig;

pub use angle_sc::{Degrees, Radians};
pub use compass::{CompassPrecision, compass_point, compass_point_from_degrees};
pub use earth::{EarthRadius, LengthUnit};
pub use icao_units::non_si::NauticalMiles;
pub use icao_units::si::Metres;
pub use intersection::intersection_of_paths;
pub use mercator::{MercatorProjection, Pixel};
pub use navigation::{
    along_and_cross_track_distances, along_track_distance, angular_distance,
    cross_track_distance, destination_point, destination_point_at_distance, distance,
    distance_haversine, distance_metres, distance_nautical_miles, final_bearing,
    initial_bearing, intermediate_point, maximum_latitude, midpoint, minimum_latitude,
};
pub use position::dms::{Dms, DmsError};
pub use unit_sphere::LatLong;

use angle_sc::Angle;
use core::fmt;
use core::str::FromStr;

/// The errors reported by the library.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A compass precision other than 4, 8, 16 or 32 points.
    #[error("unsupported compass precision: {0}, expected 4, 8, 16 or 32")]
    InvalidCompassPrecision(u32),
    /// A position string that could not be parsed.
    #[error("invalid DMS position: {0}")]
    Dms(#[from] DmsError),
}

/// A position on the surface of the Earth.
///
/// The latitude is folded into the range [-90°, 90°] and the longitude is
/// wrapped into the range [-180°, 180°] on construction, so a `GeoPosition`
/// is always valid. The radian values of the latitude and longitude are
/// calculated once, on construction.
///
/// Equality is exact: the latitude, longitude and altitude must be equal.
#[derive(Clone, Copy, Debug)]
pub struct GeoPosition {
    /// The latitude in degrees.
    latitude: f64,
    /// The longitude in degrees.
    longitude: f64,
    /// The altitude in metres.
    altitude: f64,
    /// The latitude in radians.
    lat_rad: f64,
    /// The longitude in radians.
    lon_rad: f64,
}

impl GeoPosition {
    /// The altitude of a `GeoPosition` constructed without one, in metres.
    pub const DEFAULT_ALTITUDE: Metres = Metres(1.0);

    /// An unset position: all of its values are zero.
    ///
    /// Note: a position at 0°N 0°E with zero altitude is equal to `EMPTY`.
    pub const EMPTY: Self = Self {
        latitude: 0.0,
        longitude: 0.0,
        altitude: 0.0,
        lat_rad: 0.0,
        lon_rad: 0.0,
    };

    /// Construct a `GeoPosition` with the default altitude.
    /// * `latitude` - the latitude, folded into [-90°, 90°].
    /// * `longitude` - the longitude, wrapped into [-180°, 180°].
    ///
    /// # Examples
    /// ```
    /// use spherical_nav::{Degrees, GeoPosition};
    ///
    /// let a = GeoPosition::new(Degrees(100.0), Degrees(190.0));
    /// assert_eq!(Degrees(80.0), a.latitude());
    /// assert_eq!(Degrees(-170.0), a.longitude());
    /// ```
    #[must_use]
    pub fn new(latitude: Degrees, longitude: Degrees) -> Self {
        Self::with_altitude(latitude, longitude, Self::DEFAULT_ALTITUDE)
    }

    /// Construct a `GeoPosition`.
    /// * `latitude` - the latitude, folded into [-90°, 90°].
    /// * `longitude` - the longitude, wrapped into [-180°, 180°].
    /// * `altitude` - the altitude.
    #[must_use]
    pub fn with_altitude(latitude: Degrees, longitude: Degrees, altitude: Metres) -> Self {
        let latitude = position::fold_latitude(latitude.0);
        let longitude = position::wrap_longitude(longitude.0);
        Self {
            latitude,
            longitude,
            altitude: altitude.0,
            lat_rad: Radians::from(Angle::from(Degrees(latitude))).0,
            lon_rad: Radians::from(Angle::from(Degrees(longitude))).0,
        }
    }

    /// Parse a `GeoPosition` from a DMS string, e.g. `32°13′18″N 110°55′35″W`.
    /// The position has the default altitude.
    /// * `input` - the DMS string, see the `position::dms` module.
    ///
    /// # Errors
    ///
    /// Returns a `DmsError` if `input` is not a valid DMS latitude and longitude.
    ///
    /// # Examples
    /// ```
    /// use spherical_nav::{DmsError, GeoPosition};
    /// use angle_sc::is_within_tolerance;
    ///
    /// let tucson = GeoPosition::try_parse("32°13′18″N 110°55′35″W").unwrap();
    /// assert!(is_within_tolerance(32.221_666_666, tucson.latitude().0, 1e-9));
    /// assert!(is_within_tolerance(-110.926_388_888, tucson.longitude().0, 1e-9));
    ///
    /// assert_eq!(Err(DmsError::Empty), GeoPosition::try_parse(""));
    /// ```
    pub fn try_parse(input: &str) -> Result<Self, DmsError> {
        match position::dms::parse_dms(input) {
            Ok((lat, lon)) => Ok(Self::new(Degrees(lat), Degrees(lon))),
            Err(e) => {
                log::debug!("failed to parse position {input:?}: {e}");
                Err(e)
            }
        }
    }

    /// The latitude in degrees, in the range [-90°, 90°].
    #[must_use]
    pub const fn latitude(&self) -> Degrees {
        Degrees(self.latitude)
    }

    /// The longitude in degrees, in the range [-180°, 180°].
    #[must_use]
    pub const fn longitude(&self) -> Degrees {
        Degrees(self.longitude)
    }

    /// The altitude in metres.
    #[must_use]
    pub const fn altitude(&self) -> Metres {
        Metres(self.altitude)
    }

    /// The latitude in radians.
    #[must_use]
    pub const fn latitude_radians(&self) -> Radians {
        Radians(self.lat_rad)
    }

    /// The longitude in radians.
    #[must_use]
    pub const fn longitude_radians(&self) -> Radians {
        Radians(self.lon_rad)
    }

    /// Whether this is the `EMPTY` position.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// A `Display` adaptor to write the position in DMS form.
    ///
    /// # Examples
    /// ```
    /// use spherical_nav::{Degrees, GeoPosition};
    ///
    /// let jfk = GeoPosition::new(Degrees(40.6413), Degrees(-73.7781));
    /// assert_eq!("40°38′29″N 73°46′41″W", jfk.dms().to_string());
    /// ```
    #[must_use]
    pub const fn dms(&self) -> Dms {
        Dms::new(self.latitude, self.longitude)
    }
}

impl Default for GeoPosition {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl PartialEq for GeoPosition {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        self.latitude == other.latitude
            && self.longitude == other.longitude
            && self.altitude == other.altitude
    }
}

impl fmt::Display for GeoPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(6);
        write!(
            f,
            "({:.precision$}°, {:.precision$}°, {:.1} m)",
            self.latitude, self.longitude, self.altitude
        )
    }
}

impl FromStr for GeoPosition {
    type Err = DmsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse(s)
    }
}

impl From<&LatLong> for GeoPosition {
    /// Construct a `GeoPosition` with the default altitude from a `LatLong`.
    fn from(a: &LatLong) -> Self {
        Self::new(a.lat(), a.lon())
    }
}

impl From<&GeoPosition> for LatLong {
    /// Construct a `LatLong` from the latitude and longitude of a `GeoPosition`.
    fn from(a: &GeoPosition) -> Self {
        Self::new(a.latitude(), a.longitude())
    }
}
