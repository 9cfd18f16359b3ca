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

//! The compass module classifies an angle as one of 4, 8, 16 or 32 named
//! compass points.
//!
//! The compass points are indexed anticlockwise from East, in the
//! mathematical convention: an angle of zero is `E` and an angle of π/2
//! is `N`. Note: this differs from the bearings returned by the
//! `navigation` module, which are clockwise from North.

use crate::{Degrees, Error, Radians};
use angle_sc::Angle;
use core::f64::consts::TAU;

/// The number of points on a compass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompassPrecision {
    /// The cardinal points.
    Four = 4,
    /// The cardinal and intercardinal points.
    Eight = 8,
    /// Adds the secondary intercardinal points, e.g. `NNE`.
    Sixteen = 16,
    /// Adds the "by" points, e.g. `NbE`.
    ThirtyTwo = 32,
}

const CARDINAL_POINTS: [&str; 4] = ["E", "N", "W", "S"];

const INTERCARDINAL_POINTS: [&str; 8] = ["E", "NE", "N", "NW", "W", "SW", "S", "SE"];

const SECONDARY_INTERCARDINAL_POINTS: [&str; 16] = [
    "E", "ENE", "NE", "NNE", "N", "NNW", "NW", "WNW", "W", "WSW", "SW", "SSW", "S", "SSE", "SE",
    "ESE",
];

const BY_POINTS: [&str; 32] = [
    "E", "EbN", "ENE", "NEbE", "NE", "NEbN", "NNE", "NbE", "N", "NbW", "NNW", "NWbN", "NW",
    "NWbW", "WNW", "WbN", "W", "WbS", "WSW", "SWbW", "SW", "SWbS", "SSW", "SbW", "S", "SbE",
    "SSE", "SEbS", "SE", "SEbE", "ESE", "EbS",
];

impl CompassPrecision {
    /// The number of points on the compass.
    #[must_use]
    pub const fn points(self) -> u32 {
        self as u32
    }

    /// The names of the compass points, anticlockwise from East.
    #[must_use]
    pub const fn names(self) -> &'static [&'static str] {
        match self {
            Self::Four => &CARDINAL_POINTS,
            Self::Eight => &INTERCARDINAL_POINTS,
            Self::Sixteen => &SECONDARY_INTERCARDINAL_POINTS,
            Self::ThirtyTwo => &BY_POINTS,
        }
    }
}

impl TryFrom<u32> for CompassPrecision {
    type Error = Error;

    /// Convert a number of compass points into a `CompassPrecision`.
    /// * `points` - 4, 8, 16 or 32.
    fn try_from(points: u32) -> Result<Self, Self::Error> {
        match points {
            4 => Ok(Self::Four),
            8 => Ok(Self::Eight),
            16 => Ok(Self::Sixteen),
            32 => Ok(Self::ThirtyTwo),
            _ => {
                log::debug!("unsupported compass precision: {points}");
                Err(Error::InvalidCompassPrecision(points))
            }
        }
    }
}

/// Classify an angle as the nearest compass point.
/// * `angle` - the angle, anticlockwise from East.
/// * `precision` - the number of compass points.
///
/// returns the abbreviated name of the nearest compass point.
///
/// # Examples
/// ```
/// use spherical_nav::*;
///
/// assert_eq!("E", compass_point(Radians(0.0), CompassPrecision::Four));
/// assert_eq!("NW", compass_point(Radians(2.4), CompassPrecision::Eight));
///
/// let precision = CompassPrecision::try_from(12);
/// assert_eq!(Err(Error::InvalidCompassPrecision(12)), precision);
/// ```
#[must_use]
pub fn compass_point(angle: Radians, precision: CompassPrecision) -> &'static str {
    let points = f64::from(precision.points());
    let sector = libm::round(angle.0 / (TAU / points));
    let index = libm::fmod(sector, points);
    let index = if index < 0.0 { index + points } else { index };

    // index is a whole number in [0, points), NaN converts to zero
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let index = index as usize;
    precision.names()[index]
}

/// Classify an angle in degrees as the nearest compass point.
/// * `angle` - the angle, anticlockwise from East.
/// * `precision` - the number of compass points.
///
/// returns the abbreviated name of the nearest compass point.
#[must_use]
pub fn compass_point_from_degrees(angle: Degrees, precision: CompassPrecision) -> &'static str {
    compass_point(Radians::from(Angle::from(angle)), precision)
}
