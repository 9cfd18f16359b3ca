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

//! The dms module parses and formats positions written in degrees, minutes
//! and seconds, e.g. `32°13′18″N 110°55′35″W`.
//!
//! Each coordinate is one to three unsigned numbers followed by a
//! hemisphere letter: `N` or `S` for a latitude, `E` or `W` for a longitude.
//! The numbers may be separated by whitespace, degree, minute and second
//! symbols (`°`, `º`, `′`, `″`, `'`, `"`) and the coordinates by whitespace or
//! a comma. The latitude and longitude may be given in either order.

use core::fmt;
use thiserror::Error;

/// The reasons that a DMS string could not be parsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DmsError {
    /// The input is empty or whitespace.
    #[error("empty input")]
    Empty,
    /// A character that is not a digit, separator or hemisphere.
    #[error("unexpected character: '{0}'")]
    UnexpectedCharacter(char),
    /// A number that could not be parsed, e.g. `1.2.3`.
    #[error("invalid number")]
    InvalidNumber,
    /// More than degrees, minutes and seconds.
    #[error("more than three components in a coordinate")]
    TooManyComponents,
    /// Numbers after the last hemisphere letter.
    #[error("coordinate is missing its hemisphere")]
    MissingHemisphere,
    /// A hemisphere letter without a preceding number.
    #[error("hemisphere without a value")]
    MissingValue,
    /// Minutes of 60 or more.
    #[error("minutes out of range")]
    MinutesOutOfRange,
    /// Seconds of 60 or more.
    #[error("seconds out of range")]
    SecondsOutOfRange,
    /// A latitude greater than 90°.
    #[error("latitude out of range")]
    LatitudeOutOfRange,
    /// A longitude greater than 180°.
    #[error("longitude out of range")]
    LongitudeOutOfRange,
    /// Only one coordinate.
    #[error("expected a latitude and a longitude")]
    MissingCoordinate,
    /// Two latitudes or two longitudes.
    #[error("two latitudes or two longitudes")]
    DuplicateAxis,
    /// More than two coordinates.
    #[error("more than two coordinates")]
    TrailingInput,
}

/// The axis of a coordinate, given by its hemisphere.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    Latitude,
    Longitude,
}

/// The maximum number of components in a coordinate: degrees, minutes, seconds.
const MAX_COMPONENTS: usize = 3;

fn is_separator(c: char) -> bool {
    matches!(c, '°' | 'º' | '′' | '″' | '\'' | '"' | ',') || c.is_whitespace()
}

/// The accumulated components of the coordinate being parsed.
#[derive(Debug, Default)]
struct Components {
    values: [f64; MAX_COMPONENTS],
    count: usize,
}

impl Components {
    fn push(&mut self, text: &str) -> Result<(), DmsError> {
        if self.count == MAX_COMPONENTS {
            return Err(DmsError::TooManyComponents);
        }
        self.values[self.count] = text.parse::<f64>().map_err(|_| DmsError::InvalidNumber)?;
        self.count += 1;
        Ok(())
    }

    const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Convert the components into a signed coordinate in degrees and clear them.
    /// * `hemisphere` - the hemisphere letter that terminated the coordinate.
    fn take_coordinate(&mut self, hemisphere: char) -> Result<(Axis, f64), DmsError> {
        if self.is_empty() {
            return Err(DmsError::MissingValue);
        }

        let [degrees, minutes, seconds] = self.values;
        let count = self.count;
        *self = Self::default();

        if 1 < count && 60.0 <= minutes {
            return Err(DmsError::MinutesOutOfRange);
        }
        if 2 < count && 60.0 <= seconds {
            return Err(DmsError::SecondsOutOfRange);
        }
        let value = match count {
            1 => degrees,
            2 => degrees + minutes / 60.0,
            _ => degrees + minutes / 60.0 + seconds / 3600.0,
        };

        match hemisphere.to_ascii_uppercase() {
            'N' | 'S' if 90.0 < value => Err(DmsError::LatitudeOutOfRange),
            'E' | 'W' if 180.0 < value => Err(DmsError::LongitudeOutOfRange),
            'N' => Ok((Axis::Latitude, value)),
            'S' => Ok((Axis::Latitude, -value)),
            'E' => Ok((Axis::Longitude, value)),
            _ => Ok((Axis::Longitude, -value)),
        }
    }
}

/// Parse a DMS string into a latitude and longitude pair in degrees.
/// * `input` - the DMS string, e.g. `32°13′18″N 110°55′35″W`.
///
/// returns the (latitude, longitude) in degrees or the reason the string
/// could not be parsed.
///
/// # Errors
///
/// Returns a `DmsError` if `input` is not a valid DMS latitude and longitude.
///
/// # Examples
/// ```
/// use spherical_nav::position::dms::parse_dms;
/// use angle_sc::is_within_tolerance;
///
/// let (lat, lon) = parse_dms("32°13′18″N 110°55′35″W").unwrap();
/// assert!(is_within_tolerance(32.221_666_666, lat, 1e-9));
/// assert!(is_within_tolerance(-110.926_388_888, lon, 1e-9));
///
/// assert!(parse_dms("32°13′18″ 110°55′35″W").is_err());
/// ```
pub fn parse_dms(input: &str) -> Result<(f64, f64), DmsError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(DmsError::Empty);
    }

    let mut components = Components::default();
    let mut latitude: Option<f64> = None;
    let mut longitude: Option<f64> = None;
    let mut number_start: Option<usize> = None;

    for (i, c) in text.char_indices() {
        if c.is_ascii_digit() || c == '.' {
            number_start.get_or_insert(i);
            continue;
        }

        if let Some(start) = number_start.take() {
            components.push(&text[start..i])?;
        }

        match c {
            'N' | 'n' | 'S' | 's' | 'E' | 'e' | 'W' | 'w' => {
                if latitude.is_some() && longitude.is_some() {
                    return Err(DmsError::TrailingInput);
                }
                let (axis, value) = components.take_coordinate(c)?;
                let slot = match axis {
                    Axis::Latitude => &mut latitude,
                    Axis::Longitude => &mut longitude,
                };
                if slot.replace(value).is_some() {
                    return Err(DmsError::DuplicateAxis);
                }
            }
            c if is_separator(c) => {}
            c => return Err(DmsError::UnexpectedCharacter(c)),
        }
    }

    if let Some(start) = number_start {
        components.push(&text[start..])?;
    }
    if !components.is_empty() {
        return Err(DmsError::MissingHemisphere);
    }

    match (latitude, longitude) {
        (Some(lat), Some(lon)) => Ok((lat, lon)),
        _ => Err(DmsError::MissingCoordinate),
    }
}

/// The maximum number of decimal places of seconds that are rounded.
const MAX_PRECISION: usize = 12;

/// A `Display` adaptor that writes a latitude and longitude in DMS form.
///
/// The seconds are written to the precision of the formatter, default zero
/// decimal places, e.g. `32°13′18″N 110°55′35″W`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dms {
    latitude: f64,
    longitude: f64,
}

impl Dms {
    /// Constructor.
    /// * `latitude`, `longitude` - the coordinates in degrees.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Write a coordinate as degrees, minutes and seconds followed by its hemisphere.
fn write_coordinate(
    f: &mut fmt::Formatter<'_>,
    value: f64,
    hemispheres: (char, char),
    precision: usize,
) -> fmt::Result {
    // round the total seconds first, so that seconds never display as 60
    let scale = (0..precision.min(MAX_PRECISION)).fold(1.0, |scale, _| scale * 10.0);
    let total_seconds = libm::round(libm::fabs(value) * 3600.0 * scale) / scale;

    // a value that rounds to zero is N or E
    let hemisphere = if value < 0.0 && 0.0 < total_seconds {
        hemispheres.1
    } else {
        hemispheres.0
    };

    let degrees = libm::floor(total_seconds / 3600.0);
    let minutes = libm::floor((total_seconds - degrees * 3600.0) / 60.0);
    let seconds = total_seconds - degrees * 3600.0 - minutes * 60.0;

    write!(f, "{degrees:.0}°{minutes:.0}′{seconds:.precision$}″{hemisphere}")
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(0);
        write_coordinate(f, self.latitude, ('N', 'S'), precision)?;
        f.write_str(" ")?;
        write_coordinate(f, self.longitude, ('E', 'W'), precision)
    }
}
