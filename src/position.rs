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

//! The position module contains the functions that normalise latitudes and
//! longitudes into their canonical ranges.
//!
//! Longitudes wrap cyclically into [-180°, 180°]. Latitudes fold (reflect)
//! at the poles into [-90°, 90°], e.g. 100° becomes 80°.
//!
//! Values that are already within range are returned unchanged, so
//! normalisation is idempotent.

pub mod dms;

/// Wrap a value cyclically into the interval [`min`, `max`].
///
/// Values inside the interval are returned unchanged. Values outside it are
/// wrapped into [`min`, `max`).
/// * `value` - the value to wrap.
/// * `min`, `max` - the bounds of the interval, `min < max`.
///
/// # Examples
/// ```
/// use spherical_nav::position::wrap;
///
/// assert_eq!(-170.0, wrap(190.0, -180.0, 180.0));
/// assert_eq!(10.0, wrap(370.0, 0.0, 360.0));
/// assert_eq!(180.0, wrap(180.0, -180.0, 180.0));
/// ```
#[must_use]
pub fn wrap(value: f64, min: f64, max: f64) -> f64 {
    if (min..=max).contains(&value) {
        value
    } else {
        let range = max - min;
        let offset = libm::fmod(value - min, range);
        if offset < 0.0 {
            offset + range + min
        } else {
            offset + min
        }
    }
}

/// Wrap a longitude in degrees into the range [-180°, 180°].
/// * `degrees` - the longitude in degrees.
#[must_use]
pub fn wrap_longitude(degrees: f64) -> f64 {
    wrap(degrees, -180.0, 180.0)
}

/// Fold a latitude in degrees into the range [-90°, 90°].
///
/// A latitude past a pole is reflected back from it, e.g. 100° is 80° and
/// -100° is -80°.
/// * `degrees` - the latitude in degrees.
///
/// # Examples
/// ```
/// use spherical_nav::position::fold_latitude;
///
/// assert_eq!(80.0, fold_latitude(100.0));
/// assert_eq!(-80.0, fold_latitude(-100.0));
/// assert_eq!(-10.0, fold_latitude(190.0));
/// ```
#[must_use]
pub fn fold_latitude(degrees: f64) -> f64 {
    if (-90.0..=90.0).contains(&degrees) {
        degrees
    } else {
        let value = wrap_longitude(degrees);
        if 90.0 < value {
            180.0 - value
        } else if value < -90.0 {
            -180.0 - value
        } else {
            value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap() {
        assert_eq!(0.0, wrap(0.0, -180.0, 180.0));
        assert_eq!(-180.0, wrap(-180.0, -180.0, 180.0));
        assert_eq!(180.0, wrap(180.0, -180.0, 180.0));

        assert_eq!(-170.0, wrap(190.0, -180.0, 180.0));
        assert_eq!(170.0, wrap(-190.0, -180.0, 180.0));
        assert_eq!(-180.0, wrap(540.0, -180.0, 180.0));
        assert_eq!(45.0, wrap(45.0 + 720.0, -180.0, 180.0));
        assert_eq!(45.0, wrap(45.0 - 720.0, -180.0, 180.0));

        assert_eq!(350.0, wrap(-10.0, 0.0, 360.0));
        assert_eq!(0.0, wrap(360.0 * 3.0, 0.0, 360.0));

        assert!(wrap(f64::NAN, -180.0, 180.0).is_nan());
    }

    #[test]
    fn test_wrap_longitude() {
        for i in -180_i32..=180 {
            let lon = f64::from(i);
            // in range values are unchanged
            assert_eq!(lon, wrap_longitude(lon));

            // whole turns are removed, except at the anti-meridian
            if i.abs() < 180 {
                for k in [-3.0, -1.0, 1.0, 2.0] {
                    assert_eq!(lon, wrap_longitude(lon + 360.0 * k));
                }
            }
        }
    }

    #[test]
    fn test_fold_latitude() {
        for i in -90..=90 {
            let lat = f64::from(i);
            assert_eq!(lat, fold_latitude(lat));
            assert_eq!(lat, fold_latitude(lat + 360.0));
            assert_eq!(lat, fold_latitude(lat - 720.0));
        }

        assert_eq!(80.0, fold_latitude(100.0));
        assert_eq!(-80.0, fold_latitude(-100.0));
        assert_eq!(0.0, fold_latitude(180.0));
        assert_eq!(0.0, fold_latitude(-180.0));
        assert_eq!(-10.0, fold_latitude(190.0));
        assert_eq!(-90.0, fold_latitude(270.0));
        assert_eq!(10.0, fold_latitude(-190.0));
    }
}
