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

//! The mercator module contains a spherical Mercator projection between
//! latitude and longitude and the pixels of a fixed size canvas.
//!
//! The longitude range [-180°, 180°] spans the width of the canvas and the
//! Equator is on the horizontal centre line. The vertical scale is the same
//! as the horizontal scale, so on a square canvas the latitude range is
//! ±`WEB_MERCATOR_MAX_LATITUDE`.
//!
//! The projection is singular at the poles.

use crate::{Degrees, GeoPosition, Radians};
use angle_sc::Angle;
use core::f64::consts::{FRAC_PI_4, PI, TAU};

/// The latitude at the top edge of a square canvas, `2 * atan(e^π) - π/2`,
/// in degrees.
pub const WEB_MERCATOR_MAX_LATITUDE: f64 = 85.051_128_779_806_6;

/// A position on the canvas in pixels.
/// `x` increases to the East and `y` increases to the South.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pixel {
    /// The horizontal position, from the left edge.
    pub x: f64,
    /// The vertical position, from the top edge.
    pub y: f64,
}

impl Pixel {
    /// Constructor.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Project a latitude and longitude onto the canvas.
/// * `latitude` - the latitude, strictly between the poles.
/// * `longitude` - the longitude.
/// * `width`, `height` - the size of the canvas in pixels.
///
/// returns the `Pixel` of the position on the canvas.
///
/// # Examples
/// ```
/// use spherical_nav::Degrees;
/// use spherical_nav::mercator::{Pixel, project_pixel};
///
/// let result = project_pixel(Degrees(0.0), Degrees(0.0), 1024.0, 512.0);
/// assert_eq!(Pixel::new(512.0, 256.0), result);
/// ```
#[must_use]
pub fn project_pixel(latitude: Degrees, longitude: Degrees, width: f64, height: f64) -> Pixel {
    let x = (longitude.0 + 180.0) * width / 360.0;
    let latitude = Radians::from(Angle::from(latitude)).0;
    let mercator_y = libm::log(libm::tan(latitude / 2.0 + FRAC_PI_4));
    let y = height / 2.0 - mercator_y * width / TAU;
    Pixel::new(x, y)
}

/// Unproject a `Pixel` on the canvas to a latitude and longitude,
/// the inverse of `project_pixel`.
/// * `pixel` - the position on the canvas.
/// * `width`, `height` - the size of the canvas in pixels.
///
/// returns the latitude and longitude of the `pixel`.
#[must_use]
pub fn unproject_pixel(pixel: Pixel, width: f64, height: f64) -> (Degrees, Degrees) {
    let longitude = pixel.x * 360.0 / width - 180.0;
    let mercator_y = (height / 2.0 - pixel.y) * TAU / width;
    let latitude = (libm::atan(libm::exp(mercator_y)) - FRAC_PI_4) * 2.0;
    (Degrees::from(Radians(latitude)), Degrees(longitude))
}

/// A Mercator projection onto a canvas of a fixed size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MercatorProjection {
    /// The width of the canvas in pixels.
    width: f64,
    /// The height of the canvas in pixels.
    height: f64,
}

impl MercatorProjection {
    /// Constructor.
    /// * `width`, `height` - the size of the canvas in pixels.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The width of the canvas in pixels.
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// The height of the canvas in pixels.
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// The latitude at the top edge of the canvas, in degrees.
    #[must_use]
    pub fn max_latitude(&self) -> Degrees {
        let mercator_y = PI * self.height / self.width;
        Degrees::from(Radians(2.0 * libm::atan(libm::exp(mercator_y)) - PI / 2.0))
    }

    /// Project a `GeoPosition` onto the canvas.
    /// * `position` - the position, not at a pole.
    #[must_use]
    pub fn project(&self, position: &GeoPosition) -> Pixel {
        project_pixel(
            position.latitude(),
            position.longitude(),
            self.width,
            self.height,
        )
    }

    /// Unproject a `Pixel` on the canvas to a `GeoPosition` with the default altitude.
    /// * `pixel` - the position on the canvas.
    #[must_use]
    pub fn unproject(&self, pixel: Pixel) -> GeoPosition {
        let (latitude, longitude) = unproject_pixel(pixel, self.width, self.height);
        GeoPosition::new(latitude, longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_project_pixel() {
        let result = project_pixel(Degrees(0.0), Degrees(-180.0), 1024.0, 512.0);
        assert_eq!(Pixel::new(0.0, 256.0), result);
        let result = project_pixel(Degrees(0.0), Degrees(180.0), 1024.0, 512.0);
        assert_eq!(Pixel::new(1024.0, 256.0), result);

        let result = project_pixel(Degrees(45.0), Degrees(90.0), 1024.0, 1024.0);
        assert_eq!(768.0, result.x);
        assert!(is_within_tolerance(368.358_437_801, result.y, 1e-9));

        // North is up
        let north = project_pixel(Degrees(10.0), Degrees(0.0), 1024.0, 1024.0);
        let south = project_pixel(Degrees(-10.0), Degrees(0.0), 1024.0, 1024.0);
        assert!(north.y < 512.0);
        assert!(is_within_tolerance(1024.0 - north.y, south.y, 1e-9));
    }

    #[test]
    fn test_project_pixel_square_canvas_edges() {
        let top = project_pixel(Degrees(WEB_MERCATOR_MAX_LATITUDE), Degrees(0.0), 256.0, 256.0);
        assert!(is_within_tolerance(0.0, top.y, 1e-9));
        let bottom = project_pixel(Degrees(-WEB_MERCATOR_MAX_LATITUDE), Degrees(0.0), 256.0, 256.0);
        assert!(is_within_tolerance(256.0, bottom.y, 1e-9));

        let projection = MercatorProjection::new(256.0, 256.0);
        assert!(is_within_tolerance(
            WEB_MERCATOR_MAX_LATITUDE,
            projection.max_latitude().0,
            1e-12
        ));
    }

    #[test]
    fn test_project_unproject_round_trip() {
        let (width, height) = (1920.0, 1080.0);
        for i in -84..85 {
            let lat = f64::from(i) + 0.25;
            for j in -18..18 {
                let lon = f64::from(j) * 10.0 + 0.5;
                let pixel = project_pixel(Degrees(lat), Degrees(lon), width, height);
                let (result_lat, result_lon) = unproject_pixel(pixel, width, height);
                assert!(is_within_tolerance(lat, result_lat.0, 1e-9));
                assert!(is_within_tolerance(lon, result_lon.0, 1e-9));
            }
        }
    }

    #[test]
    fn test_mercator_projection() {
        let projection = MercatorProjection::new(800.0, 600.0);
        assert_eq!(800.0, projection.width());
        assert_eq!(600.0, projection.height());

        let tucson = GeoPosition::new(Degrees(32.221_667), Degrees(-110.926_389));
        let pixel = projection.project(&tucson);
        assert!(pixel.x < 400.0);
        assert!(pixel.y < 300.0);

        let result = projection.unproject(pixel);
        assert!(is_within_tolerance(tucson.latitude().0, result.latitude().0, 1e-9));
        assert!(is_within_tolerance(tucson.longitude().0, result.longitude().0, 1e-9));

        let centre = projection.unproject(Pixel::new(400.0, 300.0));
        assert_eq!(GeoPosition::new(Degrees(0.0), Degrees(0.0)), centre);
        println!("MercatorProjection: {:?}", projection);
    }
}
