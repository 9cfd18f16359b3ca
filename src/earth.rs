// Copyright (c) 2024 Ken Barker

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

//! The earth module contains the radii used to scale central angles on the
//! unit sphere into distances on the surface of the Earth.
//!
//! The radii are from the WGS-84 ellipsoid: the Semimajor axis (equatorial
//! radius), the Semiminor axis (polar radius) and the IUGG mean radius
//! `(2a + b) / 3`.
//!
//! A great circle distance is the central angle multiplied by a radius, so
//! the distance is in the units of the radius.

use icao_units::non_si::METRES_PER_NAUTICAL_MILE;
use icao_units::si::Metres;

/// The WGS-84 equatorial radius (Semimajor axis) in metres.
pub const EQUATORIAL_RADIUS: Metres = Metres(6_378_137.0);

/// The WGS-84 polar radius (Semiminor axis) in metres.
pub const POLAR_RADIUS: Metres = Metres(6_356_752.314_245_179);

/// The IUGG mean radius of the Earth in metres.
pub const MEAN_RADIUS: Metres = Metres(6_371_008.8);

/// The number of metres in a statute mile.
pub const METRES_PER_MILE: f64 = 1_609.344;

/// The named radii of the Earth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EarthRadius {
    /// The radius at the Equator.
    Equatorial,
    /// The IUGG mean radius.
    Mean,
    /// The radius at the poles.
    Polar,
}

/// The units of length that the radii are tabulated in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    /// Kilometres.
    Kilometres,
    /// Metres.
    Metres,
    /// Statute miles.
    Miles,
    /// International nautical miles.
    NauticalMiles,
}

/// The radii table, indexed by `EarthRadius` then `LengthUnit`.
const RADII: [[f64; 4]; 3] = [
    [
        EQUATORIAL_RADIUS.0 / 1_000.0,
        EQUATORIAL_RADIUS.0,
        EQUATORIAL_RADIUS.0 / METRES_PER_MILE,
        EQUATORIAL_RADIUS.0 / METRES_PER_NAUTICAL_MILE,
    ],
    [
        MEAN_RADIUS.0 / 1_000.0,
        MEAN_RADIUS.0,
        MEAN_RADIUS.0 / METRES_PER_MILE,
        MEAN_RADIUS.0 / METRES_PER_NAUTICAL_MILE,
    ],
    [
        POLAR_RADIUS.0 / 1_000.0,
        POLAR_RADIUS.0,
        POLAR_RADIUS.0 / METRES_PER_MILE,
        POLAR_RADIUS.0 / METRES_PER_NAUTICAL_MILE,
    ],
];

impl EarthRadius {
    /// The radius in the given units.
    /// * `unit` - the units of length.
    ///
    /// # Examples
    /// ```
    /// use spherical_nav::earth::{EarthRadius, LengthUnit};
    ///
    /// assert_eq!(6_371.0088, EarthRadius::Mean.in_unit(LengthUnit::Kilometres));
    /// ```
    #[must_use]
    pub const fn in_unit(self, unit: LengthUnit) -> f64 {
        RADII[self as usize][unit as usize]
    }

    /// The radius in `Metres`.
    #[must_use]
    pub const fn metres(self) -> Metres {
        match self {
            Self::Equatorial => EQUATORIAL_RADIUS,
            Self::Mean => MEAN_RADIUS,
            Self::Polar => POLAR_RADIUS,
        }
    }

    /// The radius in kilometres.
    #[must_use]
    pub const fn kilometres(self) -> f64 {
        self.in_unit(LengthUnit::Kilometres)
    }

    /// The radius in statute miles.
    #[must_use]
    pub const fn miles(self) -> f64 {
        self.in_unit(LengthUnit::Miles)
    }

    /// The radius in nautical miles.
    #[must_use]
    pub const fn nautical_miles(self) -> f64 {
        self.in_unit(LengthUnit::NauticalMiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_earth_radius_metres() {
        assert_eq!(EQUATORIAL_RADIUS, EarthRadius::Equatorial.metres());
        assert_eq!(MEAN_RADIUS, EarthRadius::Mean.metres());
        assert_eq!(POLAR_RADIUS, EarthRadius::Polar.metres());

        for radius in [EarthRadius::Equatorial, EarthRadius::Mean, EarthRadius::Polar] {
            assert_eq!(radius.metres().0, radius.in_unit(LengthUnit::Metres));
        }

        // The mean radius is (2a + b) / 3
        let mean = (2.0 * EQUATORIAL_RADIUS.0 + POLAR_RADIUS.0) / 3.0;
        assert!(is_within_tolerance(mean, MEAN_RADIUS.0, 0.05));
    }

    #[test]
    fn test_earth_radius_units() {
        assert_eq!(6_378.137, EarthRadius::Equatorial.kilometres());
        assert!(is_within_tolerance(
            3_963.190_592,
            EarthRadius::Equatorial.miles(),
            1.0e-6
        ));
        assert!(is_within_tolerance(
            3_443.918_467,
            EarthRadius::Equatorial.nautical_miles(),
            1.0e-6
        ));

        assert!(is_within_tolerance(
            3_958.761_3,
            EarthRadius::Mean.miles(),
            1.0e-4
        ));
        assert!(is_within_tolerance(
            3_440.069_546,
            EarthRadius::Mean.nautical_miles(),
            1.0e-6
        ));

        assert!(is_within_tolerance(
            6_356.752_314,
            EarthRadius::Polar.kilometres(),
            1.0e-6
        ));
        assert!(is_within_tolerance(
            3_949.902_764,
            EarthRadius::Polar.miles(),
            1.0e-6
        ));
        assert!(is_within_tolerance(
            3_432.371_660,
            EarthRadius::Polar.nautical_miles(),
            1.0e-6
        ));
    }

    #[test]
    fn test_earth_radius_nautical_miles_match_icao_units() {
        use icao_units::non_si::NauticalMiles;

        for radius in [EarthRadius::Equatorial, EarthRadius::Mean, EarthRadius::Polar] {
            assert_eq!(
                NauticalMiles::from(radius.metres()).0,
                radius.nautical_miles()
            );
        }
        assert_eq!(1_852.0, METRES_PER_NAUTICAL_MILE);
    }

    #[test]
    fn test_earth_radius_traits() {
        let radius = EarthRadius::Mean;
        let radius_clone = radius;
        assert_eq!(radius_clone, radius);
        println!("EarthRadius: {:?} {:?}", radius, LengthUnit::Miles);
    }
}
