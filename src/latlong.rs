// Copyright (c) 2025 Via Technology Ltd.

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

//! The latlong module contains the `LatLong` type for representing
//! positions on the surface of a sphere, the antipode of a position and
//! the initial azimuth and great circle distance between positions.
//!
//! All distances on the surface of the unit sphere are measured in
//! radians. Physical distances can be calculated by multiplying by the
//! radius of the sphere, see [`crate::sphere::distance_metres`].

pub mod geojson;

use crate::error::{Error, Result};
use crate::trig::{Degrees, Radians};
use crate::Validate;
use contracts::{debug_invariant, debug_requires};
use serde::{Deserialize, Serialize};

/// A position as a latitude and longitude pair of `Degrees`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLong {
    lat: Degrees,
    lon: Degrees,
}

impl Validate for LatLong {
    /// Test whether a `LatLong` is valid.
    /// I.e. whether the latitude lies in -90.0..=90.0 and the longitude
    /// in -180.0..=180.0.
    fn is_valid(&self) -> bool {
        self.lat.is_valid_latitude() && self.lon.is_valid()
    }
}

#[debug_invariant(self.is_valid())]
impl LatLong {
    #[debug_requires(lat.is_valid_latitude() && lon.is_valid())]
    #[must_use]
    pub fn new(lat: Degrees, lon: Degrees) -> Self {
        Self { lat, lon }
    }

    #[must_use]
    pub fn lat(&self) -> Degrees {
        self.lat
    }

    #[must_use]
    pub fn lon(&self) -> Degrees {
        self.lon
    }

    /// The position diametrically opposite this position on the sphere:
    /// `(lon - 180 * sign(lon), -lat)`, where `sign(0)` is taken as `+1`
    /// so that the antipode of a position on the Greenwich meridian lies
    /// on the antimeridian. The operation is an involution:
    /// `p.antipode().antipode() == p`.
    /// # Examples
    /// ```
    /// use via_sightline::trig::Degrees;
    /// use via_sightline::LatLong;
    ///
    /// let p = LatLong::new(Degrees(45.0), Degrees(30.0));
    /// assert_eq!(LatLong::new(Degrees(-45.0), Degrees(-150.0)), p.antipode());
    /// assert_eq!(p, p.antipode().antipode());
    ///
    /// let greenwich = LatLong::new(Degrees(51.5), Degrees(0.0));
    /// assert_eq!(Degrees(-180.0), greenwich.antipode().lon());
    /// ```
    #[must_use]
    pub fn antipode(&self) -> Self {
        let lon = if 0.0 <= self.lon.0 {
            Degrees(self.lon.0 - 180.0)
        } else {
            Degrees(self.lon.0 + 180.0)
        };
        Self::new(-self.lat, lon)
    }
}

impl TryFrom<(f64, f64)> for LatLong {
    type Error = Error;

    /// Attempt to convert a pair of f64 values in latitude, longitude order.
    fn try_from(values: (f64, f64)) -> Result<Self> {
        if !Degrees::is_latitude(values.0) {
            return Err(Error::InvalidArgument("latitude out of range"));
        }
        if !Degrees::is_longitude(values.1) {
            return Err(Error::InvalidArgument("longitude out of range"));
        }
        Ok(Self::new(Degrees(values.0), Degrees(values.1)))
    }
}

/// Calculate the azimuth and distance along the great circle of point b
/// from point a.
/// * `a`, `b` - the start and end positions
///
/// returns the great circle azimuth relative to North and the distance
/// of point b from point a in `Radians`.
#[must_use]
pub fn calculate_azimuth_and_distance(a: &LatLong, b: &LatLong) -> (Radians, Radians) {
    let phi_a = Radians::from(a.lat()).0;
    let phi_b = Radians::from(b.lat()).0;
    let delta_lon = Radians::from(b.lon() - a.lon()).0;

    let azimuth = libm::atan2(
        libm::sin(delta_lon) * libm::cos(phi_b),
        libm::cos(phi_a) * libm::sin(phi_b)
            - libm::sin(phi_a) * libm::cos(phi_b) * libm::cos(delta_lon),
    );

    // haversine
    let sin_half_dlat = libm::sin(0.5 * (phi_b - phi_a));
    let sin_half_dlon = libm::sin(0.5 * delta_lon);
    let a_term = sin_half_dlat * sin_half_dlat
        + libm::cos(phi_a) * libm::cos(phi_b) * sin_half_dlon * sin_half_dlon;
    let distance = 2.0 * libm::asin(crate::min(1.0, libm::sqrt(a_term)));

    (Radians(azimuth), Radians(distance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::is_within_tolerance;
    use crate::trig::DEG2RAD;

    #[test]
    fn test_latlong_traits() {
        let a = LatLong::new(Degrees(0.0), Degrees(90.0));

        let a_clone = a.clone();
        assert!(a_clone == a);

        print!("LatLong: {a:?}");
    }

    #[test]
    fn test_latlong_try_from() {
        let a = LatLong::try_from((45.0, -120.0)).unwrap();
        assert_eq!(Degrees(45.0), a.lat());
        assert_eq!(Degrees(-120.0), a.lon());

        assert_eq!(
            Err(Error::InvalidArgument("latitude out of range")),
            LatLong::try_from((90.01, 0.0))
        );
        assert_eq!(
            Err(Error::InvalidArgument("longitude out of range")),
            LatLong::try_from((0.0, -180.01))
        );
    }

    #[test]
    fn test_antipode() {
        let p = LatLong::new(Degrees(30.0), Degrees(45.0));
        assert_eq!(LatLong::new(Degrees(-30.0), Degrees(-135.0)), p.antipode());
        assert_eq!(p, p.antipode().antipode());

        // sign(0) is +1: the antipode longitude is -180, never 0
        let meridian = LatLong::new(Degrees(10.0), Degrees(0.0));
        assert_eq!(
            LatLong::new(Degrees(-10.0), Degrees(-180.0)),
            meridian.antipode()
        );
        assert_eq!(meridian, meridian.antipode().antipode());

        // both antimeridian representations map to the Greenwich meridian
        let idl_east = LatLong::new(Degrees(0.0), Degrees(180.0));
        let idl_west = LatLong::new(Degrees(0.0), Degrees(-180.0));
        assert_eq!(Degrees(0.0), idl_east.antipode().lon());
        assert_eq!(Degrees(0.0), idl_west.antipode().lon());
    }

    #[test]
    fn test_great_circle_90n_0n_0e() {
        let a = LatLong::new(Degrees(90.0), Degrees(0.0));
        let b = LatLong::new(Degrees(0.0), Degrees(0.0));
        let (azimuth, distance) = calculate_azimuth_and_distance(&a, &b);

        assert!(is_within_tolerance(
            std::f64::consts::FRAC_PI_2,
            distance.0,
            48.0 * f64::EPSILON
        ));
        assert_eq!(180.0, Degrees::from(azimuth).0);
    }

    #[test]
    fn test_great_circle_0n_60e_0n_60w() {
        let a = LatLong::new(Degrees(0.0), Degrees(60.0));
        let b = LatLong::new(Degrees(0.0), Degrees(-60.0));
        let (azimuth, distance) = calculate_azimuth_and_distance(&a, &b);

        assert!(is_within_tolerance(
            DEG2RAD * 120.0,
            distance.0,
            48.0 * f64::EPSILON
        ));
        assert_eq!(-90.0, Degrees::from(azimuth).0);
    }

    #[test]
    fn test_great_circle_30n_60n_0e() {
        let a = LatLong::new(Degrees(30.0), Degrees(0.0));
        let b = LatLong::new(Degrees(60.0), Degrees(0.0));
        let (azimuth, distance) = calculate_azimuth_and_distance(&a, &b);

        assert!(is_within_tolerance(
            std::f64::consts::FRAC_PI_6,
            distance.0,
            48.0 * f64::EPSILON
        ));
        assert_eq!(0.0, Degrees::from(azimuth).0);

        let (azimuth, distance) = calculate_azimuth_and_distance(&b, &a);
        assert!(is_within_tolerance(
            std::f64::consts::FRAC_PI_6,
            distance.0,
            48.0 * f64::EPSILON
        ));
        assert_eq!(180.0, Degrees::from(azimuth).0);
    }

    #[test]
    fn test_great_circle_60n_60n_30w() {
        let a = LatLong::new(Degrees(60.0), Degrees(0.0));
        let b = LatLong::new(Degrees(60.0), Degrees(-30.0));
        let (azimuth, distance) = calculate_azimuth_and_distance(&a, &b);

        assert!(is_within_tolerance(
            DEG2RAD * 14.870_944_452_263_704,
            distance.0,
            1e-12
        ));
        assert!(is_within_tolerance(
            -76.935_686_570_491_71,
            Degrees::from(azimuth).0,
            1e-9
        ));
    }

    #[test]
    fn test_serde() {
        let a = LatLong::new(Degrees(45.0), Degrees(-120.0));
        let text = serde_json::to_string(&a).unwrap();
        assert_eq!("{\"lat\":45.0,\"lon\":-120.0}", text);
        let result: LatLong = serde_json::from_str(&text).unwrap();
        assert_eq!(a, result);
    }
}
