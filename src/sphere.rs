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

//! The sphere module contains types and functions for calculating
//! distances and positions between points on the surface of a sphere
//! using unit vectors.

pub mod arc;

extern crate nalgebra as na;
use crate::latlong::LatLong;
use crate::trig::{Degrees, Radians};
use crate::Validate;
use contracts::{debug_ensures, debug_requires};

/// A Point is a nalgebra Vector3.
pub type Point = na::Vector3<f64>;

/// The minimum length of a vector to normalize.
pub const MIN_LENGTH: f64 = 16384.0 * f64::EPSILON;

/// The mean radius of the Earth in metres, the radius used by map
/// distance services for great circle distances on the sphere.
pub const MEAN_RADIUS_M: f64 = 6_371_008.8;

/// Create a Point on the unit sphere from a position.
/// * `a` - the position.
#[debug_ensures(ret.is_valid())]
#[must_use]
pub fn to_sphere(a: &LatLong) -> Point {
    let phi = Radians::from(a.lat()).0;
    let lambda = Radians::from(a.lon()).0;
    let (sin_phi, cos_phi) = libm::sincos(phi);
    let (sin_lambda, cos_lambda) = libm::sincos(lambda);
    Point::new(cos_phi * cos_lambda, cos_phi * sin_lambda, sin_phi)
}

impl From<&LatLong> for Point {
    /// Convert a `LatLong` to a Point on the unit sphere
    fn from(value: &LatLong) -> Self {
        to_sphere(value)
    }
}

/// Calculate the latitude of a Point.
#[debug_requires(a.is_valid())]
#[debug_ensures(ret.is_valid_latitude())]
#[must_use]
pub fn latitude(a: &Point) -> Degrees {
    Degrees::from(Radians(libm::asin(crate::clamp(a.z, -1.0, 1.0))))
}

/// Calculate the longitude of a Point.
/// Note: poles do not have a longitude, zero is returned at a pole.
#[debug_requires(a.is_valid())]
#[must_use]
pub fn longitude(a: &Point) -> Degrees {
    Degrees::from(Radians(libm::atan2(a.y, a.x)))
}

impl From<&Point> for LatLong {
    /// Convert a Point to a `LatLong`
    fn from(value: &Point) -> Self {
        Self::new(latitude(value), longitude(value))
    }
}

/// Determine whether a Point is a unit vector.
///
/// returns true if Point is a unit vector, false otherwise.
#[must_use]
pub fn is_unit(a: &Point) -> bool {
    const MIN_POINT_SQ_LENGTH: f64 = 1.0 - 12.0 * f64::EPSILON;
    const MAX_POINT_SQ_LENGTH: f64 = 1.0 + 12.0 * f64::EPSILON;

    (MIN_POINT_SQ_LENGTH..=MAX_POINT_SQ_LENGTH).contains(&(a.norm()))
}

impl Validate for Point {
    /// Test whether a Point is valid.
    /// I.e. whether the Point is a unit vector.
    fn is_valid(&self) -> bool {
        is_unit(self)
    }
}

/// Calculate the square of the Euclidean distance between two Points.
/// Note: points do NOT need to be valid Points.
#[debug_ensures(0.0 <= ret)]
#[must_use]
pub fn sq_distance(a: &Point, b: &Point) -> f64 {
    (b - a).norm_squared()
}

/// Calculate the shortest (Euclidean) distance between two Points.
#[debug_ensures(0.0 <= ret)]
#[must_use]
pub fn distance(a: &Point, b: &Point) -> f64 {
    (b - a).norm()
}

/// Convert a Euclidean chord length to a Great Circle distance in
/// radians.
#[debug_requires((0.0..=2.0).contains(&e))]
#[must_use]
pub fn e2gc_distance(e: f64) -> Radians {
    Radians(2.0 * libm::asin(crate::clamp(0.5 * e, 0.0, 1.0)))
}

/// Calculate the Great Circle distance (in radians) between two points.
#[debug_requires(is_unit(a) && is_unit(b))]
#[debug_ensures(libm::fabs(ret.0) <= std::f64::consts::PI)]
#[must_use]
pub fn gc_distance(a: &Point, b: &Point) -> Radians {
    e2gc_distance(distance(a, b))
}

/// Calculate the direction vector of a Great Circle arc at a point.
/// * `a` - the point.
/// * `pole` - the pole of the Great Circle.
///
/// returns the direction vector at the point, along the great circle.
#[debug_requires(is_unit(a) && is_unit(pole))]
#[must_use]
pub fn direction(a: &Point, pole: &Point) -> Point {
    pole.cross(a)
}

/// Calculate the position of a point at a Great Circle distance along
/// the arc from a in the direction dir.
/// * `a` - the start point.
/// * `dir` - the direction vector of the Great Circle at a.
/// * `distance` - the Great Circle distance.
///
/// returns the position vector at distance along the great circle.
#[debug_requires(is_unit(a) && is_unit(dir))]
#[debug_ensures(is_unit(&ret))]
#[must_use]
pub fn position(a: &Point, dir: &Point, distance: Radians) -> Point {
    let (sin_d, cos_d) = libm::sincos(distance.0);
    a * cos_d + dir * sin_d
}

/// Calculate the Great Circle distance between two positions in metres,
/// on the mean radius sphere.
/// * `a`, `b` - the positions.
#[debug_ensures(0.0 <= ret)]
#[must_use]
pub fn distance_metres(a: &LatLong, b: &LatLong) -> f64 {
    gc_distance(&Point::from(a), &Point::from(b)).0 * MEAN_RADIUS_M
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::is_within_tolerance;

    #[test]
    fn test_point_lat_longs() {
        // Test Greenwich equator
        let lat_lon_0_0 = LatLong::new(Degrees(0.0), Degrees(0.0));
        let point_0 = Point::from(&lat_lon_0_0);
        assert!(is_unit(&point_0));
        assert_eq!(lat_lon_0_0, LatLong::from(&point_0));

        // Test South pole: longitude is zero, the poles do not have one
        let lat_lon_south = LatLong::new(Degrees(-90.0), Degrees(180.0));
        let point_south = Point::from(&lat_lon_south);
        let result = LatLong::from(&point_south);
        assert_eq!(Degrees(-90.0), result.lat());
        assert_eq!(Degrees(0.0), result.lon());

        // Test IDL equator, both representations
        let lat_lon_0_180 = LatLong::new(Degrees(0.0), Degrees(180.0));
        let point_1 = Point::from(&lat_lon_0_180);
        assert!(is_unit(&point_1));
        assert_eq!(Degrees(0.0), latitude(&point_1));
        assert!(is_within_tolerance(
            180.0,
            libm::fabs(longitude(&point_1).0),
            1e-12
        ));

        let lat_lon_45_45 = LatLong::new(Degrees(45.0), Degrees(45.0));
        let point_2 = Point::from(&lat_lon_45_45);
        assert!(is_unit(&point_2));
        assert!(is_within_tolerance(45.0, latitude(&point_2).0, 1e-12));
        assert!(is_within_tolerance(45.0, longitude(&point_2).0, 1e-12));
    }

    #[test]
    fn test_point_distance() {
        let south_pole = Point::from(&LatLong::new(Degrees(-90.0), Degrees(0.0)));
        let north_pole = Point::from(&LatLong::new(Degrees(90.0), Degrees(0.0)));

        assert_eq!(0.0, sq_distance(&south_pole, &south_pole));
        assert_eq!(0.0, distance(&north_pole, &north_pole));
        assert!(is_within_tolerance(
            4.0,
            sq_distance(&south_pole, &north_pole),
            4.0 * f64::EPSILON
        ));
        assert!(is_within_tolerance(
            2.0,
            distance(&south_pole, &north_pole),
            4.0 * f64::EPSILON
        ));
    }

    #[test]
    fn test_point_gc_distance() {
        let g_eq = Point::from(&LatLong::new(Degrees(0.0), Degrees(0.0)));
        let idl_eq = Point::from(&LatLong::new(Degrees(0.0), Degrees(180.0)));

        assert_eq!(0.0, gc_distance(&g_eq, &g_eq).0);
        assert!(is_within_tolerance(
            std::f64::consts::PI,
            gc_distance(&g_eq, &idl_eq).0,
            4.0 * f64::EPSILON
        ));

        let equator_90 = Point::from(&LatLong::new(Degrees(0.0), Degrees(90.0)));
        assert!(is_within_tolerance(
            std::f64::consts::FRAC_PI_2,
            gc_distance(&g_eq, &equator_90).0,
            4.0 * f64::EPSILON
        ));
    }

    #[test]
    fn test_direction_and_position() {
        let a = Point::from(&LatLong::new(Degrees(0.0), Degrees(0.0)));
        let b = Point::from(&LatLong::new(Degrees(0.0), Degrees(90.0)));

        let pole = a.cross(&b).normalize();
        let dir = direction(&a, &pole);
        assert!(is_unit(&dir));

        // half way along the equator quadrant
        let half_way = position(&a, &dir, Radians(std::f64::consts::FRAC_PI_4));
        assert!(is_unit(&half_way));
        assert!(is_within_tolerance(0.0, latitude(&half_way).0, 1e-12));
        assert!(is_within_tolerance(45.0, longitude(&half_way).0, 1e-12));

        // the full distance recovers b
        let end = position(&a, &dir, Radians(std::f64::consts::FRAC_PI_2));
        assert!(is_within_tolerance(0.0, distance(&b, &end), 4.0 * f64::EPSILON));
    }

    #[test]
    fn test_distance_metres() {
        // antipodal positions are half the circumference apart; the
        // chord to angle conversion is ill conditioned at the antipode,
        // so the tolerance is a metre on twenty thousand kilometres
        let p = LatLong::new(Degrees(30.0), Degrees(40.0));
        let a = p.antipode();
        assert!(is_within_tolerance(
            std::f64::consts::PI * MEAN_RADIUS_M,
            distance_metres(&p, &a),
            1.0
        ));

        // one degree of longitude along the equator
        let g_eq = LatLong::new(Degrees(0.0), Degrees(0.0));
        let deg_eq = LatLong::new(Degrees(0.0), Degrees(1.0));
        assert!(is_within_tolerance(
            MEAN_RADIUS_M * std::f64::consts::PI / 180.0,
            distance_metres(&g_eq, &deg_eq),
            1e-6
        ));
    }
}
