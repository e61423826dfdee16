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

//! The arc module contains the `Arc` type and the great circle arc
//! fitter.
//!
//! An `Arc` is one continuous run of interpolated positions along a
//! great circle that never wraps across the antimeridian; a fitted path
//! that crosses the antimeridian is returned as two or more `Arc`s,
//! split at the crossing.

use super::{direction, distance, gc_distance, position, to_sphere, MIN_LENGTH};
use crate::error::{Error, Result};
use crate::latlong::LatLong;
use crate::trig::{Degrees, Radians};
use crate::Validate;
use contracts::{debug_invariant, debug_requires};

/// Half a turn of longitude, the antimeridian boundary value.
const HALF_TURN: f64 = 180.0;

/// An ordered collection of positions along a great circle.
#[derive(Clone, Debug, PartialEq)]
pub struct Arc {
    /// The positions.
    points: Vec<LatLong>,
}

impl Validate for Arc {
    /// Test whether an `Arc` is valid.
    /// I.e. it has more than one point and no consecutive pair of points
    /// wraps across the antimeridian.
    fn is_valid(&self) -> bool {
        1 < self.points.len()
            && self
                .points
                .windows(2)
                .all(|pair| libm::fabs(pair[1].lon().0 - pair[0].lon().0) <= HALF_TURN)
    }
}

#[debug_invariant(self.is_valid())]
impl Arc {
    /// Construct an Arc
    /// * `points` - the positions, already split at the antimeridian.
    #[debug_requires(1 < points.len())]
    #[must_use]
    pub fn new(points: Vec<LatLong>) -> Self {
        Self { points }
    }

    /// The number of positions.
    #[must_use]
    pub fn count(&self) -> usize {
        self.points.len()
    }

    /// Accessor for the positions.
    #[must_use]
    pub fn points(&self) -> &[LatLong] {
        &self.points
    }

    /// The first position of the arc.
    #[must_use]
    pub fn first(&self) -> LatLong {
        self.points[0]
    }

    /// The last position of the arc.
    #[must_use]
    pub fn last(&self) -> LatLong {
        self.points[self.points.len() - 1]
    }
}

/// Interpolate the great circle path between a pair of positions.
///
/// The path is sampled with `segments` uniformly spaced spherical
/// interpolation steps, so it contains `segments + 1` positions; the
/// first and last are exactly `p0` and `p1`. The samples are *not* split
/// at the antimeridian, see [`fit`].
///
/// * `p0`, `p1` - the start and end positions.
/// * `segments` - the number of interpolation steps, >= 1.
///
/// returns the interpolated positions, or an error:
/// * `InvalidArgument` if `segments` is zero,
/// * `DegenerateInput` if the positions are coincident or antipodal,
///   where no unique great circle exists.
pub fn interpolate(p0: &LatLong, p1: &LatLong, segments: u32) -> Result<Vec<LatLong>> {
    if segments < 1 {
        return Err(Error::InvalidArgument("segments must be >= 1"));
    }

    let a = to_sphere(p0);
    let b = to_sphere(p1);

    let chord = distance(&a, &b);
    if chord < MIN_LENGTH {
        return Err(Error::DegenerateInput("coincident positions"));
    }
    if 2.0 - chord < MIN_LENGTH {
        return Err(Error::DegenerateInput("antipodal positions"));
    }

    let pole = a.cross(&b).normalize();
    let dir = direction(&a, &pole);
    let arc_length = gc_distance(&a, &b);

    let mut samples = Vec::with_capacity(segments as usize + 1);
    samples.push(*p0);
    for i in 1..segments {
        let step = Radians(arc_length.0 * f64::from(i) / f64::from(segments));
        samples.push(LatLong::from(&position(&a, &dir, step)));
    }
    samples.push(*p1);

    Ok(samples)
}

/// Fit a great circle path between a pair of positions.
///
/// The path is interpolated with [`interpolate`]. If it crosses the
/// antimeridian it is split there: the crossing latitude is
/// interpolated, the arc is closed at longitude +/-180 with the sign of
/// the side it approaches from and the next arc opens on the other
/// side.
///
/// * `p0`, `p1` - the start and end positions.
/// * `segments` - the number of interpolation steps, >= 1.
///
/// returns the arcs of the path, or an error, see [`interpolate`].
pub fn fit(p0: &LatLong, p1: &LatLong, segments: u32) -> Result<Vec<Arc>> {
    Ok(split_at_antimeridian(&interpolate(p0, p1, segments)?))
}

/// Split interpolated positions into arcs wherever consecutive
/// longitudes wrap across the antimeridian.
fn split_at_antimeridian(samples: &[LatLong]) -> Vec<Arc> {
    let mut arcs = Vec::new();
    let mut current = vec![samples[0]];

    for &next in &samples[1..] {
        let prev = current[current.len() - 1];
        let delta = next.lon().0 - prev.lon().0;
        if libm::fabs(delta) <= HALF_TURN {
            current.push(next);
            continue;
        }

        // the short way round wraps: find the crossing latitude by
        // interpolating against the unwrapped longitude
        let shift = if 0.0 < delta { -360.0 } else { 360.0 };
        let unwrapped = next.lon().0 + shift;
        let boundary = 0.5 * shift;
        let t = (boundary - prev.lon().0) / (unwrapped - prev.lon().0);

        if t <= f64::EPSILON {
            // prev already lies on the antimeridian
            if 1 < current.len() {
                arcs.push(Arc::new(current));
            }
            current = vec![LatLong::new(prev.lat(), Degrees(-boundary)), next];
        } else if 1.0 - t <= f64::EPSILON {
            // next lies on the antimeridian: represent it on prev's side
            current.push(LatLong::new(next.lat(), Degrees(boundary)));
            arcs.push(Arc::new(current));
            current = vec![LatLong::new(next.lat(), Degrees(-boundary))];
        } else {
            let lat_x = Degrees(prev.lat().0 + t * (next.lat().0 - prev.lat().0));
            current.push(LatLong::new(lat_x, Degrees(boundary)));
            arcs.push(Arc::new(current));
            current = vec![LatLong::new(lat_x, Degrees(-boundary)), next];
        }
    }

    if 1 < current.len() {
        arcs.push(Arc::new(current));
    }

    arcs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::is_within_tolerance;
    use crate::sphere::distance_metres;

    #[test]
    fn test_fit_invalid_segments() {
        let p0 = LatLong::new(Degrees(0.0), Degrees(0.0));
        let p1 = LatLong::new(Degrees(0.0), Degrees(10.0));
        assert_eq!(
            Err(Error::InvalidArgument("segments must be >= 1")),
            fit(&p0, &p1, 0)
        );
    }

    #[test]
    fn test_fit_coincident() {
        let p = LatLong::new(Degrees(45.0), Degrees(-120.0));
        assert_eq!(
            Err(Error::DegenerateInput("coincident positions")),
            fit(&p, &p, 10)
        );
    }

    #[test]
    fn test_fit_antipodal() {
        for (lat, lon) in [(0.0, 0.0), (45.0, -120.0), (-30.0, 180.0), (89.0, 10.0)] {
            let p = LatLong::new(Degrees(lat), Degrees(lon));
            let a = p.antipode();
            for segments in [1, 2, 40] {
                assert_eq!(
                    Err(Error::DegenerateInput("antipodal positions")),
                    fit(&p, &a, segments)
                );
            }
        }
    }

    #[test]
    fn test_interpolate_does_not_split() {
        let p0 = LatLong::new(Degrees(0.0), Degrees(170.0));
        let p1 = LatLong::new(Degrees(0.0), Degrees(-170.0));
        let samples = interpolate(&p0, &p1, 5).unwrap();

        assert_eq!(6, samples.len());
        assert_eq!(p0, samples[0]);
        assert_eq!(p1, samples[5]);
    }

    #[test]
    fn test_fit_equator() {
        let p0 = LatLong::new(Degrees(0.0), Degrees(0.0));
        let p1 = LatLong::new(Degrees(0.0), Degrees(10.0));
        let arcs = fit(&p0, &p1, 40).unwrap();

        assert_eq!(1, arcs.len());
        let arc = &arcs[0];
        assert_eq!(41, arc.count());
        assert_eq!(p0, arc.first());
        assert_eq!(p1, arc.last());

        // intermediate points lie on the equator, longitudes increase
        for pair in arc.points().windows(2) {
            assert!(is_within_tolerance(0.0, pair[1].lat().0, 1e-12));
            assert!(pair[0].lon().0 < pair[1].lon().0);
        }
        assert!(is_within_tolerance(5.0, arc.points()[20].lon().0, 1e-12));
    }

    #[test]
    fn test_fit_meridian() {
        let p0 = LatLong::new(Degrees(30.0), Degrees(20.0));
        let p1 = LatLong::new(Degrees(60.0), Degrees(20.0));
        let arcs = fit(&p0, &p1, 6).unwrap();

        assert_eq!(1, arcs.len());
        let arc = &arcs[0];
        assert_eq!(7, arc.count());
        for (i, point) in arc.points().iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let expected_lat = 5.0f64.mul_add(i as f64, 30.0);
            assert!(is_within_tolerance(expected_lat, point.lat().0, 1e-12));
            assert!(is_within_tolerance(20.0, point.lon().0, 1e-12));
        }
    }

    #[test]
    fn test_fit_uniform_spacing() {
        let p0 = LatLong::new(Degrees(10.0), Degrees(-30.0));
        let p1 = LatLong::new(Degrees(50.0), Degrees(40.0));
        let arcs = fit(&p0, &p1, 8).unwrap();
        assert_eq!(1, arcs.len());

        let points = arcs[0].points();
        let step = distance_metres(&points[0], &points[1]);
        for pair in points.windows(2) {
            assert!(is_within_tolerance(
                step,
                distance_metres(&pair[0], &pair[1]),
                1e-3
            ));
        }
    }

    #[test]
    fn test_fit_antimeridian_crossing() {
        let p0 = LatLong::new(Degrees(0.0), Degrees(170.0));
        let p1 = LatLong::new(Degrees(0.0), Degrees(-170.0));
        let arcs = fit(&p0, &p1, 5).unwrap();

        assert_eq!(2, arcs.len());
        // 6 interpolated positions plus the crossing pair
        let total: usize = arcs.iter().map(Arc::count).sum();
        assert_eq!(8, total);

        assert_eq!(p0, arcs[0].first());
        assert_eq!(Degrees(180.0), arcs[0].last().lon());
        assert_eq!(Degrees(-180.0), arcs[1].first().lon());
        assert_eq!(p1, arcs[1].last());

        // the crossing is on the equator
        assert!(is_within_tolerance(0.0, arcs[0].last().lat().0, 1e-9));

        // no arc wraps across the antimeridian
        for arc in &arcs {
            assert!(arc.is_valid());
        }
    }

    #[test]
    fn test_fit_antimeridian_oblique() {
        // an oblique crossing: the split latitude is interpolated
        let p0 = LatLong::new(Degrees(10.0), Degrees(160.0));
        let p1 = LatLong::new(Degrees(-20.0), Degrees(-150.0));
        let arcs = fit(&p0, &p1, 32).unwrap();

        assert_eq!(2, arcs.len());
        let total: usize = arcs.iter().map(Arc::count).sum();
        assert_eq!(35, total);

        assert_eq!(180.0, libm::fabs(arcs[0].last().lon().0));
        assert_eq!(180.0, libm::fabs(arcs[1].first().lon().0));
        assert_eq!(arcs[0].last().lat(), arcs[1].first().lat());
        for arc in &arcs {
            assert!(arc.is_valid());
        }
    }

    #[test]
    fn test_fit_endpoint_on_antimeridian() {
        // the end position sits exactly on the antimeridian: the final
        // arc is closed with the longitude sign of its approach side
        let p0 = LatLong::new(Degrees(0.0), Degrees(170.0));
        let p1 = LatLong::new(Degrees(0.0), Degrees(-180.0));
        let arcs = fit(&p0, &p1, 2).unwrap();

        assert_eq!(1, arcs.len());
        assert_eq!(3, arcs[0].count());
        assert_eq!(p0, arcs[0].first());
        assert_eq!(Degrees(180.0), arcs[0].last().lon());
        assert!(is_within_tolerance(0.0, arcs[0].last().lat().0, 1e-12));
    }
}
