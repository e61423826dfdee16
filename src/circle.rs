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

//! The circle module generates equidistance circles: closed rings of
//! points at a constant great circle distance from a center position.
//!
//! The ring is generated by projecting the `through` position into an
//! azimuthal projection re-centered on `center` and rotating it about
//! the projection origin, which preserves the great circle distance
//! from the center, then reprojecting each rotated point into the
//! working projection.

use crate::error::{Error, Result};
use crate::latlong::LatLong;
use crate::planar::PlanarPoint;
use crate::projection::{Azimuthal, AzimuthalCache, Projection};
use crate::sphere::{distance, distance_metres, to_sphere, MIN_LENGTH};
use crate::trig::Radians;

/// A closed ring of points at constant great circle distance from a
/// center position, in working projection coordinates, with the true
/// geodesic radius for labelling.
#[derive(Clone, Debug, PartialEq)]
pub struct EquidistanceCircle {
    points: Vec<PlanarPoint>,
    radius_metres: f64,
}

impl EquidistanceCircle {
    /// The ring points; the first point is repeated as the last.
    #[must_use]
    pub fn points(&self) -> &[PlanarPoint] {
        &self.points
    }

    /// The great circle distance from the center to the ring in metres,
    /// computed in geographic space, not from the projection.
    #[must_use]
    pub const fn radius_metres(&self) -> f64 {
        self.radius_metres
    }

    /// The radius formatted for display, see
    /// [`format_distance`](crate::marker::format_distance).
    #[must_use]
    pub fn label(&self) -> String {
        crate::marker::format_distance(self.radius_metres)
    }
}

/// Generate the circle of constant great circle distance from `center`
/// through `through`.
///
/// * `center` - the circle center.
/// * `through` - the position the circle passes through; it defines the
///   radius.
/// * `samples` - the number of ring points to generate, >= 3; the ring
///   is closed by repeating the first point, so it contains
///   `samples + 1` points.
/// * `cache` - the azimuthal projection cache; the projection centered
///   at `center` is created on first use and reused afterwards.
/// * `working` - the working projection for the ring coordinates.
///
/// returns the circle, or an error:
/// * `InvalidArgument` if `samples` is below 3,
/// * `DegenerateInput` if `center` and `through` are coincident or
///   antipodal, where no unique bearing from the center exists,
/// * `Projection` if a ring point cannot be projected.
pub fn equidistance_circle(
    center: &LatLong,
    through: &LatLong,
    samples: u32,
    cache: &mut AzimuthalCache,
    working: &dyn Projection,
) -> Result<EquidistanceCircle> {
    if samples < 3 {
        return Err(Error::InvalidArgument("samples must be >= 3"));
    }

    let chord = distance(&to_sphere(center), &to_sphere(through));
    if chord < MIN_LENGTH {
        return Err(Error::DegenerateInput("coincident positions"));
    }
    if 2.0 - chord < MIN_LENGTH {
        return Err(Error::DegenerateInput("antipodal positions"));
    }

    let azimuthal = *cache.get(center);
    let radius_point = azimuthal.to_planar(through)?;
    let radius_metres = distance_metres(center, through);
    log::debug!("equidistance circle of {radius_metres:.0} m, {samples} samples");

    let step = std::f64::consts::TAU / f64::from(samples);
    let mut points = Vec::with_capacity(samples as usize + 1);
    for i in 0..samples {
        let rotated =
            Azimuthal::rotate_about_origin(&radius_point, Radians(step * f64::from(i)));
        let position = azimuthal.to_geographic(&rotated)?;
        points.push(working.to_planar(&position)?);
    }
    points.push(points[0]);

    Ok(EquidistanceCircle {
        points,
        radius_metres,
    })
}
