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

//! The marker module generates the distance markers along a great
//! circle path: short perpendicular ticks at even geodesic spacing,
//! each labelled with its distance from the path origin.
//!
//! The marker spacing adapts to the view resolution: roughly one marker
//! every ten screen pixels, rounded up to the nearest power of ten
//! metres.

use crate::error::{Error, Result};
use crate::latlong::LatLong;
use crate::planar::{bearing, PlanarPoint};
use crate::projection::Projection;
use crate::sphere::arc::interpolate;
use crate::sphere::distance_metres;
use crate::trig::Radians;

/// The target number of screen pixels between markers.
const PIXELS_PER_MARKER: f64 = 10.0;

/// Half the on screen length of a marker tick, in pixels.
const TICK_HALF_LENGTH_PX: f64 = 5.0;

/// A distance marker: a short tick line perpendicular to the path in
/// working projection coordinates, a distance label and the label's
/// rotation angle.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMarker {
    tick: [PlanarPoint; 2],
    label: String,
    rotation: Radians,
}

impl DistanceMarker {
    /// The tick line end points.
    #[must_use]
    pub const fn tick(&self) -> &[PlanarPoint; 2] {
        &self.tick
    }

    /// The distance label, see [`format_distance`].
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The label rotation: the local path bearing plus 90 degrees.
    #[must_use]
    pub const fn rotation(&self) -> Radians {
        self.rotation
    }
}

/// The marker spacing in metres for a view resolution: the distance of
/// [`PIXELS_PER_MARKER`] screen pixels rounded up to a power of ten.
/// # Examples
/// ```
/// use via_sightline::marker::spacing;
///
/// assert_eq!(10.0, spacing(1.0));
/// assert_eq!(1000.0, spacing(100.0));
/// assert_eq!(10000.0, spacing(150.0));
/// ```
#[must_use]
pub fn spacing(metres_per_pixel: f64) -> f64 {
    libm::pow(
        10.0,
        libm::ceil(libm::log10(PIXELS_PER_MARKER * metres_per_pixel)),
    )
}

/// Format a distance in metres for display.
///
/// The unit is selected from the magnitude of the distance; the value is
/// rounded to that unit. The rendering is lossy and display only, but
/// monotonic in magnitude.
/// # Examples
/// ```
/// use via_sightline::marker::format_distance;
///
/// assert_eq!("999m", format_distance(999.0));
/// assert_eq!("2km", format_distance(1500.0));
/// assert_eq!("2k km", format_distance(1_500_000.0));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn format_distance(metres: f64) -> String {
    let magnitude = libm::floor(libm::log10(metres));
    if magnitude < 3.0 {
        format!("{}m", libm::round(metres) as i64)
    } else if magnitude < 6.0 {
        format!("{}km", libm::round(metres / 1e3) as i64)
    } else if magnitude < 9.0 {
        format!("{}k km", libm::round(metres / 1e6) as i64)
    } else {
        format!("{}mio km", libm::round(metres / 1e6) as i64)
    }
}

/// Generate the distance markers along the great circle path from
/// `origin` to `far`.
///
/// The path is sampled at one point per marker spacing; each sample gets
/// a tick perpendicular to the local path direction and a label with the
/// sample's geodesic distance from `origin`. The local direction at a
/// sample is taken from its previous and next samples, clamped at the
/// path ends; a neighbour on the far side of the antimeridian is
/// replaced by the sample itself so tick orientation stays local.
///
/// * `origin` - the position distances are measured from.
/// * `far` - the far end of the marker path.
/// * `metres_per_pixel` - the current view resolution.
/// * `projection` - the working projection for tick coordinates.
///
/// returns the markers, or an error:
/// * `InvalidArgument` if `metres_per_pixel` is not positive,
/// * `DegenerateInput` if `origin` and `far` are coincident or antipodal,
/// * `Projection` if a sample cannot be projected.
pub fn distance_markers(
    origin: &LatLong,
    far: &LatLong,
    metres_per_pixel: f64,
    projection: &dyn Projection,
) -> Result<Vec<DistanceMarker>> {
    if metres_per_pixel <= 0.0 {
        return Err(Error::InvalidArgument("metres per pixel must be positive"));
    }

    let spacing_m = spacing(metres_per_pixel);
    let length_m = distance_metres(origin, far);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let segments = crate::max(libm::ceil(length_m / spacing_m) as u32, 1);
    log::debug!("{segments} markers at {spacing_m} m spacing");

    let samples = interpolate(origin, far, segments)?;
    let planar: Vec<PlanarPoint> = samples
        .iter()
        .map(|sample| projection.to_planar(sample))
        .collect::<Result<Vec<PlanarPoint>>>()?;

    let half_length = TICK_HALF_LENGTH_PX * metres_per_pixel / projection.metres_per_unit();

    let mut markers = Vec::with_capacity(planar.len());
    for (i, point) in planar.iter().enumerate() {
        let start = local_neighbour(&samples, &planar, i, i.saturating_sub(1));
        let end = local_neighbour(&samples, &planar, i, crate::min(i + 1, planar.len() - 1));
        let angle = -bearing(&start, &end).0;

        let (sin_a, cos_a) = libm::sincos(angle);
        let tick = [
            PlanarPoint::new(
                half_length.mul_add(-sin_a, point.x),
                half_length.mul_add(-cos_a, point.y),
            ),
            PlanarPoint::new(
                half_length.mul_add(sin_a, point.x),
                half_length.mul_add(cos_a, point.y),
            ),
        ];

        #[allow(clippy::cast_precision_loss)]
        let label = format_distance(spacing_m * i as f64);
        markers.push(DistanceMarker {
            tick,
            label,
            rotation: Radians(angle + std::f64::consts::FRAC_PI_2),
        });
    }

    Ok(markers)
}

/// The planar neighbour used for the local bearing at sample `i`: the
/// sample itself when the neighbour lies across the antimeridian.
fn local_neighbour(
    samples: &[LatLong],
    planar: &[PlanarPoint],
    i: usize,
    neighbour: usize,
) -> PlanarPoint {
    if 180.0 < libm::fabs(samples[neighbour].lon().0 - samples[i].lon().0) {
        planar[i]
    } else {
        planar[neighbour]
    }
}
