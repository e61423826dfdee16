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

//! The sight module composes the full line of sight between two selected
//! positions: the four great circle segments that chain through both
//! positions and both antipodes into a closed loop around the globe,
//! plus the distance markers along the marker basis segment.
//!
//! The number of interpolation points per segment adapts to the view
//! resolution: roughly one point every twenty screen pixels, clamped to
//! avoid both degenerate and pathological point counts. Callers must
//! recompose whenever the selected positions or the view resolution
//! change, zooming rescales the units per pixel.

use crate::error::{Error, Result};
use crate::latlong::LatLong;
use crate::marker::{distance_markers, DistanceMarker};
use crate::planar;
use crate::projection::Projection;
use crate::sphere::arc::{fit, Arc};

/// The target number of screen pixels between interpolation points.
const PIXELS_PER_SEGMENT: f64 = 20.0;

/// The smallest number of interpolation steps per segment.
const MIN_SEGMENTS: u32 = 2;

/// The largest number of interpolation steps per segment.
const MAX_SEGMENTS: u32 = 1000;

/// The read only view state supplied by the caller on each invocation:
/// the currently visible width in working projection units and the
/// viewport width in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    extent_width: f64,
    pixel_width: u32,
}

impl ViewState {
    /// Construct a `ViewState`.
    /// * `extent_width` - the visible width in working projection units.
    /// * `pixel_width` - the viewport width in pixels.
    ///
    /// returns the view state or `InvalidArgument` if `extent_width` is
    /// not positive or `pixel_width` is zero.
    pub fn new(extent_width: f64, pixel_width: u32) -> Result<Self> {
        if !extent_width.is_finite() || extent_width <= 0.0 {
            return Err(Error::InvalidArgument("extent width must be positive"));
        }
        if pixel_width < 1 {
            return Err(Error::InvalidArgument("pixel width must be >= 1"));
        }
        Ok(Self {
            extent_width,
            pixel_width,
        })
    }

    /// The working projection units per screen pixel.
    #[must_use]
    pub fn units_per_pixel(&self) -> f64 {
        self.extent_width / f64::from(self.pixel_width)
    }

    /// The metres per screen pixel.
    /// * `metres_per_unit` - the working projection's metres per unit.
    #[must_use]
    pub fn metres_per_pixel(&self, metres_per_unit: f64) -> f64 {
        self.units_per_pixel() * metres_per_unit
    }
}

/// The number of interpolation steps for a segment of `pixel_length`
/// screen pixels: one point per [`PIXELS_PER_SEGMENT`] pixels, clamped
/// into [`MIN_SEGMENTS`]..=[`MAX_SEGMENTS`]. Monotonically non
/// decreasing in `pixel_length`.
/// # Examples
/// ```
/// use via_sightline::sight::segment_count;
///
/// assert_eq!(2, segment_count(0.0));
/// assert_eq!(40, segment_count(800.0));
/// assert_eq!(1000, segment_count(1.0e9));
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn segment_count(pixel_length: f64) -> u32 {
    crate::clamp(
        libm::ceil(pixel_length / PIXELS_PER_SEGMENT) as u32,
        MIN_SEGMENTS,
        MAX_SEGMENTS,
    )
}

/// The composed line of sight: four logical great circle segments that
/// chain `p0 -> p1 -> antipode(p0) -> antipode(p1) -> p0` into a closed
/// loop, each segment split into one or more arcs at the antimeridian,
/// plus the distance markers along the marker basis segment
/// (`p1 -> antipode(p0)`, distances measured from `p1`).
#[derive(Clone, Debug, PartialEq)]
pub struct SightLine {
    segments: [Vec<Arc>; 4],
    markers: Vec<DistanceMarker>,
}

impl SightLine {
    /// The four logical segments, in loop order.
    #[must_use]
    pub const fn segments(&self) -> &[Vec<Arc>; 4] {
        &self.segments
    }

    /// The view segment between the two selected positions, the segment
    /// drawn with direction arrows.
    #[must_use]
    pub fn view_segment(&self) -> &[Arc] {
        &self.segments[0]
    }

    /// The distance markers along the marker basis segment.
    #[must_use]
    pub fn markers(&self) -> &[DistanceMarker] {
        &self.markers
    }
}

/// Compose the line of sight between two selected positions.
///
/// Derives the antipodes `a0` and `a1` of the positions and fits the
/// four great circle segments `[p0,p1]`, `[p1,a0]`, `[a0,a1]` and
/// `[a1,p0]`, each with an interpolation point count derived from its
/// on screen pixel length, then generates the distance markers for the
/// `[p1,a0]` basis segment.
///
/// * `p0`, `p1` - the selected positions.
/// * `view` - the current view state.
/// * `projection` - the working projection.
///
/// returns the composed sight line, or an error:
/// * `DegenerateInput` if the positions are coincident or antipodal
///   (no unique path exists, a user visible condition),
/// * `Projection` if an endpoint cannot be projected.
pub fn compose(
    p0: &LatLong,
    p1: &LatLong,
    view: &ViewState,
    projection: &dyn Projection,
) -> Result<SightLine> {
    let a0 = p0.antipode();
    let a1 = p1.antipode();
    let pairs = [[*p0, *p1], [*p1, a0], [a0, a1], [a1, *p0]];

    let units_per_pixel = view.units_per_pixel();

    let mut segments: [Vec<Arc>; 4] = Default::default();
    for (segment, pair) in segments.iter_mut().zip(&pairs) {
        let start = projection.to_planar(&pair[0])?;
        let end = projection.to_planar(&pair[1])?;
        let pixel_length = planar::distance(&start, &end) / units_per_pixel;
        let count = segment_count(pixel_length);
        log::debug!("segment of {pixel_length:.1} px fitted with {count} steps");
        *segment = fit(&pair[0], &pair[1], count)?;
    }

    let markers = distance_markers(
        &pairs[1][0],
        &pairs[1][1],
        view.metres_per_pixel(projection.metres_per_unit()),
        projection,
    )?;

    Ok(SightLine { segments, markers })
}
