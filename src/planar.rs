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

//! The planar module contains the `PlanarPoint` type for positions in a
//! working (projected) coordinate system, the planar bearing between
//! points and rotation about the origin.

use crate::trig::Radians;
use serde::{Deserialize, Serialize};

/// A position in the working projection, as an x, y pair of projection
/// units. Always derived from a geographic position and a projection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanarPoint {
    pub x: f64,
    pub y: f64,
}

impl PlanarPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Calculate the bearing of point a from point b, i.e. the angle of the
/// planar vector from b toward a.
///
/// The argument order matches how arrow heads and distance marker ticks
/// are oriented downstream: callers must pass the points in the intended
/// direction. The bearing is degenerate when `a == b`: zero is returned,
/// it is the caller's responsibility to avoid degenerate input where a
/// meaningful angle is required.
/// # Examples
/// ```
/// use via_sightline::planar::{bearing, PlanarPoint};
/// use via_sightline::trig::Radians;
///
/// let origin = PlanarPoint::new(0.0, 0.0);
/// let east = PlanarPoint::new(1.0, 0.0);
/// let north = PlanarPoint::new(0.0, 1.0);
///
/// assert_eq!(Radians(0.0), bearing(&east, &origin));
/// assert_eq!(Radians(std::f64::consts::FRAC_PI_2), bearing(&north, &origin));
/// assert_eq!(Radians(0.0), bearing(&origin, &origin));
/// ```
#[must_use]
pub fn bearing(a: &PlanarPoint, b: &PlanarPoint) -> Radians {
    Radians(libm::atan2(a.y - b.y, a.x - b.x))
}

/// Rotate a point about the origin by an angle, anticlockwise.
/// * `point` - the point.
/// * `angle` - the rotation angle.
///
/// returns the rotated point, at the same distance from the origin.
#[must_use]
pub fn rotate(point: &PlanarPoint, angle: Radians) -> PlanarPoint {
    let (sin_a, cos_a) = libm::sincos(angle.0);
    PlanarPoint::new(
        point.x * cos_a - point.y * sin_a,
        point.x * sin_a + point.y * cos_a,
    )
}

/// Calculate the Euclidean distance between two points.
#[must_use]
pub fn distance(a: &PlanarPoint, b: &PlanarPoint) -> f64 {
    libm::hypot(b.x - a.x, b.y - a.y)
}
