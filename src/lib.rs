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

//! This library computes the geodesic relationship between two positions
//! on the surface of a sphere, for display on a world map:
//!
//! - the shortest great circle path between the positions and its
//!   continuation around the globe through both antipodal positions,
//!   split wherever it crosses the antimeridian (the `sphere::arc` and
//!   `sight` modules);
//! - evenly spaced distance markers along the path, with a spacing
//!   adapted to the current view resolution (the `marker` module);
//! - a circle of constant great circle distance around one position,
//!   generated by rotation in a re-centered azimuthal projection
//!   (the `circle` and `projection` modules).
//!
//! The `trig`, `latlong`, `sphere` and `planar` modules provide the
//! underlying types: angles, geographic positions, unit sphere vectors
//! and working projection coordinates.
//!
//! All computation is synchronous and pure over its inputs; results are
//! recomputed in full whenever the selected positions or the view
//! resolution change. The only cross call state is the azimuthal
//! projection cache, see [`projection::AzimuthalCache`].
//!
//! The library uses the [contracts](https://crates.io/crates/contracts)
//! crate to implement Design By Contract
//! [(DbC)](https://wiki.c2.com/?DesignByContract) invariants and defines
//! a `Validate` trait to support them. Fallible operations return the
//! [`Error`] type from the `error` module.

pub mod circle;
pub mod error;
pub mod latlong;
pub mod marker;
pub mod planar;
pub mod projection;
pub mod sight;
pub mod sphere;
pub mod trig;

pub use circle::EquidistanceCircle;
pub use error::{Error, Result};
pub use latlong::LatLong;
pub use marker::DistanceMarker;
pub use planar::PlanarPoint;
pub use projection::{AzimuthalCache, Projection};
pub use sight::{SightLine, ViewState};
pub use sphere::arc::Arc;

use contracts::{debug_ensures, debug_requires};

/// Return the minimum of a or b.
#[inline]
#[must_use]
pub fn min<T>(a: T, b: T) -> T
where
    T: PartialOrd + Copy,
{
    if b < a {
        b
    } else {
        a
    }
}

/// Return the maximum of a or b.
#[inline]
#[must_use]
pub fn max<T>(a: T, b: T) -> T
where
    T: PartialOrd + Copy,
{
    if b < a {
        a
    } else {
        b
    }
}

/// Clamp value into the range: min to max inclusive.
/// * `value` - value to clamp
/// * `min` - minimum value.
/// * `max` - maximum value.
#[debug_ensures((min ..= max).contains(&ret))]
#[inline]
#[must_use]
pub fn clamp<T>(value: T, min: T, max: T) -> T
where
    T: PartialOrd + Copy,
{
    if value < min {
        min
    } else if max < value {
        max
    } else {
        value
    }
}

/// The Validate trait.
pub trait Validate {
    /// return true if the type is valid, false otherwise.
    fn is_valid(&self) -> bool;
}

/// Check whether a pair of values are within tolerance of each other
/// * `value` the value to test
/// * `tolerance` the permitted tolerance
/// return true if value is <= tolerance
#[debug_requires(value >= 0.0)]
#[inline]
#[must_use]
pub fn is_small(value: f64, tolerance: f64) -> bool {
    value <= tolerance
}

/// Check whether a value is within tolerance of a reference value.
/// * `reference` the required value
/// * `value` the value to test
/// * `tolerance` the permitted tolerance
/// return true if abs(reference - value) is <= tolerance
#[inline]
#[must_use]
pub fn is_within_tolerance(reference: f64, value: f64, tolerance: f64) -> bool {
    is_small(libm::fabs(reference - value), tolerance)
}
