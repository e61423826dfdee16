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

//! The trig module contains the `Degrees` and `Radians` angle newtypes
//! used throughout the library.
//!
//! Geographic positions are held in `Degrees`; great circle distances on
//! the unit sphere and planar rotation angles are held in `Radians`.

#![allow(clippy::float_cmp)]

use crate::Validate;
use serde::{Deserialize, Serialize};
use std::convert::From;
use std::ops::{Add, Neg, Sub};

/// The conversion factor from Degrees to Radians.
pub const DEG2RAD: f64 = std::f64::consts::PI / 180.0;

/// The Degrees newtype an f64.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Degrees(pub f64);

/// The Radians newtype an f64.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Radians(pub f64);

impl Degrees {
    /// Test whether a value is a valid latitude.
    /// I.e. whether it lies in the range: -90.0 <= value <= 90.0
    #[must_use]
    pub fn is_latitude(value: f64) -> bool {
        (-90.0..=90.0).contains(&value)
    }

    /// Test whether a value is a valid longitude.
    /// I.e. whether it lies in the range: -180.0 <= value <= 180.0
    #[must_use]
    pub fn is_longitude(value: f64) -> bool {
        (-180.0..=180.0).contains(&value)
    }

    /// Normalise a Degrees value into the range: -180.0 < value <= 180.0
    /// # Examples
    /// ```
    /// use via_sightline::trig::Degrees;
    ///
    /// assert_eq!(0.0, Degrees(-360.0).normalise().0);
    /// assert_eq!(180.0, Degrees(-180.0).normalise().0);
    /// assert_eq!(180.0, Degrees(180.0).normalise().0);
    /// assert_eq!(0.0, Degrees(360.0).normalise().0);
    /// ```
    #[must_use]
    pub fn normalise(&self) -> Self {
        if self.0 <= -180.0 {
            Self(self.0 + 360.0)
        } else if self.0 <= 180.0 {
            *self
        } else {
            Self(self.0 - 360.0)
        }
    }

    /// Test whether a Degrees value is a valid latitude.
    /// I.e. whether it lies in the range: -90.0 <= value <= 90.0
    #[must_use]
    pub fn is_valid_latitude(&self) -> bool {
        Self::is_latitude(self.0)
    }
}

impl Validate for Degrees {
    /// Test whether a Degrees is valid.
    /// I.e. whether it lies in the range: -180.0 <= value <= 180.0
    fn is_valid(&self) -> bool {
        Self::is_longitude(self.0)
    }
}

impl From<Radians> for Degrees {
    /// Construct an angle in Degrees from an angle in Radians.
    fn from(a: Radians) -> Self {
        Self(a.0.to_degrees())
    }
}

impl Neg for Degrees {
    type Output = Self;

    /// An implementation of Neg for Degrees, i.e. -angle.
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Add for Degrees {
    type Output = Self;

    /// Add two angles in Degrees, automatically wraps around +/- 180 degrees.
    /// # Examples
    /// ```
    /// use via_sightline::trig::Degrees;
    ///
    /// let angle_120 = Degrees(120.0);
    /// let result = angle_120 + angle_120;
    /// assert_eq!(Degrees(-120.0), result);
    /// ```
    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0).normalise()
    }
}

impl Sub for Degrees {
    type Output = Self;

    /// Subtract two angles in Degrees, automatically wraps around.
    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0).normalise()
    }
}

impl Radians {
    /// Normalise a Radians into the range:
    /// -`std::f64::consts::PI` < value <= `std::f64::consts::PI`
    /// # Examples
    /// ```
    /// use via_sightline::trig::Radians;
    ///
    /// assert_eq!(0.0, Radians(-2.0 * std::f64::consts::PI).normalise().0);
    /// assert_eq!(std::f64::consts::PI, Radians(-std::f64::consts::PI).normalise().0);
    /// assert_eq!(std::f64::consts::PI, Radians(std::f64::consts::PI).normalise().0);
    /// assert_eq!(0.0, Radians(2.0 * std::f64::consts::PI).normalise().0);
    /// ```
    #[must_use]
    pub fn normalise(&self) -> Self {
        if self.0 <= -std::f64::consts::PI {
            Self(self.0 + std::f64::consts::TAU)
        } else if self.0 <= std::f64::consts::PI {
            *self
        } else {
            Self(self.0 - std::f64::consts::TAU)
        }
    }

    /// The absolute value of the angle.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(libm::fabs(self.0))
    }
}

impl Validate for Radians {
    /// Test whether a Radians is valid.
    /// I.e. whether it lies in the range: -PI <= value <= PI
    fn is_valid(&self) -> bool {
        (-std::f64::consts::PI..=std::f64::consts::PI).contains(&self.0)
    }
}

impl From<Degrees> for Radians {
    /// Construct an angle in Radians from an angle in Degrees.
    fn from(a: Degrees) -> Self {
        Self(a.0.to_radians())
    }
}

impl Neg for Radians {
    type Output = Self;

    /// An implementation of Neg for Radians, i.e. -angle.
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Add for Radians {
    type Output = Self;

    /// Add a pair of angles in Radians, wraps around +/-PI.
    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0).normalise()
    }
}

impl Sub for Radians {
    type Output = Self;

    /// Subtract a pair of angles in Radians, wraps around +/-PI.
    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0).normalise()
    }
}

/// Determine whether a slice of values are all valid latitudes in degrees.
#[must_use]
pub fn valid_latitudes(values: &[f64]) -> bool {
    values.iter().all(|&v| Degrees::is_latitude(v))
}

/// Determine whether a slice of values are all valid longitudes in degrees.
#[must_use]
pub fn valid_longitudes(values: &[f64]) -> bool {
    values.iter().all(|&v| Degrees::is_longitude(v))
}
