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

//! The projection module contains the `Projection` trait, the boundary
//! between the engine and the map's working coordinate system, together
//! with two implementations on the mean radius sphere:
//!
//! - [`Equirectangular`], a plate carree working projection;
//! - [`Azimuthal`], an azimuthal equidistant projection re-centered on
//!   an arbitrary position. Rotation about the origin of an azimuthal
//!   projection preserves great circle distance from its center, the
//!   property the equidistance circle generator relies on.
//!
//! [`AzimuthalCache`] caches `Azimuthal` projections by their center,
//! since a session only ever uses a handful of distinct centers.

use crate::error::{Error, Result};
use crate::latlong::{calculate_azimuth_and_distance, LatLong};
use crate::planar::{self, PlanarPoint};
use crate::sphere::MEAN_RADIUS_M;
use crate::trig::{Degrees, Radians};
use crate::Validate;
use std::collections::HashMap;

/// A conversion between geographic positions and a planar coordinate
/// system.
pub trait Projection {
    /// Project a position into planar coordinates.
    ///
    /// returns the planar point or `Error::Projection` for coordinates
    /// the projection does not support.
    fn to_planar(&self, position: &LatLong) -> Result<PlanarPoint>;

    /// Convert a planar point back to a geographic position.
    ///
    /// returns the position or `Error::Projection` for points outside
    /// the projection's range.
    fn to_geographic(&self, point: &PlanarPoint) -> Result<LatLong>;

    /// The number of metres per planar unit.
    fn metres_per_unit(&self) -> f64;
}

/// The plate carree projection on the mean radius sphere:
/// x = R * longitude, y = R * latitude, in radians.
#[derive(Clone, Copy, Debug, Default)]
pub struct Equirectangular;

impl Projection for Equirectangular {
    fn to_planar(&self, position: &LatLong) -> Result<PlanarPoint> {
        if !position.is_valid() {
            return Err(Error::Projection("position out of range".to_string()));
        }
        Ok(PlanarPoint::new(
            MEAN_RADIUS_M * Radians::from(position.lon()).0,
            MEAN_RADIUS_M * Radians::from(position.lat()).0,
        ))
    }

    fn to_geographic(&self, point: &PlanarPoint) -> Result<LatLong> {
        let lon = Degrees::from(Radians(point.x / MEAN_RADIUS_M));
        let lat = Degrees::from(Radians(point.y / MEAN_RADIUS_M));
        if !lat.is_valid_latitude() || !lon.is_valid() {
            return Err(Error::Projection("point out of range".to_string()));
        }
        Ok(LatLong::new(lat, lon))
    }

    fn metres_per_unit(&self) -> f64 {
        1.0
    }
}

/// An azimuthal equidistant projection centered on a position.
///
/// The planar distance of a projected point from the origin equals the
/// great circle distance of the position from the center, so rotating a
/// projected point about the origin moves it along a circle of constant
/// great circle distance.
#[derive(Clone, Copy, Debug)]
pub struct Azimuthal {
    center: LatLong,
    sin_lat0: f64,
    cos_lat0: f64,
}

impl Azimuthal {
    /// Construct an `Azimuthal` projection.
    /// * `center` - the center position of the projection.
    #[must_use]
    pub fn new(center: &LatLong) -> Self {
        let (sin_lat0, cos_lat0) = libm::sincos(Radians::from(center.lat()).0);
        Self {
            center: *center,
            sin_lat0,
            cos_lat0,
        }
    }

    /// The center position of the projection.
    #[must_use]
    pub const fn center(&self) -> LatLong {
        self.center
    }

    /// Rotate a planar point about the origin of the projection,
    /// preserving its great circle distance from the center.
    #[must_use]
    pub fn rotate_about_origin(point: &PlanarPoint, angle: Radians) -> PlanarPoint {
        planar::rotate(point, angle)
    }
}

impl Projection for Azimuthal {
    /// Project a position: x = rho * sin(azimuth), y = rho * cos(azimuth),
    /// where rho is the great circle distance from the center in metres
    /// and azimuth is the initial bearing from the center.
    ///
    /// Note: the center's antipode has no unique azimuth; it projects to
    /// a single representative point at rho = PI * R.
    fn to_planar(&self, position: &LatLong) -> Result<PlanarPoint> {
        if !position.is_valid() {
            return Err(Error::Projection("position out of range".to_string()));
        }
        let (azimuth, distance) = calculate_azimuth_and_distance(&self.center, position);
        let rho = MEAN_RADIUS_M * distance.0;
        let (sin_az, cos_az) = libm::sincos(azimuth.0);
        Ok(PlanarPoint::new(rho * sin_az, rho * cos_az))
    }

    fn to_geographic(&self, point: &PlanarPoint) -> Result<LatLong> {
        let rho = libm::hypot(point.x, point.y);
        let c = rho / MEAN_RADIUS_M;
        if std::f64::consts::PI + f64::EPSILON < c {
            return Err(Error::Projection(
                "point beyond the antipode of the projection center".to_string(),
            ));
        }
        if rho < f64::EPSILON {
            return Ok(self.center);
        }

        let (sin_c, cos_c) = libm::sincos(crate::min(c, std::f64::consts::PI));
        let sin_lat = crate::clamp(
            cos_c * self.sin_lat0 + point.y * sin_c * self.cos_lat0 / rho,
            -1.0,
            1.0,
        );
        let lat = Radians(libm::asin(sin_lat));
        let delta_lon = Radians(libm::atan2(
            point.x * sin_c,
            rho * cos_c * self.cos_lat0 - point.y * sin_c * self.sin_lat0,
        ));
        let lon = (self.center.lon() + Degrees::from(delta_lon)).normalise();

        Ok(LatLong::new(Degrees::from(lat), lon))
    }

    fn metres_per_unit(&self) -> f64 {
        1.0
    }
}

/// A cache of `Azimuthal` projections keyed by their center coordinates.
///
/// Entries are created on first use and never evicted: the number of
/// distinct centers used in a session is small. Long running processes
/// that re-center continuously should bound it by replacing the cache.
/// The engine is single threaded; callers introducing concurrency must
/// wrap the cache in their own lock and use insert-if-absent semantics.
#[derive(Debug, Default)]
pub struct AzimuthalCache {
    projections: HashMap<(u64, u64), Azimuthal>,
}

impl AzimuthalCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the projection centered at a position, creating and caching
    /// it on first use.
    /// * `center` - the center position.
    pub fn get(&mut self, center: &LatLong) -> &Azimuthal {
        let key = (center.lat().0.to_bits(), center.lon().0.to_bits());
        self.projections.entry(key).or_insert_with(|| {
            log::trace!(
                "creating azimuthal projection centered at {:?}/{:?}",
                center.lat(),
                center.lon()
            );
            Azimuthal::new(center)
        })
    }

    /// The number of cached projections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.projections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projections.is_empty()
    }
}
