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

//! The `geojson` module includes conversions between the library types
//! and [GeoJSON](https://geojson.org/) geometry types,
//! see: [RFC7946](https://datatracker.ietf.org/doc/html/rfc7946).
//!
//! Note: [Antimeridian Cutting](https://datatracker.ietf.org/doc/html/rfc7946#section-3.1.9)
//! is already performed by the arc fitter: each [`Arc`] converts to a
//! `LineString` that never wraps across the antimeridian, and the arcs
//! of a split path convert together to a `MultiLineString`.

use crate::error::Error;
use crate::latlong::LatLong;
use crate::sphere::arc::Arc;
use geo_types;

impl TryFrom<&geo_types::Coord> for LatLong {
    type Error = Error;

    /// Attempt to convert a `GeoJSON Coord` to a `LatLong`.
    /// Note: `GeoJSON Coord` order is **lon, lat.**
    fn try_from(item: &geo_types::Coord) -> Result<Self, Self::Error> {
        Self::try_from((item.y, item.x))
    }
}

impl From<&LatLong> for geo_types::Coord {
    fn from(a: &LatLong) -> Self {
        Self {
            x: a.lon().0,
            y: a.lat().0,
        }
    }
}

impl TryFrom<&geo_types::Point> for LatLong {
    type Error = Error;

    /// Attempt to convert a `GeoJSON Point` to a `LatLong`.
    fn try_from(item: &geo_types::Point) -> Result<Self, Self::Error> {
        Self::try_from(&item.0)
    }
}

impl From<&LatLong> for geo_types::Point {
    fn from(a: &LatLong) -> Self {
        Self::new(a.lon().0, a.lat().0)
    }
}

impl From<&Arc> for geo_types::LineString {
    /// Convert an `Arc` to a `GeoJSON LineString`.
    fn from(arc: &Arc) -> Self {
        Self::new(arc.points().iter().map(geo_types::Coord::from).collect())
    }
}

/// Convert the arcs of a (possibly antimeridian split) path to a
/// `GeoJSON MultiLineString`.
#[must_use]
pub fn multi_line_string(arcs: &[Arc]) -> geo_types::MultiLineString {
    geo_types::MultiLineString::new(arcs.iter().map(geo_types::LineString::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sphere::arc::fit;
    use crate::trig::Degrees;

    #[test]
    fn test_geo_types_coord_invalid() {
        let bad_latitude = geo_types::Coord::from((0.0, 90.0001));
        assert_eq!(
            Err(Error::InvalidArgument("latitude out of range")),
            LatLong::try_from(&bad_latitude)
        );

        let bad_longitude = geo_types::Coord::from((180.0001, 0.0));
        assert_eq!(
            Err(Error::InvalidArgument("longitude out of range")),
            LatLong::try_from(&bad_longitude)
        );
    }

    #[test]
    fn test_geo_types_coord() {
        let coord = geo_types::Coord::from((160.0, 80.0));
        let latlong = LatLong::try_from(&coord).unwrap();
        assert_eq!(Degrees(80.0), latlong.lat());
        assert_eq!(Degrees(160.0), latlong.lon());

        let geo_result = geo_types::Coord::from(&latlong);
        assert_eq!(coord, geo_result);
    }

    #[test]
    fn test_geo_types_point() {
        let point = geo_types::Point::new(160.0, 80.0);
        let latlong = LatLong::try_from(&point).unwrap();
        assert_eq!(Degrees(80.0), latlong.lat());
        assert_eq!(Degrees(160.0), latlong.lon());

        let geo_result = geo_types::Point::from(&latlong);
        assert_eq!(point, geo_result);
    }

    #[test]
    fn test_arc_to_linestring() {
        let p0 = LatLong::new(Degrees(0.0), Degrees(0.0));
        let p1 = LatLong::new(Degrees(0.0), Degrees(10.0));
        let arcs = fit(&p0, &p1, 4).unwrap();
        assert_eq!(1, arcs.len());

        let line_string = geo_types::LineString::from(&arcs[0]);
        assert_eq!(5, line_string.0.len());
        assert_eq!(geo_types::Coord::from((0.0, 0.0)), line_string.0[0]);
        assert_eq!(geo_types::Coord::from((10.0, 0.0)), line_string.0[4]);
    }

    #[test]
    fn test_split_arcs_to_geojson() {
        let p0 = LatLong::new(Degrees(0.0), Degrees(170.0));
        let p1 = LatLong::new(Degrees(0.0), Degrees(-170.0));
        let arcs = fit(&p0, &p1, 4).unwrap();
        assert_eq!(2, arcs.len());

        let multi = multi_line_string(&arcs);
        assert_eq!(2, multi.0.len());

        let geometry = geojson::Geometry::new(geojson::Value::from(&multi));
        let text = serde_json::to_string(&geometry).unwrap();
        assert!(text.contains("MultiLineString"));
        assert!(text.contains("180.0"));
    }
}
