//! Bbox/geometry intersection dispatcher.

use log::{debug, trace};
use serde_json::Value;

use crate::bbox::Bbox;
use crate::error::{IntersectError, IntersectResult};
use crate::geometry::{GeoJson, Geometry};
use crate::linear;
use crate::options::Options;
use crate::polygon;

/// Intersection tester holding the query [`Options`].
///
/// Every call is a pure function of its arguments, so one tester can be
/// shared freely between threads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BboxTest {
    options: Options,
}

impl BboxTest {
    /// Creates a tester with the given options.
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Options in use.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Tests whether `bbox` and the geometry (or feature) share at least
    /// one point. Touching boundaries count.
    ///
    /// # Errors
    ///
    /// Returns `IntersectError::DepthExceeded` when `GeometryCollection`s nest
    /// deeper than the configured limit.
    pub fn test(&self, bbox: &Bbox, input: &GeoJson) -> IntersectResult<bool> {
        self.dispatch(bbox, input.geometry(), 0)
    }

    /// Tests a bare geometry.
    ///
    /// # Errors
    ///
    /// As for [`BboxTest::test`].
    pub fn test_geometry(&self, bbox: &Bbox, geometry: &Geometry) -> IntersectResult<bool> {
        self.dispatch(bbox, geometry, 0)
    }

    /// Parses a bbox and a geometry (or feature) from JSON values and tests
    /// them.
    ///
    /// # Errors
    ///
    /// Any parse failure from [`Bbox`] or [`GeoJson::from_value`], plus the
    /// errors of [`BboxTest::test`].
    pub fn test_value(&self, bbox: &Value, geometry: &Value) -> IntersectResult<bool> {
        let bbox = Bbox::from_value(bbox)?;
        let input = GeoJson::from_value(geometry, self.options.max_depth)?;
        self.test(&bbox, &input)
    }

    /// Parses a bbox and a geometry (or feature) from JSON text and tests
    /// them.
    ///
    /// # Errors
    ///
    /// `IntersectError::Json` for text that is not JSON, otherwise as for
    /// [`BboxTest::test_value`].
    pub fn test_json(&self, bbox: &str, geometry: &str) -> IntersectResult<bool> {
        let bbox: Value = serde_json::from_str(bbox)?;
        let geometry: Value = serde_json::from_str(geometry)?;
        self.test_value(&bbox, &geometry)
    }

    fn dispatch(&self, bbox: &Bbox, geometry: &Geometry, depth: usize) -> IntersectResult<bool> {
        trace!("testing {} at depth {depth}", geometry.type_name());
        let options = &self.options;
        let hit = match geometry {
            Geometry::Point { coordinates } => linear::point(bbox, coordinates),
            Geometry::MultiPoint { coordinates } => linear::multi_point(bbox, coordinates),
            Geometry::LineString { coordinates } => linear::line_string(bbox, coordinates, options),
            Geometry::MultiLineString { coordinates } => linear::multi_line_string(bbox, coordinates, options),
            Geometry::Polygon { coordinates } => polygon::polygon(bbox, coordinates, options),
            Geometry::MultiPolygon { coordinates } => polygon::multi_polygon(bbox, coordinates, options),
            Geometry::GeometryCollection { geometries } => {
                return self.collection(bbox, geometries, depth);
            }
        };
        Ok(hit)
    }

    fn collection(&self, bbox: &Bbox, geometries: &[Geometry], depth: usize) -> IntersectResult<bool> {
        if depth >= self.options.max_depth {
            debug!("GeometryCollection nesting exceeds {}", self.options.max_depth);
            return Err(IntersectError::DepthExceeded { limit: self.options.max_depth });
        }
        for member in geometries {
            if self.dispatch(bbox, member, depth + 1)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

/// Tests `bbox` against a geometry or feature with default [`Options`].
///
/// ```
/// use bbox_intersect::prelude::*;
///
/// let bbox = Bbox::from_flat(&[0.0, 0.0, 10.0, 10.0]).unwrap();
/// let line: GeoJson = r#"{"type": "LineString", "coordinates": [[-5, 5], [15, 5]]}"#.parse().unwrap();
/// assert!(test(&bbox, &line).unwrap());
/// ```
///
/// # Errors
///
/// As for [`BboxTest::test`].
pub fn test(bbox: &Bbox, input: &GeoJson) -> IntersectResult<bool> {
    BboxTest::default().test(bbox, input)
}

/// Parses JSON text for both arguments and tests them with default
/// [`Options`].
///
/// # Errors
///
/// As for [`BboxTest::test_json`].
pub fn test_json(bbox: &str, geometry: &str) -> IntersectResult<bool> {
    BboxTest::default().test_json(bbox, geometry)
}
