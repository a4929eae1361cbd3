//! GeoJSON geometry model and parsing.
//!
//! Parsing goes through [`serde_json::Value`] with an explicit dispatch on
//! the `type` tag, so an unknown tag is reported by name as
//! [`IntersectError::UnsupportedGeometryType`] instead of a generic serde
//! error. Coordinates are read as plain `f64` arrays of any length; the
//! query functions decide how many axes to compare.

use std::str::FromStr;

use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{IntersectError, IntersectResult};
use crate::options::DEFAULT_MAX_DEPTH;

/// A single coordinate tuple.
pub type Position = Vec<f64>;

/// GeoJSON geometry object.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
#[non_exhaustive]
pub enum Geometry {
    /// A single position.
    Point {
        /// The position.
        coordinates: Position,
    },
    /// Unconnected positions.
    MultiPoint {
        /// The positions.
        coordinates: Vec<Position>,
    },
    /// Vertex chain.
    LineString {
        /// Vertices in order.
        coordinates: Vec<Position>,
    },
    /// Several vertex chains.
    MultiLineString {
        /// One vertex chain per line.
        coordinates: Vec<Vec<Position>>,
    },
    /// Area bounded by rings.
    Polygon {
        /// First ring is the exterior, the rest are holes.
        coordinates: Vec<Vec<Position>>,
    },
    /// Several polygons.
    MultiPolygon {
        /// Ring lists, one per polygon.
        coordinates: Vec<Vec<Vec<Position>>>,
    },
    /// Heterogeneous, possibly nested, geometries.
    GeometryCollection {
        /// Member geometries.
        geometries: Vec<Self>,
    },
}

/// GeoJSON feature; only the geometry takes part in queries.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Feature {
    /// Wrapped geometry.
    pub geometry: Geometry,
    /// Feature properties, carried through untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Value>,
    /// Feature identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
}

/// Query input: a bare geometry or one wrapped in a feature.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
#[non_exhaustive]
pub enum GeoJson {
    /// Geometry wrapped in a feature.
    Feature(Feature),
    /// Bare geometry.
    Geometry(Geometry),
}

impl Geometry {
    /// GeoJSON type name.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Point { .. } => "Point",
            Self::MultiPoint { .. } => "MultiPoint",
            Self::LineString { .. } => "LineString",
            Self::MultiLineString { .. } => "MultiLineString",
            Self::Polygon { .. } => "Polygon",
            Self::MultiPolygon { .. } => "MultiPolygon",
            Self::GeometryCollection { .. } => "GeometryCollection",
        }
    }

    /// Parses a geometry object, allowing at most `max_depth` levels of
    /// `GeometryCollection` nesting.
    ///
    /// # Errors
    ///
    /// See [`IntersectError`]; a `Feature` is rejected here, use
    /// [`GeoJson::from_value`] to accept one.
    pub fn from_value(value: &Value, max_depth: usize) -> IntersectResult<Self> {
        parse_geometry(value, 0, max_depth)
    }
}

impl GeoJson {
    /// Parses a geometry or a feature, unwrapping one feature level.
    ///
    /// # Errors
    ///
    /// See [`IntersectError`].
    pub fn from_value(value: &Value, max_depth: usize) -> IntersectResult<Self> {
        if type_tag(value)? == "Feature" {
            let geometry = value.get("geometry").unwrap_or(&Value::Null);
            return Ok(Self::Feature(Feature {
                geometry: parse_geometry(geometry, 0, max_depth)?,
                properties: value.get("properties").filter(|p| !p.is_null()).cloned(),
                id: value.get("id").cloned(),
            }));
        }
        Ok(Self::Geometry(parse_geometry(value, 0, max_depth)?))
    }

    /// The geometry under test.
    pub fn geometry(&self) -> &Geometry {
        match self {
            Self::Feature(feature) => &feature.geometry,
            Self::Geometry(geometry) => geometry,
        }
    }
}

impl FromStr for GeoJson {
    type Err = IntersectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: Value = serde_json::from_str(s)?;
        Self::from_value(&value, DEFAULT_MAX_DEPTH)
    }
}

impl From<Geometry> for GeoJson {
    fn from(geometry: Geometry) -> Self {
        Self::Geometry(geometry)
    }
}

impl From<Feature> for GeoJson {
    fn from(feature: Feature) -> Self {
        Self::Feature(feature)
    }
}

impl<'de> Deserialize<'de> for Geometry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value, DEFAULT_MAX_DEPTH).map_err(serde::de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for GeoJson {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value, DEFAULT_MAX_DEPTH).map_err(serde::de::Error::custom)
    }
}

fn type_tag(value: &Value) -> IntersectResult<&str> {
    if value.is_null() {
        return Err(IntersectError::UnsupportedGeometryType("null".to_string()));
    }
    value
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| IntersectError::UnsupportedGeometryType("<missing>".to_string()))
}

fn coordinates<T: DeserializeOwned>(value: &Value, kind: &str) -> IntersectResult<T> {
    let raw = value
        .get("coordinates")
        .ok_or_else(|| IntersectError::MalformedInput(format!("{kind} has no coordinates")))?;
    T::deserialize(raw).map_err(|e| IntersectError::MalformedInput(format!("{kind} coordinates: {e}")))
}

fn parse_geometry(value: &Value, depth: usize, max_depth: usize) -> IntersectResult<Geometry> {
    let kind = type_tag(value)?;
    let geometry = match kind {
        "Point" => Geometry::Point { coordinates: coordinates(value, kind)? },
        "MultiPoint" => Geometry::MultiPoint { coordinates: coordinates(value, kind)? },
        "LineString" => Geometry::LineString { coordinates: coordinates(value, kind)? },
        "MultiLineString" => Geometry::MultiLineString { coordinates: coordinates(value, kind)? },
        "Polygon" => Geometry::Polygon { coordinates: coordinates(value, kind)? },
        "MultiPolygon" => Geometry::MultiPolygon { coordinates: coordinates(value, kind)? },
        "GeometryCollection" => {
            if depth >= max_depth {
                debug!("rejecting GeometryCollection nested deeper than {max_depth}");
                return Err(IntersectError::DepthExceeded { limit: max_depth });
            }
            let members = value.get("geometries").and_then(Value::as_array).ok_or_else(|| {
                IntersectError::MalformedInput("GeometryCollection has no geometries array".to_string())
            })?;
            let geometries = members
                .iter()
                .map(|member| parse_geometry(member, depth + 1, max_depth))
                .collect::<IntersectResult<Vec<_>>>()?;
            Geometry::GeometryCollection { geometries }
        }
        other => {
            debug!("unsupported geometry type {other:?}");
            return Err(IntersectError::UnsupportedGeometryType(other.to_string()));
        }
    };
    Ok(geometry)
}
