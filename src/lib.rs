//! # bbox-intersect - Bbox vs GeoJSON Intersection Test
//!
//! Decides whether an axis-aligned bounding box shares at least one point
//! with a GeoJSON geometry: Point, `MultiPoint`, `LineString`, `MultiLineString`,
//! Polygon (with holes), `MultiPolygon` and `GeometryCollection`, optionally
//! wrapped in a Feature. Touching boundaries count as intersecting.
//!
//! ## Features
//!
//! - **Closed-box containment**: boundary-inclusive point tests
//! - **N-dimensional slab test**: edge crossing for boxes of any dimension
//! - **Polygon holes**: a box sitting entirely inside a hole does not intersect
//! - **Both bbox forms**: `[min_x, min_y, max_x, max_y]` or `[[min...], [max...]]`
//!
//! ## Quick Start
//!
//! ```rust
//! use bbox_intersect::prelude::*;
//!
//! let bbox = Bbox::from_flat(&[2.0, 2.0, 4.0, 4.0]).unwrap();
//!
//! let square: GeoJson = r#"{
//!     "type": "Polygon",
//!     "coordinates": [[[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]]]
//! }"#.parse().unwrap();
//! assert!(test(&bbox, &square).unwrap());
//!
//! // Same square with a hole around the box
//! let holed: GeoJson = r#"{
//!     "type": "Polygon",
//!     "coordinates": [
//!         [[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]],
//!         [[1, 1], [5, 1], [5, 5], [1, 5], [1, 1]]
//!     ]
//! }"#.parse().unwrap();
//! assert!(!test(&bbox, &holed).unwrap());
//!
//! // JSON text for both arguments
//! assert!(test_json("[0, 0, 10, 10]", r#"{"type": "Point", "coordinates": [10, 10]}"#).unwrap());
//! ```
//!
//! ## How It Works
//!
//! Points are tested for closed-box containment. Line strings and rings are
//! walked vertex by vertex: a contained vertex or an edge crossing the box
//! (slab test) is a hit. A ring with no contact either encloses the box or
//! is disjoint from it, which a ray cast from the box's min corner decides;
//! holes are then checked the same way to rule out a box sitting inside one.
//!
//! The default slab test answers for the line through each edge rather than
//! the clipped segment, so an edge that points at the box but ends short of
//! it counts as a crossing. [`Options::clip_to_segment`] makes it exact.
//!
//! Above two dimensions the point-in-polygon step runs the 2D test on every
//! adjacent axis pair; it is exact in 2D and a heuristic beyond.

pub mod bbox;
pub mod error;
pub mod geometry;
pub mod intersect;
pub mod linear;
pub mod options;
pub mod orientation;
pub mod polygon;
pub mod prelude;

mod integration_test;

pub use bbox::Bbox;
pub use error::{IntersectError, IntersectResult};
pub use geometry::{Feature, GeoJson, Geometry, Position};
pub use intersect::{BboxTest, test, test_json};
pub use options::{Options, SegmentTest};
pub use polygon::RingClass;
