//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use bbox_intersect::prelude::*;
//! ```

pub use crate::{
    Bbox, BboxTest, Feature, GeoJson, Geometry, IntersectError, IntersectResult, Options, Position, RingClass,
    SegmentTest,
};
pub use crate::{test, test_json};
