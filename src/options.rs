//! Query configuration.

use serde::{Deserialize, Serialize};

/// Default `GeometryCollection` nesting limit.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Strategy used to decide whether a geometry edge crosses the bbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum SegmentTest {
    /// N-dimensional slab test against the box volume.
    #[default]
    Slab,
    /// Orientation test of the edge against the four 2D box edges.
    ///
    /// Only the first two axes are considered, and an edge lying entirely
    /// inside the box does not cross any box edge (vertex containment
    /// covers that case in the walkers).
    BoxEdges,
}

/// Options controlling a [`BboxTest`](crate::BboxTest).
///
/// ```
/// use bbox_intersect::prelude::*;
///
/// let options = Options::default().clip_to_segment(true).max_depth(8);
/// assert!(options.clip_to_segment);
/// assert_eq!(options.segment_test, SegmentTest::Slab);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Edge crossing strategy.
    pub segment_test: SegmentTest,
    /// Restrict the slab parameter to `[0, 1]`.
    ///
    /// Off by default: the slab test then answers for the infinite line
    /// through the edge endpoints, which can report a crossing for an edge
    /// that stops short of the box.
    pub clip_to_segment: bool,
    /// Maximum `GeometryCollection` nesting depth.
    pub max_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            segment_test: SegmentTest::Slab,
            clip_to_segment: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Options {
    /// Sets the edge crossing strategy.
    #[must_use]
    pub fn segment_test(mut self, segment_test: SegmentTest) -> Self {
        self.segment_test = segment_test;
        self
    }

    /// Enables or disables clipping of the slab parameter to the segment.
    #[must_use]
    pub fn clip_to_segment(mut self, clip: bool) -> Self {
        self.clip_to_segment = clip;
        self
    }

    /// Sets the `GeometryCollection` nesting limit.
    #[must_use]
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
