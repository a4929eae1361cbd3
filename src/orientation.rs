//! 2D orientation predicates and the four-edge box crossing test.
//!
//! These only look at the first two coordinates. The slab test in
//! [`Bbox::intersects_segment`] is the general N-dimensional strategy;
//! this one is selected with [`SegmentTest::BoxEdges`](crate::SegmentTest).

use crate::bbox::Bbox;

/// Returns true when `a`, `b`, `c` make a strict counter-clockwise turn.
#[inline]
pub fn ccw(a: &[f64], b: &[f64], c: &[f64]) -> bool {
    (c[1] - a[1]) * (b[0] - a[0]) > (b[1] - a[1]) * (c[0] - a[0])
}

/// Returns true when segment `p1-p2` properly crosses segment `p3-p4`.
///
/// Collinear overlaps and touching endpoints are not reported.
#[inline]
pub fn segments_cross(p1: &[f64], p2: &[f64], p3: &[f64], p4: &[f64]) -> bool {
    ccw(p1, p3, p4) != ccw(p2, p3, p4) && ccw(p1, p2, p3) != ccw(p1, p2, p4)
}

/// Tests segment `p1-p2` against the four edges of the box's first two axes.
pub fn box_edges_cross_segment(bbox: &Bbox, p1: &[f64], p2: &[f64]) -> bool {
    if p1.len() < 2 || p2.len() < 2 {
        return false;
    }
    let (min, max) = (bbox.min(), bbox.max());
    let bottom_left = [min[0], min[1]];
    let bottom_right = [max[0], min[1]];
    let top_left = [min[0], max[1]];
    let top_right = [max[0], max[1]];

    segments_cross(&bottom_left, &bottom_right, p1, p2)
        || segments_cross(&bottom_left, &top_left, p1, p2)
        || segments_cross(&top_left, &top_right, p1, p2)
        || segments_cross(&bottom_right, &top_right, p1, p2)
}
