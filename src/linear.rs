//! Point and vertex-chain walkers.

use crate::bbox::Bbox;
use crate::geometry::Position;
use crate::options::Options;

/// Tests a single position.
#[inline]
pub fn point(bbox: &Bbox, coordinates: &[f64]) -> bool {
    bbox.contains_point(coordinates)
}

/// True when any of the points lies in the box.
pub fn multi_point(bbox: &Bbox, points: &[Position]) -> bool {
    points.iter().any(|p| bbox.contains_point(p))
}

/// Walks a vertex chain, testing every vertex and every edge between
/// consecutive vertices. Returns at the first hit.
pub fn line_string(bbox: &Bbox, coordinates: &[Position], options: &Options) -> bool {
    let Some(first) = coordinates.first() else {
        return false;
    };
    if bbox.contains_point(first) {
        return true;
    }
    coordinates
        .windows(2)
        .any(|edge| bbox.contains_point(&edge[1]) || bbox.crossed_by(&edge[0], &edge[1], options))
}

/// True when any component line string intersects.
pub fn multi_line_string(bbox: &Bbox, lines: &[Vec<Position>], options: &Options) -> bool {
    lines.iter().any(|line| line_string(bbox, line, options))
}
