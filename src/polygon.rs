//! Ring and polygon classification against a bbox.
//!
//! A ring is first checked for boundary contact: any vertex inside the box
//! or any edge crossing it settles the question. With no contact the ring
//! and the box are either disjoint or one encloses the other, which is
//! decided by casting a ray from the box's min corner.

use crate::bbox::Bbox;
use crate::geometry::Position;
use crate::options::Options;

/// Outcome of testing one ring against a bbox.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum RingClass {
    /// A vertex lies in the box or an edge crosses it.
    Intersects,
    /// No contact and the box corner is outside the ring.
    Disjoint,
    /// No contact but the box corner is inside the ring, so the ring
    /// encloses the box.
    Ambiguous,
}

/// Even-odd point-in-polygon test, exact in 2D and a heuristic above.
///
/// For N-dimensional rings the 2D ray cast is run on every adjacent axis
/// pair `(l - 1, l)` and the point counts as inside only when every pair
/// agrees. This is not a point-in-polyhedron test. Axes beyond the shortest
/// vertex (or the point) are ignored.
pub fn point_in_polygon(point: &[f64], ring: &[Position]) -> bool {
    let dims = ring.iter().map(Vec::len).min().unwrap_or(0).min(point.len());
    if dims < 2 {
        return false;
    }
    (1..dims).all(|l| ray_cast(point, ring, l - 1, l))
}

/// Classic crossing-number test in the plane of axes `x` and `y`.
fn ray_cast(point: &[f64], ring: &[Position], x: usize, y: usize) -> bool {
    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let (vi, vj) = (&ring[i], &ring[j]);
        if (vi[y] > point[y]) != (vj[y] > point[y])
            && point[x] < (vj[x] - vi[x]) * (point[y] - vi[y]) / (vj[y] - vi[y]) + vi[x]
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Classifies a ring against `bbox`.
///
/// Edges are walked in vertex order; an unclosed ring gets an implicit
/// closing edge from its last vertex back to the first.
pub fn classify_ring(bbox: &Bbox, ring: &[Position], options: &Options) -> RingClass {
    let Some(first) = ring.first() else {
        return RingClass::Disjoint;
    };
    if bbox.contains_point(first) {
        return RingClass::Intersects;
    }
    for edge in ring.windows(2) {
        if bbox.contains_point(&edge[1]) || bbox.crossed_by(&edge[0], &edge[1], options) {
            return RingClass::Intersects;
        }
    }
    if let Some(last) = ring.last() {
        if last != first && bbox.crossed_by(last, first, options) {
            return RingClass::Intersects;
        }
    }

    if point_in_polygon(bbox.min(), ring) {
        RingClass::Ambiguous
    } else {
        RingClass::Disjoint
    }
}

/// Tests a polygon given as exterior ring followed by holes.
pub fn polygon(bbox: &Bbox, rings: &[Vec<Position>], options: &Options) -> bool {
    let Some((exterior, holes)) = rings.split_first() else {
        return false;
    };
    match classify_ring(bbox, exterior, options) {
        RingClass::Intersects => true,
        RingClass::Disjoint => false,
        RingClass::Ambiguous => {
            // Box is enclosed by the exterior; the first hole that settles it wins
            for hole in holes {
                match classify_ring(bbox, hole, options) {
                    RingClass::Ambiguous => return false,
                    RingClass::Intersects => return true,
                    RingClass::Disjoint => {}
                }
            }
            true
        }
    }
}

/// Tests each polygon in turn, stopping at the first hit.
pub fn multi_polygon(bbox: &Bbox, polygons: &[Vec<Vec<Position>>], options: &Options) -> bool {
    polygons.iter().any(|rings| polygon(bbox, rings, options))
}
