//! Axis-aligned bounding box in any number of dimensions.
//!
//! A [`Bbox`] is stored as a min corner and a max corner of equal length.
//! Both GeoJSON spellings are accepted on input: the flat
//! `[min_x, min_y, max_x, max_y]` array (or its `2n`-number N-dimensional
//! form) and the corner pair `[[min...], [max...]]`.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{IntersectError, IntersectResult};
use crate::options::{Options, SegmentTest};
use crate::orientation::box_edges_cross_segment;

/// Closed axis-aligned box given by its min and max corners.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "BboxRepr")]
pub struct Bbox {
    min: Vec<f64>,
    max: Vec<f64>,
}

/// Wire forms of a bbox.
#[derive(Deserialize)]
#[serde(untagged)]
enum BboxRepr {
    Flat(Vec<f64>),
    Corners(Vec<f64>, Vec<f64>),
}

impl TryFrom<BboxRepr> for Bbox {
    type Error = IntersectError;

    fn try_from(repr: BboxRepr) -> Result<Self, Self::Error> {
        match repr {
            BboxRepr::Flat(values) => Self::from_flat(&values),
            BboxRepr::Corners(min, max) => Self::from_corners(min, max),
        }
    }
}

impl TryFrom<&[f64]> for Bbox {
    type Error = IntersectError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        Self::from_flat(values)
    }
}

impl Bbox {
    /// Builds a box from a flat `[min..., max...]` array.
    ///
    /// Four numbers give the usual 2D `[min_x, min_y, max_x, max_y]`; any
    /// even length of at least four splits in half into the two corners.
    ///
    /// # Errors
    ///
    /// Returns `IntersectError::MalformedInput` for odd or too short arrays
    /// and for inverted bounds.
    pub fn from_flat(values: &[f64]) -> IntersectResult<Self> {
        if values.len() < 4 || values.len() % 2 != 0 {
            return Err(IntersectError::MalformedInput(format!(
                "flat bbox needs an even number of at least 4 values, got {}",
                values.len()
            )));
        }
        let (min, max) = values.split_at(values.len() / 2);
        Self::from_corners(min.to_vec(), max.to_vec())
    }

    /// Builds a box from its min and max corners.
    ///
    /// # Errors
    ///
    /// Returns `IntersectError::MalformedInput` when the corners differ in
    /// length, have fewer than two axes, or `min > max` (or NaN) on an axis.
    pub fn from_corners(min: Vec<f64>, max: Vec<f64>) -> IntersectResult<Self> {
        if min.len() != max.len() {
            return Err(IntersectError::MalformedInput(format!(
                "bbox corners differ in dimension ({} vs {})",
                min.len(),
                max.len()
            )));
        }
        if min.len() < 2 {
            return Err(IntersectError::MalformedInput(format!(
                "bbox needs at least 2 axes, got {}",
                min.len()
            )));
        }
        for (axis, (lo, hi)) in min.iter().zip(&max).enumerate() {
            if lo.is_nan() || hi.is_nan() || lo > hi {
                return Err(IntersectError::MalformedInput(format!(
                    "bbox axis {axis} has min {lo} greater than max {hi}"
                )));
            }
        }
        Ok(Self { min, max })
    }

    /// Reads either bbox form from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns `IntersectError::MalformedInput` when the value is not a
    /// numeric array of a valid bbox shape.
    pub fn from_value(value: &Value) -> IntersectResult<Self> {
        Self::deserialize(value).map_err(|e| IntersectError::MalformedInput(format!("bbox: {e}")))
    }

    /// Number of axes.
    #[inline]
    pub fn dim(&self) -> usize {
        self.min.len()
    }

    /// Min corner.
    #[inline]
    pub fn min(&self) -> &[f64] {
        &self.min
    }

    /// Max corner.
    #[inline]
    pub fn max(&self) -> &[f64] {
        &self.max
    }

    /// Tests whether `point` lies in the closed box.
    ///
    /// Only the axes shared by the box and the point are compared, so a
    /// 3D point against a 2D box ignores its third coordinate.
    pub fn contains_point(&self, point: &[f64]) -> bool {
        let len = self.dim().min(point.len());
        for i in 0..len {
            if point[i] < self.min[i] || point[i] > self.max[i] {
                return false;
            }
        }
        true
    }

    /// Slab test of the line through `p1` and `p2` against the box.
    ///
    /// The parameter `t` runs along `p1 + t * (p2 - p1)`. Without `clip`
    /// it is unbounded above, so this answers for the ray from `p1` through
    /// `p2` and beyond: an edge that points at the box but ends short of it
    /// still reports a crossing. With `clip` the parameter is restricted to
    /// `[0, 1]` and the answer is exact for the segment.
    pub fn intersects_segment(&self, p1: &[f64], p2: &[f64], clip: bool) -> bool {
        let dims = self.dim().min(p1.len()).min(p2.len());
        let (mut t_near, mut t_far) = if clip {
            (0.0, 1.0)
        } else {
            (f64::NEG_INFINITY, f64::INFINITY)
        };

        for i in 0..dims {
            let dir = p2[i] - p1[i];
            // Parallel to this slab and outside it; the infinite interval
            // alone cannot say so when every axis is degenerate
            if dir == 0.0 && (p1[i] < self.min[i] || p1[i] > self.max[i]) {
                return false;
            }
            // Infinite on axes the segment runs parallel to
            let inv_dir = 1.0 / dir;
            let mut t_lo = (self.min[i] - p1[i]) * inv_dir;
            let mut t_hi = (self.max[i] - p1[i]) * inv_dir;
            // 0 * inf: p1 lies on this plane of a parallel slab, which leaves the axis unconstrained
            if t_lo.is_nan() {
                t_lo = -inv_dir;
            }
            if t_hi.is_nan() {
                t_hi = inv_dir;
            }
            t_near = t_near.max(t_lo.min(t_hi));
            t_far = t_far.min(t_lo.max(t_hi));
        }

        !(t_far < 0.0 || t_near > t_far)
    }

    /// Edge crossing test using the strategy selected in `options`.
    pub fn crossed_by(&self, p1: &[f64], p2: &[f64], options: &Options) -> bool {
        match options.segment_test {
            SegmentTest::Slab => self.intersects_segment(p1, p2, options.clip_to_segment),
            SegmentTest::BoxEdges => box_edges_cross_segment(self, p1, p2),
        }
    }
}
