//! The point set of one problem instance, and its two axis-sorted views.

use crate::{
    geom::{Axis, Line, Point},
    InvalidInstance, SeparatorConfig,
};

/// An index into a [`PointRegistry`].
///
/// This is the identity of a point: it is the point's position in the input,
/// and it never changes. It is unrelated to the point's position in either of
/// the sorted views.
#[derive(Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash, serde::Serialize)]
pub struct PointIdx(pub usize);

/// A vector indexed by [`PointIdx`].
#[derive(Clone, PartialEq)]
pub struct PointVec<T> {
    inner: Vec<T>,
}

impl_typed_vec!(PointVec, PointIdx, "p");

/// The points of an instance, together with their orderings along both axes.
#[derive(Clone, Debug)]
pub struct PointRegistry {
    points: PointVec<Point>,
    // Indexed by `Axis::index`.
    sorted: [Vec<PointIdx>; 2],
}

impl PointRegistry {
    /// Validates and stores an instance that claims to have `declared` points.
    ///
    /// The points get indices `0..n` in the order they were supplied.
    pub fn load(
        declared: usize,
        coords: &[(f64, f64)],
        config: &SeparatorConfig,
    ) -> Result<Self, InvalidInstance> {
        if declared == 0 || coords.is_empty() {
            return Err(InvalidInstance::NoPoints);
        }
        if declared != coords.len() {
            return Err(InvalidInstance::CountMismatch {
                declared,
                supplied: coords.len(),
            });
        }
        if coords.len() > config.max_points {
            return Err(InvalidInstance::TooManyPoints {
                count: coords.len(),
                max: config.max_points,
            });
        }
        if let Some(index) = coords
            .iter()
            .position(|(x, y)| !x.is_finite() || !y.is_finite())
        {
            return Err(InvalidInstance::NonFinite { index });
        }

        let points = PointVec::from_vec(coords.iter().map(|&(x, y)| Point::new(x, y)).collect());
        let sorted = Axis::BOTH.map(|axis| sorted_view(&points, axis));
        Ok(PointRegistry { points, sorted })
    }

    /// Like [`PointRegistry::load`], but the declared count is just the number
    /// of points given.
    pub fn from_points(
        points: impl IntoIterator<Item = Point>,
        config: &SeparatorConfig,
    ) -> Result<Self, InvalidInstance> {
        let coords: Vec<_> = points.into_iter().map(|p| (p.x, p.y)).collect();
        PointRegistry::load(coords.len(), &coords, config)
    }

    /// The number of points. This is never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn point(&self, idx: PointIdx) -> &Point {
        &self.points[idx]
    }

    /// All the points, indexed by their identity.
    pub fn points(&self) -> &PointVec<Point> {
        &self.points
    }

    pub fn coordinate(&self, axis: Axis, idx: PointIdx) -> f64 {
        self.points[idx].coordinate(axis)
    }

    /// The indices of all points, ordered by their coordinate along `axis`.
    ///
    /// Points with equal coordinates are ordered by index.
    pub fn sorted_by(&self, axis: Axis) -> &[PointIdx] {
        &self.sorted[axis.index()]
    }

    /// The coordinates along `axis`, in the order of [`PointRegistry::sorted_by`].
    pub fn sorted_coordinates(&self, axis: Axis) -> Vec<f64> {
        self.sorted_by(axis)
            .iter()
            .map(|&idx| self.coordinate(axis, idx))
            .collect()
    }

    /// Finds the position in `sorted_by(axis)` of the last point whose
    /// coordinate is at most `coordinate`.
    ///
    /// Returns `None` if every point is strictly bigger than `coordinate`.
    pub fn nearest_index_left_of(&self, axis: Axis, coordinate: f64) -> Option<usize> {
        let count = self
            .sorted_by(axis)
            .partition_point(|&idx| self.coordinate(axis, idx) <= coordinate);
        count.checked_sub(1)
    }

    /// Partitions the sorted view of `line.axis` into the points on the left of
    /// `line` (including any that are exactly on it) and those on the right.
    pub fn split_at(&self, line: &Line) -> (&[PointIdx], &[PointIdx]) {
        let mid = self
            .nearest_index_left_of(line.axis, line.coordinate)
            .map_or(0, |pos| pos + 1);
        self.sorted_by(line.axis).split_at(mid)
    }

    /// The smallest rectangle containing every point.
    pub fn bounding_box(&self) -> kurbo::Rect {
        let [by_x, by_y] = &self.sorted;
        // Neither view is empty, because loading rejects empty instances.
        let (x0, x1) = (by_x[0], by_x[by_x.len() - 1]);
        let (y0, y1) = (by_y[0], by_y[by_y.len() - 1]);
        kurbo::Rect::new(
            self.points[x0].x,
            self.points[y0].y,
            self.points[x1].x,
            self.points[y1].y,
        )
    }
}

fn sorted_view(points: &PointVec<Point>, axis: Axis) -> Vec<PointIdx> {
    let mut view: Vec<_> = points.indices().collect();
    // The sort is stable and the view starts in index order, so ties stay in
    // index order.
    view.sort_by(|&a, &b| {
        points[a]
            .coordinate(axis)
            .total_cmp(&points[b].coordinate(axis))
    });
    view
}
