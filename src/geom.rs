//! Geometric primitives: points, axes and axis-parallel lines.

/// A two-dimensional point.
///
/// Inputs are assumed to live in the first quadrant, but nothing here relies
/// on it; the only requirement is that both coordinates are finite.
#[derive(Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl std::fmt::Debug for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

impl Point {
    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        debug_assert!(x.is_finite());
        debug_assert!(y.is_finite());
        Point { x, y }
    }

    /// The coordinate of this point along `axis`.
    pub fn coordinate(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    pub fn to_kurbo(self) -> kurbo::Point {
        kurbo::Point::new(self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<kurbo::Point> for Point {
    fn from(p: kurbo::Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

/// One of the two coordinate axes.
///
/// A line "on" an axis is perpendicular to it: lines on [`Axis::X`] are
/// vertical (`x = c`) and lines on [`Axis::Y`] are horizontal (`y = c`).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
#[cfg_attr(any(test, feature = "arbitrary"), derive(arbitrary::Arbitrary))]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// The horizontal axis. Its lines are vertical.
    #[default]
    X,
    /// The vertical axis. Its lines are horizontal.
    Y,
}

impl Axis {
    /// Both axes, `X` first.
    pub const BOTH: [Axis; 2] = [Axis::X, Axis::Y];

    /// The axis that isn't this one.
    pub fn other(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }

    /// The one-letter tag of this axis's lines in the solution format:
    /// `v` for vertical, `h` for horizontal.
    pub fn line_tag(self) -> char {
        match self {
            Axis::X => 'v',
            Axis::Y => 'h',
        }
    }

    /// The inverse of [`Axis::line_tag`].
    pub fn from_line_tag(tag: char) -> Option<Axis> {
        match tag {
            'v' => Some(Axis::X),
            'h' => Some(Axis::Y),
            _ => None,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
        }
    }
}

/// Which side of a [`Line`] a point is on.
///
/// Points exactly on the line count as being on the left, which matches how
/// [`PointRegistry::split_at`](crate::PointRegistry::split_at) partitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// Smaller (or equal) coordinate.
    Left,
    /// Strictly bigger coordinate.
    Right,
}

/// An axis-parallel line.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Line {
    /// The axis the line crosses.
    pub axis: Axis,
    /// The position of the line along `axis`.
    pub coordinate: f64,
}

impl Line {
    pub fn new(axis: Axis, coordinate: f64) -> Self {
        Line { axis, coordinate }
    }

    /// A line on `axis` half-way between two coordinates.
    ///
    /// This is computed as `a + (b - a) / 2` rather than `(a + b) / 2`, and so
    /// it can't overflow for large inputs.
    pub fn between(axis: Axis, a: f64, b: f64) -> Self {
        Line {
            axis,
            coordinate: a + (b - a) / 2.0,
        }
    }

    pub fn side(&self, p: &Point) -> Side {
        if p.coordinate(self.axis) <= self.coordinate {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Are `p` and `q` on opposite sides of this line?
    pub fn separates(&self, p: &Point, q: &Point) -> bool {
        self.side(p) != self.side(q)
    }

    /// The part of this line that lies inside `bounds`.
    pub fn to_kurbo(&self, bounds: kurbo::Rect) -> kurbo::Line {
        match self.axis {
            Axis::X => kurbo::Line::new(
                (self.coordinate, bounds.min_y()),
                (self.coordinate, bounds.max_y()),
            ),
            Axis::Y => kurbo::Line::new(
                (bounds.min_x(), self.coordinate),
                (bounds.max_x(), self.coordinate),
            ),
        }
    }
}

/// Formats the line the way solution files store it, e.g. `v 1.500000`.
impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:.6}", self.axis.line_tag(), self.coordinate)
    }
}
