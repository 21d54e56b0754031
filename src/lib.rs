//! Separating points in the plane with axis-parallel lines.
//!
//! Given a set of points, we look for a small set of vertical and horizontal
//! lines such that every pair of points has a line between them. Finding the
//! smallest such set is a set-cover problem; we approximate it greedily.
//!
//! We start with the complete graph on the points, where an edge means "these
//! two still need to be separated". For each axis we precompute candidate lines
//! by repeatedly bisecting the sorted points, broadest bisection first. Then we
//! alternate between the two axes, taking the next candidate on each. A
//! candidate is committed if some pair across it is still connected, in which
//! case every pair across it gets disconnected. Otherwise it's dropped. This
//! continues until nothing is connected.
//!
//! The result is usually much better than the worst case of `n - 1` lines, but
//! it isn't optimal. Such is the nature of greedy algorithms.
//!
//! ```
//! use linesep::{separate, Axis, Line, SeparatorConfig};
//!
//! let square = [(0.0, 0.0), (0.0, 3.0), (3.0, 0.0), (3.0, 3.0)];
//! let separation = separate(&square, &SeparatorConfig::default()).unwrap();
//! assert_eq!(
//!     separation.lines(),
//!     [Line::new(Axis::X, 1.5), Line::new(Axis::Y, 1.5)]
//! );
//! ```

#[macro_use]
mod typed_vec;

#[cfg(any(test, feature = "arbitrary"))]
pub mod arbitrary;
pub mod candidates;
pub mod connectivity;
mod geom;
pub mod registry;
pub mod separator;

#[cfg(feature = "generators")]
pub mod generators;

pub use geom::{Axis, Line, Point, Side};
pub use registry::{PointIdx, PointRegistry};
pub use separator::{Outcome, Separation, Separator};

/// The default bound on the number of points in an instance.
pub const DEFAULT_MAX_POINTS: usize = 100;

/// Knobs for a separation run.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SeparatorConfig {
    /// Instances with more points than this are rejected.
    ///
    /// The connectivity graph is quadratic in the number of points, and each
    /// candidate test is quadratic too, so this shouldn't get too big.
    pub max_points: usize,
    /// The axis whose candidates get tried first in each round.
    pub first_axis: Axis,
}

impl Default for SeparatorConfig {
    fn default() -> Self {
        SeparatorConfig {
            max_points: DEFAULT_MAX_POINTS,
            first_axis: Axis::X,
        }
    }
}

/// The input points were faulty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInstance {
    /// There were no points, or zero points were declared.
    #[error("the instance has no points")]
    NoPoints,
    /// The declared number of points doesn't match the number supplied.
    #[error("the instance declares {declared} points but supplies {supplied}")]
    CountMismatch {
        /// How many points the instance claimed to have.
        declared: usize,
        /// How many it actually had.
        supplied: usize,
    },
    /// There were more points than [`SeparatorConfig::max_points`].
    #[error("the instance has {count} points, but at most {max} are allowed")]
    TooManyPoints {
        /// The number of points.
        count: usize,
        /// The configured maximum.
        max: usize,
    },
    /// At least one coordinate was infinite or NaN.
    #[error("point {index} has a non-finite coordinate")]
    NonFinite {
        /// The index of the first bad point.
        index: usize,
    },
}

/// Separates a set of points, given as `(x, y)` pairs.
///
/// This is a shortcut for building a [`PointRegistry`] and running a
/// [`Separator`] on it.
pub fn separate(
    coords: &[(f64, f64)],
    config: &SeparatorConfig,
) -> Result<Separation, InvalidInstance> {
    let registry = PointRegistry::load(coords.len(), coords, config)?;
    Ok(Separator::new(registry, config).run())
}
