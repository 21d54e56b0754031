//! Proposing candidate lines by bisecting the sorted views.
//!
//! For each axis, we split the sorted range of points in half, then split each
//! half in half, and so on, recording one line per split. The recording order
//! is heap-like: the line that bisects the whole range comes first, and finer
//! lines come later. None of this looks at connectivity; candidates are
//! proposed up front and the [`Separator`](crate::Separator) decides which ones
//! are worth keeping.

use crate::{
    geom::{Axis, Line},
    registry::PointRegistry,
};

/// Generates the bisection lines for `coords`, which must be sorted.
///
/// There is one line per gap between consecutive coordinates, so `n`
/// coordinates give `n - 1` lines (and none at all if `n < 2`). Equal
/// consecutive coordinates give a line exactly at that coordinate.
pub fn bisect(axis: Axis, coords: &[f64]) -> Vec<Line> {
    debug_assert!(coords.windows(2).all(|w| w[0] <= w[1]));

    fn bisect_range(axis: Axis, coords: &[f64], from: usize, to: usize, out: &mut Vec<Line>) {
        let span = to - from;
        if span <= 1 {
            return;
        }

        let half = span / 2;
        out.push(Line::between(
            axis,
            coords[from + half - 1],
            coords[from + half],
        ));
        // A span of two has just been split into two singletons.
        if span != 2 {
            bisect_range(axis, coords, from, from + half, out);
            bisect_range(axis, coords, from + half, to, out);
        }
    }

    let mut out = Vec::with_capacity(coords.len().saturating_sub(1));
    bisect_range(axis, coords, 0, coords.len(), &mut out);
    out
}

/// A candidate line, and whether it has been committed.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Candidate {
    pub line: Line,
    pub committed: bool,
}

/// The candidate lines for one axis, with a cursor marking how many have been
/// looked at.
#[derive(Clone, Debug)]
pub struct CandidateQueue {
    axis: Axis,
    candidates: Vec<Candidate>,
    cursor: usize,
}

impl CandidateQueue {
    /// Bisects the sorted view of `axis`.
    pub fn generate(registry: &PointRegistry, axis: Axis) -> Self {
        let lines = bisect(axis, &registry.sorted_coordinates(axis));
        CandidateQueue::from_lines(axis, lines)
    }

    pub fn from_lines(axis: Axis, lines: Vec<Line>) -> Self {
        debug_assert!(lines.iter().all(|l| l.axis == axis));
        CandidateQueue {
            axis,
            candidates: lines
                .into_iter()
                .map(|line| Candidate {
                    line,
                    committed: false,
                })
                .collect(),
            cursor: 0,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Hands out the next unconsumed candidate, along with its position in
    /// the queue, and moves past it.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<(usize, Line)> {
        let ret = self.candidates.get(self.cursor).map(|c| (self.cursor, c.line));
        if ret.is_some() {
            self.cursor += 1;
        }
        ret
    }

    /// Have all the candidates been handed out?
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.candidates.len()
    }

    /// How many candidates have been handed out.
    pub fn consumed(&self) -> usize {
        self.cursor
    }

    pub fn mark_committed(&mut self, position: usize) {
        self.candidates[position].committed = true;
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        self.candidates.iter().map(|c| c.line)
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// The candidate queues of both axes.
#[derive(Clone, Debug)]
pub struct Candidates {
    queues: [CandidateQueue; 2],
}

impl Candidates {
    pub fn generate(registry: &PointRegistry) -> Self {
        Candidates {
            queues: Axis::BOTH.map(|axis| CandidateQueue::generate(registry, axis)),
        }
    }

    pub fn queue(&self, axis: Axis) -> &CandidateQueue {
        &self.queues[axis.index()]
    }

    pub fn queue_mut(&mut self, axis: Axis) -> &mut CandidateQueue {
        &mut self.queues[axis.index()]
    }

    /// Is there nothing left to try on either axis?
    pub fn is_exhausted(&self) -> bool {
        self.queues.iter().all(CandidateQueue::is_exhausted)
    }

    /// The total number of candidates on both axes.
    pub fn total(&self) -> usize {
        self.queues.iter().map(CandidateQueue::len).sum()
    }
}
