//! The greedy commit loop.
//!
//! We walk the two candidate queues in alternating order (first axis, other
//! axis, first axis, ...). Each candidate is tested against the connectivity
//! graph: if some point on its left is still connected to some point on its
//! right, the line is committed and everything across it gets disconnected.
//! Otherwise it is skipped, for good. We stop once nothing is connected, or
//! once we run out of candidates.
//!
//! The test is what makes this more than just "apply every bisection": a line
//! that bisects the whole range on one axis might only separate points that
//! lines on the other axis have already separated.

use crate::{
    candidates::{CandidateQueue, Candidates},
    connectivity::ConnectivityGraph,
    geom::{Axis, Line, Point},
    registry::PointRegistry,
    SeparatorConfig,
};

/// How a separation run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Outcome {
    /// Every pair of points is separated by some committed line.
    Done,
    /// We ran out of candidates while some pairs were still connected. This
    /// only happens when points share coordinates.
    Exhausted,
}

/// What happened when we looked at the next candidate on some axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepResult {
    /// The line separated still-connected points, and we kept it.
    Committed {
        line: Line,
        /// The number of unordered pairs that this line disconnected.
        disconnected: usize,
    },
    /// The line didn't separate anything new, so we dropped it.
    Discarded { line: Line },
    /// There were no candidates left on this axis.
    Exhausted,
}

/// Per-axis candidate bookkeeping for a finished run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct AxisStats {
    pub generated: usize,
    pub committed: usize,
    pub discarded: usize,
}

/// The result of separating one instance.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Separation {
    lines: Vec<Line>,
    outcome: Outcome,
    remaining: usize,
    stats: [AxisStats; 2],
    #[serde(skip)]
    points: Vec<Point>,
    #[serde(skip)]
    bounds: kurbo::Rect,
}

impl Separation {
    /// The committed lines, in the order they were committed.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_done(&self) -> bool {
        self.outcome == Outcome::Done
    }

    /// The number of ordered pairs that were still connected at the end.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn stats(&self, axis: Axis) -> AxisStats {
        self.stats[axis.index()]
    }

    /// The input points, in input order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The smallest rectangle containing all the points.
    pub fn bounding_box(&self) -> kurbo::Rect {
        self.bounds
    }

    /// Is there a committed line with `p` and `q` on opposite sides?
    pub fn separates(&self, p: &Point, q: &Point) -> bool {
        self.lines.iter().any(|line| line.separates(p, q))
    }

    /// The committed lines, clipped to `bounds`.
    pub fn to_kurbo_lines(&self, bounds: kurbo::Rect) -> Vec<kurbo::Line> {
        self.lines.iter().map(|line| line.to_kurbo(bounds)).collect()
    }

    /// Renders the solution the way solution files store it: the line count,
    /// then one line per committed line.
    pub fn solution_text(&self) -> String {
        let mut out = format!("{}\n", self.lines.len());
        for line in &self.lines {
            out.push_str(&line.to_string());
            out.push('\n');
        }
        out
    }
}

/// The state of one separation run.
///
/// This owns everything about a single instance; separating another instance
/// means making another `Separator`.
#[derive(Clone, Debug)]
pub struct Separator {
    registry: PointRegistry,
    graph: ConnectivityGraph,
    candidates: Candidates,
    committed: Vec<Line>,
    first_axis: Axis,
}

impl Separator {
    /// Sets up a run: every pair connected, every candidate proposed, and
    /// nothing committed yet.
    pub fn new(registry: PointRegistry, config: &SeparatorConfig) -> Self {
        let graph = ConnectivityGraph::new(registry.len());
        let candidates = Candidates::generate(&registry);
        log::trace!(
            "{} points, {} x candidates, {} y candidates",
            registry.len(),
            candidates.queue(Axis::X).len(),
            candidates.queue(Axis::Y).len()
        );
        Separator {
            registry,
            graph,
            candidates,
            committed: Vec::new(),
            first_axis: config.first_axis,
        }
    }

    pub fn registry(&self) -> &PointRegistry {
        &self.registry
    }

    pub fn graph(&self) -> &ConnectivityGraph {
        &self.graph
    }

    pub fn queue(&self, axis: Axis) -> &CandidateQueue {
        self.candidates.queue(axis)
    }

    /// The lines committed so far.
    pub fn committed(&self) -> &[Line] {
        &self.committed
    }

    /// Are we still running? We are, as long as something is still connected
    /// and there's some candidate left to try.
    pub fn is_running(&self) -> bool {
        self.graph.remaining() > 0 && !self.candidates.is_exhausted()
    }

    /// Would committing `line` separate anything that's still connected?
    ///
    /// This doesn't change any state.
    pub fn test(&self, line: &Line) -> bool {
        let (left, right) = self.registry.split_at(line);
        self.graph.any_connected_across(left, right)
    }

    /// Looks at the next candidate on `axis`, committing it if it's useful.
    pub fn step_axis(&mut self, axis: Axis) -> StepResult {
        let Some((position, line)) = self.candidates.queue_mut(axis).next() else {
            return StepResult::Exhausted;
        };

        let (left, right) = self.registry.split_at(&line);
        if !self.graph.any_connected_across(left, right) {
            log::trace!("discarding {line}");
            return StepResult::Discarded { line };
        }

        let disconnected = self.graph.disconnect_across(left, right);
        debug_assert!(disconnected > 0);
        self.candidates.queue_mut(axis).mark_committed(position);
        self.committed.push(line);
        log::debug!(
            "committed {line}, disconnecting {disconnected} pairs ({} connections remain)",
            self.graph.remaining()
        );
        StepResult::Committed { line, disconnected }
    }

    /// One round of the alternation: a step on the first axis and then, if
    /// there's still something to separate, a step on the other one.
    pub fn step(&mut self) -> (StepResult, Option<StepResult>) {
        let first = self.step_axis(self.first_axis);
        let second = (self.graph.remaining() > 0).then(|| self.step_axis(self.first_axis.other()));
        (first, second)
    }

    /// Runs until everything is separated or we run out of candidates.
    pub fn run(mut self) -> Separation {
        while self.is_running() {
            self.step();
        }

        let outcome = if self.graph.remaining() == 0 {
            Outcome::Done
        } else {
            Outcome::Exhausted
        };
        let stats = Axis::BOTH.map(|axis| {
            let queue = self.candidates.queue(axis);
            let committed = queue.candidates().iter().filter(|c| c.committed).count();
            AxisStats {
                generated: queue.len(),
                committed,
                discarded: queue.consumed() - committed,
            }
        });
        log::debug!(
            "{outcome:?} with {} lines for {} points ({} connections remain)",
            self.committed.len(),
            self.registry.len(),
            self.graph.remaining()
        );

        Separation {
            lines: self.committed,
            outcome,
            remaining: self.graph.remaining(),
            stats,
            points: self.registry.points().values().to_vec(),
            bounds: self.registry.bounding_box(),
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{registry::PointIdx, separate};

    fn separator(coords: &[(f64, f64)]) -> Separator {
        let config = SeparatorConfig::default();
        let reg = PointRegistry::load(coords.len(), coords, &config).unwrap();
        Separator::new(reg, &config)
    }

    fn run(coords: &[(f64, f64)]) -> Separation {
        separator(coords).run()
    }

    #[test]
    fn square() {
        let sep = run(&[(0.0, 0.0), (0.0, 3.0), (3.0, 0.0), (3.0, 3.0)]);
        assert_eq!(
            sep.lines(),
            [Line::new(Axis::X, 1.5), Line::new(Axis::Y, 1.5)]
        );
        assert_eq!(sep.outcome(), Outcome::Done);
        assert_eq!(sep.remaining(), 0);
    }

    #[test]
    fn square_step_by_step() {
        let mut sep = separator(&[(0.0, 0.0), (0.0, 3.0), (3.0, 0.0), (3.0, 3.0)]);
        assert_eq!(sep.graph().remaining(), 12);
        assert_eq!(
            sep.step_axis(Axis::X),
            StepResult::Committed {
                line: Line::new(Axis::X, 1.5),
                disconnected: 4,
            }
        );
        assert_eq!(sep.graph().remaining(), 4);
        // The second x candidate sits on the points at x = 0, so it puts
        // everybody on the same side as the first one did.
        assert_eq!(
            sep.step_axis(Axis::X),
            StepResult::Discarded {
                line: Line::new(Axis::X, 0.0)
            }
        );
        assert_eq!(
            sep.step_axis(Axis::Y),
            StepResult::Committed {
                line: Line::new(Axis::Y, 1.5),
                disconnected: 2,
            }
        );
        assert!(!sep.is_running());
    }

    #[test]
    fn two_points() {
        let mut sep = separator(&[(1.0, 4.0), (2.0, 8.0)]);
        assert_eq!(sep.queue(Axis::X).len(), 1);
        assert_eq!(sep.queue(Axis::Y).len(), 1);
        assert_eq!(
            sep.step(),
            (
                StepResult::Committed {
                    line: Line::new(Axis::X, 1.5),
                    disconnected: 1
                },
                None
            )
        );
        let sep = sep.run();
        assert_eq!(sep.lines(), [Line::new(Axis::X, 1.5)]);
        assert!(sep.is_done());
        assert_eq!(sep.stats(Axis::Y).generated, 1);
        assert_eq!(sep.stats(Axis::Y).discarded, 0);
    }

    #[test]
    fn single_point() {
        let sep = run(&[(5.0, 5.0)]);
        assert!(sep.lines().is_empty());
        assert!(sep.is_done());
    }

    #[test]
    fn first_axis_is_configurable() {
        let config = SeparatorConfig {
            first_axis: Axis::Y,
            ..SeparatorConfig::default()
        };
        let sep = separate(&[(1.0, 4.0), (2.0, 8.0)], &config).unwrap();
        assert_eq!(sep.lines(), [Line::new(Axis::Y, 6.0)]);
    }

    // A commit disconnects the whole partition, and not just the pair that
    // made the test succeed.
    #[test]
    fn commit_disconnects_whole_partition() {
        let mut sep = separator(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0), (4.0, 4.0)]);
        let StepResult::Committed { line, disconnected } = sep.step_axis(Axis::X) else {
            panic!("expected a commit");
        };
        assert_eq!(line, Line::new(Axis::X, 1.5));
        assert_eq!(disconnected, 6);
        for i in 0..2 {
            for j in 2..5 {
                assert!(!sep.graph().is_connected(PointIdx(i), PointIdx(j)));
            }
        }
        assert!(sep.graph().is_connected(PointIdx(0), PointIdx(1)));
    }

    // On the diagonal, each y candidate makes the same partition as the x
    // candidate just before it, so every y candidate gets discarded.
    #[test]
    fn diagonal() {
        let coords: Vec<_> = (0..8).map(|i| (i as f64, i as f64)).collect();
        let sep = run(&coords);
        assert!(sep.is_done());
        assert_eq!(sep.lines().len(), 7);
        assert!(sep.lines().iter().all(|l| l.axis == Axis::X));
        assert_eq!(sep.lines()[0], Line::new(Axis::X, 3.5));
        assert_eq!(sep.lines()[1], Line::new(Axis::X, 1.5));
        assert_eq!(
            sep.stats(Axis::Y),
            AxisStats {
                generated: 7,
                committed: 0,
                // The last round stops right after the x commit.
                discarded: 6,
            }
        );
    }

    #[test]
    fn retesting_a_discard() {
        let mut sep = separator(&[(0.0, 0.0), (0.0, 3.0), (3.0, 0.0), (3.0, 3.0)]);
        sep.step_axis(Axis::X);
        let StepResult::Discarded { line } = sep.step_axis(Axis::X) else {
            panic!("expected a discard");
        };
        assert!(!sep.test(&line));
        assert!(!sep.test(&line));
    }

    #[test]
    fn duplicate_points_are_exhausted() {
        let sep = run(&[(1.0, 1.0), (1.0, 1.0), (2.0, 2.0)]);
        assert_eq!(sep.outcome(), Outcome::Exhausted);
        assert_eq!(sep.remaining(), 2);
        // The first gap has no width, so its line goes right through the
        // duplicated points. They count as being on its left.
        assert_eq!(sep.lines(), [Line::new(Axis::X, 1.0)]);
    }

    #[test]
    fn shared_columns_and_rows() {
        let coords: Vec<_> = (0..3)
            .flat_map(|i| (0..3).map(move |j| (i as f64, j as f64)))
            .collect();
        let sep = run(&coords);
        assert!(sep.is_done());
        for (i, p) in sep.points().iter().enumerate() {
            for q in &sep.points()[i + 1..] {
                assert!(sep.separates(p, q));
            }
        }
    }

    #[test]
    fn solution_text() {
        let sep = run(&[(0.0, 0.0), (0.0, 3.0), (3.0, 0.0), (3.0, 3.0)]);
        insta::assert_snapshot!(sep.solution_text().trim_end(), @r"
        2
        v 1.500000
        h 1.500000
        ");
    }

    fn coords_strategy() -> impl Strategy<Value = Vec<(f64, f64)>> {
        prop::collection::vec((0u8..16, 0u8..16), 1..24).prop_map(|cs| {
            cs.into_iter()
                .map(|(x, y)| (f64::from(x), f64::from(y)))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn greedy_properties(coords in coords_strategy()) {
            let n = coords.len();
            let mut sep = separator(&coords);
            let total = sep.queue(Axis::X).len() + sep.queue(Axis::Y).len();
            let mut last = sep.graph().remaining();
            let mut steps = 0;
            while sep.is_running() {
                let (first, second) = sep.step();
                for result in std::iter::once(first).chain(second) {
                    if let StepResult::Committed { disconnected, .. } = result {
                        prop_assert!(disconnected > 0);
                        prop_assert!(last - sep.graph().remaining() >= 2);
                    }
                }
                let remaining = sep.graph().remaining();
                prop_assert!(remaining <= last);
                prop_assert_eq!(remaining % 2, 0);
                last = remaining;
                steps += 1;
                prop_assert!(steps <= total);
            }

            // Disconnected exactly when some committed line is in between.
            let committed = sep.committed().to_vec();
            let reg = sep.registry();
            let mut disconnected_pairs = 0;
            for i in reg.points().indices() {
                for j in reg.points().indices().filter(|j| *j > i) {
                    let (p, q) = (reg.point(i), reg.point(j));
                    let split = committed.iter().any(|l| l.separates(p, q));
                    prop_assert_eq!(split, !sep.graph().is_connected(i, j));
                    if split {
                        disconnected_pairs += 1;
                    }
                }
            }
            prop_assert_eq!(sep.graph().remaining(), n * (n - 1) - 2 * disconnected_pairs);

            let result = sep.run();
            let distinct_x = {
                let mut xs: Vec<u64> = coords.iter().map(|c| c.0.to_bits()).collect();
                xs.sort();
                xs.dedup();
                xs.len() == n
            };
            if distinct_x {
                prop_assert_eq!(result.outcome(), Outcome::Done);
            }
        }

        #[test]
        fn deterministic(coords in coords_strategy()) {
            let a = run(&coords);
            let b = run(&coords);
            prop_assert_eq!(a.lines(), b.lines());
            prop_assert_eq!(a.outcome(), b.outcome());
        }
    }
}
