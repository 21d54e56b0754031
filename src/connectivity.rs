//! Which pairs of points still need to be separated.

use crate::registry::{PointIdx, PointVec};

/// A symmetric "still connected" relation over the points of an instance.
///
/// It starts out as the complete graph, and edges can only ever be removed.
/// We store it as a dense `n x n` matrix, because instances are small and the
/// matrix makes both queries and updates trivial.
///
/// Counts are in terms of *ordered* pairs, so the complete graph on `n` points
/// has `n * (n - 1)` connections and every disconnection removes two of them.
#[derive(Clone)]
pub struct ConnectivityGraph {
    n: usize,
    // Row-major; entry `i * n + j` says whether `i` and `j` are connected.
    connected: Vec<bool>,
    counts: PointVec<usize>,
    remaining: usize,
}

impl ConnectivityGraph {
    /// Creates the complete graph on `n` points.
    ///
    /// # Panics
    ///
    /// Panics if the bookkeeping doesn't come out to `n * (n - 1)` connections.
    /// That would be a bug in this type, not a problem with the input.
    pub fn new(n: usize) -> Self {
        let mut connected = vec![true; n * n];
        for i in 0..n {
            connected[i * n + i] = false;
        }
        let counts = PointVec::filled(n, n.saturating_sub(1));
        let remaining = connected.iter().filter(|c| **c).count();

        assert_eq!(
            remaining,
            n * n.saturating_sub(1),
            "connection count is inconsistent after initialization"
        );
        debug_assert_eq!(counts.values().iter().sum::<usize>(), remaining);

        ConnectivityGraph {
            n,
            connected,
            counts,
            remaining,
        }
    }

    /// The number of points.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn is_connected(&self, i: PointIdx, j: PointIdx) -> bool {
        self.connected[i.0 * self.n + j.0]
    }

    /// Removes the connection between `i` and `j`, in both directions.
    ///
    /// Returns `false` (and does nothing) if they were already disconnected.
    pub fn disconnect(&mut self, i: PointIdx, j: PointIdx) -> bool {
        if !self.is_connected(i, j) {
            return false;
        }
        self.connected[i.0 * self.n + j.0] = false;
        self.connected[j.0 * self.n + i.0] = false;
        self.counts[i] -= 1;
        self.counts[j] -= 1;
        self.remaining -= 2;
        true
    }

    /// Is any point in `left` still connected to any point in `right`?
    pub fn any_connected_across(&self, left: &[PointIdx], right: &[PointIdx]) -> bool {
        left.iter().any(|&i| {
            // A point with no connections left can't be connected across.
            self.counts[i] > 0 && right.iter().any(|&j| self.is_connected(i, j))
        })
    }

    /// Disconnects every pair with one point in `left` and the other in `right`.
    ///
    /// Returns the number of (unordered) pairs that were actually disconnected,
    /// not counting the ones that were disconnected already.
    pub fn disconnect_across(&mut self, left: &[PointIdx], right: &[PointIdx]) -> usize {
        let mut count = 0;
        for &i in left {
            for &j in right {
                if self.disconnect(i, j) {
                    count += 1;
                }
            }
        }
        count
    }

    /// The number of live ordered connections. The whole separation is done
    /// when this reaches zero.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// The number of points that `i` is still connected to.
    pub fn connection_count(&self, i: PointIdx) -> usize {
        self.counts[i]
    }

    #[cfg(test)]
    fn check_invariants(&self) {
        let live = self.connected.iter().filter(|c| **c).count();
        assert_eq!(live, self.remaining);
        assert_eq!(self.remaining % 2, 0);
        for i in 0..self.n {
            assert!(!self.connected[i * self.n + i]);
            let row = (0..self.n)
                .filter(|&j| self.connected[i * self.n + j])
                .count();
            assert_eq!(row, self.counts[PointIdx(i)]);
            for j in 0..self.n {
                assert_eq!(
                    self.connected[i * self.n + j],
                    self.connected[j * self.n + i]
                );
            }
        }
    }
}

impl std::fmt::Debug for ConnectivityGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for i in 0..self.n {
            let row: String = (0..self.n)
                .map(|j| if self.connected[i * self.n + j] { '1' } else { '.' })
                .collect();
            writeln!(f, "{:?}: {row}", PointIdx(i))?;
        }
        Ok(())
    }
}
