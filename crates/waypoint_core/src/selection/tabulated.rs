//! Bottom-up selector.
//!
//! Evaluates the selection recurrence iteratively. `table[b][s]` holds the
//! best result for the suffix starting at `s`, anchored on `s`, with `b`
//! placements left, which may also stop and leave the rest unsplit. Rows are filled in increasing `b`, each from the row
//! below, and the choices are walked forward at the end to recover the
//! checkpoints.
//!
//! Segment costs come from [`SegmentCost::prefix_costs`], one call per
//! start index, giving every interval `path[s..j]` without re-scanning.

use super::{validate_budget, SearchStats, Selection};
use crate::math::{AnchorCost, SegmentCost};
use crate::types::{Point, SelectionResult};

/// One table cell.
#[derive(Debug, Clone, Copy)]
struct Cell {
    cost: f64,
    /// Next checkpoint, or `None` when the rest of the suffix is one segment
    next: Option<usize>,
}

/// Iterative selector over an explicit `(budget, start)` table.
///
/// Uses `O(len²)` cost evaluations and `O(budget · len²)` time, with no
/// recursion, so long paths and large budgets are practical. Results are
/// identical to [`ExhaustiveSelector`](super::ExhaustiveSelector), cost
/// bits included.
///
/// # Examples
///
/// ```
/// use waypoint_core::math::AnchorCost;
/// use waypoint_core::selection::TabulatedSelector;
/// use waypoint_core::types::Path;
///
/// let path = Path::from_pairs(&[[0.0, 0.0], [0.5, 0.0], [10.0, 0.0], [10.5, 0.0]]);
/// let selection = TabulatedSelector::new(AnchorCost::euclidean())
///     .select(&path, 1)
///     .unwrap();
/// assert_eq!(selection.checkpoints, vec![2]);
/// assert_eq!(selection.cost, 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct TabulatedSelector<C = AnchorCost> {
    cost: C,
    stats: SearchStats,
}

impl Default for TabulatedSelector<AnchorCost> {
    fn default() -> Self {
        Self::new(AnchorCost::euclidean())
    }
}

impl<C: SegmentCost> TabulatedSelector<C> {
    /// Selector charging segments with `cost`.
    pub fn new(cost: C) -> Self {
        Self {
            cost,
            stats: SearchStats::default(),
        }
    }

    /// Select at most `budget` checkpoints on `path`.
    ///
    /// Budgets above `path.len()` are clamped; no more placements fit.
    ///
    /// # Errors
    ///
    /// `SelectionError::NegativeBudget` if `budget < 0`.
    pub fn select(&mut self, path: &[Point], budget: i64) -> SelectionResult<Selection> {
        let len = path.len();
        let budget = validate_budget(budget)?.min(len);
        if budget == 0 {
            self.stats.cost_evaluations += 1;
            return Ok(Selection::unsplit(self.cost.cost(path)));
        }

        // intervals[s][k] == cost(path[s..s + k])
        let intervals: Vec<Vec<f64>> = (0..len)
            .map(|start| self.cost.prefix_costs(&path[start..]))
            .collect();
        self.stats.cost_evaluations += intervals.iter().map(|row| row.len() as u64).sum::<u64>();

        let whole = |start: usize| intervals[start][len - start];

        let mut table: Vec<Vec<Cell>> = Vec::with_capacity(budget);
        table.push(
            (0..len)
                .map(|start| Cell {
                    cost: whole(start),
                    next: None,
                })
                .collect(),
        );
        for _ in 1..budget {
            let below = &table[table.len() - 1];
            let row: Vec<Cell> = (0..len)
                .map(|start| {
                    let mut best = Cell {
                        cost: whole(start),
                        next: None,
                    };
                    // Stopping is tried first, so it wins ties
                    for split in start + 1..len {
                        let total = intervals[start][split - start] + below[split].cost;
                        if total < best.cost {
                            best = Cell {
                                cost: total,
                                next: Some(split),
                            };
                        }
                    }
                    best
                })
                .collect();
            table.push(row);
        }
        self.stats.subproblems += (budget * len) as u64;

        // Top level: candidates start at 0 and the prefix is charged alone
        let last = &table[budget - 1];
        let mut split = 0;
        let mut best = intervals[0][0] + last[0].cost;
        for candidate in 1..len {
            let total = intervals[0][candidate] + last[candidate].cost;
            if total < best {
                best = total;
                split = candidate;
            }
        }

        let mut checkpoints = vec![split];
        let mut start = split;
        for row in table.iter().rev() {
            match row[start].next {
                Some(next) => {
                    checkpoints.push(next);
                    start = next;
                }
                None => break,
            }
        }

        let selection = Selection {
            checkpoints,
            cost: best,
        };
        tracing::debug!(
            len,
            budget,
            checkpoints = selection.len(),
            cost = selection.cost,
            cost_evaluations = self.stats.cost_evaluations,
            "tabulated selection finished"
        );
        Ok(selection)
    }

    /// Work counters accumulated over every `select` call.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// The segment cost in use.
    pub fn cost_fn(&self) -> &C {
        &self.cost
    }
}
