//! Uncached exhaustive selector.

use super::{best_split, validate_budget, SearchStats, Selection, Subproblems};
use crate::math::{AnchorCost, SegmentCost};
use crate::types::{Point, SelectionResult};

/// Reference selector: evaluates the recurrence without any caching.
///
/// Every overlapping subproblem is solved again, so running time grows
/// exponentially with path length. Use it as the baseline the faster
/// strategies are checked against.
///
/// # Examples
///
/// ```
/// use waypoint_core::math::AnchorCost;
/// use waypoint_core::selection::ExhaustiveSelector;
/// use waypoint_core::types::Path;
///
/// let path = Path::from_pairs(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]);
/// let mut selector = ExhaustiveSelector::new(AnchorCost::euclidean());
///
/// let selection = selector.select(&path, 0).unwrap();
/// assert!(selection.checkpoints.is_empty());
/// assert_eq!(selection.cost, 2.0);
/// ```
#[derive(Debug, Clone)]
pub struct ExhaustiveSelector<C = AnchorCost> {
    cost: C,
    stats: SearchStats,
}

impl Default for ExhaustiveSelector<AnchorCost> {
    fn default() -> Self {
        Self::new(AnchorCost::euclidean())
    }
}

impl<C: SegmentCost> ExhaustiveSelector<C> {
    /// Selector charging segments with `cost`.
    pub fn new(cost: C) -> Self {
        Self {
            cost,
            stats: SearchStats::default(),
        }
    }

    /// Select at most `budget` checkpoints on `path`.
    ///
    /// Budgets above `path.len()` are clamped.
    ///
    /// # Errors
    ///
    /// `SelectionError::NegativeBudget` if `budget < 0`; nothing is
    /// evaluated in that case.
    pub fn select(&mut self, path: &[Point], budget: i64) -> SelectionResult<Selection> {
        let budget = validate_budget(budget)?.min(path.len());
        let selection = best_split(self, path, budget)?;
        tracing::debug!(
            len = path.len(),
            budget,
            checkpoints = selection.len(),
            cost = selection.cost,
            cost_evaluations = self.stats.cost_evaluations,
            subproblems = self.stats.subproblems,
            "exhaustive selection finished"
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

impl<C: SegmentCost> Subproblems for ExhaustiveSelector<C> {
    type Key = ();

    fn segment_cost(&mut self, segment: &[Point]) -> SelectionResult<f64> {
        self.stats.cost_evaluations += 1;
        Ok(self.cost.cost(segment))
    }

    fn key(&self, _suffix: &[Point], _budget: usize) -> SelectionResult<()> {
        Ok(())
    }

    fn lookup(&mut self, _key: &()) -> Option<Selection> {
        self.stats.subproblems += 1;
        None
    }

    fn store(&mut self, _key: (), _selection: &Selection) {}
}
