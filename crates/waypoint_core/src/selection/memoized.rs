//! Memoised selector.

use super::{best_split, validate_budget, SearchStats, Selection, Subproblems};
use crate::math::{AnchorCost, SegmentCost};
use crate::memo::{CacheKey, CacheStats, MemoCache};
use crate::types::{Point, SelectionResult};

/// Tag separating whole-search entries from anchored suffix entries.
const SEARCH_TAG: &str = "search";

/// Exhaustive selector with every subproblem cached by content.
///
/// Whole searches are cached on `(path, budget)` under their own tag, suffix
/// results on `(sub-path, budget)` and segment costs on `(sub-path,)`. Keys
/// are built from the points themselves, so equal sub-paths at different
/// offsets share one entry. Total work is bounded by the number of distinct
/// `(sub-path, budget)` pairs.
///
/// The caches live as long as the selector, so repeated searches over the
/// same or overlapping paths reuse earlier results. They are [`MemoCache`]s
/// owned by the selector rather than [`Memoized`](crate::memo::Memoized)
/// wrappers, because the search needs the selector itself while a wrapper
/// owns its function.
///
/// # Cost
///
/// Each key holds a full copy of its sub-path's bytes, so building or
/// looking up a key is `O(len)` and the suffix cache can grow to
/// `O(len² · budget)` bytes. For long paths prefer
/// [`TabulatedSelector`](super::TabulatedSelector), which returns identical
/// results without per-lookup copies, or bound the caches with
/// [`with_cache_limit`](Self::with_cache_limit).
///
/// # Examples
///
/// ```
/// use waypoint_core::math::AnchorCost;
/// use waypoint_core::selection::MemoizedSelector;
/// use waypoint_core::types::Path;
///
/// let path = Path::from_pairs(&[[0.0, 0.0], [1.0, 0.0], [5.0, 0.0], [6.0, 0.0]]);
/// let mut selector = MemoizedSelector::new(AnchorCost::euclidean());
///
/// let selection = selector.select(&path, 1).unwrap();
/// assert_eq!(selection.checkpoints, vec![2]);
///
/// // The repeated search is answered from the cache
/// assert_eq!(selector.select(&path, 1).unwrap(), selection);
/// assert_eq!(selector.cache_stats().hits, 1);
/// ```
#[derive(Debug, Clone)]
pub struct MemoizedSelector<C = AnchorCost> {
    cost: C,
    costs: MemoCache<f64>,
    selections: MemoCache<Selection>,
    stats: SearchStats,
}

impl Default for MemoizedSelector<AnchorCost> {
    fn default() -> Self {
        Self::new(AnchorCost::euclidean())
    }
}

impl<C: SegmentCost> MemoizedSelector<C> {
    /// Selector with unbounded caches.
    pub fn new(cost: C) -> Self {
        Self {
            cost,
            costs: MemoCache::new(),
            selections: MemoCache::new(),
            stats: SearchStats::default(),
        }
    }

    /// Selector whose caches each hold at most `limit` entries.
    ///
    /// Once full, results are still computed and returned but no longer
    /// stored, so the answer is unchanged and only the speed-up is lost.
    pub fn with_cache_limit(cost: C, limit: usize) -> Self {
        Self {
            cost,
            costs: MemoCache::with_limit(limit),
            selections: MemoCache::with_limit(limit),
            stats: SearchStats::default(),
        }
    }

    /// Select at most `budget` checkpoints on `path`.
    ///
    /// Budgets above `path.len()` are clamped.
    ///
    /// # Errors
    ///
    /// * `SelectionError::NegativeBudget` - `budget < 0`
    /// * `SelectionError::Cache` - a sub-path could not be keyed
    pub fn select(&mut self, path: &[Point], budget: i64) -> SelectionResult<Selection> {
        let budget = validate_budget(budget)?.min(path.len());
        let key = CacheKey::from_args(&(SEARCH_TAG, path, budget))?;
        if let Some(selection) = self.selections.get(&key) {
            return Ok(selection.clone());
        }
        let selection = best_split(self, path, budget)?;
        self.selections.insert(key, selection.clone());
        let cache = self.cache_stats();
        tracing::debug!(
            len = path.len(),
            budget,
            checkpoints = selection.len(),
            cost = selection.cost,
            cost_evaluations = self.stats.cost_evaluations,
            subproblems = self.stats.subproblems,
            cache_entries = self.cache_len(),
            hit_rate = cache.hit_rate(),
            "memoised selection finished"
        );
        Ok(selection)
    }

    /// Work counters, including combined cache statistics.
    pub fn stats(&self) -> SearchStats {
        SearchStats {
            cache: Some(self.cache_stats()),
            ..self.stats
        }
    }

    /// Cost and suffix cache statistics combined.
    pub fn cache_stats(&self) -> CacheStats {
        self.costs.stats().combined(self.selections.stats())
    }

    /// Entries held across both caches.
    pub fn cache_len(&self) -> usize {
        self.costs.len() + self.selections.len()
    }

    /// The segment cost in use.
    pub fn cost_fn(&self) -> &C {
        &self.cost
    }
}

impl<C: SegmentCost> Subproblems for MemoizedSelector<C> {
    type Key = CacheKey;

    fn segment_cost(&mut self, segment: &[Point]) -> SelectionResult<f64> {
        let key = CacheKey::from_args(&(segment,))?;
        if let Some(&cost) = self.costs.get(&key) {
            return Ok(cost);
        }
        self.stats.cost_evaluations += 1;
        let cost = self.cost.cost(segment);
        self.costs.insert(key, cost);
        Ok(cost)
    }

    fn key(&self, suffix: &[Point], budget: usize) -> SelectionResult<CacheKey> {
        Ok(CacheKey::from_args(&(suffix, budget))?)
    }

    fn lookup(&mut self, key: &CacheKey) -> Option<Selection> {
        let cached = self.selections.get(key).cloned();
        if cached.is_none() {
            self.stats.subproblems += 1;
        }
        cached
    }

    fn store(&mut self, key: CacheKey, selection: &Selection) {
        self.selections.insert(key, selection.clone());
    }
}
