//! Strategy-dispatching selector.

use super::{
    ExhaustiveSelector, MemoizedSelector, SearchStrategy, Selection, SelectorConfig,
    TabulatedSelector,
};
use crate::math::AnchorCost;
use crate::memo::CacheStats;
use crate::types::{Point, SelectionResult};
use serde::{Deserialize, Serialize};

/// Work done by a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Segment costs actually computed
    pub cost_evaluations: u64,
    /// Subproblems solved (suffix calls or table cells)
    pub subproblems: u64,
    /// Cache statistics, for strategies that cache
    pub cache: Option<CacheStats>,
}

/// Outcome of one [`Selector::run`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Strategy that produced the result
    pub strategy: SearchStrategy,
    /// Chosen checkpoints and their cost
    pub selection: Selection,
    /// Work done
    pub stats: SearchStats,
}

/// Runs one configured search strategy.
///
/// Each [`run`](Selector::run) starts from empty caches, so reports are
/// comparable across strategies.
///
/// # Examples
///
/// ```
/// use waypoint_core::selection::{SearchStrategy, Selector, SelectorConfig};
/// use waypoint_core::types::Path;
///
/// let path = Path::from_pairs(&[[0.0, 0.0], [1.0, 0.0], [5.0, 0.0], [6.0, 0.0]]);
/// let reports: Vec<_> = SearchStrategy::ALL
///     .iter()
///     .map(|&strategy| {
///         let config = SelectorConfig { strategy, ..Default::default() };
///         Selector::new(config).run(&path, 1).unwrap()
///     })
///     .collect();
///
/// assert!(reports.iter().all(|r| r.selection == reports[0].selection));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Selector {
    config: SelectorConfig,
}

impl Selector {
    /// Selector for `config`.
    pub fn new(config: SelectorConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Select at most `budget` checkpoints on `path`.
    ///
    /// # Errors
    ///
    /// Whatever the configured strategy returns; see
    /// [`SelectionError`](crate::types::SelectionError).
    pub fn run(&self, path: &[Point], budget: i64) -> SelectionResult<SearchReport> {
        let cost = AnchorCost::new(self.config.metric);
        let strategy = self.config.strategy;
        tracing::debug!(
            %strategy,
            metric = %self.config.metric,
            len = path.len(),
            budget,
            "running selection"
        );

        let (selection, stats) = match strategy {
            SearchStrategy::Exhaustive => {
                let mut selector = ExhaustiveSelector::new(cost);
                let selection = selector.select(path, budget)?;
                (selection, selector.stats())
            }
            SearchStrategy::Memoized => {
                let mut selector = match self.config.cache_limit {
                    Some(limit) => MemoizedSelector::with_cache_limit(cost, limit),
                    None => MemoizedSelector::new(cost),
                };
                let selection = selector.select(path, budget)?;
                (selection, selector.stats())
            }
            SearchStrategy::Tabulated => {
                let mut selector = TabulatedSelector::new(cost);
                let selection = selector.select(path, budget)?;
                (selection, selector.stats())
            }
        };

        Ok(SearchReport {
            strategy,
            selection,
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::DistanceMetric;
    use crate::types::{Path, SelectionError};

    fn path() -> Path {
        Path::from_pairs(&[
            [0.0, 0.0],
            [0.0, 2.0],
            [0.0, -1.0],
            [3.0, 3.0],
            [3.5, 2.5],
            [-1.0, 0.0],
        ])
    }

    #[test]
    fn test_strategies_agree() {
        let path = path();
        for metric in [DistanceMetric::Euclidean, DistanceMetric::SquaredEuclidean] {
            for budget in 0..4 {
                let reports: Vec<SearchReport> = SearchStrategy::ALL
                    .iter()
                    .map(|&strategy| {
                        Selector::new(SelectorConfig::new(strategy, metric))
                            .run(&path, budget)
                            .unwrap()
                    })
                    .collect();
                for report in &reports[1..] {
                    assert_eq!(report.selection, reports[0].selection);
                }
            }
        }
    }

    #[test]
    fn test_report_fields() {
        let report = Selector::new(SelectorConfig::memoized())
            .run(&path(), 2)
            .unwrap();
        assert_eq!(report.strategy, SearchStrategy::Memoized);
        assert_eq!(report.selection.len(), 2);
        assert!(report.stats.cache.is_some());

        let report = Selector::new(SelectorConfig::exhaustive())
            .run(&path(), 2)
            .unwrap();
        assert!(report.stats.cache.is_none());
        assert!(report.stats.cost_evaluations > 0);
    }

    #[test]
    fn test_metric_changes_cost() {
        let path = path();
        let euclidean = Selector::new(SelectorConfig::tabulated()).run(&path, 0).unwrap();
        let config = SelectorConfig::tabulated().with_metric(DistanceMetric::SquaredEuclidean);
        let squared = Selector::new(config).run(&path, 0).unwrap();
        assert!(squared.selection.cost > euclidean.selection.cost);
    }

    #[test]
    fn test_cache_limit_is_applied() {
        let config = SelectorConfig::memoized().with_cache_limit(1);
        let report = Selector::new(config).run(&path(), 2).unwrap();
        let cache = report.stats.cache.unwrap();
        assert!(cache.rejected > 0);
        let unbounded = Selector::new(SelectorConfig::memoized()).run(&path(), 2).unwrap();
        assert_eq!(report.selection, unbounded.selection);
    }

    #[test]
    fn test_budget_in_the_thousands() {
        let path = crate::rng::lattice_walk(64, &mut crate::rng::WalkRng::from_seed(11));
        let reports: Vec<SearchReport> = [SearchStrategy::Memoized, SearchStrategy::Tabulated]
            .iter()
            .map(|&strategy| {
                Selector::new(SelectorConfig {
                    strategy,
                    ..Default::default()
                })
                .run(&path, 4_000)
                .unwrap()
            })
            .collect();
        assert_eq!(reports[0].selection, reports[1].selection);
        assert!(reports[0].selection.len() <= path.len());
    }

    #[test]
    fn test_negative_budget_for_every_strategy() {
        for strategy in SearchStrategy::ALL {
            let config = SelectorConfig {
                strategy,
                ..Default::default()
            };
            assert_eq!(
                Selector::new(config).run(&path(), -1).unwrap_err(),
                SelectionError::NegativeBudget { budget: -1 }
            );
        }
    }
}
