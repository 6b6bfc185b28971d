//! Selector configuration types.

use crate::math::DistanceMetric;
use serde::{Deserialize, Serialize};

/// Search strategy used by [`Selector`](super::Selector).
///
/// All strategies return the same selection; they differ only in cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchStrategy {
    /// Plain recursion, no caching. Exponential in path length.
    Exhaustive,
    /// Recursion with content-keyed caches.
    #[default]
    Memoized,
    /// Bottom-up table, no recursion.
    Tabulated,
}

impl SearchStrategy {
    /// Every strategy, in a fixed order.
    pub const ALL: [SearchStrategy; 3] = [
        SearchStrategy::Exhaustive,
        SearchStrategy::Memoized,
        SearchStrategy::Tabulated,
    ];

    /// Stable lowercase name, matching the serialised form.
    pub fn name(&self) -> &'static str {
        match self {
            SearchStrategy::Exhaustive => "exhaustive",
            SearchStrategy::Memoized => "memoized",
            SearchStrategy::Tabulated => "tabulated",
        }
    }
}

impl std::fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for SearchStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "exhaustive" | "naive" => Ok(SearchStrategy::Exhaustive),
            "memoized" | "memoised" | "cached" => Ok(SearchStrategy::Memoized),
            "tabulated" | "table" => Ok(SearchStrategy::Tabulated),
            other => Err(format!(
                "Unknown strategy: {}. Supported: exhaustive, memoized, tabulated",
                other
            )),
        }
    }
}

/// Configuration for a [`Selector`](super::Selector).
///
/// # Example
///
/// ```
/// use waypoint_core::math::DistanceMetric;
/// use waypoint_core::selection::{SearchStrategy, SelectorConfig};
///
/// let config = SelectorConfig::default();
/// assert_eq!(config.strategy, SearchStrategy::Memoized);
/// assert_eq!(config.metric, DistanceMetric::Euclidean);
/// assert!(config.cache_limit.is_none());
///
/// let bounded = SelectorConfig::memoized().with_cache_limit(10_000);
/// assert_eq!(bounded.cache_limit, Some(10_000));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// How the search is carried out.
    pub strategy: SearchStrategy,

    /// Point-to-anchor distance charged inside each segment.
    pub metric: DistanceMetric,

    /// Maximum entries per cache for the memoised strategy.
    ///
    /// `None` means unbounded. Ignored by the other strategies.
    pub cache_limit: Option<usize>,
}

impl SelectorConfig {
    /// Create a configuration with specified values.
    pub fn new(strategy: SearchStrategy, metric: DistanceMetric) -> Self {
        Self {
            strategy,
            metric,
            cache_limit: None,
        }
    }

    /// Uncached reference search.
    pub fn exhaustive() -> Self {
        Self::new(SearchStrategy::Exhaustive, DistanceMetric::Euclidean)
    }

    /// Memoised search with unbounded caches.
    pub fn memoized() -> Self {
        Self::new(SearchStrategy::Memoized, DistanceMetric::Euclidean)
    }

    /// Bottom-up search, suited to long paths.
    pub fn tabulated() -> Self {
        Self::new(SearchStrategy::Tabulated, DistanceMetric::Euclidean)
    }

    /// Same configuration with `metric`.
    pub fn with_metric(self, metric: DistanceMetric) -> Self {
        Self { metric, ..self }
    }

    /// Same configuration with a cache entry limit.
    pub fn with_cache_limit(self, limit: usize) -> Self {
        Self {
            cache_limit: Some(limit),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_parsing() {
        assert_eq!("exhaustive".parse(), Ok(SearchStrategy::Exhaustive));
        assert_eq!("Memoised".parse(), Ok(SearchStrategy::Memoized));
        assert_eq!("table".parse(), Ok(SearchStrategy::Tabulated));
        assert!("greedy".parse::<SearchStrategy>().is_err());
    }

    #[test]
    fn test_strategy_name_round_trips() {
        for strategy in SearchStrategy::ALL {
            assert_eq!(strategy.name().parse(), Ok(strategy));
            assert_eq!(strategy.to_string(), strategy.name());
        }
    }

    #[test]
    fn test_presets() {
        assert_eq!(SelectorConfig::exhaustive().strategy, SearchStrategy::Exhaustive);
        assert_eq!(SelectorConfig::tabulated().strategy, SearchStrategy::Tabulated);
        let config = SelectorConfig::tabulated().with_metric(DistanceMetric::SquaredEuclidean);
        assert_eq!(config.metric, DistanceMetric::SquaredEuclidean);
        assert_eq!(config.strategy, SearchStrategy::Tabulated);
    }

    #[test]
    fn test_deserialise_partial() {
        let config: SelectorConfig =
            serde_json::from_str(r#"{"strategy":"tabulated","metric":"squared-euclidean"}"#)
                .unwrap();
        assert_eq!(config.strategy, SearchStrategy::Tabulated);
        assert_eq!(config.metric, DistanceMetric::SquaredEuclidean);
        assert_eq!(config.cache_limit, None);

        let config: SelectorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SelectorConfig::default());
    }
}
