//! Reconstruction-error cost of path segments.
//!
//! A segment is charged the summed distance from its first point (the
//! anchor) to every later point: the error made by replacing the whole
//! segment with its anchor.

use crate::types::{Point, SelectionError, SelectionResult};
use serde::{Deserialize, Serialize};

/// Point-to-anchor distance used by [`AnchorCost`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DistanceMetric {
    /// Euclidean distance.
    #[default]
    Euclidean,
    /// Squared Euclidean distance (sum of squared errors).
    SquaredEuclidean,
}

impl DistanceMetric {
    /// Distance between `anchor` and `point` under this metric.
    #[inline]
    pub fn between(&self, anchor: &Point, point: &Point) -> f64 {
        match self {
            DistanceMetric::Euclidean => anchor.distance(point),
            DistanceMetric::SquaredEuclidean => anchor.squared_distance(point),
        }
    }

    /// Stable lowercase name, matching the serialised form.
    pub fn name(&self) -> &'static str {
        match self {
            DistanceMetric::Euclidean => "euclidean",
            DistanceMetric::SquaredEuclidean => "squared-euclidean",
        }
    }
}

impl std::fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for DistanceMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "euclidean" => Ok(DistanceMetric::Euclidean),
            "squared-euclidean" | "squared" => Ok(DistanceMetric::SquaredEuclidean),
            other => Err(format!(
                "Unknown metric: {}. Supported: euclidean, squared-euclidean",
                other
            )),
        }
    }
}

/// Cost of a contiguous sub-path.
///
/// Implementations must be pure: the memoised selector caches results by
/// segment content and never re-evaluates a segment it has seen.
pub trait SegmentCost {
    /// Cost of `segment`. Must be total; an empty segment costs nothing.
    fn cost(&self, segment: &[Point]) -> f64;

    /// Costs of every prefix: element `j` is `cost(&segment[..j])` for `j`
    /// in `0..=segment.len()`.
    ///
    /// Overrides must return exactly the values `cost` would.
    fn prefix_costs(&self, segment: &[Point]) -> Vec<f64> {
        (0..=segment.len())
            .map(|end| self.cost(&segment[..end]))
            .collect()
    }
}

/// Summed distance from the segment's first point to every other point.
///
/// # Examples
/// ```
/// use waypoint_core::math::cost::{AnchorCost, SegmentCost};
/// use waypoint_core::types::Path;
///
/// let path = Path::from_pairs(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]);
/// assert_eq!(AnchorCost::euclidean().cost(&path), 2.0);
///
/// let path = Path::from_pairs(&[[0.0, 0.0], [0.0, 2.0], [0.0, -1.0]]);
/// assert_eq!(AnchorCost::euclidean().cost(&path), 3.0);
/// assert_eq!(AnchorCost::squared().cost(&path), 5.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnchorCost {
    metric: DistanceMetric,
}

impl AnchorCost {
    /// Anchor cost under `metric`.
    pub const fn new(metric: DistanceMetric) -> Self {
        Self { metric }
    }

    /// Euclidean anchor cost.
    pub const fn euclidean() -> Self {
        Self::new(DistanceMetric::Euclidean)
    }

    /// Squared Euclidean anchor cost.
    pub const fn squared() -> Self {
        Self::new(DistanceMetric::SquaredEuclidean)
    }

    /// The configured metric.
    #[inline]
    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }
}

impl SegmentCost for AnchorCost {
    fn cost(&self, segment: &[Point]) -> f64 {
        match segment.split_first() {
            None => 0.0,
            Some((anchor, rest)) => rest
                .iter()
                .fold(0.0, |acc, point| acc + self.metric.between(anchor, point)),
        }
    }

    // Running sum in the same order as `cost`, so every prefix is bit-identical.
    fn prefix_costs(&self, segment: &[Point]) -> Vec<f64> {
        let mut costs = Vec::with_capacity(segment.len() + 1);
        costs.push(0.0);
        if let Some((anchor, rest)) = segment.split_first() {
            let mut acc = 0.0;
            costs.push(acc);
            for point in rest {
                acc += self.metric.between(anchor, point);
                costs.push(acc);
            }
        }
        costs
    }
}

/// Adapter turning a closure into a [`SegmentCost`].
///
/// # Examples
/// ```
/// use waypoint_core::math::cost::{FnCost, SegmentCost};
/// use waypoint_core::types::Point;
///
/// let count = FnCost(|segment: &[Point]| segment.len() as f64);
/// assert_eq!(count.cost(&[Point::origin(); 3]), 3.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnCost<F>(pub F);

impl<F> SegmentCost for FnCost<F>
where
    F: Fn(&[Point]) -> f64,
{
    fn cost(&self, segment: &[Point]) -> f64 {
        (self.0)(segment)
    }
}

/// Euclidean anchor cost of `segment`.
///
/// Zero for an empty or single-point segment.
#[inline]
pub fn segment_cost(segment: &[Point]) -> f64 {
    AnchorCost::euclidean().cost(segment)
}

/// Total cost of splitting `path` at `checkpoints`.
///
/// Segments are `[0, c1), [c1, c2), ..., [ck, len)`; a leading checkpoint at
/// `0` contributes an empty first segment. Costs are summed from the last
/// segment backwards, which is the order the selectors accumulate in, so the
/// result matches a selector's reported cost exactly.
///
/// # Errors
///
/// * `SelectionError::CheckpointOutOfRange` - an index is `>= path.len()`
/// * `SelectionError::UnorderedCheckpoints` - indices not strictly increasing
///
/// # Examples
/// ```
/// use waypoint_core::math::cost::{evaluate_checkpoints, AnchorCost};
/// use waypoint_core::types::Path;
///
/// let path = Path::from_pairs(&[[0.0, 0.0], [1.0, 0.0], [5.0, 0.0], [6.0, 0.0]]);
/// let cost = evaluate_checkpoints(&path, &[2], &AnchorCost::euclidean()).unwrap();
/// assert_eq!(cost, 2.0);
/// ```
pub fn evaluate_checkpoints<C>(
    path: &[Point],
    checkpoints: &[usize],
    cost: &C,
) -> SelectionResult<f64>
where
    C: SegmentCost + ?Sized,
{
    for (position, &index) in checkpoints.iter().enumerate() {
        if index >= path.len() {
            return Err(SelectionError::CheckpointOutOfRange {
                index,
                len: path.len(),
            });
        }
        if position > 0 && checkpoints[position - 1] >= index {
            return Err(SelectionError::UnorderedCheckpoints { position });
        }
    }

    let mut end = path.len();
    let mut total = None;
    for &start in checkpoints.iter().rev() {
        let segment = cost.cost(&path[start..end]);
        total = Some(total.map_or(segment, |acc| segment + acc));
        end = start;
    }
    let head = cost.cost(&path[..end]);
    Ok(total.map_or(head, |acc| head + acc))
}
