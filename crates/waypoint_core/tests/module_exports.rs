//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported and
//! accessible via absolute paths.

/// Test that geometric and error types are accessible via absolute path.
#[test]
fn test_types_module_exports() {
    use waypoint_core::types::error::{CacheKeyError, SelectionError};
    use waypoint_core::types::point::{Path, Point};
    use waypoint_core::types::SelectionResult;

    let path: Path = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)].into();
    assert_eq!(path.len(), 2);

    let err: SelectionResult<()> = Err(CacheKeyError::Unhashable {
        position: 0,
        reason: "test".to_string(),
    }
    .into());
    assert!(matches!(err, Err(SelectionError::Cache(_))));
}

/// Test that cost functions are accessible via absolute path.
#[test]
fn test_math_module_exports() {
    use waypoint_core::math::cost::{AnchorCost, DistanceMetric, FnCost, SegmentCost};
    use waypoint_core::math::{evaluate_checkpoints, segment_cost};
    use waypoint_core::types::Point;

    let points = [Point::new(0.0, 0.0), Point::new(0.0, 2.0)];
    assert_eq!(segment_cost(&points), 2.0);
    assert_eq!(AnchorCost::new(DistanceMetric::SquaredEuclidean).cost(&points), 4.0);
    assert_eq!(FnCost(|s: &[Point]| s.len() as f64).cost(&points), 2.0);
    assert_eq!(
        evaluate_checkpoints(&points, &[1], &AnchorCost::euclidean()).unwrap(),
        0.0
    );
}

/// Test that the memoisation layer is accessible via absolute path.
#[test]
fn test_memo_module_exports() {
    use waypoint_core::memo::cache::{CacheStats, MemoCache};
    use waypoint_core::memo::key::{to_cache_key, CacheArg, CacheKey};
    use waypoint_core::memo::memoized::{memoize, Memoized};

    let key = to_cache_key(&[CacheArg::Int(3)]).unwrap();
    assert_eq!(key, CacheKey::from_args(&(3i64,)).unwrap());

    let mut cache: MemoCache<u8> = MemoCache::new();
    cache.insert(key, 1);
    assert_eq!(cache.stats(), &CacheStats::default());

    let mut double: Memoized<_, u64> = memoize(|(x,): (u64,)| x * 2);
    assert_eq!(double.call((21,)).unwrap(), 42);
}

/// Test that selectors are accessible via absolute path.
#[test]
fn test_selection_module_exports() {
    use waypoint_core::selection::config::{SearchStrategy, SelectorConfig};
    use waypoint_core::selection::exhaustive::ExhaustiveSelector;
    use waypoint_core::selection::memoized::MemoizedSelector;
    use waypoint_core::selection::selector::{SearchReport, Selector};
    use waypoint_core::selection::tabulated::TabulatedSelector;
    use waypoint_core::selection::{select_tabulated, validate_budget, Selection};
    use waypoint_core::types::Point;

    let points = [Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(4.0, 1.0)];
    let reference: Selection = ExhaustiveSelector::default().select(&points, 1).unwrap();
    assert_eq!(MemoizedSelector::default().select(&points, 1).unwrap(), reference);
    assert_eq!(TabulatedSelector::default().select(&points, 1).unwrap(), reference);
    assert_eq!(select_tabulated(&points, 1).unwrap(), reference);
    assert_eq!(validate_budget(2).unwrap(), 2);

    let report: SearchReport = Selector::new(SelectorConfig::new(
        SearchStrategy::Tabulated,
        Default::default(),
    ))
    .run(&points, 1)
    .unwrap();
    assert_eq!(report.selection, reference);
}

/// Test that path sources are accessible via absolute path.
#[test]
fn test_rng_module_exports() {
    use waypoint_core::rng::prng::WalkRng;
    use waypoint_core::rng::walk::{lattice_walk, random_walk, WalkKind};

    let mut rng = WalkRng::from_seed(42);
    assert_eq!(random_walk(5, &mut rng).len(), 5);
    assert_eq!(lattice_walk(5, &mut rng).len(), 5);
    assert_eq!(WalkKind::Lattice.generate(3, &mut rng).len(), 3);
}
