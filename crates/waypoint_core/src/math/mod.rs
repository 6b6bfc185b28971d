//! Numerical building blocks for checkpoint selection.
//!
//! ## Available Components
//!
//! - [`cost`]: Segment cost functions ([`AnchorCost`], [`FnCost`]), the
//!   [`SegmentCost`] trait, and [`evaluate_checkpoints`] for re-scoring a
//!   checkpoint set.
//!
//! ## Examples
//!
//! ```
//! use waypoint_core::math::{segment_cost, evaluate_checkpoints, AnchorCost};
//! use waypoint_core::types::Path;
//!
//! let path = Path::from_pairs(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]);
//! assert_eq!(segment_cost(&path), 2.0);
//!
//! let split = evaluate_checkpoints(&path, &[1], &AnchorCost::euclidean()).unwrap();
//! assert!(split < segment_cost(&path));
//! ```

pub mod cost;

pub use cost::{
    evaluate_checkpoints, segment_cost, AnchorCost, DistanceMetric, FnCost, SegmentCost,
};
