//! # waypoint_core: Optimal Checkpoint Selection over 2D Paths
//!
//! Chooses at most `n` indices on a path of points so that, when every
//! segment between consecutive checkpoints is replaced by its first point,
//! the summed reconstruction error is minimal.
//!
//! ## Layout
//!
//! - `types`: [`Point`](types::Point), [`Path`](types::Path) and error types
//! - `math`: segment cost functions and checkpoint re-scoring
//! - `memo`: content-keyed memoisation of pure functions
//! - `selection`: exhaustive, memoised and tabulated selectors
//! - `rng`: seeded random walk generators
//!
//! ## Usage Examples
//!
//! ```rust
//! use waypoint_core::math::{evaluate_checkpoints, AnchorCost};
//! use waypoint_core::rng::{random_walk, WalkRng};
//! use waypoint_core::selection::{Selector, SelectorConfig};
//!
//! let path = random_walk(30, &mut WalkRng::from_seed(7));
//! let report = Selector::new(SelectorConfig::memoized()).run(&path, 3).unwrap();
//!
//! assert!(report.selection.len() <= 3);
//! let rescored =
//!     evaluate_checkpoints(&path, &report.selection.checkpoints, &AnchorCost::euclidean())
//!         .unwrap();
//! assert_eq!(rescored, report.selection.cost);
//! ```
//!
//! ## Concurrency
//!
//! Everything here is single-threaded. Selectors and memoised functions own
//! their caches and mutate them through `&mut self`; share one across threads
//! by wrapping it in a `Mutex`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod memo;
pub mod rng;
pub mod selection;
pub mod types;
