//! Memoisation of pure functions.
//!
//! This module turns a pure function of positional arguments into a cached
//! one. It has three layers:
//!
//! - [`key`]: argument normalisation. Each argument is tagged with one
//!   [`CacheArg`] shape and [`to_cache_key`] turns the list into a
//!   [`CacheKey`]. Point buffers are keyed by raw bytes, so equal content
//!   gives equal keys whatever slice it came from.
//! - [`cache`]: [`MemoCache`], a key-to-value store with hit/miss
//!   statistics and an optional entry limit.
//! - [`memoized`]: [`Memoized`], a function bundled with its own cache.
//!
//! Caches are plain values owned by whoever constructs them; there is no
//! process-wide state. Mutation goes through `&mut self`, so sharing one
//! across threads means putting its owner behind a `Mutex`.
//!
//! # Example
//!
//! ```rust
//! use std::cell::Cell;
//! use waypoint_core::memo::memoize;
//! use waypoint_core::math::segment_cost;
//! use waypoint_core::types::Point;
//!
//! let calls = Cell::new(0);
//! let mut cost = memoize(|(points,): (Vec<Point>,)| {
//!     calls.set(calls.get() + 1);
//!     segment_cost(&points)
//! });
//!
//! let walk = vec![Point::new(0.0, 0.0), Point::new(0.0, 2.0)];
//! cost.call((walk.clone(),)).unwrap();
//! cost.call((walk,)).unwrap();
//! assert_eq!(calls.get(), 1);
//! ```

pub mod cache;
pub mod key;
pub mod memoized;

pub use cache::{CacheStats, MemoCache};
pub use key::{to_cache_key, AsCacheArg, CacheArg, CacheArgs, CacheKey, KeyPart};
pub use memoized::{memoize, Memoized};
