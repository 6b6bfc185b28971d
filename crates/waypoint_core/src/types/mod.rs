//! Core geometric and error types.
//!
//! This module provides:
//! - `point`: [`Point`] and the owned [`Path`] container
//! - `error`: Structured error types for caching and selection
//!
//! # Re-exports
//!
//! - [`Point`], [`Path`] from `point`
//! - [`CacheKeyError`], [`SelectionError`], [`SelectionResult`] from `error`

pub mod error;
pub mod point;

pub use error::{CacheKeyError, SelectionError, SelectionResult};
pub use point::{Path, Point};
