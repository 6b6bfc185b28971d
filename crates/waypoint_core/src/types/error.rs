//! Error types for structured error handling.
//!
//! This module provides:
//! - `CacheKeyError`: An argument to a memoised function has no cache key
//! - `SelectionError`: Errors from checkpoint selection and evaluation

use thiserror::Error;

/// Failure to normalise a memoised function's argument into a cache key.
///
/// # Examples
/// ```
/// use waypoint_core::types::CacheKeyError;
///
/// let err = CacheKeyError::Unhashable {
///     position: 1,
///     reason: "NaN has no stable identity".to_string(),
/// };
/// assert_eq!(
///     format!("{}", err),
///     "Unhashable argument at position 1: NaN has no stable identity"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheKeyError {
    /// The argument at `position` cannot be turned into a key.
    #[error("Unhashable argument at position {position}: {reason}")]
    Unhashable {
        /// Zero-based position of the offending argument
        position: usize,
        /// Why it was rejected
        reason: String,
    },
}

/// Errors from checkpoint selection.
///
/// # Variants
/// - `NegativeBudget`: The budget passed to a selector was below zero
/// - `Cache`: A memoised call could not build its key
/// - `CheckpointOutOfRange`: A checkpoint index lies outside the path
/// - `UnorderedCheckpoints`: Checkpoints are not strictly increasing
///
/// # Examples
/// ```
/// use waypoint_core::types::SelectionError;
///
/// let err = SelectionError::NegativeBudget { budget: -2 };
/// assert_eq!(format!("{}", err), "Invalid budget -2: must be non-negative");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// Budget below zero.
    #[error("Invalid budget {budget}: must be non-negative")]
    NegativeBudget {
        /// The rejected budget
        budget: i64,
    },

    /// Cache key construction failed.
    #[error(transparent)]
    Cache(#[from] CacheKeyError),

    /// Checkpoint index not inside `[0, len)`.
    #[error("Checkpoint {index} out of range for path of length {len}")]
    CheckpointOutOfRange {
        /// The offending index
        index: usize,
        /// Path length
        len: usize,
    },

    /// Checkpoints must be strictly increasing.
    #[error("Checkpoints not strictly increasing at position {position}")]
    UnorderedCheckpoints {
        /// Position in the checkpoint list where order breaks
        position: usize,
    },
}

/// Result alias for selection operations.
pub type SelectionResult<T> = Result<T, SelectionError>;
