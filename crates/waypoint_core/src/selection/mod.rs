//! Optimal checkpoint selection.
//!
//! Given a path and a budget `n`, choose at most `n` strictly increasing
//! indices that split the path into segments whose summed cost is minimal.
//! Every segment is charged by a [`SegmentCost`](crate::math::SegmentCost),
//! anchored on its first point.
//!
//! ## Recurrence
//!
//! The top-level call tries every split `i` in `[0, len)`: the prefix
//! `path[..i]` is charged as is, and the suffix `path[i..]` is solved with
//! one budget unit fewer. A suffix is anchored on the checkpoint just placed,
//! so its own candidates are `[1, len)`, tried after the option of placing
//! nothing more and charging the suffix as one segment. The search stops
//! when the budget is spent or no candidate is left. Ties keep the earlier
//! option, so stopping wins over splitting and lower splits win over higher.
//!
//! Every budget's options include those of any smaller budget, so the
//! optimal cost never grows with the budget, whatever the segment cost.
//!
//! The recurrence runs on an explicit work stack rather than the call stack,
//! so search depth is limited only by memory.
//!
//! ## Strategies
//!
//! - [`ExhaustiveSelector`]: plain recursion, exponential in path length
//! - [`MemoizedSelector`]: the same recursion with cost and suffix results
//!   cached by content
//! - [`TabulatedSelector`]: the same recurrence filled bottom-up in a table
//!
//! All three return identical indices and bit-identical costs.
//! [`Selector`] picks one from a [`SelectorConfig`].
//!
//! ## Examples
//!
//! ```
//! use waypoint_core::selection::select_memoized;
//! use waypoint_core::types::Path;
//!
//! let path = Path::from_pairs(&[[0.0, 0.0], [1.0, 0.0], [5.0, 0.0], [6.0, 0.0]]);
//! let selection = select_memoized(&path, 1).unwrap();
//! assert_eq!(selection.checkpoints, vec![2]);
//! assert_eq!(selection.cost, 2.0);
//! ```

pub mod config;
pub mod exhaustive;
pub mod memoized;
pub mod selector;
pub mod tabulated;

pub use config::{SearchStrategy, SelectorConfig};
pub use exhaustive::ExhaustiveSelector;
pub use memoized::MemoizedSelector;
pub use selector::{SearchReport, SearchStats, Selector};
pub use tabulated::TabulatedSelector;

use crate::math::AnchorCost;
use crate::types::{Point, SelectionError, SelectionResult};
use serde::{Deserialize, Serialize};

/// Chosen checkpoints and the total cost they achieve.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Selection {
    /// Strictly increasing indices into the searched path
    pub checkpoints: Vec<usize>,
    /// Summed segment cost
    pub cost: f64,
}

impl Selection {
    /// No checkpoints; the whole path is one segment of `cost`.
    pub fn unsplit(cost: f64) -> Self {
        Self {
            checkpoints: Vec::new(),
            cost,
        }
    }

    /// Prepend `split` and shift this suffix's indices by it.
    pub fn rebased(self, split: usize, total: f64) -> Self {
        let checkpoints = std::iter::once(split)
            .chain(self.checkpoints.into_iter().map(|index| index + split))
            .collect();
        Self {
            checkpoints,
            cost: total,
        }
    }

    /// Number of checkpoints.
    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    /// Whether no checkpoint was placed.
    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }

    /// Split into `(checkpoints, cost)`.
    pub fn into_parts(self) -> (Vec<usize>, f64) {
        (self.checkpoints, self.cost)
    }
}

/// Check a caller-supplied budget.
///
/// # Errors
///
/// `SelectionError::NegativeBudget` if `budget < 0`.
pub fn validate_budget(budget: i64) -> SelectionResult<usize> {
    if budget < 0 {
        return Err(SelectionError::NegativeBudget { budget });
    }
    // Budgets beyond the address space are unreachable anyway.
    Ok(usize::try_from(budget).unwrap_or(usize::MAX))
}

/// Subproblem oracle for [`best_split`].
///
/// Selectors differ only in how they charge segments and whether solved
/// suffixes are remembered.
pub(crate) trait Subproblems {
    /// Identifies an anchored suffix together with its budget.
    type Key;

    /// Cost of one segment.
    fn segment_cost(&mut self, segment: &[Point]) -> SelectionResult<f64>;

    /// Key for the anchored `suffix` searched with `budget`.
    fn key(&self, suffix: &[Point], budget: usize) -> SelectionResult<Self::Key>;

    /// Earlier result for `key`. A miss counts as a new subproblem.
    fn lookup(&mut self, key: &Self::Key) -> Option<Selection>;

    /// Remember the result for `key`.
    fn store(&mut self, key: Self::Key, selection: &Selection);
}

/// A search step suspended while the suffix of its current split is solved.
struct Frame<'p, K> {
    path: &'p [Point],
    budget: usize,
    /// Where the result goes; `None` only for the top-level call
    key: Option<K>,
    /// Split being tried
    split: usize,
    /// Cost of `path[..split]`
    prefix: f64,
    best: Option<Selection>,
}

impl<K> Frame<'_, K> {
    /// Consider the solved suffix of the current split, then move on.
    fn offer(&mut self, suffix: Selection) {
        let total = self.prefix + suffix.cost;
        let improves = match &self.best {
            Some(best) => total < best.cost,
            None => true,
        };
        if improves {
            self.best = Some(suffix.rebased(self.split, total));
        }
        self.split += 1;
    }
}

enum Opened<'p, K> {
    Solved(Selection),
    Pending(Frame<'p, K>),
}

/// Start a search step, answering base cases at once.
fn open<'p, S>(
    search: &mut S,
    path: &'p [Point],
    budget: usize,
    key: Option<S::Key>,
) -> SelectionResult<Opened<'p, S::Key>>
where
    S: Subproblems + ?Sized,
{
    let anchored = key.is_some();
    let first = usize::from(anchored);
    if budget == 0 || first >= path.len() {
        let selection = Selection::unsplit(search.segment_cost(path)?);
        if let Some(key) = key {
            search.store(key, &selection);
        }
        return Ok(Opened::Solved(selection));
    }

    // An anchored suffix may also stop here
    let best = if anchored {
        Some(Selection::unsplit(search.segment_cost(path)?))
    } else {
        None
    };
    Ok(Opened::Pending(Frame {
        path,
        budget,
        key,
        split: first,
        prefix: 0.0,
        best,
    }))
}

/// Solve the recurrence for `path` with `budget` placements.
pub(crate) fn best_split<S>(
    search: &mut S,
    path: &[Point],
    budget: usize,
) -> SelectionResult<Selection>
where
    S: Subproblems + ?Sized,
{
    let mut stack = match open(search, path, budget, None)? {
        Opened::Solved(selection) => return Ok(selection),
        Opened::Pending(frame) => vec![frame],
    };

    let mut outcome = Selection::default();
    while let Some(frame) = stack.last_mut() {
        if frame.split == frame.path.len() {
            // Set by the stop option or by the first split
            let selection = frame.best.take().unwrap_or_default();
            if let Some(key) = frame.key.take() {
                search.store(key, &selection);
            }
            stack.pop();
            match stack.last_mut() {
                Some(parent) => parent.offer(selection),
                None => outcome = selection,
            }
            continue;
        }

        let path = frame.path;
        let split = frame.split;
        let budget = frame.budget - 1;
        frame.prefix = search.segment_cost(&path[..split])?;

        let suffix = &path[split..];
        let key = search.key(suffix, budget)?;
        if let Some(selection) = search.lookup(&key) {
            frame.offer(selection);
            continue;
        }
        match open(search, suffix, budget, Some(key))? {
            Opened::Solved(selection) => frame.offer(selection),
            Opened::Pending(child) => stack.push(child),
        }
    }

    Ok(outcome)
}

/// Exhaustive selection under the Euclidean anchor cost.
///
/// # Errors
///
/// `SelectionError::NegativeBudget` if `budget < 0`.
pub fn select_exhaustive(path: &[Point], budget: i64) -> SelectionResult<Selection> {
    ExhaustiveSelector::new(AnchorCost::euclidean()).select(path, budget)
}

/// Memoised selection under the Euclidean anchor cost, with a fresh cache.
///
/// # Errors
///
/// `SelectionError::NegativeBudget` if `budget < 0`.
pub fn select_memoized(path: &[Point], budget: i64) -> SelectionResult<Selection> {
    MemoizedSelector::new(AnchorCost::euclidean()).select(path, budget)
}

/// Tabulated selection under the Euclidean anchor cost.
///
/// # Errors
///
/// `SelectionError::NegativeBudget` if `budget < 0`.
pub fn select_tabulated(path: &[Point], budget: i64) -> SelectionResult<Selection> {
    TabulatedSelector::new(AnchorCost::euclidean()).select(path, budget)
}
