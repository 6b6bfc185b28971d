//! Function memoisation wrapper.

use super::cache::{CacheStats, MemoCache};
use super::key::{CacheArgs, CacheKey};
use crate::types::CacheKeyError;

/// A pure function paired with its own result cache.
///
/// `call(args)` returns what `func(args)` would, invoking `func` only for
/// argument lists whose normalised key has not been seen by this instance.
/// Each wrapper owns an independent cache; wrapping the same function twice
/// gives two empty caches.
///
/// Arguments are passed as a tuple so that every position can be keyed.
///
/// # Examples
///
/// ```
/// use waypoint_core::memo::Memoized;
/// use waypoint_core::math::segment_cost;
/// use waypoint_core::types::Path;
///
/// let mut cost = Memoized::new(|(path,): (Path,)| segment_cost(&path));
///
/// let a = Path::from_pairs(&[[0.0, 0.0], [3.0, 4.0]]);
/// let b = a.clone();
/// assert_eq!(cost.call((a,)).unwrap(), 5.0);
/// assert_eq!(cost.call((b,)).unwrap(), 5.0);
/// assert_eq!(cost.stats().hits, 1);
/// ```
#[derive(Debug, Clone)]
pub struct Memoized<F, V> {
    func: F,
    cache: MemoCache<V>,
}

impl<F, V> Memoized<F, V>
where
    V: Clone,
{
    /// Wrap `func` with an empty, unbounded cache.
    pub fn new(func: F) -> Self {
        Self {
            func,
            cache: MemoCache::new(),
        }
    }

    /// Wrap `func` with a cache holding at most `limit` entries.
    pub fn with_limit(func: F, limit: usize) -> Self {
        Self {
            func,
            cache: MemoCache::with_limit(limit),
        }
    }

    /// Call the wrapped function through the cache.
    ///
    /// # Errors
    ///
    /// `CacheKeyError::Unhashable` if an argument cannot be keyed; the
    /// wrapped function is not invoked in that case.
    pub fn call<A>(&mut self, args: A) -> Result<V, CacheKeyError>
    where
        A: CacheArgs,
        F: FnMut(A) -> V,
    {
        let key = CacheKey::from_args(&args)?;
        let func = &mut self.func;
        Ok(self.cache.get_or_insert_with(key, || func(args)))
    }

    /// Lookup statistics.
    pub fn stats(&self) -> &CacheStats {
        self.cache.stats()
    }

    /// Number of cached results.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Whether no result has been cached.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Drop the cache and return the wrapped function.
    pub fn into_inner(self) -> F {
        self.func
    }
}

/// Wrap `func` in a fresh [`Memoized`].
pub fn memoize<F, V: Clone>(func: F) -> Memoized<F, V> {
    Memoized::new(func)
}
