//! Task collections for [`parallel`](crate::parallel()) and [`series`](crate::series)
//!
//! A task collection is either an ordered list or a keyed map of zero-argument
//! thunks. [`TaskMap`] gives both the same split/rebuild interface, so the
//! resolvers never inspect which one they were handed.

mod resolve;

pub use resolve::{parallel, series};

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// A list or keyed map of thunks that can be taken apart into entries and
/// rebuilt with the resolved values in the same shape.
///
/// # Implementations
/// - `Vec<F>` resolves to `Vec<V>`, keyed by position
/// - `BTreeMap<K, F>` resolves to `BTreeMap<K, V>`
/// - `HashMap<K, F, S>` resolves to `HashMap<K, V, S>`
pub trait TaskMap {
    /// Key identifying a thunk within the collection
    type Key;
    /// The thunk stored under each key
    type Thunk;
    /// Same collection shape holding resolved values instead of thunks
    type Resolved<V>;

    /// Split into `(key, thunk)` entries in iteration order.
    fn into_entries(self) -> Vec<(Self::Key, Self::Thunk)>;

    /// Rebuild the collection shape from resolved entries.
    fn from_resolved<V>(entries: Vec<(Self::Key, V)>) -> Self::Resolved<V>;
}

impl<F> TaskMap for Vec<F> {
    type Key = usize;
    type Thunk = F;
    type Resolved<V> = Vec<V>;

    fn into_entries(self) -> Vec<(usize, F)> {
        self.into_iter().enumerate().collect()
    }

    fn from_resolved<V>(entries: Vec<(usize, V)>) -> Vec<V> {
        entries.into_iter().map(|(_, value)| value).collect()
    }
}

impl<K: Ord, F> TaskMap for BTreeMap<K, F> {
    type Key = K;
    type Thunk = F;
    type Resolved<V> = BTreeMap<K, V>;

    fn into_entries(self) -> Vec<(K, F)> {
        self.into_iter().collect()
    }

    fn from_resolved<V>(entries: Vec<(K, V)>) -> BTreeMap<K, V> {
        entries.into_iter().collect()
    }
}

impl<K, F, S> TaskMap for HashMap<K, F, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    type Key = K;
    type Thunk = F;
    type Resolved<V> = HashMap<K, V, S>;

    fn into_entries(self) -> Vec<(K, F)> {
        self.into_iter().collect()
    }

    fn from_resolved<V>(entries: Vec<(K, V)>) -> HashMap<K, V, S> {
        entries.into_iter().collect()
    }
}
