// BidiMap - bidimap
// Module: FixedBiMap - Fixed-capacity bi-directional flat map
//
// Copyright (c) 2026 The BidiMap Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Fixed-capacity immutable bi-directional map with inline storage.
//!
//! `FixedBiMap<K, V, N>` owns exactly N key-value pairs in a sorted inline
//! array. The entries are sorted by key once at construction, validated for
//! key uniqueness, and never modified afterwards.
//!
//! # Characteristics
//!
//! - **Zero allocation**: All storage is an inline sorted array
//! - **O(log i) forward lookup**: Exponential probe plus bounded binary
//!   search, where i is the key's rank in sorted order; cheaper than a plain
//!   O(log n) search when lookups skew toward small keys
//! - **O(n) reverse lookup**: Linear scan, ties resolved by construction
//!   order
//! - **Immutable**: No insertion, removal, or update after construction;
//!   concurrent readers need no synchronization

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use bidimap_error::{duplicate_key_error, zero_capacity_error, Error, Result};

/// A key-value pair tagged with its original construction index.
///
/// The `rank` field is what makes the reverse-lookup tie-break well defined:
/// the stored array is reordered by the construction sort, so the original
/// position must be remembered separately.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Entry<K, V> {
    key: K,
    value: V,
    rank: usize,
}

/// A fixed-capacity immutable bi-directional map.
///
/// # Type Parameters
/// - `K`: Key type (must implement `Ord`)
/// - `V`: Value type (must implement `PartialEq`)
/// - `N`: Number of entries, fixed for the container's entire lifetime
///
/// # Invariants
///
/// 1. Exactly N entries, N > 0, for the container's entire lifetime
/// 2. Entries are sorted in strictly ascending key order
/// 3. No two entries share the same key (validated at construction)
/// 4. No mutation API exists after construction
///
/// # Concurrency
///
/// Both lookup operations are read-only and touch no shared mutable state,
/// so a constructed map may be queried from any number of threads without
/// synchronization (`Send`/`Sync` hold whenever `K` and `V` are).
///
/// # Examples
///
/// ```
/// use bidimap::FixedBiMap;
///
/// let map = FixedBiMap::new([(2, 'b'), (1, 'a'), (3, 'c')])?;
///
/// assert_eq!(map.find_by_key(&2), Some(&'b'));
/// assert_eq!(map.find_by_value(&'c'), Some(&3));
/// assert_eq!(map.find_by_key(&7), None);
/// # Ok::<(), bidimap::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedBiMap<K, V, const N: usize>
where
    K: Ord,
    V: PartialEq,
{
    /// Entries sorted by strictly ascending key
    entries: [Entry<K, V>; N],
}

impl<K: Ord, V: PartialEq, const N: usize> FixedBiMap<K, V, N> {
    /// Creates a map from exactly N key-value pairs, supplied in any order.
    ///
    /// The entries are copied into internal storage and sorted by ascending
    /// key. Each entry remembers its position in the input so that reverse
    /// lookups can resolve duplicate values by construction order.
    ///
    /// # Time Complexity
    ///
    /// O(n log n) for the construction sort plus O(n) for duplicate
    /// validation. Construction happens once; both lookups stay cheap.
    ///
    /// # Errors
    ///
    /// - [`bidimap_error::codes::DUPLICATE_KEY`] if two entries share a key.
    ///   A duplicate key is a caller bug: binary-search correctness depends
    ///   on key uniqueness, so the map must never be silently usable.
    /// - [`bidimap_error::codes::ZERO_CAPACITY`] if N is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use bidimap::FixedBiMap;
    ///
    /// let map = FixedBiMap::new([(5, 'x'), (1, 'y')])?;
    /// assert_eq!(map.len(), 2);
    ///
    /// assert!(FixedBiMap::new([(1, 'a'), (1, 'b')]).is_err());
    /// # Ok::<(), bidimap::Error>(())
    /// ```
    pub fn new(entries: [(K, V); N]) -> Result<Self> {
        if N == 0 {
            return Err(zero_capacity_error("FixedBiMap requires at least one entry"));
        }

        let mut next_rank = 0;
        let mut entries = entries.map(|(key, value)| {
            let entry = Entry {
                key,
                value,
                rank: next_rank,
            };
            next_rank += 1;
            entry
        });

        entries.sort_unstable_by(|left, right| left.key.cmp(&right.key));

        if entries
            .windows(2)
            .any(|pair| pair[0].key == pair[1].key)
        {
            return Err(duplicate_key_error(
                "FixedBiMap constructed with a duplicate key",
            ));
        }

        Ok(Self { entries })
    }

    /// Returns a reference to the value paired with the given key.
    ///
    /// # Time Complexity
    ///
    /// O(log i) where i is the key's zero-based rank in sorted order: the
    /// first (smallest) entry is checked directly, then an exponential probe
    /// bounds a window `[probe/2, probe + 1)` that must contain the key if
    /// present, and a binary search finishes within that window.
    ///
    /// # Examples
    ///
    /// ```
    /// use bidimap::FixedBiMap;
    ///
    /// let map = FixedBiMap::new([(1, 'a'), (2, 'b')])?;
    /// assert_eq!(map.find_by_key(&1), Some(&'a'));
    /// assert_eq!(map.find_by_key(&9), None);
    /// # Ok::<(), bidimap::Error>(())
    /// ```
    #[inline]
    #[must_use]
    pub fn find_by_key(&self, key: &K) -> Option<&V> {
        self.position_of(key).map(|index| &self.entries[index].value)
    }

    /// Returns the value paired with the given key, or `V::default()` when
    /// the key is absent.
    ///
    /// This is the legacy sentinel-returning query: there is no "not found"
    /// flag, so callers must know whether `V::default()` is a legitimate
    /// member of their value domain. Prefer [`Self::find_by_key`] for new
    /// call sites, or pre-check with [`Self::contains_key`].
    #[inline]
    #[must_use]
    pub fn get_by_key(&self, key: &K) -> V
    where
        V: Default + Clone,
    {
        self.find_by_key(key).cloned().unwrap_or_default()
    }

    /// Returns a reference to the key of the first entry, in construction
    /// order, whose value equals the given value.
    ///
    /// When several entries share an equal value, the entry that appeared
    /// earliest in the input to [`Self::new`] wins. The tie-break is by
    /// construction order, not by smallest key and not by sorted position.
    ///
    /// # Time Complexity
    ///
    /// O(n), unconditionally.
    ///
    /// # Examples
    ///
    /// ```
    /// use bidimap::FixedBiMap;
    ///
    /// let map = FixedBiMap::new([(3, 'a'), (1, 'b'), (2, 'a')])?;
    ///
    /// // Key 3 came first in construction order, although key 2 sorts first.
    /// assert_eq!(map.find_by_value(&'a'), Some(&3));
    /// # Ok::<(), bidimap::Error>(())
    /// ```
    #[must_use]
    pub fn find_by_value(&self, value: &V) -> Option<&K> {
        self.entries
            .iter()
            .filter(|entry| entry.value == *value)
            .min_by_key(|entry| entry.rank)
            .map(|entry| &entry.key)
    }

    /// Returns the key of the first entry, in construction order, whose
    /// value equals the given value, or `K::default()` when no entry
    /// matches.
    ///
    /// Legacy sentinel-returning query; the same default-value caveat as
    /// [`Self::get_by_key`] applies. Prefer [`Self::find_by_value`] for new
    /// call sites.
    #[inline]
    #[must_use]
    pub fn get_by_value(&self, value: &V) -> K
    where
        K: Default + Clone,
    {
        self.find_by_value(value).cloned().unwrap_or_default()
    }

    /// Returns `true` if the map contains the given key.
    ///
    /// # Time Complexity
    ///
    /// O(log i), same search as [`Self::find_by_key`].
    #[inline]
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.position_of(key).is_some()
    }

    /// Returns `true` if any entry's value equals the given value.
    ///
    /// # Time Complexity
    ///
    /// O(n).
    #[inline]
    #[must_use]
    pub fn contains_value(&self, value: &V) -> bool {
        self.entries.iter().any(|entry| entry.value == *value)
    }

    /// Returns the number of entries, always N.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns the compile-time capacity, always N.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns `true` if the map holds no entries.
    ///
    /// Always `false` for a constructed map: [`Self::new`] rejects N == 0.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns an iterator over the entries in sorted key order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Returns an iterator over the keys in sorted order.
    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over the values in sorted key order.
    #[inline]
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }

    /// Locates the sorted index holding `key`, if present.
    ///
    /// Fast-paths the first (smallest-key) entry, then doubles a probe index
    /// while the probed key is still less than `key`. The resulting window
    /// `[probe/2, min(probe + 1, N))` must contain `key` if it is present,
    /// and a binary search within it decides.
    fn position_of(&self, key: &K) -> Option<usize> {
        if N == 0 {
            return None;
        }
        if self.entries[0].key == *key {
            return Some(0);
        }

        let mut probe = 1;
        while probe < N && self.entries[probe].key < *key {
            probe *= 2;
        }

        let mut left = probe / 2;
        let mut right = (probe + 1).min(N);
        while left < right {
            let mid = left + (right - left) / 2;
            match self.entries[mid].key.cmp(key) {
                Ordering::Equal => return Some(mid),
                Ordering::Less => left = mid + 1,
                Ordering::Greater => right = mid,
            }
        }

        None
    }
}

impl<K: Ord, V: PartialEq, const N: usize> TryFrom<[(K, V); N]> for FixedBiMap<K, V, N> {
    type Error = Error;

    fn try_from(entries: [(K, V); N]) -> Result<Self> {
        Self::new(entries)
    }
}

// Hash covers length, sorted entries, and construction ranks, consistent
// with the derived equality.
impl<K: Ord + Hash, V: PartialEq + Hash, const N: usize> Hash for FixedBiMap<K, V, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for entry in &self.entries {
            entry.hash(state);
        }
    }
}

/// Iterator over a map's entries in sorted key order.
pub struct Iter<'a, K, V> {
    inner: core::slice::Iter<'a, Entry<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| (&entry.key, &entry.value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<'a, K: Ord, V: PartialEq, const N: usize> IntoIterator for &'a FixedBiMap<K, V, N> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// KANI Formal Verification
// ============================================================================

#[cfg(kani)]
mod verification {
    use super::*;

    #[kani::proof]
    fn verify_sorted_after_construction() {
        let map = FixedBiMap::new([(3u32, 30u32), (1, 10), (4, 40), (2, 20)]).unwrap();

        let mut keys = map.keys();
        assert!(keys.next() == Some(&1));
        assert!(keys.next() == Some(&2));
        assert!(keys.next() == Some(&3));
        assert!(keys.next() == Some(&4));
    }

    #[kani::proof]
    fn verify_duplicate_key_rejected() {
        let result = FixedBiMap::new([(1u32, 10u32), (2, 20), (1, 30)]);
        assert!(result.is_err());
    }

    #[kani::proof]
    fn verify_lookup_hit_and_miss() {
        let map = FixedBiMap::new([(2u32, 20u32), (1, 10)]).unwrap();

        assert!(map.find_by_key(&1) == Some(&10));
        assert!(map.find_by_key(&2) == Some(&20));
        assert!(map.find_by_key(&3).is_none());
    }

    #[kani::proof]
    fn verify_value_tie_break() {
        let map = FixedBiMap::new([(3u32, 7u32), (1, 9), (2, 7)]).unwrap();

        // Key 3 carries the earliest construction rank among value 7.
        assert!(map.find_by_value(&7) == Some(&3));
    }
}

// ============================================================================
// Tests
// ============================================================================
