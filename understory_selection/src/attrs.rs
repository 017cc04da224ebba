// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribute-set algebra.
//!
//! An [`Attrs`] is the set of attribute keys selected on one item. The
//! attribute-aware selectors combine these sets with three operations:
//!
//! - [`Attrs::merge`]: union, used when selecting.
//! - [`Attrs::subtract`]: difference, used when toggling off.
//! - [`Attrs::is_superset`] / [`Attrs::contains_all`]: subset tests, used to decide
//!   whether a toggle deselects and whether an item is "fully" selected.

use core::fmt;
use core::hash::Hash;

use hashbrown::DefaultHashBuilder;
use indexmap::IndexSet;

/// An insertion-ordered set of selected attribute keys.
///
/// Iteration yields keys in the order they were first inserted. Equality is
/// set equality and ignores that order.
///
/// ```rust
/// use understory_selection::Attrs;
///
/// let mut attrs = Attrs::from(["x", "y"]);
/// attrs.merge(&Attrs::single("z"));
/// assert!(attrs.contains_all(&["x", "z"]));
///
/// attrs.subtract(&Attrs::from(["x", "y"]));
/// assert_eq!(attrs, Attrs::single("z"));
/// ```
#[derive(Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        transparent,
        bound(deserialize = "A: serde::Deserialize<'de> + Eq + Hash")
    )
)]
pub struct Attrs<A> {
    keys: IndexSet<A, DefaultHashBuilder>,
}

impl<A: Hash + Eq> Attrs<A> {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            keys: IndexSet::with_hasher(DefaultHashBuilder::default()),
        }
    }

    /// Create a set holding exactly `key`.
    #[must_use]
    pub fn single(key: A) -> Self {
        let mut attrs = Self::new();
        attrs.keys.insert(key);
        attrs
    }

    /// Number of selected keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if no key is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns `true` if `key` is selected.
    #[must_use]
    pub fn contains(&self, key: &A) -> bool {
        self.keys.contains(key)
    }

    /// Add `key`. Returns `false` if it was already present; its position is kept.
    pub fn insert(&mut self, key: A) -> bool {
        self.keys.insert(key)
    }

    /// Remove `key`, keeping the order of the remaining keys.
    pub fn remove(&mut self, key: &A) -> bool {
        self.keys.shift_remove(key)
    }

    /// Iterate keys in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &A> {
        self.keys.iter()
    }

    /// Returns `true` if every key in `keys` is selected.
    ///
    /// Vacuously `true` for an empty key list.
    pub fn contains_all<'a>(&self, keys: impl IntoIterator<Item = &'a A>) -> bool
    where
        A: 'a,
    {
        keys.into_iter().all(|key| self.keys.contains(key))
    }

    /// Returns `true` if every key of `other` is also in `self`.
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        self.keys.is_superset(&other.keys)
    }

    /// Remove every key of `other` from `self`.
    pub fn subtract(&mut self, other: &Self) {
        self.keys.retain(|key| !other.keys.contains(key));
    }
}

impl<A: Hash + Eq + Clone> Attrs<A> {
    /// Union `other` into `self`. New keys are appended in `other`'s order.
    pub fn merge(&mut self, other: &Self) {
        self.keys.extend(other.keys.iter().cloned());
    }

    /// Build the set holding every key of `keys`.
    pub fn all_of<'a>(keys: impl IntoIterator<Item = &'a A>) -> Self
    where
        A: 'a,
    {
        keys.into_iter().cloned().collect()
    }
}

impl<A: Hash + Eq> Default for Attrs<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: fmt::Debug> fmt::Debug for Attrs<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.keys.iter()).finish()
    }
}

impl<A: Hash + Eq> PartialEq for Attrs<A> {
    fn eq(&self, other: &Self) -> bool {
        self.keys == other.keys
    }
}

impl<A: Hash + Eq> Eq for Attrs<A> {}

impl<A: Hash + Eq> FromIterator<A> for Attrs<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        let mut attrs = Self::new();
        attrs.keys.extend(iter);
        attrs
    }
}

impl<A: Hash + Eq> Extend<A> for Attrs<A> {
    fn extend<I: IntoIterator<Item = A>>(&mut self, iter: I) {
        self.keys.extend(iter);
    }
}

impl<A: Hash + Eq, const N: usize> From<[A; N]> for Attrs<A> {
    fn from(keys: [A; N]) -> Self {
        keys.into_iter().collect()
    }
}

impl<A> IntoIterator for Attrs<A> {
    type Item = A;
    type IntoIter = indexmap::set::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.into_iter()
    }
}

impl<'a, A> IntoIterator for &'a Attrs<A> {
    type Item = &'a A;
    type IntoIter = indexmap::set::Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}
