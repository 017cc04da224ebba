// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item sources: the host-owned collections selectors resolve ids against.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::hash::{BuildHasher, Hash};

use indexmap::IndexMap;

/// A keyed collection of items, owned by the host.
///
/// Selectors query their source on every call that needs items (select-all,
/// is-all-selected, item resolution) and never cache what it returns, so the
/// host may change the collection freely between calls.
///
/// The enumeration order of [`ItemSource::items`] is the order `select_all`
/// selects in.
pub trait ItemSource<K> {
    /// Item type stored under each id.
    type Item;

    /// Iterate `(id, item)` pairs in enumeration order.
    fn items<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a Self::Item)>
    where
        K: 'a,
        Self::Item: 'a;

    /// Look up the item for `id`.
    fn get(&self, id: &K) -> Option<&Self::Item>;

    /// Iterate ids in enumeration order.
    fn ids<'a>(&'a self) -> impl Iterator<Item = &'a K>
    where
        K: 'a,
        Self::Item: 'a,
    {
        self.items().map(|(id, _)| id)
    }

    /// Returns `true` if the collection has no items.
    fn is_empty(&self) -> bool {
        self.ids().next().is_none()
    }
}

impl<K: Hash + Eq, T, S: BuildHasher> ItemSource<K> for IndexMap<K, T, S> {
    type Item = T;

    fn items<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a T)>
    where
        K: 'a,
        Self::Item: 'a,
    {
        self.iter()
    }

    fn get(&self, id: &K) -> Option<&T> {
        Self::get(self, id)
    }

    fn ids<'a>(&'a self) -> impl Iterator<Item = &'a K>
    where
        K: 'a,
        Self::Item: 'a,
    {
        self.keys()
    }

    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }
}

impl<K: Hash + Eq, T, S: BuildHasher> ItemSource<K> for hashbrown::HashMap<K, T, S> {
    type Item = T;

    fn items<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a T)>
    where
        K: 'a,
        Self::Item: 'a,
    {
        self.iter()
    }

    fn get(&self, id: &K) -> Option<&T> {
        Self::get(self, id)
    }

    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }
}

#[cfg(feature = "std")]
impl<K: Hash + Eq, T, S: BuildHasher> ItemSource<K> for std::collections::HashMap<K, T, S> {
    type Item = T;

    fn items<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a T)>
    where
        K: 'a,
        Self::Item: 'a,
    {
        self.iter()
    }

    fn get(&self, id: &K) -> Option<&T> {
        Self::get(self, id)
    }

    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }
}

impl<K: Ord, T> ItemSource<K> for BTreeMap<K, T> {
    type Item = T;

    fn items<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a T)>
    where
        K: 'a,
        Self::Item: 'a,
    {
        self.iter()
    }

    fn get(&self, id: &K) -> Option<&T> {
        Self::get(self, id)
    }

    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }
}

/// Pairs in sequence order. Lookups are linear scans; the first pair for an id wins.
impl<K: PartialEq, T> ItemSource<K> for [(K, T)] {
    type Item = T;

    fn items<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a T)>
    where
        K: 'a,
        Self::Item: 'a,
    {
        self.iter().map(|(id, item)| (id, item))
    }

    fn get(&self, id: &K) -> Option<&T> {
        self.iter()
            .find(|(candidate, _)| candidate == id)
            .map(|(_, item)| item)
    }

    fn is_empty(&self) -> bool {
        <[(K, T)]>::is_empty(self)
    }
}

impl<K: PartialEq, T> ItemSource<K> for Vec<(K, T)> {
    type Item = T;

    fn items<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a T)>
    where
        K: 'a,
        Self::Item: 'a,
    {
        self.as_slice().items()
    }

    fn get(&self, id: &K) -> Option<&T> {
        ItemSource::get(self.as_slice(), id)
    }

    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }
}

impl<K, M: ItemSource<K> + ?Sized> ItemSource<K> for &M {
    type Item = M::Item;

    fn items<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a M::Item)>
    where
        K: 'a,
        Self::Item: 'a,
    {
        M::items(self)
    }

    fn get(&self, id: &K) -> Option<&M::Item> {
        M::get(self, id)
    }

    fn ids<'a>(&'a self) -> impl Iterator<Item = &'a K>
    where
        K: 'a,
        Self::Item: 'a,
    {
        M::ids(self)
    }

    fn is_empty(&self) -> bool {
        M::is_empty(self)
    }
}
