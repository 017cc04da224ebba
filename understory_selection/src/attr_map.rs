// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered id → attribute-entry map shared by the attribute-aware selectors.
//!
//! ## Ordering
//!
//! Iteration order is the order in which ids were last (re)inserted, so the
//! last entry is the most recently touched id. The rules are:
//!
//! - Adding an attribute to an id removes and re-inserts its entry, moving it to the end.
//! - Removing an attribute mutates the entry in place; the id keeps its position.
//! - An entry whose attribute set becomes empty is removed immediately.
//!
//! Removal always uses `shift_remove`, so the relative order of the other ids
//! never changes.

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::DefaultHashBuilder;
use indexmap::IndexMap;

use crate::{Attrs, Snapshot};

/// A per-id selection value that carries an attribute set.
///
/// Implemented by [`Attrs`] itself and by [`TypedAttrs`](crate::TypedAttrs).
pub trait AttrEntry: Clone {
    /// Attribute key type.
    type Key: Hash + Eq + Clone;

    /// The selected attributes.
    fn attrs(&self) -> &Attrs<Self::Key>;

    /// Mutable access to the selected attributes.
    fn attrs_mut(&mut self) -> &mut Attrs<Self::Key>;

    /// Take over the non-attribute parts of `incoming` when it is merged into,
    /// or subtracted from, this entry.
    ///
    /// The default keeps `self` unchanged.
    fn adopt(&mut self, _incoming: &Self) {}
}

impl<A: Hash + Eq + Clone> AttrEntry for Attrs<A> {
    type Key = A;

    fn attrs(&self) -> &Self {
        self
    }

    fn attrs_mut(&mut self) -> &mut Self {
        self
    }
}

/// Read view over the ordered selection state of an attribute-aware selector.
///
/// Every entry holds a non-empty attribute set.
#[derive(Clone, Debug)]
pub struct AttrMap<K, V> {
    entries: IndexMap<K, V, DefaultHashBuilder>,
}

impl<K: Hash + Eq, V> AttrMap<K, V> {
    pub(crate) fn new() -> Self {
        Self {
            entries: IndexMap::with_hasher(DefaultHashBuilder::default()),
        }
    }

    /// Number of selected ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry for `id`, if it has any attribute selected.
    pub fn get(&self, id: &K) -> Option<&V> {
        self.entries.get(id)
    }

    /// Returns `true` if `id` has any attribute selected.
    pub fn contains(&self, id: &K) -> bool {
        self.entries.contains_key(id)
    }

    /// Iterate `(id, entry)` pairs, least recently touched first.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter()
    }

    /// Iterate selected ids, least recently touched first.
    pub fn ids(&self) -> impl Iterator<Item = &K> {
        self.entries.keys()
    }

    /// The most recently touched id.
    pub fn last(&self) -> Option<&K> {
        self.entries.last().map(|(id, _)| id)
    }
}

impl<K, V> AttrMap<K, V>
where
    K: Hash + Eq + Clone,
    V: AttrEntry,
{
    /// Single-attribute select.
    ///
    /// Without `ctrl` the whole map is replaced by `id` → `{attr}`. With `ctrl`
    /// the attribute is toggled on `id`. `fresh` builds the entry when `id` is
    /// not selected yet.
    pub(crate) fn select(
        &mut self,
        id: K,
        attr: V::Key,
        ctrl: bool,
        fresh: impl FnOnce(Attrs<V::Key>) -> V,
    ) {
        if !ctrl {
            self.entries.clear();
            self.entries.insert(id, fresh(Attrs::single(attr)));
            return;
        }
        match self.entries.get(&id).map(|entry| entry.attrs().contains(&attr)) {
            Some(true) => {
                self.remove_attr(&id, &attr);
            }
            Some(false) => {
                if let Some(mut entry) = self.entries.shift_remove(&id) {
                    entry.attrs_mut().insert(attr);
                    self.entries.insert(id, entry);
                }
            }
            None => {
                self.entries.insert(id, fresh(Attrs::single(attr)));
            }
        }
    }

    /// Bulk select.
    ///
    /// Without `ctrl` the map is rebuilt from `values` in input order. With
    /// `ctrl`, if every pair is already selected the pairs are subtracted,
    /// otherwise they are merged and each touched id moves to the end.
    pub(crate) fn multi_select(&mut self, values: Vec<(K, V)>, ctrl: bool) {
        if !ctrl {
            self.entries.clear();
            for (id, value) in values {
                if let Some(entry) = self.entries.get_mut(&id) {
                    entry.attrs_mut().merge(value.attrs());
                    entry.adopt(&value);
                } else if !value.attrs().is_empty() {
                    self.entries.insert(id, value);
                }
            }
            return;
        }
        if self.is_superset_of(&values) {
            for (id, value) in &values {
                let Some(entry) = self.entries.get_mut(id) else {
                    continue;
                };
                entry.attrs_mut().subtract(value.attrs());
                entry.adopt(value);
                if entry.attrs().is_empty() {
                    self.entries.shift_remove(id);
                }
            }
        } else {
            for (id, value) in values {
                match self.entries.shift_remove(&id) {
                    Some(mut entry) => {
                        entry.attrs_mut().merge(value.attrs());
                        entry.adopt(&value);
                        self.entries.insert(id, entry);
                    }
                    None if !value.attrs().is_empty() => {
                        self.entries.insert(id, value);
                    }
                    None => {}
                }
            }
        }
    }

    /// Replace the whole map, skipping entries with no attribute.
    pub(crate) fn replace_with(&mut self, values: impl IntoIterator<Item = (K, V)>) {
        self.entries.clear();
        for (id, value) in values {
            if !value.attrs().is_empty() {
                self.entries.insert(id, value);
            }
        }
    }

    /// Remove `attr` from `id`, dropping the entry once it is empty.
    ///
    /// Returns `false` if `id` was not selected.
    pub(crate) fn remove_attr(&mut self, id: &K, attr: &V::Key) -> bool {
        let Some(entry) = self.entries.get_mut(id) else {
            return false;
        };
        entry.attrs_mut().remove(attr);
        if entry.attrs().is_empty() {
            self.entries.shift_remove(id);
        }
        true
    }

    /// Empty the map. Returns `false` if it was already empty.
    pub(crate) fn clear(&mut self) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        self.entries.clear();
        true
    }

    /// Returns `true` if, for every pair, `id` is selected with at least the given attributes.
    ///
    /// A pair whose id is not selected is never satisfied; an empty query is.
    pub fn is_superset_of(&self, query: &[(K, V)]) -> bool {
        query.iter().all(|(id, value)| {
            self.entries
                .get(id)
                .is_some_and(|entry| entry.attrs().is_superset(value.attrs()))
        })
    }

    pub(crate) fn snapshot(&self) -> Snapshot<K, V> {
        self.entries
            .iter()
            .map(|(id, value)| (id.clone(), value.clone()))
            .collect()
    }

    pub(crate) fn restore(&mut self, snapshot: Snapshot<K, V>) {
        self.entries = snapshot.into_iter().collect();
        debug_assert!(
            self.entries.values().all(|entry| !entry.attrs().is_empty()),
            "snapshot entries must hold at least one attribute"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn ids(map: &AttrMap<&'static str, Attrs<&'static str>>) -> Vec<&'static str> {
        map.ids().copied().collect()
    }

    #[test]
    fn adding_moves_to_end_removing_keeps_position() {
        let mut map = AttrMap::new();
        map.select("a", "x", true, |attrs| attrs);
        map.select("b", "x", true, |attrs| attrs);
        map.select("a", "y", true, |attrs| attrs);
        assert_eq!(ids(&map), ["b", "a"]);

        map.select("b", "y", true, |attrs| attrs);
        assert_eq!(ids(&map), ["a", "b"]);

        // Toggling `x` off on `a` does not touch its position.
        map.select("a", "x", true, |attrs| attrs);
        assert_eq!(ids(&map), ["a", "b"]);
        assert_eq!(map.last(), Some(&"b"));
    }

    #[test]
    fn emptied_entries_are_removed() {
        let mut map = AttrMap::new();
        map.select("a", "x", true, |attrs| attrs);
        map.select("a", "x", true, |attrs| attrs);
        assert!(map.is_empty());
        assert!(!map.contains(&"a"));
    }

    #[test]
    fn non_ctrl_multi_select_merges_duplicates_in_place() {
        let mut map = AttrMap::new();
        map.select("z", "x", false, |attrs| attrs);
        map.multi_select(
            vec![
                ("a", Attrs::single("x")),
                ("b", Attrs::single("y")),
                ("a", Attrs::single("y")),
            ],
            false,
        );
        assert_eq!(ids(&map), ["a", "b"]);
        assert_eq!(map.get(&"a"), Some(&Attrs::from(["x", "y"])));
    }

    #[test]
    fn empty_values_never_create_entries() {
        let mut map = AttrMap::new();
        map.multi_select(vec![("a", Attrs::new())], false);
        assert!(map.is_empty());
        map.multi_select(vec![("a", Attrs::new()), ("b", Attrs::single("x"))], true);
        assert_eq!(ids(&map), ["b"]);
        map.replace_with(vec![("c", Attrs::new()), ("d", Attrs::single("x"))]);
        assert_eq!(ids(&map), ["d"]);
    }

    #[test]
    fn superset_query_requires_selected_ids() {
        let mut map = AttrMap::new();
        map.select("a", "x", true, |attrs| attrs);
        assert!(map.is_superset_of(&[]));
        assert!(map.is_superset_of(&[("a", Attrs::new())]));
        assert!(!map.is_superset_of(&[("b", Attrs::new())]));
        assert!(!map.is_superset_of(&[("a", Attrs::from(["x", "y"]))]));
    }

    #[test]
    fn remove_attr_reports_presence() {
        let mut map = AttrMap::new();
        assert!(!map.remove_attr(&"a", &"x"));
        map.select("a", "x", true, |attrs| attrs);
        assert!(map.remove_attr(&"a", &"missing"));
        assert!(map.contains(&"a"));
        assert!(map.remove_attr(&"a", &"x"));
        assert!(map.is_empty());
    }

    #[test]
    fn clear_reports_change() {
        let mut map: AttrMap<&str, Attrs<&str>> = AttrMap::new();
        assert!(!map.clear());
        map.select("a", "x", false, |attrs| attrs);
        assert!(map.clear());
    }

    #[test]
    fn snapshot_restores_order() {
        let mut map = AttrMap::new();
        map.select("b", "x", true, |attrs| attrs);
        map.select("a", "x", true, |attrs| attrs);
        map.select("b", "y", true, |attrs| attrs);
        let snapshot = map.snapshot();

        map.select("c", "x", false, |attrs| attrs);
        map.restore(snapshot);
        assert_eq!(ids(&map), ["a", "b"]);
        assert_eq!(map.get(&"b"), Some(&Attrs::from(["x", "y"])));
    }
}
