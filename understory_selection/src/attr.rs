// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribute selection: per-item sets of selected attributes.
//!
//! Typical for tables where each row has selectable cells (the attribute
//! being the column), or for items with several independently selectable
//! parts.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::hash::Hash;

use tracing::trace;

use crate::{AttrMap, Attrs, ItemSource, OnUpdated, SelectorOptions, Snapshot};

/// Selection state mapping ids of an [`ItemSource`] to sets of selected attributes.
///
/// `attr_keys` is the ordered list of attributes every item has. It is used
/// by [`select_all`](Self::select_all) and by the "all attributes selected"
/// queries; `select` and `clear` accept any attribute key.
///
/// Ids are ordered by when they were last touched: adding an attribute to an
/// id makes it the most recent, removing one leaves its position alone. An id
/// whose last attribute is removed is deselected.
///
/// Every mutating call runs the update callback exactly once, except
/// [`clear`](Self::clear) on an unselected id and [`clear_all`](Self::clear_all)
/// on an empty selection.
///
/// ```rust
/// use understory_selection::{AttrSelector, Attrs};
///
/// let rows = vec![("r1", ()), ("r2", ())];
/// let mut selector = AttrSelector::new(rows, ["name", "size"]);
///
/// selector.select("r1", "name", false);
/// selector.select("r2", "size", true);
/// assert_eq!(selector.last_selected(), Some(&"r2"));
///
/// selector.multi_select([("r1", Attrs::single("size"))], true);
/// assert_eq!(selector.all_attrs_selected().copied().collect::<Vec<_>>(), ["r1"]);
/// ```
pub struct AttrSelector<K, A, S> {
    source: S,
    attr_keys: Vec<A>,
    selected: AttrMap<K, Attrs<A>>,
    on_updated: Option<OnUpdated<Self>>,
}

impl<K: fmt::Debug, A: fmt::Debug, S> fmt::Debug for AttrSelector<K, A, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttrSelector")
            .field("attr_keys", &self.attr_keys)
            .field("selected", &self.selected)
            .field("on_updated", &self.on_updated.is_some())
            .finish_non_exhaustive()
    }
}

impl<K, A, S> AttrSelector<K, A, S>
where
    K: Clone + Eq + Hash,
    A: Clone + Eq + Hash,
    S: ItemSource<K>,
{
    /// Create an empty selector over `source` with no update callback.
    pub fn new(source: S, attr_keys: impl IntoIterator<Item = A>) -> Self {
        Self::with_options(source, attr_keys, SelectorOptions::new())
    }

    /// Create an empty selector over `source`.
    pub fn with_options(
        source: S,
        attr_keys: impl IntoIterator<Item = A>,
        options: SelectorOptions<Self>,
    ) -> Self {
        Self {
            source,
            attr_keys: attr_keys.into_iter().collect(),
            selected: AttrMap::new(),
            on_updated: options.on_updated,
        }
    }

    /// Set the update callback, replacing any previous one.
    #[must_use]
    pub fn with_on_updated(mut self, on_updated: impl Fn(&Self) + 'static) -> Self {
        self.on_updated = Some(Box::new(on_updated));
        self
    }

    /// Replace or remove the update callback.
    pub fn set_on_updated(&mut self, on_updated: Option<OnUpdated<Self>>) {
        self.on_updated = on_updated;
    }

    /// The item source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the item source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// The attributes every item has, in order.
    pub fn attr_keys(&self) -> &[A] {
        &self.attr_keys
    }

    /// Select `attr` on `id`.
    ///
    /// Without `ctrl` the whole selection becomes `id` → `{attr}`. With `ctrl`
    /// the attribute is toggled: removed if set (deselecting `id` if it was
    /// its last one), otherwise added, making `id` the most recent.
    pub fn select(&mut self, id: K, attr: A, ctrl: bool) {
        self.selected.select(id, attr, ctrl, |attrs| attrs);
        self.notify("select");
    }

    /// Select attributes on several ids at once.
    ///
    /// Without `ctrl` the selection is rebuilt from `values` in order. With
    /// `ctrl`, if every pair is already selected (see
    /// [`is_attrs_selected`](Self::is_attrs_selected)) those attributes are
    /// removed; otherwise they are merged in and each touched id becomes the
    /// most recent, in input order.
    pub fn multi_select(&mut self, values: impl IntoIterator<Item = (K, Attrs<A>)>, ctrl: bool) {
        self.selected.multi_select(values.into_iter().collect(), ctrl);
        self.notify("multi_select");
    }

    /// Select every attribute of every item, in the source's enumeration order.
    ///
    /// With `toggle`, clears the selection instead when everything is
    /// already selected.
    pub fn select_all(&mut self, toggle: bool) {
        if toggle && self.is_all_selected() {
            self.selected.clear();
        } else {
            let all = Attrs::all_of(&self.attr_keys);
            self.selected
                .replace_with(self.source.ids().map(|id| (id.clone(), all.clone())));
        }
        self.notify("select_all");
    }

    /// Deselect `attr` on `id`.
    ///
    /// Does nothing, and does not notify, if `id` has no attribute selected.
    /// Otherwise notifies, even if `attr` itself was not set.
    pub fn clear(&mut self, id: &K, attr: &A) {
        if self.selected.remove_attr(id, attr) {
            self.notify("clear");
        }
    }

    /// Deselect everything. Does nothing, and does not notify, if nothing is selected.
    pub fn clear_all(&mut self) {
        if self.selected.clear() {
            self.notify("clear_all");
        }
    }

    /// The current selection, least recently touched id first.
    pub fn selected(&self) -> &AttrMap<K, Attrs<A>> {
        &self.selected
    }

    /// Attributes selected on `id`.
    pub fn attrs_of(&self, id: &K) -> Option<&Attrs<A>> {
        self.selected.get(id)
    }

    /// Returns `true` if `attr` is selected on `id`.
    pub fn is_selected(&self, id: &K, attr: &A) -> bool {
        self.selected.get(id).is_some_and(|attrs| attrs.contains(attr))
    }

    /// The most recently touched id.
    pub fn last_selected(&self) -> Option<&K> {
        self.selected.last()
    }

    /// Ids that have every attribute of [`attr_keys`](Self::attr_keys) selected, in order.
    pub fn all_attrs_selected(&self) -> impl Iterator<Item = &K> {
        self.selected
            .iter()
            .filter(|(_, attrs)| attrs.contains_all(&self.attr_keys))
            .map(|(id, _)| id)
    }

    /// Returns `true` if the source is non-empty and every item has every attribute selected.
    pub fn is_all_selected(&self) -> bool {
        !self.source.is_empty()
            && self.source.ids().all(|id| {
                self.selected
                    .get(id)
                    .is_some_and(|attrs| attrs.contains_all(&self.attr_keys))
            })
    }

    /// Returns `true` if any attribute of any id is selected.
    pub fn is_any_selected(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Returns `true` if, for every pair of `query`, `id` has at least those attributes selected.
    ///
    /// Vacuously `true` for an empty query.
    pub fn is_attrs_selected(&self, query: &[(K, Attrs<A>)]) -> bool {
        self.selected.is_superset_of(query)
    }

    /// Copy the current selection.
    pub fn create_snapshot(&self) -> Snapshot<K, Attrs<A>> {
        self.selected.snapshot()
    }

    /// Replace the selection with `snapshot`, in its order.
    pub fn restore(&mut self, snapshot: Snapshot<K, Attrs<A>>) {
        self.selected.restore(snapshot);
        self.notify("restore");
    }

    fn notify(&self, op: &'static str) {
        trace!(op, selected = self.selected.len(), "attribute selection updated");
        if let Some(on_updated) = &self.on_updated {
            on_updated(self);
        }
    }
}
