// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item selection: which ids are selected, in selection order.
//!
//! ## Click semantics
//!
//! - Plain click: [`ItemSelector::select`] with `ctrl = false` replaces the selection.
//! - Ctrl-click: [`ItemSelector::select`] with `ctrl = true` toggles one id.
//! - Shift-click or rubber band: the host computes the id range and calls
//!   [`ItemSelector::multi_select`].
//! - Ctrl+A: [`ItemSelector::select_all`], optionally toggling back to nothing.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::hash::Hash;

use hashbrown::{DefaultHashBuilder, HashSet};
use indexmap::IndexSet;
use tracing::trace;

use crate::{ItemSource, OnUpdated, SelectorOptions, Snapshot};

/// Selection state over the ids of an [`ItemSource`].
///
/// Ids are kept in selection order: re-selecting an id that is already
/// selected never moves it, and a fresh insertion appends it at the end.
/// Ids do not need to exist in the source; they simply fail to resolve to
/// an item.
///
/// Every mutating call runs the update callback exactly once, even when the
/// state does not change. The exceptions are [`clear`](Self::clear) on an id
/// that is not selected and [`clear_all`](Self::clear_all) on an empty
/// selection, which change nothing and do not notify.
///
/// ```rust
/// use understory_selection::ItemSelector;
///
/// let items = vec![("a", "Apple"), ("b", "Banana"), ("c", "Cherry")];
/// let mut selector = ItemSelector::new(items);
///
/// selector.select("a", false);
/// selector.select("c", true);
/// assert_eq!(selector.selected_ids().copied().collect::<Vec<_>>(), ["a", "c"]);
/// assert_eq!(selector.last_selected_id(), Some(&"c"));
///
/// let names: Vec<_> = selector.selected_items().flatten().copied().collect();
/// assert_eq!(names, ["Apple", "Cherry"]);
/// ```
pub struct ItemSelector<K, S> {
    source: S,
    selected: IndexSet<K, DefaultHashBuilder>,
    on_updated: Option<OnUpdated<Self>>,
}

impl<K: fmt::Debug, S> fmt::Debug for ItemSelector<K, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemSelector")
            .field("selected", &self.selected)
            .field("on_updated", &self.on_updated.is_some())
            .finish_non_exhaustive()
    }
}

impl<K, S> ItemSelector<K, S>
where
    K: Clone + Eq + Hash,
    S: ItemSource<K>,
{
    /// Create an empty selector over `source` with no update callback.
    pub fn new(source: S) -> Self {
        Self::with_options(source, SelectorOptions::new())
    }

    /// Create an empty selector over `source`.
    pub fn with_options(source: S, options: SelectorOptions<Self>) -> Self {
        Self {
            source,
            selected: IndexSet::with_hasher(DefaultHashBuilder::default()),
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
    ///
    /// The selection is left as is: ids whose items disappear stay selected.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Select `id`.
    ///
    /// Without `ctrl` the selection becomes exactly `[id]`. With `ctrl`, `id`
    /// is removed if selected and appended otherwise.
    pub fn select(&mut self, id: K, ctrl: bool) {
        if !ctrl {
            self.selected.clear();
            self.selected.insert(id);
        } else if !self.selected.shift_remove(&id) {
            self.selected.insert(id);
        }
        self.notify("select");
    }

    /// Select several ids at once.
    ///
    /// Without `ctrl` the selection becomes exactly `ids`, in order. With
    /// `ctrl`, if every id is already selected they are all removed;
    /// otherwise the missing ones are appended in order and the rest keep
    /// their positions.
    pub fn multi_select(&mut self, ids: impl IntoIterator<Item = K>, ctrl: bool) {
        if !ctrl {
            self.selected.clear();
            self.selected.extend(ids);
        } else {
            let ids: Vec<K> = ids.into_iter().collect();
            if ids.iter().all(|id| self.selected.contains(id)) {
                for id in &ids {
                    self.selected.shift_remove(id);
                }
            } else {
                self.selected.extend(ids);
            }
        }
        self.notify("multi_select");
    }

    /// Select every id of the source, in its enumeration order.
    ///
    /// With `toggle`, clears the selection instead when everything is
    /// already selected.
    pub fn select_all(&mut self, toggle: bool) {
        if toggle && self.is_all_selected() {
            self.selected.clear();
        } else {
            self.selected.clear();
            self.selected.extend(self.source.ids().cloned());
        }
        self.notify("select_all");
    }

    /// Deselect `id`. Does nothing, and does not notify, if it is not selected.
    pub fn clear(&mut self, id: &K) {
        if self.selected.shift_remove(id) {
            self.notify("clear");
        }
    }

    /// Deselect everything. Does nothing, and does not notify, if nothing is selected.
    pub fn clear_all(&mut self) {
        if self.selected.is_empty() {
            return;
        }
        self.selected.clear();
        self.notify("clear_all");
    }

    /// Selected ids in selection order.
    pub fn selected_ids(&self) -> impl Iterator<Item = &K> {
        self.selected.iter()
    }

    /// Selected ids as an unordered set.
    pub fn selected_by_id(&self) -> HashSet<&K> {
        self.selected.iter().collect()
    }

    /// The items of the selected ids, in selection order.
    ///
    /// Yields `None` for ids the source does not currently hold.
    pub fn selected_items(&self) -> impl Iterator<Item = Option<&S::Item>> {
        self.selected.iter().map(|id| self.source.get(id))
    }

    /// `(id, item)` pairs for selected ids the source currently holds, in selection order.
    pub fn selected_items_by_id(&self) -> impl Iterator<Item = (&K, &S::Item)> {
        self.selected
            .iter()
            .filter_map(|id| self.source.get(id).map(|item| (id, item)))
    }

    /// The most recently selected id.
    pub fn last_selected_id(&self) -> Option<&K> {
        self.selected.last()
    }

    /// Returns `true` if `id` is selected.
    pub fn is_selected(&self, id: &K) -> bool {
        self.selected.contains(id)
    }

    /// Returns `true` if the source is non-empty and every one of its ids is selected.
    pub fn is_all_selected(&self) -> bool {
        !self.source.is_empty() && self.source.ids().all(|id| self.selected.contains(id))
    }

    /// Returns `true` if at least one id is selected.
    pub fn is_any_selected(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Number of selected ids.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Copy the current selection.
    pub fn create_snapshot(&self) -> Snapshot<K, ()> {
        self.selected.iter().map(|id| (id.clone(), ())).collect()
    }

    /// Replace the selection with `snapshot`, in its order.
    pub fn restore(&mut self, snapshot: Snapshot<K, ()>) {
        self.selected = snapshot.into_iter().map(|(id, ())| id).collect();
        self.notify("restore");
    }

    fn notify(&self, op: &'static str) {
        trace!(op, selected = self.selected.len(), "item selection updated");
        if let Some(on_updated) = &self.on_updated {
            on_updated(self);
        }
    }
}
