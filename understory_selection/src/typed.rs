// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed attribute selection: attribute selection over heterogeneous items.
//!
//! Each item has a kind (its "type" tag), resolved from the item itself, and
//! each kind has its own list of attributes. Heterogeneous rows (for example
//! files and folders, or several node kinds in an outline) can then share one
//! selection while "all attributes selected" is judged per kind.
//!
//! ## Kind resolution
//!
//! [`TypedAttrSelector::select`] resolves the kind from the item the source
//! currently holds for the id. If the source has no such item, the kind
//! stored with the id's existing entry is used, and failing that the resolver
//! is called with `None`. Ids missing from the source are therefore selected
//! like any other. [`TypedAttrSelector::select_as`] takes the kind from the
//! caller instead.
//!
//! A kind missing from the [`AttrKeyTable`] has no attributes to select in
//! bulk: `select_all` skips such items, and their entries never count as
//! fully selected.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::hash::Hash;

use hashbrown::HashMap;
use tracing::trace;

use crate::{AttrEntry, AttrMap, Attrs, ItemSource, OnUpdated, SelectorOptions, Snapshot};

/// An attribute set tagged with the kind of the item it was selected on.
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound(
        serialize = "T: serde::Serialize, A: serde::Serialize",
        deserialize = "T: serde::Deserialize<'de>, A: serde::Deserialize<'de> + Eq + Hash"
    ))
)]
pub struct TypedAttrs<T, A> {
    /// Kind of the item.
    pub kind: T,
    /// Selected attributes.
    pub attrs: Attrs<A>,
}

impl<T, A> TypedAttrs<T, A> {
    /// Tag `attrs` with `kind`.
    pub fn new(kind: T, attrs: impl Into<Attrs<A>>) -> Self {
        Self {
            kind,
            attrs: attrs.into(),
        }
    }
}

impl<T: PartialEq, A: Hash + Eq> PartialEq for TypedAttrs<T, A> {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.attrs == other.attrs
    }
}

impl<T: Eq, A: Hash + Eq> Eq for TypedAttrs<T, A> {}

impl<T: Clone, A: Hash + Eq + Clone> AttrEntry for TypedAttrs<T, A> {
    type Key = A;

    fn attrs(&self) -> &Attrs<A> {
        &self.attrs
    }

    fn attrs_mut(&mut self) -> &mut Attrs<A> {
        &mut self.attrs
    }

    /// The incoming kind wins.
    fn adopt(&mut self, incoming: &Self) {
        self.kind = incoming.kind.clone();
    }
}

/// Attribute keys per item kind.
#[derive(Clone, Debug)]
pub struct AttrKeyTable<T, A> {
    keys: HashMap<T, Vec<A>>,
}

impl<T: Hash + Eq, A> AttrKeyTable<T, A> {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            keys: HashMap::new(),
        }
    }

    /// Set the ordered attribute keys of `kind`, replacing any previous list.
    pub fn insert(&mut self, kind: T, keys: impl IntoIterator<Item = A>) {
        self.keys.insert(kind, keys.into_iter().collect());
    }

    /// The attribute keys of `kind`.
    pub fn get(&self, kind: &T) -> Option<&[A]> {
        self.keys.get(kind).map(Vec::as_slice)
    }

    /// Number of kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if no kind is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<T: Hash + Eq, A> Default for AttrKeyTable<T, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq, A, I: IntoIterator<Item = A>> FromIterator<(T, I)> for AttrKeyTable<T, A> {
    fn from_iter<It: IntoIterator<Item = (T, I)>>(iter: It) -> Self {
        let mut table = Self::new();
        for (kind, keys) in iter {
            table.insert(kind, keys);
        }
        table
    }
}

impl<T: Hash + Eq, A, I: IntoIterator<Item = A>, const N: usize> From<[(T, I); N]>
    for AttrKeyTable<T, A>
{
    fn from(kinds: [(T, I); N]) -> Self {
        kinds.into_iter().collect()
    }
}

/// Resolves the kind of an item, or of an id the source does not hold (`None`).
pub type KindResolver<Item, T> = Box<dyn Fn(Option<&Item>) -> T>;

/// Selection state mapping ids of an [`ItemSource`] to kind-tagged attribute sets.
///
/// Behaves like [`AttrSelector`](crate::AttrSelector), except that each entry
/// carries the kind of its item and the attribute list used by `select_all`
/// and the "all attributes selected" queries is looked up per kind.
///
/// ```rust
/// use understory_selection::{TypedAttrSelector, TypedAttrs};
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// enum Kind {
///     File,
///     Folder,
/// }
///
/// let entries = vec![("readme", Kind::File), ("src", Kind::Folder)];
/// let mut selector = TypedAttrSelector::new(
///     entries,
///     |kind: Option<&Kind>| kind.copied().unwrap_or(Kind::File),
///     [(Kind::File, vec!["name", "size"]), (Kind::Folder, vec!["name"])],
/// );
///
/// selector.select("src", "name", true);
/// assert_eq!(selector.kind_of(&"src"), Some(&Kind::Folder));
/// assert_eq!(selector.all_attrs_selected().copied().collect::<Vec<_>>(), ["src"]);
///
/// selector.select_all(false);
/// assert_eq!(
///     selector.selected().get(&"readme"),
///     Some(&TypedAttrs::new(Kind::File, ["name", "size"]))
/// );
/// ```
pub struct TypedAttrSelector<K, A, T, S: ItemSource<K>> {
    source: S,
    resolve_kind: KindResolver<S::Item, T>,
    attr_keys: AttrKeyTable<T, A>,
    selected: AttrMap<K, TypedAttrs<T, A>>,
    on_updated: Option<OnUpdated<Self>>,
}

impl<K, A, T, S> fmt::Debug for TypedAttrSelector<K, A, T, S>
where
    K: fmt::Debug,
    A: fmt::Debug,
    T: fmt::Debug,
    S: ItemSource<K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedAttrSelector")
            .field("attr_keys", &self.attr_keys)
            .field("selected", &self.selected)
            .field("on_updated", &self.on_updated.is_some())
            .finish_non_exhaustive()
    }
}

impl<K, A, T, S> TypedAttrSelector<K, A, T, S>
where
    K: Clone + Eq + Hash,
    A: Clone + Eq + Hash,
    T: Clone + Eq + Hash,
    S: ItemSource<K>,
{
    /// Create an empty selector over `source` with no update callback.
    ///
    /// `resolve_kind` maps an item to its kind, and gives the kind of ids the
    /// source does not hold when called with `None`. `attr_keys` lists the
    /// attributes of each kind.
    pub fn new(
        source: S,
        resolve_kind: impl Fn(Option<&S::Item>) -> T + 'static,
        attr_keys: impl Into<AttrKeyTable<T, A>>,
    ) -> Self {
        Self::with_options(source, resolve_kind, attr_keys, SelectorOptions::new())
    }

    /// Create an empty selector over `source`.
    pub fn with_options(
        source: S,
        resolve_kind: impl Fn(Option<&S::Item>) -> T + 'static,
        attr_keys: impl Into<AttrKeyTable<T, A>>,
        options: SelectorOptions<Self>,
    ) -> Self {
        Self {
            source,
            resolve_kind: Box::new(resolve_kind),
            attr_keys: attr_keys.into(),
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

    /// The attribute key table.
    pub fn attr_keys(&self) -> &AttrKeyTable<T, A> {
        &self.attr_keys
    }

    /// The attribute keys of `kind`.
    pub fn attr_keys_for(&self, kind: &T) -> Option<&[A]> {
        self.attr_keys.get(kind)
    }

    /// Select `attr` on `id`, resolving the kind from the source.
    ///
    /// Same toggle rules as [`AttrSelector::select`](crate::AttrSelector::select).
    /// See the [module docs](self) for how the kind is resolved.
    pub fn select(&mut self, id: K, attr: A, ctrl: bool) {
        let kind = match (self.source.get(&id), self.selected.get(&id)) {
            (Some(item), _) => (self.resolve_kind)(Some(item)),
            (None, Some(entry)) => entry.kind.clone(),
            (None, None) => {
                trace!("select: id not in source, resolving kind without an item");
                (self.resolve_kind)(None)
            }
        };
        self.selected
            .select(id, attr, ctrl, |attrs| TypedAttrs { kind, attrs });
        self.notify("select");
    }

    /// Select `attr` on `id` with a caller-supplied kind.
    ///
    /// `kind` is used when the entry is created; toggling an attribute on an
    /// existing entry keeps its stored kind.
    pub fn select_as(&mut self, id: K, kind: T, attr: A, ctrl: bool) {
        self.selected
            .select(id, attr, ctrl, |attrs| TypedAttrs { kind, attrs });
        self.notify("select_as");
    }

    /// Select attributes on several ids at once.
    ///
    /// Same rules as [`AttrSelector::multi_select`](crate::AttrSelector::multi_select);
    /// each touched entry takes the kind given in `values`.
    pub fn multi_select(
        &mut self,
        values: impl IntoIterator<Item = (K, TypedAttrs<T, A>)>,
        ctrl: bool,
    ) {
        self.selected.multi_select(values.into_iter().collect(), ctrl);
        self.notify("multi_select");
    }

    /// Select every attribute of every item, in the source's enumeration order.
    ///
    /// Items whose kind has no attribute keys are skipped. With `toggle`,
    /// clears the selection instead when everything is already selected.
    pub fn select_all(&mut self, toggle: bool) {
        if toggle && self.is_all_selected() {
            self.selected.clear();
        } else {
            let resolve_kind = &self.resolve_kind;
            let attr_keys = &self.attr_keys;
            self.selected.replace_with(self.source.items().filter_map(|(id, item)| {
                let kind = resolve_kind(Some(item));
                let attrs = Attrs::all_of(attr_keys.get(&kind)?);
                Some((id.clone(), TypedAttrs { kind, attrs }))
            }));
        }
        self.notify("select_all");
    }

    /// Deselect `attr` on `id`.
    ///
    /// Does nothing, and does not notify, if `id` has no attribute selected.
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
    pub fn selected(&self) -> &AttrMap<K, TypedAttrs<T, A>> {
        &self.selected
    }

    /// Attributes selected on `id`.
    pub fn attrs_of(&self, id: &K) -> Option<&Attrs<A>> {
        self.selected.get(id).map(|entry| &entry.attrs)
    }

    /// The kind stored with `id`'s entry.
    pub fn kind_of(&self, id: &K) -> Option<&T> {
        self.selected.get(id).map(|entry| &entry.kind)
    }

    /// Returns `true` if `attr` is selected on `id`.
    pub fn is_selected(&self, id: &K, attr: &A) -> bool {
        self.selected
            .get(id)
            .is_some_and(|entry| entry.attrs.contains(attr))
    }

    /// The most recently touched id.
    pub fn last_selected(&self) -> Option<&K> {
        self.selected.last()
    }

    /// Ids that have every attribute of their kind selected, in order.
    pub fn all_attrs_selected(&self) -> impl Iterator<Item = &K> {
        self.selected
            .iter()
            .filter(|(_, entry)| self.is_complete(entry))
            .map(|(id, _)| id)
    }

    /// Returns `true` if the source is non-empty and every item has every
    /// attribute of its kind selected.
    pub fn is_all_selected(&self) -> bool {
        !self.source.is_empty()
            && self.source.ids().all(|id| {
                self.selected
                    .get(id)
                    .is_some_and(|entry| self.is_complete(entry))
            })
    }

    /// Returns `true` if any attribute of any id is selected.
    pub fn is_any_selected(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Returns `true` if, for every pair of `query`, `id` has at least those attributes selected.
    ///
    /// Kinds in `query` are not compared. Vacuously `true` for an empty query.
    pub fn is_attrs_selected(&self, query: &[(K, TypedAttrs<T, A>)]) -> bool {
        self.selected.is_superset_of(query)
    }

    /// Copy the current selection.
    pub fn create_snapshot(&self) -> Snapshot<K, TypedAttrs<T, A>> {
        self.selected.snapshot()
    }

    /// Replace the selection with `snapshot`, in its order.
    pub fn restore(&mut self, snapshot: Snapshot<K, TypedAttrs<T, A>>) {
        self.selected.restore(snapshot);
        self.notify("restore");
    }

    fn is_complete(&self, entry: &TypedAttrs<T, A>) -> bool {
        self.attr_keys
            .get(&entry.kind)
            .is_some_and(|keys| entry.attrs.contains_all(keys))
    }

    fn notify(&self, op: &'static str) {
        trace!(op, selected = self.selected.len(), "typed attribute selection updated");
        if let Some(on_updated) = &self.on_updated {
            on_updated(self);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::Cell;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    enum Kind {
        S,
        T,
    }

    type Items = Vec<(&'static str, Kind)>;
    type Selector = TypedAttrSelector<&'static str, &'static str, Kind, Items>;
    type Entry = TypedAttrs<Kind, &'static str>;

    fn items() -> Items {
        vec![("a", Kind::S), ("b", Kind::S), ("c", Kind::T)]
    }

    /// Items are their own kind; ids missing from the source are `T`.
    fn kind_of_item(item: Option<&Kind>) -> Kind {
        item.copied().unwrap_or(Kind::T)
    }

    fn selector_over(items: Items) -> Selector {
        TypedAttrSelector::new(
            items,
            kind_of_item,
            [(Kind::S, vec!["x", "y"]), (Kind::T, vec!["p", "q"])],
        )
    }

    fn selector() -> Selector {
        selector_over(items())
    }

    fn counted() -> (Selector, Rc<Cell<usize>>) {
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        let selector = selector().with_on_updated(move |_| counter.set(counter.get() + 1));
        (selector, count)
    }

    fn entry<const N: usize>(kind: Kind, attrs: [&'static str; N]) -> Entry {
        TypedAttrs::new(kind, attrs)
    }

    fn selected(selector: &Selector) -> Vec<(&'static str, Entry)> {
        selector
            .selected()
            .iter()
            .map(|(id, entry)| (*id, entry.clone()))
            .collect()
    }

    #[test]
    fn select_resolves_kind_from_item() {
        let (mut selector, count) = counted();
        selector.select("a", "x", false);
        assert_eq!(selected(&selector), [("a", entry(Kind::S, ["x"]))]);
        assert_eq!(selector.last_selected(), Some(&"a"));
        assert_eq!(count.get(), 1);

        selector.select("a", "y", false);
        assert_eq!(selected(&selector), [("a", entry(Kind::S, ["y"]))]);

        selector.select("c", "p", false);
        assert_eq!(selected(&selector), [("c", entry(Kind::T, ["p"]))]);

        selector.select("c", "p", false);
        assert_eq!(selected(&selector), [("c", entry(Kind::T, ["p"]))]);
        assert_eq!(count.get(), 4);
    }

    #[test]
    fn select_as_uses_given_kind() {
        let mut selector = selector();
        selector.select_as("a", Kind::S, "x", true);
        selector.select_as("c", Kind::S, "y", true);
        assert_eq!(
            selected(&selector),
            [("a", entry(Kind::S, ["x"])), ("c", entry(Kind::S, ["y"]))]
        );

        // An existing entry keeps its kind.
        selector.select_as("c", Kind::T, "x", true);
        assert_eq!(selector.kind_of(&"c"), Some(&Kind::S));
    }

    #[test]
    fn ctrl_select_recency_trace() {
        let steps = [
            ("a", "x", "a"),
            ("c", "x", "c"),
            ("c", "y", "c"),
            ("a", "y", "a"),
            ("c", "y", "a"),
            ("a", "x", "a"),
            ("c", "x", "a"),
            ("c", "x", "c"),
            ("c", "x", "a"),
        ];
        for resolve_from_source in [false, true] {
            let mut selector = selector();
            for (id, attr, expected_last) in steps {
                if resolve_from_source {
                    selector.select(id, attr, true);
                } else {
                    selector.select_as(id, Kind::S, attr, true);
                }
                assert_eq!(
                    selector.last_selected(),
                    Some(&expected_last),
                    "after toggling {attr} on {id} (resolved: {resolve_from_source})"
                );
            }
            assert_eq!(selected(&selector), [("a", entry(Kind::S, ["y"]))]);
        }
    }

    #[test]
    fn missing_item_falls_back_to_stored_kind() {
        let (mut selector, count) = counted();
        selector.select("a", "x", true);
        selector.source_mut().retain(|(id, _)| *id != "a");

        selector.select("a", "y", true);
        assert_eq!(selected(&selector), [("a", entry(Kind::S, ["x", "y"]))]);

        selector.select("a", "x", false);
        assert_eq!(selected(&selector), [("a", entry(Kind::S, ["x"]))]);
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn ids_missing_from_source_are_selected() {
        let (mut selector, count) = counted();
        selector.select("a", "x", false);

        selector.select("ghost", "x", false);
        assert_eq!(selected(&selector), [("ghost", entry(Kind::T, ["x"]))]);
        assert_eq!(selector.last_selected(), Some(&"ghost"));

        selector.select("a", "x", true);
        selector.select("phantom", "p", true);
        assert_eq!(
            selected(&selector),
            [
                ("ghost", entry(Kind::T, ["x"])),
                ("a", entry(Kind::S, ["x"])),
                ("phantom", entry(Kind::T, ["p"])),
            ]
        );
        assert!(selector.all_attrs_selected().next().is_none());

        selector.select("phantom", "p", true);
        assert!(!selector.selected().contains(&"phantom"));
        assert_eq!(count.get(), 5);
    }

    #[test]
    fn is_attrs_selected_tracks_toggles() {
        let mut selector = selector();
        let query = [("a", entry(Kind::S, ["x", "y"]))];
        assert!(!selector.is_attrs_selected(&query));
        selector.select("a", "x", true);
        selector.select("c", "p", true);
        assert!(!selector.is_attrs_selected(&query));
        selector.select("a", "y", true);
        assert!(selector.is_attrs_selected(&query));
    }

    #[test]
    fn multi_select_without_ctrl_replaces() {
        let (mut selector, count) = counted();
        selector.multi_select(
            [("a", entry(Kind::S, ["x"])), ("c", entry(Kind::T, ["q"]))],
            false,
        );
        assert_eq!(
            selected(&selector),
            [("a", entry(Kind::S, ["x"])), ("c", entry(Kind::T, ["q"]))]
        );
        selector.multi_select([("a", entry(Kind::S, ["y"]))], false);
        assert_eq!(selected(&selector), [("a", entry(Kind::S, ["y"]))]);
        selector.multi_select([("a", entry(Kind::S, ["y"]))], false);
        assert_eq!(selected(&selector), [("a", entry(Kind::S, ["y"]))]);
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn ctrl_multi_select_toggles() {
        let (mut selector, count) = counted();
        selector.multi_select(
            [("a", entry(Kind::S, ["x"])), ("c", entry(Kind::T, ["q"]))],
            true,
        );
        assert_eq!(
            selected(&selector),
            [("a", entry(Kind::S, ["x"])), ("c", entry(Kind::T, ["q"]))]
        );

        selector.multi_select([("a", entry(Kind::S, ["x", "y"]))], true);
        assert_eq!(
            selected(&selector),
            [("c", entry(Kind::T, ["q"])), ("a", entry(Kind::S, ["x", "y"]))]
        );

        selector.multi_select([("a", entry(Kind::S, ["x", "y"]))], true);
        assert_eq!(selected(&selector), [("c", entry(Kind::T, ["q"]))]);
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn multi_select_adopts_incoming_kind() {
        let mut selector = selector();
        selector.select("a", "x", true);
        selector.multi_select([("a", entry(Kind::T, ["p"]))], true);
        assert_eq!(selector.kind_of(&"a"), Some(&Kind::T));
        assert_eq!(selector.attrs_of(&"a"), Some(&Attrs::from(["x", "p"])));
    }

    #[test]
    fn select_all_uses_per_kind_keys() {
        let (mut selector, count) = counted();
        selector.select_all(false);
        assert_eq!(
            selected(&selector),
            [
                ("a", entry(Kind::S, ["x", "y"])),
                ("b", entry(Kind::S, ["x", "y"])),
                ("c", entry(Kind::T, ["p", "q"])),
            ]
        );
        assert!(selector.is_all_selected());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn select_all_toggle() {
        let (mut selector, count) = counted();
        selector.select_all(false);
        selector.clear(&"a", &"y");
        assert_eq!(
            selected(&selector),
            [
                ("a", entry(Kind::S, ["x"])),
                ("b", entry(Kind::S, ["x", "y"])),
                ("c", entry(Kind::T, ["p", "q"])),
            ]
        );
        assert_eq!(count.get(), 2);

        selector.select_all(true);
        assert_eq!(selected(&selector)[0], ("a", entry(Kind::S, ["x", "y"])));
        assert_eq!(count.get(), 3);

        selector.select_all(true);
        assert!(selected(&selector).is_empty());
        assert_eq!(count.get(), 4);
    }

    #[test]
    fn unknown_kind_is_never_complete() {
        let mut selector = TypedAttrSelector::new(
            vec![("a", Kind::S), ("c", Kind::T)],
            kind_of_item,
            [(Kind::S, vec!["x"])],
        );
        selector.select_all(false);
        assert_eq!(selector.selected().ids().copied().collect::<Vec<_>>(), ["a"]);
        assert!(!selector.is_all_selected());

        selector.select("c", "p", true);
        assert_eq!(selector.all_attrs_selected().copied().collect::<Vec<_>>(), ["a"]);
    }

    #[test]
    fn clear_keeps_recency() {
        let (mut selector, count) = counted();
        selector.select("a", "x", true);
        selector.select("a", "y", true);
        selector.select("c", "p", true);
        assert_eq!(
            selected(&selector),
            [("a", entry(Kind::S, ["x", "y"])), ("c", entry(Kind::T, ["p"]))]
        );
        assert_eq!(selector.last_selected(), Some(&"c"));

        count.set(0);
        selector.clear(&"a", &"y");
        assert_eq!(
            selected(&selector),
            [("a", entry(Kind::S, ["x"])), ("c", entry(Kind::T, ["p"]))]
        );
        assert_eq!(count.get(), 1);
        assert_eq!(selector.last_selected(), Some(&"c"));

        selector.clear(&"c", &"p");
        assert_eq!(selected(&selector), [("a", entry(Kind::S, ["x"]))]);
        assert_eq!(count.get(), 2);
        assert_eq!(selector.last_selected(), Some(&"a"));

        selector.clear(&"c", &"p");
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn clear_all_notifies_once() {
        let (mut selector, count) = counted();
        selector.select_all(false);
        selector.clear_all();
        assert!(!selector.is_any_selected());
        selector.clear_all();
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn is_all_selected_false_without_items() {
        let selector = selector_over(Vec::new());
        assert!(!selector.is_all_selected());
    }

    #[test]
    fn snapshot_round_trip() {
        let (mut selector, count) = counted();
        selector.select("c", "p", true);
        selector.select("a", "x", true);
        let before = selected(&selector);
        let snapshot = selector.create_snapshot();
        assert_eq!(snapshot.len(), 2);

        selector.clear_all();
        selector.restore(snapshot);
        assert_eq!(selected(&selector), before);
        assert_eq!(selector.last_selected(), Some(&"a"));
        assert_eq!(count.get(), 4);
    }
}
