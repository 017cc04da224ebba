// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_selection --heading-base-level=0

//! Understory Selection: ordered selection state for lists, grids, and tables.
//!
//! This crate tracks *what is selected* in a collection the host owns. It does
//! not render, hit-test, or listen to input; the host translates clicks and key
//! chords into calls on a selector and re-renders when the selector reports an
//! update.
//!
//! Three selectors share one model:
//!
//! - [`ItemSelector`]: a set of selected ids, in selection order.
//! - [`AttrSelector`]: per id, a set of selected attributes (for example the
//!   cells of a row). The most recently touched id is last.
//! - [`TypedAttrSelector`]: like [`AttrSelector`] for heterogeneous items; each
//!   item kind has its own attribute list.
//!
//! All of them resolve ids against an [`ItemSource`] on demand and never cache
//! items, so the collection can change between calls. Implementations are
//! provided for [`IndexMap`](indexmap::IndexMap), `hashbrown` and (with `std`)
//! standard hash maps, `BTreeMap`, and `Vec<(K, T)>` pairs.
//!
//! ## Interaction model
//!
//! Each mutating method takes a `ctrl` flag mirroring the modifier key:
//!
//! - `ctrl = false` replaces the selection.
//! - `ctrl = true` toggles: adds what is missing, removes what is present.
//!
//! `select_all(toggle)` selects everything; with `toggle`, a second call
//! clears again. Every mutating call reports one update through the callback
//! in [`SelectorOptions`], except clearing something that was not selected.
//!
//! ## Features
//!
//! - `std`: enable `std` in dependencies and implement [`ItemSource`] for
//!   `std::collections::HashMap`.
//! - `serde`: derive `Serialize`/`Deserialize` for [`Attrs`], [`TypedAttrs`],
//!   and [`Snapshot`] so selections can be persisted.
//!
//! Updates are also emitted as `tracing` events at `TRACE` level.
//!
//! # Example
//!
//! ```rust
//! use understory_selection::{AttrSelector, Attrs, ItemSelector};
//!
//! let rows = vec![(1_u32, "first"), (2, "second"), (3, "third")];
//!
//! // Row selection.
//! let mut rows_selected = ItemSelector::new(&rows);
//! rows_selected.select(1, false);
//! rows_selected.multi_select([2, 3], true);
//! assert!(rows_selected.is_all_selected());
//!
//! // Cell selection.
//! let mut cells = AttrSelector::new(&rows, ["name", "size"]);
//! cells.select(2, "name", false);
//! cells.select(3, "size", true);
//! assert_eq!(cells.last_selected(), Some(&3));
//! assert!(cells.is_attrs_selected(&[(2, Attrs::single("name"))]));
//!
//! // Undo a bulk change.
//! let snapshot = cells.create_snapshot();
//! cells.select_all(false);
//! cells.restore(snapshot);
//! assert_eq!(cells.selected().len(), 2);
//! ```

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod attr;
mod attr_map;
mod attrs;
mod item;
mod options;
mod snapshot;
mod source;
mod typed;

pub use attr::AttrSelector;
pub use attr_map::{AttrEntry, AttrMap};
pub use attrs::Attrs;
pub use item::ItemSelector;
pub use options::{OnUpdated, SelectorOptions};
pub use snapshot::Snapshot;
pub use source::ItemSource;
pub use typed::{AttrKeyTable, KindResolver, TypedAttrSelector, TypedAttrs};
