// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row and cell selection over a small table.
//!
//! This example drives:
//! - an `ItemSelector` for whole rows (click, ctrl-click, shift-range, ctrl+A),
//! - an `AttrSelector` for individual cells, with undo via snapshots.
//!
//! Selector updates are traced; run with the subscriber at `TRACE` to see them.
//!
//! Run:
//! - `cargo run -p understory_demos --example selection_table`

use indexmap::IndexMap;
use understory_selection::{AttrSelector, Attrs, ItemSelector, SelectorOptions};

#[derive(Clone, Debug)]
struct Row {
    name: &'static str,
    size: u64,
}

type CellSelector<'a> = AttrSelector<u32, &'static str, &'a IndexMap<u32, Row>>;

const COLUMNS: [&str; 3] = ["name", "size", "modified"];

fn table() -> IndexMap<u32, Row> {
    [
        (10, Row { name: "Cargo.toml", size: 812 }),
        (11, Row { name: "README.md", size: 2_304 }),
        (12, Row { name: "lib.rs", size: 9_120 }),
        (13, Row { name: "item.rs", size: 11_876 }),
    ]
    .into_iter()
    .collect()
}

/// Ids strictly between the anchor and the target, plus both, in table order.
fn range(rows: &IndexMap<u32, Row>, anchor: u32, target: u32) -> Vec<u32> {
    let (Some(a), Some(b)) = (rows.get_index_of(&anchor), rows.get_index_of(&target)) else {
        return Vec::new();
    };
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    rows.keys().skip(lo).take(hi - lo + 1).copied().collect()
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let rows = table();

    println!("Row selection");
    println!("=============");
    let mut row_selection = ItemSelector::<u32, _>::new(&rows).with_on_updated(|selector| {
        let names: Vec<_> = selector.selected_items_by_id().map(|(_, row)| row.name).collect();
        println!("  selected: {names:?}");
    });

    println!("click README.md");
    row_selection.select(11, false);
    println!("ctrl-click item.rs");
    row_selection.select(13, true);
    println!("shift-click Cargo.toml from the last selected row");
    let anchor = row_selection.last_selected_id().copied().unwrap_or(10);
    row_selection.multi_select(range(&rows, anchor, 10), false);
    println!("ctrl+A twice");
    row_selection.select_all(true);
    row_selection.select_all(true);

    row_selection.select(12, false);
    row_selection.select(13, true);
    let total: u64 = row_selection.selected_items_by_id().map(|(_, row)| row.size).sum();
    println!("total size of selected rows: {total}");

    println!();
    println!("Cell selection");
    println!("==============");
    let options = SelectorOptions::new().on_updated(|selector: &CellSelector<'_>| {
        for (id, attrs) in selector.selected().iter() {
            let columns: Vec<_> = attrs.iter().copied().collect();
            println!("  row {id}: {columns:?}");
        }
        if let Some(last) = selector.last_selected() {
            println!("  last touched: {last}");
        }
    });
    let mut cells = CellSelector::with_options(&rows, COLUMNS, options);

    println!("click name of lib.rs");
    cells.select(12, "name", false);
    println!("ctrl-click size of Cargo.toml");
    cells.select(10, "size", true);
    println!("ctrl-drag across name and size of lib.rs");
    cells.multi_select([(12, Attrs::from(["name", "size"]))], true);
    println!("rows with every column selected: {:?}", cells.all_attrs_selected().collect::<Vec<_>>());

    let before = cells.create_snapshot();
    println!("ctrl+A");
    cells.select_all(false);
    println!("undo");
    cells.restore(before);
}
