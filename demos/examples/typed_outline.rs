// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed attribute selection over a file tree with mixed row kinds.
//!
//! Files expose `name`, `size`, and `modified` columns while folders only
//! expose `name`, so "fully selected" is judged per kind.
//!
//! Run:
//! - `cargo run -p understory_demos --example typed_outline`

use std::collections::HashMap;

use understory_selection::{AttrKeyTable, TypedAttrSelector, TypedAttrs};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Kind {
    File,
    Folder,
}

#[derive(Debug)]
struct Node {
    kind: Kind,
    depth: usize,
}

/// Paths no longer in the tree are treated as files.
fn kind_of(node: Option<&Node>) -> Kind {
    node.map_or(Kind::File, |node| node.kind)
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let mut tree: Vec<(&str, Node)> = vec![
        ("src", Node { kind: Kind::Folder, depth: 0 }),
        ("src/lib.rs", Node { kind: Kind::File, depth: 1 }),
        ("src/item.rs", Node { kind: Kind::File, depth: 1 }),
        ("Cargo.toml", Node { kind: Kind::File, depth: 0 }),
    ];
    for (path, node) in &tree {
        println!("{:indent$}{path} ({:?})", "", node.kind, indent = node.depth * 2);
    }

    let columns: AttrKeyTable<Kind, &str> = [
        (Kind::File, vec!["name", "size", "modified"]),
        (Kind::Folder, vec!["name"]),
    ]
    .into();

    let mut selector =
        TypedAttrSelector::<&str, _, _, _>::new(&tree, kind_of, columns)
            .with_on_updated(|selector| {
                let mut per_kind: HashMap<Kind, usize> = HashMap::new();
                for (_, entry) in selector.selected().iter() {
                    *per_kind.entry(entry.kind).or_default() += 1;
                }
                println!("  selected per kind: {per_kind:?}");
            });

    selector.select("src", "name", false);
    selector.select("src/lib.rs", "size", true);
    selector.multi_select(
        [(
            "Cargo.toml",
            TypedAttrs::new(Kind::File, ["name", "size", "modified"]),
        )],
        true,
    );
    println!(
        "fully selected: {:?}",
        selector.all_attrs_selected().collect::<Vec<_>>()
    );

    let snapshot = selector.create_snapshot();
    drop(selector);

    // Rows can come and go between calls; a stale snapshot still restores.
    tree.retain(|(path, _)| *path != "src/lib.rs");
    let mut selector = TypedAttrSelector::new(
        &tree,
        kind_of,
        [(Kind::File, vec!["name", "size", "modified"]), (Kind::Folder, vec!["name"])],
    );
    selector.restore(snapshot);
    println!("kind of src/lib.rs after restore: {:?}", selector.kind_of(&"src/lib.rs"));

    selector.select_all(true);
    println!("everything selected: {}", selector.is_all_selected());
}
