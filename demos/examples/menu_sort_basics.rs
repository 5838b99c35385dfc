// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu sort basics.
//!
//! Sort a flat list of entries with item and group references, and print the
//! order before and after.
//!
//! Run:
//! - `cargo run -p understory_menu_demos --example menu_sort_basics`

use understory_menu_sort::{Descriptor, MenuEntry, sort_entries};

fn show(title: &str, entries: &[Descriptor]) {
    println!("== {title} ==");
    for e in entries {
        if e.is_separator() {
            println!("  ----");
        } else {
            println!(
                "  {:<8} before={:?} after={:?} before_group={:?} after_group={:?}",
                e.id.as_deref().unwrap_or("?"),
                e.before,
                e.after,
                e.before_group_containing,
                e.after_group_containing,
            );
        }
    }
}

fn main() {
    let entries = vec![
        Descriptor::item("quit"),
        Descriptor::separator(),
        Descriptor::item("copy"),
        Descriptor::item("paste"),
        Descriptor::separator(),
        Descriptor::item("cut").with_before(["copy"]),
        Descriptor::separator(),
        Descriptor::item("new").with_before_group(["copy"]),
        Descriptor::item("open").with_after(["new"]),
        Descriptor::separator(),
        // Unknown ids are skipped.
        Descriptor::item("plugin").with_after(["not-installed"]),
        Descriptor::separator(),
    ];

    show("input", &entries);
    show("sorted", &sort_entries(&entries));
}
