// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu templates.
//!
//! Build a menu from a JSON template, look items up by id, edit it, and
//! install it as the application menu.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_menu_demos --example menu_template`

use tracing_subscriber::EnvFilter;
use understory_menu::{
    ItemKind, Menu, MenuError, MenuItem, application_menu, set_application_menu,
};

const TEMPLATE: &str = r#"[
  { "label": "File", "submenu": [
      { "id": "quit", "label": "Quit", "accelerator": "CmdOrCtrl+Q" },
      { "type": "separator" },
      { "id": "open", "label": "Open…", "beforeGroupContaining": ["quit"] },
      { "id": "new", "label": "New", "before": ["open"], "analyticsKey": "file.new" }
  ] },
  { "id": "view", "label": "View", "submenu": [
      { "id": "wrap", "label": "Word Wrap", "type": "checkbox", "checked": true }
  ] }
]"#;

fn print_menu(menu: &Menu, depth: usize) {
    for item in menu.items() {
        let pad = "  ".repeat(depth + 1);
        match item.kind {
            ItemKind::Separator => println!("{pad}----"),
            _ => println!(
                "{pad}{} id={:?} accel={:?} flags={:?} extra={}",
                item.label,
                item.id,
                item.accelerator,
                item.flags,
                serde_json::Value::Object(item.extra.clone()),
            ),
        }
        if let Some(sub) = &item.submenu {
            print_menu(sub, depth + 1);
        }
    }
}

fn main() -> Result<(), MenuError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut menu = Menu::from_json(TEMPLATE)?;
    println!("== Built ==");
    print_menu(&menu, 0);

    if let Some(wrap) = menu.item_by_id_mut("wrap") {
        wrap.set_checked(false);
    }
    menu.insert(1, MenuItem::new("Edit").with_id("edit"))?;
    menu.append(MenuItem::new("Help"));

    let scratch = Menu::from(vec![MenuItem::new("Scratch"), MenuItem::separator()]);
    println!("== Scratch ({} items) ==", scratch.len());
    print_menu(&scratch, 0);

    set_application_menu(Some(menu));
    if let Some(app) = application_menu() {
        println!("== Application menu ==");
        print_menu(&app, 0);
    }
    set_application_menu(None);
    Ok(())
}
