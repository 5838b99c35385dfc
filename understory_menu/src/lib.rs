// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_menu --heading-base-level=0

//! Understory Menu: a portable menu model built on [`understory_menu_sort`].
//!
//! ## Overview
//!
//! This crate covers the data side of application and context menus:
//!
//! - [`MenuItemTemplate`]: the serde form of a menu entry. Unknown keys are kept in an open map.
//! - [`Menu::build_from_template`]: sorts entries by their `before` / `after` /
//!   `beforeGroupContaining` / `afterGroupContaining` references and builds [`MenuItem`]s.
//! - [`Menu::item_by_id`], [`Menu::insert`], [`Menu::append`] for lookups and edits.
//! - [`set_application_menu`] / [`application_menu`]: the process-wide menu bar slot.
//!
//! Rendering, popups, accelerator parsing, and event delivery belong to the host toolkit.
//!
//! ## Example
//!
//! ```
//! use understory_menu::Menu;
//!
//! let menu = Menu::from_json(r#"[
//!     { "id": "quit", "label": "Quit" },
//!     { "type": "separator" },
//!     { "id": "open", "label": "Open…", "beforeGroupContaining": ["quit"] },
//!     { "id": "new", "label": "New", "before": ["open"] }
//! ]"#)?;
//!
//! let labels: Vec<_> = menu.items().iter().map(|i| i.label.as_str()).collect();
//! assert_eq!(labels, ["New", "Open…", "", "Quit"]);
//! assert!(menu.item_by_id("open").is_some());
//! # Ok::<(), understory_menu::MenuError>(())
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit a `debug!` event per build and enable the sorter's `trace!` events.

pub mod application;
pub mod error;
pub mod item;
pub mod menu;
pub mod template;

pub use application::{application_menu, set_application_menu};
pub use error::MenuError;
pub use item::{ItemFlags, MenuItem};
pub use menu::Menu;
pub use template::{ItemKind, MenuItemTemplate};
