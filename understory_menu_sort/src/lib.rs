// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_menu_sort --heading-base-level=0

//! Understory Menu Sort: deterministic, `no_std` ordering of menu entries.
//!
//! ## Overview
//!
//! Menus are often assembled from several sources (application defaults, plugins, platform
//! conventions) that each contribute a few entries and say where they want them relative to
//! others. This crate turns such a flat list into one order.
//!
//! The list is split into *groups*: runs of entries between separators. Entries may carry
//! four kinds of references to other entries' ids:
//!
//! - `before` / `after`: put this entry in the same group as the referenced entry, in front of
//!   or behind it. The two groups are merged and the separator between them disappears.
//! - `beforeGroupContaining` / `afterGroupContaining`: move this entry's whole group in front of
//!   or behind the group holding the referenced entry. Only the first such rule that resolves
//!   counts for a group.
//!
//! ## Guarantees
//!
//! - [`sort_entries`] never fails and never modifies its input.
//! - Every non-separator entry appears exactly once in the output.
//! - Separators are normalized: none at the ends, never two in a row.
//! - References to unknown ids are skipped. Cycles are broken in favor of input order.
//! - The result depends only on input order, never on id values or hashing.
//!
//! ## Example
//!
//! ```
//! use understory_menu_sort::{Descriptor, sort_entries};
//!
//! let entries = [
//!     Descriptor::item("one"),
//!     Descriptor::separator(),
//!     Descriptor::item("two"),
//!     Descriptor::separator(),
//!     Descriptor::item("three").with_after(["one"]),
//!     Descriptor::separator(),
//! ];
//! let sorted = sort_entries(&entries);
//! let ids: Vec<_> = sorted
//!     .iter()
//!     .map(|d| d.id.as_deref().unwrap_or("|"))
//!     .collect();
//! assert_eq!(ids, ["one", "three", "|", "two"]);
//! ```
//!
//! Implement [`MenuEntry`] for your own template type to sort it directly.
//!
//! ## Features
//!
//! - `tracing`: emit `trace!` events when a reference is skipped or a cycle is broken.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod groups;
mod order;
pub mod sort;
pub mod types;

pub use sort::sort_entries;
pub use types::{Descriptor, EntryKind, MenuEntry};
