// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the sorter: entry kinds, the [`MenuEntry`] trait, and a plain [`Descriptor`].
//!
//! ## Overview
//!
//! The sorter never looks at anything but the accessors of [`MenuEntry`].
//! Toolkits implement the trait on their own template type so that labels, icons,
//! and any other fields ride along untouched.

use alloc::string::String;
use alloc::vec::Vec;

/// Whether an entry is a regular item or a separator.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum EntryKind {
    /// Any non-separator entry (plain item, checkbox, radio, submenu, ...).
    #[default]
    Normal,
    /// A separator. Separators bound groups and are never addressable.
    Separator,
}

/// An entry that can be ordered by [`sort_entries`](crate::sort::sort_entries).
///
/// Only [`MenuEntry::kind`] and [`MenuEntry::separator`] are required.
/// The constraint accessors default to empty lists, and [`MenuEntry::id`] defaults to `None`.
///
/// Constraint lists on separators are ignored, as is a separator's id.
pub trait MenuEntry {
    /// Identifier used to resolve constraints that reference this entry.
    fn id(&self) -> Option<&str> {
        None
    }

    /// Whether this entry is a separator.
    fn kind(&self) -> EntryKind;

    /// Ids this entry should be placed in front of, within the same group.
    fn before_ids(&self) -> &[String] {
        &[]
    }

    /// Ids this entry should be placed behind, within the same group.
    fn after_ids(&self) -> &[String] {
        &[]
    }

    /// Ids whose group this entry's whole group should precede.
    fn before_group_ids(&self) -> &[String] {
        &[]
    }

    /// Ids whose group this entry's whole group should follow.
    fn after_group_ids(&self) -> &[String] {
        &[]
    }

    /// Build a fresh separator.
    ///
    /// Used when a group that had no separator in front of it ends up after another group.
    fn separator() -> Self
    where
        Self: Sized;

    /// Convenience for `self.kind() == EntryKind::Separator`.
    #[inline]
    fn is_separator(&self) -> bool {
        self.kind() == EntryKind::Separator
    }
}

/// A minimal owned entry: an id, a kind, and the four constraint lists.
///
/// Handy for tests and for callers that keep their payload elsewhere and only
/// need the resulting order.
///
/// ```
/// use understory_menu_sort::{Descriptor, sort_entries};
///
/// let entries = [
///     Descriptor::item("2"),
///     Descriptor::item("3"),
///     Descriptor::item("1").with_before(["2"]),
/// ];
/// let ids: Vec<_> = sort_entries(&entries)
///     .into_iter()
///     .map(|d| d.id.unwrap_or_default())
///     .collect();
/// assert_eq!(ids, ["1", "2", "3"]);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Descriptor {
    /// Optional identifier.
    pub id: Option<String>,
    /// Item or separator.
    pub kind: EntryKind,
    /// See [`MenuEntry::before_ids`].
    pub before: Vec<String>,
    /// See [`MenuEntry::after_ids`].
    pub after: Vec<String>,
    /// See [`MenuEntry::before_group_ids`].
    pub before_group_containing: Vec<String>,
    /// See [`MenuEntry::after_group_ids`].
    pub after_group_containing: Vec<String>,
}

impl Descriptor {
    /// A normal entry with the given id and no constraints.
    pub fn item(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    /// A normal entry without an id. It can carry constraints but nothing can refer to it.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A separator.
    pub fn separator() -> Self {
        Self {
            kind: EntryKind::Separator,
            ..Default::default()
        }
    }

    /// Add `before` references.
    #[must_use]
    pub fn with_before<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.before.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Add `after` references.
    #[must_use]
    pub fn with_after<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.after.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Add `beforeGroupContaining` references.
    #[must_use]
    pub fn with_before_group<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.before_group_containing
            .extend(ids.into_iter().map(Into::into));
        self
    }

    /// Add `afterGroupContaining` references.
    #[must_use]
    pub fn with_after_group<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.after_group_containing
            .extend(ids.into_iter().map(Into::into));
        self
    }
}

impl MenuEntry for Descriptor {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn kind(&self) -> EntryKind {
        self.kind
    }

    fn before_ids(&self) -> &[String] {
        &self.before
    }

    fn after_ids(&self) -> &[String] {
        &self.after
    }

    fn before_group_ids(&self) -> &[String] {
        &self.before_group_containing
    }

    fn after_group_ids(&self) -> &[String] {
        &self.after_group_containing
    }

    fn separator() -> Self {
        Self::separator()
    }
}
