// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Built menu items.

use serde_json::{Map, Value};
use understory_menu_sort::{EntryKind, MenuEntry};

use crate::menu::Menu;
use crate::template::{ItemKind, MenuItemTemplate};

bitflags::bitflags! {
    /// Item state flags.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ItemFlags: u8 {
        /// Item can be activated.
        const ENABLED = 0b0000_0001;
        /// Item is shown.
        const VISIBLE = 0b0000_0010;
        /// Checkbox or radio item is checked.
        const CHECKED = 0b0000_0100;
    }
}

impl Default for ItemFlags {
    fn default() -> Self {
        Self::ENABLED | Self::VISIBLE
    }
}

/// A menu item built from a [`MenuItemTemplate`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MenuItem {
    /// Identifier, if the template had one.
    pub id: Option<String>,
    /// Display label; empty when the template had none.
    pub label: String,
    /// Resolved kind (see [`MenuItemTemplate::resolved_kind`]).
    pub kind: ItemKind,
    /// Accelerator text, kept verbatim.
    pub accelerator: Option<String>,
    /// Enabled, visible, and checked state.
    pub flags: ItemFlags,
    /// Nested menu for [`ItemKind::Submenu`] items.
    pub submenu: Option<Menu>,
    /// `before` references, as written in the template.
    pub before: Vec<String>,
    /// `after` references, as written in the template.
    pub after: Vec<String>,
    /// `beforeGroupContaining` references, as written in the template.
    pub before_group_containing: Vec<String>,
    /// `afterGroupContaining` references, as written in the template.
    pub after_group_containing: Vec<String>,
    /// Pass-through fields from the template.
    pub extra: Map<String, Value>,
}

impl MenuItem {
    /// A normal item with a label and default flags.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    /// A separator item.
    pub fn separator() -> Self {
        Self {
            kind: ItemKind::Separator,
            ..Default::default()
        }
    }

    /// Build an item from a template.
    ///
    /// A nested `submenu` is sorted and built on its own. A `submenu` item
    /// without entries gets an empty menu. Placement references are kept, so
    /// built items can be sorted again.
    pub fn from_template(template: &MenuItemTemplate) -> Self {
        let kind = template.resolved_kind();
        let mut flags = ItemFlags::empty();
        flags.set(ItemFlags::ENABLED, template.enabled.unwrap_or(true));
        flags.set(ItemFlags::VISIBLE, template.visible.unwrap_or(true));
        flags.set(ItemFlags::CHECKED, template.checked.unwrap_or(false));
        let submenu = match (&template.submenu, kind) {
            (Some(entries), _) => Some(Menu::build_from_template(entries)),
            (None, ItemKind::Submenu) => Some(Menu::new()),
            (None, _) => None,
        };
        Self {
            id: template.id.clone(),
            label: template.label.clone().unwrap_or_default(),
            kind,
            accelerator: template.accelerator.clone(),
            flags,
            submenu,
            before: template.before_ids().to_vec(),
            after: template.after_ids().to_vec(),
            before_group_containing: template.before_group_ids().to_vec(),
            after_group_containing: template.after_group_ids().to_vec(),
            extra: template.extra.clone(),
        }
    }

    /// Set the id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Whether the item can be activated.
    pub fn is_enabled(&self) -> bool {
        self.flags.contains(ItemFlags::ENABLED)
    }

    /// Whether the item is shown.
    pub fn is_visible(&self) -> bool {
        self.flags.contains(ItemFlags::VISIBLE)
    }

    /// Whether the item is checked.
    pub fn is_checked(&self) -> bool {
        self.flags.contains(ItemFlags::CHECKED)
    }

    /// Enable or disable the item.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.flags.set(ItemFlags::ENABLED, enabled);
    }

    /// Show or hide the item.
    pub fn set_visible(&mut self, visible: bool) {
        self.flags.set(ItemFlags::VISIBLE, visible);
    }

    /// Check or uncheck the item.
    pub fn set_checked(&mut self, checked: bool) {
        self.flags.set(ItemFlags::CHECKED, checked);
    }

    /// Look up an extra field carried over from the template.
    pub fn extra(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

impl MenuEntry for MenuItem {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn kind(&self) -> EntryKind {
        match self.kind {
            ItemKind::Separator => EntryKind::Separator,
            _ => EntryKind::Normal,
        }
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
