// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Menu`] container.
//!
//! ## Building
//!
//! [`Menu::build_from_template`] sorts the template entries with
//! [`understory_menu_sort::sort_entries`] and builds one [`MenuItem`] per
//! sorted entry. Nested submenus are sorted on their own. The template is
//! borrowed and never modified.
//!
//! ## Editing
//!
//! [`Menu::append`] and [`Menu::insert`] place items exactly where asked.
//! Placement references only apply at build time.

use understory_menu_sort::sort_entries;

use crate::error::MenuError;
use crate::item::MenuItem;
use crate::template::MenuItemTemplate;

/// An ordered list of menu items.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    /// Create an empty menu.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a menu from template entries, honoring their placement references.
    pub fn build_from_template(template: &[MenuItemTemplate]) -> Self {
        let items: Vec<MenuItem> = sort_entries(template)
            .iter()
            .map(MenuItem::from_template)
            .collect();
        #[cfg(feature = "tracing")]
        tracing::debug!(
            entries = template.len(),
            items = items.len(),
            "built menu from template"
        );
        Self { items }
    }

    /// Parse a JSON array of template entries and build it.
    pub fn from_json(json: &str) -> Result<Self, MenuError> {
        let template: Vec<MenuItemTemplate> = serde_json::from_str(json)?;
        Ok(Self::build_from_template(&template))
    }

    /// Items in display order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Number of top-level items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if there are no top-level items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add an item at the end.
    pub fn append(&mut self, item: MenuItem) {
        self.items.push(item);
    }

    /// Insert an item at `index`, shifting later items down.
    ///
    /// `index` may equal [`Menu::len`] to append.
    pub fn insert(&mut self, index: usize, item: MenuItem) -> Result<(), MenuError> {
        let len = self.items.len();
        if index > len {
            return Err(MenuError::IndexOutOfBounds { index, len });
        }
        self.items.insert(index, item);
        Ok(())
    }

    /// Find an item by id, searching submenus depth-first. The first match wins.
    pub fn item_by_id(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find_map(|item| {
            if item.id.as_deref() == Some(id) {
                return Some(item);
            }
            item.submenu.as_ref().and_then(|sub| sub.item_by_id(id))
        })
    }

    /// Mutable variant of [`Menu::item_by_id`].
    pub fn item_by_id_mut(&mut self, id: &str) -> Option<&mut MenuItem> {
        for item in &mut self.items {
            if item.id.as_deref() == Some(id) {
                return Some(item);
            }
            if let Some(found) = item.submenu.as_mut().and_then(|sub| sub.item_by_id_mut(id)) {
                return Some(found);
            }
        }
        None
    }
}

impl From<Vec<MenuItem>> for Menu {
    fn from(items: Vec<MenuItem>) -> Self {
        Self { items }
    }
}
