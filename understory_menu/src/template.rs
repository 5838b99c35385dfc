// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu templates: the serde form of a menu description.
//!
//! Keys follow the camelCase template format used by desktop toolkits:
//!
//! ```json
//! [
//!   { "id": "open", "label": "Open…", "accelerator": "CmdOrCtrl+O" },
//!   { "type": "separator" },
//!   { "label": "Recent", "submenu": [], "afterGroupContaining": ["open"] }
//! ]
//! ```
//!
//! Unrecognized keys are kept in [`MenuItemTemplate::extra`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use understory_menu_sort::{EntryKind, MenuEntry};

/// Kind of a menu item, the template's `type` key.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Plain command item.
    #[default]
    Normal,
    /// Group separator.
    Separator,
    /// Item that opens a nested menu.
    Submenu,
    /// Item with an independent checked state.
    Checkbox,
    /// Item whose checked state is exclusive within its group.
    Radio,
}

/// One entry of a menu template.
///
/// All recognized keys are optional; `null` is accepted wherever a value is
/// optional and means the same as leaving the key out.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemTemplate {
    /// Identifier used by placement references and [`Menu::item_by_id`](crate::Menu::item_by_id).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Item kind. Defaults to `submenu` when [`Self::submenu`] is set, `normal` otherwise.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ItemKind>,
    /// Accelerator text, kept verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accelerator: Option<String>,
    /// Defaults to `true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Defaults to `true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    /// Defaults to `false`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
    /// Ids this item should precede within its group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<Vec<String>>,
    /// Ids this item should follow within its group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<Vec<String>>,
    /// Ids whose group this item's group should precede.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_group_containing: Option<Vec<String>>,
    /// Ids whose group this item's group should follow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_group_containing: Option<Vec<String>>,
    /// Nested entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submenu: Option<Vec<MenuItemTemplate>>,
    /// Every other key, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MenuItemTemplate {
    /// A normal item with a label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Default::default()
        }
    }

    /// A separator.
    pub fn separator() -> Self {
        Self {
            kind: Some(ItemKind::Separator),
            ..Default::default()
        }
    }

    /// Set the id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the kind.
    #[must_use]
    pub fn with_kind(mut self, kind: ItemKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Set nested entries.
    #[must_use]
    pub fn with_submenu(mut self, entries: impl Into<Vec<Self>>) -> Self {
        self.submenu = Some(entries.into());
        self
    }

    /// Attach an extra field.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Add `before` references.
    #[must_use]
    pub fn with_before<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend(&mut self.before, ids);
        self
    }

    /// Add `after` references.
    #[must_use]
    pub fn with_after<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend(&mut self.after, ids);
        self
    }

    /// Add `beforeGroupContaining` references.
    #[must_use]
    pub fn with_before_group<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend(&mut self.before_group_containing, ids);
        self
    }

    /// Add `afterGroupContaining` references.
    #[must_use]
    pub fn with_after_group<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend(&mut self.after_group_containing, ids);
        self
    }

    /// Kind after applying the defaulting rules.
    pub fn resolved_kind(&self) -> ItemKind {
        match (self.kind, &self.submenu) {
            (Some(kind), _) => kind,
            (None, Some(_)) => ItemKind::Submenu,
            (None, None) => ItemKind::Normal,
        }
    }
}

fn extend<I, S>(list: &mut Option<Vec<String>>, ids: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    list.get_or_insert_with(Vec::new)
        .extend(ids.into_iter().map(Into::into));
}

fn ids(list: &Option<Vec<String>>) -> &[String] {
    list.as_deref().unwrap_or(&[])
}

impl MenuEntry for MenuItemTemplate {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn kind(&self) -> EntryKind {
        match self.kind {
            Some(ItemKind::Separator) => EntryKind::Separator,
            _ => EntryKind::Normal,
        }
    }

    fn before_ids(&self) -> &[String] {
        ids(&self.before)
    }

    fn after_ids(&self) -> &[String] {
        ids(&self.after)
    }

    fn before_group_ids(&self) -> &[String] {
        ids(&self.before_group_containing)
    }

    fn after_group_ids(&self) -> &[String] {
        ids(&self.after_group_containing)
    }

    fn separator() -> Self {
        Self::separator()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_camel_case_keys_and_keeps_extras() {
        let t: MenuItemTemplate = serde_json::from_value(json!({
            "id": "recent",
            "label": "Recent",
            "afterGroupContaining": ["open"],
            "beforeGroupContaining": null,
            "extra": "field",
            "icon": { "name": "clock" }
        }))
        .unwrap();
        assert_eq!(t.id.as_deref(), Some("recent"));
        assert_eq!(t.after_group_ids(), ["open"]);
        assert!(t.before_group_ids().is_empty());
        assert_eq!(t.extra.get("extra"), Some(&json!("field")));
        assert_eq!(t.extra.get("icon"), Some(&json!({ "name": "clock" })));
        assert_eq!(t.extra.len(), 2);
    }

    #[test]
    fn null_values_are_accepted() {
        let ts: Vec<MenuItemTemplate> = serde_json::from_value(json!([
            { "label": "text", "accelerator": null },
            { "label": "text again", "accelerator": null, "enabled": null }
        ]))
        .unwrap();
        assert!(ts.iter().all(|t| t.accelerator.is_none()));
    }

    #[test]
    fn type_key_selects_kind() {
        let t: MenuItemTemplate = serde_json::from_value(json!({ "type": "separator" })).unwrap();
        assert!(t.is_separator());
        let t: MenuItemTemplate = serde_json::from_value(json!({ "type": "checkbox" })).unwrap();
        assert_eq!(t.resolved_kind(), ItemKind::Checkbox);
        assert!(!t.is_separator());
    }

    #[test]
    fn submenu_implies_submenu_kind() {
        let t = MenuItemTemplate::new("View").with_submenu([MenuItemTemplate::new("Zoom")]);
        assert_eq!(t.resolved_kind(), ItemKind::Submenu);
        assert_eq!(MenuItemTemplate::new("x").resolved_kind(), ItemKind::Normal);
    }

    #[test]
    fn serializes_back_without_absent_keys() {
        let t = MenuItemTemplate::new("Open")
            .with_id("open")
            .with_after(["new"])
            .with_extra("extra", "field");
        let v = serde_json::to_value(&t).unwrap();
        assert_eq!(
            v,
            json!({ "id": "open", "label": "Open", "after": ["new"], "extra": "field" })
        );
        let back: MenuItemTemplate = serde_json::from_value(v).unwrap();
        assert_eq!(back, t);
    }
}
