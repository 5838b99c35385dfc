// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Process-wide application menu slot.
//!
//! The host installs the menu it shows in the menu bar with
//! [`set_application_menu`] and clears it by passing `None`. Readers get a
//! shared handle, so the slot is never locked while a menu is in use.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::menu::Menu;

static APPLICATION_MENU: Mutex<Option<Arc<Menu>>> = Mutex::new(None);

/// Install `menu` as the application menu, or clear it with `None`.
///
/// Returns the previously installed menu, if any.
pub fn set_application_menu(menu: Option<Menu>) -> Option<Arc<Menu>> {
    let mut slot = APPLICATION_MENU.lock();
    core::mem::replace(&mut *slot, menu.map(Arc::new))
}

/// The current application menu, if one is installed.
pub fn application_menu() -> Option<Arc<Menu>> {
    APPLICATION_MENU.lock().clone()
}
