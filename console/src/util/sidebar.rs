//! Sidebar collapse state and the role-gated navigation it shows.
//!
//! DESIGN
//! ======
//! Wide viewports collapse the sidebar in place and remember that choice
//! under `sidebarCollapsed`. Narrow viewports never collapse; the toggle
//! opens a transient overlay instead, which is not persisted and closes as
//! soon as the viewport widens.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use inventory::users::UserRole;
use tracing::debug;

use super::preferences::{PreferenceError, PreferenceStore, load_json, save_json};

pub const SIDEBAR_KEY: &str = "sidebarCollapsed";

/// Viewports narrower than this use the mobile overlay.
pub const DESKTOP_MIN_WIDTH: u32 = 1024;

#[must_use]
pub fn is_narrow(viewport_width: u32) -> bool {
    viewport_width < DESKTOP_MIN_WIDTH
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SidebarState {
    collapsed: bool,
    mobile_open: bool,
}

impl SidebarState {
    /// Saved collapse flag, or collapsed-when-narrow if nothing is saved.
    pub fn load(store: &dyn PreferenceStore, viewport_width: u32) -> Self {
        let collapsed = load_json::<bool>(store, SIDEBAR_KEY).unwrap_or_else(|| is_narrow(viewport_width));
        Self { collapsed, mobile_open: false }
    }

    #[must_use]
    pub fn collapsed(&self) -> bool {
        self.collapsed
    }

    #[must_use]
    pub fn mobile_open(&self) -> bool {
        self.mobile_open
    }

    /// Header toggle button.
    ///
    /// # Errors
    ///
    /// Returns an error if the collapse flag cannot be persisted.
    pub fn toggle(&mut self, store: &mut dyn PreferenceStore, viewport_width: u32) -> Result<(), PreferenceError> {
        if is_narrow(viewport_width) {
            self.mobile_open = !self.mobile_open;
            debug!(open = self.mobile_open, "mobile sidebar toggled");
            Ok(())
        } else {
            self.set_collapsed(store, !self.collapsed)
        }
    }

    /// # Errors
    ///
    /// Returns an error if the flag cannot be persisted.
    pub fn set_collapsed(&mut self, store: &mut dyn PreferenceStore, collapsed: bool) -> Result<(), PreferenceError> {
        save_json(store, SIDEBAR_KEY, &collapsed)?;
        self.collapsed = collapsed;
        debug!(collapsed, "sidebar collapse saved");
        Ok(())
    }

    pub fn close_mobile(&mut self) {
        self.mobile_open = false;
    }

    /// Viewport resize; widening past the breakpoint closes the overlay.
    pub fn resized(&mut self, viewport_width: u32) {
        if !is_narrow(viewport_width) {
            self.mobile_open = false;
        }
    }
}

// =============================================================================
// NAVIGATION
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub section: &'static str,
    pub label: &'static str,
    pub path: &'static str,
    pub role_required: Option<UserRole>,
}

pub static NAV_ITEMS: [NavItem; 5] = [
    NavItem { section: "Dashboard", label: "Dashboard", path: "/dashboard", role_required: None },
    NavItem {
        section: "Server Management",
        label: "Server Inventory",
        path: "/server-inventory-management",
        role_required: None,
    },
    NavItem { section: "Server Management", label: "Add/Edit Server", path: "/add-edit-server", role_required: None },
    NavItem { section: "Server Management", label: "Import/Export", path: "/excel-import-export", role_required: None },
    NavItem {
        section: "Administration",
        label: "User Management",
        path: "/user-management-admin",
        role_required: Some(UserRole::Admin),
    },
];

/// Navigation entries a user with `role` may see.
pub fn visible_items(role: UserRole) -> impl Iterator<Item = &'static NavItem> {
    NAV_ITEMS
        .iter()
        .filter(move |item| item.role_required.is_none_or(|required| required == role))
}
