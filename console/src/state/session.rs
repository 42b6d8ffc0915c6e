//! Who is signed in, plus the persisted UI flags around them.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages receive the [`Session`] explicitly instead of reading globals. It is
//! the only writer of the preference store, so theme, sidebar and signed-in
//! user stay consistent with what is persisted.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use tracing::info;

use crate::net::types::CurrentUser;
use crate::util::preferences::{MemoryPreferences, PreferenceError, PreferenceStore, load_json, save_json};
use crate::util::sidebar::SidebarState;
use crate::util::theme::{self, Theme};

pub const USER_KEY: &str = "user";

/// Viewport assumed when no front-end reports one.
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    #[error("not signed in")]
    NotSignedIn,
    #[error("administrator role required")]
    AdminRequired,
}

pub struct Session {
    store: Box<dyn PreferenceStore>,
    user: Option<CurrentUser>,
    theme: Theme,
    sidebar: SidebarState,
    viewport_width: u32,
}

impl Session {
    /// Restore theme, sidebar and any remembered user from `store`.
    #[must_use]
    pub fn new(store: Box<dyn PreferenceStore>, viewport_width: u32) -> Self {
        let theme = theme::read_preference(store.as_ref());
        let sidebar = SidebarState::load(store.as_ref(), viewport_width);
        let user = load_json::<CurrentUser>(store.as_ref(), USER_KEY);
        Self { store, user, theme, sidebar, viewport_width }
    }

    /// Fresh session backed by memory only.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryPreferences::new()), DEFAULT_VIEWPORT_WIDTH)
    }

    #[must_use]
    pub fn user(&self) -> Option<&CurrentUser> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn sidebar(&self) -> &SidebarState {
        &self.sidebar
    }

    #[must_use]
    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    #[must_use]
    pub fn preferences(&self) -> &dyn PreferenceStore {
        self.store.as_ref()
    }

    /// # Errors
    ///
    /// Returns [`AccessError::NotSignedIn`] when nobody is signed in.
    pub fn require_user(&self) -> Result<&CurrentUser, AccessError> {
        self.user.as_ref().ok_or(AccessError::NotSignedIn)
    }

    /// # Errors
    ///
    /// Returns [`AccessError`] unless an admin is signed in.
    pub fn require_admin(&self) -> Result<&CurrentUser, AccessError> {
        let user = self.require_user()?;
        if user.is_admin() { Ok(user) } else { Err(AccessError::AdminRequired) }
    }

    /// Remember `user` as signed in.
    ///
    /// # Errors
    ///
    /// Returns an error if the user cannot be persisted.
    pub fn sign_in(&mut self, user: CurrentUser) -> Result<(), PreferenceError> {
        save_json(self.store.as_mut(), USER_KEY, &user)?;
        info!(username = %user.username, role = %user.role, "signed in");
        self.user = Some(user);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if the stored user cannot be removed.
    pub fn sign_out(&mut self) -> Result<(), PreferenceError> {
        self.store.remove(USER_KEY)?;
        if let Some(user) = self.user.take() {
            info!(username = %user.username, "signed out");
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if the theme cannot be persisted.
    pub fn toggle_theme(&mut self) -> Result<Theme, PreferenceError> {
        self.theme = theme::toggle(self.store.as_mut(), self.theme)?;
        Ok(self.theme)
    }

    /// # Errors
    ///
    /// Returns an error if the theme cannot be persisted.
    pub fn set_theme(&mut self, next: Theme) -> Result<(), PreferenceError> {
        theme::save(self.store.as_mut(), next)?;
        self.theme = next;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if the collapse flag cannot be persisted.
    pub fn toggle_sidebar(&mut self) -> Result<(), PreferenceError> {
        self.sidebar.toggle(self.store.as_mut(), self.viewport_width)
    }

    /// # Errors
    ///
    /// Returns an error if the collapse flag cannot be persisted.
    pub fn set_sidebar_collapsed(&mut self, collapsed: bool) -> Result<(), PreferenceError> {
        self.sidebar.set_collapsed(self.store.as_mut(), collapsed)
    }

    pub fn close_mobile_sidebar(&mut self) {
        self.sidebar.close_mobile();
    }

    pub fn resize(&mut self, viewport_width: u32) {
        self.viewport_width = viewport_width;
        self.sidebar.resized(viewport_width);
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("user", &self.user)
            .field("theme", &self.theme)
            .field("sidebar", &self.sidebar)
            .field("viewport_width", &self.viewport_width)
            .finish_non_exhaustive()
    }
}
