//! User management page (admins only).
//!
//! Opening the page checks the session role once; every later operation
//! acts on behalf of that admin. Saves and deletes go through the backend
//! before the local directory changes, and each change is appended to the
//! recent-activity feed.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use inventory::PageState;
use inventory::users::{
    UserAccount, UserDirectory, UserDraft, UserError, UserId, UserQuery, UserRole, UserSort, UserSortField,
    UserStats, UserStatus, UserView, validate_user,
};
use serde::Serialize;
use time::OffsetDateTime;
use tracing::info;

use super::session::{AccessError, Session};
use crate::net::api::{ApiError, Backend};
use crate::net::types::CurrentUser;

/// Entries kept in the recent-activity feed.
pub const ACTIVITY_LIMIT: usize = 20;

#[derive(Debug, thiserror::Error)]
pub enum UserAdminError {
    #[error(transparent)]
    User(#[from] UserError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    UserCreated,
    UserUpdated,
    UserActivated,
    UserDeactivated,
    UserDeleted,
    PasswordReset,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub kind: ActivityKind,
    pub message: String,
    pub details: String,
    #[serde(with = "time::serde::rfc3339")]
    pub at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct UserAdmin {
    actor: CurrentUser,
    directory: UserDirectory,
    query: UserQuery,
    activity: Vec<Activity>,
}

impl UserAdmin {
    /// # Errors
    ///
    /// Returns [`AccessError`] unless an admin is signed in.
    pub fn open(session: &Session, directory: UserDirectory) -> Result<Self, AccessError> {
        let actor = session.require_admin()?.clone();
        Ok(Self { actor, directory, query: UserQuery::default(), activity: Vec::new() })
    }

    #[must_use]
    pub fn directory(&self) -> &UserDirectory {
        &self.directory
    }

    #[must_use]
    pub fn query(&self) -> &UserQuery {
        &self.query
    }

    #[must_use]
    pub fn view(&self) -> UserView<'_> {
        self.query.apply(self.directory.users())
    }

    #[must_use]
    pub fn stats(&self, now: OffsetDateTime) -> UserStats {
        UserStats::compute(self.directory.users(), now)
    }

    /// Newest first.
    #[must_use]
    pub fn activity(&self) -> &[Activity] {
        &self.activity
    }

    // =========================================================================
    // QUERY INPUTS
    // =========================================================================

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
        self.first_page();
    }

    pub fn set_role_filter(&mut self, role: Option<UserRole>) {
        self.query.role = role;
        self.first_page();
    }

    pub fn set_status_filter(&mut self, status: Option<UserStatus>) {
        self.query.status = status;
        self.first_page();
    }

    /// Header click: same column flips direction, a new column starts ascending.
    pub fn sort_by(&mut self, field: UserSortField) {
        self.query.sort.toggle(field);
    }

    pub fn set_sort(&mut self, sort: UserSort) {
        self.query.sort = sort;
    }

    pub fn set_page(&mut self, number: usize) {
        let total_pages = self.view().total_pages;
        self.query.page = self.query.page.with_number(number).clamped(total_pages);
    }

    fn first_page(&mut self) {
        self.query.page = PageState::new(1, self.query.page.size());
    }

    // =========================================================================
    // OPERATIONS
    // =========================================================================

    /// # Errors
    ///
    /// Returns the validation errors, or the backend failure.
    pub async fn add(
        &mut self,
        backend: &dyn Backend,
        draft: UserDraft,
        now: OffsetDateTime,
    ) -> Result<UserId, UserAdminError> {
        validate_user(&draft).map_err(UserError::from)?;
        backend.save_user(&draft).await?;
        let id = self.directory.add(draft, &self.actor.name, now)?;
        let username = self.username(id);
        self.record(ActivityKind::UserCreated, "New user account created", format!("{username} added by {}", self.actor.name), now);
        Ok(id)
    }

    /// # Errors
    ///
    /// Returns the validation errors, an unknown id, or the backend failure.
    pub async fn update(
        &mut self,
        backend: &dyn Backend,
        id: UserId,
        draft: UserDraft,
        now: OffsetDateTime,
    ) -> Result<(), UserAdminError> {
        validate_user(&draft).map_err(UserError::from)?;
        if self.directory.get(id).is_none() {
            return Err(UserError::NotFound(id).into());
        }
        backend.save_user(&draft).await?;
        self.directory.update(id, draft)?;
        let username = self.username(id);
        self.record(ActivityKind::UserUpdated, "User updated", format!("{username} updated by {}", self.actor.name), now);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`UserError::NotFound`] if `id` is unknown.
    pub fn toggle_status(&mut self, id: UserId, now: OffsetDateTime) -> Result<UserStatus, UserAdminError> {
        let status = self.directory.toggle_status(id)?;
        let username = self.username(id);
        let (kind, message, verb) = match status {
            UserStatus::Active => (ActivityKind::UserActivated, "User account activated", "activated"),
            UserStatus::Inactive => (ActivityKind::UserDeactivated, "User account deactivated", "deactivated"),
        };
        self.record(kind, message, format!("{username} {verb} by {}", self.actor.name), now);
        Ok(status)
    }

    /// # Errors
    ///
    /// Returns an unknown id or the backend failure.
    pub async fn remove(
        &mut self,
        backend: &dyn Backend,
        id: UserId,
        now: OffsetDateTime,
    ) -> Result<UserAccount, UserAdminError> {
        if self.directory.get(id).is_none() {
            return Err(UserError::NotFound(id).into());
        }
        backend.delete_user(id).await?;
        let account = self.directory.remove(id)?;
        let total_pages = self.view().total_pages;
        self.query.page = self.query.page.clamped(total_pages);
        self.record(
            ActivityKind::UserDeleted,
            "User account deleted",
            format!("{} deleted by {}", account.username, self.actor.name),
            now,
        );
        Ok(account)
    }

    /// Mock reset; returns the notice shown to the admin.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::NotFound`] if `id` is unknown.
    pub fn reset_password(&mut self, id: UserId, now: OffsetDateTime) -> Result<String, UserAdminError> {
        let account = self.directory.get(id).ok_or(UserError::NotFound(id))?;
        let notice = format!("Password reset email sent to {}", account.email);
        let details = format!("password reset requested for {}", account.username);
        info!(%id, "password reset requested");
        self.record(ActivityKind::PasswordReset, "Password reset requested", details, now);
        Ok(notice)
    }

    fn username(&self, id: UserId) -> String {
        self.directory.get(id).map(|u| u.username.clone()).unwrap_or_default()
    }

    fn record(&mut self, kind: ActivityKind, message: &str, details: String, at: OffsetDateTime) {
        self.activity.insert(0, Activity { kind, message: message.to_owned(), details, at });
        self.activity.truncate(ACTIVITY_LIMIT);
    }
}
