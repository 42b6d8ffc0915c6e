//! Console user accounts: directory, list query, stats and validation.
//!
//! DESIGN
//! ======
//! Mirrors the server inventory on a smaller scale: a directory that owns
//! accounts and assigns ids, plus a pure query (search, role/status filter,
//! stable sort, paging) the user table derives from.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use tracing::info;

use crate::query::{PageState, SortDirection};
use crate::validate::{FieldErrors, is_valid_email};

pub const USERS_PAGE_SIZE: usize = 10;
pub const USERNAME_MIN_LEN: usize = 3;

static USERNAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_]+$").unwrap());

// =============================================================================
// TYPES
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
}

impl UserRole {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

impl UserStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Active,
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownValue {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for UserRole {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            _ => Err(UnknownValue { kind: "role", value: s.to_owned() }),
        }
    }
}

impl FromStr for UserStatus {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            _ => Err(UnknownValue { kind: "status", value: s.to_owned() }),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub last_login: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub created_by: String,
}

/// Add/edit modal input.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserDraft {
    pub username: String,
    pub email: String,
    pub role: Option<UserRole>,
    pub status: UserStatus,
}

impl UserDraft {
    #[must_use]
    pub fn from_account(account: &UserAccount) -> Self {
        Self {
            username: account.username.clone(),
            email: account.email.clone(),
            role: Some(account.role),
            status: account.status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserError {
    #[error("user not found: {0}")]
    NotFound(UserId),
    #[error("invalid user: {0}")]
    Invalid(#[from] FieldErrors),
    #[error("no user ids left after {0}")]
    IdsExhausted(UserId),
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Validate the add/edit modal.
///
/// # Errors
///
/// Returns per-field messages for `username`, `email` and `role`.
pub fn validate_user(draft: &UserDraft) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    let username = draft.username.trim();
    if username.is_empty() {
        errors.insert("username", "Username is required");
    } else if username.chars().count() < USERNAME_MIN_LEN {
        errors.insert("username", "Username must be at least 3 characters");
    } else if !USERNAME.is_match(username) {
        errors.insert("username", "Username can only contain letters, numbers, and underscores");
    }

    let email = draft.email.trim();
    if email.is_empty() {
        errors.insert("email", "Email is required");
    } else if !is_valid_email(email) {
        errors.insert("email", "Please enter a valid email address");
    }

    if draft.role.is_none() {
        errors.insert("role", "Role is required");
    }

    errors.into_result()
}

// =============================================================================
// DIRECTORY
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserDirectory {
    users: Vec<UserAccount>,
}

impl UserDirectory {
    #[must_use]
    pub fn new(users: Vec<UserAccount>) -> Self {
        Self { users }
    }

    #[must_use]
    pub fn seeded() -> Self {
        Self::new(crate::seed::users())
    }

    #[must_use]
    pub fn users(&self) -> &[UserAccount] {
        &self.users
    }

    #[must_use]
    pub fn get(&self, id: UserId) -> Option<&UserAccount> {
        self.users.iter().find(|user| user.id == id)
    }

    fn get_mut(&mut self, id: UserId) -> Result<&mut UserAccount, UserError> {
        self.users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or(UserError::NotFound(id))
    }

    /// Create an account; it has never logged in.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::Invalid`] if the draft fails validation, or
    /// [`UserError::IdsExhausted`] if an account already holds `u64::MAX`.
    pub fn add(&mut self, draft: UserDraft, created_by: &str, now: OffsetDateTime) -> Result<UserId, UserError> {
        validate_user(&draft)?;
        let max = self.users.iter().map(|user| user.id.0).max().unwrap_or(0);
        let id = max.checked_add(1).map(UserId).ok_or(UserError::IdsExhausted(UserId(max)))?;
        let account = UserAccount {
            id,
            username: draft.username.trim().to_owned(),
            email: draft.email.trim().to_owned(),
            role: draft.role.unwrap_or(UserRole::User),
            status: draft.status,
            last_login: None,
            created_at: now,
            created_by: created_by.to_owned(),
        };
        info!(%id, username = %account.username, "user added");
        self.users.push(account);
        Ok(id)
    }

    /// Merge the draft into an existing account.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::NotFound`] or [`UserError::Invalid`].
    pub fn update(&mut self, id: UserId, draft: UserDraft) -> Result<(), UserError> {
        validate_user(&draft)?;
        let account = self.get_mut(id)?;
        account.username = draft.username.trim().to_owned();
        account.email = draft.email.trim().to_owned();
        if let Some(role) = draft.role {
            account.role = role;
        }
        account.status = draft.status;
        info!(%id, username = %account.username, "user updated");
        Ok(())
    }

    /// Flip active/inactive; returns the new status.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::NotFound`] if `id` is unknown.
    pub fn toggle_status(&mut self, id: UserId) -> Result<UserStatus, UserError> {
        let account = self.get_mut(id)?;
        account.status = account.status.toggled();
        info!(%id, status = %account.status, "user status toggled");
        Ok(account.status)
    }

    /// # Errors
    ///
    /// Returns [`UserError::NotFound`] if `id` is unknown.
    pub fn remove(&mut self, id: UserId) -> Result<UserAccount, UserError> {
        let index = self
            .users
            .iter()
            .position(|user| user.id == id)
            .ok_or(UserError::NotFound(id))?;
        let account = self.users.remove(index);
        info!(%id, username = %account.username, "user removed");
        Ok(account)
    }
}

// =============================================================================
// QUERY
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UserSortField {
    Username,
    Email,
    Role,
    Status,
    LastLogin,
}

impl FromStr for UserSortField {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['_', '-'], "").as_str() {
            "username" => Ok(Self::Username),
            "email" => Ok(Self::Email),
            "role" => Ok(Self::Role),
            "status" => Ok(Self::Status),
            "lastlogin" => Ok(Self::LastLogin),
            _ => Err(UnknownValue { kind: "user sort field", value: s.to_owned() }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSort {
    pub field: UserSortField,
    pub direction: SortDirection,
}

impl Default for UserSort {
    fn default() -> Self {
        Self { field: UserSortField::Username, direction: SortDirection::Ascending }
    }
}

impl UserSort {
    pub fn toggle(&mut self, field: UserSortField) {
        if self.field == field {
            self.direction = self.direction.flipped();
        } else {
            self.field = field;
            self.direction = SortDirection::Ascending;
        }
    }

    /// Never-logged-in accounts sort before any login time.
    #[must_use]
    pub fn compare(&self, a: &UserAccount, b: &UserAccount) -> Ordering {
        let ordering = match self.field {
            UserSortField::Username => a.username.cmp(&b.username),
            UserSortField::Email => a.email.cmp(&b.email),
            UserSortField::Role => a.role.as_str().cmp(b.role.as_str()),
            UserSortField::Status => a.status.as_str().cmp(b.status.as_str()),
            UserSortField::LastLogin => a.last_login.cmp(&b.last_login),
        };
        self.direction.apply(ordering)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserQuery {
    pub search: String,
    /// `None` means all roles.
    pub role: Option<UserRole>,
    /// `None` means all statuses.
    pub status: Option<UserStatus>,
    pub sort: UserSort,
    pub page: PageState,
}

impl Default for UserQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            role: None,
            status: None,
            sort: UserSort::default(),
            page: PageState::first(USERS_PAGE_SIZE),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UserView<'a> {
    pub visible: Vec<&'a UserAccount>,
    pub total_matched: usize,
    pub total_pages: usize,
}

impl UserQuery {
    /// Search covers username and email only.
    #[must_use]
    pub fn matches(&self, user: &UserAccount) -> bool {
        let needle = self.search.to_lowercase();
        let text_match = needle.is_empty()
            || user.username.to_lowercase().contains(&needle)
            || user.email.to_lowercase().contains(&needle);
        text_match
            && self.role.is_none_or(|role| user.role == role)
            && self.status.is_none_or(|status| user.status == status)
    }

    #[must_use]
    pub fn apply<'a>(&self, users: &'a [UserAccount]) -> UserView<'a> {
        let mut matched: Vec<&UserAccount> = users.iter().filter(|user| self.matches(user)).collect();
        matched.sort_by(|a, b| self.sort.compare(a, b));
        let total_matched = matched.len();
        let total_pages = self.page.total_pages(total_matched);
        let visible = matched
            .into_iter()
            .skip(self.page.offset())
            .take(self.page.size())
            .collect();
        UserView { visible, total_matched, total_pages }
    }
}

// =============================================================================
// STATS
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_users: usize,
    pub active_users: usize,
    pub admin_users: usize,
    /// Accounts with a login in the 24 hours before `now`.
    pub recent_logins: usize,
}

impl UserStats {
    #[must_use]
    pub fn compute(users: &[UserAccount], now: OffsetDateTime) -> Self {
        let window = Duration::hours(24);
        Self {
            total_users: users.len(),
            active_users: users.iter().filter(|u| u.status == UserStatus::Active).count(),
            admin_users: users.iter().filter(|u| u.role == UserRole::Admin).count(),
            recent_logins: users
                .iter()
                .filter(|u| u.last_login.is_some_and(|at| now - at < window))
                .count(),
        }
    }
}
