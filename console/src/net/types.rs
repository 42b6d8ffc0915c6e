//! Payloads exchanged with the backend.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use inventory::users::UserRole;
use serde::{Deserialize, Serialize};

/// Login form submission.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// The authenticated operator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub username: String,
    /// Display name shown in the header.
    pub name: String,
    pub role: UserRole,
}

impl CurrentUser {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

/// Upload processing progress, reported once per step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ImportProgress {
    pub step: u32,
    pub steps: u32,
}

impl ImportProgress {
    /// Whole-number percentage, 0 to 100.
    #[must_use]
    pub fn percent(&self) -> u32 {
        if self.steps == 0 {
            return 100;
        }
        (self.step.min(self.steps) * 100) / self.steps
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.step >= self.steps
    }
}
