//! Login form: field validation, attempt counting and lockout.
//!
//! A locked form refuses to submit without contacting the backend. The lock
//! lasts for the life of the form; there is no timed unlock.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::sync::LazyLock;

use inventory::FieldErrors;
use regex::Regex;
use tracing::{info, warn};

use crate::net::api::{ApiError, Backend};
use crate::net::types::{Credentials, CurrentUser};
use crate::state::session::Session;
use crate::util::preferences::PreferenceError;

pub const MIN_PASSWORD_LEN: usize = 6;

static LOGIN_EMAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("{0}")]
    Invalid(FieldErrors),
    #[error(
        "Account temporarily locked due to multiple failed attempts. Please try again in 15 minutes or contact your administrator."
    )]
    Locked,
    #[error("Invalid username or password. {remaining} attempts remaining before account lockout.")]
    Rejected { remaining: u32 },
    #[error("Account locked due to multiple failed attempts. Please contact your administrator.")]
    LockedOut,
    #[error(transparent)]
    Api(ApiError),
    #[error(transparent)]
    Preferences(#[from] PreferenceError),
}

/// Check the form before it is sent.
///
/// # Errors
///
/// Returns messages keyed `username` and `password`.
pub fn validate_login(credentials: &Credentials) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    let username = credentials.username.trim();
    if username.is_empty() {
        errors.insert("username", "Username or email is required");
    } else if username.contains('@') && !LOGIN_EMAIL.is_match(username) {
        errors.insert("username", "Please enter a valid email address");
    }

    if credentials.password.is_empty() {
        errors.insert("password", "Password is required");
    } else if credentials.password.chars().count() < MIN_PASSWORD_LEN {
        errors.insert("password", "Password must be at least 6 characters");
    }

    errors.into_result()
}

#[derive(Debug, Clone)]
pub struct LoginForm {
    max_attempts: u32,
    attempts: u32,
}

impl LoginForm {
    #[must_use]
    pub fn new(max_attempts: u32) -> Self {
        Self { max_attempts: max_attempts.max(1), attempts: 0 }
    }

    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.attempts >= self.max_attempts
    }

    /// Validate, authenticate, and store the user in `session` on success.
    ///
    /// Only a credential rejection counts as an attempt; validation errors
    /// and transport failures do not.
    ///
    /// # Errors
    ///
    /// See [`LoginError`]; the rejection variants carry the remaining count.
    pub async fn submit(
        &mut self,
        backend: &dyn Backend,
        session: &mut Session,
        credentials: &Credentials,
    ) -> Result<CurrentUser, LoginError> {
        if self.is_locked() {
            return Err(LoginError::Locked);
        }
        validate_login(credentials).map_err(LoginError::Invalid)?;

        match backend.login(credentials).await {
            Ok(user) => {
                self.attempts = 0;
                session.sign_in(user.clone())?;
                info!(username = %user.username, "signed in");
                Ok(user)
            }
            Err(ApiError::InvalidCredentials) => {
                self.attempts += 1;
                let remaining = self.max_attempts.saturating_sub(self.attempts);
                warn!(attempts = self.attempts, remaining, "login failed");
                if remaining > 0 { Err(LoginError::Rejected { remaining }) } else { Err(LoginError::LockedOut) }
            }
            Err(err) => Err(LoginError::Api(err)),
        }
    }
}
