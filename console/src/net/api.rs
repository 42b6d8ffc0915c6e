//! Async backend trait and the in-process mock behind it.
//!
//! DESIGN
//! ======
//! Every operation that the console used to fake with a timer is an awaited
//! call here. The mock sleeps for the configured latency and then answers
//! from fixed data, so page controllers behave the same whether the delay is
//! real, simulated, or zero.
//!
//! ERROR HANDLING
//! ==============
//! Only login can fail on credentials; uploads fail on unsupported file
//! names. Everything else succeeds once the latency elapses.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use inventory::ServerDraft;
use inventory::transfer::{ImportMode, ImportRow, TransferError, check_upload};
use inventory::users::{UserDraft, UserId, UserRole};
use tokio::time::sleep;
use tracing::{info, warn};

use super::types::{Credentials, CurrentUser, ImportProgress};
use crate::config::Latencies;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error(transparent)]
    Transfer(#[from] TransferError),
}

// =============================================================================
// BACKEND TRAIT
// =============================================================================

/// Operations the console delegates to a backend. Enables mocking in tests.
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidCredentials`] when no account matches.
    async fn login(&self, credentials: &Credentials) -> Result<CurrentUser, ApiError>;

    /// Persist an added or edited server.
    ///
    /// # Errors
    ///
    /// Backend-specific; the mock never fails.
    async fn save_server(&self, draft: &ServerDraft) -> Result<(), ApiError>;

    /// # Errors
    ///
    /// Backend-specific; the mock never fails.
    async fn save_user(&self, draft: &UserDraft) -> Result<(), ApiError>;

    /// # Errors
    ///
    /// Backend-specific; the mock never fails.
    async fn delete_user(&self, id: UserId) -> Result<(), ApiError>;

    /// Accept a spreadsheet and return its rows, reporting progress per step.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transfer`] for an unsupported file name.
    async fn upload(
        &self,
        file_name: &str,
        progress: &(dyn Fn(ImportProgress) + Send + Sync),
    ) -> Result<Vec<ImportRow>, ApiError>;

    /// Commit `drafts` with `mode`; returns how many records were written.
    ///
    /// # Errors
    ///
    /// Backend-specific; the mock never fails.
    async fn commit_import(&self, drafts: &[ServerDraft], mode: ImportMode) -> Result<usize, ApiError>;
}

// =============================================================================
// MOCK
// =============================================================================

/// A built-in demo account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockAccount {
    pub username: &'static str,
    pub password: &'static str,
    pub role: UserRole,
    pub name: &'static str,
}

pub const MOCK_ACCOUNTS: [MockAccount; 4] = [
    MockAccount { username: "admin@infosec.com", password: "Admin@123", role: UserRole::Admin, name: "Admin User" },
    MockAccount { username: "user@infosec.com", password: "User@123", role: UserRole::User, name: "Read-only User" },
    MockAccount {
        username: "security.admin",
        password: "SecurePass@2024",
        role: UserRole::Admin,
        name: "Security Administrator",
    },
    MockAccount { username: "it.analyst", password: "Analyst@456", role: UserRole::User, name: "IT Analyst" },
];

/// In-process backend answering from demo data after a simulated delay.
#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    latencies: Latencies,
}

impl MockBackend {
    #[must_use]
    pub fn new(latencies: Latencies) -> Self {
        Self { latencies }
    }

    #[must_use]
    pub fn latencies(&self) -> &Latencies {
        &self.latencies
    }
}

#[async_trait::async_trait]
impl Backend for MockBackend {
    async fn login(&self, credentials: &Credentials) -> Result<CurrentUser, ApiError> {
        sleep(self.latencies.login).await;
        // Exact match on both fields, no trimming.
        let account = MOCK_ACCOUNTS
            .iter()
            .find(|a| a.username == credentials.username && a.password == credentials.password);
        match account {
            Some(account) => {
                info!(username = %account.username, role = %account.role, "login accepted");
                Ok(CurrentUser {
                    username: account.username.to_owned(),
                    name: account.name.to_owned(),
                    role: account.role,
                })
            }
            None => {
                warn!(username = %credentials.username, "login rejected");
                Err(ApiError::InvalidCredentials)
            }
        }
    }

    async fn save_server(&self, draft: &ServerDraft) -> Result<(), ApiError> {
        sleep(self.latencies.server_save).await;
        info!(hostname = %draft.hostname, "server saved");
        Ok(())
    }

    async fn save_user(&self, draft: &UserDraft) -> Result<(), ApiError> {
        sleep(self.latencies.user_save).await;
        info!(username = %draft.username, "user saved");
        Ok(())
    }

    async fn delete_user(&self, id: UserId) -> Result<(), ApiError> {
        sleep(self.latencies.user_save).await;
        info!(%id, "user deleted");
        Ok(())
    }

    async fn upload(
        &self,
        file_name: &str,
        progress: &(dyn Fn(ImportProgress) + Send + Sync),
    ) -> Result<Vec<ImportRow>, ApiError> {
        check_upload(file_name)?;
        let steps = self.latencies.import_steps;
        progress(ImportProgress { step: 0, steps });
        for step in 1..=steps {
            sleep(self.latencies.import_step).await;
            progress(ImportProgress { step, steps });
        }
        let rows = inventory::seed::import_rows();
        info!(file = %file_name, rows = rows.len(), "upload processed");
        Ok(rows)
    }

    async fn commit_import(&self, drafts: &[ServerDraft], mode: ImportMode) -> Result<usize, ApiError> {
        sleep(self.latencies.import_commit).await;
        info!(records = drafts.len(), %mode, "import committed");
        Ok(drafts.len())
    }
}
