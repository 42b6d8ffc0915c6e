//! Console configuration parsed from environment variables.
//!
//! Every value has a default; malformed variables fall back to it rather
//! than failing startup.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_LOGIN_LATENCY_MS: u64 = 1500;
pub const DEFAULT_SAVE_LATENCY_MS: u64 = 500;
pub const DEFAULT_USER_SAVE_LATENCY_MS: u64 = 1000;
pub const DEFAULT_IMPORT_STEP_MS: u64 = 500;
pub const DEFAULT_IMPORT_STEPS: u32 = 5;
pub const DEFAULT_IMPORT_COMMIT_MS: u64 = 2000;
pub const DEFAULT_MAX_LOGIN_ATTEMPTS: u32 = 5;
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_DASHBOARD_REFRESH_SECS: u64 = 300;

/// Simulated round-trip times of the mock backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latencies {
    pub login: Duration,
    pub server_save: Duration,
    pub user_save: Duration,
    /// Delay between upload progress ticks.
    pub import_step: Duration,
    pub import_steps: u32,
    pub import_commit: Duration,
}

impl Default for Latencies {
    fn default() -> Self {
        Self {
            login: Duration::from_millis(DEFAULT_LOGIN_LATENCY_MS),
            server_save: Duration::from_millis(DEFAULT_SAVE_LATENCY_MS),
            user_save: Duration::from_millis(DEFAULT_USER_SAVE_LATENCY_MS),
            import_step: Duration::from_millis(DEFAULT_IMPORT_STEP_MS),
            import_steps: DEFAULT_IMPORT_STEPS,
            import_commit: Duration::from_millis(DEFAULT_IMPORT_COMMIT_MS),
        }
    }
}

impl Latencies {
    /// No artificial delay anywhere (scripts and tests).
    #[must_use]
    pub fn instant() -> Self {
        Self {
            login: Duration::ZERO,
            server_save: Duration::ZERO,
            user_save: Duration::ZERO,
            import_step: Duration::ZERO,
            import_steps: DEFAULT_IMPORT_STEPS,
            import_commit: Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub latencies: Latencies,
    /// Failed logins allowed before the form locks.
    pub max_login_attempts: u32,
    pub search_debounce: Duration,
    pub dashboard_refresh: Duration,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            latencies: Latencies::default(),
            max_login_attempts: DEFAULT_MAX_LOGIN_ATTEMPTS,
            search_debounce: Duration::from_millis(DEFAULT_SEARCH_DEBOUNCE_MS),
            dashboard_refresh: Duration::from_secs(DEFAULT_DASHBOARD_REFRESH_SECS),
        }
    }
}

impl ConsoleConfig {
    /// Build config from environment variables.
    ///
    /// - `RACKDESK_LOGIN_LATENCY_MS`: default 1500
    /// - `RACKDESK_SAVE_LATENCY_MS`: default 500
    /// - `RACKDESK_USER_SAVE_LATENCY_MS`: default 1000
    /// - `RACKDESK_IMPORT_STEP_MS`: default 500
    /// - `RACKDESK_IMPORT_STEPS`: default 5
    /// - `RACKDESK_IMPORT_COMMIT_MS`: default 2000
    /// - `RACKDESK_MAX_LOGIN_ATTEMPTS`: default 5
    /// - `RACKDESK_SEARCH_DEBOUNCE_MS`: default 300
    /// - `RACKDESK_DASHBOARD_REFRESH_SECS`: default 300
    #[must_use]
    pub fn from_env() -> Self {
        let latencies = Latencies {
            login: env_millis("RACKDESK_LOGIN_LATENCY_MS", DEFAULT_LOGIN_LATENCY_MS),
            server_save: env_millis("RACKDESK_SAVE_LATENCY_MS", DEFAULT_SAVE_LATENCY_MS),
            user_save: env_millis("RACKDESK_USER_SAVE_LATENCY_MS", DEFAULT_USER_SAVE_LATENCY_MS),
            import_step: env_millis("RACKDESK_IMPORT_STEP_MS", DEFAULT_IMPORT_STEP_MS),
            import_steps: env_parse("RACKDESK_IMPORT_STEPS", DEFAULT_IMPORT_STEPS).max(1),
            import_commit: env_millis("RACKDESK_IMPORT_COMMIT_MS", DEFAULT_IMPORT_COMMIT_MS),
        };
        Self {
            latencies,
            max_login_attempts: env_parse("RACKDESK_MAX_LOGIN_ATTEMPTS", DEFAULT_MAX_LOGIN_ATTEMPTS).max(1),
            search_debounce: env_millis("RACKDESK_SEARCH_DEBOUNCE_MS", DEFAULT_SEARCH_DEBOUNCE_MS),
            dashboard_refresh: Duration::from_secs(env_parse(
                "RACKDESK_DASHBOARD_REFRESH_SECS",
                DEFAULT_DASHBOARD_REFRESH_SECS,
            )),
        }
    }

    /// Same limits, zero latency.
    #[must_use]
    pub fn instant(self) -> Self {
        Self { latencies: Latencies::instant(), ..self }
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

fn env_millis(key: &str, default: u64) -> Duration {
    Duration::from_millis(env_parse(key, default))
}
