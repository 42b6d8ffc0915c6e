//! Form validation rules shared by the server form, imports and user admin.
//!
//! Validation collects one message per field instead of stopping at the first
//! problem, so a form can show every error at once.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::record::{ServerDraft, ServerField};

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const INVALID_IP_MESSAGE: &str = "Please enter a valid IP address";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";

static IPV4: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$")
        .unwrap()
});

static EMAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Columns the server form refuses to save blank.
pub const REQUIRED_SERVER_FIELDS: [ServerField; 9] = [
    ServerField::ServerIp,
    ServerField::Hostname,
    ServerField::OperatingSystem,
    ServerField::ServerRole,
    ServerField::ServerType,
    ServerField::ApplicationName,
    ServerField::ApplicationOwner,
    ServerField::Platform,
    ServerField::Location,
];

/// Well-formed dotted-quad IPv4 address, each octet 0-255.
#[must_use]
pub fn is_valid_ipv4(value: &str) -> bool {
    IPV4.is_match(value)
}

/// `local@domain.tld` with no whitespace and a single `@`.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

// =============================================================================
// FIELD ERRORS
// =============================================================================

/// Per-field validation messages, keyed by the field's wire key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, String>,
}

impl std::error::Error for FieldErrors {}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.errors {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for `field`. The first message per field wins.
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    /// Drop the message for `field` (the user started editing it).
    pub fn clear(&mut self, field: &str) {
        self.errors.remove(field);
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// `Ok(())` when nothing was recorded.
    ///
    /// # Errors
    ///
    /// Returns `self` when at least one field failed.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

// =============================================================================
// SERVER FORM
// =============================================================================

/// Validate a server form draft.
///
/// # Errors
///
/// Returns every failing field: blank required columns, a malformed IP, and a
/// malformed SPOC email (the SPOC itself is optional).
pub fn validate_server(draft: &ServerDraft) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    for field in REQUIRED_SERVER_FIELDS {
        if draft.get(field).is_none_or(|value| value.trim().is_empty()) {
            errors.insert(field.key(), REQUIRED_MESSAGE);
        }
    }

    let ip = draft.server_ip.trim();
    if !ip.is_empty() && !is_valid_ipv4(ip) {
        errors.insert(ServerField::ServerIp.key(), INVALID_IP_MESSAGE);
    }

    let spoc = draft.application_spoc.trim();
    if !spoc.is_empty() && !is_valid_email(spoc) {
        errors.insert(ServerField::ApplicationSpoc.key(), INVALID_EMAIL_MESSAGE);
    }

    errors.into_result()
}
