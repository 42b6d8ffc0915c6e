//! Server inventory records and their attribute catalog.
//!
//! DESIGN
//! ======
//! Every attribute is addressable through [`ServerField`] so search, sort,
//! facet filtering and export can walk the same closed set of columns instead
//! of reaching into records by string key.

#[cfg(test)]
#[path = "record_test.rs"]
mod record_test;

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Opaque unique key of a server record. Assigned once, never reused in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServerId(pub u64);

impl fmt::Display for ServerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ServerId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

// =============================================================================
// STATUS
// =============================================================================

/// Operational status of a server.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ServerStatus {
    Live,
    Shutdown,
    #[default]
    New,
}

impl ServerStatus {
    pub const ALL: [Self; 3] = [Self::Live, Self::Shutdown, Self::New];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Live => "Live",
            Self::Shutdown => "Shutdown",
            Self::New => "New",
        }
    }
}

impl fmt::Display for ServerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown server status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for ServerStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownStatus(s.to_owned()))
    }
}

// =============================================================================
// FIELDS
// =============================================================================

/// Closed set of record attributes, in table column order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ServerField {
    Id,
    ServerIp,
    Hostname,
    OperatingSystem,
    ServerRole,
    ServerType,
    ApplicationName,
    ApplicationSpoc,
    ApplicationOwner,
    Platform,
    Location,
    Manufacturer,
    Ram,
    Cpu,
    Status,
    LastUpdated,
}

impl ServerField {
    pub const ALL: [Self; 16] = [
        Self::Id,
        Self::ServerIp,
        Self::Hostname,
        Self::OperatingSystem,
        Self::ServerRole,
        Self::ServerType,
        Self::ApplicationName,
        Self::ApplicationSpoc,
        Self::ApplicationOwner,
        Self::Platform,
        Self::Location,
        Self::Manufacturer,
        Self::Ram,
        Self::Cpu,
        Self::Status,
        Self::LastUpdated,
    ];

    /// Columns a user can enter through the server form or a spreadsheet.
    pub const EDITABLE: [Self; 13] = [
        Self::ServerIp,
        Self::Hostname,
        Self::OperatingSystem,
        Self::ServerRole,
        Self::ServerType,
        Self::ApplicationName,
        Self::ApplicationSpoc,
        Self::ApplicationOwner,
        Self::Platform,
        Self::Location,
        Self::Manufacturer,
        Self::Ram,
        Self::Cpu,
    ];

    /// Wire/storage key (camelCase).
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::ServerIp => "serverIp",
            Self::Hostname => "hostname",
            Self::OperatingSystem => "operatingSystem",
            Self::ServerRole => "serverRole",
            Self::ServerType => "serverType",
            Self::ApplicationName => "applicationName",
            Self::ApplicationSpoc => "applicationSpoc",
            Self::ApplicationOwner => "applicationOwner",
            Self::Platform => "platform",
            Self::Location => "location",
            Self::Manufacturer => "manufacturer",
            Self::Ram => "ram",
            Self::Cpu => "cpu",
            Self::Status => "status",
            Self::LastUpdated => "lastUpdated",
        }
    }

    /// Human-readable column label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::ServerIp => "Server IP",
            Self::Hostname => "Hostname",
            Self::OperatingSystem => "Operating System",
            Self::ServerRole => "Server Role",
            Self::ServerType => "Server Type",
            Self::ApplicationName => "Application Name",
            Self::ApplicationSpoc => "Application SPOC",
            Self::ApplicationOwner => "Application Owner",
            Self::Platform => "Platform",
            Self::Location => "Location",
            Self::Manufacturer => "Manufacturer",
            Self::Ram => "RAM",
            Self::Cpu => "CPU",
            Self::Status => "Status",
            Self::LastUpdated => "Last Updated",
        }
    }
}

impl fmt::Display for ServerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown server field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for ServerField {
    type Err = UnknownField;

    /// Accepts the camelCase key or the snake/kebab spelling (`server_ip`, `last-updated`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|field| field.key().to_ascii_lowercase() == folded)
            .ok_or_else(|| UnknownField(s.to_owned()))
    }
}

// =============================================================================
// RECORD
// =============================================================================

/// One server inventory entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerRecord {
    pub id: ServerId,
    pub server_ip: String,
    pub hostname: String,
    pub operating_system: String,
    pub server_role: String,
    pub server_type: String,
    pub application_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_spoc: Option<String>,
    pub application_owner: String,
    pub platform: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<String>,
    pub status: ServerStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub last_updated: OffsetDateTime,
}

impl ServerRecord {
    /// Displayed string form of `field`. Absent optional values are empty.
    #[must_use]
    pub fn field_text(&self, field: ServerField) -> Cow<'_, str> {
        match field {
            ServerField::Id => Cow::Owned(self.id.to_string()),
            ServerField::ServerIp => Cow::Borrowed(&self.server_ip),
            ServerField::Hostname => Cow::Borrowed(&self.hostname),
            ServerField::OperatingSystem => Cow::Borrowed(&self.operating_system),
            ServerField::ServerRole => Cow::Borrowed(&self.server_role),
            ServerField::ServerType => Cow::Borrowed(&self.server_type),
            ServerField::ApplicationName => Cow::Borrowed(&self.application_name),
            ServerField::ApplicationSpoc => optional(self.application_spoc.as_deref()),
            ServerField::ApplicationOwner => Cow::Borrowed(&self.application_owner),
            ServerField::Platform => Cow::Borrowed(&self.platform),
            ServerField::Location => Cow::Borrowed(&self.location),
            ServerField::Manufacturer => optional(self.manufacturer.as_deref()),
            ServerField::Ram => optional(self.ram.as_deref()),
            ServerField::Cpu => optional(self.cpu.as_deref()),
            ServerField::Status => Cow::Borrowed(self.status.as_str()),
            ServerField::LastUpdated => Cow::Owned(format_timestamp(self.last_updated)),
        }
    }

    /// Case-insensitive unanchored match of `needle_lower` against every attribute.
    ///
    /// `needle_lower` must already be lowercased; an empty needle matches.
    #[must_use]
    pub fn contains_text(&self, needle_lower: &str) -> bool {
        needle_lower.is_empty()
            || ServerField::ALL
                .into_iter()
                .any(|field| self.field_text(field).to_lowercase().contains(needle_lower))
    }
}

fn optional(value: Option<&str>) -> Cow<'_, str> {
    Cow::Borrowed(value.unwrap_or_default())
}

/// RFC 3339 display form used for matching and export (`2024-01-15T10:30:00Z`).
#[must_use]
pub fn format_timestamp(ts: OffsetDateTime) -> String {
    ts.format(&Rfc3339).unwrap_or_default()
}

// =============================================================================
// DRAFT
// =============================================================================

/// Form-shaped input for creating or editing a record.
///
/// Optional columns are empty strings when absent, matching what a form or a
/// spreadsheet row carries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerDraft {
    pub server_ip: String,
    pub hostname: String,
    pub operating_system: String,
    pub server_role: String,
    pub server_type: String,
    pub application_name: String,
    pub application_spoc: String,
    pub application_owner: String,
    pub platform: String,
    pub location: String,
    pub manufacturer: String,
    pub ram: String,
    pub cpu: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ServerStatus>,
}

impl ServerDraft {
    /// Prefill a draft from an existing record (edit mode).
    #[must_use]
    pub fn from_record(record: &ServerRecord) -> Self {
        Self {
            server_ip: record.server_ip.clone(),
            hostname: record.hostname.clone(),
            operating_system: record.operating_system.clone(),
            server_role: record.server_role.clone(),
            server_type: record.server_type.clone(),
            application_name: record.application_name.clone(),
            application_spoc: record.application_spoc.clone().unwrap_or_default(),
            application_owner: record.application_owner.clone(),
            platform: record.platform.clone(),
            location: record.location.clone(),
            manufacturer: record.manufacturer.clone().unwrap_or_default(),
            ram: record.ram.clone().unwrap_or_default(),
            cpu: record.cpu.clone().unwrap_or_default(),
            status: Some(record.status),
        }
    }

    /// Draft value for an editable column, or `None` for computed columns.
    #[must_use]
    pub fn get(&self, field: ServerField) -> Option<&str> {
        let value = match field {
            ServerField::ServerIp => &self.server_ip,
            ServerField::Hostname => &self.hostname,
            ServerField::OperatingSystem => &self.operating_system,
            ServerField::ServerRole => &self.server_role,
            ServerField::ServerType => &self.server_type,
            ServerField::ApplicationName => &self.application_name,
            ServerField::ApplicationSpoc => &self.application_spoc,
            ServerField::ApplicationOwner => &self.application_owner,
            ServerField::Platform => &self.platform,
            ServerField::Location => &self.location,
            ServerField::Manufacturer => &self.manufacturer,
            ServerField::Ram => &self.ram,
            ServerField::Cpu => &self.cpu,
            ServerField::Id | ServerField::Status | ServerField::LastUpdated => return None,
        };
        Some(value)
    }

    /// Set an editable column. Returns `false` for computed columns.
    pub fn set(&mut self, field: ServerField, value: impl Into<String>) -> bool {
        let slot = match field {
            ServerField::ServerIp => &mut self.server_ip,
            ServerField::Hostname => &mut self.hostname,
            ServerField::OperatingSystem => &mut self.operating_system,
            ServerField::ServerRole => &mut self.server_role,
            ServerField::ServerType => &mut self.server_type,
            ServerField::ApplicationName => &mut self.application_name,
            ServerField::ApplicationSpoc => &mut self.application_spoc,
            ServerField::ApplicationOwner => &mut self.application_owner,
            ServerField::Platform => &mut self.platform,
            ServerField::Location => &mut self.location,
            ServerField::Manufacturer => &mut self.manufacturer,
            ServerField::Ram => &mut self.ram,
            ServerField::Cpu => &mut self.cpu,
            ServerField::Id | ServerField::Status | ServerField::LastUpdated => return false,
        };
        *slot = value.into();
        true
    }

    /// Materialize a record. Text is trimmed; blank optional columns become `None`.
    #[must_use]
    pub fn into_record(self, id: ServerId, now: OffsetDateTime) -> ServerRecord {
        ServerRecord {
            id,
            server_ip: self.server_ip.trim().to_owned(),
            hostname: self.hostname.trim().to_owned(),
            operating_system: self.operating_system.trim().to_owned(),
            server_role: self.server_role.trim().to_owned(),
            server_type: self.server_type.trim().to_owned(),
            application_name: self.application_name.trim().to_owned(),
            application_spoc: non_blank(&self.application_spoc),
            application_owner: self.application_owner.trim().to_owned(),
            platform: self.platform.trim().to_owned(),
            location: self.location.trim().to_owned(),
            manufacturer: non_blank(&self.manufacturer),
            ram: non_blank(&self.ram),
            cpu: non_blank(&self.cpu),
            status: self.status.unwrap_or_default(),
            last_updated: now,
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}
