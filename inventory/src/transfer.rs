//! Spreadsheet import validation and export documents.
//!
//! SYSTEM CONTEXT
//! ==============
//! The console never parses spreadsheet bytes itself: rows arrive already
//! split into columns (from the backend boundary), get validated here, and
//! valid rows are turned into server drafts. Exports go the other way and
//! produce a tabular [`ExportDocument`] that can be rendered as CSV.

#[cfg(test)]
#[path = "transfer_test.rs"]
mod transfer_test;

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::{Date, Duration, OffsetDateTime};

use crate::record::{ServerDraft, ServerField, ServerRecord};
use crate::validate::{is_valid_email, is_valid_ipv4};

static UPLOAD_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.(xlsx|xls|csv)$").unwrap());

pub const INVALID_IP_ROW_MESSAGE: &str = "Invalid IP address format";
pub const INVALID_SPOC_ROW_MESSAGE: &str = "Invalid SPOC email format";
pub const EMPTY_HOSTNAME_ROW_MESSAGE: &str = "Hostname is empty";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransferError {
    #[error("unsupported file '{0}': please select a valid Excel or CSV file")]
    UnsupportedFile(String),
    #[error("import mode '{0}' is not supported")]
    ModeUnsupported(ImportMode),
    #[error("please select at least one field to export")]
    NoFieldsSelected,
    #[error("custom date range starts after it ends")]
    InvalidDateRange,
    #[error("unknown {kind}: {value}")]
    Unknown { kind: &'static str, value: String },
}

/// Whether an upload's file name has a spreadsheet extension.
#[must_use]
pub fn is_supported_upload(file_name: &str) -> bool {
    UPLOAD_NAME.is_match(file_name)
}

/// # Errors
///
/// Returns [`TransferError::UnsupportedFile`] when the extension is not
/// `.xlsx`, `.xls` or `.csv`.
pub fn check_upload(file_name: &str) -> Result<(), TransferError> {
    if is_supported_upload(file_name) {
        Ok(())
    } else {
        Err(TransferError::UnsupportedFile(file_name.to_owned()))
    }
}

// =============================================================================
// IMPORT
// =============================================================================

/// One spreadsheet row, 1-based.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRow {
    pub row: usize,
    #[serde(flatten)]
    pub draft: ServerDraft,
}

/// Row outcome, ordered by severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowStatus {
    Valid,
    Warning,
    Error,
}

impl RowStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowReport {
    pub row: usize,
    pub server_ip: String,
    pub hostname: String,
    pub status: RowStatus,
    pub errors: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportPreview {
    pub total_rows: usize,
    pub valid_rows: usize,
    pub error_rows: usize,
    pub warning_rows: usize,
    pub rows: Vec<RowReport>,
}

/// A bad or missing IP and a malformed SPOC email are errors; a blank
/// hostname is only a warning.
#[must_use]
pub fn validate_row(row: &ImportRow) -> RowReport {
    let mut status = RowStatus::Valid;
    let mut errors = Vec::new();

    let ip = row.draft.server_ip.trim();
    if !is_valid_ipv4(ip) {
        errors.push(INVALID_IP_ROW_MESSAGE.to_owned());
        status = RowStatus::Error;
    }

    let spoc = row.draft.application_spoc.trim();
    if !spoc.is_empty() && !is_valid_email(spoc) {
        errors.push(INVALID_SPOC_ROW_MESSAGE.to_owned());
        status = RowStatus::Error;
    }

    let hostname = row.draft.hostname.trim();
    if hostname.is_empty() {
        errors.push(EMPTY_HOSTNAME_ROW_MESSAGE.to_owned());
        status = status.max(RowStatus::Warning);
    }

    RowReport {
        row: row.row,
        server_ip: ip.to_owned(),
        hostname: hostname.to_owned(),
        status,
        errors,
    }
}

#[must_use]
pub fn preview_import(rows: &[ImportRow]) -> ImportPreview {
    let reports: Vec<RowReport> = rows.iter().map(validate_row).collect();
    let count = |status: RowStatus| reports.iter().filter(|r| r.status == status).count();
    ImportPreview {
        total_rows: reports.len(),
        valid_rows: count(RowStatus::Valid),
        error_rows: count(RowStatus::Error),
        warning_rows: count(RowStatus::Warning),
        rows: reports,
    }
}

/// How imported rows combine with the existing inventory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportMode {
    /// Add rows as new records.
    #[default]
    Append,
    /// Update matching records.
    Update,
    /// Replace the whole inventory.
    Replace,
}

impl fmt::Display for ImportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Append => "append",
            Self::Update => "update",
            Self::Replace => "replace",
        })
    }
}

impl FromStr for ImportMode {
    type Err = TransferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "append" => Ok(Self::Append),
            "update" => Ok(Self::Update),
            "replace" => Ok(Self::Replace),
            _ => Err(TransferError::Unknown { kind: "import mode", value: s.to_owned() }),
        }
    }
}

/// Drafts to append for the rows that validated cleanly.
///
/// # Errors
///
/// Returns [`TransferError::ModeUnsupported`] for `update` and `replace`:
/// neither has defined matching or deletion rules.
pub fn plan_import(rows: &[ImportRow], mode: ImportMode) -> Result<Vec<ServerDraft>, TransferError> {
    if mode != ImportMode::Append {
        return Err(TransferError::ModeUnsupported(mode));
    }
    Ok(rows
        .iter()
        .filter(|row| validate_row(row).status == RowStatus::Valid)
        .map(|row| row.draft.clone())
        .collect())
}

// =============================================================================
// EXPORT
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Excel,
    Csv,
}

impl ExportFormat {
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Excel => "xlsx",
            Self::Csv => "csv",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Excel => "Excel",
            Self::Csv => "CSV",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = TransferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "excel" | "xlsx" => Ok(Self::Excel),
            "csv" => Ok(Self::Csv),
            _ => Err(TransferError::Unknown { kind: "export format", value: s.to_owned() }),
        }
    }
}

/// Window on `last_updated` an export is restricted to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DateRange {
    #[default]
    All,
    Last7Days,
    Last30Days,
    Last90Days,
    Custom {
        #[serde(with = "time::serde::rfc3339")]
        from: OffsetDateTime,
        #[serde(with = "time::serde::rfc3339")]
        to: OffsetDateTime,
    },
}

impl DateRange {
    /// # Errors
    ///
    /// Returns [`TransferError::InvalidDateRange`] when `from > to`.
    pub fn custom(from: OffsetDateTime, to: OffsetDateTime) -> Result<Self, TransferError> {
        if from > to {
            return Err(TransferError::InvalidDateRange);
        }
        Ok(Self::Custom { from, to })
    }

    #[must_use]
    pub fn contains(&self, ts: OffsetDateTime, now: OffsetDateTime) -> bool {
        match *self {
            Self::All => true,
            Self::Last7Days => ts >= now - Duration::days(7),
            Self::Last30Days => ts >= now - Duration::days(30),
            Self::Last90Days => ts >= now - Duration::days(90),
            Self::Custom { from, to } => from <= ts && ts <= to,
        }
    }
}

impl FromStr for DateRange {
    type Err = TransferError;

    /// Preset ranges only; custom ranges are built with [`DateRange::custom`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "last7days" | "7d" => Ok(Self::Last7Days),
            "last30days" | "30d" => Ok(Self::Last30Days),
            "last90days" | "90d" => Ok(Self::Last90Days),
            _ => Err(TransferError::Unknown { kind: "date range", value: s.to_owned() }),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub date_range: DateRange,
    /// Columns in output order.
    pub fields: Vec<ServerField>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            date_range: DateRange::default(),
            fields: ServerField::EDITABLE.to_vec(),
        }
    }
}

impl ExportOptions {
    /// Include or drop one column; included columns keep table order.
    pub fn set_field(&mut self, field: ServerField, enabled: bool) {
        self.fields.retain(|f| *f != field);
        if enabled {
            self.fields.push(field);
            self.fields.sort();
        }
    }
}

/// `server_export_2024-01-15.xlsx`.
#[must_use]
pub fn export_filename(format: ExportFormat, today: Date) -> String {
    format!("server_export_{}.{}", iso_date(today), format.extension())
}

fn iso_date(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_default()
}

/// A rendered table ready to be written out.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub filename: String,
    pub format: ExportFormat,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ExportDocument {
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.rows.len()
    }

    /// RFC 4180 text: CRLF line endings, quoting only where needed.
    #[must_use]
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        write_csv_line(&mut out, self.headers.iter().map(String::as_str));
        for row in &self.rows {
            write_csv_line(&mut out, row.iter().map(String::as_str));
        }
        out
    }
}

fn write_csv_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>) {
    for (i, cell) in cells.enumerate() {
        if i > 0 {
            out.push(',');
        }
        if cell.contains([',', '"', '\n', '\r']) {
            out.push('"');
            out.push_str(&cell.replace('"', "\"\""));
            out.push('"');
        } else {
            out.push_str(cell);
        }
    }
    out.push_str("\r\n");
}

/// Build an export of `records` restricted by the options' date range.
///
/// # Errors
///
/// Returns [`TransferError::NoFieldsSelected`] when no column is selected.
pub fn build_export<'a, I>(records: I, options: &ExportOptions, now: OffsetDateTime) -> Result<ExportDocument, TransferError>
where
    I: IntoIterator<Item = &'a ServerRecord>,
{
    if options.fields.is_empty() {
        return Err(TransferError::NoFieldsSelected);
    }
    let headers = options.fields.iter().map(|f| f.label().to_owned()).collect();
    let rows = records
        .into_iter()
        .filter(|record| options.date_range.contains(record.last_updated, now))
        .map(|record| {
            options
                .fields
                .iter()
                .map(|field| record.field_text(*field).into_owned())
                .collect()
        })
        .collect();
    Ok(ExportDocument {
        filename: export_filename(options.format, now.date()),
        format: options.format,
        headers,
        rows,
    })
}

/// Empty sheet with every importable column, in table order.
#[must_use]
pub fn import_template(format: ExportFormat) -> ExportDocument {
    ExportDocument {
        filename: format!("server_import_template.{}", format.extension()),
        format,
        headers: ServerField::EDITABLE.iter().map(|f| f.label().to_owned()).collect(),
        rows: Vec::new(),
    }
}

/// CSV listing every row that did not validate cleanly.
#[must_use]
pub fn error_log(preview: &ImportPreview, today: Date) -> ExportDocument {
    let rows = preview
        .rows
        .iter()
        .filter(|report| report.status != RowStatus::Valid)
        .map(|report| {
            vec![
                report.row.to_string(),
                report.server_ip.clone(),
                report.hostname.clone(),
                report.status.as_str().to_owned(),
                report.errors.join("; "),
            ]
        })
        .collect();
    ExportDocument {
        filename: format!("import_errors_{}.csv", iso_date(today)),
        format: ExportFormat::Csv,
        headers: ["Row", "Server IP", "Hostname", "Status", "Errors"]
            .into_iter()
            .map(str::to_owned)
            .collect(),
        rows,
    }
}
