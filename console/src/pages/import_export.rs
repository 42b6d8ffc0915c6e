//! Spreadsheet import and export page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Upload goes through the backend, which reports progress and hands back
//! parsed rows; the preview and import plan come from
//! `inventory::transfer`. Committed rows are appended to the inventory page
//! the caller passes in. Exports are built locally from whatever records the
//! caller supplies and are added to the export history.

#[cfg(test)]
#[path = "import_export_test.rs"]
mod import_export_test;

use inventory::transfer::{
    DateRange, ExportDocument, ExportFormat, ExportOptions, ImportMode, ImportPreview, ImportRow, TransferError,
    build_export, error_log, import_template, plan_import, preview_import,
};
use inventory::{ServerField, ServerRecord, StoreError};
use serde::Serialize;
use time::{Duration, OffsetDateTime};
use tracing::info;

use crate::net::api::{ApiError, Backend};
use crate::net::types::ImportProgress;
use crate::state::inventory::InventoryPage;

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("no file has been uploaded")]
    NothingUploaded,
    #[error(transparent)]
    Transfer(#[from] TransferError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One past export, newest first in [`ImportExportPage::history`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportHistoryEntry {
    pub id: u64,
    pub filename: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub record_count: usize,
    pub format: ExportFormat,
}

/// The three sample exports shown before anything has been exported.
#[must_use]
pub fn sample_history(now: OffsetDateTime) -> Vec<ExportHistoryEntry> {
    let entry = |id, filename: &str, days_ago, record_count, format| ExportHistoryEntry {
        id,
        filename: filename.to_owned(),
        timestamp: now - Duration::days(days_ago),
        record_count,
        format,
    };
    vec![
        entry(1, "server_inventory_2024_01_15.xlsx", 1, 245, ExportFormat::Excel),
        entry(2, "filtered_servers_2024_01_10.csv", 5, 89, ExportFormat::Csv),
        entry(3, "complete_inventory_2024_01_05.xlsx", 10, 312, ExportFormat::Excel),
    ]
}

/// A processed upload waiting to be imported.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Upload {
    pub file_name: String,
    pub rows: Vec<ImportRow>,
    pub preview: ImportPreview,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    pub mode: ImportMode,
    pub message: String,
}

/// Alert text for a finished export.
#[must_use]
pub fn export_message(document: &ExportDocument) -> String {
    format!("Exporting data to {} with {} fields", document.filename, document.headers.len())
}

#[derive(Clone, Debug)]
pub struct ImportExportPage {
    upload: Option<Upload>,
    mode: ImportMode,
    options: ExportOptions,
    history: Vec<ExportHistoryEntry>,
}

impl ImportExportPage {
    #[must_use]
    pub fn new(now: OffsetDateTime) -> Self {
        Self {
            upload: None,
            mode: ImportMode::default(),
            options: ExportOptions::default(),
            history: sample_history(now),
        }
    }

    #[must_use]
    pub fn upload(&self) -> Option<&Upload> {
        self.upload.as_ref()
    }

    #[must_use]
    pub fn preview(&self) -> Option<&ImportPreview> {
        self.upload.as_ref().map(|upload| &upload.preview)
    }

    #[must_use]
    pub fn mode(&self) -> ImportMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ImportMode) {
        self.mode = mode;
    }

    #[must_use]
    pub fn export_options(&self) -> &ExportOptions {
        &self.options
    }

    pub fn set_format(&mut self, format: ExportFormat) {
        self.options.format = format;
    }

    pub fn set_date_range(&mut self, range: DateRange) {
        self.options.date_range = range;
    }

    pub fn set_field(&mut self, field: ServerField, enabled: bool) {
        self.options.set_field(field, enabled);
    }

    #[must_use]
    pub fn history(&self) -> &[ExportHistoryEntry] {
        &self.history
    }

    /// Drop the pending upload.
    pub fn clear_upload(&mut self) {
        self.upload = None;
    }

    // =========================================================================
    // IMPORT
    // =========================================================================

    /// Send `file_name` to the backend and preview the rows it returns.
    ///
    /// A rejected file leaves any earlier upload in place.
    ///
    /// # Errors
    ///
    /// Returns the backend failure, e.g. an unsupported extension.
    pub async fn upload_file(
        &mut self,
        backend: &dyn Backend,
        file_name: &str,
        progress: &(dyn Fn(ImportProgress) + Send + Sync),
    ) -> Result<&ImportPreview, ImportError> {
        let rows = backend.upload(file_name, progress).await?;
        let preview = preview_import(&rows);
        info!(
            file = %file_name,
            total = preview.total_rows,
            valid = preview.valid_rows,
            errors = preview.error_rows,
            warnings = preview.warning_rows,
            "upload previewed"
        );
        let upload = self.upload.insert(Upload { file_name: file_name.to_owned(), rows, preview });
        Ok(&upload.preview)
    }

    /// Commit the valid rows of the pending upload into `page`.
    ///
    /// # Errors
    ///
    /// Returns [`ImportError::NothingUploaded`] without an upload, and
    /// [`TransferError::ModeUnsupported`] for modes other than append. The
    /// upload is kept on failure.
    pub async fn import(
        &mut self,
        backend: &dyn Backend,
        page: &mut InventoryPage,
        now: OffsetDateTime,
    ) -> Result<ImportSummary, ImportError> {
        let upload = self.upload.as_ref().ok_or(ImportError::NothingUploaded)?;
        let drafts = plan_import(&upload.rows, self.mode)?;
        let imported = backend.commit_import(&drafts, self.mode).await?;
        for draft in drafts {
            page.add(draft, now)?;
        }
        let mode = self.mode;
        info!(imported, %mode, "import applied");
        self.upload = None;
        Ok(ImportSummary {
            imported,
            mode,
            message: format!("Successfully imported {imported} records using {mode} mode"),
        })
    }

    /// Rows of the pending upload that did not validate cleanly.
    #[must_use]
    pub fn error_log(&self, now: OffsetDateTime) -> Option<ExportDocument> {
        self.preview().map(|preview| error_log(preview, now.date()))
    }

    #[must_use]
    pub fn template(&self) -> ExportDocument {
        import_template(self.options.format)
    }

    // =========================================================================
    // EXPORT
    // =========================================================================

    /// Export `records` with the current options and log it in the history.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::NoFieldsSelected`] when every column is off.
    pub fn export<'a, I>(&mut self, records: I, now: OffsetDateTime) -> Result<ExportDocument, TransferError>
    where
        I: IntoIterator<Item = &'a ServerRecord>,
    {
        let document = build_export(records, &self.options, now)?;
        let id = self.history.iter().map(|entry| entry.id).max().unwrap_or(0) + 1;
        self.history.insert(
            0,
            ExportHistoryEntry {
                id,
                filename: document.filename.clone(),
                timestamp: now,
                record_count: document.record_count(),
                format: document.format,
            },
        );
        info!(filename = %document.filename, records = document.record_count(), "export built");
        Ok(document)
    }
}
