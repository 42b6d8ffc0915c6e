use super::*;
use crate::seed;
use time::macros::{date, datetime};

const NOW: OffsetDateTime = datetime!(2024-01-17 08:00:00 UTC);

// =============================================================
// Upload
// =============================================================

#[test]
fn spreadsheet_extensions_are_accepted() {
    for name in ["servers.xlsx", "legacy.xls", "dump.csv"] {
        assert_eq!(check_upload(name), Ok(()), "{name}");
    }
}

#[test]
fn other_extensions_are_rejected() {
    assert_eq!(check_upload("notes.txt"), Err(TransferError::UnsupportedFile("notes.txt".to_owned())));
    assert!(!is_supported_upload("servers.xlsx.bak"));
}

// =============================================================
// Import preview
// =============================================================

#[test]
fn sample_rows_preview_counts() {
    let preview = preview_import(&seed::import_rows());
    assert_eq!(preview.total_rows, 4);
    assert_eq!(preview.valid_rows, 2);
    assert_eq!(preview.error_rows, 1);
    assert_eq!(preview.warning_rows, 1);
    assert_eq!(preview.rows[2].errors, vec![INVALID_IP_ROW_MESSAGE.to_owned()]);
    assert_eq!(preview.rows[3].status, RowStatus::Warning);
    assert_eq!(preview.rows[3].errors, vec![EMPTY_HOSTNAME_ROW_MESSAGE.to_owned()]);
}

#[test]
fn error_outranks_warning_on_the_same_row() {
    let row = ImportRow {
        row: 9,
        draft: ServerDraft { server_ip: "999.0.0.1".to_owned(), ..ServerDraft::default() },
    };
    let report = validate_row(&row);
    assert_eq!(report.status, RowStatus::Error);
    assert_eq!(report.errors.len(), 2);
}

#[test]
fn bad_spoc_email_is_an_error() {
    let mut row = seed::import_rows().remove(0);
    row.draft.application_spoc = "owner at company".to_owned();
    let report = validate_row(&row);
    assert_eq!(report.status, RowStatus::Error);
    assert_eq!(report.errors, vec![INVALID_SPOC_ROW_MESSAGE.to_owned()]);
}

#[test]
fn append_plan_keeps_only_valid_rows() {
    let drafts = plan_import(&seed::import_rows(), ImportMode::Append).unwrap();
    let hosts: Vec<_> = drafts.iter().map(|d| d.hostname.as_str()).collect();
    assert_eq!(hosts, vec!["web-server-01", "db-server-01"]);
}

#[test]
fn update_and_replace_are_unsupported() {
    let rows = seed::import_rows();
    assert_eq!(plan_import(&rows, ImportMode::Update), Err(TransferError::ModeUnsupported(ImportMode::Update)));
    assert_eq!(plan_import(&rows, ImportMode::Replace), Err(TransferError::ModeUnsupported(ImportMode::Replace)));
}

#[test]
fn import_mode_parses() {
    assert_eq!("Replace".parse::<ImportMode>(), Ok(ImportMode::Replace));
    assert!("merge".parse::<ImportMode>().is_err());
}

#[test]
fn error_log_lists_problem_rows() {
    let preview = preview_import(&seed::import_rows());
    let log = error_log(&preview, date!(2024-01-17));
    assert_eq!(log.filename, "import_errors_2024-01-17.csv");
    assert_eq!(log.record_count(), 2);
    assert_eq!(log.rows[0], vec!["3", "invalid-ip", "app-server-01", "error", INVALID_IP_ROW_MESSAGE]);
}

// =============================================================
// Export
// =============================================================

#[test]
fn export_filename_uses_iso_date() {
    assert_eq!(export_filename(ExportFormat::Excel, date!(2024-01-05)), "server_export_2024-01-05.xlsx");
    assert_eq!(export_filename(ExportFormat::Csv, date!(2024-12-31)), "server_export_2024-12-31.csv");
}

#[test]
fn default_export_has_every_editable_column() {
    let records = seed::servers();
    let doc = build_export(&records, &ExportOptions::default(), NOW).unwrap();
    assert_eq!(doc.headers.len(), ServerField::EDITABLE.len());
    assert_eq!(doc.headers[0], "Server IP");
    assert_eq!(doc.record_count(), 5);
}

#[test]
fn date_range_limits_rows() {
    let records = seed::servers();
    let options = ExportOptions { date_range: DateRange::Last7Days, ..ExportOptions::default() };
    assert_eq!(build_export(&records, &options, NOW).unwrap().record_count(), 5);

    let later = datetime!(2024-01-22 12:00:00 UTC);
    let hosts = build_export(&records, &options, later).unwrap();
    assert_eq!(hosts.record_count(), 2);
}

#[test]
fn custom_range_is_inclusive_and_ordered() {
    let range = DateRange::custom(datetime!(2024-01-14 00:00:00 UTC), datetime!(2024-01-15 10:30:00 UTC)).unwrap();
    assert!(range.contains(datetime!(2024-01-15 10:30:00 UTC), NOW));
    assert!(!range.contains(datetime!(2024-01-13 09:20:00 UTC), NOW));
    assert_eq!(DateRange::custom(NOW, datetime!(2024-01-01 00:00:00 UTC)), Err(TransferError::InvalidDateRange));
}

#[test]
fn export_without_fields_fails() {
    let options = ExportOptions { fields: Vec::new(), ..ExportOptions::default() };
    assert_eq!(build_export(&seed::servers(), &options, NOW), Err(TransferError::NoFieldsSelected));
}

#[test]
fn set_field_keeps_table_order() {
    let mut options = ExportOptions { fields: vec![ServerField::Hostname], ..ExportOptions::default() };
    options.set_field(ServerField::ServerIp, true);
    options.set_field(ServerField::Status, true);
    options.set_field(ServerField::Hostname, false);
    assert_eq!(options.fields, vec![ServerField::ServerIp, ServerField::Status]);
}

#[test]
fn csv_quotes_only_where_needed() {
    let doc = ExportDocument {
        filename: "x.csv".to_owned(),
        format: ExportFormat::Csv,
        headers: vec!["Name".to_owned(), "Note".to_owned()],
        rows: vec![vec!["Backup & Recovery".to_owned(), "says \"hi\", twice".to_owned()]],
    };
    assert_eq!(doc.to_csv(), "Name,Note\r\nBackup & Recovery,\"says \"\"hi\"\", twice\"\r\n");
}

#[test]
fn template_is_header_only() {
    let template = import_template(ExportFormat::Csv);
    assert_eq!(template.filename, "server_import_template.csv");
    assert!(template.rows.is_empty());
    assert_eq!(template.to_csv().lines().count(), 1);
}

#[test]
fn format_and_range_parse() {
    assert_eq!("xlsx".parse::<ExportFormat>(), Ok(ExportFormat::Excel));
    assert_eq!("30d".parse::<DateRange>(), Ok(DateRange::Last30Days));
    assert!("yesterday".parse::<DateRange>().is_err());
}
