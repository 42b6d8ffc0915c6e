use super::*;
use time::macros::datetime;

fn web() -> ServerRecord {
    crate::seed::servers().remove(0)
}

// =============================================================
// ServerId / ServerStatus
// =============================================================

#[test]
fn server_id_displays_and_parses() {
    assert_eq!(ServerId(42).to_string(), "42");
    assert_eq!(" 7 ".parse::<ServerId>(), Ok(ServerId(7)));
    assert!("seven".parse::<ServerId>().is_err());
}

#[test]
fn status_parses_case_insensitively() {
    assert_eq!("live".parse::<ServerStatus>(), Ok(ServerStatus::Live));
    assert_eq!("SHUTDOWN".parse::<ServerStatus>(), Ok(ServerStatus::Shutdown));
    assert_eq!("New".parse::<ServerStatus>(), Ok(ServerStatus::New));
    assert_eq!("retired".parse::<ServerStatus>(), Err(UnknownStatus("retired".to_owned())));
}

#[test]
fn status_default_is_new() {
    assert_eq!(ServerStatus::default(), ServerStatus::New);
}

// =============================================================
// ServerField
// =============================================================

#[test]
fn field_parses_camel_snake_and_kebab() {
    assert_eq!("serverIp".parse::<ServerField>(), Ok(ServerField::ServerIp));
    assert_eq!("server_ip".parse::<ServerField>(), Ok(ServerField::ServerIp));
    assert_eq!("last-updated".parse::<ServerField>(), Ok(ServerField::LastUpdated));
    assert_eq!("HOSTNAME".parse::<ServerField>(), Ok(ServerField::Hostname));
    assert!("uptime".parse::<ServerField>().is_err());
}

#[test]
fn field_keys_round_trip_through_from_str() {
    for field in ServerField::ALL {
        assert_eq!(field.key().parse::<ServerField>(), Ok(field));
    }
}

#[test]
fn editable_fields_exclude_computed_columns() {
    assert!(!ServerField::EDITABLE.contains(&ServerField::Id));
    assert!(!ServerField::EDITABLE.contains(&ServerField::Status));
    assert!(!ServerField::EDITABLE.contains(&ServerField::LastUpdated));
}

// =============================================================
// field_text / contains_text
// =============================================================

#[test]
fn field_text_renders_every_attribute() {
    let record = web();
    assert_eq!(record.field_text(ServerField::Id), "1");
    assert_eq!(record.field_text(ServerField::Hostname), "web-server-01");
    assert_eq!(record.field_text(ServerField::Status), "Live");
    assert_eq!(record.field_text(ServerField::LastUpdated), "2024-01-15T10:30:00Z");
}

#[test]
fn field_text_of_absent_optional_is_empty() {
    let mut record = web();
    record.manufacturer = None;
    record.application_spoc = None;
    assert_eq!(record.field_text(ServerField::Manufacturer), "");
    assert_eq!(record.field_text(ServerField::ApplicationSpoc), "");
}

#[test]
fn contains_text_is_case_insensitive_and_unanchored() {
    let record = web();
    assert!(record.contains_text("commerce"));
    assert!(record.contains_text("web server"));
    assert!(record.contains_text("2024-01-15"));
    assert!(!record.contains_text("oracle"));
}

#[test]
fn contains_text_empty_needle_matches() {
    assert!(web().contains_text(""));
}

// =============================================================
// ServerDraft
// =============================================================

#[test]
fn draft_round_trips_through_record() {
    let record = web();
    let draft = ServerDraft::from_record(&record);
    let rebuilt = draft.into_record(record.id, record.last_updated);
    assert_eq!(rebuilt, record);
}

#[test]
fn draft_into_record_trims_and_drops_blank_optionals() {
    let draft = ServerDraft {
        server_ip: " 10.0.0.1 ".to_owned(),
        hostname: "edge-01 ".to_owned(),
        manufacturer: "   ".to_owned(),
        ram: String::new(),
        cpu: " 2 vCPU ".to_owned(),
        ..ServerDraft::default()
    };
    let now = datetime!(2024-02-01 00:00:00 UTC);
    let record = draft.into_record(ServerId(9), now);
    assert_eq!(record.server_ip, "10.0.0.1");
    assert_eq!(record.hostname, "edge-01");
    assert_eq!(record.manufacturer, None);
    assert_eq!(record.ram, None);
    assert_eq!(record.cpu.as_deref(), Some("2 vCPU"));
    assert_eq!(record.status, ServerStatus::New);
    assert_eq!(record.last_updated, now);
}

#[test]
fn draft_set_rejects_computed_fields() {
    let mut draft = ServerDraft::default();
    assert!(draft.set(ServerField::Hostname, "db-02"));
    assert_eq!(draft.get(ServerField::Hostname), Some("db-02"));
    assert!(!draft.set(ServerField::Id, "3"));
    assert_eq!(draft.get(ServerField::LastUpdated), None);
}

#[test]
fn record_serializes_with_camel_case_keys() {
    let json = serde_json::to_value(web()).unwrap();
    assert_eq!(json["serverIp"], "192.168.1.10");
    assert_eq!(json["lastUpdated"], "2024-01-15T10:30:00Z");
    assert_eq!(json["status"], "Live");
    let back: ServerRecord = serde_json::from_value(json).unwrap();
    assert_eq!(back, web());
}
