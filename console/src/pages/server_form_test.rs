use super::*;
use crate::config::Latencies;
use crate::net::api::MockBackend;
use inventory::ServerStatus;
use inventory::validate::{INVALID_IP_MESSAGE, REQUIRED_MESSAGE};
use time::macros::datetime;

const NOW: OffsetDateTime = datetime!(2024-02-01 08:00:00 UTC);

fn backend() -> MockBackend {
    MockBackend::new(Latencies::instant())
}

fn filled() -> ServerForm {
    let mut form = ServerForm::add();
    for (field, value) in [
        (ServerField::ServerIp, "10.20.0.15"),
        (ServerField::Hostname, "queue-01"),
        (ServerField::OperatingSystem, "Debian 12"),
        (ServerField::ServerRole, "Message Broker"),
        (ServerField::ServerType, "Virtual"),
        (ServerField::ApplicationName, "Event Bus"),
        (ServerField::ApplicationOwner, "Platform Team"),
        (ServerField::Platform, "Linux"),
        (ServerField::Location, "Data Center B"),
    ] {
        assert!(form.set(field, value));
    }
    form
}

// =============================================================================
// Editing
// =============================================================================

#[test]
fn computed_columns_are_not_editable() {
    let mut form = ServerForm::add();
    assert!(!form.set(ServerField::LastUpdated, "now"));
    assert!(!form.set(ServerField::Id, "9"));
}

#[test]
fn editing_a_field_clears_its_error() {
    let mut form = ServerForm::add();
    assert!(!form.validate());
    assert_eq!(form.errors().get("hostname"), Some(REQUIRED_MESSAGE));
    form.set(ServerField::Hostname, "x");
    assert_eq!(form.errors().get("hostname"), None);
    assert_eq!(form.errors().get("serverIp"), Some(REQUIRED_MESSAGE));
}

#[test]
fn edit_prefills_from_record() {
    let page = InventoryPage::seeded();
    let form = ServerForm::edit(&page, ServerId(2)).unwrap();
    assert_eq!(form.mode(), FormMode::Edit(ServerId(2)));
    assert_eq!(form.draft().hostname, page.store().get(ServerId(2)).unwrap().hostname);
    assert!(ServerForm::edit(&page, ServerId(404)).is_err());
}

// =============================================================================
// Saving
// =============================================================================

#[tokio::test]
async fn invalid_draft_is_not_saved() {
    let mut page = InventoryPage::seeded();
    let before = page.store().len();
    let mut form = filled();
    form.set(ServerField::ServerIp, "10.20.0.300");
    let err = form.save(&backend(), &mut page, NOW).await.unwrap_err();
    match err {
        FormError::Invalid(errors) => assert_eq!(errors.get("serverIp"), Some(INVALID_IP_MESSAGE)),
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(page.store().len(), before);
}

#[tokio::test]
async fn add_then_save_again_updates_the_same_record() {
    let mut page = InventoryPage::seeded();
    let mut form = filled();
    let first = form.save(&backend(), &mut page, NOW).await.unwrap();
    assert_eq!(first.message, ADDED_MESSAGE);
    assert_eq!(page.store().get(first.id).unwrap().status, ServerStatus::New);

    form.set(ServerField::Cpu, "4 vCPU");
    let second = form.save(&backend(), &mut page, NOW).await.unwrap();
    assert_eq!(second, Saved { id: first.id, message: UPDATED_MESSAGE });
    assert_eq!(page.store().get(first.id).unwrap().cpu.as_deref(), Some("4 vCPU"));
}

#[tokio::test]
async fn save_and_add_another_resets_the_form() {
    let mut page = InventoryPage::seeded();
    let mut form = filled();
    let saved = form.save_and_add_another(&backend(), &mut page, NOW).await.unwrap();
    assert_eq!(saved.message, ADD_ANOTHER_MESSAGE);
    assert!(page.store().get(saved.id).is_some());
    assert_eq!(form, ServerForm::add());
}

#[tokio::test]
async fn editing_a_deleted_record_fails() {
    let mut page = InventoryPage::seeded();
    let mut form = ServerForm::edit(&page, ServerId(3)).unwrap();
    page.remove(ServerId(3)).unwrap();
    let err = form.save(&backend(), &mut page, NOW).await.unwrap_err();
    assert!(matches!(err, FormError::Store(StoreError::NotFound(ServerId(3)))));
}
