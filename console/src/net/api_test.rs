use super::*;
use std::sync::Mutex;
use std::time::Duration;

fn instant() -> MockBackend {
    MockBackend::new(Latencies::instant())
}

// =============================================================================
// login
// =============================================================================

#[tokio::test]
async fn every_demo_account_can_log_in() {
    let backend = instant();
    for account in MOCK_ACCOUNTS {
        let user = backend.login(&Credentials::new(account.username, account.password)).await.unwrap();
        assert_eq!(user.username, account.username);
        assert_eq!(user.name, account.name);
        assert_eq!(user.role, account.role);
    }
}

#[tokio::test]
async fn wrong_password_is_rejected() {
    let result = instant().login(&Credentials::new("admin@infosec.com", "admin@123")).await;
    assert_eq!(result, Err(ApiError::InvalidCredentials));
}

#[tokio::test]
async fn username_is_not_trimmed() {
    let result = instant().login(&Credentials::new(" it.analyst", "Analyst@456")).await;
    assert_eq!(result, Err(ApiError::InvalidCredentials));
}

#[tokio::test(start_paused = true)]
async fn login_waits_for_configured_latency() {
    let backend = MockBackend::default();
    let started = tokio::time::Instant::now();
    backend.login(&Credentials::new("user@infosec.com", "User@123")).await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(1500));
}

// =============================================================================
// upload / commit
// =============================================================================

#[tokio::test]
async fn upload_reports_each_step_and_returns_rows() {
    let seen = Mutex::new(Vec::new());
    let rows = instant()
        .upload("servers.xlsx", &|p: ImportProgress| seen.lock().unwrap().push(p.percent()))
        .await
        .unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(*seen.lock().unwrap(), vec![0, 20, 40, 60, 80, 100]);
}

#[tokio::test]
async fn upload_rejects_unsupported_names() {
    let result = instant().upload("servers.pdf", &|_: ImportProgress| {}).await;
    assert_eq!(result, Err(ApiError::Transfer(TransferError::UnsupportedFile("servers.pdf".to_owned()))));
}

#[tokio::test(start_paused = true)]
async fn commit_takes_two_seconds_by_default() {
    let backend = MockBackend::default();
    let started = tokio::time::Instant::now();
    let written = backend.commit_import(&[ServerDraft::default()], ImportMode::Append).await.unwrap();
    assert_eq!(written, 1);
    assert!(started.elapsed() >= Duration::from_secs(2));
}
