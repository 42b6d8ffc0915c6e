use super::*;
use crate::config::Latencies;
use crate::net::api::MockBackend;
use inventory::users::UserRole;

fn backend() -> MockBackend {
    MockBackend::new(Latencies::instant())
}

// =============================================================================
// validate_login
// =============================================================================

#[test]
fn blank_form_reports_both_fields() {
    let errors = validate_login(&Credentials::default()).unwrap_err();
    assert_eq!(errors.get("username"), Some("Username or email is required"));
    assert_eq!(errors.get("password"), Some("Password is required"));
}

#[test]
fn email_like_usernames_must_be_well_formed() {
    let errors = validate_login(&Credentials::new("admin@", "secret1")).unwrap_err();
    assert_eq!(errors.get("username"), Some("Please enter a valid email address"));
    assert!(validate_login(&Credentials::new("security.admin", "secret1")).is_ok());
    assert!(validate_login(&Credentials::new("admin@infosec.com", "secret1")).is_ok());
}

#[test]
fn short_password_is_rejected() {
    let errors = validate_login(&Credentials::new("it.analyst", "abc")).unwrap_err();
    assert_eq!(errors.get("password"), Some("Password must be at least 6 characters"));
    assert_eq!(errors.len(), 1);
}

// =============================================================================
// submit
// =============================================================================

#[tokio::test]
async fn success_signs_in_and_resets_attempts() {
    let mut form = LoginForm::new(5);
    let mut session = Session::in_memory();
    let _ = form.submit(&backend(), &mut session, &Credentials::new("it.analyst", "wrong-pass")).await;
    assert_eq!(form.attempts(), 1);

    let user = form
        .submit(&backend(), &mut session, &Credentials::new("it.analyst", "Analyst@456"))
        .await
        .unwrap();
    assert_eq!(user.role, UserRole::User);
    assert_eq!(session.user(), Some(&user));
    assert_eq!(form.attempts(), 0);
}

#[tokio::test]
async fn failures_count_down_then_lock() {
    let mut form = LoginForm::new(5);
    let mut session = Session::in_memory();
    let bad = Credentials::new("admin@infosec.com", "not-it-123");

    for expected in (1..=4).rev() {
        match form.submit(&backend(), &mut session, &bad).await {
            Err(LoginError::Rejected { remaining }) => assert_eq!(remaining, expected),
            other => panic!("unexpected {other:?}"),
        }
    }
    assert!(matches!(form.submit(&backend(), &mut session, &bad).await, Err(LoginError::LockedOut)));
    assert!(form.is_locked());

    // Even the right password is refused once locked.
    let good = Credentials::new("admin@infosec.com", "Admin@123");
    assert!(matches!(form.submit(&backend(), &mut session, &good).await, Err(LoginError::Locked)));
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn validation_errors_do_not_count_as_attempts() {
    let mut form = LoginForm::new(5);
    let mut session = Session::in_memory();
    let err = form.submit(&backend(), &mut session, &Credentials::new("", "")).await.unwrap_err();
    assert!(matches!(err, LoginError::Invalid(_)));
    assert_eq!(form.attempts(), 0);
}

#[test]
fn rejection_message_reports_remaining_attempts() {
    assert_eq!(
        LoginError::Rejected { remaining: 2 }.to_string(),
        "Invalid username or password. 2 attempts remaining before account lockout."
    );
}
