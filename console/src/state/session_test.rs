use super::*;
use inventory::users::UserRole;

fn admin() -> CurrentUser {
    CurrentUser { username: "admin@infosec.com".to_owned(), name: "Admin User".to_owned(), role: UserRole::Admin }
}

fn analyst() -> CurrentUser {
    CurrentUser { username: "it.analyst".to_owned(), name: "IT Analyst".to_owned(), role: UserRole::User }
}

// =============================================================================
// Restore
// =============================================================================

#[test]
fn fresh_session_has_defaults() {
    let session = Session::in_memory();
    assert!(!session.is_authenticated());
    assert_eq!(session.theme(), Theme::Light);
    assert!(!session.sidebar().collapsed());
}

#[test]
fn restores_from_store() {
    let mut store = MemoryPreferences::new();
    store.set("theme", "dark").unwrap();
    store.set("sidebarCollapsed", "true").unwrap();
    save_json(&mut store, USER_KEY, &analyst()).unwrap();
    let session = Session::new(Box::new(store), DEFAULT_VIEWPORT_WIDTH);
    assert_eq!(session.theme(), Theme::Dark);
    assert!(session.sidebar().collapsed());
    assert_eq!(session.user(), Some(&analyst()));
}

// =============================================================================
// Sign in / out
// =============================================================================

#[test]
fn sign_in_persists_and_sign_out_clears() {
    let mut session = Session::in_memory();
    session.sign_in(admin()).unwrap();
    assert!(session.preferences().get(USER_KEY).is_some());
    assert_eq!(session.require_admin(), Ok(&admin()));

    session.sign_out().unwrap();
    assert!(!session.is_authenticated());
    assert_eq!(session.preferences().get(USER_KEY), None);
    assert_eq!(session.require_user(), Err(AccessError::NotSignedIn));
}

#[test]
fn non_admin_is_refused_admin_areas() {
    let mut session = Session::in_memory();
    session.sign_in(analyst()).unwrap();
    assert!(session.require_user().is_ok());
    assert_eq!(session.require_admin(), Err(AccessError::AdminRequired));
}

// =============================================================================
// Theme / sidebar
// =============================================================================

#[test]
fn theme_toggle_writes_through() {
    let mut session = Session::in_memory();
    assert_eq!(session.toggle_theme().unwrap(), Theme::Dark);
    assert_eq!(session.preferences().get("theme").as_deref(), Some("dark"));
    session.set_theme(Theme::Light).unwrap();
    assert_eq!(session.preferences().get("theme").as_deref(), Some("light"));
}

#[test]
fn sidebar_follows_viewport() {
    let mut session = Session::new(Box::new(MemoryPreferences::new()), 800);
    assert!(session.sidebar().collapsed());
    session.toggle_sidebar().unwrap();
    assert!(session.sidebar().mobile_open());
    session.resize(1300);
    assert!(!session.sidebar().mobile_open());
    session.toggle_sidebar().unwrap();
    assert!(!session.sidebar().collapsed());
    assert_eq!(session.preferences().get("sidebarCollapsed").as_deref(), Some("false"));
}
