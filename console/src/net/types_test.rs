use super::*;

#[test]
fn credentials_debug_hides_password() {
    let creds = Credentials::new("admin@infosec.com", "Admin@123");
    let rendered = format!("{creds:?}");
    assert!(rendered.contains("admin@infosec.com"));
    assert!(!rendered.contains("Admin@123"));
}

#[test]
fn current_user_admin_check() {
    let user = CurrentUser { username: "it.analyst".to_owned(), name: "IT Analyst".to_owned(), role: UserRole::User };
    assert!(!user.is_admin());
    let admin = CurrentUser { role: UserRole::Admin, ..user };
    assert!(admin.is_admin());
}

#[test]
fn current_user_serializes_role_lowercase() {
    let user = CurrentUser { username: "security.admin".to_owned(), name: "Security Administrator".to_owned(), role: UserRole::Admin };
    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json["role"], "admin");
    let back: CurrentUser = serde_json::from_value(json).unwrap();
    assert_eq!(back, user);
}

#[test]
fn progress_percent_steps_by_twenty() {
    let percents: Vec<u32> = (0..=5).map(|step| ImportProgress { step, steps: 5 }.percent()).collect();
    assert_eq!(percents, vec![0, 20, 40, 60, 80, 100]);
    assert!(ImportProgress { step: 5, steps: 5 }.is_done());
    assert_eq!(ImportProgress { step: 0, steps: 0 }.percent(), 100);
}
