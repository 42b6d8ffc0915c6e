use super::*;
use time::macros::datetime;

const NOW: OffsetDateTime = datetime!(2024-01-15 12:00:00 UTC);

fn draft(username: &str, email: &str, role: Option<UserRole>) -> UserDraft {
    UserDraft { username: username.to_owned(), email: email.to_owned(), role, status: UserStatus::Active }
}

fn usernames<'a>(view: &UserView<'a>) -> Vec<&'a str> {
    view.visible.iter().map(|u| u.username.as_str()).collect()
}

// =============================================================
// Validation
// =============================================================

#[test]
fn valid_draft_passes() {
    assert_eq!(validate_user(&draft("ops_bot", "ops@infosec.com", Some(UserRole::User))), Ok(()));
}

#[test]
fn blank_draft_reports_three_fields() {
    let errors = validate_user(&UserDraft::default()).unwrap_err();
    assert_eq!(errors.get("username"), Some("Username is required"));
    assert_eq!(errors.get("email"), Some("Email is required"));
    assert_eq!(errors.get("role"), Some("Role is required"));
}

#[test]
fn username_rules() {
    let short = validate_user(&draft("ab", "a@b.co", Some(UserRole::User))).unwrap_err();
    assert_eq!(short.get("username"), Some("Username must be at least 3 characters"));

    let symbols = validate_user(&draft("bad-name", "a@b.co", Some(UserRole::User))).unwrap_err();
    assert_eq!(symbols.get("username"), Some("Username can only contain letters, numbers, and underscores"));
}

#[test]
fn malformed_email_is_rejected() {
    let errors = validate_user(&draft("ops_bot", "ops@", Some(UserRole::Admin))).unwrap_err();
    assert_eq!(errors.get("email"), Some("Please enter a valid email address"));
    assert_eq!(errors.len(), 1);
}

// =============================================================
// Directory
// =============================================================

#[test]
fn add_assigns_next_id_and_never_logged_in() {
    let mut directory = UserDirectory::seeded();
    let id = directory.add(draft(" ops_bot ", "ops@infosec.com", Some(UserRole::User)), "Admin User", NOW).unwrap();
    assert_eq!(id, UserId(6));
    let account = directory.get(id).unwrap();
    assert_eq!(account.username, "ops_bot");
    assert_eq!(account.last_login, None);
    assert_eq!(account.created_by, "Admin User");
    assert_eq!(account.created_at, NOW);
}

#[test]
fn add_rejects_invalid_draft() {
    let mut directory = UserDirectory::seeded();
    let err = directory.add(UserDraft::default(), "Admin User", NOW).unwrap_err();
    assert!(matches!(err, UserError::Invalid(_)));
    assert_eq!(directory.users().len(), 5);
}

#[test]
fn add_fails_once_the_largest_id_is_taken() {
    let mut users = crate::seed::users();
    users[0].id = UserId(u64::MAX);
    let mut directory = UserDirectory::new(users);
    let err = directory.add(draft("ops_bot", "ops@infosec.com", None), "Admin User", NOW).unwrap_err();
    assert_eq!(err, UserError::IdsExhausted(UserId(u64::MAX)));
    assert_eq!(directory.users().len(), 5);
}

#[test]
fn update_overwrites_editable_fields() {
    let mut directory = UserDirectory::seeded();
    let mut edit = UserDraft::from_account(directory.get(UserId(2)).unwrap());
    edit.role = Some(UserRole::Admin);
    edit.email = "sarah@infosec.com".to_owned();
    directory.update(UserId(2), edit).unwrap();
    let account = directory.get(UserId(2)).unwrap();
    assert_eq!(account.role, UserRole::Admin);
    assert_eq!(account.email, "sarah@infosec.com");
}

#[test]
fn toggle_status_flips() {
    let mut directory = UserDirectory::seeded();
    assert_eq!(directory.toggle_status(UserId(3)), Ok(UserStatus::Active));
    assert_eq!(directory.toggle_status(UserId(3)), Ok(UserStatus::Inactive));
    assert_eq!(directory.toggle_status(UserId(42)), Err(UserError::NotFound(UserId(42))));
}

#[test]
fn remove_deletes_account() {
    let mut directory = UserDirectory::seeded();
    assert_eq!(directory.remove(UserId(5)).unwrap().username, "david_ops");
    assert!(directory.get(UserId(5)).is_none());
    assert!(directory.remove(UserId(5)).is_err());
}

// =============================================================
// Query
// =============================================================

#[test]
fn default_query_sorts_by_username() {
    let users = crate::seed::users();
    let view = UserQuery::default().apply(&users);
    assert_eq!(
        usernames(&view),
        vec!["admin_john", "david_ops", "lisa_readonly", "mike_security", "sarah_analyst"]
    );
    assert_eq!(view.total_pages, 1);
}

#[test]
fn search_covers_username_and_email() {
    let users = crate::seed::users();
    let by_email = UserQuery { search: "CLARK".to_owned(), ..UserQuery::default() };
    assert_eq!(usernames(&by_email.apply(&users)), vec!["david_ops"]);
    let by_role_text = UserQuery { search: "admin".to_owned(), ..UserQuery::default() };
    assert_eq!(usernames(&by_role_text.apply(&users)), vec!["admin_john"]);
}

#[test]
fn role_and_status_filters_combine() {
    let users = crate::seed::users();
    let query = UserQuery { role: Some(UserRole::Admin), status: Some(UserStatus::Active), ..UserQuery::default() };
    assert_eq!(usernames(&query.apply(&users)), vec!["admin_john"]);
}

#[test]
fn last_login_sort_puts_never_logged_in_first() {
    let mut users = crate::seed::users();
    users[4].last_login = None;
    let query = UserQuery {
        sort: UserSort { field: UserSortField::LastLogin, direction: SortDirection::Ascending },
        ..UserQuery::default()
    };
    let view = query.apply(&users);
    assert_eq!(usernames(&view)[..2], ["david_ops", "mike_security"]);
}

#[test]
fn user_sort_toggle() {
    let mut sort = UserSort::default();
    sort.toggle(UserSortField::Username);
    assert_eq!(sort.direction, SortDirection::Descending);
    sort.toggle(UserSortField::Email);
    assert_eq!(sort, UserSort { field: UserSortField::Email, direction: SortDirection::Ascending });
}

#[test]
fn sort_field_parses_snake_and_camel() {
    assert_eq!("last_login".parse::<UserSortField>(), Ok(UserSortField::LastLogin));
    assert_eq!("lastLogin".parse::<UserSortField>(), Ok(UserSortField::LastLogin));
    assert!("created".parse::<UserSortField>().is_err());
}

#[test]
fn user_pages_hold_ten() {
    let users: Vec<UserAccount> = (1..=23)
        .map(|n| UserAccount {
            id: UserId(n),
            username: format!("user_{n:02}"),
            email: format!("user{n}@infosec.com"),
            role: UserRole::User,
            status: UserStatus::Active,
            last_login: None,
            created_at: NOW,
            created_by: "seed".to_owned(),
        })
        .collect();
    let query = UserQuery { page: PageState::new(3, USERS_PAGE_SIZE), ..UserQuery::default() };
    let view = query.apply(&users);
    assert_eq!(view.total_pages, 3);
    assert_eq!(usernames(&view), vec!["user_21", "user_22", "user_23"]);
}

// =============================================================
// Stats
// =============================================================

#[test]
fn stats_over_seed() {
    let stats = UserStats::compute(&crate::seed::users(), NOW);
    assert_eq!(stats, UserStats { total_users: 5, active_users: 4, admin_users: 2, recent_logins: 3 });
}

#[test]
fn role_and_status_parse() {
    assert_eq!("Admin".parse::<UserRole>(), Ok(UserRole::Admin));
    assert_eq!("inactive".parse::<UserStatus>(), Ok(UserStatus::Inactive));
    assert_eq!(
        "owner".parse::<UserRole>(),
        Err(UnknownValue { kind: "role", value: "owner".to_owned() })
    );
}
