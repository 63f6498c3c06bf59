use super::*;

fn draft(name: &str, email: &str, role: &str) -> UserDraft {
    UserDraft {
        name: name.to_owned(),
        email: email.to_owned(),
        role: role.to_owned(),
        status: UserStatus::Active,
    }
}

fn user(id: EntityId, name: &str, email: &str, role: &str, status: UserStatus) -> User {
    User {
        id,
        name: name.to_owned(),
        email: email.to_owned(),
        role: role.to_owned(),
        status,
    }
}

// =============================================================
// UserStatus
// =============================================================

#[test]
fn status_toggle_flips_both_ways() {
    assert_eq!(UserStatus::Active.toggled(), UserStatus::Inactive);
    assert_eq!(UserStatus::Inactive.toggled(), UserStatus::Active);
}

#[test]
fn status_default_is_active() {
    assert_eq!(UserStatus::default(), UserStatus::Active);
    assert_eq!(UserDraft::default().status, UserStatus::Active);
}

#[test]
fn status_parses_labels_only() {
    assert_eq!("Active".parse::<UserStatus>(), Ok(UserStatus::Active));
    assert_eq!("Inactive".parse::<UserStatus>(), Ok(UserStatus::Inactive));
    assert!("active".parse::<UserStatus>().is_err());
    assert!("".parse::<UserStatus>().is_err());
}

#[test]
fn status_serializes_as_label() {
    let json = serde_json::to_string(&UserStatus::Inactive).unwrap();
    assert_eq!(json, "\"Inactive\"");
}

// =============================================================
// Validation
// =============================================================

#[test]
fn valid_draft_passes() {
    assert!(Users::validate(&draft("Ada", "ada@example.com", "Admin")).is_ok());
}

#[test]
fn all_empty_fields_fail_together() {
    let errors = Users::validate(&draft("", "bad", "")).unwrap_err();
    assert_eq!(errors.len(), 3);
    assert_eq!(errors.get(UserField::Name), Some(ValidationError::NameRequired));
    assert_eq!(errors.get(UserField::Email), Some(ValidationError::EmailInvalid));
    assert_eq!(errors.get(UserField::Role), Some(ValidationError::RoleRequired));
}

#[test]
fn whitespace_name_is_required_error() {
    let errors = Users::validate(&draft("   ", "a@b.co", "Viewer")).unwrap_err();
    assert_eq!(errors.message(UserField::Name).as_deref(), Some("Name is required"));
    assert_eq!(errors.len(), 1);
}

#[test]
fn empty_email_reports_required_not_invalid() {
    let errors = Users::validate(&draft("Ada", "  ", "Viewer")).unwrap_err();
    assert_eq!(errors.get(UserField::Email), Some(ValidationError::EmailRequired));
}

#[test]
fn malformed_email_reports_invalid() {
    let errors = Users::validate(&draft("Ada", "ada@example", "Viewer")).unwrap_err();
    assert_eq!(errors.message(UserField::Email).as_deref(), Some("Email is invalid"));
}

// =============================================================
// Filtering and ordering
// =============================================================

#[test]
fn absent_filters_match_everything() {
    let u = user(1, "A", "a@x.io", "Editor", UserStatus::Inactive);
    assert!(Users::matches_filter(&u, &UserFilter::default()));
}

#[test]
fn role_and_status_filters_must_both_match() {
    let u = user(1, "A", "a@x.io", "Editor", UserStatus::Active);
    let both = UserFilter {
        role: Some("Editor".to_owned()),
        status: Some(UserStatus::Active),
    };
    let wrong_status = UserFilter {
        role: Some("Editor".to_owned()),
        status: Some(UserStatus::Inactive),
    };
    let wrong_role = UserFilter {
        role: Some("Admin".to_owned()),
        status: None,
    };
    assert!(Users::matches_filter(&u, &both));
    assert!(!Users::matches_filter(&u, &wrong_status));
    assert!(!Users::matches_filter(&u, &wrong_role));
}

#[test]
fn search_covers_name_and_email() {
    let u = user(1, "Abhay Singh", "abhay@example.com", "Admin", UserStatus::Active);
    assert_eq!(Users::search_fields(&u), vec!["Abhay Singh", "abhay@example.com"]);
}

#[test]
fn status_sorts_by_label() {
    let a = user(1, "A", "a@x.io", "Admin", UserStatus::Active);
    let b = user(2, "B", "b@x.io", "Admin", UserStatus::Inactive);
    assert_eq!(Users::compare(&a, &b, UserSortField::Status), Ordering::Less);
    assert_eq!(Users::compare(&b, &a, UserSortField::Status), Ordering::Greater);
}

#[test]
fn build_assigns_given_id() {
    let built = Users::build(9, draft("Ada", "ada@example.com", "Admin"));
    assert_eq!(built.id, 9);
    assert_eq!(built.name, "Ada");
    assert_eq!(built.status, UserStatus::Active);
}
