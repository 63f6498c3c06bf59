use super::*;

#[test]
fn role_options_follow_creation_form_choices() {
    let values = role_options().into_iter().map(|o| o.value).collect::<Vec<_>>();
    assert_eq!(values, vec!["Admin", "Editor", "Viewer"]);
}

#[test]
fn status_options_use_labels_as_values() {
    assert_eq!(
        status_options(),
        vec![
            SelectOption { value: "Active", label: "Active" },
            SelectOption { value: "Inactive", label: "Inactive" },
        ]
    );
}

#[test]
fn permission_options_pair_lowercase_value_with_capitalized_label() {
    let first = permission_options().first().copied();
    assert_eq!(first, Some(SelectOption { value: "create", label: "Create" }));
    assert_eq!(permission_options().len(), 4);
}

#[test]
fn sentinel_round_trips_to_none() {
    assert_eq!(filter_value::<UserStatus>(None), "");
    assert_eq!(parse_filter::<UserStatus>(""), None);
    assert_eq!(parse_text_filter(""), None);
}

#[test]
fn typed_values_round_trip() {
    assert_eq!(filter_value(Some(UserStatus::Inactive)), "Inactive");
    assert_eq!(parse_filter::<UserStatus>("Inactive"), Some(UserStatus::Inactive));
    assert_eq!(filter_value(Some(Permission::Update)), "update");
    assert_eq!(parse_filter::<Permission>("update"), Some(Permission::Update));
    assert_eq!(filter_value(Some("Editor")), "Editor");
    assert_eq!(parse_text_filter("Editor").as_deref(), Some("Editor"));
}

#[test]
fn unknown_values_clear_typed_filters() {
    assert_eq!(parse_filter::<Permission>("admin"), None);
}
