use super::*;

#[test]
fn seed_users_match_dashboard_defaults() {
    let users = users();
    let names = users.iter().map(|u| u.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["Abhay Singh", "Pankaj Kumar", "Rishi Raj", "Radhey", "Mudit Yadav"]);
    assert_eq!(users.iter().map(|u| u.id).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    assert_eq!(
        users.iter().filter(|u| u.status == UserStatus::Inactive).count(),
        2
    );
}

#[test]
fn seed_roles_have_expected_permission_counts() {
    let roles = roles();
    let summary = roles
        .iter()
        .map(|r| (r.name.as_str(), r.permissions.len()))
        .collect::<Vec<_>>();
    assert_eq!(
        summary,
        vec![("Admin", 4), ("Editor", 2), ("Viewer", 1), ("Manager", 3), ("Contributor", 2)]
    );
}

#[test]
fn seed_ids_are_unique() {
    let mut user_ids = users().into_iter().map(|u| u.id).collect::<Vec<_>>();
    user_ids.dedup();
    assert_eq!(user_ids.len(), 5);
    let mut role_ids = roles().into_iter().map(|r| r.id).collect::<Vec<_>>();
    role_ids.dedup();
    assert_eq!(role_ids.len(), 5);
}
