use super::*;

#[test]
fn ui_state_default_shows_users() {
    let state = UiState::default();
    assert_eq!(state.active_tab, DashboardTab::Users);
}

#[test]
fn tab_labels_match_switcher_text() {
    assert_eq!(DashboardTab::Users.label(), "User Management");
    assert_eq!(DashboardTab::Roles.label(), "Role Management");
}

#[test]
fn tabs_listed_in_display_order() {
    assert_eq!(DashboardTab::ALL, [DashboardTab::Users, DashboardTab::Roles]);
    assert_ne!(DashboardTab::Users, DashboardTab::Roles);
}
