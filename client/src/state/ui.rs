//! Local UI chrome state (active dashboard tab).

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// The two entity panels reachable from the tab switcher.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardTab {
    #[default]
    Users,
    Roles,
}

impl DashboardTab {
    pub const ALL: [Self; 2] = [Self::Users, Self::Roles];

    pub fn label(self) -> &'static str {
        match self {
            Self::Users => "User Management",
            Self::Roles => "Role Management",
        }
    }
}

/// UI state for the dashboard shell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub active_tab: DashboardTab,
}
