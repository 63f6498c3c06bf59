//! Dashboard page: title, Users/Roles tab switcher, and the active panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only route of the app. Panel state is read from context by the panel
//! components themselves, so this page only tracks which tab is showing.

use leptos::prelude::*;

use crate::components::role_panel::RolePanel;
use crate::components::user_panel::UserPanel;
use crate::state::ui::{DashboardTab, UiState};

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

/// Whether `tab` is the one currently shown, as an `aria-selected` value.
pub fn aria_selected(active: DashboardTab, tab: DashboardTab) -> &'static str {
    if active == tab { "true" } else { "false" }
}

/// Dashboard page with the two-tab switcher.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let active = move || ui.with(|u| u.active_tab);

    view! {
        <div class="dashboard-page">
            <h1 class="dashboard-page__title">"RBAC Dashboard"</h1>
            <nav class="dashboard-page__tabs" role="tablist">
                {DashboardTab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                class="dashboard-page__tab"
                                class:dashboard-page__tab--active=move || active() == tab
                                role="tab"
                                aria-selected=move || aria_selected(active(), tab)
                                on:click=move |_| ui.update(|u| u.active_tab = tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="dashboard-page__body" role="tabpanel">
                {move || match active() {
                    DashboardTab::Users => view! { <UserPanel/> }.into_any(),
                    DashboardTab::Roles => view! { <RolePanel/> }.into_any(),
                }}
            </div>
        </div>
    }
}
