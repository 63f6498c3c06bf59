//! Users panel: search, role/status filters, sortable table, row actions.

use leptos::prelude::*;
use rbac::{PanelState, User, UserSortField, UserStatus, Users};

use crate::components::create_user_dialog::CreateUserDialog;
use crate::components::entity_table::{FilterSelect, PanelHeader, empty_row, search_box, sort_header};
use crate::util::logging;
use crate::util::options::{filter_value, parse_filter, parse_text_filter, role_options, status_options};

#[cfg(test)]
#[path = "user_panel_test.rs"]
mod user_panel_test;

/// Label of the status toggle button for a user currently in `status`.
pub fn status_action_label(status: UserStatus) -> &'static str {
    match status {
        UserStatus::Active => "Deactivate",
        UserStatus::Inactive => "Activate",
    }
}

/// Modifier class of the status badge.
pub fn status_badge_class(status: UserStatus) -> &'static str {
    match status {
        UserStatus::Active => "status-badge status-badge--active",
        UserStatus::Inactive => "status-badge status-badge--inactive",
    }
}

/// Tab content managing the user collection.
#[component]
pub fn UserPanel() -> impl IntoView {
    let panel = expect_context::<RwSignal<PanelState<Users>>>();
    // Recomputed only when the store version or the query moves; draft
    // edits and dialog toggles leave the key unchanged.
    let view_key = Memo::new(move |_| panel.with(PanelState::view_key));
    let rows = Memo::new(move |_| {
        view_key.track();
        panel.with_untracked(PanelState::visible)
    });

    let role_value = Signal::derive(move || panel.with(|p| filter_value(p.query().filter.role.as_deref())));
    let status_value = Signal::derive(move || panel.with(|p| filter_value(p.query().filter.status)));
    let on_role = Callback::new(move |raw: String| {
        panel.update(|p| p.update_filter(|f| f.role = parse_text_filter(&raw)));
    });
    let on_status = Callback::new(move |raw: String| {
        panel.update(|p| p.update_filter(|f| f.status = parse_filter(&raw)));
    });
    let on_add = Callback::new(move |()| panel.update(PanelState::open_create));

    view! {
        <section class="entity-panel">
            <PanelHeader title="Users" add_label="Add User" on_add=on_add/>
            <div class="entity-panel__toolbar">
                {search_box(panel, "Search users...")}
                <FilterSelect all_label="All Roles" options=role_options() value=role_value on_change=on_role/>
                <FilterSelect
                    all_label="All Statuses"
                    options=status_options()
                    value=status_value
                    on_change=on_status
                />
            </div>
            <div class="entity-table__wrap">
                <table class="entity-table">
                    <thead>
                        <tr>
                            {UserSortField::ALL
                                .into_iter()
                                .map(|field| sort_header(panel, field, field.label()))
                                .collect_view()}
                            <th class="entity-table__th">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = rows.get();
                            if rows.is_empty() {
                                return empty_row(UserSortField::ALL.len() + 1, "No users found.").into_any();
                            }
                            rows.into_iter()
                                .map(|user| view! { <UserRow user=user panel=panel/> })
                                .collect_view()
                                .into_any()
                        }}
                    </tbody>
                </table>
            </div>
            <Show when=move || panel.with(PanelState::is_create_open)>
                <CreateUserDialog panel=panel/>
            </Show>
        </section>
    }
}

#[component]
fn UserRow(user: User, panel: RwSignal<PanelState<Users>>) -> impl IntoView {
    let id = user.id;
    let on_toggle = move |_| {
        panel.update(|p| {
            if p.toggle_status(id) {
                logging::mutation("user", "status toggled", id);
            }
        });
    };
    let on_delete = move |_| {
        panel.update(|p| {
            if p.delete(id) {
                logging::mutation("user", "deleted", id);
            }
        });
    };

    view! {
        <tr class="entity-table__row">
            <td>{user.name}</td>
            <td>{user.email}</td>
            <td>{user.role}</td>
            <td>
                <span class=status_badge_class(user.status)>{user.status.label()}</span>
            </td>
            <td class="entity-table__actions">
                <button class="btn btn--link" on:click=on_toggle>
                    {status_action_label(user.status)}
                </button>
                <button class="btn btn--link btn--danger" on:click=on_delete>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
