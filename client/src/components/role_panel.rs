//! Roles panel: search, permission filter, sortable table, permission chips.

use leptos::prelude::*;
use rbac::{Permission, PanelState, Role, RoleSortField, Roles};

use crate::components::create_role_dialog::CreateRoleDialog;
use crate::components::entity_table::{FilterSelect, PanelHeader, empty_row, search_box, sort_header};
use crate::util::logging;
use crate::util::options::{filter_value, parse_filter, permission_options};

#[cfg(test)]
#[path = "role_panel_test.rs"]
mod role_panel_test;

/// Chip class for a permission that is granted or not.
pub fn permission_chip_class(granted: bool) -> &'static str {
    if granted {
        "permission-chip permission-chip--granted"
    } else {
        "permission-chip"
    }
}

/// Tab content managing the role collection.
#[component]
pub fn RolePanel() -> impl IntoView {
    let panel = expect_context::<RwSignal<PanelState<Roles>>>();
    // Recomputed only when the store version or the query moves; draft
    // edits and dialog toggles leave the key unchanged.
    let view_key = Memo::new(move |_| panel.with(PanelState::view_key));
    let rows = Memo::new(move |_| {
        view_key.track();
        panel.with_untracked(PanelState::visible)
    });

    let permission_value = Signal::derive(move || panel.with(|p| filter_value(p.query().filter.permission)));
    let on_permission = Callback::new(move |raw: String| {
        panel.update(|p| p.update_filter(|f| f.permission = parse_filter(&raw)));
    });
    let on_add = Callback::new(move |()| panel.update(PanelState::open_create));

    view! {
        <section class="entity-panel">
            <PanelHeader title="Roles" add_label="Add Role" on_add=on_add/>
            <div class="entity-panel__toolbar">
                {search_box(panel, "Search roles...")}
                <FilterSelect
                    all_label="All Permissions"
                    options=permission_options()
                    value=permission_value
                    on_change=on_permission
                />
            </div>
            <div class="entity-table__wrap">
                <table class="entity-table">
                    <thead>
                        <tr>
                            {RoleSortField::ALL
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
                                return empty_row(RoleSortField::ALL.len() + 1, "No roles found.").into_any();
                            }
                            rows.into_iter()
                                .map(|role| view! { <RoleRow role=role panel=panel/> })
                                .collect_view()
                                .into_any()
                        }}
                    </tbody>
                </table>
            </div>
            <Show when=move || panel.with(PanelState::is_create_open)>
                <CreateRoleDialog panel=panel/>
            </Show>
        </section>
    }
}

#[component]
fn RoleRow(role: Role, panel: RwSignal<PanelState<Roles>>) -> impl IntoView {
    let id = role.id;
    let on_delete = move |_| {
        panel.update(|p| {
            if p.delete(id) {
                logging::mutation("role", "deleted", id);
            }
        });
    };

    view! {
        <tr class="entity-table__row">
            <td>{role.name}</td>
            <td>
                <div class="permission-chips">
                    {Permission::ALL
                        .into_iter()
                        .map(|permission| {
                            let granted = role.permissions.contains(permission);
                            let on_toggle = move |_| {
                                panel.update(|p| {
                                    if p.toggle_permission(id, permission) {
                                        logging::mutation("role", "permission toggled", id);
                                    }
                                });
                            };
                            view! {
                                <button
                                    class=permission_chip_class(granted)
                                    aria-pressed=granted.to_string()
                                    on:click=on_toggle
                                >
                                    {permission.as_str()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </td>
            <td class="entity-table__actions">
                <button class="btn btn--link btn--danger" on:click=on_delete>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
