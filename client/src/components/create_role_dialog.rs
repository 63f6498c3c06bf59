//! Modal form for adding a role.

use leptos::prelude::*;
use rbac::{PanelState, Permission, RoleField, Roles, SubmitError};

use crate::components::entity_table::{DialogKey, dialog_key, field_error, focus_on_mount};
use crate::util::logging;

/// Creation dialog bound to the roles panel draft.
#[component]
pub fn CreateRoleDialog(panel: RwSignal<PanelState<Roles>>) -> impl IntoView {
    let close = Callback::new(move |()| panel.update(PanelState::close_create));
    let submit = Callback::new(move |()| {
        panel.update(|p| {
            match p.submit() {
                Ok(id) => logging::mutation("role", "created", id),
                Err(SubmitError::Store(err)) => logging::rejected("role", &err),
                Err(SubmitError::Invalid(_)) => {}
            }
        });
    });
    let name_error = move || panel.with(|p| p.errors().message(RoleField::Name));
    let name_ref = NodeRef::<leptos::html::Input>::new();
    focus_on_mount(name_ref);

    view! {
        <div class="dialog-backdrop" on:click=move |_| close.run(())>
            <div
                class="dialog"
                role="dialog"
                aria-modal="true"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if dialog_key(&ev.key()) == DialogKey::Dismiss {
                        ev.prevent_default();
                        close.run(());
                    }
                }
            >
                <h2>"Add New Role"</h2>
                <label class="dialog__label">
                    "Role Name"
                    <input
                        class="dialog__input"
                        class:dialog__input--invalid=move || name_error().is_some()
                        type="text"
                        placeholder="Role Name"
                        node_ref=name_ref
                        autofocus=true
                        prop:value=move || panel.with(|p| p.draft().name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            panel.update(|p| p.edit_draft(|d| d.name = value));
                        }
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if dialog_key(&ev.key()) == DialogKey::Submit {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                {move || field_error(name_error())}
                <fieldset class="dialog__fieldset">
                    <legend class="dialog__label">"Permissions:"</legend>
                    {Permission::ALL
                        .into_iter()
                        .map(|permission| {
                            view! {
                                <label class="dialog__checkbox">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || {
                                            panel.with(|p| p.draft().permissions.contains(permission))
                                        }
                                        on:change=move |_| panel.update(|p| p.toggle_draft_permission(permission))
                                    />
                                    <span>{permission.as_str()}</span>
                                </label>
                            }
                        })
                        .collect_view()}
                </fieldset>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Add Role"
                    </button>
                </div>
            </div>
        </div>
    }
}
