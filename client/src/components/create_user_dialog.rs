//! Modal form for adding a user.
//!
//! Submitting runs the users panel validation. Failures stay inline next to
//! each input until the user corrects the field and submits again.

use leptos::prelude::*;
use rbac::user::ROLE_OPTIONS;
use rbac::{PanelState, SubmitError, UserField, Users};

use crate::components::entity_table::{DialogKey, dialog_key, field_error, focus_on_mount};
use crate::util::logging;

/// Creation dialog bound to the users panel draft.
#[component]
pub fn CreateUserDialog(panel: RwSignal<PanelState<Users>>) -> impl IntoView {
    let close = Callback::new(move |()| panel.update(PanelState::close_create));
    let submit = Callback::new(move |()| {
        panel.update(|p| {
            match p.submit() {
                Ok(id) => logging::mutation("user", "created", id),
                Err(SubmitError::Store(err)) => logging::rejected("user", &err),
                Err(SubmitError::Invalid(_)) => {}
            }
        });
    });
    let error = move |field: UserField| panel.with(|p| p.errors().message(field));
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if dialog_key(&ev.key()) == DialogKey::Dismiss {
            ev.prevent_default();
            close.run(());
        }
    };
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
                on:keydown=on_keydown
            >
                <h2>"Add New User"</h2>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        class:dialog__input--invalid=move || error(UserField::Name).is_some()
                        type="text"
                        placeholder="Name"
                        node_ref=name_ref
                        autofocus=true
                        prop:value=move || panel.with(|p| p.draft().name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            panel.update(|p| p.edit_draft(|d| d.name = value));
                        }
                    />
                </label>
                {move || field_error(error(UserField::Name))}
                <label class="dialog__label">
                    "Email"
                    <input
                        class="dialog__input"
                        class:dialog__input--invalid=move || error(UserField::Email).is_some()
                        type="email"
                        placeholder="Email"
                        prop:value=move || panel.with(|p| p.draft().email.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            panel.update(|p| p.edit_draft(|d| d.email = value));
                        }
                    />
                </label>
                {move || field_error(error(UserField::Email))}
                <label class="dialog__label">
                    "Role"
                    <select
                        class="dialog__input"
                        class:dialog__input--invalid=move || error(UserField::Role).is_some()
                        prop:value=move || panel.with(|p| p.draft().role.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            panel.update(|p| p.edit_draft(|d| d.role = value));
                        }
                    >
                        <option value="">"Select Role"</option>
                        {ROLE_OPTIONS
                            .into_iter()
                            .map(|role| view! { <option value=role>{role}</option> })
                            .collect_view()}
                    </select>
                </label>
                {move || field_error(error(UserField::Role))}
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Add User"
                    </button>
                </div>
            </div>
        </div>
    }
}
