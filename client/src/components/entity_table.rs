//! Shared building blocks for entity panels.
//!
//! The functions here are generic over `EntityKind`, so the same search box
//! and sortable header work against `PanelState<Users>` and
//! `PanelState<Roles>` alike.

use leptos::prelude::*;
use rbac::{EntityKind, PanelState, SortDirection};

use crate::util::options::{ALL_VALUE, SelectOption};

#[cfg(test)]
#[path = "entity_table_test.rs"]
mod entity_table_test;

/// What a key press inside a creation dialog does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogKey {
    Dismiss,
    Submit,
    Ignore,
}

pub fn dialog_key(key: &str) -> DialogKey {
    match key {
        "Escape" => DialogKey::Dismiss,
        "Enter" => DialogKey::Submit,
        _ => DialogKey::Ignore,
    }
}

/// Move keyboard focus into a dialog once it is mounted, so Escape reaches
/// the dialog's key handler without a click first.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn focus_on_mount(target: NodeRef<leptos::html::Input>) {
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = target.get()
                && input.focus().is_err()
            {
                log::debug!("dialog input refused focus");
            }
        }
    });
}

/// Arrow shown next to the active sort column.
pub fn chevron(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Ascending => "▲",
        SortDirection::Descending => "▼",
    }
}

/// `aria-sort` value for a column header.
pub fn aria_sort(indicator: Option<SortDirection>) -> &'static str {
    match indicator {
        Some(SortDirection::Ascending) => "ascending",
        Some(SortDirection::Descending) => "descending",
        None => "none",
    }
}

/// Panel title row with the "Add ..." button that opens the creation form.
#[component]
pub fn PanelHeader(title: &'static str, add_label: &'static str, on_add: Callback<()>) -> impl IntoView {
    view! {
        <div class="entity-panel__header">
            <h2 class="entity-panel__title">{title}</h2>
            <button class="btn btn--primary" on:click=move |_| on_add.run(())>
                {add_label}
            </button>
        </div>
    }
}

/// Free-text search input bound to the panel query.
pub fn search_box<K: EntityKind>(panel: RwSignal<PanelState<K>>, placeholder: &'static str) -> impl IntoView {
    view! {
        <input
            class="entity-panel__search"
            type="search"
            placeholder=placeholder
            prop:value=move || panel.with(|p| p.query().search.clone())
            on:input=move |ev| {
                let value = event_target_value(&ev);
                panel.update(|p| p.set_search(value));
            }
        />
    }
}

/// Categorical filter selector with a leading "All ..." option.
#[component]
pub fn FilterSelect(
    all_label: &'static str,
    options: Vec<SelectOption>,
    value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            class="entity-panel__filter"
            prop:value=move || value.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value=ALL_VALUE selected=move || value.get() == ALL_VALUE>
                {all_label}
            </option>
            {options
                .into_iter()
                .map(|option| {
                    view! {
                        <option value=option.value selected=move || value.get() == option.value>
                            {option.label}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}

/// Clickable column header; shows a chevron while the column is active.
pub fn sort_header<K: EntityKind>(
    panel: RwSignal<PanelState<K>>,
    field: K::SortField,
    label: &'static str,
) -> impl IntoView {
    let indicator = move || panel.with(|p| p.query().sort.indicator(field));
    view! {
        <th
            class="entity-table__th entity-table__th--sortable"
            aria-sort=move || aria_sort(indicator())
            on:click=move |_| panel.update(|p| p.click_sort(field))
        >
            <span class="entity-table__th-label">{label}</span>
            <span class="entity-table__chevron">{move || indicator().map(chevron)}</span>
        </th>
    }
}

/// Single row spanning the table when nothing matches the query.
pub fn empty_row(colspan: usize, message: &'static str) -> impl IntoView {
    view! {
        <tr class="entity-table__empty">
            <td colspan=colspan.to_string()>{message}</td>
        </tr>
    }
}

/// Inline validation message under a form input.
pub fn field_error(message: Option<String>) -> impl IntoView {
    message.map(|m| view! { <p class="dialog__error">{m}</p> })
}
