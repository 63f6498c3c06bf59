//! Generic list-management state behind one dashboard panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! The users and roles panels differ only in their [`EntityKind`]. Both get
//! the same store, query, sort-click handling, and creation-form lifecycle
//! from this module; kind-specific row actions live in the `impl` blocks at
//! the bottom.

use crate::entity::{EntityId, EntityKind};
use crate::form::{FormErrors, FormField};
use crate::role::{Permission, Roles};
use crate::store::{EntityStore, StoreError};
use crate::user::Users;
use crate::view::{ViewQuery, derive};

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

/// Why a creation-form submit did not add a record.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError<F: FormField> {
    #[error("draft failed validation on {} field(s)", .0.len())]
    Invalid(FormErrors<F>),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl<F: FormField> SubmitError<F> {
    /// Field failures, when the draft itself was rejected.
    #[must_use]
    pub fn validation(&self) -> Option<&FormErrors<F>> {
        match self {
            Self::Invalid(errors) => Some(errors),
            Self::Store(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PanelState<K: EntityKind> {
    store: EntityStore<K::Record>,
    query: ViewQuery<K>,
    draft: K::Draft,
    errors: FormErrors<K::Field>,
    create_open: bool,
}

impl<K: EntityKind> Default for PanelState<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: EntityKind> PanelState<K> {
    /// Panel over the kind's seed records, default query, form closed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_records(K::seed())
    }

    #[must_use]
    pub fn with_records(records: Vec<K::Record>) -> Self {
        Self {
            store: EntityStore::from_seed(records),
            query: ViewQuery::default(),
            draft: K::Draft::default(),
            errors: FormErrors::default(),
            create_open: false,
        }
    }

    #[must_use]
    pub fn store(&self) -> &EntityStore<K::Record> {
        &self.store
    }

    #[must_use]
    pub fn records(&self) -> &[K::Record] {
        self.store.records()
    }

    #[must_use]
    pub fn query(&self) -> &ViewQuery<K> {
        &self.query
    }

    /// Rows to display for the current query.
    #[must_use]
    pub fn visible(&self) -> Vec<K::Record> {
        derive(self.store.records(), &self.query)
    }

    /// Everything [`visible`](Self::visible) depends on: the store version
    /// and the query. Draft edits and dialog state leave it unchanged.
    #[must_use]
    pub fn view_key(&self) -> (u64, ViewQuery<K>) {
        (self.store.version(), self.query.clone())
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
    }

    pub fn set_filter(&mut self, filter: K::Filter) {
        self.query.filter = filter;
    }

    pub fn update_filter(&mut self, f: impl FnOnce(&mut K::Filter)) {
        f(&mut self.query.filter);
    }

    pub fn click_sort(&mut self, field: K::SortField) {
        self.query.sort.click(field);
    }

    // ---- creation form ----

    #[must_use]
    pub fn is_create_open(&self) -> bool {
        self.create_open
    }

    #[must_use]
    pub fn draft(&self) -> &K::Draft {
        &self.draft
    }

    #[must_use]
    pub fn errors(&self) -> &FormErrors<K::Field> {
        &self.errors
    }

    pub fn open_create(&mut self) {
        self.create_open = true;
    }

    /// Dismiss the form, discarding the draft and any errors.
    pub fn close_create(&mut self) {
        self.create_open = false;
        self.draft = K::Draft::default();
        self.errors = FormErrors::default();
    }

    pub fn edit_draft(&mut self, f: impl FnOnce(&mut K::Draft)) {
        f(&mut self.draft);
    }

    /// Validate the draft and append it.
    ///
    /// On success the form resets and closes. On failure the store is left
    /// untouched and the form stays open with the draft intact; validation
    /// errors are kept for display.
    ///
    /// # Errors
    ///
    /// [`SubmitError::Invalid`] with the field-level failures of the draft,
    /// or [`SubmitError::Store`] when the store cannot take another record.
    pub fn submit(&mut self) -> Result<EntityId, SubmitError<K::Field>> {
        if let Err(errors) = K::validate(&self.draft) {
            self.errors = errors.clone();
            return Err(SubmitError::Invalid(errors));
        }
        let draft = self.draft.clone();
        let id = self.store.add(|id| K::build(id, draft))?;
        self.close_create();
        Ok(id)
    }

    // ---- row actions ----

    /// Returns `false` when no record has `id`.
    pub fn delete(&mut self, id: EntityId) -> bool {
        self.store.remove(id)
    }

    /// Returns `false` when no record has `id`.
    pub fn update(&mut self, id: EntityId, mutator: impl FnOnce(K::Record) -> K::Record) -> bool {
        self.store.update_field(id, mutator)
    }
}

impl PanelState<Users> {
    /// Flip Active/Inactive on the user with `id`.
    pub fn toggle_status(&mut self, id: EntityId) -> bool {
        self.update(id, |mut user| {
            user.status = user.status.toggled();
            user
        })
    }
}

impl PanelState<Roles> {
    /// Grant or revoke `permission` on the role with `id`.
    pub fn toggle_permission(&mut self, id: EntityId, permission: Permission) -> bool {
        self.update(id, |mut role| {
            role.permissions.toggle(permission);
            role
        })
    }

    /// Creation-form checkbox.
    pub fn toggle_draft_permission(&mut self, permission: Permission) {
        self.draft.permissions.toggle(permission);
    }
}
