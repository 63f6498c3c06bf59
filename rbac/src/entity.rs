//! Entity identity and the per-panel configuration trait.

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::form::{FormErrors, FormField};

/// Identifier of a record within its collection.
pub type EntityId = u32;

/// A record stored in an [`EntityStore`](crate::store::EntityStore).
pub trait Record: Clone {
    fn id(&self) -> EntityId;
}

/// Describes one kind of entity panel.
///
/// Implementors are zero-sized markers (`Users`, `Roles`). The associated
/// types carry the record shape, the draft captured by the creation form,
/// the categorical filter set, the sortable columns, and the form fields
/// that can carry validation errors.
pub trait EntityKind: Copy + Debug + Default + PartialEq + Send + Sync + 'static {
    type Record: Record + Debug + PartialEq + Send + Sync + 'static;
    type Draft: Clone + Debug + Default + PartialEq + Send + Sync + 'static;
    type Filter: Clone + Debug + Default + PartialEq + Send + Sync + 'static;
    type SortField: Copy + Debug + Default + Eq + Send + Sync + 'static;
    type Field: FormField + Send + Sync + 'static;

    /// Records present when a session starts.
    fn seed() -> Vec<Self::Record>;

    /// Fields the free-text search looks into.
    fn search_fields(record: &Self::Record) -> Vec<&str>;

    /// Whether `record` passes every active categorical filter.
    fn matches_filter(record: &Self::Record, filter: &Self::Filter) -> bool;

    /// Ascending comparison on `field`.
    fn compare(a: &Self::Record, b: &Self::Record, field: Self::SortField) -> Ordering;

    /// Check a draft before it is committed to the store.
    ///
    /// # Errors
    ///
    /// Returns every failing field with its message.
    fn validate(draft: &Self::Draft) -> Result<(), FormErrors<Self::Field>>;

    /// Materialize a validated draft under a freshly allocated id.
    fn build(id: EntityId, draft: Self::Draft) -> Self::Record;
}
