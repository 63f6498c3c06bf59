//! Filtered, searched, and sorted projection of a collection.
//!
//! [`derive`] is pure: it borrows the records, never mutates them, and
//! returns the same output for the same inputs. Callers recompute (or memo
//! on the store version plus query) whenever anything changes.

use std::cmp::Ordering;

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};
use serde::{Deserialize, Serialize};

use crate::entity::EntityKind;

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

thread_local! {
    /// Root-locale collator built from the compiled CLDR data.
    static COLLATOR: Option<CollatorBorrowed<'static>> =
        match Collator::try_new(Default::default(), CollatorOptions::default()) {
            Ok(collator) => Some(collator),
            Err(_) => None,
        };
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Orient an ascending comparison result.
    #[must_use]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Active sort column and direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F: Copy + Eq> SortState<F> {
    /// Column header click: the active column flips direction, any other
    /// column becomes active in ascending order.
    pub fn click(&mut self, field: F) {
        if self.field == field {
            self.direction = self.direction.reversed();
        } else {
            self.field = field;
            self.direction = SortDirection::Ascending;
        }
    }

    /// Direction to show on `field`'s header; `None` for inactive columns.
    #[must_use]
    pub fn indicator(&self, field: F) -> Option<SortDirection> {
        (self.field == field).then_some(self.direction)
    }
}

/// Everything besides the records that shapes a panel's visible rows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewQuery<K: EntityKind> {
    pub search: String,
    pub filter: K::Filter,
    pub sort: SortState<K::SortField>,
}

/// Retain records passing the filters and search, then stable-sort them.
#[must_use]
pub fn derive<K: EntityKind>(records: &[K::Record], query: &ViewQuery<K>) -> Vec<K::Record> {
    let mut rows = records
        .iter()
        .filter(|r| K::matches_filter(r, &query.filter))
        .filter(|r| matches_search(K::search_fields(r), &query.search))
        .cloned()
        .collect::<Vec<_>>();
    let SortState { field, direction } = query.sort;
    rows.sort_by(|a, b| direction.apply(K::compare(a, b, field)));
    rows
}

/// Case-insensitive substring test against any of `fields`. The empty term
/// matches everything.
#[must_use]
pub fn matches_search<'a>(fields: impl IntoIterator<Item = &'a str>, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    fields.into_iter().any(|f| f.to_lowercase().contains(&needle))
}

/// Locale-aware text ordering (Unicode collation, root locale): accents and
/// case are secondary to the base letters, lowercase sorts before uppercase.
/// Strings the collator considers equal fall back to code-point order so the
/// order stays total.
#[must_use]
pub fn compare_text(a: &str, b: &str) -> Ordering {
    COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => a.to_lowercase().cmp(&b.to_lowercase()),
        })
        .then_with(|| a.cmp(b))
}
