//! Creation-form validation results.
//!
//! Validation is the only failure mode in the dashboard. Failures are
//! returned as a field-keyed map and rendered inline next to the offending
//! input; nothing here panics or aborts the session.

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::sync::LazyLock;

use regex::Regex;

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

// Literal pattern: compilation cannot fail at runtime, so the hygiene scan
// exempts this one `expect`.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));

/// A single field-level validation failure. The display text is the message
/// shown under the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Email is invalid")]
    EmailInvalid,
    #[error("Role is required")]
    RoleRequired,
    #[error("Role name is required")]
    RoleNameRequired,
}

/// A form input that can carry a validation error.
pub trait FormField: Copy + Debug + Ord {
    /// Stable key used when errors are exchanged as a plain map.
    fn name(self) -> &'static str;
}

/// Field-keyed validation failures for one submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormErrors<F: FormField> {
    errors: BTreeMap<F, ValidationError>,
}

impl<F: FormField> Default for FormErrors<F> {
    fn default() -> Self {
        Self { errors: BTreeMap::new() }
    }
}

impl<F: FormField> FormErrors<F> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for `field`, replacing any earlier one.
    pub fn insert(&mut self, field: F, error: ValidationError) {
        self.errors.insert(field, error);
    }

    #[must_use]
    pub fn get(&self, field: F) -> Option<ValidationError> {
        self.errors.get(&field).copied()
    }

    /// Human-readable message for `field`, if it failed.
    #[must_use]
    pub fn message(&self, field: F) -> Option<String> {
        self.get(field).map(|e| e.to_string())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (F, ValidationError)> + '_ {
        self.errors.iter().map(|(f, e)| (*f, *e))
    }

    /// Flatten into `field name -> message`.
    #[must_use]
    pub fn to_messages(&self) -> BTreeMap<&'static str, String> {
        self.iter().map(|(f, e)| (f.name(), e.to_string())).collect()
    }

    /// `Ok(())` when no field failed.
    ///
    /// # Errors
    ///
    /// Returns `self` when at least one field failed.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

/// Required free-text field: empty or whitespace-only input fails.
#[must_use]
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Loose `local@domain.tld` shape check.
#[must_use]
pub fn is_email_shaped(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}
