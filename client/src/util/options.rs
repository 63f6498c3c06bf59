//! Select-control options and the `""` "no filter" sentinel.
//!
//! HTML selects carry strings. The empty value stands for "all", every
//! other value is parsed back into the typed filter the panel expects.

use std::fmt::Display;
use std::str::FromStr;

use rbac::user::ROLE_OPTIONS;
use rbac::{Permission, UserStatus};

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;

/// Value of the "All ..." option.
pub const ALL_VALUE: &str = "";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub fn role_options() -> Vec<SelectOption> {
    ROLE_OPTIONS
        .into_iter()
        .map(|role| SelectOption { value: role, label: role })
        .collect()
}

pub fn status_options() -> Vec<SelectOption> {
    UserStatus::ALL
        .into_iter()
        .map(|status| SelectOption {
            value: status.label(),
            label: status.label(),
        })
        .collect()
}

pub fn permission_options() -> Vec<SelectOption> {
    Permission::ALL
        .into_iter()
        .map(|permission| SelectOption {
            value: permission.as_str(),
            label: permission.label(),
        })
        .collect()
}

/// Select value for the current filter; `None` selects the "All" option.
pub fn filter_value<T: Display>(current: Option<T>) -> String {
    current.map_or_else(|| ALL_VALUE.to_owned(), |v| v.to_string())
}

/// Parse a select value into a typed filter. The sentinel and unknown
/// values both clear the filter.
pub fn parse_filter<T: FromStr>(raw: &str) -> Option<T> {
    if raw == ALL_VALUE {
        return None;
    }
    raw.parse().ok()
}

/// Free-text filter: anything but the sentinel is taken verbatim.
pub fn parse_text_filter(raw: &str) -> Option<String> {
    (raw != ALL_VALUE).then(|| raw.to_owned())
}
