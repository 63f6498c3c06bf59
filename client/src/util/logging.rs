//! Browser console logging.
//!
//! Logging is hydrate-only: it goes to the devtools console through
//! `console_log`. SSR and test builds compile these helpers to no-ops.

use std::fmt::Display;

use rbac::EntityId;

#[cfg(test)]
#[path = "logging_test.rs"]
mod logging_test;

/// Install the console logger. Safe to call more than once.
pub fn init() {
    #[cfg(feature = "hydrate")]
    {
        if console_log::init_with_level(log::Level::Debug).is_err() {
            log::debug!("console logger already installed");
        }
    }
}

/// Line written for a committed store mutation.
pub fn mutation_line(entity: &str, action: &str, id: EntityId) -> String {
    format!("{entity} {action}: id={id}")
}

/// Record a committed store mutation.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn mutation(entity: &str, action: &str, id: EntityId) {
    #[cfg(feature = "hydrate")]
    log::debug!("{}", mutation_line(entity, action, id));
}

/// Record a create attempt that did not reach the store.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn rejected(entity: &str, reason: &impl Display) {
    #[cfg(feature = "hydrate")]
    log::warn!("{entity} not created: {reason}");
}
