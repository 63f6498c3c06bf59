//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and select-control
//! plumbing from page and component logic to improve reuse and testability.

pub mod logging;
pub mod options;
