//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `entity_table` holds the pieces both panels share (toolbar, sortable
//! headers, filter selects, empty state). The per-kind panels only add
//! their columns, filters, row actions, and creation dialogs.

pub mod create_role_dialog;
pub mod create_user_dialog;
pub mod entity_table;
pub mod role_panel;
pub mod user_panel;
