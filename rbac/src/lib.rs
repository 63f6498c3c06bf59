//! Users and roles data model with the list-management logic behind the
//! RBAC dashboard panels.
//!
//! This crate is UI-framework agnostic so the Leptos client can consume it
//! directly. Every panel is one [`panel::PanelState`] parameterized by an
//! [`entity::EntityKind`]: the kind describes searchable fields, categorical
//! filters, sort keys, and draft validation, while the panel owns the store,
//! the active query, and the creation form.

pub mod entity;
pub mod form;
pub mod panel;
pub mod role;
pub mod seed;
pub mod store;
pub mod user;
pub mod view;

pub use entity::{EntityId, EntityKind, Record};
pub use form::{FormErrors, FormField, ValidationError};
pub use panel::{PanelState, SubmitError};
pub use role::{Permission, PermissionSet, Role, RoleDraft, RoleField, RoleFilter, RoleSortField, Roles};
pub use store::{EntityStore, StoreError};
pub use user::{User, UserDraft, UserField, UserFilter, UserSortField, UserStatus, Users};
pub use view::{SortDirection, SortState, ViewQuery, derive};
