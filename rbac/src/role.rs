//! Role records, permission sets, and the configuration of the roles panel.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entity::{EntityId, EntityKind, Record};
use crate::form::{FormErrors, FormField, ValidationError, is_blank};
use crate::view::compare_text;

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    Create,
    Read,
    Update,
    Delete,
}

impl Permission {
    pub const ALL: [Self; 4] = [Self::Create, Self::Read, Self::Update, Self::Delete];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    /// Capitalized form used by the filter selector.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Create => "Create",
            Self::Read => "Read",
            Self::Update => "Update",
            Self::Delete => "Delete",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown permission: {0}")]
pub struct UnknownPermission(pub String);

impl FromStr for Permission {
    type Err = UnknownPermission;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownPermission(s.to_owned()))
    }
}

/// Membership-only set of permissions. Iteration follows [`Permission::ALL`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(BTreeSet<Permission>);

impl PermissionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, permission: Permission) -> bool {
        self.0.contains(&permission)
    }

    /// Returns `false` when already present.
    pub fn insert(&mut self, permission: Permission) -> bool {
        self.0.insert(permission)
    }

    /// Returns `false` when absent.
    pub fn remove(&mut self, permission: Permission) -> bool {
        self.0.remove(&permission)
    }

    /// Add when absent, remove when present. Applying twice is a no-op.
    pub fn toggle(&mut self, permission: Permission) {
        if !self.0.remove(&permission) {
            self.0.insert(permission);
        }
    }

    #[must_use]
    pub fn toggled(mut self, permission: Permission) -> Self {
        self.toggle(permission);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Permission> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[Permission; N]> for PermissionSet {
    fn from(value: [Permission; N]) -> Self {
        value.into_iter().collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: EntityId,
    pub name: String,
    pub permissions: PermissionSet,
}

impl Record for Role {
    fn id(&self) -> EntityId {
        self.id
    }
}

/// A role pending creation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDraft {
    pub name: String,
    pub permissions: PermissionSet,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleSortField {
    #[default]
    Name,
    Permissions,
}

impl RoleSortField {
    pub const ALL: [Self; 2] = [Self::Name, Self::Permissions];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Role Name",
            Self::Permissions => "Permissions",
        }
    }
}

/// Categorical filter of the roles panel. `None` means "all permissions".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleFilter {
    pub permission: Option<Permission>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RoleField {
    Name,
}

impl FormField for RoleField {
    fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
        }
    }
}

/// Marker selecting the roles panel configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Roles;

impl EntityKind for Roles {
    type Record = Role;
    type Draft = RoleDraft;
    type Filter = RoleFilter;
    type SortField = RoleSortField;
    type Field = RoleField;

    fn seed() -> Vec<Role> {
        crate::seed::roles()
    }

    fn search_fields(record: &Role) -> Vec<&str> {
        vec![record.name.as_str()]
    }

    fn matches_filter(record: &Role, filter: &RoleFilter) -> bool {
        filter.permission.map_or(true, |p| record.permissions.contains(p))
    }

    fn compare(a: &Role, b: &Role, field: RoleSortField) -> Ordering {
        match field {
            RoleSortField::Name => compare_text(&a.name, &b.name),
            RoleSortField::Permissions => a.permissions.len().cmp(&b.permissions.len()),
        }
    }

    // Names are required; an empty permission set is a valid role.
    fn validate(draft: &RoleDraft) -> Result<(), FormErrors<RoleField>> {
        let mut errors = FormErrors::new();
        if is_blank(&draft.name) {
            errors.insert(RoleField::Name, ValidationError::RoleNameRequired);
        }
        errors.into_result()
    }

    fn build(id: EntityId, draft: RoleDraft) -> Role {
        Role {
            id,
            name: draft.name,
            permissions: draft.permissions,
        }
    }
}
