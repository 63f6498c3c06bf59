//! User records and the configuration of the users panel.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entity::{EntityId, EntityKind, Record};
use crate::form::{FormErrors, FormField, ValidationError, is_blank, is_email_shaped};
use crate::view::compare_text;

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

/// Role names offered by the creation form and the role filter.
pub const ROLE_OPTIONS: [&str; 3] = ["Admin", "Editor", "Viewer"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

impl UserStatus {
    pub const ALL: [Self; 2] = [Self::Active, Self::Inactive];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Active,
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown user status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for UserStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(Self::Active),
            "Inactive" => Ok(Self::Inactive),
            other => Err(UnknownStatus(other.to_owned())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: UserStatus,
}

impl Record for User {
    fn id(&self) -> EntityId {
        self.id
    }
}

/// A user pending creation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: UserStatus,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserSortField {
    #[default]
    Name,
    Email,
    Role,
    Status,
}

impl UserSortField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Role, Self::Status];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Role => "Role",
            Self::Status => "Status",
        }
    }
}

/// Categorical filters of the users panel. `None` means "all".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFilter {
    pub role: Option<String>,
    pub status: Option<UserStatus>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UserField {
    Name,
    Email,
    Role,
}

impl FormField for UserField {
    fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Role => "role",
        }
    }
}

/// Marker selecting the users panel configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Users;

impl EntityKind for Users {
    type Record = User;
    type Draft = UserDraft;
    type Filter = UserFilter;
    type SortField = UserSortField;
    type Field = UserField;

    fn seed() -> Vec<User> {
        crate::seed::users()
    }

    fn search_fields(record: &User) -> Vec<&str> {
        vec![record.name.as_str(), record.email.as_str()]
    }

    fn matches_filter(record: &User, filter: &UserFilter) -> bool {
        filter.role.as_deref().map_or(true, |role| record.role == role)
            && filter.status.map_or(true, |status| record.status == status)
    }

    fn compare(a: &User, b: &User, field: UserSortField) -> Ordering {
        match field {
            UserSortField::Name => compare_text(&a.name, &b.name),
            UserSortField::Email => compare_text(&a.email, &b.email),
            UserSortField::Role => compare_text(&a.role, &b.role),
            UserSortField::Status => compare_text(a.status.label(), b.status.label()),
        }
    }

    fn validate(draft: &UserDraft) -> Result<(), FormErrors<UserField>> {
        let mut errors = FormErrors::new();
        if is_blank(&draft.name) {
            errors.insert(UserField::Name, ValidationError::NameRequired);
        }
        if is_blank(&draft.email) {
            errors.insert(UserField::Email, ValidationError::EmailRequired);
        } else if !is_email_shaped(&draft.email) {
            errors.insert(UserField::Email, ValidationError::EmailInvalid);
        }
        if is_blank(&draft.role) {
            errors.insert(UserField::Role, ValidationError::RoleRequired);
        }
        errors.into_result()
    }

    fn build(id: EntityId, draft: UserDraft) -> User {
        User {
            id,
            name: draft.name,
            email: draft.email,
            role: draft.role,
            status: draft.status,
        }
    }
}
