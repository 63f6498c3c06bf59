//! Records every session starts with.

use crate::role::{Permission, PermissionSet, Role};
use crate::user::{User, UserStatus};

#[cfg(test)]
#[path = "seed_test.rs"]
mod seed_test;

#[must_use]
pub fn users() -> Vec<User> {
    [
        (1, "Abhay Singh", "abhay@example.com", "Admin", UserStatus::Active),
        (2, "Pankaj Kumar", "pankaj@example.com", "Editor", UserStatus::Active),
        (3, "Rishi Raj", "rishi@example.com", "Viewer", UserStatus::Inactive),
        (4, "Radhey", "radhey@example.com", "Editor", UserStatus::Active),
        (5, "Mudit Yadav", "mudit@example.com", "Viewer", UserStatus::Inactive),
    ]
    .into_iter()
    .map(|(id, name, email, role, status)| User {
        id,
        name: name.to_owned(),
        email: email.to_owned(),
        role: role.to_owned(),
        status,
    })
    .collect()
}

#[must_use]
pub fn roles() -> Vec<Role> {
    use Permission::{Create, Delete, Read, Update};

    vec![
        role(1, "Admin", PermissionSet::from([Create, Read, Update, Delete])),
        role(2, "Editor", PermissionSet::from([Read, Update])),
        role(3, "Viewer", PermissionSet::from([Read])),
        role(4, "Manager", PermissionSet::from([Read, Update, Delete])),
        role(5, "Contributor", PermissionSet::from([Create, Read])),
    ]
}

fn role(id: u32, name: &str, permissions: PermissionSet) -> Role {
    Role {
        id,
        name: name.to_owned(),
        permissions,
    }
}
