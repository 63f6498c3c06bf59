use super::*;

fn role(id: EntityId, name: &str, permissions: &[Permission]) -> Role {
    Role {
        id,
        name: name.to_owned(),
        permissions: permissions.iter().copied().collect(),
    }
}

// =============================================================
// Permission
// =============================================================

#[test]
fn permission_round_trips_through_str() {
    for p in Permission::ALL {
        assert_eq!(p.as_str().parse::<Permission>(), Ok(p));
    }
    assert!("Read".parse::<Permission>().is_err());
}

#[test]
fn permission_labels_are_capitalized() {
    let labels = Permission::ALL.map(Permission::label);
    assert_eq!(labels, ["Create", "Read", "Update", "Delete"]);
}

// =============================================================
// PermissionSet
// =============================================================

#[test]
fn set_has_no_duplicates() {
    let set: PermissionSet = [Permission::Read, Permission::Read, Permission::Create].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn set_iterates_in_canonical_order() {
    let set = PermissionSet::from([Permission::Delete, Permission::Create, Permission::Read]);
    assert_eq!(
        set.iter().collect::<Vec<_>>(),
        vec![Permission::Create, Permission::Read, Permission::Delete]
    );
}

#[test]
fn toggle_twice_restores_original() {
    let original = PermissionSet::from([Permission::Read]);
    let once = original.clone().toggled(Permission::Create);
    assert!(once.contains(Permission::Create));
    assert!(once.contains(Permission::Read));
    let twice = once.toggled(Permission::Create);
    assert_eq!(twice, original);
}

#[test]
fn toggle_removes_present_permission() {
    let mut set = PermissionSet::from([Permission::Read, Permission::Update]);
    set.toggle(Permission::Read);
    assert!(!set.contains(Permission::Read));
    assert_eq!(set.len(), 1);
}

#[test]
fn set_serializes_as_lowercase_list() {
    let set = PermissionSet::from([Permission::Update, Permission::Read]);
    let json = serde_json::to_value(&set).unwrap();
    assert_eq!(json, serde_json::json!(["read", "update"]));
}

// =============================================================
// Roles kind
// =============================================================

#[test]
fn permission_filter_checks_membership() {
    let r = role(1, "Editor", &[Permission::Read, Permission::Update]);
    assert!(Roles::matches_filter(&r, &RoleFilter { permission: Some(Permission::Update) }));
    assert!(!Roles::matches_filter(&r, &RoleFilter { permission: Some(Permission::Delete) }));
    assert!(Roles::matches_filter(&r, &RoleFilter::default()));
}

#[test]
fn permissions_sort_by_cardinality() {
    let small = role(1, "Zeta", &[Permission::Read]);
    let large = role(2, "Alpha", &[Permission::Read, Permission::Update, Permission::Delete]);
    assert_eq!(Roles::compare(&small, &large, RoleSortField::Permissions), Ordering::Less);
    assert_eq!(Roles::compare(&small, &large, RoleSortField::Name), Ordering::Greater);
}

#[test]
fn search_covers_name_only() {
    let r = role(1, "Manager", &[]);
    assert_eq!(Roles::search_fields(&r), vec!["Manager"]);
}

#[test]
fn empty_permissions_are_valid_but_name_is_required() {
    let ok = RoleDraft {
        name: "QA".to_owned(),
        permissions: PermissionSet::new(),
    };
    assert!(Roles::validate(&ok).is_ok());

    let missing = RoleDraft {
        name: " ".to_owned(),
        permissions: PermissionSet::from([Permission::Read]),
    };
    let errors = Roles::validate(&missing).unwrap_err();
    assert_eq!(errors.message(RoleField::Name).as_deref(), Some("Role name is required"));
}
