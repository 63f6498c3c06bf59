#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn init_is_noop_but_callable_twice() {
    init();
    init();
}

#[test]
fn mutation_line_names_entity_action_and_id() {
    assert_eq!(mutation_line("user", "deleted", 3), "user deleted: id=3");
    assert_eq!(mutation_line("role", "created", 6), "role created: id=6");
}

#[test]
fn noop_helpers_accept_their_arguments() {
    mutation("user", "deleted", 3);
    rejected("role", &"record ids exhausted");
}
