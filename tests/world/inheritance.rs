//! Integration tests for atom inheritance

use wordhoard_foundation::ErrorKind;
use wordhoard_world::{AtomWorld, World};

// =============================================================================
// Descent
// =============================================================================

#[test]
fn instances_descend_from_their_classes() {
    let world = AtomWorld::new();
    let portable = world.portable();
    let (world, weapon) = world.spawn("weapon", &[portable]).unwrap();
    let (world, sword) = world.spawn("sword", &[weapon]).unwrap();
    let (world, blade) = world.spawn("sword", &[sword]).unwrap();

    assert!(world.is_descendant_of(blade, sword));
    assert!(world.is_descendant_of(blade, weapon));
    assert!(world.is_descendant_of(blade, world.thing()));
    assert!(!world.is_descendant_of(weapon, sword));
}

#[test]
fn multiple_parents() {
    let world = AtomWorld::new();
    let thing = world.thing();
    let (world, light) = world.spawn("light", &[thing]).unwrap();
    let (world, container) = world.spawn("container", &[thing]).unwrap();
    let (world, lantern) = world.spawn("lantern", &[light, container]).unwrap();

    assert!(world.is_descendant_of(lantern, light));
    assert!(world.is_descendant_of(lantern, container));
}

#[test]
fn add_parent_later() {
    let world = AtomWorld::new();
    let thing = world.thing();
    let (world, rock) = world.spawn("rock", &[thing]).unwrap();
    assert!(!world.is_descendant_of(rock, world.portable()));

    let world = world.add_parent(rock, world.portable()).unwrap();
    assert!(world.is_descendant_of(rock, world.portable()));
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn inheritance_cycles_are_rejected() {
    let world = AtomWorld::new();
    let thing = world.thing();
    let (world, a) = world.spawn("a", &[thing]).unwrap();
    let (world, b) = world.spawn("b", &[a]).unwrap();

    let err = world.add_parent(a, b).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InheritanceCycle { .. }));
}

#[test]
fn unknown_parent_is_rejected() {
    let world = AtomWorld::new();
    let ghost = wordhoard_foundation::AtomId::new(999);
    let err = world.spawn("orphan", &[ghost]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::AtomNotFound(id) if id == ghost));
}
