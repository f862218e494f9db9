//! Integration tests for containment and traversal policies

use wordhoard_foundation::{AtomId, ErrorKind};
use wordhoard_world::{AtomWorld, Traversal, World};

struct Room {
    world: AtomWorld,
    hall: AtomId,
    actor: AtomId,
    chest: AtomId,
    coin: AtomId,
    statue: AtomId,
}

/// A hall holding a player, an open chest with a coin, and a statue.
fn room() -> Room {
    let world = AtomWorld::new();
    let thing = world.thing();
    let portable = world.portable();
    let (world, hall) = world.spawn("hall", &[thing]).unwrap();
    let (world, actor) = world.spawn_in("player", &[thing], hall).unwrap();
    let (world, chest) = world.spawn_in("chest", &[portable], hall).unwrap();
    let (world, coin) = world.spawn_in("coin", &[portable], chest).unwrap();
    let (world, statue) = world.spawn_in("statue", &[thing], hall).unwrap();
    Room {
        world,
        hall,
        actor,
        chest,
        coin,
        statue,
    }
}

#[test]
fn contents_keep_insertion_order() {
    let r = room();
    assert_eq!(r.world.contents(r.hall), vec![r.actor, r.chest, r.statue]);
    assert_eq!(r.world.location(r.coin), Some(r.chest));
    assert_eq!(r.world.location(r.hall), None);
}

#[test]
fn moving_updates_both_containers() {
    let r = room();
    let world = r.world.move_to(r.coin, r.actor).unwrap();
    assert!(world.contents(r.chest).is_empty());
    assert_eq!(world.contents(r.actor), vec![r.coin]);

    // The earlier snapshot is untouched.
    assert_eq!(r.world.contents(r.chest), vec![r.coin]);
}

#[test]
fn containment_cycles_are_rejected() {
    let r = room();
    let err = r.world.move_to(r.chest, r.coin).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ContainmentCycle { .. }));
    let err = r.world.move_to(r.chest, r.chest).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ContainmentCycle { .. }));
}

// =============================================================================
// Traversal policies
// =============================================================================

#[test]
fn raw_lists_direct_contents() {
    let r = room();
    assert_eq!(
        r.world.contents_by(r.hall, Traversal::Raw),
        vec![r.actor, r.chest, r.statue]
    );
}

#[test]
fn visible_recurses_into_open_containers() {
    let r = room();
    let seen = r.world.contents_by(r.hall, Traversal::Visible);
    assert_eq!(seen, vec![r.actor, r.chest, r.coin, r.statue]);

    let closed = r.world.set_property(r.chest, "closed", true).unwrap();
    let seen = closed.contents_by(r.hall, Traversal::Visible);
    assert_eq!(seen, vec![r.actor, r.chest, r.statue]);
}

#[test]
fn visible_skips_hidden_atoms() {
    let r = room();
    let world = r.world.set_property(r.statue, "hidden", true).unwrap();
    assert!(!world.visible_contents(r.hall).contains(&r.statue));
}

#[test]
fn gettable_is_direct_and_portable() {
    let r = room();
    assert_eq!(r.world.contents_by(r.hall, Traversal::Gettable), vec![r.chest]);
}

#[test]
fn exits_lead_between_rooms() {
    let r = room();
    let (world, garden) = r.world.spawn("garden", &[r.world.thing()]).unwrap();
    let world = world.add_exit(r.hall, "north", garden).unwrap();
    assert_eq!(world.exit(r.hall, "north"), Some(garden));
    assert_eq!(world.exit(r.hall, "south"), None);
}
