//! Integration tests for property lookup

use wordhoard_foundation::Value;
use wordhoard_world::{AtomWorld, World};

#[test]
fn own_properties_shadow_inherited_ones() {
    let world = AtomWorld::new();
    let portable = world.portable();
    let (world, ball) = world.spawn("ball", &[portable]).unwrap();
    let world = world.set_property(ball, "redness", 20).unwrap();
    let (world, red_ball) = world.spawn("ball", &[ball]).unwrap();

    assert_eq!(world.property(red_ball, "redness"), Some(Value::Int(20)));
    let world = world.set_property(red_ball, "redness", 90).unwrap();
    assert_eq!(world.property(red_ball, "redness"), Some(Value::Int(90)));
    assert_eq!(world.property(ball, "redness"), Some(Value::Int(20)));
}

#[test]
fn earlier_parents_win() {
    let world = AtomWorld::new();
    let thing = world.thing();
    let (world, first) = world.spawn("first", &[thing]).unwrap();
    let (world, second) = world.spawn("second", &[thing]).unwrap();
    let world = world.set_property(first, "weight", 1).unwrap();
    let world = world.set_property(second, "weight", 2).unwrap();
    let (world, both) = world.spawn("both", &[first, second]).unwrap();

    assert_eq!(world.property(both, "weight"), Some(Value::Int(1)));
}

#[test]
fn clearing_reveals_inherited_value() {
    let world = AtomWorld::new();
    let thing = world.thing();
    let (world, door) = world.spawn("door", &[thing]).unwrap();
    let world = world.set_property(door, "closed", true).unwrap();
    let (world, front) = world.spawn("door", &[door]).unwrap();
    let world = world.set_property(front, "closed", false).unwrap();
    assert!(!world.is_closed(front));

    let world = world.clear_property(front, "closed").unwrap();
    assert!(world.is_closed(front));
    assert!(world.has_property(front, "closed"));
    assert!(!world.has_property(front, "locked"));
}

#[test]
fn booleans_read_as_percentages() {
    assert_eq!(Value::from(true).as_int(), Some(100));
    assert_eq!(Value::from(false).as_int(), Some(0));
    assert!(!Value::Int(0).is_truthy());
    assert!(Value::from("x").is_truthy());
}
