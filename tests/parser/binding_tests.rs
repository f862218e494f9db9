//! Tests for noun resolution and event expansion.

use wordhoard_parser::{ParserConfig, Target};
use wordhoard_world::World;

use crate::fixture::{currents, fixture};

// =============================================================================
// Counts
// =============================================================================

#[test]
fn count_takes_the_first_matches() {
    let mut f = fixture();
    let sink = f.run("get 3 coins");
    assert_eq!(currents(&sink.events), f.coins[..3].to_vec());
}

#[test]
fn all_takes_every_match() {
    let mut f = fixture();
    let sink = f.run("get all coins");
    assert_eq!(currents(&sink.events), f.coins);
}

#[test]
fn bare_all_means_everything_portable() {
    let mut f = fixture();
    let sink = f.run("get all");
    let mut expected = vec![f.sword, f.shield];
    expected.extend(&f.coins);
    expected.push(f.ball);
    assert_eq!(currents(&sink.events), expected);
    for fixed in [f.box_, f.crate_, f.cupboard, f.chest, f.guard] {
        assert!(!currents(&sink.events).contains(&fixed));
    }
}

#[test]
fn except_removes_matches() {
    let mut f = fixture();
    let sink = f.run("get all except sword");
    let got = currents(&sink.events);
    assert_eq!(got.len(), 7);
    assert!(!got.contains(&f.sword));
    assert!(got.contains(&f.shield));
}

// =============================================================================
// Adjectives
// =============================================================================

#[test]
fn adjective_at_the_threshold_matches() {
    let mut f = fixture();
    let sink = f.run("get red ball");
    assert_eq!(currents(&sink.events), vec![f.ball]);
}

#[test]
fn adjective_below_the_threshold_fails() {
    let mut f = fixture();
    f.world = f.world.set_property(f.ball, "redness", 49).unwrap();
    let sink = f.run("get red ball");
    assert!(sink.events.is_empty());
    assert_eq!(sink.message_texts(), vec!["There are no more red balls here."]);
}

#[test]
fn threshold_is_configurable() {
    let mut f = fixture();
    f.world = f.world.set_property(f.ball, "redness", 30).unwrap();
    f.parser = f
        .parser
        .clone()
        .with_config(ParserConfig::default().with_isness_threshold(25));
    assert_eq!(f.run("get red ball").events.len(), 1);
}

// =============================================================================
// Scope
// =============================================================================

#[test]
fn carried_things_are_not_in_the_room() {
    let mut f = fixture();
    f.carry(&[f.sword]);
    let sink = f.run("get sword");
    assert_eq!(sink.message_texts(), vec!["There are no swords here."]);

    let sink = f.run("drop sword");
    assert_eq!(currents(&sink.events), vec![f.sword]);
}

#[test]
fn held_scope_only_searches_inventory() {
    let mut f = fixture();
    let sink = f.run("drop shield");
    assert_eq!(sink.message_texts(), vec!["You have no shields."]);
}

#[test]
fn nothing_to_act_on() {
    let mut f = fixture();
    let sink = f.run("drop all");
    assert_eq!(sink.message_texts(), vec!["You are not carrying anything to drop."]);
}

// =============================================================================
// Containers
// =============================================================================

#[test]
fn containment_chain_reaches_inside() {
    let mut f = fixture();
    let sink = f.run("get book in box");
    assert_eq!(currents(&sink.events), vec![f.book]);
}

#[test]
fn closed_container_is_reported() {
    let mut f = fixture();
    let sink = f.run("get book in crate");
    assert!(sink.events.is_empty());
    assert_eq!(sink.message_texts(), vec!["The crate is closed."]);
}

#[test]
fn empty_container_names_the_container() {
    let mut f = fixture();
    let sink = f.run("get sword in box");
    assert_eq!(sink.message_texts(), vec!["There are no swords in the box."]);
}

#[test]
fn fixed_containers_can_be_named() {
    let mut f = fixture();
    let coin = f.coins[0];
    f.stow(&[coin], f.chest);
    let sink = f.run("get coin in chest");
    assert_eq!(currents(&sink.events), vec![coin]);

    let sink = f.run("get chest");
    assert!(sink.events.is_empty());
    assert_eq!(sink.message_texts(), vec!["There are no chests here."]);
}

#[test]
fn nested_fixed_containers_are_searched() {
    let mut f = fixture();
    f.stow(&[f.box_], f.cupboard);
    let sink = f.run("get book in box in cupboard");
    assert_eq!(currents(&sink.events), vec![f.book]);
}

#[test]
fn putting_into_a_closed_container_is_refused() {
    let mut f = fixture();
    f.carry(&[f.book]);
    f.stow(&[f.box_], f.cupboard);
    f.world = f.world.set_property(f.box_, "closed", true).unwrap();

    let sink = f.run("put book in box in cupboard");
    assert!(sink.events.is_empty());
    assert_eq!(sink.message_texts(), vec!["The box is closed."]);

    f.world = f.world.clear_property(f.box_, "closed").unwrap();
    let sink = f.run("put book in box in cupboard");
    assert_eq!(currents(&sink.events), vec![f.book]);
    assert_eq!(sink.events[0].arg1, Target::Atom(f.box_));
}

#[test]
fn taking_from_a_closed_container_is_refused() {
    let mut f = fixture();
    let sink = f.run("get book from crate");
    assert!(sink.events.is_empty());
    assert_eq!(sink.message_texts(), vec!["The crate is closed."]);
}

#[test]
fn looking_at_a_closed_container_is_allowed() {
    let mut f = fixture();
    let sink = f.run("look at crate");
    assert_eq!(currents(&sink.events), vec![f.crate_]);
}

#[test]
fn from_template_fills_both_slots() {
    let mut f = fixture();
    let sink = f.run("get book from box");
    assert_eq!(sink.events.len(), 1);
    assert_eq!(sink.events[0].current, Target::Atom(f.book));
    assert_eq!(sink.events[0].arg1, Target::Atom(f.box_));
}

// =============================================================================
// Requirements
// =============================================================================

#[test]
fn requirements_pick_among_candidates() {
    let mut f = fixture();
    let box_class = f.parser.vocabulary().noun("box").unwrap();
    let (world, closed_box) = f.world.spawn_in("box", &[box_class], f.hall).unwrap();
    f.world = world.set_property(closed_box, "closed", true).unwrap();

    assert_eq!(currents(&f.run("open box").events), vec![closed_box]);
    assert_eq!(currents(&f.run("close box").events), vec![f.box_]);
}

#[test]
fn requirements_do_not_filter_a_single_candidate() {
    let mut f = fixture();
    let sink = f.run("close crate");
    assert_eq!(currents(&sink.events), vec![f.crate_]);
}

// =============================================================================
// Expansion
// =============================================================================

#[test]
fn single_targets_pair_with_every_object() {
    let mut f = fixture();
    let coins = f.coins[..3].to_vec();
    f.carry(&coins);
    let sink = f.run("give all coins to guard");
    assert_eq!(currents(&sink.events), coins);
    assert!(
        sink.events
            .iter()
            .all(|event| event.arg1 == Target::Atom(f.guard))
    );
}

#[test]
fn literal_slots_repeat() {
    let mut f = fixture();
    let sink = f.run("write \"hello\" on sword");
    assert_eq!(sink.events.len(), 1);
    assert_eq!(sink.events[0].current, Target::None);
    assert_eq!(sink.events[0].arg1, Target::Text("hello".to_string()));
    assert_eq!(sink.events[0].arg2, Target::Atom(f.sword));
}

#[test]
fn binding_is_repeatable() {
    let mut f = fixture();
    let first = f.run("get all").events;
    let second = f.run("get all").events;
    assert_eq!(first, second);
    assert!(first.iter().all(|e| e.actor == f.actor));
}

#[test]
fn reflexive_words_name_the_actor() {
    let mut f = fixture();
    let sink = f.run("examine me");
    assert_eq!(currents(&sink.events), vec![f.actor]);
    assert_eq!(f.world.name(f.actor), Some("player"));
}
