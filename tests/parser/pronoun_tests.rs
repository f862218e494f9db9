//! Tests for pronoun tracking.

use wordhoard_parser::Target;

use crate::fixture::{currents, fixture};

#[test]
fn it_refers_to_the_last_object() {
    let mut f = fixture();
    let sink = f.run("get sword. drop it");
    assert_eq!(sink.actions(), vec!["get", "drop"]);
    assert_eq!(currents(&sink.events), vec![f.sword, f.sword]);
}

#[test]
fn no_referent_yet() {
    let mut f = fixture();
    let sink = f.run("drop it");
    assert!(sink.events.is_empty());
    assert_eq!(
        sink.message_texts(),
        vec!["I don't know what \"it\" refers to."]
    );
}

#[test]
fn referent_survives_between_lines() {
    let mut f = fixture();
    f.run("get shield");
    f.carry(&[f.shield]);
    let sink = f.run("drop it");
    assert_eq!(sink.events[0].current, Target::Atom(f.shield));
}

#[test]
fn failed_binding_keeps_the_referent() {
    let mut f = fixture();
    f.run("get sword");
    let sink = f.run("get book in crate");
    assert_eq!(sink.message_texts(), vec!["The crate is closed."]);
    assert_eq!(f.parser.pronoun(), Some(f.sword));
}

#[test]
fn plural_objects_refer_to_the_first() {
    let mut f = fixture();
    f.run("get all coins");
    assert_eq!(f.parser.pronoun(), Some(f.coins[0]));
}

#[test]
fn pronoun_use_keeps_the_referent() {
    let mut f = fixture();
    f.run("get ball");
    f.run("examine it");
    assert_eq!(f.parser.pronoun(), Some(f.ball));
}

#[test]
fn each_actor_has_its_own_parser() {
    let mut f = fixture();
    let other = f.parser.clone();
    f.run("get sword");
    assert_eq!(f.parser.pronoun(), Some(f.sword));
    assert_eq!(other.pronoun(), None);
}
