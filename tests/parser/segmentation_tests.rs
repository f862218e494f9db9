//! Tests for sentence segmentation and unbound events.

use wordhoard_parser::{ParseError, ParserEvent, Slot};

use crate::fixture::fixture;

fn unbound(line: &str) -> Vec<Result<ParserEvent, ParseError>> {
    let f = fixture();
    f.parser.parse_unbound(line, f.actor, &f.world)
}

fn idents(events: &[Result<ParserEvent, ParseError>]) -> Vec<String> {
    events
        .iter()
        .map(|e| {
            let event = e.as_ref().unwrap();
            event.current.as_phrase().map(|p| p.ident.clone()).unwrap_or_default()
        })
        .collect()
}

#[test]
fn objects_share_the_verb() {
    let events = unbound("get sword and shield");
    assert_eq!(events.len(), 2);
    assert_eq!(idents(&events), vec!["sword", "shield"]);
    assert!(events.iter().all(|e| &*e.as_ref().unwrap().action == "get"));
}

#[test]
fn connector_before_verb_starts_a_clause() {
    let events = unbound("get sword and drop shield");
    let actions: Vec<String> = events
        .iter()
        .map(|e| e.as_ref().unwrap().action.to_string())
        .collect();
    assert_eq!(actions, vec!["get", "drop"]);
}

#[test]
fn terminators_split_commands() {
    let events = unbound("get sword. drop shield; wait then look");
    let actions: Vec<String> = events
        .iter()
        .map(|e| e.as_ref().unwrap().action.to_string())
        .collect();
    assert_eq!(actions, vec!["get", "drop", "wait", "look"]);
}

#[test]
fn verb_carries_over_terminators() {
    let events = unbound("get sword. shield");
    assert_eq!(idents(&events), vec!["sword", "shield"]);
}

#[test]
fn prepositional_tail_is_shared() {
    let events = unbound("put sword and shield in box");
    assert_eq!(events.len(), 2);
    for event in &events {
        let event = event.as_ref().unwrap();
        assert_eq!(&*event.action, "put");
        assert_eq!(event.arg1.as_phrase().unwrap().ident, "box");
    }
}

#[test]
fn compound_prepositional_object_is_an_error() {
    let events = unbound("put sword in box and crate");
    assert_eq!(
        events[0].as_ref().unwrap_err().to_string(),
        "You can only use one object after \"in\"."
    );
}

#[test]
fn adverb_rewrites_the_verb() {
    let events = unbound("quickly look");
    assert_eq!(&*events[0].as_ref().unwrap().action, "glance");
}

#[test]
fn a_failing_sentence_leaves_the_rest() {
    let events = unbound("get sword. xyzzy. drop shield");
    assert_eq!(events.len(), 3);
    assert!(events[0].is_ok());
    assert_eq!(
        events[1].as_ref().unwrap_err().to_string(),
        "What is \"xyzzy\"?"
    );
    assert!(events[2].is_ok());
}

#[test]
fn plural_nouns_after_a_count() {
    let events = unbound("get 3 coins");
    let phrase = events[0].as_ref().unwrap().current.as_phrase().unwrap().clone();
    assert_eq!(phrase.count, 3);
    assert_eq!(phrase.ident, "coin");
}

#[test]
fn utterances_keep_the_text() {
    let events = unbound("say \"hello, world.\"");
    assert_eq!(events.len(), 1);
    let event = events[0].as_ref().unwrap();
    assert_eq!(&*event.action, "say");
    assert_eq!(event.arg1, Slot::Text("hello, world.".to_string()));
}

#[test]
fn missing_object() {
    let events = unbound("get");
    assert_eq!(
        events[0].as_ref().unwrap_err().to_string(),
        "What do you want to get?"
    );
}
