//! End-to-end tests for the parse pipeline.

use wordhoard_parser::{CollectingSink, EventSink, ParserConfig, Target};

use crate::fixture::{currents, fixture};

#[test]
fn single_command() {
    let mut f = fixture();
    let sink = f.run("get sword");
    assert_eq!(sink.events.len(), 1);
    assert_eq!(sink.events[0].to_string(), format!("get({}, -, -)", f.sword));
    assert_eq!(sink.events[0].verb, "get");
}

#[test]
fn synonyms_keep_the_typed_verb() {
    let mut f = fixture();
    let sink = f.run("take sword");
    assert_eq!(sink.actions(), vec!["get"]);
    assert_eq!(sink.events[0].verb, "take");
}

#[test]
fn two_objects_make_two_events() {
    let mut f = fixture();
    let sink = f.run("get the sword and the shield");
    assert_eq!(currents(&sink.events), vec![f.sword, f.shield]);
}

#[test]
fn next_sentence_reuses_the_verb() {
    let mut f = fixture();
    let sink = f.run("get sword. the shield");
    assert_eq!(sink.actions(), vec!["get", "get"]);
    assert_eq!(currents(&sink.events), vec![f.sword, f.shield]);
    assert!(sink.messages.is_empty());
}

#[test]
fn put_things_in_a_container() {
    let mut f = fixture();
    f.carry(&[f.sword, f.shield]);
    let sink = f.run("put sword and shield in box");
    assert_eq!(sink.actions(), vec!["put", "put"]);
    assert_eq!(currents(&sink.events), vec![f.sword, f.shield]);
    assert!(sink.events.iter().all(|e| e.arg1 == Target::Atom(f.box_)));
}

#[test]
fn directions_and_numbers() {
    let mut f = fixture();
    let sink = f.run("go n. wait 3");
    assert_eq!(sink.events[0].arg1, Target::Direction("north".to_string()));
    assert_eq!(sink.events[1].arg1, Target::Number(3));
}

#[test]
fn stopwords_are_ignored() {
    let mut f = fixture();
    let sink = f.run("please get sword");
    assert_eq!(currents(&sink.events), vec![f.sword]);
}

#[test]
fn errors_are_reported_to_the_actor() {
    let mut f = fixture();
    let sink = f.run("get sword. get unicorn");
    assert_eq!(sink.events.len(), 1);
    assert_eq!(sink.messages.len(), 1);
    assert_eq!(sink.messages[0].0, f.actor);
    assert_eq!(
        sink.messages[0].1,
        "I understand \"get\", but what is \"unicorn\"?"
    );
}

#[test]
fn dangling_preposition() {
    let mut f = fixture();
    let sink = f.run("put sword in");
    assert_eq!(sink.message_texts(), vec!["What do you want to put?"]);
}

#[test]
fn administrative_lines_are_passed_through() {
    let mut f = fixture();
    let sink = f.run("  !teleport guard");
    assert!(sink.events.is_empty());
    assert_eq!(sink.admin, vec![(f.actor, "!teleport guard".to_string())]);
}

#[test]
fn sentence_limit_drops_the_rest() {
    let mut f = fixture();
    f.parser = f
        .parser
        .clone()
        .with_config(ParserConfig::default().with_max_sentences(2));
    let sink = f.run("wait. wait. wait. wait");
    assert_eq!(sink.events.len(), 2);
}

#[test]
fn directed_speech() {
    let mut f = fixture();
    let sink = f.run("guard, halt");
    assert_eq!(sink.actions(), vec!["say"]);
    assert_eq!(sink.events[0].current, Target::Atom(f.guard));
    assert_eq!(sink.events[0].arg1, Target::Text("halt".to_string()));
}

#[test]
fn custom_sinks_receive_everything() {
    #[derive(Default)]
    struct Counter {
        events: usize,
        reports: usize,
    }

    impl EventSink for Counter {
        fn dispatch(&mut self, _event: wordhoard_parser::Event) {
            self.events += 1;
        }

        fn report(&mut self, _actor: wordhoard_foundation::AtomId, _message: &str) {
            self.reports += 1;
        }

        fn administrative(&mut self, _actor: wordhoard_foundation::AtomId, _line: &str) {}
    }

    let f = fixture();
    let mut parser = f.parser.clone();
    let mut counter = Counter::default();
    let count = parser.parse("get all coins. xyzzy", f.actor, &f.world, &mut counter);
    assert_eq!(count, 5);
    assert_eq!(counter.events, 5);
    assert_eq!(counter.reports, 1);

    let mut sink = CollectingSink::new();
    parser.parse("get sword", f.actor, &f.world, &mut sink);
    assert_eq!(sink.events.len(), 1);
}
