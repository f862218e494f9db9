//! Word classification and utterance rewrites.
//!
//! Before the grammar runs, every word gets the set of categories the
//! vocabulary allows. Three shapes of sentence are rewritten first:
//!
//! - `"Hello there"` becomes `say "Hello there"`
//! - `bob hello` (a leading word that can only be a noun) becomes
//!   `say to bob hello`
//! - a sentence opening with a communicative verb is typed directly, the
//!   rest of it becoming one literal word

use std::sync::Arc;

use tracing::trace;

use crate::sentence::Sentence;
use crate::vocabulary::{Verb, Vocabulary};
use crate::word::{Word, WordType, WordTypes};

/// Verb inserted in front of bare utterances.
pub const SAY: &str = "say";

/// Preposition inserted in front of an addressee.
pub const TO: &str = "to";

/// A classified raw sentence.
#[derive(Clone, Debug)]
pub enum Classified {
    /// Words with possible categories, still to be resolved.
    Open(Vec<Word>),
    /// A fully typed utterance.
    Utterance(Sentence),
}

/// Rewrites and classifies one raw sentence.
#[must_use]
pub fn classify(mut words: Vec<Word>, vocabulary: &Vocabulary, privilege: i32) -> Classified {
    match words.first() {
        Some(first) if first.is_literal() => {
            trace!("inserting utterance verb before quoted text");
            words.insert(0, Word::text(SAY));
        }
        Some(first) if words.len() > 1 && vocabulary.is_noun_only(first) => {
            trace!(addressee = %first, "inserting directed utterance");
            words.insert(0, Word::text(TO));
            words.insert(0, Word::text(SAY));
        }
        _ => {}
    }

    for word in &mut words {
        word.possible = vocabulary.classify(word);
    }

    let communicative = words
        .first()
        .and_then(|first| vocabulary.verb(first.as_str(), privilege))
        .filter(|verb| verb.communicative);
    match communicative {
        Some(verb) => Classified::Utterance(utterance(words, verb)),
        None => Classified::Open(words),
    }
}

/// Types a communicative sentence: verb, optional `<preposition> <noun>`
/// addressee, then the rest as one literal.
fn utterance(words: Vec<Word>, verb: Arc<Verb>) -> Sentence {
    let mut words = words.into_iter();
    let mut typed = Vec::new();
    let mut verb_word = None;

    if let Some(first) = words.next() {
        verb_word = Some(first.as_str().to_string());
        typed.push(first.with_type(WordType::Verb));
    }

    let rest: Vec<Word> = words.collect();
    let directed = match rest.as_slice() {
        [preposition, target, ..] => {
            preposition.possible.contains(WordTypes::PREPOSITION)
                && target
                    .possible
                    .intersects(WordTypes::NOUN | WordTypes::PRONOUN)
        }
        _ => false,
    };

    let mut rest = rest.into_iter();
    if directed {
        if let (Some(preposition), Some(target)) = (rest.next(), rest.next()) {
            let target_type = if target.possible.contains(WordTypes::NOUN) {
                WordType::Noun
            } else {
                WordType::Pronoun
            };
            typed.push(preposition.with_type(WordType::Preposition));
            typed.push(target.with_type(target_type));
        }
    }

    let payload: Vec<Word> = rest.collect();
    if !payload.is_empty() {
        typed.push(Word::literal(render(&payload)));
    }

    Sentence {
        words: typed,
        verb: Some(verb),
        verb_word,
    }
}

/// Renders words as text, keeping commas against the previous word.
/// Leading commas ("bob, hello") are dropped.
fn render(words: &[Word]) -> String {
    let mut text = String::new();
    for word in words.iter().skip_while(|w| w.as_str() == ",") {
        let piece = word.as_str();
        if !text.is_empty() && piece != "," {
            text.push(' ');
        }
        text.push_str(piece);
    }
    text
}
