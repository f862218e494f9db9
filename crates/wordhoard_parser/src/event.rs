//! Unbound and bound events.
//!
//! A [`ParserEvent`] is what one sentence means before the world is
//! consulted: its object slots may still hold noun phrases. Binding turns
//! it into zero or more [`Event`]s whose slots are concrete.

use std::fmt;
use std::sync::Arc;

use wordhoard_foundation::AtomId;
use wordhoard_world::World;

use crate::binder::{Binder, Bindings};
use crate::config::ParserConfig;
use crate::error::{BindError, ParseError};
use crate::noun_phrase::{self, Modifier, NounPhrase};
use crate::sentence::Sentence;
use crate::syntax::{ArgType, Requirements, TemplateMatch};
use crate::vocabulary::Vocabulary;
use crate::word::{self, Word, WordType};

/// Scope used for the addressee of a communicative verb.
const ADDRESSEE: ArgType = ArgType::CURRENT
    .union(ArgType::SEARCH_CONTAINER)
    .union(ArgType::LOOK_SEARCH);

/// One argument slot of an unbound event.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Slot {
    /// Nothing given.
    #[default]
    Empty,
    /// An object still to be resolved.
    Phrase(NounPhrase),
    /// An object already known.
    Atom(AtomId),
    /// Literal text.
    Text(String),
    /// A number.
    Number(i64),
    /// A canonical direction.
    Direction(String),
}

impl Slot {
    /// Returns the noun phrase, if the slot holds one.
    #[must_use]
    pub fn as_phrase(&self) -> Option<&NounPhrase> {
        match self {
            Self::Phrase(phrase) => Some(phrase),
            _ => None,
        }
    }
}

/// One argument of a bound event.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Target {
    /// Nothing.
    #[default]
    None,
    /// A world object.
    Atom(AtomId),
    /// Literal text.
    Text(String),
    /// A number.
    Number(i64),
    /// A canonical direction.
    Direction(String),
}

impl Target {
    /// Returns the atom, if the target is one.
    #[must_use]
    pub fn as_atom(&self) -> Option<AtomId> {
        match self {
            Self::Atom(atom) => Some(*atom),
            _ => None,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("-"),
            Self::Atom(atom) => write!(f, "{atom}"),
            Self::Text(text) => write!(f, "{text:?}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Direction(direction) => f.write_str(direction),
        }
    }
}

/// A sentence's meaning before binding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParserEvent {
    /// Who typed the command.
    pub actor: AtomId,
    /// Verb as typed (or inherited).
    pub verb: String,
    /// Action chosen by the template.
    pub action: Arc<str>,
    /// The event's current object.
    pub current: Slot,
    /// First other argument.
    pub arg1: Slot,
    /// Second other argument.
    pub arg2: Slot,
}

impl ParserEvent {
    /// Builds the unbound event for a sentence and its chosen template.
    ///
    /// The CURRENT slot feeds `current`; the other non-empty slots feed
    /// `arg1` and `arg2` in order. For communicative verbs `current` is
    /// the addressee and `arg1` the text.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MissingObject`] when an object slot has no
    /// words and [`ParseError::NoTemplate`] when a slot's words cannot be
    /// read as its kind.
    pub fn assemble(
        sentence: &Sentence,
        matched: &TemplateMatch<'_>,
        vocabulary: &Vocabulary,
        actor: AtomId,
    ) -> Result<Self, ParseError> {
        let template = matched.template;
        let verb = sentence
            .verb_word
            .clone()
            .or_else(|| sentence.verb.as_ref().map(|v| v.name.clone()))
            .unwrap_or_default();

        let mut event = Self {
            actor,
            verb,
            action: Arc::clone(template.action()),
            current: Slot::Empty,
            arg1: Slot::Empty,
            arg2: Slot::Empty,
        };

        if template.slot(0).contains(ArgType::COMMUNICATIVE) {
            event.assemble_utterance(sentence, vocabulary);
            return Ok(event);
        }

        let buckets = sentence.buckets(&matched.binding);
        let mut others = Vec::new();
        for (index, (kind, bucket)) in template.slots().iter().zip(&buckets).enumerate() {
            if kind.is_empty_slot() {
                continue;
            }
            let mut slot = event.fill(*kind, bucket, template.requirements(index), vocabulary)?;
            if let Slot::Phrase(phrase) = &mut slot {
                phrase.must_be_open = index
                    .checked_sub(1)
                    .and_then(|before| template.prepositions().get(before))
                    .is_some_and(|preposition| Modifier::encloses(preposition));
            }
            if kind.contains(ArgType::CURRENT) {
                event.current = slot;
            } else {
                others.push(slot);
            }
        }
        let mut others = others.into_iter();
        event.arg1 = others.next().unwrap_or_default();
        event.arg2 = others.next().unwrap_or_default();
        Ok(event)
    }

    fn assemble_utterance(&mut self, sentence: &Sentence, vocabulary: &Vocabulary) {
        let addressee: Vec<Word> = sentence
            .words
            .iter()
            .filter(|w| matches!(w.final_type, WordType::Noun | WordType::Pronoun))
            .cloned()
            .collect();
        if !addressee.is_empty() {
            self.current = self.object(&addressee, ADDRESSEE, None, vocabulary);
        }
        let text = sentence
            .words
            .iter()
            .find(|w| w.is_literal())
            .map(|w| w.as_str().to_string())
            .unwrap_or_default();
        self.arg1 = Slot::Text(text);
    }

    fn fill(
        &self,
        kind: ArgType,
        words: &[Word],
        requirements: Option<&Arc<Requirements>>,
        vocabulary: &Vocabulary,
    ) -> Result<Slot, ParseError> {
        if words.is_empty() {
            return if kind.is_object() {
                Err(ParseError::MissingObject {
                    verb: self.verb.clone(),
                })
            } else {
                Ok(Slot::Empty)
            };
        }

        let textual = kind.intersects(ArgType::STRING | ArgType::DATE);
        if kind.is_object() && !(textual && words.iter().all(Word::is_literal)) {
            return Ok(self.object(words, kind, requirements.cloned(), vocabulary));
        }

        if kind.contains(ArgType::DIRECTION) {
            if let Some(word) = words.iter().find(|w| w.final_type == WordType::Direction) {
                let direction = vocabulary
                    .direction(word.as_str())
                    .map_or_else(|| word.key(), str::to_string);
                return Ok(Slot::Direction(direction));
            }
        }
        if kind.contains(ArgType::NUMERIC) {
            let number = words
                .iter()
                .rev()
                .filter(|w| w.final_type == WordType::Numeric)
                .find_map(|w| w.as_number().or_else(|| vocabulary.number(w).map(i64::from)));
            if let Some(number) = number {
                return Ok(Slot::Number(number));
            }
        }
        if kind.intersects(ArgType::STRING | ArgType::DATE | ArgType::COMMUNICATIVE) {
            return Ok(Slot::Text(word::join(words)));
        }

        Err(ParseError::NoTemplate {
            verb: self.verb.clone(),
        })
    }

    fn object(
        &self,
        words: &[Word],
        kind: ArgType,
        requirements: Option<Arc<Requirements>>,
        vocabulary: &Vocabulary,
    ) -> Slot {
        if let [only] = words {
            if only.final_type == WordType::Pronoun && vocabulary.is_reflexive(only.as_str()) {
                return Slot::Atom(self.actor);
            }
        }
        Slot::Phrase(noun_phrase::compile(words, vocabulary, kind, requirements))
    }

    /// Returns current, arg1 and arg2 in order.
    #[must_use]
    pub fn slots(&self) -> [&Slot; 3] {
        [&self.current, &self.arg1, &self.arg2]
    }

    /// Resolves the event's noun phrases against the world.
    ///
    /// `pronoun` is the atom "it" currently refers to; the returned
    /// [`Bindings`] carry the updated referent.
    ///
    /// # Errors
    ///
    /// Returns a [`BindError`] if any phrase matches nothing, names a
    /// closed container, or uses a pronoun with no referent.
    pub fn bindings<W: World + ?Sized>(
        &self,
        world: &W,
        config: &ParserConfig,
        pronoun: Option<AtomId>,
    ) -> Result<Bindings, BindError> {
        Binder::new(world, config, self.actor, &self.verb).bind(self, pronoun)
    }
}

/// A fully bound, executable event.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Event {
    /// Who typed the command.
    pub actor: AtomId,
    /// Verb as typed.
    pub verb: String,
    /// Action to run.
    pub action: Arc<str>,
    /// The event's current object.
    pub current: Target,
    /// First other argument.
    pub arg1: Target,
    /// Second other argument.
    pub arg2: Target,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}, {}, {})",
            self.action, self.current, self.arg1, self.arg2
        )
    }
}
