//! Main parser pipeline.
//!
//! Orchestrates the full flow from a raw input line to dispatched events:
//! tokenize, segment, pick a template, assemble the unbound event, bind
//! it against the world and hand each bound event to the sink.

use std::sync::Arc;

use tracing::debug;
use wordhoard_foundation::AtomId;
use wordhoard_world::World;

use crate::config::ParserConfig;
use crate::error::ParseError;
use crate::event::ParserEvent;
use crate::pronouns::PronounState;
use crate::segmenter::Segmenter;
use crate::sentence::Sentence;
use crate::sink::EventSink;
use crate::syntax;
use crate::tokenizer::InputTokenizer;
use crate::vocabulary::Vocabulary;

/// Marks a line meant for the administrative layer.
pub const ADMIN_PREFIX: char = '!';

/// The command parser for one actor or session.
///
/// Holds the pronoun referent between lines, so it must not be shared
/// across actors. The vocabulary is shared.
#[derive(Clone, Debug)]
pub struct Parser {
    vocabulary: Arc<Vocabulary>,
    config: ParserConfig,
    pronouns: PronounState,
}

impl Parser {
    /// Creates a parser with the default configuration.
    #[must_use]
    pub fn new(vocabulary: Arc<Vocabulary>) -> Self {
        Self {
            vocabulary,
            config: ParserConfig::default(),
            pronouns: PronounState::new(),
        }
    }

    /// Builder method to set the configuration.
    #[must_use]
    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the vocabulary.
    #[must_use]
    pub fn vocabulary(&self) -> &Arc<Vocabulary> {
        &self.vocabulary
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Returns the atom pronouns currently refer to.
    #[must_use]
    pub fn pronoun(&self) -> Option<AtomId> {
        self.pronouns.get()
    }

    /// Returns the pronoun state for direct manipulation.
    pub fn pronouns_mut(&mut self) -> &mut PronounState {
        &mut self.pronouns
    }

    /// Parses a line, binds it and dispatches the resulting events.
    ///
    /// Each failing sentence is reported to the actor through the sink
    /// and does not stop the sentences after it. Lines starting with `!`
    /// go to [`EventSink::administrative`] untouched.
    ///
    /// Returns the number of events dispatched.
    pub fn parse<W, S>(&mut self, input: &str, actor: AtomId, world: &W, sink: &mut S) -> usize
    where
        W: World + ?Sized,
        S: EventSink + ?Sized,
    {
        if input.trim_start().starts_with(ADMIN_PREFIX) {
            debug!(%actor, "administrative line");
            sink.administrative(actor, input.trim());
            return 0;
        }

        let mut dispatched = 0;
        for unbound in self.parse_unbound(input, actor, world) {
            let event = match unbound {
                Ok(event) => event,
                Err(err) => {
                    sink.report(actor, &err.to_string());
                    continue;
                }
            };
            match event.bindings(world, &self.config, self.pronouns.get()) {
                Ok(bindings) => {
                    self.pronouns.update(bindings.pronoun);
                    for bound in bindings.events {
                        sink.dispatch(bound);
                        dispatched += 1;
                    }
                }
                Err(err) => sink.report(actor, &ParseError::from(err).to_string()),
            }
        }
        debug!(%actor, input, dispatched, "parsed");
        dispatched
    }

    /// Parses a line into unbound events without touching the world's
    /// objects or the pronoun state.
    ///
    /// The world is only read for the actor's privilege.
    #[must_use]
    pub fn parse_unbound<W: World + ?Sized>(
        &self,
        input: &str,
        actor: AtomId,
        world: &W,
    ) -> Vec<Result<ParserEvent, ParseError>> {
        let privilege = self.privilege(actor, world);
        let segmenter = Segmenter::new(&self.vocabulary, &self.config, privilege);
        segmenter
            .segment(InputTokenizer::tokenize(input))
            .into_iter()
            .map(|sentence| self.assemble(&sentence?, actor))
            .collect()
    }

    fn assemble(&self, sentence: &Sentence, actor: AtomId) -> Result<ParserEvent, ParseError> {
        let Some(verb) = sentence.verb.as_ref() else {
            return Err(ParseError::UnknownVerb {
                verb: sentence.text(),
            });
        };
        let matched = syntax::select(verb, sentence).ok_or_else(|| ParseError::NoTemplate {
            verb: sentence
                .verb_word
                .clone()
                .unwrap_or_else(|| verb.name.clone()),
        })?;
        ParserEvent::assemble(sentence, &matched, &self.vocabulary, actor)
    }

    /// Reads the actor's privilege, falling back to the configured default.
    fn privilege<W: World + ?Sized>(&self, actor: AtomId, world: &W) -> i32 {
        world
            .property(actor, &self.config.privilege_property)
            .and_then(|value| value.as_int())
            .map_or(self.config.default_privilege, |level| {
                i32::try_from(level).unwrap_or(if level < 0 { i32::MIN } else { i32::MAX })
            })
    }
}
