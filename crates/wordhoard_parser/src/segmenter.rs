//! Sentence segmentation.
//!
//! One input line can hold several commands:
//!
//! ```text
//! "get sword and shield. quickly look"
//!   terminators   → [get sword and shield] [quickly look]
//!   connectors    → [get sword] [shield] [quickly look]
//!   verb ellipsis → [get sword] [(get) shield] [quickly look]
//!   adverbs       → [get sword] [(get) shield] [(glance) quickly look]
//! ```

use std::sync::Arc;

use tracing::{debug, warn};

use crate::classifier::{self, Classified};
use crate::config::ParserConfig;
use crate::error::ParseError;
use crate::grammar;
use crate::sentence::Sentence;
use crate::tokenizer::InputToken;
use crate::vocabulary::{Verb, Vocabulary};
use crate::word::{Word, WordType, WordTypes};

/// Splits words at terminators. `k` terminators give `k + 1` groups, some
/// of which may be empty.
#[must_use]
pub fn split_terminators(words: Vec<Word>, vocabulary: &Vocabulary) -> Vec<Vec<Word>> {
    let mut groups = vec![Vec::new()];
    for word in words {
        let terminator =
            !word.is_literal() && vocabulary.classify(&word).contains(WordTypes::TERMINATOR);
        if terminator {
            groups.push(Vec::new());
        } else if let Some(group) = groups.last_mut() {
            group.push(word);
        }
    }
    groups
}

/// A run of words between connectors.
#[derive(Clone, Debug, Default)]
struct Conjunct {
    words: Vec<Word>,
    /// Opens a new verb group rather than sharing the previous verb.
    clause: bool,
}

impl Conjunct {
    fn first_preposition(&self) -> Option<usize> {
        self.words
            .iter()
            .position(|w| w.final_type == WordType::Preposition)
    }
}

/// Splits resolved input into independent sentences.
pub struct Segmenter<'a> {
    vocabulary: &'a Vocabulary,
    config: &'a ParserConfig,
    privilege: i32,
}

impl<'a> Segmenter<'a> {
    /// Creates a segmenter for an actor with the given privilege.
    #[must_use]
    pub fn new(vocabulary: &'a Vocabulary, config: &'a ParserConfig, privilege: i32) -> Self {
        Self {
            vocabulary,
            config,
            privilege,
        }
    }

    /// Segments a token stream into sentences.
    ///
    /// A failing raw sentence yields one error and never affects the
    /// sentences around it.
    #[must_use]
    pub fn segment(&self, tokens: Vec<InputToken>) -> Vec<Result<Sentence, ParseError>> {
        let words = tokens.into_iter().map(InputToken::into_word).collect();
        let mut previous: Option<(Arc<Verb>, String)> = None;
        let mut sentences = Vec::new();

        for raw in split_terminators(words, self.vocabulary) {
            if raw.is_empty() {
                continue;
            }
            match self.segment_raw(raw, &mut previous) {
                Ok(parts) => sentences.extend(parts),
                Err(err) => sentences.push(Err(err)),
            }
        }

        if sentences.len() > self.config.max_sentences {
            warn!(
                sentences = sentences.len(),
                max = self.config.max_sentences,
                "dropping extra sentences"
            );
            sentences.truncate(self.config.max_sentences);
        }
        debug!(count = sentences.len(), "segmented");
        sentences
    }

    fn segment_raw(
        &self,
        raw: Vec<Word>,
        previous: &mut Option<(Arc<Verb>, String)>,
    ) -> Result<Vec<Result<Sentence, ParseError>>, ParseError> {
        let mut words = match classifier::classify(raw, self.vocabulary, self.privilege) {
            Classified::Utterance(sentence) => {
                if let (Some(verb), Some(word)) = (&sentence.verb, &sentence.verb_word) {
                    *previous = Some((Arc::clone(verb), word.clone()));
                }
                return Ok(vec![Ok(sentence)]);
            }
            Classified::Open(words) => words,
        };

        let plural_repair = self.config.plural_repair;
        let resolution = match grammar::resolve(&words, self.vocabulary, plural_repair) {
            Ok(resolution) => resolution,
            Err(err) if previous.is_some() => {
                grammar::resolve_continuation(&words, self.vocabulary, plural_repair)
                    .map_err(|_| err)?
            }
            Err(err) => return Err(err),
        };
        resolution.apply(&mut words);
        let mut conjuncts = split_conjuncts(words)?;
        share_prepositional_tails(&mut conjuncts);

        Ok(conjuncts
            .into_iter()
            .filter(|conjunct| !conjunct.words.is_empty())
            .map(|conjunct| self.bind_verb(Sentence::new(conjunct.words), previous))
            .collect())
    }

    /// Resolves the verb of a sentence, inheriting it when missing and
    /// applying adverb rules.
    ///
    /// A sentence whose verb cannot be found leaves nothing to inherit.
    fn bind_verb(
        &self,
        sentence: Sentence,
        previous: &mut Option<(Arc<Verb>, String)>,
    ) -> Result<Sentence, ParseError> {
        let bound = self.attach_verb(sentence, previous.take());
        if let Ok(sentence) = &bound {
            *previous = sentence.verb.clone().zip(sentence.verb_word.clone());
        }
        bound
    }

    fn attach_verb(
        &self,
        mut sentence: Sentence,
        previous: Option<(Arc<Verb>, String)>,
    ) -> Result<Sentence, ParseError> {
        let (mut verb, mut verb_word) = match sentence.verb_index() {
            Some(index) => {
                let word = sentence.words[index].as_str().to_string();
                let verb = self
                    .vocabulary
                    .verb(&word, self.privilege)
                    .ok_or_else(|| ParseError::UnknownVerb { verb: word.clone() })?;
                (verb, word)
            }
            None => previous.ok_or_else(|| ParseError::UnknownVerb {
                verb: sentence.text(),
            })?,
        };

        let rule = sentence.adverbs().find_map(|adverb| {
            self.vocabulary
                .adverb_rule(adverb.as_str(), &verb_word)
                .or_else(|| self.vocabulary.adverb_rule(adverb.as_str(), &verb.name))
                .map(str::to_string)
        });
        if let Some(replacement) = rule {
            debug!(from = %verb.name, to = %replacement, "adverb transforms verb");
            verb = self
                .vocabulary
                .verb(&replacement, self.privilege)
                .ok_or_else(|| ParseError::UnknownVerb {
                    verb: replacement.clone(),
                })?;
            verb_word = replacement;
        }

        sentence.verb = Some(verb);
        sentence.verb_word = Some(verb_word);
        Ok(sentence)
    }
}

/// Splits a resolved sentence at its connectors.
///
/// A connector followed by a verb or adverb opens a new clause. Any other
/// connector separates objects sharing the clause's verb, which is not
/// allowed after a preposition.
fn split_conjuncts(words: Vec<Word>) -> Result<Vec<Conjunct>, ParseError> {
    let next_types: Vec<WordType> = words
        .iter()
        .skip(1)
        .map(|w| w.final_type)
        .chain(std::iter::once(WordType::Unknown))
        .collect();

    let mut conjuncts = vec![Conjunct {
        words: Vec::new(),
        clause: true,
    }];
    let mut preposition: Option<String> = None;

    for (word, next) in words.into_iter().zip(next_types) {
        match word.final_type {
            WordType::Connector => {
                let clause = matches!(next, WordType::Verb | WordType::Adverb);
                if !clause {
                    if let Some(preposition) = preposition {
                        return Err(ParseError::CompoundPrepositionalObject { preposition });
                    }
                }
                preposition = None;
                conjuncts.push(Conjunct {
                    words: Vec::new(),
                    clause,
                });
            }
            WordType::Preposition => {
                preposition = Some(word.as_str().to_string());
                if let Some(conjunct) = conjuncts.last_mut() {
                    conjunct.words.push(word);
                }
            }
            _ => {
                if let Some(conjunct) = conjuncts.last_mut() {
                    conjunct.words.push(word);
                }
            }
        }
    }
    Ok(conjuncts)
}

/// "put A and B in C": earlier objects of a verb group share the last
/// object's prepositional tail.
fn share_prepositional_tails(conjuncts: &mut [Conjunct]) {
    let mut start = 0;
    while start < conjuncts.len() {
        let end = conjuncts[start + 1..]
            .iter()
            .position(|c| c.clause)
            .map_or(conjuncts.len(), |offset| start + 1 + offset);

        let group = &mut conjuncts[start..end];
        if let Some((last, earlier)) = group.split_last_mut() {
            if let Some(at) = last.first_preposition() {
                let tail = &last.words[at..];
                for conjunct in earlier {
                    if conjunct.first_preposition().is_none() && !conjunct.words.is_empty() {
                        conjunct.words.extend_from_slice(tail);
                    }
                }
            }
        }
        start = end;
    }
}
