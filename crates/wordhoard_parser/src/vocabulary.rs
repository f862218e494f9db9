//! Vocabulary registry.
//!
//! Stores every word the parser knows: which categories a word can take,
//! verbs with their templates, adverb rules, adjectives, nouns, directions
//! and numbers. All lookups are case-insensitive.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use wordhoard_foundation::AtomId;

use crate::syntax::VerbTemplate;
use crate::word::{Word, WordType, WordTypes};

/// A registered verb with its argument templates.
///
/// Synonyms share one `Verb` through an [`Arc`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verb {
    /// Canonical verb name
    pub name: String,
    /// Minimum actor privilege needed to use the verb
    pub privilege: i32,
    /// Whether the rest of the sentence is a literal utterance
    pub communicative: bool,
    /// Argument templates, tried in order
    pub templates: Vec<VerbTemplate>,
}

impl Verb {
    /// Creates a verb with no templates.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_lowercase(),
            privilege: 0,
            communicative: false,
            templates: Vec::new(),
        }
    }

    /// Creates a communicative verb with its fixed template.
    #[must_use]
    pub fn communicative(name: &str) -> Self {
        let name = name.to_lowercase();
        Self {
            templates: vec![VerbTemplate::communicative(&name)],
            name,
            privilege: 0,
            communicative: true,
        }
    }

    /// Builder method to add a template.
    #[must_use]
    pub fn with_template(mut self, template: VerbTemplate) -> Self {
        self.templates.push(template);
        self
    }

    /// Builder method to set the privilege requirement.
    #[must_use]
    pub fn with_privilege(mut self, privilege: i32) -> Self {
        self.privilege = privilege;
        self
    }
}

/// Runtime storage for all vocabulary definitions.
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
    /// Word -> every category it can take
    categories: HashMap<String, WordTypes>,
    /// Verb word (canonical or synonym) -> verb
    verbs: HashMap<String, Arc<Verb>>,
    /// (adverb, verb) -> replacement verb word
    adverb_rules: HashMap<(String, String), String>,
    /// Adjective -> backing property
    adjectives: HashMap<String, String>,
    /// Noun -> class atom
    nouns: HashMap<String, AtomId>,
    /// Direction word -> canonical direction
    directions: HashMap<String, String>,
    /// Number word -> count
    numbers: HashMap<String, u32>,
    /// Pronouns meaning the actor
    reflexives: HashSet<String>,
    /// Noun used when a phrase names none
    default_noun: Option<AtomId>,
}

fn key(word: &str) -> String {
    word.to_lowercase()
}

impl Vocabulary {
    /// Creates a new empty vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the default noun.
    #[must_use]
    pub fn with_default_noun(mut self, atom: AtomId) -> Self {
        self.default_noun = Some(atom);
        self
    }

    /// Adds categories to a word.
    pub fn register_word(&mut self, word: &str, types: WordTypes) {
        *self.categories.entry(key(word)).or_default() |= types;
    }

    /// Registers a verb under its name and each synonym.
    pub fn register_verb(&mut self, verb: Verb, synonyms: &[&str]) -> Arc<Verb> {
        let verb = Arc::new(verb);
        let name = verb.name.clone();
        for word in std::iter::once(name.as_str()).chain(synonyms.iter().copied()) {
            self.register_word(word, WordTypes::VERB);
            self.verbs.insert(key(word), Arc::clone(&verb));
        }
        verb
    }

    /// Registers an adverb word.
    pub fn register_adverb(&mut self, adverb: &str) {
        self.register_word(adverb, WordTypes::ADVERB);
    }

    /// Registers "`adverb` `verb`" as meaning `replacement`.
    pub fn register_adverb_rule(&mut self, adverb: &str, verb: &str, replacement: &str) {
        self.register_adverb(adverb);
        self.adverb_rules
            .insert((key(adverb), key(verb)), key(replacement));
    }

    /// Registers an adjective backed by a property.
    pub fn register_adjective(&mut self, word: &str, property: &str) {
        self.register_word(word, WordTypes::ADJECTIVE);
        self.adjectives.insert(key(word), property.to_string());
    }

    /// Registers a noun naming a class atom.
    pub fn register_noun(&mut self, word: &str, atom: AtomId) {
        self.register_word(word, WordTypes::NOUN);
        self.nouns.insert(key(word), atom);
    }

    /// Registers a direction word.
    pub fn register_direction(&mut self, word: &str, canonical: &str) {
        self.register_word(word, WordTypes::DIRECTION);
        self.directions.insert(key(word), key(canonical));
    }

    /// Registers a number word.
    pub fn register_number(&mut self, word: &str, count: u32) {
        self.register_word(word, WordTypes::NUMERIC);
        self.numbers.insert(key(word), count);
    }

    /// Registers a pronoun.
    pub fn register_pronoun(&mut self, word: &str) {
        self.register_word(word, WordTypes::PRONOUN);
    }

    /// Registers a pronoun meaning the actor.
    pub fn register_reflexive(&mut self, word: &str) {
        self.register_pronoun(word);
        self.reflexives.insert(key(word));
    }

    /// Returns every category a raw token can take.
    #[must_use]
    pub fn categories(&self, word: &str) -> WordTypes {
        self.categories.get(&key(word)).copied().unwrap_or_default()
    }

    /// Returns every category a word can take.
    #[must_use]
    pub fn classify(&self, word: &Word) -> WordTypes {
        if word.is_literal() {
            return WordTypes::LITERAL;
        }
        let mut types = self.categories(word.as_str());
        if word.as_number().is_some() {
            types |= WordTypes::NUMERIC;
        }
        types
    }

    /// Looks up a verb the actor is allowed to use.
    #[must_use]
    pub fn verb(&self, word: &str, privilege: i32) -> Option<Arc<Verb>> {
        self.verbs
            .get(&key(word))
            .filter(|verb| verb.privilege <= privilege)
            .cloned()
    }

    /// Looks up the verb an adverb turns `verb` into.
    #[must_use]
    pub fn adverb_rule(&self, adverb: &str, verb: &str) -> Option<&str> {
        self.adverb_rules
            .get(&(key(adverb), key(verb)))
            .map(String::as_str)
    }

    /// Looks up an adjective's backing property.
    #[must_use]
    pub fn adjective(&self, word: &str) -> Option<&str> {
        self.adjectives.get(&key(word)).map(String::as_str)
    }

    /// Looks up a noun's class atom.
    #[must_use]
    pub fn noun(&self, word: &str) -> Option<AtomId> {
        self.nouns.get(&key(word)).copied()
    }

    /// Looks up a canonical direction.
    #[must_use]
    pub fn direction(&self, word: &str) -> Option<&str> {
        self.directions.get(&key(word)).map(String::as_str)
    }

    /// Returns the count a numeric word stands for.
    #[must_use]
    pub fn number(&self, word: &Word) -> Option<u32> {
        match word.as_number() {
            Some(n) => Some(u32::try_from(n.max(0)).unwrap_or(u32::MAX)),
            None => self.numbers.get(&word.key()).copied(),
        }
    }

    /// Returns true if the word means the actor.
    #[must_use]
    pub fn is_reflexive(&self, word: &str) -> bool {
        self.reflexives.contains(&key(word))
    }

    /// Returns the noun assumed when a phrase names none.
    #[must_use]
    pub fn default_noun(&self) -> Option<AtomId> {
        self.default_noun
    }

    /// Returns true if the word can only be a noun, never a verb.
    #[must_use]
    pub fn is_noun_only(&self, word: &Word) -> bool {
        let types = self.classify(word);
        types.contains(WordTypes::NOUN) && !types.contains(WordTypes::VERB)
    }

    /// Returns true if the word is registered with a category.
    #[must_use]
    pub fn knows(&self, word: &Word, word_type: WordType) -> bool {
        self.classify(word).contains(word_type.flag())
    }

    /// Iterates over every registered word and its categories.
    pub fn words(&self) -> impl Iterator<Item = (&str, WordTypes)> {
        self.categories
            .iter()
            .map(|(word, types)| (word.as_str(), *types))
    }
}
