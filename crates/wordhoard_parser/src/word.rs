//! Words and word categories.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Set of categories a word could belong to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct WordTypes: u16 {
        /// An action word ("get").
        const VERB = 1 << 0;
        /// Modifies a verb ("quickly").
        const ADVERB = 1 << 1;
        /// Names a class of object ("sword").
        const NOUN = 1 << 2;
        /// Backed by an object property ("red").
        const ADJECTIVE = 1 << 3;
        /// "a", "an", "the".
        const ARTICLE = 1 << 4;
        /// "in", "on", "from", "at" ...
        const PREPOSITION = 1 << 5;
        /// "it", "them", "me" ...
        const PRONOUN = 1 << 6;
        /// "and", ",".
        const CONNECTOR = 1 << 7;
        /// ".", ";", "!", "then".
        const TERMINATOR = 1 << 8;
        /// Skipped by the grammar ("please").
        const STOPWORD = 1 << 9;
        /// A count ("3", "three", "all").
        const NUMERIC = 1 << 10;
        /// "except", "but".
        const NEGATION = 1 << 11;
        /// "north", "up" ...
        const DIRECTION = 1 << 12;
        /// Quoted or literal text.
        const LITERAL = 1 << 13;
    }
}

/// The single category the grammar resolver committed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum WordType {
    /// Not yet resolved.
    #[default]
    Unknown,
    /// Verb.
    Verb,
    /// Adverb.
    Adverb,
    /// Noun.
    Noun,
    /// Adjective.
    Adjective,
    /// Article.
    Article,
    /// Preposition.
    Preposition,
    /// Pronoun.
    Pronoun,
    /// Connector.
    Connector,
    /// Terminator.
    Terminator,
    /// Stopword.
    Stopword,
    /// Numeric.
    Numeric,
    /// Negation.
    Negation,
    /// Direction.
    Direction,
    /// Literal text.
    Literal,
}

impl WordType {
    /// Returns the flag corresponding to this category.
    #[must_use]
    pub const fn flag(self) -> WordTypes {
        match self {
            Self::Unknown => WordTypes::empty(),
            Self::Verb => WordTypes::VERB,
            Self::Adverb => WordTypes::ADVERB,
            Self::Noun => WordTypes::NOUN,
            Self::Adjective => WordTypes::ADJECTIVE,
            Self::Article => WordTypes::ARTICLE,
            Self::Preposition => WordTypes::PREPOSITION,
            Self::Pronoun => WordTypes::PRONOUN,
            Self::Connector => WordTypes::CONNECTOR,
            Self::Terminator => WordTypes::TERMINATOR,
            Self::Stopword => WordTypes::STOPWORD,
            Self::Numeric => WordTypes::NUMERIC,
            Self::Negation => WordTypes::NEGATION,
            Self::Direction => WordTypes::DIRECTION,
            Self::Literal => WordTypes::LITERAL,
        }
    }
}

impl fmt::Display for WordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unknown => "unknown",
            Self::Verb => "verb",
            Self::Adverb => "adverb",
            Self::Noun => "noun",
            Self::Adjective => "adjective",
            Self::Article => "article",
            Self::Preposition => "preposition",
            Self::Pronoun => "pronoun",
            Self::Connector => "connector",
            Self::Terminator => "terminator",
            Self::Stopword => "stopword",
            Self::Numeric => "numeric",
            Self::Negation => "negation",
            Self::Direction => "direction",
            Self::Literal => "literal",
        };
        f.write_str(name)
    }
}

/// What a word holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WordValue {
    /// Text as typed.
    Text(String),
    /// An integer and the way it was written.
    Number(i64, String),
}

/// One word of a sentence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word {
    value: WordValue,
    /// Category committed by the grammar resolver.
    pub final_type: WordType,
    /// Every category the vocabulary allows.
    pub possible: WordTypes,
}

impl Word {
    /// Creates an unclassified text word.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            value: WordValue::Text(text.into()),
            final_type: WordType::Unknown,
            possible: WordTypes::empty(),
        }
    }

    /// Creates a numeric word.
    #[must_use]
    pub fn number(value: i64, rendering: impl Into<String>) -> Self {
        Self {
            value: WordValue::Number(value, rendering.into()),
            final_type: WordType::Unknown,
            possible: WordTypes::NUMERIC,
        }
    }

    /// Creates a literal word whose category is already decided.
    #[must_use]
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            value: WordValue::Text(text.into()),
            final_type: WordType::Literal,
            possible: WordTypes::LITERAL,
        }
    }

    /// Builder method to set the possible categories.
    #[must_use]
    pub fn with_possible(mut self, possible: WordTypes) -> Self {
        self.possible = possible;
        self
    }

    /// Builder method to commit a category.
    #[must_use]
    pub fn with_type(mut self, word_type: WordType) -> Self {
        self.final_type = word_type;
        self
    }

    /// Returns the word's value.
    #[must_use]
    pub fn value(&self) -> &WordValue {
        &self.value
    }

    /// Returns the word as typed.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match &self.value {
            WordValue::Text(text) | WordValue::Number(_, text) => text,
        }
    }

    /// Returns the lookup key (lowercase).
    #[must_use]
    pub fn key(&self) -> String {
        self.as_str().to_lowercase()
    }

    /// Returns the integer value of a numeric word.
    #[must_use]
    pub fn as_number(&self) -> Option<i64> {
        match self.value {
            WordValue::Number(n, _) => Some(n),
            WordValue::Text(_) => None,
        }
    }

    /// Returns true if the word can be the given category.
    #[must_use]
    pub fn can_be(&self, word_type: WordType) -> bool {
        self.possible.contains(word_type.flag()) || self.final_type == word_type
    }

    /// Returns true if the word is a quoted literal or literal payload.
    #[must_use]
    pub fn is_literal(&self) -> bool {
        self.final_type == WordType::Literal
    }

    /// Replaces the word's text, keeping its classification.
    pub fn rewrite(&mut self, text: impl Into<String>) {
        self.value = WordValue::Text(text.into());
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Joins words with single spaces.
#[must_use]
pub fn join(words: &[Word]) -> String {
    words
        .iter()
        .map(Word::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}
