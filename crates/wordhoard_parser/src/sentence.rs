//! Sentence representation.

use std::sync::Arc;

use crate::vocabulary::Verb;
use crate::word::{self, Word, WordType};

/// One imperative sentence after category resolution.
#[derive(Clone, Debug, Default)]
pub struct Sentence {
    /// Words with committed categories.
    pub words: Vec<Word>,
    /// Resolved verb, once known.
    pub verb: Option<Arc<Verb>>,
    /// The verb as the player typed it.
    pub verb_word: Option<String>,
}

impl Sentence {
    /// Creates a sentence from typed words.
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        Self {
            words,
            verb: None,
            verb_word: None,
        }
    }

    /// Index of this sentence's own verb word.
    #[must_use]
    pub fn verb_index(&self) -> Option<usize> {
        self.words
            .iter()
            .position(|w| w.final_type == WordType::Verb)
    }

    /// Indices of all preposition words, in order.
    #[must_use]
    pub fn prepositions(&self) -> Vec<usize> {
        self.words
            .iter()
            .enumerate()
            .filter(|(_, w)| w.final_type == WordType::Preposition)
            .map(|(i, _)| i)
            .collect()
    }

    /// Adverb words, in order.
    pub fn adverbs(&self) -> impl Iterator<Item = &Word> {
        self.words
            .iter()
            .filter(|w| w.final_type == WordType::Adverb)
    }

    /// Every argument word, ignoring prepositions as separators.
    #[must_use]
    pub fn arguments(&self) -> Vec<Word> {
        let [all, _, _] = self.buckets(&[]);
        all
    }

    /// Splits the argument words into three buckets around the given
    /// preposition indices. The separating prepositions are dropped.
    #[must_use]
    pub fn buckets(&self, binding: &[usize]) -> [Vec<Word>; 3] {
        let mut buckets: [Vec<Word>; 3] = Default::default();
        let verb = self.verb_index();
        for (index, word) in self.words.iter().enumerate() {
            if Some(index) == verb || binding.contains(&index) || !is_argument(word) {
                continue;
            }
            let bucket = binding.iter().filter(|&&split| split < index).count();
            if let Some(bucket) = buckets.get_mut(bucket) {
                bucket.push(word.clone());
            }
        }
        buckets
    }

    /// Returns the sentence text.
    #[must_use]
    pub fn text(&self) -> String {
        word::join(&self.words)
    }
}

fn is_argument(word: &Word) -> bool {
    !matches!(
        word.final_type,
        WordType::Verb | WordType::Adverb | WordType::Stopword | WordType::Terminator
    )
}
