//! Noun phrase representation and compilation.
//!
//! Handles phrases like "the red ball", "3 coins", "all except sword" or
//! "coin in box". Compilation reads the words right to left: a preposition
//! or negation closes the phrase built so far and continues into a child,
//! so "coin in box" becomes `box` with an IN child `coin`.

use std::sync::Arc;

use wordhoard_foundation::AtomId;

use crate::syntax::{ArgType, Requirements};
use crate::vocabulary::Vocabulary;
use crate::word::{Word, WordType};

/// Count meaning "every match".
pub const INFINITY: u32 = u32::MAX;

/// How a phrase relates to its child.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Modifier {
    /// No child.
    #[default]
    None,
    /// Child is inside this phrase's matches.
    In,
    /// Child is on top of this phrase's matches.
    On,
    /// Child is under this phrase's matches.
    Under,
    /// Child is behind this phrase's matches.
    Behind,
    /// Child's matches minus this phrase's matches.
    Except,
}

impl Modifier {
    /// Maps a preposition to the relation it introduces.
    #[must_use]
    pub fn for_preposition(word: &str) -> Self {
        match word.to_lowercase().as_str() {
            "on" | "onto" => Self::On,
            "under" | "beneath" => Self::Under,
            "behind" => Self::Behind,
            _ => Self::In,
        }
    }

    /// Returns true for template prepositions that reach inside their
    /// object, as in "put coin in box" or "get coin from box".
    #[must_use]
    pub fn encloses(preposition: &str) -> bool {
        matches!(
            preposition.to_lowercase().as_str(),
            "in" | "into" | "inside" | "within" | "from"
        )
    }

    /// Returns true for relations that search a container's contents.
    #[must_use]
    pub fn is_containment(self) -> bool {
        matches!(self, Self::In | Self::On | Self::Under | Self::Behind)
    }
}

/// A compiled, possibly nested, description of target objects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NounPhrase {
    /// The words that named the object, for messages ("red ball")
    pub ident: String,
    /// Class atoms every match must descend from
    pub nouns: Vec<AtomId>,
    /// Properties every match must have at or above the threshold
    pub adjectives: Vec<String>,
    /// How many matches to take
    pub count: u32,
    /// Relation to the child phrase
    pub modifier: Modifier,
    /// The phrase the modifier applies to
    pub child: Option<Box<NounPhrase>>,
    /// The pronoun, if this phrase is one
    pub pronoun: Option<String>,
    /// Kind and scope flags of the slot
    pub arg_type: ArgType,
    /// Boolean properties used to narrow ambiguous matches
    pub requirements: Option<Arc<Requirements>>,
    /// Reject closed matches of the chain's last phrase
    pub must_be_open: bool,
}

impl NounPhrase {
    /// Creates an empty phrase for a slot.
    #[must_use]
    pub fn new(arg_type: ArgType) -> Self {
        Self {
            ident: String::new(),
            nouns: Vec::new(),
            adjectives: Vec::new(),
            count: 1,
            modifier: Modifier::None,
            child: None,
            pronoun: None,
            arg_type,
            requirements: None,
            must_be_open: false,
        }
    }

    /// Adds a noun.
    #[must_use]
    pub fn with_noun(mut self, atom: AtomId) -> Self {
        self.nouns.push(atom);
        self
    }

    /// Adds an adjective property.
    #[must_use]
    pub fn with_adjective(mut self, property: impl Into<String>) -> Self {
        self.adjectives.push(property.into());
        self
    }

    /// Sets the count.
    #[must_use]
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Sets the identifier used in messages.
    #[must_use]
    pub fn with_ident(mut self, ident: impl Into<String>) -> Self {
        self.ident = ident.into();
        self
    }

    /// Attaches a child through a modifier.
    #[must_use]
    pub fn with_child(mut self, modifier: Modifier, child: NounPhrase) -> Self {
        self.modifier = modifier;
        self.child = Some(Box::new(child));
        self
    }

    /// Sets property requirements.
    #[must_use]
    pub fn with_requirements(mut self, requirements: Option<Arc<Requirements>>) -> Self {
        self.requirements = requirements;
        self
    }

    /// Marks the phrase as naming something to reach inside.
    #[must_use]
    pub fn opened(mut self, must_be_open: bool) -> Self {
        self.must_be_open = must_be_open;
        self
    }

    /// Returns true when this phrase finds its child inside, on, under or
    /// behind its own matches.
    #[must_use]
    pub fn is_containment(&self) -> bool {
        self.child.is_some() && self.modifier.is_containment()
    }

    /// Number of phrases in the chain, this one included.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.child.as_ref().map_or(0, |child| child.depth())
    }

    /// A child phrase inheriting this phrase's slot settings.
    fn spawn_child(&self) -> Self {
        Self::new(self.arg_type).with_requirements(self.requirements.clone())
    }

    fn prepend_ident(&mut self, word: &Word) {
        if self.ident.is_empty() {
            self.ident = word.as_str().to_string();
        } else {
            self.ident = format!("{} {}", word.as_str(), self.ident);
        }
    }
}

/// Compiles a slot's words into a noun phrase.
#[must_use]
pub fn compile(
    words: &[Word],
    vocabulary: &Vocabulary,
    arg_type: ArgType,
    requirements: Option<Arc<Requirements>>,
) -> NounPhrase {
    let mut frames = vec![NounPhrase::new(arg_type).with_requirements(requirements)];

    for word in words.iter().rev() {
        let Some(current) = frames.last_mut() else {
            break;
        };
        match word.final_type {
            WordType::Noun => {
                if let Some(atom) = vocabulary.noun(word.as_str()) {
                    current.nouns.insert(0, atom);
                }
                current.prepend_ident(word);
            }
            WordType::Adjective => {
                let property = vocabulary
                    .adjective(word.as_str())
                    .map_or_else(|| word.key(), str::to_string);
                current.adjectives.insert(0, property);
                current.prepend_ident(word);
            }
            WordType::Numeric => {
                current.count = vocabulary.number(word).unwrap_or(1);
            }
            WordType::Pronoun => {
                current.pronoun = Some(word.as_str().to_string());
                current.ident = word.as_str().to_string();
                break;
            }
            WordType::Preposition | WordType::Negation => {
                current.modifier = if word.final_type == WordType::Negation {
                    Modifier::Except
                } else {
                    Modifier::for_preposition(word.as_str())
                };
                let child = current.spawn_child();
                frames.push(child);
            }
            _ => {}
        }
    }

    if let Some(default) = vocabulary.default_noun() {
        for frame in &mut frames {
            if frame.nouns.is_empty() && frame.pronoun.is_none() {
                frame.nouns.push(default);
            }
        }
    }

    let mut phrase = frames.pop().unwrap_or_else(|| NounPhrase::new(arg_type));
    while let Some(mut parent) = frames.pop() {
        parent.child = Some(Box::new(phrase));
        phrase = parent;
    }
    phrase
}
