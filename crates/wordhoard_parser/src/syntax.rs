//! Verb templates and template selection.
//!
//! A verb owns a list of templates. Each template describes up to three
//! argument slots separated by up to two prepositions, for example
//! `put [THING] in [THING]`. Matching a sentence picks one template and
//! the preposition words that split the sentence into slot buckets.

use std::collections::BTreeMap;
use std::sync::Arc;

use bitflags::bitflags;
use tracing::trace;

use crate::error::TemplateError;
use crate::sentence::Sentence;
use crate::vocabulary::Verb;
use crate::word::WordType;

bitflags! {
    /// What a template slot accepts, plus where its objects are searched.
    ///
    /// A slot with none of the kind bits set is EMPTY.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ArgType: u32 {
        /// Free text.
        const STRING = 1 << 0;
        /// An object that is not the event's current object.
        const THING = 1 << 1;
        /// The event's current object.
        const CURRENT = 1 << 2;
        /// A number.
        const NUMERIC = 1 << 3;
        /// A date, kept as text.
        const DATE = 1 << 4;
        /// A direction.
        const DIRECTION = 1 << 5;
        /// The payload of a communicative verb.
        const COMMUNICATIVE = 1 << 6;

        /// Search the actor's surroundings.
        const SEARCH_CONTAINER = 1 << 8;
        /// Search the actor's inventory.
        const SEARCH_INVENTORY = 1 << 9;
        /// Search the whole world.
        const SEARCH_WORLD = 1 << 10;
        /// Only gettable objects.
        const ACQUIRE_SEARCH = 1 << 11;
        /// Only visible objects.
        const LOOK_SEARCH = 1 << 12;

        /// Every kind bit.
        const KINDS = Self::STRING.bits()
            | Self::THING.bits()
            | Self::CURRENT.bits()
            | Self::NUMERIC.bits()
            | Self::DATE.bits()
            | Self::DIRECTION.bits()
            | Self::COMMUNICATIVE.bits();
        /// Every scope bit.
        const SCOPES = Self::SEARCH_CONTAINER.bits()
            | Self::SEARCH_INVENTORY.bits()
            | Self::SEARCH_WORLD.bits()
            | Self::ACQUIRE_SEARCH.bits()
            | Self::LOOK_SEARCH.bits();
    }
}

impl ArgType {
    /// Returns true if the slot accepts nothing.
    #[must_use]
    pub fn is_empty_slot(self) -> bool {
        !self.intersects(Self::KINDS)
    }

    /// Returns true if the slot takes a world object.
    #[must_use]
    pub fn is_object(self) -> bool {
        self.intersects(Self::THING | Self::CURRENT)
    }

    /// Returns only the scope bits.
    #[must_use]
    pub fn scope(self) -> Self {
        self & Self::SCOPES
    }
}

/// Boolean property values a slot's objects must have.
pub type Requirements = BTreeMap<String, bool>;

/// One argument pattern of a verb.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerbTemplate {
    action: Arc<str>,
    slots: [ArgType; 3],
    prepositions: Vec<String>,
    requirements: [Option<Arc<Requirements>>; 3],
}

impl VerbTemplate {
    /// Starts building a template for an action.
    #[must_use]
    pub fn builder(action: &str) -> TemplateBuilder {
        TemplateBuilder {
            action: Arc::from(action),
            slots: vec![ArgType::empty()],
            prepositions: Vec::new(),
            requirements: Vec::new(),
        }
    }

    /// The fixed template of a communicative verb.
    #[must_use]
    pub fn communicative(action: &str) -> Self {
        Self {
            action: Arc::from(action),
            slots: [ArgType::COMMUNICATIVE, ArgType::empty(), ArgType::empty()],
            prepositions: Vec::new(),
            requirements: [None, None, None],
        }
    }

    /// Action name handed to the game.
    #[must_use]
    pub fn action(&self) -> &Arc<str> {
        &self.action
    }

    /// Returns a slot's argument type.
    #[must_use]
    pub fn slot(&self, index: usize) -> ArgType {
        self.slots.get(index).copied().unwrap_or_default()
    }

    /// Returns all three slots.
    #[must_use]
    pub fn slots(&self) -> &[ArgType; 3] {
        &self.slots
    }

    /// Returns the prepositions (lowercase).
    #[must_use]
    pub fn prepositions(&self) -> &[String] {
        &self.prepositions
    }

    /// Returns a slot's property requirements.
    #[must_use]
    pub fn requirements(&self, index: usize) -> Option<&Arc<Requirements>> {
        self.requirements.get(index).and_then(Option::as_ref)
    }
}

/// Builder for [`VerbTemplate`].
#[derive(Clone, Debug)]
pub struct TemplateBuilder {
    action: Arc<str>,
    slots: Vec<ArgType>,
    prepositions: Vec<String>,
    requirements: Vec<(usize, String, bool)>,
}

impl TemplateBuilder {
    /// Sets the slot directly after the verb.
    #[must_use]
    pub fn first(mut self, kind: ArgType) -> Self {
        self.slots[0] = kind;
        self
    }

    /// Adds a preposition and the slot that follows it.
    #[must_use]
    pub fn then(mut self, preposition: &str, kind: ArgType) -> Self {
        self.prepositions.push(preposition.to_lowercase());
        self.slots.push(kind);
        self
    }

    /// Requires objects in `slot` to have a boolean property value.
    #[must_use]
    pub fn require(mut self, slot: usize, property: &str, value: bool) -> Self {
        self.requirements.push((slot, property.to_string(), value));
        self
    }

    /// Validates and builds the template.
    ///
    /// # Errors
    ///
    /// Returns an error if the template has more than one CURRENT slot, a
    /// slot marked both THING and CURRENT, a preposition followed by an
    /// EMPTY slot, more than two prepositions, or a requirement on a slot
    /// that does not exist.
    pub fn build(self) -> Result<VerbTemplate, TemplateError> {
        let action = self.action.to_string();
        if self.prepositions.len() > 2 {
            return Err(TemplateError::TooManyPrepositions { action });
        }
        for (index, preposition) in self.prepositions.iter().enumerate() {
            if self.slots[index + 1].is_empty_slot() {
                return Err(TemplateError::EmptyPrepositionSlot {
                    action,
                    preposition: preposition.clone(),
                });
            }
        }
        for (slot, kind) in self.slots.iter().enumerate() {
            if kind.contains(ArgType::THING | ArgType::CURRENT) {
                return Err(TemplateError::ThingAndCurrent { action, slot });
            }
        }
        let currents = self
            .slots
            .iter()
            .filter(|kind| kind.contains(ArgType::CURRENT))
            .count();
        if currents > 1 {
            return Err(TemplateError::MultipleCurrent { action });
        }

        let mut requirements: [Option<Requirements>; 3] = [None, None, None];
        for (slot, property, value) in self.requirements {
            if slot >= self.slots.len() || self.slots[slot].is_empty_slot() {
                return Err(TemplateError::NoSuchSlot { action, slot });
            }
            requirements[slot]
                .get_or_insert_with(Requirements::new)
                .insert(property, value);
        }

        let mut slots = [ArgType::empty(); 3];
        slots[..self.slots.len()].copy_from_slice(&self.slots);

        Ok(VerbTemplate {
            action: self.action,
            slots,
            prepositions: self.prepositions,
            requirements: requirements.map(|r| r.map(Arc::new)),
        })
    }
}

/// A template chosen for a sentence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateMatch<'v> {
    /// The chosen template.
    pub template: &'v VerbTemplate,
    /// Word indices of the prepositions that separate the slots.
    pub binding: Vec<usize>,
}

/// Leading shape of a preposition-free argument run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Shape {
    Empty,
    Direction,
    Numeric,
    Text,
    Object,
}

impl Shape {
    fn of(sentence: &Sentence) -> Self {
        let run = sentence.arguments();
        match (run.first(), run.last()) {
            (None, _) | (_, None) => Self::Empty,
            (Some(first), _) if first.final_type == WordType::Direction => Self::Direction,
            (_, Some(last)) if last.final_type == WordType::Numeric => Self::Numeric,
            (Some(first), _) if first.is_literal() => Self::Text,
            _ => Self::Object,
        }
    }

    fn accepts(self, kind: ArgType) -> bool {
        match self {
            Self::Empty => kind.is_empty_slot(),
            Self::Direction => kind.contains(ArgType::DIRECTION),
            Self::Numeric => kind.contains(ArgType::NUMERIC),
            Self::Text => kind.intersects(ArgType::STRING | ArgType::DATE),
            Self::Object => kind.is_object(),
        }
    }
}

/// Picks the template a sentence uses.
///
/// Fallback order: the first two prepositions together, then each
/// preposition alone in sentence order, then a preposition-free template
/// whose first slot fits the argument shape, then the verb's only
/// preposition-free template.
#[must_use]
pub fn select<'v>(verb: &'v Verb, sentence: &Sentence) -> Option<TemplateMatch<'v>> {
    if verb.communicative {
        return verb.templates.first().map(|template| TemplateMatch {
            template,
            binding: Vec::new(),
        });
    }

    let prepositions = sentence.prepositions();
    let keys: Vec<String> = prepositions
        .iter()
        .map(|&index| sentence.words[index].key())
        .collect();

    if prepositions.len() >= 2 {
        let binding = vec![prepositions[0], prepositions[1]];
        let found = verb.templates.iter().find(|template| {
            template.prepositions() == &keys[..2] && fits(template, sentence, &binding)
        });
        if let Some(template) = found {
            trace!(verb = %verb.name, "matched two prepositions");
            return Some(TemplateMatch { template, binding });
        }
    }

    for (&index, key) in prepositions.iter().zip(&keys) {
        let binding = vec![index];
        let found = verb.templates.iter().find(|template| {
            template.prepositions().len() == 1
                && &template.prepositions()[0] == key
                && fits(template, sentence, &binding)
        });
        if let Some(template) = found {
            trace!(verb = %verb.name, preposition = %key, "matched one preposition");
            return Some(TemplateMatch { template, binding });
        }
    }

    let bare: Vec<&VerbTemplate> = verb
        .templates
        .iter()
        .filter(|template| template.prepositions().is_empty())
        .collect();
    let shape = Shape::of(sentence);
    if let Some(template) = bare
        .iter()
        .find(|template| shape.accepts(template.slot(0)) && fits(template, sentence, &[]))
    {
        trace!(verb = %verb.name, ?shape, "matched argument shape");
        return Some(TemplateMatch {
            template,
            binding: Vec::new(),
        });
    }

    match bare.as_slice() {
        [only] if fits(only, sentence, &[]) => Some(TemplateMatch {
            template: only,
            binding: Vec::new(),
        }),
        _ => None,
    }
}

/// An EMPTY slot only fits an empty bucket.
fn fits(template: &VerbTemplate, sentence: &Sentence, binding: &[usize]) -> bool {
    let buckets = sentence.buckets(binding);
    template
        .slots()
        .iter()
        .zip(&buckets)
        .all(|(kind, bucket)| !kind.is_empty_slot() || bucket.is_empty())
}
