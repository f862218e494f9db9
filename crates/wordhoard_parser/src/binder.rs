//! Noun phrase resolution and event expansion.
//!
//! Each noun phrase slot of an unbound event is resolved to a candidate
//! list:
//!
//! 1. seed set from the slot's scope flags ([`ScopeEvaluator`])
//! 2. keep descendants of every noun
//! 3. keep atoms whose adjective properties reach the isness threshold
//! 4. with several candidates left, keep those matching the slot's
//!    boolean property requirements
//! 5. take up to `count`
//!
//! Modifiers then recurse: IN/ON/UNDER/BEHIND resolve the child among the
//! matches' contents, EXCEPT resolves the child against the same seed and
//! removes the matches. A slot introduced by "in" or "from" refuses
//! closed matches.
//!
//! The candidate lists are expanded positionally: event `i` takes element
//! `min(i, len - 1)` of every list, so shorter lists repeat their last
//! element instead of forming a cross product.

use std::sync::Arc;

use tracing::{debug, trace};
use wordhoard_foundation::AtomId;
use wordhoard_world::{Traversal, World};

use crate::config::ParserConfig;
use crate::error::BindError;
use crate::event::{Event, ParserEvent, Slot, Target};
use crate::noun_phrase::{INFINITY, Modifier, NounPhrase};
use crate::scope::{Place, ScopeEvaluator, Seed};
use crate::syntax::ArgType;

/// Result of binding one unbound event.
#[derive(Clone, Debug)]
pub struct Bindings {
    /// What "it" refers to afterwards.
    pub pronoun: Option<AtomId>,
    /// The bound events, produced lazily.
    pub events: BoundEvents,
}

/// A slot after resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Resolved {
    Candidates(Vec<AtomId>),
    Fixed(Target),
}

impl Resolved {
    fn len(&self) -> usize {
        match self {
            Self::Candidates(atoms) => atoms.len(),
            Self::Fixed(_) => 1,
        }
    }

    fn at(&self, index: usize) -> Target {
        match self {
            Self::Candidates(atoms) => atoms
                .get(index.min(atoms.len().saturating_sub(1)))
                .map_or(Target::None, |&atom| Target::Atom(atom)),
            Self::Fixed(target) => target.clone(),
        }
    }
}

/// Lazy sequence of bound events.
///
/// Single pass: each call to `next` advances the cursor.
#[derive(Clone, Debug)]
pub struct BoundEvents {
    actor: AtomId,
    verb: String,
    action: Arc<str>,
    slots: [Resolved; 3],
    cursor: usize,
    len: usize,
}

impl BoundEvents {
    fn new(event: &ParserEvent, slots: [Resolved; 3]) -> Self {
        let len = slots.iter().map(Resolved::len).max().unwrap_or(1);
        Self {
            actor: event.actor,
            verb: event.verb.clone(),
            action: Arc::clone(&event.action),
            slots,
            cursor: 0,
            len,
        }
    }
}

impl Iterator for BoundEvents {
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        if self.cursor >= self.len {
            return None;
        }
        let index = self.cursor;
        self.cursor += 1;
        let [current, arg1, arg2] = &self.slots;
        Some(Event {
            actor: self.actor,
            verb: self.verb.clone(),
            action: Arc::clone(&self.action),
            current: current.at(index),
            arg1: arg1.at(index),
            arg2: arg2.at(index),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.cursor;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BoundEvents {}

/// Resolves noun phrases for one actor.
pub struct Binder<'a, W: World + ?Sized> {
    world: &'a W,
    config: &'a ParserConfig,
    actor: AtomId,
    verb: &'a str,
}

impl<'a, W: World + ?Sized> Binder<'a, W> {
    /// Creates a binder. `verb` is used in messages.
    #[must_use]
    pub fn new(world: &'a W, config: &'a ParserConfig, actor: AtomId, verb: &'a str) -> Self {
        Self {
            world,
            config,
            actor,
            verb,
        }
    }

    /// Binds every slot of an event.
    ///
    /// The first non-pronoun phrase's first candidate becomes the new
    /// pronoun referent.
    ///
    /// # Errors
    ///
    /// Returns the first slot's binding failure.
    pub fn bind(&self, event: &ParserEvent, pronoun: Option<AtomId>) -> Result<Bindings, BindError> {
        let mut referent = None;
        let mut resolve = |slot: &Slot| -> Result<Resolved, BindError> {
            Ok(match slot {
                Slot::Phrase(phrase) => {
                    let candidates = self.resolve(phrase, pronoun)?;
                    if phrase.pronoun.is_none() && referent.is_none() {
                        referent = candidates.first().copied();
                    }
                    Resolved::Candidates(candidates)
                }
                Slot::Empty => Resolved::Fixed(Target::None),
                Slot::Atom(atom) => Resolved::Fixed(Target::Atom(*atom)),
                Slot::Text(text) => Resolved::Fixed(Target::Text(text.clone())),
                Slot::Number(n) => Resolved::Fixed(Target::Number(*n)),
                Slot::Direction(d) => Resolved::Fixed(Target::Direction(d.clone())),
            })
        };
        let slots = [
            resolve(&event.current)?,
            resolve(&event.arg1)?,
            resolve(&event.arg2)?,
        ];

        let events = BoundEvents::new(event, slots);
        debug!(
            actor = %self.actor,
            verb = %self.verb,
            events = events.len(),
            "bound"
        );
        Ok(Bindings {
            pronoun: referent.or(pronoun),
            events,
        })
    }

    /// Resolves one phrase to its candidates.
    ///
    /// Containers named by a chain are searched by sight; the chain's last
    /// phrase keeps the slot's own traversal.
    ///
    /// # Errors
    ///
    /// Returns a [`BindError`] when nothing matches, a container is
    /// closed, or a pronoun has no referent.
    pub fn resolve(
        &self,
        phrase: &NounPhrase,
        pronoun: Option<AtomId>,
    ) -> Result<Vec<AtomId>, BindError> {
        let seed = self.seed(phrase);
        let matches = self.resolve_in(phrase, &seed.atoms, &seed.place, pronoun)?;
        if phrase.must_be_open {
            if let Some(&closed) = matches.iter().find(|&&atom| self.world.is_closed(atom)) {
                return Err(BindError::Closed {
                    name: self.name(closed),
                });
            }
        }
        Ok(matches)
    }

    fn seed(&self, phrase: &NounPhrase) -> Seed {
        let chain = phrase.is_containment()
            || (phrase.modifier == Modifier::Except
                && phrase.child.as_deref().is_some_and(NounPhrase::is_containment));
        if chain {
            ScopeEvaluator::containers(self.world, self.actor, phrase.arg_type)
        } else {
            ScopeEvaluator::seed(self.world, self.actor, phrase.arg_type)
        }
    }

    fn resolve_in(
        &self,
        phrase: &NounPhrase,
        seed: &[AtomId],
        place: &Place,
        pronoun: Option<AtomId>,
    ) -> Result<Vec<AtomId>, BindError> {
        if let Some(word) = &phrase.pronoun {
            return pronoun
                .filter(|&atom| self.world.exists(atom))
                .map(|atom| vec![atom])
                .ok_or_else(|| BindError::NoPronoun { word: word.clone() });
        }

        let Some(child) = phrase.child.as_deref() else {
            return self.filter(phrase, seed, place, true);
        };

        if phrase.modifier == Modifier::Except {
            let excluded = self.filter(phrase, seed, place, false).unwrap_or_default();
            let remaining: Vec<AtomId> = self
                .resolve_in(child, seed, place, pronoun)?
                .into_iter()
                .filter(|atom| !excluded.contains(atom))
                .collect();
            if remaining.is_empty() {
                return Err(BindError::NothingTo {
                    verb: self.verb.to_string(),
                    place: place.clone(),
                });
            }
            return Ok(remaining);
        }

        let containers = self.filter(phrase, seed, place, true)?;
        let traversal = if child.is_containment() {
            Traversal::Visible
        } else {
            ScopeEvaluator::contents_traversal(child.arg_type)
        };
        let mut contents = Vec::new();
        for &container in &containers {
            if phrase.modifier == Modifier::In && self.world.is_closed(container) {
                return Err(BindError::Closed {
                    name: self.name(container),
                });
            }
            for atom in self.world.contents_by(container, traversal) {
                if !contents.contains(&atom) {
                    contents.push(atom);
                }
            }
        }
        let inside = containers
            .first()
            .map_or_else(|| place.clone(), |&c| Place::Inside(self.name(c)));
        self.resolve_in(child, &contents, &inside, pronoun)
    }

    /// Applies the noun, adjective, requirement and count filters.
    fn filter(
        &self,
        phrase: &NounPhrase,
        seed: &[AtomId],
        place: &Place,
        clamp: bool,
    ) -> Result<Vec<AtomId>, BindError> {
        let world = self.world;
        let mut candidates = seed.to_vec();

        for &noun in &phrase.nouns {
            candidates.retain(|&atom| world.is_descendant_of(atom, noun));
        }
        let of_kind = !candidates.is_empty();

        for adjective in &phrase.adjectives {
            candidates.retain(|&atom| {
                world
                    .property(atom, adjective)
                    .and_then(|value| value.as_int())
                    .is_some_and(|value| value >= self.config.isness_threshold)
            });
        }

        if let Some(requirements) = &phrase.requirements {
            if candidates.len() > 1 {
                for (property, wanted) in requirements.iter() {
                    candidates.retain(|&atom| {
                        world
                            .property(atom, property)
                            .is_some_and(|value| value.is_truthy())
                            == *wanted
                    });
                }
            }
        }

        if clamp && phrase.count != INFINITY {
            candidates.truncate(usize::try_from(phrase.count).unwrap_or(usize::MAX));
        }

        trace!(ident = %phrase.ident, %place, candidates = ?candidates, "filtered");
        if candidates.is_empty() {
            return Err(if phrase.ident.is_empty() {
                BindError::NothingTo {
                    verb: self.verb.to_string(),
                    place: place.clone(),
                }
            } else {
                BindError::NoMatch {
                    ident: phrase.ident.clone(),
                    place: place.clone(),
                    more: of_kind,
                }
            });
        }
        Ok(candidates)
    }

    fn name(&self, atom: AtomId) -> String {
        self.world
            .name(atom)
            .map_or_else(|| atom.to_string(), str::to_string)
    }
}
