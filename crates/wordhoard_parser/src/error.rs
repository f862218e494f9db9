//! Parser and binder errors.
//!
//! Every variant renders as the exact message shown to the player, so the
//! pipeline can hand `to_string()` straight to
//! [`EventSink::report`](crate::EventSink::report).

use thiserror::Error;

use crate::scope::Place;

/// A sentence could not be turned into an unbound event.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// No category assignment reaches the end of the sentence.
    #[error("{}", ungrammatical(understood, unknown))]
    Ungrammatical {
        /// Longest prefix the resolver could classify.
        understood: String,
        /// First word it could not place.
        unknown: String,
    },

    /// The sentence stops where an object was still expected.
    #[error("What do you want to {verb}?")]
    DanglingPreposition {
        /// Verb as typed.
        verb: String,
    },

    /// The verb is unknown or above the actor's privilege.
    #[error("I do not know how to {verb}.")]
    UnknownVerb {
        /// Verb as typed.
        verb: String,
    },

    /// The verb is known but no template fits the sentence.
    #[error("I do not know how to {verb} that.")]
    NoTemplate {
        /// Verb as typed.
        verb: String,
    },

    /// A template slot needs an object and none was given.
    #[error("What do you want to {verb}?")]
    MissingObject {
        /// Verb as typed.
        verb: String,
    },

    /// A connector inside a prepositional object ("in box and bag").
    #[error("You can only use one object after \"{preposition}\".")]
    CompoundPrepositionalObject {
        /// The preposition whose object was compound.
        preposition: String,
    },

    /// Binding failed.
    #[error(transparent)]
    Bind(#[from] BindError),
}

fn ungrammatical(understood: &str, unknown: &str) -> String {
    if understood.is_empty() {
        format!("What is \"{unknown}\"?")
    } else {
        format!("I understand \"{understood}\", but what is \"{unknown}\"?")
    }
}

/// A noun phrase could not be resolved against the world.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BindError {
    /// Nothing in scope at all, and the phrase named nothing in particular.
    #[error("{}", nothing_to(verb, place))]
    NothingTo {
        /// Verb as typed.
        verb: String,
        /// Where the search happened.
        place: Place,
    },

    /// The phrase named something that is not in scope.
    #[error("{}", no_match(ident, place, *more))]
    NoMatch {
        /// Words that identified the object ("red ball").
        ident: String,
        /// Where the search happened.
        place: Place,
        /// Objects of the right kind existed but none passed the filters.
        more: bool,
    },

    /// A container named with "in" is closed.
    #[error("The {name} is closed.")]
    Closed {
        /// Name of the closed container.
        name: String,
    },

    /// A pronoun was used before anything was referred to.
    #[error("I don't know what \"{word}\" refers to.")]
    NoPronoun {
        /// The pronoun as typed.
        word: String,
    },
}

fn nothing_to(verb: &str, place: &Place) -> String {
    match place {
        Place::Inventory => format!("You are not carrying anything to {verb}."),
        Place::Room => format!("There is nothing here to {verb}."),
        Place::Nearby | Place::World => format!("There is nothing to {verb}."),
        Place::Inside(container) => format!("There is nothing in the {container} to {verb}."),
    }
}

fn no_match(ident: &str, place: &Place, more: bool) -> String {
    let plural = pluralize(ident);
    let more = if more { "more " } else { "" };
    match place {
        Place::Inventory => format!("You have no {more}{plural}."),
        Place::Room => format!("There are no {more}{plural} here."),
        Place::Nearby => format!("You see no {more}{plural}."),
        Place::World => format!("There are no {more}{plural} anywhere."),
        Place::Inside(container) => format!("There are no {more}{plural} in the {container}."),
    }
}

/// Naive English plural for error messages.
#[must_use]
pub fn pluralize(word: &str) -> String {
    let sibilant = ["s", "x", "z", "ch", "sh"]
        .iter()
        .any(|suffix| word.ends_with(suffix));
    if sibilant {
        format!("{word}es")
    } else {
        format!("{word}s")
    }
}

/// A verb template violates its construction rules.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    /// More than one slot is marked CURRENT.
    #[error("template for {action} has more than one CURRENT slot")]
    MultipleCurrent {
        /// Action the template maps to.
        action: String,
    },

    /// A slot is marked both THING and CURRENT.
    #[error("slot {slot} of {action} is both THING and CURRENT")]
    ThingAndCurrent {
        /// Action the template maps to.
        action: String,
        /// Offending slot index.
        slot: usize,
    },

    /// A preposition was given without an object slot after it.
    #[error("preposition \"{preposition}\" of {action} has no object slot")]
    EmptyPrepositionSlot {
        /// Action the template maps to.
        action: String,
        /// The preposition.
        preposition: String,
    },

    /// More than two prepositions.
    #[error("template for {action} has more than two prepositions")]
    TooManyPrepositions {
        /// Action the template maps to.
        action: String,
    },

    /// A property requirement names a slot that does not exist.
    #[error("template for {action} has no slot {slot}")]
    NoSuchSlot {
        /// Action the template maps to.
        action: String,
        /// Requested slot index.
        slot: usize,
    },
}
