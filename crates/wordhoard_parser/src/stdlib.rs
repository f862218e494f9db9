//! Standard vocabulary for text worlds.
//!
//! Contains the function words every sentence needs and a starter set of
//! verbs. Everything is registered through the same API a game uses, so a
//! game can start from [`standard_vocabulary`] and add its own nouns,
//! adjectives and verbs on top.

use wordhoard_foundation::AtomId;

use crate::error::TemplateError;
use crate::noun_phrase::INFINITY;
use crate::syntax::{ArgType, VerbTemplate};
use crate::vocabulary::{Verb, Vocabulary};
use crate::word::WordTypes;

/// Articles.
pub const ARTICLES: &[&str] = &["a", "an", "the"];

/// Prepositions.
pub const PREPOSITIONS: &[&str] = &[
    "in", "into", "inside", "on", "onto", "under", "beneath", "behind", "from", "at", "to", "with",
];

/// Connectors.
pub const CONNECTORS: &[&str] = &["and", ","];

/// Sentence terminators.
pub const TERMINATORS: &[&str] = &[".", ";", "!", "then"];

/// Negations.
pub const NEGATIONS: &[&str] = &["except", "but"];

/// Words ignored by the grammar.
pub const STOPWORDS: &[&str] = &["please"];

/// Pronouns naming the last thing handled.
pub const PRONOUNS: &[&str] = &["it", "them", "him", "her"];

/// Pronouns naming the actor.
pub const REFLEXIVES: &[&str] = &["me", "myself", "self"];

/// Number words and the counts they stand for.
pub const NUMBERS: &[(&str, u32)] = &[
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("all", INFINITY),
    ("every", INFINITY),
];

/// Direction words and their canonical direction.
pub const DIRECTIONS: &[(&str, &str)] = &[
    ("north", "north"),
    ("n", "north"),
    ("south", "south"),
    ("s", "south"),
    ("east", "east"),
    ("e", "east"),
    ("west", "west"),
    ("w", "west"),
    ("northeast", "northeast"),
    ("ne", "northeast"),
    ("northwest", "northwest"),
    ("nw", "northwest"),
    ("southeast", "southeast"),
    ("se", "southeast"),
    ("southwest", "southwest"),
    ("sw", "southwest"),
    ("up", "up"),
    ("u", "up"),
    ("down", "down"),
    ("d", "down"),
];

/// Objects lying around the actor that can be picked up.
const LOOSE: ArgType = ArgType::CURRENT
    .union(ArgType::SEARCH_CONTAINER)
    .union(ArgType::ACQUIRE_SEARCH);

/// Objects the actor carries.
const HELD: ArgType = ArgType::CURRENT.union(ArgType::SEARCH_INVENTORY);

/// Anything the actor can see.
const SEEN: ArgType = ArgType::CURRENT
    .union(ArgType::SEARCH_CONTAINER)
    .union(ArgType::SEARCH_INVENTORY)
    .union(ArgType::LOOK_SEARCH);

/// A second object near the actor.
const NEARBY: ArgType = ArgType::THING
    .union(ArgType::SEARCH_CONTAINER)
    .union(ArgType::SEARCH_INVENTORY);

/// Within reach, for opening and closing.
const REACHABLE: ArgType = ArgType::CURRENT
    .union(ArgType::SEARCH_CONTAINER)
    .union(ArgType::SEARCH_INVENTORY);

/// Creates a vocabulary holding the function words and starter verbs.
///
/// # Errors
///
/// Returns an error if a starter template is malformed.
pub fn standard_vocabulary(default_noun: AtomId) -> Result<Vocabulary, TemplateError> {
    let mut vocabulary = Vocabulary::new().with_default_noun(default_noun);
    register_function_words(&mut vocabulary);
    register_verbs(&mut vocabulary)?;
    Ok(vocabulary)
}

/// Registers articles, prepositions, connectors, terminators, negations,
/// stopwords, pronouns, number words and directions.
pub fn register_function_words(vocabulary: &mut Vocabulary) {
    let groups = [
        (ARTICLES, WordTypes::ARTICLE),
        (PREPOSITIONS, WordTypes::PREPOSITION),
        (CONNECTORS, WordTypes::CONNECTOR),
        (TERMINATORS, WordTypes::TERMINATOR),
        (NEGATIONS, WordTypes::NEGATION),
        (STOPWORDS, WordTypes::STOPWORD),
    ];
    for (words, types) in groups {
        for word in words {
            vocabulary.register_word(word, types);
        }
    }
    for word in PRONOUNS {
        vocabulary.register_pronoun(word);
    }
    for word in REFLEXIVES {
        vocabulary.register_reflexive(word);
    }
    for &(word, count) in NUMBERS {
        vocabulary.register_number(word, count);
    }
    for &(word, canonical) in DIRECTIONS {
        vocabulary.register_direction(word, canonical);
    }
}

/// Registers the starter verbs and their templates.
///
/// # Errors
///
/// Returns an error if a template is malformed.
pub fn register_verbs(vocabulary: &mut Vocabulary) -> Result<(), TemplateError> {
    let get = Verb::new("get")
        .with_template(VerbTemplate::builder("get").first(LOOSE).build()?)
        .with_template(
            VerbTemplate::builder("get")
                .first(ArgType::CURRENT | ArgType::SEARCH_CONTAINER | ArgType::LOOK_SEARCH)
                .then("from", NEARBY)
                .build()?,
        );
    vocabulary.register_verb(get, &["take"]);

    let drop = Verb::new("drop").with_template(VerbTemplate::builder("drop").first(HELD).build()?);
    vocabulary.register_verb(drop, &["discard"]);

    let put = Verb::new("put")
        .with_template(VerbTemplate::builder("put").first(HELD).then("in", NEARBY).build()?)
        .with_template(VerbTemplate::builder("put").first(HELD).then("into", NEARBY).build()?)
        .with_template(VerbTemplate::builder("put_on").first(HELD).then("on", NEARBY).build()?)
        .with_template(VerbTemplate::builder("put_on").first(HELD).then("onto", NEARBY).build()?);
    vocabulary.register_verb(put, &["place"]);

    let look = Verb::new("look")
        .with_template(VerbTemplate::builder("look").build()?)
        .with_template(VerbTemplate::builder("examine").then("at", SEEN).build()?)
        .with_template(VerbTemplate::builder("look_in").then("in", SEEN).build()?)
        .with_template(VerbTemplate::builder("examine").first(SEEN).build()?);
    vocabulary.register_verb(look, &["l"]);

    let examine =
        Verb::new("examine").with_template(VerbTemplate::builder("examine").first(SEEN).build()?);
    vocabulary.register_verb(examine, &["x", "inspect"]);

    let glance = Verb::new("glance")
        .with_template(VerbTemplate::builder("glance").build()?)
        .with_template(VerbTemplate::builder("glance").then("at", SEEN).build()?)
        .with_template(VerbTemplate::builder("glance").first(SEEN).build()?);
    vocabulary.register_verb(glance, &[]);
    vocabulary.register_adverb_rule("quickly", "look", "glance");
    vocabulary.register_adverb("carefully");

    let go = Verb::new("go").with_template(
        VerbTemplate::builder("go")
            .first(ArgType::DIRECTION)
            .build()?,
    );
    vocabulary.register_verb(go, &["walk", "run"]);

    vocabulary.register_verb(Verb::communicative("say"), &["speak"]);
    vocabulary.register_verb(Verb::communicative("tell"), &[]);

    let give = Verb::new("give").with_template(
        VerbTemplate::builder("give")
            .first(HELD)
            .then("to", ArgType::THING | ArgType::SEARCH_CONTAINER)
            .build()?,
    );
    vocabulary.register_verb(give, &["hand"]);

    let open = Verb::new("open")
        .with_template(
            VerbTemplate::builder("open")
                .first(REACHABLE)
                .require(0, "closed", true)
                .build()?,
        )
        .with_template(
            VerbTemplate::builder("open")
                .first(REACHABLE)
                .then("with", ArgType::THING | ArgType::SEARCH_INVENTORY)
                .require(0, "closed", true)
                .build()?,
        );
    vocabulary.register_verb(open, &[]);

    let close = Verb::new("close").with_template(
        VerbTemplate::builder("close")
            .first(REACHABLE)
            .require(0, "closed", false)
            .build()?,
    );
    vocabulary.register_verb(close, &["shut"]);

    let inventory =
        Verb::new("inventory").with_template(VerbTemplate::builder("inventory").build()?);
    vocabulary.register_verb(inventory, &["i", "inv"]);

    let wait = Verb::new("wait")
        .with_template(VerbTemplate::builder("wait").build()?)
        .with_template(
            VerbTemplate::builder("wait")
                .first(ArgType::NUMERIC)
                .build()?,
        );
    vocabulary.register_verb(wait, &["z"]);

    let write = Verb::new("write").with_template(
        VerbTemplate::builder("write")
            .first(ArgType::STRING)
            .then("on", NEARBY)
            .build()?,
    );
    vocabulary.register_verb(write, &[]);

    Ok(())
}
