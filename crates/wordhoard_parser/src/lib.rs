//! Sentence parsing and noun-phrase binding for multi-user text worlds.
//!
//! This crate turns a line typed by a player like "get sword and shield"
//! or "put book in box" into fully resolved events the game can execute.
//!
//! # Architecture
//!
//! ```text
//! "get sword and drop it."
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → [get, sword, and, drop, it, .]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ SEGMENTER       │  split at terminators, then per raw sentence:
//! │  ├ CLASSIFIER   │    possible categories per word
//! │  ├ GRAMMAR      │    backtracking search for one category per word
//! │  └ SPLIT        │  → "get sword" | "drop it"   (verb ellipsis, adverbs)
//! └─────────────────┘
//!          │  per sentence
//!          ▼
//! ┌─────────────────┐
//! │ TEMPLATE        │  → get: [CURRENT|ACQUIRE]          → action :get
//! │ MATCHING        │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ NOUN PHRASE     │  → NounPhrase { nouns: [sword], count: 1, .. }
//! │ COMPILER        │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ BINDER          │  → Event { action: get, current: #12 } ...
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Convert raw input to a token stream
//! - [`word`] - Words and word categories
//! - [`vocabulary`] - Word lookup: categories, verbs, nouns, adjectives
//! - [`classifier`] - Possible categories per word and sentence rewrites
//! - [`grammar`] - Category transition table and backtracking resolver
//! - [`segmenter`] - Sentence splitting, verb ellipsis, adverb transforms
//! - [`sentence`] - Sentence representation and argument isolation
//! - [`syntax`] - Verb templates and template selection
//! - [`noun_phrase`] - Noun phrase trees and their compiler
//! - [`event`] - Unbound and bound events, event assembly
//! - [`scope`] - Seed sets for noun resolution
//! - [`binder`] - Noun phrase resolution against the world
//! - [`pronouns`] - Pronoun tracking state
//! - [`sink`] - Where bound events and messages go
//! - [`parser`] - Main pipeline orchestration
//! - [`config`] - Parser configuration
//! - [`stdlib`] - Standard vocabulary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod binder;
pub mod classifier;
pub mod config;
pub mod error;
pub mod event;
pub mod grammar;
pub mod noun_phrase;
pub mod parser;
pub mod pronouns;
pub mod scope;
pub mod segmenter;
pub mod sentence;
pub mod sink;
pub mod stdlib;
pub mod syntax;
pub mod tokenizer;
pub mod vocabulary;
pub mod word;

// Re-export main types for convenience
pub use binder::{Binder, Bindings, BoundEvents};
pub use config::ParserConfig;
pub use error::{BindError, ParseError, TemplateError};
pub use event::{Event, ParserEvent, Slot, Target};
pub use noun_phrase::{INFINITY, Modifier, NounPhrase};
pub use parser::Parser;
pub use sink::{CollectingSink, EventSink};
pub use syntax::{ArgType, VerbTemplate};
pub use vocabulary::{Verb, Vocabulary};
pub use word::{Word, WordType, WordTypes};
