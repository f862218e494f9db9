//! Wordhoard - command understanding for multi-user text worlds
//!
//! This crate re-exports all layers of the Wordhoard system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: wordhoard_runtime     REPL, CLI, demo world
//! Layer 2: wordhoard_parser      Tokenizer, grammar, templates, binder
//! Layer 1: wordhoard_world       Atoms, inheritance, containment, properties
//! Layer 0: wordhoard_foundation  Core types (Value, AtomId, Error)
//! ```

pub use wordhoard_foundation as foundation;
pub use wordhoard_parser as parser;
pub use wordhoard_runtime as runtime;
pub use wordhoard_world as world;
