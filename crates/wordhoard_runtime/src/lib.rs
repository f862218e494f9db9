//! REPL and CLI for the wordhoard command parser.
//!
//! This crate provides:
//! - [`Repl`] - Interactive read-eval-print loop over a demo world
//! - [`Session`] - The world, vocabulary and per-actor parser behind it
//! - [`LineEditor`] - Line editing, backed by rustyline

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod highlight;
pub mod repl;
pub mod session;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::{Repl, Reply};
pub use session::{Session, TranscriptSink};
