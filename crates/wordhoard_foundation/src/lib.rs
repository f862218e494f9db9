//! Core types, values, and errors for wordhoard.
//!
//! This crate provides:
//! - [`AtomId`] - Identifiers for world objects (rooms, items, actors, classes)
//! - [`Value`] - Property values stored on atoms
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod atom;
pub mod error;
pub mod value;

pub use atom::AtomId;
pub use error::{Error, ErrorContext, ErrorKind};
pub use value::Value;

/// Result type used throughout the lower layers.
pub type Result<T> = std::result::Result<T, Error>;
