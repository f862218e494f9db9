//! World collaborator interface and in-memory atom store for wordhoard.
//!
//! This crate provides:
//! - [`World`] - The narrow read interface the parser and binder consume
//! - [`Traversal`] - The three container traversal policies
//! - [`AtomWorld`] - Immutable in-memory world with structural sharing

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod atom;
pub mod model;
pub mod world;

pub use atom::Atom;
pub use model::{Traversal, World};
pub use world::AtomWorld;
