//! Error types for the world layers.
//!
//! Only building or mutating a world can fail at this layer; parse and
//! bind failures live in the parser crate.

use std::fmt;

use thiserror::Error;

use crate::atom::AtomId;

/// The main error type for world operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// What went wrong.
    pub kind: ErrorKind,
    /// The operation and atoms involved, when known.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an atom not found error.
    #[must_use]
    pub fn atom_not_found(id: AtomId) -> Self {
        Self::new(ErrorKind::AtomNotFound(id))
    }

    /// Creates a containment cycle error.
    #[must_use]
    pub fn containment_cycle(atom: AtomId, container: AtomId) -> Self {
        Self::new(ErrorKind::ContainmentCycle { atom, container })
    }

    /// Creates an inheritance cycle error.
    #[must_use]
    pub fn inheritance_cycle(atom: AtomId, parent: AtomId) -> Self {
        Self::new(ErrorKind::InheritanceCycle { atom, parent })
    }
}

/// World error kinds.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Atom was not found in the world.
    #[error("atom not found: {0}")]
    AtomNotFound(AtomId),

    /// Moving the atom would place it inside itself.
    #[error("cannot move {atom} into {container}: containment cycle")]
    ContainmentCycle {
        /// The atom being moved.
        atom: AtomId,
        /// The requested container.
        container: AtomId,
    },

    /// Adding the parent would make the atom its own ancestor.
    #[error("cannot make {parent} a parent of {atom}: inheritance cycle")]
    InheritanceCycle {
        /// The atom gaining a parent.
        atom: AtomId,
        /// The requested parent.
        parent: AtomId,
    },

    /// Failure outside the world model (terminal, vocabulary setup).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Operation that failed.
    pub operation: Option<String>,
    /// Atoms involved, outermost first.
    pub atoms: Vec<AtomId>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the operation name.
    #[must_use]
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// Adds an atom to the context.
    #[must_use]
    pub fn with_atom(mut self, atom: AtomId) -> Self {
        self.atoms.push(atom);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(op) = &self.operation {
            write!(f, "in {op}")?;
        }
        for atom in &self.atoms {
            write!(f, " {atom}")?;
        }
        Ok(())
    }
}
