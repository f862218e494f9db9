//! Atom records.

use std::sync::Arc;

use im::{HashMap, Vector};
use wordhoard_foundation::{AtomId, Value};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stored state of a single atom.
///
/// All collections are persistent, so cloning an atom (and the world that
/// holds it) is O(1).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Atom {
    /// Display name.
    pub name: Arc<str>,
    /// Parents in lookup order.
    pub parents: Vector<AtomId>,
    /// Properties defined directly on this atom.
    pub properties: HashMap<Arc<str>, Value>,
    /// Container this atom sits in.
    pub location: Option<AtomId>,
    /// Direct contents in insertion order.
    pub contents: Vector<AtomId>,
    /// Exits keyed by canonical direction.
    pub exits: HashMap<Arc<str>, AtomId>,
}

impl Atom {
    /// Creates an atom with the given name and parents.
    #[must_use]
    pub fn new(name: &str, parents: &[AtomId]) -> Self {
        Self {
            name: Arc::from(name),
            parents: parents.iter().copied().collect(),
            properties: HashMap::new(),
            location: None,
            contents: Vector::new(),
            exits: HashMap::new(),
        }
    }

    /// Returns a property defined directly on this atom.
    #[must_use]
    pub fn own_property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }
}
