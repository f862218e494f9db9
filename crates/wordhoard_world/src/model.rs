//! The world collaborator interface.
//!
//! The parser never owns world state. Everything it needs to know about
//! atoms, containment and properties goes through [`World`], so any
//! storage engine can sit behind it.

use wordhoard_foundation::{AtomId, Value};

/// Policy used when enumerating the contents of a container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Traversal {
    /// Direct contents, nothing filtered.
    Raw,
    /// Everything an observer inside the container can see.
    Visible,
    /// Everything that can be picked up from the container.
    Gettable,
}

/// Read access to the world model.
///
/// Implementations are expected to answer from a consistent snapshot; the
/// parser imposes no ordering of its own on these reads.
pub trait World {
    /// Returns true if the atom exists.
    fn exists(&self, atom: AtomId) -> bool;

    /// Returns the display name of an atom.
    fn name(&self, atom: AtomId) -> Option<&str>;

    /// Returns true if `atom` inherits from `ancestor`.
    ///
    /// Every atom is a descendant of itself.
    fn is_descendant_of(&self, atom: AtomId, ancestor: AtomId) -> bool;

    /// Returns the container an atom is located in.
    fn location(&self, atom: AtomId) -> Option<AtomId>;

    /// Returns the direct contents of a container.
    fn contents(&self, container: AtomId) -> Vec<AtomId>;

    /// Returns everything visible from inside a container.
    fn visible_contents(&self, container: AtomId) -> Vec<AtomId>;

    /// Returns everything that can be taken from a container.
    fn gettable_contents(&self, container: AtomId) -> Vec<AtomId>;

    /// Returns every atom in the world.
    fn all_atoms(&self) -> Vec<AtomId>;

    /// Reads a property, following inheritance.
    fn property(&self, atom: AtomId, name: &str) -> Option<Value>;

    /// Returns true if the property is defined on the atom or an ancestor.
    fn has_property(&self, atom: AtomId, name: &str) -> bool {
        self.property(atom, name).is_some()
    }

    /// Returns true if the atom is a closed container.
    fn is_closed(&self, atom: AtomId) -> bool;

    /// Looks up the destination of an exit leaving `room`.
    fn exit(&self, room: AtomId, direction: &str) -> Option<AtomId>;

    /// Enumerates a container under the given policy.
    fn contents_by(&self, container: AtomId, traversal: Traversal) -> Vec<AtomId> {
        match traversal {
            Traversal::Raw => self.contents(container),
            Traversal::Visible => self.visible_contents(container),
            Traversal::Gettable => self.gettable_contents(container),
        }
    }
}
