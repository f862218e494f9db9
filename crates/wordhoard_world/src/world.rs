//! In-memory world state with immutable snapshots.
//!
//! `AtomWorld` uses persistent data structures for O(1) cloning and
//! structural sharing, so a clone taken before a parse is a consistent
//! snapshot no matter what happens to the original afterwards.

use std::collections::HashSet;
use std::sync::Arc;

use im::{HashMap, Vector};
use wordhoard_foundation::{AtomId, Error, ErrorContext, Result, Value};

use crate::atom::Atom;
use crate::model::World;

/// Property marking an atom as invisible to observers.
pub const HIDDEN: &str = "hidden";

/// Property marking a container as closed.
pub const CLOSED: &str = "closed";

/// Immutable world of atoms.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AtomWorld {
    atoms: HashMap<AtomId, Atom>,
    /// Creation order, used for deterministic enumeration.
    order: Vector<AtomId>,
    next_id: u64,
    thing: AtomId,
    portable: AtomId,
}

impl AtomWorld {
    /// Creates a world holding the root classes `thing` and `portable`.
    #[must_use]
    pub fn new() -> Self {
        let thing = AtomId::new(0);
        let portable = AtomId::new(1);

        let mut atoms = HashMap::new();
        atoms.insert(thing, Atom::new("thing", &[]));
        atoms.insert(portable, Atom::new("portable", &[thing]));

        let mut order = Vector::new();
        order.push_back(thing);
        order.push_back(portable);

        Self {
            atoms,
            order,
            next_id: 2,
            thing,
            portable,
        }
    }

    /// Returns the root class every atom may inherit from.
    #[must_use]
    pub fn thing(&self) -> AtomId {
        self.thing
    }

    /// Returns the class whose descendants can be picked up.
    #[must_use]
    pub fn portable(&self) -> AtomId {
        self.portable
    }

    /// Returns the number of atoms, classes included.
    #[must_use]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Returns the stored record of an atom.
    #[must_use]
    pub fn atom(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.get(&id)
    }

    fn require(&self, id: AtomId) -> Result<&Atom> {
        self.atoms.get(&id).ok_or_else(|| Error::atom_not_found(id))
    }

    // --- Creation ---

    /// Creates a new atom inheriting from `parents`.
    ///
    /// Returns a new world and the id of the created atom.
    pub fn spawn(&self, name: &str, parents: &[AtomId]) -> Result<(AtomWorld, AtomId)> {
        for parent in parents {
            self.require(*parent).map_err(|e| {
                e.with_context(ErrorContext::new().with_operation("spawn"))
            })?;
        }

        let id = AtomId::new(self.next_id);
        let mut atoms = self.atoms.clone();
        atoms.insert(id, Atom::new(name, parents));
        let mut order = self.order.clone();
        order.push_back(id);

        Ok((
            AtomWorld {
                atoms,
                order,
                next_id: self.next_id + 1,
                ..self.clone()
            },
            id,
        ))
    }

    /// Creates a new atom and places it inside `container`.
    pub fn spawn_in(
        &self,
        name: &str,
        parents: &[AtomId],
        container: AtomId,
    ) -> Result<(AtomWorld, AtomId)> {
        let (world, id) = self.spawn(name, parents)?;
        let world = world.move_to(id, container)?;
        Ok((world, id))
    }

    // --- Mutation ---

    /// Sets a property directly on an atom.
    pub fn set_property(&self, atom: AtomId, name: &str, value: impl Into<Value>) -> Result<AtomWorld> {
        let mut record = self.require(atom)?.clone();
        record.properties.insert(Arc::from(name), value.into());
        Ok(self.with_atom(atom, record))
    }

    /// Removes a property defined directly on an atom.
    pub fn clear_property(&self, atom: AtomId, name: &str) -> Result<AtomWorld> {
        let mut record = self.require(atom)?.clone();
        record.properties.remove(name);
        Ok(self.with_atom(atom, record))
    }

    /// Appends a parent to an atom's inheritance list.
    pub fn add_parent(&self, atom: AtomId, parent: AtomId) -> Result<AtomWorld> {
        self.require(parent)?;
        if self.is_descendant_of(parent, atom) {
            return Err(Error::inheritance_cycle(atom, parent));
        }
        let mut record = self.require(atom)?.clone();
        if !record.parents.contains(&parent) {
            record.parents.push_back(parent);
        }
        Ok(self.with_atom(atom, record))
    }

    /// Moves an atom into a container, removing it from its old location.
    pub fn move_to(&self, atom: AtomId, container: AtomId) -> Result<AtomWorld> {
        self.require(container)?;
        let mut record = self.require(atom)?.clone();

        // The container must not sit (transitively) inside the atom.
        let mut cursor = Some(container);
        while let Some(c) = cursor {
            if c == atom {
                return Err(Error::containment_cycle(atom, container).with_context(
                    ErrorContext::new()
                        .with_operation("move_to")
                        .with_atom(atom)
                        .with_atom(container),
                ));
            }
            cursor = self.atoms.get(&c).and_then(|a| a.location);
        }

        let mut world = self.clone();
        if let Some(old) = record.location {
            let mut old_record = world.require(old)?.clone();
            old_record.contents.retain(|a| *a != atom);
            world = world.with_atom(old, old_record);
        }

        let mut target = world.require(container)?.clone();
        target.contents.push_back(atom);
        world = world.with_atom(container, target);

        record.location = Some(container);
        Ok(world.with_atom(atom, record))
    }

    /// Adds (or replaces) an exit leaving `room`.
    pub fn add_exit(&self, room: AtomId, direction: &str, destination: AtomId) -> Result<AtomWorld> {
        self.require(destination)?;
        let mut record = self.require(room)?.clone();
        record.exits.insert(Arc::from(direction), destination);
        Ok(self.with_atom(room, record))
    }

    fn with_atom(&self, id: AtomId, record: Atom) -> AtomWorld {
        let mut atoms = self.atoms.clone();
        atoms.insert(id, record);
        AtomWorld {
            atoms,
            ..self.clone()
        }
    }

    fn is_hidden(&self, atom: AtomId) -> bool {
        self.property(atom, HIDDEN).is_some_and(|v| v.is_truthy())
    }

    fn collect_visible(&self, container: AtomId, out: &mut Vec<AtomId>, seen: &mut HashSet<AtomId>) {
        let Some(record) = self.atoms.get(&container) else {
            return;
        };
        for &child in &record.contents {
            if self.is_hidden(child) || !seen.insert(child) {
                continue;
            }
            out.push(child);
            if !self.is_closed(child) {
                self.collect_visible(child, out, seen);
            }
        }
    }
}

impl Default for AtomWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl World for AtomWorld {
    fn exists(&self, atom: AtomId) -> bool {
        self.atoms.contains_key(&atom)
    }

    fn name(&self, atom: AtomId) -> Option<&str> {
        self.atoms.get(&atom).map(|a| &*a.name)
    }

    fn is_descendant_of(&self, atom: AtomId, ancestor: AtomId) -> bool {
        let mut stack = vec![atom];
        let mut seen = HashSet::new();
        while let Some(current) = stack.pop() {
            if current == ancestor {
                return true;
            }
            if !seen.insert(current) {
                continue;
            }
            if let Some(record) = self.atoms.get(&current) {
                stack.extend(record.parents.iter().copied());
            }
        }
        false
    }

    fn location(&self, atom: AtomId) -> Option<AtomId> {
        self.atoms.get(&atom).and_then(|a| a.location)
    }

    fn contents(&self, container: AtomId) -> Vec<AtomId> {
        self.atoms
            .get(&container)
            .map(|a| a.contents.iter().copied().collect())
            .unwrap_or_default()
    }

    fn visible_contents(&self, container: AtomId) -> Vec<AtomId> {
        let mut out = Vec::new();
        let mut seen = HashSet::new();
        self.collect_visible(container, &mut out, &mut seen);
        out
    }

    fn gettable_contents(&self, container: AtomId) -> Vec<AtomId> {
        self.contents(container)
            .into_iter()
            .filter(|&a| !self.is_hidden(a) && self.is_descendant_of(a, self.portable))
            .collect()
    }

    fn all_atoms(&self) -> Vec<AtomId> {
        self.order.iter().copied().collect()
    }

    fn property(&self, atom: AtomId, name: &str) -> Option<Value> {
        // Depth-first, parents in declaration order.
        let mut stack = vec![atom];
        let mut seen = HashSet::new();
        while let Some(current) = stack.pop() {
            if !seen.insert(current) {
                continue;
            }
            let record = self.atoms.get(&current)?;
            if let Some(value) = record.own_property(name) {
                return Some(value.clone());
            }
            stack.extend(record.parents.iter().rev().copied());
        }
        None
    }

    fn is_closed(&self, atom: AtomId) -> bool {
        self.property(atom, CLOSED).is_some_and(|v| v.is_truthy())
    }

    fn exit(&self, room: AtomId, direction: &str) -> Option<AtomId> {
        self.atoms.get(&room)?.exits.get(direction).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordhoard_foundation::ErrorKind;

    fn room_with_box() -> (AtomWorld, AtomId, AtomId, AtomId) {
        let world = AtomWorld::new();
        let thing = world.thing();
        let portable = world.portable();
        let (world, room) = world.spawn("hall", &[thing]).unwrap();
        let (world, bx) = world.spawn_in("box", &[thing], room).unwrap();
        let (world, coin) = world.spawn_in("coin", &[portable], bx).unwrap();
        (world, room, bx, coin)
    }

    #[test]
    fn new_world_has_root_classes() {
        let world = AtomWorld::new();
        assert_eq!(world.atom_count(), 2);
        assert_eq!(world.name(world.thing()), Some("thing"));
        assert!(world.is_descendant_of(world.portable(), world.thing()));
        assert!(!world.is_descendant_of(world.thing(), world.portable()));
    }

    #[test]
    fn descendant_is_reflexive() {
        let world = AtomWorld::new();
        assert!(world.is_descendant_of(world.thing(), world.thing()));
    }

    #[test]
    fn spawn_with_unknown_parent_fails() {
        let world = AtomWorld::new();
        let err = world.spawn("ghost", &[AtomId::new(99)]).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::AtomNotFound(_)));
    }

    #[test]
    fn snapshots_are_independent() {
        let (world, room, _, coin) = room_with_box();
        let before = world.clone();
        let after = world.move_to(coin, room).unwrap();
        assert_ne!(before.location(coin), after.location(coin));
        assert_eq!(after.location(coin), Some(room));
        assert_eq!(after.contents(room).last(), Some(&coin));
        assert!(!before.contents(room).contains(&coin));
    }

    #[test]
    fn move_rejects_cycles() {
        let (world, _, bx, coin) = room_with_box();
        let err = world.move_to(bx, coin).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::ContainmentCycle { .. }));
        assert!(world.move_to(bx, bx).is_err());
    }

    #[test]
    fn add_parent_rejects_cycles() {
        let world = AtomWorld::new();
        let err = world.add_parent(world.thing(), world.portable()).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InheritanceCycle { .. }));
    }

    #[test]
    fn visible_descends_into_open_containers() {
        let (world, room, bx, coin) = room_with_box();
        assert_eq!(world.visible_contents(room), vec![bx, coin]);

        let world = world.set_property(bx, CLOSED, true).unwrap();
        assert_eq!(world.visible_contents(room), vec![bx]);
        assert!(world.is_closed(bx));
    }

    #[test]
    fn hidden_atoms_are_not_visible() {
        let (world, room, bx, _) = room_with_box();
        let world = world.set_property(bx, HIDDEN, true).unwrap();
        assert!(world.visible_contents(room).is_empty());
        assert_eq!(world.contents(room), vec![bx]);
    }

    #[test]
    fn gettable_is_portable_direct_contents() {
        let (world, room, bx, coin) = room_with_box();
        assert!(world.gettable_contents(room).is_empty());
        assert_eq!(world.gettable_contents(bx), vec![coin]);
    }

    #[test]
    fn properties_are_inherited_depth_first() {
        let world = AtomWorld::new();
        let thing = world.thing();
        let world = world.set_property(thing, "weight", 10).unwrap();
        let (world, heavy) = world.spawn("heavy", &[thing]).unwrap();
        let world = world.set_property(heavy, "weight", 90).unwrap();
        let (world, anvil) = world.spawn("anvil", &[heavy, thing]).unwrap();
        let (world, feather) = world.spawn("feather", &[thing]).unwrap();

        assert_eq!(world.property(anvil, "weight"), Some(Value::Int(90)));
        assert_eq!(world.property(feather, "weight"), Some(Value::Int(10)));
        assert!(!world.has_property(feather, "colour"));

        let world = world.clear_property(heavy, "weight").unwrap();
        assert_eq!(world.property(anvil, "weight"), Some(Value::Int(10)));
    }

    #[test]
    fn exits() {
        let world = AtomWorld::new();
        let thing = world.thing();
        let (world, hall) = world.spawn("hall", &[thing]).unwrap();
        let (world, yard) = world.spawn("yard", &[thing]).unwrap();
        let world = world.add_exit(hall, "north", yard).unwrap();
        assert_eq!(world.exit(hall, "north"), Some(yard));
        assert_eq!(world.exit(hall, "south"), None);
        assert_eq!(world.exit(yard, "north"), None);
    }
}
