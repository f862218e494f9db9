//! Scope evaluation for noun resolution.
//!
//! Determines which atoms a noun phrase may match before any of its words
//! are considered, based on the slot's scope flags and where the actor is.

use std::fmt;

use wordhoard_foundation::AtomId;
use wordhoard_world::{Traversal, World};

use crate::syntax::ArgType;

/// Where a search looked, for messages.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Place {
    /// The actor's inventory.
    Inventory,
    /// The actor's room.
    Room,
    /// Room and inventory together.
    Nearby,
    /// Everywhere.
    World,
    /// Inside a named container.
    Inside(String),
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inventory => f.write_str("inventory"),
            Self::Room => f.write_str("room"),
            Self::Nearby => f.write_str("nearby"),
            Self::World => f.write_str("world"),
            Self::Inside(name) => write!(f, "inside {name}"),
        }
    }
}

/// The area a slot searches before any container is named.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    /// The actor's inventory.
    Inventory,
    /// The actor's room.
    Room,
    /// Room and inventory together.
    Nearby,
    /// Everywhere.
    World,
}

impl From<Region> for Place {
    fn from(region: Region) -> Self {
        match region {
            Region::Inventory => Self::Inventory,
            Region::Room => Self::Room,
            Region::Nearby => Self::Nearby,
            Region::World => Self::World,
        }
    }
}

/// Starting candidates for a phrase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Seed {
    /// Candidate atoms in world order.
    pub atoms: Vec<AtomId>,
    /// Where they came from.
    pub place: Place,
}

/// Evaluates seed sets.
pub struct ScopeEvaluator;

impl ScopeEvaluator {
    /// Returns the region a slot's scope flags search.
    ///
    /// With no search flag set, both room and inventory are searched.
    #[must_use]
    pub fn region(arg_type: ArgType) -> Region {
        let container = arg_type.contains(ArgType::SEARCH_CONTAINER);
        let inventory = arg_type.contains(ArgType::SEARCH_INVENTORY);
        if arg_type.contains(ArgType::SEARCH_WORLD) {
            Region::World
        } else if container && !inventory {
            Region::Room
        } else if inventory && !container {
            Region::Inventory
        } else {
            Region::Nearby
        }
    }

    /// Returns the place a slot's scope flags search, for messages.
    #[must_use]
    pub fn place(arg_type: ArgType) -> Place {
        Self::region(arg_type).into()
    }

    /// Returns the traversal a slot's scope flags ask for.
    #[must_use]
    pub fn traversal(arg_type: ArgType) -> Traversal {
        if arg_type.contains(ArgType::LOOK_SEARCH) {
            Traversal::Visible
        } else if arg_type.contains(ArgType::ACQUIRE_SEARCH) {
            Traversal::Gettable
        } else {
            Traversal::Raw
        }
    }

    /// Returns how the last phrase of a containment chain reads a
    /// container: gettable contents for acquire slots, visible otherwise.
    #[must_use]
    pub fn contents_traversal(arg_type: ArgType) -> Traversal {
        match Self::traversal(arg_type) {
            Traversal::Gettable => Traversal::Gettable,
            Traversal::Visible | Traversal::Raw => Traversal::Visible,
        }
    }

    /// Computes the seed set for an actor and slot.
    ///
    /// Inventory always comes from the actor's direct contents. Room
    /// contents follow the slot's traversal and never include the actor.
    #[must_use]
    pub fn seed<W: World + ?Sized>(world: &W, actor: AtomId, arg_type: ArgType) -> Seed {
        let region = Self::region(arg_type);
        let traversal = Self::traversal(arg_type);
        let atoms = match region {
            Region::World => world.all_atoms(),
            Region::Inventory => world.contents(actor),
            Region::Room => Self::room(world, actor, traversal),
            Region::Nearby => {
                Self::union(Self::room(world, actor, traversal), world.contents(actor))
            }
        };
        Seed {
            atoms,
            place: region.into(),
        }
    }

    /// Computes the candidates for the containers a chain names.
    ///
    /// Searches the slot's region like [`seed`](Self::seed) but always by
    /// sight, so a container need not be gettable to be named.
    #[must_use]
    pub fn containers<W: World + ?Sized>(world: &W, actor: AtomId, arg_type: ArgType) -> Seed {
        let region = Self::region(arg_type);
        let atoms = match region {
            Region::World => world.all_atoms(),
            Region::Inventory => world.visible_contents(actor),
            Region::Room => Self::room(world, actor, Traversal::Visible),
            Region::Nearby => Self::union(
                Self::room(world, actor, Traversal::Visible),
                world.visible_contents(actor),
            ),
        };
        Seed {
            atoms,
            place: region.into(),
        }
    }

    fn union(mut atoms: Vec<AtomId>, more: Vec<AtomId>) -> Vec<AtomId> {
        for atom in more {
            if !atoms.contains(&atom) {
                atoms.push(atom);
            }
        }
        atoms
    }

    fn room<W: World + ?Sized>(world: &W, actor: AtomId, traversal: Traversal) -> Vec<AtomId> {
        world
            .location(actor)
            .map(|room| world.contents_by(room, traversal))
            .unwrap_or_default()
            .into_iter()
            .filter(|&atom| atom != actor)
            .collect()
    }
}
