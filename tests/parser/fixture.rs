//! A small world shared by the parser tests.

use std::sync::Arc;

use wordhoard_foundation::AtomId;
use wordhoard_parser::{CollectingSink, Event, Parser, Vocabulary, stdlib};
use wordhoard_world::AtomWorld;

/// A hall with a player, a sword, a shield, five coins, a red ball, an
/// open box holding a book, a closed crate, an empty cupboard, an empty
/// chest, and a guard. Only the loot is portable.
pub struct Fixture {
    pub world: AtomWorld,
    pub hall: AtomId,
    pub actor: AtomId,
    pub sword: AtomId,
    pub shield: AtomId,
    pub coins: Vec<AtomId>,
    pub ball: AtomId,
    pub box_: AtomId,
    pub book: AtomId,
    pub crate_: AtomId,
    pub cupboard: AtomId,
    pub chest: AtomId,
    pub guard: AtomId,
    pub parser: Parser,
}

pub fn fixture() -> Fixture {
    let world = AtomWorld::new();
    let thing = world.thing();
    let portable = world.portable();

    let (world, hall) = world.spawn("hall", &[thing]).unwrap();
    let (world, actor) = world.spawn_in("player", &[thing], hall).unwrap();

    let (world, sword_class) = world.spawn("sword", &[portable]).unwrap();
    let (world, shield_class) = world.spawn("shield", &[portable]).unwrap();
    let (world, coin_class) = world.spawn("coin", &[portable]).unwrap();
    let (world, ball_class) = world.spawn("ball", &[portable]).unwrap();
    let (world, box_class) = world.spawn("box", &[thing]).unwrap();
    let (world, book_class) = world.spawn("book", &[portable]).unwrap();
    let (world, crate_class) = world.spawn("crate", &[thing]).unwrap();
    let (world, cupboard_class) = world.spawn("cupboard", &[thing]).unwrap();
    let (world, chest_class) = world.spawn("chest", &[thing]).unwrap();
    let (world, guard_class) = world.spawn("guard", &[thing]).unwrap();

    let (world, sword) = world.spawn_in("sword", &[sword_class], hall).unwrap();
    let (world, shield) = world.spawn_in("shield", &[shield_class], hall).unwrap();
    let mut world = world;
    let mut coins = Vec::new();
    for _ in 0..5 {
        let (next, coin) = world.spawn_in("coin", &[coin_class], hall).unwrap();
        world = next;
        coins.push(coin);
    }
    let (world, ball) = world.spawn_in("ball", &[ball_class], hall).unwrap();
    let world = world.set_property(ball, "redness", 50).unwrap();
    let (world, box_) = world.spawn_in("box", &[box_class], hall).unwrap();
    let (world, book) = world.spawn_in("book", &[book_class], box_).unwrap();
    let (world, crate_) = world.spawn_in("crate", &[crate_class], hall).unwrap();
    let world = world.set_property(crate_, "closed", true).unwrap();
    let (world, cupboard) = world.spawn_in("cupboard", &[cupboard_class], hall).unwrap();
    let (world, chest) = world.spawn_in("chest", &[chest_class], hall).unwrap();
    let (world, guard) = world.spawn_in("guard", &[guard_class], hall).unwrap();

    let mut vocabulary: Vocabulary = stdlib::standard_vocabulary(portable).unwrap();
    for (word, atom) in [
        ("sword", sword_class),
        ("shield", shield_class),
        ("coin", coin_class),
        ("ball", ball_class),
        ("box", box_class),
        ("book", book_class),
        ("crate", crate_class),
        ("cupboard", cupboard_class),
        ("chest", chest_class),
        ("guard", guard_class),
    ] {
        vocabulary.register_noun(word, atom);
    }
    vocabulary.register_adjective("red", "redness");

    Fixture {
        world,
        hall,
        actor,
        sword,
        shield,
        coins,
        ball,
        box_,
        book,
        crate_,
        cupboard,
        chest,
        guard,
        parser: Parser::new(Arc::new(vocabulary)),
    }
}

impl Fixture {
    /// Parses a line against the fixture world.
    pub fn run(&mut self, line: &str) -> CollectingSink {
        let mut sink = CollectingSink::new();
        self.parser.parse(line, self.actor, &self.world, &mut sink);
        sink
    }

    /// Moves atoms into the actor's hands.
    pub fn carry(&mut self, atoms: &[AtomId]) {
        self.stow(atoms, self.actor);
    }

    /// Moves atoms into a container.
    pub fn stow(&mut self, atoms: &[AtomId], container: AtomId) {
        for &atom in atoms {
            self.world = self.world.move_to(atom, container).unwrap();
        }
    }
}

/// The `current` atoms of a list of events.
pub fn currents(events: &[Event]) -> Vec<AtomId> {
    events.iter().filter_map(|e| e.current.as_atom()).collect()
}
