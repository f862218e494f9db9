//! Session state for the REPL.
//!
//! A session holds a world, the vocabulary describing it, and the parser
//! of the one actor typing commands. Bound events are not executed: verb
//! handlers belong to the game, so the session prints each event instead.

use std::sync::Arc;

use wordhoard_foundation::{AtomId, Error, ErrorKind, Result};
use wordhoard_parser::{Event, EventSink, Parser, ParserConfig, Target, Vocabulary, stdlib};
use tracing::debug;
use wordhoard_world::{AtomWorld, World};

/// Renders events and messages as transcript lines.
pub struct TranscriptSink<'w, W: World + ?Sized> {
    world: &'w W,
    lines: Vec<String>,
}

impl<'w, W: World + ?Sized> TranscriptSink<'w, W> {
    /// Creates an empty transcript naming atoms from `world`.
    #[must_use]
    pub fn new(world: &'w W) -> Self {
        Self {
            world,
            lines: Vec::new(),
        }
    }

    /// Returns the lines written so far.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consumes the sink, returning its lines.
    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Renders an event as `action(current, arg1, arg2)`.
    #[must_use]
    pub fn render(&self, event: &Event) -> String {
        format!(
            "{}({}, {}, {})",
            event.action,
            self.target(&event.current),
            self.target(&event.arg1),
            self.target(&event.arg2)
        )
    }

    fn target(&self, target: &Target) -> String {
        match target {
            Target::Atom(atom) => match self.world.name(*atom) {
                Some(name) => format!("{name}{atom}"),
                None => atom.to_string(),
            },
            other => other.to_string(),
        }
    }
}

impl<W: World + ?Sized> EventSink for TranscriptSink<'_, W> {
    fn dispatch(&mut self, event: Event) {
        let line = self.render(&event);
        self.lines.push(line);
    }

    fn report(&mut self, _actor: AtomId, message: &str) {
        self.lines.push(message.to_string());
    }

    fn administrative(&mut self, _actor: AtomId, line: &str) {
        self.lines
            .push(format!("Administrative commands are not available: {line}"));
    }
}

/// Session state for an interactive REPL session.
pub struct Session {
    world: AtomWorld,
    actor: AtomId,
    parser: Parser,
}

impl Session {
    /// Creates a session for an actor in a world.
    #[must_use]
    pub fn new(world: AtomWorld, vocabulary: Arc<Vocabulary>, actor: AtomId) -> Self {
        Self {
            world,
            actor,
            parser: Parser::new(vocabulary),
        }
    }

    /// Builder method to set the parser configuration.
    #[must_use]
    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.parser = self.parser.with_config(config);
        self
    }

    /// Creates the demo world: a hall with some loot, a cupboard holding
    /// a box holding a book, a closed chest, a guard, and a garden to the
    /// north. Of the containers only the box can be carried.
    ///
    /// # Errors
    ///
    /// Returns an error if the world or vocabulary cannot be built.
    pub fn demo() -> Result<Self> {
        let world = AtomWorld::new();
        let thing = world.thing();
        let portable = world.portable();

        let (world, hall) = world.spawn("hall", &[thing])?;
        let (world, garden) = world.spawn("garden", &[thing])?;
        let world = world.add_exit(hall, "north", garden)?;
        let world = world.add_exit(garden, "south", hall)?;
        let (world, player) = world.spawn_in("player", &[thing], hall)?;

        let (world, sword) = world.spawn("sword", &[portable])?;
        let (world, shield) = world.spawn("shield", &[portable])?;
        let (world, coin) = world.spawn("coin", &[portable])?;
        let (world, ball) = world.spawn("ball", &[portable])?;
        let (world, book) = world.spawn("book", &[portable])?;
        let (world, container) = world.spawn("box", &[portable])?;
        let (world, lamp) = world.spawn("lamp", &[portable])?;
        let (world, cupboard) = world.spawn("cupboard", &[thing])?;
        let (world, chest) = world.spawn("chest", &[thing])?;
        let (world, guard) = world.spawn("guard", &[thing])?;

        let (world, _) = world.spawn_in("sword", &[sword], hall)?;
        let (world, _) = world.spawn_in("shield", &[shield], hall)?;
        let (world, red_ball) = world.spawn_in("ball", &[ball], hall)?;
        let (world, blue_ball) = world.spawn_in("ball", &[ball], hall)?;
        let world = world.set_property(red_ball, "redness", 90)?;
        let world = world.set_property(blue_ball, "blueness", 90)?;
        let (mut world, the_cupboard) = world.spawn_in("cupboard", &[cupboard], hall)?;
        for _ in 0..3 {
            world = world.spawn_in("coin", &[coin], hall)?.0;
        }
        let (world, the_box) = world.spawn_in("box", &[container], the_cupboard)?;
        let (world, _) = world.spawn_in("book", &[book], the_box)?;
        let (world, the_chest) = world.spawn_in("chest", &[chest], hall)?;
        let world = world.set_property(the_chest, "closed", true)?;
        let (world, _) = world.spawn_in("coin", &[coin], the_chest)?;
        let (world, _) = world.spawn_in("guard", &[guard], hall)?;
        let (world, _) = world.spawn_in("lamp", &[lamp], player)?;
        let (world, _) = world.spawn_in("book", &[book], garden)?;

        let mut vocabulary = stdlib::standard_vocabulary(portable)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?;
        for (word, atom) in [
            ("sword", sword),
            ("shield", shield),
            ("coin", coin),
            ("ball", ball),
            ("book", book),
            ("box", container),
            ("lamp", lamp),
            ("cupboard", cupboard),
            ("chest", chest),
            ("guard", guard),
        ] {
            vocabulary.register_noun(word, atom);
        }
        vocabulary.register_adjective("red", "redness");
        vocabulary.register_adjective("blue", "blueness");

        Ok(Self::new(world, Arc::new(vocabulary), player))
    }

    /// Returns the world.
    #[must_use]
    pub const fn world(&self) -> &AtomWorld {
        &self.world
    }

    /// Replaces the world, keeping the parser and its pronoun.
    pub fn set_world(&mut self, world: AtomWorld) {
        self.world = world;
    }

    /// Returns the actor typing commands.
    #[must_use]
    pub const fn actor(&self) -> AtomId {
        self.actor
    }

    /// Returns the actor's parser.
    #[must_use]
    pub const fn parser(&self) -> &Parser {
        &self.parser
    }

    /// Returns the vocabulary.
    #[must_use]
    pub fn vocabulary(&self) -> &Arc<Vocabulary> {
        self.parser.vocabulary()
    }

    /// Parses a command line and returns the transcript it produced.
    pub fn execute(&mut self, line: &str) -> Vec<String> {
        let mut sink = TranscriptSink::new(&self.world);
        let dispatched = self.parser.parse(line, self.actor, &self.world, &mut sink);
        debug!(actor = %self.actor, dispatched, "executed line");
        sink.into_lines()
    }

    /// Describes the actor's room and what is visible in it.
    #[must_use]
    pub fn look(&self) -> Vec<String> {
        let Some(room) = self.world.location(self.actor) else {
            return vec!["You are nowhere.".to_string()];
        };
        let seen: Vec<String> = self
            .world
            .visible_contents(room)
            .into_iter()
            .filter(|&atom| atom != self.actor && self.world.location(atom) != Some(self.actor))
            .map(|atom| self.label(atom))
            .collect();

        let mut lines = vec![format!("You are in the {}.", self.label_name(room))];
        if seen.is_empty() {
            lines.push("You see nothing.".to_string());
        } else {
            lines.push(format!("You see: {}.", seen.join(", ")));
        }
        lines
    }

    /// Lists what the actor carries.
    #[must_use]
    pub fn inventory(&self) -> Vec<String> {
        let carried: Vec<String> = self
            .world
            .contents(self.actor)
            .into_iter()
            .map(|atom| self.label(atom))
            .collect();
        if carried.is_empty() {
            vec!["You are empty-handed.".to_string()]
        } else {
            vec![format!("You are carrying: {}.", carried.join(", "))]
        }
    }

    fn label(&self, atom: AtomId) -> String {
        format!("{}{atom}", self.label_name(atom))
    }

    fn label_name(&self, atom: AtomId) -> &str {
        self.world.name(atom).unwrap_or("something")
    }
}
