//! Where bound events and player messages go.

use wordhoard_foundation::AtomId;

use crate::event::Event;

/// The external event queue.
///
/// The parser calls [`dispatch`](Self::dispatch) once per bound event,
/// [`report`](Self::report) once per failed sentence, and
/// [`administrative`](Self::administrative) for `!` lines.
pub trait EventSink {
    /// Accepts one bound event.
    fn dispatch(&mut self, event: Event);

    /// Shows a message to an actor.
    fn report(&mut self, actor: AtomId, message: &str);

    /// Accepts a raw administrative line (leading `!` included).
    fn administrative(&mut self, actor: AtomId, line: &str);
}

/// A sink that records everything it receives.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollectingSink {
    /// Dispatched events in order.
    pub events: Vec<Event>,
    /// Reported messages in order.
    pub messages: Vec<(AtomId, String)>,
    /// Administrative lines in order.
    pub admin: Vec<(AtomId, String)>,
}

impl CollectingSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Message texts, without actors.
    #[must_use]
    pub fn message_texts(&self) -> Vec<&str> {
        self.messages.iter().map(|(_, m)| m.as_str()).collect()
    }

    /// Actions of the dispatched events.
    #[must_use]
    pub fn actions(&self) -> Vec<&str> {
        self.events.iter().map(|e| &*e.action).collect()
    }

    /// Drops everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
        self.messages.clear();
        self.admin.clear();
    }
}

impl EventSink for CollectingSink {
    fn dispatch(&mut self, event: Event) {
        self.events.push(event);
    }

    fn report(&mut self, actor: AtomId, message: &str) {
        self.messages.push((actor, message.to_string()));
    }

    fn administrative(&mut self, actor: AtomId, line: &str) {
        self.admin.push((actor, line.to_string()));
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn dispatch(&mut self, event: Event) {
        (**self).dispatch(event);
    }

    fn report(&mut self, actor: AtomId, message: &str) {
        (**self).report(actor, message);
    }

    fn administrative(&mut self, actor: AtomId, line: &str) {
        (**self).administrative(actor, line);
    }
}
