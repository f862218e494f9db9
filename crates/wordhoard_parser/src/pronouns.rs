//! Pronoun tracking state.
//!
//! One referent serves every pronoun word ("it", "them", "him", "her").
//! The binder never touches this directly: it takes the referent as input
//! and hands back the new one, and the parser stores it here.

use wordhoard_foundation::AtomId;

/// State for pronoun resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PronounState {
    referent: Option<AtomId>,
}

impl PronounState {
    /// Creates a new pronoun state with no referent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the current referent.
    #[must_use]
    pub fn get(&self) -> Option<AtomId> {
        self.referent
    }

    /// Replaces the referent. `None` leaves the state unchanged.
    pub fn update(&mut self, referent: Option<AtomId>) {
        if referent.is_some() {
            self.referent = referent;
        }
    }

    /// Sets the referent.
    pub fn set(&mut self, atom: AtomId) {
        self.referent = Some(atom);
    }

    /// Forgets the referent.
    pub fn clear(&mut self) {
        self.referent = None;
    }
}
