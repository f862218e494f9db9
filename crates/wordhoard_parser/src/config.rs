//! Parser configuration.

/// Default minimum property value for an adjective to apply.
pub const DEFAULT_ISNESS_THRESHOLD: i64 = 50;

/// Configuration for a [`Parser`](crate::Parser).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParserConfig {
    /// Minimum value an adjective's backing property must reach.
    pub isness_threshold: i64,

    /// Privilege assumed for actors without a privilege property.
    pub default_privilege: i32,

    /// Actor property holding the actor's privilege level.
    pub privilege_property: String,

    /// Retry plural forms ("swords" → "sword") after a number.
    pub plural_repair: bool,

    /// Maximum sentences taken from one input line.
    pub max_sentences: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            isness_threshold: DEFAULT_ISNESS_THRESHOLD,
            default_privilege: 0,
            privilege_property: "privilege".to_string(),
            plural_repair: true,
            max_sentences: 16,
        }
    }
}

impl ParserConfig {
    /// Builder method to set the isness threshold.
    #[must_use]
    pub fn with_isness_threshold(mut self, threshold: i64) -> Self {
        self.isness_threshold = threshold;
        self
    }

    /// Builder method to set the default privilege.
    #[must_use]
    pub fn with_default_privilege(mut self, privilege: i32) -> Self {
        self.default_privilege = privilege;
        self
    }

    /// Builder method to set the privilege property name.
    #[must_use]
    pub fn with_privilege_property(mut self, name: impl Into<String>) -> Self {
        self.privilege_property = name.into();
        self
    }

    /// Builder method to enable/disable plural repair.
    #[must_use]
    pub fn with_plural_repair(mut self, enabled: bool) -> Self {
        self.plural_repair = enabled;
        self
    }

    /// Builder method to set the sentence limit.
    #[must_use]
    pub fn with_max_sentences(mut self, max: usize) -> Self {
        self.max_sentences = max;
        self
    }
}
