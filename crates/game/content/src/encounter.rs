//! How a particular battle is set up.

use battle_core::Troop;

/// Everything needed to stage one battle besides the party.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BattleConditions {
    pub troop: Troop,
    /// Name of the stage the presentation layer should load.
    pub scenario: String,
    /// The troop caught the party off guard.
    pub surprise: bool,
    /// The party caught the troop off guard.
    pub preemptive: bool,
}

impl BattleConditions {
    pub fn new(troop: Troop, scenario: impl Into<String>) -> Self {
        Self {
            troop,
            scenario: scenario.into(),
            surprise: false,
            preemptive: false,
        }
    }

    #[must_use]
    pub fn with_surprise(mut self, surprise: bool) -> Self {
        self.surprise = surprise;
        self
    }

    #[must_use]
    pub fn with_preemptive(mut self, preemptive: bool) -> Self {
        self.preemptive = preemptive;
        self
    }
}
