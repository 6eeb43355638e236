//! Battle outcome and the referees that decide it.
//!
//! A battle ends exactly once, through [`crate::Battle::finish`]. The phase
//! machine asks the referee supplied in the [`crate::BattleEnv`] at the end of
//! every round; a driver may also call `finish` directly between ticks.

use crate::battle::Battle;
use crate::config::BattleConfig;

/// How a battle ended, from the player's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum BattleOutcome {
    /// Every enemy is down.
    Victory,
    /// Every ally is down.
    Defeat,
    /// Neither side won (round limit, scripted end).
    Draw,
}

/// Terminal record of a finished battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleOverResult {
    pub outcome: BattleOutcome,
    /// Rounds completed before the battle ended.
    pub rounds: u32,
}

/// Oracle deciding whether a battle is over.
pub trait OutcomeOracle: Send + Sync {
    fn evaluate(&self, battle: &Battle) -> Option<BattleOutcome>;
}

/// Ends the battle when one side has no standing units.
///
/// Checks enemies first: if both sides fall in the same round the player wins.
#[derive(Clone, Copy, Debug, Default)]
pub struct Annihilation;

impl OutcomeOracle for Annihilation {
    fn evaluate(&self, battle: &Battle) -> Option<BattleOutcome> {
        let roster = battle.roster();
        if roster.standing_enemies().next().is_none() {
            Some(BattleOutcome::Victory)
        } else if roster.standing_allies().next().is_none() {
            Some(BattleOutcome::Defeat)
        } else {
            None
        }
    }
}

/// Declares a draw once a number of rounds has been completed.
#[derive(Clone, Copy, Debug)]
pub struct RoundLimit {
    pub limit: u32,
}

impl OutcomeOracle for RoundLimit {
    fn evaluate(&self, battle: &Battle) -> Option<BattleOutcome> {
        (battle.rounds_completed() >= self.limit).then_some(BattleOutcome::Draw)
    }
}

/// Annihilation, then an optional round limit.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardReferee {
    round_limit: Option<RoundLimit>,
}

impl StandardReferee {
    pub fn new(round_limit: Option<u32>) -> Self {
        Self {
            round_limit: round_limit.map(|limit| RoundLimit { limit }),
        }
    }

    pub fn from_config(config: &BattleConfig) -> Self {
        Self::new(config.round_limit)
    }
}

impl OutcomeOracle for StandardReferee {
    fn evaluate(&self, battle: &Battle) -> Option<BattleOutcome> {
        Annihilation
            .evaluate(battle)
            .or_else(|| self.round_limit.and_then(|limit| limit.evaluate(battle)))
    }
}
