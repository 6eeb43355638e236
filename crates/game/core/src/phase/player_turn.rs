//! Decision collection for the player side of a round.

use std::collections::BTreeMap;

use crate::action::ActionDefinition;
use crate::error::{ErrorSeverity, GameError};
use crate::roster::Roster;
use crate::unit::{Ally, AllyId, UnitId};

/// Misuse of a [`PlayerTurnHelper`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlayerTurnError {
    #[error("ally {0:?} is not part of this battle")]
    UnknownAlly(AllyId),

    #[error("target {0} is not part of this battle")]
    UnknownTarget(UnitId),

    #[error("player turn already marked done")]
    AlreadyDone,
}

impl GameError for PlayerTurnError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            PlayerTurnError::UnknownAlly(_) => "PLAYER_TURN_UNKNOWN_ALLY",
            PlayerTurnError::UnknownTarget(_) => "PLAYER_TURN_UNKNOWN_TARGET",
            PlayerTurnError::AlreadyDone => "PLAYER_TURN_ALREADY_DONE",
        }
    }
}

/// The action an ally will take this round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllyChoice {
    pub action: ActionDefinition,
    pub target: Option<UnitId>,
}

/// Choices recorded during one player decision phase.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerDecisions {
    choices: BTreeMap<AllyId, AllyChoice>,
    done: bool,
}

impl PlayerDecisions {
    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn choice(&self, ally: AllyId) -> Option<&AllyChoice> {
        self.choices.get(&ally)
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    pub(crate) fn into_choices(self) -> impl Iterator<Item = (AllyId, AllyChoice)> {
        self.choices.into_iter()
    }
}

/// Handle given to the resolver to record the player's decisions.
///
/// `set_ally_action` may be called any number of times per ally; the last call
/// wins. `done` commits the turn and may be called once. Whether every ally
/// has decided is the caller's policy; [`all_set`](Self::all_set) helps check.
pub struct PlayerTurnHelper<'a> {
    roster: &'a Roster,
    decisions: &'a mut PlayerDecisions,
}

impl<'a> PlayerTurnHelper<'a> {
    pub(crate) fn new(roster: &'a Roster, decisions: &'a mut PlayerDecisions) -> Self {
        Self { roster, decisions }
    }

    pub fn set_ally_action(
        &mut self,
        ally: AllyId,
        action: ActionDefinition,
        target: Option<UnitId>,
    ) -> Result<(), PlayerTurnError> {
        if self.decisions.done {
            return Err(PlayerTurnError::AlreadyDone);
        }
        if self.roster.ally(ally).is_none() {
            return Err(PlayerTurnError::UnknownAlly(ally));
        }
        if let Some(target) = target.filter(|&target| !self.roster.contains(target)) {
            return Err(PlayerTurnError::UnknownTarget(target));
        }

        self.decisions
            .choices
            .insert(ally, AllyChoice { action, target });
        Ok(())
    }

    /// Marks the player's decisions as final.
    pub fn done(&mut self) -> Result<(), PlayerTurnError> {
        if self.decisions.done {
            return Err(PlayerTurnError::AlreadyDone);
        }
        self.decisions.done = true;
        Ok(())
    }

    pub fn is_done(&self) -> bool {
        self.decisions.done
    }

    /// True when every standing ally has a recorded choice.
    pub fn all_set(&self) -> bool {
        self.roster
            .standing_allies()
            .all(|ally| self.decisions.choices.contains_key(&ally))
    }

    pub fn choice(&self, ally: AllyId) -> Option<&AllyChoice> {
        self.decisions.choice(ally)
    }

    pub fn roster(&self) -> &'a Roster {
        self.roster
    }

    /// Standing allies that still have no recorded choice.
    pub fn undecided(&self) -> impl Iterator<Item = (AllyId, &'a Ally)> + '_ {
        let roster = self.roster;
        roster
            .standing_allies()
            .filter(|ally| !self.decisions.choices.contains_key(ally))
            .filter_map(move |ally| roster.ally(ally).map(|unit| (ally, unit)))
    }
}
