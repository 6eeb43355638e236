//! Presentation cues queued by the resolver and played by the driver.

use std::collections::VecDeque;
use std::fmt;

use battle_core::{ActionId, BattleOutcome, UnitId};

/// One presentation step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cue {
    /// An enemy readies an action.
    Prepare { actor: UnitId, action: ActionId },
    /// A unit performs an action aimed at someone.
    Attack {
        actor: UnitId,
        action: ActionId,
        target: UnitId,
    },
    /// The target of the preceding attack reacts.
    Hit { target: UnitId },
    /// A unit performs an action without a target.
    Idle { actor: UnitId, action: ActionId },
    BattleOver { outcome: BattleOutcome, rounds: u32 },
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cue::Prepare { actor, action } => write!(f, "{actor} readies {action}"),
            Cue::Attack {
                actor,
                action,
                target,
            } => write!(f, "{actor} uses {action} on {target}"),
            Cue::Hit { target } => write!(f, "{target} is hit"),
            Cue::Idle { actor, action } => write!(f, "{actor} uses {action}"),
            Cue::BattleOver { outcome, rounds } => {
                write!(f, "battle over: {outcome} after {rounds} rounds")
            }
        }
    }
}

/// FIFO of cues waiting to be played.
#[derive(Clone, Debug, Default)]
pub struct CueQueue {
    cues: VecDeque<Cue>,
}

impl CueQueue {
    pub fn push(&mut self, cue: Cue) {
        self.cues.push_back(cue);
    }

    pub fn pop(&mut self) -> Option<Cue> {
        self.cues.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }
}
