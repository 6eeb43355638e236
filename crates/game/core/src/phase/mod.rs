//! Stages of a battle round and the lifecycle guard around them.
//!
//! A round runs `EnemyDecision → ActionExecution → PlayerDecision →
//! ActionExecution → CleanUp` and loops back to `EnemyDecision` until the
//! battle is over. `BattleStart` only runs once.
//!
//! Every phase goes through `not started → started → finished`, each step
//! exactly once. [`BattlePhase`] tracks those flags; the work done in each
//! phase lives in [`crate::battle`].
mod player_turn;

pub use player_turn::{AllyChoice, PlayerDecisions, PlayerTurnError, PlayerTurnHelper};

use crate::battle::LifecycleError;
use crate::outcome::BattleOutcome;

/// Where an `ActionExecution` phase hands control once the table is drained.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NextPhase {
    PlayerDecision,
    CleanUp,
}

impl NextPhase {
    pub fn into_phase(self) -> Phase {
        match self {
            NextPhase::PlayerDecision => Phase::PlayerDecision(PlayerDecisions::default()),
            NextPhase::CleanUp => Phase::CleanUp,
        }
    }
}

/// One stage of a battle round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    BattleStart,
    EnemyDecision,
    ActionExecution { next: NextPhase },
    PlayerDecision(PlayerDecisions),
    CleanUp,
}

impl Phase {
    pub fn kind(&self) -> PhaseKind {
        match self {
            Phase::BattleStart => PhaseKind::BattleStart,
            Phase::EnemyDecision => PhaseKind::EnemyDecision,
            Phase::ActionExecution { .. } => PhaseKind::ActionExecution,
            Phase::PlayerDecision(_) => PhaseKind::PlayerDecision,
            Phase::CleanUp => PhaseKind::CleanUp,
        }
    }

    /// Whether starting this phase draws from the [`RngOracle`](crate::RngOracle).
    pub fn requires_rng(&self) -> bool {
        matches!(self, Phase::EnemyDecision)
    }
}

/// Fieldless tag of a [`Phase`], for logging and assertions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum PhaseKind {
    BattleStart,
    EnemyDecision,
    ActionExecution,
    PlayerDecision,
    CleanUp,
}

/// What the battle should do after a phase hook ran.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PhaseStep {
    /// Keep the current phase; it will be updated next tick.
    Stay,
    /// Finish the current phase and install this one, not yet started.
    Advance(Phase),
    /// End the battle with this outcome.
    Finish(BattleOutcome),
}

/// A phase together with its lifecycle flags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BattlePhase {
    phase: Phase,
    started: bool,
    finished: bool,
}

impl BattlePhase {
    pub fn new(phase: Phase) -> Self {
        Self {
            phase,
            started: false,
            finished: false,
        }
    }

    pub fn kind(&self) -> PhaseKind {
        self.phase.kind()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub(crate) fn phase_mut(&mut self) -> &mut Phase {
        &mut self.phase
    }

    pub fn has_started(&self) -> bool {
        self.started
    }

    pub fn has_finished(&self) -> bool {
        self.finished
    }

    /// Marks the phase as started.
    ///
    /// # Errors
    ///
    /// `PhaseAlreadyStarted` on a second call, `PhaseAlreadyFinished` once
    /// the phase is over.
    pub fn start(&mut self) -> Result<(), LifecycleError> {
        if self.finished {
            return Err(LifecycleError::PhaseAlreadyFinished(self.kind()));
        }
        if self.started {
            return Err(LifecycleError::PhaseAlreadyStarted(self.kind()));
        }
        self.started = true;
        Ok(())
    }

    /// Checks that the phase may receive a tick.
    pub fn update(&self) -> Result<(), LifecycleError> {
        if self.finished {
            return Err(LifecycleError::PhaseAlreadyFinished(self.kind()));
        }
        if !self.started {
            return Err(LifecycleError::PhaseNotStarted(self.kind()));
        }
        Ok(())
    }

    /// Marks the phase as finished.
    pub fn finish(&mut self) -> Result<(), LifecycleError> {
        self.update()?;
        self.finished = true;
        Ok(())
    }
}
