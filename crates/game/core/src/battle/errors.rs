//! Error types for the battle lifecycle.

use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};
use crate::phase::{PhaseKind, PlayerTurnError};
use crate::roster::RosterError;

/// Calls made out of the order the battle and its phases allow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LifecycleError {
    #[error("battle already started")]
    BattleAlreadyStarted,

    #[error("battle has not started")]
    BattleNotStarted,

    #[error("battle already finished")]
    BattleAlreadyFinished,

    #[error("battle is finished and cannot be updated")]
    BattleFinished,

    #[error("phase {0} already started")]
    PhaseAlreadyStarted(PhaseKind),

    #[error("phase {0} has not started")]
    PhaseNotStarted(PhaseKind),

    #[error("phase {0} already finished")]
    PhaseAlreadyFinished(PhaseKind),
}

impl GameError for LifecycleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            LifecycleError::BattleAlreadyStarted => "LIFECYCLE_BATTLE_ALREADY_STARTED",
            LifecycleError::BattleNotStarted => "LIFECYCLE_BATTLE_NOT_STARTED",
            LifecycleError::BattleAlreadyFinished => "LIFECYCLE_BATTLE_ALREADY_FINISHED",
            LifecycleError::BattleFinished => "LIFECYCLE_BATTLE_FINISHED",
            LifecycleError::PhaseAlreadyStarted(_) => "LIFECYCLE_PHASE_ALREADY_STARTED",
            LifecycleError::PhaseNotStarted(_) => "LIFECYCLE_PHASE_NOT_STARTED",
            LifecycleError::PhaseAlreadyFinished(_) => "LIFECYCLE_PHASE_ALREADY_FINISHED",
        }
    }
}

/// Errors surfaced by [`super::Battle`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BattleError {
    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),

    #[error(transparent)]
    PlayerTurn(#[from] PlayerTurnError),

    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl GameError for BattleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            BattleError::Lifecycle(error) => error.severity(),
            BattleError::PlayerTurn(error) => error.severity(),
            BattleError::Roster(error) => error.severity(),
            BattleError::Oracle(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            BattleError::Lifecycle(error) => error.error_code(),
            BattleError::PlayerTurn(error) => error.error_code(),
            BattleError::Roster(error) => error.error_code(),
            BattleError::Oracle(error) => error.error_code(),
        }
    }
}
