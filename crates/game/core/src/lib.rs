//! Deterministic turn-based battle flow.
//!
//! `battle-core` drives one battle between the player's party and an enemy
//! troop through a fixed cycle of phases, asking enemies to sample weighted
//! actions, collecting the player's decisions and executing everything that
//! was prepared. It performs no I/O: randomness, targeting and the end-of-battle
//! rule come in through [`BattleEnv`], and every observable event goes out
//! through a [`BattleResolver`].
pub mod action;
pub mod battle;
pub mod config;
pub mod env;
pub mod error;
pub mod outcome;
pub mod phase;
pub mod prepared;
pub mod resolver;
pub mod roster;
pub mod unit;

pub use action::{
    ActionDefinition, ActionExecutionResult, ActionId, PreparedAction, WeightedAction,
};
pub use battle::{Battle, BattleError, BattleState, LifecycleError};
pub use config::BattleConfig;
pub use env::{
    BattleEnv, OracleError, PcgRng, RandomOpponent, RngOracle, TargetingOracle, compute_seed,
};
pub use error::{ErrorSeverity, GameError};
pub use outcome::{
    Annihilation, BattleOutcome, BattleOverResult, OutcomeOracle, RoundLimit, StandardReferee,
};
pub use phase::{
    AllyChoice, BattlePhase, NextPhase, Phase, PhaseKind, PhaseStep, PlayerDecisions,
    PlayerTurnError, PlayerTurnHelper,
};
pub use prepared::PreparedActions;
pub use resolver::{BattleResolver, NoopResolver};
pub use roster::{Roster, RosterError};
pub use unit::{
    Ally, AllyId, BattleUnit, Enemy, EnemyId, EnemyTemplate, Party, PartyMember, PrototypeId,
    SampledAction, Troop, UnitId, WeightedActions,
};
