//! The battle aggregate and its tick-driven phase machine.
//!
//! A [`Battle`] owns the roster, the prepared-action table and the current
//! phase. A driver calls [`Battle::start`] once, then [`Battle::update`] once
//! per tick until [`Battle::state`] reports [`BattleState::Finished`]. Each
//! tick performs at most one phase transition; the resolver is notified at
//! every phase boundary.
mod errors;
mod transition;

pub use errors::{BattleError, LifecycleError};

use crate::action::{ActionDefinition, ActionExecutionResult, PreparedAction};
use crate::env::{BattleEnv, compute_seed};
use crate::outcome::{BattleOutcome, BattleOverResult};
use crate::phase::{BattlePhase, Phase, PhaseKind, PlayerTurnHelper};
use crate::prepared::PreparedActions;
use crate::resolver::BattleResolver;
use crate::roster::{Roster, RosterError};
use crate::unit::UnitId;

/// Coarse lifecycle of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum BattleState {
    NotStarted,
    Ongoing,
    Finished,
}

/// Seed context for the action draw of a unit.
const SEED_CONTEXT_ACTION: u32 = 0;
/// Seed context for the target draw of a unit.
const SEED_CONTEXT_TARGET: u32 = 1;

/// One match between the party and a troop.
///
/// A battle is never reused: once finished it rejects further updates.
#[derive(Clone, Debug)]
pub struct Battle {
    roster: Roster,
    prepared: PreparedActions,
    phase: Option<BattlePhase>,
    outcome: Option<BattleOverResult>,
    started: bool,
    rounds_completed: u32,
    seed: u64,
    nonce: u64,
}

impl Battle {
    /// Creates a battle that has not started yet.
    ///
    /// `seed` feeds every random draw, so two battles with the same roster,
    /// seed and driver inputs play out identically.
    pub fn new(roster: Roster, seed: u64) -> Self {
        Self {
            roster,
            prepared: PreparedActions::default(),
            phase: None,
            outcome: None,
            started: false,
            rounds_completed: 0,
            seed,
            nonce: 0,
        }
    }

    /// Installs the first phase. It runs on the next [`update`](Self::update).
    pub fn start(&mut self) -> Result<(), BattleError> {
        if self.started {
            return Err(LifecycleError::BattleAlreadyStarted.into());
        }
        self.started = true;
        self.phase = Some(BattlePhase::new(Phase::BattleStart));
        tracing::info!(
            allies = self.roster.allies().len(),
            enemies = self.roster.enemies().len(),
            seed = self.seed,
            "battle started"
        );
        Ok(())
    }

    /// Advances the battle by one tick.
    ///
    /// Starts the current phase if it has not started, otherwise updates it.
    /// Does nothing while no phase is installed.
    ///
    /// # Errors
    ///
    /// `BattleFinished` once the battle is over, `OracleError` when a phase
    /// needs an oracle `env` lacks.
    pub fn update<R>(&mut self, env: BattleEnv<'_>, resolver: &mut R) -> Result<(), BattleError>
    where
        R: BattleResolver + ?Sized,
    {
        if self.outcome.is_some() {
            return Err(LifecycleError::BattleFinished.into());
        }
        let Some(current) = self.phase.as_mut() else {
            return Ok(());
        };

        let step = if current.has_started() {
            current.update()?;
            self.update_phase()
        } else {
            // Oracles are checked before the phase is marked started.
            if current.phase().requires_rng() {
                env.rng()?;
            }
            current.start()?;
            tracing::debug!(phase = %current.kind(), "phase started");
            self.start_phase(env, resolver)?
        };

        self.apply_step(step, resolver)
    }

    /// Ends the battle.
    ///
    /// Finishes the current phase if it had started, discards it otherwise,
    /// and fires `on_battle_over` once.
    pub fn finish<R>(
        &mut self,
        outcome: BattleOutcome,
        resolver: &mut R,
    ) -> Result<BattleOverResult, BattleError>
    where
        R: BattleResolver + ?Sized,
    {
        if !self.started {
            return Err(LifecycleError::BattleNotStarted.into());
        }
        if self.outcome.is_some() {
            return Err(LifecycleError::BattleAlreadyFinished.into());
        }

        if let Some(mut phase) = self.phase.take() {
            if phase.has_started() {
                phase.finish()?;
            }
        }

        let result = BattleOverResult {
            outcome,
            rounds: self.rounds_completed,
        };
        self.outcome = Some(result);
        tracing::info!(%outcome, rounds = result.rounds, "battle over");

        resolver.on_battle_over(self, &result);
        Ok(result)
    }

    pub fn state(&self) -> BattleState {
        if self.outcome.is_some() {
            BattleState::Finished
        } else if self.phase.is_some() {
            BattleState::Ongoing
        } else {
            BattleState::NotStarted
        }
    }

    pub fn phase(&self) -> Option<&BattlePhase> {
        self.phase.as_ref()
    }

    pub fn phase_kind(&self) -> Option<PhaseKind> {
        self.phase.as_ref().map(BattlePhase::kind)
    }

    /// Records `action` for `actor`, replacing any earlier choice this round.
    ///
    /// Returns the replaced action, if any.
    pub fn prepare_action(
        &mut self,
        actor: UnitId,
        action: ActionDefinition,
        target: Option<UnitId>,
    ) -> Result<Option<PreparedAction>, BattleError> {
        if !self.roster.contains(actor) {
            return Err(RosterError::UnknownUnit(actor).into());
        }
        if let Some(target) = target.filter(|&target| !self.roster.contains(target)) {
            return Err(RosterError::UnknownUnit(target).into());
        }

        tracing::debug!(%actor, action = %action.id, ?target, "action prepared");
        Ok(self
            .prepared
            .insert(PreparedAction::new(actor, action, target)))
    }

    pub fn prepared_actions(&self) -> &PreparedActions {
        &self.prepared
    }

    /// Drains the prepared table, firing `on_action_executed` per entry.
    ///
    /// Only entries present when the drain begins are executed. Returns how
    /// many actions ran.
    pub fn execute_prepared_actions<R>(&mut self, resolver: &mut R) -> usize
    where
        R: BattleResolver + ?Sized,
    {
        let round = self.rounds_completed + 1;
        let pending: Vec<PreparedAction> = self.prepared.drain().collect();
        let executed = pending.len();

        for (sequence, prepared) in pending.into_iter().enumerate() {
            let result = ActionExecutionResult {
                prepared,
                round,
                sequence: sequence as u32,
            };
            tracing::debug!(
                round,
                sequence,
                actor = %result.actor(),
                action = %result.action().id,
                "action executed"
            );
            resolver.on_action_executed(self, &result);
        }

        executed
    }

    /// Decision handle for the running player decision phase.
    ///
    /// Lets a driver finish the player's turn outside `on_player_turn`. A
    /// `done()` made here is committed on the next [`update`](Self::update).
    pub fn player_turn(&mut self) -> Option<PlayerTurnHelper<'_>> {
        let Self { roster, phase, .. } = self;
        let phase = phase.as_mut().filter(|phase| phase.has_started())?;
        match phase.phase_mut() {
            Phase::PlayerDecision(decisions) => Some(PlayerTurnHelper::new(roster, decisions)),
            _ => None,
        }
    }

    /// Marks a unit as down. Down enemies stop deciding, down allies are
    /// left out of the player's commit.
    pub fn incapacitate(&mut self, unit: UnitId) -> Result<(), BattleError> {
        self.roster.set_standing(unit, false)?;
        tracing::debug!(%unit, "unit incapacitated");
        Ok(())
    }

    pub fn revive(&mut self, unit: UnitId) -> Result<(), BattleError> {
        self.roster.set_standing(unit, true)?;
        tracing::debug!(%unit, "unit revived");
        Ok(())
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn rounds_completed(&self) -> u32 {
        self.rounds_completed
    }

    pub fn outcome(&self) -> Option<&BattleOverResult> {
        self.outcome.as_ref()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derives the seed for the next draw made on behalf of `actor`.
    fn next_seed(&mut self, actor: UnitId, context: u32) -> u64 {
        let seed = compute_seed(self.seed, self.nonce, actor.ordinal(), context);
        self.nonce += 1;
        seed
    }
}
