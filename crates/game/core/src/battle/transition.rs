//! Phase hooks and the step application that links them.
//!
//! Each hook does its work and returns a [`PhaseStep`]; only
//! [`Battle::apply_step`] swaps phases, so the transition rules live in one
//! place.

use crate::action::PreparedAction;
use crate::env::BattleEnv;
use crate::phase::{BattlePhase, NextPhase, Phase, PhaseStep, PlayerDecisions, PlayerTurnHelper};
use crate::resolver::BattleResolver;
use crate::unit::{Ally, UnitId};

use super::{Battle, BattleError, SEED_CONTEXT_ACTION, SEED_CONTEXT_TARGET};

impl Battle {
    /// Runs the start hook of the current phase.
    pub(super) fn start_phase<R>(
        &mut self,
        env: BattleEnv<'_>,
        resolver: &mut R,
    ) -> Result<PhaseStep, BattleError>
    where
        R: BattleResolver + ?Sized,
    {
        let step = match self.phase.as_ref().map(BattlePhase::phase) {
            None => PhaseStep::Stay,
            Some(Phase::BattleStart) => {
                resolver.on_battle_start(self);
                PhaseStep::Advance(Phase::EnemyDecision)
            }
            Some(Phase::EnemyDecision) => self.decide_enemy_actions(env, resolver)?,
            Some(&Phase::ActionExecution { next }) => {
                let executed = self.execute_prepared_actions(resolver);
                tracing::debug!(executed, ?next, "prepared actions executed");
                PhaseStep::Advance(next.into_phase())
            }
            Some(Phase::PlayerDecision(_)) => self.begin_player_turn(resolver),
            Some(Phase::CleanUp) => self.clean_up(env),
        };
        Ok(step)
    }

    /// Runs the update hook of the current, already started, phase.
    ///
    /// Only the player decision phase waits across ticks; every other phase
    /// leaves on start.
    pub(super) fn update_phase(&mut self) -> PhaseStep {
        match self.phase.as_mut().map(BattlePhase::phase_mut) {
            Some(Phase::PlayerDecision(decisions)) if decisions.is_done() => {
                let decisions = std::mem::take(decisions);
                self.commit_player_turn(decisions)
            }
            _ => PhaseStep::Stay,
        }
    }

    pub(super) fn apply_step<R>(
        &mut self,
        step: PhaseStep,
        resolver: &mut R,
    ) -> Result<(), BattleError>
    where
        R: BattleResolver + ?Sized,
    {
        match step {
            PhaseStep::Stay => Ok(()),
            PhaseStep::Advance(next) => {
                if let Some(mut previous) = self.phase.take() {
                    previous.finish()?;
                    tracing::debug!(from = %previous.kind(), to = %next.kind(), "phase transition");
                }
                self.phase = Some(BattlePhase::new(next));
                Ok(())
            }
            PhaseStep::Finish(outcome) => self.finish(outcome, resolver).map(|_| ()),
        }
    }

    fn decide_enemy_actions<R>(
        &mut self,
        env: BattleEnv<'_>,
        resolver: &mut R,
    ) -> Result<PhaseStep, BattleError>
    where
        R: BattleResolver + ?Sized,
    {
        let rng = env.rng()?;
        let standing: Vec<_> = self.roster.standing_enemies().collect();

        for id in standing {
            let actor = UnitId::Enemy(id);
            let action_seed = self.next_seed(actor, SEED_CONTEXT_ACTION);

            let sampled = self
                .roster
                .enemy(id)
                .and_then(|enemy| enemy.sample_action(rng, action_seed))
                .map(|sampled| sampled.action.clone());
            let Some(action) = sampled else {
                tracing::debug!(%actor, "enemy has nothing to do");
                continue;
            };

            let target = match env.targeting() {
                Some(targeting) => {
                    let target_seed = self.next_seed(actor, SEED_CONTEXT_TARGET);
                    targeting.select_target(self, actor, &action, rng, target_seed)
                }
                None => None,
            };

            self.prepared
                .insert(PreparedAction::new(actor, action.clone(), target));
            tracing::debug!(%actor, action = %action.id, ?target, "enemy prepared");

            resolver.on_enemy_prepared(self, id, &action, target);
        }

        Ok(PhaseStep::Advance(Phase::ActionExecution {
            next: NextPhase::PlayerDecision,
        }))
    }

    fn begin_player_turn<R>(&mut self, resolver: &mut R) -> PhaseStep
    where
        R: BattleResolver + ?Sized,
    {
        let mut decisions = match self.phase.as_mut().map(BattlePhase::phase_mut) {
            Some(Phase::PlayerDecision(decisions)) => std::mem::take(decisions),
            _ => PlayerDecisions::default(),
        };

        {
            let mut helper = PlayerTurnHelper::new(&self.roster, &mut decisions);
            resolver.on_player_turn(self, &mut helper);
        }

        if decisions.is_done() {
            return self.commit_player_turn(decisions);
        }

        tracing::info!(decided = decisions.len(), "waiting for player decisions");
        if let Some(Phase::PlayerDecision(slot)) = self.phase.as_mut().map(BattlePhase::phase_mut) {
            *slot = decisions;
        }
        PhaseStep::Stay
    }

    /// Moves the standing allies' choices into the prepared table.
    fn commit_player_turn(&mut self, decisions: PlayerDecisions) -> PhaseStep {
        let mut committed = 0usize;
        for (ally, choice) in decisions.into_choices() {
            if !self.roster.ally(ally).is_some_and(Ally::is_standing) {
                tracing::debug!(ally = %UnitId::Ally(ally), "skipping choice of a downed ally");
                continue;
            }
            self.prepared
                .insert(PreparedAction::new(ally.into(), choice.action, choice.target));
            committed += 1;
        }

        tracing::info!(committed, "player turn committed");
        PhaseStep::Advance(Phase::ActionExecution {
            next: NextPhase::CleanUp,
        })
    }

    fn clean_up(&mut self, env: BattleEnv<'_>) -> PhaseStep {
        self.rounds_completed += 1;
        tracing::info!(round = self.rounds_completed, "round complete");

        match env.referee().and_then(|referee| referee.evaluate(self)) {
            Some(outcome) => PhaseStep::Finish(outcome),
            None => PhaseStep::Advance(Phase::EnemyDecision),
        }
    }
}
