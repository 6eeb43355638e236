//! Resolver that narrates the battle through `tracing` and queues cues.

use std::collections::HashMap;

use battle_core::{
    ActionDefinition, ActionExecutionResult, Battle, BattleOverResult, BattleResolver, Enemy,
    EnemyId, PlayerTurnHelper, UnitId,
};

use crate::autopilot::Autopilot;
use crate::cue::{Cue, CueQueue};

/// Logs every hook, turns it into presentation cues and plays the party
/// through an [`Autopilot`].
///
/// Hits are tallied per unit; a unit that reaches the knockout threshold is
/// reported through [`take_knockouts`](Self::take_knockouts) so the driver can
/// mark it down between ticks.
#[derive(Debug)]
pub struct LoggingResolver {
    cues: CueQueue,
    autopilot: Autopilot,
    knockout_hits: u32,
    hits: HashMap<UnitId, u32>,
    knockouts: Vec<UnitId>,
    result: Option<BattleOverResult>,
}

impl LoggingResolver {
    pub fn new(autopilot: Autopilot, knockout_hits: u32) -> Self {
        Self {
            cues: CueQueue::default(),
            autopilot,
            knockout_hits,
            hits: HashMap::new(),
            knockouts: Vec::new(),
            result: None,
        }
    }

    pub fn cues(&mut self) -> &mut CueQueue {
        &mut self.cues
    }

    /// Units that reached the knockout threshold since the last call.
    pub fn take_knockouts(&mut self) -> Vec<UnitId> {
        std::mem::take(&mut self.knockouts)
    }

    pub fn result(&self) -> Option<&BattleOverResult> {
        self.result.as_ref()
    }

    fn record_hit(&mut self, target: UnitId) {
        if self.knockout_hits == 0 {
            return;
        }
        let hits = self.hits.entry(target).or_insert(0);
        *hits += 1;
        if *hits == self.knockout_hits {
            self.knockouts.push(target);
        }
    }
}

impl BattleResolver for LoggingResolver {
    fn on_battle_start(&mut self, battle: &Battle) {
        let roster = battle.roster();
        for ally in roster.allies() {
            tracing::info!(ally = %ally, prototype = %ally.prototype(), "ally deployed");
        }
        for enemy in roster.enemies() {
            tracing::info!(enemy = %enemy, prototype = %enemy.prototype(), "enemy deployed");
        }
    }

    fn on_enemy_prepared(
        &mut self,
        battle: &Battle,
        enemy: EnemyId,
        action: &ActionDefinition,
        target: Option<UnitId>,
    ) {
        let name = battle.roster().enemy(enemy).map(Enemy::name).unwrap_or("?");
        tracing::info!(enemy = name, action = %action, ?target, "enemy prepares");
        self.cues.push(Cue::Prepare {
            actor: UnitId::Enemy(enemy),
            action: action.id.clone(),
        });
    }

    fn on_player_turn(&mut self, battle: &Battle, helper: &mut PlayerTurnHelper<'_>) {
        tracing::info!(round = battle.rounds_completed() + 1, "player turn");
        if let Err(error) = self.autopilot.decide(battle, helper) {
            tracing::warn!(%error, "autopilot could not finish the turn");
        }
    }

    fn on_action_executed(&mut self, battle: &Battle, result: &ActionExecutionResult) {
        let actor = result.actor();
        let action = result.action().id.clone();
        let actor_name = battle.roster().unit(actor).map(|unit| unit.name()).unwrap_or("?");

        match result.target() {
            Some(target) => {
                let target_name = battle
                    .roster()
                    .unit(target)
                    .map(|unit| unit.name())
                    .unwrap_or("?");
                tracing::info!(
                    round = result.round,
                    actor = actor_name,
                    action = %result.action(),
                    target = target_name,
                    "action executed"
                );
                self.cues.push(Cue::Attack {
                    actor,
                    action,
                    target,
                });
                self.cues.push(Cue::Hit { target });
                self.record_hit(target);
            }
            None => {
                tracing::info!(
                    round = result.round,
                    actor = actor_name,
                    action = %result.action(),
                    "action executed"
                );
                self.cues.push(Cue::Idle { actor, action });
            }
        }
    }

    fn on_battle_over(&mut self, _battle: &Battle, result: &BattleOverResult) {
        tracing::info!(outcome = %result.outcome, rounds = result.rounds, "battle over");
        self.cues.push(Cue::BattleOver {
            outcome: result.outcome,
            rounds: result.rounds,
        });
        self.result = Some(*result);
    }
}
