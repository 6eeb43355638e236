//! Outbound notifications from the battle to its presentation layer.

use crate::action::{ActionDefinition, ActionExecutionResult};
use crate::battle::Battle;
use crate::outcome::BattleOverResult;
use crate::phase::PlayerTurnHelper;
use crate::unit::{EnemyId, UnitId};

/// Callbacks fired by the phase machine.
///
/// Every hook receives the battle read-only; the resolver reacts (plays
/// animations, updates UI, collects input) but cannot mutate the battle from
/// inside a callback. The only channel back into the battle is the
/// [`PlayerTurnHelper`] handed to [`on_player_turn`](Self::on_player_turn).
///
/// All hooks default to no-ops.
pub trait BattleResolver {
    /// Fired once, before any decision is made.
    fn on_battle_start(&mut self, battle: &Battle) {
        let _ = battle;
    }

    /// Fired for each enemy that sampled an action this round.
    ///
    /// The enemy itself is `battle.roster().enemy(enemy)`.
    fn on_enemy_prepared(
        &mut self,
        battle: &Battle,
        enemy: EnemyId,
        action: &ActionDefinition,
        target: Option<UnitId>,
    ) {
        let _ = (battle, enemy, action, target);
    }

    /// Fired once when the player decision phase begins.
    ///
    /// If `helper.done()` is not called here, the decisions can still be
    /// completed later through [`Battle::player_turn`].
    fn on_player_turn(&mut self, battle: &Battle, helper: &mut PlayerTurnHelper<'_>) {
        let _ = (battle, helper);
    }

    /// Fired once per prepared action, in execution order.
    fn on_action_executed(&mut self, battle: &Battle, result: &ActionExecutionResult) {
        let _ = (battle, result);
    }

    /// Fired exactly once when the battle ends.
    fn on_battle_over(&mut self, battle: &Battle, result: &BattleOverResult) {
        let _ = (battle, result);
    }
}

/// Resolver that ignores every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopResolver;

impl BattleResolver for NoopResolver {}
