//! Targeting policies for enemy decisions.

use crate::action::ActionDefinition;
use crate::battle::Battle;
use crate::env::RngOracle;
use crate::unit::UnitId;

/// Oracle deciding who an enemy's sampled action is aimed at.
///
/// Returning `None` is legal: the action is prepared without a target.
pub trait TargetingOracle: Send + Sync {
    fn select_target(
        &self,
        battle: &Battle,
        actor: UnitId,
        action: &ActionDefinition,
        rng: &dyn RngOracle,
        seed: u64,
    ) -> Option<UnitId>;
}

/// Picks a standing unit of the opposing side uniformly at random.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomOpponent;

impl TargetingOracle for RandomOpponent {
    fn select_target(
        &self,
        battle: &Battle,
        actor: UnitId,
        _action: &ActionDefinition,
        rng: &dyn RngOracle,
        seed: u64,
    ) -> Option<UnitId> {
        let roster = battle.roster();
        let opponents: Vec<UnitId> = if actor.is_enemy() {
            roster.standing_allies().map(UnitId::Ally).collect()
        } else {
            roster.standing_enemies().map(UnitId::Enemy).collect()
        };

        if opponents.is_empty() {
            return None;
        }
        let pick = rng.below(seed, opponents.len() as u32) as usize;
        opponents.get(pick).copied()
    }
}
