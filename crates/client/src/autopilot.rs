//! Automatic player decisions.

use battle_core::{
    Battle, PcgRng, PlayerTurnError, PlayerTurnHelper, RngOracle, UnitId, compute_seed,
};

/// Seed context for autopilot target draws.
const AUTOPILOT_CONTEXT: u32 = 0xA0;

/// Fills the player's turn: every standing ally uses its first action on a
/// random standing enemy.
#[derive(Clone, Debug)]
pub struct Autopilot {
    rng: PcgRng,
    seed: u64,
    nonce: u64,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: PcgRng,
            seed,
            nonce: 0,
        }
    }

    /// Records a choice for every standing ally that has an action, then
    /// commits the turn.
    pub fn decide(
        &mut self,
        battle: &Battle,
        helper: &mut PlayerTurnHelper<'_>,
    ) -> Result<(), PlayerTurnError> {
        let roster = battle.roster();
        let enemies: Vec<UnitId> = roster.standing_enemies().map(UnitId::Enemy).collect();

        for ally in roster.standing_allies() {
            let Some(action) = roster
                .ally(ally)
                .and_then(|unit| unit.actions().first().cloned())
            else {
                tracing::debug!(ally = %UnitId::Ally(ally), "ally has no actions");
                continue;
            };

            let target = if enemies.is_empty() {
                None
            } else {
                let seed = compute_seed(
                    self.seed,
                    self.nonce,
                    UnitId::Ally(ally).ordinal(),
                    AUTOPILOT_CONTEXT,
                );
                self.nonce += 1;
                let pick = self.rng.below(seed, enemies.len() as u32) as usize;
                enemies.get(pick).copied()
            };

            helper.set_ally_action(ally, action, target)?;
        }

        helper.done()
    }
}
