//! Tick loop that plays a battle to the end.

use std::time::Duration;

use anyhow::{Context, Result};
use battle_core::{
    Battle, BattleEnv, BattleOutcome, BattleOverResult, BattleState, PcgRng, RandomOpponent,
    StandardReferee,
};

use crate::builder::DriverBuilder;
use crate::resolver::LoggingResolver;

/// Owns a battle, its resolver and oracles, and drives them tick by tick.
///
/// Each tick either plays one queued cue or, when the queue is empty, applies
/// pending knockouts and advances the battle once. The battle therefore never
/// runs ahead of its presentation.
pub struct BattleDriver {
    pub(crate) battle: Battle,
    pub(crate) resolver: LoggingResolver,
    pub(crate) referee: StandardReferee,
    pub(crate) targeting: RandomOpponent,
    pub(crate) rng: PcgRng,
    pub(crate) tick: Duration,
    pub(crate) max_ticks: u64,
}

impl BattleDriver {
    pub fn builder() -> DriverBuilder {
        DriverBuilder::new()
    }

    pub fn battle(&self) -> &Battle {
        &self.battle
    }

    /// Runs one tick. Returns `false` once the battle is over and every cue
    /// has been played.
    pub fn step(&mut self) -> Result<bool> {
        if let Some(cue) = self.resolver.cues().pop() {
            tracing::info!("{cue}");
            return Ok(true);
        }
        if self.battle.state() == BattleState::Finished {
            return Ok(false);
        }

        for unit in self.resolver.take_knockouts() {
            self.battle.incapacitate(unit)?;
            tracing::info!(%unit, "unit is down");
        }

        let env = BattleEnv::with_all(&self.rng, &self.targeting, &self.referee);
        self.battle.update(env, &mut self.resolver)?;
        Ok(true)
    }

    /// Plays the battle to the end at the configured tick rate.
    ///
    /// If the battle is still running after `max_ticks`, it is ended as a
    /// draw.
    pub async fn run(mut self) -> Result<BattleOverResult> {
        let mut interval = tokio::time::interval(self.tick);
        let mut ticks: u64 = 0;

        loop {
            interval.tick().await;
            if !self.step()? {
                break;
            }

            ticks += 1;
            if ticks == self.max_ticks && self.battle.state() != BattleState::Finished {
                tracing::warn!(ticks, "tick budget exhausted, calling a draw");
                self.battle.finish(BattleOutcome::Draw, &mut self.resolver)?;
            }
        }

        tracing::debug!(ticks, "driver stopped");
        self.resolver
            .result()
            .copied()
            .context("battle ended without a result")
    }
}
