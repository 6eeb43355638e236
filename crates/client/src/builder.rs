//! Driver builder with dependency injection pattern.

use std::time::Duration;

use anyhow::{Context, Result};
use battle_core::{Battle, BattleConfig, BattleState, PcgRng, RandomOpponent, StandardReferee};

use crate::config::ClientConfig;
use crate::driver::BattleDriver;
use crate::resolver::LoggingResolver;

/// Builder for constructing a [`BattleDriver`].
///
/// - **Required fields**: battle and resolver
/// - **Optional fields**: battle config, tick interval, tick budget
///
/// `build()` starts the battle if it has not been started yet.
#[derive(Default)]
pub struct DriverBuilder {
    battle: Option<Battle>,
    resolver: Option<LoggingResolver>,
    battle_config: Option<BattleConfig>,
    tick: Option<Duration>,
    max_ticks: Option<u64>,
}

impl DriverBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the battle to drive (required).
    pub fn battle(mut self, battle: Battle) -> Self {
        self.battle = Some(battle);
        self
    }

    /// Set the resolver receiving battle notifications (required).
    pub fn resolver(mut self, resolver: LoggingResolver) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Set the battle rules (default: [`BattleConfig::default`]).
    pub fn battle_config(mut self, config: BattleConfig) -> Self {
        self.battle_config = Some(config);
        self
    }

    /// Take tick interval and tick budget from the client configuration.
    pub fn client_config(mut self, config: &ClientConfig) -> Self {
        self.tick = Some(config.tick);
        self.max_ticks = Some(config.max_ticks);
        self
    }

    pub fn build(self) -> Result<BattleDriver> {
        let mut battle = self.battle.context("Battle is required")?;
        let resolver = self.resolver.context("Resolver is required")?;
        let battle_config = self.battle_config.unwrap_or_default();

        if battle.state() == BattleState::NotStarted {
            battle.start()?;
        }

        Ok(BattleDriver {
            battle,
            resolver,
            referee: StandardReferee::from_config(&battle_config),
            targeting: RandomOpponent,
            rng: PcgRng,
            tick: self
                .tick
                .unwrap_or(Duration::from_millis(ClientConfig::DEFAULT_TICK_MS)),
            max_ticks: self.max_ticks.unwrap_or(ClientConfig::DEFAULT_MAX_TICKS),
        })
    }
}
