//! Headless battle driver.
//!
//! # Architecture
//!
//! ```text
//! BattleDriver (tick loop)
//!   ├─→ Battle (battle-core phase machine)
//!   ├─→ LoggingResolver (narration + cue queue + autopilot)
//!   └─→ Oracles (PcgRng, RandomOpponent, StandardReferee)
//! ```
//!
//! Content comes from `battle-content`; configuration from the environment.

pub mod autopilot;
mod builder;
pub mod config;
pub mod cue;
pub mod driver;
pub mod logging;
pub mod resolver;

pub use autopilot::Autopilot;
pub use builder::DriverBuilder;
pub use config::ClientConfig;
pub use cue::{Cue, CueQueue};
pub use driver::BattleDriver;
pub use resolver::LoggingResolver;

use anyhow::{Context, Result};
use battle_content::ContentFactory;
use battle_core::{Battle, Roster};

/// Loads the configured encounter and assembles a ready-to-run driver.
pub fn driver_from_config(config: &ClientConfig) -> Result<BattleDriver> {
    let factory = ContentFactory::new(&config.data_dir);
    let battle_config = factory.load_config()?;
    let (party, conditions) = factory
        .load_encounter(&config.troop)
        .with_context(|| format!("Failed to load troop '{}'", config.troop))?;

    let seed = config.seed_or_random();
    tracing::info!(
        troop = %config.troop,
        scenario = %conditions.scenario,
        surprise = conditions.surprise,
        preemptive = conditions.preemptive,
        seed,
        "Encounter: {}",
        conditions.troop.description
    );

    let roster = Roster::from_encounter(&party, &conditions.troop)?;
    let resolver = LoggingResolver::new(Autopilot::new(seed), config.knockout_hits);

    BattleDriver::builder()
        .battle(Battle::new(roster, seed))
        .resolver(resolver)
        .battle_config(battle_config)
        .client_config(config)
        .build()
}
