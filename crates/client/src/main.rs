//! `tbrpg`: plays one battle from the content directory.
//!
//! ```bash
//! BATTLE_TROOP=cave_ambush BATTLE_SEED=7 cargo run -p battle-client
//! ```

use anyhow::Result;
use battle_client::{ClientConfig, driver_from_config, logging};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();
    let _guard = logging::setup_logging(config.log_dir.as_deref())?;

    tracing::info!("Starting tbrpg");
    let driver = driver_from_config(&config)?;
    let result = driver.run().await?;

    tracing::info!(
        outcome = %result.outcome,
        rounds = result.rounds,
        "Battle finished"
    );
    Ok(())
}
