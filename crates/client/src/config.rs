//! Driver configuration loaded from the environment.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for one `tbrpg` run.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub data_dir: PathBuf,
    pub troop: String,
    /// `None` picks a fresh seed per run.
    pub seed: Option<u64>,
    pub tick: Duration,
    pub max_ticks: u64,
    /// Hits an ally or enemy can take before the driver marks it down.
    /// `0` disables knockouts.
    pub knockout_hits: u32,
    pub log_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(Self::DEFAULT_DATA_DIR),
            troop: Self::DEFAULT_TROOP.to_string(),
            seed: None,
            tick: Duration::from_millis(Self::DEFAULT_TICK_MS),
            max_ticks: Self::DEFAULT_MAX_TICKS,
            knockout_hits: Self::DEFAULT_KNOCKOUT_HITS,
            log_dir: None,
        }
    }
}

impl ClientConfig {
    pub const DEFAULT_DATA_DIR: &'static str = "crates/game/content/data";
    pub const DEFAULT_TROOP: &'static str = "slime_pack";
    pub const DEFAULT_TICK_MS: u64 = 16;
    pub const DEFAULT_MAX_TICKS: u64 = 10_000;
    pub const DEFAULT_KNOCKOUT_HITS: u32 = 3;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BATTLE_DATA_DIR` - Content directory (default: `crates/game/content/data`)
    /// - `BATTLE_TROOP` - Troop id to fight (default: `slime_pack`)
    /// - `BATTLE_SEED` - Battle seed (default: random)
    /// - `BATTLE_TICK_MS` - Tick interval in milliseconds (default: 16)
    /// - `BATTLE_MAX_TICKS` - Ticks before the driver calls a draw (default: 10000)
    /// - `BATTLE_KNOCKOUT_HITS` - Hits before a unit goes down, 0 = never (default: 3)
    /// - `BATTLE_LOG_DIR` - Directory for a daily rolling log file (default: none)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("BATTLE_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Ok(troop) = env::var("BATTLE_TROOP") {
            config.troop = troop;
        }
        config.seed = read_env::<u64>("BATTLE_SEED");
        if let Some(ms) = read_env::<u64>("BATTLE_TICK_MS") {
            config.tick = Duration::from_millis(ms.max(1));
        }
        if let Some(ticks) = read_env::<u64>("BATTLE_MAX_TICKS") {
            config.max_ticks = ticks.max(1);
        }
        if let Some(hits) = read_env::<u32>("BATTLE_KNOCKOUT_HITS") {
            config.knockout_hits = hits;
        }
        config.log_dir = env::var("BATTLE_LOG_DIR").ok().map(PathBuf::from);

        config
    }

    /// The configured seed, or a random one.
    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documentation() {
        let config = ClientConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("crates/game/content/data"));
        assert_eq!(config.troop, "slime_pack");
        assert_eq!(config.tick, Duration::from_millis(16));
        assert_eq!(config.max_ticks, 10_000);
        assert_eq!(config.knockout_hits, 3);
        assert!(config.seed.is_none());
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn fixed_seed_is_kept() {
        let config = ClientConfig {
            seed: Some(42),
            ..ClientConfig::default()
        };
        assert_eq!(config.seed_or_random(), 42);
    }
}
