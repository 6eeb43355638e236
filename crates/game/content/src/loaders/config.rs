//! Battle configuration loader.

use std::path::Path;

use battle_core::BattleConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for battle configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`BattleConfig::default`].
    pub fn load(path: &Path) -> LoadResult<BattleConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<BattleConfig> {
        let config: BattleConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_round_limit() {
        let config = ConfigLoader::parse("round_limit = 12\n").expect("valid toml");
        assert_eq!(config.round_limit, Some(12));
    }

    #[test]
    fn empty_file_uses_defaults() {
        let config = ConfigLoader::parse("").expect("valid toml");
        assert_eq!(config, BattleConfig::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let err = ConfigLoader::parse("round_limit = \"soon\"").expect_err("wrong type");
        assert!(err.to_string().contains("Failed to parse config TOML"));
    }
}
