//! Content factory for building battles from data files.

use std::path::{Path, PathBuf};

use battle_core::{BattleConfig, Party};

use crate::encounter::BattleConditions;
use crate::loaders::{
    ActionCatalog, Bestiary, BestiaryLoader, ConfigLoader, LoadResult, PartyLoader, TroopLoader,
    TroopSpec,
};

/// Content factory that loads all battle content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── actions.ron
/// ├── bestiary.ron
/// ├── party.ron
/// └── troops.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load battle configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<BattleConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the action catalog from `actions.ron`.
    pub fn load_actions(&self) -> LoadResult<ActionCatalog> {
        ActionCatalog::load(&self.data_dir.join("actions.ron"))
    }

    /// Load enemy templates from `bestiary.ron`.
    pub fn load_bestiary(&self, catalog: &ActionCatalog) -> LoadResult<Bestiary> {
        BestiaryLoader::load(&self.data_dir.join("bestiary.ron"), catalog)
    }

    /// Load the player's party from `party.ron`.
    pub fn load_party(&self, catalog: &ActionCatalog) -> LoadResult<Party> {
        PartyLoader::load(&self.data_dir.join("party.ron"), catalog)
    }

    /// Load troop specs from `troops.ron`.
    pub fn load_troops(&self) -> LoadResult<Vec<TroopSpec>> {
        TroopLoader::load(&self.data_dir.join("troops.ron"))
    }

    /// Load everything needed to fight the troop `troop_id`.
    pub fn load_encounter(&self, troop_id: &str) -> LoadResult<(Party, BattleConditions)> {
        let catalog = self.load_actions()?;
        let bestiary = self.load_bestiary(&catalog)?;
        let party = self.load_party(&catalog)?;

        let troops = self.load_troops()?;
        let spec = troops
            .iter()
            .find(|spec| spec.id == troop_id)
            .ok_or_else(|| anyhow::anyhow!("Unknown troop '{}'", troop_id))?;
        let conditions = spec.to_conditions(&bestiary)?;

        tracing::debug!(
            troop = troop_id,
            allies = party.members.len(),
            enemies = conditions.troop.enemies.len(),
            scenario = %conditions.scenario,
            "encounter loaded"
        );
        Ok((party, conditions))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
