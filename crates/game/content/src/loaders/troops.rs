//! Troop loader.

use std::path::Path;

use battle_core::Troop;
use serde::{Deserialize, Serialize};

use crate::encounter::BattleConditions;
use crate::loaders::{Bestiary, LoadResult, read_file};

/// Troop entry as written in `troops.ron`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TroopSpec {
    pub id: String,
    #[serde(default)]
    pub description: String,
    pub scenario: String,
    /// Bestiary ids, in deployment order. Repeats are separate enemies.
    pub enemies: Vec<String>,
    #[serde(default)]
    pub surprise: bool,
    #[serde(default)]
    pub preemptive: bool,
}

impl TroopSpec {
    /// Builds the battle conditions for this troop.
    pub fn to_conditions(&self, bestiary: &Bestiary) -> LoadResult<BattleConditions> {
        let enemies = self
            .enemies
            .iter()
            .map(|id| bestiary.resolve(id, &self.id))
            .collect::<LoadResult<Vec<_>>>()?;

        if self.surprise && self.preemptive {
            tracing::warn!(troop = %self.id, "troop is both a surprise and preemptive");
        }

        Ok(
            BattleConditions::new(Troop::new(self.description.clone(), enemies), &self.scenario)
                .with_surprise(self.surprise)
                .with_preemptive(self.preemptive),
        )
    }
}

/// Loader for troop specs from RON files.
pub struct TroopLoader;

impl TroopLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<TroopSpec>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<TroopSpec>> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse troops RON: {}", e))
    }
}
