//! Action catalog loader.
//!
//! Every other content file names actions by [`ActionId`]; the catalog is the
//! single place those ids are defined.

use std::collections::HashMap;
use std::path::Path;

use battle_core::{ActionDefinition, ActionId};

use crate::loaders::{LoadResult, read_file};

/// Registry of action definitions keyed by id.
#[derive(Debug, Clone, Default)]
pub struct ActionCatalog {
    actions: HashMap<ActionId, ActionDefinition>,
}

impl ActionCatalog {
    /// Load the catalog from a RON file holding a list of actions.
    pub fn load(path: &Path) -> LoadResult<Self> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Self> {
        let definitions: Vec<ActionDefinition> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse action catalog RON: {}", e))?;
        Self::from_definitions(definitions)
    }

    /// Builds a catalog, rejecting duplicate ids.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = ActionDefinition>,
    ) -> LoadResult<Self> {
        let mut actions = HashMap::new();
        for definition in definitions {
            let id = definition.id.clone();
            if actions.insert(id.clone(), definition).is_some() {
                anyhow::bail!("Duplicate action id '{}' in action catalog", id);
            }
        }
        Ok(Self { actions })
    }

    pub fn get(&self, id: &ActionId) -> Option<&ActionDefinition> {
        self.actions.get(id)
    }

    /// Looks up an action referenced from another file.
    ///
    /// `owner` names the referencing entry and ends up in the error message.
    pub fn resolve(&self, id: &ActionId, owner: &str) -> LoadResult<ActionDefinition> {
        self.get(id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Unknown action '{}' referenced by '{}'", id, owner))
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
