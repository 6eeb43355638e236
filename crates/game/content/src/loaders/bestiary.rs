//! Enemy template loader.

use std::collections::HashMap;
use std::path::Path;

use battle_core::{ActionId, EnemyTemplate, PrototypeId, WeightedAction};
use serde::{Deserialize, Serialize};

use crate::loaders::{ActionCatalog, LoadResult, read_file};

/// Enemy entry as written in `bestiary.ron`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemySpec {
    pub id: String,
    pub name: String,
    pub prototype: PrototypeId,
    /// `(action id, weight)` pairs, in table order.
    #[serde(default)]
    pub actions: Vec<(ActionId, u32)>,
}

/// Enemy templates keyed by bestiary id.
#[derive(Debug, Clone, Default)]
pub struct Bestiary {
    templates: HashMap<String, EnemyTemplate>,
}

impl Bestiary {
    pub fn get(&self, id: &str) -> Option<&EnemyTemplate> {
        self.templates.get(id)
    }

    pub fn resolve(&self, id: &str, owner: &str) -> LoadResult<EnemyTemplate> {
        self.get(id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Unknown enemy '{}' referenced by '{}'", id, owner))
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Loader for the bestiary from RON files.
pub struct BestiaryLoader;

impl BestiaryLoader {
    pub fn load(path: &Path, catalog: &ActionCatalog) -> LoadResult<Bestiary> {
        let content = read_file(path)?;
        Self::parse(&content, catalog)
    }

    pub fn parse(content: &str, catalog: &ActionCatalog) -> LoadResult<Bestiary> {
        let specs: Vec<EnemySpec> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse bestiary RON: {}", e))?;

        let mut templates = HashMap::new();
        for spec in specs {
            let template = Self::build_template(&spec, catalog)?;
            if templates.insert(spec.id.clone(), template).is_some() {
                anyhow::bail!("Duplicate enemy id '{}' in bestiary", spec.id);
            }
        }

        Ok(Bestiary { templates })
    }

    fn build_template(spec: &EnemySpec, catalog: &ActionCatalog) -> LoadResult<EnemyTemplate> {
        let actions = spec
            .actions
            .iter()
            .map(|(id, weight)| {
                catalog
                    .resolve(id, &spec.id)
                    .map(|action| WeightedAction::new(action, *weight))
            })
            .collect::<LoadResult<Vec<_>>>()?;

        if actions.iter().all(|entry| entry.weight == 0) {
            tracing::warn!(enemy = %spec.id, "bestiary entry has no weighted actions");
        }

        Ok(EnemyTemplate::new(spec.name.clone(), spec.prototype.clone()).with_actions(actions))
    }
}
