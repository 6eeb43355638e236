//! Party loader.

use std::path::Path;

use battle_core::{ActionId, Party, PartyMember, PrototypeId};
use serde::{Deserialize, Serialize};

use crate::loaders::{ActionCatalog, LoadResult, read_file};

/// Party member as written in `party.ron`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberSpec {
    pub name: String,
    pub prototype: PrototypeId,
    #[serde(default)]
    pub actions: Vec<ActionId>,
}

/// Loader for the player's party from RON files.
pub struct PartyLoader;

impl PartyLoader {
    pub fn load(path: &Path, catalog: &ActionCatalog) -> LoadResult<Party> {
        let content = read_file(path)?;
        Self::parse(&content, catalog)
    }

    pub fn parse(content: &str, catalog: &ActionCatalog) -> LoadResult<Party> {
        let specs: Vec<MemberSpec> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse party RON: {}", e))?;

        let members = specs
            .into_iter()
            .map(|spec| {
                let actions = spec
                    .actions
                    .iter()
                    .map(|id| catalog.resolve(id, &spec.name))
                    .collect::<LoadResult<Vec<_>>>()?;
                Ok(PartyMember::new(spec.name, spec.prototype).with_actions(actions))
            })
            .collect::<LoadResult<Vec<_>>>()?;

        Ok(Party::new(members))
    }
}
