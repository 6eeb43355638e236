//! Content loaders for reading battle data from files.
//!
//! Each loader reads one file. Files that refer to other content take the
//! already loaded catalog they point into.

pub mod actions;
pub mod bestiary;
pub mod config;
pub mod factory;
pub mod party;
pub mod troops;

pub use actions::ActionCatalog;
pub use bestiary::{Bestiary, BestiaryLoader, EnemySpec};
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use party::{MemberSpec, PartyLoader};
pub use troops::{TroopLoader, TroopSpec};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
