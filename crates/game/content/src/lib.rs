//! Data-driven battle content and loaders.
//!
//! This crate turns RON/TOML data files into the values `battle-core`
//! consumes:
//! - Battle configuration (TOML)
//! - Action catalog (RON)
//! - Bestiary of enemy templates with weighted actions (RON)
//! - The player's party (RON)
//! - Troops and their battle conditions (RON)
//!
//! Files refer to each other by id; loaders resolve those ids and reject any
//! that do not exist.

pub mod encounter;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use encounter::BattleConditions;

#[cfg(feature = "loaders")]
pub use loaders::{
    ActionCatalog, Bestiary, BestiaryLoader, ConfigLoader, ContentFactory, EnemySpec,
    MemberSpec, PartyLoader, TroopLoader, TroopSpec,
};
