//! Units taking part in a battle.
//!
//! A battle has exactly two kinds of units: [`Ally`] (a party member the
//! player controls) and [`Enemy`] (an instance of an enemy template driven by
//! its weighted action table). Both are addressed by [`UnitId`], which is a
//! plain index into the battle roster and therefore stable for the whole
//! battle.
mod ally;
mod enemy;
mod sampler;

pub use ally::{Ally, Party, PartyMember};
pub use enemy::{Enemy, EnemyTemplate, Troop};
pub use sampler::{SampledAction, WeightedActions};

use std::fmt;

/// Opaque handle to whatever the presentation layer uses to display a unit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PrototypeId(pub String);

impl PrototypeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PrototypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Index of an ally in the battle roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AllyId(pub u8);

/// Index of an enemy in the battle roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EnemyId(pub u8);

impl AllyId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl EnemyId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Identifier of any unit in a battle.
///
/// Ordering puts allies before enemies, each in roster order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UnitId {
    Ally(AllyId),
    Enemy(EnemyId),
}

impl UnitId {
    pub const fn is_ally(self) -> bool {
        matches!(self, Self::Ally(_))
    }

    pub const fn is_enemy(self) -> bool {
        matches!(self, Self::Enemy(_))
    }

    /// Folds the id into a single number for seed mixing.
    pub const fn ordinal(self) -> u32 {
        match self {
            Self::Ally(id) => id.0 as u32,
            Self::Enemy(id) => 0x100 | id.0 as u32,
        }
    }
}

impl From<AllyId> for UnitId {
    fn from(id: AllyId) -> Self {
        Self::Ally(id)
    }
}

impl From<EnemyId> for UnitId {
    fn from(id: EnemyId) -> Self {
        Self::Enemy(id)
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ally(id) => write!(f, "ally#{}", id.0),
            Self::Enemy(id) => write!(f, "enemy#{}", id.0),
        }
    }
}

/// Borrowed view over either kind of unit.
#[derive(Clone, Copy, Debug)]
pub enum BattleUnit<'a> {
    Ally(&'a Ally),
    Enemy(&'a Enemy),
}

impl<'a> BattleUnit<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            Self::Ally(ally) => ally.name(),
            Self::Enemy(enemy) => enemy.name(),
        }
    }

    pub fn prototype(&self) -> &'a PrototypeId {
        match self {
            Self::Ally(ally) => ally.prototype(),
            Self::Enemy(enemy) => enemy.prototype(),
        }
    }

    pub fn is_standing(&self) -> bool {
        match self {
            Self::Ally(ally) => ally.is_standing(),
            Self::Enemy(enemy) => enemy.is_standing(),
        }
    }
}

impl fmt::Display for BattleUnit<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
