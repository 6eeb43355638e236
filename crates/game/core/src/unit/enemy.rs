use crate::action::WeightedAction;
use crate::env::RngOracle;

use super::{PrototypeId, SampledAction, WeightedActions};

/// Static description of an enemy kind.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyTemplate {
    pub name: String,
    pub prototype: PrototypeId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub actions: Vec<WeightedAction>,
}

impl EnemyTemplate {
    pub fn new(name: impl Into<String>, prototype: PrototypeId) -> Self {
        Self {
            name: name.into(),
            prototype,
            actions: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_actions(mut self, actions: impl IntoIterator<Item = WeightedAction>) -> Self {
        self.actions = actions.into_iter().collect();
        self
    }
}

/// A group of enemies the party can be made to fight.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Troop {
    pub description: String,
    pub enemies: Vec<EnemyTemplate>,
}

impl Troop {
    pub fn new(
        description: impl Into<String>,
        enemies: impl IntoIterator<Item = EnemyTemplate>,
    ) -> Self {
        Self {
            description: description.into(),
            enemies: enemies.into_iter().collect(),
        }
    }
}

/// An enemy fighting in the current battle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enemy {
    name: String,
    prototype: PrototypeId,
    actions: WeightedActions,
    standing: bool,
}

impl Enemy {
    pub fn from_template(template: &EnemyTemplate) -> Self {
        Self::new(
            template.name.clone(),
            template.prototype.clone(),
            template.actions.iter().cloned(),
        )
    }

    pub fn new(
        name: impl Into<String>,
        prototype: PrototypeId,
        actions: impl IntoIterator<Item = WeightedAction>,
    ) -> Self {
        let mut enemy = Self {
            name: name.into(),
            prototype,
            actions: WeightedActions::default(),
            standing: true,
        };
        enemy.set_actions(actions);
        enemy
    }

    /// Replaces the enemy's action set and rebuilds its weight table.
    pub fn set_actions(&mut self, actions: impl IntoIterator<Item = WeightedAction>) {
        let total = self.actions.set_actions(actions);
        if total == 0 {
            tracing::warn!(
                enemy = %self.name,
                "total action weight is zero; this enemy will never have an action to execute"
            );
        }
    }

    /// Draws the action this enemy will take this round.
    ///
    /// The returned target is always `None`; see [`SampledAction`].
    pub fn sample_action(&self, rng: &dyn RngOracle, seed: u64) -> Option<SampledAction<'_>> {
        self.actions.sample(rng, seed).map(|action| SampledAction {
            action,
            target: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn prototype(&self) -> &PrototypeId {
        &self.prototype
    }

    pub fn weights(&self) -> &WeightedActions {
        &self.actions
    }

    pub fn is_standing(&self) -> bool {
        self.standing
    }

    pub(crate) fn set_standing(&mut self, standing: bool) {
        self.standing = standing;
    }
}

impl std::fmt::Display for Enemy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
