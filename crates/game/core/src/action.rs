//! Action templates and the records produced while a round resolves.
//!
//! An [`ActionDefinition`] is static content. Once a unit commits to one it
//! becomes a [`PreparedAction`]; executing that yields exactly one
//! [`ActionExecutionResult`], which is handed to the resolver and dropped.
use std::fmt;

use crate::unit::UnitId;

/// Stable identifier of an action definition (e.g. `"slash"`, `"fireball"`).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ActionId(pub String);

impl ActionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A possible action a unit can take during battle.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionDefinition {
    pub id: ActionId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
}

impl ActionDefinition {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: ActionId::new(id),
            name: name.into(),
            description: String::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl fmt::Display for ActionDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// An action paired with the decision weight an enemy gives it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedAction {
    pub action: ActionDefinition,
    pub weight: u32,
}

impl WeightedAction {
    pub fn new(action: ActionDefinition, weight: u32) -> Self {
        Self { action, weight }
    }
}

/// A locked-in decision awaiting execution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedAction {
    pub actor: UnitId,
    pub action: ActionDefinition,
    /// `None` until a targeting policy assigns one.
    pub target: Option<UnitId>,
}

impl PreparedAction {
    pub fn new(actor: UnitId, action: ActionDefinition, target: Option<UnitId>) -> Self {
        Self {
            actor,
            action,
            target,
        }
    }
}

/// Outcome of executing one prepared action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionExecutionResult {
    pub prepared: PreparedAction,
    /// Round in which the action ran (1-based).
    pub round: u32,
    /// Position of the action within its execution pass (0-based).
    pub sequence: u32,
}

impl ActionExecutionResult {
    pub fn actor(&self) -> UnitId {
        self.prepared.actor
    }

    pub fn target(&self) -> Option<UnitId> {
        self.prepared.target
    }

    pub fn action(&self) -> &ActionDefinition {
        &self.prepared.action
    }
}
