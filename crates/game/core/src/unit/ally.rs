use crate::action::ActionDefinition;

use super::PrototypeId;

/// Persistent record of a character in the player's party.
///
/// This outlives any single battle; an [`Ally`] is created from it when a
/// battle begins.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartyMember {
    pub name: String,
    pub prototype: PrototypeId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub actions: Vec<ActionDefinition>,
}

impl PartyMember {
    pub fn new(name: impl Into<String>, prototype: PrototypeId) -> Self {
        Self {
            name: name.into(),
            prototype,
            actions: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_actions(mut self, actions: impl IntoIterator<Item = ActionDefinition>) -> Self {
        self.actions = actions.into_iter().collect();
        self
    }
}

/// The player's party, in formation order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Party {
    pub members: Vec<PartyMember>,
}

impl Party {
    pub fn new(members: impl IntoIterator<Item = PartyMember>) -> Self {
        Self {
            members: members.into_iter().collect(),
        }
    }
}

/// A party member fighting in the current battle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ally {
    name: String,
    prototype: PrototypeId,
    actions: Vec<ActionDefinition>,
    standing: bool,
}

impl Ally {
    pub fn from_member(member: &PartyMember) -> Self {
        Self {
            name: member.name.clone(),
            prototype: member.prototype.clone(),
            actions: member.actions.clone(),
            standing: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn prototype(&self) -> &PrototypeId {
        &self.prototype
    }

    /// Actions this ally can choose from during the player turn.
    pub fn actions(&self) -> &[ActionDefinition] {
        &self.actions
    }

    pub fn is_standing(&self) -> bool {
        self.standing
    }

    pub(crate) fn set_standing(&mut self, standing: bool) {
        self.standing = standing;
    }
}

impl std::fmt::Display for Ally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
