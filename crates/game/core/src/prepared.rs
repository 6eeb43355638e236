//! Pending (actor, action, target) choices for the current round.

use std::collections::BTreeMap;

use crate::action::PreparedAction;
use crate::unit::UnitId;

/// One pending action per unit, drained in [`UnitId`] order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PreparedActions {
    entries: BTreeMap<UnitId, PreparedAction>,
}

impl PreparedActions {
    /// Records `prepared` for its actor, replacing any earlier choice.
    ///
    /// Returns the replaced action, if any.
    pub fn insert(&mut self, prepared: PreparedAction) -> Option<PreparedAction> {
        self.entries.insert(prepared.actor, prepared)
    }

    pub fn get(&self, actor: UnitId) -> Option<&PreparedAction> {
        self.entries.get(&actor)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PreparedAction> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Empties the table, yielding every pending action.
    pub fn drain(&mut self) -> impl Iterator<Item = PreparedAction> {
        std::mem::take(&mut self.entries).into_values()
    }
}
