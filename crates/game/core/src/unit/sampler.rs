//! Weighted random action selection for enemies.
//!
//! Actions are laid out on a number line: each one owns the interval
//! `(previous_total, previous_total + weight]`. A uniform draw in
//! `[1, total]` therefore lands on an action with probability
//! `weight / total`.
//!
//! An action whose weight is zero produces the same cumulative key as the entry
//! before it and replaces that entry. This mirrors how the table is keyed and
//! is kept as-is: the replaced action becomes unreachable, the zero-weight one
//! inherits its interval.

use crate::action::{ActionDefinition, WeightedAction};
use crate::env::RngOracle;
use crate::unit::UnitId;

/// Cumulative weight table.
///
/// Invariant: keys are strictly increasing and the last key equals
/// [`total_weight`](Self::total_weight).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WeightedActions {
    entries: Vec<(u32, ActionDefinition)>,
    total: u32,
}

impl WeightedActions {
    pub fn new(actions: impl IntoIterator<Item = WeightedAction>) -> Self {
        let mut table = Self::default();
        table.set_actions(actions);
        table
    }

    /// Rebuilds the table from scratch. Returns the new total weight.
    pub fn set_actions(&mut self, actions: impl IntoIterator<Item = WeightedAction>) -> u32 {
        self.entries.clear();
        self.total = 0;

        for WeightedAction { action, weight } in actions {
            self.total = self.total.saturating_add(weight);
            match self.entries.last_mut() {
                Some((key, slot)) if *key == self.total => *slot = action,
                _ => self.entries.push((self.total, action)),
            }
        }

        self.total
    }

    pub fn total_weight(&self) -> u32 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Iterates `(cumulative_key, action)` pairs in key order.
    pub fn entries(&self) -> impl Iterator<Item = (u32, &ActionDefinition)> {
        self.entries.iter().map(|(key, action)| (*key, action))
    }

    /// Draws one action proportionally to its weight.
    ///
    /// Returns `None` when the total weight is zero.
    pub fn sample(&self, rng: &dyn RngOracle, seed: u64) -> Option<&ActionDefinition> {
        if self.total == 0 {
            return None;
        }

        let roll = rng.range(seed, 1, self.total);
        let index = self.entries.partition_point(|(key, _)| *key < roll);
        self.entries.get(index).map(|(_, action)| action)
    }
}

/// An action drawn by an enemy, with the target it would be used against.
///
/// The sampler never picks a target; `target` is filled in by a targeting
/// policy before the action is prepared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampledAction<'a> {
    pub action: &'a ActionDefinition,
    pub target: Option<UnitId>,
}
