//! Policies the battle consults while it runs.
//!
//! Oracles are read-only collaborators: randomness, targeting, and the referee
//! that decides when a battle is over. The [`BattleEnv`] aggregate bundles
//! borrowed oracles so each `update` call can hand them to the phase machine
//! without the battle owning any of them.
mod error;
mod rng;
mod targeting;

pub use error::OracleError;
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use targeting::{RandomOpponent, TargetingOracle};

use crate::outcome::OutcomeOracle;

/// Aggregates the oracles a battle needs for one tick.
#[derive(Clone, Copy, Default)]
pub struct BattleEnv<'a> {
    rng: Option<&'a dyn RngOracle>,
    targeting: Option<&'a dyn TargetingOracle>,
    referee: Option<&'a dyn OutcomeOracle>,
}

impl<'a> BattleEnv<'a> {
    pub fn new(
        rng: Option<&'a dyn RngOracle>,
        targeting: Option<&'a dyn TargetingOracle>,
        referee: Option<&'a dyn OutcomeOracle>,
    ) -> Self {
        Self {
            rng,
            targeting,
            referee,
        }
    }

    pub fn with_all(
        rng: &'a dyn RngOracle,
        targeting: &'a dyn TargetingOracle,
        referee: &'a dyn OutcomeOracle,
    ) -> Self {
        Self::new(Some(rng), Some(targeting), Some(referee))
    }

    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_rng(mut self, rng: &'a dyn RngOracle) -> Self {
        self.rng = Some(rng);
        self
    }

    #[must_use]
    pub fn with_targeting(mut self, targeting: &'a dyn TargetingOracle) -> Self {
        self.targeting = Some(targeting);
        self
    }

    #[must_use]
    pub fn with_referee(mut self, referee: &'a dyn OutcomeOracle) -> Self {
        self.referee = Some(referee);
        self
    }

    /// Returns the RngOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::RngNotAvailable` if no rng oracle was provided.
    pub fn rng(&self) -> Result<&'a dyn RngOracle, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }

    /// Targeting is optional; without it enemy actions carry no target.
    pub fn targeting(&self) -> Option<&'a dyn TargetingOracle> {
        self.targeting
    }

    /// Without a referee the battle only ends through [`crate::Battle::finish`].
    pub fn referee(&self) -> Option<&'a dyn OutcomeOracle> {
        self.referee
    }
}
