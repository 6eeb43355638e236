/// Battle configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Number of completed rounds after which the battle is declared a draw.
    /// `None` lets the battle run until one side is down.
    pub round_limit: Option<u32>,
}

impl BattleConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of allies in a party taking part in a battle.
    pub const MAX_ALLIES: usize = 8;
    /// Maximum number of enemies in a troop.
    pub const MAX_ENEMIES: usize = 16;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ROUND_LIMIT: u32 = 99;

    pub fn new() -> Self {
        Self {
            round_limit: Some(Self::DEFAULT_ROUND_LIMIT),
        }
    }

    pub fn with_round_limit(round_limit: Option<u32>) -> Self {
        Self { round_limit }
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
