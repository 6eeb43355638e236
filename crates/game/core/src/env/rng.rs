//! RNG oracle for deterministic random number generation.
//!
//! Every random draw in a battle is made from a seed derived from the battle
//! seed and a per-battle draw counter (see [`compute_seed`]). Replaying a
//! battle with the same seed and the same player decisions reproduces every
//! enemy decision.

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Generate a random value in `[0, bound)`. Returns 0 when `bound` is 0.
    fn below(&self, seed: u64, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.next_u32(seed) % bound
    }

    /// Generate a random value in range `[min, max]` inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let range = max - min + 1;
        min + (self.next_u32(seed) % range)
    }
}

/// PCG random number generator (PCG-XSH-RR, 64-bit state, 32-bit output).
///
/// Stateless: the seed is the state, so one seed maps to one output.
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::pcg_output(Self::pcg_step(seed))
    }
}

/// Compute a deterministic seed for one draw.
///
/// * `battle_seed` - Base seed fixed when the battle is created
/// * `nonce` - Draw counter, incremented by the battle for every draw
/// * `actor` - Ordinal of the unit the draw is for ([`crate::UnitId::ordinal`])
/// * `context` - Distinguishes several draws made for the same actor
///   (`0`: action choice, `1`: target choice)
pub fn compute_seed(battle_seed: u64, nonce: u64, actor: u32, context: u32) -> u64 {
    // SplitMix64 / FxHash multipliers
    let mut hash = battle_seed;

    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (actor as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // avalanche
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
