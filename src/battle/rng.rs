//! Die rolling for battle resolution. Uses SplitMix64 for throughput and good
//! statistical quality. Deterministic: same seed produces the same sequence.
//! Not cryptographically secure.

const SPLITMIX64_GOLDEN: u64 = 0x9e3779b97f4a7c15;
const SPLITMIX64_M1: u64 = 0xbf58476d1ce4e5b9;
const SPLITMIX64_M2: u64 = 0x94d049bb133111eb;

/// Sides on a battle die.
pub const DIE_SIDES: u8 = 6;

/// Source of individual die rolls. Every die a battle draws goes through this
/// trait, so tests can script exact sequences instead of sampling.
pub trait DieSource {
    /// Next die value, uniform in `1..=DIE_SIDES`.
    fn roll_die(&mut self) -> u8;
}

#[derive(Debug, Clone, Copy)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Seed from OS entropy. Interactive surfaces use this so rolls do not
    /// repeat across runs.
    pub fn from_entropy() -> Self {
        Self::new(entropy_seed())
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(SPLITMIX64_GOLDEN);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(SPLITMIX64_M1);
        z = (z ^ (z >> 27)).wrapping_mul(SPLITMIX64_M2);
        z ^ (z >> 31)
    }
}

impl DieSource for Rng {
    #[inline]
    fn roll_die(&mut self) -> u8 {
        (self.next_u64() % u64::from(DIE_SIDES)) as u8 + 1
    }
}

/// Fresh 64-bit seed from the operating system.
pub fn entropy_seed() -> u64 {
    let mut bytes = [0_u8; 8];
    getrandom::getrandom(&mut bytes).expect("OS entropy source");
    u64::from_le_bytes(bytes)
}

/// Replays a fixed die sequence, cycling when exhausted. Test double for
/// [DieSource].
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    values: Vec<u8>,
    cursor: usize,
}

impl ScriptedDice {
    /// `values` must be non-empty; each entry must be a legal die value.
    pub fn new(values: impl Into<Vec<u8>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty(), "scripted dice need at least one value");
        Self { values, cursor: 0 }
    }
}

impl DieSource for ScriptedDice {
    fn roll_die(&mut self) -> u8 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splitmix64_deterministic() {
        let mut a = Rng::new(7);
        let mut b = Rng::new(7);
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn splitmix64_different_seeds_differ() {
        let mut a = Rng::new(1);
        let mut b = Rng::new(2);
        assert_ne!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn rolled_dice_stay_on_the_die() {
        let mut rng = Rng::new(42);
        for _ in 0..1_000 {
            let die = rng.roll_die();
            assert!((1..=DIE_SIDES).contains(&die), "rolled {die}");
        }
    }

    #[test]
    fn scripted_dice_replay_and_cycle() {
        let mut dice = ScriptedDice::new([6, 1, 3]);
        let drawn: Vec<u8> = (0..5).map(|_| dice.roll_die()).collect();
        assert_eq!(drawn, vec![6, 1, 3, 6, 1]);
    }
}
