//! Pseudo-random target selection.

use crate::config::PORT_COUNT;
use crate::position::Port;

use super::TargetSource;

/// Modulus of the minimal standard generator, 2^31 - 1.
const MODULUS: u64 = 0x7FFF_FFFF;
/// Multiplier of the minimal standard generator.
const MULTIPLIER: u64 = 16_807;
/// Largest raw value handed out, as on 16-bit C targets.
pub const RAND_MAX: u16 = 0x7FFF;
/// Substitute for the generator's fixed point at zero.
const ZERO_SEED_SUBSTITUTE: u32 = 123_459_876;

/// Uniform random port choice: `rand() % 4 + 1`.
///
/// Uses the Park–Miller minimal standard generator with the same raw output
/// range as the AVR C library's `rand()`, so the default seed replays the
/// prototype firmware's target sequence.
#[derive(Debug, Clone)]
pub struct RandomTargets {
    state: u32,
}

impl RandomTargets {
    /// Create a generator with the C library's default seed of 1.
    pub const fn new() -> Self {
        Self::with_seed(1)
    }

    /// Create a generator with a specific seed.
    pub const fn with_seed(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Next raw value in `0..=RAND_MAX`.
    pub fn next_raw(&mut self) -> u16 {
        let x = match self.state % MODULUS as u32 {
            0 => ZERO_SEED_SUBSTITUTE,
            x => x,
        };
        let next = (u64::from(x) * MULTIPLIER % MODULUS) as u32;
        self.state = next;
        (next % (u32::from(RAND_MAX) + 1)) as u16
    }
}

impl Default for RandomTargets {
    fn default() -> Self {
        Self::new()
    }
}

impl TargetSource for RandomTargets {
    fn next_target(&mut self) -> Port {
        let number = (self.next_raw() % u16::from(PORT_COUNT)) as u8 + 1;
        Port::new(number).unwrap_or(Port::P1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_seed_sequence() {
        let mut rng = RandomTargets::new();
        let raw: Vec<u16> = (0..4).map(|_| rng.next_raw()).collect();
        assert_eq!(raw, [16807, 15089, 11481, 3114]);
    }

    #[test]
    fn test_default_seed_targets() {
        let mut source = RandomTargets::default();
        let targets: Vec<u8> = (0..8).map(|_| source.next_target().number()).collect();
        assert_eq!(targets, [4, 2, 2, 3, 3, 1, 1, 3]);
    }

    #[test]
    fn test_zero_seed_does_not_stick() {
        let mut rng = RandomTargets::with_seed(0);
        assert_ne!(rng.next_raw(), 0);
        assert_ne!(rng.state, 0);
    }

    #[test]
    fn test_covers_all_ports() {
        let mut source = RandomTargets::new();
        let mut seen = [false; 4];
        for _ in 0..100 {
            seen[source.next_target().number() as usize - 1] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    proptest! {
        #[test]
        fn prop_targets_in_range(seed in any::<u32>()) {
            let mut source = RandomTargets::with_seed(seed);
            for _ in 0..16 {
                let port = source.next_target().number();
                prop_assert!((1..=4).contains(&port));
            }
        }
    }
}
