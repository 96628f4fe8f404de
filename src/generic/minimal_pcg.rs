//! A simple pseudorandom number generator.
//!
//! Specifically, the *really* minimal C PCG32 implementation from <https://www.pcg-random.org/>, implemented to satisfy [RngCore].
//!
//! The [built-in engine](crate::engine::cdcl) is generic over any source of randomness which implements [Rng](rand::Rng) and [Default].
//! PCG32 is the default, as it is simple and fast, and as a default generator always produces the same sequence a solve with the default generator is deterministic.

use rand::SeedableRng;
use rand_core::{impls, Error, RngCore};

/// State and increment.
#[derive(Default)]
pub struct MinimalPCG32 {
    state: u64,
    inc: u64,
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;

        self.state = old_state
            .wrapping_mul(6364136223846793005_u64)
            .wrapping_add(self.inc | 1);

        let xorshifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let rot = (old_state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for MinimalPCG32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        const INCREMENT: u64 = 1442695040888963407;
        Self {
            state: u64::from_le_bytes(seed).wrapping_add(INCREMENT),
            inc: INCREMENT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn seeded_sequences_agree() {
        let mut a = MinimalPCG32::seed_from_u64(73);
        let mut b = MinimalPCG32::seed_from_u64(73);

        for _ in 0..64 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn seeds_differ() {
        let mut a = MinimalPCG32::seed_from_u64(2);
        let mut b = MinimalPCG32::seed_from_u64(3);

        let a_values = (0..8).map(|_| a.next_u64()).collect::<Vec<_>>();
        let b_values = (0..8).map(|_| b.next_u64()).collect::<Vec<_>>();
        assert_ne!(a_values, b_values);
    }

    #[test]
    fn bool_extremes() {
        let mut rng = MinimalPCG32::default();
        for _ in 0..32 {
            assert!(!rng.gen_bool(0.0));
            assert!(rng.gen_bool(1.0));
        }
    }
}
