//! Deterministic RNG wrapper using PCG32.
//!
//! Texture generation must seed all randomness through this module so that
//! a preset's seed reproduces its texture byte-for-byte.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Wrapper around PCG32 for deterministic random number generation.
#[derive(Clone)]
pub struct DeterministicRng {
    inner: Pcg32,
}

impl DeterministicRng {
    /// Create a new RNG from a preset seed.
    ///
    /// The seed's IEEE-754 bit pattern becomes the PCG32 stream seed, so
    /// every representable f64 maps to its own reproducible state. Note
    /// that `0.0` and `-0.0` have different bit patterns and count as
    /// different seeds.
    pub fn from_seed(seed: f64) -> Self {
        Self {
            inner: Pcg32::seed_from_u64(seed.to_bits()),
        }
    }

    /// Generate a random f64 in the range [0.0, 1.0).
    #[inline]
    pub fn gen_f64(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Generate a random u32.
    #[inline]
    pub fn gen_u32(&mut self) -> u32 {
        self.inner.gen::<u32>()
    }

    /// Generate a random value in the given range.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.inner.gen_range(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_output() {
        let mut rng1 = DeterministicRng::from_seed(0.42);
        let mut rng2 = DeterministicRng::from_seed(0.42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_f64(), rng2.gen_f64());
        }
    }

    #[test]
    fn test_different_seeds_produce_different_output() {
        let mut rng1 = DeterministicRng::from_seed(0.42);
        let mut rng2 = DeterministicRng::from_seed(0.43);

        let mut any_different = false;
        for _ in 0..10 {
            if rng1.gen_u32() != rng2.gen_u32() {
                any_different = true;
                break;
            }
        }
        assert!(any_different);
    }

    #[test]
    fn test_nearby_seeds_are_distinct() {
        // Seeds come from user-visible floats with ~6 displayed digits;
        // tiny differences must still fork the stream.
        let mut rng1 = DeterministicRng::from_seed(0.500000);
        let mut rng2 = DeterministicRng::from_seed(0.500001);
        let a: Vec<u32> = (0..8).map(|_| rng1.gen_u32()).collect();
        let b: Vec<u32> = (0..8).map(|_| rng2.gen_u32()).collect();
        assert_ne!(a, b);
    }
}
