//! Random number generators.
//!
//! Engines never touch a global generator: they take a `&mut impl Rng`
//! owned by the caller. [`MersenneTwisterRng`] is the default seeded
//! generator and plugs into the `rand` ecosystem through [`RngCore`], so
//! `rand_distr` distributions sample from it directly.

use asian_core::Real;
use rand::{Rng, RngCore};
use rand_distr::StandardNormal;
use rand_mt::Mt19937GenRand64;

/// A uniform pseudo-random number generator based on the Mersenne Twister
/// MT19937-64 algorithm.
///
/// Two instances built from the same seed produce identical streams.
#[derive(Clone)]
pub struct MersenneTwisterRng {
    rng: Mt19937GenRand64,
    seed: u64,
}

impl MersenneTwisterRng {
    /// Create a new generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mt19937GenRand64::new(seed),
            seed,
        }
    }

}

impl std::fmt::Debug for MersenneTwisterRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MersenneTwisterRng")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

impl RngCore for MersenneTwisterRng {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.fill_bytes(dest);
        Ok(())
    }
}

/// Overwrite `out` with independent standard-normal deviates drawn from `rng`.
pub fn fill_standard_normals<R: Rng + ?Sized>(rng: &mut R, out: &mut [Real]) {
    for z in out.iter_mut() {
        *z = rng.sample(StandardNormal);
    }
}
