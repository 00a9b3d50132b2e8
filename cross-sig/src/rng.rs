//! Deterministic XOF-backed random number generator.
//!
//! `XofRng` squeezes a SHAKE stream keyed by an arbitrary seed. It drives
//! reproducible key generation and signing in tests and vector generation
//! through the same [`TryCryptoRng`](rand_core::TryCryptoRng) interface as a
//! system RNG.

use rand_core::{CryptoRng, RngCore, SeedableRng};

use crate::hash::{Shake256Suite, Xof, XofSuite};

/// Random number generator reading from `SHAKE(seed)`.
pub struct XofRng<S: XofSuite = Shake256Suite> {
    xof: Xof<S>,
}

impl<S: XofSuite> XofRng<S> {
    /// Key the generator with a seed of any length.
    pub fn new(seed: &[u8]) -> Self {
        Self {
            xof: Xof::absorb(&[seed]),
        }
    }
}

impl<S: XofSuite> RngCore for XofRng<S> {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.xof.squeeze(&mut buf);
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.xof.squeeze(&mut buf);
        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.xof.squeeze(dest);
    }
}

impl<S: XofSuite> CryptoRng for XofRng<S> {}

impl<S: XofSuite> SeedableRng for XofRng<S> {
    type Seed = [u8; 32];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(&seed)
    }
}
