//! The randomness contract consumed by the generator (spec §6).

use rand::{CryptoRng, RngCore};

use crate::error::Error;

/// A source of cryptographically strong uniform bytes.
///
/// Blanket-implemented for any `rand` CSPRNG, so callers can pass
/// `&mut rand::rngs::OsRng`, a seeded `ChaCha20Rng`, or any other
/// `CryptoRng + RngCore` implementor.
pub trait RandomSource {
    /// Fill `buf` with uniformly random bytes.
    fn fill_random(&mut self, buf: &mut [u8]) -> Result<(), Error>;
}

impl<R: RngCore + CryptoRng> RandomSource for R {
    fn fill_random(&mut self, buf: &mut [u8]) -> Result<(), Error> {
        self.try_fill_bytes(buf)
            .map_err(|e| Error::RandomnessFailure(e.to_string()))
    }
}
