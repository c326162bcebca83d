//! The 128-bit word shared by seeds, correction words, and PRF inputs/outputs.

use std::ops::{BitXor, BitXorAssign};

use crate::error::Error;
use crate::random::RandomSource;

/// A 128-bit word.
///
/// Carries two roles depending on context: a PRF input/output, or a seed
/// whose least-significant bit is the node's control bit.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct Block(pub u128);

impl Block {
    /// The all-zero word.
    pub const ZERO: Block = Block(0);

    /// Sample a uniformly random word from `rng`.
    pub fn random(rng: &mut impl RandomSource) -> Result<Self, Error> {
        let mut bytes = [0u8; 16];
        rng.fill_random(&mut bytes)?;
        Ok(Block(u128::from_le_bytes(bytes)))
    }

    /// The control bit: the least-significant bit of the word.
    #[inline]
    pub fn lsb(self) -> bool {
        self.0 & 1 == 1
    }

    /// Return this word with its LSB flipped.
    #[inline]
    pub fn flip_lsb(self) -> Self {
        Block(self.0 ^ 1)
    }

    /// Little-endian byte representation, per the key layout of spec §6.
    #[inline]
    pub fn to_le_bytes(self) -> [u8; 16] {
        self.0.to_le_bytes()
    }

    /// Inverse of [`Block::to_le_bytes`].
    #[inline]
    pub fn from_le_bytes(bytes: [u8; 16]) -> Self {
        Block(u128::from_le_bytes(bytes))
    }
}

impl BitXor for Block {
    type Output = Block;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self::Output {
        Block(self.0 ^ rhs.0)
    }
}

impl BitXorAssign for Block {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}
