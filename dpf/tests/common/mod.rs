//! A reference PRF backend for this crate's own tests: fixed-key AES-128,
//! used as a permutation. Not part of the public API; the real PRF is an
//! external collaborator per spec, supplied by the caller.
use std::convert::Infallible;

use aes::cipher::{BlockEncrypt, KeyInit};
use aes::Aes128;
use generic_array::GenericArray;

use ternary_dpf::{Block, Prf};

pub struct AesPrf {
    cipher: Aes128,
}

impl AesPrf {
    pub fn new(key: [u8; 16]) -> Self {
        AesPrf {
            cipher: Aes128::new(GenericArray::from_slice(&key)),
        }
    }
}

impl Prf for AesPrf {
    type Error = Infallible;

    fn eval(&self, input: &Block) -> Result<Block, Self::Error> {
        let mut block = GenericArray::clone_from_slice(&input.to_le_bytes());
        self.cipher.encrypt_block(&mut block);
        let mut bytes = [0u8; 16];
        bytes.copy_from_slice(&block);
        Ok(Block::from_le_bytes(bytes))
    }
}

/// Three independently-keyed PRF handles, suitable for a single test.
pub fn test_prfs() -> (AesPrf, AesPrf, AesPrf) {
    (
        AesPrf::new(*b"0000000000000001"),
        AesPrf::new(*b"0000000000000002"),
        AesPrf::new(*b"0000000000000003"),
    )
}
