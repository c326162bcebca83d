//! A party's key: a seed plus the three per-level correction-word tracks.

use crate::block::Block;
use crate::error::Error;

const WORD_LEN: usize = 16;

/// A party's share of a generated DPF.
///
/// Byte layout (spec §6, normative): `seed ‖ CW0 ‖ CW1 ‖ CW2`, each `CW_b`
/// being `depth` consecutive 128-bit words in level order. Total length is
/// `16 * (1 + 3 * depth)` bytes. The two keys produced by one [`crate::generate`]
/// call are identical past the leading 16-byte seed.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Key {
    pub seed: Block,
    pub cw0: Vec<Block>,
    pub cw1: Vec<Block>,
    pub cw2: Vec<Block>,
}

impl Key {
    /// The depth this key was built for, inferred from its correction-word
    /// tracks (all three tracks always have equal length).
    pub fn depth(&self) -> u32 {
        self.cw0.len() as u32
    }

    /// Serialize to the exact wire format of spec §6.
    pub fn to_bytes(&self) -> Vec<u8> {
        let depth = self.cw0.len();
        let mut out = Vec::with_capacity(WORD_LEN * (1 + 3 * depth));
        write_word(&mut out, self.seed);
        for w in &self.cw0 {
            write_word(&mut out, *w);
        }
        for w in &self.cw1 {
            write_word(&mut out, *w);
        }
        for w in &self.cw2 {
            write_word(&mut out, *w);
        }
        out
    }

    /// Parse the wire format of spec §6, given the depth it was generated
    /// with. Fails with [`Error::MalformedKey`] if `bytes.len()` does not
    /// equal `16 * (1 + 3 * depth)`.
    pub fn from_bytes(bytes: &[u8], depth: u32) -> Result<Self, Error> {
        let depth = depth as usize;
        let expected = WORD_LEN * (1 + 3 * depth);
        if bytes.len() != expected {
            return Err(Error::MalformedKey {
                expected,
                actual: bytes.len(),
            });
        }

        let seed = read_word(&bytes[0..WORD_LEN]);
        let cw0_start = WORD_LEN;
        let cw1_start = cw0_start + WORD_LEN * depth;
        let cw2_start = cw1_start + WORD_LEN * depth;
        let end = cw2_start + WORD_LEN * depth;

        let cw0 = read_words(&bytes[cw0_start..cw1_start], depth);
        let cw1 = read_words(&bytes[cw1_start..cw2_start], depth);
        let cw2 = read_words(&bytes[cw2_start..end], depth);

        Ok(Key {
            seed,
            cw0,
            cw1,
            cw2,
        })
    }
}

fn write_word(out: &mut Vec<u8>, word: Block) {
    out.extend_from_slice(&word.to_le_bytes());
}

fn read_word(bytes: &[u8]) -> Block {
    let mut buf = [0u8; WORD_LEN];
    buf.copy_from_slice(bytes);
    Block::from_le_bytes(buf)
}

fn read_words(bytes: &[u8], count: usize) -> Vec<Block> {
    (0..count)
        .map(|i| read_word(&bytes[i * WORD_LEN..(i + 1) * WORD_LEN]))
        .collect()
}
