//! Key generation: walk the special path once, emitting one correction word
//! per branch at every level.

use tracing::trace;

use super::{domain_size, key::Key, trit};
use crate::block::Block;
use crate::error::Error;
use crate::prf::Prf;
use crate::random::RandomSource;

/// Split the point function `f(alpha) = nonzero, f(i) = 0` (`i != alpha`)
/// into two keys.
///
/// `prf0`, `prf1`, `prf2` must be keyed with independent pseudorandom keys
/// and must be the same three handles later passed to
/// [`crate::full_domain_eval`] for both parties. `depth` is the tree depth
/// `n`; the domain has size `3^n`. Returns `(key_a, key_b)`.
///
/// Non-deterministic: repeated calls with identical arguments produce
/// different key pairs, since every seed and every correction word is drawn
/// fresh from `rng`.
pub fn generate<P0, P1, P2, R>(
    prf0: &P0,
    prf1: &P1,
    prf2: &P2,
    depth: u32,
    alpha: u64,
    rng: &mut R,
) -> Result<(Key, Key), Error>
where
    P0: Prf,
    P1: Prf,
    P2: Prf,
    R: RandomSource,
{
    let domain = domain_size(depth)?;
    if alpha >= domain {
        return Err(Error::DomainOverflow {
            index: alpha,
            domain,
        });
    }

    let mut seed_a = Block::random(rng)?;
    let seed_b = Block::random(rng)?;
    // Root-level control-bit invariant: the two control bits must XOR to 1.
    if !(seed_a.lsb() ^ seed_b.lsb()) {
        seed_a = seed_a.flip_lsb();
    }

    let mut parent_a = seed_a;
    let mut parent_b = seed_b;

    let mut cw0 = Vec::with_capacity(depth as usize);
    let mut cw1 = Vec::with_capacity(depth as usize);
    let mut cw2 = Vec::with_capacity(depth as usize);

    for level in 0..depth {
        let s_a0 = prf0.eval(&parent_a).map_err(Error::from_prf)?;
        let s_a1 = prf1.eval(&parent_a).map_err(Error::from_prf)?;
        let s_a2 = prf2.eval(&parent_a).map_err(Error::from_prf)?;
        let s_b0 = prf0.eval(&parent_b).map_err(Error::from_prf)?;
        let s_b1 = prf1.eval(&parent_b).map_err(Error::from_prf)?;
        let s_b2 = prf2.eval(&parent_b).map_err(Error::from_prf)?;

        let mut r = Block::random(rng)?;
        let t = trit(alpha, depth, level)?;

        let (s_at, s_bt) = match t {
            0 => (s_a0, s_b0),
            1 => (s_a1, s_b1),
            2 => (s_a2, s_b2),
            other => return Err(Error::InvalidTrit(other)),
        };

        // On-path correction: the random word that will carry fresh entropy
        // down the special path. Its LSB is forced to 1 so the control-bit
        // invariant holds one level deeper.
        let candidate = s_at ^ s_bt ^ r;
        if !candidate.lsb() {
            r = r.flip_lsb();
        }

        // Off-path branches get the unshifted XOR of the parties' outputs,
        // which cancels once both parties apply (or both skip) it.
        let (mut w0, mut w1, mut w2) = (s_a0 ^ s_b0, s_a1 ^ s_b1, s_a2 ^ s_b2);
        match t {
            0 => w0 = r,
            1 => w1 = r,
            2 => w2 = r,
            other => return Err(Error::InvalidTrit(other)),
        }
        trace!(level, branch = t, "generated level correction words");
        cw0.push(w0);
        cw1.push(w1);
        cw2.push(w2);

        // Advance the special-path node: whichever party currently has
        // control-bit 1 is the one that applies the on-path correction.
        if parent_a.lsb() {
            parent_a = s_at ^ r;
            parent_b = s_bt;
        } else {
            parent_a = s_at;
            parent_b = s_bt ^ r;
        }
    }

    let key_a = Key {
        seed: seed_a,
        cw0: cw0.clone(),
        cw1: cw1.clone(),
        cw2: cw2.clone(),
    };
    let key_b = Key {
        seed: seed_b,
        cw0,
        cw1,
        cw2,
    };
    Ok((key_a, key_b))
}
