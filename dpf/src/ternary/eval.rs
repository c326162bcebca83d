//! Full-domain evaluation: expand the whole tree level-by-level in batches,
//! rather than re-walking a root-to-leaf path once per output index.

use tracing::debug;

use super::{domain_size, key::Key};
use crate::block::Block;
use crate::error::Error;
use crate::prf::Prf;

/// Evaluate `key` over every point of the domain, producing this party's
/// share of the point function.
///
/// Cost is `O(3^depth)` PRF calls rather than `O(depth * 3^depth)`, because
/// each tree level is expanded exactly once across the whole frontier of
/// live nodes, in three batched PRF calls per level.
///
/// The working buffer is `16 * 3^depth` bytes, about 76 MiB at `depth =
/// 14` and over 200 MiB at `depth = 15`. Callers choose tractable depths;
/// this function reports [`Error::AllocationFailure`] rather than aborting
/// the process if the buffer cannot be allocated.
pub fn full_domain_eval<P0, P1, P2>(
    prf0: &P0,
    prf1: &P1,
    prf2: &P2,
    key: &Key,
    depth: u32,
) -> Result<Vec<Block>, Error>
where
    P0: Prf,
    P1: Prf,
    P2: Prf,
{
    let total = domain_size(depth)?;
    let total = usize::try_from(total).map_err(|_| Error::AllocationFailure(total as usize))?;

    if key.depth() != depth {
        return Err(Error::MalformedKey {
            expected: 16 * (1 + 3 * depth as usize),
            actual: 16 * (1 + 3 * key.depth() as usize),
        });
    }

    let mut parents = try_zeroed_vec(total)?;
    let mut scratch = try_zeroed_vec(total)?;
    parents[0] = key.seed;

    let mut num_nodes = 1usize;
    for level in 0..depth as usize {
        let (block0, rest) = scratch.split_at_mut(num_nodes);
        let (block1, rest) = rest.split_at_mut(num_nodes);
        let block2 = &mut rest[..num_nodes];
        prf0.batch_eval(&parents[..num_nodes], block0)
            .map_err(Error::from_prf)?;
        prf1.batch_eval(&parents[..num_nodes], block1)
            .map_err(Error::from_prf)?;
        prf2.batch_eval(&parents[..num_nodes], block2)
            .map_err(Error::from_prf)?;

        for j in 0..num_nodes {
            if parents[j].lsb() {
                parents[j] = scratch[j] ^ key.cw0[level];
                parents[j + num_nodes] = scratch[j + num_nodes] ^ key.cw1[level];
                parents[j + 2 * num_nodes] = scratch[j + 2 * num_nodes] ^ key.cw2[level];
            } else {
                parents[j] = scratch[j];
                parents[j + num_nodes] = scratch[j + num_nodes];
                parents[j + 2 * num_nodes] = scratch[j + 2 * num_nodes];
            }
        }

        num_nodes *= 3;
        debug!(level, num_nodes, "expanded tree level");
    }

    debug_assert_eq!(num_nodes, total);
    Ok(parents)
}

fn try_zeroed_vec(len: usize) -> Result<Vec<Block>, Error> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)
        .map_err(|_| Error::AllocationFailure(len))?;
    v.resize(len, Block::ZERO);
    Ok(v)
}
