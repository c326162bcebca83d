//! The ternary GGM-tree construction: key generation, full-domain
//! evaluation, and the key byte format they share.
//!
//! Naming conventions used throughout this module and its children:
//! - `a`, `b` refer to the values held by party A and party B.
//! - `0`, `1`, `2` refer to the branch index at a tree node (a ternary
//!   digit, a "trit").
//! - "on-path" / "off-path" refer to whether a branch lies on the special
//!   path spelled out by `α`'s trits.

pub mod eval;
pub mod gen;
pub mod key;

use crate::error::Error;

/// The `level`-th trit of `alpha`, most-significant trit first.
///
/// `depth` is the total number of trits `alpha` is decomposed into. Returns
/// [`Error::InvalidTrit`] if the computed digit somehow falls outside
/// `{0, 1, 2}` (unreachable for an `alpha` already checked against the
/// domain, but kept as a defensive fail-fast per spec).
pub(crate) fn trit(alpha: u64, depth: u32, level: u32) -> Result<u8, Error> {
    debug_assert!(level < depth);
    let shift = depth - 1 - level;
    let place_value = 3u64
        .checked_pow(shift)
        .ok_or(Error::DepthOutOfRange(depth))?;
    let digit = (alpha / place_value) % 3;
    match u8::try_from(digit) {
        Ok(t) if t < 3 => Ok(t),
        Ok(t) => Err(Error::InvalidTrit(t)),
        Err(_) => Err(Error::InvalidTrit(u8::MAX)),
    }
}

/// Validate `depth` and return the domain size `3^depth`.
pub(crate) fn domain_size(depth: u32) -> Result<u64, Error> {
    if depth == 0 {
        return Err(Error::DepthOutOfRange(depth));
    }
    3u64.checked_pow(depth).ok_or(Error::DepthOutOfRange(depth))
}
