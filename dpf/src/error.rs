//! Library-wide error type.

use thiserror::Error as ThisError;

/// Everything that can go wrong in key generation or full-domain evaluation.
///
/// Every variant is fatal to the call in which it occurs; there is no
/// partial-result or retry semantics anywhere in this crate.
#[derive(Debug, ThisError)]
pub enum Error {
    /// `depth` was zero, or `3^depth` does not fit the index type.
    #[error("depth {0} is out of range")]
    DepthOutOfRange(u32),

    /// The secret index was not inside `[0, 3^depth)`.
    #[error("index {index} is outside the domain [0, {domain})")]
    DomainOverflow { index: u64, domain: u64 },

    /// The trit decoder produced a value outside `{0, 1, 2}`.
    ///
    /// Unreachable for a validated `(alpha, depth)` pair; kept as a
    /// defensive fail-fast per spec.
    #[error("trit decoder produced invalid digit {0}")]
    InvalidTrit(u8),

    /// A key's byte length did not match the length implied by `depth`.
    #[error("malformed key: expected {expected} bytes for depth, got {actual}")]
    MalformedKey { expected: usize, actual: usize },

    /// The evaluator's `3^depth`-word output buffer could not be allocated.
    #[error("failed to allocate output buffer of {0} words")]
    AllocationFailure(usize),

    /// The randomness source could not supply bytes.
    #[error("randomness source failed: {0}")]
    RandomnessFailure(String),

    /// The PRF backend reported an error.
    #[error("PRF backend failed: {0}")]
    Prf(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wrap an error returned by a [`crate::prf::Prf`] implementation.
    pub fn from_prf<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Prf(Box::new(err))
    }
}
