//! A two-party distributed point function (DPF) over a ternary domain.
//!
//! A DPF splits a point function, zero everywhere except at one secret
//! index `α` where it is nonzero, into two compact keys. Each key alone
//! reveals nothing about `α`; evaluating both keys over the whole domain and
//! XORing the results reconstructs the point function.
//!
//! This crate implements the GGM-tree-with-correction-words construction
//! specialized to arity 3 (each tree node has three children) and to the
//! group of 128-bit words under XOR. See [`gen::generate`] and
//! [`eval::full_domain_eval`].

pub mod block;
pub mod error;
pub mod prf;
pub mod random;
pub mod ternary;

pub use block::Block;
pub use error::Error;
pub use prf::Prf;
pub use random::RandomSource;
pub use ternary::eval::full_domain_eval;
pub use ternary::gen::generate;
pub use ternary::key::Key;

/// Two values, one per party (conventionally `[A, B]`).
pub type Pair<T> = [T; 2];
