//! The PRF contract consumed by both the generator and the evaluator (spec §6).
//!
//! No concrete backend ships here: the PRF is an external collaborator,
//! referenced only through this trait. Callers are expected to supply three
//! independently-keyed instances; the construction's security depends on
//! `P0`, `P1`, `P2` being keyed with independent pseudorandom keys. A
//! fixed-key AES-128 permutation is the expected instantiation (see
//! `dpf/tests/common` for the instance this crate's own tests use).
use crate::block::Block;

/// A keyed, deterministic, permutation-like primitive with uniform-looking
/// output on independent inputs.
pub trait Prf {
    /// The error type this backend can report.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluate the PRF on a single input.
    fn eval(&self, input: &Block) -> Result<Block, Self::Error>;

    /// Evaluate the PRF on every input, writing results to the same index in
    /// `outputs`. The default loops over [`Prf::eval`]; implementations that
    /// can batch calls to amortize setup (e.g. pipelined AES) should override
    /// this.
    fn batch_eval(&self, inputs: &[Block], outputs: &mut [Block]) -> Result<(), Self::Error> {
        debug_assert_eq!(inputs.len(), outputs.len());
        for (input, output) in inputs.iter().zip(outputs.iter_mut()) {
            *output = self.eval(input)?;
        }
        Ok(())
    }
}
