//! Property tests for the invariants of spec §8, quantified over depth and
//! secret index.

mod common;

use common::test_prfs;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use ternary_dpf::{full_domain_eval, generate, Block};

const MAX_DEPTH: u32 = 10;

fn depth_and_alpha() -> impl Strategy<Value = (u32, u64)> {
    (1..=MAX_DEPTH).prop_flat_map(|depth| {
        let domain = 3u64.pow(depth);
        (Just(depth), 0..domain)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Invariant 1 & 2: the combined shares are zero everywhere except at
    /// alpha, where they are nonzero.
    #[test]
    fn correct_at_alpha_and_zero_elsewhere((depth, alpha) in depth_and_alpha(), seed: u64) {
        let (prf0, prf1, prf2) = test_prfs();
        let mut rng = ChaCha20Rng::seed_from_u64(seed);

        let (key_a, key_b) = generate(&prf0, &prf1, &prf2, depth, alpha, &mut rng).unwrap();
        let shares_a = full_domain_eval(&prf0, &prf1, &prf2, &key_a, depth).unwrap();
        let shares_b = full_domain_eval(&prf0, &prf1, &prf2, &key_b, depth).unwrap();

        for (i, (a, b)) in shares_a.iter().zip(shares_b.iter()).enumerate() {
            let xor = *a ^ *b;
            if i as u64 == alpha {
                prop_assert_ne!(xor, Block::ZERO);
            } else {
                prop_assert_eq!(xor, Block::ZERO);
            }
        }
    }

    /// Invariant 3: key length is exactly 16 * (1 + 3 * depth).
    #[test]
    fn key_length_matches_formula((depth, alpha) in depth_and_alpha(), seed: u64) {
        let (prf0, prf1, prf2) = test_prfs();
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let (key_a, key_b) = generate(&prf0, &prf1, &prf2, depth, alpha, &mut rng).unwrap();

        let expected = 16 * (1 + 3 * depth as usize);
        prop_assert_eq!(key_a.to_bytes().len(), expected);
        prop_assert_eq!(key_b.to_bytes().len(), expected);
    }

    /// Invariant 4: the two keys' correction-word sections are identical.
    #[test]
    fn cw_sections_are_identical((depth, alpha) in depth_and_alpha(), seed: u64) {
        let (prf0, prf1, prf2) = test_prfs();
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let (key_a, key_b) = generate(&prf0, &prf1, &prf2, depth, alpha, &mut rng).unwrap();

        prop_assert_eq!(key_a.cw0, key_b.cw0);
        prop_assert_eq!(key_a.cw1, key_b.cw1);
        prop_assert_eq!(key_a.cw2, key_b.cw2);
    }

    /// Invariant 5: the root-level control bits XOR to 1.
    #[test]
    fn root_control_bit_invariant((depth, alpha) in depth_and_alpha(), seed: u64) {
        let (prf0, prf1, prf2) = test_prfs();
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let (key_a, key_b) = generate(&prf0, &prf1, &prf2, depth, alpha, &mut rng).unwrap();

        prop_assert!(key_a.seed.lsb() ^ key_b.seed.lsb());
    }
}

#[test]
fn depth_zero_is_rejected() {
    let (prf0, prf1, prf2) = test_prfs();
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let err = generate(&prf0, &prf1, &prf2, 0, 0, &mut rng).unwrap_err();
    assert!(matches!(err, ternary_dpf::Error::DepthOutOfRange(0)));
}

#[test]
fn alpha_past_domain_is_rejected() {
    let (prf0, prf1, prf2) = test_prfs();
    let mut rng = ChaCha20Rng::seed_from_u64(43);
    let err = generate(&prf0, &prf1, &prf2, 3, 27, &mut rng).unwrap_err();
    assert!(matches!(err, ternary_dpf::Error::DomainOverflow { .. }));
}

#[test]
fn malformed_key_length_is_rejected() {
    let bytes = vec![0u8; 10];
    let err = ternary_dpf::Key::from_bytes(&bytes, 3).unwrap_err();
    assert!(matches!(err, ternary_dpf::Error::MalformedKey { .. }));
}
