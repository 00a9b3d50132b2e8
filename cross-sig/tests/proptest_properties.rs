// Helpers are used by feature-gated test modules; allow dead_code
// when compiling without variant features (e.g., --no-default-features).
#![cfg_attr(
    not(any(
        feature = "rsdp-1",
        feature = "rsdp-3",
        feature = "rsdp-5",
        feature = "rsdpg-1",
        feature = "rsdpg-3",
        feature = "rsdpg-5",
    )),
    allow(dead_code)
)]

//! Property-based tests for CROSS using proptest.
//!
//! These tests verify fundamental properties of every variant family:
//! - Basic properties: roundtrip (sign/verify), key sizes, signature size
//! - Wrong key: verification with wrong public key fails
//! - Tampered message: verification with tampered message fails
//! - Tampered signature: flipping any bit of either challenge digest fails,
//!   and a digest_01 flip is reported as a commitment mismatch
//!
//! Signing runs hundreds of protocol rounds, so the case counts stay small.

use proptest::prelude::*;

/// Generate arbitrary 32-byte seeds for testing
fn arb_seed() -> impl Strategy<Value = [u8; 32]> {
    prop::array::uniform32(any::<u8>())
}

/// Generate arbitrary messages (0-128 bytes)
fn arb_message() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..128)
}

macro_rules! cross_proptest {
    ($mod_name:ident, $family:ident :: $module:ident :: $variant:ident, $feature:literal, $cases:expr) => {
        #[cfg(feature = $feature)]
        mod $mod_name {
            use super::*;
            use cross_sig::$family::$module::{Params, Signature};
            use cross_sig::{Error, ParameterSet, Signer};
            use cross_sig::$variant;
            use rand::rngs::StdRng;
            use rand::SeedableRng;

            proptest! {
                #![proptest_config(ProptestConfig::with_cases($cases))]

                /// Basic properties: roundtrip sign/verify, key sizes, signature size.
                #[test]
                fn basic_properties(seed in arb_seed(), message in arb_message()) {
                    let mut rng = StdRng::from_seed(seed);
                    let (sk, pk) = $variant::keygen(&mut rng).unwrap();

                    prop_assert_eq!(sk.as_bytes().len(), $variant::SIGNING_KEY_SIZE);
                    prop_assert_eq!(pk.as_bytes().len(), $variant::VERIFICATION_KEY_SIZE);

                    let sig = $variant::sign(&sk, &message, &mut rng).unwrap();
                    prop_assert_eq!(sig.as_bytes().len(), $variant::SIGNATURE_SIZE);

                    prop_assert!($variant::verify(&pk, &message, &sig).is_ok());
                }

                /// Verification with wrong public key fails.
                #[test]
                fn wrong_key_fails(seed1 in arb_seed(), seed2 in arb_seed(), message in arb_message()) {
                    prop_assume!(seed1 != seed2);

                    let mut rng1 = StdRng::from_seed(seed1);
                    let mut rng2 = StdRng::from_seed(seed2);

                    let (sk1, _pk1) = $variant::keygen(&mut rng1).unwrap();
                    let (_sk2, pk2) = $variant::keygen(&mut rng2).unwrap();

                    let sig = $variant::sign(&sk1, &message, &mut rng1).unwrap();
                    prop_assert!($variant::verify(&pk2, &message, &sig).is_err());
                }

                /// Verification with tampered message fails.
                #[test]
                fn tampered_message_fails(seed in arb_seed(), message in arb_message(), flip_pos in 0usize..128) {
                    prop_assume!(!message.is_empty());

                    let mut rng = StdRng::from_seed(seed);
                    let (sk, pk) = $variant::keygen(&mut rng).unwrap();

                    let sig = $variant::sign(&sk, &message, &mut rng).unwrap();

                    let mut tampered = message.clone();
                    let pos = flip_pos % tampered.len();
                    tampered[pos] ^= 0xFF;

                    prop_assert!($variant::verify(&pk, &tampered, &sig).is_err());
                }

                /// Flipping one bit of digest_01 or digest_b is rejected.
                #[test]
                fn tampered_digest_fails(seed in arb_seed(), bit in 0usize..(2 * 8 * <Params as ParameterSet>::DIGEST_BYTES)) {
                    let mut rng = StdRng::from_seed(seed);
                    let (sk, pk) = $variant::keygen(&mut rng).unwrap();
                    let sig = $variant::sign(&sk, b"digest", &mut rng).unwrap();

                    let mut bytes = sig.as_bytes().to_vec();
                    bytes[<Params as ParameterSet>::SALT_BYTES + bit / 8] ^= 1 << (bit % 8);
                    let tampered = Signature::from_bytes(&bytes).unwrap();

                    let report = $variant::verify_detailed(&pk, b"digest", &tampered);
                    prop_assert!(!report.accepted());
                    if bit < 8 * <Params as ParameterSet>::DIGEST_BYTES {
                        // digest_01 only reseeds beta; every other check still holds
                        prop_assert_eq!(report.to_result(), Err(Error::CommitmentMismatch));
                    } else {
                        prop_assert!(report.to_result().is_err());
                    }
                    prop_assert_eq!(
                        $variant::verify(&pk, b"digest", &tampered),
                        Err(Error::VerificationFailed)
                    );
                }
            }
        }
    };
}

cross_proptest!(
    cross_rsdp_128_fast_props,
    rsdp::cross_rsdp_128_fast::CrossRsdp128Fast,
    "rsdp-1",
    8
);
cross_proptest!(
    cross_rsdp_128_fast_no_trees_props,
    rsdp::cross_rsdp_128_fast_no_trees::CrossRsdp128FastNoTrees,
    "rsdp-1",
    4
);
// small sets run close to a thousand rounds, use minimal cases
cross_proptest!(
    cross_rsdp_128_small_props,
    rsdp::cross_rsdp_128_small::CrossRsdp128Small,
    "rsdp-1",
    2
);
cross_proptest!(
    cross_rsdp_192_fast_props,
    rsdp::cross_rsdp_192_fast::CrossRsdp192Fast,
    "rsdp-3",
    4
);
cross_proptest!(
    cross_rsdp_256_fast_props,
    rsdp::cross_rsdp_256_fast::CrossRsdp256Fast,
    "rsdp-5",
    4
);
cross_proptest!(
    cross_rsdpg_128_fast_props,
    rsdpg::cross_rsdpg_128_fast::CrossRsdpg128Fast,
    "rsdpg-1",
    8
);
cross_proptest!(
    cross_rsdpg_128_balanced_props,
    rsdpg::cross_rsdpg_128_balanced::CrossRsdpg128Balanced,
    "rsdpg-1",
    4
);
cross_proptest!(
    cross_rsdpg_192_fast_no_trees_props,
    rsdpg::cross_rsdpg_192_fast_no_trees::CrossRsdpg192FastNoTrees,
    "rsdpg-3",
    4
);
cross_proptest!(
    cross_rsdpg_256_fast_props,
    rsdpg::cross_rsdpg_256_fast::CrossRsdpg256Fast,
    "rsdpg-5",
    4
);
