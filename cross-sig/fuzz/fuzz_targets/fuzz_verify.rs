#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use cross_sig::rsdpg::cross_rsdpg_128_fast::{Signature, VerificationKey};
use cross_sig::{CrossRsdpg128Fast, Signer, XofRng};

#[derive(Debug, Arbitrary)]
struct VerifyInput {
    key_seed: Vec<u8>,
    message: Vec<u8>,
    corruption_index: usize,
    corruption_value: u8,
    raw_signature: Vec<u8>,
}

fuzz_target!(|input: VerifyInput| {
    if input.key_seed.is_empty() {
        return;
    }

    let mut rng = XofRng::<cross_sig::Shake256Suite>::new(&input.key_seed);
    let (sk, pk) = CrossRsdpg128Fast::keygen(&mut rng).unwrap();
    let sig = CrossRsdpg128Fast::sign(&sk, &input.message, &mut rng).unwrap();
    assert!(CrossRsdpg128Fast::verify(&pk, &input.message, &sig).is_ok());

    // Any single corrupted byte must be rejected, never panic
    let mut corrupted = sig.as_bytes().to_vec();
    let idx = input.corruption_index % corrupted.len();
    corrupted[idx] ^= input.corruption_value | 1;
    let corrupted = Signature::from_bytes(&corrupted).unwrap();
    let report = CrossRsdpg128Fast::verify_detailed(&pk, &input.message, &corrupted);
    assert!(!report.accepted(), "corrupted byte {idx} accepted");
    assert!(report.to_result().is_err());

    // Arbitrary bytes of the right length must not panic
    if let Ok(raw) = Signature::from_bytes(&input.raw_signature) {
        let _ = CrossRsdpg128Fast::verify(&pk, &input.message, &raw);
    }

    // Arbitrary public keys either parse canonically or are rejected
    if let Ok(other) = VerificationKey::from_bytes(&input.key_seed) {
        let _ = CrossRsdpg128Fast::verify(&other, &input.message, &sig);
    }
});
