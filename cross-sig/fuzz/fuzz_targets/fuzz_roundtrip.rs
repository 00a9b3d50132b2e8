#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use cross_sig::{CrossRsdp128Fast, CrossRsdpg128FastNoTrees, Signer, XofRng};

#[derive(Debug, Arbitrary)]
struct RoundtripInput {
    key_seed: Vec<u8>,
    message: Vec<u8>,
    flat: bool,
}

fn roundtrip<S: Signer>(input: &RoundtripInput)
where
    S::Signature: AsRef<[u8]>,
{
    let mut rng = XofRng::<cross_sig::Shake256Suite>::new(&input.key_seed);
    let (sk, pk) = S::keygen(&mut rng).unwrap();

    let sig = S::sign(&sk, &input.message, &mut rng).unwrap();
    assert_eq!(sig.as_ref().len(), S::SIGNATURE_SIZE);

    // Verification with correct key and message should always succeed
    assert!(
        S::verify(&pk, &input.message, &sig).is_ok(),
        "roundtrip verification should always succeed"
    );

    let mut wrong_message = input.message.clone();
    wrong_message.push(0x5A);
    assert!(
        S::verify(&pk, &wrong_message, &sig).is_err(),
        "verification with wrong message should fail"
    );
}

fuzz_target!(|input: RoundtripInput| {
    if input.key_seed.is_empty() {
        return;
    }
    if input.flat {
        roundtrip::<CrossRsdpg128FastNoTrees>(&input);
    } else {
        roundtrip::<CrossRsdp128Fast>(&input);
    }
});
