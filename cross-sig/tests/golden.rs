//! Reproducible vectors driven by `XofRng`.
//!
//! The entropy stream is SHAKE256 over the fixed seed below, so the key and
//! the per-signature randomness are pinned byte for byte. Public keys are
//! pinned in full; signatures are pinned through their SHAKE256 digest.

#![cfg(all(feature = "rsdp-1", feature = "rsdpg-5"))]

use cross_sig::hash::hash;
use cross_sig::rsdp::cross_rsdp_128_fast::{Signature, VerificationKey};
use cross_sig::{
    CrossRsdp128Fast, CrossRsdp128FastNoTrees, CrossRsdpg256Fast, Error, Shake256Suite, Signer,
    XofRng,
};
use rand_core::{TryCryptoRng, TryRngCore};

const ENTROPY_SEED: &[u8] = b"012345678912345\0";
const MESSAGE: &[u8] = b"Signme!\0";

const RSDP_128_SK: &str = "8e75c0b25fa034c24366ab34b5bdf9922206124c6925a4ef2e18da1138d8de8f";
const RSDP_128_PK: &str = concat!(
    "d053285b12fe57cef106834a88617f77a813b7ce34ac3c43a7e4a500cea4574e",
    "118f388d8c5fdbaae464724617628f9c1ad890a7bf63210e42031991f8656555",
    "1a234c61889142823243c00915"
);

fn hex(s: &str) -> Vec<u8> {
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
        .collect()
}

fn golden_rng() -> XofRng {
    XofRng::new(ENTROPY_SEED)
}

/// SHAKE256 digest of a signature, 32 bytes.
fn sig_digest(sig: &[u8]) -> Vec<u8> {
    let mut out = vec![0u8; 32];
    hash::<Shake256Suite>(&mut out, &[sig]);
    out
}

#[test]
fn test_rsdp_128_fast_keypair() {
    let (sk, pk) = CrossRsdp128Fast::keygen(&mut golden_rng()).unwrap();
    assert_eq!(sk.as_bytes(), hex(RSDP_128_SK));
    assert_eq!(pk.as_bytes(), hex(RSDP_128_PK));
}

#[test]
fn test_rsdp_128_fast_signature() {
    let mut rng = golden_rng();
    let (sk, pk) = CrossRsdp128Fast::keygen(&mut rng).unwrap();
    let sig = CrossRsdp128Fast::sign(&sk, MESSAGE, &mut rng).unwrap();
    assert_eq!(sig.as_bytes().len(), 19056);

    // The salt is the last 32 bytes drawn after the 32-byte key and 16-byte root seed
    assert_eq!(
        &sig.as_bytes()[..64],
        hex(concat!(
            "58fd549ba89164154b289f586923075d764b6b188e20e57f3e1e59375250d1ff",
            "1d5a68b7e460895fa81bb12b31f90f82614aab6021702086646fcbf4667b7214"
        ))
    );
    assert_eq!(
        sig_digest(sig.as_bytes()),
        hex("640b4d662fac3b5805bdc734af3391aba4c604bb25808b04a29f14d4e827e399")
    );

    // A stored signature still verifies after a trip through bytes
    let stored = Signature::from_bytes(sig.as_bytes()).unwrap();
    let pk = VerificationKey::from_bytes(pk.as_bytes()).unwrap();
    assert!(CrossRsdp128Fast::verify(&pk, MESSAGE, &stored).is_ok());
}

#[test]
fn test_rsdp_128_fast_no_trees_signature() {
    let mut rng = golden_rng();
    let (sk, pk) = CrossRsdp128FastNoTrees::keygen(&mut rng).unwrap();
    assert_eq!(pk.as_bytes(), hex(RSDP_128_PK));

    let sig = CrossRsdp128FastNoTrees::sign(&sk, MESSAGE, &mut rng).unwrap();
    assert_eq!(sig.as_bytes().len(), 19152);
    assert_eq!(
        &sig.as_bytes()[32..64],
        hex("70515fdda9a5e252047d0c84ac57b9dae483cfb72b42c08a72eec3d5ca5c4dfe")
    );
    assert_eq!(
        sig_digest(sig.as_bytes()),
        hex("87274ac8fa00f940233ef23ec51f0955921a8e5d56d3b386f75f5b74e029f456")
    );
    assert!(CrossRsdp128FastNoTrees::verify(&pk, MESSAGE, &sig).is_ok());
}

#[test]
fn test_rsdpg_256_fast_vectors() {
    let mut rng = golden_rng();
    let (sk, pk) = CrossRsdpg256Fast::keygen(&mut rng).unwrap();
    assert_eq!(
        sk.as_bytes(),
        hex(concat!(
            "8e75c0b25fa034c24366ab34b5bdf9922206124c6925a4ef2e18da1138d8de8f",
            "571b4d3c4feedf528f913e7845d2b06558fd549ba89164154b289f586923075d"
        ))
    );
    assert_eq!(
        pk.as_bytes(),
        hex(concat!(
            "b0f6a070f47d7a0de158743ed74728380e3cba3f5e1b407610b5c5bf7be90b73",
            "f24b305ce9c18d4632b0473816250762c8a5c813f54f99b26dfe2075772c96ee",
            "7a2129bfd6bb9f69156f70fd3b9042e41218e9701a5ce0dcb409b885582b1fc7",
            "ef1b10f285999899ed01"
        ))
    );

    let sig = CrossRsdpg256Fast::sign(&sk, MESSAGE, &mut rng).unwrap();
    assert_eq!(sig.as_bytes().len(), 48746);
    assert_eq!(
        &sig.as_bytes()[..64],
        hex(concat!(
            "ec7342e699b206101be1b244706d664f5ef0bf4e2997f80874d70cc573fcc409",
            "6a13936c4c9d215ce7f24a5bb1ddfb4c5c23d11859fb6bbbfb6d8d33edfc672b"
        ))
    );
    assert_eq!(
        sig_digest(sig.as_bytes()),
        hex("9a82257a22204b707dc25ba30de205075ecd111903b62c106dc4516626b5e0af")
    );
    assert!(CrossRsdpg256Fast::verify(&pk, MESSAGE, &sig).is_ok());
}

#[test]
fn test_tree_modes_share_keys() {
    // Only the commitment layout differs between the two fast flavours
    let (_, pk_tree) = CrossRsdp128Fast::keygen(&mut golden_rng()).unwrap();
    let (_, pk_flat) = CrossRsdp128FastNoTrees::keygen(&mut golden_rng()).unwrap();
    assert_eq!(pk_tree.as_bytes(), pk_flat.as_bytes());
}

/// Entropy source that always fails.
struct FailingRng;

impl TryRngCore for FailingRng {
    type Error = core::fmt::Error;

    fn try_next_u32(&mut self) -> Result<u32, Self::Error> {
        Err(core::fmt::Error)
    }

    fn try_next_u64(&mut self) -> Result<u64, Self::Error> {
        Err(core::fmt::Error)
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), Self::Error> {
        Err(core::fmt::Error)
    }
}

impl TryCryptoRng for FailingRng {}

#[test]
fn test_entropy_failure() {
    assert_eq!(
        CrossRsdp128Fast::keygen(&mut FailingRng).err(),
        Some(Error::EntropyUnavailable)
    );

    let (sk, _) = CrossRsdp128Fast::keygen(&mut golden_rng()).unwrap();
    assert_eq!(
        CrossRsdp128Fast::sign(&sk, MESSAGE, &mut FailingRng).err(),
        Some(Error::EntropyUnavailable)
    );
}
