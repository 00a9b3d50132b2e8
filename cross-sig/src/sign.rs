//! CROSS key generation, signing and verification.
//!
//! One engine serves every parameter set. The signer runs T rounds of the
//! identification protocol, commits to them with a Merkle tree and a flat
//! hash, derives the challenge scalars β from the first commitment, the
//! fixed-weight challenge bits b from the responses, and then answers:
//! rounds with `b = 1` are disclosed through the seed tree and replayed by
//! the verifier, rounds with `b = 0` ship their response vectors.
//!
//! Signature layout:
//!
//! ```text
//! salt || digest_01 || digest_b
//!      || seed disclosure (MAX_DISCLOSED seeds)
//!      || Merkle proof    (MAX_DISCLOSED digests)
//!      || (T - W) x (packed y || packed sigma or delta)
//!      || (T - W) x cmt1
//! ```
//!
//! The response records of the opened rounds come first as one block and
//! their `cmt1` digests follow as a second block, rather than interleaving a
//! `(y, sigma or delta, cmt1)` triple per round. This is the field order of
//! the CROSS `sig_t` structure: `rsp_0[T-W]` then `rsp_1[T-W]`.

use core::marker::PhantomData;

use cross_core::{Error, Result};
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use crate::expand::{sample_restricted, PublicMatrices, SecretExpander};
use crate::field::{
    fq_syn_scaled_sub, fq_vec_by_matrix, fq_vec_in_range, fq_vec_pointwise_mul,
    fq_vec_scaled_add, fz_vec_in_range, is_restricted, restr_vec_by_matrix, restr_vec_sub,
    restr_vec_to_fq, Field, FqElem, FzElem,
};
use crate::hash::{hash, Xof};
use crate::merkle::{recompute_root, MerkleTree};
use crate::pack::{pack, padding_is_zero, unpack_u16, unpack_u8};
use crate::parallel::map_rounds;
use crate::params::{ParameterSet, HASH_DOMAIN_SEP};
use crate::sample::{expand_fixed_weight, sample_fq_star_vec, sample_fq_vec};
use crate::seed_tree::SeedTree;

/// Byte offsets of the signature fields.
struct Layout<P>(PhantomData<P>);

impl<P: ParameterSet> Layout<P> {
    const DIGEST_01: usize = P::SALT_BYTES;
    const DIGEST_B: usize = Self::DIGEST_01 + P::DIGEST_BYTES;
    const SEEDS: usize = Self::DIGEST_B + P::DIGEST_BYTES;
    const PROOF: usize = Self::SEEDS + P::MAX_DISCLOSED * P::SEED_BYTES;
    const RESPONSES: usize = Self::PROOF + P::MAX_DISCLOSED * P::DIGEST_BYTES;
    const RESPONSE_LEN: usize = P::PACKED_FQ_VEC_BYTES + P::PACKED_FZ_BYTES;
    const CMT1: usize = Self::RESPONSES + P::RESPONSES * Self::RESPONSE_LEN;
}

/// Domain separator keying the XOF of round `i`.
#[inline]
fn round_domain<P: ParameterSet>(i: usize) -> [u8; 2] {
    ((i + P::NUM_TREE_NODES) as u16).to_be_bytes()
}

/// Domain separator of the two commitments of round `i`.
#[inline]
fn commit_domain<P: ParameterSet>(i: usize) -> [u8; 2] {
    ((i + P::NUM_TREE_NODES) as u16 + HASH_DOMAIN_SEP).to_be_bytes()
}

fn commit0<P: ParameterSet>(out: &mut [u8], syn: &[FqElem], disclosed: &[u8], salt: &[u8], i: usize) {
    let mut packed_syn = vec![0u8; P::PACKED_SYN_BYTES];
    pack(&mut packed_syn, syn, <P::Field as Field>::Q_BITS);
    hash::<P::Xof>(out, &[&packed_syn, disclosed, salt, &commit_domain::<P>(i)]);
}

fn commit1<P: ParameterSet>(out: &mut [u8], seed: &[u8], salt: &[u8], i: usize) {
    hash::<P::Xof>(out, &[seed, salt, &commit_domain::<P>(i)]);
}

/// `digest_01 = H(root || H(cmt1_0 || ... || cmt1_{T-1}))`.
fn digest_01<P: ParameterSet>(out: &mut [u8], root: &[u8], cmt1: &[&[u8]]) {
    let mut d1 = vec![0u8; P::DIGEST_BYTES];
    hash::<P::Xof>(&mut d1, cmt1);
    hash::<P::Xof>(out, &[root, &d1]);
}

/// First challenge: `d_beta` and the T scalars β drawn from it.
fn first_challenge<P: ParameterSet>(
    message: &[u8],
    digest_01: &[u8],
    salt: &[u8],
) -> (Vec<u8>, Vec<FqElem>) {
    let mut d_m = vec![0u8; P::DIGEST_BYTES];
    hash::<P::Xof>(&mut d_m, &[message]);
    let mut d_beta = vec![0u8; P::DIGEST_BYTES];
    hash::<P::Xof>(&mut d_beta, &[&d_m, digest_01, salt]);

    let mut beta = vec![0; P::T];
    let mut xof = Xof::<P::Xof>::absorb(&[&d_beta]);
    sample_fq_star_vec::<P::Field, P::Xof>(&mut xof, &mut beta, P::BITS_BETA);
    (d_beta, beta)
}

/// Second challenge bits, one per round, exactly W of them set.
fn challenge_bits<P: ParameterSet>(digest_b: &[u8]) -> Vec<u8> {
    let mut b = vec![0u8; P::T];
    expand_fixed_weight::<P::Xof>(&mut b, P::W, digest_b, P::BITS_FIXED_WEIGHT);
    b
}

// ============================================================================
// Key material
// ============================================================================

/// Everything derived from the master seed.
struct SecretMaterial {
    seed_pub: Vec<u8>,
    mats: PublicMatrices,
    /// Restricted secret of length N.
    eta: Zeroizing<Vec<FzElem>>,
    /// Sampled seed vector: `eta` itself for RSDP, `zeta` for RSDPG.
    seed_vec: Zeroizing<Vec<FzElem>>,
}

fn expand_private_seed<P: ParameterSet>(sk_seed: &[u8]) -> SecretMaterial {
    let ks = P::KEYPAIR_SEED_BYTES;
    let mut seeds = Zeroizing::new(vec![0u8; 2 * ks]);
    Xof::<P::Xof>::absorb(&[sk_seed]).squeeze(&mut seeds);
    let (seed_e, seed_pub) = seeds.split_at(ks);

    let mats = PublicMatrices::expand::<P>(seed_pub);
    let mut seed_vec = Zeroizing::new(vec![0; P::DISCLOSED_LEN]);
    let mut eta = Zeroizing::new(vec![0; P::N]);
    let mut xof = Xof::<P::Xof>::absorb(&[seed_e]);
    sample_restricted::<P>(&mut xof, &mats.w_mat, &mut seed_vec, &mut eta);

    SecretMaterial {
        seed_pub: seed_pub.to_vec(),
        mats,
        eta,
        seed_vec,
    }
}

/// Derive the public key `seed_pub || pack(eta * [V_tr^T | I])` from a
/// master seed.
pub fn cross_keygen<P: ParameterSet>(sk_seed: &[u8]) -> Vec<u8> {
    let sm = expand_private_seed::<P>(sk_seed);
    let mut syn = vec![0; P::SYN_LEN];
    restr_vec_by_matrix::<P::Field>(&mut syn, &sm.eta, &sm.mats.v_tr, P::K);

    let mut pk = vec![0u8; P::PK_BYTES];
    pk[..P::KEYPAIR_SEED_BYTES].copy_from_slice(&sm.seed_pub);
    pack(
        &mut pk[P::KEYPAIR_SEED_BYTES..],
        &syn,
        <P::Field as Field>::Q_BITS,
    );
    debug_event!(params = P::NAME, "keygen finished");
    pk
}

/// Whether a public key has the right length and a canonical syndrome.
pub fn check_public_key<P: ParameterSet>(pk: &[u8]) -> Result<()> {
    if pk.len() != P::PK_BYTES {
        return Err(Error::InvalidKeyLength {
            expected: P::PK_BYTES,
            actual: pk.len(),
        });
    }
    let packed = &pk[P::KEYPAIR_SEED_BYTES..];
    let mut syn = vec![0; P::SYN_LEN];
    unpack_u16(&mut syn, packed, <P::Field as Field>::Q_BITS);
    let canonical = fq_vec_in_range::<P::Field>(&syn)
        & padding_is_zero(packed, P::SYN_LEN, <P::Field as Field>::Q_BITS);
    if bool::from(canonical) {
        Ok(())
    } else {
        Err(Error::MalformedInput)
    }
}

// ============================================================================
// Signing
// ============================================================================

/// Signer-side state of one round.
#[derive(Zeroize, ZeroizeOnDrop)]
struct SignRound {
    eta_tilde: Vec<FzElem>,
    u_tilde: Vec<FqElem>,
    /// Packed sigma (RSDP) or delta (RSDPG).
    disclosed: Vec<u8>,
    cmt0: Vec<u8>,
    cmt1: Vec<u8>,
}

fn sign_round<P: ParameterSet>(i: usize, seed: &[u8], salt: &[u8], sm: &SecretMaterial) -> SignRound {
    let n = P::N;
    let mut xof = Xof::<P::Xof>::absorb(&[seed, salt, &round_domain::<P>(i)]);

    let mut seed_vec_tilde = Zeroizing::new(vec![0; P::DISCLOSED_LEN]);
    let mut eta_tilde = vec![0; n];
    sample_restricted::<P>(&mut xof, &sm.mats.w_mat, &mut seed_vec_tilde, &mut eta_tilde);

    let mut delta = Zeroizing::new(vec![0; P::DISCLOSED_LEN]);
    restr_vec_sub::<P::Field>(&mut delta, &sm.seed_vec, &seed_vec_tilde);
    let mut sigma = Zeroizing::new(vec![0; n]);
    restr_vec_sub::<P::Field>(&mut sigma, &sm.eta, &eta_tilde);

    let mut u_tilde = vec![0; n];
    sample_fq_vec::<P::Field, P::Xof>(&mut xof, &mut u_tilde, P::BITS_FQ_VEC);

    // s_tilde = (g^sigma * u_tilde) [V_tr^T | I]
    let mut v = Zeroizing::new(vec![0; n]);
    restr_vec_to_fq::<P::Field>(&mut v, &sigma);
    let mut u = Zeroizing::new(vec![0; n]);
    fq_vec_pointwise_mul::<P::Field>(&mut u, &v, &u_tilde);
    let mut s_tilde = Zeroizing::new(vec![0; P::SYN_LEN]);
    fq_vec_by_matrix::<P::Field>(&mut s_tilde, &u, &sm.mats.v_tr, P::K);

    let mut disclosed = vec![0u8; P::PACKED_FZ_BYTES];
    pack(&mut disclosed, &delta, <P::Field as Field>::Z_BITS);

    let mut cmt0 = vec![0u8; P::DIGEST_BYTES];
    commit0::<P>(&mut cmt0, &s_tilde, &disclosed, salt, i);
    let mut cmt1 = vec![0u8; P::DIGEST_BYTES];
    commit1::<P>(&mut cmt1, seed, salt, i);

    SignRound {
        eta_tilde,
        u_tilde,
        disclosed,
        cmt0,
        cmt1,
    }
}

/// Sign `message` with the master seed `sk_seed`.
///
/// `root_seed` (λ/8 bytes) and `salt` (2λ/8 bytes) are the per-signature
/// randomness; the caller draws them from its entropy source.
pub fn cross_sign<P: ParameterSet>(
    sk_seed: &[u8],
    message: &[u8],
    root_seed: &[u8],
    salt: &[u8],
) -> Vec<u8> {
    let d = P::DIGEST_BYTES;
    let sm = expand_private_seed::<P>(sk_seed);
    let seeds = SeedTree::<P>::generate(root_seed, salt);

    let rounds = map_rounds(P::T, |i| sign_round::<P>(i, seeds.round_seed(i), salt, &sm));

    let mut leaves = vec![0u8; P::T * d];
    for (leaf, round) in leaves.chunks_exact_mut(d).zip(&rounds) {
        leaf.copy_from_slice(&round.cmt0);
    }
    let merkle = MerkleTree::<P>::build(&leaves);

    let mut sig = vec![0u8; P::SIG_BYTES];
    sig[..Layout::<P>::DIGEST_01].copy_from_slice(salt);
    {
        let cmt1: Vec<&[u8]> = rounds.iter().map(|r| r.cmt1.as_slice()).collect();
        digest_01::<P>(
            &mut sig[Layout::<P>::DIGEST_01..Layout::<P>::DIGEST_B],
            merkle.root(),
            &cmt1,
        );
    }

    let (d_beta, beta) = first_challenge::<P>(
        message,
        &sig[Layout::<P>::DIGEST_01..Layout::<P>::DIGEST_B],
        salt,
    );

    // y_i = u_tilde_i + beta_i * g^eta_tilde_i
    let packed_ys = map_rounds(P::T, |i| {
        let round = &rounds[i];
        let mut y = vec![0; P::N];
        fq_vec_scaled_add::<P::Field>(&mut y, &round.u_tilde, &round.eta_tilde, beta[i]);
        let mut packed = vec![0u8; P::PACKED_FQ_VEC_BYTES];
        pack(&mut packed, &y, <P::Field as Field>::Q_BITS);
        packed
    });
    {
        let mut parts: Vec<&[u8]> = packed_ys.iter().map(Vec::as_slice).collect();
        parts.push(&d_beta);
        hash::<P::Xof>(&mut sig[Layout::<P>::DIGEST_B..Layout::<P>::SEEDS], &parts);
    }
    let b = challenge_bits::<P>(&sig[Layout::<P>::DIGEST_B..Layout::<P>::SEEDS]);

    seeds.disclose(&b, &mut sig[Layout::<P>::SEEDS..Layout::<P>::PROOF]);
    merkle.proof(&b, &mut sig[Layout::<P>::PROOF..Layout::<P>::RESPONSES]);

    let opened = (0..P::T).filter(|&i| b[i] == 0);
    for (slot, i) in opened.enumerate() {
        let record = Layout::<P>::RESPONSES + slot * Layout::<P>::RESPONSE_LEN;
        let (y_part, z_part) =
            sig[record..record + Layout::<P>::RESPONSE_LEN].split_at_mut(P::PACKED_FQ_VEC_BYTES);
        y_part.copy_from_slice(&packed_ys[i]);
        z_part.copy_from_slice(&rounds[i].disclosed);

        let cmt1 = Layout::<P>::CMT1 + slot * d;
        sig[cmt1..cmt1 + d].copy_from_slice(&rounds[i].cmt1);
    }

    debug_event!(params = P::NAME, "sign finished");
    sig
}

// ============================================================================
// Verification
// ============================================================================

/// Outcome of a verification, one flag per class of check.
///
/// Every flag is computed in full before the report is built.
#[derive(Clone, Copy, Debug)]
pub struct VerifyReport {
    /// Lengths are right and every packed vector is canonical.
    pub encoding: Choice,
    /// Every disclosed restricted vector lies in the restricted subgroup.
    pub membership: Choice,
    /// Seed disclosure and Merkle proof fit the challenge bits.
    pub structure: Choice,
    /// Recomputed `digest_01` matches.
    pub digest_01: Choice,
    /// Recomputed `digest_b` matches.
    pub digest_b: Choice,
}

impl VerifyReport {
    fn malformed() -> Self {
        Self {
            encoding: Choice::from(0),
            membership: Choice::from(0),
            structure: Choice::from(0),
            digest_01: Choice::from(0),
            digest_b: Choice::from(0),
        }
    }

    /// Whether the signature is valid.
    pub fn accepted(&self) -> bool {
        bool::from(
            self.encoding & self.membership & self.structure & self.digest_01 & self.digest_b,
        )
    }

    /// Map the first failing check to its error.
    pub fn to_result(&self) -> Result<()> {
        if !bool::from(self.encoding) {
            Err(Error::MalformedInput)
        } else if !bool::from(self.membership) {
            Err(Error::RestrictedMembershipViolation)
        } else if !bool::from(self.structure) {
            Err(Error::ProofStructureMismatch)
        } else if !bool::from(self.digest_01 & self.digest_b) {
            Err(Error::CommitmentMismatch)
        } else {
            Ok(())
        }
    }
}

/// Verifier-side result of one round.
struct VerifyRound {
    packed_y: Vec<u8>,
    /// Zero for replayed rounds; their leaves come from the proof.
    cmt0: Vec<u8>,
    cmt1: Vec<u8>,
    encoding: Choice,
    membership: Choice,
}

/// Replay a round whose seed was disclosed.
fn replay_round<P: ParameterSet>(
    i: usize,
    seed: &[u8],
    salt: &[u8],
    mats: &PublicMatrices,
    beta: FqElem,
) -> VerifyRound {
    let n = P::N;
    let mut xof = Xof::<P::Xof>::absorb(&[seed, salt, &round_domain::<P>(i)]);
    let mut seed_vec_tilde = vec![0; P::DISCLOSED_LEN];
    let mut eta_tilde = vec![0; n];
    sample_restricted::<P>(&mut xof, &mats.w_mat, &mut seed_vec_tilde, &mut eta_tilde);
    let mut u_tilde = vec![0; n];
    sample_fq_vec::<P::Field, P::Xof>(&mut xof, &mut u_tilde, P::BITS_FQ_VEC);

    let mut y = vec![0; n];
    fq_vec_scaled_add::<P::Field>(&mut y, &u_tilde, &eta_tilde, beta);
    let mut packed_y = vec![0u8; P::PACKED_FQ_VEC_BYTES];
    pack(&mut packed_y, &y, <P::Field as Field>::Q_BITS);

    let mut cmt1 = vec![0u8; P::DIGEST_BYTES];
    commit1::<P>(&mut cmt1, seed, salt, i);

    VerifyRound {
        packed_y,
        cmt0: vec![0u8; P::DIGEST_BYTES],
        cmt1,
        encoding: Choice::from(1),
        membership: Choice::from(1),
    }
}

/// Recompute `cmt0` of an opened round from its response record.
fn check_response<P: ParameterSet>(
    i: usize,
    record: &[u8],
    cmt1: &[u8],
    salt: &[u8],
    mats: &PublicMatrices,
    syn: &[FqElem],
    beta: FqElem,
) -> VerifyRound {
    let n = P::N;
    let q_bits = <P::Field as Field>::Q_BITS;
    let z_bits = <P::Field as Field>::Z_BITS;
    let (packed_y, disclosed) = record.split_at(P::PACKED_FQ_VEC_BYTES);

    let mut y = vec![0; n];
    unpack_u16(&mut y, packed_y, q_bits);
    let mut delta = vec![0; P::DISCLOSED_LEN];
    unpack_u8(&mut delta, disclosed, z_bits);

    let encoding = fq_vec_in_range::<P::Field>(&y)
        & padding_is_zero(packed_y, n, q_bits)
        & padding_is_zero(disclosed, P::DISCLOSED_LEN, z_bits);

    let mut sigma = vec![0; n];
    P::Expander::expand::<P::Field>(&mut sigma, &delta, &mats.w_mat);

    // t = (g^sigma * y) [V_tr^T | I] - beta * s
    let mut v = vec![0; n];
    restr_vec_to_fq::<P::Field>(&mut v, &sigma);
    let membership = v.iter().fold(fz_vec_in_range::<P::Field>(&delta), |acc, &x| {
        acc & is_restricted::<P::Field>(x)
    });
    let mut y_tilde = vec![0; n];
    fq_vec_pointwise_mul::<P::Field>(&mut y_tilde, &v, &y);
    let mut s = vec![0; P::SYN_LEN];
    fq_vec_by_matrix::<P::Field>(&mut s, &y_tilde, &mats.v_tr, P::K);
    let mut t = vec![0; P::SYN_LEN];
    fq_syn_scaled_sub::<P::Field>(&mut t, &s, beta, syn);

    let mut cmt0 = vec![0u8; P::DIGEST_BYTES];
    commit0::<P>(&mut cmt0, &t, disclosed, salt, i);

    VerifyRound {
        packed_y: packed_y.to_vec(),
        cmt0,
        cmt1: cmt1.to_vec(),
        encoding,
        membership,
    }
}

/// Verify `sig` on `message` under `pk` and report every check.
pub fn cross_verify<P: ParameterSet>(pk: &[u8], message: &[u8], sig: &[u8]) -> VerifyReport {
    let d = P::DIGEST_BYTES;
    if sig.len() != P::SIG_BYTES || check_public_key::<P>(pk).is_err() {
        return VerifyReport::malformed();
    }

    let (seed_pub, packed_syn) = pk.split_at(P::KEYPAIR_SEED_BYTES);
    let mut syn = vec![0; P::SYN_LEN];
    unpack_u16(&mut syn, packed_syn, <P::Field as Field>::Q_BITS);
    let mats = PublicMatrices::expand::<P>(seed_pub);

    let salt = &sig[..Layout::<P>::DIGEST_01];
    let digest_01_sig = &sig[Layout::<P>::DIGEST_01..Layout::<P>::DIGEST_B];
    let digest_b_sig = &sig[Layout::<P>::DIGEST_B..Layout::<P>::SEEDS];
    let disclosed_seeds = &sig[Layout::<P>::SEEDS..Layout::<P>::PROOF];
    let proof = &sig[Layout::<P>::PROOF..Layout::<P>::RESPONSES];

    let (d_beta, beta) = first_challenge::<P>(message, digest_01_sig, salt);
    let b = challenge_bits::<P>(digest_b_sig);
    let (seeds, seeds_ok) = SeedTree::<P>::regenerate(&b, disclosed_seeds, salt);

    // response slot of every opened round
    let mut slots = vec![0usize; P::T];
    let mut next = 0;
    for (slot, &bit) in slots.iter_mut().zip(&b) {
        *slot = next;
        next += usize::from(bit == 0);
    }

    let rounds = map_rounds(P::T, |i| {
        if b[i] == 1 {
            replay_round::<P>(i, seeds.round_seed(i), salt, &mats, beta[i])
        } else {
            let record = Layout::<P>::RESPONSES + slots[i] * Layout::<P>::RESPONSE_LEN;
            let cmt1 = Layout::<P>::CMT1 + slots[i] * d;
            check_response::<P>(
                i,
                &sig[record..record + Layout::<P>::RESPONSE_LEN],
                &sig[cmt1..cmt1 + d],
                salt,
                &mats,
                &syn,
                beta[i],
            )
        }
    });

    let mut encoding = Choice::from(1);
    let mut membership = Choice::from(1);
    let mut leaves = vec![0u8; P::T * d];
    for (leaf, round) in leaves.chunks_exact_mut(d).zip(&rounds) {
        leaf.copy_from_slice(&round.cmt0);
        encoding &= round.encoding;
        membership &= round.membership;
    }

    let mut root = vec![0u8; d];
    let merkle_ok = recompute_root::<P>(&mut root, &leaves, &b, proof);

    let mut digest_01_re = vec![0u8; d];
    let cmt1: Vec<&[u8]> = rounds.iter().map(|r| r.cmt1.as_slice()).collect();
    digest_01::<P>(&mut digest_01_re, &root, &cmt1);

    let mut digest_b_re = vec![0u8; d];
    let mut parts: Vec<&[u8]> = rounds.iter().map(|r| r.packed_y.as_slice()).collect();
    parts.push(&d_beta);
    hash::<P::Xof>(&mut digest_b_re, &parts);

    let report = VerifyReport {
        encoding,
        membership,
        structure: seeds_ok & merkle_ok,
        digest_01: digest_01_re.as_slice().ct_eq(digest_01_sig),
        digest_b: digest_b_re.as_slice().ct_eq(digest_b_sig),
    };
    debug_event!(
        params = P::NAME,
        accepted = report.accepted(),
        "verify finished"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{
        RsdpCat1Balanced, RsdpCat1Fast, RsdpCat1FastNoTrees, RsdpgCat1Fast, RsdpgCat1FastNoTrees,
    };
    use rand::{Rng, RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    fn keypair<P: ParameterSet>(rng: &mut ChaCha20Rng) -> (Vec<u8>, Vec<u8>) {
        let mut sk = vec![0u8; P::SK_BYTES];
        rng.fill_bytes(&mut sk);
        let pk = cross_keygen::<P>(&sk);
        (sk, pk)
    }

    fn sign_with<P: ParameterSet>(rng: &mut ChaCha20Rng, sk: &[u8], message: &[u8]) -> Vec<u8> {
        let mut root = vec![0u8; P::SEED_BYTES];
        let mut salt = vec![0u8; P::SALT_BYTES];
        rng.fill_bytes(&mut root);
        rng.fill_bytes(&mut salt);
        cross_sign::<P>(sk, message, &root, &salt)
    }

    fn check_roundtrip<P: ParameterSet>() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let (sk, pk) = keypair::<P>(&mut rng);
        let sig = sign_with::<P>(&mut rng, &sk, b"round trip");
        assert_eq!(sig.len(), P::SIG_BYTES);
        let report = cross_verify::<P>(&pk, b"round trip", &sig);
        assert!(report.accepted(), "{}: {:?}", P::NAME, report.to_result());
        assert!(!cross_verify::<P>(&pk, b"round trip!", &sig).accepted());
    }

    #[test]
    fn test_layout_fills_signature() {
        fn check<P: ParameterSet>() {
            assert_eq!(
                Layout::<P>::CMT1 + P::RESPONSES * P::DIGEST_BYTES,
                P::SIG_BYTES,
                "{}",
                P::NAME
            );
        }
        check::<RsdpCat1Fast>();
        check::<RsdpCat1FastNoTrees>();
        check::<RsdpgCat1Fast>();
    }

    #[test]
    fn test_domains_do_not_overlap() {
        type P = RsdpCat1Fast;
        let last_round = u16::from_be_bytes(round_domain::<P>(P::T - 1));
        let first_commit = u16::from_be_bytes(commit_domain::<P>(0));
        assert!(last_round < first_commit);
        assert_eq!(u16::from_be_bytes(round_domain::<P>(0)), 330);
    }

    #[test]
    fn test_keygen_deterministic_and_canonical() {
        let sk = [7u8; 32];
        let pk1 = cross_keygen::<RsdpCat1Fast>(&sk);
        let pk2 = cross_keygen::<RsdpCat1Fast>(&sk);
        assert_eq!(pk1, pk2);
        assert_eq!(pk1.len(), RsdpCat1Fast::PK_BYTES);
        assert!(check_public_key::<RsdpCat1Fast>(&pk1).is_ok());
        assert_ne!(pk1, cross_keygen::<RsdpCat1Fast>(&[8u8; 32]));
    }

    #[test]
    fn test_roundtrip_rsdp() {
        check_roundtrip::<RsdpCat1Fast>();
        check_roundtrip::<RsdpCat1Balanced>();
    }

    #[test]
    fn test_roundtrip_rsdpg() {
        check_roundtrip::<RsdpgCat1Fast>();
    }

    #[test]
    fn test_roundtrip_flat() {
        check_roundtrip::<RsdpCat1FastNoTrees>();
        check_roundtrip::<RsdpgCat1FastNoTrees>();
    }

    #[test]
    fn test_round_identity() {
        // The verifier's t equals the signer's s_tilde when y is honest
        type F = crate::field::RsdpgField;
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let (n, k) = (55, 36);
        let v_tr: Vec<u16> = (0..k * (n - k)).map(|_| rng.random_range(0..509)).collect();
        let eta: Vec<u8> = (0..n).map(|_| rng.random_range(0..127)).collect();

        let mut syn = vec![0u16; n - k];
        restr_vec_by_matrix::<F>(&mut syn, &eta, &v_tr, k);

        for beta in [1u16, rng.random_range(1..509), 508] {
            let eta_tilde: Vec<u8> = (0..n).map(|_| rng.random_range(0..127)).collect();
            let u_tilde: Vec<u16> = (0..n).map(|_| rng.random_range(0..509)).collect();

            let mut sigma = vec![0u8; n];
            restr_vec_sub::<F>(&mut sigma, &eta, &eta_tilde);
            let mut v = vec![0u16; n];
            restr_vec_to_fq::<F>(&mut v, &sigma);
            let mut u = vec![0u16; n];
            fq_vec_pointwise_mul::<F>(&mut u, &v, &u_tilde);
            let mut s_tilde = vec![0u16; n - k];
            fq_vec_by_matrix::<F>(&mut s_tilde, &u, &v_tr, k);

            let mut y = vec![0u16; n];
            fq_vec_scaled_add::<F>(&mut y, &u_tilde, &eta_tilde, beta);
            let mut y_tilde = vec![0u16; n];
            fq_vec_pointwise_mul::<F>(&mut y_tilde, &v, &y);
            let mut s = vec![0u16; n - k];
            fq_vec_by_matrix::<F>(&mut s, &y_tilde, &v_tr, k);
            let mut t = vec![0u16; n - k];
            fq_syn_scaled_sub::<F>(&mut t, &s, beta, &syn);

            assert_eq!(t, s_tilde, "beta={beta}");
        }
    }

    fn signed<P: ParameterSet>() -> (Vec<u8>, Vec<u8>) {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let (sk, pk) = keypair::<P>(&mut rng);
        let sig = sign_with::<P>(&mut rng, &sk, b"tamper");
        (pk, sig)
    }

    #[test]
    fn test_out_of_subgroup_response() {
        type P = RsdpCat1Fast;
        let (pk, mut sig) = signed::<P>();
        let record = Layout::<P>::RESPONSES + P::PACKED_FQ_VEC_BYTES;
        let field = &mut sig[record..record + P::PACKED_FZ_BYTES];
        let mut sigma = vec![0u8; P::N];
        unpack_u8(&mut sigma, field, 3);
        sigma[0] = 7;
        pack(field, &sigma, 3);

        let report = cross_verify::<P>(&pk, b"tamper", &sig);
        assert_eq!(
            report.to_result(),
            Err(Error::RestrictedMembershipViolation)
        );
    }

    #[test]
    fn test_nonzero_response_padding() {
        type P = RsdpCat1Fast;
        let (pk, mut sig) = signed::<P>();
        // 127 * 7 bits leave 7 padding bits in the last byte of y
        let last = Layout::<P>::RESPONSES + P::PACKED_FQ_VEC_BYTES - 1;
        sig[last] |= 0x80;
        let report = cross_verify::<P>(&pk, b"tamper", &sig);
        assert_eq!(report.to_result(), Err(Error::MalformedInput));
    }

    #[test]
    fn test_nonzero_disclosure_padding() {
        // Every weight-85 cover of the 163-leaf tree has at most 82 nodes,
        // so the last seed slot is always padding.
        type P = RsdpCat1Fast;
        let (pk, mut sig) = signed::<P>();
        sig[Layout::<P>::PROOF - 1] = 1;
        let report = cross_verify::<P>(&pk, b"tamper", &sig);
        assert_eq!(report.to_result(), Err(Error::ProofStructureMismatch));

        let (pk, mut sig) = signed::<P>();
        sig[Layout::<P>::RESPONSES - 1] = 1;
        let report = cross_verify::<P>(&pk, b"tamper", &sig);
        assert_eq!(report.to_result(), Err(Error::ProofStructureMismatch));
    }

    #[test]
    fn test_wrong_lengths_are_malformed() {
        type P = RsdpCat1Fast;
        let (pk, sig) = signed::<P>();
        let report = cross_verify::<P>(&pk, b"tamper", &sig[1..]);
        assert_eq!(report.to_result(), Err(Error::MalformedInput));
        let report = cross_verify::<P>(&pk[1..], b"tamper", &sig);
        assert_eq!(report.to_result(), Err(Error::MalformedInput));
    }

    #[test]
    fn test_non_canonical_public_key() {
        type P = RsdpCat1Fast;
        let mut pk = cross_keygen::<P>(&[1u8; 32]);
        // 51 * 7 = 357 bits leave 3 padding bits
        *pk.last_mut().unwrap() |= 0x80;
        assert_eq!(check_public_key::<P>(&pk), Err(Error::MalformedInput));
    }
}
