//! Expansion of the public matrices and of restricted secret vectors.
//!
//! RSDP samples its length-N restricted vectors directly. RSDPG samples a
//! length-M seed vector `ζ` and maps it into the restricted subgroup code
//! through `ζ · [W | I]`. Both are expressed as a [`SecretExpander`] so the
//! protocol engine never branches on the family.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use crate::field::{fz_vec_by_matrix, Field, FqElem, FzElem};
use crate::hash::Xof;
use crate::params::ParameterSet;
use crate::sample::{sample_fq_vec, sample_fz_vec};

/// Maps a sampled restricted seed vector to a full-length restricted vector.
pub trait SecretExpander: Send + Sync + 'static {
    /// Whether the seed vector is shorter than N and goes through `W`.
    const GENERATED: bool;

    /// Write the length-N vector for `seed_vec` into `eta`.
    fn expand<F: Field>(eta: &mut [FzElem], seed_vec: &[FzElem], w_mat: &[FzElem]);
}

/// RSDP: the sampled vector is the secret itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct Direct;

/// RSDPG: the sampled vector is multiplied by `[W | I]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Generated;

impl SecretExpander for Direct {
    const GENERATED: bool = false;

    #[inline]
    fn expand<F: Field>(eta: &mut [FzElem], seed_vec: &[FzElem], _w_mat: &[FzElem]) {
        eta.copy_from_slice(seed_vec);
    }
}

impl SecretExpander for Generated {
    const GENERATED: bool = true;

    #[inline]
    fn expand<F: Field>(eta: &mut [FzElem], seed_vec: &[FzElem], w_mat: &[FzElem]) {
        fz_vec_by_matrix::<F>(eta, seed_vec, w_mat);
    }
}

/// Matrices derived from the public seed.
pub struct PublicMatrices {
    /// `V_tr`, K rows of N - K columns over Fq.
    pub v_tr: Vec<FqElem>,
    /// `W`, M rows of N - M columns over Fz; empty for RSDP.
    pub w_mat: Vec<FzElem>,
}

impl PublicMatrices {
    /// Expand `V_tr`, then `W` when the set uses one, from a single XOF.
    pub fn expand<P: ParameterSet>(seed_pub: &[u8]) -> Self {
        let mut xof = Xof::<P::Xof>::absorb(&[seed_pub]);
        let mut v_tr = vec![0; P::K * (P::N - P::K)];
        sample_fq_vec::<P::Field, P::Xof>(&mut xof, &mut v_tr, P::BITS_V);

        let mut w_mat = Vec::new();
        if <P::Expander as SecretExpander>::GENERATED {
            w_mat = vec![0; P::M * (P::N - P::M)];
            sample_fz_vec::<P::Field, P::Xof>(&mut xof, &mut w_mat, P::BITS_W);
        }
        Self { v_tr, w_mat }
    }
}

/// Sample a restricted seed vector and expand it.
///
/// `seed_vec` has `DISCLOSED_LEN` entries, `eta` has N.
pub fn sample_restricted<P: ParameterSet>(
    xof: &mut Xof<P::Xof>,
    w_mat: &[FzElem],
    seed_vec: &mut [FzElem],
    eta: &mut [FzElem],
) {
    sample_fz_vec::<P::Field, P::Xof>(xof, seed_vec, P::BITS_FZ_VEC);
    P::Expander::expand::<P::Field>(eta, seed_vec, w_mat);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::RsdpgField;
    use crate::params::{RsdpCat1Fast, RsdpgCat1Fast};

    #[test]
    fn test_public_matrix_sizes() {
        let rsdp = PublicMatrices::expand::<RsdpCat1Fast>(&[1u8; 32]);
        assert_eq!(rsdp.v_tr.len(), 76 * 51);
        assert!(rsdp.w_mat.is_empty());
        assert!(rsdp.v_tr.iter().all(|&x| x < 127));

        let rsdpg = PublicMatrices::expand::<RsdpgCat1Fast>(&[1u8; 32]);
        assert_eq!(rsdpg.v_tr.len(), 36 * 19);
        assert_eq!(rsdpg.w_mat.len(), 25 * 30);
        assert!(rsdpg.v_tr.iter().all(|&x| x < 509));
        assert!(rsdpg.w_mat.iter().all(|&x| x < 127));
    }

    #[test]
    fn test_public_matrices_deterministic() {
        let a = PublicMatrices::expand::<RsdpgCat1Fast>(&[3u8; 32]);
        let b = PublicMatrices::expand::<RsdpgCat1Fast>(&[3u8; 32]);
        assert_eq!(a.v_tr, b.v_tr);
        assert_eq!(a.w_mat, b.w_mat);
    }

    #[test]
    fn test_generated_expansion_is_linear() {
        // (a - b) * [W | I] == a * [W | I] - b * [W | I] mod z
        type P = RsdpgCat1Fast;
        let mats = PublicMatrices::expand::<P>(&[5u8; 32]);
        let mut xof = Xof::<<P as ParameterSet>::Xof>::absorb(&[b"zeta"]);
        let (mut a, mut ea) = (vec![0u8; P::M], vec![0u8; P::N]);
        let (mut b, mut eb) = (vec![0u8; P::M], vec![0u8; P::N]);
        sample_restricted::<P>(&mut xof, &mats.w_mat, &mut a, &mut ea);
        sample_restricted::<P>(&mut xof, &mats.w_mat, &mut b, &mut eb);

        let mut diff = vec![0u8; P::M];
        crate::field::restr_vec_sub::<RsdpgField>(&mut diff, &a, &b);
        let mut lhs = vec![0u8; P::N];
        Generated::expand::<RsdpgField>(&mut lhs, &diff, &mats.w_mat);
        let mut rhs = vec![0u8; P::N];
        crate::field::restr_vec_sub::<RsdpgField>(&mut rhs, &ea, &eb);
        assert_eq!(lhs, rhs);
    }
}
