//! CROSS parameter sets.
//!
//! Every parameter set is a zero-sized type implementing [`ParameterSet`].
//! The base numbers (code length, dimension, round counts, tree bounds and
//! sampler byte budgets) are listed per set; everything else is derived by
//! the trait's default constants so that the engine never hard-codes a size.
//!
//! | Family | Field (q, z, g) | Secret |
//! |--------|-----------------|--------|
//! | RSDP   | (127, 7, 2)     | sampled directly, length N |
//! | RSDPG  | (509, 127, 16)  | length-M seed vector expanded through W |

use crate::expand::{Direct, Generated, SecretExpander};
use crate::field::{Field, RsdpField, RsdpgField};
use crate::hash::{Shake128Suite, Shake256Suite, XofSuite};
use crate::pack::packed_len;
use crate::tree::tree_node_count;

/// Constant to add to round indices when deriving commitment hashes, so that
/// they never collide with the CSPRNG domain of the same round.
pub const HASH_DOMAIN_SEP: u16 = 32768;

/// A complete CROSS parameter set.
pub trait ParameterSet: Send + Sync + Sized + 'static {
    /// Human readable name, used in logs.
    const NAME: &'static str;

    /// Ambient and restricted field.
    type Field: Field;
    /// How the secret vector is derived from its seed.
    type Expander: SecretExpander;
    /// XOF matching the security category.
    type Xof: XofSuite;

    /// Security parameter in bits.
    const LAMBDA: usize;
    /// Code length.
    const N: usize;
    /// Code dimension.
    const K: usize;
    /// Dimension of the restricted subgroup code (RSDPG only, 0 otherwise).
    const M: usize;
    /// Number of protocol rounds.
    const T: usize;
    /// Number of rounds whose seeds are disclosed.
    const W: usize;
    /// Upper bound on disclosed tree nodes for any challenge of weight W.
    const TREE_NODES_TO_STORE: usize;
    /// Use the tree-less commitment layout.
    const FLAT: bool;

    /// Sampler budget in bits for a uniform Fq vector of length N.
    const BITS_FQ_VEC: usize;
    /// Sampler budget in bits for the T challenge scalars.
    const BITS_BETA: usize;
    /// Sampler budget in bits for the public matrix V.
    const BITS_V: usize;
    /// Sampler budget in bits for the compression matrix W (RSDPG only).
    const BITS_W: usize;
    /// Sampler budget in bits for a restricted secret or masking vector.
    const BITS_FZ_VEC: usize;
    /// Sampler budget in bits for the fixed-weight challenge string.
    const BITS_FIXED_WEIGHT: usize;

    /// Length of a round seed.
    const SEED_BYTES: usize = Self::LAMBDA / 8;
    /// Length of the master and public seeds.
    const KEYPAIR_SEED_BYTES: usize = 2 * (Self::LAMBDA / 8);
    /// Length of every digest.
    const DIGEST_BYTES: usize = 2 * (Self::LAMBDA / 8);
    /// Length of the signature salt.
    const SALT_BYTES: usize = 2 * (Self::LAMBDA / 8);

    /// Length of the syndrome, N - K.
    const SYN_LEN: usize = Self::N - Self::K;
    /// Length of the restricted vector carried in a response: N or M.
    const DISCLOSED_LEN: usize = if <Self::Expander as SecretExpander>::GENERATED {
        Self::M
    } else {
        Self::N
    };

    /// Packed size of a syndrome.
    const PACKED_SYN_BYTES: usize = packed_len(Self::SYN_LEN, <Self::Field as Field>::Q_BITS);
    /// Packed size of an Fq vector of length N.
    const PACKED_FQ_VEC_BYTES: usize = packed_len(Self::N, <Self::Field as Field>::Q_BITS);
    /// Packed size of a disclosed restricted vector.
    const PACKED_FZ_BYTES: usize =
        packed_len(Self::DISCLOSED_LEN, <Self::Field as Field>::Z_BITS);

    /// Node count of the seed tree; round domain separators start here.
    const NUM_TREE_NODES: usize = tree_node_count(Self::T);
    /// Capacity of the seed disclosure and of the Merkle proof, in nodes.
    const MAX_DISCLOSED: usize = if Self::FLAT {
        Self::W
    } else {
        Self::TREE_NODES_TO_STORE
    };
    /// Number of rounds answered with a response record.
    const RESPONSES: usize = Self::T - Self::W;

    /// Signing key size.
    const SK_BYTES: usize = Self::KEYPAIR_SEED_BYTES;
    /// Verification key size.
    const PK_BYTES: usize = Self::KEYPAIR_SEED_BYTES + Self::PACKED_SYN_BYTES;
    /// Signature size.
    const SIG_BYTES: usize = Self::SALT_BYTES
        + 2 * Self::DIGEST_BYTES
        + Self::MAX_DISCLOSED * (Self::SEED_BYTES + Self::DIGEST_BYTES)
        + Self::RESPONSES
            * (Self::PACKED_FQ_VEC_BYTES + Self::PACKED_FZ_BYTES + Self::DIGEST_BYTES);
}

/// Byte budget for a sampler given its bit budget.
#[inline]
pub(crate) const fn budget_bytes(bits: usize) -> usize {
    bits.div_ceil(8)
}

macro_rules! define_parameter_set {
    (
        $(#[$attr:meta])*
        $name:ident, $label:literal,
        family: rsdp, lambda: $lambda:expr, xof: $xof:ty,
        n: $n:expr, k: $k:expr, t: $t:expr, w: $w:expr, tree: $tree:expr,
        bits: [$fq:expr, $beta:expr, $v:expr, $fz:expr, $cw:expr]
        $(, no_trees: $flat:ident, $flat_label:literal)?
    ) => {
        define_parameter_set!(@emit $(#[$attr])* $name, $label, false,
            RsdpField, Direct, $lambda, $xof, $n, $k, 0, $t, $w, $tree,
            [$fq, $beta, $v, 0, $fz, $cw]);
        $(
            define_parameter_set!(@emit
                #[doc = concat!("Tree-less variant of [`", stringify!($name), "`].")]
                $flat, $flat_label, true,
                RsdpField, Direct, $lambda, $xof, $n, $k, 0, $t, $w, $tree,
                [$fq, $beta, $v, 0, $fz, $cw]);
        )?
    };
    (
        $(#[$attr:meta])*
        $name:ident, $label:literal,
        family: rsdpg, lambda: $lambda:expr, xof: $xof:ty,
        n: $n:expr, k: $k:expr, m: $m:expr, t: $t:expr, w: $w:expr, tree: $tree:expr,
        bits: [$fq:expr, $beta:expr, $v:expr, $wm:expr, $fz:expr, $cw:expr]
        $(, no_trees: $flat:ident, $flat_label:literal)?
    ) => {
        define_parameter_set!(@emit $(#[$attr])* $name, $label, false,
            RsdpgField, Generated, $lambda, $xof, $n, $k, $m, $t, $w, $tree,
            [$fq, $beta, $v, $wm, $fz, $cw]);
        $(
            define_parameter_set!(@emit
                #[doc = concat!("Tree-less variant of [`", stringify!($name), "`].")]
                $flat, $flat_label, true,
                RsdpgField, Generated, $lambda, $xof, $n, $k, $m, $t, $w, $tree,
                [$fq, $beta, $v, $wm, $fz, $cw]);
        )?
    };
    (@emit
        $(#[$attr:meta])*
        $name:ident, $label:literal, $flat:expr,
        $field:ty, $expander:ty, $lambda:expr, $xof:ty,
        $n:expr, $k:expr, $m:expr, $t:expr, $w:expr, $tree:expr,
        [$fq:expr, $beta:expr, $v:expr, $wm:expr, $fz:expr, $cw:expr]
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct $name;

        impl ParameterSet for $name {
            const NAME: &'static str = $label;
            type Field = $field;
            type Expander = $expander;
            type Xof = $xof;
            const LAMBDA: usize = $lambda;
            const N: usize = $n;
            const K: usize = $k;
            const M: usize = $m;
            const T: usize = $t;
            const W: usize = $w;
            const TREE_NODES_TO_STORE: usize = $tree;
            const FLAT: bool = $flat;
            const BITS_FQ_VEC: usize = $fq;
            const BITS_BETA: usize = $beta;
            const BITS_V: usize = $v;
            const BITS_W: usize = $wm;
            const BITS_FZ_VEC: usize = $fz;
            const BITS_FIXED_WEIGHT: usize = $cw;
        }
    };
}

// ============================================================================
// RSDP
// ============================================================================

define_parameter_set! {
    /// RSDP, NIST category 1, speed-oriented.
    RsdpCat1Fast, "CROSS-RSDP-128-fast",
    family: rsdp, lambda: 128, xof: Shake128Suite,
    n: 127, k: 76, t: 163, w: 85, tree: 83,
    bits: [923, 1187, 27260, 493, 1355],
    no_trees: RsdpCat1FastNoTrees, "CROSS-RSDP-128-fast-notrees"
}

define_parameter_set! {
    /// RSDP, NIST category 1, balanced.
    RsdpCat1Balanced, "CROSS-RSDP-128-balanced",
    family: rsdp, lambda: 128, xof: Shake128Suite,
    n: 127, k: 76, t: 252, w: 212, tree: 107,
    bits: [923, 1817, 27260, 493, 2102]
}

define_parameter_set! {
    /// RSDP, NIST category 1, signature-size-oriented.
    RsdpCat1Small, "CROSS-RSDP-128-small",
    family: rsdp, lambda: 128, xof: Shake128Suite,
    n: 127, k: 76, t: 960, w: 938, tree: 120,
    bits: [923, 6811, 27260, 493, 9371]
}

define_parameter_set! {
    /// RSDP, NIST category 3, speed-oriented.
    RsdpCat3Fast, "CROSS-RSDP-192-fast",
    family: rsdp, lambda: 192, xof: Shake256Suite,
    n: 187, k: 111, t: 245, w: 127, tree: 125,
    bits: [1361, 1785, 59289, 729, 2125],
    no_trees: RsdpCat3FastNoTrees, "CROSS-RSDP-192-fast-notrees"
}

define_parameter_set! {
    /// RSDP, NIST category 3, balanced.
    RsdpCat3Balanced, "CROSS-RSDP-192-balanced",
    family: rsdp, lambda: 192, xof: Shake256Suite,
    n: 187, k: 111, t: 398, w: 340, tree: 162,
    bits: [1361, 2868, 59289, 729, 3647]
}

define_parameter_set! {
    /// RSDP, NIST category 3, signature-size-oriented.
    RsdpCat3Small, "CROSS-RSDP-192-small",
    family: rsdp, lambda: 192, xof: Shake256Suite,
    n: 187, k: 111, t: 945, w: 907, tree: 177,
    bits: [1361, 6730, 59289, 729, 9332]
}

define_parameter_set! {
    /// RSDP, NIST category 5, speed-oriented.
    RsdpCat5Fast, "CROSS-RSDP-256-fast",
    family: rsdp, lambda: 256, xof: Shake256Suite,
    n: 251, k: 150, t: 327, w: 169, tree: 166,
    bits: [1827, 2383, 106427, 979, 3044],
    no_trees: RsdpCat5FastNoTrees, "CROSS-RSDP-256-fast-notrees"
}

define_parameter_set! {
    /// RSDP, NIST category 5, balanced.
    RsdpCat5Balanced, "CROSS-RSDP-256-balanced",
    family: rsdp, lambda: 256, xof: Shake256Suite,
    n: 251, k: 150, t: 507, w: 427, tree: 214,
    bits: [1827, 3658, 106427, 979, 4734]
}

define_parameter_set! {
    /// RSDP, NIST category 5, signature-size-oriented.
    RsdpCat5Small, "CROSS-RSDP-256-small",
    family: rsdp, lambda: 256, xof: Shake256Suite,
    n: 251, k: 150, t: 968, w: 912, tree: 231,
    bits: [1827, 6914, 106427, 979, 9665]
}

// ============================================================================
// RSDPG
// ============================================================================

define_parameter_set! {
    /// RSDPG, NIST category 1, speed-oriented.
    RsdpgCat1Fast, "CROSS-RSDPG-128-fast",
    family: rsdpg, lambda: 128, xof: Shake128Suite,
    n: 55, k: 36, m: 25, t: 153, w: 79, tree: 78,
    bits: [521, 1413, 6208, 5311, 199, 1264],
    no_trees: RsdpgCat1FastNoTrees, "CROSS-RSDPG-128-fast-notrees"
}

define_parameter_set! {
    /// RSDPG, NIST category 1, balanced.
    RsdpgCat1Balanced, "CROSS-RSDPG-128-balanced",
    family: rsdpg, lambda: 128, xof: Shake128Suite,
    n: 55, k: 36, m: 25, t: 243, w: 206, tree: 101,
    bits: [521, 2228, 6208, 5311, 199, 2030]
}

define_parameter_set! {
    /// RSDPG, NIST category 1, signature-size-oriented.
    RsdpgCat1Small, "CROSS-RSDPG-128-small",
    family: rsdpg, lambda: 128, xof: Shake128Suite,
    n: 55, k: 36, m: 25, t: 871, w: 850, tree: 113,
    bits: [521, 7903, 6208, 5311, 199, 8468]
}

define_parameter_set! {
    /// RSDPG, NIST category 3, speed-oriented.
    RsdpgCat3Fast, "CROSS-RSDPG-192-fast",
    family: rsdpg, lambda: 192, xof: Shake256Suite,
    n: 79, k: 48, m: 40, t: 230, w: 123, tree: 119,
    bits: [751, 2125, 13483, 11025, 317, 2003],
    no_trees: RsdpgCat3FastNoTrees, "CROSS-RSDPG-192-fast-notrees"
}

define_parameter_set! {
    /// RSDPG, NIST category 3, balanced.
    RsdpgCat3Balanced, "CROSS-RSDPG-192-balanced",
    family: rsdpg, lambda: 192, xof: Shake256Suite,
    n: 79, k: 48, m: 40, t: 255, w: 176, tree: 134,
    bits: [751, 2351, 13483, 11025, 317, 2205]
}

define_parameter_set! {
    /// RSDPG, NIST category 3, signature-size-oriented.
    RsdpgCat3Small, "CROSS-RSDPG-192-small",
    family: rsdpg, lambda: 192, xof: Shake256Suite,
    n: 79, k: 48, m: 40, t: 949, w: 914, tree: 167,
    bits: [751, 8627, 13483, 11025, 317, 9373]
}

define_parameter_set! {
    /// RSDPG, NIST category 5, speed-oriented.
    RsdpgCat5Fast, "CROSS-RSDPG-256-fast",
    family: rsdpg, lambda: 256, xof: Shake256Suite,
    n: 106, k: 69, m: 48, t: 306, w: 157, tree: 155,
    bits: [1007, 2828, 23112, 19646, 385, 2832],
    no_trees: RsdpgCat5FastNoTrees, "CROSS-RSDPG-256-fast-notrees"
}

define_parameter_set! {
    /// RSDPG, NIST category 5, balanced.
    RsdpgCat5Balanced, "CROSS-RSDPG-256-balanced",
    family: rsdpg, lambda: 256, xof: Shake256Suite,
    n: 106, k: 69, m: 48, t: 356, w: 257, tree: 183,
    bits: [1007, 3281, 23112, 19646, 385, 3330]
}

define_parameter_set! {
    /// RSDPG, NIST category 5, signature-size-oriented.
    RsdpgCat5Small, "CROSS-RSDPG-256-small",
    family: rsdpg, lambda: 256, xof: Shake256Suite,
    n: 106, k: 69, m: 48, t: 996, w: 945, tree: 219,
    bits: [1007, 9070, 23112, 19646, 385, 9947]
}
