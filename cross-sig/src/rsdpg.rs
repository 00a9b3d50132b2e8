//! CROSS-RSDPG variants.
//!
//! The secret is a length-M vector mapped into the restricted subgroup code
//! through the public matrix W, over Fz, z = 127, with the syndrome over
//! Fq, q = 509. Keys and signatures are smaller than CROSS-RSDP at the cost of
//! one extra matrix expansion per round.
//!
//! | Variant | Public key | Signature |
//! |---------|------------|-----------|
//! | CROSS-RSDPG-128-fast | 54 bytes | 12,424 bytes |
//! | CROSS-RSDPG-128-fast-notrees | 54 bytes | 12,472 bytes |
//! | CROSS-RSDPG-128-balanced | 54 bytes | 9,236 bytes |
//! | CROSS-RSDPG-128-small | 54 bytes | 7,956 bytes |
//! | CROSS-RSDPG-192-fast | 83 bytes | 27,116 bytes |
//! | CROSS-RSDPG-192-fast-notrees | 83 bytes | 27,404 bytes |
//! | CROSS-RSDPG-192-balanced | 83 bytes | 23,380 bytes |
//! | CROSS-RSDPG-192-small | 83 bytes | 18,188 bytes |
//! | CROSS-RSDPG-256-fast | 106 bytes | 48,746 bytes |
//! | CROSS-RSDPG-256-fast-notrees | 106 bytes | 48,938 bytes |
//! | CROSS-RSDPG-256-balanced | 106 bytes | 40,134 bytes |
//! | CROSS-RSDPG-256-small | 106 bytes | 32,742 bytes |

/// CROSS-RSDPG-128-fast.
#[cfg(feature = "rsdpg-1")]
pub mod cross_rsdpg_128_fast {
    crate::types::define_cross_variant! {
        variant_name: CrossRsdpg128Fast,
        params: crate::params::RsdpgCat1Fast,
        sk_size: 32,
        pk_size: 54,
        sig_size: 12424
    }
}

/// CROSS-RSDPG-128-fast-notrees.
#[cfg(feature = "rsdpg-1")]
pub mod cross_rsdpg_128_fast_no_trees {
    crate::types::define_cross_variant! {
        variant_name: CrossRsdpg128FastNoTrees,
        params: crate::params::RsdpgCat1FastNoTrees,
        sk_size: 32,
        pk_size: 54,
        sig_size: 12472
    }
}

/// CROSS-RSDPG-128-balanced.
#[cfg(feature = "rsdpg-1")]
pub mod cross_rsdpg_128_balanced {
    crate::types::define_cross_variant! {
        variant_name: CrossRsdpg128Balanced,
        params: crate::params::RsdpgCat1Balanced,
        sk_size: 32,
        pk_size: 54,
        sig_size: 9236
    }
}

/// CROSS-RSDPG-128-small.
#[cfg(feature = "rsdpg-1")]
pub mod cross_rsdpg_128_small {
    crate::types::define_cross_variant! {
        variant_name: CrossRsdpg128Small,
        params: crate::params::RsdpgCat1Small,
        sk_size: 32,
        pk_size: 54,
        sig_size: 7956
    }
}

/// CROSS-RSDPG-192-fast.
#[cfg(feature = "rsdpg-3")]
pub mod cross_rsdpg_192_fast {
    crate::types::define_cross_variant! {
        variant_name: CrossRsdpg192Fast,
        params: crate::params::RsdpgCat3Fast,
        sk_size: 48,
        pk_size: 83,
        sig_size: 27116
    }
}

/// CROSS-RSDPG-192-fast-notrees.
#[cfg(feature = "rsdpg-3")]
pub mod cross_rsdpg_192_fast_no_trees {
    crate::types::define_cross_variant! {
        variant_name: CrossRsdpg192FastNoTrees,
        params: crate::params::RsdpgCat3FastNoTrees,
        sk_size: 48,
        pk_size: 83,
        sig_size: 27404
    }
}

/// CROSS-RSDPG-192-balanced.
#[cfg(feature = "rsdpg-3")]
pub mod cross_rsdpg_192_balanced {
    crate::types::define_cross_variant! {
        variant_name: CrossRsdpg192Balanced,
        params: crate::params::RsdpgCat3Balanced,
        sk_size: 48,
        pk_size: 83,
        sig_size: 23380
    }
}

/// CROSS-RSDPG-192-small.
#[cfg(feature = "rsdpg-3")]
pub mod cross_rsdpg_192_small {
    crate::types::define_cross_variant! {
        variant_name: CrossRsdpg192Small,
        params: crate::params::RsdpgCat3Small,
        sk_size: 48,
        pk_size: 83,
        sig_size: 18188
    }
}

/// CROSS-RSDPG-256-fast.
#[cfg(feature = "rsdpg-5")]
pub mod cross_rsdpg_256_fast {
    crate::types::define_cross_variant! {
        variant_name: CrossRsdpg256Fast,
        params: crate::params::RsdpgCat5Fast,
        sk_size: 64,
        pk_size: 106,
        sig_size: 48746
    }
}

/// CROSS-RSDPG-256-fast-notrees.
#[cfg(feature = "rsdpg-5")]
pub mod cross_rsdpg_256_fast_no_trees {
    crate::types::define_cross_variant! {
        variant_name: CrossRsdpg256FastNoTrees,
        params: crate::params::RsdpgCat5FastNoTrees,
        sk_size: 64,
        pk_size: 106,
        sig_size: 48938
    }
}

/// CROSS-RSDPG-256-balanced.
#[cfg(feature = "rsdpg-5")]
pub mod cross_rsdpg_256_balanced {
    crate::types::define_cross_variant! {
        variant_name: CrossRsdpg256Balanced,
        params: crate::params::RsdpgCat5Balanced,
        sk_size: 64,
        pk_size: 106,
        sig_size: 40134
    }
}

/// CROSS-RSDPG-256-small.
#[cfg(feature = "rsdpg-5")]
pub mod cross_rsdpg_256_small {
    crate::types::define_cross_variant! {
        variant_name: CrossRsdpg256Small,
        params: crate::params::RsdpgCat5Small,
        sk_size: 64,
        pk_size: 106,
        sig_size: 32742
    }
}
