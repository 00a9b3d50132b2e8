//! CROSS-RSDP variants.
//!
//! The secret is sampled directly as a length-N restricted vector over Fz, z = 7,
//! with the syndrome over Fq, q = 127.
//!
//! | Variant | Public key | Signature |
//! |---------|------------|-----------|
//! | CROSS-RSDP-128-fast | 77 bytes | 19,056 bytes |
//! | CROSS-RSDP-128-fast-notrees | 77 bytes | 19,152 bytes |
//! | CROSS-RSDP-128-balanced | 77 bytes | 12,912 bytes |
//! | CROSS-RSDP-128-small | 77 bytes | 10,080 bytes |
//! | CROSS-RSDP-192-fast | 115 bytes | 42,538 bytes |
//! | CROSS-RSDP-192-fast-notrees | 115 bytes | 42,682 bytes |
//! | CROSS-RSDP-192-balanced | 115 bytes | 28,222 bytes |
//! | CROSS-RSDP-192-small | 115 bytes | 23,642 bytes |
//! | CROSS-RSDP-256-fast | 153 bytes | 76,010 bytes |
//! | CROSS-RSDP-256-fast-notrees | 153 bytes | 76,298 bytes |
//! | CROSS-RSDP-256-balanced | 153 bytes | 51,056 bytes |
//! | CROSS-RSDP-256-small | 153 bytes | 43,592 bytes |

/// CROSS-RSDP-128-fast.
#[cfg(feature = "rsdp-1")]
pub mod cross_rsdp_128_fast {
    crate::types::define_cross_variant! {
        variant_name: CrossRsdp128Fast,
        params: crate::params::RsdpCat1Fast,
        sk_size: 32,
        pk_size: 77,
        sig_size: 19056
    }
}

/// CROSS-RSDP-128-fast-notrees.
#[cfg(feature = "rsdp-1")]
pub mod cross_rsdp_128_fast_no_trees {
    crate::types::define_cross_variant! {
        variant_name: CrossRsdp128FastNoTrees,
        params: crate::params::RsdpCat1FastNoTrees,
        sk_size: 32,
        pk_size: 77,
        sig_size: 19152
    }
}

/// CROSS-RSDP-128-balanced.
#[cfg(feature = "rsdp-1")]
pub mod cross_rsdp_128_balanced {
    crate::types::define_cross_variant! {
        variant_name: CrossRsdp128Balanced,
        params: crate::params::RsdpCat1Balanced,
        sk_size: 32,
        pk_size: 77,
        sig_size: 12912
    }
}

/// CROSS-RSDP-128-small.
#[cfg(feature = "rsdp-1")]
pub mod cross_rsdp_128_small {
    crate::types::define_cross_variant! {
        variant_name: CrossRsdp128Small,
        params: crate::params::RsdpCat1Small,
        sk_size: 32,
        pk_size: 77,
        sig_size: 10080
    }
}

/// CROSS-RSDP-192-fast.
#[cfg(feature = "rsdp-3")]
pub mod cross_rsdp_192_fast {
    crate::types::define_cross_variant! {
        variant_name: CrossRsdp192Fast,
        params: crate::params::RsdpCat3Fast,
        sk_size: 48,
        pk_size: 115,
        sig_size: 42538
    }
}

/// CROSS-RSDP-192-fast-notrees.
#[cfg(feature = "rsdp-3")]
pub mod cross_rsdp_192_fast_no_trees {
    crate::types::define_cross_variant! {
        variant_name: CrossRsdp192FastNoTrees,
        params: crate::params::RsdpCat3FastNoTrees,
        sk_size: 48,
        pk_size: 115,
        sig_size: 42682
    }
}

/// CROSS-RSDP-192-balanced.
#[cfg(feature = "rsdp-3")]
pub mod cross_rsdp_192_balanced {
    crate::types::define_cross_variant! {
        variant_name: CrossRsdp192Balanced,
        params: crate::params::RsdpCat3Balanced,
        sk_size: 48,
        pk_size: 115,
        sig_size: 28222
    }
}

/// CROSS-RSDP-192-small.
#[cfg(feature = "rsdp-3")]
pub mod cross_rsdp_192_small {
    crate::types::define_cross_variant! {
        variant_name: CrossRsdp192Small,
        params: crate::params::RsdpCat3Small,
        sk_size: 48,
        pk_size: 115,
        sig_size: 23642
    }
}

/// CROSS-RSDP-256-fast.
#[cfg(feature = "rsdp-5")]
pub mod cross_rsdp_256_fast {
    crate::types::define_cross_variant! {
        variant_name: CrossRsdp256Fast,
        params: crate::params::RsdpCat5Fast,
        sk_size: 64,
        pk_size: 153,
        sig_size: 76010
    }
}

/// CROSS-RSDP-256-fast-notrees.
#[cfg(feature = "rsdp-5")]
pub mod cross_rsdp_256_fast_no_trees {
    crate::types::define_cross_variant! {
        variant_name: CrossRsdp256FastNoTrees,
        params: crate::params::RsdpCat5FastNoTrees,
        sk_size: 64,
        pk_size: 153,
        sig_size: 76298
    }
}

/// CROSS-RSDP-256-balanced.
#[cfg(feature = "rsdp-5")]
pub mod cross_rsdp_256_balanced {
    crate::types::define_cross_variant! {
        variant_name: CrossRsdp256Balanced,
        params: crate::params::RsdpCat5Balanced,
        sk_size: 64,
        pk_size: 153,
        sig_size: 51056
    }
}

/// CROSS-RSDP-256-small.
#[cfg(feature = "rsdp-5")]
pub mod cross_rsdp_256_small {
    crate::types::define_cross_variant! {
        variant_name: CrossRsdp256Small,
        params: crate::params::RsdpCat5Small,
        sk_size: 64,
        pk_size: 153,
        sig_size: 43592
    }
}
