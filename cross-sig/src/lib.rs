//! CROSS post-quantum signatures
//!
//! This crate provides a pure Rust implementation of CROSS (Codes and
//! Restricted Objects Signature Scheme), a code-based signature scheme built
//! from a zero-knowledge identification protocol over the Restricted
//! Syndrome Decoding Problem and made non-interactive with Fiat-Shamir.
//!
//! # Supported Parameter Sets
//!
//! Two problem families, three NIST categories each, three tunings each:
//!
//! | Family | Secret | Fields | Categories |
//! |--------|--------|--------|------------|
//! | RSDP  | restricted vector of length N | q = 127, z = 7 | 1, 3, 5 |
//! | RSDPG | restricted subgroup code | q = 509, z = 127 | 1, 3, 5 |
//!
//! The "fast" tuning signs quickest, "small" gives the shortest signatures
//! and "balanced" sits between them. Every fast set also comes in a
//! `NoTrees` flavour that commits to the rounds with a flat four-block hash
//! instead of a seed tree and a Merkle tree. Per-variant sizes are listed in
//! [`rsdp`] and [`rsdpg`].
//!
//! # Example
//!
//! ```rust
//! use cross_sig::CrossRsdp128Fast;
//! use cross_sig::Signer;
//!
//! let mut rng = rand::rng();
//! let (sk, pk) = CrossRsdp128Fast::keygen(&mut rng).unwrap();
//!
//! let message = b"Hello, post-quantum world!";
//! let signature = CrossRsdp128Fast::sign(&sk, message, &mut rng).unwrap();
//!
//! assert!(CrossRsdp128Fast::verify(&pk, message, &signature).is_ok());
//! ```
//!
//! # Features
//!
//! - `parallel`: run the protocol rounds on the Rayon thread pool
//! - `simd`: AVX2 syndrome kernel, selected at runtime
//! - `tracing`: `debug` events on keygen, sign and verify completion
//! - `rsdp-1`, `rsdp-3`, `rsdp-5`, `rsdpg-1`, `rsdpg-3`, `rsdpg-5`: parameter sets

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
// Clippy allowances for cryptographic code patterns
#![allow(
    clippy::many_single_char_names,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::cast_lossless,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::doc_markdown,
    clippy::wildcard_imports,
    clippy::too_many_lines,
    clippy::items_after_statements,
    clippy::needless_range_loop
)]

// alloc is available in both std and no_std environments
extern crate alloc;

/// Emit a `tracing` debug event when the `tracing` feature is on.
macro_rules! debug_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}

// Arithmetic and encoding
mod field;
mod pack;
#[cfg(feature = "simd")]
mod simd;

// Symmetric primitives
/// SHAKE-based XOF and hash suites.
pub mod hash;
mod sample;

// Commitment structures
mod merkle;
mod seed_tree;
mod tree;

mod expand;
mod parallel;

/// CROSS parameter sets.
pub mod params;
/// Deterministic XOF-backed RNG.
pub mod rng;
/// Core CROSS key generation, signing and verification.
pub mod sign;

#[cfg(feature = "any-variant")]
mod types;

// Variant modules (public for access to SigningKey, VerificationKey, Signature types)
pub mod rsdp;
pub mod rsdpg;

// Public exports
pub use expand::{Direct, Generated, SecretExpander};
pub use field::{is_restricted, Field, FqElem, FzElem, RsdpField, RsdpgField};
pub use hash::{Shake128Suite, Shake256Suite, XofSuite};
pub use params::ParameterSet;
pub use rng::XofRng;
pub use sign::VerifyReport;

// Re-export core types
pub use cross_core::{Error, Result, Signer};

// RSDP variant exports
#[cfg(feature = "rsdp-1")]
pub use rsdp::cross_rsdp_128_fast::CrossRsdp128Fast;
#[cfg(feature = "rsdp-1")]
pub use rsdp::cross_rsdp_128_fast_no_trees::CrossRsdp128FastNoTrees;
#[cfg(feature = "rsdp-1")]
pub use rsdp::cross_rsdp_128_balanced::CrossRsdp128Balanced;
#[cfg(feature = "rsdp-1")]
pub use rsdp::cross_rsdp_128_small::CrossRsdp128Small;
#[cfg(feature = "rsdp-3")]
pub use rsdp::cross_rsdp_192_fast::CrossRsdp192Fast;
#[cfg(feature = "rsdp-3")]
pub use rsdp::cross_rsdp_192_fast_no_trees::CrossRsdp192FastNoTrees;
#[cfg(feature = "rsdp-3")]
pub use rsdp::cross_rsdp_192_balanced::CrossRsdp192Balanced;
#[cfg(feature = "rsdp-3")]
pub use rsdp::cross_rsdp_192_small::CrossRsdp192Small;
#[cfg(feature = "rsdp-5")]
pub use rsdp::cross_rsdp_256_fast::CrossRsdp256Fast;
#[cfg(feature = "rsdp-5")]
pub use rsdp::cross_rsdp_256_fast_no_trees::CrossRsdp256FastNoTrees;
#[cfg(feature = "rsdp-5")]
pub use rsdp::cross_rsdp_256_balanced::CrossRsdp256Balanced;
#[cfg(feature = "rsdp-5")]
pub use rsdp::cross_rsdp_256_small::CrossRsdp256Small;

// RSDPG variant exports
#[cfg(feature = "rsdpg-1")]
pub use rsdpg::cross_rsdpg_128_fast::CrossRsdpg128Fast;
#[cfg(feature = "rsdpg-1")]
pub use rsdpg::cross_rsdpg_128_fast_no_trees::CrossRsdpg128FastNoTrees;
#[cfg(feature = "rsdpg-1")]
pub use rsdpg::cross_rsdpg_128_balanced::CrossRsdpg128Balanced;
#[cfg(feature = "rsdpg-1")]
pub use rsdpg::cross_rsdpg_128_small::CrossRsdpg128Small;
#[cfg(feature = "rsdpg-3")]
pub use rsdpg::cross_rsdpg_192_fast::CrossRsdpg192Fast;
#[cfg(feature = "rsdpg-3")]
pub use rsdpg::cross_rsdpg_192_fast_no_trees::CrossRsdpg192FastNoTrees;
#[cfg(feature = "rsdpg-3")]
pub use rsdpg::cross_rsdpg_192_balanced::CrossRsdpg192Balanced;
#[cfg(feature = "rsdpg-3")]
pub use rsdpg::cross_rsdpg_192_small::CrossRsdpg192Small;
#[cfg(feature = "rsdpg-5")]
pub use rsdpg::cross_rsdpg_256_fast::CrossRsdpg256Fast;
#[cfg(feature = "rsdpg-5")]
pub use rsdpg::cross_rsdpg_256_fast_no_trees::CrossRsdpg256FastNoTrees;
#[cfg(feature = "rsdpg-5")]
pub use rsdpg::cross_rsdpg_256_balanced::CrossRsdpg256Balanced;
#[cfg(feature = "rsdpg-5")]
pub use rsdpg::cross_rsdpg_256_small::CrossRsdpg256Small;
