//! # CROSS Core
//!
//! Core traits and utilities shared by the CROSS signature crates.
//!
//! This crate provides:
//! - Common error types
//! - The [`Signer`] trait implemented by every CROSS variant
//! - Constant-time modular reduction helpers for the small CROSS moduli
//! - SIMD dispatch macros with runtime capability detection
//! - Secure memory handling with zeroize integration

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
pub mod reduce;
mod simd;
mod traits;

pub use error::{Error, Result};
pub use traits::Signer;

/// Re-export zeroize for convenience.
pub use zeroize::{Zeroize, ZeroizeOnDrop};

/// Re-export subtle for constant-time operations.
pub use subtle;

/// Re-export rand_core so downstream crates name the same RNG traits.
pub use rand_core;
