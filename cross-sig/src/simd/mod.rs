//! SIMD kernels for CROSS matrix arithmetic.
//!
//! The only hot loop worth vectorizing is the row accumulate behind the
//! syndrome computation. On x86_64 it runs on AVX2 when the CPU has it;
//! every other target uses the scalar loop in `field.rs`.
//!
//! # Safety
//!
//! This module contains unsafe code for SIMD intrinsics. The kernels are
//! `#[target_feature]` functions reached only after runtime detection.

#![allow(unsafe_code)]

#[cfg(target_arch = "x86_64")]
mod avx2;

cross_core::define_has_avx2!();

cross_core::define_simd_dispatch! {
    /// `acc[j] += coeff * row[j]` over 32-bit lanes.
    pub fn accumulate_row(acc: &mut [u32], coeff: u32, row: &[u16]) -> bool;
    avx2: avx2::accumulate_row(acc, coeff, row)
}
