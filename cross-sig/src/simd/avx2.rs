//! AVX2 kernels (x86_64).
//!
//! Eight 32-bit accumulators per register. Inputs are zero-extended from
//! `u16` so lane arithmetic matches the scalar wrapping semantics exactly.

use core::arch::x86_64::*;

/// `acc[j] += coeff * row[j]` for `j < min(acc.len(), row.len())`.
///
/// # Safety
///
/// Requires AVX2 support. Use `super::has_avx2()` to check availability.
#[target_feature(enable = "avx2")]
pub unsafe fn accumulate_row(acc: &mut [u32], coeff: u32, row: &[u16]) {
    let len = acc.len().min(row.len());
    let c = _mm256_set1_epi32(coeff as i32);

    let mut i = 0;
    while i + 8 <= len {
        let r = _mm_loadu_si128(row.as_ptr().add(i).cast::<__m128i>());
        let r = _mm256_cvtepu16_epi32(r);
        let a = _mm256_loadu_si256(acc.as_ptr().add(i).cast::<__m256i>());
        let sum = _mm256_add_epi32(a, _mm256_mullo_epi32(r, c));
        _mm256_storeu_si256(acc.as_mut_ptr().add(i).cast::<__m256i>(), sum);
        i += 8;
    }

    // tail
    while i < len {
        acc[i] = acc[i].wrapping_add(coeff.wrapping_mul(u32::from(row[i])));
        i += 1;
    }
}
