//! Arithmetic over Fq and the restricted subgroup of order z.
//!
//! Elements of Fq are stored as `u16`, restricted exponents as `u8`. A
//! restricted exponent `e` stands for the field element `g^e mod q`.
//! Everything here is data-independent: reductions go through Barrett with a
//! branchless final subtraction and membership tests never exit early.

use cross_core::reduce::{barrett_mul, barrett_reduce};
use subtle::{Choice, ConstantTimeEq, ConstantTimeLess};

#[cfg(not(feature = "std"))]
use alloc::vec;

/// Element of Fq.
pub type FqElem = u16;
/// Element of Fz, a restricted exponent.
pub type FzElem = u8;

/// Largest syndrome length across all parameter sets (N - K = 101).
pub const MAX_SYN_LEN: usize = 104;

/// Number of bits needed to write `n`, with `bits_to_represent(0) == 1`.
#[inline]
pub const fn bits_to_represent(n: usize) -> u32 {
    if n == 0 {
        1
    } else {
        usize::BITS - n.leading_zeros()
    }
}

/// A prime field Fq together with its restricted subgroup ⟨g⟩ of order z.
pub trait Field: Send + Sync + 'static {
    /// Field modulus.
    const Q: u16;
    /// Order of the restricted subgroup; divides `Q - 1`.
    const Z: u8;
    /// Generator of the restricted subgroup.
    const G: u16;

    /// Bits per packed Fq element.
    const Q_BITS: u32 = bits_to_represent(Self::Q as usize - 1);
    /// Bits per draw when sampling from Fq*.
    const Q_STAR_BITS: u32 = bits_to_represent(Self::Q as usize - 2);
    /// Bits per packed restricted exponent.
    const Z_BITS: u32 = bits_to_represent(Self::Z as usize - 1);

    /// Barrett multiplier for `Q`.
    const Q_MUL: u64 = barrett_mul(Self::Q as u32);
    /// Barrett multiplier for `Z`.
    const Z_MUL: u64 = barrett_mul(Self::Z as u32);

    /// Reduce into `[0, Q)`.
    #[inline]
    fn fq_red(x: u32) -> FqElem {
        barrett_reduce(x, u32::from(Self::Q), Self::Q_MUL) as FqElem
    }

    /// Reduce into `[0, Z)`.
    #[inline]
    fn fz_red(x: u32) -> FzElem {
        barrett_reduce(x, u32::from(Self::Z), Self::Z_MUL) as FzElem
    }

    /// Map a restricted exponent to `g^e mod q`.
    ///
    /// `e` must be below `Z`. The default runs a fixed-length
    /// square-and-multiply whose control flow ignores `e`.
    #[inline]
    fn restr_to_val(e: FzElem) -> FqElem {
        restr_pow::<Self>(e)
    }
}

/// Fixed-length square-and-multiply computing `g^e mod q`.
#[inline]
pub fn restr_pow<F: Field + ?Sized>(e: FzElem) -> FqElem {
    let mut res: u32 = 1;
    let mut base = u32::from(F::G);
    for bit in 0..F::Z_BITS {
        let mask = 0u32.wrapping_sub(u32::from(e >> bit) & 1);
        let prod = u32::from(F::fq_red(res * base));
        res = (prod & mask) | (res & !mask);
        base = u32::from(F::fq_red(base * base));
    }
    res as FqElem
}

/// RSDP field: q = 127, z = 7, g = 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RsdpField;

/// Byte `e` holds `2^e mod 127` for `e` in `0..7`.
const RSDP_RESTR_TABLE: u64 = 0x0140_2010_0804_0201;

impl Field for RsdpField {
    const Q: u16 = 127;
    const Z: u8 = 7;
    const G: u16 = 2;

    #[inline]
    fn restr_to_val(e: FzElem) -> FqElem {
        ((RSDP_RESTR_TABLE >> (8 * u32::from(e))) & 0xFF) as FqElem
    }
}

/// RSDPG field: q = 509, z = 127, g = 16.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RsdpgField;

impl Field for RsdpgField {
    const Q: u16 = 509;
    const Z: u8 = 127;
    const G: u16 = 16;
}

// ============================================================================
// Scalar predicates
// ============================================================================

/// Whether `x` lies in the restricted subgroup ⟨g⟩.
///
/// Compares against every subgroup element and ORs the results.
pub fn is_restricted<F: Field>(x: FqElem) -> Choice {
    let mut found = Choice::from(0);
    for e in 0..F::Z {
        found |= x.ct_eq(&F::restr_to_val(e));
    }
    found
}

/// Whether every entry of `v` is a valid restricted exponent.
pub fn fz_vec_in_range<F: Field>(v: &[FzElem]) -> Choice {
    v.iter()
        .fold(Choice::from(1), |acc, &x| acc & x.ct_lt(&F::Z))
}

/// Whether every entry of `v` is a canonical Fq element.
pub fn fq_vec_in_range<F: Field>(v: &[FqElem]) -> Choice {
    v.iter()
        .fold(Choice::from(1), |acc, &x| acc & x.ct_lt(&F::Q))
}

// ============================================================================
// Vector operations
// ============================================================================

/// `out[i] = g^e[i]`.
pub fn restr_vec_to_fq<F: Field>(out: &mut [FqElem], e: &[FzElem]) {
    debug_assert_eq!(out.len(), e.len());
    for (o, &x) in out.iter_mut().zip(e) {
        *o = F::restr_to_val(x);
    }
}

/// `out[i] = a[i] * b[i] mod q`.
pub fn fq_vec_pointwise_mul<F: Field>(out: &mut [FqElem], a: &[FqElem], b: &[FqElem]) {
    debug_assert!(out.len() == a.len() && a.len() == b.len());
    for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
        *o = F::fq_red(u32::from(x) * u32::from(y));
    }
}

/// `out[i] = a[i] - b[i] mod z`.
pub fn restr_vec_sub<F: Field>(out: &mut [FzElem], a: &[FzElem], b: &[FzElem]) {
    debug_assert!(out.len() == a.len() && a.len() == b.len());
    let z = u32::from(F::Z);
    for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
        *o = F::fz_red(u32::from(x) + z - u32::from(y));
    }
}

/// `out[i] = u[i] + beta * g^e[i] mod q`.
pub fn fq_vec_scaled_add<F: Field>(
    out: &mut [FqElem],
    u: &[FqElem],
    e: &[FzElem],
    beta: FqElem,
) {
    debug_assert!(out.len() == u.len() && u.len() == e.len());
    let beta = u32::from(beta);
    for ((o, &ui), &ei) in out.iter_mut().zip(u).zip(e) {
        let t = u32::from(F::restr_to_val(ei)) * beta;
        *o = F::fq_red(u32::from(ui) + t);
    }
}

/// `out[i] = s[i] - beta * p[i] mod q`.
pub fn fq_syn_scaled_sub<F: Field>(
    out: &mut [FqElem],
    s: &[FqElem],
    beta: FqElem,
    p: &[FqElem],
) {
    debug_assert!(out.len() == s.len() && s.len() == p.len());
    let q = u32::from(F::Q);
    let beta = u32::from(beta);
    for ((o, &si), &pi) in out.iter_mut().zip(s).zip(p) {
        // beta * p < q^2, so adding q^2 keeps the difference non-negative
        *o = F::fq_red(u32::from(si) + q * q - beta * u32::from(pi));
    }
}

/// `acc[j] += coeff * row[j]` with wrapping 32-bit lanes.
#[inline]
pub(crate) fn accumulate_row(acc: &mut [u32], coeff: u32, row: &[FqElem]) {
    #[cfg(feature = "simd")]
    if crate::simd::accumulate_row(acc, coeff, row) {
        return;
    }
    accumulate_row_scalar(acc, coeff, row);
}

/// Portable version of [`accumulate_row`].
#[inline]
pub(crate) fn accumulate_row_scalar(acc: &mut [u32], coeff: u32, row: &[FqElem]) {
    for (a, &r) in acc.iter_mut().zip(row) {
        *a = a.wrapping_add(coeff.wrapping_mul(u32::from(r)));
    }
}

/// Syndrome of `x` under the systematic parity-check matrix `[V_tr^T | I]`.
///
/// `v_tr` is row-major with `k` rows of `out.len()` columns, and
/// `out[j] = x[k + j] + sum_i x[i] * v_tr[i][j] mod q`.
pub fn fq_vec_by_matrix<F: Field>(out: &mut [FqElem], x: &[FqElem], v_tr: &[FqElem], k: usize) {
    let cols = out.len();
    debug_assert!(cols <= MAX_SYN_LEN);
    debug_assert_eq!(x.len(), k + cols);
    debug_assert_eq!(v_tr.len(), k * cols);

    // Lazy accumulation: k * (q - 1)^2 + q stays far below 2^32.
    let mut acc = [0u32; MAX_SYN_LEN];
    let acc = &mut acc[..cols];
    for (a, &xi) in acc.iter_mut().zip(&x[k..]) {
        *a = u32::from(xi);
    }
    for (row, &xi) in v_tr.chunks_exact(cols).zip(&x[..k]) {
        accumulate_row(acc, u32::from(xi), row);
    }
    for (o, &a) in out.iter_mut().zip(acc.iter()) {
        *o = F::fq_red(a);
    }
}

/// Syndrome of the restricted vector `e`: embed through `g^e`, then
/// multiply by `[V_tr^T | I]`.
pub fn restr_vec_by_matrix<F: Field>(out: &mut [FqElem], e: &[FzElem], v_tr: &[FqElem], k: usize) {
    let mut x = vec![0 as FqElem; e.len()];
    restr_vec_to_fq::<F>(&mut x, e);
    fq_vec_by_matrix::<F>(out, &x, v_tr, k);
}

/// Expand a length-M restricted vector into length N through `[W | I]`.
///
/// `w` is row-major with `z.len()` rows of `out.len() - z.len()` columns;
/// `out[j] = sum_i z[i] * w[i][j] mod z` for the first `N - M` positions and
/// `z` itself fills the tail.
pub fn fz_vec_by_matrix<F: Field>(out: &mut [FzElem], z: &[FzElem], w: &[FzElem]) {
    let m = z.len();
    let cols = out.len() - m;
    debug_assert_eq!(w.len(), m * cols);

    let mut acc = vec![0u32; cols];
    for (row, &zi) in w.chunks_exact(cols).zip(z) {
        let zi = u32::from(zi);
        for (a, &wij) in acc.iter_mut().zip(row) {
            *a += zi * u32::from(wij);
        }
    }
    for (o, &a) in out[..cols].iter_mut().zip(acc.iter()) {
        *o = F::fz_red(a);
    }
    out[cols..].copy_from_slice(z);
}
