//! Constant-time modular reduction for the small CROSS moduli.
//!
//! Every CROSS modulus (q = 127 or 509, z = 7 or 127) fits in 9 bits, so
//! products and lazily accumulated dot products fit comfortably in a `u32`.
//! Reduction uses a Barrett quotient estimate with a 64-bit intermediate,
//! followed by one branchless conditional subtraction.

/// Barrett multiplier `floor(2^32 / q)` for a modulus `q`.
#[inline]
pub const fn barrett_mul(q: u32) -> u64 {
    (1u64 << 32) / q as u64
}

/// Conditional subtract: returns `a - q` if `a >= q`, else `a`.
///
/// Requires `a < 2^31`. The selection is done with a mask derived from the
/// borrow bit, never with a branch.
#[inline]
pub const fn cond_sub(a: u32, q: u32) -> u32 {
    let d = a.wrapping_sub(q);
    // all ones if a < q
    let mask = 0u32.wrapping_sub(d >> 31);
    d.wrapping_add(q & mask)
}

/// Reduce any `u32` to the canonical range `[0, q)`.
///
/// `mul` must be [`barrett_mul`]`(q)`. The quotient estimate is off by at most
/// one for inputs below 2^32, so a single [`cond_sub`] finishes the job.
#[inline]
pub const fn barrett_reduce(a: u32, q: u32, mul: u64) -> u32 {
    let t = ((a as u64 * mul) >> 32) as u32;
    cond_sub(a - t * q, q)
}
