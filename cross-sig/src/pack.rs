//! Dense bit-packing of Fq and Fz vectors.
//!
//! Each value takes exactly `bits` bits, least significant bit first, with no
//! gap between values. The last byte is padded with zero bits; a canonical
//! encoding is one whose padding is zero and whose values are in range.

use subtle::{Choice, ConstantTimeEq};

/// Bytes needed for `n` values of `bits` bits each.
#[inline]
pub const fn packed_len(n: usize, bits: u32) -> usize {
    (n * bits as usize).div_ceil(8)
}

/// Pack `values` into `out`, which must be [`packed_len`] bytes long.
pub fn pack<T: Copy + Into<u32>>(out: &mut [u8], values: &[T], bits: u32) {
    debug_assert_eq!(out.len(), packed_len(values.len(), bits));
    let mask = (1u32 << bits) - 1;
    let mut acc = 0u32;
    let mut filled = 0u32;
    let mut pos = 0;
    for &v in values {
        acc |= (v.into() & mask) << filled;
        filled += bits;
        while filled >= 8 {
            out[pos] = acc as u8;
            pos += 1;
            acc >>= 8;
            filled -= 8;
        }
    }
    if filled > 0 {
        out[pos] = acc as u8;
    }
}

/// Walk `n` packed values of `bits` bits, handing each to `put`.
fn unpack_with(input: &[u8], n: usize, bits: u32, mut put: impl FnMut(usize, u32)) {
    let mask = (1u32 << bits) - 1;
    let mut bytes = input.iter();
    let mut acc = 0u32;
    let mut filled = 0u32;
    for i in 0..n {
        while filled < bits {
            acc |= u32::from(bytes.next().copied().unwrap_or(0)) << filled;
            filled += 8;
        }
        put(i, acc & mask);
        acc >>= bits;
        filled -= bits;
    }
}

/// Unpack Fq values. Out-of-range values are returned as read.
pub fn unpack_u16(out: &mut [u16], input: &[u8], bits: u32) {
    unpack_with(input, out.len(), bits, |i, v| out[i] = v as u16);
}

/// Unpack Fz values. Out-of-range values are returned as read.
pub fn unpack_u8(out: &mut [u8], input: &[u8], bits: u32) {
    unpack_with(input, out.len(), bits, |i, v| out[i] = v as u8);
}

/// Whether the unused high bits of the last byte are zero.
pub fn padding_is_zero(input: &[u8], n: usize, bits: u32) -> Choice {
    let used = (n * bits as usize) % 8;
    match input.last() {
        Some(&last) if used != 0 => (last >> used).ct_eq(&0),
        _ => Choice::from(1),
    }
}
