//! Rejection samplers over a SHAKE bit stream.
//!
//! All samplers share one bit reader: a 64-bit register loaded with the first
//! eight XOF bytes (little endian) and topped up with 32-bit little-endian
//! words whenever 32 bits or fewer remain. A candidate takes the low
//! `bitlen(bound - 1)` bits of the register. On acceptance those bits are
//! shifted out, on rejection a single bit is.
//!
//! Each sampler owns a byte budget of `ceil(BITS/8)` bytes of its XOF. Whatever
//! a draw leaves unused is skipped, so the next sampler reading the same XOF
//! starts at the same stream offset every time. Draws that outrun the budget
//! keep reading the stream.

use crate::field::{bits_to_represent, Field, FqElem, FzElem};
use crate::hash::{Xof, XofSuite};
use crate::params::budget_bytes;

/// Bit register over an XOF stream.
struct BitReader<'a, S: XofSuite> {
    xof: &'a mut Xof<S>,
    sub: u64,
    bits: u32,
    consumed: usize,
}

impl<'a, S: XofSuite> BitReader<'a, S> {
    fn new(xof: &'a mut Xof<S>) -> Self {
        let mut first = [0u8; 8];
        xof.squeeze(&mut first);
        Self {
            xof,
            sub: u64::from_le_bytes(first),
            bits: 64,
            consumed: 8,
        }
    }

    /// Candidate of `width` bits, topping the register up first if needed.
    #[inline]
    fn peek(&mut self, width: u32) -> u64 {
        if self.bits <= 32 {
            let mut word = [0u8; 4];
            self.xof.squeeze(&mut word);
            self.sub |= u64::from(u32::from_le_bytes(word)) << self.bits;
            self.bits += 32;
            self.consumed += 4;
        }
        self.sub & ((1u64 << width) - 1)
    }

    #[inline]
    fn consume(&mut self, width: u32) {
        self.sub >>= width;
        self.bits -= width;
    }

    /// Draw one value `v + offset < bound` from `width`-bit candidates.
    #[inline]
    fn draw(&mut self, width: u32, offset: u32, bound: u32) -> u32 {
        loop {
            let v = self.peek(width) as u32 + offset;
            if v < bound {
                self.consume(width);
                return v;
            }
            self.consume(1);
        }
    }

    /// Skip the rest of the byte budget.
    fn finish(self, budget_bits: usize) {
        let budget = budget_bytes(budget_bits);
        if self.consumed < budget {
            self.xof.skip(budget - self.consumed);
        }
    }
}

/// Fill `out` with uniform elements of Fq.
///
/// Also used for the public matrix `V_tr`, which is a flat row-major vector.
pub fn sample_fq_vec<F: Field, S: XofSuite>(
    xof: &mut Xof<S>,
    out: &mut [FqElem],
    budget_bits: usize,
) {
    let mut reader = BitReader::new(xof);
    for o in out.iter_mut() {
        *o = reader.draw(F::Q_BITS, 0, u32::from(F::Q)) as FqElem;
    }
    reader.finish(budget_bits);
}

/// Fill `out` with uniform elements of Fq* = [1, q).
pub fn sample_fq_star_vec<F: Field, S: XofSuite>(
    xof: &mut Xof<S>,
    out: &mut [FqElem],
    budget_bits: usize,
) {
    let mut reader = BitReader::new(xof);
    for o in out.iter_mut() {
        *o = reader.draw(F::Q_STAR_BITS, 1, u32::from(F::Q)) as FqElem;
    }
    reader.finish(budget_bits);
}

/// Fill `out` with uniform restricted exponents in [0, z).
///
/// Also used for the RSDPG matrix `W`.
pub fn sample_fz_vec<F: Field, S: XofSuite>(
    xof: &mut Xof<S>,
    out: &mut [FzElem],
    budget_bits: usize,
) {
    let mut reader = BitReader::new(xof);
    for o in out.iter_mut() {
        *o = reader.draw(F::Z_BITS, 0, u32::from(F::Z)) as FzElem;
    }
    reader.finish(budget_bits);
}

/// Expand `digest` into a binary string of length `out.len()` with exactly
/// `weight` ones.
///
/// Starts from `weight` leading ones and runs a Fisher-Yates shuffle driven
/// by the bit reader.
pub fn expand_fixed_weight<S: XofSuite>(
    out: &mut [u8],
    weight: usize,
    digest: &[u8],
    budget_bits: usize,
) {
    let t = out.len();
    out.fill(0);
    out[..weight].fill(1);

    let mut xof = Xof::<S>::absorb(&[digest]);
    let mut reader = BitReader::new(&mut xof);
    for curr in 0..t {
        let remaining = (t - curr) as u32;
        let width = bits_to_represent(t - 1 - curr);
        let pick = reader.draw(width, 0, remaining) as usize;
        out.swap(curr, curr + pick);
    }
    reader.finish(budget_bits);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{RsdpField, RsdpgField};
    use crate::hash::{Shake128Suite, Shake256Suite};

    #[test]
    fn test_fq_vec_in_range_and_deterministic() {
        let mut a = vec![0u16; 127];
        let mut b = vec![0u16; 127];
        sample_fq_vec::<RsdpField, Shake128Suite>(
            &mut Xof::absorb(&[b"seed"]),
            &mut a,
            923,
        );
        sample_fq_vec::<RsdpField, Shake128Suite>(
            &mut Xof::absorb(&[b"seed"]),
            &mut b,
            923,
        );
        assert_eq!(a, b);
        assert!(a.iter().all(|&x| x < 127));
    }

    #[test]
    fn test_fq_star_never_zero() {
        let mut beta = vec![0u16; 996];
        sample_fq_star_vec::<RsdpgField, Shake256Suite>(
            &mut Xof::absorb(&[b"d_beta"]),
            &mut beta,
            9070,
        );
        assert!(beta.iter().all(|&x| (1..509).contains(&x)));
    }

    #[test]
    fn test_fz_vec_in_range() {
        let mut eta = vec![0u8; 25];
        sample_fz_vec::<RsdpgField, Shake128Suite>(
            &mut Xof::absorb(&[b"seed_e"]),
            &mut eta,
            199,
        );
        assert!(eta.iter().all(|&x| x < 127));

        let mut eta = vec![0u8; 127];
        sample_fz_vec::<RsdpField, Shake128Suite>(
            &mut Xof::absorb(&[b"seed_e"]),
            &mut eta,
            493,
        );
        assert!(eta.iter().all(|&x| x < 7));
    }

    #[test]
    fn test_budget_aligns_next_sampler() {
        // The second sampler starts exactly ceil(BITS/8) bytes into the stream
        let mut xof = Xof::<Shake128Suite>::absorb(&[b"aligned"]);
        let mut first = vec![0u8; 127];
        sample_fz_vec::<RsdpField, Shake128Suite>(&mut xof, &mut first, 493);
        let mut after = [0u8; 16];
        xof.squeeze(&mut after);

        let mut reference = Xof::<Shake128Suite>::absorb(&[b"aligned"]);
        reference.skip(budget_bytes(493));
        let mut expected = [0u8; 16];
        reference.squeeze(&mut expected);
        assert_eq!(after, expected);
    }

    #[test]
    fn test_fixed_weight_exact() {
        for (t, w) in [(163usize, 85usize), (252, 212), (960, 938), (153, 79)] {
            let mut b = vec![0u8; t];
            expand_fixed_weight::<Shake128Suite>(&mut b, w, b"digest_b", 9371);
            assert_eq!(b.iter().filter(|&&x| x == 1).count(), w);
            assert!(b.iter().all(|&x| x <= 1));
        }
    }

    #[test]
    fn test_fixed_weight_deterministic_and_digest_bound() {
        let mut a = vec![0u8; 163];
        let mut b = vec![0u8; 163];
        let mut c = vec![0u8; 163];
        expand_fixed_weight::<Shake128Suite>(&mut a, 85, &[7u8; 32], 1355);
        expand_fixed_weight::<Shake128Suite>(&mut b, 85, &[7u8; 32], 1355);
        expand_fixed_weight::<Shake128Suite>(&mut c, 85, &[8u8; 32], 1355);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
