//! SHAKE-based XOF and hash.
//!
//! CROSS keys SHAKE128 at λ = 128 and SHAKE256 above. The same instance is
//! used both as the seed expander and, truncated to 2λ bits, as the hash.

use sha3::{
    digest::{ExtendableOutput, Update, XofReader},
    Shake128, Shake256,
};

/// Binds a security level to a SHAKE instance.
pub trait XofSuite: Send + Sync + 'static {
    /// Underlying sponge.
    type Hasher: Default + Update + ExtendableOutput;
}

/// SHAKE128, used by the category 1 sets.
#[derive(Debug, Clone, Copy, Default)]
pub struct Shake128Suite;

/// SHAKE256, used by the category 3 and 5 sets.
#[derive(Debug, Clone, Copy, Default)]
pub struct Shake256Suite;

impl XofSuite for Shake128Suite {
    type Hasher = Shake128;
}

impl XofSuite for Shake256Suite {
    type Hasher = Shake256;
}

/// An absorbed XOF ready to be squeezed.
pub struct Xof<S: XofSuite> {
    reader: <S::Hasher as ExtendableOutput>::Reader,
}

impl<S: XofSuite> Xof<S> {
    /// Absorb the concatenation of `parts` and finalize.
    pub fn absorb(parts: &[&[u8]]) -> Self {
        let mut hasher = S::Hasher::default();
        for part in parts {
            hasher.update(part);
        }
        Self {
            reader: hasher.finalize_xof(),
        }
    }

    /// Squeeze bytes from the XOF.
    pub fn squeeze(&mut self, out: &mut [u8]) {
        self.reader.read(out);
    }

    /// Discard `n` bytes of output.
    pub fn skip(&mut self, mut n: usize) {
        let mut sink = [0u8; 64];
        while n > 0 {
            let take = n.min(sink.len());
            self.reader.read(&mut sink[..take]);
            n -= take;
        }
    }
}

/// Hash the concatenation of `parts` into `out`.
///
/// CROSS digests are `2λ/8` bytes; the caller sizes `out` accordingly.
pub fn hash<S: XofSuite>(out: &mut [u8], parts: &[&[u8]]) {
    Xof::<S>::absorb(parts).squeeze(out);
}
