//! Cryptographic primitive traits.

use crate::Result;
use rand_core::TryCryptoRng;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Digital signature trait.
///
/// This trait defines the interface shared by all CROSS parameter sets.
/// Signing is randomized: the root seed and the salt of every signature are
/// drawn from the supplied entropy source, so both `keygen` and `sign` take
/// an RNG. Any infallible `CryptoRng` can be passed, as can fallible sources
/// such as `OsRng`; a failing source yields [`Error::EntropyUnavailable`].
///
/// # Example
///
/// ```ignore
/// use cross_core::Signer;
///
/// let (sk, pk) = MySigner::keygen(&mut rng)?;
/// let sig = MySigner::sign(&sk, message, &mut rng)?;
/// MySigner::verify(&pk, message, &sig)?;
/// ```
///
/// [`Error::EntropyUnavailable`]: crate::Error::EntropyUnavailable
pub trait Signer {
    /// Signing key (private key).
    type SigningKey: Zeroize + ZeroizeOnDrop;

    /// Verification key (public key).
    type VerificationKey: Clone;

    /// Signature produced by signing.
    type Signature: Clone;

    /// Size of the signing key in bytes.
    const SIGNING_KEY_SIZE: usize;

    /// Size of the verification key in bytes.
    const VERIFICATION_KEY_SIZE: usize;

    /// Size of the signature in bytes.
    const SIGNATURE_SIZE: usize;

    /// Generate a new key pair.
    ///
    /// # Arguments
    ///
    /// * `rng` - A cryptographically secure random number generator.
    ///
    /// # Returns
    ///
    /// A tuple of (signing_key, verification_key).
    fn keygen(rng: &mut impl TryCryptoRng) -> Result<(Self::SigningKey, Self::VerificationKey)>;

    /// Sign a message.
    ///
    /// # Arguments
    ///
    /// * `sk` - The signing (private) key.
    /// * `message` - The message to sign.
    /// * `rng` - Source of the per-signature root seed and salt.
    ///
    /// # Returns
    ///
    /// The signature.
    fn sign(
        sk: &Self::SigningKey,
        message: &[u8],
        rng: &mut impl TryCryptoRng,
    ) -> Result<Self::Signature>;

    /// Verify a signature.
    ///
    /// # Arguments
    ///
    /// * `pk` - The verification (public) key.
    /// * `message` - The message that was signed.
    /// * `signature` - The signature to verify.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the signature is valid, `Err(Error::VerificationFailed)` otherwise.
    fn verify(
        pk: &Self::VerificationKey,
        message: &[u8],
        signature: &Self::Signature,
    ) -> Result<()>;
}
