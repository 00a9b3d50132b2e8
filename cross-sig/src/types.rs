//! Key type wrapper macros for CROSS.
//!
//! This module provides the macro that generates the key type wrappers
//! (SigningKey, VerificationKey, Signature) and the Signer implementation
//! for each CROSS variant.

/// Generate CROSS types and Signer implementation for a specific parameter set.
///
/// Creates SigningKey, VerificationKey, Signature types and implements
/// the Signer trait for the variant marker type.
macro_rules! define_cross_variant {
    (
        variant_name: $variant_name:ident,
        params: $params:ty,
        sk_size: $sk_size:expr,
        pk_size: $pk_size:expr,
        sig_size: $sig_size:expr
    ) => {
        use crate::params::ParameterSet;
        use crate::sign::{check_public_key, cross_keygen, cross_sign, cross_verify, VerifyReport};

        use cross_core::{Error, Result, Signer};
        use rand_core::TryCryptoRng;
        use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

        #[cfg(not(feature = "std"))]
        use alloc::vec::Vec;

        /// Parameter set behind this variant.
        pub type Params = $params;

        const SK_BYTES: usize = <$params as ParameterSet>::SK_BYTES;
        const PK_BYTES: usize = <$params as ParameterSet>::PK_BYTES;
        const SIG_BYTES: usize = <$params as ParameterSet>::SIG_BYTES;

        /// Signing key: the master seed every secret is expanded from.
        #[derive(Clone, Zeroize, ZeroizeOnDrop)]
        pub struct SigningKey {
            seed: [u8; SK_BYTES],
        }

        impl SigningKey {
            /// Create a signing key from bytes.
            pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
                let seed = <[u8; SK_BYTES]>::try_from(bytes).map_err(|_| {
                    Error::InvalidKeyLength {
                        expected: SK_BYTES,
                        actual: bytes.len(),
                    }
                })?;
                Ok(Self { seed })
            }

            /// Get the signing key bytes.
            pub fn as_bytes(&self) -> &[u8] {
                &self.seed
            }

            /// Derive the corresponding verification key.
            ///
            /// This re-expands the key pair and costs as much as key generation.
            pub fn verification_key(&self) -> VerificationKey {
                let pk = cross_keygen::<$params>(&self.seed);
                let mut bytes = [0u8; PK_BYTES];
                bytes.copy_from_slice(&pk);
                VerificationKey { bytes }
            }
        }

        /// Verification key (public key).
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct VerificationKey {
            bytes: [u8; PK_BYTES],
        }

        impl VerificationKey {
            /// Create a verification key from bytes.
            ///
            /// Rejects keys whose packed syndrome is not canonical.
            pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
                check_public_key::<$params>(bytes)?;
                let mut out = [0u8; PK_BYTES];
                out.copy_from_slice(bytes);
                Ok(Self { bytes: out })
            }

            /// Get the verification key bytes.
            pub fn as_bytes(&self) -> &[u8] {
                &self.bytes
            }
        }

        /// Signature.
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct Signature(Vec<u8>);

        impl Signature {
            /// Create a signature from bytes.
            pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
                if bytes.len() != SIG_BYTES {
                    return Err(Error::InvalidSignatureLength {
                        expected: SIG_BYTES,
                        actual: bytes.len(),
                    });
                }
                Ok(Self(bytes.to_vec()))
            }

            /// Get the signature bytes.
            pub fn as_bytes(&self) -> &[u8] {
                &self.0
            }
        }

        impl AsRef<[u8]> for Signature {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        /// Algorithm marker type.
        pub struct $variant_name;

        impl $variant_name {
            /// Verify a signature and report the outcome of every check.
            ///
            /// [`Signer::verify`] collapses this report into a single
            /// accept/reject; the report is meant for diagnostics and tests.
            pub fn verify_detailed(
                pk: &VerificationKey,
                message: &[u8],
                signature: &Signature,
            ) -> VerifyReport {
                cross_verify::<$params>(&pk.bytes, message, &signature.0)
            }
        }

        impl Signer for $variant_name {
            type SigningKey = SigningKey;
            type VerificationKey = VerificationKey;
            type Signature = Signature;

            const SIGNING_KEY_SIZE: usize = SK_BYTES;
            const VERIFICATION_KEY_SIZE: usize = PK_BYTES;
            const SIGNATURE_SIZE: usize = SIG_BYTES;

            fn keygen(
                rng: &mut impl TryCryptoRng,
            ) -> Result<(Self::SigningKey, Self::VerificationKey)> {
                let mut sk = SigningKey {
                    seed: [0u8; SK_BYTES],
                };
                rng.try_fill_bytes(&mut sk.seed)
                    .map_err(|_| Error::EntropyUnavailable)?;
                let pk = sk.verification_key();
                Ok((sk, pk))
            }

            fn sign(
                sk: &Self::SigningKey,
                message: &[u8],
                rng: &mut impl TryCryptoRng,
            ) -> Result<Self::Signature> {
                let mut root_seed =
                    Zeroizing::new([0u8; <$params as ParameterSet>::SEED_BYTES]);
                let mut salt = [0u8; <$params as ParameterSet>::SALT_BYTES];
                rng.try_fill_bytes(&mut root_seed[..])
                    .map_err(|_| Error::EntropyUnavailable)?;
                rng.try_fill_bytes(&mut salt)
                    .map_err(|_| Error::EntropyUnavailable)?;
                Ok(Signature(cross_sign::<$params>(
                    &sk.seed,
                    message,
                    &root_seed[..],
                    &salt,
                )))
            }

            fn verify(
                pk: &Self::VerificationKey,
                message: &[u8],
                signature: &Self::Signature,
            ) -> Result<()> {
                if Self::verify_detailed(pk, message, signature).accepted() {
                    Ok(())
                } else {
                    Err(Error::VerificationFailed)
                }
            }
        }

    };
}

pub(crate) use define_cross_variant;
