//! Error types for CROSS signature operations.

use core::fmt;

/// Result type alias using [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur during key generation, signing or verification.
///
/// `Signer::verify` only ever reports [`Error::VerificationFailed`]; the
/// finer-grained rejection kinds are produced by diagnostic helpers and are
/// never used to steer control flow inside verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Invalid key length provided.
    InvalidKeyLength {
        /// Expected length in bytes.
        expected: usize,
        /// Actual length provided.
        actual: usize,
    },

    /// Invalid signature length.
    InvalidSignatureLength {
        /// Expected length in bytes.
        expected: usize,
        /// Actual length provided.
        actual: usize,
    },

    /// A buffer has the right length but a non-canonical encoding.
    MalformedInput,

    /// A disclosed masked secret has an entry outside the restricted group.
    RestrictedMembershipViolation,

    /// A recomputed challenge digest differs from the one in the signature.
    CommitmentMismatch,

    /// Seed-tree disclosure or Merkle proof is inconsistent with the challenge.
    ProofStructureMismatch,

    /// The entropy source failed to provide randomness.
    EntropyUnavailable,

    /// Signature verification failed.
    VerificationFailed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKeyLength { expected, actual } => {
                write!(f, "invalid key length: expected {expected}, got {actual}")
            }
            Error::InvalidSignatureLength { expected, actual } => {
                write!(
                    f,
                    "invalid signature length: expected {expected}, got {actual}"
                )
            }
            Error::MalformedInput => write!(f, "malformed input encoding"),
            Error::RestrictedMembershipViolation => {
                write!(f, "restricted group membership violated")
            }
            Error::CommitmentMismatch => write!(f, "commitment digest mismatch"),
            Error::ProofStructureMismatch => write!(f, "proof structure mismatch"),
            Error::EntropyUnavailable => write!(f, "entropy source unavailable"),
            Error::VerificationFailed => write!(f, "signature verification failed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lengths() {
        let err = Error::InvalidSignatureLength {
            expected: 10,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "invalid signature length: expected 10, got 3"
        );
    }

    #[test]
    fn test_display_is_distinct() {
        let all = [
            Error::MalformedInput,
            Error::RestrictedMembershipViolation,
            Error::CommitmentMismatch,
            Error::ProofStructureMismatch,
            Error::EntropyUnavailable,
            Error::VerificationFailed,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.to_string(), b.to_string());
            }
        }
    }
}
