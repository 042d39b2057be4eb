//! Error types for the Schnorr signature scheme.

use curve::CurveError;
use field::FieldError;
use thiserror::Error;

/// Errors that can occur during key handling, signing and verification.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum SchnorrError {
    /// A secret key reduced to zero modulo the group order.
    ///
    /// Such a key would produce the neutral element as public key and a
    /// signature that reveals nothing but verifies for anyone.
    #[error("secret scalar is zero modulo the group order")]
    DegenerateScalar,

    /// A public key or commitment that does not decode to a group element.
    #[error("encoding does not decode to a curve point")]
    MalformedPoint,

    /// Serialized scalar limbs not below the group order.
    #[error("scalar is not below the group order")]
    NonCanonicalScalar,

    /// Serialized input of the wrong size.
    #[error("expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// The signature does not verify under the given key and message.
    #[error("signature verification failed")]
    InvalidSignature,

    #[error(transparent)]
    Field(#[from] FieldError),
}

impl From<CurveError> for SchnorrError {
    fn from(err: CurveError) -> Self {
        match err {
            CurveError::MalformedPoint => SchnorrError::MalformedPoint,
            CurveError::NonCanonicalScalar => SchnorrError::NonCanonicalScalar,
        }
    }
}

/// Check that `bytes` has exactly `expected` bytes.
pub(crate) fn check_length(bytes: &[u8], expected: usize) -> Result<(), SchnorrError> {
    if bytes.len() != expected {
        return Err(SchnorrError::InvalidLength {
            expected,
            actual: bytes.len(),
        });
    }
    Ok(())
}
