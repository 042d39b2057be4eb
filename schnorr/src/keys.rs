//! Signing and verifying keys for the Schnorr signature scheme.

use curve::{mul_generator, Projective, RandomField, ScalarField};
use field::{Goldilocks, QuinticExtension};
use rand::Rng;
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::constants::{HEDGE_WORDS, PK_SIZE, SK_SIZE};
use crate::errors::{check_length, SchnorrError};
use crate::signatures::{hash_message, read_element, sign_with_nonce_input, verify_with_point, Signature};

/// A secret signing key for creating Schnorr signatures.
///
/// The signing key is a non-zero scalar modulo the ECgFp5 group order.
/// It is wiped from memory when dropped and deliberately not `Copy`.
///
/// # Example
///
/// ```
/// use schnorr::SigningKey;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let signing_key = SigningKey::random(&mut rng);
/// ```
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop, Serialize, Deserialize)]
#[serde(try_from = "ScalarField", into = "ScalarField")]
pub struct SigningKey {
    scalar: ScalarField,
}

/// A public verifying key for verifying Schnorr signatures.
///
/// The verifying key is the point `sk * G` together with its canonical
/// encoding, which is what gets hashed into every challenge.
///
/// # Example
///
/// ```
/// use schnorr::SigningKey;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let signing_key = SigningKey::random(&mut rng);
/// let verifying_key = signing_key.verifying_key();
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuinticExtension", into = "QuinticExtension")]
pub struct VerifyingKey {
    point: Projective,
    encoded: QuinticExtension,
}

impl SigningKey {
    /// Generates a random signing key, resampling on the (negligible) zero
    /// draw.
    ///
    /// # Arguments
    ///
    /// * `rng` - A cryptographically secure random number generator
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        loop {
            let scalar = ScalarField::random(rng);
            if !scalar.is_zero() {
                return Self { scalar };
            }
        }
    }

    /// Wraps an existing scalar.
    ///
    /// # Errors
    ///
    /// Returns `SchnorrError::DegenerateScalar` if `scalar` is zero.
    pub fn from_scalar(scalar: ScalarField) -> Result<Self, SchnorrError> {
        if scalar.is_zero() {
            return Err(SchnorrError::DegenerateScalar);
        }
        Ok(Self { scalar })
    }

    /// Parses 40 little-endian bytes holding a canonical, non-zero scalar.
    pub fn from_bytes_le(bytes: &[u8]) -> Result<Self, SchnorrError> {
        check_length(bytes, SK_SIZE)?;
        let mut buf = [0u8; SK_SIZE];
        buf.copy_from_slice(bytes);
        let scalar = ScalarField::from_bytes_le(&buf);
        buf.zeroize();
        Self::from_scalar(scalar?)
    }

    pub fn to_bytes_le(&self) -> [u8; SK_SIZE] {
        self.scalar.to_bytes_le()
    }

    /// The secret scalar.
    pub fn scalar(&self) -> &ScalarField {
        &self.scalar
    }

    /// Derives the public verifying key `sk * G`.
    pub fn verifying_key(&self) -> VerifyingKey {
        let point = mul_generator(&self.scalar);
        VerifyingKey {
            point,
            encoded: point.encode(),
        }
    }

    /// Signs a pre-hashed message with a deterministic nonce.
    ///
    /// The signature is computed as:
    /// 1. Derive `k = H(tag || sk || m || counter)`, non-zero
    /// 2. Compute `R = k * G`
    /// 3. Compute challenge `e = H(R || pk || m)` using Poseidon2
    /// 4. Compute `s = k + e * sk`
    /// 5. Return signature `(s, e)`
    ///
    /// Signing the same message twice yields the same signature.
    pub fn sign(&self, m_hashed: &QuinticExtension) -> Signature {
        let pk = self.verifying_key();
        sign_with_nonce_input(&self.scalar, &pk.encoded, m_hashed, &[])
    }

    /// Signs a pre-hashed message with a hedged nonce: the deterministic
    /// derivation additionally absorbs fresh randomness from `rng`, so a
    /// weak rng never does worse than deterministic signing.
    pub fn sign_with_rng<R: Rng + ?Sized>(&self, rng: &mut R, m_hashed: &QuinticExtension) -> Signature {
        let extra: [Goldilocks; HEDGE_WORDS] = core::array::from_fn(|_| Goldilocks::random(rng));
        let pk = self.verifying_key();
        sign_with_nonce_input(&self.scalar, &pk.encoded, m_hashed, &extra)
    }

    /// Hashes `msg` with [`hash_message`] and signs the digest.
    pub fn sign_message(&self, msg: &[Goldilocks]) -> Signature {
        self.sign(&hash_message(msg))
    }
}

impl core::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("SigningKey(..)")
    }
}

impl TryFrom<ScalarField> for SigningKey {
    type Error = SchnorrError;

    fn try_from(scalar: ScalarField) -> Result<Self, Self::Error> {
        Self::from_scalar(scalar)
    }
}

impl From<SigningKey> for ScalarField {
    fn from(key: SigningKey) -> Self {
        key.scalar
    }
}

impl VerifyingKey {
    /// Decodes a public key from its canonical encoding.
    ///
    /// # Errors
    ///
    /// Returns `SchnorrError::MalformedPoint` if `encoded` is not the
    /// encoding of a group element, and `SchnorrError::DegenerateScalar` for
    /// the neutral element, which no valid signing key maps to.
    pub fn from_encoded(encoded: QuinticExtension) -> Result<Self, SchnorrError> {
        let point = Projective::decode(&encoded)?;
        if point.is_neutral() {
            return Err(SchnorrError::DegenerateScalar);
        }
        Ok(Self { point, encoded })
    }

    pub fn from_bytes_le(bytes: &[u8]) -> Result<Self, SchnorrError> {
        check_length(bytes, PK_SIZE)?;
        Self::from_encoded(read_element(bytes)?)
    }

    pub fn to_bytes_le(&self) -> [u8; PK_SIZE] {
        self.encoded.to_bytes_le()
    }

    /// The canonical encoding of the key point.
    pub fn encoded(&self) -> &QuinticExtension {
        &self.encoded
    }

    pub fn point(&self) -> &Projective {
        &self.point
    }

    /// Verifies a signature on a pre-hashed message.
    ///
    /// The verification recomputes `R' = s * G - e * pk` and accepts iff
    /// `H(R' || pk || m) == e`, which is equivalent to `s * G == R + e * pk`.
    ///
    /// # Example
    ///
    /// ```
    /// use field::QuinticExtension;
    /// use schnorr::SigningKey;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let signing_key = SigningKey::random(&mut rng);
    /// let verifying_key = signing_key.verifying_key();
    /// let m = QuinticExtension::from_u64s([1, 2, 3, 4, 5]);
    ///
    /// let signature = signing_key.sign(&m);
    /// assert!(verifying_key.verify(&m, &signature));
    /// ```
    pub fn verify(&self, m_hashed: &QuinticExtension, sig: &Signature) -> bool {
        verify_with_point(&self.point, &self.encoded, m_hashed, sig)
    }

    /// Hashes `msg` with [`hash_message`] and verifies against the digest.
    pub fn verify_message(&self, msg: &[Goldilocks], sig: &Signature) -> bool {
        self.verify(&hash_message(msg), sig)
    }
}

impl TryFrom<QuinticExtension> for VerifyingKey {
    type Error = SchnorrError;

    fn try_from(encoded: QuinticExtension) -> Result<Self, Self::Error> {
        Self::from_encoded(encoded)
    }
}

impl From<VerifyingKey> for QuinticExtension {
    fn from(key: VerifyingKey) -> Self {
        key.encoded
    }
}

impl From<&SigningKey> for VerifyingKey {
    /// Converts a reference to a signing key into a verifying key.
    ///
    /// This is equivalent to calling `signing_key.verifying_key()`.
    fn from(sk: &SigningKey) -> Self {
        sk.verifying_key()
    }
}
