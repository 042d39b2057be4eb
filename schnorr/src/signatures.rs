//! Signature type, nonce derivation and challenge hashing for the Schnorr
//! signature scheme.

use curve::{double_scalar_mul_basepoint, mul_generator, Projective, ScalarField};
use field::{Goldilocks, QuinticExtension};
use poseidon2::hash_to_quintic_extension;
use serde::{Deserialize, Serialize};

use crate::constants::{ELEMENT_WORDS, NONCE_DOMAIN_TAG, SIG_SIZE, SIG_WORDS};
use crate::errors::{check_length, SchnorrError};

/// A Schnorr signature consisting of two scalars.
///
/// The signature is a pair `(s, e)` where:
/// - `s = k + e * sk` is the response, `k` being the signing nonce
/// - `e = H(R || pk || m)` is the Fiat-Shamir challenge, `R = k * G`
///
/// # Structure
///
/// The signature satisfies `H(encode(s * G - e * pk) || pk || m) == e`.
/// Both scalars are canonical; deserialization rejects anything else, so a
/// signature has exactly one encoding.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    /// The response scalar
    pub s: ScalarField,
    /// The challenge scalar
    pub e: ScalarField,
}

impl Signature {
    /// The all-zero signature, written out by the word-array surface when
    /// signing is refused.
    pub const ZERO: Self = Signature {
        s: ScalarField::ZERO,
        e: ScalarField::ZERO,
    };

    /// Serialize as ten u64 words, `s` limbs first.
    pub fn to_words(&self) -> [u64; SIG_WORDS] {
        let mut out = [0u64; SIG_WORDS];
        out[..ELEMENT_WORDS].copy_from_slice(&self.s.to_canonical_limbs());
        out[ELEMENT_WORDS..].copy_from_slice(&self.e.to_canonical_limbs());
        out
    }

    /// Parse ten u64 words; both halves must be canonical scalars.
    pub fn from_words(words: &[u64; SIG_WORDS]) -> Result<Self, SchnorrError> {
        let mut s = [0u64; ELEMENT_WORDS];
        let mut e = [0u64; ELEMENT_WORDS];
        s.copy_from_slice(&words[..ELEMENT_WORDS]);
        e.copy_from_slice(&words[ELEMENT_WORDS..]);

        Ok(Signature {
            s: ScalarField::from_canonical_limbs(s)?,
            e: ScalarField::from_canonical_limbs(e)?,
        })
    }

    /// Serialize as `s || e`, each 40 little-endian bytes.
    pub fn to_bytes_le(&self) -> [u8; SIG_SIZE] {
        let mut out = [0u8; SIG_SIZE];
        out[..SIG_SIZE / 2].copy_from_slice(&self.s.to_bytes_le());
        out[SIG_SIZE / 2..].copy_from_slice(&self.e.to_bytes_le());
        out
    }

    pub fn from_bytes_le(bytes: &[u8]) -> Result<Self, SchnorrError> {
        check_length(bytes, SIG_SIZE)?;

        let mut s = [0u8; SIG_SIZE / 2];
        let mut e = [0u8; SIG_SIZE / 2];
        s.copy_from_slice(&bytes[..SIG_SIZE / 2]);
        e.copy_from_slice(&bytes[SIG_SIZE / 2..]);

        Ok(Signature {
            s: ScalarField::from_bytes_le(&s)?,
            e: ScalarField::from_bytes_le(&e)?,
        })
    }
}

/// Hash an arbitrary field-element message to the digest that gets signed.
///
/// Callers that sign structured data should length-prefix or otherwise
/// frame it first; the sponge applies no padding.
pub fn hash_message(msg: &[Goldilocks]) -> QuinticExtension {
    hash_to_quintic_extension(msg)
}

/// Computes the Fiat-Shamir challenge `e = H(R || pk || m)`.
///
/// # Implementation Details
///
/// 1. `R` and `pk` enter as their canonical encodings, 5 elements each
/// 2. The hashed message contributes its 5 coefficients
/// 3. The 15 elements go through `hash_to_quintic_extension`
/// 4. The resulting 320-bit value is reduced modulo the group order
pub(crate) fn hash_challenge(
    r: &QuinticExtension,
    pk: &QuinticExtension,
    m_hashed: &QuinticExtension,
) -> ScalarField {
    let mut input = [Goldilocks::ZERO; 3 * ELEMENT_WORDS];
    input[..5].copy_from_slice(r.coeffs());
    input[5..10].copy_from_slice(pk.coeffs());
    input[10..].copy_from_slice(m_hashed.coeffs());

    ScalarField::from_quintic(&hash_to_quintic_extension(&input))
}

/// Derives the signing nonce from the secret key and the message.
///
/// The hash input is the domain tag, the secret scalar as ten 32-bit limbs
/// (each below p), the 5 message coefficients, any `extra` elements mixed in
/// by hedged signing, and finally a counter that starts at zero and is bumped
/// until the reduced nonce is non-zero.
pub(crate) fn derive_nonce(
    sk: &ScalarField,
    m_hashed: &QuinticExtension,
    extra: &[Goldilocks],
) -> ScalarField {
    let mut input = Vec::with_capacity(1 + 10 + ELEMENT_WORDS + extra.len() + 1);
    input.push(Goldilocks::new(NONCE_DOMAIN_TAG));
    input.extend(sk.to_u32_limbs().iter().map(|&limb| Goldilocks::new(limb as u64)));
    input.extend_from_slice(m_hashed.coeffs());
    input.extend_from_slice(extra);
    input.push(Goldilocks::ZERO);

    let counter_slot = input.len() - 1;
    let mut counter = 0u64;
    loop {
        input[counter_slot] = Goldilocks::new(counter);
        let k = ScalarField::from_quintic(&hash_to_quintic_extension(&input));
        if !k.is_zero() {
            input.fill(Goldilocks::ZERO);
            return k;
        }

        counter += 1;
        log::debug!("derived nonce is zero, resampling with counter {counter}");
    }
}

/// Core signing routine: the caller guarantees `sk` is non-zero and that
/// `pk` is the encoding of `sk * G`.
pub(crate) fn sign_with_nonce_input(
    sk: &ScalarField,
    pk: &QuinticExtension,
    m_hashed: &QuinticExtension,
    extra: &[Goldilocks],
) -> Signature {
    let k = derive_nonce(sk, m_hashed, extra);
    let r = mul_generator(&k).encode();

    let e = hash_challenge(&r, pk, m_hashed);
    let s = k + e * *sk;

    Signature { s, e }
}

/// Core verification routine over an already decoded public key.
pub(crate) fn verify_with_point(
    point: &Projective,
    pk: &QuinticExtension,
    m_hashed: &QuinticExtension,
    sig: &Signature,
) -> bool {
    if point.is_neutral() {
        log::debug!("rejecting signature under the neutral public key");
        return false;
    }

    // R' = s * G - e * pk
    let r = double_scalar_mul_basepoint(&sig.s, &-sig.e, point);
    let e = hash_challenge(&r.encode(), pk, m_hashed);

    let valid = e == sig.e;
    if !valid {
        log::debug!("challenge mismatch, signature rejected");
    }
    valid
}

/// Public key encoding `encode(sk * G)` for a raw secret scalar.
///
/// # Errors
///
/// Returns `SchnorrError::DegenerateScalar` if `sk` is zero.
pub fn schnorr_pk_from_sk(sk: &ScalarField) -> Result<QuinticExtension, SchnorrError> {
    if sk.is_zero() {
        return Err(SchnorrError::DegenerateScalar);
    }
    Ok(mul_generator(sk).encode())
}

/// Deterministically sign a pre-hashed message with a raw secret scalar.
///
/// # Errors
///
/// Returns `SchnorrError::DegenerateScalar` if `sk` is zero.
pub fn schnorr_sign_hashed_message(
    m_hashed: &QuinticExtension,
    sk: &ScalarField,
) -> Result<Signature, SchnorrError> {
    let pk = schnorr_pk_from_sk(sk)?;
    Ok(sign_with_nonce_input(sk, &pk, m_hashed, &[]))
}

/// Verify a signature on a pre-hashed message against an encoded public key.
///
/// Returns `Ok(false)` for a well-formed key that rejects the signature.
///
/// # Errors
///
/// Returns `SchnorrError::MalformedPoint` if `pk` is not a point encoding.
pub fn schnorr_verify_hashed_message(
    pk: &QuinticExtension,
    m_hashed: &QuinticExtension,
    sig: &Signature,
) -> Result<bool, SchnorrError> {
    let point = Projective::decode(pk)?;
    Ok(verify_with_point(&point, pk, m_hashed, sig))
}

/// Verify serialized inputs: 40-byte key, 40-byte hashed message and
/// 80-byte signature.
///
/// # Errors
///
/// Every length, canonicity or decoding failure is reported as such; a
/// well-formed signature that does not verify gives
/// `SchnorrError::InvalidSignature`.
pub fn verify_bytes(pk: &[u8], m_hashed: &[u8], sig: &[u8]) -> Result<(), SchnorrError> {
    let pk = read_element(pk)?;
    let m_hashed = read_element(m_hashed)?;
    let sig = Signature::from_bytes_le(sig)?;

    if schnorr_verify_hashed_message(&pk, &m_hashed, &sig)? {
        Ok(())
    } else {
        Err(SchnorrError::InvalidSignature)
    }
}

pub(crate) fn read_element(bytes: &[u8]) -> Result<QuinticExtension, SchnorrError> {
    check_length(bytes, 8 * ELEMENT_WORDS)?;
    let mut buf = [0u8; 8 * ELEMENT_WORDS];
    buf.copy_from_slice(bytes);
    Ok(QuinticExtension::from_bytes_le(&buf)?)
}
