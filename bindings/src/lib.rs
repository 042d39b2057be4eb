//! Fixed-width u64 word-array entry points.
//!
//! Every function takes plain word slices or arrays, writes into a
//! caller-sized output and never panics. Words are read leniently: field
//! inputs are reduced modulo p and secret keys modulo the group order.
//! A secret key that reduces to zero yields all-zero output instead of an
//! error, matching the neutral-element encoding.

use curve::ScalarField;
use field::{Goldilocks, QuinticExtension};
use schnorr::{Signature, SIG_WORDS};

fn to_elements(words: &[u64]) -> Vec<Goldilocks> {
    words.iter().map(|&w| Goldilocks::new(w)).collect()
}

fn to_secret(words: &[u64; 5]) -> ScalarField {
    ScalarField::from_noncanonical_limbs(*words)
}

/// Poseidon2 sponge digest of `input`, written as 4 canonical words.
pub fn hash_no_pad(input: &[u64], out: &mut [u64; 4]) {
    *out = poseidon2::hash_no_pad(&to_elements(input)).to_u64s();
}

/// Same digest as [`hash_no_pad`], through the generic squeeze loop.
pub fn hash_n_to_hash_no_pad(data: &[u64], out: &mut [u64; 4]) {
    *out = poseidon2::hash_n_to_hash_no_pad(&to_elements(data)).to_u64s();
}

/// Hash `input` to a quintic extension element, written as 5 words.
pub fn hash_to_quintic_extension(input: &[u64], out: &mut [u64; 5]) {
    *out = poseidon2::hash_to_quintic_extension(&to_elements(input)).to_u64s();
}

/// Encoded public key for the secret key `sk`.
pub fn schnorr_pk_from_sk(sk: &[u64; 5], out: &mut [u64; 5]) {
    match schnorr::schnorr_pk_from_sk(&to_secret(sk)) {
        Ok(pk) => *out = pk.to_u64s(),
        Err(err) => {
            log::warn!("schnorr_pk_from_sk: {err}, writing the neutral encoding");
            *out = [0; 5];
        }
    }
}

/// Sign the hashed message `m_hashed`; the signature is `s || e`.
pub fn schnorr_sign_hashed_message(m_hashed: &[u64; 5], sk: &[u64; 5], out: &mut [u64; SIG_WORDS]) {
    let m_hashed = QuinticExtension::from_u64s(*m_hashed);
    match schnorr::schnorr_sign_hashed_message(&m_hashed, &to_secret(sk)) {
        Ok(sig) => *out = sig.to_words(),
        Err(err) => {
            log::warn!("schnorr_sign_hashed_message: {err}, writing a zero signature");
            *out = Signature::ZERO.to_words();
        }
    }
}

/// Verify `sig` over `m_hashed` under the encoded public key `pk`.
///
/// Returns `false` for non-canonical signature scalars, public keys that do
/// not decode and signatures that do not verify.
pub fn schnorr_verify_hashed_message(pk: &[u64; 5], m_hashed: &[u64; 5], sig: &[u64; SIG_WORDS]) -> bool {
    let sig = match Signature::from_words(sig) {
        Ok(sig) => sig,
        Err(err) => {
            log::debug!("schnorr_verify_hashed_message: {err}");
            return false;
        }
    };

    let pk = QuinticExtension::from_u64s(*pk);
    let m_hashed = QuinticExtension::from_u64s(*m_hashed);
    match schnorr::schnorr_verify_hashed_message(&pk, &m_hashed, &sig) {
        Ok(valid) => valid,
        Err(err) => {
            log::debug!("schnorr_verify_hashed_message: {err}");
            false
        }
    }
}
