//! Schnorr signature scheme over the ECgFp5 elliptic curve.
//!
//! This library implements a Schnorr signature scheme using:
//! - The ECgFp5 curve over the Goldilocks quintic extension (prime order)
//! - Poseidon2 over Goldilocks for nonces and the Fiat-Shamir challenge
//! - Messages pre-hashed to a single quintic extension element
//!
//! # Overview
//!
//! A signature is a pair of scalars `(s, e)` with `e = H(R || pk || m)` and
//! `s = k + e * sk`. Nonces are derived deterministically from the secret key
//! and the message, so signing never needs a random number generator;
//! [`SigningKey::sign_with_rng`] additionally mixes in fresh randomness.
//!
//! # Example
//!
//! ```
//! use field::Goldilocks;
//! use schnorr::{hash_message, SigningKey};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! // Generate a random signing key
//! let mut rng = StdRng::seed_from_u64(42);
//! let signing_key = SigningKey::random(&mut rng);
//!
//! // Derive the corresponding verifying key
//! let verifying_key = signing_key.verifying_key();
//!
//! // Hash a message made of Goldilocks elements
//! let message = [Goldilocks::new(1), Goldilocks::new(2), Goldilocks::new(3)];
//! let m_hashed = hash_message(&message);
//!
//! // Sign and verify
//! let signature = signing_key.sign(&m_hashed);
//! assert!(verifying_key.verify(&m_hashed, &signature));
//! ```
//!
//! # Security Considerations
//!
//! - Secret keys are zeroized on drop and never logged
//! - A zero secret key is rejected everywhere
//! - Public keys and signatures are canonical; decoding rejects anything else

mod constants;
mod errors;
mod keys;
mod signatures;


pub use constants::{ELEMENT_WORDS, MESSAGE_SIZE, PK_SIZE, SIG_SIZE, SIG_WORDS, SK_SIZE};
pub use errors::SchnorrError;
pub use keys::{SigningKey, VerifyingKey};
pub use signatures::{
    hash_message, schnorr_pk_from_sk, schnorr_sign_hashed_message, schnorr_verify_hashed_message,
    verify_bytes, Signature,
};
