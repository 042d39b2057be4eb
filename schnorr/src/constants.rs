//! Constants used in the Schnorr signature scheme implementation.

/// Size of a serialized public verifying key in bytes.
///
/// A verifying key is the canonical encoding of a curve point, a single
/// quintic extension element: five little-endian Goldilocks words.
pub const PK_SIZE: usize = 40;

/// Size of a serialized secret signing key in bytes.
///
/// A signing key is a scalar below the 319-bit group order, stored as five
/// little-endian u64 limbs.
pub const SK_SIZE: usize = 40;

/// Size of a serialized signature in bytes.
///
/// A signature consists of:
/// - the response scalar s (40 bytes)
/// - the challenge scalar e (40 bytes)
///
/// Total: 80 bytes
pub const SIG_SIZE: usize = 80;

/// Size of a serialized hashed message in bytes (one extension element).
pub const MESSAGE_SIZE: usize = 40;

/// Number of u64 words in a public key, secret key or hashed message.
pub const ELEMENT_WORDS: usize = 5;

/// Number of u64 words in a signature: `s[0..5] || e[5..10]`.
pub const SIG_WORDS: usize = 10;

/// Domain separator prepended to the nonce derivation input, so nonce hashes
/// can never collide with challenge hashes. ASCII "NONCE_V1", below p.
pub(crate) const NONCE_DOMAIN_TAG: u64 = 0x4E4F_4E43_455F_5631;

/// Number of random words mixed into the nonce by hedged signing.
pub(crate) const HEDGE_WORDS: usize = 4;
