//! Poseidon2 hashing over the Goldilocks field.
//!
//! This crate provides the width-12 Poseidon2 permutation, the padding-free
//! sponge built on it, a streaming [`Poseidon2Hasher`] over the same sponge,
//! and the map from arbitrary input to an element of the quintic extension
//! used by the signature scheme.

mod constants;
mod errors;
mod hasher;
mod permutation;
mod sponge;

pub use constants::{CAPACITY, DIGEST_ELEMS, RATE, ROUNDS_F, ROUNDS_P, WIDTH};
pub use errors::HashError;
pub use hasher::Poseidon2Hasher;
pub use permutation::Poseidon2Goldilocks;
pub use sponge::{
    hash_n_to_hash_no_pad, hash_n_to_m_no_pad, hash_n_to_m_no_pad_bytes, hash_n_to_one,
    hash_no_pad, hash_to_quintic_extension, hash_two_to_one, HashOut, Poseidon2Sponge,
};
