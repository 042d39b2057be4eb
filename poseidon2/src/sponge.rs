//! Padding-free sponge over the Poseidon2 permutation.
//!
//! Input is absorbed in chunks of `RATE` elements that *overwrite* the rate
//! part of the state; the permutation runs after every chunk, including a
//! short final one. No padding or length is mixed in, so two inputs whose
//! final chunks agree after truncation (for example `[x]` and `[x, 0]`)
//! hash identically. Callers that need length separation must prefix the
//! length themselves. An empty input never touches the permutation and
//! hashes to zero.

use field::{Goldilocks, QuinticExtension};
use p3_symmetric::{CryptographicHasher, PaddingFreeSponge};
use serde::{Deserialize, Serialize};

use crate::constants::{DIGEST_ELEMS, RATE, WIDTH};
use crate::errors::HashError;
use crate::Poseidon2Goldilocks;

/// The sponge as a `p3_symmetric` hasher with a 4-element digest.
pub type Poseidon2Sponge = PaddingFreeSponge<Poseidon2Goldilocks, WIDTH, RATE, DIGEST_ELEMS>;

/// A 4-element Poseidon2 digest.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HashOut {
    pub elements: [Goldilocks; DIGEST_ELEMS],
}

impl HashOut {
    pub const ZERO: Self = HashOut {
        elements: [Goldilocks::ZERO; DIGEST_ELEMS],
    };

    #[inline]
    pub fn to_u64s(&self) -> [u64; DIGEST_ELEMS] {
        self.elements.map(|e| e.as_canonical_u64())
    }

    pub fn to_bytes_le(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        for (chunk, e) in out.chunks_exact_mut(8).zip(self.elements.iter()) {
            chunk.copy_from_slice(&e.to_bytes_le());
        }
        out
    }

    pub fn from_bytes_le(bytes: &[u8; 32]) -> Result<Self, HashError> {
        let elements = elements_from_bytes_le(bytes)?;
        let mut out = HashOut::ZERO;
        out.elements.copy_from_slice(&elements);
        Ok(out)
    }
}

impl From<[Goldilocks; DIGEST_ELEMS]> for HashOut {
    fn from(elements: [Goldilocks; DIGEST_ELEMS]) -> Self {
        HashOut { elements }
    }
}

/// Absorb `input` and squeeze `M` elements, permuting again whenever more
/// than `RATE` outputs are requested.
pub fn hash_n_to_m_no_pad<const M: usize>(input: &[Goldilocks]) -> [Goldilocks; M] {
    let mut state = [Goldilocks::ZERO; WIDTH];
    for chunk in input.chunks(RATE) {
        state[..chunk.len()].copy_from_slice(chunk);
        Poseidon2Goldilocks::permute_state(&mut state);
    }

    let mut outputs = [Goldilocks::ZERO; M];
    let mut squeezed = outputs.chunks_mut(RATE).peekable();
    while let Some(block) = squeezed.next() {
        block.copy_from_slice(&state[..block.len()]);
        if squeezed.peek().is_some() {
            Poseidon2Goldilocks::permute_state(&mut state);
        }
    }
    outputs
}

/// 4-element digest of `input`, through the crate's own squeeze loop.
pub fn hash_n_to_hash_no_pad(input: &[Goldilocks]) -> HashOut {
    HashOut::from(hash_n_to_m_no_pad::<DIGEST_ELEMS>(input))
}

/// 4-element digest of `input`, through [`Poseidon2Sponge`].
///
/// Agrees with [`hash_n_to_hash_no_pad`] on every input.
pub fn hash_no_pad(input: &[Goldilocks]) -> HashOut {
    let sponge = Poseidon2Sponge::new(Poseidon2Goldilocks::new());
    HashOut::from(sponge.hash_iter(input.iter().copied()))
}

/// Hash two digests into one: the sponge over their eight concatenated elements.
pub fn hash_two_to_one(left: &HashOut, right: &HashOut) -> HashOut {
    let mut input = [Goldilocks::ZERO; 2 * DIGEST_ELEMS];
    input[..DIGEST_ELEMS].copy_from_slice(&left.elements);
    input[DIGEST_ELEMS..].copy_from_slice(&right.elements);
    hash_n_to_hash_no_pad(&input)
}

/// Left fold of [`hash_two_to_one`] over `inputs`.
///
/// A single digest is returned unchanged; an empty slice gives
/// [`HashOut::ZERO`].
pub fn hash_n_to_one(inputs: &[HashOut]) -> HashOut {
    match inputs {
        [] => HashOut::ZERO,
        [only] => *only,
        [first, rest @ ..] => rest
            .iter()
            .fold(*first, |acc, next| hash_two_to_one(&acc, next)),
    }
}

/// Squeeze five elements and read them as a quintic extension element.
///
/// Total: every 5-tuple of base field elements is a valid element, so no
/// rejection sampling is needed. The first four coefficients equal
/// [`hash_n_to_hash_no_pad`] of the same input.
pub fn hash_to_quintic_extension(input: &[Goldilocks]) -> QuinticExtension {
    QuinticExtension(hash_n_to_m_no_pad::<5>(input))
}

/// As [`hash_n_to_m_no_pad`], reading the input as little-endian 8-byte
/// canonical field elements.
pub fn hash_n_to_m_no_pad_bytes<const M: usize>(input: &[u8]) -> Result<[Goldilocks; M], HashError> {
    let elements = elements_from_bytes_le(input)?;
    Ok(hash_n_to_m_no_pad::<M>(&elements))
}

pub(crate) fn elements_from_bytes_le(bytes: &[u8]) -> Result<Vec<Goldilocks>, HashError> {
    if bytes.len() % 8 != 0 {
        return Err(HashError::InvalidLength(bytes.len()));
    }

    bytes
        .chunks_exact(8)
        .map(|chunk| {
            let mut limb = [0u8; 8];
            limb.copy_from_slice(chunk);
            Goldilocks::from_bytes_le(limb).map_err(HashError::from)
        })
        .collect()
}
