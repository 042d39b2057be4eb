//! Incremental front end to the padding-free sponge.

use field::Goldilocks;

use crate::constants::{DIGEST_ELEMS, RATE, WIDTH};
use crate::errors::HashError;
use crate::sponge::{elements_from_bytes_le, HashOut};
use crate::Poseidon2Goldilocks;

/// Streaming Poseidon2 hasher.
///
/// Feeding the input in pieces yields the same digest as
/// [`hash_n_to_hash_no_pad`](crate::hash_n_to_hash_no_pad) over the
/// concatenation. Full rate chunks are permuted as soon as they fill, so
/// memory use stays constant.
///
/// # Example
///
/// ```
/// use field::Goldilocks;
/// use poseidon2::{hash_n_to_hash_no_pad, Poseidon2Hasher};
///
/// let input: Vec<Goldilocks> = (0..10).map(Goldilocks::new).collect();
///
/// let mut hasher = Poseidon2Hasher::new();
/// hasher.update(&input[..3]);
/// hasher.update(&input[3..]);
/// assert_eq!(hasher.finalize(), hash_n_to_hash_no_pad(&input));
/// ```
#[derive(Clone, Debug)]
pub struct Poseidon2Hasher {
    state: [Goldilocks; WIDTH],
    pending: [Goldilocks; RATE],
    pending_len: usize,
}

impl Poseidon2Hasher {
    pub fn new() -> Self {
        Poseidon2Hasher {
            state: [Goldilocks::ZERO; WIDTH],
            pending: [Goldilocks::ZERO; RATE],
            pending_len: 0,
        }
    }

    /// Absorb field elements.
    pub fn update(&mut self, input: &[Goldilocks]) {
        for &element in input {
            self.pending[self.pending_len] = element;
            self.pending_len += 1;
            if self.pending_len == RATE {
                self.absorb_pending();
            }
        }
    }

    /// Absorb little-endian 8-byte canonical field elements.
    ///
    /// Each call must carry whole elements; on error nothing is absorbed.
    pub fn update_bytes(&mut self, bytes: &[u8]) -> Result<(), HashError> {
        let elements = elements_from_bytes_le(bytes)?;
        self.update(&elements);
        Ok(())
    }

    /// Digest of everything absorbed so far. The hasher is left untouched,
    /// so more input may follow.
    pub fn finalize(&self) -> HashOut {
        let mut state = self.state;
        if self.pending_len > 0 {
            state[..self.pending_len].copy_from_slice(&self.pending[..self.pending_len]);
            Poseidon2Goldilocks::permute_state(&mut state);
        }

        let mut out = HashOut::ZERO;
        out.elements.copy_from_slice(&state[..DIGEST_ELEMS]);
        out
    }

    /// Digest of everything absorbed so far, then start over.
    pub fn finalize_reset(&mut self) -> HashOut {
        let digest = self.finalize();
        self.reset();
        digest
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn absorb_pending(&mut self) {
        self.state[..RATE].copy_from_slice(&self.pending);
        Poseidon2Goldilocks::permute_state(&mut self.state);
        self.pending_len = 0;
    }
}

impl Default for Poseidon2Hasher {
    fn default() -> Self {
        Self::new()
    }
}
