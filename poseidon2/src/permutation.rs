//! Poseidon2 permutation over Goldilocks, width 12.

use field::Goldilocks;
use p3_symmetric::{CryptographicPermutation, Permutation};

use crate::constants::{
    EXTERNAL_ROUND_CONSTANTS, INTERNAL_DIAG, INTERNAL_ROUND_CONSTANTS, ROUNDS_F, ROUNDS_F_HALF,
    ROUNDS_P, WIDTH,
};

/// The Poseidon2 permutation on a `[Goldilocks; 12]` state.
///
/// Round structure: an initial external linear layer, 4 full rounds,
/// 22 partial rounds and 4 more full rounds. The type carries no state; all
/// parameters live in read-only statics.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Poseidon2Goldilocks;

impl Poseidon2Goldilocks {
    pub const fn new() -> Self {
        Poseidon2Goldilocks
    }

    /// Permute `state` in place.
    pub fn permute_state(state: &mut [Goldilocks; WIDTH]) {
        external_linear_layer(state);

        for round_constants in EXTERNAL_ROUND_CONSTANTS.iter().take(ROUNDS_F_HALF) {
            full_round(state, round_constants);
        }

        for &round_constant in INTERNAL_ROUND_CONSTANTS.iter().take(ROUNDS_P) {
            partial_round(state, round_constant);
        }

        for round_constants in EXTERNAL_ROUND_CONSTANTS[ROUNDS_F_HALF..ROUNDS_F].iter() {
            full_round(state, round_constants);
        }
    }
}

impl Permutation<[Goldilocks; WIDTH]> for Poseidon2Goldilocks {
    fn permute(&self, mut input: [Goldilocks; WIDTH]) -> [Goldilocks; WIDTH] {
        Self::permute_state(&mut input);
        input
    }

    fn permute_mut(&self, input: &mut [Goldilocks; WIDTH]) {
        Self::permute_state(input);
    }
}

impl CryptographicPermutation<[Goldilocks; WIDTH]> for Poseidon2Goldilocks {}

/// The S-box `x^7` as a fixed chain: `x^7 = (x^2 * x)^2 * x`.
#[inline(always)]
fn sbox(x: Goldilocks) -> Goldilocks {
    let x2 = x.square();
    let x3 = x2 * x;
    x3.square() * x
}

#[inline]
fn full_round(state: &mut [Goldilocks; WIDTH], round_constants: &[Goldilocks; WIDTH]) {
    for (s, &rc) in state.iter_mut().zip(round_constants.iter()) {
        *s = sbox(*s + rc);
    }
    external_linear_layer(state);
}

#[inline]
fn partial_round(state: &mut [Goldilocks; WIDTH], round_constant: Goldilocks) {
    state[0] = sbox(state[0] + round_constant);
    internal_linear_layer(state);
}

/// Circulant `M4 = circ(2, 3, 1, 1)` applied to one 4-element window.
#[inline(always)]
fn apply_mat4(x: &mut [Goldilocks]) {
    let t01 = x[0] + x[1];
    let t23 = x[2] + x[3];
    let t0123 = t01 + t23;
    let t01123 = t0123 + x[1];
    let t01233 = t0123 + x[3];

    x[3] = t01233 + x[0].double();
    x[1] = t01123 + x[2].double();
    x[0] = t01123 + t01;
    x[2] = t01233 + t23;
}

/// `M_E = circ(2 M4, M4, M4)`: M4 on each window, then add the column sums.
fn external_linear_layer(state: &mut [Goldilocks; WIDTH]) {
    for window in state.chunks_exact_mut(4) {
        apply_mat4(window);
    }

    let mut sums = [Goldilocks::ZERO; 4];
    for (k, sum) in sums.iter_mut().enumerate() {
        *sum = state[k] + state[k + 4] + state[k + 8];
    }

    for (i, s) in state.iter_mut().enumerate() {
        *s += sums[i % 4];
    }
}

/// `M_I = 1 + diag(INTERNAL_DIAG)`.
fn internal_linear_layer(state: &mut [Goldilocks; WIDTH]) {
    let sum: Goldilocks = state.iter().copied().sum();
    for (s, &d) in state.iter_mut().zip(INTERNAL_DIAG.iter()) {
        *s = *s * d + sum;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_from(words: [u64; WIDTH]) -> [Goldilocks; WIDTH] {
        words.map(Goldilocks::new)
    }

    #[test]
    fn test_permute_known_answer() {
        let mut state = state_from([
            5417613058500526590,
            2481548824842427254,
            6473243198879784792,
            1720313757066167274,
            2806320291675974571,
            7407976414706455446,
            1105257841424046885,
            7613435757403328049,
            3376066686066811538,
            5888575799323675710,
            6689309723188675948,
            2468250420241012720,
        ]);

        Poseidon2Goldilocks::permute_state(&mut state);

        let expected = state_from([
            5364184781011389007,
            15309475861242939136,
            5983386513087443499,
            886942118604446276,
            14903657885227062600,
            7742650891575941298,
            1962182278500985790,
            10213480816595178755,
            3510799061817443836,
            4610029967627506430,
            7566382334276534836,
            2288460879362380348,
        ]);
        assert_eq!(state, expected);
    }

    #[test]
    fn test_permutation_trait_matches_permute_state() {
        let input = state_from(core::array::from_fn(|i| i as u64 * 0x0101_0101));
        let mut expected = input;
        Poseidon2Goldilocks::permute_state(&mut expected);

        let perm = Poseidon2Goldilocks::new();
        assert_eq!(perm.permute(input), expected);

        let mut in_place = input;
        perm.permute_mut(&mut in_place);
        assert_eq!(in_place, expected);
    }

    #[test]
    fn test_sbox_is_seventh_power() {
        let x = Goldilocks::new(0xdead_beef_1234_5678);
        assert_eq!(sbox(x), x.exp_u64(7));
    }

    #[test]
    fn test_mat4_matches_circulant() {
        let x: [Goldilocks; 4] = [1u64, 2, 3, 4].map(Goldilocks::new);
        let mut y = x;
        apply_mat4(&mut y);

        // rows of [[2,3,1,1],[1,2,3,1],[1,1,2,3],[3,1,1,2]]
        let rows = [[2u64, 3, 1, 1], [1, 2, 3, 1], [1, 1, 2, 3], [3, 1, 1, 2]];
        for (row, out) in rows.iter().zip(y.iter()) {
            let dot: Goldilocks = row
                .iter()
                .zip(x.iter())
                .map(|(&m, &v)| Goldilocks::new(m) * v)
                .sum();
            assert_eq!(*out, dot);
        }
    }

    #[test]
    fn test_zero_state_is_not_fixed() {
        let mut state = [Goldilocks::ZERO; WIDTH];
        Poseidon2Goldilocks::permute_state(&mut state);
        assert_ne!(state, [Goldilocks::ZERO; WIDTH]);
    }
}
