//! Scalar field of ECgFp5: integers modulo the prime group order
//! n = 1067993516717146951041484916571792702745057740581727230159139685185762082554198619328292418486241
//!
//! n is slightly below 2^319. Elements are five little-endian u64 limbs in
//! normal (non-Montgomery) form, so encoding and decoding are free;
//! multiplication goes through two Montgomery products with R = 2^320.

use core::fmt::{self, Debug, Display, Formatter};
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use field::QuinticExtension;
use num_bigint::BigUint;
use rand::distr::{Distribution, StandardUniform};
use rand::Rng;
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::errors::CurveError;
use crate::group::ScalarBits;

/// Scalar modulo the group order, always canonical.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u64; 5]", into = "[u64; 5]")]
pub struct ScalarField {
    limbs: [u64; 5],
}

// Group order n
const MODULUS: [u64; 5] = [
    0xE80F_D996_948B_FFE1,
    0xE888_5C39_D724_A09C,
    0x7FFF_FFE6_CFB8_0639,
    0x7FFF_FFF1_0000_0016,
    0x7FFF_FFFD_8000_0007,
];

// -1/n mod 2^64
const N0I: u64 = 0xD78B_EF72_057B_7BDF;

// R^2 = 2^640 mod n
const R2: [u64; 5] = [
    0xA010_01DC_E33D_C739,
    0x6C32_28D3_3F62_ACCF,
    0xD1D7_96CC_91CF_8525,
    0xAADF_FF5D_1574_C1D8,
    0x4ACA_13B2_8CA2_51F5,
];

impl ScalarField {
    pub const ZERO: Self = ScalarField { limbs: [0; 5] };

    pub const ONE: Self = ScalarField {
        limbs: [1, 0, 0, 0, 0],
    };

    /// Number of bits needed to hold any scalar.
    pub const BITS: usize = 319;

    /// Create a scalar from a u64, which is always below n.
    #[inline]
    pub const fn from_canonical_u64(val: u64) -> Self {
        ScalarField {
            limbs: [val, 0, 0, 0, 0],
        }
    }

    /// Create a scalar from limbs that must already encode a value below n.
    pub fn from_canonical_limbs(limbs: [u64; 5]) -> Result<Self, CurveError> {
        if is_canonical(limbs) {
            Ok(ScalarField { limbs })
        } else {
            Err(CurveError::NonCanonicalScalar)
        }
    }

    /// Reduce an arbitrary 320-bit little-endian integer modulo n.
    pub fn from_noncanonical_limbs(limbs: [u64; 5]) -> Self {
        // x / 2^320, then * 2^640 / 2^320
        let r = montgomery_mul(&[1, 0, 0, 0, 0], &limbs);
        ScalarField {
            limbs: montgomery_mul(&R2, &r),
        }
    }

    /// Read the five coefficients of an extension element as a 320-bit
    /// integer (coefficient 0 least significant) and reduce it modulo n.
    #[inline]
    pub fn from_quintic(value: &QuinticExtension) -> Self {
        Self::from_noncanonical_limbs(value.to_u64s())
    }

    /// Reduce a big integer modulo n.
    pub fn from_biguint(value: &BigUint) -> Self {
        let reduced = value % Self::order();
        let mut limbs = [0u64; 5];
        for (limb, digit) in limbs.iter_mut().zip(reduced.iter_u64_digits()) {
            *limb = digit;
        }
        ScalarField { limbs }
    }

    /// The group order n.
    pub fn order() -> BigUint {
        limbs_to_biguint(&MODULUS)
    }

    pub fn as_biguint(&self) -> BigUint {
        limbs_to_biguint(&self.limbs)
    }

    #[inline]
    pub const fn to_canonical_limbs(&self) -> [u64; 5] {
        self.limbs
    }

    /// Split the scalar into ten 32-bit halves, low half of limb 0 first.
    pub fn to_u32_limbs(&self) -> [u32; 10] {
        let mut out = [0u32; 10];
        for (i, limb) in self.limbs.iter().enumerate() {
            out[2 * i] = *limb as u32;
            out[2 * i + 1] = (*limb >> 32) as u32;
        }
        out
    }

    pub fn to_bytes_le(&self) -> [u8; 40] {
        let mut out = [0u8; 40];
        for (chunk, limb) in out.chunks_exact_mut(8).zip(self.limbs.iter()) {
            chunk.copy_from_slice(&limb.to_le_bytes());
        }
        out
    }

    pub fn from_bytes_le(bytes: &[u8; 40]) -> Result<Self, CurveError> {
        let mut limbs = [0u64; 5];
        for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(chunk);
            *limb = u64::from_le_bytes(buf);
        }
        Self::from_canonical_limbs(limbs)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs == [0; 5]
    }

    #[inline]
    pub fn square(&self) -> Self {
        *self * *self
    }

    /// Return `a` when `choice` is false and `b` otherwise, without branching.
    #[inline]
    pub fn conditional_select(a: &Self, b: &Self, choice: bool) -> Self {
        ScalarField {
            limbs: select((choice as u64).wrapping_neg(), &a.limbs, &b.limbs),
        }
    }

    /// Signed base-2^w recoding: fills `digits` so that
    /// `self = sum(digits[i] * 2^(w * i))` with every digit in
    /// `-(2^(w-1) - 1) ..= 2^(w-1)`.
    ///
    /// When `w * digits.len() >= 320` the top digit is non-negative and the
    /// expansion is complete. `w` must lie in `2..=10`.
    pub(crate) fn recode_signed(&self, digits: &mut [i32], w: u32) {
        debug_assert!((2..=10).contains(&w), "window width {w} out of range");
        let mask = (1u32 << w) - 1;
        let half = 1u32 << (w - 1);
        let mut carry = 0u32;

        for (i, digit) in digits.iter_mut().enumerate() {
            let chunk = bits_at(&self.limbs, i * w as usize) & mask;
            let bb = chunk + carry;
            // bb > 2^(w-1): borrow 2^w from the next digit
            carry = half.wrapping_sub(bb) >> 31;
            *digit = bb as i32 - (carry << w) as i32;
        }
    }
}

/// The 32 bits of `limbs` starting at bit `pos` (zero beyond bit 320).
#[inline]
fn bits_at(limbs: &[u64; 5], pos: usize) -> u32 {
    let idx = pos / 64;
    let shift = pos % 64;
    if idx >= limbs.len() {
        return 0;
    }

    let mut v = limbs[idx] >> shift;
    if shift > 32 && idx + 1 < limbs.len() {
        v |= limbs[idx + 1] << (64 - shift);
    }
    v as u32
}

fn limbs_to_biguint(limbs: &[u64; 5]) -> BigUint {
    let mut bytes = Vec::with_capacity(40);
    for limb in limbs {
        bytes.extend_from_slice(&limb.to_le_bytes());
    }
    BigUint::from_bytes_le(&bytes)
}

/// Helper: Carrying addition
#[inline]
const fn carrying_add(a: u64, b: u64, carry: bool) -> (u64, bool) {
    let (sum, overflow1) = a.overflowing_add(b);
    let (sum, overflow2) = sum.overflowing_add(carry as u64);
    (sum, overflow1 || overflow2)
}

/// Helper: Borrowing subtraction
#[inline]
const fn borrowing_sub(a: u64, b: u64, borrow: bool) -> (u64, bool) {
    let (diff, overflow1) = a.overflowing_sub(b);
    let (diff, overflow2) = diff.overflowing_sub(borrow as u64);
    (diff, overflow1 || overflow2)
}

/// Raw 320-bit addition, carry out dropped.
#[inline]
fn add_inner(a: &[u64; 5], b: &[u64; 5]) -> [u64; 5] {
    let mut r = [0u64; 5];
    let mut carry = false;
    for i in 0..5 {
        (r[i], carry) = carrying_add(a[i], b[i], carry);
    }
    r
}

/// Raw 320-bit subtraction; the mask is all ones when it borrowed.
#[inline]
fn sub_inner(a: &[u64; 5], b: &[u64; 5]) -> ([u64; 5], u64) {
    let mut r = [0u64; 5];
    let mut borrow = false;
    for i in 0..5 {
        (r[i], borrow) = borrowing_sub(a[i], b[i], borrow);
    }
    (r, (borrow as u64).wrapping_neg())
}

/// `a0` when `mask` is zero, `a1` when it is all ones.
#[inline]
fn select(mask: u64, a0: &[u64; 5], a1: &[u64; 5]) -> [u64; 5] {
    core::array::from_fn(|i| a0[i] ^ (mask & (a0[i] ^ a1[i])))
}

#[inline]
fn is_canonical(limbs: [u64; 5]) -> bool {
    sub_inner(&limbs, &MODULUS).1 != 0
}

/// Montgomery multiplication: `a * b / 2^320 mod n`.
///
/// `a` must be below n; `b` may be any 320-bit value.
fn montgomery_mul(a: &[u64; 5], b: &[u64; 5]) -> [u64; 5] {
    let mut r = [0u64; 5];

    for &m in b.iter() {
        // r <- (r + a*m + f*n) / 2^64, with f chosen so the division is exact
        let f = a[0].wrapping_mul(m).wrapping_add(r[0]).wrapping_mul(N0I);

        let mut cc1 = 0u64;
        let mut cc2 = 0u64;
        for j in 0..5 {
            let z = u128::from(a[j]) * u128::from(m) + u128::from(r[j]) + u128::from(cc1);
            cc1 = (z >> 64) as u64;
            let z = u128::from(f) * u128::from(MODULUS[j]) + u128::from(z as u64) + u128::from(cc2);
            cc2 = (z >> 64) as u64;
            if j > 0 {
                r[j - 1] = z as u64;
            }
        }
        // the new r still fits on 320 bits
        r[4] = cc1.wrapping_add(cc2);
    }

    // r < 2n here
    let (reduced, borrow) = sub_inner(&r, &MODULUS);
    select(borrow, &reduced, &r)
}

impl ScalarBits for ScalarField {
    #[inline]
    fn to_u64_limbs(&self) -> [u64; 5] {
        self.limbs
    }
}

impl Add for ScalarField {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        // both operands are below n < 2^319, so the raw sum fits
        let r0 = add_inner(&self.limbs, &rhs.limbs);
        let (r1, borrow) = sub_inner(&r0, &MODULUS);
        ScalarField {
            limbs: select(borrow, &r1, &r0),
        }
    }
}

impl AddAssign for ScalarField {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for ScalarField {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        let (r0, borrow) = sub_inner(&self.limbs, &rhs.limbs);
        let r1 = add_inner(&r0, &MODULUS);
        ScalarField {
            limbs: select(borrow, &r0, &r1),
        }
    }
}

impl SubAssign for ScalarField {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for ScalarField {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::ZERO - self
    }
}

impl Mul for ScalarField {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        // (a * R^2 / R) * b / R = a * b
        let a_mont = montgomery_mul(&self.limbs, &R2);
        ScalarField {
            limbs: montgomery_mul(&a_mont, &rhs.limbs),
        }
    }
}

impl MulAssign for ScalarField {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Sum for ScalarField {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl TryFrom<[u64; 5]> for ScalarField {
    type Error = CurveError;

    fn try_from(limbs: [u64; 5]) -> Result<Self, Self::Error> {
        Self::from_canonical_limbs(limbs)
    }
}

impl From<ScalarField> for [u64; 5] {
    fn from(value: ScalarField) -> Self {
        value.limbs
    }
}

impl Zeroize for ScalarField {
    fn zeroize(&mut self) {
        self.limbs.zeroize();
    }
}

impl Distribution<ScalarField> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ScalarField {
        loop {
            let mut limbs: [u64; 5] = rng.random();
            // n > 2^318, so keeping 319 bits rejects less than half the draws
            limbs[4] &= u64::MAX >> 1;

            if is_canonical(limbs) {
                return ScalarField { limbs };
            }
        }
    }
}

// Display and Debug
impl Display for ScalarField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let l = self.limbs;
        write!(
            f,
            "0x{:016x}{:016x}{:016x}{:016x}{:016x}",
            l[4], l[3], l[2], l[1], l[0]
        )
    }
}

impl Debug for ScalarField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ScalarField({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn random_scalar(rng: &mut StdRng) -> ScalarField {
        rng.random()
    }

    #[test]
    fn test_zero_one() {
        assert_eq!(ScalarField::ZERO + ScalarField::ZERO, ScalarField::ZERO);
        assert_eq!(ScalarField::ONE * ScalarField::ONE, ScalarField::ONE);
        assert_eq!(ScalarField::ZERO * ScalarField::ONE, ScalarField::ZERO);
        assert_eq!(ScalarField::ONE + ScalarField::ZERO, ScalarField::ONE);
    }

    #[test]
    fn test_montgomery_constants() {
        let n = ScalarField::order();
        assert_eq!(n.bits(), 319);
        let r2 = (BigUint::from(1u8) << 640u32) % &n;
        assert_eq!(limbs_to_biguint(&R2), r2);
        assert_eq!(MODULUS[0].wrapping_mul(N0I), u64::MAX);
    }

    #[test]
    fn test_addition() {
        let a = ScalarField::from_canonical_u64(5);
        let b = ScalarField::from_canonical_u64(7);
        assert_eq!(a + b, ScalarField::from_canonical_u64(12));
    }

    #[test]
    fn test_subtraction() {
        let a = ScalarField::from_canonical_u64(10);
        let b = ScalarField::from_canonical_u64(3);
        assert_eq!(a - b, ScalarField::from_canonical_u64(7));
        assert_eq!(b - a, -ScalarField::from_canonical_u64(7));
    }

    #[test]
    fn test_multiplication() {
        let a = ScalarField::from_canonical_u64(6);
        let b = ScalarField::from_canonical_u64(7);
        assert_eq!(a * b, ScalarField::from_canonical_u64(42));
    }

    #[test]
    fn test_negation() {
        let a = ScalarField::from_canonical_u64(5);
        assert_eq!(a + (-a), ScalarField::ZERO);
        assert_eq!(-ScalarField::ZERO, ScalarField::ZERO);
    }

    #[test]
    fn test_arithmetic_matches_biguint() {
        let mut rng = StdRng::seed_from_u64(42);
        let n = ScalarField::order();
        for _ in 0..64 {
            let a = random_scalar(&mut rng);
            let b = random_scalar(&mut rng);
            let (ba, bb) = (a.as_biguint(), b.as_biguint());

            assert_eq!((a + b).as_biguint(), (&ba + &bb) % &n);
            assert_eq!((a - b).as_biguint(), (&ba + &n - &bb) % &n);
            assert_eq!((a * b).as_biguint(), (&ba * &bb) % &n);
        }
    }

    #[test]
    fn test_noncanonical_reduction() {
        let n = ScalarField::order();
        let all_ones = [u64::MAX; 5];
        let expected = limbs_to_biguint(&all_ones) % &n;
        assert_eq!(ScalarField::from_noncanonical_limbs(all_ones).as_biguint(), expected);

        assert_eq!(ScalarField::from_noncanonical_limbs(MODULUS), ScalarField::ZERO);
        assert_eq!(
            ScalarField::from_noncanonical_limbs([42, 0, 0, 0, 0]),
            ScalarField::from_canonical_u64(42)
        );
    }

    #[test]
    fn test_from_quintic_reduces_mod_order() {
        let q = QuinticExtension::from_u64s([1, 2, 3, 4, 0xFFFF_FFFF_0000_0000]);
        let expected = limbs_to_biguint(&q.to_u64s()) % ScalarField::order();
        assert_eq!(ScalarField::from_quintic(&q).as_biguint(), expected);
    }

    #[test]
    fn test_canonical_checks() {
        assert_eq!(
            ScalarField::from_canonical_limbs(MODULUS),
            Err(CurveError::NonCanonicalScalar)
        );
        let mut n_minus_one = MODULUS;
        n_minus_one[0] -= 1;
        let s = ScalarField::from_canonical_limbs(n_minus_one).expect("below n");
        assert_eq!(s + ScalarField::ONE, ScalarField::ZERO);
        assert_eq!(ScalarField::from_bytes_le(&s.to_bytes_le()), Ok(s));
    }

    #[test]
    fn test_biguint_roundtrip() {
        let mut rng = StdRng::seed_from_u64(9);
        let a = random_scalar(&mut rng);
        assert_eq!(ScalarField::from_biguint(&a.as_biguint()), a);
        let shifted = a.as_biguint() + ScalarField::order();
        assert_eq!(ScalarField::from_biguint(&shifted), a);
    }

    #[test]
    fn test_recode_signed_reconstructs() {
        let mut rng = StdRng::seed_from_u64(3);
        let n = ScalarField::order();
        for _ in 0..16 {
            let a = random_scalar(&mut rng);
            let mut digits = [0i32; 64];
            a.recode_signed(&mut digits, 5);

            assert!(digits.iter().all(|&d| (-15..=16).contains(&d)));
            assert!(digits[63] >= 0);

            // sum of d_i * 32^i, computed as (positive part) - (negative part)
            let mut pos = BigUint::from(0u8);
            let mut neg = BigUint::from(0u8);
            for (i, &d) in digits.iter().enumerate() {
                let weight = BigUint::from(1u8) << (5 * i);
                if d >= 0 {
                    pos += weight * d as u32;
                } else {
                    neg += weight * d.unsigned_abs();
                }
            }
            assert_eq!((pos + &n - neg) % &n, a.as_biguint());
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "window width 0 out of range")]
    fn test_recode_signed_rejects_zero_width() {
        let mut digits = [0i32; 64];
        ScalarField::ONE.recode_signed(&mut digits, 0);
    }

    #[test]
    fn test_u32_limbs() {
        let a = ScalarField::from_canonical_limbs([0x1111_2222_3333_4444, 5, 0, 0, 0]).expect("small");
        let halves = a.to_u32_limbs();
        assert_eq!(halves[0], 0x3333_4444);
        assert_eq!(halves[1], 0x1111_2222);
        assert_eq!(halves[2], 5);
    }

    #[test]
    fn test_limb_conversions_reject_noncanonical() {
        let s = ScalarField::from_canonical_u64(99);
        let limbs: [u64; 5] = s.into();
        assert_eq!(limbs, [99, 0, 0, 0, 0]);
        assert_eq!(ScalarField::try_from(limbs), Ok(s));
        assert!(ScalarField::try_from(MODULUS).is_err());
    }
}
