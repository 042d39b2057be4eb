//! The Goldilocks prime field, p = 2^64 - 2^32 + 1.
//!
//! Elements are kept canonical in `[0, p)` after every operation. Products are
//! widened to 128 bits and folded back with the identities
//! `2^64 = 2^32 - 1` and `2^96 = -1 (mod p)`, so no division is ever needed.

use core::fmt::{self, Debug, Display, Formatter};
use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use rand::distr::{Distribution, StandardUniform};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::FieldError;

// Field modulus: p = 2^64 - 2^32 + 1
const ORDER: u64 = 0xFFFF_FFFF_0000_0001;

// 2^64 mod p
const EPSILON: u64 = 0xFFFF_FFFF;

// p - 1 = 2^32 * (2^32 - 1)
const TWO_ADICITY: usize = 32;

// 7^(2^32 - 1): generator of the 2^32-torsion, 7 being a non-residue
const POWER_OF_TWO_GENERATOR: u64 = 1_753_635_133_440_165_772;

/// Element of the Goldilocks field, always stored in canonical form.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Goldilocks(u64);

impl Goldilocks {
    /// The field modulus as a raw integer.
    pub const ORDER_U64: u64 = ORDER;

    pub const ZERO: Self = Goldilocks(0);
    pub const ONE: Self = Goldilocks(1);
    pub const TWO: Self = Goldilocks(2);
    pub const NEG_ONE: Self = Goldilocks(ORDER - 1);

    /// Create a field element from any `u64`, reducing it modulo p.
    #[inline]
    pub const fn new(value: u64) -> Self {
        Goldilocks(canonicalize(value))
    }

    /// Create a field element from a value that must already lie in `[0, p)`.
    pub fn from_canonical_checked(value: u64) -> Result<Self, FieldError> {
        if value < ORDER {
            Ok(Goldilocks(value))
        } else {
            Err(FieldError::NonCanonical(value))
        }
    }

    /// Reduce an arbitrary 128-bit integer modulo p.
    #[inline]
    pub fn from_noncanonical_u128(value: u128) -> Self {
        reduce128(value)
    }

    #[inline]
    pub const fn as_canonical_u64(&self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Little-endian encoding of the canonical value.
    #[inline]
    pub fn to_bytes_le(&self) -> [u8; 8] {
        self.0.to_le_bytes()
    }

    /// Inverse of [`Goldilocks::to_bytes_le`]; rejects non-canonical encodings.
    pub fn from_bytes_le(bytes: [u8; 8]) -> Result<Self, FieldError> {
        Self::from_canonical_checked(u64::from_le_bytes(bytes))
    }

    #[inline]
    pub fn double(self) -> Self {
        self + self
    }

    #[inline]
    pub fn square(self) -> Self {
        self * self
    }

    /// Square-and-multiply over the bits of `power`.
    pub fn exp_u64(self, power: u64) -> Self {
        let mut current = self;
        let mut product = Self::ONE;
        let mut bits = power;

        while bits != 0 {
            if bits & 1 == 1 {
                product *= current;
            }
            current = current.square();
            bits >>= 1;
        }

        product
    }

    /// Compute `self^(2^power_log)` by repeated squaring.
    #[inline]
    pub fn exp_power_of_2(self, power_log: usize) -> Self {
        let mut res = self;
        for _ in 0..power_log {
            res = res.square();
        }
        res
    }

    /// Multiplicative inverse via Fermat's little theorem, `x^(p-2)`.
    pub fn try_inverse(self) -> Result<Self, FieldError> {
        if self.is_zero() {
            return Err(FieldError::NonInvertible);
        }
        Ok(self.exp_u64(ORDER - 2))
    }

    /// `x^(p-2)`, which maps zero to zero.
    #[inline]
    pub fn inverse_or_zero(self) -> Self {
        self.exp_u64(ORDER - 2)
    }

    /// Legendre symbol as a field element: 0, 1 or p - 1.
    #[inline]
    pub fn legendre(self) -> Self {
        self.exp_u64((ORDER - 1) / 2)
    }

    #[inline]
    pub fn is_square(self) -> bool {
        self.legendre() != Self::NEG_ONE
    }

    /// Square root by Tonelli-Shanks. Returns `None` for non-residues.
    ///
    /// Either root may be returned; callers that need a canonical root pick
    /// one themselves.
    pub fn sqrt(self) -> Option<Self> {
        if self.is_zero() {
            return Some(self);
        }
        if !self.is_square() {
            return None;
        }

        // odd part of p - 1 is q = 2^32 - 1, so (q + 1) / 2 = 2^31
        let mut m = TWO_ADICITY;
        let mut c = Goldilocks(POWER_OF_TWO_GENERATOR);
        let mut t = self.exp_u64(EPSILON);
        let mut r = self.exp_power_of_2(31);

        while t != Self::ONE {
            let mut i = 0;
            let mut t2i = t;
            while t2i != Self::ONE {
                t2i = t2i.square();
                i += 1;
            }

            let b = c.exp_power_of_2(m - i - 1);
            m = i;
            c = b.square();
            t *= c;
            r *= b;
        }

        Some(r)
    }

    /// Return `a` when `choice` is false and `b` otherwise, without branching.
    #[inline]
    pub fn conditional_select(a: &Self, b: &Self, choice: bool) -> Self {
        let mask = (choice as u64).wrapping_neg();
        Goldilocks(a.0 ^ (mask & (a.0 ^ b.0)))
    }
}

#[inline]
const fn canonicalize(value: u64) -> u64 {
    // any u64 is below 2p, so one subtraction suffices
    if value >= ORDER {
        value - ORDER
    } else {
        value
    }
}

/// Reduce a 128-bit product modulo p.
#[inline]
fn reduce128(x: u128) -> Goldilocks {
    let x_lo = x as u64;
    let x_hi = (x >> 64) as u64;
    let x_hi_hi = x_hi >> 32;
    let x_hi_lo = x_hi & EPSILON;

    // x_hi_hi * 2^96 = -x_hi_hi
    let (mut t0, borrow) = x_lo.overflowing_sub(x_hi_hi);
    if borrow {
        t0 = t0.wrapping_sub(EPSILON);
    }

    // x_hi_lo * 2^64 = x_hi_lo * (2^32 - 1)
    let t1 = x_hi_lo * EPSILON;
    let (sum, carry) = t0.overflowing_add(t1);
    let t2 = sum.wrapping_add(EPSILON * carry as u64);

    Goldilocks::new(t2)
}

impl Add for Goldilocks {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        let (sum, over) = self.0.overflowing_add(rhs.0);
        // a wrapped sum is below p - EPSILON, so the correction cannot overflow
        Goldilocks::new(sum.wrapping_add(EPSILON * over as u64))
    }
}

impl AddAssign for Goldilocks {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Goldilocks {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        let (diff, under) = self.0.overflowing_sub(rhs.0);
        Goldilocks(diff.wrapping_sub(EPSILON * under as u64))
    }
}

impl SubAssign for Goldilocks {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Goldilocks {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::ZERO - self
    }
}

impl Mul for Goldilocks {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        reduce128(u128::from(self.0) * u128::from(rhs.0))
    }
}

impl MulAssign for Goldilocks {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Sum for Goldilocks {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl Product for Goldilocks {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

impl TryFrom<u64> for Goldilocks {
    type Error = FieldError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Goldilocks::from_canonical_checked(value)
    }
}

impl From<Goldilocks> for u64 {
    #[inline]
    fn from(value: Goldilocks) -> Self {
        value.0
    }
}

impl Distribution<Goldilocks> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Goldilocks {
        loop {
            let candidate: u64 = rng.random();
            if candidate < ORDER {
                return Goldilocks(candidate);
            }
        }
    }
}

impl Display for Goldilocks {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl Debug for Goldilocks {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Goldilocks({})", self.0)
    }
}
