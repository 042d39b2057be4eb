//! Degree-5 extension `GF(p^5) = GF(p)[X] / (X^5 - W)` with `W = 3`.

use core::fmt::{self, Debug, Display, Formatter};
use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use rand::distr::{Distribution, StandardUniform};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{FieldError, Goldilocks};

// X^5 = W
const W: Goldilocks = Goldilocks::new(3);

// W^((p - 1) / 5), the Frobenius twist X^p = DTH_ROOT * X
const DTH_ROOT: Goldilocks = Goldilocks::new(1_041_288_259_238_279_555);

/// Element of the quintic extension, stored as coefficients of
/// `c0 + c1*X + c2*X^2 + c3*X^3 + c4*X^4`.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuinticExtension(pub [Goldilocks; 5]);

impl QuinticExtension {
    pub const ZERO: Self = Self::from_base(Goldilocks::ZERO);
    pub const ONE: Self = Self::from_base(Goldilocks::ONE);
    pub const TWO: Self = Self::from_base(Goldilocks::TWO);
    pub const NEG_ONE: Self = Self::from_base(Goldilocks::NEG_ONE);

    /// Embed a base field element as the constant term.
    #[inline]
    pub const fn from_base(value: Goldilocks) -> Self {
        let z = Goldilocks::ZERO;
        QuinticExtension([value, z, z, z, z])
    }

    /// Build an element from five words, reducing each modulo p.
    #[inline]
    pub const fn from_u64s(words: [u64; 5]) -> Self {
        QuinticExtension([
            Goldilocks::new(words[0]),
            Goldilocks::new(words[1]),
            Goldilocks::new(words[2]),
            Goldilocks::new(words[3]),
            Goldilocks::new(words[4]),
        ])
    }

    /// Build an element from five canonical words.
    pub fn from_canonical_u64s(words: [u64; 5]) -> Result<Self, FieldError> {
        let mut coeffs = [Goldilocks::ZERO; 5];
        for (c, w) in coeffs.iter_mut().zip(words) {
            *c = Goldilocks::from_canonical_checked(w)?;
        }
        Ok(QuinticExtension(coeffs))
    }

    #[inline]
    pub fn to_u64s(&self) -> [u64; 5] {
        self.0.map(|c| c.as_canonical_u64())
    }

    #[inline]
    pub const fn coeffs(&self) -> &[Goldilocks; 5] {
        &self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(Goldilocks::is_zero)
    }

    /// 40-byte little-endian encoding, coefficient 0 first.
    pub fn to_bytes_le(&self) -> [u8; 40] {
        let mut out = [0u8; 40];
        for (chunk, c) in out.chunks_exact_mut(8).zip(self.0.iter()) {
            chunk.copy_from_slice(&c.to_bytes_le());
        }
        out
    }

    pub fn from_bytes_le(bytes: &[u8; 40]) -> Result<Self, FieldError> {
        let mut coeffs = [Goldilocks::ZERO; 5];
        for (c, chunk) in coeffs.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut limb = [0u8; 8];
            limb.copy_from_slice(chunk);
            *c = Goldilocks::from_bytes_le(limb)?;
        }
        Ok(QuinticExtension(coeffs))
    }

    #[inline]
    pub fn double(self) -> Self {
        self + self
    }

    #[inline]
    pub fn triple(self) -> Self {
        self + self + self
    }

    /// Multiply every coefficient by a base field element.
    #[inline]
    pub fn mul_base(self, scalar: Goldilocks) -> Self {
        QuinticExtension(self.0.map(|c| c * scalar))
    }

    pub fn square(self) -> Self {
        let [a0, a1, a2, a3, a4] = self.0;

        let a0_2 = a0.double();
        let a1_2 = a1.double();
        let a2_2 = a2.double();
        let a3_w = a3 * W;
        let a4_w = a4 * W;

        QuinticExtension([
            a0 * a0 + a1_2 * a4_w + a2_2 * a3_w,
            a0_2 * a1 + a2_2 * a4_w + a3 * a3_w,
            a0_2 * a2 + a1 * a1 + a3.double() * a4_w,
            a0_2 * a3 + a1_2 * a2 + a4 * a4_w,
            a0_2 * a4 + a1_2 * a3 + a2 * a2,
        ])
    }

    #[inline]
    pub fn exp_power_of_2(self, power_log: usize) -> Self {
        let mut res = self;
        for _ in 0..power_log {
            res = res.square();
        }
        res
    }

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

    /// The Frobenius map `x -> x^p`.
    #[inline]
    pub fn frobenius(self) -> Self {
        self.repeated_frobenius(1)
    }

    /// `x -> x^(p^count)`: coefficient `i` is scaled by `DTH_ROOT^(count * i)`.
    pub fn repeated_frobenius(self, count: usize) -> Self {
        let count = count % 5;
        if count == 0 {
            return self;
        }

        let z0 = DTH_ROOT.exp_u64(count as u64);
        let mut z = Goldilocks::ONE;
        let mut res = self.0;
        for c in res.iter_mut() {
            *c *= z;
            z *= z0;
        }
        QuinticExtension(res)
    }

    /// Constant term of `self * rhs`, computed without the other four.
    #[inline]
    fn mul_constant_term(&self, rhs: &Self) -> Goldilocks {
        let [a0, a1, a2, a3, a4] = self.0;
        let [b0, b1, b2, b3, b4] = rhs.0;
        a0 * b0 + W * (a1 * b4 + a2 * b3 + a3 * b2 + a4 * b1)
    }

    /// Product of the four non-trivial conjugates, `x^(p + p^2 + p^3 + p^4)`.
    fn conjugate_product(self) -> Self {
        let d = self.frobenius();
        let e = d * d.frobenius();
        e * e.repeated_frobenius(2)
    }

    /// Norm down to the base field, `x^(1 + p + p^2 + p^3 + p^4)`.
    #[inline]
    pub fn norm(self) -> Goldilocks {
        self.mul_constant_term(&self.conjugate_product())
    }

    /// Inverse through the norm map: `x^-1 = conj(x) / N(x)`.
    pub fn try_inverse(self) -> Result<Self, FieldError> {
        let f = self.conjugate_product();
        let g = self.mul_constant_term(&f);
        let g_inv = g.try_inverse()?;
        Ok(f.mul_base(g_inv))
    }

    /// As [`QuinticExtension::try_inverse`], but maps zero to zero.
    #[inline]
    pub fn inverse_or_zero(self) -> Self {
        self.try_inverse().unwrap_or(Self::ZERO)
    }

    /// Legendre symbol of `self` as a base field element: 0, 1 or p - 1.
    #[inline]
    pub fn legendre(self) -> Goldilocks {
        self.norm().legendre()
    }

    #[inline]
    pub fn is_square(self) -> bool {
        self.legendre() != Goldilocks::NEG_ONE
    }

    /// Square root, or `None` when `self` is not a square.
    ///
    /// Reduces to a base field square root: `e` is built from Frobenius
    /// conjugates so that `x * e^2` lies in the base field, then
    /// `sqrt(x) = sqrt(x * e^2) / e`.
    pub fn sqrt(self) -> Option<Self> {
        let v = self.exp_power_of_2(31);
        let d = self * v.exp_power_of_2(32) * v.inverse_or_zero();
        let e = (d * d.repeated_frobenius(2)).frobenius();
        let f = e.square();

        let g = self.mul_constant_term(&f);
        let s = g.sqrt()?;

        Some(Self::from_base(s) * e.inverse_or_zero())
    }

    /// Sign of an element: parity of its first non-zero coefficient.
    pub fn sgn0(&self) -> bool {
        let mut sign = false;
        let mut zero = true;
        for c in self.0.iter() {
            let sign_i = c.as_canonical_u64() & 1 == 1;
            let zero_i = c.is_zero();
            sign = sign || (zero && sign_i);
            zero = zero && zero_i;
        }
        sign
    }

    /// The square root with even sign, so the result is unique.
    pub fn canonical_sqrt(self) -> Option<Self> {
        let root = self.sqrt()?;
        if root.sgn0() {
            Some(-root)
        } else {
            Some(root)
        }
    }

    /// Return `a` when `choice` is false and `b` otherwise, without branching.
    #[inline]
    pub fn conditional_select(a: &Self, b: &Self, choice: bool) -> Self {
        QuinticExtension(core::array::from_fn(|i| {
            Goldilocks::conditional_select(&a.0[i], &b.0[i], choice)
        }))
    }
}

impl Add for QuinticExtension {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        let mut out = self.0;
        for (o, r) in out.iter_mut().zip(rhs.0) {
            *o += r;
        }
        QuinticExtension(out)
    }
}

impl AddAssign for QuinticExtension {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for QuinticExtension {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        let mut out = self.0;
        for (o, r) in out.iter_mut().zip(rhs.0) {
            *o -= r;
        }
        QuinticExtension(out)
    }
}

impl SubAssign for QuinticExtension {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for QuinticExtension {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        QuinticExtension(self.0.map(|c| -c))
    }
}

impl Mul for QuinticExtension {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let [a0, a1, a2, a3, a4] = self.0;
        let [b0, b1, b2, b3, b4] = rhs.0;

        // schoolbook product, folding X^(5 + k) back as W * X^k
        let c0 = a0 * b0 + W * (a1 * b4 + a2 * b3 + a3 * b2 + a4 * b1);
        let c1 = a0 * b1 + a1 * b0 + W * (a2 * b4 + a3 * b3 + a4 * b2);
        let c2 = a0 * b2 + a1 * b1 + a2 * b0 + W * (a3 * b4 + a4 * b3);
        let c3 = a0 * b3 + a1 * b2 + a2 * b1 + a3 * b0 + W * (a4 * b4);
        let c4 = a0 * b4 + a1 * b3 + a2 * b2 + a3 * b1 + a4 * b0;

        QuinticExtension([c0, c1, c2, c3, c4])
    }
}

impl MulAssign for QuinticExtension {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Sum for QuinticExtension {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl Product for QuinticExtension {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

impl From<Goldilocks> for QuinticExtension {
    #[inline]
    fn from(value: Goldilocks) -> Self {
        Self::from_base(value)
    }
}

impl From<[Goldilocks; 5]> for QuinticExtension {
    #[inline]
    fn from(coeffs: [Goldilocks; 5]) -> Self {
        QuinticExtension(coeffs)
    }
}

impl Distribution<QuinticExtension> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> QuinticExtension {
        QuinticExtension(core::array::from_fn(|_| rng.random()))
    }
}

impl Display for QuinticExtension {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let [c0, c1, c2, c3, c4] = self.0;
        write!(f, "{c0} + {c1}*X + {c2}*X^2 + {c3}*X^3 + {c4}*X^4")
    }
}

impl Debug for QuinticExtension {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "QuinticExtension({:?})", self.to_u64s())
    }
}
