// ECgFp5: y^2 = x(x^2 + 2x + 263z) over GF(p^5), p = 2^64 - 2^32 + 1
// Group order (prime): n = 1067993516717146951041484916571792702745057740581727230159139685185762082554198619328292418486241 (319 bits)
// Cofactor of the full curve: 2; points are represented in the prime-order group
// Canonical encoding: w = y/x = 1/u, the neutral element encodes to 0

use crate::affine::Affine;
use crate::basefield::{from_coeffs, BaseField, A, B, B_MUL16, B_MUL2, B_MUL4, FOUR};
use crate::errors::CurveError;
use crate::{double_scalar_mul_basepoint, mul_generator, Group, ScalarField};
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Signed window width used by scalar multiplication.
pub const WINDOW: u32 = 5;

/// Number of precomputed multiples `P, 2P, ..., 16P` in a window.
pub const WINDOW_SIZE: usize = 1 << (WINDOW - 1);

/// Signed digits needed to cover a 320-bit scalar.
pub(crate) const NUM_DIGITS: usize = 64;

/// Point in fractional coordinates `(X : Z : U : T)`, standing for the
/// affine `x = X/Z` and `u = U/T`, where `u = x/y`.
///
/// The neutral element is `(0 : 1 : 0 : 1)`. The addition and doubling
/// formulas are complete, so there is no identity flag and no branch on
/// special cases.
#[derive(Copy, Clone, Debug)]
pub struct Projective {
    pub x: BaseField,
    pub z: BaseField,
    pub u: BaseField,
    pub t: BaseField,
}

impl Projective {
    /// The neutral element: (0 : 1 : 0 : 1)
    pub const NEUTRAL: Self = Projective {
        x: BaseField::ZERO,
        z: BaseField::ONE,
        u: BaseField::ZERO,
        t: BaseField::ONE,
    };

    /// Conventional generator, encoding to `w = 4`.
    pub const GENERATOR: Self = Projective {
        x: from_coeffs([
            12883135586176881569,
            4356519642755055268,
            5248930565894896907,
            2165973894480315022,
            2448410071095648785,
        ]),
        z: BaseField::ONE,
        u: BaseField::ONE,
        t: from_coeffs([4, 0, 0, 0, 0]),
    };

    #[inline]
    pub fn is_neutral(&self) -> bool {
        self.u.is_zero()
    }

    /// Check `X*Z*T^2 = U^2 * (X^2 + a*X*Z + b*Z^2)` with `Z, T != 0`.
    pub fn is_on_curve(&self) -> bool {
        if self.z.is_zero() || self.t.is_zero() {
            return false;
        }

        let lhs = self.x * self.z * self.t.square();
        let rhs = self.u.square()
            * (self.x.square() + A * self.x * self.z + B * self.z.square());
        lhs == rhs
    }

    /// Canonical encoding `w = T/U` as a single extension element.
    #[inline]
    pub fn encode(&self) -> BaseField {
        self.t * self.u.inverse_or_zero()
    }

    /// Decode an encoding produced by [`Projective::encode`].
    ///
    /// With `w = y/x` the curve equation becomes
    /// `x^2 - (w^2 - a)x + b = 0`; of the two roots exactly one is a
    /// non-square, and that one is the x-coordinate in the prime-order group.
    pub fn decode(w: &BaseField) -> Result<Self, CurveError> {
        let e = w.square() - A;
        let delta = e.square() - B_MUL4;

        let Some(r) = delta.canonical_sqrt() else {
            // w = 0 gives delta = a^2 - 4b, a non-square: the neutral element
            if w.is_zero() {
                return Ok(Self::NEUTRAL);
            }
            return Err(CurveError::MalformedPoint);
        };

        let half = BaseField::TWO.inverse_or_zero();
        let x1 = (e + r) * half;
        let x2 = (e - r) * half;
        let x = if x1.is_square() { x2 } else { x1 };

        Ok(Projective {
            x,
            z: BaseField::ONE,
            u: BaseField::ONE,
            t: *w,
        })
    }

    /// General addition, 10M.
    pub fn add_point(&self, rhs: &Self) -> Self {
        let (x1, z1, u1, t1_) = (self.x, self.z, self.u, self.t);
        let (x2, z2, u2, t2_) = (rhs.x, rhs.z, rhs.u, rhs.t);

        let t1 = x1 * x2;
        let t2 = z1 * z2;
        let t3 = u1 * u2;
        let t4 = t1_ * t2_;
        let t5 = (x1 + z1) * (x2 + z2) - (t1 + t2);
        let t6 = (u1 + t1_) * (u2 + t2_) - (t3 + t4);
        let t7 = t1 + t2 * B;
        let t8 = t4 * t7;
        let t9 = t3 * (t5 * B_MUL2 + t7.double());
        let t10 = (t4 + t3.double()) * (t5 + t7);

        Projective {
            x: (t10 - t8) * B,
            z: t8 - t9,
            u: t6 * (t2 * B - t1),
            t: t8 + t9,
        }
    }

    /// Mixed addition with an affine point, 8M.
    pub fn add_affine(&self, rhs: &Affine) -> Self {
        let (x1, z1, u1, t1_) = (self.x, self.z, self.u, self.t);
        let (x2, u2) = (rhs.x, rhs.u);

        let t1 = x1 * x2;
        let t2 = z1;
        let t3 = u1 * u2;
        let t4 = t1_;
        let t5 = x1 + x2 * z1;
        let t6 = u1 + u2 * t1_;
        let t7 = t1 + t2 * B;
        let t8 = t4 * t7;
        let t9 = t3 * (t5 * B_MUL2 + t7.double());
        let t10 = (t4 + t3.double()) * (t5 + t7);

        Projective {
            x: (t10 - t8) * B,
            z: t8 - t9,
            u: t6 * (t2 * B - t1),
            t: t8 + t9,
        }
    }

    /// Point doubling, 4M + 5S.
    pub fn double(&self) -> Self {
        let (x, z, u, t) = (self.x, self.z, self.u, self.t);

        let t1 = z * t;
        let t2 = t1 * t;
        let x1 = t2.square();
        let z1 = t1 * u;
        let t3 = u.square();
        let w1 = t2 - t3 * (x + z).double();
        let t4 = z1.square();

        let z_new = w1.square();
        Projective {
            x: t4 * B_MUL4,
            z: z_new,
            u: (w1 + z1).square() - (t4 + z_new),
            t: x1.double() - (t4 * FOUR + z_new),
        }
    }

    /// `2^n * self`, sharing work across the successive doublings.
    pub fn mdouble(&self, n: u32) -> Self {
        match n {
            0 => return *self,
            1 => return self.double(),
            _ => {}
        }

        let (x0, z0, u0, t0) = (self.x, self.z, self.u, self.t);

        // first doubling, into (x, w, z) coordinates
        let t1 = z0 * t0;
        let t2 = t1 * t0;
        let x1 = t2.square();
        let z1 = t1 * u0;
        let t3 = u0.square();
        let w1 = t2 - (x0 + z0).double() * t3;
        let t4 = w1.square();
        let t5 = z1.square();
        let mut x = t5.square() * B_MUL16;
        let mut w = x1.double() - (t5 * FOUR + t4);
        let mut z = (w1 + z1).square() - (t4 + t5);

        let b4_minus_4 = B_MUL4 - FOUR;
        for _ in 2..n {
            let t1 = z.square();
            let t2 = t1.square();
            let t3 = w.square();
            let t4 = t3.square();
            let t5 = (w + z).square() - (t1 + t3);
            z = t5 * ((x + t1).double() - t3);
            x = t2 * t4 * B_MUL16;
            w = -(t4 + t2 * b4_minus_4);
        }

        // last doubling, back to (X : Z : U : T)
        let t1 = w.square();
        let t2 = z.square();
        let t3 = (w + z).square() - (t1 + t2);
        let w1 = t1 - (x + t2).double();

        let z_new = w1.square();
        Projective {
            x: t3.square() * B,
            z: z_new,
            u: t3 * w1,
            t: t1.double() * (t1 - t2.double()) - z_new,
        }
    }

    #[inline]
    pub fn negate(&self) -> Self {
        Projective {
            x: self.x,
            z: self.z,
            u: -self.u,
            t: self.t,
        }
    }

    /// Convert to affine `(x, u)`, with a single inversion.
    pub fn to_affine(&self) -> Affine {
        let mut out = [Affine::NEUTRAL];
        Self::batch_to_affine_into(core::slice::from_ref(self), &mut out);
        out[0]
    }

    /// Convert many points to affine with one shared inversion.
    pub fn batch_to_affine(points: &[Self]) -> Vec<Affine> {
        let mut out = vec![Affine::NEUTRAL; points.len()];
        Self::batch_to_affine_into(points, &mut out);
        out
    }

    /// Montgomery's trick: one inversion of the product of every `Z` and
    /// `T`, then unwind to recover each `1/Z` and `1/T`.
    ///
    /// `out` must have the same length as `points`.
    pub(crate) fn batch_to_affine_into(points: &[Self], out: &mut [Affine]) {
        debug_assert_eq!(points.len(), out.len());
        let n = points.len().min(out.len());
        if n == 0 {
            return;
        }

        // forward pass: stash running products
        let mut m = points[0].z * points[0].t;
        for i in 1..n {
            out[i].x = m;
            m *= points[i].z;
            out[i].u = m;
            m *= points[i].t;
        }

        m = m.inverse_or_zero();

        // backward pass: m holds 1 / (prefix product up to point i)
        for i in (1..n).rev() {
            out[i].u = points[i].u * out[i].u * m;
            m *= points[i].t;
            out[i].x = points[i].x * out[i].x * m;
            m *= points[i].z;
        }
        out[0].u = points[0].u * points[0].z * m;
        m *= points[0].t;
        out[0].x = points[0].x * m;
    }

    /// Affine window `[P, 2P, ..., 16P]` for signed 5-bit digits.
    pub fn make_window(&self) -> [Affine; WINDOW_SIZE] {
        let mut tmp = [*self; WINDOW_SIZE];
        for i in 1..WINDOW_SIZE {
            // tmp[i] = (i + 1) * P
            tmp[i] = if i & 1 == 0 {
                tmp[i - 1].add_point(self)
            } else {
                tmp[i >> 1].double()
            };
        }

        let mut window = [Affine::NEUTRAL; WINDOW_SIZE];
        Self::batch_to_affine_into(&tmp, &mut window);
        window
    }

    /// Scalar multiplication with a fixed sequence of operations:
    /// 64 rounds of 5 doublings and one affine addition, with every window
    /// lookup in constant time.
    pub fn mul_scalar(&self, scalar: &ScalarField) -> Self {
        let window = self.make_window();
        Self::mul_with_window(&window, scalar)
    }

    pub(crate) fn mul_with_window(window: &[Affine; WINDOW_SIZE], scalar: &ScalarField) -> Self {
        let mut digits = [0i32; NUM_DIGITS];
        scalar.recode_signed(&mut digits, WINDOW);

        let mut acc = Affine::lookup(window, digits[NUM_DIGITS - 1]).to_projective();
        for &digit in digits[..NUM_DIGITS - 1].iter().rev() {
            acc = acc.mdouble(WINDOW);
            acc = acc.add_affine(&Affine::lookup(window, digit));
        }
        acc
    }

    /// `scalar * G` using the shared generator window.
    #[inline]
    pub fn mul_generator(scalar: &ScalarField) -> Self {
        mul_generator(scalar)
    }

    /// `a * G + b * point` in variable time; for public inputs only.
    #[inline]
    pub fn double_scalar_mul_basepoint(a: &ScalarField, b: &ScalarField, point: &Self) -> Self {
        double_scalar_mul_basepoint(a, b, point)
    }
}

impl Default for Projective {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl PartialEq for Projective {
    /// Points are equal iff `u1 = u2`, i.e. `U1 * T2 = U2 * T1`.
    fn eq(&self, other: &Self) -> bool {
        self.u * other.t == other.u * self.t
    }
}

impl Eq for Projective {}

impl Group for Projective {
    type Scalar = ScalarField;

    #[inline]
    fn identity() -> Self {
        Self::NEUTRAL
    }

    #[inline]
    fn is_identity(&self) -> bool {
        self.is_neutral()
    }

    #[inline]
    fn generator() -> Self {
        Self::GENERATOR
    }

    #[inline]
    fn mul_generator(scalar: &ScalarField) -> Self {
        mul_generator(scalar)
    }

    #[inline]
    fn double(&self) -> Self {
        Projective::double(self)
    }

    #[inline]
    fn negate(&self) -> Self {
        Projective::negate(self)
    }
}

impl Add for Projective {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        self.add_point(&other)
    }
}

impl Add<Affine> for Projective {
    type Output = Self;

    #[inline]
    fn add(self, other: Affine) -> Self {
        self.add_affine(&other)
    }
}

impl AddAssign for Projective {
    fn add_assign(&mut self, other: Self) {
        *self = self.add_point(&other);
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl Sub for Projective {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.add_point(&other.negate())
    }
}

impl SubAssign for Projective {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Projective {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl Mul<ScalarField> for Projective {
    type Output = Self;

    fn mul(self, scalar: ScalarField) -> Self {
        self.mul_scalar(&scalar)
    }
}

impl Mul<&ScalarField> for Projective {
    type Output = Self;

    fn mul(self, scalar: &ScalarField) -> Self {
        self.mul_scalar(scalar)
    }
}

impl Mul<Projective> for ScalarField {
    type Output = Projective;

    fn mul(self, point: Projective) -> Projective {
        point.mul_scalar(&self)
    }
}

// Points serialize as their 40-byte canonical encoding.
impl Serialize for Projective {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.encode().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Projective {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let w = BaseField::deserialize(deserializer)?;
        Projective::decode(&w).map_err(serde::de::Error::custom)
    }
}
