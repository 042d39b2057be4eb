use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Access to the little-endian 64-bit limbs of a scalar.
pub trait ScalarBits {
    fn to_u64_limbs(&self) -> [u64; 5];
}

pub trait Group:
    Sized + Copy + Add<Output = Self> + AddAssign + Sub<Output = Self> + SubAssign + Neg<Output = Self>
{
    type Scalar: ScalarBits;

    fn identity() -> Self;
    fn is_identity(&self) -> bool;
    fn generator() -> Self;
    fn mul_generator(scalar: &Self::Scalar) -> Self;
    fn double(&self) -> Self;
    fn negate(&self) -> Self;

    /// Plain double-and-add over all 320 scalar bits. Variable time; kept as
    /// the reference the windowed multiplications are checked against.
    #[inline]
    fn scalar_mul(&self, scalar: &Self::Scalar) -> Self {
        let scalar_limbs = scalar.to_u64_limbs();
        let mut result = Self::identity();
        let mut temp = *self;

        for &limb in scalar_limbs.iter() {
            let mut bits = limb;
            for _ in 0..64 {
                if bits & 1 == 1 {
                    result = result + temp;
                }
                temp = temp.double();
                bits >>= 1;
            }
        }

        result
    }

    fn mul_u64(&self, n: u64) -> Self {
        if n == 0 {
            return Self::identity();
        }
        if n == 1 {
            return *self;
        }

        let mut result = Self::identity();
        let mut temp = *self;
        let mut bits = n;

        while bits > 0 {
            if bits & 1 == 1 {
                result = result + temp;
            }
            temp = temp.double();
            bits >>= 1;
        }

        result
    }

    /// Sum of `scalars[i] * points[i]`; the slices are zipped, so extra
    /// entries in the longer one are ignored.
    fn multi_scalar_mul(points: &[Self], scalars: &[Self::Scalar]) -> Self {
        let mut result = Self::identity();
        for (point, scalar) in points.iter().zip(scalars.iter()) {
            result = result + point.scalar_mul(scalar);
        }
        result
    }
}
