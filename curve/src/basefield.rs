use field::QuinticExtension;

/// GF(p^5) with `p = 2^64 - 2^32 + 1`, the field ECgFp5 is defined over.
pub type BaseField = QuinticExtension;

/// Build a `BaseField` constant from canonical coefficients.
#[inline]
pub(crate) const fn from_coeffs(coeffs: [u64; 5]) -> BaseField {
    QuinticExtension::from_u64s(coeffs)
}

// y^2 = x(x^2 + a*x + b) with a = 2, b = 263*z

pub(crate) const A: BaseField = from_coeffs([2, 0, 0, 0, 0]);
pub(crate) const B: BaseField = from_coeffs([0, 263, 0, 0, 0]);
pub(crate) const B_MUL2: BaseField = from_coeffs([0, 2 * 263, 0, 0, 0]);
pub(crate) const B_MUL4: BaseField = from_coeffs([0, 4 * 263, 0, 0, 0]);
pub(crate) const B_MUL16: BaseField = from_coeffs([0, 16 * 263, 0, 0, 0]);
pub(crate) const FOUR: BaseField = from_coeffs([4, 0, 0, 0, 0]);
