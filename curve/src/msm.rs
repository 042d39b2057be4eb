use crate::affine::Affine;
use crate::generator_table::generator_window;
use crate::projective::{Projective, NUM_DIGITS, WINDOW};
use crate::ScalarField;

/// Compute `a * G + b * point`, sharing the doublings between both scalars.
///
/// Runs in variable time: zero digits skip their addition. Only meant for
/// public data such as signature verification.
pub fn double_scalar_mul_basepoint(a: &ScalarField, b: &ScalarField, point: &Projective) -> Projective {
    let base_window = generator_window();
    let point_window = point.make_window();

    let mut a_digits = [0i32; NUM_DIGITS];
    let mut b_digits = [0i32; NUM_DIGITS];
    a.recode_signed(&mut a_digits, WINDOW);
    b.recode_signed(&mut b_digits, WINDOW);

    let mut result = Projective::NEUTRAL;
    for i in (0..NUM_DIGITS).rev() {
        if i != NUM_DIGITS - 1 {
            result = result.mdouble(WINDOW);
        }

        if a_digits[i] != 0 {
            result = result.add_affine(&Affine::lookup_vartime(base_window, a_digits[i]));
        }
        if b_digits[i] != 0 {
            result = result.add_affine(&Affine::lookup_vartime(&point_window, b_digits[i]));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{mul_generator, Group};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_matches_separate_multiplications() {
        let mut rng = StdRng::seed_from_u64(21);
        let p = Projective::GENERATOR.mul_u64(987_654_321);

        for _ in 0..4 {
            let a: ScalarField = rng.random();
            let b: ScalarField = rng.random();
            let expected = mul_generator(&a) + p.mul_scalar(&b);
            assert_eq!(double_scalar_mul_basepoint(&a, &b, &p), expected);
        }
    }

    #[test]
    fn test_zero_scalars() {
        let p = Projective::GENERATOR.double();
        let zero = ScalarField::ZERO;
        let one = ScalarField::ONE;

        assert!(double_scalar_mul_basepoint(&zero, &zero, &p).is_neutral());
        assert_eq!(double_scalar_mul_basepoint(&one, &zero, &p), Projective::GENERATOR);
        assert_eq!(double_scalar_mul_basepoint(&zero, &one, &p), p);
    }

    #[test]
    fn test_cancellation() {
        // s*G - s*G with the second term expressed through the point G itself
        let s = ScalarField::from_canonical_u64(0xdead_beef);
        let r = double_scalar_mul_basepoint(&s, &-s, &Projective::GENERATOR);
        assert!(r.is_neutral());
    }

    #[test]
    fn test_neutral_point() {
        let a = ScalarField::from_canonical_u64(77);
        let b = ScalarField::from_canonical_u64(5);
        let r = double_scalar_mul_basepoint(&a, &b, &Projective::NEUTRAL);
        assert_eq!(r, Projective::GENERATOR.mul_u64(77));
    }
}
