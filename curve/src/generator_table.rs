use std::sync::OnceLock;

use crate::affine::Affine;
use crate::projective::{Projective, WINDOW_SIZE};
use crate::ScalarField;

static GENERATOR_WINDOW: OnceLock<[Affine; WINDOW_SIZE]> = OnceLock::new();

/// Affine window `[G, 2G, ..., 16G]`, built on first use and shared by every
/// thread afterwards.
pub(crate) fn generator_window() -> &'static [Affine; WINDOW_SIZE] {
    GENERATOR_WINDOW.get_or_init(|| Projective::GENERATOR.make_window())
}

/// `scalar * G`, with the same fixed operation sequence as
/// [`Projective::mul_scalar`].
pub fn mul_generator(scalar: &ScalarField) -> Projective {
    Projective::mul_with_window(generator_window(), scalar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Group;

    #[test]
    fn test_window_matches_fresh_window() {
        assert_eq!(generator_window(), &Projective::GENERATOR.make_window());
    }

    #[test]
    fn test_mul_generator_small() {
        assert!(mul_generator(&ScalarField::ZERO).is_neutral());
        assert_eq!(mul_generator(&ScalarField::ONE), Projective::GENERATOR);
        assert_eq!(
            mul_generator(&ScalarField::from_canonical_u64(1000)),
            Projective::GENERATOR.mul_u64(1000)
        );
    }

    #[test]
    fn test_mul_generator_known_answers() {
        let pk = |k: u64| mul_generator(&ScalarField::from_canonical_u64(k)).encode().to_u64s();

        assert_eq!(pk(1), [4, 0, 0, 0, 0]);
        assert_eq!(
            pk(2),
            [
                9158372289535233080,
                10327954189174774606,
                15619016834217869504,
                16517814385077291378,
                10141215455047792195,
            ]
        );
        assert_eq!(
            pk(12345),
            [
                14210994807127929936,
                16527325422111769163,
                10085545243287350486,
                18071199618197607317,
                954669790609101802,
            ]
        );

        let last = mul_generator(&-ScalarField::ONE).encode().to_u64s();
        assert_eq!(last, [18446744069414584317, 0, 0, 0, 0]);
    }
}
