use field::RandomField;
use rand::distr::{Distribution, StandardUniform};
use rand::Rng;

use crate::ScalarField;

impl RandomField for ScalarField {
    #[inline]
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        StandardUniform.sample(rng)
    }
}
