use curve::{double_scalar_mul_basepoint, mul_generator, Group, Projective, ScalarField};
use proptest::prelude::*;

fn scalar() -> impl Strategy<Value = ScalarField> {
    any::<[u64; 5]>().prop_map(ScalarField::from_noncanonical_limbs)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn scalar_mul_distributes_over_scalar_addition(a in scalar(), b in scalar()) {
        let lhs = mul_generator(&(a + b));
        let rhs = mul_generator(&a) + mul_generator(&b);
        prop_assert_eq!(lhs, rhs);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn scalar_mul_composes(a in scalar(), b in scalar()) {
        let ab = mul_generator(&(a * b));
        let nested = mul_generator(&a).mul_scalar(&b);
        prop_assert_eq!(ab, nested);
    }

    #[test]
    fn encoding_roundtrips(k in scalar()) {
        let p = mul_generator(&k);
        let decoded = Projective::decode(&p.encode()).expect("encoding of a group element");
        prop_assert_eq!(decoded, p);
        prop_assert!(decoded.is_on_curve());
    }

    #[test]
    fn negation_cancels(k in scalar()) {
        let p = mul_generator(&k);
        prop_assert!((p + p.negate()).is_neutral());
        prop_assert_eq!(mul_generator(&-k), p.negate());
    }

    #[test]
    fn double_scalar_mul_matches_sum(a in scalar(), b in scalar(), c in 1u64..1_000_000) {
        let p = Projective::GENERATOR.mul_u64(c);
        let expected = mul_generator(&a) + p.mul_scalar(&b);
        prop_assert_eq!(double_scalar_mul_basepoint(&a, &b, &p), expected);
    }

    #[test]
    fn scalar_addition_matches_biguint(a in scalar(), b in scalar()) {
        let n = ScalarField::order();
        prop_assert_eq!((a + b).as_biguint(), (a.as_biguint() + b.as_biguint()) % &n);
        prop_assert_eq!((a * b).as_biguint(), (a.as_biguint() * b.as_biguint()) % &n);
    }
}
