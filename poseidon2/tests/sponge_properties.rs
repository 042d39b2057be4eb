use field::Goldilocks;
use poseidon2::{
    hash_n_to_hash_no_pad, hash_n_to_m_no_pad, hash_no_pad, hash_to_quintic_extension, RATE,
};
use proptest::prelude::*;

fn input() -> impl Strategy<Value = Vec<Goldilocks>> {
    prop::collection::vec(any::<u64>().prop_map(Goldilocks::new), 0..40)
}

proptest! {
    #[test]
    fn entry_points_agree(data in input()) {
        prop_assert_eq!(hash_no_pad(&data), hash_n_to_hash_no_pad(&data));
    }

    #[test]
    fn hashing_is_deterministic(data in input()) {
        prop_assert_eq!(hash_no_pad(&data), hash_no_pad(&data));
        prop_assert_eq!(hash_to_quintic_extension(&data), hash_to_quintic_extension(&data));
    }

    #[test]
    fn longer_squeeze_extends_shorter(data in input()) {
        let short = hash_n_to_m_no_pad::<5>(&data);
        let long = hash_n_to_m_no_pad::<{ 2 * RATE + 3 }>(&data);
        prop_assert_eq!(&long[..5], &short[..]);
        prop_assert_eq!(hash_to_quintic_extension(&data).0, short);
    }
}
