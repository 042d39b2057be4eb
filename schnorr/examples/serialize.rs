use field::Goldilocks;
use rand::SeedableRng;
use rand::rngs::StdRng;
use schnorr::{SigningKey, VerifyingKey, hash_message};

fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let sk = SigningKey::random(&mut rng);
    let vk = VerifyingKey::from(&sk);

    let sk_bytes = bincode::serialize(&sk).expect("serialize sk");
    let vk_bytes = bincode::serialize(&vk).expect("serialize vk");

    let msg_bytes = b"hello schnorr";
    let msg_field: Vec<Goldilocks> = msg_bytes
        .iter()
        .copied()
        .map(|b| Goldilocks::new(b as u64))
        .collect();
    let m_hashed = hash_message(&msg_field);

    let sig = sk.sign(&m_hashed);
    let sig_bytes = bincode::serialize(&sig).expect("serialize sig");

    let sk2: SigningKey = bincode::deserialize(&sk_bytes).expect("deserialize sk");
    let vk2: VerifyingKey = bincode::deserialize(&vk_bytes).expect("deserialize vk");
    let sig2 = bincode::deserialize(&sig_bytes).expect("deserialize sig");

    assert!(vk2.verify(&m_hashed, &sig2));
    assert_eq!(sk2.sign(&m_hashed), sig);

    println!("public key: {:?}", vk2.encoded().to_u64s());
    println!("signature:  {:?}", sig.to_words());
    println!(
        "sizes: sk {} bytes, vk {} bytes, sig {} bytes",
        sk_bytes.len(),
        vk_bytes.len(),
        sig_bytes.len()
    );
}
