//! Walk through one Diffie-Hellman exchange using the raw curve API
//!
//! Run with `cargo run -p peercrypt-algorithms --example curve_walkthrough`.

use peercrypt_algorithms::ed25519::{scalar_mult, CurvePoint, Scalar};
use peercrypt_algorithms::hash;

fn scalar_from_seed(seed: &[u8]) -> Scalar {
    let digest = hash::sha3_512([seed]);
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&digest[..32]);
    Scalar::from_clamped(bytes)
}

fn main() {
    let g = CurvePoint::base_point();
    println!("base point:   {}", hex::encode(g.encode()));

    let a = scalar_from_seed(b"alice");
    let b = scalar_from_seed(b"bob");

    let pub_a = scalar_mult(&a, &g).encode();
    let pub_b = scalar_mult(&b, &g).encode();
    println!("alice public: {}", hex::encode(pub_a));
    println!("bob public:   {}", hex::encode(pub_b));

    let shared_a = scalar_mult(&a, &CurvePoint::decode(&pub_b)).encode();
    let shared_b = scalar_mult(&b, &CurvePoint::decode(&pub_a)).encode();
    assert_eq!(shared_a, shared_b);
    println!("shared point: {}", hex::encode(shared_a));

    // Any 32 bytes decode; off-curve input is lifted rather than rejected.
    let mut junk = [0u8; 32];
    junk[0] = 2;
    println!(
        "y = 2 on curve: {}, lifted anyway: {}",
        CurvePoint::decode_checked(&junk).is_some(),
        hex::encode(scalar_mult(&a, &CurvePoint::decode(&junk)).encode())
    );
}
