//! Shared fixtures for the peercrypt integration tests and benches

pub mod vectors;

use peercrypt::algorithms::ed25519::{scalar_mult, CurvePoint};
use peercrypt::ecdh::{prepare_scalar, PrivateKey, PublicKey};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Public key matching `private_key`
///
/// Key-pair handling is outside the library, so tests build public keys
/// straight from the curve arithmetic.
pub fn public_key_for(private_key: &PrivateKey) -> PublicKey {
    let point = scalar_mult(&prepare_scalar(private_key), &CurvePoint::base_point());
    PublicKey::from_bytes(point.encode())
}

/// Key pair from fixed seed bytes
pub fn key_pair(seed: [u8; 32]) -> (PrivateKey, PublicKey) {
    let private_key = PrivateKey::from_bytes(seed);
    let public_key = public_key_for(&private_key);
    (private_key, public_key)
}

/// Deterministic RNG for reproducible runs
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}
