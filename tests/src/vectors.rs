//! Known-answer values shared across test files
//!
//! Alice and Bob are two fixed accounts; the message vectors were sealed
//! with the default codec configuration.

use peercrypt::ecdh::{PrivateKey, PublicKey};
use peercrypt::pke::MessageNonce;

/// Alice's private key
pub const ALICE_PRIVATE: &str = "2a91e1d5c110a8d0105aad4683f962c2a56663a3cad46666b16d243174673d90";
/// Alice's public key
pub const ALICE_PUBLIC: &str = "2d04dfc0418a1a2893aa56cb651ae2f3fbe3884f77e64476984e9a6bfb1b7b46";
/// Bob's private key
pub const BOB_PRIVATE: &str = "e7d2e2e8c2a3a1d1d5b8b5b7c0f0f9b6e2d7a0c3b5f8e9d1c2b3a4f5e6d7c8b9";
/// Bob's public key
pub const BOB_PUBLIC: &str = "dcde75de8fb10d4cde015140152ad9cc0ec10b405ed9b91ddd4b13f3f402c4dc";

/// Packed Diffie-Hellman point between Alice and Bob
pub const SHARED_SECRET: &str = "799a55a2156b53797b063b3bf991f527dea8a76beaa3705b2ce09d75b329e354";
/// HKDF-SHA3-256 of the shared secret under the default parameters
pub const SYMMETRIC_KEY: &str = "98fc3ab0ed2d72f2e5b52d2c1d5ccb87c4e6891593f9cd97d81587f6eee3b780";

/// Nonce used for the message vectors
pub const NONCE: &str = "000102030405060708090a0b";
/// `"hello"` sealed between Alice and Bob
pub const HELLO: &str = "0a9835734a44d933bf82cd7b52abc6f86db53747b8";
/// The empty message sealed between Alice and Bob
pub const EMPTY: &str = "dec52ffdbf38b175993b2baa6372f6f3";

/// Parse a private key vector
pub fn private_key(s: &str) -> PrivateKey {
    PrivateKey::from_hex(s).expect("valid private key vector")
}

/// Parse a public key vector
pub fn public_key(s: &str) -> PublicKey {
    PublicKey::from_hex(s).expect("valid public key vector")
}

/// The vector nonce
pub fn nonce() -> MessageNonce {
    MessageNonce::from_hex(NONCE).expect("valid nonce vector")
}
