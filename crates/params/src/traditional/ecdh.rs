//! Constants for Diffie-Hellman over the Ed25519 curve

/// Size of a private key seed in bytes
pub const ECDH_ED25519_PRIVATE_KEY_SIZE: usize = 32;

/// Size of an encoded public key (compressed Edwards point) in bytes
pub const ECDH_ED25519_PUBLIC_KEY_SIZE: usize = 32;

/// Size of the packed shared secret in bytes
pub const ECDH_ED25519_SHARED_SECRET_SIZE: usize = 32;

/// Size of a clamped scalar in bytes
pub const ECDH_ED25519_SCALAR_SIZE: usize = 32;

/// Size of the symmetric key derived from the shared secret
pub const ECDH_ED25519_SYMMETRIC_KEY_SIZE: usize = 32;

/// Default HKDF context string bound into every derived key
pub const ECDH_KDF_INFO: &[u8] = b"catapult";
