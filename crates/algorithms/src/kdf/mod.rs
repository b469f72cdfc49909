//! Key derivation functions
//!
//! Only HKDF over SHA3-256 is needed: it turns the encoded Diffie-Hellman
//! point into the symmetric message key.

pub mod hkdf;

pub use self::hkdf::HkdfSha3_256;
