//! Cryptographic primitives for peercrypt
//!
//! This crate holds the only hand-written cryptography in the workspace, the
//! arithmetic over the Ed25519 curve, plus thin facades over the hash, KDF and
//! AEAD collaborators so the upper layers never name a third-party type.
//!
//! # Security Features
//!
//! - Field and point arithmetic without secret-dependent branches or table lookups
//! - Scalar multiplication through a conditional-swap ladder
//! - Zeroization of scalars and intermediate points

#![forbid(unsafe_code)]
#![warn(missing_docs)]

// Elliptic Curve primitives
pub mod ec;
pub use ec::ed25519::{self, CurvePoint, FieldElement, Scalar};

// Hash function facades
pub mod hash;

// KDF facades
pub mod kdf;
pub use kdf::hkdf::HkdfSha3_256;

// AEAD facades
pub mod aead;
pub use aead::{AeadCipher, Aes256GcmCipher};

pub use peercrypt_api::{Error, Result};
