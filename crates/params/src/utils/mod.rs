//! Sizes for the hash, KDF and AEAD collaborators

pub mod hash;
pub mod symmetric;
