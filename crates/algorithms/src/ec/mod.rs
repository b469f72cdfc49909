//! Elliptic curve primitives
//!
//! Only the Ed25519 curve is provided; the module split mirrors a
//! multi-curve layout so the ECDH layer addresses it as `ec::ed25519`.

pub mod ed25519;
