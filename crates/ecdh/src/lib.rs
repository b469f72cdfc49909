//! Diffie-Hellman key agreement over the Ed25519 curve
//!
//! Two account holders derive the same 32-byte message key from their own
//! private key and the other's public key:
//!
//! 1. hash the private key with SHA3-512 and clamp the first 32 bytes,
//! 2. decode the peer's public key to a curve point,
//! 3. multiply and pack the result (the shared secret),
//! 4. expand the shared secret with HKDF-SHA3-256 under the `"catapult"`
//!    context string.
//!
//! No step can fail on well-sized input. The only errors come from parsing
//! keys out of slices or hex.
//!
//! # Example
//!
//! ```
//! use peercrypt_ecdh::{derive_symmetric_key, PrivateKey, PublicKey};
//!
//! let alice = PrivateKey::from_hex(
//!     "2a91e1d5c110a8d0105aad4683f962c2a56663a3cad46666b16d243174673d90",
//! )?;
//! let bob_pub = PublicKey::from_hex(
//!     "dcde75de8fb10d4cde015140152ad9cc0ec10b405ed9b91ddd4b13f3f402c4dc",
//! )?;
//! let key = derive_symmetric_key(&alice, &bob_pub)?;
//! assert_eq!(key.as_bytes().len(), 32);
//! # Ok::<(), peercrypt_api::Error>(())
//! ```

#![forbid(unsafe_code)]

mod agreement;
mod keys;
mod params;

pub use agreement::{
    derive_shared_secret, derive_symmetric_key, derive_symmetric_key_with, expand_shared_secret,
    prepare_scalar,
};
pub use keys::{PrivateKey, PublicKey, SharedSecret, SymmetricKey};
pub use params::{KdfParams, SaltPolicy};
pub use peercrypt_algorithms::ed25519::clamp;
