//! # peercrypt
//!
//! Key agreement and message sealing for peer-to-peer messaging between
//! account key pairs.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! peercrypt = "0.3"
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `serde`: hex (de)serialization of public keys
//! - `full`: all features, plus a re-export of `rand`
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`peercrypt-algorithms`]: curve arithmetic plus hash, KDF and AEAD facades
//! - [`peercrypt-ecdh`]: shared secret and symmetric key derivation
//! - [`peercrypt-pke`]: hex-encoded authenticated messages
//!
//! ## Example
//!
//! ```
//! use peercrypt::prelude::*;
//!
//! let alice = PrivateKey::from_hex(
//!     "2a91e1d5c110a8d0105aad4683f962c2a56663a3cad46666b16d243174673d90",
//! )?;
//! let bob_pub = PublicKey::from_hex(
//!     "dcde75de8fb10d4cde015140152ad9cc0ec10b405ed9b91ddd4b13f3f402c4dc",
//! )?;
//! let nonce = MessageNonce::from_hex("000102030405060708090a0b")?;
//!
//! let wire = seal(&alice, &bob_pub, "hello", &nonce)?;
//! assert_eq!(wire, "0a9835734a44d933bf82cd7b52abc6f86db53747b8");
//! # Ok::<(), Error>(())
//! ```

#![forbid(unsafe_code)]

// Core re-exports
pub use peercrypt_api as api;
pub use peercrypt_internal as internal;
pub use peercrypt_params as params;

pub use peercrypt_algorithms as algorithms;
pub use peercrypt_ecdh as ecdh;
pub use peercrypt_pke as pke;

#[cfg(feature = "full")]
pub use rand;
pub use zeroize;

/// Common imports for peercrypt users
pub mod prelude {
    // Error types
    pub use crate::api::{Error, Result, ResultExt};

    // Key agreement
    pub use crate::ecdh::{
        derive_shared_secret, derive_symmetric_key, derive_symmetric_key_with, KdfParams,
        PrivateKey, PublicKey, SaltPolicy, SharedSecret, SymmetricKey,
    };

    // Message sealing
    pub use crate::pke::{open, open_text, seal, CodecConfig, MessageCodec, MessageNonce};
}
