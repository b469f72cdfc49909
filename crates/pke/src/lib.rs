//! Authenticated messages between account key pairs
//!
//! The sender derives a symmetric key from their private key and the
//! recipient's public key, seals with AES-256-GCM and sends the result as
//! hex. The recipient derives the same key from the mirror-image pair.
//!
//! # Example
//!
//! ```
//! use peercrypt_ecdh::{PrivateKey, PublicKey};
//! use peercrypt_pke::{open_text, seal, MessageNonce};
//!
//! let alice = PrivateKey::from_hex(
//!     "2a91e1d5c110a8d0105aad4683f962c2a56663a3cad46666b16d243174673d90",
//! )?;
//! let alice_pub = PublicKey::from_hex(
//!     "2d04dfc0418a1a2893aa56cb651ae2f3fbe3884f77e64476984e9a6bfb1b7b46",
//! )?;
//! let bob = PrivateKey::from_hex(
//!     "e7d2e2e8c2a3a1d1d5b8b5b7c0f0f9b6e2d7a0c3b5f8e9d1c2b3a4f5e6d7c8b9",
//! )?;
//! let bob_pub = PublicKey::from_hex(
//!     "dcde75de8fb10d4cde015140152ad9cc0ec10b405ed9b91ddd4b13f3f402c4dc",
//! )?;
//!
//! let nonce = MessageNonce::from_bytes([0u8; 12]);
//! let wire = seal(&alice, &bob_pub, "hello", &nonce)?;
//! assert_eq!(open_text(&bob, &alice_pub, &wire, &nonce)?, "hello");
//! # Ok::<(), peercrypt_api::Error>(())
//! ```

#![forbid(unsafe_code)]

mod codec;
mod nonce;

pub use codec::{CodecConfig, MessageCodec};
pub use nonce::MessageNonce;

use peercrypt_api::Result;
use peercrypt_ecdh::{PrivateKey, PublicKey};

/// Seal `plaintext` with the default [`CodecConfig`]
pub fn seal(
    sender: &PrivateKey,
    recipient: &PublicKey,
    plaintext: &str,
    nonce: &MessageNonce,
) -> Result<String> {
    MessageCodec::default().seal(sender, recipient, plaintext, nonce)
}

/// Open a hex message with the default [`CodecConfig`]
pub fn open(
    recipient: &PrivateKey,
    sender: &PublicKey,
    message: &str,
    nonce: &MessageNonce,
) -> Result<Vec<u8>> {
    MessageCodec::default().open(recipient, sender, message, nonce)
}

/// Open a hex message and decode it as UTF-8
pub fn open_text(
    recipient: &PrivateKey,
    sender: &PublicKey,
    message: &str,
    nonce: &MessageNonce,
) -> Result<String> {
    MessageCodec::default().open_text(recipient, sender, message, nonce)
}
