//! Authenticated encryption with associated data
//!
//! The [`AeadCipher`] trait is the seam the message codec seals through.
//! Ciphertexts are returned as `ciphertext || tag` with the nonce kept
//! separate; framing it is the caller's job.

use peercrypt_api::Result;

pub mod gcm;

pub use gcm::Aes256GcmCipher;

/// An AEAD cipher keyed once and used for many nonces
pub trait AeadCipher: Sized {
    /// Key length in bytes
    const KEY_SIZE: usize;
    /// Nonce length in bytes
    const NONCE_SIZE: usize;
    /// Authentication tag length in bytes
    const TAG_SIZE: usize;

    /// Algorithm name
    fn name() -> &'static str;

    /// Key the cipher
    fn new(key: &[u8]) -> Result<Self>;

    /// Encrypt and authenticate, returning ciphertext with the tag appended
    fn seal(&self, nonce: &[u8], plaintext: &[u8], aad: Option<&[u8]>) -> Result<Vec<u8>>;

    /// Verify and decrypt `ciphertext || tag`
    fn open(&self, nonce: &[u8], ciphertext: &[u8], aad: Option<&[u8]>) -> Result<Vec<u8>>;
}
