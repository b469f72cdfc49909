//! Per-message nonce

use peercrypt_api::error::validate;
use peercrypt_api::{Error, Result};
use peercrypt_params::utils::symmetric::AES_GCM_NONCE_SIZE;
use rand::{CryptoRng, RngCore};

/// 96-bit AES-GCM nonce supplied by the caller for every message
///
/// The codec never invents a nonce. Reusing one with the same key pair
/// breaks confidentiality, so callers without a counter should use
/// [`MessageNonce::random`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageNonce([u8; AES_GCM_NONCE_SIZE]);

impl MessageNonce {
    /// Nonce length in bytes
    pub const LEN: usize = AES_GCM_NONCE_SIZE;

    /// Wrap raw nonce bytes
    pub fn from_bytes(bytes: [u8; AES_GCM_NONCE_SIZE]) -> Self {
        Self(bytes)
    }

    /// Copy a nonce out of a slice, checking its length
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        validate::fixed("MessageNonce::from_slice", bytes).map(Self)
    }

    /// Parse a nonce from 24 hex digits
    pub fn from_hex(s: &str) -> Result<Self> {
        let raw = hex::decode(s).map_err(|e| Error::decode("MessageNonce::from_hex", e))?;
        validate::fixed("MessageNonce::from_hex", &raw).map(Self)
    }

    /// Draw a fresh nonce from `rng`
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut bytes = [0u8; AES_GCM_NONCE_SIZE];
        rng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Borrow the nonce bytes
    pub fn as_bytes(&self) -> &[u8; AES_GCM_NONCE_SIZE] {
        &self.0
    }

    /// Lowercase hex encoding
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl core::fmt::Debug for MessageNonce {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "MessageNonce({})", self.to_hex())
    }
}
