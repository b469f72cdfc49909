//! AES-256 in Galois/Counter Mode
//!
//! Wraps the `aes-gcm` crate behind [`AeadCipher`]. Failures are collapsed
//! to this crate's error variants; a failed open never says whether the
//! key, nonce, tag or body was at fault.

use super::AeadCipher;
use aes_gcm::aead::{Aead, KeyInit, Payload};
use aes_gcm::{Aes256Gcm, Nonce};
use peercrypt_api::error::validate;
use peercrypt_api::{Error, Result};
use peercrypt_params::utils::symmetric::{AES256_KEY_SIZE, AES_GCM_NONCE_SIZE, AES_GCM_TAG_SIZE};

/// AES-256-GCM with a 96-bit nonce and a 128-bit tag
#[derive(Clone)]
pub struct Aes256GcmCipher {
    inner: Aes256Gcm,
}

impl core::fmt::Debug for Aes256GcmCipher {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Aes256GcmCipher").finish_non_exhaustive()
    }
}

impl AeadCipher for Aes256GcmCipher {
    const KEY_SIZE: usize = AES256_KEY_SIZE;
    const NONCE_SIZE: usize = AES_GCM_NONCE_SIZE;
    const TAG_SIZE: usize = AES_GCM_TAG_SIZE;

    fn name() -> &'static str {
        "AES-256-GCM"
    }

    fn new(key: &[u8]) -> Result<Self> {
        validate::length("AES-256-GCM key", key.len(), Self::KEY_SIZE).map_err(|_| {
            Error::CipherInit {
                context: "AES-256-GCM key must be 32 bytes",
            }
        })?;
        let inner = Aes256Gcm::new_from_slice(key).map_err(|_| Error::CipherInit {
            context: "AES-256-GCM key",
        })?;
        Ok(Self { inner })
    }

    fn seal(&self, nonce: &[u8], plaintext: &[u8], aad: Option<&[u8]>) -> Result<Vec<u8>> {
        validate::length("AES-256-GCM nonce", nonce.len(), Self::NONCE_SIZE)?;
        let payload = Payload {
            msg: plaintext,
            aad: aad.unwrap_or(&[]),
        };
        self.inner
            .encrypt(Nonce::from_slice(nonce), payload)
            .map_err(|_| Error::Seal {
                context: "AES-256-GCM",
            })
    }

    fn open(&self, nonce: &[u8], ciphertext: &[u8], aad: Option<&[u8]>) -> Result<Vec<u8>> {
        validate::length("AES-256-GCM nonce", nonce.len(), Self::NONCE_SIZE)?;
        if ciphertext.len() < Self::TAG_SIZE {
            return Err(Error::Authentication {
                context: "AES-256-GCM",
            });
        }
        let payload = Payload {
            msg: ciphertext,
            aad: aad.unwrap_or(&[]),
        };
        self.inner
            .decrypt(Nonce::from_slice(nonce), payload)
            .map_err(|_| Error::Authentication {
                context: "AES-256-GCM",
            })
    }
}
