//! Sealing and opening messages between two key pairs

use crate::nonce::MessageNonce;
use log::{debug, trace};
use peercrypt_algorithms::aead::{AeadCipher, Aes256GcmCipher};
use peercrypt_api::{Error, Result, ResultExt};
use peercrypt_ecdh::{derive_symmetric_key_with, KdfParams, PrivateKey, PublicKey, SaltPolicy};

/// Key-derivation settings shared by both ends of a conversation
///
/// Two peers only interoperate when their configs derive the same key:
/// same context string and a salt policy producing the same salt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodecConfig {
    kdf: KdfParams,
}

impl CodecConfig {
    /// Replace the HKDF salt policy
    pub fn with_salt(mut self, salt: SaltPolicy) -> Self {
        self.kdf = self.kdf.with_salt(salt);
        self
    }

    /// Replace the HKDF context string
    pub fn with_context(mut self, context: &[u8]) -> Self {
        self.kdf = self.kdf.with_info(context);
        self
    }

    /// Key-derivation parameters in effect
    pub fn kdf_params(&self) -> &KdfParams {
        &self.kdf
    }
}

/// Seals text for a recipient and opens text from a sender
///
/// The wire format is lowercase hex of `ciphertext || tag`; the nonce
/// travels separately and is chosen by the caller.
#[derive(Clone, Debug, Default)]
pub struct MessageCodec {
    config: CodecConfig,
}

impl MessageCodec {
    /// Codec with an explicit configuration
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    fn cipher(&self, private_key: &PrivateKey, public_key: &PublicKey) -> Result<Aes256GcmCipher> {
        let key = derive_symmetric_key_with(private_key, public_key, &self.config.kdf)?;
        Aes256GcmCipher::new(key.as_bytes())
    }

    /// Encrypt UTF-8 text from `sender` to `recipient`
    pub fn seal(
        &self,
        sender: &PrivateKey,
        recipient: &PublicKey,
        plaintext: &str,
        nonce: &MessageNonce,
    ) -> Result<String> {
        self.seal_bytes(sender, recipient, plaintext.as_bytes(), nonce)
    }

    /// Encrypt arbitrary bytes from `sender` to `recipient`
    pub fn seal_bytes(
        &self,
        sender: &PrivateKey,
        recipient: &PublicKey,
        plaintext: &[u8],
        nonce: &MessageNonce,
    ) -> Result<String> {
        trace!("sealing {} bytes for {}", plaintext.len(), recipient);
        let cipher = self.cipher(sender, recipient)?;
        let sealed = cipher
            .seal(nonce.as_bytes(), plaintext, None)
            .with_context("MessageCodec::seal")?;
        Ok(hex::encode(sealed))
    }

    /// Decrypt a hex message from `sender` addressed to `recipient`
    ///
    /// Upper- and lower-case hex are both accepted. Every authentication
    /// failure, including input shorter than the tag, is reported the same
    /// way.
    pub fn open(
        &self,
        recipient: &PrivateKey,
        sender: &PublicKey,
        message: &str,
        nonce: &MessageNonce,
    ) -> Result<Vec<u8>> {
        let sealed = hex::decode(message).map_err(|e| Error::decode("MessageCodec::open", e))?;
        trace!("opening {} bytes from {}", sealed.len(), sender);

        let cipher = self.cipher(recipient, sender)?;
        cipher
            .open(nonce.as_bytes(), &sealed, None)
            .map_err(|e| {
                debug!("message from {} failed authentication", sender);
                e.with_context("MessageCodec::open")
            })
    }

    /// As [`open`](Self::open), then require the plaintext to be UTF-8
    pub fn open_text(
        &self,
        recipient: &PrivateKey,
        sender: &PublicKey,
        message: &str,
        nonce: &MessageNonce,
    ) -> Result<String> {
        let bytes = self.open(recipient, sender, message, nonce)?;
        String::from_utf8(bytes).map_err(|e| Error::decode("MessageCodec::open_text", e.utf8_error()))
    }
}
