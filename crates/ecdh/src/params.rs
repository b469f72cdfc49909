//! KDF configuration for turning a shared secret into a message key

use peercrypt_params::traditional::ecdh::ECDH_KDF_INFO;
use peercrypt_params::utils::hash::SHA3_256_OUTPUT_SIZE;

const ZERO_SALT: [u8; SHA3_256_OUTPUT_SIZE] = [0u8; SHA3_256_OUTPUT_SIZE];

/// Salt fed to HKDF-Extract
///
/// `Zeroed` and `Empty` derive the same key: HMAC pads a short key with
/// zeros up to the block size, so 32 zero bytes and no bytes are the same
/// HMAC key. Both are kept so configurations can say what they mean.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SaltPolicy {
    /// 32 zero bytes, one hash output long
    #[default]
    Zeroed,
    /// No salt
    Empty,
    /// A salt both peers agreed on out of band
    Negotiated(Vec<u8>),
}

impl SaltPolicy {
    /// Short name used in log output; never includes the salt itself
    pub fn name(&self) -> &'static str {
        match self {
            SaltPolicy::Zeroed => "zeroed",
            SaltPolicy::Empty => "empty",
            SaltPolicy::Negotiated(_) => "negotiated",
        }
    }

    pub(crate) fn salt(&self) -> Option<&[u8]> {
        match self {
            SaltPolicy::Zeroed => Some(&ZERO_SALT[..]),
            SaltPolicy::Empty => None,
            SaltPolicy::Negotiated(salt) => Some(salt.as_slice()),
        }
    }
}

/// Salt policy and context string for symmetric key derivation
///
/// The default uses a zeroed salt and the `"catapult"` context string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KdfParams {
    salt: SaltPolicy,
    info: Vec<u8>,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            salt: SaltPolicy::default(),
            info: ECDH_KDF_INFO.to_vec(),
        }
    }
}

impl KdfParams {
    /// Replace the salt policy
    pub fn with_salt(mut self, salt: SaltPolicy) -> Self {
        self.salt = salt;
        self
    }

    /// Replace the context string
    pub fn with_info(mut self, info: &[u8]) -> Self {
        self.info = info.to_vec();
        self
    }

    /// Current salt policy
    pub fn salt_policy(&self) -> &SaltPolicy {
        &self.salt
    }

    /// Current context string
    pub fn info(&self) -> &[u8] {
        &self.info
    }
}
