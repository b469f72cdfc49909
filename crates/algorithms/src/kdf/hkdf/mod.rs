//! HMAC-based Key Derivation Function (HKDF) over SHA3-256
//!
//! RFC 5869 extract-then-expand with SHA3-256 as the hash. A missing salt
//! and an all-zero salt of any length up to the block size produce the same
//! pseudorandom key, because HMAC pads short keys with zeros.

use peercrypt_api::error::validate;
use peercrypt_api::{Error, Result};
use peercrypt_params::utils::hash::HKDF_SHA3_256_MAX_OUTPUT;
use sha3::Sha3_256;
use zeroize::Zeroizing;

type Inner = ::hkdf::SimpleHkdf<Sha3_256>;

/// HKDF instantiated with SHA3-256
///
/// Holds optional default salt and info so a configured instance can be
/// reused for many derivations; the associated functions take everything
/// explicitly.
#[derive(Clone, Debug, Default)]
pub struct HkdfSha3_256 {
    salt: Option<Vec<u8>>,
    info: Option<Vec<u8>>,
}

impl HkdfSha3_256 {
    /// Largest output a single expansion can produce
    pub const MAX_OUTPUT: usize = HKDF_SHA3_256_MAX_OUTPUT;

    /// Instance with no salt and no info
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default salt
    pub fn with_salt(mut self, salt: &[u8]) -> Self {
        self.salt = Some(salt.to_vec());
        self
    }

    /// Set the default info (context) string
    pub fn with_info(mut self, info: &[u8]) -> Self {
        self.info = Some(info.to_vec());
        self
    }

    /// Derive `length` bytes from `ikm` with the configured salt and info
    pub fn derive_key(&self, ikm: &[u8], length: usize) -> Result<Zeroizing<Vec<u8>>> {
        Self::derive(self.salt.as_deref(), ikm, self.info.as_deref(), length)
    }

    /// Full HKDF (extract then expand)
    pub fn derive(
        salt: Option<&[u8]>,
        ikm: &[u8],
        info: Option<&[u8]>,
        length: usize,
    ) -> Result<Zeroizing<Vec<u8>>> {
        validate::max_length("HKDF-SHA3-256 output", length, Self::MAX_OUTPUT).map_err(|_| {
            Error::KdfExhaustion {
                context: "HKDF-SHA3-256",
                requested: length,
            }
        })?;

        let hk = Inner::new(salt, ikm);
        let mut okm = Zeroizing::new(vec![0u8; length]);
        hk.expand(info.unwrap_or(&[]), okm.as_mut_slice())
            .map_err(|_| Error::KdfExhaustion {
                context: "HKDF-SHA3-256",
                requested: length,
            })?;
        Ok(okm)
    }

    /// Full HKDF into a fixed-size array
    pub fn derive_array<const N: usize>(
        salt: Option<&[u8]>,
        ikm: &[u8],
        info: Option<&[u8]>,
    ) -> Result<Zeroizing<[u8; N]>> {
        let okm = Self::derive(salt, ikm, info, N)?;
        let mut out = Zeroizing::new([0u8; N]);
        out.copy_from_slice(&okm);
        Ok(out)
    }
}
