//! Key material for the agreement
//!
//! Secret types never expose their bytes through `Debug` and are wiped on
//! drop. Only [`PublicKey`] is `Copy`.

use peercrypt_api::error::validate;
use peercrypt_api::{Error, Result};
use peercrypt_params::traditional::ecdh::{
    ECDH_ED25519_PRIVATE_KEY_SIZE, ECDH_ED25519_PUBLIC_KEY_SIZE, ECDH_ED25519_SHARED_SECRET_SIZE,
    ECDH_ED25519_SYMMETRIC_KEY_SIZE,
};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

fn decode_hex<const N: usize>(context: &'static str, s: &str) -> Result<Zeroizing<[u8; N]>> {
    let raw = Zeroizing::new(hex::decode(s).map_err(|e| Error::decode(context, e))?);
    let mut out = Zeroizing::new([0u8; N]);
    validate::length(context, raw.len(), N)?;
    out.copy_from_slice(&raw);
    Ok(out)
}

/// An account private key
///
/// Any 32 bytes are accepted. The key is never used as a scalar directly;
/// see [`prepare_scalar`](crate::prepare_scalar).
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey([u8; ECDH_ED25519_PRIVATE_KEY_SIZE]);

impl PrivateKey {
    /// Wrap raw key bytes
    pub fn from_bytes(bytes: [u8; ECDH_ED25519_PRIVATE_KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Copy a key out of a slice, checking its length
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let mut raw = validate::fixed::<ECDH_ED25519_PRIVATE_KEY_SIZE>("PrivateKey::from_slice", bytes)?;
        let key = Self(raw);
        raw.zeroize();
        Ok(key)
    }

    /// Parse a key from 64 hex digits
    pub fn from_hex(s: &str) -> Result<Self> {
        let raw = decode_hex::<ECDH_ED25519_PRIVATE_KEY_SIZE>("PrivateKey::from_hex", s)?;
        Ok(Self(*raw))
    }

    /// Borrow the raw key bytes
    pub fn as_bytes(&self) -> &[u8; ECDH_ED25519_PRIVATE_KEY_SIZE] {
        &self.0
    }
}

impl core::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "PrivateKey([REDACTED])")
    }
}

/// An account public key: the 32-byte point encoding
///
/// Construction checks length only. Strings that do not decode to a curve
/// point are still accepted and handled by the agreement fallback.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; ECDH_ED25519_PUBLIC_KEY_SIZE]);

impl PublicKey {
    /// Wrap an encoded point
    pub fn from_bytes(bytes: [u8; ECDH_ED25519_PUBLIC_KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Copy a key out of a slice, checking its length
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        validate::fixed("PublicKey::from_slice", bytes).map(Self)
    }

    /// Parse a key from 64 hex digits, either case
    pub fn from_hex(s: &str) -> Result<Self> {
        let raw = decode_hex::<ECDH_ED25519_PUBLIC_KEY_SIZE>("PublicKey::from_hex", s)?;
        Ok(Self(*raw))
    }

    /// Borrow the encoded point
    pub fn as_bytes(&self) -> &[u8; ECDH_ED25519_PUBLIC_KEY_SIZE] {
        &self.0
    }

    /// Lowercase hex encoding
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl core::fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "PublicKey({})", self.to_hex())
    }
}

impl core::fmt::Display for PublicKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl core::str::FromStr for PublicKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PublicKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PublicKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

macro_rules! secret_bytes {
    ($(#[$meta:meta])* $name:ident, $size:expr) => {
        $(#[$meta])*
        #[derive(Clone, Zeroize, ZeroizeOnDrop)]
        pub struct $name([u8; $size]);

        impl $name {
            pub(crate) fn new(bytes: [u8; $size]) -> Self {
                Self(bytes)
            }

            /// Borrow the secret bytes
            pub fn as_bytes(&self) -> &[u8; $size] {
                &self.0
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.0[..].ct_eq(&other.0[..]).into()
            }
        }

        impl Eq for $name {}

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, concat!(stringify!($name), "([REDACTED])"))
            }
        }
    };
}

secret_bytes!(
    /// Packed Diffie-Hellman point, the input keying material of the KDF
    SharedSecret,
    ECDH_ED25519_SHARED_SECRET_SIZE
);

secret_bytes!(
    /// 256-bit key handed to the AEAD cipher
    SymmetricKey,
    ECDH_ED25519_SYMMETRIC_KEY_SIZE
);
