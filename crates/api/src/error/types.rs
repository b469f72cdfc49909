//! Error type definitions for cryptographic operations

use thiserror::Error as ThisError;

/// Primary error type for key agreement and message sealing
///
/// Field, point and scalar arithmetic never fail, so every variant here
/// comes from input parsing or from the symmetric collaborators.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// The symmetric key could not initialize the block cipher
    #[error("cipher initialization failed: {context}")]
    CipherInit { context: &'static str },

    /// The AEAD construction could not produce a ciphertext
    #[error("sealing failed: {context}")]
    Seal { context: &'static str },

    /// Tag verification failed on open
    ///
    /// Deliberately carries no detail about which input was wrong.
    #[error("authentication failed: {context}")]
    Authentication { context: &'static str },

    /// Malformed encoded input (hex, UTF-8)
    #[error("decode error in {context}: {message}")]
    Decode {
        context: &'static str,
        message: String,
    },

    /// The KDF cannot produce the requested number of bytes
    #[error("{context}: key derivation cannot produce {requested} bytes")]
    KdfExhaustion {
        context: &'static str,
        requested: usize,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Result type for cryptographic operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its payload
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::CipherInit { .. } => Self::CipherInit { context },
            Self::Seal { .. } => Self::Seal { context },
            Self::Authentication { .. } => Self::Authentication { context },
            Self::Decode { message, .. } => Self::Decode { context, message },
            Self::KdfExhaustion { requested, .. } => Self::KdfExhaustion { context, requested },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
        }
    }

    /// Shorthand for a decode error from any displayable cause
    pub fn decode(context: &'static str, cause: impl core::fmt::Display) -> Self {
        Self::Decode {
            context,
            message: cause.to_string(),
        }
    }
}
