//! Constants for hash functions

/// Output size of SHA-256 in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// Output size of SHA3-256 in bytes
pub const SHA3_256_OUTPUT_SIZE: usize = 32;

/// Output size of SHA3-512 in bytes
pub const SHA3_512_OUTPUT_SIZE: usize = 64;

/// Output size of legacy Keccak-256 in bytes
pub const KECCAK256_OUTPUT_SIZE: usize = 32;

/// Output size of RIPEMD-160 in bytes
pub const RIPEMD160_OUTPUT_SIZE: usize = 20;

/// Largest HKDF-SHA3-256 output (255 blocks of the hash length)
pub const HKDF_SHA3_256_MAX_OUTPUT: usize = 255 * SHA3_256_OUTPUT_SIZE;
