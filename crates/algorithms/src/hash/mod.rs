//! Hash functions used by key agreement and account addressing
//!
//! Thin fixed-output wrappers over the RustCrypto digests. Every function
//! returns an owned array sized by the constants in `peercrypt_params`.

use peercrypt_params::utils::hash::{
    KECCAK256_OUTPUT_SIZE, RIPEMD160_OUTPUT_SIZE, SHA256_OUTPUT_SIZE, SHA3_256_OUTPUT_SIZE,
    SHA3_512_OUTPUT_SIZE,
};
use ripemd::Ripemd160;
use sha2::Sha256;
use sha3::{Digest, Keccak256, Sha3_256, Sha3_512};

fn finish<D: Digest, const N: usize>(hasher: D) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&hasher.finalize());
    out
}

/// SHA3-256 of `data`
pub fn sha3_256(data: &[u8]) -> [u8; SHA3_256_OUTPUT_SIZE] {
    finish(Sha3_256::new_with_prefix(data))
}

/// SHA3-512 over the concatenation of `parts`
///
/// Key agreement hashes a single private key, but callers building
/// transcripts can feed several buffers without concatenating first.
pub fn sha3_512<I, B>(parts: I) -> [u8; SHA3_512_OUTPUT_SIZE]
where
    I: IntoIterator<Item = B>,
    B: AsRef<[u8]>,
{
    let mut hasher = Sha3_512::new();
    for part in parts {
        hasher.update(part.as_ref());
    }
    finish(hasher)
}

/// Original Keccak-256 (pre-standard padding)
pub fn keccak_256(data: &[u8]) -> [u8; KECCAK256_OUTPUT_SIZE] {
    finish(Keccak256::new_with_prefix(data))
}

/// SHA-256 of `data`
pub fn sha256(data: &[u8]) -> [u8; SHA256_OUTPUT_SIZE] {
    finish(Sha256::new_with_prefix(data))
}

/// RIPEMD-160 of `data`
pub fn ripemd160(data: &[u8]) -> [u8; RIPEMD160_OUTPUT_SIZE] {
    finish(Ripemd160::new_with_prefix(data))
}
