//! Shared secret and symmetric key derivation

use crate::keys::{PrivateKey, PublicKey, SharedSecret, SymmetricKey};
use crate::params::KdfParams;
use log::{debug, log_enabled, trace, Level};
use peercrypt_algorithms::ed25519::{scalar_mult, CurvePoint, Scalar};
use peercrypt_algorithms::{hash, HkdfSha3_256};
use peercrypt_api::{Result, ResultExt};
use peercrypt_internal::secure_zero;
use peercrypt_params::traditional::ecdh::{
    ECDH_ED25519_SCALAR_SIZE, ECDH_ED25519_SYMMETRIC_KEY_SIZE,
};
use zeroize::Zeroize;

/// Turn a private key into the clamped scalar used for multiplication
///
/// The scalar is the first half of SHA3-512 over the key, clamped.
pub fn prepare_scalar(private_key: &PrivateKey) -> Scalar {
    let mut digest = hash::sha3_512([private_key.as_bytes()]);
    let mut bytes = [0u8; ECDH_ED25519_SCALAR_SIZE];
    bytes.copy_from_slice(&digest[..ECDH_ED25519_SCALAR_SIZE]);
    secure_zero(&mut digest);

    let scalar = Scalar::from_clamped(bytes);
    bytes.zeroize();
    scalar
}

/// Multiply the peer's public point by our prepared scalar and pack it
///
/// Total over all inputs. A public key that is not a curve point is lifted
/// to the fallback point described on [`CurvePoint::decode`], and an
/// identity result packs to `01 00 .. 00`.
pub fn derive_shared_secret(private_key: &PrivateKey, public_key: &PublicKey) -> SharedSecret {
    let scalar = prepare_scalar(private_key);
    let point = CurvePoint::decode(public_key.as_bytes());
    if log_enabled!(Level::Debug) && !point.is_on_curve() {
        debug!("public key {} is not a curve point, using fallback lift", public_key);
    }

    let mut shared = scalar_mult(&scalar, &point);
    let packed = shared.encode();
    shared.zeroize();

    trace!("derived shared secret with {}", public_key);
    SharedSecret::new(packed)
}

/// Expand an existing shared secret into a symmetric key
pub fn expand_shared_secret(shared: &SharedSecret, params: &KdfParams) -> Result<SymmetricKey> {
    trace!(
        "expanding shared secret: salt={}, info_len={}",
        params.salt_policy().name(),
        params.info().len()
    );
    let okm = HkdfSha3_256::derive_array::<ECDH_ED25519_SYMMETRIC_KEY_SIZE>(
        params.salt_policy().salt(),
        shared.as_bytes(),
        Some(params.info()),
    )
    .with_context("symmetric key derivation")?;
    Ok(SymmetricKey::new(*okm))
}

/// Derive the symmetric message key with the default [`KdfParams`]
pub fn derive_symmetric_key(private_key: &PrivateKey, public_key: &PublicKey) -> Result<SymmetricKey> {
    derive_symmetric_key_with(private_key, public_key, &KdfParams::default())
}

/// Derive the symmetric message key with explicit [`KdfParams`]
pub fn derive_symmetric_key_with(
    private_key: &PrivateKey,
    public_key: &PublicKey,
    params: &KdfParams,
) -> Result<SymmetricKey> {
    let shared = derive_shared_secret(private_key, public_key);
    expand_shared_secret(&shared, params)
}
