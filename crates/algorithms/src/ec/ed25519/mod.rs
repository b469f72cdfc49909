//! Arithmetic on the Ed25519 curve
//!
//! The twisted Edwards curve -x² + y² = 1 + d·x²·y² over GF(2^255 - 19),
//! birationally equivalent to the Montgomery form of Curve25519. Points are
//! kept in extended coordinates and multiplied with a conditional-swap
//! ladder, so the whole pipeline runs without secret-dependent branches.
//!
//! # Example
//!
//! ```
//! use peercrypt_algorithms::ed25519::{scalar_mult, CurvePoint, Scalar};
//!
//! let scalar = Scalar::from_clamped([7u8; 32]);
//! let point = scalar_mult(&scalar, &CurvePoint::base_point());
//! let encoded = point.encode();
//! assert_eq!(CurvePoint::decode(&encoded).encode(), encoded);
//! ```

mod constants;
mod field;
mod point;
mod scalar;

pub use field::FieldElement;
pub use point::CurvePoint;
pub use scalar::{clamp, scalar_mult, Scalar};
