//! Scalars and constant-time scalar multiplication

use super::point::CurvePoint;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A 256-bit little-endian scalar
///
/// Any 32-byte string is a valid scalar for [`scalar_mult`]; keys are
/// normally built with [`Scalar::from_clamped`].
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Scalar {
    pub(crate) bytes: [u8; 32],
}

impl Scalar {
    /// Wrap raw bytes without clamping
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Scalar { bytes }
    }

    /// Clamp `bytes` and wrap the result
    pub fn from_clamped(mut bytes: [u8; 32]) -> Self {
        clamp(&mut bytes);
        let scalar = Scalar { bytes };
        bytes.zeroize();
        scalar
    }

    /// Borrow the scalar bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// Bit `i` of the scalar, counting from the least significant
    #[inline(always)]
    fn bit(&self, i: usize) -> u8 {
        (self.bytes[i >> 3] >> (i & 7)) & 1
    }
}

impl core::fmt::Debug for Scalar {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Scalar([REDACTED])")
    }
}

/// Clear the cofactor bits and fix the top bit of a scalar
///
/// Bits 0..3 are cleared so the scalar is a multiple of the cofactor 8,
/// bit 255 is cleared and bit 254 is set.
pub fn clamp(bytes: &mut [u8; 32]) {
    bytes[0] &= 248;
    bytes[31] &= 127;
    bytes[31] |= 64;
}

/// Multiply `point` by `scalar`
///
/// Walks all 256 bits from the most significant down. Each step swaps the
/// accumulator pair on the scalar bit, adds, doubles and swaps back, so the
/// sequence of field operations is the same for every scalar.
pub fn scalar_mult(scalar: &Scalar, point: &CurvePoint) -> CurvePoint {
    let mut p = CurvePoint::identity();
    let mut q = point.clone();

    for i in (0..256).rev() {
        let bit = scalar.bit(i);
        p.conditional_swap(&mut q, bit);
        q = q.add(&p);
        p = p.double();
        p.conditional_swap(&mut q, bit);
    }

    q.zeroize();
    p
}
