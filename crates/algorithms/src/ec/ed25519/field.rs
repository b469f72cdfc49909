//! Field arithmetic modulo p = 2^255 - 19
//!
//! Elements are sixteen signed 64-bit limbs in radix 2^16, little-endian.
//! Two states matter:
//!
//! - *loose*: the output of [`FieldElement::add`] / [`FieldElement::sub`].
//!   Limbs may be negative or exceed 16 bits by a few bits. Loose values are
//!   valid inputs to every operation, including multiplication.
//! - *carried*: the output of [`FieldElement::mul`] and [`FieldElement::from_bytes`].
//!   Limbs 1..16 lie in [0, 2^16); limb 0 may exceed 2^16 by a small
//!   multiple of 38 after the wrap-around fold.
//!
//! Neither state is canonical. [`FieldElement::to_bytes`] always performs the
//! full reduction to the unique representative in [0, p).

use peercrypt_internal::constant_time::ct_swap_limbs;
use peercrypt_internal::endian::{u16_from_le_bytes, u16_to_le_bytes};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

/// Number of limbs in a field element
pub(crate) const LIMBS: usize = 16;

/// Field element representing a value modulo p = 2^255 - 19
///
/// Only bytes and field operations produce elements from outside this
/// crate, which keeps every value within the loose-limb bound:
///
/// ```compile_fail
/// use peercrypt_algorithms::FieldElement;
///
/// let _ = FieldElement::from_limbs([i64::MAX; 16]);
/// ```
#[derive(Clone, Copy, Zeroize)]
pub struct FieldElement {
    pub(crate) v: [i64; LIMBS],
}

impl FieldElement {
    /// Zero element
    pub const ZERO: FieldElement = FieldElement::from_limbs([0; LIMBS]);

    /// One element
    pub const ONE: FieldElement =
        FieldElement::from_limbs([1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);

    /// Build an element from raw radix-2^16 limbs
    pub(crate) const fn from_limbs(v: [i64; LIMBS]) -> Self {
        FieldElement { v }
    }

    /// Create a field element from 32 little-endian bytes
    ///
    /// Bit 255 is ignored. Values in [p, 2^255) are accepted unreduced and
    /// behave as their residue in every later operation.
    pub fn from_bytes(bytes: &[u8; 32]) -> Self {
        let mut v = [0i64; LIMBS];
        for (i, limb) in v.iter_mut().enumerate() {
            *limb = u16_from_le_bytes(&bytes[2 * i..]) as i64;
        }
        v[15] &= 0x7fff;
        FieldElement { v }
    }

    /// Convert to the canonical 32-byte little-endian encoding
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut t = self.v;
        carry(&mut t);
        carry(&mut t);
        carry(&mut t);

        // Two conditional subtractions of p bring the value into [0, p).
        let mut m = [0i64; LIMBS];
        for _ in 0..2 {
            m[0] = t[0] - 0xffed;
            for i in 1..15 {
                m[i] = t[i] - 0xffff - ((m[i - 1] >> 16) & 1);
                m[i - 1] &= 0xffff;
            }
            m[15] = t[15] - 0x7fff - ((m[14] >> 16) & 1);
            let borrow = ((m[15] >> 16) & 1) as u8;
            m[14] &= 0xffff;
            ct_swap_limbs(&mut t, &mut m, 1 - borrow);
        }

        let mut out = [0u8; 32];
        for (i, limb) in t.iter().enumerate() {
            u16_to_le_bytes(*limb as u16, &mut out[2 * i..]);
        }
        m.zeroize();
        t.zeroize();
        out
    }

    /// Add two field elements (result is loose)
    pub fn add(&self, other: &FieldElement) -> FieldElement {
        let mut v = [0i64; LIMBS];
        for (i, item) in v.iter_mut().enumerate() {
            *item = self.v[i] + other.v[i];
        }
        FieldElement { v }
    }

    /// Subtract two field elements (result is loose)
    pub fn sub(&self, other: &FieldElement) -> FieldElement {
        let mut v = [0i64; LIMBS];
        for (i, item) in v.iter_mut().enumerate() {
            *item = self.v[i] - other.v[i];
        }
        FieldElement { v }
    }

    /// Negate
    pub fn neg(&self) -> FieldElement {
        FieldElement::ZERO.sub(self)
    }

    /// Multiply two field elements (result is carried)
    ///
    /// Schoolbook product into 31 columns, then the upper 15 columns are
    /// folded back with 2^256 ≡ 38 (mod p).
    pub fn mul(&self, other: &FieldElement) -> FieldElement {
        let mut t = [0i64; 2 * LIMBS - 1];
        for i in 0..LIMBS {
            for j in 0..LIMBS {
                t[i + j] += self.v[i] * other.v[j];
            }
        }
        for i in 0..LIMBS - 1 {
            t[i] += 38 * t[i + LIMBS];
        }

        let mut v = [0i64; LIMBS];
        v.copy_from_slice(&t[..LIMBS]);
        carry(&mut v);
        carry(&mut v);
        t.zeroize();
        FieldElement { v }
    }

    /// Square a field element
    pub fn square(&self) -> FieldElement {
        self.mul(self)
    }

    /// Multiplicative inverse using Fermat's little theorem: a^(p-2)
    ///
    /// The exponent is public, so the branch in the chain leaks nothing about
    /// `self`. Zero maps to zero.
    pub fn invert(&self) -> FieldElement {
        let mut c = *self;
        // p - 2 = 2^255 - 21: every bit set except bits 2 and 4.
        for bit in (0..=253).rev() {
            c = c.square();
            if bit != 2 && bit != 4 {
                c = c.mul(self);
            }
        }
        c
    }

    /// Compute a^((p-5)/8) = a^(2^252 - 3), the core of the square root
    pub fn pow_p58(&self) -> FieldElement {
        let mut c = *self;
        for bit in (0..=250).rev() {
            c = c.square();
            if bit != 1 {
                c = c.mul(self);
            }
        }
        c
    }

    /// Low bit of the canonical encoding
    pub fn parity(&self) -> u8 {
        self.to_bytes()[0] & 1
    }

    /// Constant-time equality of the canonical encodings
    pub fn ct_equals(&self, other: &FieldElement) -> bool {
        self.to_bytes().ct_eq(&other.to_bytes()).into()
    }

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.ct_equals(&FieldElement::ZERO)
    }

    /// Swap `self` and `other` when `bit` is 1, in constant time
    pub fn conditional_swap(&mut self, other: &mut FieldElement, bit: u8) {
        ct_swap_limbs(&mut self.v, &mut other.v, bit);
    }
}

/// Propagate carries so limbs 1..16 fit in 16 bits
///
/// The carry out of limb 15 wraps into limb 0 multiplied by 38. Adding and
/// removing 2^16 around the shift keeps the arithmetic shift well defined
/// for negative limbs.
pub(crate) fn carry(o: &mut [i64; LIMBS]) {
    for i in 0..LIMBS {
        o[i] += 1 << 16;
        let c = o[i] >> 16;
        if i < LIMBS - 1 {
            o[i + 1] += c - 1;
        } else {
            o[0] += 38 * (c - 1);
        }
        o[i] -= c << 16;
    }
}
