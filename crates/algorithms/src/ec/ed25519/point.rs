//! Edwards curve points and their 32-byte encoding
//!
//! Points use extended coordinates (X:Y:Z:T) with x = X/Z, y = Y/Z and
//! xy = T/Z. The encoding is the usual compressed form: canonical y with
//! the parity of x in bit 255.

use super::constants::{BASE_X, BASE_Y, D, D2, SQRT_M1};
use super::field::FieldElement;
use zeroize::Zeroize;

/// Point on the twisted Edwards curve in extended coordinates
#[derive(Clone, Zeroize)]
pub struct CurvePoint {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
    pub(crate) t: FieldElement,
}

impl CurvePoint {
    /// Identity element (neutral element for addition)
    pub fn identity() -> Self {
        CurvePoint {
            x: FieldElement::ZERO,
            y: FieldElement::ONE,
            z: FieldElement::ONE,
            t: FieldElement::ZERO,
        }
    }

    /// Base point generator
    pub fn base_point() -> Self {
        CurvePoint {
            x: BASE_X,
            y: BASE_Y,
            z: FieldElement::ONE,
            t: BASE_X.mul(&BASE_Y),
        }
    }

    /// Add two points
    ///
    /// The extended-coordinate formula is complete on this curve, so the same
    /// code handles doubling and the identity without branches.
    pub fn add(&self, other: &CurvePoint) -> CurvePoint {
        let a = self.y.sub(&self.x).mul(&other.y.sub(&other.x));
        let b = self.y.add(&self.x).mul(&other.y.add(&other.x));
        let c = self.t.mul(&other.t).mul(&D2);
        let d = self.z.mul(&other.z);
        let d = d.add(&d);

        let e = b.sub(&a);
        let f = d.sub(&c);
        let g = d.add(&c);
        let h = b.add(&a);

        CurvePoint {
            x: e.mul(&f),
            y: h.mul(&g),
            z: g.mul(&f),
            t: e.mul(&h),
        }
    }

    /// Double a point
    pub fn double(&self) -> CurvePoint {
        self.add(self)
    }

    /// Swap two points when `bit` is 1, touching every limb either way
    pub fn conditional_swap(&mut self, other: &mut CurvePoint, bit: u8) {
        self.x.conditional_swap(&mut other.x, bit);
        self.y.conditional_swap(&mut other.y, bit);
        self.z.conditional_swap(&mut other.z, bit);
        self.t.conditional_swap(&mut other.t, bit);
    }

    /// Pack the point into its 32-byte encoding
    ///
    /// A point with Z = 0 has no affine form; inversion maps zero to zero,
    /// so such a point encodes as 32 zero bytes instead of failing.
    pub fn encode(&self) -> [u8; 32] {
        let zinv = self.z.invert();
        let x = self.x.mul(&zinv);
        let y = self.y.mul(&zinv);

        let mut bytes = y.to_bytes();
        bytes[31] ^= x.parity() << 7;
        bytes
    }

    /// Lift a 32-byte encoding to a point
    ///
    /// Never fails. An encoding whose y has no matching x on the curve is
    /// lifted to the value the unpacking steps leave behind: the rejected x
    /// candidate, the given y, Z = 1 and T = 0. Every implementation of the
    /// same steps derives the same (meaningless) shared secret from it.
    pub fn decode(bytes: &[u8; 32]) -> CurvePoint {
        unpack(bytes).0
    }

    /// Lift a 32-byte encoding to a point, rejecting strings off the curve
    pub fn decode_checked(bytes: &[u8; 32]) -> Option<CurvePoint> {
        match unpack(bytes) {
            (point, true) => Some(point),
            (_, false) => None,
        }
    }

    /// Whether the point satisfies -X²Z² + Y²Z² = Z⁴ + d·X²·Y²
    pub fn is_on_curve(&self) -> bool {
        let xx = self.x.square();
        let yy = self.y.square();
        let zz = self.z.square();
        let lhs = yy.sub(&xx).mul(&zz);
        let rhs = zz.square().add(&D.mul(&xx).mul(&yy));
        lhs.ct_equals(&rhs)
    }
}

/// Recover x from y and the sign bit; the flag reports whether x² matched
///
/// x² = (y² - 1) / (d·y² + 1). The candidate root is computed without a
/// separate inversion as u·v³·(u·v⁷)^((p-5)/8) with u = y² - 1, v = d·y² + 1.
fn unpack(bytes: &[u8; 32]) -> (CurvePoint, bool) {
    let y = FieldElement::from_bytes(bytes);
    let z = FieldElement::ONE;

    let yy = y.square();
    let u = yy.sub(&z);
    let v = D.mul(&yy).add(&z);

    let v2 = v.square();
    let v4 = v2.square();
    let v6 = v4.mul(&v2);

    let mut x = v6.mul(&u).mul(&v).pow_p58();
    x = x.mul(&u).mul(&v).mul(&v).mul(&v);

    if !x.square().mul(&v).ct_equals(&u) {
        x = x.mul(&SQRT_M1);
    }
    if !x.square().mul(&v).ct_equals(&u) {
        let t = FieldElement::ZERO;
        return (CurvePoint { x, y, z, t }, false);
    }

    if x.parity() != bytes[31] >> 7 {
        x = x.neg();
    }
    let t = x.mul(&y);
    (CurvePoint { x, y, z, t }, true)
}
