//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConditionallySelectable};

/// Constant-time conditional swap of two limb arrays
///
/// Swaps `a` and `b` when `bit` is 1 and leaves them untouched when it is 0.
/// Every limb is read and written in both cases.
pub fn ct_swap_limbs<const N: usize>(a: &mut [i64; N], b: &mut [i64; N], bit: u8) {
    let choice = Choice::from(bit & 1);
    for (x, y) in a.iter_mut().zip(b.iter_mut()) {
        i64::conditional_swap(x, y, choice);
    }
}
