//! Secure zeroing of transient buffers

use zeroize::Zeroize;

/// Overwrite a buffer with zeros in a way the optimizer will not elide
pub fn secure_zero<T: Zeroize + ?Sized>(data: &mut T) {
    data.zeroize();
}
