//! Endianness utility functions

/// Read a little-endian u16 from the first two bytes of `bytes`
pub fn u16_from_le_bytes(bytes: &[u8]) -> u16 {
    u16::from_le_bytes([bytes[0], bytes[1]])
}

/// Write `value` as two little-endian bytes into the front of `out`
pub fn u16_to_le_bytes(value: u16, out: &mut [u8]) {
    out[..2].copy_from_slice(&value.to_le_bytes());
}
