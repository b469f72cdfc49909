//! Constant values for peercrypt cryptographic operations
//!
//! Sizes and fixed protocol strings shared by the key-agreement and
//! message-sealing crates. Curve constants that need the field
//! representation live next to the field arithmetic in `peercrypt-algorithms`.

#![no_std]

pub mod traditional;
pub mod utils;
