//! Internal utilities shared by the peercrypt crates
//!
//! Nothing in here is part of the public API surface; the helpers exist so
//! that branch-free selection and zeroing are written once.

#![no_std]
#![forbid(unsafe_code)]

pub mod constant_time;
pub mod endian;
pub mod zeroing;

pub use constant_time::ct_swap_limbs;
pub use zeroing::secure_zero;
