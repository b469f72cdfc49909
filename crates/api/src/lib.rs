//! Public error types for the peercrypt library
//!
//! Every fallible operation in the workspace returns [`Result`], so callers
//! match on a single [`Error`] enum regardless of which layer failed.

pub mod error;

pub use error::{Error, Result, ResultExt};
