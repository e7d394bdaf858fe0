//! Public API traits and types for the wsnkey library
//!
//! This crate provides the public API surface shared by the wsnkey crates:
//! the error type every operation reports through and the byte serialization
//! contract for values that travel over the radio link.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use traits::Serialize;
