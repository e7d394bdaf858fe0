//! Validation utilities for key-agreement operations

use super::{Error, Result};

/// Validate key material
pub fn key(condition: bool, key_type: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidKey { key_type, reason });
    }
    Ok(())
}

/// Validate group parameters
pub fn parameters(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidParameters { context, reason });
    }
    Ok(())
}

// Re-export primitive validations for convenience
pub use wsnkey_algorithms::validate::length;
