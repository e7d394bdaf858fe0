//! Traits for byte serialization of values exchanged between nodes.

use crate::Result;

/// A trait for public types that can be serialized to and from their wire form.
pub trait Serialize: Sized {
    /// Creates an object from a byte slice.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;
    /// Converts the object to a byte vector.
    fn to_bytes(&self) -> Vec<u8>;
}
