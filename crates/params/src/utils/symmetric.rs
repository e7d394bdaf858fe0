//! Constants for the symmetric layer that consumes derived keys

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;
