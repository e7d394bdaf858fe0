//! Constants for Group Diffie-Hellman key agreement

/// Default generator of the multiplicative group
pub const GDH_DEFAULT_BASE: u64 = 7;

/// Default prime modulus q (q − 1 = 2⁴ · 3² · 5329237; 7 is a primitive root)
pub const GDH_DEFAULT_MODULUS: u64 = 767_410_129;

/// Smallest modulus for which the private-key interval (1, q − 1) is non-empty
pub const GDH_MIN_MODULUS: u64 = 5;
