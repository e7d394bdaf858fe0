//! Constants for Elliptic Curve Diffie-Hellman
//!
//! All multi-byte values are little-endian, which is both the digit order of
//! the fixed-width big number and the order used on the radio link.

use crate::utils::symmetric::AES128_KEY_SIZE;

/// Size of a private scalar, a coordinate and a shared secret in bytes.
///
/// Tied to the key width of the symmetric cipher that consumes the secret.
pub const ECDH_SECRET_SIZE: usize = AES128_KEY_SIZE;

/// Size of a serialized public key: X ∥ Y (Z is never transmitted)
pub const ECDH_PUBLIC_KEY_SIZE: usize = 2 * ECDH_SECRET_SIZE;

/// Short-Weierstrass curve y² = x³ − 3x + b over 𝔽ₚ
#[derive(Debug, Clone, Copy)]
pub struct CurveParams {
    /// Field prime p
    pub p: [u8; ECDH_SECRET_SIZE],
    /// Curve coefficient b (a is fixed to −3)
    pub b: [u8; ECDH_SECRET_SIZE],
    /// Order n of the base point
    pub n: [u8; ECDH_SECRET_SIZE],
    /// Base point x-coordinate
    pub g_x: [u8; ECDH_SECRET_SIZE],
    /// Base point y-coordinate
    pub g_y: [u8; ECDH_SECRET_SIZE],
}

/// SEC 2 secp128r1: p = 2¹²⁸ − 2⁹⁷ − 1, cofactor 1.
pub const SECP128R1: CurveParams = CurveParams {
    p: [
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFD, 0xFF, 0xFF,
        0xFF,
    ],
    b: [
        0xD3, 0x5E, 0xEE, 0x2C, 0x3C, 0x99, 0x24, 0xD8, 0x3D, 0xF4, 0x79, 0x10, 0xC1, 0x79, 0x75,
        0xE8,
    ],
    n: [
        0x15, 0xA1, 0x38, 0x90, 0x1B, 0x0D, 0xA3, 0x75, 0x00, 0x00, 0x00, 0x00, 0xFE, 0xFF, 0xFF,
        0xFF,
    ],
    g_x: [
        0x86, 0x5B, 0x2C, 0xA5, 0x7C, 0x60, 0x28, 0x0C, 0x2D, 0x9B, 0x89, 0x8B, 0x52, 0xF7, 0x1F,
        0x16,
    ],
    g_y: [
        0x83, 0x7A, 0xED, 0xDD, 0x92, 0xA2, 0x2D, 0xC0, 0x13, 0xEB, 0xAF, 0x5B, 0x39, 0xC8, 0x5A,
        0xCF,
    ],
};

/// Position of the middle term in p = 2¹²⁸ − 2^FOLD − 1, so that
/// 2¹²⁸ ≡ 2^FOLD + 1 (mod p).
pub const SECP128R1_FOLD_SHIFT: u32 = 97;
