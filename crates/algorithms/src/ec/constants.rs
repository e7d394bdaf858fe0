//! secp128r1 curve constants as field elements

use wsnkey_params::traditional::ecdh::{ECDH_PUBLIC_KEY_SIZE, SECP128R1};

use crate::bignum::Bignum;

/// Curve coefficient b in y² = x³ − 3x + b
pub const CURVE_B: Bignum = Bignum::from_le_bytes(&SECP128R1.b);

/// Order n of the base point
///
/// Scalars act modulo n, so the scalar inverse that undoes a multiplication
/// is taken with `invert_modulo(&CURVE_ORDER)`.
pub const CURVE_ORDER: Bignum = Bignum::from_le_bytes(&SECP128R1.n);

/// Base point x-coordinate
pub const BASE_X: Bignum = Bignum::from_le_bytes(&SECP128R1.g_x);

/// Base point y-coordinate
pub const BASE_Y: Bignum = Bignum::from_le_bytes(&SECP128R1.g_y);

/// Serialized point size: X ∥ Y
pub const POINT_SIZE: usize = ECDH_PUBLIC_KEY_SIZE;
