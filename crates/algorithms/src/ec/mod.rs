//! Elliptic curve primitives over the secp128r1 prime field
//!
//! Points are kept in Jacobian projective coordinates (X:Y:Z), where
//! x = X/Z² and y = Y/Z³. Scalar multiplication always returns a normalized
//! point (Z = 1), which is also the only form that leaves the node.

pub mod constants;
mod point;

pub use constants::{BASE_X, BASE_Y, CURVE_B, CURVE_ORDER, POINT_SIZE};
pub use point::EllipticCurvePoint;
