//! Arithmetic primitives for wsnkey
//!
//! This crate provides the fixed-width [`Bignum`] used as the secp128r1 field
//! element and scalar, and the Jacobian [`EllipticCurvePoint`] built on it.
//! Arithmetic is not hardened against timing side channels.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub use error::{validate, Error, Result, ResultExt};

pub mod bignum;
pub use bignum::{Bignum, Digit, BIGNUM_SIZE, MODULUS};

pub mod ec;
pub use ec::{EllipticCurvePoint, CURVE_ORDER};
