//! Machine-word number theory for Group Diffie-Hellman

use crate::error::{Error, Result};

/// Result of the extended Euclidean algorithm: `a·x + b·y = gcd`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtendedGcd {
    /// gcd(a, b)
    pub gcd: u64,
    /// Bézout coefficient of `a`
    pub x: i128,
    /// Bézout coefficient of `b`
    pub y: i128,
}

/// base^exponent mod modulus by square-and-multiply
///
/// A modulus below 2 has no nonzero residues and yields 0.
pub fn mod_exp(base: u64, exponent: u64, modulus: u64) -> u64 {
    if modulus < 2 {
        return 0;
    }
    let m = modulus as u128;
    let mut result: u128 = 1;
    let mut b = base as u128 % m;
    let mut e = exponent;
    while e > 0 {
        if e & 1 == 1 {
            result = result * b % m;
        }
        b = b * b % m;
        e >>= 1;
    }
    result as u64
}

/// Greatest common divisor
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Extended Euclidean algorithm
pub fn egcd(a: u64, b: u64) -> ExtendedGcd {
    let (g, x, y) = egcd_signed(a as i128, b as i128);
    ExtendedGcd {
        gcd: g as u64,
        x,
        y,
    }
}

// Recursion depth is O(log min(a, b)).
fn egcd_signed(a: i128, b: i128) -> (i128, i128, i128) {
    if b == 0 {
        return (a, 1, 0);
    }
    let (g, x, y) = egcd_signed(b, a % b);
    (g, y, x - (a / b) * y)
}

/// Inverse of `a` modulo `m`, or [`Error::NoInverse`] when gcd(a, m) ≠ 1
pub fn mod_inv(a: u64, m: u64) -> Result<u64> {
    if m == 0 {
        return Err(Error::NoInverse { value: a, modulus: m });
    }
    let e = egcd(a % m, m);
    if e.gcd != 1 {
        return Err(Error::NoInverse { value: a, modulus: m });
    }
    Ok(e.x.rem_euclid(m as i128) as u64)
}
