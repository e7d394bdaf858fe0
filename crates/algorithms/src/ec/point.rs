//! Jacobian point arithmetic and double-and-add scalar multiplication

use core::ops::{Mul, MulAssign};

use wsnkey_api::Serialize;

use crate::bignum::{Bignum, Digit, BIGNUM_SIZE};
use crate::ec::constants::{BASE_X, BASE_Y, CURVE_B, POINT_SIZE};
use crate::error::{validate, Result, ResultExt};

/// A point on y² = x³ − 3x + b in Jacobian coordinates
///
/// Z = 0 is the point at infinity, Z = 1 an affine point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EllipticCurvePoint {
    /// Jacobian X
    pub x: Bignum,
    /// Jacobian Y
    pub y: Bignum,
    /// Jacobian Z
    pub z: Bignum,
}

impl EllipticCurvePoint {
    /// Affine point (x, y) with Z = 1
    pub fn new(x: Bignum, y: Bignum) -> Self {
        Self {
            x,
            y,
            z: Bignum::ONE,
        }
    }

    /// The point at infinity (0, 0, 0)
    pub fn identity() -> Self {
        Self {
            x: Bignum::ZERO,
            y: Bignum::ZERO,
            z: Bignum::ZERO,
        }
    }

    /// The default generator used by ECDH sessions
    pub fn base_point() -> Self {
        Self::new(BASE_X, BASE_Y)
    }

    /// Is this the point at infinity?
    pub fn is_identity(&self) -> bool {
        self.z.reduce().is_zero()
    }

    /// Bring the point to Z = 1, or to (0, 0, 0) if it is at infinity
    pub fn normalize(&mut self) {
        if self.is_identity() {
            *self = Self::identity();
            return;
        }
        if self.z == Bignum::ONE {
            return;
        }
        match self.z.invert() {
            Ok(z_inv) => {
                let z_inv2 = z_inv.square();
                self.x *= &z_inv2;
                self.y *= &z_inv2.mul_mod(&z_inv);
                self.z = Bignum::ONE;
            }
            Err(_) => *self = Self::identity(),
        }
    }

    /// Normalized copy of this point
    pub fn normalized(&self) -> Self {
        let mut p = *self;
        p.normalize();
        p
    }

    /// Check the curve equation; the point at infinity is on the curve
    ///
    /// Never called implicitly: received public keys are used as they are.
    pub fn is_on_curve(&self) -> bool {
        let p = self.normalized();
        if p.is_identity() {
            return true;
        }
        let three_x = p.x.add_mod(&p.x).add_mod(&p.x);
        let rhs = p.x.square().mul_mod(&p.x).sub_mod(&three_x).add_mod(&CURVE_B);
        p.y.square() == rhs
    }

    /// In-place doubling, specialised to a = −3
    pub fn jacobian_double(&mut self) {
        if self.is_identity() || self.y.reduce().is_zero() {
            *self = Self::identity();
            return;
        }

        // C = 3·(X − Z²)·(X + Z²)
        let zz = self.z.square();
        let c = self.x.sub_mod(&zz).mul_mod(&self.x.add_mod(&zz));
        let c = c.add_mod(&c).add_mod(&c);

        let z3 = self.y.mul_mod(&self.z);
        let z3 = z3.add_mod(&z3);

        // S = 4·X·Y², D = 8·Y⁴
        let yy = self.y.square();
        let s = self.x.mul_mod(&yy);
        let s = s.add_mod(&s);
        let s = s.add_mod(&s);
        let d = yy.square();
        let d = d.add_mod(&d);
        let d = d.add_mod(&d);
        let d = d.add_mod(&d);

        let x3 = c.square().sub_mod(&s.add_mod(&s));
        let y3 = c.mul_mod(&s.sub_mod(&x3)).sub_mod(&d);

        self.x = x3;
        self.y = y3;
        self.z = z3;
    }

    /// In-place mixed addition of an affine point
    ///
    /// `other` is normalized first if its Z is not 1.
    pub fn add_jacobian_affine(&mut self, other: &Self) {
        let q = other.normalized();
        if q.is_identity() {
            return;
        }
        if self.is_identity() {
            *self = q;
            return;
        }

        // U2 = x₂·Z², S2 = y₂·Z³
        let zz = self.z.square();
        let u2 = q.x.mul_mod(&zz);
        let s2 = q.y.mul_mod(&zz).mul_mod(&self.z);
        let h = u2.sub_mod(&self.x);
        let r = s2.sub_mod(&self.y);

        if h.is_zero() {
            if r.is_zero() {
                self.jacobian_double();
            } else {
                *self = Self::identity();
            }
            return;
        }

        let hh = h.square();
        let hhh = hh.mul_mod(&h);
        let v = self.x.mul_mod(&hh);

        let x3 = r.square().sub_mod(&hhh).sub_mod(&v.add_mod(&v));
        let y3 = r.mul_mod(&v.sub_mod(&x3)).sub_mod(&self.y.mul_mod(&hhh));
        let z3 = self.z.mul_mod(&h);

        self.x = x3;
        self.y = y3;
        self.z = z3;
    }

    /// Encode the normalized point as X ∥ Y, little-endian
    ///
    /// The point at infinity encodes as all zeros.
    pub fn to_xy_bytes(&self) -> [u8; POINT_SIZE] {
        let p = self.normalized();
        let mut out = [0u8; POINT_SIZE];
        out[..BIGNUM_SIZE].copy_from_slice(&p.x.to_le_bytes());
        out[BIGNUM_SIZE..].copy_from_slice(&p.y.to_le_bytes());
        out
    }

    /// Decode X ∥ Y with Z = 1; no curve validation is performed
    ///
    /// An all-zero buffer decodes as the point at infinity.
    pub fn from_xy_bytes(bytes: &[u8]) -> Result<Self> {
        validate::length("EllipticCurvePoint::from_xy_bytes", bytes.len(), POINT_SIZE)?;
        if bytes.iter().all(|&b| b == 0) {
            return Ok(Self::identity());
        }
        let x = Bignum::from_le_slice(&bytes[..BIGNUM_SIZE])?;
        let y = Bignum::from_le_slice(&bytes[BIGNUM_SIZE..])?;
        Ok(Self::new(x, y))
    }
}

impl MulAssign<&Bignum> for EllipticCurvePoint {
    /// Double-and-add from the most significant set bit of `scalar`
    fn mul_assign(&mut self, scalar: &Bignum) {
        let digits = scalar.digits();
        let top = match digits.iter().rposition(|&d| d != 0) {
            Some(i) => i,
            None => {
                *self = Self::identity();
                return;
            }
        };

        let pp = self.normalized();
        let mut acc = pp;

        let mut step = |digit: Digit, bit: u32| {
            acc.jacobian_double();
            if (digit >> bit) & 1 == 1 {
                acc.add_jacobian_affine(&pp);
            }
        };

        let top_bit = Digit::BITS - 1 - digits[top].leading_zeros();
        for bit in (0..top_bit).rev() {
            step(digits[top], bit);
        }
        for &digit in digits[..top].iter().rev() {
            for bit in (0..Digit::BITS).rev() {
                step(digit, bit);
            }
        }

        acc.normalize();
        *self = acc;
    }
}

impl MulAssign<Bignum> for EllipticCurvePoint {
    fn mul_assign(&mut self, scalar: Bignum) {
        *self *= &scalar;
    }
}

impl Mul<&Bignum> for EllipticCurvePoint {
    type Output = Self;

    fn mul(mut self, scalar: &Bignum) -> Self {
        self *= scalar;
        self
    }
}

impl Mul<Bignum> for EllipticCurvePoint {
    type Output = Self;

    fn mul(mut self, scalar: Bignum) -> Self {
        self *= &scalar;
        self
    }
}

impl Serialize for EllipticCurvePoint {
    fn from_bytes(bytes: &[u8]) -> wsnkey_api::Result<Self> {
        Self::from_xy_bytes(bytes).with_context("EllipticCurvePoint::from_bytes")
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.to_xy_bytes().to_vec()
    }
}
