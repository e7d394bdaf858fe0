//! Fixed-width unsigned integers for arithmetic over the secp128r1 field
//!
//! A [`Bignum`] is exactly [`BIGNUM_SIZE`] bytes wide, stored as 32-bit digits
//! in little-endian digit order. The `+=`/`-=` operators wrap modulo 2¹²⁸,
//! while `*=` always reduces modulo the curve prime p = 2¹²⁸ − 2⁹⁷ − 1.
//! The explicit `*_mod` methods give the field operations used by the curve.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{
    Add, AddAssign, BitXor, BitXorAssign, Index, Mul, MulAssign, Sub, SubAssign,
};

use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConditionallySelectable};
use wsnkey_api::Serialize;
use wsnkey_params::traditional::ecdh::{ECDH_SECRET_SIZE, SECP128R1, SECP128R1_FOLD_SHIFT};
use zeroize::Zeroize;

use crate::error::{validate, Error, Result, ResultExt};

/// Machine word holding one digit
pub type Digit = u32;

/// Width of a [`Bignum`] in bytes
pub const BIGNUM_SIZE: usize = ECDH_SECRET_SIZE;

/// Number of digits in a [`Bignum`]
pub const DIGITS: usize = BIGNUM_SIZE / DIGIT_BYTES;

const DIGIT_BYTES: usize = core::mem::size_of::<Digit>();
const DIGIT_BITS: u32 = Digit::BITS;

/// 2¹²⁸ ≡ 2^FOLD + 1 (mod p): the folded high half lands this many digits up,
/// shifted left by the remaining bits.
const FOLD_DIGITS: usize = (SECP128R1_FOLD_SHIFT / DIGIT_BITS) as usize;
const FOLD_BITS: u32 = SECP128R1_FOLD_SHIFT % DIGIT_BITS;

/// The field prime p = 2¹²⁸ − 2⁹⁷ − 1
pub const MODULUS: Bignum = Bignum::from_le_bytes(&SECP128R1.p);

/// Fixed-width unsigned integer, little-endian digit order
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Zeroize)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bignum {
    digits: [Digit; DIGITS],
}

impl Bignum {
    /// Zero
    pub const ZERO: Self = Self { digits: [0; DIGITS] };

    /// One
    pub const ONE: Self = Self::from_digit(1);

    /// Build a value from a single low digit
    pub const fn from_digit(d: Digit) -> Self {
        let mut digits = [0; DIGITS];
        digits[0] = d;
        Self { digits }
    }

    /// Build a value from its digits, least significant first
    pub const fn from_digits(digits: [Digit; DIGITS]) -> Self {
        Self { digits }
    }

    /// Decode little-endian bytes (the wire order)
    pub const fn from_le_bytes(bytes: &[u8; BIGNUM_SIZE]) -> Self {
        let mut digits = [0; DIGITS];
        let mut i = 0;
        while i < DIGITS {
            let o = i * DIGIT_BYTES;
            digits[i] = Digit::from_le_bytes([bytes[o], bytes[o + 1], bytes[o + 2], bytes[o + 3]]);
            i += 1;
        }
        Self { digits }
    }

    /// Decode big-endian bytes
    pub fn from_be_bytes(bytes: &[u8; BIGNUM_SIZE]) -> Self {
        let mut le = *bytes;
        le.reverse();
        Self::from_le_bytes(&le)
    }

    /// Decode a little-endian slice that must be exactly [`BIGNUM_SIZE`] bytes
    pub fn from_le_slice(bytes: &[u8]) -> Result<Self> {
        validate::length("Bignum::from_le_slice", bytes.len(), BIGNUM_SIZE)?;
        let mut buf = [0u8; BIGNUM_SIZE];
        buf.copy_from_slice(bytes);
        Ok(Self::from_le_bytes(&buf))
    }

    /// Parse a big-endian hex string of at most 32 digits
    pub fn from_be_hex(s: &str) -> Result<Self> {
        validate::max_length("Bignum::from_be_hex", s.len(), 2 * BIGNUM_SIZE)?;
        let padded = format!("{:0>width$}", s, width = 2 * BIGNUM_SIZE);
        let mut buf = [0u8; BIGNUM_SIZE];
        hex::decode_to_slice(padded, &mut buf)
            .map_err(|e| Error::param("Bignum::from_be_hex", e.to_string()))?;
        Ok(Self::from_be_bytes(&buf))
    }

    /// Encode as little-endian bytes
    pub fn to_le_bytes(&self) -> [u8; BIGNUM_SIZE] {
        let mut out = [0u8; BIGNUM_SIZE];
        for (chunk, d) in out.chunks_exact_mut(DIGIT_BYTES).zip(self.digits.iter()) {
            chunk.copy_from_slice(&d.to_le_bytes());
        }
        out
    }

    /// Encode as big-endian bytes
    pub fn to_be_bytes(&self) -> [u8; BIGNUM_SIZE] {
        let mut out = self.to_le_bytes();
        out.reverse();
        out
    }

    /// Digits, least significant first
    pub fn digits(&self) -> &[Digit; DIGITS] {
        &self.digits
    }

    /// Check if the value is zero
    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|&d| d == 0)
    }

    /// Check if the least significant bit is clear
    pub fn is_even(&self) -> bool {
        self.digits[0] & 1 == 0
    }

    /// Bit `i`, counting from the least significant bit
    pub fn bit(&self, i: usize) -> bool {
        let d = i / DIGIT_BITS as usize;
        d < DIGITS && (self.digits[d] >> (i % DIGIT_BITS as usize)) & 1 == 1
    }

    /// Overwrite every digit with output from `rng`
    ///
    /// No range restriction applies; any 128-bit value may result.
    pub fn randomize<R: RngCore + CryptoRng>(&mut self, rng: &mut R) {
        let mut bytes = [0u8; BIGNUM_SIZE];
        rng.fill_bytes(&mut bytes);
        *self = Self::from_le_bytes(&bytes);
        bytes.zeroize();
    }

    /// A fresh value drawn from `rng`
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut n = Self::ZERO;
        n.randomize(rng);
        n
    }

    /* ---------------------------------------------------------------- */
    /*  Digit-level helpers                                             */
    /* ---------------------------------------------------------------- */

    /// a + b with carry out
    #[inline(always)]
    fn adc(a: &[Digit; DIGITS], b: &[Digit; DIGITS]) -> ([Digit; DIGITS], Digit) {
        let mut r = [0; DIGITS];
        let mut carry = 0u64;
        for i in 0..DIGITS {
            let v = a[i] as u64 + b[i] as u64 + carry;
            r[i] = v as Digit;
            carry = v >> DIGIT_BITS;
        }
        (r, carry as Digit)
    }

    /// a − b with borrow out
    #[inline(always)]
    fn sbb(a: &[Digit; DIGITS], b: &[Digit; DIGITS]) -> ([Digit; DIGITS], Digit) {
        let mut r = [0; DIGITS];
        let mut borrow = 0u64;
        for i in 0..DIGITS {
            let v = (a[i] as u64)
                .wrapping_sub(b[i] as u64)
                .wrapping_sub(borrow);
            r[i] = v as Digit;
            borrow = (v >> 63) & 1;
        }
        (r, borrow as Digit)
    }

    /// Shift right by one bit, feeding `top` into the most significant bit
    fn shr1(&mut self, top: bool) {
        let mut incoming = top as Digit;
        for d in self.digits.iter_mut().rev() {
            let out = *d & 1;
            *d = (*d >> 1) | (incoming << (DIGIT_BITS - 1));
            incoming = out;
        }
    }

    /// Shift left by one bit, returning the bit shifted out
    fn shl1(&mut self) -> bool {
        let mut incoming = 0;
        for d in self.digits.iter_mut() {
            let out = *d >> (DIGIT_BITS - 1);
            *d = (*d << 1) | incoming;
            incoming = out;
        }
        incoming == 1
    }

    /* ---------------------------------------------------------------- */
    /*  Arithmetic modulo an arbitrary modulus                          */
    /* ---------------------------------------------------------------- */

    /// self mod m by shift-and-subtract
    fn rem(&self, m: &Self) -> Self {
        let mut r = Self::ZERO;
        for i in (0..BIGNUM_SIZE * 8).rev() {
            let overflow = r.shl1();
            r.digits[0] |= self.bit(i) as Digit;
            if overflow || r >= *m {
                r -= *m;
            }
        }
        r
    }

    /// (a − b) mod m for a, b < m
    fn sub_modulo(a: &Self, b: &Self, m: &Self) -> Self {
        let (diff, borrow) = Self::sbb(&a.digits, &b.digits);
        let (fixed, _) = Self::adc(&diff, &m.digits);
        Self::conditional_select(
            &Self { digits: diff },
            &Self { digits: fixed },
            Choice::from(borrow as u8),
        )
    }

    /// x / 2 mod m for odd m and x < m
    fn halve_modulo(x: &mut Self, m: &Self) {
        if x.is_even() {
            x.shr1(false);
        } else {
            let (sum, carry) = Self::adc(&x.digits, &m.digits);
            x.digits = sum;
            x.shr1(carry == 1);
        }
    }

    /// Multiplicative inverse modulo an odd modulus `m`
    ///
    /// Binary extended Euclid: every step only halves or subtracts.
    pub fn invert_modulo(&self, m: &Self) -> Result<Self> {
        validate::parameter(!m.is_even(), "modulus", "must be odd")?;
        validate::parameter(*m != Self::ONE, "modulus", "must be greater than one")?;

        let mut u = self.rem(m);
        let mut v = *m;
        let mut x1 = Self::ONE;
        let mut x2 = Self::ZERO;

        while u != Self::ONE && v != Self::ONE {
            if u.is_zero() || v.is_zero() {
                tracing::trace!("Bignum::invert_modulo: input shares a factor with the modulus");
                return Err(Error::NotInvertible {
                    operation: "Bignum::invert_modulo",
                });
            }
            while u.is_even() {
                u.shr1(false);
                Self::halve_modulo(&mut x1, m);
            }
            while v.is_even() {
                v.shr1(false);
                Self::halve_modulo(&mut x2, m);
            }
            if u >= v {
                u -= v;
                x1 = Self::sub_modulo(&x1, &x2, m);
            } else {
                v -= u;
                x2 = Self::sub_modulo(&x2, &x1, m);
            }
        }

        Ok(if u == Self::ONE { x1 } else { x2 })
    }

    /* ---------------------------------------------------------------- */
    /*  Field arithmetic modulo p                                       */
    /* ---------------------------------------------------------------- */

    /// Canonical representative modulo p
    ///
    /// Any 128-bit value is below 2p, so one conditional subtraction suffices.
    pub fn reduce(&self) -> Self {
        let (reduced, borrow) = Self::sbb(&self.digits, &MODULUS.digits);
        Self::conditional_select(
            &Self { digits: reduced },
            self,
            Choice::from(borrow as u8),
        )
    }

    /// (self + other) mod p
    pub fn add_mod(&self, other: &Self) -> Self {
        let a = self.reduce();
        let b = other.reduce();
        let (sum, carry) = Self::adc(&a.digits, &b.digits);
        let (reduced, borrow) = Self::sbb(&sum, &MODULUS.digits);
        let need_reduce = (carry | (borrow ^ 1)) & 1;
        Self::conditional_select(
            &Self { digits: sum },
            &Self { digits: reduced },
            Choice::from(need_reduce as u8),
        )
    }

    /// (self − other) mod p
    pub fn sub_mod(&self, other: &Self) -> Self {
        Self::sub_modulo(&self.reduce(), &other.reduce(), &MODULUS)
    }

    /// (self · other) mod p
    pub fn mul_mod(&self, other: &Self) -> Self {
        // Schoolbook 4×4 into 128-bit column accumulators
        let mut t = [0u128; 2 * DIGITS];
        for i in 0..DIGITS {
            for j in 0..DIGITS {
                t[i + j] += (self.digits[i] as u128) * (other.digits[j] as u128);
            }
        }

        let mut wide = [0 as Digit; 2 * DIGITS];
        let mut carry: u128 = 0;
        for i in 0..2 * DIGITS {
            let v = t[i] + carry;
            wide[i] = v as Digit;
            carry = v >> DIGIT_BITS;
        }

        Self::reduce_wide(wide)
    }

    /// Reduce a 256-bit product modulo p by folding the high half
    fn reduce_wide(mut wide: [Digit; 2 * DIGITS]) -> Self {
        while wide[DIGITS..].iter().any(|&d| d != 0) {
            let mut acc = [0u64; 2 * DIGITS];
            for i in 0..DIGITS {
                let hi = wide[DIGITS + i] as u64;
                acc[i] += wide[i] as u64 + hi;
                let shifted = hi << FOLD_BITS;
                acc[i + FOLD_DIGITS] += shifted & Digit::MAX as u64;
                acc[i + FOLD_DIGITS + 1] += shifted >> DIGIT_BITS;
            }

            let mut carry = 0u64;
            for (w, a) in wide.iter_mut().zip(acc.iter()) {
                let v = a + carry;
                *w = v as Digit;
                carry = v >> DIGIT_BITS;
            }
            debug_assert_eq!(carry, 0);
        }

        let mut low = [0; DIGITS];
        low.copy_from_slice(&wide[..DIGITS]);
        Self { digits: low }.reduce()
    }

    /// self² mod p
    #[inline(always)]
    pub fn square(&self) -> Self {
        self.mul_mod(self)
    }

    /// self^(2ⁿ) mod p
    pub fn square_n(&self, n: usize) -> Self {
        let mut r = *self;
        for _ in 0..n {
            r = r.square();
        }
        r
    }

    /// self^exp mod p, left-to-right square-and-multiply
    pub fn pow(&self, exp: &Self) -> Self {
        let mut r = Self::ONE;
        for i in (0..BIGNUM_SIZE * 8).rev() {
            r = r.square();
            if exp.bit(i) {
                r = r.mul_mod(self);
            }
        }
        r
    }

    /// Multiplicative inverse modulo p via extended Euclid
    pub fn invert(&self) -> Result<Self> {
        self.invert_modulo(&MODULUS).map_err(|_| Error::NotInvertible {
            operation: "Bignum::invert",
        })
    }

    /// Multiplicative inverse modulo p via a fixed addition chain for a^(p−2)
    ///
    /// Runs of ones: p − 2 = 2¹²⁸ − 2⁹⁷ − 3 is 30 ones, a zero, 95 ones,
    /// a zero, then a final one. Agrees with [`Bignum::invert`] everywhere.
    pub fn invert_special(&self) -> Result<Self> {
        let x1 = self.reduce();
        if x1.is_zero() {
            return Err(Error::NotInvertible {
                operation: "Bignum::invert_special",
            });
        }

        // xk = a^(2ᵏ − 1)
        let x2 = x1.square().mul_mod(&x1);
        let x3 = x2.square().mul_mod(&x1);
        let x5 = x3.square_n(2).mul_mod(&x2);
        let x10 = x5.square_n(5).mul_mod(&x5);
        let x15 = x10.square_n(5).mul_mod(&x5);
        let x30 = x15.square_n(15).mul_mod(&x15);
        let x60 = x30.square_n(30).mul_mod(&x30);
        let x90 = x60.square_n(30).mul_mod(&x30);
        let x95 = x90.square_n(5).mul_mod(&x5);

        let r = x30.square();
        let r = r.square_n(95).mul_mod(&x95);
        Ok(r.square_n(2).mul_mod(&x1))
    }
}

/* -------------------------------------------------------------------- */
/*  Operators                                                           */
/* -------------------------------------------------------------------- */

impl ConditionallySelectable for Bignum {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut digits = [0; DIGITS];
        for (i, d) in digits.iter_mut().enumerate() {
            *d = Digit::conditional_select(&a.digits[i], &b.digits[i], choice);
        }
        Self { digits }
    }
}

impl AddAssign for Bignum {
    /// Wraps modulo 2¹²⁸
    fn add_assign(&mut self, rhs: Self) {
        self.digits = Self::adc(&self.digits, &rhs.digits).0;
    }
}

impl SubAssign for Bignum {
    /// Wraps modulo 2¹²⁸
    fn sub_assign(&mut self, rhs: Self) {
        self.digits = Self::sbb(&self.digits, &rhs.digits).0;
    }
}

impl Add for Bignum {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl Sub for Bignum {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl MulAssign<&Bignum> for Bignum {
    /// Reduces modulo p
    fn mul_assign(&mut self, rhs: &Bignum) {
        *self = self.mul_mod(rhs);
    }
}

impl MulAssign for Bignum {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.mul_mod(&rhs);
    }
}

impl Mul for Bignum {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.mul_mod(&rhs)
    }
}

impl Mul<&Bignum> for Bignum {
    type Output = Self;

    fn mul(self, rhs: &Bignum) -> Self {
        self.mul_mod(rhs)
    }
}

impl BitXorAssign for Bignum {
    fn bitxor_assign(&mut self, rhs: Self) {
        for (d, r) in self.digits.iter_mut().zip(rhs.digits.iter()) {
            *d ^= r;
        }
    }
}

impl BitXor for Bignum {
    type Output = Self;

    fn bitxor(mut self, rhs: Self) -> Self {
        self ^= rhs;
        self
    }
}

impl Index<usize> for Bignum {
    type Output = Digit;

    fn index(&self, i: usize) -> &Digit {
        &self.digits[i]
    }
}

impl Ord for Bignum {
    fn cmp(&self, other: &Self) -> Ordering {
        self.digits.iter().rev().cmp(other.digits.iter().rev())
    }
}

impl PartialOrd for Bignum {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<u32> for Bignum {
    fn from(n: u32) -> Self {
        Self::from_digit(n)
    }
}

impl From<u64> for Bignum {
    fn from(n: u64) -> Self {
        let mut digits = [0; DIGITS];
        digits[0] = n as Digit;
        digits[1] = (n >> DIGIT_BITS) as Digit;
        Self { digits }
    }
}

impl fmt::Display for Bignum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.to_be_bytes()))
    }
}

impl fmt::Debug for Bignum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bignum(0x{})", self)
    }
}

impl Serialize for Bignum {
    fn from_bytes(bytes: &[u8]) -> wsnkey_api::Result<Self> {
        Self::from_le_slice(bytes).with_context("Bignum::from_bytes")
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.to_le_bytes().to_vec()
    }
}
