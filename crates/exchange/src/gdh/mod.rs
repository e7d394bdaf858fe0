//! Group Diffie-Hellman over the multiplicative group modulo a prime q
//!
//! Every member holds a private exponent k in (1, q − 1) with
//! gcd(k, q − 1) = 1, so that k has an inverse modulo the group order and a
//! member can strip its own contribution back out of an accumulated value.
//! Members keep no protocol state; everything in flight is a [`RoundKey`].

use core::fmt;

use rand::{CryptoRng, Rng, RngCore};
use wsnkey_params::traditional::dh::{GDH_DEFAULT_BASE, GDH_DEFAULT_MODULUS, GDH_MIN_MODULUS};
use zeroize::Zeroizing;

use crate::error::{validate, Result};

mod arith;
mod chain;

pub use arith::{egcd, gcd, mod_exp, mod_inv, ExtendedGcd};
pub use chain::{run_chain, GroupAgreement};

/// Accumulated value exchanged between members
pub type RoundKey = u64;

/// Private exponent
pub type PrivateKey = u64;

/// Generator and prime modulus shared by the whole group
///
/// Produced and distributed by the gateway. Only the ranges are checked here;
/// primality of q is the gateway's responsibility. Deserialized values go
/// through the same checks as [`Parameters::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawParameters"))]
pub struct Parameters {
    base: u64,
    q: u64,
}

/// Unchecked wire form of [`Parameters`]
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawParameters {
    base: u64,
    q: u64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawParameters> for Parameters {
    type Error = crate::error::Error;

    fn try_from(raw: RawParameters) -> Result<Self> {
        Self::new(raw.base, raw.q)
    }
}

impl Parameters {
    /// Validate and build group parameters
    pub fn new(base: u64, q: u64) -> Result<Self> {
        validate::parameters(q >= GDH_MIN_MODULUS, "GDH parameters", "modulus q must be at least 5")?;
        validate::parameters(base > 1 && base < q, "GDH parameters", "base must lie in (1, q)")?;
        Ok(Self { base, q })
    }

    /// The generator
    pub fn base(&self) -> u64 {
        self.base
    }

    /// The prime modulus q
    pub fn modulus(&self) -> u64 {
        self.q
    }

    /// q − 1, the modulus for exponent arithmetic
    pub fn order(&self) -> u64 {
        self.q - 1
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            base: GDH_DEFAULT_BASE,
            q: GDH_DEFAULT_MODULUS,
        }
    }
}

/// One member (or the gateway) of a GDH group
pub struct GroupDiffieHellman {
    parameters: Parameters,
    private: Zeroizing<PrivateKey>,
    private_inverse: Zeroizing<PrivateKey>,
}

impl GroupDiffieHellman {
    /// Member with the default parameters
    pub fn new<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        Self::with_parameters(Parameters::default(), rng)
    }

    /// Member with a random private exponent under `parameters`
    ///
    /// Candidates are drawn uniformly from (1, q − 1); those sharing a factor
    /// with q − 1 are rejected. q − 2 always qualifies, so the loop ends.
    pub fn with_parameters<R: RngCore + CryptoRng>(parameters: Parameters, rng: &mut R) -> Self {
        let order = parameters.order();
        loop {
            let candidate = Zeroizing::new(rng.gen_range(2..order));
            if let Ok(inverse) = mod_inv(*candidate, order) {
                tracing::trace!(modulus = parameters.q, "GDH member created");
                return Self {
                    parameters,
                    private: candidate,
                    private_inverse: Zeroizing::new(inverse),
                };
            }
        }
    }

    /// Member with a known private exponent
    pub fn from_private_key(parameters: Parameters, private: PrivateKey) -> Result<Self> {
        let order = parameters.order();
        validate::key(
            private > 1 && private < order,
            "GDH private",
            "exponent must lie in (1, q - 1)",
        )?;
        validate::key(
            gcd(private, order) == 1,
            "GDH private",
            "exponent must be coprime with q - 1",
        )?;
        let inverse = mod_inv(private, order)?;
        Ok(Self {
            parameters,
            private: Zeroizing::new(private),
            private_inverse: Zeroizing::new(inverse),
        })
    }

    /// The shared group parameters
    pub fn parameters(&self) -> Parameters {
        self.parameters
    }

    /// First round: base^k mod q
    pub fn insert_key(&self) -> RoundKey {
        tracing::trace!(modulus = self.parameters.q, "GDH insert_key");
        mod_exp(self.parameters.base, *self.private, self.parameters.q)
    }

    /// Fold this member's exponent onto an incoming value: round_key^k mod q
    pub fn insert_round_key(&self, round_key: RoundKey) -> RoundKey {
        tracing::trace!(round_key, "GDH insert_round_key");
        mod_exp(round_key, *self.private, self.parameters.q)
    }

    /// Strip this member's exponent out: round_key^(k⁻¹ mod (q − 1)) mod q
    pub fn remove_key(&self, round_key: RoundKey) -> RoundKey {
        tracing::trace!(round_key, "GDH remove_key");
        mod_exp(round_key, *self.private_inverse, self.parameters.q)
    }
}

impl fmt::Debug for GroupDiffieHellman {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupDiffieHellman")
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}
