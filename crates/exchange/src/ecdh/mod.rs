//! Pairwise elliptic-curve Diffie-Hellman over secp128r1
//!
//! Each node draws a private scalar, publishes `base * private`, and combines
//! the peer's public point as `S = peer * private`. The shared secret is
//! `S.x XOR S.y`; peers interoperate only if both combine it this way.
//!
//! The peer's public point is used exactly as received. No on-curve or
//! non-identity check is made here; [`EllipticCurvePoint::is_on_curve`] is
//! available to callers that want one.

use core::fmt;

use rand::{CryptoRng, RngCore};
use wsnkey_algorithms::{Bignum, EllipticCurvePoint};
use wsnkey_params::traditional::ecdh::{ECDH_PUBLIC_KEY_SIZE, ECDH_SECRET_SIZE};
use zeroize::Zeroizing;

use crate::error::{validate, Result};

/// Size of the private scalar and of the shared secret in bytes
pub const SECRET_SIZE: usize = ECDH_SECRET_SIZE;

/// Size of a serialized public key (X ∥ Y) in bytes
pub const PUBLIC_KEY_SIZE: usize = ECDH_PUBLIC_KEY_SIZE;

/// Public key: a normalized curve point
pub type PublicKey = EllipticCurvePoint;

/// Private scalar
pub type PrivateKey = Bignum;

/// Shared secret handed to the symmetric layer
pub type SharedKey = Bignum;

/// One participant's ECDH session
pub struct DiffieHellman {
    private: Zeroizing<PrivateKey>,
    base_point: EllipticCurvePoint,
    public: PublicKey,
}

impl DiffieHellman {
    /// New session on the default base point
    pub fn new<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        Self::with_base_point(EllipticCurvePoint::base_point(), rng)
    }

    /// New session on an explicit base point
    ///
    /// The private scalar covers the full 128-bit range; it is not reduced
    /// modulo the curve order.
    pub fn with_base_point<R: RngCore + CryptoRng>(
        base_point: EllipticCurvePoint,
        rng: &mut R,
    ) -> Self {
        let mut private = Zeroizing::new(Bignum::ZERO);
        private.randomize(rng);
        Self::from_private_key(base_point, &private)
    }

    /// Session with a known private scalar
    pub fn from_private_key(base_point: EllipticCurvePoint, private: &PrivateKey) -> Self {
        let private = Zeroizing::new(*private);
        let public = base_point * &*private;
        tracing::trace!(public = %public.x, "ECDH session created");
        Self {
            private,
            base_point,
            public,
        }
    }

    /// The base point this session multiplies
    pub fn base_point(&self) -> EllipticCurvePoint {
        self.base_point
    }

    /// Copy of the cached public point
    pub fn public_key(&self) -> PublicKey {
        self.public
    }

    /// Wire form of the public point: X ∥ Y, little-endian
    pub fn public_key_bytes(&self) -> [u8; PUBLIC_KEY_SIZE] {
        self.public.to_xy_bytes()
    }

    /// Combine a peer's public point into the shared secret `S.x ^ S.y`
    pub fn shared_key(&self, peer_public: &PublicKey) -> SharedKey {
        tracing::trace!(peer_x = %peer_public.x, "ECDH shared_key");
        let s = *peer_public * &*self.private;
        s.x ^ s.y
    }

    /// [`shared_key`](Self::shared_key) for a public point still in wire form
    pub fn shared_key_from_bytes(&self, peer_public: &[u8]) -> Result<SharedKey> {
        validate::length("ECDH peer public key", peer_public.len(), PUBLIC_KEY_SIZE)?;
        let peer = EllipticCurvePoint::from_xy_bytes(peer_public)?;
        Ok(self.shared_key(&peer))
    }
}

impl fmt::Debug for DiffieHellman {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiffieHellman")
            .field("base_point", &self.base_point)
            .field("public", &self.public)
            .finish_non_exhaustive()
    }
}
