//! # wsnkey
//!
//! Key-agreement primitives for wireless sensor network nodes.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! wsnkey = "0.3"
//! ```
//!
//! ## Features
//!
//! - `exchange` (default): ECDH sessions and Group Diffie-Hellman
//! - `algorithms`: only the `Bignum` and curve point arithmetic
//! - `serde`: serde support for field elements, points and GDH parameters
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`wsnkey-api`]: error type and the `Serialize` trait
//! - [`wsnkey-params`]: curve constants and GDH defaults
//! - [`wsnkey-algorithms`]: `Bignum` and `EllipticCurvePoint`
//! - [`wsnkey-exchange`]: `DiffieHellman` and `GroupDiffieHellman`
//!
//! ## Example
//!
//! ```
//! use wsnkey::prelude::*;
//! use rand::rngs::OsRng;
//!
//! let alice = DiffieHellman::new(&mut OsRng);
//! let bob = DiffieHellman::new(&mut OsRng);
//! assert_eq!(
//!     alice.shared_key(&bob.public_key()),
//!     bob.shared_key(&alice.public_key()),
//! );
//! ```

// Core re-exports (always available)
pub use wsnkey_api as api;
pub use wsnkey_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use wsnkey_algorithms as algorithms;

#[cfg(feature = "exchange")]
pub use wsnkey_exchange as exchange;

/// Common imports for wsnkey users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, Serialize};

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::{Bignum, EllipticCurvePoint};

    #[cfg(feature = "exchange")]
    pub use crate::exchange::{
        run_chain, DiffieHellman, GroupAgreement, GroupDiffieHellman, Parameters,
    };
}
