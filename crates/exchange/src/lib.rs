//! Key agreement for sensor-network nodes
//!
//! This crate implements pairwise elliptic-curve Diffie-Hellman over
//! secp128r1 and the chained Group Diffie-Hellman protocol coordinated by a
//! gateway. Transport, framing and the symmetric layer that consumes the
//! derived keys live elsewhere.

#![forbid(unsafe_code)]

pub mod ecdh;
pub mod error;
pub mod gdh;

// Re-exports
pub use ecdh::DiffieHellman;
pub use error::{Error, Result};
pub use gdh::{run_chain, GroupAgreement, GroupDiffieHellman, Parameters};
