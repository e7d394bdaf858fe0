//! Constants for traditional key-agreement algorithms

pub mod dh;
pub mod ecdh;
