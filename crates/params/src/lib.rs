//! Constant values for wsnkey cryptographic operations
//!
//! This crate holds the curve definition, the Group Diffie-Hellman defaults
//! and the key widths shared by every other wsnkey crate.

#![no_std]

pub mod traditional;
pub mod utils;
