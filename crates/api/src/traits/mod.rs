//! Trait definitions shared across the wsnkey crates

pub mod serialize;

pub use serialize::Serialize;
