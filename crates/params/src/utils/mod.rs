//! Constants shared with the layers that consume the derived keys

pub mod symmetric;
