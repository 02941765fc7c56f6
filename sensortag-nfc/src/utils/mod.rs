//! Small helpers shared by the record builder and the codec.

pub mod hex;

pub use hex::*;
