// sensortag-nfc/src/lib.rs

//! sensortag-nfc
//!
//! NFC Type 2 tag payload pipeline for an environmental sensor tag: builds
//! NDEF text records from the device identity and live sensor frames,
//! publishes them to an emulated tag without disturbing an active reader,
//! and mirrors each frame into the BLE advertisement.
#![warn(missing_docs)]

/// Update loop configuration.
pub mod config;
pub mod constants;
pub mod controller;
/// Error type and `Result` alias.
pub mod error;
pub mod hal;
pub mod ndef;
pub mod orchestrator;
/// Everyday imports.
pub mod prelude;
pub mod sensor;
pub mod test_support;
/// Identity and record newtypes.
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`
// and the identity/record types are available to consumers and to the
// `prelude`.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
