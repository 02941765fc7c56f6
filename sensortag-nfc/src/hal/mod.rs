// sensortag-nfc/src/hal/mod.rs

//! Narrow interfaces to the hardware and driver collaborators.

/// RF field presence shared with interrupt context.
pub mod field;
pub mod mock;
/// Collaborator traits.
pub mod traits;

pub use field::{FieldEvent, FieldSensor};
pub use mock::{MockAdvertiser, MockIndicator, MockSensors, MockTagEmulator, StaticIdentity};
pub use traits::{BleAdvertiser, FieldIndicator, IdentitySource, SensorSource, TagEmulator};
