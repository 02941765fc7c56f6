// sensortag-nfc/src/prelude.rs

pub use crate::config::TagConfig;
pub use crate::controller::{Active, PublishOutcome, Stopped, TagController, TagControllerBuilder, Uninitialized};
pub use crate::hal::{BleAdvertiser, FieldEvent, FieldIndicator, FieldSensor, IdentitySource, SensorSource, TagEmulator};
pub use crate::ndef::{Message, Record, build_identity_record, build_sensor_data_record, decode_message, encode_message};
pub use crate::orchestrator::{NfcUpdate, TickReport, UpdateOrchestrator};
pub use crate::sensor::{SensorSample, SensorSnapshot};
pub use crate::{
    DeviceIdentity, Error, FieldPresence, IdentityKind, IdentityWords, Lifecycle, RecordKind, RecordSet, Result,
};

// Small utilities for convenience
pub use crate::utils::{bytes_to_hex, parse_hex};
