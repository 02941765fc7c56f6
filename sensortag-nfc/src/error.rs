// sensortag-nfc/src/error.rs

use thiserror::Error;

/// Common error type for the tag payload pipeline.
///
/// A reader being present during a publish is not an error; it is reported
/// as [`crate::controller::PublishOutcome::Busy`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Too many records, or a payload longer than its fixed working buffer.
    #[error("capacity exceeded for {what}: limit {limit}, got {actual}")]
    CapacityExceeded {
        /// What overflowed.
        what: &'static str,
        /// Largest accepted size.
        limit: usize,
        /// Size that was asked for.
        actual: usize,
    },

    /// The serialized message does not fit the output buffer.
    #[error("encode overflow: need {required} bytes, buffer holds {capacity}")]
    EncodeOverflow {
        /// Bytes the encoded message needs.
        required: usize,
        /// Bytes the output buffer has.
        capacity: usize,
    },

    /// A tag-emulation peripheral call returned a non-success status.
    #[error("hardware fault: status={0:#06x}")]
    HardwareFault(u32),

    /// The BLE advertiser rejected the manufacturer data.
    #[error("advertiser error: status={0:#06x}")]
    Advertiser(u32),

    /// A builder was finished without a required collaborator.
    #[error("not configured: {0}")]
    NotConfigured(&'static str),

    /// A sensor driver failed to produce a sample.
    #[error("sensor read failed: {0}")]
    Sensor(String),

    /// Truncated or inconsistent wire data.
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Length required.
        expected: usize,
        /// Length found.
        actual: usize,
    },

    /// Bytes that are not one of our NDEF messages.
    #[error("ndef format error: {0}")]
    Format(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
