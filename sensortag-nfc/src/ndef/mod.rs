// sensortag-nfc/src/ndef/mod.rs

//! NDEF records, messages and their Type 2 tag wire format.

pub mod codec;
/// Record list with a fixed cap.
pub mod message;
pub mod parser;
/// Identity and sensor-data text records.
pub mod record;
/// Type 2 tag TLV framing.
pub mod tlv;

pub use codec::{decode_message, encode_message, encoded_len};
pub use message::Message;
pub use record::{Record, build_identity_record, build_sensor_data_record};
pub use tlv::Tlv;
