// sensortag-nfc/src/constants.rs
//! Design constants shared by the record builder, codec and controller.

/// Capacity of the tag buffer handed to the emulation peripheral.
pub const TAG_BUFFER_CAPACITY: usize = 256;

/// Maximum records per message: identity, address, sensor data.
pub const MAX_RECORD_COUNT: usize = 3;

/// Size of the working hex string for sensor data, terminator included.
pub const HEX_WORKING_CAPACITY: usize = 60;

/// Longest sensor-data record text (working string minus terminator).
pub const MAX_DATA_TEXT_LEN: usize = HEX_WORKING_CAPACITY - 1;

/// Largest raw sensor frame that still hex-encodes into the working string.
pub const MAX_SENSOR_DATA_LEN: usize = MAX_DATA_TEXT_LEN / 2;

/// Identity text: two 32-bit words, eight hex digits each.
pub const IDENTITY_TEXT_LEN: usize = 16;

/// Record type code of the device id record.
pub const TYPE_ID: &[u8] = b"id";
/// Record type code of the device address record.
pub const TYPE_ADDRESS: &[u8] = b"addr";
/// Record type code of the sensor data record.
pub const TYPE_DATA: &[u8] = b"data";

/// ISO language code carried by every text record.
pub const LANGUAGE_CODE: &[u8; 2] = b"en";

/// Text record status byte: bit 7 clear (UTF-8), bits 0-5 language length.
pub const TEXT_STATUS_UTF8: u8 = 0x00;
/// Language-length bits of the status byte.
pub const TEXT_STATUS_LANG_MASK: u8 = 0x3f;
/// Status bit marking UTF-16 text.
pub const TEXT_STATUS_UTF16: u8 = 0x80;

/// NDEF header: message begin.
pub const NDEF_FLAG_MB: u8 = 0x80;
/// NDEF header: message end.
pub const NDEF_FLAG_ME: u8 = 0x40;
/// NDEF header: chunk flag.
pub const NDEF_FLAG_CF: u8 = 0x20;
/// NDEF header: short record (one-byte payload length).
pub const NDEF_FLAG_SR: u8 = 0x10;
/// NDEF header: ID length field present.
pub const NDEF_FLAG_IL: u8 = 0x08;
/// NDEF header: type name format bits.
pub const NDEF_TNF_MASK: u8 = 0x07;

/// Type Name Format: NFC Forum well-known type.
pub const TNF_WELL_KNOWN: u8 = 0x01;

/// TLV padding byte.
pub const TLV_NULL: u8 = 0x00;
/// TLV describing lock bits.
pub const TLV_LOCK_CONTROL: u8 = 0x01;
/// TLV describing reserved memory.
pub const TLV_MEMORY_CONTROL: u8 = 0x02;
/// TLV carrying the NDEF message.
pub const TLV_NDEF_MESSAGE: u8 = 0x03;
/// Last TLV in tag memory.
pub const TLV_TERMINATOR: u8 = 0xfe;

/// Length byte announcing a three-byte TLV length.
pub const TLV_LONG_LENGTH: u8 = 0xff;

/// Sensor frame format identifier.
pub const SENSOR_FORMAT_RAW: u8 = 0x03;
/// Sensor frame size in bytes.
pub const SENSOR_FRAME_LEN: usize = 14;

/// Ticks between battery measurements.
pub const DEFAULT_BATTERY_SAMPLE_INTERVAL: u32 = 30;

/// Main loop timer period.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;
