// sensortag-nfc/src/ndef/record.rs

use crate::constants::{
    IDENTITY_TEXT_LEN, LANGUAGE_CODE, MAX_DATA_TEXT_LEN, MAX_SENSOR_DATA_LEN, TEXT_STATUS_LANG_MASK,
    TEXT_STATUS_UTF8, TEXT_STATUS_UTF16,
};
use crate::types::{IdentityKind, IdentityWords, RecordKind};
use crate::utils;
use crate::{Error, Result};

/// One NDEF text record as published on the tag.
///
/// The payload is always lowercase ASCII hex in UTF-8 with language `en`.
/// Fields are private: records only come out of [`build_identity_record`],
/// [`build_sensor_data_record`] and [`Record::from_text_payload`], so the
/// text always satisfies the length and alphabet limits of its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    kind: RecordKind,
    text: String,
}

impl Record {
    /// Test-only escape hatch for texts no builder would produce.
    #[cfg(test)]
    pub(crate) fn with_unchecked_text(kind: RecordKind, text: String) -> Self {
        Self { kind, text }
    }

    /// Which of the three records this is.
    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// Short record type written in the NDEF header.
    pub fn type_code(&self) -> &'static [u8] {
        self.kind.type_code()
    }

    /// Record text: lowercase hex, 16 chars for identity records.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the text-record payload: status byte, language code, text.
    pub fn payload_len(&self) -> usize {
        1 + LANGUAGE_CODE.len() + self.text().len()
    }

    /// Text-record payload bytes.
    pub fn payload(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.payload_len());
        out.push(TEXT_STATUS_UTF8 | LANGUAGE_CODE.len() as u8);
        out.extend_from_slice(LANGUAGE_CODE);
        out.extend_from_slice(self.text().as_bytes());
        out
    }

    /// Decode the hex text back into the raw bytes it was built from.
    pub fn raw_bytes(&self) -> Result<Vec<u8>> {
        utils::parse_hex(self.text())
    }

    /// Rebuild a record from its wire type code and text-record payload.
    pub fn from_text_payload(type_code: &[u8], payload: &[u8]) -> Result<Self> {
        let kind = RecordKind::from_type_code(type_code).ok_or_else(|| {
            Error::Format(format!(
                "unknown record type '{}'",
                String::from_utf8_lossy(type_code)
            ))
        })?;

        let status = *payload
            .first()
            .ok_or_else(|| Error::Format("empty text payload".into()))?;
        if status & TEXT_STATUS_UTF16 != 0 {
            return Err(Error::Format("utf-16 text records are not supported".into()));
        }
        let lang_len = (status & TEXT_STATUS_LANG_MASK) as usize;
        let text_start = 1 + lang_len;
        if text_start > payload.len() {
            return Err(Error::InvalidLength {
                expected: text_start,
                actual: payload.len(),
            });
        }

        let text = std::str::from_utf8(&payload[text_start..])
            .map_err(|_| Error::Format("text payload is not utf-8".into()))?;
        if !utils::is_lower_hex(text) {
            return Err(Error::Format(format!("record text '{}' is not lowercase hex", text)));
        }

        match kind {
            RecordKind::Id | RecordKind::Address if text.len() != IDENTITY_TEXT_LEN => {
                return Err(Error::InvalidLength {
                    expected: IDENTITY_TEXT_LEN,
                    actual: text.len(),
                });
            }
            RecordKind::Data if text.len() > MAX_DATA_TEXT_LEN => {
                return Err(Error::CapacityExceeded {
                    what: "sensor data text",
                    limit: MAX_DATA_TEXT_LEN,
                    actual: text.len(),
                });
            }
            _ => {}
        }

        Ok(Self {
            kind,
            text: text.to_string(),
        })
    }
}

/// Build the identity record for a device id or device address.
pub fn build_identity_record(kind: IdentityKind, words: IdentityWords) -> Record {
    let kind = match kind {
        IdentityKind::Id => RecordKind::Id,
        IdentityKind::Address => RecordKind::Address,
    };
    Record {
        kind,
        text: words.to_hex(),
    }
}

/// Build the sensor-data record from a raw sensor frame.
///
/// An empty frame is published as a single zero byte (`"00"`) since some
/// NDEF parsers reject zero-length text. Frames longer than
/// [`MAX_SENSOR_DATA_LEN`] are rejected, never truncated.
pub fn build_sensor_data_record(raw: &[u8]) -> Result<Record> {
    if raw.len() > MAX_SENSOR_DATA_LEN {
        log::error!(
            "sensor frame of {} bytes exceeds the {} byte record limit",
            raw.len(),
            MAX_SENSOR_DATA_LEN
        );
        return Err(Error::CapacityExceeded {
            what: "sensor data",
            limit: MAX_SENSOR_DATA_LEN,
            actual: raw.len(),
        });
    }

    let bytes: &[u8] = if raw.is_empty() { &[0x00] } else { raw };
    let text = utils::bytes_to_hex_bounded(bytes, MAX_DATA_TEXT_LEN, "sensor data")?;
    Ok(Record {
        kind: RecordKind::Data,
        text,
    })
}
