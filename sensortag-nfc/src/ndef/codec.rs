// sensortag-nfc/src/ndef/codec.rs

//! NDEF wire codec.
//!
//! Each record is a short (or, above 255 payload bytes, long) well-known
//! record without an ID field. The message is wrapped in a Type 2 tag NDEF
//! TLV so the bytes can be handed to the emulation peripheral as is.

use crate::constants::{
    NDEF_FLAG_CF, NDEF_FLAG_IL, NDEF_FLAG_MB, NDEF_FLAG_ME, NDEF_FLAG_SR, NDEF_TNF_MASK,
    TLV_TERMINATOR, TNF_WELL_KNOWN,
};
use crate::ndef::parser::{be_u32_at, byte_at, slice_at};
use crate::ndef::tlv::TLV_MAX_VALUE_LEN;
use crate::ndef::{Message, Record, Tlv};
use crate::{Error, Result};

/// A record as found on the wire, before interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRecord<'a> {
    /// Type name format, low three header bits.
    pub tnf: u8,
    /// MB flag.
    pub message_begin: bool,
    /// ME flag.
    pub message_end: bool,
    /// Record type field.
    pub type_code: &'a [u8],
    /// ID field, present only when the IL flag is set.
    pub id: Option<&'a [u8]>,
    /// Payload bytes, status byte included.
    pub payload: &'a [u8],
}

fn is_short(payload_len: usize) -> bool {
    payload_len <= u8::MAX as usize
}

/// Encoded size of a single record.
pub fn record_len(record: &Record) -> usize {
    let payload_len = record.payload_len();
    let len_field = if is_short(payload_len) { 1 } else { 4 };
    2 + len_field + record.type_code().len() + payload_len
}

/// Size of the bare NDEF message (no TLV).
pub fn ndef_len(message: &Message) -> usize {
    message.records().iter().map(record_len).sum()
}

/// Size of the TLV-wrapped message written by [`encode_message`].
pub fn encoded_len(message: &Message) -> usize {
    Tlv::wrapped_len(ndef_len(message))
}

/// Serialize `message` into `out` and return the encoded length.
///
/// `out` is not modified when the message does not fit, or when it is too
/// long for the TLV length field.
pub fn encode_message(message: &Message, out: &mut [u8]) -> Result<usize> {
    let ndef = ndef_len(message);
    if ndef > TLV_MAX_VALUE_LEN {
        return Err(Error::CapacityExceeded {
            what: "ndef message",
            limit: TLV_MAX_VALUE_LEN,
            actual: ndef,
        });
    }

    let required = Tlv::wrapped_len(ndef);
    if required > out.len() {
        return Err(Error::EncodeOverflow {
            required,
            capacity: out.len(),
        });
    }
    Ok(write_unchecked(message, out))
}

/// Write without the capacity check; `out` must hold [`encoded_len`] bytes.
pub(crate) fn write_unchecked(message: &Message, out: &mut [u8]) -> usize {
    let mut pos = Tlv::write_header(ndef_len(message), out);

    let count = message.len();
    for (i, record) in message.records().iter().enumerate() {
        pos += write_record(record, i == 0, i + 1 == count, &mut out[pos..]);
    }

    out[pos] = TLV_TERMINATOR;
    pos + 1
}

fn write_record(record: &Record, first: bool, last: bool, out: &mut [u8]) -> usize {
    let type_code = record.type_code();
    let payload = record.payload();

    // MB | ME | CF(0) | SR | IL(0) | TNF
    let mut header = TNF_WELL_KNOWN;
    if first {
        header |= NDEF_FLAG_MB;
    }
    if last {
        header |= NDEF_FLAG_ME;
    }
    if is_short(payload.len()) {
        header |= NDEF_FLAG_SR;
    }

    out[0] = header;
    out[1] = type_code.len() as u8;
    let mut pos = 2;
    if is_short(payload.len()) {
        out[pos] = payload.len() as u8;
        pos += 1;
    } else {
        out[pos..pos + 4].copy_from_slice(&(payload.len() as u32).to_be_bytes());
        pos += 4;
    }
    out[pos..pos + type_code.len()].copy_from_slice(type_code);
    pos += type_code.len();
    out[pos..pos + payload.len()].copy_from_slice(&payload);
    pos + payload.len()
}

/// Split a bare NDEF message into its records.
pub fn parse_records(ndef: &[u8]) -> Result<Vec<RawRecord<'_>>> {
    let mut records = Vec::new();
    let mut pos = 0usize;

    while pos < ndef.len() {
        let header = byte_at(ndef, pos)?;
        let message_begin = header & NDEF_FLAG_MB != 0;
        let message_end = header & NDEF_FLAG_ME != 0;

        if header & NDEF_FLAG_CF != 0 {
            return Err(Error::Format("chunked records are not supported".into()));
        }
        if records.is_empty() != message_begin {
            return Err(Error::Format(format!(
                "message-begin flag misplaced on record {}",
                records.len()
            )));
        }

        let type_len = byte_at(ndef, pos + 1)? as usize;
        let mut cursor = pos + 2;
        let payload_len = if header & NDEF_FLAG_SR != 0 {
            let len = byte_at(ndef, cursor)? as usize;
            cursor += 1;
            len
        } else {
            let len = be_u32_at(ndef, cursor)? as usize;
            cursor += 4;
            len
        };
        let id_len = if header & NDEF_FLAG_IL != 0 {
            let len = byte_at(ndef, cursor)? as usize;
            cursor += 1;
            Some(len)
        } else {
            None
        };

        let type_code = slice_at(ndef, cursor, type_len)?;
        cursor += type_len;
        let id = match id_len {
            Some(len) => {
                let id = slice_at(ndef, cursor, len)?;
                cursor += len;
                Some(id)
            }
            None => None,
        };
        let payload = slice_at(ndef, cursor, payload_len)?;
        cursor += payload_len;

        records.push(RawRecord {
            tnf: header & NDEF_TNF_MASK,
            message_begin,
            message_end,
            type_code,
            id,
            payload,
        });
        pos = cursor;

        if message_end {
            break;
        }
    }

    if let Some(last) = records.last() {
        if !last.message_end {
            return Err(Error::Format("last record lacks message-end flag".into()));
        }
    }
    Ok(records)
}

/// Decode a tag memory image (TLV-wrapped) back into a [`Message`].
pub fn decode_message(image: &[u8]) -> Result<Message> {
    let ndef = Tlv::find_ndef(image)?;
    let raw = parse_records(ndef)?;

    let mut message = Message::new();
    for rec in raw {
        if rec.tnf != TNF_WELL_KNOWN {
            return Err(Error::Format(format!("unexpected tnf {:#04x}", rec.tnf)));
        }
        message.push(Record::from_text_payload(rec.type_code, rec.payload)?)?;
    }
    Ok(message)
}
