// sensortag-nfc/src/ndef/tlv.rs

use crate::constants::{TLV_LONG_LENGTH, TLV_NDEF_MESSAGE, TLV_NULL, TLV_TERMINATOR};
use crate::ndef::parser::{be_u16_at, byte_at, slice_at};
use crate::{Error, Result};

/// Largest value a Type 2 tag TLV length field can announce.
pub const TLV_MAX_VALUE_LEN: usize = 0xfffe;

/// Type 2 tag TLV helper around an NDEF message.
/// Format: [0x03] [Len(1) | 0xFF Len(2, BE)] [NDEF message(n)] [0xFE]
pub struct Tlv;

impl Tlv {
    /// Bytes taken by the type and length fields.
    pub fn header_len(value_len: usize) -> usize {
        if value_len < TLV_LONG_LENGTH as usize {
            2
        } else {
            4
        }
    }

    /// Total wrapped size: header, value, terminator.
    pub fn wrapped_len(value_len: usize) -> usize {
        Self::header_len(value_len) + value_len + 1
    }

    /// Write the NDEF TLV header for a `value_len` byte message into `out`
    /// and return the number of bytes written. `out` must hold
    /// [`Tlv::header_len`] bytes.
    pub(crate) fn write_header(value_len: usize, out: &mut [u8]) -> usize {
        out[0] = TLV_NDEF_MESSAGE;
        if value_len < TLV_LONG_LENGTH as usize {
            out[1] = value_len as u8;
            2
        } else {
            debug_assert!(value_len <= TLV_MAX_VALUE_LEN);
            out[1] = TLV_LONG_LENGTH;
            out[2..4].copy_from_slice(&(value_len as u16).to_be_bytes());
            4
        }
    }

    /// Wrap a raw NDEF message in its TLV block plus terminator.
    pub fn encode(ndef: &[u8]) -> Result<Vec<u8>> {
        if ndef.len() > TLV_MAX_VALUE_LEN {
            return Err(Error::InvalidLength {
                expected: TLV_MAX_VALUE_LEN,
                actual: ndef.len(),
            });
        }

        let mut out = vec![0u8; Self::wrapped_len(ndef.len())];
        let start = Self::write_header(ndef.len(), &mut out);
        out[start..start + ndef.len()].copy_from_slice(ndef);
        out[start + ndef.len()] = TLV_TERMINATOR;
        Ok(out)
    }

    /// Locate the first NDEF message TLV in a tag memory image, skipping
    /// NULL, lock-control, memory-control and proprietary blocks.
    pub fn find_ndef(image: &[u8]) -> Result<&[u8]> {
        let mut pos = 0usize;
        while pos < image.len() {
            let tag = byte_at(image, pos)?;
            match tag {
                TLV_NULL => {
                    pos += 1;
                    continue;
                }
                TLV_TERMINATOR => break,
                _ => {}
            }

            let (len, value_start) = match byte_at(image, pos + 1)? {
                TLV_LONG_LENGTH => (be_u16_at(image, pos + 2)? as usize, pos + 4),
                short => (short as usize, pos + 2),
            };
            let value = slice_at(image, value_start, len)?;

            if tag == TLV_NDEF_MESSAGE {
                return Ok(value);
            }
            pos = value_start + len;
        }

        Err(Error::Format("no ndef message tlv found".into()))
    }
}
