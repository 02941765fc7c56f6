// sensortag-nfc/src/controller/buffer.rs

use crate::constants::TAG_BUFFER_CAPACITY;
use crate::{Error, Result};

/// Fixed-capacity tag memory holding the last successfully encoded message.
///
/// Overwritten in place, never resized. Bytes past the encoded length are
/// kept zeroed so no stale tail from a longer message survives.
#[derive(Clone, PartialEq, Eq)]
pub struct TagBuffer {
    bytes: [u8; TAG_BUFFER_CAPACITY],
    len: usize,
}

impl TagBuffer {
    /// An empty, zeroed buffer.
    pub fn new() -> Self {
        Self {
            bytes: [0u8; TAG_BUFFER_CAPACITY],
            len: 0,
        }
    }

    /// Always [`TAG_BUFFER_CAPACITY`].
    pub fn capacity(&self) -> usize {
        TAG_BUFFER_CAPACITY
    }

    /// Length of the encoded message.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True before the first message is written.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The encoded message, as served to readers.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Whole backing array, tail included.
    pub fn raw(&self) -> &[u8; TAG_BUFFER_CAPACITY] {
        &self.bytes
    }

    /// Replace the contents with an already encoded message.
    pub(crate) fn overwrite(&mut self, encoded: &[u8]) -> Result<()> {
        if encoded.len() > TAG_BUFFER_CAPACITY {
            return Err(Error::EncodeOverflow {
                required: encoded.len(),
                capacity: TAG_BUFFER_CAPACITY,
            });
        }
        self.bytes[..encoded.len()].copy_from_slice(encoded);
        self.bytes[encoded.len()..].fill(0);
        self.len = encoded.len();
        Ok(())
    }
}

impl Default for TagBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TagBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TagBuffer")
            .field("len", &self.len)
            .field("bytes", &crate::utils::bytes_to_hex(self.as_bytes()))
            .finish()
    }
}
