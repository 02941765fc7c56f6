// sensortag-nfc/src/ndef/message.rs

use crate::constants::MAX_RECORD_COUNT;
use crate::ndef::Record;
use crate::ndef::codec;
use crate::{Error, Result};

/// Ordered, capacity-bounded sequence of records.
///
/// Reader-visible order is identity, address, data. The companion app
/// relies on it; nothing here validates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    records: Vec<Record>,
}

impl Message {
    /// Empty message.
    pub fn new() -> Self {
        Self {
            records: Vec::with_capacity(MAX_RECORD_COUNT),
        }
    }

    /// Collect `records` in order into one message.
    pub fn assemble<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = Record>,
    {
        let mut msg = Self::new();
        for rec in records {
            msg.push(rec)?;
        }
        Ok(msg)
    }

    /// Append one record, failing once the record limit is reached.
    pub fn push(&mut self, record: Record) -> Result<()> {
        if self.records.len() >= MAX_RECORD_COUNT {
            return Err(Error::CapacityExceeded {
                what: "message records",
                limit: MAX_RECORD_COUNT,
                actual: self.records.len() + 1,
            });
        }
        self.records.push(record);
        Ok(())
    }

    /// Records in reader-visible order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no record has been added.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Exact number of bytes [`Message::encode`] writes.
    pub fn encoded_len(&self) -> usize {
        codec::encoded_len(self)
    }

    /// Serialize into `out`, returning the encoded length.
    pub fn encode(&self, out: &mut [u8]) -> Result<usize> {
        codec::encode_message(self, out)
    }

    /// Serialize into a freshly allocated buffer.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = vec![0u8; self.encoded_len()];
        let written = codec::write_unchecked(self, &mut out);
        out.truncate(written);
        out
    }
}

impl IntoIterator for Message {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
