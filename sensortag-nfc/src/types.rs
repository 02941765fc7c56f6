// sensortag-nfc/src/types.rs

use derive_more::Display;

use crate::constants::{TYPE_ADDRESS, TYPE_DATA, TYPE_ID};

/// Two 32-bit words read once from the identity source (device id or
/// device address).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdentityWords([u32; 2]);

impl IdentityWords {
    /// Words in register order.
    pub const fn new(high: u32, low: u32) -> Self {
        Self([high, low])
    }

    /// The raw words.
    pub fn words(&self) -> [u32; 2] {
        self.0
    }

    /// Fixed-width lowercase hex, eight digits per word.
    pub fn to_hex(&self) -> String {
        crate::utils::words_to_hex(&self.0)
    }
}

impl From<[u32; 2]> for IdentityWords {
    fn from(words: [u32; 2]) -> Self {
        Self(words)
    }
}

/// Device id and device address, as read at boot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceIdentity {
    /// Device id registers.
    pub id: IdentityWords,
    /// Device address registers.
    pub address: IdentityWords,
}

impl DeviceIdentity {
    /// Pair an id with an address.
    pub fn new(id: IdentityWords, address: IdentityWords) -> Self {
        Self { id, address }
    }
}

/// Which identity field an identity record carries.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentityKind {
    /// Device id, record type `id`.
    #[display(fmt = "id")]
    Id,
    /// Device address, record type `addr`.
    #[display(fmt = "addr")]
    Address,
}

impl IdentityKind {
    /// Record type the identity is published under.
    pub fn type_code(&self) -> &'static [u8] {
        match self {
            Self::Id => TYPE_ID,
            Self::Address => TYPE_ADDRESS,
        }
    }
}

/// Reader-visible record category, derived from the record type code.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Identity record carrying the device id.
    #[display(fmt = "id")]
    Id,
    /// Identity record carrying the device address.
    #[display(fmt = "addr")]
    Address,
    /// Hex-encoded sensor frame.
    #[display(fmt = "data")]
    Data,
}

impl RecordKind {
    /// Record type field on the wire.
    pub fn type_code(&self) -> &'static [u8] {
        match self {
            Self::Id => TYPE_ID,
            Self::Address => TYPE_ADDRESS,
            Self::Data => TYPE_DATA,
        }
    }

    /// `None` for type codes this crate never writes.
    pub fn from_type_code(code: &[u8]) -> Option<Self> {
        match code {
            TYPE_ID => Some(Self::Id),
            TYPE_ADDRESS => Some(Self::Address),
            TYPE_DATA => Some(Self::Data),
            _ => None,
        }
    }
}

/// Records published each tick. Older firmware revisions disagreed on
/// whether the address record belongs in the message, so it is selectable.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecordSet {
    /// id, addr, data
    #[default]
    #[display(fmt = "id+addr+data")]
    IdentityAddressData,
    /// id, data
    #[display(fmt = "id+data")]
    IdentityData,
}

impl RecordSet {
    /// Whether the address record is published.
    pub fn includes_address(&self) -> bool {
        matches!(self, Self::IdentityAddressData)
    }
}

/// Whether a reader's RF field is currently detected.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum FieldPresence {
    /// A reader is powering the antenna.
    #[display(fmt = "present")]
    Present,
    /// No reader in range.
    #[display(fmt = "absent")]
    Absent,
}

impl FieldPresence {
    /// Map the raw flag shared with the field interrupt.
    pub fn from_flag(present: bool) -> Self {
        if present { Self::Present } else { Self::Absent }
    }

    /// True when a reader is in the field.
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present)
    }
}

/// Emulation lifecycle of the tag controller.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Built, peripheral not yet set up.
    Uninitialized,
    /// Serving the current payload.
    Active,
    /// Emulation off, after teardown or a fault.
    Stopped,
}
