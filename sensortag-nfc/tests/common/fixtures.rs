// fixtures.rs — commonly used identities, readings and expected wire bytes

use sensortag_nfc::hal::mock::StaticIdentity;
use sensortag_nfc::sensor::SensorSample;
use sensortag_nfc::types::{DeviceIdentity, IdentityWords};

pub fn id_words() -> IdentityWords {
    IdentityWords::new(0xdead_beef, 0x1234_5678)
}

pub fn address_words() -> IdentityWords {
    IdentityWords::new(0x0000_c0de, 0xcafe_0001)
}

pub fn identity_source() -> StaticIdentity {
    StaticIdentity::new(id_words(), address_words())
}

pub fn device_identity() -> DeviceIdentity {
    DeviceIdentity::new(id_words(), address_words())
}

pub fn reading() -> SensorSample {
    SensorSample {
        temperature_centi_c: 2_345,
        pressure_pa: 101_325,
        humidity_centi_pct: 4_550,
        acceleration_mg: [-16, 8, 1_000],
    }
}

pub const READING_BATTERY_MV: u16 = 2_950;

/// Sensor frame for [`reading`] at [`READING_BATTERY_MV`].
pub fn reading_frame() -> Vec<u8> {
    hex::decode("035b172dc87dfff0000803e80b86").unwrap()
}

/// A lone data record carrying the single byte 0xab.
pub fn single_data_record_message() -> Vec<u8> {
    hex::decode("030cd104056461746102656e6162fe").unwrap()
}

/// A lone id record for [`id_words`].
pub fn single_id_record_message() -> Vec<u8> {
    hex::decode(concat!(
        "0318",
        "d10213",
        "6964",
        "02656e",
        "64656164626565663132333435363738",
        "fe"
    ))
    .unwrap()
}
