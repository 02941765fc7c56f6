#[path = "../common/mod.rs"]
mod common;

use sensortag_nfc::ndef::{build_identity_record, build_sensor_data_record};
use sensortag_nfc::types::{IdentityKind, IdentityWords, RecordKind};
use sensortag_nfc::Error;

#[test]
fn identity_record_text_is_sixteen_lower_hex_chars() {
    let rec = build_identity_record(IdentityKind::Id, common::fixtures::id_words());
    assert_eq!(rec.kind(), RecordKind::Id);
    assert_eq!(rec.type_code(), b"id");
    assert_eq!(rec.text(), "deadbeef12345678");
}

#[test]
fn address_record_keeps_leading_zeros() {
    let rec = build_identity_record(IdentityKind::Address, IdentityWords::new(0x1, 0xa));
    assert_eq!(rec.type_code(), b"addr");
    assert_eq!(rec.text(), "000000010000000a");
}

#[test]
fn sensor_frame_becomes_hex_text() {
    let rec = build_sensor_data_record(&common::fixtures::reading_frame()).unwrap();
    assert_eq!(rec.type_code(), b"data");
    assert_eq!(rec.text(), "035b172dc87dfff0000803e80b86");
    assert_eq!(rec.payload_len(), 3 + 28);
}

#[test]
fn payload_is_status_language_then_text() {
    let rec = build_sensor_data_record(&[0x0f]).unwrap();
    assert_eq!(rec.payload(), b"\x02en0f".to_vec());
}

#[test]
fn largest_frame_accepted_one_more_rejected() {
    let rec = build_sensor_data_record(&[0xff; 29]).unwrap();
    assert_eq!(rec.text().len(), 58);

    match build_sensor_data_record(&[0xff; 30]) {
        Err(Error::CapacityExceeded { limit, actual, .. }) => {
            assert_eq!(limit, 29);
            assert_eq!(actual, 30);
        }
        other => panic!("expected CapacityExceeded, got {:?}", other),
    }
}

#[test]
fn empty_frame_encodes_single_zero_byte() {
    let rec = build_sensor_data_record(&[]).unwrap();
    assert_eq!(rec.text(), "00");
}
