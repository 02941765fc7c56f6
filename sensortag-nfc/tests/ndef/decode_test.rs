#[path = "../common/mod.rs"]
mod common;

use proptest::prelude::*;
use sensortag_nfc::ndef::{Message, build_sensor_data_record, decode_message};
use sensortag_nfc::orchestrator::identity_records;
use sensortag_nfc::types::{RecordKind, RecordSet};
use sensortag_nfc::Error;

#[test]
fn decode_fixture_message() {
    let msg = decode_message(&common::fixtures::single_data_record_message()).unwrap();
    assert_eq!(msg.len(), 1);
    assert_eq!(msg.records()[0].kind(), RecordKind::Data);
    assert_eq!(msg.records()[0].raw_bytes().unwrap(), vec![0xab]);
}

#[test]
fn decode_skips_leading_control_tlvs() {
    // NULL TLV and a lock-control TLV ahead of the message
    let mut image = hex::decode("000103a01044").unwrap();
    image.extend(common::fixtures::single_id_record_message());
    let msg = decode_message(&image).unwrap();
    assert_eq!(msg.records()[0].text(), "deadbeef12345678");
}

#[test]
fn decode_rejects_image_without_message() {
    assert!(decode_message(&hex::decode("0000fe").unwrap()).is_err());
}

#[test]
fn decode_rejects_text_no_builder_would_produce() {
    // uppercase hex in a data record
    let upper = hex::decode("030cd104056461746102656e4142fe").unwrap();
    assert!(matches!(decode_message(&upper), Err(Error::Format(_))));

    // 60 chars of data text, one past the working-string limit
    let mut ndef = vec![0xd1, 0x04, 3 + 60];
    ndef.extend_from_slice(b"data\x02en");
    ndef.extend(std::iter::repeat_n(b'a', 60));
    let mut image = vec![0x03, ndef.len() as u8];
    image.extend(ndef);
    image.push(0xfe);
    assert!(matches!(
        decode_message(&image),
        Err(Error::CapacityExceeded { limit: 59, actual: 60, .. })
    ));
}

proptest! {
    #[test]
    fn full_message_roundtrips(frame in prop::collection::vec(any::<u8>(), 0..=29)) {
        let mut records = identity_records(&common::fixtures::device_identity(), RecordSet::IdentityAddressData);
        records.push(build_sensor_data_record(&frame).unwrap());
        let msg = Message::assemble(records).unwrap();

        let decoded = decode_message(&msg.to_bytes()).unwrap();
        prop_assert_eq!(&decoded, &msg);
    }
}
