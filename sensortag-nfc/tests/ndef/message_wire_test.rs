#[path = "../common/mod.rs"]
mod common;

use sensortag_nfc::ndef::{Message, build_identity_record, build_sensor_data_record, encode_message};
use sensortag_nfc::orchestrator::identity_records;
use sensortag_nfc::types::{IdentityKind, RecordSet};
use sensortag_nfc::Error;

#[test]
fn single_data_record_matches_fixture() {
    let msg = Message::assemble([build_sensor_data_record(&[0xab]).unwrap()]).unwrap();
    let mut out = [0u8; 64];
    let n = encode_message(&msg, &mut out).unwrap();
    assert_eq!(&out[..n], common::fixtures::single_data_record_message().as_slice());
}

#[test]
fn single_id_record_matches_fixture() {
    let msg = Message::assemble([build_identity_record(IdentityKind::Id, common::fixtures::id_words())]).unwrap();
    assert_eq!(msg.to_bytes(), common::fixtures::single_id_record_message());
}

#[test]
fn full_message_layout() {
    let mut records = identity_records(&common::fixtures::device_identity(), RecordSet::IdentityAddressData);
    records.push(build_sensor_data_record(&common::fixtures::reading_frame()).unwrap());
    let msg = Message::assemble(records).unwrap();
    let bytes = msg.to_bytes();

    // id (24) + addr (26) + data (38) record bytes
    assert_eq!(bytes[0], 0x03);
    assert_eq!(bytes[1] as usize, 24 + 26 + 38);
    assert_eq!(bytes.len(), 2 + 88 + 1);
    assert_eq!(*bytes.last().unwrap(), 0xfe);

    // begin on the first header only, end on the last only
    assert_eq!(bytes[2], 0x91);
    assert_eq!(bytes[2 + 24], 0x11);
    assert_eq!(bytes[2 + 24 + 26], 0x51);
    assert_eq!(msg.encoded_len(), bytes.len());
}

#[test]
fn empty_message_is_empty_tlv() {
    assert_eq!(Message::new().to_bytes(), vec![0x03, 0x00, 0xfe]);
}

#[test]
fn same_records_same_bytes() {
    let build = || {
        Message::assemble(
            identity_records(&common::fixtures::device_identity(), RecordSet::IdentityData)
                .into_iter()
                .chain([build_sensor_data_record(&common::fixtures::reading_frame()).unwrap()]),
        )
        .unwrap()
        .to_bytes()
    };
    assert_eq!(build(), build());
}

#[test]
fn fourth_record_rejected() {
    let rec = build_sensor_data_record(&[1]).unwrap();
    let err = Message::assemble(vec![rec.clone(), rec.clone(), rec.clone(), rec]).unwrap_err();
    assert!(matches!(err, Error::CapacityExceeded { limit: 3, actual: 4, .. }));
}

#[test]
fn short_output_reports_overflow_and_is_untouched() {
    let msg = Message::assemble([build_sensor_data_record(&[0xff; 29]).unwrap()]).unwrap();
    let mut out = [0x5au8; 16];
    let err = encode_message(&msg, &mut out).unwrap_err();
    assert_eq!(
        err,
        Error::EncodeOverflow {
            required: msg.encoded_len(),
            capacity: 16
        }
    );
    assert!(out.iter().all(|&b| b == 0x5a));
}
