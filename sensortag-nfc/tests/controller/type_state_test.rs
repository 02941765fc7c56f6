#[path = "../common/mod.rs"]
mod common;

use std::sync::Arc;

use sensortag_nfc::controller::{PublishOutcome, TagControllerBuilder};
use sensortag_nfc::hal::mock::{EmulatorCall, MockIndicator, MockTagEmulator};
use sensortag_nfc::ndef::{Message, build_sensor_data_record, decode_message};
use sensortag_nfc::test_support::active_mock_controller;
use sensortag_nfc::types::{FieldPresence, Lifecycle, RecordKind, RecordSet};
use sensortag_nfc::Error;

#[test]
fn setup_arms_tag_with_identity_records() {
    common::init_logging();
    let mock = MockTagEmulator::new();
    let ctrl = TagControllerBuilder::new()
        .with_emulator(Box::new(mock.clone()))
        .with_identity(&common::fixtures::device_identity(), RecordSet::IdentityAddressData)
        .unwrap()
        .build_uninitialized()
        .unwrap();
    assert_eq!(ctrl.lifecycle(), Lifecycle::Uninitialized);
    assert!(mock.calls().is_empty());

    let active = ctrl.setup().unwrap();
    assert_eq!(active.lifecycle(), Lifecycle::Active);
    assert!(mock.is_running());

    let ops: Vec<_> = mock.calls().iter().map(|c| c.op()).collect();
    assert_eq!(ops.len(), 3);
    assert_eq!(mock.calls()[0], EmulatorCall::Setup);
    assert_eq!(mock.calls()[2], EmulatorCall::Start);

    let on_tag = decode_message(&mock.read().unwrap()).unwrap();
    let kinds: Vec<_> = on_tag.records().iter().map(|r| r.kind()).collect();
    assert_eq!(kinds, vec![RecordKind::Id, RecordKind::Address]);
}

#[test]
fn builder_without_emulator_is_rejected() {
    let err = TagControllerBuilder::new().build_uninitialized().err().unwrap();
    assert_eq!(err, Error::NotConfigured("tag emulator"));
}

#[test]
fn teardown_then_setup_restores_initial_message() {
    let mock = MockTagEmulator::new();
    let active = active_mock_controller(&mock).unwrap();
    let initial = mock.payload();

    let stopped = active.teardown().unwrap();
    assert_eq!(stopped.lifecycle(), Lifecycle::Stopped);
    assert!(mock.read().is_none());

    let again = stopped.setup().unwrap();
    assert_eq!(again.lifecycle(), Lifecycle::Active);
    assert_eq!(mock.read(), Some(initial));
}

#[test]
fn teardown_with_reader_present_then_setup_publishes_again() {
    let mock = MockTagEmulator::new();
    let led = Arc::new(MockIndicator::new());
    let active = TagControllerBuilder::new()
        .with_emulator(Box::new(mock.clone()))
        .with_indicator(led.clone())
        .with_identity(&common::fixtures::device_identity(), RecordSet::IdentityAddressData)
        .unwrap()
        .build_uninitialized()
        .unwrap()
        .setup()
        .unwrap();

    // reader still in the field when emulation goes down; its field-off
    // is never delivered
    mock.field_on();
    let stopped = active.teardown().unwrap();

    let mut again = stopped.setup().unwrap();
    assert_eq!(again.field(), FieldPresence::Absent);
    assert!(!led.is_on());

    let msg = Message::assemble([build_sensor_data_record(&[1, 2, 3]).unwrap()]).unwrap();
    for _ in 0..3 {
        assert!(matches!(again.publish(&msg).unwrap(), PublishOutcome::Published { .. }));
    }
    assert_eq!(decode_message(&mock.read().unwrap()).unwrap(), msg);
}
