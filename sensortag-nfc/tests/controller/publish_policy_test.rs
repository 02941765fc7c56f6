#[path = "../common/mod.rs"]
mod common;

use sensortag_nfc::controller::PublishOutcome;
use sensortag_nfc::hal::mock::{EmulatorCall, EmulatorOp, MockTagEmulator};
use sensortag_nfc::ndef::{Message, build_sensor_data_record, decode_message};
use sensortag_nfc::test_support::active_mock_controller;
use sensortag_nfc::types::{FieldPresence, Lifecycle};
use sensortag_nfc::Error;

fn data_message(frame: &[u8]) -> Message {
    Message::assemble([build_sensor_data_record(frame).unwrap()]).unwrap()
}

#[test]
fn publish_without_reader_stops_writes_and_restarts() {
    common::init_logging();
    let mock = MockTagEmulator::new();
    let mut ctrl = active_mock_controller(&mock).unwrap();
    mock.clear_calls();

    let msg = data_message(&common::fixtures::reading_frame());
    let outcome = ctrl.publish(&msg).unwrap();

    assert_eq!(outcome, PublishOutcome::Published { len: msg.encoded_len() });
    assert_eq!(
        mock.calls(),
        vec![
            EmulatorCall::Stop,
            EmulatorCall::SetPayload(msg.to_bytes()),
            EmulatorCall::Start
        ]
    );
    assert_eq!(ctrl.buffer().as_bytes(), msg.to_bytes().as_slice());
    assert_eq!(decode_message(&mock.read().unwrap()).unwrap(), msg);
}

#[test]
fn reader_present_leaves_everything_untouched() {
    let mock = MockTagEmulator::new();
    let mut ctrl = active_mock_controller(&mock).unwrap();
    let before = ctrl.buffer().clone();
    mock.clear_calls();
    mock.field_on();
    assert_eq!(ctrl.field(), FieldPresence::Present);

    let outcome = ctrl.publish(&data_message(&[1, 2, 3])).unwrap();

    assert_eq!(outcome, PublishOutcome::Busy);
    assert!(mock.calls().is_empty());
    assert_eq!(ctrl.buffer(), &before);
    assert!(mock.is_running());
}

#[test]
fn reader_leaving_allows_next_publish() {
    let mock = MockTagEmulator::new();
    let mut ctrl = active_mock_controller(&mock).unwrap();
    let msg = data_message(&[9]);

    mock.field_on();
    assert_eq!(ctrl.publish(&msg).unwrap(), PublishOutcome::Busy);
    mock.field_off();
    assert!(matches!(ctrl.publish(&msg).unwrap(), PublishOutcome::Published { .. }));
}

#[test]
fn reader_arriving_during_stop_keeps_previous_payload() {
    let mock = MockTagEmulator::new();
    let mut ctrl = active_mock_controller(&mock).unwrap();
    let previous = mock.payload();
    let before = ctrl.buffer().clone();
    mock.clear_calls();
    mock.reader_arrives_during_stop();

    let outcome = ctrl.publish(&data_message(&[7])).unwrap();

    assert_eq!(outcome, PublishOutcome::Busy);
    assert_eq!(mock.calls(), vec![EmulatorCall::Stop, EmulatorCall::Start]);
    assert_eq!(mock.read(), Some(previous));
    assert_eq!(ctrl.buffer(), &before);
}

#[test]
fn hardware_fault_is_reported_without_retry() {
    let mock = MockTagEmulator::new();
    let mut ctrl = active_mock_controller(&mock).unwrap();
    mock.clear_calls();
    mock.fail_next(EmulatorOp::Stop, 0x0d);

    let err = ctrl.publish(&data_message(&[7])).unwrap_err();

    assert_eq!(err, Error::HardwareFault(0x0d));
    assert_eq!(mock.count(EmulatorOp::Stop), 1);
    assert_eq!(mock.count(EmulatorOp::Start), 0);
}

#[test]
fn failed_restart_reports_stopped_until_next_success() {
    let mock = MockTagEmulator::new();
    let mut ctrl = active_mock_controller(&mock).unwrap();
    mock.fail_next(EmulatorOp::Start, 0x03);

    assert!(ctrl.publish(&data_message(&[7])).is_err());
    assert_eq!(ctrl.lifecycle(), Lifecycle::Stopped);
    assert!(!ctrl.is_emulating());

    assert!(ctrl.publish(&data_message(&[8])).is_ok());
    assert_eq!(ctrl.lifecycle(), Lifecycle::Active);
}

#[test]
fn shorter_message_leaves_no_stale_tail() {
    let mock = MockTagEmulator::new();
    let mut ctrl = active_mock_controller(&mock).unwrap();

    ctrl.publish(&data_message(&[0xff; 29])).unwrap();
    let short = data_message(&[1]);
    ctrl.publish(&short).unwrap();

    let len = short.encoded_len();
    assert_eq!(ctrl.buffer().len(), len);
    assert!(ctrl.buffer().raw()[len..].iter().all(|&b| b == 0));
}
