#[path = "../common/mod.rs"]
mod common;

use std::sync::mpsc;
use std::thread;

use sensortag_nfc::controller::PublishOutcome;
use sensortag_nfc::hal::FieldEvent;
use sensortag_nfc::hal::mock::{EmulatorOp, MockTagEmulator};
use sensortag_nfc::ndef::{Message, build_sensor_data_record};
use sensortag_nfc::test_support::active_mock_controller;

#[test]
fn event_from_other_thread_is_seen_by_publish() {
    let mock = MockTagEmulator::new();
    let mut ctrl = active_mock_controller(&mock).unwrap();
    let sensor = ctrl.field_sensor();
    let msg = Message::assemble([build_sensor_data_record(&[1]).unwrap()]).unwrap();

    let (tx, rx) = mpsc::channel();
    let isr = thread::spawn(move || {
        sensor.handle_event(FieldEvent::FieldOn);
        tx.send(()).unwrap();
    });
    rx.recv().unwrap();
    isr.join().unwrap();

    mock.clear_calls();
    assert_eq!(ctrl.publish(&msg).unwrap(), PublishOutcome::Busy);
    assert!(mock.calls().is_empty());

    ctrl.field_sensor().handle_event(FieldEvent::FieldOff);
    assert!(matches!(ctrl.publish(&msg).unwrap(), PublishOutcome::Published { .. }));
}

#[test]
fn no_publish_while_field_toggles() {
    let mock = MockTagEmulator::new();
    let mut ctrl = active_mock_controller(&mock).unwrap();
    let sensor = ctrl.field_sensor();
    let msg = Message::assemble([build_sensor_data_record(&[2]).unwrap()]).unwrap();

    let toggler = thread::spawn(move || {
        for i in 0..500 {
            let event = if i % 2 == 0 { FieldEvent::FieldOn } else { FieldEvent::FieldOff };
            sensor.handle_event(event);
        }
        sensor.handle_event(FieldEvent::FieldOff);
    });

    let mut published = 0;
    for _ in 0..200 {
        if let PublishOutcome::Published { .. } = ctrl.publish(&msg).unwrap() {
            published += 1;
        }
    }
    toggler.join().unwrap();

    // every stop is paired with a start, whatever the interleaving
    assert_eq!(mock.count(EmulatorOp::Stop), mock.count(EmulatorOp::Start) - 1);
    assert_eq!(mock.count(EmulatorOp::SetPayload), published + 1);
    assert!(mock.is_running());

    assert!(matches!(ctrl.publish(&msg).unwrap(), PublishOutcome::Published { .. }));
}
