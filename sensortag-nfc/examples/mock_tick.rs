// Run the update loop against in-memory peripherals.
//
//   RUST_LOG=debug cargo run --example mock_tick

use std::sync::Arc;

use anyhow::Context;
use sensortag_nfc::hal::mock::{MockAdvertiser, MockIndicator, MockSensors, MockTagEmulator, StaticIdentity};
use sensortag_nfc::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = TagConfig::default()
        .with_battery_sample_interval(3)
        .with_tick_interval_ms(100);
    let identity = StaticIdentity::new(
        IdentityWords::new(0xdead_beef, 0x1234_5678),
        IdentityWords::new(0x0000_c0de, 0xcafe_0001),
    );
    let sample = SensorSample {
        temperature_centi_c: 2_100,
        pressure_pa: 100_000,
        humidity_centi_pct: 5_000,
        acceleration_mg: [0, 0, 1_000],
    };

    let emulator = MockTagEmulator::new();
    let led = Arc::new(MockIndicator::new());
    let builder = TagControllerBuilder::new()
        .with_emulator(Box::new(emulator.clone()))
        .with_indicator(led.clone());

    let mut orch = UpdateOrchestrator::boot(
        config,
        &identity,
        builder,
        MockSensors::new(sample, 3_000),
        MockAdvertiser::new(),
    );

    for i in 0..6 {
        // a phone lingers over the tag for ticks 2 and 3
        match i {
            2 => emulator.field_on(),
            4 => emulator.field_off(),
            _ => {}
        }
        orch.sensors_mut().sample.temperature_centi_c += 10;

        let report = orch.tick().context("tick failed")?;
        println!(
            "tick {}: nfc={:?} ble={} led={} frame={}",
            report.tick,
            report.nfc,
            report.ble_updated,
            led.is_on(),
            bytes_to_hex(&report.sensor_bytes)
        );
        std::thread::sleep(orch.config().tick_interval());
    }

    let image = emulator.read().context("tag not running")?;
    let message = decode_message(&image)?;
    println!("tag serves {} records:", message.len());
    for record in message.records() {
        println!(
            "  {}: {}",
            String::from_utf8_lossy(record.type_code()),
            record.text()
        );
    }
    Ok(())
}
