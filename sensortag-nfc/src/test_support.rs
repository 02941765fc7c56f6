//! Test support helpers intended for use by unit and integration tests.
//!
//! These centralize the mock emulator and orchestrator wiring so tests across
//! the crate and the tests/ directory build the same fixtures.
#![allow(dead_code)]

use crate::config::TagConfig;
use crate::controller::{Active, TagController, TagControllerBuilder};
use crate::hal::mock::{MockAdvertiser, MockSensors, MockTagEmulator, StaticIdentity};
use crate::orchestrator::UpdateOrchestrator;
use crate::sensor::SensorSample;
use crate::{DeviceIdentity, IdentityWords, RecordSet, Result};

/// Identity registers used throughout the test suite.
#[doc(hidden)]
pub fn sample_identity() -> StaticIdentity {
    StaticIdentity::new(
        IdentityWords::new(0xdead_beef, 0x1234_5678),
        IdentityWords::new(0x0000_c0de, 0xcafe_0001),
    )
}

/// [`sample_identity`] read into a [`DeviceIdentity`].
#[doc(hidden)]
pub fn sample_device_identity() -> DeviceIdentity {
    let ident = sample_identity();
    DeviceIdentity::new(
        crate::hal::IdentitySource::device_id(&ident),
        crate::hal::IdentitySource::device_address(&ident),
    )
}

/// 21.00 C, 1000 hPa, 50 %RH, resting flat.
#[doc(hidden)]
pub fn sample_reading() -> SensorSample {
    SensorSample {
        temperature_centi_c: 2_100,
        pressure_pa: 100_000,
        humidity_centi_pct: 5_000,
        acceleration_mg: [0, 0, 1_000],
    }
}

/// Arm a controller over `mock` with the full identity record set as the
/// initial message. The mock is shared, so the caller keeps observing it.
#[doc(hidden)]
pub fn active_mock_controller(mock: &MockTagEmulator) -> Result<TagController<Active>> {
    TagControllerBuilder::new()
        .with_emulator(Box::new(mock.clone()))
        .with_identity(&sample_device_identity(), RecordSet::IdentityAddressData)?
        .build_uninitialized()?
        .setup()
}

/// Boot an orchestrator over mocks with the given config.
#[doc(hidden)]
pub fn booted_mock_orchestrator(
    config: TagConfig,
    mock: &MockTagEmulator,
) -> UpdateOrchestrator<MockSensors, MockAdvertiser> {
    UpdateOrchestrator::boot(
        config,
        &sample_identity(),
        TagControllerBuilder::new().with_emulator(Box::new(mock.clone())),
        MockSensors::new(sample_reading(), 3_000),
        MockAdvertiser::new(),
    )
}
