// sensortag-nfc/src/hal/traits.rs

use crate::Result;
use crate::hal::field::FieldSensor;
use crate::sensor::SensorSample;
use crate::types::IdentityWords;

/// Type 2 tag emulation peripheral.
///
/// Every call maps a non-success hardware status to
/// [`crate::Error::HardwareFault`]. Implementations must be bounded in time;
/// a stuck peripheral surfaces as a fault, never as a hang.
pub trait TagEmulator {
    /// Register the field sensor the peripheral's interrupt handler reports
    /// field-on/field-off events to.
    fn setup(&mut self, field: FieldSensor) -> Result<()>;

    /// Stop answering reader polls.
    fn stop(&mut self) -> Result<()>;

    /// Hand the peripheral the bytes it serves to readers.
    fn set_payload(&mut self, payload: &[u8]) -> Result<()>;

    /// Start answering reader polls with the current payload.
    fn start(&mut self) -> Result<()>;
}

/// Environmental and motion sensor drivers.
pub trait SensorSource {
    /// Take one temperature/pressure/humidity/acceleration sample.
    fn sample(&mut self) -> Result<SensorSample>;

    /// Measure the battery voltage in millivolts. Slower and more
    /// power-hungry than [`SensorSource::sample`], so it is called sparingly.
    fn battery_mv(&mut self) -> Result<u16>;
}

/// Hardware identity registers, read once at boot.
pub trait IdentitySource {
    /// Factory-programmed device id.
    fn device_id(&self) -> IdentityWords;
    /// Factory-programmed device address.
    fn device_address(&self) -> IdentityWords;
}

/// BLE advertiser fed with the same sensor frame as the tag.
pub trait BleAdvertiser {
    /// Replace the manufacturer-specific data in the advertisement.
    fn set_manufacturer_data(&mut self, data: &[u8]) -> Result<()>;
}

/// Advisory "reader is scanning" output, typically an LED. Called from the
/// field interrupt.
pub trait FieldIndicator: Send + Sync {
    /// Switch the indicator on or off. Must not block.
    fn set_active(&self, active: bool);
}
