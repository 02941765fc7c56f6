// sensortag-nfc/src/sensor.rs

//! Sensor readings and the raw frame published over NFC and BLE.

use crate::constants::{SENSOR_FORMAT_RAW, SENSOR_FRAME_LEN};

/// Pressure offset subtracted before packing into 16 bits.
const PRESSURE_OFFSET_PA: u32 = 50_000;

/// One environmental and motion sample as delivered by the drivers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SensorSample {
    /// Hundredths of a degree Celsius.
    pub temperature_centi_c: i32,
    /// Pascal.
    pub pressure_pa: u32,
    /// Hundredths of a percent relative humidity.
    pub humidity_centi_pct: u32,
    /// X, Y, Z in milli-g.
    pub acceleration_mg: [i16; 3],
}

/// Reading set for one tick: a fresh sample plus the latest battery
/// measurement. Lives for a single encoding pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SensorSnapshot {
    /// Sample taken this tick.
    pub sample: SensorSample,
    /// Latest battery reading, possibly from an earlier tick.
    pub battery_mv: u16,
}

impl SensorSnapshot {
    /// Pair a sample with a battery reading.
    pub fn new(sample: SensorSample, battery_mv: u16) -> Self {
        Self { sample, battery_mv }
    }

    /// Pack into the 14-byte raw frame (format 3, big endian):
    ///
    /// | byte  | field                                   |
    /// |-------|-----------------------------------------|
    /// | 0     | format (0x03)                           |
    /// | 1     | humidity, 0.5 % steps                   |
    /// | 2     | temperature integer, bit 7 = sign       |
    /// | 3     | temperature hundredths                  |
    /// | 4-5   | pressure - 50000 Pa                     |
    /// | 6-11  | acceleration x, y, z (mg)               |
    /// | 12-13 | battery (mV)                            |
    ///
    /// Out-of-range values saturate.
    pub fn to_frame(&self) -> [u8; SENSOR_FRAME_LEN] {
        let s = &self.sample;
        let mut out = [0u8; SENSOR_FRAME_LEN];

        out[0] = SENSOR_FORMAT_RAW;
        out[1] = (s.humidity_centi_pct / 50).min(200) as u8;

        let magnitude = s.temperature_centi_c.unsigned_abs();
        let whole = (magnitude / 100).min(127) as u8;
        let sign = if s.temperature_centi_c < 0 { 0x80 } else { 0x00 };
        out[2] = sign | whole;
        out[3] = (magnitude % 100) as u8;

        let pressure = s
            .pressure_pa
            .saturating_sub(PRESSURE_OFFSET_PA)
            .min(u16::MAX as u32) as u16;
        out[4..6].copy_from_slice(&pressure.to_be_bytes());

        for (i, axis) in s.acceleration_mg.iter().enumerate() {
            let at = 6 + i * 2;
            out[at..at + 2].copy_from_slice(&axis.to_be_bytes());
        }

        out[12..14].copy_from_slice(&self.battery_mv.to_be_bytes());
        out
    }
}
