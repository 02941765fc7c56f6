// sensortag-nfc/src/config.rs

use std::time::Duration;

use crate::constants::{DEFAULT_BATTERY_SAMPLE_INTERVAL, DEFAULT_TICK_INTERVAL_MS};
use crate::types::RecordSet;

/// Runtime configuration of the update loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TagConfig {
    /// Records published each tick.
    pub record_set: RecordSet,
    /// Measure the battery every this many ticks (0 behaves like 1).
    pub battery_sample_interval: u32,
    /// Period of the external timer driving `tick()`.
    pub tick_interval_ms: u64,
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            record_set: RecordSet::default(),
            battery_sample_interval: DEFAULT_BATTERY_SAMPLE_INTERVAL,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

impl TagConfig {
    /// Choose which records are published.
    pub fn with_record_set(mut self, record_set: RecordSet) -> Self {
        self.record_set = record_set;
        self
    }

    /// Measure the battery every `ticks` ticks.
    pub fn with_battery_sample_interval(mut self, ticks: u32) -> Self {
        self.battery_sample_interval = ticks;
        self
    }

    /// Set the tick period in milliseconds.
    pub fn with_tick_interval_ms(mut self, ms: u64) -> Self {
        self.tick_interval_ms = ms;
        self
    }

    /// Tick period as a [`Duration`].
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Whether tick number `tick` (starting at 0) should measure the battery.
    pub fn battery_due(&self, tick: u64) -> bool {
        tick % u64::from(self.battery_sample_interval.max(1)) == 0
    }
}
