// sensortag-nfc/src/orchestrator.rs

//! Periodic driver: sensors in, NFC tag and BLE advertisement out.

use std::iter;

use crate::config::TagConfig;
use crate::controller::{Active, PublishOutcome, TagController, TagControllerBuilder};
use crate::hal::{BleAdvertiser, IdentitySource, SensorSource};
use crate::ndef::{Message, Record, build_identity_record, build_sensor_data_record};
use crate::sensor::SensorSnapshot;
use crate::types::{DeviceIdentity, IdentityKind, RecordSet};
use crate::{Error, Result};

/// Identity records for `record_set`, in reader-visible order.
pub fn identity_records(identity: &DeviceIdentity, record_set: RecordSet) -> Vec<Record> {
    let mut records = vec![build_identity_record(IdentityKind::Id, identity.id)];
    if record_set.includes_address() {
        records.push(build_identity_record(IdentityKind::Address, identity.address));
    }
    records
}

/// What happened on the NFC side during one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NfcUpdate {
    /// New message served to readers.
    Published {
        /// Encoded size, TLV included.
        len: usize,
    },
    /// Reader in the field; previous tag contents kept.
    Busy,
    /// Encode or hardware failure; retried next tick.
    Skipped(Error),
    /// Tag setup failed at boot, running BLE-only.
    Unavailable,
}

/// Summary of one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    /// Zero-based tick number.
    pub tick: u64,
    /// Outcome on the tag side.
    pub nfc: NfcUpdate,
    /// Whether the advertiser accepted the frame.
    pub ble_updated: bool,
    /// Sensor frame sent to both the tag and the advertiser.
    pub sensor_bytes: Vec<u8>,
}

/// Owns the collaborators and the armed tag, and runs one update per
/// timer tick.
pub struct UpdateOrchestrator<S, B> {
    sensors: S,
    advertiser: B,
    tag: Option<TagController<Active>>,
    identity: DeviceIdentity,
    identity_records: Option<Vec<Record>>,
    config: TagConfig,
    ticks: u64,
    battery_mv: u16,
}

impl<S: SensorSource, B: BleAdvertiser> UpdateOrchestrator<S, B> {
    /// Wire an orchestrator around an already armed tag controller, or
    /// `None` to run BLE-only.
    pub fn new(
        config: TagConfig,
        identity: DeviceIdentity,
        tag: Option<TagController<Active>>,
        sensors: S,
        advertiser: B,
    ) -> Self {
        Self {
            sensors,
            advertiser,
            tag,
            identity,
            identity_records: None,
            config,
            ticks: 0,
            battery_mv: 0,
        }
    }

    /// Read the identity registers, arm the tag through `builder` and
    /// return a ready orchestrator.
    ///
    /// A setup fault does not abort boot: the device keeps advertising over
    /// BLE and every tick reports [`NfcUpdate::Unavailable`].
    pub fn boot<I: IdentitySource>(
        config: TagConfig,
        identity_source: &I,
        builder: TagControllerBuilder,
        sensors: S,
        advertiser: B,
    ) -> Self {
        let identity = DeviceIdentity::new(
            identity_source.device_id(),
            identity_source.device_address(),
        );

        let tag = builder
            .with_identity(&identity, config.record_set)
            .and_then(|b| b.build_uninitialized())
            .and_then(|ctrl| ctrl.setup());

        let tag = match tag {
            Ok(ctrl) => Some(ctrl),
            Err(e) => {
                log::error!("NFC setup failed, continuing BLE-only: {}", e);
                None
            }
        };

        Self::new(config, identity, tag, sensors, advertiser)
    }

    /// Run one update: sample, encode, publish to the tag, advertise.
    ///
    /// Only a sensor failure fails the tick as a whole. NFC problems are
    /// reported in the returned [`TickReport`] and never hold back the BLE
    /// update.
    pub fn tick(&mut self) -> Result<TickReport> {
        let tick = self.ticks;
        self.ticks += 1;

        let sample = self.sensors.sample().inspect_err(|e| {
            log::warn!("tick {}: sensor read failed, skipping: {}", tick, e);
        })?;

        if self.config.battery_due(tick) {
            match self.sensors.battery_mv() {
                Ok(mv) => self.battery_mv = mv,
                Err(e) => log::warn!(
                    "tick {}: battery read failed, keeping {} mV: {}",
                    tick,
                    self.battery_mv,
                    e
                ),
            }
        }

        let snapshot = SensorSnapshot::new(sample, self.battery_mv);
        log::debug!(
            "temperature: {}, pressure: {}, humidity: {} x: {} y: {} z: {} vbat: {}",
            sample.temperature_centi_c,
            sample.pressure_pa,
            sample.humidity_centi_pct,
            sample.acceleration_mg[0],
            sample.acceleration_mg[1],
            sample.acceleration_mg[2],
            self.battery_mv
        );
        let frame = snapshot.to_frame();

        let nfc = self.publish_nfc(&frame);

        let ble_updated = match self.advertiser.set_manufacturer_data(&frame) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("tick {}: advertisement update failed: {}", tick, e);
                false
            }
        };

        Ok(TickReport {
            tick,
            nfc,
            ble_updated,
            sensor_bytes: frame.to_vec(),
        })
    }

    fn publish_nfc(&mut self, frame: &[u8]) -> NfcUpdate {
        let Some(tag) = self.tag.as_mut() else {
            return NfcUpdate::Unavailable;
        };

        let identity = &self.identity;
        let record_set = self.config.record_set;
        let identity = self
            .identity_records
            .get_or_insert_with(|| identity_records(identity, record_set));

        let message = build_sensor_data_record(frame).and_then(|data| {
            Message::assemble(identity.iter().cloned().chain(iter::once(data)))
        });

        match message.and_then(|msg| tag.publish(&msg)) {
            Ok(PublishOutcome::Published { len }) => NfcUpdate::Published { len },
            Ok(PublishOutcome::Busy) => NfcUpdate::Busy,
            Err(e) => {
                log::warn!("NFC update skipped: {}", e);
                NfcUpdate::Skipped(e)
            }
        }
    }

    /// The tag controller, `None` when running BLE-only.
    pub fn tag(&self) -> Option<&TagController<Active>> {
        self.tag.as_ref()
    }

    /// False after a boot setup fault.
    pub fn nfc_available(&self) -> bool {
        self.tag.is_some()
    }

    /// Loop configuration.
    pub fn config(&self) -> &TagConfig {
        &self.config
    }

    /// Identity read at boot.
    pub fn identity(&self) -> &DeviceIdentity {
        &self.identity
    }

    /// Ticks attempted so far, failed ones included.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Latest battery measurement, 0 before the first.
    pub fn battery_mv(&self) -> u16 {
        self.battery_mv
    }

    /// Sensor collaborator.
    pub fn sensors(&self) -> &S {
        &self.sensors
    }

    /// Sensor collaborator, mutable.
    pub fn sensors_mut(&mut self) -> &mut S {
        &mut self.sensors
    }

    /// BLE collaborator.
    pub fn advertiser(&self) -> &B {
        &self.advertiser
    }

    /// BLE collaborator, mutable.
    pub fn advertiser_mut(&mut self) -> &mut B {
        &mut self.advertiser
    }
}
