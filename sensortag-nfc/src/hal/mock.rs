// sensortag-nfc/src/hal/mock.rs

//! In-memory collaborators for unit tests, integration tests and the demo.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::hal::field::{FieldEvent, FieldSensor};
use crate::hal::traits::{BleAdvertiser, FieldIndicator, IdentitySource, SensorSource, TagEmulator};
use crate::sensor::SensorSample;
use crate::types::IdentityWords;
use crate::{Error, Result};

/// Emulator operation, used to target injected failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmulatorOp {
    /// [`TagEmulator::setup`]
    Setup,
    /// [`TagEmulator::stop`]
    Stop,
    /// [`TagEmulator::set_payload`]
    SetPayload,
    /// [`TagEmulator::start`]
    Start,
}

/// One recorded emulator call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmulatorCall {
    /// `setup()`
    Setup,
    /// `stop()`
    Stop,
    /// With the payload handed over.
    SetPayload(Vec<u8>),
    /// `start()`
    Start,
}

impl EmulatorCall {
    /// Operation of this call, payload dropped.
    pub fn op(&self) -> EmulatorOp {
        match self {
            Self::Setup => EmulatorOp::Setup,
            Self::Stop => EmulatorOp::Stop,
            Self::SetPayload(_) => EmulatorOp::SetPayload,
            Self::Start => EmulatorOp::Start,
        }
    }
}

#[derive(Debug, Default)]
struct EmulatorState {
    calls: Vec<EmulatorCall>,
    payload: Vec<u8>,
    running: bool,
    field: Option<FieldSensor>,
    failures: Vec<(EmulatorOp, u32)>,
    field_on_during_stop: bool,
}

impl EmulatorState {
    fn take_failure(&mut self, op: EmulatorOp) -> Result<()> {
        match self.failures.iter().position(|(o, _)| *o == op) {
            Some(idx) => {
                let (_, code) = self.failures.remove(idx);
                Err(Error::HardwareFault(code))
            }
            None => Ok(()),
        }
    }
}

/// Mock tag-emulation peripheral. Clones share state, so a test can keep a
/// handle after boxing one into a controller and later play the part of
/// the field interrupt or of a reader.
#[derive(Debug, Clone, Default)]
pub struct MockTagEmulator {
    state: Arc<Mutex<EmulatorState>>,
}

impl MockTagEmulator {
    /// Stopped emulator with no recorded calls.
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, EmulatorState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Make the next call of `op` fail with hardware status `code`.
    pub fn fail_next(&self, op: EmulatorOp, code: u32) {
        self.state().failures.push((op, code));
    }

    /// Raise a field-on event right after the next `stop()`, modelling a
    /// reader that arrives inside the stop/restart window.
    pub fn reader_arrives_during_stop(&self) {
        self.state().field_on_during_stop = true;
    }

    /// Every call so far, in order.
    pub fn calls(&self) -> Vec<EmulatorCall> {
        self.state().calls.clone()
    }

    /// Number of recorded calls of `op`.
    pub fn count(&self, op: EmulatorOp) -> usize {
        self.state().calls.iter().filter(|c| c.op() == op).count()
    }

    /// Forget recorded calls; state is kept.
    pub fn clear_calls(&self) {
        self.state().calls.clear();
    }

    /// Last payload handed to the peripheral.
    pub fn payload(&self) -> Vec<u8> {
        self.state().payload.clone()
    }

    /// Whether emulation is started.
    pub fn is_running(&self) -> bool {
        self.state().running
    }

    /// What a reader polling the tag right now would get.
    pub fn read(&self) -> Option<Vec<u8>> {
        let state = self.state();
        state.running.then(|| state.payload.clone())
    }

    /// Play a reader entering the field.
    pub fn field_on(&self) {
        self.raise(FieldEvent::FieldOn);
    }

    /// Play a reader leaving the field.
    pub fn field_off(&self) {
        self.raise(FieldEvent::FieldOff);
    }

    fn raise(&self, event: FieldEvent) {
        // Clone out of the lock so the handler never runs under it.
        let field = self.state().field.clone();
        if let Some(field) = field {
            field.handle_event(event);
        }
    }
}

impl TagEmulator for MockTagEmulator {
    fn setup(&mut self, field: FieldSensor) -> Result<()> {
        let mut state = self.state();
        state.calls.push(EmulatorCall::Setup);
        state.take_failure(EmulatorOp::Setup)?;
        state.field = Some(field);
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        let arrive = {
            let mut state = self.state();
            state.calls.push(EmulatorCall::Stop);
            state.take_failure(EmulatorOp::Stop)?;
            state.running = false;
            std::mem::take(&mut state.field_on_during_stop)
        };
        if arrive {
            self.field_on();
        }
        Ok(())
    }

    fn set_payload(&mut self, payload: &[u8]) -> Result<()> {
        let mut state = self.state();
        state.calls.push(EmulatorCall::SetPayload(payload.to_vec()));
        state.take_failure(EmulatorOp::SetPayload)?;
        state.payload = payload.to_vec();
        Ok(())
    }

    fn start(&mut self) -> Result<()> {
        let mut state = self.state();
        state.calls.push(EmulatorCall::Start);
        state.take_failure(EmulatorOp::Start)?;
        state.running = true;
        Ok(())
    }
}

/// Mock sensor drivers returning a fixed sample.
#[derive(Debug, Clone, Default)]
pub struct MockSensors {
    /// Returned by every successful `sample()`.
    pub sample: SensorSample,
    /// Returned by `battery_mv()`.
    pub battery_mv: u16,
    /// Calls to `sample()` so far.
    pub sample_calls: usize,
    /// Calls to `battery_mv()` so far.
    pub battery_calls: usize,
    /// Number of upcoming `sample()` calls that should fail.
    pub sample_failures: usize,
}

impl MockSensors {
    /// Sensors returning `sample` and `battery_mv`.
    pub fn new(sample: SensorSample, battery_mv: u16) -> Self {
        Self {
            sample,
            battery_mv,
            ..Self::default()
        }
    }

    /// Fail the next `n` samples.
    pub fn set_sample_failures(&mut self, n: usize) {
        self.sample_failures = n;
    }
}

impl SensorSource for MockSensors {
    fn sample(&mut self) -> Result<SensorSample> {
        self.sample_calls += 1;
        if self.sample_failures > 0 {
            self.sample_failures -= 1;
            return Err(Error::Sensor("mock sample failure".into()));
        }
        Ok(self.sample)
    }

    fn battery_mv(&mut self) -> Result<u16> {
        self.battery_calls += 1;
        Ok(self.battery_mv)
    }
}

/// Identity registers with fixed contents.
#[derive(Debug, Clone, Copy)]
pub struct StaticIdentity {
    id: IdentityWords,
    address: IdentityWords,
}

impl StaticIdentity {
    /// Registers holding `id` and `address`.
    pub fn new(id: IdentityWords, address: IdentityWords) -> Self {
        Self { id, address }
    }
}

impl IdentitySource for StaticIdentity {
    fn device_id(&self) -> IdentityWords {
        self.id
    }

    fn device_address(&self) -> IdentityWords {
        self.address
    }
}

/// Mock advertiser recording every manufacturer-data update.
#[derive(Debug, Clone, Default)]
pub struct MockAdvertiser {
    /// Every accepted update, oldest first.
    pub sent: Vec<Vec<u8>>,
    /// When set, every update fails with this status.
    pub fail_with: Option<u32>,
}

impl MockAdvertiser {
    /// Advertiser that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent accepted update.
    pub fn last(&self) -> Option<Vec<u8>> {
        self.sent.last().cloned()
    }
}

impl BleAdvertiser for MockAdvertiser {
    fn set_manufacturer_data(&mut self, data: &[u8]) -> Result<()> {
        if let Some(code) = self.fail_with {
            return Err(Error::Advertiser(code));
        }
        self.sent.push(data.to_vec());
        Ok(())
    }
}

/// Mock status LED.
#[derive(Debug, Default)]
pub struct MockIndicator {
    on: AtomicBool,
    transitions: AtomicUsize,
}

impl MockIndicator {
    /// LED that starts off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current LED state.
    pub fn is_on(&self) -> bool {
        self.on.load(Ordering::Acquire)
    }

    /// Number of `set_active` calls.
    pub fn transitions(&self) -> usize {
        self.transitions.load(Ordering::Acquire)
    }
}

impl FieldIndicator for MockIndicator {
    fn set_active(&self, active: bool) {
        self.on.store(active, Ordering::Release);
        self.transitions.fetch_add(1, Ordering::AcqRel);
    }
}
