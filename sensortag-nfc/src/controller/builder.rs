// sensortag-nfc/src/controller/builder.rs

use std::sync::Arc;

use crate::controller::handle::{TagController, Uninitialized};
use crate::hal::{FieldIndicator, FieldSensor, TagEmulator};
use crate::ndef::Message;
use crate::orchestrator::identity_records;
use crate::types::{DeviceIdentity, RecordSet};
use crate::{Error, Result};

/// Helper to construct a TagController with optional configuration.
#[derive(Default)]
pub struct TagControllerBuilder {
    emulator: Option<Box<dyn TagEmulator>>,
    indicator: Option<Arc<dyn FieldIndicator>>,
    initial: Option<Message>,
}

impl TagControllerBuilder {
    /// Empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide the emulation peripheral (e.g. MockTagEmulator)
    pub fn with_emulator(mut self, emulator: Box<dyn TagEmulator>) -> Self {
        self.emulator = Some(emulator);
        self
    }

    /// Drive `indicator` from field events.
    pub fn with_indicator(mut self, indicator: Arc<dyn FieldIndicator>) -> Self {
        self.indicator = Some(indicator);
        self
    }

    /// Message served right after setup, before the first publish.
    pub fn with_initial_message(mut self, message: Message) -> Self {
        self.initial = Some(message);
        self
    }

    /// Arm the tag with the identity records of `identity` selected by
    /// `record_set`.
    pub fn with_identity(self, identity: &DeviceIdentity, record_set: RecordSet) -> Result<Self> {
        let message = Message::assemble(identity_records(identity, record_set))?;
        Ok(self.with_initial_message(message))
    }

    /// Consume the builder and return an uninitialized controller.
    /// Requires an emulator; without an initial message the tag starts out
    /// empty.
    pub fn build_uninitialized(self) -> Result<TagController<Uninitialized>> {
        let emulator = self.emulator.ok_or(Error::NotConfigured("tag emulator"))?;
        let field = match self.indicator {
            Some(indicator) => FieldSensor::with_indicator(indicator),
            None => FieldSensor::new(),
        };
        Ok(TagController::with_field_sensor(
            emulator,
            field,
            self.initial.unwrap_or_default(),
        ))
    }
}
