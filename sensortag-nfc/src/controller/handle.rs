// sensortag-nfc/src/controller/handle.rs

use std::marker::PhantomData;

use crate::constants::TAG_BUFFER_CAPACITY;
use crate::controller::buffer::TagBuffer;
use crate::hal::{FieldSensor, TagEmulator};
use crate::ndef::Message;
use crate::types::{FieldPresence, Lifecycle};
use crate::Result;

/// Type-state markers
/// Built, emulation not yet armed.
pub struct Uninitialized;
/// Emulation armed; publish is available.
pub struct Active;
/// Torn down; may be armed again.
pub struct Stopped;

mod sealed {
    /// Restricts [`super::ControllerState`] to the markers above.
    pub trait Sealed {}
    impl Sealed for super::Uninitialized {}
    impl Sealed for super::Active {}
    impl Sealed for super::Stopped {}
}

/// Lifecycle state a controller type-state stands for.
pub trait ControllerState: sealed::Sealed {
    /// Reported by [`TagController::lifecycle`] while emulation runs.
    const LIFECYCLE: Lifecycle;
}

impl ControllerState for Uninitialized {
    const LIFECYCLE: Lifecycle = Lifecycle::Uninitialized;
}

impl ControllerState for Active {
    const LIFECYCLE: Lifecycle = Lifecycle::Active;
}

impl ControllerState for Stopped {
    const LIFECYCLE: Lifecycle = Lifecycle::Stopped;
}

/// Result of a publish attempt that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    /// The tag now serves the new message.
    Published {
        /// Encoded size, TLV included.
        len: usize,
    },
    /// A reader is in the field; the previous contents were kept.
    Busy,
}

/// Owner of the tag buffer and of the emulation peripheral.
///
/// Setup is only reachable from `Uninitialized` or `Stopped`, and publish
/// only from `Active`; anything else does not compile.
pub struct TagController<State = Uninitialized> {
    emulator: Box<dyn TagEmulator>,
    field: FieldSensor,
    buffer: TagBuffer,
    initial: Message,
    emulating: bool,
    _state: PhantomData<State>,
}

impl TagController<Uninitialized> {
    /// Create a controller that arms the tag with `initial` on setup.
    pub fn new(emulator: Box<dyn TagEmulator>, initial: Message) -> Self {
        Self::with_field_sensor(emulator, FieldSensor::new(), initial)
    }

    /// Like [`TagController::new`] with a caller-supplied field sensor
    /// (e.g. one that drives a status LED).
    pub fn with_field_sensor(
        emulator: Box<dyn TagEmulator>,
        field: FieldSensor,
        initial: Message,
    ) -> Self {
        Self {
            emulator,
            field,
            buffer: TagBuffer::new(),
            initial,
            emulating: false,
            _state: PhantomData,
        }
    }

    /// Register the field callback, load the initial message and start
    /// emulation.
    pub fn setup(self) -> Result<TagController<Active>> {
        self.arm()
    }
}

impl TagController<Stopped> {
    /// Re-arm after a teardown, starting again from the initial message.
    pub fn setup(self) -> Result<TagController<Active>> {
        self.arm()
    }
}

impl TagController<Active> {
    /// Replace the tag contents with `message`.
    ///
    /// While a reader is in the field nothing is touched and `Busy` is
    /// returned; the next tick retries. Otherwise emulation is stopped, the
    /// buffer rewritten and emulation restarted. A reader arriving during
    /// the stop gets the previous payload back and the call reports `Busy`.
    ///
    /// Hardware failures are returned as `HardwareFault` without retrying;
    /// emulation then stays down until a later publish succeeds.
    pub fn publish(&mut self, message: &Message) -> Result<PublishOutcome> {
        if self.field.is_present() {
            log::debug!("NFC field present, deferring tag update");
            return Ok(PublishOutcome::Busy);
        }

        let mut scratch = [0u8; TAG_BUFFER_CAPACITY];
        let len = message.encode(&mut scratch)?;

        self.emulator.stop()?;
        self.emulating = false;

        if self.field.is_present() {
            log::debug!("NFC field appeared while stopping, restoring previous payload");
            self.emulator.start()?;
            self.emulating = true;
            return Ok(PublishOutcome::Busy);
        }

        // The buffer only mirrors payloads the peripheral accepted.
        self.emulator.set_payload(&scratch[..len])?;
        self.buffer.overwrite(&scratch[..len])?;
        self.emulator.start()?;
        self.emulating = true;

        log::debug!("NFC payload updated, {} bytes", len);
        Ok(PublishOutcome::Published { len })
    }

    /// Stop emulation for good; `setup` may be called again afterwards.
    pub fn teardown(mut self) -> Result<TagController<Stopped>> {
        self.emulator.stop()?;
        log::info!("NFC emulation stopped");
        Ok(self.transition(false))
    }

    /// False after a hardware fault left emulation down.
    pub fn is_emulating(&self) -> bool {
        self.emulating
    }
}

impl<State: ControllerState> TagController<State> {
    fn arm(mut self) -> Result<TagController<Active>> {
        // Emulation was down, so no field-off can be pending.
        self.field.reset();
        self.emulator.setup(self.field.clone())?;

        let mut scratch = [0u8; TAG_BUFFER_CAPACITY];
        let len = self.initial.encode(&mut scratch)?;
        self.emulator.set_payload(&scratch[..len])?;
        self.buffer.overwrite(&scratch[..len])?;
        self.emulator.start()?;
        log::info!("NFC emulation started with {} byte initial payload", len);
        Ok(self.transition(true))
    }

    fn transition<Next>(self, emulating: bool) -> TagController<Next> {
        TagController {
            emulator: self.emulator,
            field: self.field,
            buffer: self.buffer,
            initial: self.initial,
            emulating,
            _state: PhantomData,
        }
    }

    /// Current lifecycle. An `Active` controller whose emulation was left
    /// down by a hardware fault reports `Stopped`.
    pub fn lifecycle(&self) -> Lifecycle {
        match State::LIFECYCLE {
            Lifecycle::Active if !self.emulating => Lifecycle::Stopped,
            other => other,
        }
    }

    /// Reader presence as last reported by the field interrupt.
    pub fn field(&self) -> FieldPresence {
        self.field.presence()
    }

    /// Handle for the interrupt side; clones share the same flag.
    pub fn field_sensor(&self) -> FieldSensor {
        self.field.clone()
    }

    /// The last message the peripheral accepted.
    pub fn buffer(&self) -> &TagBuffer {
        &self.buffer
    }

    /// Message served after each setup.
    pub fn initial_message(&self) -> &Message {
        &self.initial
    }
}
