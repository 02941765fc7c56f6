// sensortag-nfc/src/hal/field.rs

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::hal::traits::FieldIndicator;
use crate::types::FieldPresence;

/// Field events raised by the tag-emulation peripheral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent {
    /// A reader's RF field was detected.
    FieldOn,
    /// The RF field went away.
    FieldOff,
}

/// Reader-presence flag shared between the field interrupt and the main
/// loop.
///
/// The interrupt side only ever calls [`FieldSensor::handle_event`]; it
/// never sees the tag buffer. The flag is a single atomic word, so a
/// main-loop read is never torn by a preempting interrupt.
#[derive(Clone)]
pub struct FieldSensor {
    present: Arc<AtomicBool>,
    indicator: Option<Arc<dyn FieldIndicator>>,
}

impl FieldSensor {
    /// A sensor starting out absent, with no indicator.
    pub fn new() -> Self {
        Self {
            present: Arc::new(AtomicBool::new(false)),
            indicator: None,
        }
    }

    /// Also drive an advisory indicator (status LED) on field changes.
    pub fn with_indicator(indicator: Arc<dyn FieldIndicator>) -> Self {
        Self {
            present: Arc::new(AtomicBool::new(false)),
            indicator: Some(indicator),
        }
    }

    /// Interrupt entry point.
    pub fn handle_event(&self, event: FieldEvent) {
        let present = matches!(event, FieldEvent::FieldOn);
        self.present.store(present, Ordering::Release);
        if let Some(indicator) = &self.indicator {
            indicator.set_active(present);
        }
        if present {
            log::debug!("NFC field detected");
        } else {
            log::debug!("NFC field lost");
        }
    }

    /// Force the flag back to absent and switch the indicator off.
    ///
    /// Used when emulation is (re)armed: a field-off that arrived while
    /// emulation was stopped is never delivered by the peripheral.
    pub fn reset(&self) {
        self.present.store(false, Ordering::Release);
        if let Some(indicator) = &self.indicator {
            indicator.set_active(false);
        }
    }

    /// Current reader presence.
    pub fn presence(&self) -> FieldPresence {
        FieldPresence::from_flag(self.is_present())
    }

    /// Same as `presence().is_present()`.
    pub fn is_present(&self) -> bool {
        self.present.load(Ordering::Acquire)
    }
}

impl Default for FieldSensor {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FieldSensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSensor")
            .field("present", &self.is_present())
            .field("indicator", &self.indicator.is_some())
            .finish()
    }
}
