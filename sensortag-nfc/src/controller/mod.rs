// sensortag-nfc/src/controller/mod.rs

//! Tag emulation control: the type-state handle, its builder and the
//! mirrored tag buffer.

/// In-memory copy of the served tag bytes.
pub mod buffer;
/// Controller construction.
pub mod builder;
/// Type-state controller and the publish policy.
pub mod handle;

pub use buffer::TagBuffer;
pub use builder::TagControllerBuilder;
pub use handle::{Active, ControllerState, PublishOutcome, Stopped, TagController, Uninitialized};
