//! Virtual keyboard device using evdev/uinput
//!
//! Creates a virtual keyboard that the desktop (and any emulator window
//! with focus) sees as a real one. Each press is a key-down followed by a
//! key-up, each in its own synchronized report.

use crate::keys;
use evdev::{
    uinput::{VirtualDevice, VirtualDeviceBuilder},
    AttributeSet, EventType, InputEvent,
};
use thiserror::Error;

/// Errors from key injection
#[derive(Debug, Error)]
pub enum InjectError {
    #[error("Key injection unavailable: {0}")]
    Unavailable(#[source] std::io::Error),
    #[error("Failed to emit key event: {0}")]
    EmitEvent(#[source] std::io::Error),
    #[error("Unknown key identifier \"{0}\"")]
    UnknownKey(String),
}

/// Something that can deliver a single key press
pub trait KeyInjector {
    /// Press and release `key` once
    fn press(&mut self, key: &str) -> Result<(), InjectError>;
}

/// uinput-backed virtual keyboard
pub struct VirtualKeyboard {
    device: VirtualDevice,
}

impl VirtualKeyboard {
    /// Create the device, advertising every key in the identifier table
    ///
    /// Needs write access to `/dev/uinput`.
    pub fn new(name: &str) -> Result<Self, InjectError> {
        let mut key_set = AttributeSet::<evdev::Key>::new();
        for key in keys::all_keys() {
            key_set.insert(key);
        }

        let device = VirtualDeviceBuilder::new()
            .map_err(InjectError::Unavailable)?
            .name(name)
            .with_keys(&key_set)
            .map_err(InjectError::Unavailable)?
            .build()
            .map_err(InjectError::Unavailable)?;

        Ok(Self { device })
    }

    /// Get the device path (e.g., /dev/input/eventX)
    pub fn device_path(&mut self) -> Option<std::path::PathBuf> {
        self.device
            .enumerate_dev_nodes_blocking()
            .ok()?
            .next()?
            .ok()
    }
}

impl KeyInjector for VirtualKeyboard {
    fn press(&mut self, key: &str) -> Result<(), InjectError> {
        let code = keys::lookup(key)
            .ok_or_else(|| InjectError::UnknownKey(key.to_string()))?
            .code();

        let down = InputEvent::new_now(EventType::KEY, code, 1);
        let up = InputEvent::new_now(EventType::KEY, code, 0);

        self.device.emit(&[down]).map_err(InjectError::EmitEvent)?;
        self.device.emit(&[up]).map_err(InjectError::EmitEvent)?;
        Ok(())
    }
}
