//! Control surface: calibrate, reset, sensitivity, quit
//!
//! | Key          | Control               |
//! |--------------|-----------------------|
//! | `c`          | calibrate             |
//! | `r`          | reset calibration     |
//! | `+` / `=`    | sensitivity +0.1      |
//! | `-`          | sensitivity -0.1      |
//! | `q` / Esc    | quit                  |
//! | Ctrl+C       | quit (raw mode)       |

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::time::Duration;

/// User command for the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Calibrate,
    Reset,
    IncreaseSensitivity,
    DecreaseSensitivity,
    Quit,
}

/// Map a terminal key event to a control, if it is bound
pub fn control_for_key(key: &KeyEvent) -> Option<Control> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Control::Quit),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(Control::Calibrate),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Control::Reset),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(Control::IncreaseSensitivity),
        KeyCode::Char('-') => Some(Control::DecreaseSensitivity),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Control::Quit),
        _ => None,
    }
}

/// Source of control commands, checked once per frame
pub trait ControlInput {
    /// Wait up to `timeout` for a control
    fn poll(&mut self, timeout: Duration) -> anyhow::Result<Option<Control>>;
}

/// No interactive controls (headless mode)
pub struct NoControls;

impl ControlInput for NoControls {
    fn poll(&mut self, _timeout: Duration) -> anyhow::Result<Option<Control>> {
        Ok(None)
    }
}

/// Controls read from the terminal in raw mode
///
/// Raw mode is enabled on construction and restored on drop.
pub struct TerminalControls {
    _private: (),
}

impl TerminalControls {
    pub fn new() -> anyhow::Result<Self> {
        enable_raw_mode()?;
        Ok(Self { _private: () })
    }
}

impl Drop for TerminalControls {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

impl ControlInput for TerminalControls {
    fn poll(&mut self, timeout: Duration) -> anyhow::Result<Option<Control>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) => Ok(control_for_key(&key)),
            _ => Ok(None),
        }
    }
}
