//! headsurf - head-motion controller for endless-runner games
//!
//! Reads normalized head-landmark positions from a pose-estimation service,
//! classifies them into jump/slide/left/right actions with
//! [`headsurf_core`], and presses the matching keys on a uinput virtual
//! keyboard.

pub mod config;
pub mod control;
pub mod dispatcher;
pub mod keyboard;
pub mod keys;
pub mod logging;
pub mod profile;
pub mod runner;
pub mod source;

pub use config::{ConfigError, HeadsurfConfig, ThresholdConfig};
pub use control::{Control, ControlInput, NoControls, TerminalControls};
pub use dispatcher::{DispatchMode, Dispatched, Dispatcher};
pub use keyboard::{InjectError, KeyInjector, VirtualKeyboard};
pub use profile::{KeyTable, ProfileRegistry, DEFAULT_PROFILE};
pub use runner::{RunOptions, RunSummary, Runner};
pub use source::{Frame, JsonLinesSource, SampleSource, SourceError};
