//! Signal-to-action classifier for head-motion control
//!
//! Turns a stream of normalized 2D landmark positions into one-shot
//! directional actions:
//!
//! - Calibration store (neutral anchor + global sensitivity)
//! - Per-direction latches (one fire per excursion from neutral)
//! - The classifier itself, a memoryless function of sample, calibration
//!   and latches
//! - A `Session` owning all of the above
//!
//! Nothing in this crate performs I/O.

pub mod calibration;
pub mod classifier;
pub mod error;
pub mod latch;
pub mod session;
pub mod types;
pub mod zone;

pub use calibration::{
    Calibration, Sensitivity, ThresholdBases, Thresholds, SENSITIVITY_MAX, SENSITIVITY_MIN,
    SENSITIVITY_STEP,
};
pub use classifier::classify;
pub use error::CoreError;
pub use latch::LatchState;
pub use session::Session;
pub use types::{Action, ActionSet, Position};
pub use zone::{NeutralZone, PixelRect};
