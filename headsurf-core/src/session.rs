//! Session state: one calibration store and one latch set, single owner
//!
//! Every operation takes the session explicitly; there is no shared state
//! between sessions.

use crate::calibration::{Calibration, Sensitivity, ThresholdBases, Thresholds};
use crate::classifier::classify;
use crate::error::CoreError;
use crate::latch::LatchState;
use crate::types::{ActionSet, Position};
use crate::zone::NeutralZone;
use tracing::debug;

/// Classifier session
#[derive(Debug, Clone, Default)]
pub struct Session {
    calibration: Calibration,
    latches: LatchState,
}

impl Session {
    /// Start an uncalibrated session with all latches clear
    pub fn new(bases: ThresholdBases, sensitivity: Sensitivity) -> Self {
        Self {
            calibration: Calibration::new(bases, sensitivity),
            latches: LatchState::new(),
        }
    }

    /// Capture the neutral anchor from the current sample.
    ///
    /// Fails with [`CoreError::NoSignal`] when no landmark was detected,
    /// leaving any previous calibration in place.
    pub fn calibrate(&mut self, sample: Option<Position>) -> Result<Position, CoreError> {
        self.calibration.calibrate(sample)
    }

    /// Drop the anchor and clear every latch in one step.
    pub fn reset(&mut self) {
        self.calibration.clear_anchor();
        self.latches.clear_all();
        debug!("Session reset");
    }

    /// Change sensitivity by `delta`; returns the clamped multiplier.
    pub fn adjust_sensitivity(&mut self, delta: f64) -> f64 {
        self.calibration.adjust_sensitivity(delta)
    }

    /// Classify one frame
    pub fn classify(&mut self, sample: Option<Position>) -> ActionSet {
        classify(&self.calibration, &mut self.latches, sample)
    }

    pub fn is_calibrated(&self) -> bool {
        self.calibration.is_calibrated()
    }

    pub fn anchor(&self) -> Option<Position> {
        self.calibration.anchor()
    }

    pub fn sensitivity(&self) -> Sensitivity {
        self.calibration.sensitivity()
    }

    pub fn thresholds(&self) -> Thresholds {
        self.calibration.thresholds()
    }

    pub fn latches(&self) -> &LatchState {
        &self.latches
    }

    /// Neutral box for overlay renderers, `None` while uncalibrated
    pub fn neutral_zone(&self) -> Option<NeutralZone> {
        self.anchor()
            .map(|anchor| NeutralZone::new(anchor, self.thresholds()))
    }
}
