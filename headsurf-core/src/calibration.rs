//! Calibration store: neutral anchor, base thresholds and sensitivity
//!
//! Effective thresholds are `base × sensitivity`. Sensitivity lives on a
//! fixed 0.1 grid between [`SENSITIVITY_MIN`] and [`SENSITIVITY_MAX`], kept as
//! an integer count of tenths so repeated adjustments never drift.

use crate::error::CoreError;
use crate::types::Position;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Lowest allowed sensitivity multiplier
pub const SENSITIVITY_MIN: f64 = 0.2;
/// Highest allowed sensitivity multiplier
pub const SENSITIVITY_MAX: f64 = 2.5;
/// Size of one sensitivity adjustment
pub const SENSITIVITY_STEP: f64 = 0.1;

const MIN_TENTHS: i64 = 2;
const MAX_TENTHS: i64 = 25;
const DEFAULT_TENTHS: u8 = 10;

/// Default upward deviation (fraction of frame height) that fires a jump
pub const DEFAULT_JUMP_THRESHOLD: f64 = 0.035;
/// Default downward deviation that fires a slide
pub const DEFAULT_SLIDE_THRESHOLD: f64 = 0.04;
/// Default sideways deviation (fraction of frame width) for left/right
pub const DEFAULT_SIDE_THRESHOLD: f64 = 0.07;

/// Global threshold multiplier, clamped to [0.2, 2.5] in 0.1 steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sensitivity {
    tenths: u8,
}

impl Sensitivity {
    /// Snap `value` to the nearest 0.1 step and clamp it into range.
    ///
    /// Non-finite input falls back to the default of 1.0.
    pub fn new(value: f64) -> Self {
        if !value.is_finite() {
            return Self::default();
        }
        Self::from_tenths((value * 10.0).round() as i64)
    }

    fn from_tenths(tenths: i64) -> Self {
        Self {
            tenths: tenths.clamp(MIN_TENTHS, MAX_TENTHS) as u8,
        }
    }

    /// Multiplier value
    pub fn value(&self) -> f64 {
        f64::from(self.tenths) / 10.0
    }

    /// Apply `delta` (rounded to the 0.1 grid), clamping silently.
    ///
    /// Returns the new multiplier.
    pub fn adjust(&mut self, delta: f64) -> f64 {
        if delta.is_finite() {
            let steps = (delta * 10.0).round() as i64;
            *self = Self::from_tenths(i64::from(self.tenths) + steps);
        }
        self.value()
    }

    pub fn is_min(&self) -> bool {
        i64::from(self.tenths) == MIN_TENTHS
    }

    pub fn is_max(&self) -> bool {
        i64::from(self.tenths) == MAX_TENTHS
    }
}

impl Default for Sensitivity {
    fn default() -> Self {
        Self {
            tenths: DEFAULT_TENTHS,
        }
    }
}

impl Serialize for Sensitivity {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(self.value())
    }
}

impl<'de> Deserialize<'de> for Sensitivity {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        f64::deserialize(d).map(Self::new)
    }
}

/// Base (unscaled) thresholds, each a fraction of the frame in (0, 1)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdBases {
    jump: f64,
    slide: f64,
    side: f64,
}

impl ThresholdBases {
    /// Validate and build a threshold set.
    pub fn new(jump: f64, slide: f64, side: f64) -> Result<Self, CoreError> {
        Ok(Self {
            jump: check_base("jump", jump)?,
            slide: check_base("slide", slide)?,
            side: check_base("side", side)?,
        })
    }

    /// Scale every base by the sensitivity multiplier
    pub fn scaled(&self, sensitivity: Sensitivity) -> Thresholds {
        let s = sensitivity.value();
        Thresholds {
            jump: self.jump * s,
            slide: self.slide * s,
            side: self.side * s,
        }
    }
}

impl Default for ThresholdBases {
    fn default() -> Self {
        Self {
            jump: DEFAULT_JUMP_THRESHOLD,
            slide: DEFAULT_SLIDE_THRESHOLD,
            side: DEFAULT_SIDE_THRESHOLD,
        }
    }
}

fn check_base(name: &'static str, value: f64) -> Result<f64, CoreError> {
    if value.is_finite() && value > 0.0 && value < 1.0 {
        Ok(value)
    } else {
        Err(CoreError::InvalidThreshold { name, value })
    }
}

/// Effective thresholds after applying sensitivity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Upward y deviation for jump
    pub jump: f64,
    /// Downward y deviation for slide
    pub slide: f64,
    /// Sideways x deviation, shared by left and right
    pub side: f64,
}

/// Neutral anchor plus threshold configuration for one session
#[derive(Debug, Clone)]
pub struct Calibration {
    anchor: Option<Position>,
    bases: ThresholdBases,
    sensitivity: Sensitivity,
}

impl Calibration {
    /// Create an uncalibrated store
    pub fn new(bases: ThresholdBases, sensitivity: Sensitivity) -> Self {
        Self {
            anchor: None,
            bases,
            sensitivity,
        }
    }

    /// Capture `sample` as the neutral anchor.
    ///
    /// Without a sample the previous calibration (if any) is kept.
    pub fn calibrate(&mut self, sample: Option<Position>) -> Result<Position, CoreError> {
        let anchor = sample.ok_or(CoreError::NoSignal)?;
        self.anchor = Some(anchor);
        debug!("Neutral anchor set to ({:.3}, {:.3})", anchor.x, anchor.y);
        Ok(anchor)
    }

    /// Forget the anchor. Latches are cleared by [`crate::Session::reset`].
    pub(crate) fn clear_anchor(&mut self) {
        self.anchor = None;
    }

    /// Change sensitivity by `delta`, returning the clamped multiplier
    pub fn adjust_sensitivity(&mut self, delta: f64) -> f64 {
        let value = self.sensitivity.adjust(delta);
        debug!("Sensitivity now {:.1}", value);
        value
    }

    pub fn anchor(&self) -> Option<Position> {
        self.anchor
    }

    pub fn is_calibrated(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn bases(&self) -> &ThresholdBases {
        &self.bases
    }

    pub fn sensitivity(&self) -> Sensitivity {
        self.sensitivity
    }

    /// Thresholds currently in effect
    pub fn thresholds(&self) -> Thresholds {
        self.bases.scaled(self.sensitivity)
    }
}

impl Default for Calibration {
    fn default() -> Self {
        Self::new(ThresholdBases::default(), Sensitivity::default())
    }
}
