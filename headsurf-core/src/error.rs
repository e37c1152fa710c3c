//! Core error types

use thiserror::Error;

/// Errors raised by calibration and threshold setup
///
/// The classifier itself never fails; out-of-range samples are just large
/// deviations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Calibration was requested on a frame without a detected landmark
    #[error("No landmark detected; cannot calibrate")]
    NoSignal,

    /// A base threshold is outside the open interval (0, 1)
    #[error("Invalid {name} threshold {value}: must be within (0, 1)")]
    InvalidThreshold { name: &'static str, value: f64 },
}
