//! Frame loop
//!
//! Per iteration: pull one frame (blocking), classify, dispatch, then give
//! the control surface a bounded wait. Quit and Ctrl-C are observed between
//! iterations, so a frame's actions are always fully dispatched. A frame the
//! source cannot deliver skips classification but still polls the controls,
//! with no sample to calibrate on.

use crate::control::{Control, ControlInput};
use crate::dispatcher::{Dispatched, Dispatcher};
use crate::source::{Frame, SampleSource};
use headsurf_core::{CoreError, Position, Session, SENSITIVITY_STEP};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Loop settings
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Bounded wait for a control key after each frame
    pub poll_timeout: Duration,
    /// Calibrate on the first detected sample
    pub auto_calibrate: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            poll_timeout: Duration::from_millis(5),
            auto_calibrate: false,
        }
    }
}

/// Counters reported when the loop ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames read from the source (including ones without detection)
    pub frames: u64,
    /// Frames the source could not deliver
    pub skipped: u64,
    /// Frames with no landmark
    pub undetected: u64,
    /// Actions sent to the dispatcher
    pub actions: u64,
}

/// Owns the session and dispatcher for one run
pub struct Runner {
    session: Session,
    dispatcher: Dispatcher,
    options: RunOptions,
    summary: RunSummary,
}

impl Runner {
    pub fn new(session: Session, dispatcher: Dispatcher, options: RunOptions) -> Self {
        Self {
            session,
            dispatcher,
            options,
            summary: RunSummary::default(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Run until the source closes, a quit control arrives, or `running`
    /// is cleared.
    pub fn run(
        &mut self,
        source: &mut dyn SampleSource,
        controls: &mut dyn ControlInput,
        running: &AtomicBool,
    ) -> RunSummary {
        while running.load(Ordering::SeqCst) {
            let sample = match source.next_frame() {
                Ok(Frame::Closed) => {
                    info!("Input closed");
                    break;
                }
                Ok(frame) => {
                    let sample = frame.sample();
                    self.step(sample);
                    sample
                }
                Err(e) => {
                    debug!("{e}");
                    self.summary.skipped += 1;
                    None
                }
            };

            let control = match controls.poll(self.options.poll_timeout) {
                Ok(control) => control,
                Err(e) => {
                    warn!("Control input error: {e}");
                    None
                }
            };
            if let Some(control) = control {
                if !self.apply_control(control, sample) {
                    break;
                }
            }
        }

        self.summary
    }

    /// Classify and dispatch one frame, returning what was pressed
    fn step(&mut self, sample: Option<Position>) -> Vec<Dispatched> {
        self.summary.frames += 1;
        if sample.is_none() {
            self.summary.undetected += 1;
        }

        if self.options.auto_calibrate && !self.session.is_calibrated() && sample.is_some() {
            self.options.auto_calibrate = false;
            self.calibrate(sample);
            return Vec::new();
        }

        let actions = self.session.classify(sample);
        if actions.is_empty() {
            return Vec::new();
        }
        let dispatched = self.dispatcher.dispatch(actions);
        self.summary.actions += dispatched.len() as u64;
        dispatched
    }

    /// Apply a control using the current frame's sample. Returns false on quit.
    pub fn apply_control(&mut self, control: Control, sample: Option<Position>) -> bool {
        match control {
            Control::Calibrate => self.calibrate(sample),
            Control::Reset => {
                self.session.reset();
                info!("Calibration reset. Press 'c' to calibrate again.");
            }
            Control::IncreaseSensitivity => self.adjust_sensitivity(SENSITIVITY_STEP),
            Control::DecreaseSensitivity => self.adjust_sensitivity(-SENSITIVITY_STEP),
            Control::Quit => {
                info!("Quit requested");
                return false;
            }
        }
        true
    }

    fn calibrate(&mut self, sample: Option<Position>) {
        match self.session.calibrate(sample) {
            Ok(anchor) => {
                info!(
                    "Calibrated: neutral position ({:.3}, {:.3}). Move your head to play.",
                    anchor.x, anchor.y
                );
                self.log_zone();
            }
            Err(CoreError::NoSignal) => {
                warn!("No landmark detected. Make sure you are visible and well lit, then retry.");
            }
            Err(e) => warn!("Calibration failed: {e}"),
        }
    }

    fn adjust_sensitivity(&mut self, delta: f64) {
        let value = self.session.adjust_sensitivity(delta);
        let sensitivity = self.session.sensitivity();
        if sensitivity.is_min() {
            info!("Sensitivity multiplier: {:.1} (minimum)", value);
        } else if sensitivity.is_max() {
            info!("Sensitivity multiplier: {:.1} (maximum)", value);
        } else {
            info!("Sensitivity multiplier: {:.1}", value);
        }
        self.log_zone();
    }

    fn log_zone(&self) {
        if let Some(zone) = self.session.neutral_zone() {
            info!(
                "Neutral zone: x {:.3}..{:.3}, y {:.3}..{:.3}",
                zone.left(),
                zone.right(),
                zone.top(),
                zone.bottom()
            );
        }
    }
}
