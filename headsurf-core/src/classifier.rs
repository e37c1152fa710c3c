//! Position-to-action classification
//!
//! One call per frame. The neutral-box test runs before the per-direction
//! tests, so a frame that lands back in neutral clears every latch before
//! anything can fire. The cooldown is spatial, never temporal.

use crate::calibration::Calibration;
use crate::latch::LatchState;
use crate::types::{Action, ActionSet, Position};
use tracing::trace;

/// Classify one sample, updating `latches` in place.
///
/// Returns the actions that fired on this frame. Nothing fires (and the
/// latches are left alone) while uncalibrated or when `sample` is `None`.
pub fn classify(
    calibration: &Calibration,
    latches: &mut LatchState,
    sample: Option<Position>,
) -> ActionSet {
    let mut fired = ActionSet::empty();

    let (Some(anchor), Some(sample)) = (calibration.anchor(), sample) else {
        return fired;
    };

    let dx = sample.x - anchor.x;
    let dy = sample.y - anchor.y;
    let t = calibration.thresholds();

    let in_neutral_x = dx.abs() < t.side;
    let in_neutral_y = dy > -t.jump && dy < t.slide;
    if in_neutral_x && in_neutral_y {
        latches.clear_all();
    }

    let departed = [
        (Action::Jump, dy < -t.jump),
        (Action::Slide, dy > t.slide),
        (Action::Left, dx < -t.side),
        (Action::Right, dx > t.side),
    ];

    for (action, past_threshold) in departed {
        if past_threshold && !latches.is_latched(action) {
            latches.latch(action);
            fired.insert(action);
        }
    }

    if !fired.is_empty() {
        trace!("dx={:+.4} dy={:+.4} fired {}", dx, dy, fired);
    }

    fired
}
