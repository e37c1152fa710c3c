//! Behavioural tests for the classifier session.
//!
//! These drive `Session` through its public API only: calibrate, classify,
//! reset and sensitivity adjustments.

use headsurf_core::{
    Action, ActionSet, CoreError, LatchState, Position, Sensitivity, Session, ThresholdBases,
    SENSITIVITY_MAX, SENSITIVITY_MIN,
};

const ANCHOR: Position = Position::new(0.50, 0.50);

fn new_session() -> Session {
    Session::new(
        ThresholdBases::new(0.035, 0.04, 0.07).unwrap(),
        Sensitivity::new(1.0),
    )
}

fn calibrated_session() -> Session {
    let mut session = new_session();
    session.calibrate(Some(ANCHOR)).unwrap();
    session
}

fn departure(action: Action) -> Position {
    match action {
        Action::Jump => Position::new(0.50, 0.40),
        Action::Slide => Position::new(0.50, 0.60),
        Action::Left => Position::new(0.40, 0.50),
        Action::Right => Position::new(0.60, 0.50),
    }
}

/// Drive the session into a state where exactly the actions in `mask` are latched
fn latch_subset(session: &mut Session, mask: u8) {
    for (i, action) in Action::ALL.into_iter().enumerate() {
        if mask & (1 << i) != 0 {
            session.classify(Some(departure(action)));
        }
    }
}

// ── Walkthroughs ──

#[test]
fn jump_fires_once_then_neutral_clears() {
    let mut session = calibrated_session();

    let fired = session.classify(Some(Position::new(0.50, 0.46)));
    assert_eq!(fired, ActionSet::from([Action::Jump]));
    assert!(session.latches().up());

    let fired = session.classify(Some(Position::new(0.50, 0.46)));
    assert!(fired.is_empty());
    assert!(session.latches().up());

    let fired = session.classify(Some(Position::new(0.50, 0.49)));
    assert!(fired.is_empty());
    assert_eq!(*session.latches(), LatchState::default());
}

#[test]
fn slide_and_right_cofire() {
    let mut session = calibrated_session();
    let fired = session.classify(Some(Position::new(0.58, 0.58)));
    assert_eq!(fired, ActionSet::from([Action::Slide, Action::Right]));
    assert!(session.latches().down());
    assert!(session.latches().right());
    assert!(!session.latches().up());
    assert!(!session.latches().left());
}

#[test]
fn calibrate_without_signal() {
    let mut session = new_session();
    assert_eq!(session.calibrate(None), Err(CoreError::NoSignal));
    assert!(!session.is_calibrated());

    for sample in [
        Position::new(0.0, 0.0),
        Position::new(1.0, 1.0),
        Position::new(0.5, 0.5),
        Position::new(0.5, 0.1),
    ] {
        assert!(session.classify(Some(sample)).is_empty());
    }
    assert!(!session.latches().any());
}

#[test]
fn reset_returns_to_pristine_state() {
    for mask in 0u8..16 {
        let mut session = calibrated_session();
        latch_subset(&mut session, mask);

        session.reset();
        assert_eq!(session.anchor(), None);
        assert!(!session.is_calibrated());
        assert_eq!(*session.latches(), LatchState::default());
    }
}

// ── Properties ──

#[test]
fn neutral_samples_clear_latches_and_emit_nothing() {
    let dxs = [-0.069, -0.05, -0.02, 0.0, 0.02, 0.05, 0.069];
    let dys = [-0.034, -0.02, 0.0, 0.02, 0.039];

    for mask in 0u8..16 {
        for dx in dxs {
            for dy in dys {
                let mut session = calibrated_session();
                latch_subset(&mut session, mask);

                let sample = Position::new(ANCHOR.x + dx, ANCHOR.y + dy);
                let fired = session.classify(Some(sample));
                assert!(fired.is_empty(), "mask {mask:04b} sample {sample:?}");
                assert!(!session.latches().any(), "mask {mask:04b} sample {sample:?}");
            }
        }
    }
}

#[test]
fn each_direction_fires_at_most_once_per_excursion() {
    for action in Action::ALL {
        let mut session = calibrated_session();
        let sample = departure(action);

        assert_eq!(session.classify(Some(sample)), ActionSet::from([action]));
        for _ in 0..20 {
            assert!(session.classify(Some(sample)).is_empty());
        }

        // Drift further out along the same direction, still blocked
        let farther = Position::new(
            ANCHOR.x + (sample.x - ANCHOR.x) * 2.0,
            ANCHOR.y + (sample.y - ANCHOR.y) * 2.0,
        );
        assert!(session.classify(Some(farther)).is_empty());

        // Back to neutral re-arms
        session.classify(Some(ANCHOR));
        assert_eq!(session.classify(Some(sample)), ActionSet::from([action]));
    }
}

#[test]
fn partial_return_does_not_rearm() {
    let mut session = calibrated_session();
    assert_eq!(
        session.classify(Some(Position::new(0.40, 0.40))),
        ActionSet::from([Action::Jump, Action::Left])
    );

    // Back inside on y but still left of the box: jump stays latched
    assert!(session.classify(Some(Position::new(0.40, 0.50))).is_empty());
    assert!(session.classify(Some(Position::new(0.40, 0.40))).is_empty());
    assert!(session.latches().up());
    assert!(session.latches().left());
}

#[test]
fn neutral_return_clears_every_latch_together() {
    let mut session = calibrated_session();
    session.classify(Some(departure(Action::Jump)));
    assert!(session.latches().up());
    assert!(!session.latches().left());

    session.classify(Some(ANCHOR));
    assert_eq!(*session.latches(), LatchState::default());

    // Fire two directions in one excursion, then a single neutral frame
    session.classify(Some(Position::new(0.60, 0.60)));
    assert!(session.latches().down() && session.latches().right());
    session.classify(Some(Position::new(0.51, 0.51)));
    assert!(!session.latches().any());
}

#[test]
fn departures_on_both_axes_fire_together() {
    let cases = [
        (Position::new(0.40, 0.40), [Action::Jump, Action::Left]),
        (Position::new(0.60, 0.40), [Action::Jump, Action::Right]),
        (Position::new(0.40, 0.60), [Action::Slide, Action::Left]),
        (Position::new(0.60, 0.60), [Action::Slide, Action::Right]),
    ];
    for (sample, expected) in cases {
        let mut session = calibrated_session();
        assert_eq!(session.classify(Some(sample)), ActionSet::from(expected));
    }
}

#[test]
fn second_axis_can_fire_during_first_excursion() {
    let mut session = calibrated_session();
    assert_eq!(
        session.classify(Some(Position::new(0.50, 0.40))),
        ActionSet::from([Action::Jump])
    );
    // Still up, now also right: only the new direction fires
    assert_eq!(
        session.classify(Some(Position::new(0.60, 0.40))),
        ActionSet::from([Action::Right])
    );
}

#[test]
fn sensitivity_stays_clamped() {
    let mut session = calibrated_session();
    for _ in 0..100 {
        let value = session.adjust_sensitivity(0.1);
        assert!(value <= SENSITIVITY_MAX);
    }
    assert_eq!(session.sensitivity().value(), SENSITIVITY_MAX);

    for _ in 0..100 {
        let value = session.adjust_sensitivity(-0.1);
        assert!(value >= SENSITIVITY_MIN);
    }
    assert_eq!(session.sensitivity().value(), SENSITIVITY_MIN);
}

#[test]
fn neutral_zone_tracks_sensitivity() {
    let mut session = calibrated_session();
    let before = session.neutral_zone().unwrap();
    session.adjust_sensitivity(0.5);
    let after = session.neutral_zone().unwrap();

    assert_eq!(before.anchor, after.anchor);
    assert!(after.right() > before.right());
    assert!(after.top() < before.top());
    assert!(after.contains(ANCHOR));
}

#[test]
fn neutral_zone_agrees_with_classifier_on_edges() {
    let mut session = new_session();
    session.adjust_sensitivity(0.3);
    let anchor = Position::new(0.37, 0.61);
    session.calibrate(Some(anchor)).unwrap();
    let zone = session.neutral_zone().unwrap();
    let t = session.thresholds();

    let far = [
        Position::new(anchor.x, 0.0),
        Position::new(anchor.x, 1.0),
        Position::new(0.0, anchor.y),
        Position::new(1.0, anchor.y),
    ];
    let xs = [zone.left(), zone.right(), anchor.x + t.side, anchor.x];
    let ys = [zone.top(), zone.bottom(), anchor.y - t.jump, anchor.y];

    for &x in &xs {
        for &y in &ys {
            for nudge in [-1e-12, 0.0, 1e-12] {
                for p in far {
                    session.classify(Some(p));
                }
                assert!(session.latches().any());

                let sample = Position::new(x + nudge, y - nudge);
                session.classify(Some(sample));
                assert_eq!(
                    zone.contains(sample),
                    !session.latches().any(),
                    "sample {sample:?}"
                );
            }
        }
    }
}
