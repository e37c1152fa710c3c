//! Per-direction fire latches
//!
//! A latch is set when its direction fires and stays set until the sample
//! returns to the full neutral box, at which point all four clear together.

use crate::types::Action;

/// Latch flags for the four directions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LatchState {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
}

impl LatchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `action` has already fired during the current excursion
    pub fn is_latched(&self, action: Action) -> bool {
        match action {
            Action::Jump => self.up,
            Action::Slide => self.down,
            Action::Left => self.left,
            Action::Right => self.right,
        }
    }

    pub(crate) fn latch(&mut self, action: Action) {
        match action {
            Action::Jump => self.up = true,
            Action::Slide => self.down = true,
            Action::Left => self.left = true,
            Action::Right => self.right = true,
        }
    }

    /// Group reset; there is deliberately no way to clear a single latch.
    pub(crate) fn clear_all(&mut self) {
        *self = Self::default();
    }

    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }

    pub fn up(&self) -> bool {
        self.up
    }

    pub fn down(&self) -> bool {
        self.down
    }

    pub fn left(&self) -> bool {
        self.left
    }

    pub fn right(&self) -> bool {
        self.right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_and_clear() {
        let mut latches = LatchState::new();
        assert!(!latches.any());

        latches.latch(Action::Jump);
        latches.latch(Action::Right);
        assert!(latches.up());
        assert!(latches.right());
        assert!(!latches.is_latched(Action::Slide));
        assert!(!latches.is_latched(Action::Left));

        latches.clear_all();
        assert_eq!(latches, LatchState::default());
    }
}
