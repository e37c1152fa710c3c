//! Neutral-box geometry for overlays
//!
//! Only the geometry lives here; drawing is up to the caller.

use crate::calibration::Thresholds;
use crate::types::Position;

/// Neutral box around the anchor, in normalized coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeutralZone {
    pub anchor: Position,
    pub thresholds: Thresholds,
}

/// Axis-aligned rectangle in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl NeutralZone {
    pub fn new(anchor: Position, thresholds: Thresholds) -> Self {
        Self { anchor, thresholds }
    }

    /// Left edge (x beyond this fires left)
    pub fn left(&self) -> f64 {
        self.anchor.x - self.thresholds.side
    }

    /// Right edge (x beyond this fires right)
    pub fn right(&self) -> f64 {
        self.anchor.x + self.thresholds.side
    }

    /// Top edge (y above this fires jump)
    pub fn top(&self) -> f64 {
        self.anchor.y - self.thresholds.jump
    }

    /// Bottom edge (y below this fires slide)
    pub fn bottom(&self) -> f64 {
        self.anchor.y + self.thresholds.slide
    }

    /// Strict containment, evaluated exactly like the classifier's neutral test
    pub fn contains(&self, p: Position) -> bool {
        let dx = p.x - self.anchor.x;
        let dy = p.y - self.anchor.y;
        dx.abs() < self.thresholds.side && dy > -self.thresholds.jump && dy < self.thresholds.slide
    }

    /// Project the box onto a `width` × `height` frame (truncating)
    pub fn to_pixels(&self, width: u32, height: u32) -> PixelRect {
        let w = f64::from(width);
        let h = f64::from(height);
        PixelRect {
            left: (self.left() * w) as i32,
            top: (self.top() * h) as i32,
            right: (self.right() * w) as i32,
            bottom: (self.bottom() * h) as i32,
        }
    }

    /// Anchor projected onto the frame
    pub fn anchor_pixels(&self, width: u32, height: u32) -> (i32, i32) {
        (
            (self.anchor.x * f64::from(width)) as i32,
            (self.anchor.y * f64::from(height)) as i32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone() -> NeutralZone {
        NeutralZone::new(
            Position::new(0.5, 0.5),
            Thresholds {
                jump: 0.125,
                slide: 0.25,
                side: 0.25,
            },
        )
    }

    #[test]
    fn test_edges() {
        let z = zone();
        assert_eq!(z.left(), 0.25);
        assert_eq!(z.right(), 0.75);
        assert_eq!(z.top(), 0.375);
        assert_eq!(z.bottom(), 0.75);
    }

    #[test]
    fn test_contains_is_strict() {
        let z = zone();
        assert!(z.contains(Position::new(0.5, 0.5)));
        assert!(!z.contains(Position::new(0.75, 0.5)));
        assert!(!z.contains(Position::new(0.5, 0.375)));
    }

    #[test]
    fn test_to_pixels() {
        let rect = zone().to_pixels(640, 480);
        assert_eq!(
            rect,
            PixelRect {
                left: 160,
                top: 180,
                right: 480,
                bottom: 360,
            }
        );
        assert_eq!(zone().anchor_pixels(640, 480), (320, 240));
    }
}
