//! Sample and action types shared by every stage of the pipeline

use std::fmt;

/// Normalized landmark position for one frame
///
/// Both axes are nominally in [0, 1] with y growing downwards (image
/// coordinates). Values outside that range are accepted as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Horizontally mirrored position (selfie view)
    pub fn mirrored(self) -> Self {
        Self {
            x: 1.0 - self.x,
            y: self.y,
        }
    }
}

/// Directional action emitted by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    /// Head moved up past the jump threshold
    Jump,
    /// Head moved down past the slide threshold
    Slide,
    /// Head moved left past the side threshold
    Left,
    /// Head moved right past the side threshold
    Right,
}

impl Action {
    /// All actions, in canonical dispatch order
    pub const ALL: [Action; 4] = [Action::Jump, Action::Slide, Action::Left, Action::Right];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Jump => "jump",
            Action::Slide => "slide",
            Action::Left => "left",
            Action::Right => "right",
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Action::Jump => 1 << 0,
            Action::Slide => 1 << 1,
            Action::Left => 1 << 2,
            Action::Right => 1 << 3,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of actions fired by a single classification
///
/// Iterates in `Action::ALL` order regardless of insertion order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ActionSet(u8);

impl ActionSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, action: Action) {
        self.0 |= action.bit();
    }

    pub fn contains(&self, action: Action) -> bool {
        self.0 & action.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = Action> {
        let set = *self;
        Action::ALL.into_iter().filter(move |a| set.contains(*a))
    }
}

impl FromIterator<Action> for ActionSet {
    fn from_iter<I: IntoIterator<Item = Action>>(iter: I) -> Self {
        let mut set = Self::empty();
        for action in iter {
            set.insert(action);
        }
        set
    }
}

impl<const N: usize> From<[Action; N]> for ActionSet {
    fn from(actions: [Action; N]) -> Self {
        actions.into_iter().collect()
    }
}

impl fmt::Display for ActionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, action) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(action.as_str())?;
        }
        f.write_str("}")
    }
}
