use serde::{Deserialize, Serialize};

/// Fraction of a section that must be on screen to count as intersecting.
pub const THRESHOLD: f64 = 0.2;
pub const ROOT_MARGIN: &str = "0px";

/// Side a section slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn enter_class(self) -> &'static str {
        match self {
            Direction::Left => "animate-slide-left",
            Direction::Right => "animate-slide-right",
        }
    }

    pub fn exit_class(self) -> &'static str {
        match self {
            Direction::Left => "animate-slide-left-reverse",
            Direction::Right => "animate-slide-right-reverse",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Revealed,
}

/// Reveal state of one watched section. The direction is fixed at
/// construction; only the visibility follows the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealState {
    direction: Direction,
    visibility: Visibility,
}

impl RevealState {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            visibility: Visibility::Hidden,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_revealed(&self) -> bool {
        self.visibility == Visibility::Revealed
    }

    /// Applies an intersection report. Returns true if the visibility changed.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        let next = if is_intersecting {
            Visibility::Revealed
        } else {
            Visibility::Hidden
        };
        let changed = next != self.visibility;
        self.visibility = next;
        changed
    }

    pub fn animation_class(&self) -> &'static str {
        match self.visibility {
            Visibility::Revealed => self.direction.enter_class(),
            Visibility::Hidden => self.direction.exit_class(),
        }
    }
}
