//! Discrete headings and turns
//!
//! Headings are kept in degrees. `0` and `360` are distinct values that
//! move the agent the same way; rotation never folds one into the other.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Quarter turn applied on each step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    /// +90 degrees
    Left,
    /// -90 degrees
    Right,
}

impl Turn {
    pub fn degrees(&self) -> i32 {
        match self {
            Turn::Left => 90,
            Turn::Right => -90,
        }
    }
}

/// Direction of travel
///
/// With y growing downward, 90 degrees points up the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Heading {
    /// 0 degrees, +x
    Zero,
    /// 90 degrees, -y
    Quarter,
    /// 180 degrees, -x
    #[default]
    Half,
    /// 270 degrees, +y
    ThreeQuarters,
    /// 360 degrees, +x
    Full,
}

impl Heading {
    pub const ALL: [Heading; 5] = [
        Heading::Zero,
        Heading::Quarter,
        Heading::Half,
        Heading::ThreeQuarters,
        Heading::Full,
    ];

    pub fn degrees(&self) -> i32 {
        match self {
            Heading::Zero => 0,
            Heading::Quarter => 90,
            Heading::Half => 180,
            Heading::ThreeQuarters => 270,
            Heading::Full => 360,
        }
    }

    pub fn from_degrees(degrees: i32) -> Option<Self> {
        match degrees {
            0 => Some(Heading::Zero),
            90 => Some(Heading::Quarter),
            180 => Some(Heading::Half),
            270 => Some(Heading::ThreeQuarters),
            360 => Some(Heading::Full),
            _ => None,
        }
    }

    /// Apply a turn and normalize the result.
    ///
    /// Below 0 becomes 270, above 360 becomes 90; anything else is kept,
    /// so both 0 and 360 remain reachable.
    pub fn rotate(self, turn: Turn) -> Self {
        let turned = self.degrees() + turn.degrees();

        if turned < 0 {
            Heading::ThreeQuarters
        } else if turned > 360 {
            Heading::Quarter
        } else {
            // Multiples of 90 inside [0, 360] always map.
            Heading::from_degrees(turned).unwrap_or(self)
        }
    }

    /// Unit step `(dx, dy)` taken when moving along this heading
    pub fn offset(&self) -> (i64, i64) {
        match self {
            Heading::Zero => (1, 0),
            Heading::Quarter => (0, -1),
            Heading::Half => (-1, 0),
            Heading::ThreeQuarters => (0, 1),
            Heading::Full => (1, 0),
        }
    }
}

impl TryFrom<i32> for Heading {
    type Error = DomainError;

    fn try_from(degrees: i32) -> Result<Self, Self::Error> {
        Heading::from_degrees(degrees).ok_or(DomainError::InvalidHeading(degrees))
    }
}

impl From<Heading> for i32 {
    fn from(heading: Heading) -> Self {
        heading.degrees()
    }
}

impl std::fmt::Display for Heading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}
