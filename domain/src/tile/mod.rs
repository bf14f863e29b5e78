//! Cell tags and the transition rule that cycles them.
//!
//! A cell is in exactly one of three states. The first visit turns a
//! [`Tile::Cleared`] cell red; afterwards the cell alternates between
//! [`Tile::Red`] and [`Tile::Green`] on every visit.

pub mod palette;
pub mod rule;

use crate::agent::heading::Turn;
use palette::{Palette, Rgb};
use serde::{Deserialize, Serialize};

/// State of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tile {
    /// Never visited
    #[default]
    Cleared,
    Red,
    Green,
}

impl Tile {
    pub const ALL: [Tile; 3] = [Tile::Cleared, Tile::Red, Tile::Green];

    /// Turn applied to the agent while it stands on a cell of this tag
    pub fn turn(&self) -> Turn {
        match self {
            Tile::Cleared => Turn::Left,
            Tile::Red => Turn::Right,
            Tile::Green => Turn::Left,
        }
    }

    /// Rotation delta in degrees (`+90` or `-90`)
    pub fn rotation_delta(&self) -> i32 {
        self.turn().degrees()
    }

    /// Display color, `None` for cleared cells
    pub fn color(&self) -> Option<Rgb> {
        match self {
            Tile::Cleared => None,
            Tile::Red => Some(Palette::RED),
            Tile::Green => Some(Palette::GREEN),
        }
    }

    pub fn is_cleared(&self) -> bool {
        matches!(self, Tile::Cleared)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tile::Cleared => "cleared",
            Tile::Red => "red",
            Tile::Green => "green",
        }
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Tile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cleared" | "clear" => Ok(Tile::Cleared),
            "red" => Ok(Tile::Red),
            "green" => Ok(Tile::Green),
            _ => Err(format!(
                "Unknown tile: {}. Valid: cleared, red, green",
                s
            )),
        }
    }
}
