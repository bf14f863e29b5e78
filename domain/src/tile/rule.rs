//! Transition rule for the ant automaton
//!
//! The rule is total: every tag maps to exactly one paint and one turn.
//!
//! | current | paint | turn |
//! |---|---|---|
//! | cleared | red | +90 |
//! | red | green | -90 |
//! | green | red | +90 |
//!
//! The turn comes from the tile being left, independent of the paint chosen.

use super::Tile;
use crate::agent::heading::Turn;

/// Result of applying the rule to the tile under the agent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Tag stamped into the cell the agent is leaving
    pub paint: Tile,
    /// Turn applied to the agent's heading
    pub turn: Turn,
}

impl Transition {
    /// Rotation delta in degrees
    pub fn rotation_delta(&self) -> i32 {
        self.turn.degrees()
    }
}

/// Apply the rule to the tag currently under the agent
///
/// # Example
///
/// ```
/// use antfarm_domain::{Tile, transition};
///
/// let t = transition(Tile::Red);
/// assert_eq!(t.paint, Tile::Green);
/// assert_eq!(t.rotation_delta(), -90);
/// ```
pub fn transition(current: Tile) -> Transition {
    let paint = match current {
        Tile::Cleared => Tile::Red,
        Tile::Red => Tile::Green,
        Tile::Green => Tile::Red,
    };

    Transition {
        paint,
        turn: current.turn(),
    }
}
