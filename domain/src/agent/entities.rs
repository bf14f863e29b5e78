//! Agent domain entities

use super::heading::Heading;
use super::position::Position;
use crate::tile::Tile;
use serde::{Deserialize, Serialize};

/// The mobile "ant"
///
/// Its heading and position evolve each step from the tile it stands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub position: Position,
    pub heading: Heading,
    /// Tag to stamp into the current cell, computed at the start of each step
    pub pending_paint: Option<Tile>,
}

impl Agent {
    pub fn new(position: Position, heading: Heading) -> Self {
        Self {
            position,
            heading,
            pending_paint: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_agent_has_nothing_pending() {
        let agent = Agent::new(Position::new(60, 50), Heading::Half);
        assert_eq!(agent.position, Position::new(60, 50));
        assert_eq!(agent.heading, Heading::Half);
        assert_eq!(agent.pending_paint, None);
    }
}
