//! Simulation setup parameters

use crate::agent::{BoundaryPolicy, Heading, Position};
use crate::grid::GridDimensions;
use crate::tile::Tile;

/// Everything needed to build a [`Simulation`](super::Simulation)
///
/// Defaults reproduce the classic setup: a 120x100 grid, a red seed at the
/// center, the agent on the seed facing 180 degrees, wrapping edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    pub dimensions: GridDimensions,
    pub seed_tile: Tile,
    /// Seed cell and agent start; `None` means the grid center
    pub start: Option<Position>,
    pub initial_heading: Heading,
    pub boundary: BoundaryPolicy,
}

impl SimulationConfig {
    pub fn new(dimensions: GridDimensions) -> Self {
        Self {
            dimensions,
            ..Self::default()
        }
    }

    pub fn with_seed_tile(mut self, tile: Tile) -> Self {
        self.seed_tile = tile;
        self
    }

    pub fn with_start(mut self, start: Position) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_heading(mut self, heading: Heading) -> Self {
        self.initial_heading = heading;
        self
    }

    pub fn with_boundary(mut self, boundary: BoundaryPolicy) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn start_position(&self) -> Position {
        self.start.unwrap_or_else(|| self.dimensions.center())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            dimensions: GridDimensions::default(),
            seed_tile: Tile::Red,
            start: None,
            initial_heading: Heading::Half,
            boundary: BoundaryPolicy::Wrap,
        }
    }
}
