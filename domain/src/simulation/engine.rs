//! Step engine
//!
//! One step, in order:
//!
//! 1. read the tile under the agent
//! 2. apply the transition rule; the paint becomes the agent's pending write
//! 3. rotate the heading by the rule's turn
//! 4. stamp the paint into the cell being left
//! 5. advance one cell along the new heading
//! 6. bump the step counter
//!
//! The destination is resolved against the [`BoundaryPolicy`] before anything
//! is written, so a rejected move leaves the simulation untouched.

use super::config::SimulationConfig;
use crate::agent::{Agent, BoundaryPolicy, Heading, Position};
use crate::core::error::DomainError;
use crate::grid::Grid;
use crate::tile::Tile;
use crate::tile::rule::transition;

/// What a single step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    /// Counter value after the step (first step is 1)
    pub step: u64,
    /// Cell the agent left
    pub from: Position,
    /// Tag the left cell held before the step
    pub previous: Tile,
    /// Tag stamped into the left cell
    pub painted: Tile,
    /// Heading after rotation
    pub heading: Heading,
    /// Cell the agent moved to
    pub to: Position,
}

/// Grid, agent and step counter for one run
#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    agent: Agent,
    steps: u64,
    boundary: BoundaryPolicy,
}

impl Simulation {
    /// Build a cleared grid with one seeded cell and the agent standing on it
    pub fn new(config: &SimulationConfig) -> Result<Self, DomainError> {
        let start = config.start_position();
        let grid = Grid::seeded(config.dimensions, start, config.seed_tile)?;

        Ok(Self {
            grid,
            agent: Agent::new(start, config.initial_heading),
            steps: 0,
            boundary: config.boundary,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn boundary(&self) -> BoundaryPolicy {
        self.boundary
    }

    /// Advance the simulation by one tick
    pub fn step(&mut self) -> Result<StepOutcome, DomainError> {
        let from = self.agent.position;
        let dims = self.grid.dimensions();

        let current = self.grid.get(from).ok_or(DomainError::OutOfBounds {
            x: from.x as i64,
            y: from.y as i64,
            width: dims.width,
            height: dims.height,
        })?;

        let rule = transition(current);
        let heading = self.agent.heading.rotate(rule.turn);
        let to = self.boundary.advance(from, heading.offset(), dims)?;

        self.agent.pending_paint = Some(rule.paint);
        self.agent.heading = heading;
        self.grid.set(from, rule.paint)?;
        self.agent.position = to;
        self.steps += 1;

        Ok(StepOutcome {
            step: self.steps,
            from,
            previous: current,
            painted: rule.paint,
            heading,
            to,
        })
    }
}
