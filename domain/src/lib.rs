//! Domain layer for antfarm
//!
//! This crate contains the automaton itself: tiles, the transition rule,
//! the grid, the agent and the step engine. It has no dependencies on
//! timers, terminals or configuration files.
//!
//! # Core Concepts
//!
//! ## Tiles
//!
//! Each cell holds a [`Tile`]: `Cleared`, `Red` or `Green`. The agent
//! repaints the cell it leaves using the [`transition`] rule and turns by the
//! rotation the tile carries.
//!
//! ## Simulation
//!
//! A [`Simulation`] owns the [`Grid`], the [`Agent`] and the step counter.
//! [`Simulation::step`] runs exactly one tick.

pub mod agent;
pub mod core;
pub mod grid;
pub mod simulation;
pub mod tile;

// Re-export commonly used types
pub use agent::{Agent, BoundaryPolicy, Heading, Position, Turn};
pub use core::error::DomainError;
pub use grid::{Grid, GridDimensions};
pub use simulation::{Simulation, SimulationConfig, StepOutcome, StepPeriod};
pub use tile::{
    Tile,
    palette::{Palette, Rgb},
    rule::{Transition, transition},
};
