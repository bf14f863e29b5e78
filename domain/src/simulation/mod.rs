//! Simulation context: grid, agent and counter, plus the step engine that
//! advances them.

pub mod config;
pub mod engine;
pub mod period;

pub use config::SimulationConfig;
pub use engine::{Simulation, StepOutcome};
pub use period::StepPeriod;
