//! TUI (Text User Interface) module for antfarm
//!
//! Draws the grid, the agent and the info panel with ratatui, and lets the
//! user change the step period while the simulation runs.

mod app;
mod controls;
mod mode;
mod renderer;
mod state;
mod widgets;

pub use app::{TuiApp, TuiError};
pub use mode::{Action, KeyHandler, Mode};
pub use renderer::TuiRenderer;
pub use state::{ControlRequest, TuiState};
pub use widgets::{grid::Viewport, info::InfoWidget};
