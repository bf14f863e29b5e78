//! Presentation layer for antfarm
//!
//! This crate contains CLI definitions, the ratatui terminal renderer,
//! keyboard controls, and headless progress and snapshot output.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::{BoundaryArg, Cli};
pub use config::DisplayConfig;
pub use output::console::ConsoleFormatter;
pub use output::formatter::{OutputFormatter, PlainFormatter};
pub use progress::reporter::ProgressReporter;
pub use tui::{TuiApp, TuiError};
