//! Application layer for antfarm
//!
//! This crate contains the scheduler use case, the render sink port, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ScheduleConfig;
pub use ports::render_sink::{NoRender, RenderError, RenderSink};
pub use use_cases::run_simulation::{
    RunSimulationError, RunSummary, Scheduler, SchedulerClosed, SchedulerCommand,
    SchedulerHandle, StopReason,
};
