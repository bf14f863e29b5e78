//! Render sink port
//!
//! Defines the interface the scheduler uses to display the simulation after
//! every tick.

use antfarm_domain::{Simulation, StepPeriod};
use thiserror::Error;

/// Errors a renderer can report back to the scheduler
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Render failed: {0}")]
    Other(String),
}

/// Receives the post-step state once per tick
///
/// Implementations live in the presentation layer and draw painted cells,
/// the agent marker, grid lines and the `Step/ms: 1/{period}` overlay.
/// A sink never writes back into the simulation.
pub trait RenderSink: Send {
    /// Draw the current state
    fn render(&mut self, simulation: &Simulation, period: StepPeriod) -> Result<(), RenderError>;

    /// Called once when the scheduler stops
    fn finish(&mut self, _simulation: &Simulation) -> Result<(), RenderError> {
        Ok(())
    }
}

/// No-op sink for runs that nobody watches
pub struct NoRender;

impl RenderSink for NoRender {
    fn render(&mut self, _simulation: &Simulation, _period: StepPeriod) -> Result<(), RenderError> {
        Ok(())
    }
}

impl<R: RenderSink + ?Sized> RenderSink for Box<R> {
    fn render(&mut self, simulation: &Simulation, period: StepPeriod) -> Result<(), RenderError> {
        (**self).render(simulation, period)
    }

    fn finish(&mut self, simulation: &Simulation) -> Result<(), RenderError> {
        (**self).finish(simulation)
    }
}

/// Recording sink for scheduler tests
#[cfg(test)]
pub(crate) mod recording {
    use super::{RenderError, RenderSink};
    use antfarm_domain::{Simulation, StepPeriod};
    use std::sync::{Arc, Mutex};

    /// One observed render call
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct RenderedFrame {
        pub steps: u64,
        pub period: StepPeriod,
        pub elapsed: std::time::Duration,
    }

    /// Sink that records every call
    ///
    /// Clones share the same frame log.
    #[derive(Clone)]
    pub(crate) struct RecordingSink {
        started: tokio::time::Instant,
        frames: Arc<Mutex<Vec<RenderedFrame>>>,
    }

    impl RecordingSink {
        pub fn new() -> Self {
            Self {
                started: tokio::time::Instant::now(),
                frames: Arc::new(Mutex::new(Vec::new())),
            }
        }

        pub fn frames(&self) -> Vec<RenderedFrame> {
            self.frames
                .lock()
                .map(|frames| frames.clone())
                .unwrap_or_default()
        }
    }

    impl Default for RecordingSink {
        fn default() -> Self {
            Self::new()
        }
    }

    impl RenderSink for RecordingSink {
        fn render(&mut self, simulation: &Simulation, period: StepPeriod) -> Result<(), RenderError> {
            let frame = RenderedFrame {
                steps: simulation.steps(),
                period,
                elapsed: self.started.elapsed(),
            };
            self.frames
                .lock()
                .map_err(|e| RenderError::Other(e.to_string()))?
                .push(frame);
            Ok(())
        }
    }
}
