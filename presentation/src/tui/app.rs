//! TUI application: scheduler and keyboard controls side by side
//!
//! Architecture:
//! ```text
//! TuiApp::run                          controls task (tokio::spawn)
//!   └─ Scheduler::run                    ├─ crossterm EventStream
//!        ├─ interval tick                └─ KeyHandler → TuiState
//!        │    └─ TuiRenderer::render          └─ SchedulerHandle ──┐
//!        └─ command channel  <──────────────────────────────────────┘
//! ```

use super::controls::TuiControls;
use super::renderer::TuiRenderer;
use super::state::TuiState;
use crate::config::DisplayConfig;
use antfarm_application::{RunSimulationError, RunSummary, ScheduleConfig, Scheduler};
use antfarm_domain::Simulation;
use std::io;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::warn;

#[derive(Error, Debug)]
pub enum TuiError {
    #[error("Terminal setup failed: {0}")]
    Terminal(#[from] io::Error),

    #[error(transparent)]
    Run(#[from] RunSimulationError),
}

/// Main TUI application
pub struct TuiApp {
    simulation: Simulation,
    schedule: ScheduleConfig,
    display: DisplayConfig,
    cancel: CancellationToken,
}

impl TuiApp {
    pub fn new(simulation: Simulation, schedule: ScheduleConfig, display: DisplayConfig) -> Self {
        Self {
            simulation,
            schedule,
            display,
            cancel: CancellationToken::new(),
        }
    }

    /// Use an externally owned cancellation token
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Run until the user quits, `max_steps` is reached, or the token fires
    pub async fn run(self) -> Result<RunSummary, TuiError> {
        let state = Arc::new(Mutex::new(TuiState::new(self.schedule.period)));
        let renderer = TuiRenderer::new(Arc::clone(&state), self.display)?;

        let scheduler = Scheduler::new(self.simulation, renderer, self.schedule)
            .with_cancellation(self.cancel.child_token());
        let handle = scheduler.handle();
        let controls_token = handle.cancellation_token();

        let controls = tokio::spawn(TuiControls::new(handle, state).run());

        let result = scheduler.run().await;

        // Scheduler is gone; release the controls task
        controls_token.cancel();
        if let Err(e) = controls.await {
            warn!("Controls task failed: {}", e);
        }

        Ok(result?)
    }
}
