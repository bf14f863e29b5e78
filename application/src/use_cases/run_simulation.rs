//! Run Simulation use case
//!
//! Drives the step engine on a repeating timer. Each tick runs one
//! [`Simulation::step`] followed by one [`RenderSink::render`] with the
//! post-step state.
//!
//! ```text
//! Scheduler::run (select! loop)
//!   ├─ cancel.cancelled()      -> stop
//!   ├─ commands.recv()         <- SchedulerHandle (set_period / stop)
//!   └─ ticker.tick()           -> step + render
//! ```
//!
//! Ticks and commands are handled in the same task, so a tick is never
//! interrupted and a period change always lands after the in-flight tick.
//! Changing the period drops the old timer and starts a fresh one whose
//! first tick is one new period away.

use crate::config::ScheduleConfig;
use crate::ports::render_sink::{RenderError, RenderSink};
use antfarm_domain::{DomainError, Simulation, StepOutcome, StepPeriod};
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace, warn};

/// Errors that end a run early
#[derive(Error, Debug)]
pub enum RunSimulationError {
    #[error("Simulation error: {0}")]
    Domain(#[from] DomainError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

/// A control message was sent after the scheduler stopped
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Scheduler is no longer running")]
pub struct SchedulerClosed;

/// Messages accepted by a running scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerCommand {
    /// Replace the repeating timer with one of this period
    SetPeriod(StepPeriod),
    /// Stop after the in-flight tick
    Stop,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The configured step limit was reached
    MaxSteps,
    /// [`SchedulerHandle::stop`] was called
    Stopped,
    /// The cancellation token fired
    Cancelled,
}

impl StopReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            StopReason::MaxSteps => "max_steps",
            StopReason::Stopped => "stopped",
            StopReason::Cancelled => "cancelled",
        }
    }
}

/// Result of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub steps: u64,
    pub period: StepPeriod,
    pub reason: StopReason,
}

/// Cloneable control surface for a scheduler
#[derive(Debug, Clone)]
pub struct SchedulerHandle {
    tx: mpsc::UnboundedSender<SchedulerCommand>,
    cancel: CancellationToken,
}

impl SchedulerHandle {
    /// Request a new period; 0 is coerced to 1.
    ///
    /// Returns the period that will actually be used.
    pub fn set_period(&self, millis: u64) -> Result<StepPeriod, SchedulerClosed> {
        let period = StepPeriod::new(millis);
        self.tx
            .send(SchedulerCommand::SetPeriod(period))
            .map_err(|_| SchedulerClosed)?;
        Ok(period)
    }

    pub fn stop(&self) -> Result<(), SchedulerClosed> {
        self.tx
            .send(SchedulerCommand::Stop)
            .map_err(|_| SchedulerClosed)
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }
}

/// Owns the simulation and its renderer, and runs them on a timer
pub struct Scheduler<R: RenderSink> {
    simulation: Simulation,
    sink: R,
    period: StepPeriod,
    max_steps: Option<u64>,
    commands_tx: mpsc::UnboundedSender<SchedulerCommand>,
    commands_rx: mpsc::UnboundedReceiver<SchedulerCommand>,
    cancel: CancellationToken,
}

impl<R: RenderSink> Scheduler<R> {
    pub fn new(simulation: Simulation, sink: R, config: ScheduleConfig) -> Self {
        let (commands_tx, commands_rx) = mpsc::unbounded_channel();

        Self {
            simulation,
            sink,
            period: config.period,
            max_steps: config.max_steps,
            commands_tx,
            commands_rx,
            cancel: CancellationToken::new(),
        }
    }

    /// Use an externally owned cancellation token (e.g. wired to Ctrl+C)
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            tx: self.commands_tx.clone(),
            cancel: self.cancel.clone(),
        }
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    pub fn period(&self) -> StepPeriod {
        self.period
    }

    /// Run one step and render the result
    pub fn tick(&mut self) -> Result<StepOutcome, RunSimulationError> {
        let outcome = self.simulation.step()?;
        trace!(
            step = outcome.step,
            from = %outcome.from,
            to = %outcome.to,
            painted = %outcome.painted,
            heading = %outcome.heading,
            "tick"
        );
        self.sink.render(&self.simulation, self.period)?;
        Ok(outcome)
    }

    fn ticker(period: StepPeriod) -> Interval {
        let every = period.as_duration();
        let mut ticker = interval_at(Instant::now() + every, every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker
    }

    fn limit_reached(&self) -> bool {
        self.max_steps
            .is_some_and(|max| self.simulation.steps() >= max)
    }

    /// Run until the step limit, a stop command or cancellation
    pub async fn run(mut self) -> Result<RunSummary, RunSimulationError> {
        info!(
            "Starting simulation on {} grid, period {}",
            self.simulation.grid().dimensions(),
            self.period
        );

        let mut ticker = Self::ticker(self.period);

        let outcome: Result<StopReason, RunSimulationError> = loop {
            if self.limit_reached() {
                break Ok(StopReason::MaxSteps);
            }

            tokio::select! {
                biased;

                _ = self.cancel.cancelled() => break Ok(StopReason::Cancelled),

                Some(command) = self.commands_rx.recv() => match command {
                    SchedulerCommand::SetPeriod(period) => {
                        info!("Step period changed: {} -> {}", self.period, period);
                        self.period = period;
                        ticker = Self::ticker(period);
                    }
                    SchedulerCommand::Stop => break Ok(StopReason::Stopped),
                },

                _ = ticker.tick() => {
                    if let Err(e) = self.tick() {
                        break Err(e);
                    }
                }
            }
        };

        let reason = match outcome {
            Ok(reason) => reason,
            Err(e) => {
                warn!("Simulation failed after {} steps: {}", self.simulation.steps(), e);
                // The sink still gets to show the state at the failure
                if let Err(finish_err) = self.sink.finish(&self.simulation) {
                    warn!("Render sink failed to finish: {}", finish_err);
                }
                return Err(e);
            }
        };

        let summary = RunSummary {
            steps: self.simulation.steps(),
            period: self.period,
            reason,
        };
        info!(
            "Simulation stopped ({}) after {} steps",
            reason.as_str(),
            summary.steps
        );

        self.sink.finish(&self.simulation)?;
        debug!("Render sink finished");

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::render_sink::NoRender;
    use crate::ports::render_sink::recording::RecordingSink;
    use antfarm_domain::{
        BoundaryPolicy, GridDimensions, Heading, Position, SimulationConfig, Tile,
    };
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn classic() -> Simulation {
        Simulation::new(&SimulationConfig::default()).unwrap()
    }

    struct FailingSink;

    impl RenderSink for FailingSink {
        fn render(&mut self, _: &Simulation, _: StepPeriod) -> Result<(), RenderError> {
            Err(RenderError::Other("screen gone".into()))
        }
    }

    struct FinishCounter(Arc<AtomicUsize>);

    impl RenderSink for FinishCounter {
        fn render(&mut self, _: &Simulation, _: StepPeriod) -> Result<(), RenderError> {
            Ok(())
        }

        fn finish(&mut self, _: &Simulation) -> Result<(), RenderError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn test_tick_renders_post_step_state() {
        let sink = RecordingSink::new();
        let mut scheduler = Scheduler::new(
            classic(),
            sink.clone(),
            ScheduleConfig::with_period_millis(500),
        );

        let outcome = scheduler.tick().unwrap();
        assert_eq!(outcome.step, 1);
        assert_eq!(scheduler.simulation().agent().position, Position::new(60, 49));

        let frames = sink.frames();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].steps, 1);
        assert_eq!(frames[0].period.as_millis(), 500);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_fire_once_per_period() {
        let sink = RecordingSink::new();
        let scheduler = Scheduler::new(
            classic(),
            sink.clone(),
            ScheduleConfig::with_period_millis(500).with_max_steps(3),
        );

        let summary = scheduler.run().await.unwrap();
        assert_eq!(summary.reason, StopReason::MaxSteps);
        assert_eq!(summary.steps, 3);

        let frames = sink.frames();
        let steps: Vec<u64> = frames.iter().map(|f| f.steps).collect();
        let elapsed: Vec<u64> = frames.iter().map(|f| f.elapsed.as_millis() as u64).collect();
        assert_eq!(steps, vec![1, 2, 3]);
        assert_eq!(elapsed, vec![500, 1000, 1500]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_period_change_to_zero_runs_at_one_ms_without_gaps() {
        let sink = RecordingSink::new();
        let scheduler = Scheduler::new(
            classic(),
            sink.clone(),
            ScheduleConfig::with_period_millis(500).with_max_steps(6),
        );
        let handle = scheduler.handle();
        let run = tokio::spawn(scheduler.run());

        tokio::time::sleep(Duration::from_millis(1250)).await;
        let effective = handle.set_period(0).unwrap();
        assert_eq!(effective.as_millis(), 1);

        let summary = run.await.unwrap().unwrap();
        assert_eq!(summary.steps, 6);
        assert_eq!(summary.period.as_millis(), 1);

        let frames = sink.frames();
        let steps: Vec<u64> = frames.iter().map(|f| f.steps).collect();
        let periods: Vec<u64> = frames.iter().map(|f| f.period.as_millis()).collect();
        assert_eq!(steps, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(periods, vec![500, 500, 1, 1, 1, 1]);

        assert_eq!(frames[1].elapsed, Duration::from_millis(1000));
        for frame in &frames[2..] {
            assert!(frame.elapsed > Duration::from_millis(1250));
            assert!(frame.elapsed < Duration::from_millis(1300));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_command_ends_run() {
        let scheduler = Scheduler::new(
            classic(),
            NoRender,
            ScheduleConfig::with_period_millis(10),
        );
        let handle = scheduler.handle();
        let run = tokio::spawn(scheduler.run());

        tokio::time::sleep(Duration::from_millis(35)).await;
        handle.stop().unwrap();

        let summary = run.await.unwrap().unwrap();
        assert_eq!(summary.reason, StopReason::Stopped);
        assert_eq!(summary.steps, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancellation_ends_run() {
        let token = CancellationToken::new();
        let scheduler = Scheduler::new(
            classic(),
            NoRender,
            ScheduleConfig::with_period_millis(10),
        )
        .with_cancellation(token.clone());
        let run = tokio::spawn(scheduler.run());

        tokio::time::sleep(Duration::from_millis(25)).await;
        token.cancel();

        let summary = run.await.unwrap().unwrap();
        assert_eq!(summary.reason, StopReason::Cancelled);
        assert_eq!(summary.steps, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_handle_reports_closed_scheduler() {
        let scheduler = Scheduler::new(
            classic(),
            NoRender,
            ScheduleConfig::with_period_millis(1).with_max_steps(1),
        );
        let handle = scheduler.handle();
        scheduler.run().await.unwrap();

        assert_eq!(handle.set_period(5), Err(SchedulerClosed));
        assert_eq!(handle.stop(), Err(SchedulerClosed));
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_step_limit_never_ticks() {
        let sink = RecordingSink::new();
        let scheduler = Scheduler::new(
            classic(),
            sink.clone(),
            ScheduleConfig::with_period_millis(1).with_max_steps(0),
        );

        let summary = scheduler.run().await.unwrap();
        assert_eq!(summary.steps, 0);
        assert!(sink.frames().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_render_error_aborts_run() {
        let scheduler = Scheduler::new(
            classic(),
            FailingSink,
            ScheduleConfig::with_period_millis(1).with_max_steps(5),
        );

        let err = scheduler.run().await.unwrap_err();
        assert!(matches!(err, RunSimulationError::Render(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_out_of_bounds_aborts_run_under_fail_policy() {
        let config = SimulationConfig::new(GridDimensions::new(1, 1).unwrap())
            .with_start(Position::new(0, 0))
            .with_seed_tile(Tile::Red)
            .with_heading(Heading::Half)
            .with_boundary(BoundaryPolicy::Fail);
        let scheduler = Scheduler::new(
            Simulation::new(&config).unwrap(),
            NoRender,
            ScheduleConfig::with_period_millis(1).with_max_steps(5),
        );

        let err = scheduler.run().await.unwrap_err();
        match err {
            RunSimulationError::Domain(e) => assert!(e.is_out_of_bounds()),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_finish_called_once_when_agent_leaves_grid() {
        // Red seed at the left edge facing 270: turns right to 180 and steps off
        let config = SimulationConfig::new(GridDimensions::new(3, 3).unwrap())
            .with_start(Position::new(0, 1))
            .with_seed_tile(Tile::Red)
            .with_heading(Heading::ThreeQuarters)
            .with_boundary(BoundaryPolicy::Fail);
        let finished = Arc::new(AtomicUsize::new(0));
        let scheduler = Scheduler::new(
            Simulation::new(&config).unwrap(),
            FinishCounter(finished.clone()),
            ScheduleConfig::with_period_millis(1).with_max_steps(5),
        );

        let err = scheduler.run().await.unwrap_err();
        assert!(matches!(err, RunSimulationError::Domain(ref e) if e.is_out_of_bounds()));
        assert_eq!(finished.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_finish_called_after_render_error() {
        struct FailingCounter(Arc<AtomicUsize>);

        impl RenderSink for FailingCounter {
            fn render(&mut self, _: &Simulation, _: StepPeriod) -> Result<(), RenderError> {
                Err(RenderError::Other("screen gone".into()))
            }

            fn finish(&mut self, _: &Simulation) -> Result<(), RenderError> {
                self.0.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }
        }

        let finished = Arc::new(AtomicUsize::new(0));
        let scheduler = Scheduler::new(
            classic(),
            FailingCounter(finished.clone()),
            ScheduleConfig::with_period_millis(1),
        );

        assert!(scheduler.run().await.is_err());
        assert_eq!(finished.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_finish_called_once_on_normal_stop() {
        let finished = Arc::new(AtomicUsize::new(0));
        let scheduler = Scheduler::new(
            classic(),
            FinishCounter(finished.clone()),
            ScheduleConfig::with_period_millis(1).with_max_steps(4),
        );

        scheduler.run().await.unwrap();
        assert_eq!(finished.load(Ordering::SeqCst), 1);
    }
}
