//! Progress reporting for headless runs

use crate::output::console::{ConsoleFormatter, legend};
use crate::output::formatter::{OutputFormatter, PlainFormatter};
use antfarm_application::{RenderError, RenderSink};
use antfarm_domain::{Simulation, StepPeriod};
use indicatif::{ProgressBar, ProgressStyle};

/// Render sink that shows an indicatif bar instead of the grid
///
/// On finish it prints a snapshot of the painted region.
pub struct ProgressReporter {
    bar: ProgressBar,
    color: bool,
    snapshot: bool,
}

impl ProgressReporter {
    /// `max_steps` gives the bar a length; without it a spinner is used
    pub fn new(max_steps: Option<u64>, color: bool) -> Self {
        let bar = match max_steps {
            Some(total) => {
                let bar = ProgressBar::new(total);
                bar.set_style(Self::bar_style());
                bar
            }
            None => {
                let bar = ProgressBar::new_spinner();
                bar.set_style(Self::spinner_style());
                bar
            }
        };

        Self {
            bar,
            color,
            snapshot: true,
        }
    }

    /// No bar and no snapshot
    pub fn quiet() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            color: false,
            snapshot: false,
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {pos} steps {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Format the end-of-run snapshot
    pub fn snapshot_text(&self, simulation: &Simulation) -> String {
        if self.color {
            format!(
                "{}\n{}",
                ConsoleFormatter.format_snapshot(simulation),
                legend()
            )
        } else {
            PlainFormatter.format_snapshot(simulation)
        }
    }
}

impl RenderSink for ProgressReporter {
    fn render(&mut self, simulation: &Simulation, period: StepPeriod) -> Result<(), RenderError> {
        self.bar.set_position(simulation.steps());
        self.bar
            .set_message(format!("Step/ms: 1/{}", period.as_millis()));
        Ok(())
    }

    fn finish(&mut self, simulation: &Simulation) -> Result<(), RenderError> {
        self.bar.finish_and_clear();
        if self.snapshot {
            println!("{}", self.snapshot_text(simulation));
        }
        Ok(())
    }
}
