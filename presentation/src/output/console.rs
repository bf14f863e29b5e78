//! Console output formatter for finished runs

use crate::output::formatter::{OutputFormatter, SnapshotCell, layout_snapshot};
use antfarm_application::{RunSummary, StopReason};
use antfarm_domain::{Palette, Rgb, Simulation, Tile};
use colored::Colorize;

/// Formats runs for a color terminal
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    fn block(rgb: Rgb) -> String {
        "██".truecolor(rgb.r, rgb.g, rgb.b).to_string()
    }

    fn cell(cell: SnapshotCell) -> String {
        match cell {
            SnapshotCell::Agent => "@@".white().bold().to_string(),
            SnapshotCell::Tile(Tile::Cleared) => "  ".to_string(),
            SnapshotCell::Tile(tile) => tile.color().map(Self::block).unwrap_or_default(),
        }
    }

    /// Header line above the snapshot
    pub fn header(simulation: &Simulation) -> String {
        let agent = simulation.agent();
        format!(
            "{} {}  {} {}  {} {} {}",
            "Steps:".cyan().bold(),
            simulation.steps(),
            "Painted:".cyan().bold(),
            simulation.grid().painted_count(),
            "Ant:".cyan().bold(),
            agent.position,
            agent.heading
        )
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_snapshot(&self, simulation: &Simulation) -> String {
        format!(
            "{}\n{}",
            Self::header(simulation),
            layout_snapshot(simulation, Self::cell)
        )
    }

    fn format_summary(&self, summary: &RunSummary) -> String {
        let reason = match summary.reason {
            StopReason::MaxSteps => "step limit reached".green(),
            StopReason::Stopped => "stopped".yellow(),
            StopReason::Cancelled => "cancelled".yellow(),
        };
        format!(
            "{} {} after {} steps ({} per step)",
            "->".cyan(),
            reason,
            summary.steps.to_string().bold(),
            summary.period
        )
    }
}

/// Palette swatch used by the snapshot legend
pub fn legend() -> String {
    format!(
        "{} red  {} green  {} ant",
        ConsoleFormatter::block(Palette::RED),
        ConsoleFormatter::block(Palette::GREEN),
        "@@".white().bold()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use antfarm_domain::{GridDimensions, SimulationConfig, StepPeriod};

    #[test]
    fn test_snapshot_has_header_and_rows() {
        colored::control::set_override(false);

        let dims = GridDimensions::new(5, 5).unwrap();
        let mut sim = Simulation::new(&SimulationConfig::new(dims)).unwrap();
        sim.step().unwrap();
        sim.step().unwrap();

        let text = ConsoleFormatter.format_snapshot(&sim);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Steps: 2"));
        assert!(lines[0].contains("Painted: 2"));
        assert!(lines[0].contains("Ant: (1, 1) 180°"));
        assert_eq!(lines[1], "@@██");
        assert_eq!(lines[2], "  ██");
    }

    #[test]
    fn test_summary_mentions_reason() {
        colored::control::set_override(false);

        let summary = RunSummary {
            steps: 3,
            period: StepPeriod::new(500),
            reason: StopReason::Stopped,
        };
        let line = ConsoleFormatter.format_summary(&summary);
        assert_eq!(line, "-> stopped after 3 steps (500ms per step)");
    }
}
