//! Output formatter trait and shared snapshot layout

use antfarm_application::RunSummary;
use antfarm_domain::{Position, Simulation, Tile};

/// Trait for formatting finished runs
pub trait OutputFormatter {
    /// Text picture of the painted region
    fn format_snapshot(&self, simulation: &Simulation) -> String;

    /// One-line run summary
    fn format_summary(&self, summary: &RunSummary) -> String;
}

/// What occupies a snapshot cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotCell {
    Agent,
    Tile(Tile),
}

/// Smallest rectangle holding every painted cell and the agent
pub fn snapshot_bounds(simulation: &Simulation) -> (Position, Position) {
    let agent = simulation.agent().position;
    match simulation.grid().painted_bounds() {
        Some((min, max)) => (
            Position::new(min.x.min(agent.x), min.y.min(agent.y)),
            Position::new(max.x.max(agent.x), max.y.max(agent.y)),
        ),
        None => (agent, agent),
    }
}

/// Lay out the snapshot rows, delegating each cell's text to `cell`
pub fn layout_snapshot(simulation: &Simulation, cell: impl Fn(SnapshotCell) -> String) -> String {
    let (min, max) = snapshot_bounds(simulation);
    let agent = simulation.agent().position;
    let grid = simulation.grid();

    (min.y..=max.y)
        .map(|y| {
            (min.x..=max.x)
                .map(|x| {
                    let p = Position::new(x, y);
                    if p == agent {
                        cell(SnapshotCell::Agent)
                    } else {
                        cell(SnapshotCell::Tile(grid.get(p).unwrap_or_default()))
                    }
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Formatter without ANSI colors (`R`, `G`, `.`, `@`)
pub struct PlainFormatter;

impl PlainFormatter {
    pub fn cell(cell: SnapshotCell) -> &'static str {
        match cell {
            SnapshotCell::Agent => "@",
            SnapshotCell::Tile(Tile::Red) => "R",
            SnapshotCell::Tile(Tile::Green) => "G",
            SnapshotCell::Tile(Tile::Cleared) => ".",
        }
    }
}

impl OutputFormatter for PlainFormatter {
    fn format_snapshot(&self, simulation: &Simulation) -> String {
        layout_snapshot(simulation, |cell| Self::cell(cell).to_string())
    }

    fn format_summary(&self, summary: &RunSummary) -> String {
        format!(
            "Stopped ({}) after {} steps at {} per step",
            summary.reason.as_str(),
            summary.steps,
            summary.period
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use antfarm_application::StopReason;
    use antfarm_domain::{GridDimensions, SimulationConfig, StepPeriod};

    fn small() -> Simulation {
        let dims = GridDimensions::new(5, 5).unwrap();
        Simulation::new(&SimulationConfig::new(dims)).unwrap()
    }

    #[test]
    fn test_initial_snapshot_shows_agent_only() {
        // The agent stands on the red seed, so it hides it
        assert_eq!(PlainFormatter.format_snapshot(&small()), "@");
    }

    #[test]
    fn test_snapshot_after_two_steps() {
        let mut sim = small();
        sim.step().unwrap();
        sim.step().unwrap();

        // (2,2) green, (2,1) red, agent at (1,1)
        assert_eq!(PlainFormatter.format_snapshot(&sim), "@R\n.G");
    }

    #[test]
    fn test_summary_line() {
        let summary = RunSummary {
            steps: 11000,
            period: StepPeriod::new(5),
            reason: StopReason::MaxSteps,
        };
        let line = PlainFormatter.format_summary(&summary);
        assert!(line.contains("11000 steps"));
        assert!(line.contains("5ms"));
    }
}
