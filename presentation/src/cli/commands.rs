//! CLI command definitions

use antfarm_domain::BoundaryPolicy;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// What the agent does at the grid edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BoundaryArg {
    /// Re-enter on the opposite edge
    Wrap,
    /// Stay on the edge cell
    Clamp,
    /// Stop the run with an error
    Fail,
}

impl From<BoundaryArg> for BoundaryPolicy {
    fn from(arg: BoundaryArg) -> Self {
        match arg {
            BoundaryArg::Wrap => BoundaryPolicy::Wrap,
            BoundaryArg::Clamp => BoundaryPolicy::Clamp,
            BoundaryArg::Fail => BoundaryPolicy::Fail,
        }
    }
}

/// CLI arguments for antfarm
#[derive(Parser, Debug)]
#[command(name = "antfarm")]
#[command(author, version, about = "Three-state Langton's ant on a terminal grid")]
#[command(long_about = r#"
Antfarm runs a Langton-style ant on a grid of cleared, red and green tiles.

Each step the ant reads its tile, paints it (cleared/green -> red, red -> green),
turns (cleared/green -> left, red -> right) and moves one cell forward.

While the TUI is running:
  0-9, Enter    type a new step period in milliseconds (0 means 1)
  + / -         halve / double the period
  q, Ctrl+C     stop

Configuration files are loaded from (in priority order):
1. ANTFARM_* environment variables
2. --config <path>     Explicit config file
3. ./antfarm.toml      Project-level config
4. ~/.config/antfarm/config.toml   Global config

Example:
  antfarm
  antfarm --period-ms 5 --width 200 --height 160
  antfarm --headless --max-steps 11000
"#)]
pub struct Cli {
    /// Step period in milliseconds (0 is treated as 1)
    #[arg(short, long, value_name = "MS")]
    pub period_ms: Option<u64>,

    /// Grid width in cells
    #[arg(long, value_name = "CELLS")]
    pub width: Option<usize>,

    /// Grid height in cells
    #[arg(long, value_name = "CELLS")]
    pub height: Option<usize>,

    /// Starting column (defaults to the grid center)
    #[arg(long, value_name = "X", requires = "start_y")]
    pub start_x: Option<usize>,

    /// Starting row (defaults to the grid center)
    #[arg(long, value_name = "Y", requires = "start_x")]
    pub start_y: Option<usize>,

    /// Edge handling
    #[arg(short, long, value_enum)]
    pub boundary: Option<BoundaryArg>,

    /// Stop after this many steps
    #[arg(short = 'n', long, value_name = "N")]
    pub max_steps: Option<u64>,

    /// Run without the TUI, printing a progress bar and a final snapshot
    #[arg(long)]
    pub headless: bool,

    /// Hide the Step/ms info panel
    #[arg(long)]
    pub no_info: bool,

    /// Hide grid separators
    #[arg(long)]
    pub no_grid: bool,

    /// Disable colored output in headless mode
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators and the final snapshot
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
