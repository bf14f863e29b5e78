//! CLI entrypoint for antfarm
//!
//! This is the main binary that wires together all layers: configuration
//! from files and flags, the simulation, the scheduler and a renderer.

use anyhow::{Context, Result, bail};
use antfarm_application::{RunSummary, Scheduler};
use antfarm_domain::Simulation;
use antfarm_infrastructure::{ConfigLoader, FileConfig};
use antfarm_presentation::{
    Cli, ConsoleFormatter, DisplayConfig, OutputFormatter, PlainFormatter, ProgressReporter,
    TuiApp,
};
use clap::Parser;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let _log_guard = init_logging(&cli)?;

    info!("Starting antfarm");

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };
    apply_overrides(&mut config, &cli);

    let issues = config.validate();
    if !issues.is_empty() {
        for issue in &issues {
            eprintln!("config error: {}", issue);
        }
        bail!("Invalid configuration ({} issue(s))", issues.len());
    }

    let simulation_config = config.to_simulation_config()?;
    let schedule = config.schedule.to_schedule_config();
    let display = DisplayConfig {
        show_info: config.display.show_info,
        show_grid: config.display.show_grid,
        color: config.display.color,
    };

    let simulation = Simulation::new(&simulation_config)?;
    info!(
        "Grid {}, ant at {} facing {}, boundary {}",
        simulation_config.dimensions,
        simulation.agent().position,
        simulation.agent().heading,
        simulation.boundary()
    );

    // === Run ===
    let cancel = CancellationToken::new();
    spawn_ctrl_c(cancel.clone());

    let summary = if cli.headless {
        let reporter = if cli.quiet {
            ProgressReporter::quiet()
        } else {
            ProgressReporter::new(schedule.max_steps, display.color)
        };
        Scheduler::new(simulation, reporter, schedule)
            .with_cancellation(cancel)
            .run()
            .await?
    } else {
        TuiApp::new(simulation, schedule, display)
            .with_cancellation(cancel)
            .run()
            .await?
    };

    if !cli.quiet {
        print_summary(&summary, display.color);
    }

    Ok(())
}

/// Flags win over every config source
fn apply_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(period) = cli.period_ms {
        config.schedule.period_ms = period;
    }
    if let Some(max_steps) = cli.max_steps {
        config.schedule.max_steps = Some(max_steps);
    }
    if let Some(width) = cli.width {
        config.grid.width = width;
    }
    if let Some(height) = cli.height {
        config.grid.height = height;
    }
    if let (Some(x), Some(y)) = (cli.start_x, cli.start_y) {
        config.grid.start_x = Some(x);
        config.grid.start_y = Some(y);
    }
    if let Some(boundary) = cli.boundary {
        config.grid.boundary = boundary.into();
    }
    if cli.no_info {
        config.display.show_info = false;
    }
    if cli.no_grid {
        config.display.show_grid = false;
    }
    if cli.no_color {
        config.display.color = false;
    }
}

/// Headless runs log to stderr; the TUI owns the terminal, so it logs to a file
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    if cli.headless {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    }

    let dir = log_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::daily(
        &dir,
        "antfarm.log",
    ));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("antfarm")
        .join("logs")
}

fn spawn_ctrl_c(cancel: CancellationToken) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Ctrl+C received, stopping");
                cancel.cancel();
            }
            Err(e) => warn!("Failed to listen for Ctrl+C: {}", e),
        }
    });
}

fn print_summary(summary: &RunSummary, color: bool) {
    let line = if color {
        ConsoleFormatter.format_summary(summary)
    } else {
        PlainFormatter.format_summary(summary)
    };
    println!("{}", line);
}
