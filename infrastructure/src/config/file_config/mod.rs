//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod display;
mod grid;
mod schedule;

pub use display::FileDisplayConfig;
pub use grid::FileGridConfig;
pub use schedule::FileScheduleConfig;

use antfarm_domain::{DomainError, GridDimensions, Position, SimulationConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("grid.width and grid.height must be at least 1 (got {width}x{height})")]
    InvalidDimensions { width: usize, height: usize },

    #[error("grid {width}x{height} exceeds the limit of {max_cells} cells")]
    GridTooLarge {
        width: usize,
        height: usize,
        max_cells: usize,
    },

    #[error("grid.start_x and grid.start_y must be set together")]
    PartialStart,

    #[error("start ({x}, {y}) lies outside the {width}x{height} grid")]
    StartOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Grid size, seed and edge handling
    pub grid: FileGridConfig,
    /// Tick period and run length
    pub schedule: FileScheduleConfig,
    /// Renderer settings
    pub display: FileDisplayConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        let dims = GridDimensions::new(self.grid.width, self.grid.height);
        if let Err(e) = &dims {
            issues.push(self.dimensions_issue(e));
        }

        match (self.grid.start_x, self.grid.start_y) {
            (Some(x), Some(y)) => {
                if let Ok(dims) = dims
                    && !dims.contains(Position::new(x, y))
                {
                    issues.push(ConfigValidationError::StartOutOfBounds {
                        x,
                        y,
                        width: dims.width,
                        height: dims.height,
                    });
                }
            }
            (None, None) => {}
            _ => issues.push(ConfigValidationError::PartialStart),
        }

        issues
    }

    fn dimensions_issue(&self, error: &DomainError) -> ConfigValidationError {
        match *error {
            DomainError::GridTooLarge {
                width,
                height,
                max_cells,
            } => ConfigValidationError::GridTooLarge {
                width,
                height,
                max_cells,
            },
            _ => ConfigValidationError::InvalidDimensions {
                width: self.grid.width,
                height: self.grid.height,
            },
        }
    }

    /// Build the domain setup described by the `[grid]` section
    pub fn to_simulation_config(&self) -> Result<SimulationConfig, ConfigValidationError> {
        if let Some(issue) = self.validate().into_iter().next() {
            return Err(issue);
        }

        let dims = GridDimensions::new(self.grid.width, self.grid.height)
            .map_err(|e| self.dimensions_issue(&e))?;
        let mut config = SimulationConfig::new(dims)
            .with_seed_tile(self.grid.seed_tile)
            .with_heading(self.grid.heading)
            .with_boundary(self.grid.boundary);

        if let (Some(x), Some(y)) = (self.grid.start_x, self.grid.start_y) {
            config = config.with_start(Position::new(x, y));
        }

        Ok(config)
    }
}
