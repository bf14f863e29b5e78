//! Display configuration from TOML (`[display]` section)

use serde::{Deserialize, Serialize};

/// Raw display configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDisplayConfig {
    /// Draw the `Step/ms` info panel
    pub show_info: bool,
    /// Draw grid separators on cleared cells
    pub show_grid: bool,
    /// Enable colored terminal output in headless mode
    pub color: bool,
}

impl Default for FileDisplayConfig {
    fn default() -> Self {
        Self {
            show_info: true,
            show_grid: true,
            color: true,
        }
    }
}
