//! Presentation-level configuration
//!
//! Settings that only affect how the simulation is drawn.

/// Display configuration for the renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Draw the `Step/ms` info panel
    pub show_info: bool,
    /// Draw grid separators on cleared cells
    pub show_grid: bool,
    /// Enable colored output in headless mode
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_info: true,
            show_grid: true,
            color: true,
        }
    }
}
