//! Grid configuration from TOML (`[grid]` section)

use antfarm_domain::{BoundaryPolicy, GridDimensions, Heading, Tile};
use serde::{Deserialize, Serialize};

/// Raw grid configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGridConfig {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// Tag painted into the start cell before the first step
    pub seed_tile: Tile,
    /// Start column; grid center when unset
    pub start_x: Option<usize>,
    /// Start row; grid center when unset
    pub start_y: Option<usize>,
    /// Initial heading in degrees (0, 90, 180, 270 or 360)
    pub heading: Heading,
    /// Edge handling (wrap, clamp, fail)
    pub boundary: BoundaryPolicy,
}

impl Default for FileGridConfig {
    fn default() -> Self {
        Self {
            width: GridDimensions::DEFAULT_WIDTH,
            height: GridDimensions::DEFAULT_HEIGHT,
            seed_tile: Tile::Red,
            start_x: None,
            start_y: None,
            heading: Heading::Half,
            boundary: BoundaryPolicy::Wrap,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::FileConfig;
    use super::*;

    #[test]
    fn test_grid_section_deserialize() {
        let toml_str = r#"
[grid]
width = 40
height = 30
seed_tile = "green"
heading = 360
boundary = "clamp"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.grid.width, 40);
        assert_eq!(config.grid.height, 30);
        assert_eq!(config.grid.seed_tile, Tile::Green);
        assert_eq!(config.grid.heading, Heading::Full);
        assert_eq!(config.grid.boundary, BoundaryPolicy::Clamp);
        assert_eq!(config.grid.start_x, None);
    }

    #[test]
    fn test_invalid_heading_rejected() {
        let toml_str = r#"
[grid]
heading = 45
"#;
        assert!(toml::from_str::<FileConfig>(toml_str).is_err());
    }
}
