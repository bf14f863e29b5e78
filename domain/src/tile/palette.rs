//! Display colors shared by every renderer

use serde::{Deserialize, Serialize};

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS-style hex notation, e.g. `#e74c3c`
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.hex())
    }
}

/// Fixed palette used for tiles, the agent marker, grid lines and the info panel
pub struct Palette;

impl Palette {
    /// Agent marker and grid lines
    pub const WHITE: Rgb = Rgb::new(0xec, 0xf0, 0xf1);
    pub const GREEN: Rgb = Rgb::new(0x2e, 0xcc, 0x71);
    pub const RED: Rgb = Rgb::new(0xe7, 0x4c, 0x3c);
    /// Info panel background
    pub const GRAY: Rgb = Rgb::new(0x17, 0x17, 0x17);
}
