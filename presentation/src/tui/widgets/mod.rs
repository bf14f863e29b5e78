//! TUI widgets: ratatui components for the simulation view
//!
//! Layout:
//! ┌── Info (overlay) ──┐───────────────────────────────┐
//! ├────────────────────┘  Grid (flex)                  │
//! └── StatusBar (1) ───────────────────────────────────┘

pub mod grid;
pub mod info;
pub mod status_bar;

use antfarm_domain::Rgb;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
};

/// Convert a palette color to a terminal color
pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Compute the main layout regions from a terminal area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainLayout {
    pub grid: Rect,
    /// Overlay in the grid's top-left corner; None when hidden
    pub info: Option<Rect>,
    pub status_bar: Rect,
}

impl MainLayout {
    pub fn compute(area: Rect, show_info: bool) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Fill(1), Constraint::Length(1)])
            .split(area);

        let grid = vertical[0];
        let info = show_info.then(|| info::InfoWidget::area(grid));

        Self {
            grid,
            info,
            status_bar: vertical[1],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_reserves_status_row() {
        let layout = MainLayout::compute(Rect::new(0, 0, 80, 24), true);
        assert_eq!(layout.grid, Rect::new(0, 0, 80, 23));
        assert_eq!(layout.status_bar, Rect::new(0, 23, 80, 1));
        assert!(layout.info.is_some());
    }

    #[test]
    fn test_layout_without_info() {
        let layout = MainLayout::compute(Rect::new(0, 0, 80, 24), false);
        assert_eq!(layout.info, None);
    }
}
