//! Grid widget: painted tiles, grid separators and the agent marker
//!
//! Each cell takes two terminal columns so cells look roughly square.
//! When the grid is larger than the area, a [`Viewport`] follows the agent.

use super::to_color;
use antfarm_domain::{GridDimensions, Heading, Palette, Position, Simulation};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// Terminal columns per grid cell
pub const CELL_WIDTH: u16 = 2;

/// Window of grid cells currently on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub origin: Position,
    pub cols: usize,
    pub rows: usize,
}

impl Viewport {
    /// Largest window of at most `cols`×`rows` cells centered on `focus`,
    /// shifted so it never extends past the grid edges
    pub fn follow(focus: Position, dims: GridDimensions, cols: usize, rows: usize) -> Self {
        let cols = cols.min(dims.width);
        let rows = rows.min(dims.height);

        let x = focus.x.saturating_sub(cols / 2).min(dims.width - cols);
        let y = focus.y.saturating_sub(rows / 2).min(dims.height - rows);

        Self {
            origin: Position::new(x, y),
            cols,
            rows,
        }
    }

    pub fn contains(&self, p: Position) -> bool {
        p.x >= self.origin.x
            && p.y >= self.origin.y
            && p.x < self.origin.x + self.cols
            && p.y < self.origin.y + self.rows
    }

    /// Offset of a grid cell inside the window, in cells
    pub fn to_local(&self, p: Position) -> Option<(usize, usize)> {
        self.contains(p)
            .then(|| (p.x - self.origin.x, p.y - self.origin.y))
    }
}

/// Arrow drawn for the agent, pointing along its heading
pub fn agent_marker(heading: Heading) -> &'static str {
    match heading {
        Heading::Zero | Heading::Full => "►",
        Heading::Quarter => "▲",
        Heading::Half => "◄",
        Heading::ThreeQuarters => "▼",
    }
}

pub struct GridWidget<'a> {
    simulation: &'a Simulation,
    show_grid: bool,
}

impl<'a> GridWidget<'a> {
    pub fn new(simulation: &'a Simulation) -> Self {
        Self {
            simulation,
            show_grid: true,
        }
    }

    pub fn show_grid(mut self, show: bool) -> Self {
        self.show_grid = show;
        self
    }

    pub fn viewport(&self, area: Rect) -> Viewport {
        Viewport::follow(
            self.simulation.agent().position,
            self.simulation.grid().dimensions(),
            (area.width / CELL_WIDTH) as usize,
            area.height as usize,
        )
    }
}

impl<'a> Widget for GridWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let viewport = self.viewport(area);
        let grid = self.simulation.grid();
        let separator = Style::default().fg(Color::DarkGray);

        for row in 0..viewport.rows {
            for col in 0..viewport.cols {
                let cell = Position::new(viewport.origin.x + col, viewport.origin.y + row);
                let x = area.x + col as u16 * CELL_WIDTH;
                let y = area.y + row as u16;

                match grid.get(cell).and_then(|tile| tile.color()) {
                    Some(rgb) => {
                        buf.set_string(x, y, "  ", Style::default().bg(to_color(rgb)));
                    }
                    None if self.show_grid => {
                        buf.set_string(x, y, "· ", separator);
                    }
                    None => {}
                }
            }
        }

        let agent = self.simulation.agent();
        if let Some((col, row)) = viewport.to_local(agent.position) {
            let x = area.x + col as u16 * CELL_WIDTH;
            let y = area.y + row as u16;
            let mut style = Style::default().fg(to_color(Palette::WHITE));
            if let Some(rgb) = grid.get(agent.position).and_then(|t| t.color()) {
                style = style.bg(to_color(rgb));
            }
            buf.set_string(x, y, agent_marker(agent.heading), style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use antfarm_domain::SimulationConfig;

    fn sim(width: usize, height: usize) -> Simulation {
        let dims = GridDimensions::new(width, height).unwrap();
        Simulation::new(&SimulationConfig::new(dims)).unwrap()
    }

    #[test]
    fn test_viewport_centers_on_focus() {
        let dims = GridDimensions::default();
        let view = Viewport::follow(Position::new(60, 50), dims, 40, 20);
        assert_eq!(view.origin, Position::new(40, 40));
        assert!(view.contains(Position::new(60, 50)));
        assert_eq!(view.to_local(Position::new(60, 50)), Some((20, 10)));
    }

    #[test]
    fn test_viewport_clamps_to_edges() {
        let dims = GridDimensions::default();
        let near_origin = Viewport::follow(Position::new(1, 1), dims, 40, 20);
        assert_eq!(near_origin.origin, Position::new(0, 0));

        let near_end = Viewport::follow(Position::new(119, 99), dims, 40, 20);
        assert_eq!(near_end.origin, Position::new(80, 80));
        assert!(near_end.contains(Position::new(119, 99)));
    }

    #[test]
    fn test_viewport_shrinks_to_small_grid() {
        let dims = GridDimensions::new(5, 3).unwrap();
        let view = Viewport::follow(Position::new(2, 1), dims, 40, 20);
        assert_eq!(view.origin, Position::new(0, 0));
        assert_eq!((view.cols, view.rows), (5, 3));
    }

    #[test]
    fn test_renders_agent_and_painted_cells() {
        let mut sim = sim(5, 3);
        sim.step().unwrap();

        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);
        GridWidget::new(&sim).render(area, &mut buf);

        // Seed (2, 1) is now green; agent moved up to (2, 0) facing 90 degrees
        let green = to_color(Palette::GREEN);
        assert_eq!(buf[(4, 1)].bg, green);
        assert_eq!(buf[(4, 0)].symbol(), "▲");
        assert_eq!(buf[(0, 0)].symbol(), "·");
    }

    #[test]
    fn test_grid_separators_can_be_hidden() {
        let sim = sim(3, 1);
        let area = Rect::new(0, 0, 6, 1);
        let mut buf = Buffer::empty(area);
        GridWidget::new(&sim).show_grid(false).render(area, &mut buf);

        assert_eq!(buf[(0, 0)].symbol(), " ");
    }

    #[test]
    fn test_marker_follows_heading() {
        assert_eq!(agent_marker(Heading::Zero), agent_marker(Heading::Full));
        assert_eq!(agent_marker(Heading::ThreeQuarters), "▼");
    }
}
