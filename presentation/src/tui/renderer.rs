//! Terminal render sink
//!
//! Owns the ratatui terminal for the lifetime of a run. Raw mode and the
//! alternate screen are entered on construction and left on `finish`,
//! on drop, or from the panic hook.

use super::state::TuiState;
use super::widgets::{
    MainLayout, grid::GridWidget, info::InfoWidget, status_bar::StatusBarWidget,
};
use crate::config::DisplayConfig;
use antfarm_application::{RenderError, RenderSink};
use antfarm_domain::{Simulation, StepPeriod};
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::{Arc, Mutex};
use tracing::debug;

pub struct TuiRenderer {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    state: Arc<Mutex<TuiState>>,
    display: DisplayConfig,
    active: bool,
}

impl TuiRenderer {
    /// Take over the terminal
    pub fn new(state: Arc<Mutex<TuiState>>, display: DisplayConfig) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, Hide)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
            original_hook(info);
        }));

        debug!("Terminal renderer active");
        Ok(Self {
            terminal,
            state,
            display,
            active: true,
        })
    }

    /// Give the terminal back; safe to call more than once
    fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen, Show)?;
        self.terminal.show_cursor()?;
        debug!("Terminal restored");
        Ok(())
    }
}

/// Draw one frame of the simulation view
pub fn draw(
    frame: &mut Frame,
    simulation: &Simulation,
    period: StepPeriod,
    state: &TuiState,
    display: DisplayConfig,
) {
    let layout = MainLayout::compute(frame.area(), display.show_info);

    frame.render_widget(
        GridWidget::new(simulation).show_grid(display.show_grid),
        layout.grid,
    );
    if let Some(area) = layout.info {
        frame.render_widget(InfoWidget::new(period, simulation.steps()), area);
    }
    frame.render_widget(
        StatusBarWidget::new(state, simulation.agent()),
        layout.status_bar,
    );
}

impl RenderSink for TuiRenderer {
    fn render(&mut self, simulation: &Simulation, period: StepPeriod) -> Result<(), RenderError> {
        let state = self
            .state
            .lock()
            .map_err(|e| RenderError::Other(e.to_string()))?
            .clone();
        let display = self.display;

        self.terminal
            .draw(|frame| draw(frame, simulation, period, &state, display))?;
        Ok(())
    }

    fn finish(&mut self, _simulation: &Simulation) -> Result<(), RenderError> {
        self.restore()?;
        Ok(())
    }
}

impl Drop for TuiRenderer {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use antfarm_domain::{GridDimensions, SimulationConfig};
    use ratatui::backend::TestBackend;

    #[test]
    fn test_draw_full_frame() {
        let dims = GridDimensions::new(30, 20).unwrap();
        let mut sim = Simulation::new(&SimulationConfig::new(dims)).unwrap();
        for _ in 0..10 {
            sim.step().unwrap();
        }
        let state = TuiState::new(StepPeriod::new(500));

        let mut terminal = Terminal::new(TestBackend::new(60, 21)).unwrap();
        terminal
            .draw(|frame| {
                draw(
                    frame,
                    &sim,
                    StepPeriod::new(500),
                    &state,
                    DisplayConfig::default(),
                )
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Step/ms: 1/500"));
        assert!(text.contains("Steps: 10"));
        assert!(text.contains(" RUN "));
    }

    #[test]
    fn test_draw_without_info_panel() {
        let sim = Simulation::new(&SimulationConfig::default()).unwrap();
        let state = TuiState::new(StepPeriod::default());
        let display = DisplayConfig {
            show_info: false,
            ..DisplayConfig::default()
        };

        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal
            .draw(|frame| draw(frame, &sim, StepPeriod::default(), &state, display))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(!text.contains("Step/ms"));
    }
}
