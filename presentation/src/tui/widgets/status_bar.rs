//! Status bar widget: mode indicator + period input or key hints + agent position

use crate::tui::mode::Mode;
use crate::tui::state::TuiState;
use antfarm_domain::Agent;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBarWidget<'a> {
    state: &'a TuiState,
    agent: &'a Agent,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a TuiState, agent: &'a Agent) -> Self {
        Self { state, agent }
    }

    fn left_text(&self) -> String {
        match self.state.mode {
            Mode::Period => format!("period: {}_ ms  Enter:apply  Esc:cancel", self.state.period_input),
            Mode::Running => "+/-:faster/slower  0-9:period  q:quit".into(),
        }
    }

    fn right_text(&self) -> String {
        match &self.state.flash_message {
            Some(flash) => flash.clone(),
            None => format!("ant {} {}", self.agent.position, self.agent.heading),
        }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        // Fill background
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        let mode = self.state.mode;
        let mode_text = mode.indicator();
        let mode_style = Style::default()
            .fg(Color::Black)
            .bg(mode.color())
            .add_modifier(Modifier::BOLD);
        let mode_width = mode_text.len() as u16 + 2;

        let left = self.left_text();
        let line = Line::from(vec![
            Span::styled(format!(" {} ", mode_text), mode_style),
            Span::styled(format!(" {}", left), bg_style),
        ]);
        buf.set_line(area.x, area.y, &line, area.width);

        // Right-aligned, only when it does not overlap the left side
        let right = self.right_text();
        let right_width = right.chars().count() as u16;
        let left_end = area.x + mode_width + 1 + left.chars().count() as u16;
        let right_x = area.right().saturating_sub(right_width + 1);
        if right_x > left_end {
            buf.set_line(
                right_x,
                area.y,
                &Line::from(Span::styled(right, bg_style)),
                right_width + 1,
            );
        }
    }
}
