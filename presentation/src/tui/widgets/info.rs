//! Info panel: `Step/ms: 1/{period}` and the step counter

use super::to_color;
use antfarm_domain::{Palette, StepPeriod};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Clear, Paragraph, Widget},
};

const PANEL_WIDTH: u16 = 22;
const PANEL_HEIGHT: u16 = 4;

pub struct InfoWidget {
    period: StepPeriod,
    steps: u64,
}

impl InfoWidget {
    pub fn new(period: StepPeriod, steps: u64) -> Self {
        Self { period, steps }
    }

    /// Panel rectangle anchored to the top-left of `area`
    pub fn area(area: Rect) -> Rect {
        Rect::new(
            area.x,
            area.y,
            PANEL_WIDTH.min(area.width),
            PANEL_HEIGHT.min(area.height),
        )
    }

    /// Speed readout, one step per `period` milliseconds
    pub fn speed_text(period: StepPeriod) -> String {
        format!("Step/ms: 1/{}", period.as_millis())
    }
}

impl Widget for InfoWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let style = Style::default()
            .bg(to_color(Palette::GRAY))
            .fg(to_color(Palette::WHITE));

        let lines = vec![
            Line::default(),
            Line::from(format!(" {}", Self::speed_text(self.period)))
                .style(Style::default().add_modifier(Modifier::BOLD)),
            Line::from(format!(" Steps: {}", self.steps)),
        ];

        Paragraph::new(lines).style(style).render(area, buf);
    }
}
