//! TUI mode system
//!
//! Defines the two interaction modes:
//! - Running: the simulation ticks, single keys adjust speed
//! - Period: a step period in milliseconds is being typed

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Interaction mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Running,
    /// Typing a new period (digits, Enter applies, Esc cancels)
    Period,
}

impl Mode {
    /// Get the mode indicator string for status line
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Running => "RUN",
            Self::Period => "PERIOD",
        }
    }

    /// Get the mode color for status line
    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            Self::Running => Color::Green,
            Self::Period => Color::Yellow,
        }
    }
}

/// User action derived from key events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Start typing a period
    EnterPeriod,
    /// Append a digit to the period input
    InsertDigit(char),
    /// Delete the last digit (Backspace)
    DeleteChar,
    /// Apply the typed period (Enter)
    Submit,
    /// Discard the typed period (Esc)
    Cancel,
    /// Halve the period
    Faster,
    /// Double the period
    Slower,
    /// Stop the simulation
    Quit,
    /// No action
    None,
}

/// Key event handler - maps key events to actions based on current mode
pub struct KeyHandler;

impl KeyHandler {
    /// Handle key event in the given mode
    pub fn handle(mode: Mode, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match mode {
            Mode::Running => Self::handle_running(key),
            Mode::Period => Self::handle_period(key),
        }
    }

    fn handle_running(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => Action::Faster,
            KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Down => Action::Slower,
            KeyCode::Char('p') | KeyCode::Char(':') | KeyCode::Enter => Action::EnterPeriod,
            // Typing a digit starts the input directly
            KeyCode::Char(c) if c.is_ascii_digit() => Action::InsertDigit(c),
            _ => Action::None,
        }
    }

    fn handle_period(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::Cancel,
            KeyCode::Enter => Action::Submit,
            KeyCode::Backspace => Action::DeleteChar,
            KeyCode::Char(c) if c.is_ascii_digit() => Action::InsertDigit(c),
            _ => Action::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_mode_default() {
        assert_eq!(Mode::default(), Mode::Running);
    }

    #[test]
    fn test_mode_indicator() {
        assert_eq!(Mode::Running.indicator(), "RUN");
        assert_eq!(Mode::Period.indicator(), "PERIOD");
    }

    #[test]
    fn test_running_mode_keys() {
        let h = |code| KeyHandler::handle(Mode::Running, key(code));
        assert_eq!(h(KeyCode::Char('q')), Action::Quit);
        assert_eq!(h(KeyCode::Char('+')), Action::Faster);
        assert_eq!(h(KeyCode::Char('-')), Action::Slower);
        assert_eq!(h(KeyCode::Char('p')), Action::EnterPeriod);
        assert_eq!(h(KeyCode::Char('7')), Action::InsertDigit('7'));
        assert_eq!(h(KeyCode::Esc), Action::None);
        assert_eq!(h(KeyCode::Char('x')), Action::None);
    }

    #[test]
    fn test_period_mode_keys() {
        let h = |code| KeyHandler::handle(Mode::Period, key(code));
        assert_eq!(h(KeyCode::Char('0')), Action::InsertDigit('0'));
        assert_eq!(h(KeyCode::Enter), Action::Submit);
        assert_eq!(h(KeyCode::Esc), Action::Cancel);
        assert_eq!(h(KeyCode::Backspace), Action::DeleteChar);
        // Letters are ignored while typing, including the quit key
        assert_eq!(h(KeyCode::Char('q')), Action::None);
    }

    #[test]
    fn test_ctrl_c_quits_in_every_mode() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(KeyHandler::handle(Mode::Running, ctrl_c), Action::Quit);
        assert_eq!(KeyHandler::handle(Mode::Period, ctrl_c), Action::Quit);
    }
}
