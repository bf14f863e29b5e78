//! TUI control state
//!
//! Shared between the key handling loop (writes) and the renderer (reads a
//! snapshot each tick).

use super::mode::{Action, Mode};
use antfarm_domain::StepPeriod;

/// Longest period input accepted, in digits
const MAX_INPUT_DIGITS: usize = 9;

/// Request for the scheduler produced by an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlRequest {
    SetPeriod(u64),
    Quit,
    None,
}

/// Everything the status bar and info panel need besides the simulation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TuiState {
    pub mode: Mode,
    /// Digits typed in Period mode
    pub period_input: String,
    /// Last period confirmed by the scheduler
    pub period: StepPeriod,
    pub flash_message: Option<String>,
}

impl TuiState {
    pub fn new(period: StepPeriod) -> Self {
        Self {
            mode: Mode::default(),
            period_input: String::new(),
            period,
            flash_message: None,
        }
    }

    /// Apply an action, returning what the scheduler should do
    pub fn apply(&mut self, action: Action) -> ControlRequest {
        match action {
            Action::EnterPeriod => {
                self.mode = Mode::Period;
                self.period_input.clear();
                self.flash_message = None;
                ControlRequest::None
            }
            Action::InsertDigit(c) => {
                if self.mode != Mode::Period {
                    self.mode = Mode::Period;
                    self.period_input.clear();
                    self.flash_message = None;
                }
                if self.period_input.len() < MAX_INPUT_DIGITS {
                    self.period_input.push(c);
                }
                ControlRequest::None
            }
            Action::DeleteChar => {
                self.period_input.pop();
                ControlRequest::None
            }
            Action::Submit => {
                self.mode = Mode::Running;
                let input = std::mem::take(&mut self.period_input);
                match input.parse::<u64>() {
                    Ok(millis) => ControlRequest::SetPeriod(millis),
                    Err(_) => ControlRequest::None,
                }
            }
            Action::Cancel => {
                self.mode = Mode::Running;
                self.period_input.clear();
                ControlRequest::None
            }
            Action::Faster => ControlRequest::SetPeriod(self.period.faster().as_millis()),
            Action::Slower => ControlRequest::SetPeriod(self.period.slower().as_millis()),
            Action::Quit => ControlRequest::Quit,
            Action::None => ControlRequest::None,
        }
    }

    /// Record the period the scheduler actually adopted
    pub fn period_applied(&mut self, period: StepPeriod) {
        self.period = period;
        self.flash_message = Some(format!("period set to {}", period));
    }
}
