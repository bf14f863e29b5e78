//! Keyboard controls
//!
//! Reads crossterm events and turns them into scheduler commands. Runs as
//! its own task next to the scheduler and exits when the run is cancelled.

use super::mode::KeyHandler;
use super::state::{ControlRequest, TuiState};
use antfarm_application::SchedulerHandle;
use crossterm::event::{Event, EventStream, KeyEvent, KeyEventKind};
use futures::stream::StreamExt;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

pub struct TuiControls {
    handle: SchedulerHandle,
    state: Arc<Mutex<TuiState>>,
}

impl TuiControls {
    pub fn new(handle: SchedulerHandle, state: Arc<Mutex<TuiState>>) -> Self {
        Self { handle, state }
    }

    /// Process key events until the scheduler goes away or the user quits
    pub async fn run(self) {
        let cancel = self.handle.cancellation_token();
        let mut events = EventStream::new();

        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                event = events.next() => match event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        if !self.handle_key(key) {
                            break;
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        warn!("Terminal event error: {}", e);
                        break;
                    }
                    None => break,
                }
            }
        }

        debug!("Keyboard controls stopped");
    }

    /// Returns false once the controls should stop listening
    fn handle_key(&self, key: KeyEvent) -> bool {
        let Ok(mut state) = self.state.lock() else {
            return false;
        };

        let action = KeyHandler::handle(state.mode, key);
        match state.apply(action) {
            ControlRequest::SetPeriod(millis) => match self.handle.set_period(millis) {
                Ok(period) => {
                    info!("Period changed to {}", period);
                    state.period_applied(period);
                    true
                }
                Err(_) => false,
            },
            ControlRequest::Quit => {
                info!("Stop requested from keyboard");
                let _ = self.handle.stop();
                false
            }
            ControlRequest::None => true,
        }
    }
}
