//! Event handling
//!
//! Translates key presses into state changes. Input modes mirror the modal
//! structure of the interface:
//! - Normal: navigation and commands
//! - EditingField: inline editing of a form field
//! - Settings: the base URL / API key modal
//! - ConfirmClear: bulk-clear confirmation
//!
//! Anything that needs the dispatcher (running a scenario, the health probe)
//! is returned to the run loop as a [`UserAction`] and awaited there, so the
//! interface blocks until the call completes.

mod confirm;
mod editing;
pub mod execution;
mod normal;
mod settings;

use crate::state::AppState;
use crate::types::{InputMode, UserAction};
use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::Duration;

#[derive(Debug, Default)]
pub struct EventHandler {
    pub should_quit: bool,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Poll for one key event and apply it. Returns an action for the run
    /// loop when the operator fired a request.
    pub fn handle_events(&mut self, state: &mut AppState) -> Result<Option<UserAction>> {
        if !event::poll(Duration::from_millis(50))? {
            return Ok(None);
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                return Ok(None);
            }

            return Ok(match state.input.mode {
                InputMode::Normal => normal::handle_key(self, state, key),
                InputMode::EditingField => {
                    editing::handle_key(state, key);
                    None
                }
                InputMode::Settings => {
                    settings::handle_key(state, key);
                    None
                }
                InputMode::ConfirmClear(target) => {
                    confirm::handle_key(state, key, target);
                    None
                }
            });
        }

        Ok(None)
    }
}
