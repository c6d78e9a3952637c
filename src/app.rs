//! Application loop
//!
//! Owns the HTTP client, the app state, and the terminal draw/event cycle.
//! Dispatch actions returned by the event layer are awaited right here, so
//! the interface blocks until the remote call completes. One operator
//! action fully finishes, history entry included, before the next key is
//! accepted.

use crate::state::AppState;
use crate::types::UserAction;
use crate::ui::events::execution;
use crate::ui::{draw, EventHandler};
use color_eyre::Result;
use ratatui::{DefaultTerminal, Frame};
use std::time::Duration;

/// Remote pipeline calls can take minutes; this is the only timeout anywhere.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

pub struct App {
    state: AppState,
    client: reqwest::Client,
    event_handler: EventHandler,
}

impl App {
    pub fn new(state: AppState) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            state,
            client,
            event_handler: EventHandler::new(),
        })
    }

    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        while !self.event_handler.should_quit {
            terminal.draw(|frame| self.draw(frame))?;

            if let Some(action) = self.event_handler.handle_events(&mut self.state)? {
                // One frame with the dispatching notice before the interface
                // blocks on the call
                self.state.ui.dispatching = true;
                terminal.draw(|frame| self.draw(frame))?;

                match action {
                    UserAction::Run(scenario) => {
                        execution::run_scenario(&mut self.state, &self.client, scenario).await;
                    }
                    UserAction::HealthCheck => {
                        execution::run_health(&mut self.state, &self.client).await;
                    }
                }
                self.state.ui.dispatching = false;
            }
        }

        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        draw::render(frame, &self.state);
    }
}
