//! Bulk-clear confirmation

use crate::state::AppState;
use crate::types::{ClearTarget, InputMode, StatusMessage};
use crossterm::event::{KeyCode, KeyEvent};

pub fn handle_key(state: &mut AppState, key: KeyEvent, target: ClearTarget) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            match target {
                ClearTarget::History => {
                    tracing::info!("user cleared request history");
                    state.session.clear_history();
                    state.set_status(StatusMessage::success("Request history cleared"));
                }
                ClearTarget::Results => {
                    tracing::info!("user cleared all test results");
                    state.session.clear_results();
                    state.set_status(StatusMessage::success("Stored results cleared"));
                }
            }
            state.input.mode = InputMode::Normal;
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            state.input.mode = InputMode::Normal;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{HistoryEntry, Session, SessionConfig};
    use crate::types::Scenario;
    use chrono::Utc;
    use crossterm::event::KeyModifiers;
    use serde_json::json;

    fn test_state() -> AppState {
        let mut state = AppState::new(Session::new(SessionConfig {
            base_url: "http://localhost:8000".to_string(),
            api_key: String::new(),
        }));
        state.session.record(HistoryEntry {
            timestamp: Utc::now(),
            endpoint: "/health".to_string(),
            method: "GET".to_string(),
            status_code: Some(200),
            response_time: Some(0.1),
            error: None,
            success: true,
        });
        state.session.store_result(Scenario::ResolveMulti, json!([]));
        state
    }

    fn press(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn test_yes_clears_only_the_requested_target() {
        let mut state = test_state();
        state.input.mode = InputMode::ConfirmClear(ClearTarget::History);

        handle_key(&mut state, press('y'), ClearTarget::History);

        assert!(state.session.history().is_empty());
        assert_eq!(state.session.results().len(), 1);
        assert_eq!(state.input.mode, InputMode::Normal);
    }

    #[test]
    fn test_no_leaves_everything_alone() {
        let mut state = test_state();
        state.input.mode = InputMode::ConfirmClear(ClearTarget::Results);

        handle_key(&mut state, press('n'), ClearTarget::Results);

        assert_eq!(state.session.history().len(), 1);
        assert_eq!(state.session.results().len(), 1);
        assert_eq!(state.input.mode, InputMode::Normal);
    }
}
