//! Inline field editing

use crate::state::AppState;
use crate::types::InputMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Char('l') {
            state.input.edit_buffer.clear();
        }
        return;
    }

    match key.code {
        KeyCode::Char(c) => state.input.edit_buffer.push(c),
        KeyCode::Backspace => {
            state.input.edit_buffer.pop();
        }
        KeyCode::Enter => {
            let idx = state.input.editing_field;
            let value = std::mem::take(&mut state.input.edit_buffer);
            let active = state.ui.active;
            if let Some(form) = state.forms.get_mut(active) {
                form.commit(idx, value);
            }
            state.input.mode = InputMode::Normal;
        }
        KeyCode::Esc => {
            state.input.edit_buffer.clear();
            state.input.mode = InputMode::Normal;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Session, SessionConfig};
    use crate::types::Scenario;
    use crossterm::event::KeyEvent;

    fn test_state() -> AppState {
        let mut state = AppState::new(Session::new(SessionConfig {
            base_url: "http://localhost:8000".to_string(),
            api_key: String::new(),
        }));
        state.ui.active = Scenario::ResolveUpload;
        state.input.mode = InputMode::EditingField;
        state.input.editing_field = 0;
        state
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_and_commit_updates_the_form() {
        let mut state = test_state();
        for c in "/tmp/doc.json".chars() {
            handle_key(&mut state, press(KeyCode::Char(c)));
        }
        handle_key(&mut state, press(KeyCode::Enter));

        assert_eq!(state.input.mode, InputMode::Normal);
        assert_eq!(state.forms.resolve_upload.json_path, "/tmp/doc.json");
    }

    #[test]
    fn test_escape_discards_the_buffer() {
        let mut state = test_state();
        state.forms.resolve_upload.json_path = "original".to_string();
        state.input.edit_buffer = "changed".to_string();

        handle_key(&mut state, press(KeyCode::Esc));

        assert_eq!(state.input.mode, InputMode::Normal);
        assert_eq!(state.forms.resolve_upload.json_path, "original");
    }

    #[test]
    fn test_ctrl_l_clears_the_buffer() {
        let mut state = test_state();
        state.input.edit_buffer = "something".to_string();

        handle_key(
            &mut state,
            KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL),
        );

        assert!(state.input.edit_buffer.is_empty());
        assert_eq!(state.input.mode, InputMode::EditingField);
    }
}
