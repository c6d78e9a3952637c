//! Settings modal: base URL and API key for this session

use crate::config::validate_url;
use crate::state::AppState;
use crate::types::{InputMode, SettingsField, StatusMessage};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Char('l') {
            active_buffer(state).clear();
        }
        return;
    }

    match key.code {
        KeyCode::Tab | KeyCode::BackTab => {
            state.input.active_settings_field = match state.input.active_settings_field {
                SettingsField::BaseUrl => SettingsField::ApiKey,
                SettingsField::ApiKey => SettingsField::BaseUrl,
            };
        }
        KeyCode::Char(c) => active_buffer(state).push(c),
        KeyCode::Backspace => {
            active_buffer(state).pop();
        }
        KeyCode::Enter => apply_settings(state),
        KeyCode::Esc => state.input.mode = InputMode::Normal,
        _ => {}
    }
}

fn active_buffer(state: &mut AppState) -> &mut String {
    match state.input.active_settings_field {
        SettingsField::BaseUrl => &mut state.input.settings_url,
        SettingsField::ApiKey => &mut state.input.settings_key,
    }
}

fn apply_settings(state: &mut AppState) {
    let new_url = state.input.settings_url.trim().to_string();
    let new_key = state.input.settings_key.trim().to_string();

    if let Err(message) = validate_url(&new_url) {
        state.set_status(StatusMessage::warning(message));
        return;
    }

    let old_url = state.session.config.base_url.clone();
    let old_key_present = !state.session.config.api_key.is_empty();

    state.session.config.base_url = new_url.clone();
    state.session.config.api_key = new_key.clone();

    // Key presence only, never the key itself
    tracing::info!(
        old_url,
        new_url,
        old_key_present,
        new_key_present = !new_key.is_empty(),
        "settings updated by user"
    );

    state.set_status(StatusMessage::success("Settings updated for this session"));
    state.input.mode = InputMode::Normal;
}
