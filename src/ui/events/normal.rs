//! Normal mode: navigation and commands

use super::{execution, EventHandler};
use crate::scenario::FieldKind;
use crate::state::AppState;
use crate::types::{ClearTarget, InputMode, PanelFocus, Scenario, SettingsField, UserAction};
use crate::ui::draw::styling::SCROLL_LINES_PER_ACTION;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_key(
    handler: &mut EventHandler,
    state: &mut AppState,
    key: KeyEvent,
) -> Option<UserAction> {
    // Ctrl+U / Ctrl+D page-scroll whichever panel Up/Down currently targets
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('u') => {
                scroll_up(state, SCROLL_LINES_PER_ACTION);
                return None;
            }
            KeyCode::Char('d') => {
                scroll_down(state, SCROLL_LINES_PER_ACTION);
                return None;
            }
            _ => return None,
        }
    }

    match key.code {
        KeyCode::Char('q') => handler.should_quit = true,

        // Tab navigation
        KeyCode::Tab | KeyCode::Char(']') => switch_tab(state, state.ui.active.next()),
        KeyCode::BackTab | KeyCode::Char('[') => switch_tab(state, state.ui.active.previous()),
        KeyCode::Char(c @ '1'..='6') => {
            let idx = c as usize - '1' as usize;
            switch_tab(state, Scenario::ALL[idx]);
        }

        // Panel focus
        KeyCode::Left => state.ui.focus = PanelFocus::Form,
        KeyCode::Right => state.ui.focus = PanelFocus::Response,

        KeyCode::Up => scroll_up(state, 1),
        KeyCode::Down => scroll_down(state, 1),

        KeyCode::Enter => activate_field(state, true),
        KeyCode::Char(' ') => activate_field(state, false),

        KeyCode::Char('r') => {
            if state.ui.active != Scenario::Results {
                return Some(UserAction::Run(state.ui.active));
            }
        }
        KeyCode::Char('h') => return Some(UserAction::HealthCheck),

        KeyCode::Char('d') => state.ui.show_error_detail = !state.ui.show_error_detail,
        KeyCode::Char('y') => execution::yank_response(state),
        KeyCode::Char('s') => execution::save_image(state),
        KeyCode::Char('g') => execution::write_sample(state),
        KeyCode::Char('e') => execution::export_results(state),

        KeyCode::Char('x') => state.input.mode = InputMode::ConfirmClear(ClearTarget::Results),
        KeyCode::Char('c') => state.input.mode = InputMode::ConfirmClear(ClearTarget::History),

        KeyCode::Char('u') => open_settings(state),

        _ => {}
    }

    None
}

fn switch_tab(state: &mut AppState, scenario: Scenario) {
    state.ui.active = scenario;
    state.ui.focus = PanelFocus::Form;
    state.ui.status = None;
}

fn open_settings(state: &mut AppState) {
    state.input.settings_url = state.session.config.base_url.clone();
    state.input.settings_key = state.session.config.api_key.clone();
    state.input.active_settings_field = SettingsField::BaseUrl;
    state.input.mode = InputMode::Settings;
}

fn scroll_up(state: &mut AppState, lines: u16) {
    if state.ui.active == Scenario::Results {
        state.ui.results_scroll = state.ui.results_scroll.saturating_sub(lines);
    } else if state.ui.focus == PanelFocus::Response {
        state.ui.response_scroll = state.ui.response_scroll.saturating_sub(lines);
    } else {
        let selected = state.selected_field();
        state.set_selected_field(selected.saturating_sub(lines as usize));
    }
}

fn scroll_down(state: &mut AppState, lines: u16) {
    if state.ui.active == Scenario::Results {
        state.ui.results_scroll = state.ui.results_scroll.saturating_add(lines);
    } else if state.ui.focus == PanelFocus::Response {
        state.ui.response_scroll = state.ui.response_scroll.saturating_add(lines);
    } else {
        let count = state.active_field_count();
        if count == 0 {
            return;
        }
        let selected = state.selected_field();
        state.set_selected_field((selected + lines as usize).min(count - 1));
    }
}

/// Enter edits or toggles the selected field; Space only toggles.
fn activate_field(state: &mut AppState, allow_edit: bool) {
    if state.ui.focus != PanelFocus::Form {
        return;
    }

    let idx = state.selected_field();
    let active = state.ui.active;

    let edit_buffer = match state.forms.get_mut(active) {
        Some(form) => {
            let kind = form.fields().get(idx).map(|f| f.kind);
            match kind {
                Some(FieldKind::Toggle) => {
                    form.toggle(idx);
                    None
                }
                Some(FieldKind::Text) if allow_edit => Some(form.edit_value(idx)),
                _ => None,
            }
        }
        None => None,
    };

    if let Some(buffer) = edit_buffer {
        state.input.edit_buffer = buffer;
        state.input.editing_field = idx;
        state.input.mode = InputMode::EditingField;
    }
}
