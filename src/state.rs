//! Application state
//!
//! Everything the draw and event layers operate on: the session store, the
//! per-scenario form inputs, UI navigation state, and modal input buffers.
//! Plain owned data: one operator action fully completes before the next is
//! accepted, so no locking is involved anywhere.

use crate::dispatch::DispatchResult;
use crate::scenario::ScenarioForms;
use crate::session::Session;
use crate::types::{InputMode, PanelFocus, Scenario, SettingsField, StatusMessage};

/// The most recent dispatcher outcome, kept alongside the scenario that
/// produced it so the renderer can apply scenario-specific views.
#[derive(Debug)]
pub struct LastResponse {
    pub scenario: Scenario,
    pub result: DispatchResult,
}

#[derive(Debug)]
pub struct UiState {
    pub active: Scenario,
    pub focus: PanelFocus,
    /// Selected field per dispatchable scenario, indexed by
    /// `Scenario::form_index`.
    pub selected_field: [usize; 5],
    pub response_scroll: u16,
    pub results_scroll: u16,
    /// Expand the diagnostic body of a failed response.
    pub show_error_detail: bool,
    pub status: Option<StatusMessage>,
    /// True while a dispatch is in flight, for the one frame drawn before
    /// the interface blocks on it.
    pub dispatching: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            active: Scenario::ResolveMulti,
            focus: PanelFocus::Form,
            selected_field: [0; 5],
            response_scroll: 0,
            results_scroll: 0,
            show_error_detail: false,
            status: None,
            dispatching: false,
        }
    }
}

#[derive(Debug)]
pub struct InputState {
    pub mode: InputMode,
    /// Inline field editing buffer.
    pub edit_buffer: String,
    pub editing_field: usize,
    /// Settings modal buffers.
    pub settings_url: String,
    pub settings_key: String,
    pub active_settings_field: SettingsField,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            mode: InputMode::Normal,
            edit_buffer: String::new(),
            editing_field: 0,
            settings_url: String::new(),
            settings_key: String::new(),
            active_settings_field: SettingsField::BaseUrl,
        }
    }
}

#[derive(Debug)]
pub struct AppState {
    pub session: Session,
    pub forms: ScenarioForms,
    pub ui: UiState,
    pub input: InputState,
    pub last: Option<LastResponse>,
    /// Outcome of the most recent health probe, `None` until one runs.
    pub health: Option<bool>,
}

impl AppState {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            forms: ScenarioForms::default(),
            ui: UiState::default(),
            input: InputState::default(),
            last: None,
            health: None,
        }
    }

    /// Selected field index on the active scenario's form (0 when the active
    /// tab has no form).
    pub fn selected_field(&self) -> usize {
        self.ui
            .active
            .form_index()
            .map(|idx| self.ui.selected_field[idx])
            .unwrap_or(0)
    }

    pub fn set_selected_field(&mut self, value: usize) {
        if let Some(idx) = self.ui.active.form_index() {
            self.ui.selected_field[idx] = value;
        }
    }

    /// Number of fields on the active scenario's form.
    pub fn active_field_count(&self) -> usize {
        self.forms
            .get(self.ui.active)
            .map(|form| form.fields().len())
            .unwrap_or(0)
    }

    pub fn set_status(&mut self, status: StatusMessage) {
        self.ui.status = Some(status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionConfig;

    fn test_state() -> AppState {
        AppState::new(Session::new(SessionConfig {
            base_url: "http://localhost:8000".to_string(),
            api_key: String::new(),
        }))
    }

    #[test]
    fn test_selected_field_tracks_per_scenario() {
        let mut state = test_state();
        state.ui.active = Scenario::TranslateMulti;
        state.set_selected_field(4);
        assert_eq!(state.selected_field(), 4);

        state.ui.active = Scenario::ResolveMulti;
        assert_eq!(state.selected_field(), 0);
    }

    #[test]
    fn test_results_tab_has_no_fields() {
        let mut state = test_state();
        state.ui.active = Scenario::Results;
        assert_eq!(state.active_field_count(), 0);
        // Setting the field is a no-op rather than a panic
        state.set_selected_field(3);
        assert_eq!(state.selected_field(), 0);
    }

    #[test]
    fn test_active_field_count_matches_forms() {
        let mut state = test_state();
        state.ui.active = Scenario::ResolveUpload;
        assert_eq!(state.active_field_count(), 2);
        state.ui.active = Scenario::TranslateMulti;
        assert_eq!(state.active_field_count(), 12);
    }
}
