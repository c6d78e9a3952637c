//! Scenario execution and result side effects
//!
//! `run_scenario` and `run_health` are the only async entry points in the
//! interface; the run loop awaits them inline, so one operator action fully
//! completes before the next key is processed. The rest are synchronous
//! affordances over the last response and the session stores.

use crate::dispatch::{dispatch, Outcome};
use crate::scenario;
use crate::state::{AppState, LastResponse};
use crate::types::{Scenario, StatusMessage};
use crate::ui::draw::response_body_text;
use arboard::Clipboard;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::{json, Value};

/// Validate, build and dispatch the active scenario's request. A validation
/// or file-read failure is a local warning: nothing is sent and history is
/// untouched.
pub async fn run_scenario(state: &mut AppState, client: &reqwest::Client, scenario: Scenario) {
    let built = match state.forms.get(scenario) {
        Some(form) => form.build(),
        None => return,
    };

    let spec = match built {
        Ok(spec) => spec,
        Err(message) => {
            tracing::warn!(%scenario, %message, "scenario not dispatched");
            state.set_status(StatusMessage::warning(message));
            return;
        }
    };

    let result = dispatch(client, &mut state.session, spec).await;

    if result.success {
        state
            .session
            .store_result(scenario, stored_value(&result.outcome));
        state.set_status(StatusMessage::success(format!(
            "Request successful (Status: {}, Time: {:.2}s)",
            result.status_code.unwrap_or(0),
            result.response_time.unwrap_or(0.0)
        )));
    } else if let Outcome::Failed { message, .. } = &result.outcome {
        state.set_status(StatusMessage::error(message.clone()));
    }

    state.ui.response_scroll = 0;
    state.ui.show_error_detail = false;
    state.last = Some(LastResponse { scenario, result });
}

/// Probe `/health`; the outcome lands in the header and the request log.
pub async fn run_health(state: &mut AppState, client: &reqwest::Client) {
    tracing::info!("user initiated health check");
    let result = dispatch(client, &mut state.session, scenario::health_request()).await;

    state.health = Some(result.success);
    if result.success {
        state.set_status(StatusMessage::success("API is healthy"));
    } else {
        state.set_status(StatusMessage::error("API is not responding"));
    }
}

/// Raw image bytes cannot live in a JSON result bag; store a JSON-safe
/// summary so the export stays serializable and round-trips.
fn stored_value(outcome: &Outcome) -> Value {
    match outcome {
        Outcome::Structured(value) => value.clone(),
        Outcome::Text(text) => Value::String(text.clone()),
        Outcome::Binary {
            bytes,
            content_type,
        } => json!({
            "content_type": content_type,
            "size": bytes.len(),
            "bytes_base64": STANDARD.encode(bytes),
        }),
        Outcome::Failed { .. } => Value::Null,
    }
}

/// Write the last binary response to disk as `localized_<locale>.<ext>`.
pub fn save_image(state: &mut AppState) {
    let Some(last) = &state.last else {
        state.set_status(StatusMessage::info("No image response to save"));
        return;
    };
    let Outcome::Binary {
        bytes,
        content_type,
    } = &last.result.outcome
    else {
        state.set_status(StatusMessage::info("No image response to save"));
        return;
    };

    let extension = content_type
        .strip_prefix("image/")
        .and_then(|rest| rest.split(';').next())
        .filter(|ext| !ext.is_empty())
        .unwrap_or("png");

    let locale = state.forms.localization.target_locale.trim().to_lowercase();
    let stem = if locale.is_empty() {
        "localized".to_string()
    } else {
        format!("localized_{}", locale.replace(' ', "_"))
    };
    let filename = format!("{}.{}", stem, extension);

    match std::fs::write(&filename, bytes) {
        Ok(()) => {
            tracing::info!(%filename, "saved generated image");
            state.set_status(StatusMessage::success(format!("Image saved to {}", filename)));
        }
        Err(e) => state.set_status(StatusMessage::error(format!(
            "Could not save {}: {}",
            filename, e
        ))),
    }
}

/// Serialize the named-result bag to a timestamped JSON file.
pub fn export_results(state: &mut AppState) {
    if state.session.results().is_empty() {
        state.set_status(StatusMessage::info("No results to export"));
        return;
    }

    let exported = state.session.export_results();
    let text = match serde_json::to_string_pretty(&exported) {
        Ok(text) => text,
        Err(e) => {
            state.set_status(StatusMessage::error(format!("Export failed: {}", e)));
            return;
        }
    };

    let filename = format!(
        "test_results_{}.json",
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    );
    match std::fs::write(&filename, text) {
        Ok(()) => {
            tracing::info!(%filename, "user exported all test results");
            state.set_status(StatusMessage::success(format!("Results exported to {}", filename)));
        }
        Err(e) => state.set_status(StatusMessage::error(format!(
            "Could not write {}: {}",
            filename, e
        ))),
    }
}

/// Write the sample DOMX document next to the binary for quick testing.
pub fn write_sample(state: &mut AppState) {
    let sample = scenario::sample_domx();
    let text = serde_json::to_string_pretty(&sample).unwrap_or_else(|_| sample.to_string());

    match std::fs::write("sample_domx.json", text) {
        Ok(()) => {
            tracing::info!("generated sample DOMX JSON");
            state.set_status(StatusMessage::success("Sample written to sample_domx.json"));
        }
        Err(e) => state.set_status(StatusMessage::error(format!(
            "Could not write sample_domx.json: {}",
            e
        ))),
    }
}

/// Copy the rendered response body to the system clipboard.
pub fn yank_response(state: &mut AppState) {
    let Some(text) = response_body_text(state) else {
        state.set_status(StatusMessage::info("No response to copy"));
        return;
    };

    match Clipboard::new() {
        Ok(mut clipboard) => match clipboard.set_text(text) {
            Ok(()) => state.set_status(StatusMessage::success("Response copied to clipboard")),
            Err(e) => state.set_status(StatusMessage::error(format!("Clipboard error: {}", e))),
        },
        Err(e) => state.set_status(StatusMessage::error(format!("Clipboard unavailable: {}", e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::test_support::fixture;
    use crate::session::{Session, SessionConfig};
    use crate::types::StatusLevel;
    use base64::Engine;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn state_with_base_url(base_url: String) -> AppState {
        AppState::new(Session::new(SessionConfig {
            base_url,
            api_key: String::new(),
        }))
    }

    #[tokio::test]
    async fn test_invalid_input_dispatches_nothing_and_keeps_history() {
        let client = reqwest::Client::new();
        // Unreachable on purpose: nothing should be sent at all
        let mut state = state_with_base_url("http://127.0.0.1:1".to_string());

        run_scenario(&mut state, &client, Scenario::ResolveMulti).await;

        assert!(state.session.history().is_empty());
        assert!(state.last.is_none());
        let status = state.ui.status.expect("warning status");
        assert_eq!(status.level, StatusLevel::Warning);
        assert!(status.text.contains("JSON file"));
    }

    #[tokio::test]
    async fn test_successful_run_stores_named_result_and_history() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/translate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "translated_json": "[{\"id\":\"node1\",\"text\":\"Bienvenido\"}]"
            })))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let mut state = state_with_base_url(server.uri());
        let doc = fixture("exec-translate.json", br#"{"nodes":{}}"#);
        state.forms.translate_single.json_path = doc.display().to_string();

        run_scenario(&mut state, &client, Scenario::TranslateSingle).await;

        assert_eq!(state.session.history().len(), 1);
        assert!(state.session.history()[0].success);

        let stored = state
            .session
            .result(Scenario::TranslateSingle)
            .expect("named result");
        assert_eq!(
            stored["translated_json"],
            "[{\"id\":\"node1\",\"text\":\"Bienvenido\"}]"
        );

        let last = state.last.expect("last response");
        assert_eq!(last.scenario, Scenario::TranslateSingle);
        assert!(last.result.success);
    }

    #[tokio::test]
    async fn test_failed_run_records_history_but_no_named_result() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/translate"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let mut state = state_with_base_url(server.uri());
        let doc = fixture("exec-translate-fail.json", br#"{"nodes":{}}"#);
        state.forms.translate_single.json_path = doc.display().to_string();

        run_scenario(&mut state, &client, Scenario::TranslateSingle).await;

        assert_eq!(state.session.history().len(), 1);
        assert!(!state.session.history()[0].success);
        assert!(state.session.result(Scenario::TranslateSingle).is_none());
        assert_eq!(
            state.ui.status.as_ref().map(|s| s.level),
            Some(StatusLevel::Error)
        );
    }

    #[tokio::test]
    async fn test_health_check_updates_header_flag() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let mut state = state_with_base_url(server.uri());

        run_health(&mut state, &client).await;
        assert_eq!(state.health, Some(true));
        assert_eq!(state.session.history().len(), 1);

        let mut down = state_with_base_url("http://127.0.0.1:1".to_string());
        run_health(&mut down, &client).await;
        assert_eq!(down.health, Some(false));
    }

    #[test]
    fn test_stored_value_binary_round_trips_through_json() {
        let outcome = Outcome::Binary {
            bytes: vec![1, 2, 3, 4],
            content_type: "image/png".to_string(),
        };
        let value = stored_value(&outcome);

        let text = serde_json::to_string(&value).unwrap();
        let back: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(back["content_type"], "image/png");
        assert_eq!(back["size"], 4);
        assert_eq!(
            STANDARD.decode(back["bytes_base64"].as_str().unwrap()).unwrap(),
            vec![1, 2, 3, 4]
        );
    }
}
