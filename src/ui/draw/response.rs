//! Response rendering
//!
//! The right panel: a status line plus a body whose shape follows the
//! dispatcher's outcome variant. Structured bodies get a scenario-specific
//! view ahead of the raw JSON; binary bodies get a summary with a
//! save-to-disk affordance; failures get an expandable diagnostic excerpt.

use super::styling;
use crate::dispatch::Outcome;
use crate::scenario;
use crate::state::AppState;
use crate::types::PanelFocus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render_response_panel(frame: &mut Frame, area: Rect, state: &AppState) {
    let border_color = if state.ui.focus == PanelFocus::Response {
        styling::focused_border()
    } else {
        styling::unfocused_border()
    };

    let block = Block::default()
        .title("[2] Response")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(last) = &state.last else {
        let empty = Paragraph::new("No request sent yet.\n\nPress r to run this scenario.")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    };

    let result = &last.result;
    let status_line = if result.success {
        let status = result.status_code.unwrap_or(0);
        let elapsed = result.response_time.unwrap_or(0.0);
        format!("✓ HTTP {} in {:.2}s · {}", status, elapsed, last.scenario)
    } else {
        match result.status_code {
            Some(status) => format!("✗ Failed (HTTP {}) · {}", status, last.scenario),
            None => format!("✗ Failed · {}", last.scenario),
        }
    };
    let status_style = if result.success {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    frame.render_widget(Paragraph::new(status_line).style(status_style), chunks[0]);

    let body = response_body_text(state).unwrap_or_default();
    let paragraph = Paragraph::new(body)
        .wrap(Wrap { trim: false })
        .scroll((state.ui.response_scroll, 0));
    frame.render_widget(paragraph, chunks[1]);
}

/// The textual body of the current response, shared by the renderer and the
/// clipboard yank.
pub fn response_body_text(state: &AppState) -> Option<String> {
    let last = state.last.as_ref()?;

    let text = match &last.result.outcome {
        Outcome::Binary {
            bytes,
            content_type,
        } => format!(
            "Binary image response\n\ncontent type: {}\nsize: {} bytes\n\nPress s to save the image to disk.",
            content_type,
            bytes.len()
        ),
        Outcome::Structured(value) => {
            let raw =
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
            match scenario::response_lines(last.scenario, value) {
                Some(lines) => {
                    format!("{}\n\n── raw response ──\n{}", lines.join("\n"), raw)
                }
                None => raw,
            }
        }
        Outcome::Text(text) => text.clone(),
        Outcome::Failed {
            message,
            body_excerpt,
        } => match body_excerpt {
            Some(excerpt) if state.ui.show_error_detail => {
                format!("{}\n\n── error details ──\n{}", message, excerpt)
            }
            Some(_) => format!("{}\n\nPress d to expand error details.", message),
            None => message.clone(),
        },
    };

    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::DispatchResult;
    use crate::session::{Session, SessionConfig};
    use crate::state::LastResponse;
    use crate::types::Scenario;
    use serde_json::json;

    fn state_with(scenario: Scenario, outcome: Outcome, success: bool) -> AppState {
        let mut state = AppState::new(Session::new(SessionConfig {
            base_url: "http://localhost:8000".to_string(),
            api_key: String::new(),
        }));
        state.last = Some(LastResponse {
            scenario,
            result: DispatchResult {
                success,
                status_code: Some(if success { 200 } else { 500 }),
                response_time: Some(0.2),
                outcome,
            },
        });
        state
    }

    #[test]
    fn test_translated_nodes_surface_in_body_text() {
        let state = state_with(
            Scenario::TranslateSingle,
            Outcome::Structured(json!({
                "translated_json": "[{\"id\":\"node1\",\"text\":\"Bienvenido\"}]"
            })),
            true,
        );

        let body = response_body_text(&state).unwrap();
        assert!(body.contains("Node node1: Bienvenido"));
        assert!(body.contains("── raw response ──"));
    }

    #[test]
    fn test_binary_body_reports_size_and_type() {
        let state = state_with(
            Scenario::ImageLocalization,
            Outcome::Binary {
                bytes: vec![0; 42],
                content_type: "image/png".to_string(),
            },
            true,
        );

        let body = response_body_text(&state).unwrap();
        assert!(body.contains("image/png"));
        assert!(body.contains("42 bytes"));
    }

    #[test]
    fn test_text_body_is_verbatim() {
        let state = state_with(
            Scenario::ResolveUpload,
            Outcome::Text("plain response".to_string()),
            true,
        );
        assert_eq!(response_body_text(&state).unwrap(), "plain response");
    }

    #[test]
    fn test_failure_excerpt_is_gated_by_detail_toggle() {
        let mut state = state_with(
            Scenario::ResolveUpload,
            Outcome::Failed {
                message: "HTTP 500 for /v1/tags/resolve/upload".to_string(),
                body_excerpt: Some("worker exploded".to_string()),
            },
            false,
        );

        let collapsed = response_body_text(&state).unwrap();
        assert!(!collapsed.contains("worker exploded"));
        assert!(collapsed.contains("Press d"));

        state.ui.show_error_detail = true;
        let expanded = response_body_text(&state).unwrap();
        assert!(expanded.contains("worker exploded"));
    }

    #[test]
    fn test_no_response_yields_none() {
        let state = AppState::new(Session::new(SessionConfig {
            base_url: "http://localhost:8000".to_string(),
            api_key: String::new(),
        }));
        assert!(response_body_text(&state).is_none());
    }
}
