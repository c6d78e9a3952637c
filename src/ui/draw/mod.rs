//! Rendering
//!
//! One entry point, `render`, draws the whole frame from the current app
//! state: header, tab bar, the active scenario's form and response panels
//! (or the aggregate results view), a status line, the footer, and any
//! modal on top.

mod form;
mod modals;
mod response;
mod results;
pub mod styling;

pub use response::response_body_text;

use crate::state::AppState;
use crate::types::{InputMode, Scenario, StatusLevel};
use crate::utils::mask_key;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, state: &AppState) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(1), // Tab bar
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Status line
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_header(frame, main_chunks[0], state);
    render_tab_bar(frame, main_chunks[1], state);

    if state.ui.active == Scenario::Results {
        results::render_results(frame, main_chunks[2], state);
    } else {
        let body_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(main_chunks[2]);

        form::render_form_panel(frame, body_chunks[0], state);
        response::render_response_panel(frame, body_chunks[1], state);
    }

    render_status_line(frame, main_chunks[3], state);
    render_footer(frame, main_chunks[4], state);

    // Modals render last, on top of everything else
    match state.input.mode {
        InputMode::Settings => modals::render_settings_modal(frame, state),
        InputMode::ConfirmClear(target) => modals::render_clear_confirmation_modal(frame, target),
        InputMode::Normal | InputMode::EditingField => {}
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let health = match state.health {
        None => Span::styled("health: ?", Style::default().fg(Color::DarkGray)),
        Some(true) => Span::styled("health: ok", Style::default().fg(Color::Green)),
        Some(false) => Span::styled("health: down", Style::default().fg(Color::Red)),
    };

    let line = Line::from(vec![
        Span::styled(
            "AI Worker API Console",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::raw(state.session.config.base_url.clone()),
        Span::raw("  key: "),
        Span::styled(
            mask_key(&state.session.config.api_key),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("  "),
        health,
    ]);

    let header = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn render_tab_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = Vec::new();
    for (idx, scenario) in Scenario::ALL.iter().enumerate() {
        let style = if *scenario == state.ui.active {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled("[ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            format!("{} {}", idx + 1, scenario.title()),
            style,
        ));
        spans.push(Span::styled(" ]", Style::default().fg(Color::DarkGray)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_status_line(frame: &mut Frame, area: Rect, state: &AppState) {
    if state.ui.dispatching {
        let line = Paragraph::new("Dispatching request, please wait...")
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
        frame.render_widget(line, area);
        return;
    }

    if let Some(status) = &state.ui.status {
        let prefix = match status.level {
            StatusLevel::Success => "✓ ",
            StatusLevel::Warning => "⚠ ",
            StatusLevel::Error => "✗ ",
            StatusLevel::Info => "",
        };
        let line = Paragraph::new(format!("{}{}", prefix, status.text))
            .style(Style::default().fg(styling::status_color(status.level)));
        frame.render_widget(line, area);
    }
}

fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let footer_text = match state.input.mode {
        InputMode::EditingField => "Enter: Save  |  Ctrl+L: Clear  |  Esc: Cancel",
        InputMode::Settings => "Tab: Switch field  |  Enter: Apply  |  Esc: Cancel",
        InputMode::ConfirmClear(_) => "[Y] Yes, clear  |  [N] Cancel",
        InputMode::Normal => {
            if state.ui.active == Scenario::Results {
                "1-6/Tab: Tabs | e: Export | x: Clear results | c: Clear history | h: Health | q: Quit"
            } else {
                "↑↓: Fields | Enter: Edit/Toggle | r: Run | ←→: Panel | y: Yank | s: Save image | g: Sample | u: Settings | h: Health | q: Quit"
            }
        }
    };

    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title("Commands"));
    frame.render_widget(footer, area);
}
