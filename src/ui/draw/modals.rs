//! Modal dialog rendering
//!
//! - Settings modal (API base URL + API key)
//! - Clear confirmation modal (history or stored results)

use crate::state::AppState;
use crate::types::{ClearTarget, SettingsField};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the settings modal (base URL + API key)
pub fn render_settings_modal(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let modal_width = (area.width as f32 * 0.7).min(90.0) as u16;
    let modal_height = 12;
    let modal_x = (area.width.saturating_sub(modal_width)) / 2;
    let modal_y = (area.height.saturating_sub(modal_height)) / 2;

    let modal_area = Rect {
        x: modal_x,
        y: modal_y,
        width: modal_width,
        height: modal_height,
    };

    // Clear the background behind the modal
    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .title(" Update Settings ")
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .style(Style::default().bg(Color::Rgb(30, 30, 30)).fg(Color::White));

    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Description
            Constraint::Length(1), // Base URL label
            Constraint::Length(1), // Base URL input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // API key label
            Constraint::Length(1), // API key input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Help
        ])
        .split(inner);

    let desc = Paragraph::new(
        "Changes apply to this session only; nothing is written to disk.\nUse Tab to switch fields, Ctrl+L to clear",
    )
    .style(Style::default().fg(Color::Gray))
    .wrap(Wrap { trim: true });
    frame.render_widget(desc, chunks[0]);

    let url_active = state.input.active_settings_field == SettingsField::BaseUrl;
    let key_active = state.input.active_settings_field == SettingsField::ApiKey;

    let url_label_text = if url_active {
        "► API Base URL:"
    } else {
        "  API Base URL:"
    };
    let url_label = Paragraph::new(url_label_text).style(Style::default().fg(if url_active {
        Color::Yellow
    } else {
        Color::LightCyan
    }));
    frame.render_widget(url_label, chunks[1]);

    let url_input = Paragraph::new(state.input.settings_url.clone()).style(
        Style::default()
            .fg(if url_active { Color::Yellow } else { Color::Gray })
            .add_modifier(if url_active {
                Modifier::BOLD
            } else {
                Modifier::empty()
            }),
    );
    frame.render_widget(url_input, chunks[2]);

    let key_label_text = if key_active {
        "► API Key:"
    } else {
        "  API Key:"
    };
    let key_label = Paragraph::new(key_label_text).style(Style::default().fg(if key_active {
        Color::Yellow
    } else {
        Color::LightCyan
    }));
    frame.render_widget(key_label, chunks[4]);

    // Show the full key while editing
    let key_input = Paragraph::new(state.input.settings_key.clone()).style(
        Style::default()
            .fg(if key_active { Color::Yellow } else { Color::Gray })
            .add_modifier(if key_active {
                Modifier::BOLD
            } else {
                Modifier::empty()
            }),
    );
    frame.render_widget(key_input, chunks[5]);

    let help =
        Paragraph::new("Tab: Switch fields  |  Ctrl+L: Clear field  |  Enter: Apply  |  Esc: Cancel")
            .style(Style::default().fg(Color::Rgb(150, 150, 150)))
            .alignment(Alignment::Center);
    frame.render_widget(help, chunks[7]);
}

/// Render the clear confirmation modal
pub fn render_clear_confirmation_modal(frame: &mut Frame, target: ClearTarget) {
    let area = frame.area();

    let modal_width = (area.width as f32 * 0.5).min(60.0) as u16;
    let modal_height = 7;
    let modal_x = (area.width.saturating_sub(modal_width)) / 2;
    let modal_y = (area.height.saturating_sub(modal_height)) / 2;

    let modal_area = Rect {
        x: modal_x,
        y: modal_y,
        width: modal_width,
        height: modal_height,
    };

    frame.render_widget(Clear, modal_area);

    let (title, message) = match target {
        ClearTarget::History => (
            " Clear History? ",
            "This will remove every request log entry from this session.",
        ),
        ClearTarget::Results => (
            " Clear Results? ",
            "This will remove every stored scenario result from this session.",
        ),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .style(Style::default().bg(Color::Rgb(30, 30, 30)).fg(Color::White));

    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let message = Paragraph::new(message)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(message, chunks[0]);

    let actions = Paragraph::new("[Y] Yes, clear it  |  [N] Cancel")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(actions, chunks[2]);
}
