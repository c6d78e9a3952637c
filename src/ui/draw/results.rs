//! Aggregate results view
//!
//! Renders everything the session has accumulated: request statistics, a
//! response-time sparkline, the named result per scenario, and the full
//! request history, newest first.

use crate::state::AppState;
use crate::utils::excerpt;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Sparkline},
    Frame,
};

pub fn render_results(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Statistics
            Constraint::Length(4), // Response time sparkline
            Constraint::Percentage(40), // Named results
            Constraint::Min(0),    // History
        ])
        .split(area);

    render_stats(frame, chunks[0], state);
    render_sparkline(frame, chunks[1], state);
    render_named_results(frame, chunks[2], state);
    render_history(frame, chunks[3], state);
}

fn render_stats(frame: &mut Frame, area: Rect, state: &AppState) {
    let stats = state.session.stats();
    let text = format!(
        "Total requests: {}    Success rate: {:.1}%    Avg response time: {:.2}s",
        stats.total, stats.success_rate, stats.avg_response_time
    );

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::White))
        .block(Block::default().borders(Borders::ALL).title("Statistics"));
    frame.render_widget(paragraph, area);
}

fn render_sparkline(frame: &mut Frame, area: Rect, state: &AppState) {
    let data: Vec<u64> = state
        .session
        .history()
        .iter()
        .filter(|e| e.success)
        .filter_map(|e| e.response_time)
        .map(|t| (t * 1000.0) as u64)
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Response time (ms, successful requests)");

    if data.is_empty() {
        let empty = Paragraph::new("No successful requests yet")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let sparkline = Sparkline::default()
        .block(block)
        .style(Style::default().fg(Color::Cyan))
        .data(&data);
    frame.render_widget(sparkline, area);
}

fn render_named_results(frame: &mut Frame, area: Rect, state: &AppState) {
    let results = state.session.results();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Stored results ({})", results.len()));

    if results.is_empty() {
        let empty = Paragraph::new("No test results yet. Run some scenarios to see results here.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = results
        .iter()
        .map(|(scenario, value)| {
            let preview = excerpt(&value.to_string(), 120);
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:20}", scenario.title()),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(preview, Style::default().fg(Color::Gray)),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn render_history(frame: &mut Frame, area: Rect, state: &AppState) {
    let history = state.session.history();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Request history ({}, newest first)", history.len()));

    if history.is_empty() {
        let empty = Paragraph::new("No requests yet")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = history
        .iter()
        .rev()
        .skip(state.ui.results_scroll as usize)
        .map(|entry| {
            let (flag, flag_color) = if entry.success {
                ("ok", Color::Green)
            } else {
                ("fail", Color::Red)
            };
            let status = entry
                .status_code
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".to_string());
            let elapsed = entry
                .response_time
                .map(|t| format!("{:.2}s", t))
                .unwrap_or_else(|| "-".to_string());

            ListItem::new(Line::from(vec![
                Span::styled(
                    entry.timestamp.format("%H:%M:%S ").to_string(),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(format!("{:5}", entry.method), Style::default().fg(Color::Blue)),
                Span::raw(format!("{:40}", entry.endpoint)),
                Span::raw(format!("{:>4} ", status)),
                Span::styled(format!("{:4} ", flag), Style::default().fg(flag_color)),
                Span::raw(elapsed),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
