//! Scenario form rendering
//!
//! The left panel: one line per field of the active scenario's form, with
//! the selected field highlighted and the inline edit buffer shown while
//! editing.

use super::styling;
use crate::scenario::{FieldKind, FieldSpec};
use crate::state::AppState;
use crate::types::{InputMode, PanelFocus};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub fn render_form_panel(frame: &mut Frame, area: Rect, state: &AppState) {
    let border_color = if state.ui.focus == PanelFocus::Form {
        styling::focused_border()
    } else {
        styling::unfocused_border()
    };

    let Some(form) = state.forms.get(state.ui.active) else {
        return;
    };

    let selected = state.selected_field();
    let editing = state.input.mode == InputMode::EditingField;

    let items: Vec<ListItem> = form
        .fields()
        .iter()
        .enumerate()
        .map(|(idx, field)| field_line(state, field, idx, selected, editing))
        .map(ListItem::new)
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(format!("[1] {}", state.ui.active.title()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );

    frame.render_widget(list, area);
}

fn field_line<'a>(
    state: &AppState,
    field: &FieldSpec,
    idx: usize,
    selected: usize,
    editing: bool,
) -> Line<'a> {
    let is_selected = idx == selected;
    let marker = if is_selected { ">> " } else { "   " };

    let label_style = if is_selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    match field.kind {
        FieldKind::Toggle => Line::from(vec![
            Span::raw(marker),
            Span::styled(format!("{} ", field.value), Style::default().fg(Color::Green)),
            Span::styled(field.label.to_string(), label_style),
        ]),
        FieldKind::Text => {
            // While editing the selected field, show the live buffer instead
            // of the committed value.
            let value = if is_selected && editing {
                format!("{}█", state.input.edit_buffer)
            } else if field.value.is_empty() {
                "·".to_string()
            } else {
                field.value.clone()
            };

            let value_style = if is_selected && editing {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };

            Line::from(vec![
                Span::raw(marker),
                Span::styled(format!("{}: ", field.label), label_style),
                Span::styled(value, value_style),
            ])
        }
    }
}
