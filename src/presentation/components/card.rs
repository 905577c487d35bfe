use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

use crate::{
    domain::FieldKind,
    form::{FieldState, FocusTarget, FormState},
};

use super::layout::centered_column;

const CARD_MAX_WIDTH: u16 = 72;
const SUBMIT_LABEL: &str = "Create Group";
const HIGHLIGHT_SYMBOL: &str = "» ";

/// The titled card with every visible control and the submit button.
pub fn render_card(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    form_state: &FormState,
    enable_cursor: bool,
) {
    let card_area = centered_column(area, CARD_MAX_WIDTH);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {title} "),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center);

    let content_width = card_area
        .width
        .saturating_sub(2 + HIGHLIGHT_SYMBOL.width() as u16);
    let focused = form_state.focused();
    let mut renders: Vec<FieldRender> = form_state
        .visible_fields()
        .map(|field| build_field_render(field, focused == FocusTarget::Field(field.id), content_width))
        .collect();
    renders.push(build_submit_render(focused == FocusTarget::Submit, content_width));

    let selected_index = form_state
        .focus_targets()
        .iter()
        .position(|target| *target == focused)
        .unwrap_or(0);
    let heights: Vec<usize> = renders.iter().map(|render| render.lines.len()).collect();
    let cursor_hint = renders
        .get(selected_index)
        .and_then(|render| render.cursor_hint);

    let items: Vec<ListItem<'static>> = renders
        .into_iter()
        .map(|render| ListItem::new(render.lines))
        .collect();
    let mut list_state = ListState::default();
    list_state.select(Some(selected_index));

    let list = List::new(items)
        .block(block)
        .highlight_symbol(HIGHLIGHT_SYMBOL);
    frame.render_stateful_widget(list, card_area, &mut list_state);

    if !enable_cursor {
        return;
    }
    if let Some(cursor) = cursor_hint {
        let lines_above: usize = heights
            .iter()
            .skip(list_state.offset())
            .take(selected_index.saturating_sub(list_state.offset()))
            .sum();
        let line = (lines_above + cursor.line_offset) as u16;
        if line >= card_area.height.saturating_sub(2) {
            return;
        }
        let cursor_y = card_area.y + 1 + line;
        let cursor_x = card_area
            .x
            .saturating_add(1)
            .saturating_add(HIGHLIGHT_SYMBOL.width() as u16)
            .saturating_add(cursor.column_offset)
            .saturating_add(cursor.value_width);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

pub(crate) struct FieldRender {
    pub(crate) lines: Vec<Line<'static>>,
    cursor_hint: Option<CursorHint>,
}

#[derive(Debug, Clone, Copy)]
struct CursorHint {
    line_offset: usize,
    column_offset: u16,
    value_width: u16,
}

pub(crate) fn build_field_render(field: &FieldState, is_selected: bool, max_width: u16) -> FieldRender {
    let mut lines = Vec::new();
    let label_style = if is_selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    };
    lines.push(Line::from(Span::styled(field.id.label(), label_style)));

    let inner_width = (max_width as usize).saturating_sub(4).max(4);
    let value_lines = value_lines(field, inner_width);
    let value_style = if field.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else if is_selected {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let mut cursor_hint = None;
    if is_selected {
        let box_width = value_lines
            .iter()
            .map(|line| line.width())
            .max()
            .unwrap_or(0)
            .max(inner_width.min(24));
        let border_style = Style::default().fg(Color::Yellow);
        let border_line = "─".repeat(box_width + 2);
        lines.push(Line::from(Span::styled(format!("┌{border_line}┐"), border_style)));
        for text in &value_lines {
            let padding = " ".repeat(box_width - text.width());
            lines.push(Line::from(vec![
                Span::styled("│ ", border_style),
                Span::styled(text.clone(), value_style),
                Span::raw(padding),
                Span::styled(" │", border_style),
            ]));
        }
        lines.push(Line::from(Span::styled(format!("└{border_line}┘"), border_style)));

        if field.kind() != FieldKind::Select {
            let last_width = if field.is_empty() {
                0
            } else {
                value_lines.last().map(|line| line.width()).unwrap_or(0)
            };
            cursor_hint = Some(CursorHint {
                line_offset: 1 + value_lines.len(),
                column_offset: 2,
                value_width: last_width as u16,
            });
        }
    } else {
        for text in &value_lines {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(text.clone(), value_style),
            ]));
        }
    }

    if let Some(error) = &field.error {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(error.clone(), Style::default().fg(Color::Red)),
        ]));
    }
    lines.push(Line::default());

    FieldRender { lines, cursor_hint }
}

fn build_submit_render(is_selected: bool, max_width: u16) -> FieldRender {
    let label = format!("[ {SUBMIT_LABEL} ]");
    let pad = (max_width as usize).saturating_sub(label.width()) / 2;
    let style = if is_selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    FieldRender {
        lines: vec![Line::from(vec![
            Span::raw(" ".repeat(pad)),
            Span::styled(label, style),
        ])],
        cursor_hint: None,
    }
}

/// Display text for a control, one entry per terminal line.
fn value_lines(field: &FieldState, width: usize) -> Vec<String> {
    if field.is_empty() {
        let placeholder = field.id.placeholder();
        return vec![with_select_marker(field, placeholder)];
    }
    match field.kind() {
        FieldKind::MultiLine => field
            .display_value()
            .split('\n')
            .flat_map(|line| {
                if line.is_empty() {
                    vec![String::new()]
                } else {
                    wrap(line, width)
                        .into_iter()
                        .map(|part| part.into_owned())
                        .collect::<Vec<_>>()
                }
            })
            .collect(),
        FieldKind::Select => vec![with_select_marker(field, field.display_value())],
        FieldKind::Text | FieldKind::File => vec![fit_tail(field.display_value(), width)],
    }
}

fn with_select_marker(field: &FieldState, text: &str) -> String {
    if field.kind() == FieldKind::Select {
        format!("{text} ▾")
    } else {
        text.to_string()
    }
}

/// Keep the end of a long value visible, marking the cut with an ellipsis.
fn fit_tail(value: &str, max_width: usize) -> String {
    if value.width() <= max_width {
        return value.to_string();
    }
    let mut kept: Vec<char> = Vec::new();
    let mut width = 1;
    for ch in value.chars().rev() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + ch_width > max_width {
            break;
        }
        width += ch_width;
        kept.push(ch);
    }
    std::iter::once('…').chain(kept.into_iter().rev()).collect()
}
