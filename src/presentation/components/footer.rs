use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::super::view::UiContext;

/// Key help on top, status underneath.
pub fn render_footer(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let [help_area, status_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Length(2)]).areas(area);

    if let Some(help) = ctx.help {
        let help_line = Line::from(vec![
            Span::styled("Keys ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(help, Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(help_line).wrap(Wrap { trim: true }), help_area);
    }

    frame.render_widget(
        Paragraph::new(status_line(ctx)).wrap(Wrap { trim: true }),
        status_area,
    );
}

fn status_line(ctx: &UiContext<'_>) -> Line<'static> {
    let mut spans = vec![if ctx.error_count > 0 {
        Span::styled(
            format!(" {} to fix ", ctx.error_count),
            Style::default().fg(Color::White).bg(Color::Red),
        )
    } else {
        Span::styled(" ok ", Style::default().fg(Color::Black).bg(Color::Green))
    }];
    spans.push(Span::raw(" "));
    spans.push(Span::raw(ctx.status_message.to_string()));
    if ctx.dirty {
        spans.push(Span::styled(
            " (unsubmitted changes)",
            Style::default().fg(Color::Yellow),
        ));
    }
    if let Some(first) = ctx.global_errors.first() {
        spans.push(Span::styled(
            format!(" {first}"),
            Style::default().fg(Color::Red),
        ));
    }
    Line::from(spans)
}
