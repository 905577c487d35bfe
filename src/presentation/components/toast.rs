use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::app::{ToastLevel, Toasts};

const TOAST_HEIGHT: u16 = 3;

/// Stack toasts upward from the lower right corner of `area`, newest at the bottom.
pub fn render_toasts(frame: &mut Frame<'_>, area: Rect, toasts: &Toasts) {
    let mut bottom = area.bottom();
    for toast in toasts.visible() {
        if bottom < area.y + TOAST_HEIGHT {
            break;
        }
        let width = (toast.message.width() as u16 + 4).min(area.width);
        let rect = Rect {
            x: area.right().saturating_sub(width + 1).max(area.x),
            y: bottom - TOAST_HEIGHT,
            width,
            height: TOAST_HEIGHT,
        };
        let color = match toast.level {
            ToastLevel::Success => Color::Green,
            ToastLevel::Info => Color::Cyan,
        };
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(toast.message.as_str())
                .style(Style::default().fg(color))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .padding(Padding::horizontal(1))
                        .border_style(Style::default().fg(color)),
                ),
            rect,
        );
        bottom -= TOAST_HEIGHT;
    }
}
