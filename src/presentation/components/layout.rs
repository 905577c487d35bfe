use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Rectangle of at most `width` x `height`, centered inside `area`.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height.min(area.height)),
            Constraint::Min(0),
        ])
        .split(area);
    let inner = vertical[1];
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(inner.width.saturating_sub(width) / 2),
            Constraint::Length(width.min(inner.width)),
            Constraint::Min(0),
        ])
        .split(inner);
    horizontal[1]
}

/// Full-height column of at most `width`, centered horizontally.
pub fn centered_column(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_is_centered_and_clamped() {
        let area = Rect::new(0, 0, 100, 20);
        assert_eq!(centered_column(area, 72), Rect::new(14, 0, 72, 20));
        assert_eq!(centered_column(Rect::new(0, 0, 40, 5), 72), Rect::new(0, 0, 40, 5));
    }

    #[test]
    fn rect_fits_inside_small_areas() {
        let rect = centered_rect(Rect::new(0, 0, 10, 4), 30, 12);
        assert!(rect.width <= 10 && rect.height <= 4);
    }
}
