use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::{app::Toasts, form::FormState};

use super::components::{render_card, render_footer, render_popup, render_toasts};

pub struct UiContext<'a> {
    pub title: &'a str,
    pub form_state: &'a FormState,
    pub status_message: &'a str,
    pub dirty: bool,
    pub error_count: usize,
    pub help: Option<&'a str>,
    pub global_errors: &'a [String],
    pub popup: Option<PopupRender<'a>>,
    pub toasts: &'a Toasts,
}

pub struct PopupRender<'a> {
    pub title: &'a str,
    pub options: &'a [String],
    pub selected: usize,
}

pub fn draw(frame: &mut Frame<'_>, ctx: UiContext<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(7), Constraint::Length(4)])
        .split(frame.area());

    let cursor_enabled = ctx.popup.is_none();
    render_card(frame, chunks[0], ctx.title, ctx.form_state, cursor_enabled);
    render_footer(frame, chunks[1], &ctx);
    render_toasts(frame, chunks[0], ctx.toasts);

    if let Some(popup) = ctx.popup {
        render_popup(frame, popup);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::{app::SUCCESS_MESSAGE, domain::FieldId, schema::GroupSchema};

    fn render(form_state: &FormState, toasts: &Toasts, popup: Option<PopupRender<'_>>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 48)).expect("terminal");
        terminal
            .draw(|frame| {
                draw(
                    frame,
                    UiContext {
                        title: "Create a Facebook Group",
                        form_state,
                        status_message: "Ready",
                        dirty: form_state.is_dirty(),
                        error_count: form_state.error_count(),
                        help: Some("Ctrl+S submit"),
                        global_errors: &[],
                        popup,
                        toasts,
                    },
                )
            })
            .expect("draw");
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn no_toasts() -> Toasts {
        Toasts::new(Duration::from_secs(4))
    }

    #[test]
    fn card_shows_title_labels_and_button() {
        let screen = render(&FormState::new(), &no_toasts(), None);
        assert!(screen.contains("Create a Facebook Group"));
        for id in FieldId::ALL {
            if id == FieldId::OtherGroupType {
                assert!(!screen.contains(id.label()), "hidden label drawn");
            } else {
                assert!(screen.contains(id.label()), "missing {}", id.label());
                assert!(screen.contains(id.placeholder()), "missing placeholder");
            }
        }
        assert!(screen.contains("[ Create Group ]"));
        assert!(screen.contains("Keys Ctrl+S submit"));
    }

    #[test]
    fn other_label_appears_with_sentinel() {
        let mut state = FormState::new();
        state.select_group_type("Other").expect("label");
        let screen = render(&state, &no_toasts(), None);
        assert!(screen.contains("Specify Other Group Type"));

        state.select_group_type("Business").expect("label");
        let screen = render(&state, &no_toasts(), None);
        assert!(!screen.contains("Specify Other Group Type"));
    }

    #[test]
    fn inline_errors_and_toasts_are_drawn() {
        let schema = GroupSchema::new().expect("schema");
        let mut state = FormState::new();
        let errors = schema
            .validate(&state.candidate_value())
            .expect_err("empty form");
        state.apply_errors(&errors);
        let mut toasts = no_toasts();
        toasts.success(SUCCESS_MESSAGE);
        let screen = render(&state, &toasts, None);
        assert!(screen.contains("Group name is required"));
        assert!(screen.contains("Group type is required"));
        assert!(screen.contains(SUCCESS_MESSAGE));
        assert!(screen.contains(" 2 to fix "));
    }

    #[test]
    fn popup_lists_every_group_type() {
        let state = FormState::new();
        let options: Vec<String> = crate::domain::GROUP_TYPES
            .iter()
            .map(|label| label.to_string())
            .collect();
        let popup = PopupRender {
            title: "Group Type",
            options: &options,
            selected: 0,
        };
        let screen = render(&state, &no_toasts(), Some(popup));
        for label in crate::domain::GROUP_TYPES {
            assert!(screen.contains(label), "missing {label}");
        }
    }
}
