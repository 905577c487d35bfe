use std::time::Instant;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::Rect;

use crate::{
    domain::{FieldKind, GroupDraft},
    form::{FocusTarget, FormCommand},
    presentation::{self, UiContext},
};

use super::{
    controller::{FormController, SubmitOutcome},
    input::{HELP_TEXT, KeyCommand, classify},
    options::UiOptions,
    popup::PopupState,
    status::{Status, StatusLine},
    terminal::TerminalGuard,
};

pub(crate) struct App {
    controller: FormController,
    title: String,
    options: UiOptions,
    status: StatusLine,
    exit_armed: bool,
    should_quit: bool,
    popup: Option<PopupState>,
}

impl App {
    pub fn new(controller: FormController, title: String, options: UiOptions) -> Self {
        Self {
            controller,
            title,
            options,
            status: StatusLine::new(),
            exit_armed: false,
            should_quit: false,
            popup: None,
        }
    }

    /// Drive the form until the user quits. Returns the drafts submitted on the way.
    pub fn run(mut self) -> Result<Vec<GroupDraft>> {
        let mut terminal = TerminalGuard::new(&self.title)?;
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if !event::poll(self.options.tick_rate)? {
                self.controller.toasts_mut().expire(Instant::now());
                continue;
            }
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Resize(width, height) => {
                    terminal.resize(Rect::new(0, 0, width, height))?;
                }
                Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
            }
            self.controller.toasts_mut().expire(Instant::now());
        }
        drop(terminal);
        Ok(self.controller.into_submissions())
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let form = self.controller.form();
        presentation::draw(
            frame,
            UiContext {
                title: &self.title,
                form_state: form,
                status_message: self.status.message(),
                dirty: form.is_dirty(),
                error_count: form.error_count(),
                help: self.options.show_help.then_some(HELP_TEXT),
                global_errors: self.controller.global_errors(),
                popup: self.popup.as_ref().map(PopupState::as_render),
                toasts: self.controller.toasts(),
            },
        );
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.handle_popup_key(key) {
            return;
        }

        match classify(&key) {
            KeyCommand::Submit => self.on_submit(),
            KeyCommand::Quit => self.on_exit(),
            KeyCommand::NextField => {
                self.controller.dispatch(FormCommand::FocusNextField);
                self.exit_armed = false;
            }
            KeyCommand::PrevField => {
                self.controller.dispatch(FormCommand::FocusPrevField);
                self.exit_armed = false;
            }
            KeyCommand::ResetStatus => {
                self.exit_armed = false;
                self.controller.toasts_mut().dismiss_all();
                self.status.set(Status::Ready);
            }
            KeyCommand::Activate => self.on_activate(),
            KeyCommand::Edit(event) => {
                if let Some(id) = self.controller.handle_key(&event) {
                    self.exit_armed = false;
                    self.status.set(Status::Editing(id.label()));
                }
            }
            KeyCommand::None => {}
        }
    }

    fn handle_popup_key(&mut self, key: KeyEvent) -> bool {
        let Some(popup) = &mut self.popup else {
            return false;
        };
        match key.code {
            KeyCode::Esc => {
                self.popup = None;
                self.status.set(Status::Ready);
            }
            KeyCode::Up => popup.select_previous(),
            KeyCode::Down | KeyCode::Tab => popup.select_next(),
            KeyCode::Enter => {
                let selection = popup.selection();
                self.popup = None;
                self.controller.select_group_type_index(selection);
                self.exit_armed = false;
                self.status.set(Status::ValueUpdated);
            }
            _ => {}
        }
        true
    }

    fn on_activate(&mut self) {
        match self.controller.form().focused() {
            FocusTarget::Submit => self.on_submit(),
            FocusTarget::Field(id) => match id.kind() {
                FieldKind::Select => self.open_popup(),
                FieldKind::MultiLine => {
                    if self.controller.insert_newline().is_some() {
                        self.exit_armed = false;
                        self.status.set(Status::Editing(id.label()));
                    }
                }
                FieldKind::Text | FieldKind::File => {
                    self.controller.dispatch(FormCommand::FocusNextField);
                }
            },
        }
    }

    fn open_popup(&mut self) {
        if self.popup.is_some() {
            return;
        }
        let Some(field) = self.controller.form().focused_field() else {
            return;
        };
        if let Some(popup) = PopupState::from_field(field) {
            self.status.set(Status::Choosing);
            self.popup = Some(popup);
        }
    }

    fn on_submit(&mut self) {
        self.exit_armed = false;
        match self.controller.submit() {
            SubmitOutcome::Submitted(_) => self.status.set(Status::Submitted),
            SubmitOutcome::Rejected { issues } => {
                self.status.set(Status::IssuesRemaining(issues))
            }
        }
    }

    fn on_exit(&mut self) {
        if self.options.confirm_exit && self.controller.form().is_dirty() && !self.exit_armed {
            self.exit_armed = true;
            self.status.set(Status::PendingExit);
            return;
        }
        self.should_quit = true;
    }
}
