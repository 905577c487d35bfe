use anyhow::Result;
use crossterm::event::KeyEvent;

use crate::{
    domain::{FieldId, GroupDraft},
    form::{FormCommand, FormEngine, FormState, SeedError},
    schema::GroupSchema,
};

use super::{
    options::UiOptions,
    submit::{LogSubmitHandler, SubmitHandler},
    toast::Toasts,
    validation::{ValidationOutcome, validate_form},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted(GroupDraft),
    Rejected { issues: usize },
}

/// Owns the form values, the schema and the submit side effect.
///
/// Headless: the terminal runtime drives it with key events, tests drive it
/// directly.
pub struct FormController {
    form_state: FormState,
    schema: GroupSchema,
    handler: Box<dyn SubmitHandler>,
    toasts: Toasts,
    submissions: Vec<GroupDraft>,
    global_errors: Vec<String>,
    revalidate_on_change: bool,
}

impl FormController {
    pub fn new() -> Result<Self> {
        Self::with_handler(LogSubmitHandler)
    }

    pub fn with_handler(handler: impl SubmitHandler + 'static) -> Result<Self> {
        Self::with_boxed_handler(Box::new(handler), &UiOptions::default())
    }

    pub(crate) fn with_boxed_handler(
        handler: Box<dyn SubmitHandler>,
        options: &UiOptions,
    ) -> Result<Self> {
        Ok(Self {
            form_state: FormState::new(),
            schema: GroupSchema::new()?,
            handler,
            toasts: Toasts::new(options.toast_duration),
            submissions: Vec::new(),
            global_errors: Vec::new(),
            revalidate_on_change: options.revalidate_on_change,
        })
    }

    pub fn with_options(mut self, options: &UiOptions) -> Self {
        self.toasts = Toasts::new(options.toast_duration);
        self.revalidate_on_change = options.revalidate_on_change;
        self
    }

    pub fn form(&self) -> &FormState {
        &self.form_state
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form_state
    }

    pub fn schema(&self) -> &GroupSchema {
        &self.schema
    }

    pub fn set_text(&mut self, id: FieldId, text: &str) {
        if self.form_state.set_text(id, text) {
            self.field_edited(id);
        }
    }

    pub fn select_group_type(&mut self, label: &str) -> Result<(), SeedError> {
        if self.form_state.select_group_type(label)? {
            self.field_edited(FieldId::GroupType);
        }
        Ok(())
    }

    pub fn select_group_type_index(&mut self, index: usize) {
        if self.form_state.select_group_type_index(index) {
            self.field_edited(FieldId::GroupType);
        }
    }

    pub fn clear_group_type(&mut self) {
        if self.form_state.clear_group_type() {
            self.field_edited(FieldId::GroupType);
        }
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> Option<FieldId> {
        let id = self.form_state.handle_key(key)?;
        self.field_edited(id);
        Some(id)
    }

    pub fn insert_newline(&mut self) -> Option<FieldId> {
        let id = self.form_state.insert_newline()?;
        self.field_edited(id);
        Some(id)
    }

    pub fn dispatch(&mut self, command: FormCommand) {
        FormEngine::new(&mut self.form_state, &self.schema).dispatch(command);
    }

    /// Validate, then either keep the errors inline or hand the draft to the
    /// submit handler.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.form_state.mark_submit_attempted();
        match validate_form(&mut self.form_state, &self.schema) {
            ValidationOutcome::Valid(draft) => {
                self.global_errors.clear();
                self.handler.on_submit(&draft, &mut self.toasts);
                self.submissions.push(draft.clone());
                self.form_state.mark_clean();
                SubmitOutcome::Submitted(draft)
            }
            ValidationOutcome::Invalid {
                issues,
                global_errors,
            } => {
                tracing::debug!(issues, "submit blocked by validation");
                self.global_errors = global_errors;
                SubmitOutcome::Rejected { issues }
            }
        }
    }

    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    pub fn toasts_mut(&mut self) -> &mut Toasts {
        &mut self.toasts
    }

    /// Drafts accepted during this session, oldest first.
    pub fn submissions(&self) -> &[GroupDraft] {
        &self.submissions
    }

    pub fn into_submissions(self) -> Vec<GroupDraft> {
        self.submissions
    }

    pub fn global_errors(&self) -> &[String] {
        &self.global_errors
    }

    fn field_edited(&mut self, id: FieldId) {
        if self.revalidate_on_change {
            self.dispatch(FormCommand::FieldEdited { id });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::submit::SUCCESS_MESSAGE;
    use crate::schema::{GROUP_NAME_REQUIRED, GROUP_TYPE_REQUIRED};
    use std::{cell::RefCell, rc::Rc};

    fn recording() -> (FormController, Rc<RefCell<Vec<GroupDraft>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let controller = FormController::with_handler(move |draft: &GroupDraft, _: &mut Toasts| {
            sink.borrow_mut().push(draft.clone())
        })
        .expect("controller");
        (controller, seen)
    }

    #[test]
    fn rejected_submit_keeps_values_and_skips_handler() {
        let (mut controller, seen) = recording();
        controller.set_text(FieldId::GroupLocation, "Lisbon");
        let outcome = controller.submit();
        assert_eq!(outcome, SubmitOutcome::Rejected { issues: 2 });
        assert!(seen.borrow().is_empty());
        assert_eq!(
            controller.form().error(FieldId::GroupName),
            Some(GROUP_NAME_REQUIRED)
        );
        assert_eq!(
            controller.form().error(FieldId::GroupType),
            Some(GROUP_TYPE_REQUIRED)
        );
        assert_eq!(
            controller.form().field(FieldId::GroupLocation).display_value(),
            "Lisbon"
        );
    }

    #[test]
    fn fixing_a_field_clears_its_error_on_edit() {
        let (mut controller, seen) = recording();
        controller.submit();
        controller.set_text(FieldId::GroupName, "Chess");
        assert_eq!(controller.form().error(FieldId::GroupName), None);
        assert_eq!(
            controller.form().error(FieldId::GroupType),
            Some(GROUP_TYPE_REQUIRED)
        );
        controller.select_group_type("Hobbies").expect("label");
        assert_eq!(controller.form().error_count(), 0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn revalidation_can_be_switched_off() {
        let (controller, _) = recording();
        let mut controller = controller.with_options(&UiOptions::default().with_revalidate(false));
        controller.submit();
        controller.set_text(FieldId::GroupName, "Chess");
        assert_eq!(
            controller.form().error(FieldId::GroupName),
            Some(GROUP_NAME_REQUIRED)
        );
    }

    #[test]
    fn successful_submit_clears_errors_and_marks_clean() {
        let mut controller = FormController::new().expect("controller");
        controller.submit();
        controller.set_text(FieldId::GroupName, "Book Club");
        controller.select_group_type("Community").expect("label");
        assert!(controller.form().is_dirty());
        let SubmitOutcome::Submitted(draft) = controller.submit() else {
            panic!("expected success");
        };
        assert_eq!(draft.group_name, "Book Club");
        assert_eq!(controller.form().error_count(), 0);
        assert!(!controller.form().is_dirty());
        assert_eq!(controller.submissions().len(), 1);
        let toast = controller.toasts().visible().next().expect("toast");
        assert_eq!(toast.message, SUCCESS_MESSAGE);
    }
}
