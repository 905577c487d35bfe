use crate::{domain::FieldId, schema::GroupSchema};

use super::{actions::FormCommand, state::FormState};

pub fn apply_command(state: &mut FormState, command: FormCommand) {
    match command {
        FormCommand::FocusNextField => state.focus_next_field(),
        FormCommand::FocusPrevField => state.focus_prev_field(),
        FormCommand::FieldEdited { .. } => {}
    }
}

pub struct FormEngine<'a> {
    state: &'a mut FormState,
    schema: &'a GroupSchema,
}

impl<'a> FormEngine<'a> {
    pub fn new(state: &'a mut FormState, schema: &'a GroupSchema) -> Self {
        Self { state, schema }
    }

    pub fn dispatch(&mut self, command: FormCommand) {
        match command {
            FormCommand::FieldEdited { id } => self.revalidate_field(id),
            other => apply_command(self.state, other),
        }
    }

    /// Refresh the inline error of one field. Nothing is re-checked before the
    /// first submit attempt.
    fn revalidate_field(&mut self, id: FieldId) {
        if !self.state.submit_attempted() {
            return;
        }
        let errors = match self.schema.validate(&self.state.candidate_value()) {
            Ok(_) => Default::default(),
            Err(errors) => errors,
        };
        self.state.apply_field_error(id, &errors);
    }
}
