use crate::{domain::GroupDraft, form::FormState, schema::GroupSchema};

#[derive(Debug)]
pub enum ValidationOutcome {
    Valid(GroupDraft),
    Invalid {
        issues: usize,
        global_errors: Vec<String>,
    },
}

/// Validate the visible values and write the result back onto the fields.
pub fn validate_form(form_state: &mut FormState, schema: &GroupSchema) -> ValidationOutcome {
    match schema.validate(&form_state.candidate_value()) {
        Ok(draft) => {
            form_state.clear_errors();
            ValidationOutcome::Valid(draft)
        }
        Err(errors) => {
            form_state.apply_errors(&errors);
            let global_errors = errors.form_errors().to_vec();
            ValidationOutcome::Invalid {
                issues: errors.len() + global_errors.len(),
                global_errors,
            }
        }
    }
}
