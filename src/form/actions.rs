use crate::domain::FieldId;

#[derive(Debug, Clone)]
pub enum FormCommand {
    FocusNextField,
    FocusPrevField,
    FieldEdited { id: FieldId },
}
