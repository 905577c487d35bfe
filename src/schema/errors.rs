use indexmap::IndexMap;

use crate::domain::FieldId;

/// Per-field validation messages, kept in card order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    fields: IndexMap<FieldId, String>,
    form: Vec<String>,
}

impl FieldErrors {
    /// Record a message for a field. The first message for a field wins.
    pub fn insert(&mut self, id: FieldId, message: impl Into<String>) {
        if self.fields.contains_key(&id) {
            return;
        }
        self.fields.insert(id, message.into());
        self.fields.sort_keys();
    }

    pub fn push_form_error(&mut self, message: impl Into<String>) {
        self.form.push(message.into());
    }

    pub fn get(&self, id: FieldId) -> Option<&str> {
        self.fields.get(&id).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.fields.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> {
        self.fields.iter().map(|(id, message)| (*id, message.as_str()))
    }

    /// Messages that could not be attached to a field.
    pub fn form_errors(&self) -> &[String] {
        &self.form
    }

    /// Number of field-level messages.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.form.is_empty()
    }
}
