use crossterm::event::KeyEvent;
use serde_json::{Map, Value};

use crate::{domain::FieldId, schema::FieldErrors};

use super::{
    error::SeedError,
    field::FieldState,
    visibility::FieldVisibility,
};

/// A stop in the focus ring: a visible field or the submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Field(FieldId),
    Submit,
}

#[derive(Debug, Clone)]
pub struct FormState {
    fields: [FieldState; 6],
    focus: FocusTarget,
    submit_attempted: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self {
            fields: FieldId::ALL.map(FieldState::new),
            focus: FocusTarget::Field(FieldId::GroupName),
            submit_attempted: false,
        }
    }

    pub fn field(&self, id: FieldId) -> &FieldState {
        &self.fields[id.index()]
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut FieldState {
        &mut self.fields[id.index()]
    }

    /// Fields currently on the card.
    pub fn visible_fields(&self) -> impl Iterator<Item = &FieldState> {
        let visibility = self.visibility();
        self.fields
            .iter()
            .filter(move |field| visibility.shows(field.id))
    }

    pub fn group_type(&self) -> Option<&str> {
        self.field(FieldId::GroupType).selected_label()
    }

    /// Derived from the live group type on every call.
    pub fn visibility(&self) -> FieldVisibility {
        FieldVisibility::from_group_type(self.group_type())
    }

    pub fn is_visible(&self, id: FieldId) -> bool {
        self.visibility().shows(id)
    }

    pub fn set_text(&mut self, id: FieldId, text: &str) -> bool {
        self.field_mut(id).set_text(text)
    }

    pub fn select_group_type(&mut self, label: &str) -> Result<bool, SeedError> {
        let before = self.visibility();
        let changed = self.field_mut(FieldId::GroupType).select_label(label)?;
        self.trace_visibility(before);
        Ok(changed)
    }

    pub fn select_group_type_index(&mut self, index: usize) -> bool {
        let before = self.visibility();
        let changed = self.field_mut(FieldId::GroupType).set_selected(Some(index));
        self.trace_visibility(before);
        changed
    }

    pub fn clear_group_type(&mut self) -> bool {
        let before = self.visibility();
        let changed = self.field_mut(FieldId::GroupType).set_selected(None);
        self.trace_visibility(before);
        changed
    }

    pub fn focused(&self) -> FocusTarget {
        if self.focus_targets().contains(&self.focus) {
            self.focus
        } else {
            FocusTarget::Field(FieldId::GroupName)
        }
    }

    pub fn focused_field(&self) -> Option<&FieldState> {
        match self.focused() {
            FocusTarget::Field(id) => Some(self.field(id)),
            FocusTarget::Submit => None,
        }
    }

    pub fn focus(&mut self, target: FocusTarget) -> bool {
        if self.focus_targets().contains(&target) {
            self.focus = target;
            true
        } else {
            false
        }
    }

    pub fn focus_targets(&self) -> Vec<FocusTarget> {
        self.visible_fields()
            .map(|field| FocusTarget::Field(field.id))
            .chain(std::iter::once(FocusTarget::Submit))
            .collect()
    }

    pub fn focus_next_field(&mut self) {
        self.step_focus(1);
    }

    pub fn focus_prev_field(&mut self) {
        self.step_focus(-1);
    }

    /// Forward a key to the focused field. Returns the field when it changed.
    pub fn handle_key(&mut self, key: &KeyEvent) -> Option<FieldId> {
        let FocusTarget::Field(id) = self.focused() else {
            return None;
        };
        let before = self.visibility();
        if !self.field_mut(id).handle_key(key) {
            return None;
        }
        tracing::debug!(field = %id, "field edited");
        self.trace_visibility(before);
        Some(id)
    }

    pub fn insert_newline(&mut self) -> Option<FieldId> {
        let FocusTarget::Field(id) = self.focused() else {
            return None;
        };
        self.field_mut(id).insert_newline().then_some(id)
    }

    /// JSON object with every visible, non-empty field.
    pub fn candidate_value(&self) -> Value {
        let mut map = Map::new();
        for field in self.visible_fields() {
            if let Some(value) = field.current_value() {
                map.insert(field.id.key().to_string(), value);
            }
        }
        Value::Object(map)
    }

    pub fn seed_from_value(&mut self, value: &Value) -> Result<(), SeedError> {
        let Value::Object(map) = value else {
            return Err(SeedError::NotAnObject);
        };
        for (key, subvalue) in map {
            let id = FieldId::from_key(key).ok_or_else(|| SeedError::UnknownField(key.clone()))?;
            self.field_mut(id).seed_value(subvalue)?;
        }
        Ok(())
    }

    /// Replace every inline error with the given map.
    pub fn apply_errors(&mut self, errors: &FieldErrors) {
        for field in &mut self.fields {
            match errors.get(field.id) {
                Some(message) => field.set_error(message.to_string()),
                None => field.clear_error(),
            }
        }
    }

    /// Update the error of a single field from a fresh validation run.
    pub fn apply_field_error(&mut self, id: FieldId, errors: &FieldErrors) {
        let field = self.field_mut(id);
        match errors.get(id) {
            Some(message) => field.set_error(message.to_string()),
            None => field.clear_error(),
        }
    }

    pub fn clear_errors(&mut self) {
        for field in &mut self.fields {
            field.clear_error();
        }
    }

    pub fn error(&self, id: FieldId) -> Option<&str> {
        self.field(id).error.as_deref()
    }

    pub fn error_count(&self) -> usize {
        self.visible_fields()
            .filter(|field| field.error.is_some())
            .count()
    }

    pub fn is_dirty(&self) -> bool {
        self.fields.iter().any(|field| field.dirty)
    }

    pub fn mark_clean(&mut self) {
        for field in &mut self.fields {
            field.dirty = false;
        }
    }

    pub fn submit_attempted(&self) -> bool {
        self.submit_attempted
    }

    pub fn mark_submit_attempted(&mut self) {
        self.submit_attempted = true;
    }

    fn step_focus(&mut self, delta: i32) {
        let targets = self.focus_targets();
        let len = targets.len() as i32;
        let current = targets
            .iter()
            .position(|target| *target == self.focused())
            .unwrap_or(0) as i32;
        let next = ((current + delta) % len + len) % len;
        self.focus = targets[next as usize];
    }

    fn trace_visibility(&self, before: FieldVisibility) {
        let after = self.visibility();
        if before != after {
            tracing::debug!(from = ?before, to = ?after, "group type visibility changed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use serde_json::json;

    fn type_text(state: &mut FormState, text: &str) {
        for ch in text.chars() {
            state.handle_key(&KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE));
        }
    }

    #[test]
    fn focus_ring_skips_hidden_field_and_wraps() {
        let mut state = FormState::new();
        assert_eq!(
            state.focus_targets(),
            vec![
                FocusTarget::Field(FieldId::GroupName),
                FocusTarget::Field(FieldId::GroupType),
                FocusTarget::Field(FieldId::GroupDescription),
                FocusTarget::Field(FieldId::GroupCoverPhoto),
                FocusTarget::Field(FieldId::GroupLocation),
                FocusTarget::Submit,
            ]
        );
        state.focus_prev_field();
        assert_eq!(state.focused(), FocusTarget::Submit);
        state.focus_next_field();
        assert_eq!(state.focused(), FocusTarget::Field(FieldId::GroupName));
        state.focus_next_field();
        state.focus_next_field();
        assert_eq!(
            state.focused(),
            FocusTarget::Field(FieldId::GroupDescription)
        );
    }

    #[test]
    fn other_joins_the_ring_after_group_type() {
        let mut state = FormState::new();
        state.select_group_type("Other").expect("known label");
        assert!(state.focus(FocusTarget::Field(FieldId::GroupType)));
        state.focus_next_field();
        assert_eq!(state.focused(), FocusTarget::Field(FieldId::OtherGroupType));
    }

    #[test]
    fn typing_goes_to_the_focused_field_only() {
        let mut state = FormState::new();
        type_text(&mut state, "Book Club");
        assert_eq!(state.field(FieldId::GroupName).display_value(), "Book Club");
        for id in FieldId::ALL.into_iter().skip(1) {
            assert!(state.field(id).is_empty(), "{id} should be untouched");
        }
        assert!(state.is_dirty());
    }

    #[test]
    fn hidden_text_is_kept_but_not_collected() {
        let mut state = FormState::new();
        state.select_group_type("Other").expect("label");
        state.set_text(FieldId::OtherGroupType, "Book swaps");
        assert_eq!(
            state.candidate_value()["otherGroupType"],
            json!("Book swaps")
        );

        state.select_group_type("Community").expect("label");
        assert!(!state.is_visible(FieldId::OtherGroupType));
        assert!(state.candidate_value().get("otherGroupType").is_none());

        state.select_group_type("Other").expect("label");
        assert_eq!(
            state.field(FieldId::OtherGroupType).display_value(),
            "Book swaps"
        );
    }

    #[test]
    fn candidate_omits_empty_fields() {
        let mut state = FormState::new();
        state.set_text(FieldId::GroupName, "Book Club");
        state.set_text(FieldId::GroupLocation, "");
        assert_eq!(state.candidate_value(), json!({"groupName": "Book Club"}));
    }

    #[test]
    fn seeding_fills_known_fields() {
        let mut state = FormState::new();
        state
            .seed_from_value(&json!({
                "groupName": "Runners",
                "groupType": "Hobbies",
                "groupCoverPhoto": "cover.jpg",
                "groupLocation": null
            }))
            .expect("valid defaults");
        assert_eq!(state.group_type(), Some("Hobbies"));
        assert_eq!(
            state.field(FieldId::GroupCoverPhoto).display_value(),
            "cover.jpg"
        );
        assert_eq!(
            state.seed_from_value(&json!({"groupSize": "10"})),
            Err(SeedError::UnknownField("groupSize".into()))
        );
        assert_eq!(
            state.seed_from_value(&json!(["groupName"])),
            Err(SeedError::NotAnObject)
        );
    }

    #[test]
    fn errors_are_replaced_wholesale() {
        let mut state = FormState::new();
        let mut errors = FieldErrors::default();
        errors.insert(FieldId::GroupName, "Group name is required");
        errors.insert(FieldId::GroupType, "Group type is required");
        state.apply_errors(&errors);
        assert_eq!(state.error_count(), 2);

        let mut fewer = FieldErrors::default();
        fewer.insert(FieldId::GroupType, "Group type is required");
        state.apply_errors(&fewer);
        assert_eq!(state.error(FieldId::GroupName), None);
        assert_eq!(state.error_count(), 1);
    }
}
