use crate::{form::FieldState, presentation::PopupRender};

/// Option list opened over the card for the group type select.
pub(crate) struct PopupState {
    title: String,
    options: Vec<String>,
    selected: usize,
}

impl PopupState {
    pub(crate) fn from_field(field: &FieldState) -> Option<Self> {
        let (options, selected) = field.options()?;
        if options.is_empty() {
            return None;
        }
        Some(Self {
            title: field.id.label().to_string(),
            options: options.to_vec(),
            selected: selected.unwrap_or(0),
        })
    }

    pub(crate) fn select_previous(&mut self) {
        if self.selected == 0 {
            self.selected = self.options.len().saturating_sub(1);
        } else {
            self.selected -= 1;
        }
    }

    pub(crate) fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.options.len().max(1);
    }

    pub(crate) fn selection(&self) -> usize {
        self.selected
    }

    pub(crate) fn as_render(&self) -> PopupRender<'_> {
        PopupRender {
            title: &self.title,
            options: &self.options,
            selected: self.selected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldId;

    #[test]
    fn popup_opens_only_for_the_select() {
        assert!(PopupState::from_field(&FieldState::new(FieldId::GroupName)).is_none());
        let popup = PopupState::from_field(&FieldState::new(FieldId::GroupType)).expect("popup");
        assert_eq!(popup.selection(), 0);
        assert_eq!(popup.as_render().options.len(), 9);
    }

    #[test]
    fn popup_starts_on_current_choice_and_wraps() {
        let mut field = FieldState::new(FieldId::GroupType);
        field.select_label("Other").expect("label");
        let mut popup = PopupState::from_field(&field).expect("popup");
        assert_eq!(popup.selection(), 8);
        popup.select_next();
        assert_eq!(popup.selection(), 0);
        popup.select_previous();
        assert_eq!(popup.selection(), 8);
    }
}
