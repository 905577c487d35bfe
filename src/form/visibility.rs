use crate::domain::{FieldId, OTHER_GROUP_TYPE};

/// Whether the free-text group type field is part of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldVisibility {
    #[default]
    OtherFieldHidden,
    OtherFieldVisible,
}

impl FieldVisibility {
    pub fn from_group_type(group_type: Option<&str>) -> Self {
        if other_field_visible(group_type) {
            FieldVisibility::OtherFieldVisible
        } else {
            FieldVisibility::OtherFieldHidden
        }
    }

    pub fn shows(self, id: FieldId) -> bool {
        id != FieldId::OtherGroupType || self == FieldVisibility::OtherFieldVisible
    }
}

/// Only the exact sentinel label reveals the extra field.
pub fn other_field_visible(group_type: Option<&str>) -> bool {
    group_type == Some(OTHER_GROUP_TYPE)
}
