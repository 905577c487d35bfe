use std::fmt;

/// How a field is edited and drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Select,
    MultiLine,
    File,
}

/// The six fields of a group draft, in the order they appear on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    GroupName,
    GroupType,
    OtherGroupType,
    GroupDescription,
    GroupCoverPhoto,
    GroupLocation,
}

impl FieldId {
    pub const ALL: [FieldId; 6] = [
        FieldId::GroupName,
        FieldId::GroupType,
        FieldId::OtherGroupType,
        FieldId::GroupDescription,
        FieldId::GroupCoverPhoto,
        FieldId::GroupLocation,
    ];

    /// Position on the card.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Property name used in payloads and in the validation schema.
    pub fn key(self) -> &'static str {
        match self {
            FieldId::GroupName => "groupName",
            FieldId::GroupType => "groupType",
            FieldId::OtherGroupType => "otherGroupType",
            FieldId::GroupDescription => "groupDescription",
            FieldId::GroupCoverPhoto => "groupCoverPhoto",
            FieldId::GroupLocation => "groupLocation",
        }
    }

    pub fn pointer(self) -> String {
        format!("/{}", self.key())
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.key() == key)
    }

    pub fn from_pointer(pointer: &str) -> Option<Self> {
        pointer.strip_prefix('/').and_then(Self::from_key)
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldId::GroupName => "Group Name",
            FieldId::GroupType => "Group Type",
            FieldId::OtherGroupType => "Specify Other Group Type",
            FieldId::GroupDescription => "Group Description",
            FieldId::GroupCoverPhoto => "Group Cover Photo",
            FieldId::GroupLocation => "Group Location (Optional)",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FieldId::GroupName => "Enter group name",
            FieldId::GroupType => "Select group type",
            FieldId::OtherGroupType => "Specify other group type",
            FieldId::GroupDescription => "Enter group description",
            FieldId::GroupCoverPhoto => "No file chosen",
            FieldId::GroupLocation => "Enter group location",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            FieldId::GroupType => FieldKind::Select,
            FieldId::GroupDescription => FieldKind::MultiLine,
            FieldId::GroupCoverPhoto => FieldKind::File,
            _ => FieldKind::Text,
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointers_resolve_back_to_fields() {
        for id in FieldId::ALL {
            assert_eq!(FieldId::from_pointer(&id.pointer()), Some(id));
        }
        assert_eq!(FieldId::from_pointer(""), None);
        assert_eq!(FieldId::from_pointer("/groupname"), None);
    }

    #[test]
    fn only_group_type_is_a_select() {
        let selects: Vec<_> = FieldId::ALL
            .into_iter()
            .filter(|id| id.kind() == FieldKind::Select)
            .collect();
        assert_eq!(selects, vec![FieldId::GroupType]);
    }
}
