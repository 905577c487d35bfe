use std::{fmt, path::PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Option labels offered by the group type select, in display order.
pub const GROUP_TYPES: [&str; 9] = [
    "Community",
    "Business",
    "Education",
    "Entertainment",
    "Health & Wellness",
    "Hobbies",
    "Technology",
    "Travel",
    OTHER_GROUP_TYPE,
];

/// Selecting this label reveals the free-text group type field.
pub const OTHER_GROUP_TYPE: &str = "Other";

/// The validated value set handed to a submit handler.
///
/// Optional fields that were left empty are `None` and are omitted when the
/// draft is serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[schemars(title = "Group")]
pub struct GroupDraft {
    #[schemars(length(min = 1))]
    pub group_name: String,
    #[schemars(length(min = 1))]
    pub group_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_group_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_cover_photo: Option<CoverPhoto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_location: Option<String>,
}

/// Reference to a cover photo picked by the user. The file is never opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct CoverPhoto(PathBuf);

impl CoverPhoto {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &std::path::Path {
        &self.0
    }
}

impl fmt::Display for CoverPhoto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
