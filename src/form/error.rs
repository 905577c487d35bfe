use thiserror::Error;

use crate::domain::{FieldId, GROUP_TYPES};

/// Problems with a value used to prefill the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    #[error("defaults must be a JSON object")]
    NotAnObject,
    #[error("unknown field `{0}`")]
    UnknownField(String),
    #[error("`{field}` must be a string")]
    NotAString { field: FieldId },
    #[error("unknown group type `{0}`, expected one of: {expected}", expected = GROUP_TYPES.join(", "))]
    UnknownGroupType(String),
}
