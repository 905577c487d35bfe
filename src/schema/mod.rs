//! Validation schema for a group draft.
//!
//! The JSON Schema is derived from [`GroupDraft`] and compiled once. Violations
//! are folded into a per-field error map carrying the messages shown under each
//! control.

mod errors;

use anyhow::{Context, Result};
use jsonschema::{ValidationError, Validator, error::ValidationErrorKind, validator_for};
use schemars::schema_for;
use serde_json::Value;

use crate::domain::{FieldId, GroupDraft};

pub use errors::FieldErrors;

pub const GROUP_NAME_REQUIRED: &str = "Group name is required";
pub const GROUP_TYPE_REQUIRED: &str = "Group type is required";

/// Message for a failed required rule, if the field has one.
pub fn required_message(id: FieldId) -> Option<&'static str> {
    match id {
        FieldId::GroupName => Some(GROUP_NAME_REQUIRED),
        FieldId::GroupType => Some(GROUP_TYPE_REQUIRED),
        _ => None,
    }
}

pub struct GroupSchema {
    document: Value,
    validator: Validator,
}

impl std::fmt::Debug for GroupSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroupSchema")
            .field("document", &self.document)
            .finish_non_exhaustive()
    }
}

impl GroupSchema {
    pub fn new() -> Result<Self> {
        let document = serde_json::to_value(schema_for!(GroupDraft))
            .context("failed to serialize group schema")?;
        let validator = validator_for(&document).context("failed to compile group schema")?;
        Ok(Self {
            document,
            validator,
        })
    }

    /// The derived JSON Schema document.
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Validate a candidate value set.
    ///
    /// Success carries the normalized draft; failure carries one message per
    /// offending field. No rule spans two fields.
    pub fn validate(&self, candidate: &Value) -> Result<GroupDraft, FieldErrors> {
        let mut errors = FieldErrors::default();
        for error in self.validator.iter_errors(candidate) {
            match offending_field(&error) {
                Some(id) => {
                    let message = required_message(id)
                        .filter(|_| is_required_rule(&error))
                        .map(str::to_string)
                        .unwrap_or_else(|| error.to_string());
                    errors.insert(id, message);
                }
                None => {
                    let pointer = error.instance_path.to_string();
                    let prefix = if pointer.is_empty() {
                        "<root>".to_string()
                    } else {
                        pointer
                    };
                    errors.push_form_error(format!("{prefix}: {error}"));
                }
            }
        }
        if !errors.is_empty() {
            tracing::debug!(fields = ?errors.fields().collect::<Vec<_>>(), "validation failed");
            return Err(errors);
        }

        serde_json::from_value(candidate.clone()).map_err(|err| {
            let mut errors = FieldErrors::default();
            errors.push_form_error(err.to_string());
            errors
        })
    }
}

fn offending_field(error: &ValidationError<'_>) -> Option<FieldId> {
    if let ValidationErrorKind::Required { property } = &error.kind {
        return property.as_str().and_then(FieldId::from_key);
    }
    FieldId::from_pointer(&error.instance_path.to_string())
}

fn is_required_rule(error: &ValidationError<'_>) -> bool {
    matches!(
        error.kind,
        ValidationErrorKind::Required { .. } | ValidationErrorKind::MinLength { .. }
    )
}
