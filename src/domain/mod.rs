mod draft;
mod schema;

pub use draft::{CoverPhoto, GROUP_TYPES, GroupDraft, OTHER_GROUP_TYPE};
pub use schema::{FieldId, FieldKind};
