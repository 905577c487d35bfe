#![deny(rust_2018_idioms)]

pub mod app;
pub mod domain;
pub mod form;
pub mod presentation;
pub mod schema;

pub use app::{
    DEFAULT_TITLE, FormController, GroupForm, LogSubmitHandler, SUCCESS_MESSAGE, SubmitHandler,
    SubmitOutcome, Toasts, UiOptions,
};
pub use domain::{CoverPhoto, FieldId, GROUP_TYPES, GroupDraft, OTHER_GROUP_TYPE};
pub use form::{FormState, SeedError};
pub use schema::{FieldErrors, GroupSchema};

pub mod prelude {
    pub use super::{
        FieldId, FormController, GroupDraft, GroupForm, GroupSchema, LogSubmitHandler,
        SubmitHandler, SubmitOutcome, UiOptions,
    };
}
