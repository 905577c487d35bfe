mod actions;
mod error;
mod field;
mod reducers;
mod state;
mod visibility;

pub use actions::FormCommand;
pub use error::SeedError;
pub use field::{FieldState, FieldValue};
pub use reducers::FormEngine;
pub use state::{FocusTarget, FormState};
pub use visibility::{FieldVisibility, other_field_visible};
