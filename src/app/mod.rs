mod controller;
mod group_form;
mod input;
mod options;
mod popup;
mod runtime;
mod status;
mod submit;
mod terminal;
mod toast;
mod validation;

pub use controller::{FormController, SubmitOutcome};
pub use group_form::{DEFAULT_TITLE, GroupForm};
pub use options::UiOptions;
pub use submit::{LogSubmitHandler, SUCCESS_MESSAGE, SubmitHandler};
pub use toast::{MAX_VISIBLE_TOASTS, Toast, ToastLevel, Toasts};
