mod card;
mod footer;
mod layout;
mod popup;
mod toast;

pub use card::render_card;
pub use footer::render_footer;
pub use popup::render_popup;
pub use toast::render_toasts;
