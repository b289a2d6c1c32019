mod body;
mod fields;
mod footer;
mod layout;
mod popup;
mod records;

pub use body::render_body;
pub use footer::render_footer;
pub use popup::{render_alert, render_popup};
