pub(crate) mod input;
pub(crate) mod keymap;
mod movie_form;
mod options;
mod popup;
mod runtime;
mod status;
mod terminal;
mod validation;

pub use keymap::KeymapStore;
pub use movie_form::{DEFAULT_TITLE, MovieFormUI};
pub use options::UiOptions;
pub use validation::{SubmissionOutcome, validate_submission};
