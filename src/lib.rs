#![deny(rust_2018_idioms)]

//! A terminal form for entering movie metadata. Each field's rendering,
//! formatting and validation come from a static registry and modifier table;
//! accepted entries are listed in a table below the form for the rest of the
//! session.

mod app;
pub mod domain;
mod form;
mod io;
pub mod presentation;

use std::sync::Once;

use tracing_subscriber::EnvFilter;

pub use app::{
    DEFAULT_TITLE, KeymapStore, MovieFormUI, SubmissionOutcome, UiOptions, validate_submission,
};
pub use domain::{MovieCollection, MovieRecord, SubmissionError};
pub use form::{ComponentKind, FieldState, FormCommand, FormState, apply_command};
pub use io::{DocumentFormat, OutputOptions, emit, emit_to, serialize_collection};

/// Environment variable holding the log filter, e.g. `MOVIEFORM_LOG=debug`.
pub const LOG_ENV: &str = "MOVIEFORM_LOG";

static INIT_TRACING: Once = Once::new();

/// Installs the global `tracing` subscriber once. Logs go to stderr without
/// colour so they can be redirected while the UI owns the screen.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_target(false)
            .try_init();
    });
}

pub mod prelude {
    pub use super::{MovieCollection, MovieFormUI, OutputOptions, UiOptions};
}
