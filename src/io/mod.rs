mod format;
mod output;

pub use format::DocumentFormat;
pub use output::{OutputOptions, emit, emit_to, serialize_collection};
