mod base;
mod date;
pub(crate) mod helpers;
mod select;
mod text;

pub use base::{ComponentKind, SelectState};
pub(crate) use base::FieldComponent;
pub use date::DateComponent;
pub use select::SelectComponent;
pub use text::TextComponent;
