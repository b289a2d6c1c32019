mod components;
pub mod records;
mod view;

pub use view::{AlertRender, PopupRender, UiContext, draw};
