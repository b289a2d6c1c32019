mod actions;
pub(crate) mod field;
mod reducers;
mod state;

pub use actions::FormCommand;
pub use field::FieldState;
pub use field::components::ComponentKind;
pub use reducers::apply_command;
pub use state::FormState;
