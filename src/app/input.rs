use std::sync::Arc;

use crossterm::event::KeyEvent;

use crate::form::FormCommand;

use super::keymap::{KeymapContext, KeymapStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyAction {
    Save,
    Quit,
    Activate,
    ResetStatus,
    ClearForm,
    Dismiss,
    FieldStep(i32),
    SelectStep(i32),
    RecordsScroll(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AppCommand {
    Save,
    Quit,
    Activate,
    ResetStatus,
    ClearForm,
    Dismiss,
    SelectStep(i32),
    RecordsScroll(i32),
}

#[derive(Debug, Clone)]
pub(crate) enum CommandDispatch {
    Form(FormCommand),
    App(AppCommand),
    Input(KeyEvent),
}

/// Turns raw key events into commands for the active context. Keys without a
/// binding fall through to the focused field.
#[derive(Debug, Clone)]
pub(crate) struct InputRouter {
    store: Arc<KeymapStore>,
}

impl InputRouter {
    pub(crate) fn new(store: Arc<KeymapStore>) -> Self {
        Self { store }
    }

    pub(crate) fn classify(&self, context: KeymapContext, key: &KeyEvent) -> CommandDispatch {
        match self.store.classify(context, key) {
            Some(action) => dispatch_for(action),
            None => CommandDispatch::Input(*key),
        }
    }

    pub(crate) fn help_text(&self, context: KeymapContext) -> Option<String> {
        self.store.help_text(context)
    }
}

fn dispatch_for(action: KeyAction) -> CommandDispatch {
    match action {
        KeyAction::FieldStep(delta) => CommandDispatch::Form(FormCommand::FieldStep(delta)),
        KeyAction::ClearForm => CommandDispatch::App(AppCommand::ClearForm),
        KeyAction::Save => CommandDispatch::App(AppCommand::Save),
        KeyAction::Quit => CommandDispatch::App(AppCommand::Quit),
        KeyAction::Activate => CommandDispatch::App(AppCommand::Activate),
        KeyAction::ResetStatus => CommandDispatch::App(AppCommand::ResetStatus),
        KeyAction::Dismiss => CommandDispatch::App(AppCommand::Dismiss),
        KeyAction::SelectStep(delta) => CommandDispatch::App(AppCommand::SelectStep(delta)),
        KeyAction::RecordsScroll(delta) => CommandDispatch::App(AppCommand::RecordsScroll(delta)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::keymap::default_store;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn router() -> InputRouter {
        InputRouter::new(default_store())
    }

    #[test]
    fn tab_maps_to_field_steps() {
        let router = router();
        let next = router.classify(
            KeymapContext::Form,
            &KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE),
        );
        assert!(matches!(next, CommandDispatch::Form(FormCommand::FieldStep(1))));
    }

    #[test]
    fn unbound_keys_fall_through_to_input() {
        let router = router();
        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert!(matches!(
            router.classify(KeymapContext::Form, &key),
            CommandDispatch::Input(event) if event.code == KeyCode::Char('x')
        ));
    }

    #[test]
    fn ctrl_r_clears_form() {
        let router = router();
        let key = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert!(matches!(
            router.classify(KeymapContext::Form, &key),
            CommandDispatch::App(AppCommand::ClearForm)
        ));
    }
}
