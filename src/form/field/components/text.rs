use crossterm::event::KeyEvent;

use crate::domain::FieldDefinition;

use super::helpers::handle_text_edit;
use super::{ComponentKind, FieldComponent};

#[derive(Debug, Clone, Default)]
pub struct TextComponent {
    buffer: String,
}

impl TextComponent {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FieldComponent for TextComponent {
    fn kind(&self) -> ComponentKind {
        ComponentKind::TextInput
    }

    fn display_value(&self, _definition: &FieldDefinition) -> String {
        self.buffer.clone()
    }

    fn raw_value(&self) -> String {
        self.buffer.clone()
    }

    fn handle_key(&mut self, _definition: &FieldDefinition, key: &KeyEvent) -> bool {
        handle_text_edit(&mut self.buffer, key)
    }

    fn reset(&mut self) {
        self.buffer.clear();
    }
}
