use crossterm::event::{KeyCode, KeyEvent};

use crate::domain::FieldDefinition;

use super::helpers::{handle_text_edit, step_date, today};
use super::{ComponentKind, FieldComponent};

/// Free-form `YYYY-MM-DD` entry; Left/Right step the date by a day.
#[derive(Debug, Clone, Default)]
pub struct DateComponent {
    buffer: String,
}

impl DateComponent {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FieldComponent for DateComponent {
    fn kind(&self) -> ComponentKind {
        ComponentKind::DateInput
    }

    fn display_value(&self, _definition: &FieldDefinition) -> String {
        self.buffer.clone()
    }

    fn raw_value(&self) -> String {
        self.buffer.clone()
    }

    fn handle_key(&mut self, _definition: &FieldDefinition, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Left => step_date(&mut self.buffer, -1, today()),
            KeyCode::Right => step_date(&mut self.buffer, 1, today()),
            _ => handle_text_edit(&mut self.buffer, key),
        }
    }

    fn reset(&mut self) {
        self.buffer.clear();
    }
}
