pub(crate) mod components;

use crossterm::event::KeyEvent;

use crate::domain::{ControlKind, FieldDefinition, InputType, control_for};

use components::{
    ComponentKind, DateComponent, FieldComponent, SelectComponent, SelectState, TextComponent,
};

#[derive(Debug, Clone)]
pub struct FieldState {
    pub definition: FieldDefinition,
    pub(crate) component: Box<dyn FieldComponent>,
    pub dirty: bool,
    pub error: Option<String>,
}

impl FieldState {
    pub fn from_definition(definition: FieldDefinition) -> Self {
        let component: Box<dyn FieldComponent> = match control_for(&definition) {
            ControlKind::Select(options) => Box::new(SelectComponent::new(options)),
            ControlKind::Input(InputType::Date) => Box::new(DateComponent::new()),
            ControlKind::Input(InputType::Text) => Box::new(TextComponent::new()),
        };
        Self {
            definition,
            component,
            dirty: false,
            error: None,
        }
    }

    pub fn component_kind(&self) -> ComponentKind {
        self.component.kind()
    }

    pub fn display_label(&self) -> String {
        self.definition.display_label()
    }

    pub fn display_value(&self) -> String {
        self.component.display_value(&self.definition)
    }

    pub fn raw_value(&self) -> String {
        self.component.raw_value()
    }

    pub fn select_state(&self) -> Option<SelectState> {
        self.component.select_state()
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if self.component.handle_key(&self.definition, key) {
            self.after_edit();
            true
        } else {
            false
        }
    }

    pub fn set_select_index(&mut self, index: usize) {
        if self.component.set_select_index(index) {
            self.after_edit();
        }
    }

    pub fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn reset(&mut self) {
        self.component.reset();
        self.dirty = false;
        self.error = None;
    }

    fn after_edit(&mut self) {
        self.dirty = true;
        self.error = None;
    }
}
