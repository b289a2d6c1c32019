use crossterm::event::KeyEvent;

use crate::domain::FieldDefinition;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    TextInput,
    DateInput,
    Select,
}

impl ComponentKind {
    pub fn type_label(self) -> &'static str {
        match self {
            ComponentKind::TextInput => "text",
            ComponentKind::DateInput => "date",
            ComponentKind::Select => "select",
        }
    }
}

pub(crate) trait FieldComponent: FieldComponentClone + std::fmt::Debug {
    fn kind(&self) -> ComponentKind;
    fn display_value(&self, definition: &FieldDefinition) -> String;
    fn raw_value(&self) -> String;
    fn handle_key(&mut self, definition: &FieldDefinition, key: &KeyEvent) -> bool {
        let _ = (definition, key);
        false
    }
    /// Returns the component to its initial, empty state.
    fn reset(&mut self);

    fn select_state(&self) -> Option<SelectState> {
        None
    }

    fn set_select_index(&mut self, _index: usize) -> bool {
        false
    }
}

pub(crate) trait FieldComponentClone {
    fn clone_box(&self) -> Box<dyn FieldComponent>;
}

impl<T> FieldComponentClone for T
where
    T: 'static + FieldComponent + Clone,
{
    fn clone_box(&self) -> Box<dyn FieldComponent> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn FieldComponent> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Snapshot of a select's option table and current choice.
#[derive(Debug, Clone, Copy)]
pub struct SelectState {
    pub options: &'static [&'static str],
    pub selected: Option<usize>,
}
