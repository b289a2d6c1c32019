use crossterm::event::{KeyCode, KeyEvent};

use crate::domain::FieldDefinition;

use super::helpers::cycle_index;
use super::{ComponentKind, FieldComponent, SelectState};

pub const SELECT_PLACEHOLDER: &str = "<choose one>";

/// Fixed option list with no initial selection; an unselected component
/// reports an empty raw value.
#[derive(Debug, Clone)]
pub struct SelectComponent {
    options: &'static [&'static str],
    selected: Option<usize>,
}

impl SelectComponent {
    pub fn new(options: &'static [&'static str]) -> Self {
        Self {
            options,
            selected: None,
        }
    }
}

impl FieldComponent for SelectComponent {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Select
    }

    fn display_value(&self, _definition: &FieldDefinition) -> String {
        self.selected
            .and_then(|index| self.options.get(index))
            .map(|option| option.to_string())
            .unwrap_or_else(|| SELECT_PLACEHOLDER.to_string())
    }

    fn raw_value(&self) -> String {
        self.selected
            .and_then(|index| self.options.get(index))
            .map(|option| option.to_string())
            .unwrap_or_default()
    }

    fn handle_key(&mut self, _definition: &FieldDefinition, key: &KeyEvent) -> bool {
        let delta = match key.code {
            KeyCode::Up | KeyCode::Left => -1,
            KeyCode::Down | KeyCode::Right => 1,
            _ => return false,
        };
        let next = cycle_index(self.selected, self.options.len(), delta);
        if next == self.selected {
            return false;
        }
        self.selected = next;
        true
    }

    fn reset(&mut self) {
        self.selected = None;
    }

    fn select_state(&self) -> Option<SelectState> {
        Some(SelectState {
            options: self.options,
            selected: self.selected,
        })
    }

    fn set_select_index(&mut self, index: usize) -> bool {
        if self.options.is_empty() {
            return false;
        }
        let bounded = index.min(self.options.len() - 1);
        if self.selected != Some(bounded) {
            self.selected = Some(bounded);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FieldKey, GENRES, field_definitions};
    use crossterm::event::KeyModifiers;

    fn genre() -> FieldDefinition {
        field_definitions()
            .into_iter()
            .find(|def| def.id == FieldKey::Genre)
            .unwrap()
    }

    #[test]
    fn select_starts_empty_and_cycles() {
        let definition = genre();
        let mut component = SelectComponent::new(GENRES);
        assert_eq!(component.raw_value(), "");
        assert_eq!(component.display_value(&definition), SELECT_PLACEHOLDER);

        let up = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        assert!(component.handle_key(&definition, &up));
        assert_eq!(component.raw_value(), "Thriller");

        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        assert!(component.handle_key(&definition, &down));
        assert_eq!(component.raw_value(), "Action");
    }

    #[test]
    fn set_select_index_clamps_to_last_option() {
        let mut component = SelectComponent::new(GENRES);
        assert!(component.set_select_index(99));
        assert_eq!(component.raw_value(), "Thriller");
        assert!(!component.set_select_index(99));
        component.reset();
        assert!(component.select_state().unwrap().selected.is_none());
    }
}
