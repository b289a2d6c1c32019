use crate::domain::{FieldDefinition, FieldKey, RecordCandidate};

use super::field::FieldState;

/// Input state for every field plus the focus ring. The ring has one slot per
/// field followed by the submit control.
#[derive(Debug, Clone)]
pub struct FormState {
    pub fields: Vec<FieldState>,
    focus: usize,
}

impl FormState {
    pub fn from_definitions(definitions: &[FieldDefinition]) -> Self {
        Self {
            fields: definitions
                .iter()
                .cloned()
                .map(FieldState::from_definition)
                .collect(),
            focus: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn focus_index(&self) -> usize {
        self.focus
    }

    pub fn submit_focused(&self) -> bool {
        self.focus == self.fields.len()
    }

    pub fn focused_field(&self) -> Option<&FieldState> {
        self.fields.get(self.focus)
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut FieldState> {
        self.fields.get_mut(self.focus)
    }

    pub fn focus_next_field(&mut self) {
        self.step_focus(1);
    }

    pub fn focus_prev_field(&mut self) {
        self.step_focus(-1);
    }

    pub fn step_focus(&mut self, delta: i32) {
        let len = self.fields.len() as i64 + 1;
        let next = ((self.focus as i64 + delta as i64) % len + len) % len;
        self.focus = next as usize;
    }

    pub fn focus_key(&mut self, key: FieldKey) -> bool {
        match self.position(key) {
            Some(index) => {
                self.focus = index;
                true
            }
            None => false,
        }
    }

    pub fn field(&self, key: FieldKey) -> Option<&FieldState> {
        self.fields.iter().find(|field| field.definition.id == key)
    }

    pub fn field_mut(&mut self, key: FieldKey) -> Option<&mut FieldState> {
        self.fields
            .iter_mut()
            .find(|field| field.definition.id == key)
    }

    /// Raw values of every field, in form order.
    pub fn candidate(&self) -> RecordCandidate {
        let mut candidate = RecordCandidate::new();
        for field in &self.fields {
            candidate.insert(field.definition.id, field.raw_value());
        }
        candidate
    }

    pub fn set_error(&mut self, key: FieldKey, message: String) -> bool {
        match self.field_mut(key) {
            Some(field) => {
                field.set_error(message);
                true
            }
            None => false,
        }
    }

    pub fn clear_errors(&mut self) {
        for field in &mut self.fields {
            field.clear_error();
        }
    }

    /// Clears every input and error and moves focus back to the first field.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.reset();
        }
        self.focus = 0;
    }

    pub fn is_dirty(&self) -> bool {
        self.fields.iter().any(|field| field.dirty)
    }

    pub fn error_count(&self) -> usize {
        self.fields
            .iter()
            .filter(|field| field.error.is_some())
            .count()
    }

    fn position(&self, key: FieldKey) -> Option<usize> {
        self.fields
            .iter()
            .position(|field| field.definition.id == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::field_definitions;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn type_into(state: &mut FormState, key: FieldKey, text: &str) {
        let field = state.field_mut(key).expect("field");
        for ch in text.chars() {
            field.handle_key(&KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE));
        }
    }

    #[test]
    fn focus_ring_includes_submit_control_and_wraps() {
        let mut state = FormState::from_definitions(&field_definitions());
        assert_eq!(state.focus_index(), 0);
        state.focus_prev_field();
        assert!(state.submit_focused());
        assert!(state.focused_field().is_none());
        state.focus_next_field();
        assert_eq!(state.focus_index(), 0);
        for _ in 0..state.fields.len() {
            state.focus_next_field();
        }
        assert!(state.submit_focused());
    }

    #[test]
    fn candidate_collects_raw_values_in_order() {
        let mut state = FormState::from_definitions(&field_definitions());
        type_into(&mut state, FieldKey::MovieTitle, "Heat");
        type_into(&mut state, FieldKey::MovieRating, "8");
        let candidate = state.candidate();
        assert_eq!(candidate.raw(FieldKey::MovieTitle), "Heat");
        assert_eq!(candidate.raw(FieldKey::MovieRating), "8");
        assert_eq!(candidate.raw(FieldKey::Genre), "");
        assert!(state.is_dirty());
    }

    #[test]
    fn reset_clears_values_errors_and_focus() {
        let mut state = FormState::from_definitions(&field_definitions());
        type_into(&mut state, FieldKey::StudioEmail, "nope");
        assert!(state.set_error(FieldKey::StudioEmail, "bad".to_string()));
        assert!(state.focus_key(FieldKey::StudioEmail));
        state.reset();
        assert_eq!(state.focus_index(), 0);
        assert_eq!(state.error_count(), 0);
        assert!(!state.is_dirty());
        assert_eq!(state.candidate().raw(FieldKey::StudioEmail), "");
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let mut state = FormState::from_definitions(&field_definitions());
        state.set_error(FieldKey::MovieTitle, "empty".to_string());
        assert_eq!(state.error_count(), 1);
        type_into(&mut state, FieldKey::MovieTitle, "H");
        assert_eq!(state.error_count(), 0);
    }
}
