use crate::{
    domain::{FieldKey, SubmissionError},
    form::{FieldState, field::components::helpers::cycle_index},
    presentation::{AlertRender, PopupRender},
};

/// Option list opened over a select field.
pub(crate) struct PopupState {
    field_key: FieldKey,
    title: String,
    options: &'static [&'static str],
    selected: usize,
}

impl PopupState {
    pub(crate) fn from_field(field: &FieldState) -> Option<Self> {
        let state = field.select_state()?;
        if state.options.is_empty() {
            return None;
        }
        Some(Self {
            field_key: field.definition.id,
            title: field.display_label(),
            options: state.options,
            selected: state.selected.unwrap_or(0),
        })
    }

    pub(crate) fn step(&mut self, delta: i32) {
        if let Some(next) = cycle_index(Some(self.selected), self.options.len(), delta) {
            self.selected = next;
        }
    }

    pub(crate) fn selection(&self) -> usize {
        self.selected
    }

    pub(crate) fn field_key(&self) -> FieldKey {
        self.field_key
    }

    pub(crate) fn as_render(&self) -> PopupRender<'_> {
        PopupRender {
            title: &self.title,
            options: self.options,
            selected: self.selected,
        }
    }
}

/// Blocking notice shown after a rejected submission.
#[derive(Debug, Clone)]
pub(crate) struct AlertState {
    title: String,
    message: String,
}

impl AlertState {
    pub(crate) fn from_error(error: &SubmissionError) -> Self {
        Self {
            title: "Cannot save movie".to_string(),
            message: error.to_string(),
        }
    }

    pub(crate) fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn as_render(&self) -> AlertRender<'_> {
        AlertRender {
            title: &self.title,
            message: &self.message,
        }
    }
}
