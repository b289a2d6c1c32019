use crate::{
    domain::{FieldDefinition, MovieCollection, SubmissionError, submit},
    form::FormState,
};

#[derive(Debug)]
pub enum SubmissionOutcome {
    Accepted(MovieCollection),
    Rejected(SubmissionError),
}

/// Runs the form's current values through the submission reducer. On
/// rejection the failing field carries the message and takes focus.
pub fn validate_submission(
    form_state: &mut FormState,
    collection: &MovieCollection,
    definitions: &[FieldDefinition],
) -> SubmissionOutcome {
    form_state.clear_errors();
    match submit(collection, definitions, &form_state.candidate()) {
        Ok(next) => SubmissionOutcome::Accepted(next),
        Err(error) => {
            form_state.set_error(error.key(), error.to_string());
            form_state.focus_key(error.key());
            SubmissionOutcome::Rejected(error)
        }
    }
}
