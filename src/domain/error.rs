use thiserror::Error;

use super::fields::FieldKey;

pub const FILL_ALL_FIELDS: &str = "Please fill out all fields";

/// Reasons a submission is rejected. `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("Please fill out all fields")]
    EmptyField { key: FieldKey },
    #[error("{message}")]
    InvalidField { key: FieldKey, message: String },
}

impl SubmissionError {
    pub fn key(&self) -> FieldKey {
        match self {
            SubmissionError::EmptyField { key } | SubmissionError::InvalidField { key, .. } => *key,
        }
    }
}
