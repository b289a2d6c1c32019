use indexmap::IndexMap;

use super::{
    error::{FILL_ALL_FIELDS, SubmissionError},
    fields::FieldDefinition,
    modifiers::modifier,
    record::{MovieCollection, MovieRecord, RecordCandidate},
};

/// Checks the candidate field by field in registry order and stops at the
/// first failure. Values are trimmed before checking and stored trimmed.
pub fn validate_candidate(
    definitions: &[FieldDefinition],
    candidate: &RecordCandidate,
) -> Result<MovieRecord, SubmissionError> {
    let mut values = IndexMap::with_capacity(definitions.len());
    for definition in definitions {
        let key = definition.id;
        let raw = candidate.raw(key).trim();
        if raw.is_empty() {
            return Err(SubmissionError::EmptyField { key });
        }
        if let Some(modifier) = modifier(key)
            && let Some(validator) = modifier.validator
            && !validator(raw)
        {
            let message = modifier.alert.unwrap_or(FILL_ALL_FIELDS).to_string();
            return Err(SubmissionError::InvalidField { key, message });
        }
        values.insert(key, raw.to_string());
    }
    Ok(MovieRecord::from_values(values))
}

/// Returns the collection with the validated record appended. The input
/// collection is left untouched either way.
pub fn submit(
    collection: &MovieCollection,
    definitions: &[FieldDefinition],
    candidate: &RecordCandidate,
) -> Result<MovieCollection, SubmissionError> {
    let record = validate_candidate(definitions, candidate)?;
    Ok(collection.appended(record))
}
