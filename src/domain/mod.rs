mod error;
mod fields;
mod modifiers;
mod record;
mod validation;

pub use error::{FILL_ALL_FIELDS, SubmissionError};
pub use fields::{FIELD_LABELS, FieldDefinition, FieldKey, derive_key, field_definitions};
pub use modifiers::{
    ControlKind, FieldModifier, Formatter, GENRES, InputType, Validator, control_for,
    display_value, format_rating, format_release_date, is_valid_email, is_valid_rating,
    is_valid_release_date, modifier, modifier_for_key, parse_release_date,
};
pub use record::{MovieCollection, MovieRecord, RecordCandidate};
pub use validation::{submit, validate_candidate};
