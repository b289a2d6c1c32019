use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use super::fields::{FieldDefinition, FieldKey};

pub type Formatter = fn(&str) -> String;
pub type Validator = fn(&str) -> bool;

pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";
const DATE_DISPLAY_FORMAT: &str = "%B %-d, %Y";

pub const RATING_MIN: f64 = 0.0;
pub const RATING_MAX: f64 = 10.0;

pub const GENRES: &[&str] = &[
    "Action",
    "Adventure",
    "Animation",
    "Comedy",
    "Documentary",
    "Drama",
    "Horror",
    "Romance",
    "Sci-Fi",
    "Thriller",
];

static RATING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)$").expect("rating pattern must compile")
});

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern must compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Text,
    Date,
}

/// Optional behaviours attached to a field.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldModifier {
    pub input_type: Option<InputType>,
    pub options: Option<&'static [&'static str]>,
    pub formatter: Option<Formatter>,
    pub validator: Option<Validator>,
    pub alert: Option<&'static str>,
}

/// The modifier table. `None` means the field is a plain text input with no
/// formatting or validation beyond the empty check.
pub fn modifier(key: FieldKey) -> Option<FieldModifier> {
    match key {
        FieldKey::MovieTitle => None,
        FieldKey::ReleaseDate => Some(FieldModifier {
            input_type: Some(InputType::Date),
            formatter: Some(format_release_date),
            validator: Some(is_valid_release_date),
            alert: Some("Release date must be a valid date (YYYY-MM-DD)"),
            ..FieldModifier::default()
        }),
        FieldKey::MovieRating => Some(FieldModifier {
            input_type: Some(InputType::Text),
            formatter: Some(format_rating),
            validator: Some(is_valid_rating),
            alert: Some("Movie rating must be a number between 0 and 10"),
            ..FieldModifier::default()
        }),
        FieldKey::Genre => Some(FieldModifier {
            options: Some(GENRES),
            ..FieldModifier::default()
        }),
        FieldKey::StudioEmail => Some(FieldModifier {
            input_type: Some(InputType::Text),
            validator: Some(is_valid_email),
            alert: Some("Please enter a valid studio email"),
            ..FieldModifier::default()
        }),
    }
}

/// String-keyed lookup for callers that only hold a derived key.
pub fn modifier_for_key(key: &str) -> Option<FieldModifier> {
    FieldKey::from_key(key).and_then(modifier)
}

/// Control a field renders as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlKind {
    Select(&'static [&'static str]),
    Input(InputType),
}

pub fn control_for(definition: &FieldDefinition) -> ControlKind {
    let Some(modifier) = modifier_for_key(&definition.key) else {
        return ControlKind::Input(InputType::Text);
    };
    match modifier.options {
        Some(options) => ControlKind::Select(options),
        None => ControlKind::Input(modifier.input_type.unwrap_or(InputType::Text)),
    }
}

/// Applies the field's formatter, falling back to the raw value.
pub fn display_value(key: FieldKey, raw: &str) -> String {
    match modifier(key).and_then(|modifier| modifier.formatter) {
        Some(formatter) => formatter(raw),
        None => raw.to_string(),
    }
}

pub fn parse_release_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_INPUT_FORMAT).ok()
}

pub fn format_release_date(raw: &str) -> String {
    match parse_release_date(raw) {
        Some(date) => date.format(DATE_DISPLAY_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

pub fn is_valid_release_date(raw: &str) -> bool {
    parse_release_date(raw).is_some()
}

/// Plain decimal notation only; `-0` reads as `0`.
fn parse_rating(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if !RATING_PATTERN.is_match(raw) {
        return None;
    }
    raw.parse::<f64>().ok().map(|value| value + 0.0)
}

pub fn format_rating(raw: &str) -> String {
    match parse_rating(raw) {
        Some(value) => value.to_string(),
        None => raw.to_string(),
    }
}

pub fn is_valid_rating(raw: &str) -> bool {
    parse_rating(raw).is_some_and(|value| (RATING_MIN..=RATING_MAX).contains(&value))
}

pub fn is_valid_email(raw: &str) -> bool {
    EMAIL_PATTERN.is_match(raw.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fields::field_definitions;

    #[test]
    fn email_validator_requires_local_part_and_domain() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("press@studio.example.org"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
    }

    #[test]
    fn rating_accepts_zero_to_ten() {
        assert!(is_valid_rating("5.5"));
        assert!(is_valid_rating("0"));
        assert!(is_valid_rating("10"));
        assert!(!is_valid_rating("11"));
        assert!(!is_valid_rating("-1"));
        assert!(!is_valid_rating("abc"));
        assert!(!is_valid_rating("NaN"));
        assert_eq!(format_rating("5.5"), "5.5");
        assert_eq!(format_rating("07.50"), "7.5");
        assert_eq!(format_rating("8"), "8");
    }

    #[test]
    fn rating_rejects_exponents_and_normalizes_negative_zero() {
        assert!(!is_valid_rating("1e1"));
        assert_eq!(format_rating("1e1"), "1e1");
        assert!(!is_valid_rating("inf"));
        assert!(is_valid_rating("-0"));
        assert_eq!(format_rating("-0"), "0");
        assert_eq!(format_rating("-0.0"), "0");
        assert!(is_valid_rating(".5"));
        assert!(is_valid_rating("+7"));
    }

    #[test]
    fn release_date_formats_long_month() {
        assert_eq!(format_release_date("2020-01-15"), "January 15, 2020");
        assert_eq!(format_release_date("1999-12-03"), "December 3, 1999");
        assert_eq!(format_release_date("soon"), "soon");
        assert!(!is_valid_release_date("2020-02-30"));
    }

    #[test]
    fn controls_follow_the_modifier_table() {
        let controls: Vec<_> = field_definitions().iter().map(control_for).collect();
        assert_eq!(
            controls,
            vec![
                ControlKind::Input(InputType::Text),
                ControlKind::Input(InputType::Date),
                ControlKind::Input(InputType::Text),
                ControlKind::Select(GENRES),
                ControlKind::Input(InputType::Text),
            ]
        );
    }

    #[test]
    fn unknown_keys_have_no_modifier() {
        assert!(modifier_for_key("movie_title").is_none());
        assert!(modifier_for_key("director").is_none());
        assert_eq!(display_value(FieldKey::MovieTitle, "Heat"), "Heat");
    }
}
