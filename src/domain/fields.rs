use std::fmt;

use serde::Serialize;

/// Human-readable labels, in the order the form renders them.
pub const FIELD_LABELS: [&str; 5] = [
    "Movie Title",
    "Release Date",
    "Movie Rating",
    "Genre",
    "Studio Email",
];

/// Typed identity of every field the form knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKey {
    MovieTitle,
    ReleaseDate,
    MovieRating,
    Genre,
    StudioEmail,
}

impl FieldKey {
    pub const ALL: [FieldKey; 5] = [
        FieldKey::MovieTitle,
        FieldKey::ReleaseDate,
        FieldKey::MovieRating,
        FieldKey::Genre,
        FieldKey::StudioEmail,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldKey::MovieTitle => "movie_title",
            FieldKey::ReleaseDate => "release_date",
            FieldKey::MovieRating => "movie_rating",
            FieldKey::Genre => "genre",
            FieldKey::StudioEmail => "studio_email",
        }
    }

    pub fn from_key(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == raw)
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lowercases the label and replaces every space with an underscore.
pub fn derive_key(label: &str) -> String {
    label.to_lowercase().replace(' ', "_")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    pub label: &'static str,
    pub key: String,
    pub id: FieldKey,
}

impl FieldDefinition {
    pub fn display_label(&self) -> String {
        self.label.to_string()
    }
}

/// Builds the registry from [`FIELD_LABELS`].
///
/// Every label must derive to a key that [`FieldKey::from_key`] recognises;
/// labels that do not are skipped with a warning so a typo in the table never
/// produces an untyped field.
pub fn field_definitions() -> Vec<FieldDefinition> {
    FIELD_LABELS
        .into_iter()
        .filter_map(|label| {
            let key = derive_key(label);
            match FieldKey::from_key(&key) {
                Some(id) => Some(FieldDefinition { label, key, id }),
                None => {
                    tracing::warn!(label, key = %key, "label does not map to a known field key");
                    None
                }
            }
        })
        .collect()
}
