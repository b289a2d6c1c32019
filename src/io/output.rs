use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::domain::MovieCollection;

use super::DocumentFormat;

/// Controls how the saved movies are printed once the UI closes.
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format: DocumentFormat,
    pub pretty: bool,
    /// Print even when nothing was saved.
    pub emit_empty: bool,
}

impl OutputOptions {
    pub fn new(format: DocumentFormat) -> Self {
        Self {
            format,
            pretty: true,
            emit_empty: false,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_emit_empty(mut self, emit_empty: bool) -> Self {
        self.emit_empty = emit_empty;
        self
    }
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self::new(DocumentFormat::Json)
    }
}

#[derive(Serialize)]
struct MoviesDocument<'a> {
    movies: &'a MovieCollection,
}

/// Writes the collection to `writer` in the configured format. Returns
/// `false` when there was nothing to write.
pub fn emit_to(
    writer: &mut impl Write,
    collection: &MovieCollection,
    options: &OutputOptions,
) -> Result<bool> {
    if collection.is_empty() && !options.emit_empty {
        return Ok(false);
    }
    let payload = serialize_collection(collection, options)?;
    writer
        .write_all(payload.as_bytes())
        .and_then(|_| writer.write_all(b"\n"))
        .and_then(|_| writer.flush())
        .context("failed to write saved movies")?;
    Ok(true)
}

pub fn emit(collection: &MovieCollection, options: &OutputOptions) -> Result<bool> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    emit_to(&mut handle, collection, options)
}

pub fn serialize_collection(collection: &MovieCollection, options: &OutputOptions) -> Result<String> {
    let document = MoviesDocument { movies: collection };
    match options.format {
        DocumentFormat::Json => {
            if options.pretty {
                serde_json::to_string_pretty(&document).context("failed to serialize JSON")
            } else {
                serde_json::to_string(&document).context("failed to serialize JSON")
            }
        }
        #[cfg(feature = "yaml")]
        DocumentFormat::Yaml => serde_yaml::to_string(&document).context("failed to serialize YAML"),
        #[cfg(feature = "toml")]
        DocumentFormat::Toml => {
            if options.pretty {
                toml::to_string_pretty(&document).context("failed to serialize TOML")
            } else {
                toml::to_string(&document).context("failed to serialize TOML")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FieldKey, RecordCandidate, field_definitions, submit};
    use serde_json::{Value, json};

    fn one_movie() -> MovieCollection {
        let candidate = RecordCandidate::new()
            .with(FieldKey::MovieTitle, "Heat")
            .with(FieldKey::ReleaseDate, "1995-12-15")
            .with(FieldKey::MovieRating, "8.3")
            .with(FieldKey::Genre, "Thriller")
            .with(FieldKey::StudioEmail, "info@warner.com");
        submit(&MovieCollection::new(), &field_definitions(), &candidate).unwrap()
    }

    #[test]
    fn empty_collection_is_skipped_by_default() {
        let mut out = Vec::new();
        let wrote = emit_to(&mut out, &MovieCollection::new(), &OutputOptions::default()).unwrap();
        assert!(!wrote);
        assert!(out.is_empty());
    }

    #[test]
    fn json_uses_derived_keys_and_raw_values() {
        let mut out = Vec::new();
        let options = OutputOptions::default().with_pretty(false);
        assert!(emit_to(&mut out, &one_movie(), &options).unwrap());
        let value: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value, expected_movies());
    }

    #[test]
    fn emit_empty_writes_an_empty_list() {
        let options = OutputOptions::default()
            .with_pretty(false)
            .with_emit_empty(true);
        let payload = serialize_collection(&MovieCollection::new(), &options).unwrap();
        assert_eq!(payload, r#"{"movies":[]}"#);
    }

    fn expected_movies() -> Value {
        json!({
            "movies": [{
                "movie_title": "Heat",
                "release_date": "1995-12-15",
                "movie_rating": "8.3",
                "genre": "Thriller",
                "studio_email": "info@warner.com"
            }]
        })
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn yaml_output_reads_back_as_strings() {
        let options = OutputOptions::new(DocumentFormat::Yaml);
        let payload = serialize_collection(&one_movie(), &options).unwrap();
        let value: Value = serde_yaml::from_str(&payload).unwrap();
        assert_eq!(value, expected_movies());

        let empty = serialize_collection(&MovieCollection::new(), &options.with_emit_empty(true))
            .unwrap();
        assert_eq!(empty.trim(), "movies: []");
    }

    #[cfg(feature = "toml")]
    #[test]
    fn toml_output_uses_array_of_tables() {
        let options = OutputOptions::new(DocumentFormat::Toml);
        let payload = serialize_collection(&one_movie(), &options).unwrap();
        assert!(payload.contains("[[movies]]"));
        let value: Value = toml::from_str(&payload).unwrap();
        assert_eq!(value, expected_movies());

        let empty = serialize_collection(&MovieCollection::new(), &options.with_emit_empty(true))
            .unwrap();
        assert_eq!(empty.trim(), "movies = []");
    }
}
