//! Plain-string view of the saved movies, shared by the table widget and tests.

use crate::domain::{FieldDefinition, MovieCollection, MovieRecord, display_value};

/// Column labels, or `None` while nothing has been saved.
pub fn header_row(
    collection: &MovieCollection,
    definitions: &[FieldDefinition],
) -> Option<Vec<String>> {
    if collection.is_empty() {
        return None;
    }
    Some(
        definitions
            .iter()
            .map(FieldDefinition::display_label)
            .collect(),
    )
}

pub fn record_rows(
    collection: &MovieCollection,
    definitions: &[FieldDefinition],
) -> Vec<Vec<String>> {
    collection
        .records()
        .iter()
        .map(|record| record_cells(record, definitions))
        .collect()
}

pub fn record_cells(record: &MovieRecord, definitions: &[FieldDefinition]) -> Vec<String> {
    definitions
        .iter()
        .map(|definition| display_value(definition.id, record.get(definition.id).unwrap_or("")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FieldKey, RecordCandidate, field_definitions, submit};

    #[test]
    fn header_hidden_until_first_record() {
        let definitions = field_definitions();
        let empty = MovieCollection::new();
        assert!(header_row(&empty, &definitions).is_none());
        assert!(record_rows(&empty, &definitions).is_empty());
    }

    #[test]
    fn rows_apply_formatters_per_column() {
        let definitions = field_definitions();
        let candidate = RecordCandidate::new()
            .with(FieldKey::MovieTitle, "Parasite")
            .with(FieldKey::ReleaseDate, "2020-01-15")
            .with(FieldKey::MovieRating, "08.50")
            .with(FieldKey::Genre, "Thriller")
            .with(FieldKey::StudioEmail, "press@neon.com");
        let collection = submit(&MovieCollection::new(), &definitions, &candidate).unwrap();

        let header = header_row(&collection, &definitions).unwrap();
        assert_eq!(
            header,
            vec!["Movie Title", "Release Date", "Movie Rating", "Genre", "Studio Email"]
        );
        let rows = record_rows(&collection, &definitions);
        assert_eq!(
            rows,
            vec![vec![
                "Parasite".to_string(),
                "January 15, 2020".to_string(),
                "8.5".to_string(),
                "Thriller".to_string(),
                "press@neon.com".to_string(),
            ]]
        );
        assert_eq!(
            collection.records()[0].get(FieldKey::MovieRating),
            Some("08.50"),
            "records keep the raw value"
        );
    }
}
