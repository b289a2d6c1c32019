use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use super::fields::FieldKey;

/// One submitted movie: raw values keyed by field, in registry order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MovieRecord {
    values: IndexMap<FieldKey, String>,
}

impl MovieRecord {
    pub(crate) fn from_values(values: IndexMap<FieldKey, String>) -> Self {
        Self { values }
    }

    pub fn get(&self, key: FieldKey) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &str)> {
        self.values.iter().map(|(key, value)| (*key, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Raw values gathered from the form before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordCandidate {
    values: IndexMap<FieldKey, String>,
}

impl RecordCandidate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: FieldKey, raw: impl Into<String>) -> Self {
        self.insert(key, raw);
        self
    }

    pub fn insert(&mut self, key: FieldKey, raw: impl Into<String>) {
        self.values.insert(key, raw.into());
    }

    pub fn raw(&self, key: FieldKey) -> &str {
        self.values.get(&key).map(String::as_str).unwrap_or("")
    }
}

/// Append-only list of submitted records.
///
/// Cloning is cheap and clones share storage; [`MovieCollection::appended`]
/// always builds a fresh value, so a handle held elsewhere keeps seeing the
/// records it was created with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieCollection {
    records: Arc<Vec<MovieRecord>>,
}

impl MovieCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn appended(&self, record: MovieRecord) -> Self {
        let mut records = Vec::with_capacity(self.records.len() + 1);
        records.extend(self.records.iter().cloned());
        records.push(record);
        Self {
            records: Arc::new(records),
        }
    }

    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Serialize for MovieCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.records.iter())
    }
}
