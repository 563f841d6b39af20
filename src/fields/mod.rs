// src/fields/mod.rs

mod catalog;

pub use catalog::*;

use catalog::{FIELD_PATTERNS, capture};

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Values pulled from a claim document, one slot per catalog field.
///
/// The key set is always the full catalog; a field that was not found is
/// `None`. An empty string is a found (present) value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFields {
    values: Vec<(&'static str, Option<String>)>,
}

impl ExtractedFields {
    /// Every catalog field, all absent.
    pub fn empty() -> Self {
        Self {
            values: FIELD_NAMES.iter().map(|&name| (name, None)).collect(),
        }
    }

    /// Value of `name`, or `None` when it is absent or not a catalog field.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(n, _)| *n == name)
            .and_then(|(_, v)| v.as_deref())
    }

    /// Overwrite one field. Returns `false` for names outside the catalog.
    pub fn set(&mut self, name: &str, value: Option<String>) -> bool {
        match self.values.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => {
                slot.1 = value;
                true
            }
            None => false,
        }
    }

    /// Builder form of [`set`](Self::set), handy for assembling fixtures.
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, Some(value.into()));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Option<&str>)> + '_ {
        self.values.iter().map(|(n, v)| (*n, v.as_deref()))
    }

    /// How many fields were found, out of the whole catalog.
    pub fn coverage(&self) -> (usize, usize) {
        let filled = self.values.iter().filter(|(_, v)| v.is_some()).count();
        (filled, self.values.len())
    }
}

impl Serialize for ExtractedFields {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (name, value) in &self.values {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Extract every catalog field from raw document text.
///
/// Each field is matched independently; text with no recognisable labels
/// yields an all-absent map.
pub fn extract_fields(text: &str) -> ExtractedFields {
    ExtractedFields {
        values: FIELD_PATTERNS
            .iter()
            .map(|pattern| (pattern.name, capture(pattern, text)))
            .collect(),
    }
}
