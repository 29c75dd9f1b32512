//! The record type: an ordered field-name to string-value mapping.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::schema::ID_FIELD;

/// One row of an entity kind.
///
/// Field order is significant and preserved through encoding and JSON
/// serialization; an empty-string value is a real value, not absence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from ordered name/value pairs.
    pub fn from_pairs(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    /// Build a record by zipping a decoded row with the schema's headers.
    ///
    /// Short rows are padded with empty strings; surplus values are dropped.
    pub fn from_row(headers: &[&str], values: Vec<String>) -> Self {
        let mut values = values.into_iter();
        let fields = headers
            .iter()
            .map(|h| (h.to_string(), values.next().unwrap_or_default()))
            .collect();
        Self { fields }
    }

    /// Value of the named field, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set a field, replacing an existing value or appending a new field.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value,
            None => self.fields.push((name.to_string(), value)),
        }
    }

    /// The store-assigned identifier, empty string if unset.
    pub fn id(&self) -> &str {
        self.get(ID_FIELD).unwrap_or("")
    }

    /// Iterate fields in declared order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
