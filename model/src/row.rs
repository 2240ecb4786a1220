//! FILENAME: model/src/row.rs
//! Row access and row identity.
//!
//! Rows are opaque application records; the engine never enforces a
//! schema on them. Named-field columns read rows through the
//! `RowRecord` trait, and row identity (for selection) is a `RowKey`.

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// How the engine reads named fields out of an opaque row.
///
/// A missing field returns `None`; the engine treats that as
/// `Value::Empty` for sorting and filtering, never as an error.
pub trait RowRecord {
    fn field(&self, key: &str) -> Option<Value>;
}

/// Identity of a row for selection purposes.
///
/// Defaults to the row's position in the source dataset; a caller can
/// supply a key function instead (e.g. a primary-key column) so
/// selection survives reordering of the source data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RowKey {
    /// Position in the source dataset (0-based).
    Index(usize),
    /// Caller-supplied stable key.
    Custom(String),
}

impl From<usize> for RowKey {
    fn from(index: usize) -> Self {
        RowKey::Index(index)
    }
}

impl From<&str> for RowKey {
    fn from(key: &str) -> Self {
        RowKey::Custom(key.to_string())
    }
}

impl From<String> for RowKey {
    fn from(key: String) -> Self {
        RowKey::Custom(key)
    }
}

/// A simple concrete row: an ordered list of (name, value) fields.
///
/// Host applications usually implement `RowRecord` on their own types;
/// `Record` exists for tests, demos, and callers with dynamic data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    pub fn new() -> Self {
        Record { fields: Vec::new() }
    }

    /// Adds a field, replacing any existing field with the same name.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_field(name, value);
        self
    }

    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        if let Some(existing) = self.fields.iter_mut().find(|(n, _)| *n == name) {
            existing.1 = value;
        } else {
            self.fields.push((name, value));
        }
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }
}

impl RowRecord for Record {
    fn field(&self, key: &str) -> Option<Value> {
        self.fields
            .iter()
            .find(|(n, _)| n == key)
            .map(|(_, v)| v.clone())
    }
}
