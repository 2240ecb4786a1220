//! FILENAME: model/src/value.rs
//! Dynamic cell values and their locale-agnostic total order.
//!
//! Every field the grid reads out of a row is normalized into a
//! `Value`. Sorting and filtering never touch the host's row types
//! directly; they operate on these normalized values, so one malformed
//! row degrades to `Empty` instead of breaking the rest of the table.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A normalized field value extracted from a row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Missing/null/undefined. Sorts after every other value.
    Empty,
    Number(f64),
    Text(String),
    Boolean(bool),
}

impl Value {
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    /// Returns true for `Empty` and for NaN numbers (which are treated
    /// as missing for ordering purposes).
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Empty => true,
            Value::Number(n) => n.is_nan(),
            _ => false,
        }
    }

    /// The default display string, also used as the filter text.
    /// Numbers print without trailing zeros, booleans as TRUE/FALSE.
    pub fn display_string(&self) -> String {
        match self {
            Value::Empty => String::new(),
            Value::Number(n) => format!("{}", n),
            Value::Text(s) => s.clone(),
            Value::Boolean(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        }
    }

    /// Total order used for sorting: numbers compare numerically,
    /// strings by code unit, booleans false < true. Across types the
    /// rank is Number < Text < Boolean < Empty, so missing values
    /// always land at the end of an ascending sort.
    pub fn total_cmp(&self, other: &Value) -> Ordering {
        use Value::*;
        match (self.is_empty(), other.is_empty()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Greater,
            (false, true) => return Ordering::Less,
            (false, false) => {}
        }
        match (self, other) {
            (Number(a), Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Number(_), _) => Ordering::Less,
            (_, Number(_)) => Ordering::Greater,
            (Text(a), Text(b)) => a.cmp(b),
            (Text(_), _) => Ordering::Less,
            (_, Text(_)) => Ordering::Greater,
            (Boolean(a), Boolean(b)) => a.cmp(b),
            // Empty cases are handled by the is_empty check above.
            _ => Ordering::Equal,
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Value::Empty,
        }
    }
}
