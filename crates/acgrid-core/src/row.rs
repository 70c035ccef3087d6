#![forbid(unsafe_code)]

//! Row data access.
//!
//! The grid never owns row types. It reads cells through [`RowAccessor`],
//! which yields a loosely typed [`CellValue`] per column id.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single cell as seen by filters and sorting.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum CellValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl CellValue {
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Numeric view of the cell.
    ///
    /// Text is parsed after trimming; blank text and null have no number.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Null => None,
            Self::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Self::Number(n) => Some(*n),
            Self::Text(s) => {
                let s = s.trim();
                if s.is_empty() { None } else { s.parse().ok() }
            }
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Null renders as the empty string.
impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<&Value> for CellValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(n) => n.as_f64().map_or(Self::Null, Self::Number),
            Value::String(s) => Self::Text(s.clone()),
            other => Self::Text(other.to_string()),
        }
    }
}

/// Read access to one row's cells.
pub trait RowAccessor {
    /// Value of the cell in `column_id`; [`CellValue::Null`] when absent.
    fn get_value(&self, column_id: &str) -> CellValue;
}

impl<R: RowAccessor + ?Sized> RowAccessor for &R {
    fn get_value(&self, column_id: &str) -> CellValue {
        (**self).get_value(column_id)
    }
}

impl RowAccessor for HashMap<String, CellValue> {
    fn get_value(&self, column_id: &str) -> CellValue {
        self.get(column_id).cloned().unwrap_or_default()
    }
}

impl RowAccessor for BTreeMap<String, CellValue> {
    fn get_value(&self, column_id: &str) -> CellValue {
        self.get(column_id).cloned().unwrap_or_default()
    }
}

/// JSON objects expose their top-level fields; any other value has no cells.
impl RowAccessor for Value {
    fn get_value(&self, column_id: &str) -> CellValue {
        self.get(column_id).map(CellValue::from).unwrap_or_default()
    }
}
