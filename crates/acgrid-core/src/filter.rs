#![forbid(unsafe_code)]

//! Column and global filtering.
//!
//! Filter values arrive as strings from the filter inputs. A value is either
//! a plain search term or a JSON object `{"operator": ..., "value": ...}`.
//! Each built-in predicate has the [`FilterFn`] shape so it can be swapped for
//! a custom one per column.
//!
//! Number filters compare JSON `greaterThan`/`lessThan` operators for real
//! (matched case-insensitively), and an empty or non-numeric cell never
//! matches a numeric filter, not even `0`.
//!
//! # Example
//!
//! ```
//! use acgrid_core::filter::{FilterColumn, FilterState, FilterType};
//! use serde_json::json;
//!
//! let columns = [
//!     FilterColumn::new("name"),
//!     FilterColumn::new("age").with_type(FilterType::Number),
//! ];
//! let mut state = FilterState::default();
//! state.set_column_filter("age", ">30");
//!
//! assert!(state.matches(&json!({ "name": "Ada", "age": 36 }), &columns));
//! assert!(!state.matches(&json!({ "name": "Bob", "age": 25 }), &columns));
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::row::{CellValue, RowAccessor};

/// Built-in predicate family of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FilterType {
    #[default]
    Text,
    Number,
    Date,
    /// Uses the column's own [`FilterFn`]; text matching when it has none.
    Custom,
}

impl FilterType {
    /// Run the built-in predicate for this type.
    pub fn apply<R: RowAccessor + ?Sized>(self, row: &R, column_id: &str, value: &str) -> bool {
        match self {
            Self::Text | Self::Custom => text_filter(row, column_id, value),
            Self::Number => number_filter(row, column_id, value),
            Self::Date => date_filter(row, column_id, value),
        }
    }
}

/// Predicate `(row, column_id, filter_value) -> keep`.
pub type FilterFn<R> = Rc<dyn Fn(&R, &str, &str) -> bool>;

/// Filtering metadata for one column.
pub struct FilterColumn<R: ?Sized> {
    pub id: String,
    pub filter_type: FilterType,
    /// Disabled columns ignore their column filter and the global filter.
    pub enable_filter: bool,
    pub filter_fn: Option<FilterFn<R>>,
}

impl<R: ?Sized> FilterColumn<R> {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            filter_type: FilterType::Text,
            enable_filter: true,
            filter_fn: None,
        }
    }

    #[must_use]
    pub fn with_type(mut self, filter_type: FilterType) -> Self {
        self.filter_type = filter_type;
        self
    }

    #[must_use]
    pub fn with_filter_fn(mut self, filter_fn: impl Fn(&R, &str, &str) -> bool + 'static) -> Self {
        self.filter_fn = Some(Rc::new(filter_fn));
        self.filter_type = FilterType::Custom;
        self
    }

    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enable_filter = false;
        self
    }
}

impl<R: RowAccessor + ?Sized> FilterColumn<R> {
    /// Whether `row` passes `value` in this column.
    pub fn accepts(&self, row: &R, value: &str) -> bool {
        match &self.filter_fn {
            Some(filter_fn) => filter_fn(row, &self.id, value),
            None => self.filter_type.apply(row, &self.id, value),
        }
    }
}

impl<R: ?Sized> Clone for FilterColumn<R> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            filter_type: self.filter_type,
            enable_filter: self.enable_filter,
            filter_fn: self.filter_fn.clone(),
        }
    }
}

impl<R: ?Sized> fmt::Debug for FilterColumn<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterColumn")
            .field("id", &self.id)
            .field("filter_type", &self.filter_type)
            .field("enable_filter", &self.enable_filter)
            .field("filter_fn", &self.filter_fn.as_ref().map(|_| ".."))
            .finish()
    }
}

/// Current filter inputs of a grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct FilterState {
    /// Search term matched against every filterable column.
    pub global_filter: Option<String>,
    /// Filter value per column id.
    pub column_filters: BTreeMap<String, String>,
}

impl FilterState {
    /// Set or clear the global filter; blank input clears it.
    pub fn set_global_filter(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.global_filter = (!value.trim().is_empty()).then_some(value);
    }

    /// Set or clear one column's filter; blank input clears it.
    pub fn set_column_filter(&mut self, column_id: impl Into<String>, value: impl Into<String>) {
        let column_id = column_id.into();
        let value = value.into();
        if value.trim().is_empty() {
            self.column_filters.remove(&column_id);
        } else {
            self.column_filters.insert(column_id, value);
        }
    }

    pub fn clear(&mut self) {
        self.global_filter = None;
        self.column_filters.clear();
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.global_filter.is_some() || !self.column_filters.is_empty()
    }

    /// Whether `row` survives every active filter.
    ///
    /// Each column filter must pass. Filters on unknown or disabled columns
    /// are ignored. A global filter must be contained in at least one
    /// enabled column.
    pub fn matches<R: RowAccessor + ?Sized>(&self, row: &R, columns: &[FilterColumn<R>]) -> bool {
        let enabled = || columns.iter().filter(|c| c.enable_filter);

        let columns_pass = self.column_filters.iter().all(|(id, value)| {
            enabled()
                .find(|c| &c.id == id)
                .is_none_or(|column| column.accepts(row, value))
        });
        if !columns_pass {
            return false;
        }

        match self.global_filter.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => {
                let term = term.to_lowercase();
                enabled().any(|c| row.get_value(&c.id).to_string().to_lowercase().contains(&term))
            }
            _ => true,
        }
    }

    /// Rows of `rows` that pass, in order.
    pub fn apply<'a, R: RowAccessor>(
        &self,
        rows: &'a [R],
        columns: &[FilterColumn<R>],
    ) -> Vec<&'a R> {
        rows.iter().filter(|row| self.matches(*row, columns)).collect()
    }
}

// ── Text ────────────────────────────────────────────────────────────────

/// Comparison performed by [`text_filter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextOperator {
    Equals,
    StartsWith,
    EndsWith,
    #[default]
    Contains,
    NotContains,
    NotEqual,
    Blank,
    NotBlank,
}

impl TextOperator {
    /// Parse an operator name; unknown names yield `None`.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Some(match name {
            "equals" => Self::Equals,
            "startsWith" => Self::StartsWith,
            "endsWith" => Self::EndsWith,
            "contains" => Self::Contains,
            "notContains" => Self::NotContains,
            "notEqual" => Self::NotEqual,
            "blank" => Self::Blank,
            "notBlank" => Self::NotBlank,
            _ => return None,
        })
    }

    /// Compare lowercased `cell` against lowercased `term`.
    #[must_use]
    pub fn eval(self, cell: &str, term: &str) -> bool {
        match self {
            Self::Equals => cell == term,
            Self::StartsWith => cell.starts_with(term),
            Self::EndsWith => cell.ends_with(term),
            Self::Contains => cell.contains(term),
            Self::NotContains => !cell.contains(term),
            Self::NotEqual => cell != term,
            Self::Blank => cell.is_empty(),
            Self::NotBlank => !cell.is_empty(),
        }
    }
}

/// Parsed text filter input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextCondition {
    pub operator: TextOperator,
    /// Lowercased search term.
    pub term: String,
}

impl TextCondition {
    /// Parse a plain term or a `{"operator", "value"}` object.
    ///
    /// Objects without an operator, and anything that fails to parse as
    /// JSON, are treated as a plain `contains` term.
    #[must_use]
    pub fn parse(filter_value: &str) -> Self {
        if let Some((operator, value)) = parse_operator_object(filter_value) {
            return Self {
                operator: TextOperator::parse(&operator).unwrap_or_default(),
                term: value.map(json_text).unwrap_or_default().to_lowercase(),
            };
        }
        Self {
            operator: TextOperator::Contains,
            term: filter_value.to_lowercase(),
        }
    }

    #[must_use]
    pub fn matches(&self, cell: &CellValue) -> bool {
        self.operator.eval(&cell.to_string().to_lowercase(), &self.term)
    }
}

/// Case-insensitive text predicate.
pub fn text_filter<R: RowAccessor + ?Sized>(row: &R, column_id: &str, filter_value: &str) -> bool {
    TextCondition::parse(filter_value).matches(&row.get_value(column_id))
}

// ── Number ──────────────────────────────────────────────────────────────

/// Comparison performed by [`number_filter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NumberOperator {
    #[default]
    Equals,
    GreaterThan,
    LessThan,
}

impl NumberOperator {
    /// Parse an operator name case-insensitively; unknown names mean equals.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "greaterthan" | ">" => Self::GreaterThan,
            "lessthan" | "<" => Self::LessThan,
            _ => Self::Equals,
        }
    }

    #[must_use]
    pub fn eval(self, cell: f64, target: f64) -> bool {
        match self {
            Self::Equals => cell == target,
            Self::GreaterThan => cell > target,
            Self::LessThan => cell < target,
        }
    }
}

/// Parsed numeric filter input. `None` target means the filter passes all rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberCondition {
    pub operator: NumberOperator,
    pub target: Option<f64>,
}

impl NumberCondition {
    /// Parse `">N"`, `"<N"`, `"N"` or `{"operator", "value"}`.
    #[must_use]
    pub fn parse(filter_value: &str) -> Self {
        let filter = filter_value.trim();

        if let Some((operator, value)) = parse_operator_object(filter) {
            let target = match value {
                None | Some(Value::Null) => None,
                Some(Value::Number(n)) => n.as_f64(),
                Some(other) => parse_number(&json_text(other)),
            };
            return Self {
                operator: NumberOperator::parse(&operator),
                target,
            };
        }
        if let Some(rest) = filter.strip_prefix('>') {
            return Self {
                operator: NumberOperator::GreaterThan,
                target: parse_number(rest),
            };
        }
        if let Some(rest) = filter.strip_prefix('<') {
            return Self {
                operator: NumberOperator::LessThan,
                target: parse_number(rest),
            };
        }
        Self {
            operator: NumberOperator::Equals,
            target: parse_number(filter),
        }
    }

    /// Cells without a numeric value fail any active condition.
    #[must_use]
    pub fn matches(&self, cell: &CellValue) -> bool {
        let Some(target) = self.target else {
            return true;
        };
        cell.as_number()
            .is_some_and(|value| self.operator.eval(value, target))
    }
}

/// Numeric predicate. Blank or unparseable filters keep every row.
pub fn number_filter<R: RowAccessor + ?Sized>(
    row: &R,
    column_id: &str,
    filter_value: &str,
) -> bool {
    NumberCondition::parse(filter_value).matches(&row.get_value(column_id))
}

fn parse_number(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok().filter(|n| !n.is_nan())
}

// ── Date ────────────────────────────────────────────────────────────────

/// Calendar day of a date string.
///
/// Accepts RFC 3339 (the day in its own offset), `YYYY-MM-DD`,
/// `YYYY-MM-DD HH:MM:SS` and `YYYY-MM-DDTHH:MM:SS`.
#[must_use]
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
}

/// Calendar day of a cell. Numbers are milliseconds since the Unix epoch (UTC).
#[must_use]
pub fn cell_date(cell: &CellValue) -> Option<NaiveDate> {
    match cell {
        CellValue::Text(s) => parse_date(s),
        CellValue::Number(ms) if ms.is_finite() => {
            DateTime::from_timestamp_millis(*ms as i64).map(|dt| dt.date_naive())
        }
        _ => None,
    }
}

/// Same-day predicate. An unparseable filter keeps every row; an
/// unparseable cell is dropped.
pub fn date_filter<R: RowAccessor + ?Sized>(row: &R, column_id: &str, filter_value: &str) -> bool {
    let Some(target) = parse_date(filter_value) else {
        return true;
    };
    cell_date(&row.get_value(column_id)) == Some(target)
}

// ── JSON filter objects ─────────────────────────────────────────────────

/// `{"operator": "...", "value": ...}` with a non-empty operator.
fn parse_operator_object(filter: &str) -> Option<(String, Option<Value>)> {
    if !filter.starts_with('{') {
        return None;
    }
    let Value::Object(mut object) = serde_json::from_str::<Value>(filter).ok()? else {
        return None;
    };
    let operator = object
        .get("operator")
        .and_then(Value::as_str)
        .filter(|op| !op.is_empty())?
        .to_owned();
    Some((operator, object.remove("value")))
}

fn json_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    }
}
