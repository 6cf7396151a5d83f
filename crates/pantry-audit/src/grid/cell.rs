//! Cell values as the checkers see them.

use std::borrow::Cow;
use std::fmt;

/// A single spreadsheet cell.
///
/// Absent cells, empty cells and whitespace-only text are all the same thing
/// to the checkers: every emptiness decision goes through [`CellValue::is_empty`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
}

impl CellValue {
    /// Build a text cell, collapsing blank strings to `Empty`.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.trim().is_empty() {
            Self::Empty
        } else {
            Self::Text(value)
        }
    }

    /// Whether the cell carries no usable value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(text) => text.trim().is_empty(),
            Self::Number(_) => false,
        }
    }

    /// Whether the cell holds a number equal to zero.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Number(n) if *n == 0.0)
    }

    /// Trimmed textual form, or `None` for empty cells.
    #[must_use]
    pub fn trimmed(&self) -> Option<Cow<'_, str>> {
        if self.is_empty() {
            return None;
        }
        match self {
            Self::Text(text) => Some(Cow::Borrowed(text.trim())),
            Self::Number(_) => Some(Cow::Owned(self.to_string())),
            Self::Empty => None,
        }
    }
}

impl fmt::Display for CellValue {
    #[allow(clippy::float_cmp)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Text(text) => f.write_str(text),
            Self::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{n:.0}"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}
