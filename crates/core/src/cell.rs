use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Format used when a timestamp cell is rendered as text.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single cell value as exchanged with a spreadsheet host.
///
/// Timestamps serialize as ISO 8601 text. Text always deserializes as
/// `String`, even when it looks like a timestamp, so cells round-trip as
/// text; use [`CellValue::as_datetime`] to read it back as a timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// Check if the value is null
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Check if the cell has no content (null or an empty string)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Null => true,
            CellValue::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Try to get the value as a boolean
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Bool(b) => Some(*b),
            CellValue::Int(i) => Some(*i != 0),
            CellValue::Float(f) => Some(*f != 0.0),
            CellValue::String(s) => s.parse().ok(),
            CellValue::Null | CellValue::DateTime(_) => None,
        }
    }

    /// Try to get the value as an integer
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            CellValue::Int(i) => Some(*i),
            CellValue::Float(f) => Some(*f as i64),
            CellValue::Bool(b) => Some(i64::from(*b)),
            CellValue::String(s) => s.trim().parse().ok(),
            CellValue::Null | CellValue::DateTime(_) => None,
        }
    }

    /// Try to get the value as a float
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            CellValue::Float(f) => Some(*f),
            CellValue::Int(i) => Some(*i as f64),
            CellValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            CellValue::String(s) => s.trim().parse().ok(),
            CellValue::Null | CellValue::DateTime(_) => None,
        }
    }

    /// Try to get the value as a timestamp
    #[must_use]
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            CellValue::DateTime(dt) => Some(*dt),
            CellValue::String(s) => NaiveDateTime::parse_from_str(s, DATETIME_FORMAT)
                .or_else(|_| s.parse())
                .ok(),
            _ => None,
        }
    }

    /// Get the value rendered as text
    #[must_use]
    pub fn as_str(&self) -> String {
        self.to_string()
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Null
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Int(i) => write!(f, "{i}"),
            CellValue::Float(fl) => write!(f, "{fl}"),
            CellValue::DateTime(dt) => write!(f, "{}", dt.format(DATETIME_FORMAT)),
            CellValue::String(s) => write!(f, "{s}"),
        }
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<i32> for CellValue {
    fn from(i: i32) -> Self {
        CellValue::Int(i64::from(i))
    }
}

impl From<u32> for CellValue {
    fn from(i: u32) -> Self {
        CellValue::Int(i64::from(i))
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}

impl From<f32> for CellValue {
    fn from(f: f32) -> Self {
        CellValue::Float(f64::from(f))
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(dt: NaiveDateTime) -> Self {
        CellValue::DateTime(dt)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => CellValue::Null,
        }
    }
}

/// Convert a row of convertible values into cell values
pub fn row<T: Into<CellValue>>(values: impl IntoIterator<Item = T>) -> Vec<CellValue> {
    values.into_iter().map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(12, 0, 0))
            .unwrap()
    }

    #[test]
    fn test_display() {
        assert_eq!(CellValue::Null.to_string(), "");
        assert_eq!(CellValue::Int(10).to_string(), "10");
        assert_eq!(CellValue::Float(10.0).to_string(), "10");
        assert_eq!(CellValue::Float(2.5).to_string(), "2.5");
        assert_eq!(CellValue::Bool(true).to_string(), "true");
        assert_eq!(
            CellValue::DateTime(noon(2024, 3, 1)).to_string(),
            "2024-03-01 12:00:00"
        );
    }

    #[test]
    fn test_is_empty() {
        assert!(CellValue::Null.is_empty());
        assert!(CellValue::from("").is_empty());
        assert!(!CellValue::from(" ").is_empty());
        assert!(!CellValue::Int(0).is_empty());
    }

    #[test]
    fn test_conversions() {
        assert_eq!(CellValue::Int(42).as_float(), Some(42.0));
        assert_eq!(CellValue::Float(3.9).as_int(), Some(3));
        assert_eq!(CellValue::Bool(true).as_int(), Some(1));
        assert_eq!(CellValue::from(" 42 ").as_int(), Some(42));
        assert_eq!(CellValue::from(None::<i64>), CellValue::Null);
        assert_eq!(CellValue::from(Some("x")), CellValue::from("x"));
    }

    #[test]
    fn test_datetime_from_text() {
        let value = CellValue::from("2024-03-01 12:00:00");
        assert_eq!(value.as_datetime(), Some(noon(2024, 3, 1)));
        assert_eq!(CellValue::Int(1).as_datetime(), None);
    }

    #[test]
    fn test_row_helper() {
        assert_eq!(
            row(["Name", "Score"]),
            vec![CellValue::from("Name"), CellValue::from("Score")]
        );
    }
}
