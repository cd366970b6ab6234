//! Header normalization and the header-name to column mapping.

use indexmap::IndexMap;
use regex::Regex;
use sheetrows_core::CellValue;
use std::sync::OnceLock;

fn line_break_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\r\n|\n|\r").expect("valid regex"))
}

fn whitespace_run_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s\s+").expect("valid regex"))
}

/// Normalize header text for indexing.
///
/// Line breaks (`\r\n`, `\n`, `\r`) become a single space, then any run of
/// two or more whitespace characters collapses to one space. Leading and
/// trailing whitespace is kept. Applying the transform twice gives the same
/// result as applying it once.
///
/// ```
/// use sheetrows_table::normalize_header;
///
/// assert_eq!(normalize_header("Full\nName"), "Full Name");
/// assert_eq!(normalize_header("Due \r\n  Date"), "Due Date");
/// ```
#[must_use]
pub fn normalize_header(text: &str) -> String {
    let single_line = line_break_re().replace_all(text, " ");
    whitespace_run_re()
        .replace_all(&single_line, " ")
        .into_owned()
}

/// Immutable mapping from normalized header text to 0-based column offset.
///
/// Built once from a header row. When the same normalized text appears more
/// than once, the last column wins while the name keeps the position of its
/// first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderIndex {
    columns: IndexMap<String, usize>,
}

impl HeaderIndex {
    /// Build the index from a header row
    #[must_use]
    pub fn from_row(cells: &[CellValue]) -> Self {
        let mut columns = IndexMap::with_capacity(cells.len());
        for (col, cell) in cells.iter().enumerate() {
            let name = normalize_header(&cell.as_str());
            if let Some(previous) = columns.insert(name.clone(), col) {
                tracing::warn!(
                    header = %name,
                    previous,
                    column = col,
                    "duplicate header, later column wins"
                );
            }
        }
        HeaderIndex { columns }
    }

    /// Column offset for a header name (exact match on normalized text)
    #[must_use]
    pub fn get(&self, name: &str) -> Option<usize> {
        self.columns.get(name).copied()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Header names in first-seen order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// (name, column) pairs in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.columns.iter().map(|(name, col)| (name.as_str(), *col))
    }

    /// Number of distinct header names
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetrows_core::cells;

    #[test]
    fn test_normalize_line_breaks() {
        assert_eq!(normalize_header("Full\nName"), "Full Name");
        assert_eq!(normalize_header("Full\r\nName"), "Full Name");
        assert_eq!(normalize_header("Full\rName"), "Full Name");
        assert_eq!(normalize_header("a\n\nb"), "a b");
    }

    #[test]
    fn test_normalize_collapses_runs_only() {
        assert_eq!(normalize_header("a   b\t\tc"), "a b c");
        // A single tab is not a run.
        assert_eq!(normalize_header("a\tb"), "a\tb");
        // No trimming.
        assert_eq!(normalize_header(" Score "), " Score ");
        assert_eq!(normalize_header("  Score"), " Score");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for text in [
            "Full\nName",
            "  lead",
            "a \r\n\t b",
            "plain",
            "",
            "tab\tonly",
            "x\u{a0}\u{a0}y",
        ] {
            let once = normalize_header(text);
            assert_eq!(normalize_header(&once), once, "input {text:?}");
        }
    }

    #[test]
    fn test_index_from_row() {
        let index = HeaderIndex::from_row(&cells!["Name", "Full\nName", 2024]);
        assert_eq!(index.get("Name"), Some(0));
        assert_eq!(index.get("Full Name"), Some(1));
        assert_eq!(index.get("2024"), Some(2));
        assert_eq!(index.get("Full\nName"), None);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_duplicate_header_last_wins() {
        let index = HeaderIndex::from_row(&cells!["Id", "Note", "Id"]);
        assert_eq!(index.get("Id"), Some(2));
        assert_eq!(index.names().collect::<Vec<_>>(), vec!["Id", "Note"]);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_blank_header_cells_share_one_key() {
        let index = HeaderIndex::from_row(&cells!["A", CellValue::Null, ""]);
        assert_eq!(index.get(""), Some(2));
    }

    #[test]
    fn test_empty_row() {
        let index = HeaderIndex::from_row(&[]);
        assert!(index.is_empty());
        assert!(!index.contains("Name"));
    }
}
