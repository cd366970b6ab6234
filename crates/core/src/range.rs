use crate::error::{HostError, HostResult};
use std::fmt;

/// A rectangular block of cells in host coordinates.
///
/// `row` and `column` are 1-based, matching how spreadsheet hosts address
/// their grids. A range always spans at least one row and one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridRange {
    row: usize,
    column: usize,
    num_rows: usize,
    num_columns: usize,
}

impl GridRange {
    /// Create a range starting at (`row`, `column`) spanning the given size
    ///
    /// # Errors
    ///
    /// Returns `HostError::InvalidRange` if the origin is below 1, the
    /// range is empty, or its last row or column does not fit in `usize`.
    pub fn new(row: usize, column: usize, num_rows: usize, num_columns: usize) -> HostResult<Self> {
        if row == 0
            || column == 0
            || num_rows == 0
            || num_columns == 0
            || (row - 1).checked_add(num_rows).is_none()
            || (column - 1).checked_add(num_columns).is_none()
        {
            return Err(HostError::InvalidRange {
                row,
                column,
                num_rows,
                num_columns,
            });
        }
        Ok(GridRange {
            row,
            column,
            num_rows,
            num_columns,
        })
    }

    /// A single-cell range
    pub fn cell(row: usize, column: usize) -> HostResult<Self> {
        Self::new(row, column, 1, 1)
    }

    /// A range sized to fit `values`, anchored at (`row`, `column`).
    ///
    /// The width is taken from the first row.
    pub fn for_values<T>(row: usize, column: usize, values: &[Vec<T>]) -> HostResult<Self> {
        let width = values.first().map_or(0, Vec::len);
        Self::new(row, column, values.len(), width)
    }

    #[must_use]
    pub fn row(&self) -> usize {
        self.row
    }

    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }

    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    #[must_use]
    pub fn num_columns(&self) -> usize {
        self.num_columns
    }

    /// Last row covered by the range (inclusive, 1-based)
    #[must_use]
    pub fn last_row(&self) -> usize {
        self.row + self.num_rows - 1
    }

    /// Last column covered by the range (inclusive, 1-based)
    #[must_use]
    pub fn last_column(&self) -> usize {
        self.column + self.num_columns - 1
    }

    /// Check whether a 1-based cell position falls inside the range
    #[must_use]
    pub fn contains(&self, row: usize, column: usize) -> bool {
        (self.row..=self.last_row()).contains(&row)
            && (self.column..=self.last_column()).contains(&column)
    }

    /// Render the range in A1 notation ("B2" or "A1:C3")
    #[must_use]
    pub fn a1_notation(&self) -> String {
        let start = to_a1_notation(self.row - 1, self.column - 1);
        if self.num_rows == 1 && self.num_columns == 1 {
            return start;
        }
        let end = to_a1_notation(self.last_row() - 1, self.last_column() - 1);
        format!("{start}:{end}")
    }
}

impl fmt::Display for GridRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.a1_notation())
    }
}

/// Convert 0-based column index to column letters
/// 0=A, 1=B, ... 25=Z, 26=AA, 27=AB, ...
#[must_use]
pub fn column_index_to_letters(mut col: usize) -> String {
    let mut result = String::new();
    col += 1;

    while col > 0 {
        col -= 1;
        result.insert(0, ((col % 26) as u8 + b'A') as char);
        col /= 26;
    }

    result
}

/// Convert (row, col) to A1 notation
/// (0, 0) = "A1", (0, 1) = "B1", etc.
#[must_use]
pub fn to_a1_notation(row: usize, col: usize) -> String {
    format!("{}{}", column_index_to_letters(col), row + 1)
}
