//! The grid-access boundary a spreadsheet host must provide.
//!
//! Everything above this module talks to a host only through these two
//! traits. Calls are blocking: a write returns once the host has accepted
//! it, and `flush` returns once buffered writes have been committed.

use crate::cell::CellValue;
use crate::error::HostResult;
use crate::range::GridRange;

/// A workbook-level handle able to look up sheets by name.
pub trait SpreadsheetHost {
    /// Handle type for a single sheet
    type Sheet: SheetGrid;

    /// Look up a sheet by name. `None` when the workbook has no such sheet.
    fn sheet_by_name(&self, name: &str) -> Option<Self::Sheet>;
}

/// Rectangular read/write access to one sheet.
pub trait SheetGrid {
    /// Name of the sheet this handle points at
    fn name(&self) -> String;

    /// Read a rectangular block of values, row-major.
    ///
    /// The result always has `range.num_rows()` rows of
    /// `range.num_columns()` cells; blank cells come back as `CellValue::Null`.
    fn values(&self, range: GridRange) -> HostResult<Vec<Vec<CellValue>>>;

    /// Write a rectangular block of values.
    ///
    /// `values` must have exactly the shape of `range`.
    fn set_values(&self, range: GridRange, values: &[Vec<CellValue>]) -> HostResult<()>;

    /// Clear cell content inside `range`
    fn clear_content(&self, range: GridRange) -> HostResult<()>;

    /// Last row (1-based) that holds content, 0 for an empty sheet
    fn last_row(&self) -> usize;

    /// Last column (1-based) that holds content, 0 for an empty sheet
    fn last_column(&self) -> usize;

    /// Commit any buffered writes before returning
    fn flush(&self) -> HostResult<()>;

    /// The used range, from A1 to the last row and column with content.
    ///
    /// `None` for an empty sheet.
    fn data_range(&self) -> Option<GridRange> {
        GridRange::new(1, 1, self.last_row(), self.last_column()).ok()
    }
}
