use crate::error::{Result, SheetError};
use sheetrows_core::{CellValue, GridRange, HostError, HostResult};

/// A sheet representing a 2D grid of cells (row-major storage).
///
/// Rows may be ragged internally; reads pad missing cells with
/// `CellValue::Null` so callers always see a rectangular block.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    name: String,
    data: Vec<Vec<CellValue>>,
    protected: bool,
}

impl Sheet {
    /// Create a new empty sheet
    #[must_use]
    pub fn new() -> Self {
        Self::with_name("Sheet1")
    }

    /// Create a new empty sheet with a name
    #[must_use]
    pub fn with_name(name: &str) -> Self {
        Sheet {
            name: name.to_string(),
            data: Vec::new(),
            protected: false,
        }
    }

    /// Create a sheet from a 2D vector of values
    #[must_use]
    pub fn from_data<T: Into<CellValue>>(data: Vec<Vec<T>>) -> Self {
        let converted: Vec<Vec<CellValue>> = data
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();

        Sheet {
            name: "Sheet1".to_string(),
            data: converted,
            protected: false,
        }
    }

    /// Get the sheet name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the sheet name
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Whether writes to this sheet are rejected
    #[must_use]
    pub fn is_protected(&self) -> bool {
        self.protected
    }

    /// Reject (or allow again) writes and clears on this sheet
    pub fn set_protected(&mut self, protected: bool) {
        self.protected = protected;
    }

    /// Check if the sheet has no content at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.last_row() == 0
    }

    /// Last row (1-based) containing a non-empty cell, 0 when empty
    #[must_use]
    pub fn last_row(&self) -> usize {
        self.data
            .iter()
            .rposition(|row| row.iter().any(|cell| !cell.is_empty()))
            .map_or(0, |index| index + 1)
    }

    /// Last column (1-based) containing a non-empty cell, 0 when empty
    #[must_use]
    pub fn last_column(&self) -> usize {
        self.data
            .iter()
            .filter_map(|row| row.iter().rposition(|cell| !cell.is_empty()))
            .max()
            .map_or(0, |index| index + 1)
    }

    // ===== Cell Access =====

    /// Get a cell value by row and column index (0-based)
    pub fn get(&self, row: usize, col: usize) -> Result<&CellValue> {
        self.data
            .get(row)
            .and_then(|r| r.get(col))
            .ok_or(SheetError::IndexOutOfBounds {
                row,
                col,
                rows: self.data.len(),
                cols: self.data.get(row).map_or(0, Vec::len),
            })
    }

    /// Set a cell value by row and column index (0-based), growing the grid
    /// as needed
    pub fn set<T: Into<CellValue>>(&mut self, row: usize, col: usize, value: T) {
        *self.cell_mut(row, col) = value.into();
    }

    /// Get an entire stored row by index (0-based)
    pub fn row(&self, index: usize) -> Result<&Vec<CellValue>> {
        self.data.get(index).ok_or(SheetError::RowIndexOutOfBounds {
            index,
            count: self.data.len(),
        })
    }

    /// Get internal data reference
    #[must_use]
    pub fn data(&self) -> &Vec<Vec<CellValue>> {
        &self.data
    }

    /// Content trimmed to the used range, padded to a rectangle.
    ///
    /// Handy for comparing a sheet against expected rows.
    #[must_use]
    pub fn used_values(&self) -> Vec<Vec<CellValue>> {
        match GridRange::new(1, 1, self.last_row(), self.last_column()) {
            Ok(range) => self.read_range(range),
            Err(_) => Vec::new(),
        }
    }

    // ===== Range Operations =====

    /// Read a rectangular block, padding cells past the stored extent with
    /// `CellValue::Null`
    #[must_use]
    pub fn read_range(&self, range: GridRange) -> Vec<Vec<CellValue>> {
        (range.row()..=range.last_row())
            .map(|row| {
                (range.column()..=range.last_column())
                    .map(|col| {
                        self.data
                            .get(row - 1)
                            .and_then(|r| r.get(col - 1))
                            .cloned()
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect()
    }

    /// Write a rectangular block whose shape must match `range`
    pub fn write_range(&mut self, range: GridRange, values: &[Vec<CellValue>]) -> HostResult<()> {
        self.check_writable("set values")?;

        let ragged = values
            .iter()
            .find(|row| row.len() != range.num_columns())
            .map(Vec::len);
        if values.len() != range.num_rows() || ragged.is_some() {
            return Err(HostError::DimensionMismatch {
                range: range.a1_notation(),
                expected_rows: range.num_rows(),
                expected_columns: range.num_columns(),
                actual_rows: values.len(),
                actual_columns: ragged.unwrap_or(range.num_columns()),
            });
        }

        for (r, row) in values.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                *self.cell_mut(range.row() - 1 + r, range.column() - 1 + c) = value.clone();
            }
        }
        Ok(())
    }

    /// Clear cell content inside `range`
    pub fn clear_range(&mut self, range: GridRange) -> HostResult<()> {
        self.check_writable("clear content")?;

        for row in self
            .data
            .iter_mut()
            .skip(range.row() - 1)
            .take(range.num_rows())
        {
            for cell in row
                .iter_mut()
                .skip(range.column() - 1)
                .take(range.num_columns())
            {
                *cell = CellValue::Null;
            }
        }
        Ok(())
    }

    fn check_writable(&self, operation: &str) -> HostResult<()> {
        if self.protected {
            return Err(HostError::PermissionDenied {
                sheet: self.name.clone(),
                operation: operation.to_string(),
            });
        }
        Ok(())
    }

    fn cell_mut(&mut self, row: usize, col: usize) -> &mut CellValue {
        if self.data.len() <= row {
            self.data.resize_with(row + 1, Vec::new);
        }
        let cells = &mut self.data[row];
        if cells.len() <= col {
            cells.resize(col + 1, CellValue::Null);
        }
        &mut cells[col]
    }
}

impl Default for Sheet {
    fn default() -> Self {
        Self::new()
    }
}
