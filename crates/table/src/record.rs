use crate::error::{Result, TableError};
use crate::header::HeaderIndex;
use crate::table::{RowObject, Table};
use sheetrows_core::{CellValue, GridRange, SheetGrid};
use std::slice;

/// A view of one data row of a [`Table`], addressed by header name.
///
/// A record borrows its table mutably and refers to the row by index, so
/// edits land directly in the table's loaded values and the record cannot
/// outlive the table.
#[derive(Debug)]
pub struct Record<'t, S> {
    table: &'t mut Table<S>,
    index: usize,
}

impl<'t, S: SheetGrid> Record<'t, S> {
    pub(crate) fn new(table: &'t mut Table<S>, index: usize) -> Self {
        Record { table, index }
    }

    /// Index of this row in [`Table::values`] (the header row is 0)
    pub fn index(&self) -> usize {
        self.index
    }

    /// 1-based host row this record was loaded from
    pub fn origin_row_number(&self) -> usize {
        self.table.header_row() + self.index
    }

    /// This row's current values
    pub fn values(&self) -> &[CellValue] {
        &self.table.values()[self.index]
    }

    pub fn headers(&self) -> &HeaderIndex {
        self.table.headers()
    }

    /// Value under `header`. An empty cell is `Ok(&CellValue::Null)`.
    pub fn get(&self, header: &str) -> Result<&CellValue> {
        let col = self.table.column_of(header)?;
        let row = self.values();
        row.get(col)
            .ok_or_else(|| self.out_of_range(header, col, row.len()))
    }

    /// Overwrite the value under `header` and return the stored value
    pub fn set(&mut self, header: &str, value: impl Into<CellValue>) -> Result<&CellValue> {
        let col = self.table.column_of(header)?;
        let width = self.values().len();
        if col >= width {
            return Err(self.out_of_range(header, col, width));
        }
        let cell = &mut self.table.values_mut()[self.index][col];
        *cell = value.into();
        Ok(&*cell)
    }

    /// Header-keyed mapping of this row's values
    pub fn to_object(&self) -> RowObject {
        self.table.row_object(self.index)
    }

    /// Write this row's current values over its origin row in the sheet
    pub fn write_back(&self) -> Result<()> {
        let rows = slice::from_ref(&self.table.values()[self.index]);
        let range = GridRange::for_values(self.origin_row_number(), 1, rows)?;
        tracing::debug!(sheet = %self.table.sheet_name(), range = %range, "writing back row");
        self.table.sheet().set_values(range, rows)?;
        Ok(())
    }

    fn out_of_range(&self, header: &str, index: usize, width: usize) -> TableError {
        tracing::warn!(
            sheet = %self.table.sheet_name(),
            %header,
            index,
            width,
            "header column is outside this row"
        );
        TableError::ColumnOutOfRange {
            header: header.to_string(),
            index,
            width,
        }
    }
}
