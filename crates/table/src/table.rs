use crate::error::{Result, TableError};
use crate::header::HeaderIndex;
use crate::options::{TableOptions, TraversalOptions};
use crate::record::Record;
use indexmap::IndexMap;
use sheetrows_core::{CellValue, GridRange, SheetGrid, SpreadsheetHost};
use std::ops::ControlFlow;

/// A header-keyed mapping of one row's values, in header order
pub type RowObject = IndexMap<String, CellValue>;

/// One row or a batch of rows to append
#[derive(Debug, Clone, PartialEq)]
pub enum RowBatch {
    Single(Vec<CellValue>),
    Many(Vec<Vec<CellValue>>),
}

impl RowBatch {
    /// Normalize into a list of rows
    #[must_use]
    pub fn into_rows(self) -> Vec<Vec<CellValue>> {
        match self {
            RowBatch::Single(row) => vec![row],
            RowBatch::Many(rows) => rows,
        }
    }
}

impl From<Vec<CellValue>> for RowBatch {
    fn from(row: Vec<CellValue>) -> Self {
        RowBatch::Single(row)
    }
}

impl From<Vec<Vec<CellValue>>> for RowBatch {
    fn from(rows: Vec<Vec<CellValue>>) -> Self {
        RowBatch::Many(rows)
    }
}

/// A sheet's values loaded once, addressed by header name.
///
/// `values()[0]` is the header row; data rows follow. The header index is
/// built at load time and only rebuilt by [`Table::reload`], so edits made
/// through [`Table::values_mut`] never move header positions.
///
/// Writes made with [`Table::set_column`], [`Table::append_rows`] and
/// [`Table::clear_data_rows`] go straight to the host and leave the loaded
/// values as they were.
#[derive(Debug)]
pub struct Table<S> {
    sheet: S,
    options: TableOptions,
    header_row: usize,
    column_count: usize,
    values: Vec<Vec<CellValue>>,
    headers: HeaderIndex,
}

impl<S: SheetGrid> Table<S> {
    /// Bind to the sheet called `sheet_name`.
    ///
    /// Returns `Ok(None)` when the host has no such sheet; that is the
    /// unbound state and not an error. Host read failures propagate.
    pub fn open<H>(host: &H, sheet_name: &str, options: TableOptions) -> Result<Option<Self>>
    where
        H: SpreadsheetHost<Sheet = S>,
    {
        let Some(sheet) = host.sheet_by_name(sheet_name) else {
            tracing::debug!(sheet = sheet_name, "sheet not found, table left unbound");
            return Ok(None);
        };
        Self::from_sheet(sheet, options).map(Some)
    }

    /// Bind to an already resolved sheet handle and load its values
    pub fn from_sheet(sheet: S, options: TableOptions) -> Result<Self> {
        let mut table = Table {
            sheet,
            header_row: options.effective_header_row(),
            options,
            column_count: 0,
            values: Vec::new(),
            headers: HeaderIndex::default(),
        };
        table.reload()?;
        Ok(table)
    }

    /// Re-read the sheet and rebuild the header index.
    ///
    /// The column count is re-inferred from the sheet unless it was fixed
    /// through [`TableOptions::last_column`].
    pub fn reload(&mut self) -> Result<()> {
        let column_count = self
            .options
            .last_column
            .unwrap_or_else(|| self.sheet.last_column());
        let last_row = self.sheet.last_row();

        let values = if last_row < self.header_row || column_count == 0 {
            Vec::new()
        } else {
            let range = GridRange::new(
                self.header_row,
                1,
                last_row - self.header_row + 1,
                column_count,
            )?;
            self.sheet.values(range)?
        };

        self.headers = values
            .first()
            .map(|header| HeaderIndex::from_row(header))
            .unwrap_or_default();
        self.column_count = column_count;
        self.values = values;

        tracing::debug!(
            sheet = %self.sheet.name(),
            header_row = self.header_row,
            rows = self.values.len(),
            columns = self.column_count,
            "loaded table"
        );
        Ok(())
    }

    // ===== Accessors =====

    /// The bound sheet handle
    pub fn sheet(&self) -> &S {
        &self.sheet
    }

    /// Name of the bound sheet
    pub fn sheet_name(&self) -> String {
        self.sheet.name()
    }

    /// 1-based host row holding the headers
    pub fn header_row(&self) -> usize {
        self.header_row
    }

    /// Number of columns loaded
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    pub fn headers(&self) -> &HeaderIndex {
        &self.headers
    }

    /// Loaded values, header row first
    pub fn values(&self) -> &[Vec<CellValue>] {
        &self.values
    }

    /// Mutable access to the loaded values.
    ///
    /// The header index is not rebuilt after changes made here.
    pub fn values_mut(&mut self) -> &mut Vec<Vec<CellValue>> {
        &mut self.values
    }

    /// Number of rows below the header
    pub fn data_row_count(&self) -> usize {
        self.values.len().saturating_sub(1)
    }

    /// The last loaded row (the header row when there is no data)
    pub fn last_row_values(&self) -> Option<&Vec<CellValue>> {
        self.values.last()
    }

    // ===== Columns =====

    /// Values of one column for every data row, each wrapped in a single-cell
    /// row so the result can be written back with [`Table::set_column`]
    pub fn get_column(&self, header: &str) -> Result<Vec<Vec<CellValue>>> {
        let col = self.column_of(header)?;
        Ok(self
            .data_rows()
            .map(|row| vec![row.get(col).cloned().unwrap_or_default()])
            .collect())
    }

    /// Bare values of one column for every data row
    pub fn column_values(&self, header: &str) -> Result<Vec<CellValue>> {
        let col = self.column_of(header)?;
        Ok(self
            .data_rows()
            .map(|row| row.get(col).cloned().unwrap_or_default())
            .collect())
    }

    /// Write single-cell rows down a column, starting just below the header
    /// row. Only as many rows as given are written.
    pub fn set_column(&self, header: &str, rows: &[Vec<CellValue>]) -> Result<()> {
        let col = self.column_of(header)?;
        if rows.is_empty() {
            return Ok(());
        }
        let range = GridRange::new(self.header_row + 1, col + 1, rows.len(), 1)?;
        tracing::debug!(sheet = %self.sheet.name(), %header, range = %range, "writing column");
        self.sheet.set_values(range, rows)?;
        Ok(())
    }

    /// Like [`Table::set_column`] for bare values
    pub fn set_column_values(&self, header: &str, values: &[CellValue]) -> Result<()> {
        let rows: Vec<Vec<CellValue>> = values.iter().map(|v| vec![v.clone()]).collect();
        self.set_column(header, &rows)
    }

    // ===== Appending =====

    /// Append one row or a batch of rows after the sheet's last used row.
    ///
    /// The written width is the width of the first row. An empty batch is a
    /// no-op; an empty or ragged row inside a batch is rejected by the host.
    pub fn append_rows(&self, batch: impl Into<RowBatch>) -> Result<()> {
        let rows = batch.into().into_rows();
        if rows.is_empty() {
            return Ok(());
        }
        let range = GridRange::for_values(self.sheet.last_row() + 1, 1, &rows)?;
        tracing::debug!(sheet = %self.sheet.name(), range = %range, "appending rows");
        self.sheet.set_values(range, &rows)?;
        Ok(())
    }

    /// Append header-keyed records as rows.
    ///
    /// Each record becomes a row as wide as the header row. Headers missing
    /// from a record, or mapped to `Null`, produce an empty string cell.
    pub fn append_rows_from_records(&self, records: &[RowObject]) -> Result<()> {
        let width = self.values.first().map_or(0, Vec::len);
        let rows: Vec<Vec<CellValue>> = records
            .iter()
            .map(|record| {
                let mut row = vec![CellValue::from(""); width];
                for (name, col) in self.headers.iter() {
                    if let Some(value) = record.get(name).filter(|v| !v.is_null()) {
                        row[col] = value.clone();
                    }
                }
                row
            })
            .collect();
        self.append_rows(rows)
    }

    // ===== Rows =====

    /// Visit every data row as a [`Record`].
    ///
    /// The callback gets the record and its index into [`Table::values`].
    /// Returning `ControlFlow::Break(value)` stops the traversal and makes
    /// this return `Some(value)`.
    pub fn for_each_row<B, F>(&mut self, options: TraversalOptions, mut f: F) -> Option<B>
    where
        F: FnMut(Record<'_, S>, usize) -> ControlFlow<B>,
    {
        let len = self.values.len();
        for step in 1..len {
            let index = if options.bottom_up { len - step } else { step };
            if let ControlFlow::Break(value) = f(Record::new(self, index), index) {
                return Some(value);
            }
        }
        None
    }

    /// The record for `values()[index]`; `None` for the header row or past
    /// the last row
    pub fn record(&mut self, index: usize) -> Option<Record<'_, S>> {
        if index == 0 || index >= self.values.len() {
            return None;
        }
        Some(Record::new(self, index))
    }

    /// One header-keyed mapping per data row, in row order
    pub fn to_record_objects(&self) -> Vec<RowObject> {
        (1..self.values.len()).map(|i| self.row_object(i)).collect()
    }

    // ===== Write-back =====

    /// Clear the sheet's used range, write every loaded row from A1, flush.
    ///
    /// Use after the number of rows or columns changed.
    pub fn clear_and_rewrite(&self) -> Result<()> {
        if let Some(used) = self.sheet.data_range() {
            self.sheet.clear_content(used)?;
        }
        if let Ok(range) = GridRange::for_values(1, 1, &self.values) {
            tracing::debug!(sheet = %self.sheet.name(), range = %range, "rewriting table");
            self.sheet.set_values(range, &self.values)?;
        }
        self.sheet.flush()?;
        Ok(())
    }

    /// Write every loaded row back over the range it was loaded from, flush.
    pub fn flush_all(&self) -> Result<()> {
        if let Ok(range) = GridRange::for_values(self.header_row, 1, &self.values) {
            tracing::debug!(sheet = %self.sheet.name(), range = %range, "flushing table");
            self.sheet.set_values(range, &self.values)?;
        }
        self.sheet.flush()?;
        Ok(())
    }

    /// Clear every host row below the header row, flush
    pub fn clear_data_rows(&self) -> Result<()> {
        let last_row = self.sheet.last_row();
        let last_column = self.sheet.last_column();
        if last_row > self.header_row && last_column > 0 {
            let range = GridRange::new(
                self.header_row + 1,
                1,
                last_row - self.header_row,
                last_column,
            )?;
            tracing::debug!(sheet = %self.sheet.name(), range = %range, "clearing data rows");
            self.sheet.clear_content(range)?;
        }
        self.sheet.flush()?;
        Ok(())
    }

    // ===== Internal =====

    fn data_rows(&self) -> impl Iterator<Item = &Vec<CellValue>> {
        self.values.iter().skip(1)
    }

    pub(crate) fn row_object(&self, index: usize) -> RowObject {
        let row = &self.values[index];
        self.headers
            .iter()
            .map(|(name, col)| (name.to_string(), row.get(col).cloned().unwrap_or_default()))
            .collect()
    }

    /// Column offset for `header`, logging a diagnostic when it is unknown
    pub(crate) fn column_of(&self, header: &str) -> Result<usize> {
        self.headers.get(header).ok_or_else(|| {
            tracing::warn!(sheet = %self.sheet.name(), %header, "header not found in row headers");
            TableError::UnknownHeader {
                name: header.to_string(),
            }
        })
    }
}
