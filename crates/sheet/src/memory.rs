use crate::book::Book;
use crate::error::Result;
use crate::sheet::Sheet;
use sheetrows_core::{CellValue, GridRange, HostError, HostResult, SheetGrid, SpreadsheetHost};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Debug, Default)]
struct Shared {
    book: RefCell<Book>,
    flushes: Cell<usize>,
}

/// In-memory spreadsheet host backed by a [`Book`].
///
/// Cloning the host is cheap; every clone, and every sheet handle obtained
/// from it, sees the same book.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    shared: Rc<Shared>,
}

impl MemoryHost {
    /// Create a host with an empty book
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a host serving an existing book
    #[must_use]
    pub fn from_book(book: Book) -> Self {
        MemoryHost {
            shared: Rc::new(Shared {
                book: RefCell::new(book),
                flushes: Cell::new(0),
            }),
        }
    }

    /// Add a sheet built from 2D data
    pub fn add_sheet<T: Into<CellValue>>(&self, name: &str, data: Vec<Vec<T>>) -> Result<()> {
        self.shared.book.borrow_mut().add_sheet_from_data(name, data)
    }

    /// Run `f` against a sheet, e.g. to protect it or seed cells directly
    pub fn with_sheet_mut<R>(&self, name: &str, f: impl FnOnce(&mut Sheet) -> R) -> Result<R> {
        let mut book = self.shared.book.borrow_mut();
        let sheet = book.get_sheet_mut(name)?;
        Ok(f(sheet))
    }

    /// Copy of a sheet's current state
    pub fn snapshot(&self, name: &str) -> Result<Sheet> {
        self.shared.book.borrow().get_sheet(name).cloned()
    }

    /// Number of times any handle has flushed
    #[must_use]
    pub fn flush_count(&self) -> usize {
        self.shared.flushes.get()
    }

    /// Sheet names in book order
    #[must_use]
    pub fn sheet_names(&self) -> Vec<String> {
        self.shared
            .book
            .borrow()
            .sheet_names()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

impl SpreadsheetHost for MemoryHost {
    type Sheet = MemorySheet;

    fn sheet_by_name(&self, name: &str) -> Option<MemorySheet> {
        if !self.shared.book.borrow().has_sheet(name) {
            return None;
        }
        Some(MemorySheet {
            shared: Rc::clone(&self.shared),
            name: name.to_string(),
        })
    }
}

/// Handle to one sheet of a [`MemoryHost`]
#[derive(Debug, Clone)]
pub struct MemorySheet {
    shared: Rc<Shared>,
    name: String,
}

impl MemorySheet {
    fn read<R>(&self, f: impl FnOnce(&Sheet) -> R) -> HostResult<R> {
        let book = self.shared.book.borrow();
        let sheet = book.get_sheet(&self.name)?;
        Ok(f(sheet))
    }

    fn write<R>(&self, f: impl FnOnce(&mut Sheet) -> HostResult<R>) -> HostResult<R> {
        let mut book = self.shared.book.borrow_mut();
        let sheet = book.get_sheet_mut(&self.name)?;
        f(sheet)
    }
}

impl SheetGrid for MemorySheet {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn values(&self, range: GridRange) -> HostResult<Vec<Vec<CellValue>>> {
        self.read(|sheet| sheet.read_range(range))
    }

    fn set_values(&self, range: GridRange, values: &[Vec<CellValue>]) -> HostResult<()> {
        tracing::trace!(sheet = %self.name, range = %range, "set values");
        self.write(|sheet| sheet.write_range(range, values))
    }

    fn clear_content(&self, range: GridRange) -> HostResult<()> {
        tracing::trace!(sheet = %self.name, range = %range, "clear content");
        self.write(|sheet| sheet.clear_range(range))
    }

    fn last_row(&self) -> usize {
        self.read(Sheet::last_row).unwrap_or(0)
    }

    fn last_column(&self) -> usize {
        self.read(Sheet::last_column).unwrap_or(0)
    }

    fn flush(&self) -> HostResult<()> {
        if !self.shared.book.borrow().has_sheet(&self.name) {
            return Err(HostError::SheetNotFound {
                name: self.name.clone(),
            });
        }
        let flushes = self.shared.flushes.get() + 1;
        self.shared.flushes.set(flushes);
        tracing::trace!(sheet = %self.name, flushes, "flush");
        Ok(())
    }
}
