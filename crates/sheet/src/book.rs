use crate::error::{Result, SheetError};
use crate::sheet::Sheet;
use indexmap::IndexMap;
use sheetrows_core::CellValue;

/// A book containing multiple sheets (preserves insertion order)
#[derive(Debug, Clone, Default)]
pub struct Book {
    name: String,
    sheets: IndexMap<String, Sheet>,
}

impl Book {
    /// Create a new empty book
    #[must_use]
    pub fn new() -> Self {
        Self::with_name("Book1")
    }

    /// Create a new empty book with a name
    #[must_use]
    pub fn with_name(name: &str) -> Self {
        Book {
            name: name.to_string(),
            sheets: IndexMap::new(),
        }
    }

    /// Get the book name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of sheets
    #[must_use]
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Check if the book is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Get all sheet names in order
    #[must_use]
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.keys().map(String::as_str).collect()
    }

    /// Check if a sheet exists
    #[must_use]
    pub fn has_sheet(&self, name: &str) -> bool {
        self.sheets.contains_key(name)
    }

    // ===== Sheet Access =====

    /// Get a sheet by name
    pub fn get_sheet(&self, name: &str) -> Result<&Sheet> {
        self.sheets
            .get(name)
            .ok_or_else(|| SheetError::SheetNotFound {
                name: name.to_string(),
            })
    }

    /// Get a mutable sheet by name
    pub fn get_sheet_mut(&mut self, name: &str) -> Result<&mut Sheet> {
        self.sheets
            .get_mut(name)
            .ok_or_else(|| SheetError::SheetNotFound {
                name: name.to_string(),
            })
    }

    // ===== Sheet Management =====

    /// Add a sheet to the book
    pub fn add_sheet(&mut self, name: &str, sheet: Sheet) -> Result<()> {
        if name.trim().is_empty() {
            return Err(SheetError::InvalidSheetName(
                "name cannot be empty".to_string(),
            ));
        }
        if self.sheets.contains_key(name) {
            return Err(SheetError::SheetAlreadyExists {
                name: name.to_string(),
            });
        }

        let mut sheet = sheet;
        sheet.set_name(name);
        self.sheets.insert(name.to_string(), sheet);
        Ok(())
    }

    /// Add a sheet built from 2D data
    pub fn add_sheet_from_data<T: Into<CellValue>>(
        &mut self,
        name: &str,
        data: Vec<Vec<T>>,
    ) -> Result<()> {
        self.add_sheet(name, Sheet::from_data(data))
    }

    /// Remove a sheet by name
    pub fn remove_sheet(&mut self, name: &str) -> Result<Sheet> {
        self.sheets
            .shift_remove(name)
            .ok_or_else(|| SheetError::SheetNotFound {
                name: name.to_string(),
            })
    }

    /// Rename a sheet (preserves position in sheet order)
    pub fn rename_sheet(&mut self, old_name: &str, new_name: &str) -> Result<()> {
        if self.sheets.contains_key(new_name) {
            return Err(SheetError::SheetAlreadyExists {
                name: new_name.to_string(),
            });
        }

        let index = self
            .sheets
            .get_index_of(old_name)
            .ok_or_else(|| SheetError::SheetNotFound {
                name: old_name.to_string(),
            })?;

        if let Some((_, mut sheet)) = self.sheets.shift_remove_index(index) {
            sheet.set_name(new_name);
            self.sheets.shift_insert(index, new_name.to_string(), sheet);
        }
        Ok(())
    }
}
