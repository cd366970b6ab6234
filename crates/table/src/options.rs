use serde::{Deserialize, Serialize};

/// Options controlling how a [`Table`](crate::Table) binds to its sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    /// 1-based row holding the headers (default: 1)
    pub header_row: usize,
    /// Number of columns that belong to the table. `None` uses the sheet's
    /// last used column at load time.
    pub last_column: Option<usize>,
}

impl Default for TableOptions {
    fn default() -> Self {
        TableOptions {
            header_row: 1,
            last_column: None,
        }
    }
}

impl TableOptions {
    /// Set the header row
    #[must_use]
    pub fn with_header_row(mut self, header_row: usize) -> Self {
        self.header_row = header_row;
        self
    }

    /// Fix the number of table columns
    #[must_use]
    pub fn with_last_column(mut self, last_column: usize) -> Self {
        self.last_column = Some(last_column);
        self
    }

    /// Header row with 0 treated as 1
    pub(crate) fn effective_header_row(&self) -> usize {
        self.header_row.max(1)
    }
}

/// Options for [`Table::for_each_row`](crate::Table::for_each_row)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalOptions {
    /// Visit rows from the last data row up to the first
    pub bottom_up: bool,
}

impl TraversalOptions {
    /// Forward traversal (the default)
    #[must_use]
    pub fn top_down() -> Self {
        Self::default()
    }

    /// Reverse traversal
    #[must_use]
    pub fn bottom_up() -> Self {
        TraversalOptions { bottom_up: true }
    }
}
