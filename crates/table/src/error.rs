use sheetrows_core::HostError;
use thiserror::Error;

/// Errors that can occur during table and record operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The header is not present in the table's header index.
    #[error("{name} not found in row headers")]
    UnknownHeader { name: String },

    /// The header maps to a column past the end of the row.
    #[error("Column {index} for header {header} is out of range (row has {width} cells)")]
    ColumnOutOfRange {
        header: String,
        index: usize,
        width: usize,
    },

    /// The host grid call failed.
    #[error(transparent)]
    Host(#[from] HostError),
}

impl TableError {
    /// Whether this is a recoverable header lookup miss rather than a host failure
    #[must_use]
    pub fn is_lookup_miss(&self) -> bool {
        matches!(
            self,
            TableError::UnknownHeader { .. } | TableError::ColumnOutOfRange { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, TableError>;
