use sheetrows_core::HostError;
use thiserror::Error;

/// Errors that can occur during in-memory sheet operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SheetError {
    #[error("Index out of bounds: row {row}, col {col} (sheet has {rows} rows, {cols} cols)")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Row index out of bounds: {index} (sheet has {count} rows)")]
    RowIndexOutOfBounds { index: usize, count: usize },

    #[error("Sheet not found: {name}")]
    SheetNotFound { name: String },

    #[error("Sheet already exists: {name}")]
    SheetAlreadyExists { name: String },

    #[error("Invalid sheet name: {0}")]
    InvalidSheetName(String),
}

impl From<SheetError> for HostError {
    fn from(err: SheetError) -> Self {
        match err {
            SheetError::SheetNotFound { name } => HostError::SheetNotFound { name },
            other => HostError::Other(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, SheetError>;
