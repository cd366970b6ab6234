//! Error types for host grid operations.

use thiserror::Error;

/// Result type for host grid operations.
pub type HostResult<T> = Result<T, HostError>;

/// Failures reported by a spreadsheet host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// The requested range is malformed.
    #[error("Invalid range: row {row}, column {column}, {num_rows}x{num_columns}")]
    InvalidRange {
        row: usize,
        column: usize,
        num_rows: usize,
        num_columns: usize,
    },

    /// The values written do not match the shape of the target range.
    #[error(
        "Data does not match range {range}: expected {expected_rows}x{expected_columns}, got {actual_rows}x{actual_columns}"
    )]
    DimensionMismatch {
        range: String,
        expected_rows: usize,
        expected_columns: usize,
        actual_rows: usize,
        actual_columns: usize,
    },

    /// The sheet a handle refers to no longer exists.
    #[error("Sheet not found: {name}")]
    SheetNotFound { name: String },

    /// The host refused the operation.
    #[error("Permission denied on sheet {sheet}: {operation}")]
    PermissionDenied { sheet: String, operation: String },

    /// Any other host-reported failure.
    #[error("Host error: {0}")]
    Other(String),
}
