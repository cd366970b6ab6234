//! # sheetrows-core
//!
//! Shared building blocks for sheetrows.
//!
//! This crate provides:
//! - The `CellValue` scalar exchanged with spreadsheet hosts
//! - `GridRange`, a 1-based rectangular range with A1 rendering
//! - The `SpreadsheetHost` / `SheetGrid` traits every host implements
//! - `HostError`, the failure type hosts report

/// Cell value type.
pub mod cell;
/// Host error types.
pub mod error;
/// Host traits.
pub mod host;
/// Grid ranges and A1 notation.
pub mod range;

pub use cell::{row, CellValue, DATETIME_FORMAT};
pub use error::{HostError, HostResult};
pub use host::{SheetGrid, SpreadsheetHost};
pub use range::{column_index_to_letters, to_a1_notation, GridRange};

/// Build a `Vec<CellValue>` from heterogeneous values.
///
/// ```
/// use sheetrows_core::{cells, CellValue};
///
/// let row = cells!["Ann", 10, 2.5];
/// assert_eq!(row[1], CellValue::Int(10));
/// ```
#[macro_export]
macro_rules! cells {
    ($($value:expr),* $(,)?) => {
        vec![$($crate::CellValue::from($value)),*]
    };
}
