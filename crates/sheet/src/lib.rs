//! In-memory spreadsheet host for sheetrows
//!
//! A [`Book`] of named [`Sheet`]s served through [`MemoryHost`], which
//! implements the `SpreadsheetHost` and `SheetGrid` traits from
//! `sheetrows-core`. Useful as a test double and for working with tables
//! without a remote spreadsheet service.
//!
//! # Examples
//!
//! ```
//! use sheetrows_core::{cells, GridRange, SheetGrid, SpreadsheetHost};
//! use sheetrows_sheet::MemoryHost;
//!
//! let host = MemoryHost::new();
//! host.add_sheet("Scores", vec![cells!["Name", "Score"], cells!["Ann", 10]])
//!     .unwrap();
//!
//! let sheet = host.sheet_by_name("Scores").unwrap();
//! assert_eq!(sheet.last_row(), 2);
//!
//! let values = sheet.values(GridRange::new(2, 1, 1, 2).unwrap()).unwrap();
//! assert_eq!(values, vec![cells!["Ann", 10]]);
//! ```

mod book;
mod error;
mod memory;
mod sheet;

/// Re-export book type.
pub use book::Book;
/// Re-export sheet error types.
pub use error::{Result, SheetError};
/// Re-export the host handles.
pub use memory::{MemoryHost, MemorySheet};
/// Re-export sheet type.
pub use sheet::Sheet;
