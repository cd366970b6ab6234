//! Header-keyed tables over spreadsheet hosts
//!
//! A [`Table`] loads one sheet's values once, indexes the header row, and
//! lets callers read and write by header name instead of grid position.
//! Each data row is exposed as a [`Record`].
//!
//! # Examples
//!
//! ```
//! use std::ops::ControlFlow;
//! use sheetrows_core::{cells, CellValue};
//! use sheetrows_sheet::MemoryHost;
//! use sheetrows_table::{Table, TableOptions, TraversalOptions};
//!
//! let host = MemoryHost::new();
//! host.add_sheet("Scores", vec![cells!["Name", "Score"], cells!["Ann", 10]])
//!     .unwrap();
//!
//! let mut table = Table::open(&host, "Scores", TableOptions::default())
//!     .unwrap()
//!     .expect("sheet exists");
//! assert_eq!(table.column_values("Score").unwrap(), cells![10]);
//!
//! table.for_each_row(TraversalOptions::default(), |mut record, _| {
//!     record.set("Score", 20).unwrap();
//!     ControlFlow::<()>::Continue(())
//! });
//! table.flush_all().unwrap();
//!
//! let sheet = host.snapshot("Scores").unwrap();
//! assert_eq!(sheet.get(1, 1).unwrap(), &CellValue::Int(20));
//! ```
//!
//! Unknown headers are reported as [`TableError::UnknownHeader`] and logged
//! through `tracing`; they never panic. Host failures are passed through as
//! [`TableError::Host`].

mod error;
mod header;
mod options;
mod record;
mod table;

/// Re-export table error types.
pub use error::{Result, TableError};
/// Re-export header normalization and the header index.
pub use header::{normalize_header, HeaderIndex};
/// Re-export table and traversal options.
pub use options::{TableOptions, TraversalOptions};
/// Re-export the row view.
pub use record::Record;
/// Re-export the table and its row types.
pub use table::{RowBatch, RowObject, Table};
