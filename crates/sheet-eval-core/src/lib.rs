//! # sheet-eval-core
//!
//! Core data types for the sheet-eval formula engine.
//!
//! This crate provides:
//! - [`CellAddress`] and [`CellRange`] - Cell addressing (`$B$2`, `C10:D11`)
//! - [`CellError`] - Formula error codes (`#VALUE!`, `#N/A`, ...)
//! - [`CellValue`] - The content a cell holds
//! - [`CellSource`] and [`SheetSnapshot`] - Read-only access to a grid of cells
//!
//! ## Example
//!
//! ```rust
//! use sheet_eval_core::{CellSource, CellValue, SheetSnapshot};
//!
//! let mut sheet = SheetSnapshot::new();
//! sheet.set_value_a1("B2", "hello").unwrap();
//! sheet.set_value_at(0, 0, CellValue::Number(42.0));
//!
//! assert_eq!(sheet.cell_value(1, 1), CellValue::string("hello"));
//! assert_eq!(sheet.cell_value(5, 5), CellValue::Empty);
//! ```

pub mod cell;
pub mod error;
pub mod snapshot;

pub use cell::{CellAddress, CellError, CellRange, CellValue, SharedString};
pub use error::{Error, Result};
pub use snapshot::{CellSource, SheetSnapshot};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;
