//! Formula error types
//!
//! These cover building compound values from addresses and grids. Errors a
//! spreadsheet user sees (`#VALUE!`, `#N/A`, ...) are not here: they are
//! [`CellError`](sheet_eval_core::CellError) data carried by
//! [`ValueEval::Error`](crate::ValueEval::Error).

use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors that can occur while constructing evaluated values
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormulaError {
    /// Grid length does not match the area bounds
    #[error("Area {range} needs {expected} values, got {actual}")]
    AreaShape {
        range: String,
        expected: u64,
        actual: usize,
    },

    /// An area cell holds another area
    #[error("Area {range} contains a nested area at offset {offset}")]
    NestedArea { range: String, offset: usize },

    /// Area bounds reach past the last sheet row or column
    #[error("Area {range} lies outside the sheet")]
    AreaOutOfBounds { range: String },

    /// Area is too large to materialise
    #[error("Area {range} has {cells} cells (limit: {limit})")]
    AreaTooLarge { range: String, cells: u64, limit: u64 },

    /// Invalid address or range text
    #[error(transparent)]
    Core(#[from] sheet_eval_core::Error),
}
