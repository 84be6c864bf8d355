//! Cell-related types
//!
//! - [`CellAddress`] - A cell's location (e.g., "$B$2")
//! - [`CellRange`] - A rectangle of cells (e.g., "C10:D11")
//! - [`CellValue`] - The content stored in a cell
//! - [`CellError`] - Formula error codes

mod address;
mod value;

pub use address::{CellAddress, CellRange, CellRangeIterator};
pub use value::{CellError, CellValue, SharedString};
