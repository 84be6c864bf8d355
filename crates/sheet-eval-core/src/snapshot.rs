//! Read-only grid access
//!
//! Formula evaluation never owns sheet state. It reads cell content through
//! [`CellSource`], which the surrounding engine implements over whatever
//! storage it has. [`SheetSnapshot`] is a small sparse in-memory grid that
//! implements it.

use std::collections::BTreeMap;

use crate::cell::{CellAddress, CellRange, CellValue};
use crate::error::Result;

/// Point-in-time, read-only lookup of cell content by coordinate
///
/// Implementations must be `Sync` so independent formulas can be evaluated
/// in parallel against the same snapshot.
pub trait CellSource: Sync {
    /// Value stored at `(row, col)`; cells never written read as [`CellValue::Empty`]
    fn cell_value(&self, row: u32, col: u16) -> CellValue;
}

/// Sparse row-based grid of cell values
///
/// Structure: `BTreeMap<row_index, BTreeMap<col_index, CellValue>>`. Only
/// non-empty cells are stored, and iteration is row-major.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetSnapshot {
    rows: BTreeMap<u32, BTreeMap<u16, CellValue>>,
}

impl SheetSnapshot {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value at `(row, col)`; storing [`CellValue::Empty`] clears the cell
    pub fn set_value_at<V: Into<CellValue>>(&mut self, row: u32, col: u16, value: V) {
        let value = value.into();
        if value.is_empty() {
            self.clear_cell(row, col);
            return;
        }
        self.rows.entry(row).or_default().insert(col, value);
    }

    /// Store a value at an A1-style address
    pub fn set_value_a1<V: Into<CellValue>>(&mut self, address: &str, value: V) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set_value_at(addr.row, addr.col, value);
        Ok(())
    }

    /// Fill a range row-major from `values`; stops at whichever runs out first
    pub fn set_range<I, V>(&mut self, range: CellRange, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        for (addr, value) in range.cells().zip(values) {
            self.set_value_at(addr.row, addr.col, value);
        }
    }

    /// Borrow the value at `(row, col)` if the cell is non-empty
    pub fn get(&self, row: u32, col: u16) -> Option<&CellValue> {
        self.rows.get(&row).and_then(|cols| cols.get(&col))
    }

    /// Value at an A1-style address
    pub fn value_a1(&self, address: &str) -> Result<CellValue> {
        let addr = CellAddress::parse(address)?;
        Ok(self.cell_value(addr.row, addr.col))
    }

    /// Remove the value at `(row, col)`
    pub fn clear_cell(&mut self, row: u32, col: u16) {
        if let Some(cols) = self.rows.get_mut(&row) {
            cols.remove(&col);
            if cols.is_empty() {
                self.rows.remove(&row);
            }
        }
    }

    /// Remove every value
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Number of non-empty cells
    pub fn len(&self) -> usize {
        self.rows.values().map(BTreeMap::len).sum()
    }

    /// Check if no cell holds a value
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Smallest range covering every non-empty cell
    pub fn used_range(&self) -> Option<CellRange> {
        let first_row = *self.rows.keys().next()?;
        let last_row = *self.rows.keys().next_back()?;
        let first_col = self.rows.values().filter_map(|c| c.keys().next()).min()?;
        let last_col = self.rows.values().filter_map(|c| c.keys().next_back()).max()?;
        Some(CellRange::from_indices(first_row, *first_col, last_row, *last_col))
    }

    /// Iterate non-empty cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (CellAddress, &CellValue)> {
        self.rows.iter().flat_map(|(&row, cols)| {
            cols.iter()
                .map(move |(&col, value)| (CellAddress::new(row, col), value))
        })
    }
}

impl CellSource for SheetSnapshot {
    fn cell_value(&self, row: u32, col: u16) -> CellValue {
        self.get(row, col).cloned().unwrap_or_default()
    }
}
