//! Evaluated values
//!
//! Every formula argument evaluates to a [`ValueEval`]. Five variants are
//! leaves; [`RefEval`] and [`AreaEval`] wrap the content of the cells they
//! point at, as read from a grid snapshot when the argument was evaluated.

use crate::error::{FormulaError, FormulaResult};
use crate::resolve::resolve;
use sheet_eval_core::{CellAddress, CellError, CellRange, CellValue, SharedString};

/// Value types during formula evaluation
#[derive(Debug, Clone, PartialEq)]
pub enum ValueEval {
    /// Formula error code; never coerced further
    Error(CellError),
    /// Empty cell
    Blank,
    Boolean(bool),
    Number(f64),
    Text(SharedString),
    /// Single-cell reference such as `$B$2`
    Ref(RefEval),
    /// Rectangular range such as `C10:D11`
    Area(AreaEval),
}

impl ValueEval {
    /// Create a text value
    pub fn text<S: AsRef<str>>(s: S) -> Self {
        ValueEval::Text(SharedString::new(s))
    }

    /// Create the empty text value `""`
    pub fn empty_text() -> Self {
        ValueEval::Text(SharedString::default())
    }

    /// Check if this value holds no nested value
    pub fn is_leaf(&self) -> bool {
        !matches!(self, ValueEval::Ref(_) | ValueEval::Area(_))
    }

    /// Check if this is an error
    pub fn is_error(&self) -> bool {
        matches!(self, ValueEval::Error(_))
    }

    /// Get the error if this is one
    pub fn get_error(&self) -> Option<CellError> {
        match self {
            ValueEval::Error(e) => Some(*e),
            _ => None,
        }
    }

    /// Get the text if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ValueEval::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Get the type name for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            ValueEval::Error(_) => "error",
            ValueEval::Blank => "blank",
            ValueEval::Boolean(_) => "boolean",
            ValueEval::Number(_) => "number",
            ValueEval::Text(_) => "text",
            ValueEval::Ref(_) => "reference",
            ValueEval::Area(_) => "area",
        }
    }
}

impl From<bool> for ValueEval {
    fn from(b: bool) -> Self {
        ValueEval::Boolean(b)
    }
}

impl From<f64> for ValueEval {
    fn from(n: f64) -> Self {
        ValueEval::Number(n)
    }
}

impl From<&str> for ValueEval {
    fn from(s: &str) -> Self {
        ValueEval::text(s)
    }
}

impl From<String> for ValueEval {
    fn from(s: String) -> Self {
        ValueEval::Text(s.into())
    }
}

impl From<SharedString> for ValueEval {
    fn from(s: SharedString) -> Self {
        ValueEval::Text(s)
    }
}

impl From<CellError> for ValueEval {
    fn from(e: CellError) -> Self {
        ValueEval::Error(e)
    }
}

impl From<RefEval> for ValueEval {
    fn from(r: RefEval) -> Self {
        ValueEval::Ref(r)
    }
}

impl From<AreaEval> for ValueEval {
    fn from(a: AreaEval) -> Self {
        ValueEval::Area(a)
    }
}

impl From<CellValue> for ValueEval {
    fn from(value: CellValue) -> Self {
        match value {
            CellValue::Empty => ValueEval::Blank,
            CellValue::Boolean(b) => ValueEval::Boolean(b),
            CellValue::Number(n) => ValueEval::Number(n),
            CellValue::String(s) => ValueEval::Text(s),
            CellValue::Error(e) => ValueEval::Error(e),
        }
    }
}

impl From<ValueEval> for CellValue {
    /// Dereferences first, so a result stored in a cell is always a leaf
    fn from(value: ValueEval) -> Self {
        match resolve(&value) {
            ValueEval::Blank => CellValue::Empty,
            ValueEval::Boolean(b) => CellValue::Boolean(*b),
            ValueEval::Number(n) => CellValue::Number(*n),
            ValueEval::Text(s) => CellValue::String(s.clone()),
            ValueEval::Error(e) => CellValue::Error(*e),
            // resolve() only returns leaves
            ValueEval::Ref(_) | ValueEval::Area(_) => CellValue::Error(CellError::Value),
        }
    }
}

/// A single-cell reference together with the value stored in that cell
#[derive(Debug, Clone, PartialEq)]
pub struct RefEval {
    address: CellAddress,
    inner: Box<ValueEval>,
}

impl RefEval {
    /// Create a reference to `address` whose cell holds `inner`
    pub fn new<V: Into<ValueEval>>(address: CellAddress, inner: V) -> Self {
        Self {
            address,
            inner: Box::new(inner.into()),
        }
    }

    /// Create a reference from A1 text such as `$B$2`
    pub fn parse<V: Into<ValueEval>>(address: &str, inner: V) -> FormulaResult<Self> {
        Ok(Self::new(CellAddress::parse(address)?, inner))
    }

    pub fn address(&self) -> CellAddress {
        self.address
    }

    pub fn row(&self) -> u32 {
        self.address.row
    }

    pub fn column(&self) -> u16 {
        self.address.col
    }

    /// The value currently stored in the referenced cell
    pub fn inner_value(&self) -> &ValueEval {
        &self.inner
    }
}

/// A rectangular range together with the values of its cells
///
/// Values are stored row-major with the top-left cell first. The bounds lie
/// inside the sheet, the grid always has exactly `height * width` entries,
/// and no entry is itself an area.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaEval {
    range: CellRange,
    values: Vec<ValueEval>,
}

impl AreaEval {
    /// Create an area over `range` from row-major `values`
    pub fn new(range: CellRange, values: Vec<ValueEval>) -> FormulaResult<Self> {
        if !range.is_within_sheet() {
            return Err(FormulaError::AreaOutOfBounds {
                range: range.to_string(),
            });
        }
        let expected = range.cell_count();
        if values.len() as u64 != expected {
            return Err(FormulaError::AreaShape {
                range: range.to_string(),
                expected,
                actual: values.len(),
            });
        }
        if let Some(offset) = values.iter().position(|v| matches!(v, ValueEval::Area(_))) {
            return Err(FormulaError::NestedArea {
                range: range.to_string(),
                offset,
            });
        }
        Ok(Self { range, values })
    }

    /// Create an area from A1 text such as `C10:D11`
    pub fn parse<I, V>(range: &str, values: I) -> FormulaResult<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<ValueEval>,
    {
        let range = CellRange::parse(range)?;
        Self::new(range, values.into_iter().map(Into::into).collect())
    }

    pub fn range(&self) -> CellRange {
        self.range
    }

    pub fn first_row(&self) -> u32 {
        self.range.start.row
    }

    pub fn first_column(&self) -> u16 {
        self.range.start.col
    }

    pub fn last_row(&self) -> u32 {
        self.range.end.row
    }

    pub fn last_column(&self) -> u16 {
        self.range.end.col
    }

    pub fn height(&self) -> u32 {
        // Lossless: new() keeps the range inside the sheet
        self.range.row_count() as u32
    }

    pub fn width(&self) -> u16 {
        self.range.col_count() as u16
    }

    /// Check if the area is a single row
    pub fn is_row(&self) -> bool {
        self.height() == 1
    }

    /// Check if the area is a single column
    pub fn is_column(&self) -> bool {
        self.width() == 1
    }

    /// Check if the sheet row `row` falls inside the area
    pub fn contains_row(&self, row: u32) -> bool {
        (self.first_row()..=self.last_row()).contains(&row)
    }

    /// Check if the sheet column `col` falls inside the area
    pub fn contains_column(&self, col: u16) -> bool {
        (self.first_column()..=self.last_column()).contains(&col)
    }

    /// Value at an offset from the top-left cell
    pub fn relative_value(&self, row: u32, col: u16) -> Option<&ValueEval> {
        if row >= self.height() || col >= self.width() {
            return None;
        }
        self.values
            .get(row as usize * self.width() as usize + col as usize)
    }

    /// Value at a sheet coordinate
    pub fn absolute_value(&self, row: u32, col: u16) -> Option<&ValueEval> {
        let row = row.checked_sub(self.first_row())?;
        let col = col.checked_sub(self.first_column())?;
        self.relative_value(row, col)
    }

    /// The top-left cell's value
    pub fn top_left(&self) -> &ValueEval {
        // new() guarantees at least one value
        &self.values[0]
    }

    /// All values, row-major
    pub fn values(&self) -> impl Iterator<Item = &ValueEval> {
        self.values.iter()
    }

    /// Rows of values, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[ValueEval]> {
        self.values.chunks(self.width() as usize)
    }
}
