//! Evaluation context and function dispatch
//!
//! The context tells a function which cell holds the formula and gives
//! read-only access to the grid, so arguments such as `$B$2` or `C10:D11`
//! can be turned into [`ValueEval::Ref`] / [`ValueEval::Area`] values.

use crate::error::{FormulaError, FormulaResult};
use crate::functions::FunctionRegistry;
use crate::value::{AreaEval, RefEval, ValueEval};
use sheet_eval_core::{CellAddress, CellRange, CellSource};
use std::sync::OnceLock;

/// Largest area that will be materialised into an [`AreaEval`]
pub const MAX_AREA_CELLS: u64 = 1 << 20;

/// Global function registry (lazily initialized)
static FUNCTION_REGISTRY: OnceLock<FunctionRegistry> = OnceLock::new();

/// The built-in function registry, shared by every evaluation
pub fn registry() -> &'static FunctionRegistry {
    FUNCTION_REGISTRY.get_or_init(FunctionRegistry::new)
}

/// Context for formula evaluation
#[derive(Clone, Copy)]
pub struct EvaluationContext<'a> {
    /// Snapshot of the grid for cell lookups
    pub source: Option<&'a dyn CellSource>,
    /// Row of the cell holding the formula
    pub current_row: u32,
    /// Column of the cell holding the formula
    pub current_col: u16,
}

impl<'a> EvaluationContext<'a> {
    /// Create a new evaluation context
    pub fn new(source: Option<&'a dyn CellSource>, row: u32, col: u16) -> Self {
        Self {
            source,
            current_row: row,
            current_col: col,
        }
    }

    /// Create a simple context without a grid (for testing)
    pub fn simple() -> Self {
        Self::new(None, 0, 0)
    }

    /// Value stored at `(row, col)`; every cell is blank without a grid
    pub fn cell_value(&self, row: u32, col: u16) -> ValueEval {
        match self.source {
            Some(source) => source.cell_value(row, col).into(),
            None => ValueEval::Blank,
        }
    }

    /// Reference to a single cell, carrying its current value
    pub fn reference(&self, address: CellAddress) -> ValueEval {
        let inner = self.cell_value(address.row, address.col);
        ValueEval::Ref(RefEval::new(address, inner))
    }

    /// Reference to the cell named by A1 text such as `$B$2`
    pub fn reference_a1(&self, address: &str) -> FormulaResult<ValueEval> {
        Ok(self.reference(CellAddress::parse(address)?))
    }

    /// Area over `range`, carrying the current value of every cell
    pub fn area(&self, range: CellRange) -> FormulaResult<ValueEval> {
        if !range.is_within_sheet() {
            return Err(FormulaError::AreaOutOfBounds {
                range: range.to_string(),
            });
        }
        let cells = range.cell_count();
        if cells > MAX_AREA_CELLS {
            log::warn!(
                "refusing to materialise area {} ({} cells, limit {})",
                range,
                cells,
                MAX_AREA_CELLS
            );
            return Err(FormulaError::AreaTooLarge {
                range: range.to_string(),
                cells,
                limit: MAX_AREA_CELLS,
            });
        }

        let values = range
            .cells()
            .map(|addr| self.cell_value(addr.row, addr.col))
            .collect();
        Ok(ValueEval::Area(AreaEval::new(range, values)?))
    }

    /// Area named by A1 text such as `C10:D11`
    pub fn area_a1(&self, range: &str) -> FormulaResult<ValueEval> {
        self.area(CellRange::parse(range)?)
    }
}

/// Evaluate a call to the built-in function `name`
///
/// Never fails: unknown names yield `#NAME?` and bad arity yields `#VALUE!`.
pub fn evaluate_function(name: &str, args: &[ValueEval], ctx: &EvaluationContext) -> ValueEval {
    registry().invoke(name, args, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sheet_eval_core::{CellError, SheetSnapshot};

    fn sheet() -> SheetSnapshot {
        let mut sheet = SheetSnapshot::new();
        sheet.set_value_a1("$B$2", "def").unwrap();
        sheet.set_value_a1("A1", 7.0).unwrap();
        sheet.set_value_a1("A2", CellError::Na).unwrap();
        sheet
    }

    #[test]
    fn test_simple_context_reads_blank() {
        let ctx = EvaluationContext::simple();
        assert_eq!(ctx.cell_value(3, 3), ValueEval::Blank);

        let area = ctx.area_a1("A1:B2").unwrap();
        match area {
            ValueEval::Area(a) => assert!(a.values().all(|v| *v == ValueEval::Blank)),
            other => panic!("expected area, got {:?}", other),
        }
    }

    #[test]
    fn test_reference_reads_snapshot() {
        let sheet = sheet();
        let ctx = EvaluationContext::new(Some(&sheet), 0, 0);

        let r = ctx.reference_a1("$B$2").unwrap();
        match &r {
            ValueEval::Ref(r) => {
                assert_eq!(r.address().to_string(), "$B$2");
                assert_eq!(r.inner_value(), &ValueEval::text("def"));
            }
            other => panic!("expected reference, got {:?}", other),
        }
        assert_eq!(
            ctx.reference_a1("A2").unwrap(),
            ValueEval::Ref(RefEval::parse("A2", CellError::Na).unwrap())
        );
    }

    #[test]
    fn test_area_reads_snapshot_row_major() {
        let sheet = sheet();
        let ctx = EvaluationContext::new(Some(&sheet), 0, 0);

        let expected = AreaEval::parse(
            "A1:B2",
            [
                ValueEval::Number(7.0),
                ValueEval::Blank,
                ValueEval::Error(CellError::Na),
                ValueEval::text("def"),
            ],
        )
        .unwrap();
        assert_eq!(ctx.area_a1("A1:B2").unwrap(), ValueEval::Area(expected));
    }

    #[test]
    fn test_area_too_large_is_rejected() {
        let ctx = EvaluationContext::simple();
        let err = ctx.area_a1("A1:Z1048576").unwrap_err();
        assert!(matches!(err, FormulaError::AreaTooLarge { limit: MAX_AREA_CELLS, .. }));
        assert!(matches!(ctx.area_a1("A1:"), Err(FormulaError::Core(_))));
    }

    #[test]
    fn test_area_outside_sheet_is_rejected() {
        let ctx = EvaluationContext::simple();
        let range = CellRange::from_indices(0, 0, 0, u16::MAX);
        assert_eq!(
            ctx.area(range),
            Err(FormulaError::AreaOutOfBounds {
                range: range.to_string(),
            })
        );
    }

    #[test]
    fn test_evaluate_function_uses_registry() {
        let ctx = EvaluationContext::simple();
        assert_eq!(
            evaluate_function("t", &[ValueEval::text("abc")], &ctx),
            ValueEval::text("abc")
        );
        assert_eq!(
            evaluate_function("NOPE", &[], &ctx),
            ValueEval::Error(CellError::Name)
        );
    }
}
