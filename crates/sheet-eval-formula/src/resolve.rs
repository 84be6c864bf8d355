//! Dereferencing of evaluated values
//!
//! Functions that expect a single value call into this module to turn a
//! reference or an area argument into the leaf it denotes. Errors are not
//! special-cased here; a function decides whether an error short-circuits.

use crate::value::{AreaEval, ValueEval};
use sheet_eval_core::CellError;

/// Resolve a value to the leaf it ultimately denotes
///
/// - leaves resolve to themselves
/// - a reference resolves to the value of the referenced cell
/// - an area resolves to its top-left cell; the other cells are ignored
///
/// Never fails and never returns a [`ValueEval::Ref`] or [`ValueEval::Area`].
pub fn resolve(value: &ValueEval) -> &ValueEval {
    match value {
        ValueEval::Ref(r) => resolve(r.inner_value()),
        ValueEval::Area(a) => resolve(a.top_left()),
        ValueEval::Error(_)
        | ValueEval::Blank
        | ValueEval::Boolean(_)
        | ValueEval::Number(_)
        | ValueEval::Text(_) => value,
    }
}

/// Resolve a value using implicit intersection with the formula cell
///
/// An area argument is reduced to the cell lined up with
/// `(src_row, src_col)`: the matching row of a single column, the matching
/// column of a single row, or the formula cell's own position inside a
/// 2-D area. A 1x1 area yields its only cell. When no cell lines up the
/// result is `#VALUE!`.
pub fn single_value(value: &ValueEval, src_row: u32, src_col: u16) -> ValueEval {
    match value {
        ValueEval::Ref(r) => single_value(r.inner_value(), src_row, src_col),
        ValueEval::Area(a) => match intersect(a, src_row, src_col) {
            Some(cell) => single_value(cell, src_row, src_col),
            None => ValueEval::Error(CellError::Value),
        },
        leaf => leaf.clone(),
    }
}

fn intersect(area: &AreaEval, row: u32, col: u16) -> Option<&ValueEval> {
    match (area.is_row(), area.is_column()) {
        (true, true) => Some(area.top_left()),
        (false, true) => area.absolute_value(row, area.first_column()),
        (true, false) => area.absolute_value(area.first_row(), col),
        (false, false) => area.absolute_value(row, col),
    }
}
