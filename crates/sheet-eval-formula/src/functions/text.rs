//! Text functions

use crate::evaluator::EvaluationContext;
use crate::resolve::resolve;
use crate::value::ValueEval;
use sheet_eval_core::CellError;

/// T(value) - Returns the text referred to by value
///
/// References resolve to the referenced cell and areas to their top-left
/// cell. Text comes back untouched, errors pass through, anything else
/// becomes `""`.
pub fn fn_t(args: &[ValueEval], _ctx: &EvaluationContext) -> ValueEval {
    let [arg] = args else {
        return ValueEval::Error(CellError::Value);
    };
    if arg.is_error() {
        return arg.clone();
    }

    let resolved = resolve(arg);
    match resolved {
        ValueEval::Error(_) | ValueEval::Text(_) => resolved.clone(),
        _ => ValueEval::empty_text(),
    }
}
