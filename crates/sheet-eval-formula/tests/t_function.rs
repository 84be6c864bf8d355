//! Tests for T() evaluated against grid snapshots and generated values

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use proptest::sample::select;
use sheet_eval_core::{CellError, CellRange, SheetSnapshot};
use sheet_eval_formula::{evaluate_function, AreaEval, EvaluationContext, RefEval, ValueEval};

fn t(arg: ValueEval) -> ValueEval {
    evaluate_function("T", &[arg], &EvaluationContext::simple())
}

fn error_code() -> impl Strategy<Value = CellError> {
    select(CellError::ALL.to_vec())
}

fn leaf() -> impl Strategy<Value = ValueEval> {
    prop_oneof![
        Just(ValueEval::Blank),
        any::<bool>().prop_map(ValueEval::Boolean),
        any::<f64>().prop_map(ValueEval::Number),
        ".*".prop_map(ValueEval::text),
        error_code().prop_map(ValueEval::Error),
    ]
}

/// T(B2) and T(C10:D11) read through a context over a snapshot
#[test]
fn test_t_over_snapshot() {
    let mut sheet = SheetSnapshot::new();
    sheet.set_value_a1("$B$2", "def").unwrap();
    sheet.set_value_a1("B3", 2.0).unwrap();
    sheet.set_value_a1("B4", CellError::Name).unwrap();
    sheet.set_range(CellRange::parse("C10:D11").unwrap(), ["abc", "def", "ghi", "jkl"]);

    let ctx = EvaluationContext::new(Some(&sheet), 0, 0);
    let call = |arg: ValueEval| evaluate_function("T", &[arg], &ctx);

    assert_eq!(call(ctx.reference_a1("$B$2").unwrap()), ValueEval::text("def"));
    assert_eq!(call(ctx.reference_a1("B3").unwrap()), ValueEval::empty_text());
    assert_eq!(
        call(ctx.reference_a1("B4").unwrap()),
        ValueEval::Error(CellError::Name)
    );
    assert_eq!(call(ctx.reference_a1("Z99").unwrap()), ValueEval::empty_text());
    assert_eq!(call(ctx.area_a1("C10:D11").unwrap()), ValueEval::text("abc"));

    sheet.set_value_a1("C10", 5.0).unwrap();
    let ctx = EvaluationContext::new(Some(&sheet), 0, 0);
    let area = ctx.area_a1("C10:D11").unwrap();
    assert_eq!(evaluate_function("T", &[area], &ctx), ValueEval::empty_text());
}

/// Arity violations degrade to #VALUE! instead of failing the evaluation
#[test]
fn test_t_arity() {
    let ctx = EvaluationContext::simple();
    assert_eq!(evaluate_function("T", &[], &ctx), ValueEval::Error(CellError::Value));
    assert_eq!(
        evaluate_function("T", &[ValueEval::Blank, ValueEval::Blank], &ctx),
        ValueEval::Error(CellError::Value)
    );
}

/// The formula cell position does not change T()
#[test]
fn test_t_ignores_formula_position() {
    let area = ValueEval::from(AreaEval::parse("A1:A3", ["x", "y", "z"]).unwrap());
    for (row, col) in [(0, 0), (1, 0), (2, 5), (500, 500)] {
        let ctx = EvaluationContext::new(None, row, col);
        assert_eq!(
            evaluate_function("T", &[area.clone()], &ctx),
            ValueEval::text("x")
        );
    }
}

proptest! {
    #[test]
    fn prop_text_is_returned_unchanged(s in ".*") {
        prop_assert_eq!(t(ValueEval::text(&s)), ValueEval::text(&s));
    }

    #[test]
    fn prop_errors_pass_through(e in error_code()) {
        prop_assert_eq!(t(ValueEval::Error(e)), ValueEval::Error(e));
        let r = RefEval::parse("$B$2", e).unwrap();
        prop_assert_eq!(t(r.into()), ValueEval::Error(e));
    }

    #[test]
    fn prop_reference_matches_direct(v in leaf()) {
        let r = RefEval::parse("$B$2", v.clone()).unwrap();
        prop_assert_eq!(t(r.into()), t(v));
    }

    #[test]
    fn prop_non_text_becomes_empty(n in any::<f64>(), b in any::<bool>()) {
        prop_assert_eq!(t(ValueEval::Number(n)), ValueEval::empty_text());
        prop_assert_eq!(t(ValueEval::Boolean(b)), ValueEval::empty_text());
        prop_assert_eq!(t(ValueEval::Blank), ValueEval::empty_text());
    }

    #[test]
    fn prop_area_uses_top_left(cells in prop::collection::vec(leaf(), 4)) {
        let top_left = cells[0].clone();
        let area = AreaEval::parse("C10:D11", cells).unwrap();
        prop_assert_eq!(t(area.into()), t(top_left));
    }

    #[test]
    fn prop_reapplying_to_text_result_is_stable(v in leaf()) {
        let once = t(v);
        if let ValueEval::Text(s) = &once {
            prop_assert_eq!(t(ValueEval::Text(s.clone())), once.clone());
        } else {
            prop_assert!(once.is_error());
        }
    }
}
