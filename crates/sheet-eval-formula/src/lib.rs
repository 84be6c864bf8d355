//! # sheet-eval-formula
//!
//! Evaluated-value model and formula functions for sheet-eval.
//!
//! This crate provides:
//! - [`ValueEval`] - the value every formula argument evaluates to
//! - Dereferencing of references and areas down to a single value ([`resolve`])
//! - The function contract and a name-keyed [`FunctionRegistry`]
//! - Built-in functions (currently `T`)
//!
//! ## Example
//!
//! ```rust
//! use sheet_eval_formula::{evaluate_function, EvaluationContext, RefEval, ValueEval};
//!
//! let ctx = EvaluationContext::simple();
//! let arg = RefEval::parse("$B$2", ValueEval::text("def")).unwrap();
//!
//! let result = evaluate_function("T", &[arg.into()], &ctx);
//! assert_eq!(result, ValueEval::text("def"));
//! ```

pub mod error;
pub mod evaluator;
pub mod functions;
pub mod resolve;
pub mod value;

pub use error::{FormulaError, FormulaResult};
pub use evaluator::{evaluate_function, EvaluationContext, MAX_AREA_CELLS};
pub use functions::{FunctionDef, FunctionImpl, FunctionRegistry};
pub use resolve::{resolve, single_value};
pub use value::{AreaEval, RefEval, ValueEval};
