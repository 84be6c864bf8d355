//! Built-in formula functions

pub mod text;

use crate::evaluator::EvaluationContext;
use crate::value::ValueEval;
use ahash::AHashMap;
use sheet_eval_core::CellError;

/// Function implementation signature
///
/// Arguments arrive already evaluated, references and areas included.
/// Functions can consult the evaluation context for the formula cell's
/// position. Bad input is reported as a [`ValueEval::Error`], never a panic.
pub type FunctionImpl = fn(&[ValueEval], &EvaluationContext) -> ValueEval;

/// Function definition
#[derive(Clone)]
pub struct FunctionDef {
    /// Function name as written; the registry files it upper-cased
    pub name: &'static str,
    /// Minimum arguments
    pub min_args: usize,
    /// Maximum arguments (None = unlimited)
    pub max_args: Option<usize>,
    /// Implementation
    pub implementation: FunctionImpl,
}

impl FunctionDef {
    /// Check if `count` arguments are allowed
    pub fn accepts(&self, count: usize) -> bool {
        count >= self.min_args && self.max_args.map_or(true, |max| count <= max)
    }

    /// Call the implementation, turning an arity mismatch into `#VALUE!`
    pub fn call(&self, args: &[ValueEval], ctx: &EvaluationContext) -> ValueEval {
        if !self.accepts(args.len()) {
            log::debug!(
                "{} called with {} arguments (expected {}..={})",
                self.name,
                args.len(),
                self.min_args,
                self.max_args.map_or_else(|| "*".to_string(), |m| m.to_string())
            );
            return ValueEval::Error(CellError::Value);
        }
        (self.implementation)(args, ctx)
    }
}

/// Function registry, keyed by upper-case name
pub struct FunctionRegistry {
    functions: AHashMap<String, FunctionDef>,
}

impl FunctionRegistry {
    /// Create a new registry with all built-in functions
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register_text_functions();
        registry
    }

    /// Create a registry with no functions
    pub fn empty() -> Self {
        Self {
            functions: AHashMap::new(),
        }
    }

    /// Look up a function by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&FunctionDef> {
        self.functions.get(&name.to_uppercase())
    }

    /// Check if a function is registered
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Register a function, replacing any previous one with the same name
    pub fn register(&mut self, def: FunctionDef) {
        self.functions.insert(def.name.to_uppercase(), def);
    }

    /// Registered names in upper case, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Call `name` with `args`
    ///
    /// Unknown names yield `#NAME?`; arity outside the definition's bounds
    /// yields `#VALUE!`.
    pub fn invoke(&self, name: &str, args: &[ValueEval], ctx: &EvaluationContext) -> ValueEval {
        match self.get(name) {
            Some(def) => def.call(args, ctx),
            None => {
                log::debug!("unknown function {}", name);
                ValueEval::Error(CellError::Name)
            }
        }
    }

    fn register_text_functions(&mut self) {
        // T
        self.register(FunctionDef {
            name: "T",
            min_args: 1,
            max_args: Some(1),
            implementation: text::fn_t,
        });
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fn_count_args(args: &[ValueEval], _ctx: &EvaluationContext) -> ValueEval {
        ValueEval::Number(args.len() as f64)
    }

    #[test]
    fn test_builtins_registered() {
        let registry = FunctionRegistry::new();
        assert_eq!(registry.names(), vec!["T"]);
        assert!(registry.contains("t"));
        assert!(!registry.contains("SUM"));
        assert!(FunctionRegistry::empty().names().is_empty());
    }

    #[test]
    fn test_invoke_unknown_function() {
        let ctx = EvaluationContext::simple();
        let registry = FunctionRegistry::new();
        assert_eq!(
            registry.invoke("NOSUCH", &[ValueEval::Blank], &ctx),
            ValueEval::Error(CellError::Name)
        );
    }

    #[test]
    fn test_invoke_checks_arity() {
        let ctx = EvaluationContext::simple();
        let registry = FunctionRegistry::new();
        assert_eq!(registry.invoke("T", &[], &ctx), ValueEval::Error(CellError::Value));
        assert_eq!(
            registry.invoke("T", &[ValueEval::text("a"), ValueEval::text("b")], &ctx),
            ValueEval::Error(CellError::Value)
        );
    }

    #[test]
    fn test_register_custom_function() {
        let ctx = EvaluationContext::simple();
        let mut registry = FunctionRegistry::empty();
        registry.register(FunctionDef {
            name: "ArgCount",
            min_args: 0,
            max_args: None,
            implementation: fn_count_args,
        });

        assert_eq!(registry.names(), vec!["ARGCOUNT"]);
        let def = registry.get("ARGCOUNT").unwrap();
        assert!(def.accepts(0) && def.accepts(300));
        let args = vec![ValueEval::Blank; 3];
        assert_eq!(
            registry.invoke("argcount", &args, &ctx),
            ValueEval::Number(3.0)
        );
    }
}
