//! Operations module - Workflow node operations over documents.
//!
//! Every operation is a function of a [`Runtime`] and a mapping of named
//! inputs, returning a mapping of named outputs. Outputs always carry a
//! `result`. Problems with the inputs are reported as an `error` string in the
//! outputs; the `Err` channel is reserved for arithmetic failures.
//!
//! Only the `var_*` operations touch the runtime store. Everything else is a
//! pure function of its inputs.

pub mod convert;
pub mod dict;
mod error;
pub mod list;
pub mod logic;
pub mod math;
mod params;
pub mod var;

pub use error::*;
pub use params::*;

use crate::value::Map;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Store holds the variables of one workflow execution.
pub type Store = Map;

/// Runtime is the host state handed to every operation.
#[derive(Debug, Clone, Default)]
pub struct Runtime {
    pub store: Store,
}

impl Runtime {
    /// Creates a runtime with an empty store.
    pub fn new() -> Self {
        Runtime::default()
    }

    /// Creates a runtime whose store starts with `store`.
    pub fn with_store(store: Store) -> Self {
        Runtime { store }
    }
}

/// Operation is a named workflow node implementation.
pub trait Operation: Send + Sync {
    /// Returns the name the host invokes this operation by.
    fn name(&self) -> &str;

    /// Runs the operation.
    fn run(&self, runtime: &mut Runtime, inputs: &Map) -> Result<Map, OperationError>;
}

/// Signature shared by the built-in operations.
pub type OperationFn = fn(&mut Runtime, &Map) -> Result<Map, OperationError>;

/// Builtin adapts a plain function to [`Operation`].
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    name: &'static str,
    func: OperationFn,
}

impl Builtin {
    pub const fn new(name: &'static str, func: OperationFn) -> Self {
        Builtin { name, func }
    }
}

impl Operation for Builtin {
    fn name(&self) -> &str {
        self.name
    }

    fn run(&self, runtime: &mut Runtime, inputs: &Map) -> Result<Map, OperationError> {
        (self.func)(runtime, inputs)
    }
}

static CATALOG: Lazy<BTreeMap<&'static str, Builtin>> = Lazy::new(|| {
    [
        Builtin::new("dict_get", dict::dict_get),
        Builtin::new("dict_set", dict::dict_set),
        Builtin::new("dict_delete", dict::dict_delete),
        Builtin::new("dict_merge", dict::dict_merge),
        Builtin::new("convert_to_boolean", convert::convert_to_boolean),
        Builtin::new("convert_to_number", convert::convert_to_number),
        Builtin::new("convert_to_string", convert::convert_to_string),
        Builtin::new("convert_to_json", convert::convert_to_json),
        Builtin::new("convert_parse_json", convert::convert_parse_json),
        Builtin::new("list_concat", list::list_concat),
        Builtin::new("list_find", list::list_find),
        Builtin::new("list_length", list::list_length),
        Builtin::new("list_reverse", list::list_reverse),
        Builtin::new("list_slice", list::list_slice),
        Builtin::new("list_sort", list::list_sort),
        Builtin::new("logic_and", logic::logic_and),
        Builtin::new("logic_or", logic::logic_or),
        Builtin::new("logic_not", logic::logic_not),
        Builtin::new("logic_equals", logic::logic_equals),
        Builtin::new("logic_gt", logic::logic_gt),
        Builtin::new("logic_lt", logic::logic_lt),
        Builtin::new("math_add", math::math_add),
        Builtin::new("math_subtract", math::math_subtract),
        Builtin::new("math_multiply", math::math_multiply),
        Builtin::new("math_divide", math::math_divide),
        Builtin::new("var_get", var::var_get),
        Builtin::new("var_set", var::var_set),
        Builtin::new("var_delete", var::var_delete),
    ]
    .into_iter()
    .map(|op| (op.name, op))
    .collect()
});

/// Returns the built-in operation called `name`.
pub fn lookup(name: &str) -> Option<&'static dyn Operation> {
    CATALOG.get(name).map(|op| op as &dyn Operation)
}

/// Returns the names of all built-in operations, sorted.
pub fn names() -> impl Iterator<Item = &'static str> {
    CATALOG.keys().copied()
}

/// Runs the built-in operation called `name`.
pub fn invoke(name: &str, runtime: &mut Runtime, inputs: &Map) -> Result<Map, OperationError> {
    let op = lookup(name).ok_or_else(|| OperationError::unknown_operation(name))?;
    execute(op, runtime, inputs)
}

/// Runs `op`, logging its outcome.
pub fn execute(
    op: &dyn Operation,
    runtime: &mut Runtime,
    inputs: &Map,
) -> Result<Map, OperationError> {
    debug!(operation = op.name(), inputs = inputs.len(), "running operation");
    match op.run(runtime, inputs) {
        Ok(outputs) => {
            if let Some(error) = outputs.get("error").and_then(|e| e.as_str()) {
                debug!(operation = op.name(), error, "operation reported an input error");
            }
            Ok(outputs)
        }
        Err(err) => {
            warn!(operation = op.name(), error = %err, "operation failed");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn test_catalog_names() {
        let names: Vec<_> = names().collect();
        assert_eq!(names.len(), 28);
        assert!(names.contains(&"dict_merge"));
        assert!(names.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("dict_get").map(|op| op.name()), Some("dict_get"));
        assert!(lookup("dict_frobnicate").is_none());
    }

    #[test]
    fn test_invoke_unknown() {
        let err = invoke("nope", &mut Runtime::new(), &Map::new()).unwrap_err();
        assert_eq!(err, OperationError::unknown_operation("nope"));
    }

    struct Echo;

    impl Operation for Echo {
        fn name(&self) -> &str {
            "echo"
        }

        fn run(&self, _runtime: &mut Runtime, inputs: &Map) -> Result<Map, OperationError> {
            Ok(Outputs::new(Value::map(inputs.clone())).into_map())
        }
    }

    #[test]
    fn test_execute_custom_operation() {
        let mut inputs = Map::new();
        inputs.set("a", Value::Int(1));
        let outputs = execute(&Echo, &mut Runtime::new(), &inputs).unwrap();
        assert_eq!(outputs.get("result"), Some(&Value::map(inputs)));
    }
}
