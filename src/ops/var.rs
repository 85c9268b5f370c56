//! Workflow variable accessors backed by the runtime store.

use super::{recover, OperationError, Outputs, Params, Runtime};
use crate::value::{Map, Value};
use tracing::trace;

/// Reads variable `key`. Outputs `result` (the value, or `default`) and
/// `found`.
pub fn var_get(runtime: &mut Runtime, inputs: &Map) -> Result<Map, OperationError> {
    let params = Params::new(inputs);
    let read = params.string(&["key"]).map(|key| {
        let (value, found) = match runtime.store.get(key) {
            Some(value) => (value.clone(), true),
            None => (params.get("default").cloned().unwrap_or_default(), false),
        };
        Outputs::new(value).with("found", found)
    });
    recover(read)
}

/// Stores `value` under variable `key` and echoes it as `result`.
pub fn var_set(runtime: &mut Runtime, inputs: &Map) -> Result<Map, OperationError> {
    let params = Params::new(inputs);
    let written = params.string(&["key"]).map(|key| {
        let value = params.get("value").cloned().unwrap_or_default();
        trace!(key, kind = value.type_name(), "storing variable");
        runtime.store.set(key, value.clone());
        Outputs::new(value)
    });
    recover(written)
}

/// Removes variable `key`. Outputs `deleted`.
pub fn var_delete(runtime: &mut Runtime, inputs: &Map) -> Result<Map, OperationError> {
    let params = Params::new(inputs);
    let removed = params.string(&["key"]).map(|key| {
        let deleted = runtime.store.delete(key).is_some();
        Outputs::new(Value::Null).with("deleted", deleted)
    });
    recover(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::OperationFn;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn run(op: OperationFn, runtime: &mut Runtime, inputs: serde_json::Value) -> Map {
        let inputs = Value::from(inputs).as_map().cloned().unwrap_or_default();
        op(runtime, &inputs).unwrap()
    }

    #[test]
    fn test_set_get_delete() {
        let mut runtime = Runtime::new();

        let out = run(var_set, &mut runtime, json!({"key": "user", "value": {"name": "Ann"}}));
        assert_eq!(out.get("result"), Some(&Value::from(json!({"name": "Ann"}))));

        let out = run(var_get, &mut runtime, json!({"key": "user"}));
        assert_eq!(out.get("result"), Some(&Value::from(json!({"name": "Ann"}))));
        assert_eq!(out.get("found"), Some(&Value::Bool(true)));

        let out = run(var_delete, &mut runtime, json!({"key": "user"}));
        assert_eq!(out.get("deleted"), Some(&Value::Bool(true)));
        assert!(runtime.store.is_empty());

        let out = run(var_delete, &mut runtime, json!({"key": "user"}));
        assert_eq!(out.get("deleted"), Some(&Value::Bool(false)));
    }

    #[test]
    fn test_get_missing_uses_default() {
        let mut runtime = Runtime::new();
        let out = run(var_get, &mut runtime, json!({"key": "nope", "default": 5}));
        assert_eq!(out.get("result"), Some(&Value::Int(5)));
        assert_eq!(out.get("found"), Some(&Value::Bool(false)));
    }

    #[test]
    fn test_keys_are_not_paths() {
        let mut store = Map::new();
        store.set("a.b", Value::Int(1));
        let mut runtime = Runtime::with_store(store);
        let out = run(var_get, &mut runtime, json!({"key": "a.b"}));
        assert_eq!(out.get("result"), Some(&Value::Int(1)));
    }

    #[test]
    fn test_missing_key_leaves_store_alone() {
        let mut runtime = Runtime::new();
        let out = run(var_set, &mut runtime, json!({"value": 1}));
        assert_eq!(out.get("error"), Some(&Value::from("missing required input 'key'")));
        assert!(runtime.store.is_empty());

        let out = run(var_get, &mut runtime, json!({"key": 3}));
        assert_eq!(
            out.get("error"),
            Some(&Value::from("input 'key' must be a string, got number"))
        );
    }
}
