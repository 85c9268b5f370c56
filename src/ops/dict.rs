//! Document operations: path access and merging.
//!
//! These never fail. A missing or malformed `key`, or a `dict` that is not a
//! mapping, degrades to "not found", "nothing deleted" or a freshly built
//! document, and callers tell success apart by the `found`/`deleted` flags.

use super::{OperationError, Outputs, Params, Runtime};
use crate::fieldpath;
use crate::merge::{self, MergeMode};
use crate::value::{Map, Value};

/// Reads `dict` at `key` (alias `path`).
///
/// Outputs `result` (the value, or `default`) and `found`.
pub fn dict_get(_runtime: &mut Runtime, inputs: &Map) -> Result<Map, OperationError> {
    let params = Params::new(inputs);
    let default = params.get("default").cloned().unwrap_or_default();
    let root = params.get("dict").cloned().unwrap_or_default();

    let (result, found) = match params.path() {
        Some(path) => fieldpath::get_or(&root, &path, default),
        None => (default, false),
    };
    Ok(Outputs::new(result).with("found", found).into_map())
}

/// Writes `value` into `dict` at `key` (alias `path`), creating intermediate
/// mappings.
///
/// A scalar or sequence met along the path is replaced by a mapping, losing
/// whatever it held. Without a usable `key` the document is returned
/// unchanged together with an `error`.
pub fn dict_set(_runtime: &mut Runtime, inputs: &Map) -> Result<Map, OperationError> {
    let params = Params::new(inputs);
    let root = params.get("dict");
    let value = params.get("value").cloned().unwrap_or_default();

    match params.string(&["key", "path"]) {
        Ok(path) => {
            let result = fieldpath::set(root, &path.into(), value);
            Ok(Outputs::new(result).into_map())
        }
        Err(err) => {
            let unchanged = root.cloned().unwrap_or_else(Value::empty_map);
            Ok(Outputs::new(unchanged).error(&err).into_map())
        }
    }
}

/// Removes `key` (alias `path`) from `dict`.
///
/// Outputs `result` and `deleted`.
pub fn dict_delete(_runtime: &mut Runtime, inputs: &Map) -> Result<Map, OperationError> {
    let params = Params::new(inputs);
    let root = params.get("dict").cloned().unwrap_or_default();

    let (result, deleted) = match params.path() {
        Some(path) => fieldpath::delete(&root, &path),
        None => (root, false),
    };
    Ok(Outputs::new(result).with("deleted", deleted).into_map())
}

/// Merges `dicts` (alias `documents`) in order; `deep` selects recursive
/// merging and must be a boolean.
pub fn dict_merge(_runtime: &mut Runtime, inputs: &Map) -> Result<Map, OperationError> {
    let params = Params::new(inputs);
    let merged = params.flag("deep", false).and_then(|deep| {
        let documents = params.list(&["dicts", "documents"])?;
        Ok(merge::merge(documents, MergeMode::from(deep)))
    });

    match merged {
        Ok(merged) => Ok(Outputs::new(merged).into_map()),
        Err(err) => Ok(Outputs::new(Value::empty_map()).error(&err).into_map()),
    }
}
