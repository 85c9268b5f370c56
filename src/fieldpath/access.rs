//! Reading, writing and removing values at a path.
//!
//! None of these functions mutate their input. Writes clone only the mappings
//! along the path (the copy-on-write spine); every other subtree of the result
//! is the same node as in the input.

use super::path::Path;
use crate::value::{Map, Value};
use std::sync::Arc;
use tracing::trace;

/// Returns the value at `path`, or `None` if any segment is missing or a
/// non-mapping value is met on the way.
pub fn get<'a>(root: &'a Value, path: &Path) -> Option<&'a Value> {
    if path.is_empty() {
        return None;
    }
    path.iter()
        .try_fold(root, |current, segment| current.as_map()?.get(segment))
}

/// Returns `(value, true)` when `path` resolves, otherwise `(default, false)`.
///
/// A non-mapping root is reported as not found.
pub fn get_or(root: &Value, path: &Path, default: Value) -> (Value, bool) {
    match get(root, path) {
        Some(value) => (value.clone(), true),
        None => (default, false),
    }
}

/// Returns a new document with `value` stored at `path`.
///
/// A missing or non-mapping `root` is treated as an empty mapping. Missing
/// intermediate keys are created as empty mappings.
///
/// **Data loss:** an intermediate key holding a scalar or a sequence is
/// silently replaced by an empty mapping so the path can be built.
pub fn set(root: Option<&Value>, path: &Path, value: Value) -> Value {
    let mut map = match root {
        Some(Value::Map(map)) => Arc::clone(map),
        _ => Arc::new(Map::new()),
    };
    set_in(Arc::make_mut(&mut map), path.segments(), value);
    Value::Map(map)
}

fn set_in(map: &mut Map, segments: &[String], value: Value) {
    match segments {
        [] => {}
        [leaf] => map.set(leaf.clone(), value),
        [head, rest @ ..] => {
            let mut child = match map.delete(head) {
                Some(Value::Map(child)) => child,
                Some(other) => {
                    trace!(key = %head, kind = other.type_name(), "replacing value with mapping");
                    Arc::new(Map::new())
                }
                None => Arc::new(Map::new()),
            };
            // Clones the child only if the source document still holds it.
            set_in(Arc::make_mut(&mut child), rest, value);
            map.set(head.clone(), Value::Map(child));
        }
    }
}

/// Returns a new document with the key at `path` removed, and whether
/// anything was removed.
///
/// When the path does not resolve the returned document is the input itself
/// (a shared clone) and the flag is `false`.
pub fn delete(root: &Value, path: &Path) -> (Value, bool) {
    let Value::Map(map) = root else {
        return (root.clone(), false);
    };
    if get(root, path).is_none() {
        return (root.clone(), false);
    }

    let mut map = Arc::clone(map);
    let deleted = delete_in(Arc::make_mut(&mut map), path.segments());
    (Value::Map(map), deleted)
}

fn delete_in(map: &mut Map, segments: &[String]) -> bool {
    match segments {
        [] => false,
        [leaf] => map.delete(leaf).is_some(),
        [head, rest @ ..] => match map.get_mut(head) {
            Some(Value::Map(child)) => delete_in(Arc::make_mut(child), rest),
            _ => false,
        },
    }
}
