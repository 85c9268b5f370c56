//! Sequence utilities.

use super::{recover, InputError, OperationError, Outputs, Params, Runtime};
use crate::value::{Map, Value};

/// Concatenates every sequence in `lists`; other entries are skipped.
pub fn list_concat(_runtime: &mut Runtime, inputs: &Map) -> Result<Map, OperationError> {
    let lists = Params::new(inputs).list(&["lists"]);
    recover(lists.map(|lists| {
        let joined: Vec<Value> = lists
            .iter()
            .filter_map(Value::as_list)
            .flat_map(|items| items.iter().cloned())
            .collect();
        Outputs::new(joined)
    }))
}

/// Finds the first mapping in `list` whose `key` field equals `value`.
///
/// Outputs `result` (the element or null), `found` and `index`.
pub fn list_find(_runtime: &mut Runtime, inputs: &Map) -> Result<Map, OperationError> {
    let params = Params::new(inputs);
    let found = params.list(&["list"]).and_then(|items| {
        let key = params.string(&["key"])?;
        let wanted = params.get("value").cloned().unwrap_or_default();
        let hit = items.iter().enumerate().find(|(_, item)| {
            item.as_map()
                .and_then(|m| m.get(key))
                .is_some_and(|v| *v == wanted)
        });
        Ok(match hit {
            Some((index, item)) => Outputs::new(item.clone())
                .with("found", true)
                .with("index", index),
            None => Outputs::new(Value::Null)
                .with("found", false)
                .with("index", Value::Null),
        })
    });
    recover(found)
}

/// Returns the number of elements in `list`.
pub fn list_length(_runtime: &mut Runtime, inputs: &Map) -> Result<Map, OperationError> {
    let items = Params::new(inputs).list(&["list"]);
    recover(items.map(|items| Outputs::new(items.len())))
}

/// Returns `list` reversed.
pub fn list_reverse(_runtime: &mut Runtime, inputs: &Map) -> Result<Map, OperationError> {
    let items = Params::new(inputs).list(&["list"]);
    recover(items.map(|items| Outputs::new(items.iter().rev().cloned().collect::<Vec<_>>())))
}

/// Returns the elements of `list` from `start` up to, not including, `end`.
///
/// Negative bounds count from the end; out of range bounds are clamped.
pub fn list_slice(_runtime: &mut Runtime, inputs: &Map) -> Result<Map, OperationError> {
    let params = Params::new(inputs);
    let sliced = params.list(&["list"]).and_then(|items| {
        let len = items.len();
        let start = clamp_index(params.integer("start")?.unwrap_or(0), len);
        let end = params
            .integer("end")?
            .map_or(len, |end| clamp_index(end, len));
        Ok(Outputs::new(items[start..end.max(start)].to_vec()))
    });
    recover(sliced)
}

fn clamp_index(index: i64, len: usize) -> usize {
    let len_i = i64::try_from(len).unwrap_or(i64::MAX);
    let resolved = if index < 0 { index + len_i } else { index };
    usize::try_from(resolved.clamp(0, len_i)).unwrap_or(len)
}

/// Sorts `list`. With `key`, mapping elements are ordered by that field and
/// elements lacking it sort as null. `reverse` flips the order. The sort is
/// stable.
pub fn list_sort(_runtime: &mut Runtime, inputs: &Map) -> Result<Map, OperationError> {
    let params = Params::new(inputs);
    let sorted = params.list(&["list"]).and_then(|items| {
        let key = match params.get("key") {
            None => None,
            Some(Value::String(key)) => Some(key.as_str()),
            Some(other) => return Err(InputError::wrong_type("key", "string", other)),
        };
        let sort_key = |item: &Value| -> Value {
            match key {
                Some(key) => item
                    .as_map()
                    .and_then(|m| m.get(key))
                    .cloned()
                    .unwrap_or_default(),
                None => item.clone(),
            }
        };

        let mut sorted = items.to_vec();
        sorted.sort_by_cached_key(sort_key);
        if params.flag("reverse", false)? {
            sorted.reverse();
        }
        Ok(Outputs::new(sorted))
    });
    recover(sorted)
}
