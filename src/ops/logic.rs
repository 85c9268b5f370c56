//! Boolean combinators and comparisons.

use super::{recover, InputError, OperationError, Outputs, Params, Runtime};
use crate::value::{Map, Value};
use std::cmp::Ordering;

/// True when every entry of `values` is truthy (vacuously true when empty).
pub fn logic_and(_runtime: &mut Runtime, inputs: &Map) -> Result<Map, OperationError> {
    let values = Params::new(inputs).list(&["values"]);
    recover(values.map(|values| Outputs::new(values.iter().all(Value::is_truthy))))
}

/// True when any entry of `values` is truthy.
pub fn logic_or(_runtime: &mut Runtime, inputs: &Map) -> Result<Map, OperationError> {
    let values = Params::new(inputs).list(&["values"]);
    recover(values.map(|values| Outputs::new(values.iter().any(Value::is_truthy))))
}

pub fn logic_not(_runtime: &mut Runtime, inputs: &Map) -> Result<Map, OperationError> {
    let value = Params::new(inputs).get("value").cloned().unwrap_or_default();
    Ok(Outputs::new(!value.is_truthy()).into_map())
}

/// Structural equality of `a` and `b`; `1` equals `1.0`.
pub fn logic_equals(_runtime: &mut Runtime, inputs: &Map) -> Result<Map, OperationError> {
    let params = Params::new(inputs);
    let a = params.get("a").cloned().unwrap_or_default();
    let b = params.get("b").cloned().unwrap_or_default();
    Ok(Outputs::new(a == b).into_map())
}

pub fn logic_gt(_runtime: &mut Runtime, inputs: &Map) -> Result<Map, OperationError> {
    compare_with(inputs, Ordering::Greater)
}

pub fn logic_lt(_runtime: &mut Runtime, inputs: &Map) -> Result<Map, OperationError> {
    compare_with(inputs, Ordering::Less)
}

fn compare_with(inputs: &Map, wanted: Ordering) -> Result<Map, OperationError> {
    let params = Params::new(inputs);
    let ordering = params
        .required("a")
        .and_then(|a| Ok((a, params.required("b")?)))
        .and_then(|(a, b)| compare(a, b));
    match ordering {
        Ok(ordering) => Ok(Outputs::new(ordering == Some(wanted)).into_map()),
        Err(err) => Ok(Outputs::new(false).error(&err).into_map()),
    }
}

/// Orders two numbers or two strings. `None` means unordered (NaN).
fn compare(a: &Value, b: &Value) -> Result<Option<Ordering>, InputError> {
    match (a, b) {
        (Value::String(x), Value::String(y)) => Ok(Some(x.cmp(y))),
        _ if a.is_number() && b.is_number() => {
            let is_nan = |v: &Value| v.as_float().is_some_and(f64::is_nan);
            Ok((!is_nan(a) && !is_nan(b)).then(|| a.cmp(b)))
        }
        _ => Err(InputError::invalid(format!(
            "cannot compare {} with {}",
            a.type_name(),
            b.type_name()
        ))),
    }
}
