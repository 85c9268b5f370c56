//! Scalar conversions between booleans, numbers, strings and JSON text.

use super::{recover, InputError, OperationError, Outputs, Params, Runtime};
use crate::value::{self, Map, Value};

/// Converts `value` to a boolean.
///
/// Strings are read as words (`true`/`yes`/`on`/`1` and `false`/`no`/`off`/`0`,
/// case-insensitive); any other non-empty string is true. Other types use
/// truthiness.
pub fn convert_to_boolean(_runtime: &mut Runtime, inputs: &Map) -> Result<Map, OperationError> {
    let value = Params::new(inputs).get("value").cloned().unwrap_or_default();
    Ok(Outputs::new(to_boolean(&value)).into_map())
}

fn to_boolean(value: &Value) -> bool {
    match value.as_str() {
        Some(s) => !matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "" | "false" | "no" | "off" | "0"
        ),
        None => value.is_truthy(),
    }
}

/// Converts `value` to a number. Integers stay integers.
pub fn convert_to_number(_runtime: &mut Runtime, inputs: &Map) -> Result<Map, OperationError> {
    let value = Params::new(inputs).get("value").cloned().unwrap_or_default();
    recover(to_number(&value).map(Outputs::new))
}

fn to_number(value: &Value) -> Result<Value, InputError> {
    match value {
        Value::Null => Ok(Value::Int(0)),
        Value::Bool(b) => Ok(Value::Int(i64::from(*b))),
        Value::Int(_) | Value::Float(_) => Ok(value.clone()),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .map(Value::Int)
                .or_else(|_| s.parse::<f64>().map(Value::Float))
                .map_err(|_| InputError::invalid(format!("cannot convert '{s}' to a number")))
        }
        other => Err(InputError::wrong_type("value", "scalar", other)),
    }
}

/// Converts `value` to a string. Null becomes the empty string; containers
/// and other scalars are rendered as compact JSON.
pub fn convert_to_string(_runtime: &mut Runtime, inputs: &Map) -> Result<Map, OperationError> {
    let value = Params::new(inputs).get("value").cloned().unwrap_or_default();
    let rendered = match &value {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s.clone()),
        other => value::to_json(other).map_err(|e| InputError::invalid(e.to_string())),
    };
    recover(rendered.map(Outputs::new))
}

/// Renders `value` as JSON text; `pretty` indents it.
pub fn convert_to_json(_runtime: &mut Runtime, inputs: &Map) -> Result<Map, OperationError> {
    let params = Params::new(inputs);
    let value = params.get("value").cloned().unwrap_or_default();
    let rendered = params.flag("pretty", false).and_then(|pretty| {
        let text = if pretty {
            value::to_json_pretty(&value)
        } else {
            value::to_json(&value)
        };
        text.map_err(|e| InputError::invalid(e.to_string()))
    });
    recover(rendered.map(Outputs::new))
}

/// Parses the `json` input (alias `value`) into a document.
pub fn convert_parse_json(_runtime: &mut Runtime, inputs: &Map) -> Result<Map, OperationError> {
    let parsed = Params::new(inputs)
        .string(&["json", "value"])
        .and_then(|text| value::from_json(text).map_err(|e| InputError::invalid(e.to_string())));
    recover(parsed.map(Outputs::new))
}
