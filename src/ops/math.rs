//! Arithmetic reducers.
//!
//! Integer operands produce integer results until an operation overflows or a
//! float is involved, after which the result is a float. Division always
//! yields a float, and dividing by zero is the one hard failure in the crate.

use super::{recover, InputError, OperationError, Outputs, Params, Runtime};
use crate::value::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    fn from_value(name: &str, value: &Value) -> Result<Self, InputError> {
        match value {
            Value::Int(i) => Ok(Number::Int(*i)),
            Value::Float(f) => Ok(Number::Float(*f)),
            other => Err(InputError::wrong_type(name, "number", other)),
        }
    }

    fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    fn apply(
        self,
        other: Number,
        checked: fn(i64, i64) -> Option<i64>,
        float: fn(f64, f64) -> f64,
    ) -> Number {
        if let (Number::Int(a), Number::Int(b)) = (self, other) {
            if let Some(n) = checked(a, b) {
                return Number::Int(n);
            }
        }
        Number::Float(float(self.as_f64(), other.as_f64()))
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        match n {
            Number::Int(i) => Value::Int(i),
            Number::Float(f) => Value::Float(f),
        }
    }
}

fn operand(params: &Params<'_>, name: &str) -> Result<Number, InputError> {
    Number::from_value(name, params.number(name)?)
}

fn reduce(
    inputs: &Map,
    identity: Number,
    checked: fn(i64, i64) -> Option<i64>,
    float: fn(f64, f64) -> f64,
) -> Result<Map, OperationError> {
    let total = Params::new(inputs).list(&["numbers"]).and_then(|numbers| {
        numbers.iter().try_fold(identity, |acc, value| {
            Ok(acc.apply(Number::from_value("numbers", value)?, checked, float))
        })
    });
    recover(total.map(Outputs::new))
}

/// Sum of `numbers`.
pub fn math_add(_runtime: &mut Runtime, inputs: &Map) -> Result<Map, OperationError> {
    reduce(inputs, Number::Int(0), i64::checked_add, |a, b| a + b)
}

/// Product of `numbers`.
pub fn math_multiply(_runtime: &mut Runtime, inputs: &Map) -> Result<Map, OperationError> {
    reduce(inputs, Number::Int(1), i64::checked_mul, |a, b| a * b)
}

/// `a - b`.
pub fn math_subtract(_runtime: &mut Runtime, inputs: &Map) -> Result<Map, OperationError> {
    let params = Params::new(inputs);
    let difference = operand(&params, "a").and_then(|a| {
        let b = operand(&params, "b")?;
        Ok(a.apply(b, i64::checked_sub, |a, b| a - b))
    });
    recover(difference.map(Outputs::new))
}

/// `a / b` as a float. A zero divisor is a hard failure.
pub fn math_divide(_runtime: &mut Runtime, inputs: &Map) -> Result<Map, OperationError> {
    let params = Params::new(inputs);
    let operands = operand(&params, "a").and_then(|a| Ok((a, operand(&params, "b")?)));
    let (a, b) = match operands {
        Ok(operands) => operands,
        Err(err) => return Ok(err.into_outputs()),
    };
    if b.as_f64() == 0.0 {
        return Err(OperationError::division_by_zero("math_divide"));
    }
    Ok(Outputs::new(a.as_f64() / b.as_f64()).into_map())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::OperationFn;
    use serde_json::json;

    fn run(op: OperationFn, inputs: serde_json::Value) -> Result<Map, OperationError> {
        let inputs = Value::from(inputs).as_map().cloned().unwrap_or_default();
        op(&mut Runtime::new(), &inputs)
    }

    fn result(op: OperationFn, inputs: serde_json::Value) -> Value {
        run(op, inputs)
            .unwrap()
            .get("result")
            .cloned()
            .unwrap_or_default()
    }

    #[test]
    fn test_add() {
        assert_eq!(result(math_add, json!({"numbers": [1, 2, 3]})), Value::Int(6));
        assert_eq!(result(math_add, json!({"numbers": [1, 0.5]})), Value::Float(1.5));
        assert_eq!(result(math_add, json!({"numbers": []})), Value::Int(0));
    }

    #[test]
    fn test_add_overflow_widens_to_float() {
        let sum = result(math_add, json!({"numbers": [i64::MAX, 1]}));
        assert!(sum.is_float());
        assert_eq!(sum.as_float(), Some(i64::MAX as f64 + 1.0));
    }

    #[test]
    fn test_add_rejects_non_numbers() {
        let out = run(math_add, json!({"numbers": [1, "2"]})).unwrap();
        assert_eq!(out.get("result"), Some(&Value::Null));
        assert_eq!(
            out.get("error"),
            Some(&Value::from("input 'numbers' must be a number, got string"))
        );
    }

    #[test]
    fn test_multiply() {
        assert_eq!(result(math_multiply, json!({"numbers": [2, 3, 4]})), Value::Int(24));
        assert_eq!(result(math_multiply, json!({"numbers": []})), Value::Int(1));
        assert_eq!(result(math_multiply, json!({"numbers": [2, 0.25]})), Value::Float(0.5));
    }

    #[test]
    fn test_subtract() {
        assert_eq!(result(math_subtract, json!({"a": 10, "b": 4})), Value::Int(6));
        assert_eq!(result(math_subtract, json!({"a": 1, "b": 0.5})), Value::Float(0.5));
        let out = run(math_subtract, json!({"a": 1})).unwrap();
        assert_eq!(out.get("error"), Some(&Value::from("missing required input 'b'")));
    }

    #[test]
    fn test_divide() {
        assert_eq!(result(math_divide, json!({"a": 7, "b": 2})), Value::Float(3.5));
        assert_eq!(result(math_divide, json!({"a": 6, "b": 3})), Value::Int(2));
    }

    #[test]
    fn test_divide_by_zero_is_a_hard_failure() {
        let err = run(math_divide, json!({"a": 1, "b": 0})).unwrap_err();
        assert_eq!(err, OperationError::division_by_zero("math_divide"));
        assert!(run(math_divide, json!({"a": 1, "b": 0.0})).is_err());
    }

    #[test]
    fn test_divide_bad_input_is_soft() {
        let out = run(math_divide, json!({"a": "x", "b": 0})).unwrap();
        assert!(out.has("error"));
    }
}
