//! Error types for operations.

use crate::value::{Map, Value};
use thiserror::Error;

/// OperationError is a hard failure: the operation produced no outputs and
/// the workflow step fails.
///
/// Only arithmetic raises these. Bad or missing inputs are reported through
/// the `error` output instead; see [`InputError`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OperationError {
    #[error("{operation}: division by zero")]
    DivisionByZero { operation: String },

    #[error("unknown operation: {name}")]
    UnknownOperation { name: String },
}

impl OperationError {
    /// Creates a division by zero error.
    pub fn division_by_zero(operation: impl Into<String>) -> Self {
        OperationError::DivisionByZero {
            operation: operation.into(),
        }
    }

    /// Creates an unknown operation error.
    pub fn unknown_operation(name: impl Into<String>) -> Self {
        OperationError::UnknownOperation { name: name.into() }
    }
}

/// InputError is a soft failure: it is rendered into the outputs as an
/// `error` string next to a null `result`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("missing required input '{name}'")]
    Missing { name: String },

    #[error("input '{name}' must be a {expected}, got {actual}")]
    WrongType {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("{0}")]
    Invalid(String),
}

impl InputError {
    /// Creates a missing input error.
    pub fn missing(name: impl Into<String>) -> Self {
        InputError::Missing { name: name.into() }
    }

    /// Creates a type mismatch error for `actual`.
    pub fn wrong_type(name: impl Into<String>, expected: &'static str, actual: &Value) -> Self {
        InputError::WrongType {
            name: name.into(),
            expected,
            actual: actual.type_name(),
        }
    }

    /// Creates an error with a free-form message.
    pub fn invalid(message: impl Into<String>) -> Self {
        InputError::Invalid(message.into())
    }

    /// Renders the error as operation outputs.
    pub fn into_outputs(self) -> Map {
        let mut outputs = Map::new();
        outputs.set("result", Value::Null);
        outputs.set("error", Value::String(self.to_string()));
        outputs
    }
}
