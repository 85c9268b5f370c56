//! Reading named inputs and assembling named outputs.

use super::error::{InputError, OperationError};
use crate::fieldpath::Path;
use crate::value::{Map, Value};

/// Params is a typed view over an operation's inputs.
#[derive(Debug, Clone, Copy)]
pub struct Params<'a> {
    inputs: &'a Map,
}

impl<'a> Params<'a> {
    pub fn new(inputs: &'a Map) -> Self {
        Params { inputs }
    }

    /// Returns the input, treating an explicit null as absent.
    pub fn get(&self, name: &str) -> Option<&'a Value> {
        self.inputs.get(name).filter(|v| !v.is_null())
    }

    /// Returns the first present input among `names`, with the name it was
    /// found under.
    pub fn first(&self, names: &[&'static str]) -> Option<(&'static str, &'a Value)> {
        names
            .iter()
            .find_map(|name| self.get(name).map(|value| (*name, value)))
    }

    pub fn required(&self, name: &str) -> Result<&'a Value, InputError> {
        self.get(name).ok_or_else(|| InputError::missing(name))
    }

    /// Returns a required string input, accepting any of the aliases in
    /// `names`. The first alias is used in error messages.
    pub fn string(&self, names: &[&'static str]) -> Result<&'a str, InputError> {
        let (name, value) = self
            .first(names)
            .ok_or_else(|| InputError::missing(names.first().copied().unwrap_or_default()))?;
        value
            .as_str()
            .ok_or_else(|| InputError::wrong_type(name, "string", value))
    }

    /// Returns the `key` (or `path`) input parsed as a dotted path, if it is a
    /// string.
    pub fn path(&self) -> Option<Path> {
        self.string(&["key", "path"]).ok().map(Path::parse)
    }

    pub fn list(&self, names: &[&'static str]) -> Result<&'a [Value], InputError> {
        let (name, value) = self
            .first(names)
            .ok_or_else(|| InputError::missing(names.first().copied().unwrap_or_default()))?;
        value
            .as_list()
            .map(Vec::as_slice)
            .ok_or_else(|| InputError::wrong_type(name, "sequence", value))
    }

    pub fn number(&self, name: &str) -> Result<&'a Value, InputError> {
        let value = self.required(name)?;
        if value.is_number() {
            Ok(value)
        } else {
            Err(InputError::wrong_type(name, "number", value))
        }
    }

    /// Returns an optional integer input.
    pub fn integer(&self, name: &str) -> Result<Option<i64>, InputError> {
        match self.get(name) {
            None => Ok(None),
            Some(value) => value
                .as_integral()
                .map(Some)
                .ok_or_else(|| InputError::wrong_type(name, "integer", value)),
        }
    }

    /// Returns an optional boolean input. Strings such as `"false"` are
    /// rejected rather than read by truthiness.
    pub fn flag(&self, name: &str, default: bool) -> Result<bool, InputError> {
        match self.get(name) {
            None => Ok(default),
            Some(value) => value
                .as_bool()
                .ok_or_else(|| InputError::wrong_type(name, "boolean", value)),
        }
    }
}

/// Outputs builds an operation's output mapping around its `result`.
#[derive(Debug, Clone)]
pub struct Outputs {
    map: Map,
}

impl Outputs {
    pub fn new(result: impl Into<Value>) -> Self {
        let mut map = Map::new();
        map.set("result", result.into());
        Outputs { map }
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.map.set(key, value.into());
        self
    }

    /// Attaches a soft failure message.
    pub fn error(self, error: &InputError) -> Self {
        self.with("error", error.to_string())
    }

    pub fn into_map(self) -> Map {
        self.map
    }
}

impl From<Outputs> for Map {
    fn from(outputs: Outputs) -> Self {
        outputs.into_map()
    }
}

/// Turns a soft failure into outputs; successes pass through.
pub fn recover(result: Result<Outputs, InputError>) -> Result<Map, OperationError> {
    Ok(result.map_or_else(InputError::into_outputs, Outputs::into_map))
}
