//! Folding a sequence of documents into one mapping.

use crate::value::{Map, Value};
use std::sync::Arc;
use tracing::trace;

/// MergeMode selects how colliding keys are reconciled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MergeMode {
    /// Later documents overwrite top-level keys; values are shared, not copied.
    #[default]
    Shallow,
    /// Mappings present on both sides are merged recursively. Any other
    /// collision, including sequence against sequence, is won outright by the
    /// later document. The result shares no container with the inputs.
    Deep,
}

impl From<bool> for MergeMode {
    fn from(deep: bool) -> Self {
        if deep {
            MergeMode::Deep
        } else {
            MergeMode::Shallow
        }
    }
}

/// Merges `documents` in order using `mode`.
///
/// Entries that are not mappings are skipped; an input with no mappings
/// yields an empty mapping.
pub fn merge<'a, I>(documents: I, mode: MergeMode) -> Map
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut acc = Map::new();
    for (index, document) in documents.into_iter().enumerate() {
        let Some(incoming) = document.as_map() else {
            trace!(index, kind = document.type_name(), "skipping non-mapping document");
            continue;
        };
        match mode {
            MergeMode::Shallow => merge_shallow(&mut acc, incoming),
            MergeMode::Deep => merge_deep(&mut acc, incoming),
        }
    }
    acc
}

/// Shorthand for `merge(documents, MergeMode::Shallow)`.
pub fn shallow_merge<'a, I>(documents: I) -> Map
where
    I: IntoIterator<Item = &'a Value>,
{
    merge(documents, MergeMode::Shallow)
}

/// Shorthand for `merge(documents, MergeMode::Deep)`.
pub fn deep_merge<'a, I>(documents: I) -> Map
where
    I: IntoIterator<Item = &'a Value>,
{
    merge(documents, MergeMode::Deep)
}

fn merge_shallow(acc: &mut Map, incoming: &Map) {
    for (key, value) in incoming {
        acc.set(key.clone(), value.clone());
    }
}

// Every node stored in `acc` is a fresh copy, so `make_mut` below never has
// to clone: the accumulator is the only owner.
fn merge_deep(acc: &mut Map, incoming: &Map) {
    for (key, value) in incoming {
        if let (Some(Value::Map(existing)), Value::Map(child)) = (acc.get_mut(key), value) {
            merge_deep(Arc::make_mut(existing), child);
            continue;
        }
        acc.set(key.clone(), value.deep_copy());
    }
}
