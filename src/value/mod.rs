//! Value module - In-memory representation of JSON/YAML documents.
//!
//! Containers are reference counted so untouched subtrees can be shared
//! between a document and the documents derived from it.

mod value;

pub use value::*;
