//! # docops
//!
//! Path-addressed access and merging for dynamically typed documents, packaged
//! as workflow node operations.
//!
//! Documents are trees of mappings, sequences and scalars. Every operation
//! returns a new document and never mutates its input; unchanged subtrees are
//! shared between the input and the result.
//!
//! ## Modules
//!
//! - [`value`] - In-memory representation of JSON/YAML documents
//! - [`fieldpath`] - Dotted paths and get/set/delete at a path
//! - [`merge`] - Shallow and deep merging of document sequences
//! - [`ops`] - Named workflow operations, the runtime store and the catalog

pub mod fieldpath;
pub mod merge;
pub mod ops;
pub mod value;

pub use fieldpath::Path;
pub use merge::MergeMode;
pub use ops::{invoke, InputError, Operation, OperationError, Runtime, Store};
pub use value::{Map, Value};
