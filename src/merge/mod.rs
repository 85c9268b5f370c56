//! Merge module - Combining documents.
//!
//! This module folds an ordered sequence of documents into a single mapping,
//! either shallowly or recursively.

mod engine;


pub use engine::*;
