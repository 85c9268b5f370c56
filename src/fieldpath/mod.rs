//! Field path module - Dotted paths into nested mappings.
//!
//! This module parses paths and reads, writes and removes the values they
//! address without mutating the source document.

mod access;
mod path;

pub use access::*;
pub use path::*;
