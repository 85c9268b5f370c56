//! Dotted field paths.

use std::fmt;

/// Path addresses a nested mapping key, e.g. `user.address.city`.
///
/// A path is parsed by splitting on `.`; there is no escaping and no index
/// syntax, every segment names a mapping key. Parsing never fails: the empty
/// string is a path with the single segment `""`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    /// Parses a dotted path string.
    pub fn parse(path: &str) -> Self {
        Path {
            segments: path.split('.').map(str::to_string).collect(),
        }
    }

    /// Returns the number of segments in the path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false for parsed paths.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the path segments.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }

    /// Returns the segments as a slice.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns the final segment, the key that is read, written or removed.
    pub fn leaf(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }
}

impl From<&str> for Path {
    fn from(path: &str) -> Self {
        Path::parse(path)
    }
}

impl From<&String> for Path {
    fn from(path: &String) -> Self {
        Path::parse(path)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}
