//! Typed segments of a hierarchy path.

use std::fmt;

/// A single component of a hierarchy path.
///
/// Classification happens once, at decode time: a token that parses as an
/// (optionally signed) integer is an `Index`, the token `*` is the
/// `Wildcard`, and everything else is a `Key`. Navigation pattern-matches
/// on the tagged variant and never re-inspects the token text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// An object key
    Key(String),
    /// An array index; negative values index from the end
    Index(isize),
    /// The wildcard marker (`*`), matching every element at this depth
    Wildcard,
}

impl Segment {
    /// Builds a key segment from anything string-like.
    pub fn key(name: impl Into<String>) -> Self {
        Segment::Key(name.into())
    }

    /// Builds an index segment.
    pub fn index(i: isize) -> Self {
        Segment::Index(i)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(name) => write!(f, "{}", name),
            Segment::Index(i) => write!(f, "{}", i),
            Segment::Wildcard => write!(f, "*"),
        }
    }
}
