//! Error types for hierarchy-path encoding, navigation, and mutation.

use std::fmt;

/// Errors that can occur while encoding, resolving, or writing through a
/// hierarchy path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HpError {
    /// The path (or a segment list being encoded) fails basic shape checks.
    InvalidPath { message: String },
    /// A concrete navigation step hit an absent key, an out-of-range
    /// index, or a value that cannot be stepped into.
    PathNotFound { path: String },
    /// A wildcard's parent resolved to something other than an array or null.
    TypeMismatch { path: String, found: &'static str },
    /// A write or update was attempted with an empty segment list.
    EmptyPath,
}

impl fmt::Display for HpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HpError::InvalidPath { message } => {
                write!(f, "Invalid hierarchy path: {}", message)
            }
            HpError::PathNotFound { path } => {
                write!(f, "Path '{}' not found in tree", path)
            }
            HpError::TypeMismatch { path, found } => write!(
                f,
                "Wildcard parent at '{}' must be an array or null, found {}",
                path, found
            ),
            HpError::EmptyPath => {
                write!(f, "Cannot write through an empty path: no segment to set")
            }
        }
    }
}

impl std::error::Error for HpError {}
