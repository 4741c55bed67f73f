//! Wildcard path expansion.
//!
//! A wildcard path names a whole family of concrete paths, one per
//! element of every sequence a wildcard lands on. [`expand_paths`] turns
//! a wildcard path plus a specific tree into that family, nested to
//! mirror the branching structure of the data; [`Expanded::flatten`] and
//! [`Expanded::into_paths`] collapse the nesting into the ordered list of
//! concrete paths a write wants to fold over.
//!
//! # Example
//!
//! ```
//! use hierpath::{expand_paths, Value};
//! use serde_json::json;
//!
//! let teams = Value::from(json!({"nhl": [{"players": 10}, {"players": 90}]}));
//! let paths = expand_paths("/nhl/*/players", &teams).unwrap().into_paths();
//! assert_eq!(paths, vec!["/nhl/0/players", "/nhl/1/players"]);
//! ```

use super::accessor::get_in_or;
use super::codec::split_wildcard;
use super::error::HpError;
use crate::tree::value::Value;

/// The result of expanding a path against a tree.
///
/// Each wildcard contributes one `Many` nesting level, sized by the
/// sequence discovered at that depth on that traversal branch. A branch
/// whose wildcard parent is missing (or an empty sequence) is `Absent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expanded {
    /// A wildcard parent on this branch resolved to null or an empty sequence
    Absent,
    /// A concrete hierarchy path
    One(String),
    /// One branching level of the expansion
    Many(Vec<Expanded>),
}

impl Expanded {
    /// Flattens the expansion depth-first, left to right.
    ///
    /// `Absent` leaves survive as `None`; flattening itself never drops
    /// entries. Use [`Expanded::into_paths`] when the goal is the filtered
    /// list of concrete paths.
    pub fn flatten(self) -> Vec<Option<String>> {
        let mut out = Vec::new();
        self.flatten_into(&mut out);
        out
    }

    fn flatten_into(self, out: &mut Vec<Option<String>>) {
        match self {
            Expanded::Absent => out.push(None),
            Expanded::One(path) => out.push(Some(path)),
            Expanded::Many(branches) => {
                for branch in branches {
                    branch.flatten_into(out);
                }
            }
        }
    }

    /// Flattens and then filters out absent and empty entries, yielding
    /// the concrete paths in document order (depth first, index ascending).
    pub fn into_paths(self) -> Vec<String> {
        self.flatten()
            .into_iter()
            .flatten()
            .filter(|path| !path.is_empty())
            .collect()
    }
}

/// Expands `hp` against `tree` into the nested family of concrete paths
/// it denotes.
///
/// A path without a wildcard expands to a single-element list of itself.
/// Otherwise the path splits at its first `/*/`; the parent prefix must
/// resolve to a sequence (fanning out per element, recursively, since the
/// rest may hold further wildcards) or to null/empty (yielding
/// [`Expanded::Absent`] for that branch). Any other parent kind fails
/// with [`HpError::TypeMismatch`].
pub fn expand_paths(hp: &str, tree: &Value) -> Result<Expanded, HpError> {
    let Some((parent_path, rest_path)) = split_wildcard(hp) else {
        return Ok(Expanded::Many(vec![Expanded::One(hp.to_string())]));
    };

    let parent = get_in_or(parent_path, tree, Value::Null)?;
    match parent {
        Value::Null => Ok(Expanded::Absent),
        Value::Array(items) => {
            if items.is_empty() {
                return Ok(Expanded::Absent);
            }
            let mut branches = Vec::with_capacity(items.len());
            for index in 0..items.len() {
                let concrete = format!("{}/{}/{}", parent_path, index, rest_path);
                branches.push(expand_paths(&concrete, tree)?);
            }
            Ok(Expanded::Many(branches))
        }
        other => Err(HpError::TypeMismatch {
            path: parent_path.to_string(),
            found: other.kind(),
        }),
    }
}

/// Depth-first flattening of nested arrays into a single ordered list.
///
/// Non-array leaves, including nulls, are kept in place; nothing is
/// filtered. Useful for collapsing the shape-mirroring results of a
/// multi-wildcard read.
pub fn flatten(items: &[Value]) -> Vec<Value> {
    let mut out = Vec::new();
    flatten_into(items, &mut out);
    out
}

fn flatten_into(items: &[Value], out: &mut Vec<Value>) {
    for item in items {
        match item {
            Value::Array(nested) => flatten_into(nested, out),
            leaf => out.push(leaf.clone()),
        }
    }
}
