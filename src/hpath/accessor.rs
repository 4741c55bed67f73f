//! Value lookup by hierarchy path, with wildcard fan-out.
//!
//! # Example
//!
//! ```
//! use hierpath::{get_in, Value};
//! use serde_json::json;
//!
//! let teams = Value::from(json!({
//!     "nhl": [{"team": "stars"}, {"team": "bruins"}, {"team": "preds"}]
//! }));
//!
//! assert_eq!(get_in("/nhl/1/team", &teams).unwrap(), Value::from("bruins"));
//!
//! // A wildcard fans out over every element of the sequence it names.
//! assert_eq!(
//!     get_in("/nhl/*/team", &teams).unwrap(),
//!     Value::from(json!(["stars", "bruins", "preds"]))
//! );
//! ```

use super::codec::{decode, split_wildcard};
use super::error::HpError;
use super::segment::Segment;
use crate::tree::value::Value;

/// Strict lookup: returns the value at `hp`, or [`HpError::PathNotFound`]
/// when any concrete navigation step fails.
///
/// For wildcard paths the result is an array (possibly nested, one level
/// per wildcard) mirroring the branching structure of the data; missing
/// values inside the fan-out become nulls rather than errors, because each
/// branch is resolved with defaulting reads.
pub fn get_in(hp: &str, tree: &Value) -> Result<Value, HpError> {
    resolve(hp, tree, None)
}

/// Defaulting lookup: like [`get_in`], but a failed concrete navigation
/// yields `default` instead of an error. `Value::Null` is the conventional
/// default.
///
/// A wildcard whose parent resolves to a non-array, non-null value is a
/// contract violation and still fails with [`HpError::TypeMismatch`].
pub fn get_in_or(hp: &str, tree: &Value, default: Value) -> Result<Value, HpError> {
    resolve(hp, tree, Some(&default))
}

fn resolve(hp: &str, tree: &Value, default: Option<&Value>) -> Result<Value, HpError> {
    if let Some((parent_path, rest_path)) = split_wildcard(hp) {
        // The parent prefix contains no wildcard; resolve it with a
        // null default so an absent parent short-circuits to null.
        let parent = resolve(parent_path, tree, Some(&Value::Null))?;
        match parent {
            Value::Null => Ok(Value::Null),
            Value::Array(items) => {
                // An empty sequence behaves like an absent parent.
                if items.is_empty() {
                    return Ok(Value::Null);
                }
                let mut results = Vec::with_capacity(items.len());
                for item in &items {
                    results.push(resolve(rest_path, item, Some(&Value::Null))?);
                }
                Ok(Value::Array(results))
            }
            other => Err(HpError::TypeMismatch {
                path: parent_path.to_string(),
                found: other.kind(),
            }),
        }
    } else {
        let segments = decode(hp);
        match walk(tree, &segments) {
            Some(found) => Ok(found.clone()),
            None => match default {
                Some(default) => Ok(default.clone()),
                None => Err(HpError::PathNotFound {
                    path: hp.to_string(),
                }),
            },
        }
    }
}

/// Steps through `tree` segment by segment. `None` on the first failing step.
pub(crate) fn walk<'a>(tree: &'a Value, segments: &[Segment]) -> Option<&'a Value> {
    let mut current = tree;
    for segment in segments {
        current = step(current, segment)?;
    }
    Some(current)
}

fn step<'a>(value: &'a Value, segment: &Segment) -> Option<&'a Value> {
    match (segment, value) {
        (Segment::Key(key), Value::Object(entries)) => entries.get(key),
        (Segment::Index(index), Value::Array(items)) => {
            items.get(normalize_index(*index, items.len())?)
        }
        // Everything else, including a wildcard used as a concrete
        // segment, is a failed step.
        _ => None,
    }
}

/// Normalizes a possibly-negative index against a sequence length.
pub(crate) fn normalize_index(index: isize, len: usize) -> Option<usize> {
    let len = len as isize;
    let normalized = if index < 0 { len + index } else { index };
    if normalized >= 0 && normalized < len {
        Some(normalized as usize)
    } else {
        None
    }
}
