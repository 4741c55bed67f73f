//! Writing and transforming values at hierarchy paths.
//!
//! The mutation API takes its tree BY VALUE: the input is consumed, the
//! owned tree is updated in place, and the updated tree is returned.
//! There is never a partially shared intermediate state; callers that
//! need to keep the pre-update tree clone it first.
//!
//! # Example
//!
//! ```
//! use hierpath::{assoc_in, update_in, Value};
//! use serde_json::json;
//!
//! let tree = Value::from(json!({"a": 1}));
//! let tree = assoc_in(tree, "/a", Value::from(2i64)).unwrap();
//! assert_eq!(tree, Value::from(json!({"a": 2})));
//!
//! // A wildcard update transforms every path the wildcard denotes.
//! let teams = Value::from(json!({"nhl": [{"players": 10}, {"players": 90}]}));
//! let teams = update_in(teams, "/nhl/*/players", |v| {
//!     Value::from(v.as_i64().unwrap_or(0) + 1)
//! })
//! .unwrap();
//! assert_eq!(teams, Value::from(json!({"nhl": [{"players": 11}, {"players": 91}]})));
//! ```

use super::accessor::{get_in_or, normalize_index};
use super::codec::{decode, is_wildcard_hp, join_segments};
use super::error::HpError;
use super::expander::expand_paths;
use super::segment::Segment;
use crate::tree::value::Value;

/// Places `value` at the location named by `segments`, returning the
/// updated tree.
///
/// The final segment is the setter; everything before it must already
/// exist and navigate cleanly ([`HpError::PathNotFound`] otherwise). The
/// setter itself may name a missing object key, which is created; an
/// array index must be in range. An empty segment list has nothing to
/// set and fails with [`HpError::EmptyPath`].
pub fn assoc_segments(
    mut tree: Value,
    segments: &[Segment],
    value: Value,
) -> Result<Value, HpError> {
    let Some((setter, getters)) = segments.split_last() else {
        return Err(HpError::EmptyPath);
    };

    let target = walk_mut(&mut tree, getters).ok_or_else(|| HpError::PathNotFound {
        path: join_segments(getters),
    })?;

    set_segment(target, setter, value).ok_or_else(|| HpError::PathNotFound {
        path: join_segments(segments),
    })?;

    Ok(tree)
}

/// Decodes `hp` and delegates to [`assoc_segments`].
pub fn assoc_in(tree: Value, hp: &str, value: Value) -> Result<Value, HpError> {
    let segments = decode(hp);
    assoc_segments(tree, &segments, value)
}

/// Reads the value at `hp` (defaulting to null on a miss), applies
/// `transform`, and writes the result back.
///
/// With a wildcard path, every concrete path the wildcard denotes is
/// updated in document order, each update seeing the tree as left by the
/// previous one. See [`update_in_or`] to control the read default.
pub fn update_in<F>(tree: Value, hp: &str, transform: F) -> Result<Value, HpError>
where
    F: FnMut(Value) -> Value,
{
    update_in_or(tree, hp, Value::Null, transform)
}

/// Like [`update_in`], but a missing value at the final path step reads
/// as `default` before the transform is applied.
///
/// Write-side failures are never defaulted: a broken intermediate step
/// still fails with [`HpError::PathNotFound`], and the wildcard fold
/// stops at the first error rather than partially writing.
pub fn update_in_or<F>(
    tree: Value,
    hp: &str,
    default: Value,
    mut transform: F,
) -> Result<Value, HpError>
where
    F: FnMut(Value) -> Value,
{
    if !is_wildcard_hp(hp) {
        return update_one(tree, hp, &default, &mut transform);
    }

    // Expand against the pre-update tree, then fold the single-path
    // update across the concrete paths, threading the tree through.
    let paths = expand_paths(hp, &tree)?.into_paths();
    let mut current = tree;
    for path in &paths {
        current = update_one(current, path, &default, &mut transform)?;
    }
    Ok(current)
}

fn update_one<F>(
    tree: Value,
    hp: &str,
    default: &Value,
    transform: &mut F,
) -> Result<Value, HpError>
where
    F: FnMut(Value) -> Value,
{
    let current = get_in_or(hp, &tree, default.clone())?;
    assoc_in(tree, hp, transform(current))
}

/// Mutable counterpart of the accessor's walk. `None` on the first
/// failing step.
fn walk_mut<'a>(tree: &'a mut Value, segments: &[Segment]) -> Option<&'a mut Value> {
    let mut current = tree;
    for segment in segments {
        // Reborrow through the match so the loop can keep narrowing.
        current = match current {
            Value::Object(entries) => match segment {
                Segment::Key(key) => entries.get_mut(key)?,
                _ => return None,
            },
            Value::Array(items) => match segment {
                Segment::Index(index) => {
                    let idx = normalize_index(*index, items.len())?;
                    items.get_mut(idx)?
                }
                _ => return None,
            },
            _ => return None,
        };
    }
    Some(current)
}

fn set_segment(container: &mut Value, setter: &Segment, value: Value) -> Option<()> {
    match container {
        Value::Object(entries) => match setter {
            Segment::Key(key) => {
                entries.insert(key.clone(), value);
                Some(())
            }
            _ => None,
        },
        Value::Array(items) => match setter {
            Segment::Index(index) => {
                let idx = normalize_index(*index, items.len())?;
                items[idx] = value;
                Some(())
            }
            _ => None,
        },
        _ => None,
    }
}
