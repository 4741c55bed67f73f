//! Hierarchy-path engine: codec, accessor, wildcard expander, and updater.
//!
//! A hierarchy path (HP) is a delimiter-separated string addressing a
//! location inside a tree of [`Value`](crate::Value)s:
//!
//! - `/a/b/c` - object keys
//! - `/nhl/0/team` - numeric tokens index into sequences
//! - `/nhl/-1/team` - negative indices count from the end
//! - `/nhl/*/team` - the wildcard fans out over every sequence element
//!
//! Wildcards nest: `/nba/*/details/*/who` reads every `who` of every
//! detail of every team, with the result nested to mirror the data.
//!
//! # Example
//!
//! ```
//! use hierpath::{get_in, Value};
//! use serde_json::json;
//!
//! let tree = Value::from(json!({"a": {"b": {"c": 99}}}));
//! assert_eq!(get_in("/a/b/c", &tree).unwrap(), Value::from(99i64));
//! ```

pub mod accessor;
pub mod codec;
pub mod error;
pub mod expander;
pub mod segment;
pub mod update;

pub use accessor::{get_in, get_in_or};
pub use codec::{decode, encode, is_valid_hp, is_wildcard_hp};
pub use error::HpError;
pub use expander::{expand_paths, flatten, Expanded};
pub use segment::Segment;
pub use update::{assoc_in, assoc_segments, update_in, update_in_or};
