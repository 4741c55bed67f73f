//! hierpath - address, extract, and update values in nested data with
//! hierarchy path strings.
//!
//! A hierarchy path like `/nhl/0/team` names a location inside a tree of
//! maps, sequences, and scalars without manual nested indexing. Paths may
//! contain `*` wildcard components that fan a single path out into every
//! matching sibling, producing results whose nesting mirrors the shape of
//! the data.
//!
//! Three operations cover the surface: read a value at a path
//! ([`get_in`] / [`get_in_or`]), write a value at a path ([`assoc_in`]),
//! and transform a value at a path through a function ([`update_in`] /
//! [`update_in_or`]). Wildcard reads and updates are driven by the
//! expansion engine ([`expand_paths`]).
//!
//! # Example
//!
//! ```
//! use hierpath::{get_in, update_in, Value};
//! use serde_json::json;
//!
//! let teams = Value::from(json!({
//!     "nhl": [
//!         {"team": "stars", "players": 10},
//!         {"team": "bruins", "players": 30},
//!     ]
//! }));
//!
//! assert_eq!(get_in("/nhl/1/team", &teams).unwrap(), Value::from("bruins"));
//! assert_eq!(
//!     get_in("/nhl/*/team", &teams).unwrap(),
//!     Value::from(json!(["stars", "bruins"]))
//! );
//!
//! let teams = update_in(teams, "/nhl/*/players", |v| {
//!     Value::from(v.as_i64().unwrap_or(0) * 2)
//! })
//! .unwrap();
//! assert_eq!(get_in("/nhl/0/players", &teams).unwrap(), Value::from(20i64));
//! ```
//!
//! Trees are plain owned [`Value`]s; `Value` implements serde's
//! `Serialize`/`Deserialize`, so JSON or YAML documents convert in and
//! out directly (see [`tree::convert`]).

pub mod hpath;
pub mod tree;

pub use hpath::{
    assoc_in, assoc_segments, decode, encode, expand_paths, flatten, get_in, get_in_or,
    is_valid_hp, is_wildcard_hp, update_in, update_in_or, Expanded, HpError, Segment,
};
pub use tree::{Number, Value};
