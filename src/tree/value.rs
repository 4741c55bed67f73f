//! The universal tree value type.
//!
//! This module provides the core data structures every hierarchy-path
//! operation flows through. A `Value` is a closed sum over the shapes the
//! engine understands: insertion-ordered objects, arrays, and scalars.
//! Objects and arrays contain further `Value` instances, so an arbitrarily
//! nested tree is a single owned `Value`.
//!
//! # Example
//!
//! ```
//! use hierpath::tree::value::{Value, Number};
//! use indexmap::IndexMap;
//!
//! // Build {"name": "hierpath", "version": 1} by hand
//! let mut map = IndexMap::new();
//! map.insert("name".to_string(), Value::String("hierpath".to_string()));
//! map.insert("version".to_string(), Value::Number(Number::Integer(1)));
//! let tree = Value::Object(map);
//!
//! assert!(tree.is_object());
//! assert_eq!(tree.kind(), "object");
//! ```

use indexmap::IndexMap;

/// A number held in a tree (integer or float).
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl Number {
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }
}

/// A tree value.
///
/// This enum represents the value union the engine operates over: objects
/// (string key to value, insertion order preserved), arrays (ordered
/// values), and the scalar kinds string, number, boolean, and null.
///
/// Trees are acyclic by construction; a `Value` owns its children.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A map of string keys to values, preserving insertion order
    Object(IndexMap<String, Value>),
    /// An ordered sequence of values
    Array(Vec<Value>),
    /// A string scalar
    String(String),
    /// A numeric scalar (integer or float)
    Number(Number),
    /// A boolean scalar
    Bool(bool),
    /// The null scalar, also the conventional "absent" result
    Null,
}

impl Value {
    /// Returns true if this value is an object.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns true if this value is an array.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns true if this value is null.
    ///
    /// # Example
    ///
    /// ```
    /// use hierpath::Value;
    ///
    /// assert!(Value::Null.is_null());
    /// assert!(!Value::Bool(false).is_null());
    /// ```
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this value is a container (object or array).
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Object(_) | Value::Array(_))
    }

    /// Returns the object entries if this value is an object.
    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the array elements if this value is an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the string contents if this value is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer contents if this value is an integer number.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(Number::Integer(i)) => Some(*i),
            _ => None,
        }
    }

    /// Returns the numeric contents as a float if this value is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    /// Returns the boolean contents if this value is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// A short name for the value's kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Object(_) => "object",
            Value::Array(_) => "array",
            Value::String(_) => "string",
            Value::Number(_) => "number",
            Value::Bool(_) => "boolean",
            Value::Null => "null",
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Number(Number::Integer(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Number(Number::Float(f))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}
