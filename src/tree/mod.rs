//! Tree value representation and serde conversions.

pub mod convert;
pub mod value;

pub use value::{Number, Value};
