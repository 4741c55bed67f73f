//! Hierarchy-path string codec.
//!
//! Converts between the string form of a hierarchy path (`/nhl/0/team`)
//! and an ordered list of typed [`Segment`]s, and supplies the wildcard
//! predicates used by the accessor and expander.
//!
//! # Example
//!
//! ```
//! use hierpath::hpath::codec::{decode, encode};
//! use hierpath::Segment;
//!
//! let segments = decode("/root/0/thing/2");
//! assert_eq!(
//!     segments,
//!     vec![
//!         Segment::key("root"),
//!         Segment::index(0),
//!         Segment::key("thing"),
//!         Segment::index(2),
//!     ]
//! );
//! assert_eq!(encode(&segments).unwrap(), "/root/0/thing/2");
//! ```

use super::error::HpError;
use super::segment::Segment;

/// The path delimiter character.
pub const DELIMITER: char = '/';

/// The wildcard token.
pub const WILDCARD: &str = "*";

/// Decodes a hierarchy path string into typed segments.
///
/// Splits on the delimiter and drops empty components, so leading,
/// trailing, and duplicated delimiters are all tolerated: `"/a/b"`,
/// `"a/b/"`, and `"//a//b"` decode identically. `"/"` and `""` decode to
/// the empty list (the tree root).
///
/// Any component that parses as an integer becomes an [`Segment::Index`],
/// so an object key that happens to look numeric (`"0"`) is
/// indistinguishable from index `0` after decoding.
pub fn decode(hp: &str) -> Vec<Segment> {
    hp.split(DELIMITER)
        .filter(|component| !component.is_empty())
        .map(|component| {
            if component == WILDCARD {
                Segment::Wildcard
            } else if let Ok(i) = component.parse::<isize>() {
                Segment::Index(i)
            } else {
                Segment::Key(component.to_string())
            }
        })
        .collect()
}

/// Encodes typed segments back into a hierarchy path string.
///
/// The result carries a single leading delimiter; the empty segment list
/// encodes to `"/"`. Returns [`HpError::InvalidPath`] if a key segment
/// contains the delimiter character, since it could not round-trip.
pub fn encode(segments: &[Segment]) -> Result<String, HpError> {
    for segment in segments {
        if let Segment::Key(name) = segment {
            if name.contains(DELIMITER) {
                return Err(HpError::InvalidPath {
                    message: format!("key segment '{}' contains the path delimiter", name),
                });
            }
        }
    }
    Ok(join_segments(segments))
}

/// Renders segments as a path string without validation. Used for error
/// reporting, where a best-effort rendering beats failing twice.
pub(crate) fn join_segments(segments: &[Segment]) -> String {
    let mut out = String::from("/");
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            out.push(DELIMITER);
        }
        out.push_str(&segment.to_string());
    }
    out
}

/// Shape predicate over hierarchy path strings.
///
/// Every `&str` decodes to a navigable segment list, so this always
/// returns true; it is kept as the documented extension point for callers
/// that want to gate paths before use.
pub fn is_valid_hp(_hp: &str) -> bool {
    true
}

/// Returns true if the path contains a wildcard component.
///
/// The test is for the exact substring `/*/`, which means a wildcard as
/// the final component without a trailing delimiter (`/a/*`) is NOT
/// detected, while `/a/*/` is. Callers relying on trailing wildcards must
/// write the trailing delimiter.
pub fn is_wildcard_hp(hp: &str) -> bool {
    hp.contains("/*/")
}

/// Splits at the first `/*/` occurrence into (parent, rest). Returns
/// `None` when the path has no wildcard component.
pub(crate) fn split_wildcard(hp: &str) -> Option<(&str, &str)> {
    hp.find("/*/")
        .map(|pos| (&hp[..pos], &hp[pos + "/*/".len()..]))
}
