//! Space-separated path navigation over the configuration tree.
//!
//! Paths always start at the tree root, so the same strings work both
//! for entry points handed to the resolver and for template references
//! found in `next` leaves.

use crate::error::BlueprintError;
use crate::tree::{ConfigNode, Entry};

/// Joins a base path and one more segment.
pub(crate) fn join(base: &str, segment: &str) -> String {
    if base.is_empty() {
        segment.to_string()
    } else {
        format!("{} {}", base, segment)
    }
}

/// Resolves a path to the node it names.
///
/// Every segment must lead to a nested node. A missing key, or a key
/// that holds a leaf, fails with the full path and the segment that
/// could not be entered.
pub(crate) fn goto<'a>(
    root: &'a ConfigNode,
    path: &str,
) -> Result<&'a ConfigNode, BlueprintError> {
    let mut current = root;
    for segment in path.split(' ') {
        current = match current.get(segment) {
            Some(Entry::Node(node)) => node,
            _ => {
                return Err(BlueprintError::PathNotFound {
                    path: path.to_string(),
                    segment: segment.to_string(),
                });
            }
        };
    }
    Ok(current)
}
