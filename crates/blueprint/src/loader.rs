//! Conversion of a parsed XML document into a [`ConfigNode`] tree.
//!
//! An element with non-empty text becomes a leaf, anything else becomes a
//! nested node. Leaf text may opt into coercion through the `parse`
//! attribute (`int`, `float` or `tuple`). Repeated sibling tags are
//! rejected unless the tag is registered as list-accumulating, in which
//! case every occurrence is appended to a [`Value::List`].

use crate::NEXT_TAG;
use crate::error::BlueprintError;
use crate::path;
use crate::tree::{ConfigNode, Entry, Value};
use roxmltree::{Document, Node};
use std::collections::HashSet;

const PARSE_ATTRIBUTE: &str = "parse";

/// Load-time configuration for the tree builder.
///
/// The default set of list-accumulating tags contains only the template
/// reference tag, so every other repeated sibling is a load error.
#[derive(Debug, Clone)]
pub struct LoaderOptions {
    list_tags: HashSet<String>,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            list_tags: HashSet::from([NEXT_TAG.to_string()]),
        }
    }
}

impl LoaderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an additional tag whose repeated occurrences accumulate
    /// into a list instead of being rejected as duplicates.
    pub fn list_tag(mut self, tag: impl Into<String>) -> Self {
        self.list_tags.insert(tag.into());
        self
    }

    fn is_list_tag(&self, tag: &str) -> bool {
        self.list_tags.contains(tag)
    }
}

/// Builds the configuration tree rooted below the document element.
///
/// The document element itself only frames the file; paths used by the
/// resolver start at its children.
pub(crate) fn build(
    doc: &Document<'_>,
    options: &LoaderOptions,
) -> Result<ConfigNode, BlueprintError> {
    let tree = node_from_element(doc.root_element(), "", options)?;
    log::debug!("loaded blueprint tree with {} top-level entries", tree.len());
    Ok(tree)
}

fn node_from_element(
    element: Node<'_, '_>,
    node_path: &str,
    options: &LoaderOptions,
) -> Result<ConfigNode, BlueprintError> {
    let mut node = ConfigNode::new();
    for child in element.children().filter(|c| c.is_element()) {
        let tag = child.tag_name().name();
        let child_path = path::join(node_path, tag);
        match leaf_text(child) {
            Some(text) => {
                let value = leaf_value(child, text)?;
                if options.is_list_tag(tag) {
                    append_list_item(&mut node, tag, value, &child_path)?;
                } else if node.contains(tag) {
                    return Err(duplicate(&child_path, tag));
                } else {
                    node.children.insert(tag.to_string(), Entry::Leaf(value));
                }
            }
            None => {
                if node.contains(tag) {
                    return Err(duplicate(&child_path, tag));
                }
                let sub = node_from_element(child, &child_path, options)?;
                node.children.insert(tag.to_string(), Entry::Node(sub));
            }
        }
    }
    Ok(node)
}

/// Text content of an element, if it makes the element a leaf.
///
/// Whitespace-only content (indentation between child elements) does not
/// count; genuine leaf text is kept verbatim.
fn leaf_text<'a>(element: Node<'a, '_>) -> Option<&'a str> {
    let text = element.text()?;
    if text.trim().is_empty() { None } else { Some(text) }
}

fn leaf_value(element: Node<'_, '_>, text: &str) -> Result<Value, BlueprintError> {
    // Blueprints are written one leaf per line, so authors escape line
    // breaks inside text as a literal backslash-n.
    let text = text.replace("\\n", "\n");
    match element.attribute(PARSE_ATTRIBUTE) {
        None => Ok(Value::Str(text)),
        Some(target) => coerce(&text, target),
    }
}

fn coerce(text: &str, target: &str) -> Result<Value, BlueprintError> {
    match target {
        "int" => text
            .trim()
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|_| parse_error(text, target)),
        "float" => text
            .trim()
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|_| parse_error(text, target)),
        "tuple" => text
            .split(',')
            .map(|item| item.trim().parse::<i64>())
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Tuple)
            .map_err(|_| parse_error(text, target)),
        _ => Err(parse_error(text, target)),
    }
}

fn append_list_item(
    node: &mut ConfigNode,
    tag: &str,
    value: Value,
    child_path: &str,
) -> Result<(), BlueprintError> {
    match node.children.get_mut(tag) {
        None => {
            node.children
                .insert(tag.to_string(), Entry::Leaf(Value::List(vec![value])));
            Ok(())
        }
        Some(Entry::Leaf(Value::List(items))) => {
            items.push(value);
            Ok(())
        }
        // The earlier occurrence was a nested node, which cannot accumulate.
        Some(_) => Err(duplicate(child_path, tag)),
    }
}

fn parse_error(text: &str, target: &str) -> BlueprintError {
    BlueprintError::Parse {
        text: text.to_string(),
        target: target.to_string(),
    }
}

fn duplicate(child_path: &str, tag: &str) -> BlueprintError {
    BlueprintError::DuplicateTag {
        path: child_path.to_string(),
        tag: tag.to_string(),
    }
}
