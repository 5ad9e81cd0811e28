//! Ordered configuration tree produced by the blueprint loader.
//!
//! Every XML element becomes either a [`Value`] leaf or a nested
//! [`ConfigNode`]. Nodes remember the document order of their children,
//! which later drives template merge order and layout resolution.

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// A scalar carried by one blueprint leaf element.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
    /// Comma-separated integers declared with `parse="tuple"`.
    Tuple(Vec<i64>),
    /// Accumulated occurrences of a list-accumulating tag, in document order.
    List(Vec<Value>),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric access; integers promote to `f64`.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_tuple(&self) -> Option<&[i64]> {
        match self {
            Value::Tuple(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Human-readable name of the value kind, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Tuple(_) => "tuple",
            Value::List(_) => "list",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{}", s),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(v) => write!(f, "{}", v),
            Value::Tuple(items) => {
                let joined = items
                    .iter()
                    .map(|i| i.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{}", joined)
            }
            Value::List(items) => {
                let joined = items
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{}", joined)
            }
        }
    }
}

/// One child slot of a node: a scalar leaf or a nested node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Entry {
    Leaf(Value),
    Node(ConfigNode),
}

impl Entry {
    pub fn as_leaf(&self) -> Option<&Value> {
        match self {
            Entry::Leaf(value) => Some(value),
            Entry::Node(_) => None,
        }
    }

    pub fn as_node(&self) -> Option<&ConfigNode> {
        match self {
            Entry::Node(node) => Some(node),
            Entry::Leaf(_) => None,
        }
    }

    pub fn is_node(&self) -> bool {
        matches!(self, Entry::Node(_))
    }
}

/// An insertion-ordered mapping from tag name to child entry.
///
/// Tag names are unique among the direct children of a node; repeated
/// tags are rejected at load time unless the tag is list-accumulating.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct ConfigNode {
    pub(crate) children: IndexMap<String, Entry>,
}

impl ConfigNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.children.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.children.contains_key(key)
    }

    /// Children in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.children.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.children.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_access_promotes_integers() {
        assert_eq!(Value::Int(3).as_float(), Some(3.0));
        assert_eq!(Value::Float(1.5).as_float(), Some(1.5));
        assert_eq!(Value::Str("3".into()).as_float(), None);
    }

    #[test]
    fn test_scalar_accessors_match_their_kind() {
        let text = Value::Str("image".into());
        assert_eq!(text.as_str(), Some("image"));
        assert_eq!(text.as_int(), None);

        let number = Value::Int(12);
        assert_eq!(number.as_int(), Some(12));
        assert!(number.as_str().is_none());

        let pair = Value::Tuple(vec![3, 5]);
        assert_eq!(pair.as_tuple(), Some(&[3, 5][..]));
        assert!(pair.as_list().is_none());

        let accumulated = Value::List(vec![Value::Str("a".into())]);
        assert_eq!(accumulated.as_list(), Some(&[Value::Str("a".into())][..]));
        assert!(accumulated.as_tuple().is_none());
    }

    #[test]
    fn test_tuple_display_uses_comma_separation() {
        let value = Value::Tuple(vec![800, 500]);
        assert_eq!(value.to_string(), "800, 500");
    }

    #[test]
    fn test_value_kind_names() {
        assert_eq!(Value::Str("x".into()).kind(), "string");
        assert_eq!(Value::Tuple(vec![1, 2]).kind(), "tuple");
        assert_eq!(Value::List(vec![]).kind(), "list");
    }

    #[test]
    fn test_entry_accessors() {
        let leaf = Entry::Leaf(Value::Int(7));
        assert_eq!(leaf.as_leaf(), Some(&Value::Int(7)));
        assert!(leaf.as_node().is_none());

        let node = Entry::Node(ConfigNode::new());
        assert!(node.is_node());
        assert!(node.as_leaf().is_none());
    }

    #[test]
    fn test_values_serialize_without_tags() {
        assert_eq!(
            serde_json::to_value(Value::Int(7)).unwrap(),
            serde_json::json!(7)
        );
        assert_eq!(
            serde_json::to_value(Value::Tuple(vec![800, 500])).unwrap(),
            serde_json::json!([800, 500])
        );
        assert_eq!(
            serde_json::to_value(Value::Str("#fff".into())).unwrap(),
            serde_json::json!("#fff")
        );
    }
}
