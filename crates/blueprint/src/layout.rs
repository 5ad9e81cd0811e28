//! Layout resolution: flattening component nodes into records.
//!
//! Every node child of the requested start branch becomes one record.
//! A record is filled by walking the component node and every template
//! it references through `next`, nearest first, under a first-write-wins
//! rule: a key merged earlier is never overwritten by a later template.
//! Template references are collected in document order and drained from
//! the back, so of two sibling references the one declared last is
//! merged first and claims shared keys.

use crate::NEXT_TAG;
use crate::error::BlueprintError;
use crate::path;
use crate::tree::{ConfigNode, Entry, Value};
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::BTreeMap;

/// Resolved components keyed by name, iterated in lexical order.
pub type ResolvedLayout = BTreeMap<String, ResolvedRecord>;

/// One merged field of a resolved record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Field {
    Value(Value),
    Record(ResolvedRecord),
}

/// A flat component description with every template reference applied.
///
/// Fields keep the order in which they were first merged. The `next`
/// tag itself never survives into a record.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct ResolvedRecord {
    fields: IndexMap<String, Field>,
}

impl ResolvedRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Field> {
        self.fields.get(key)
    }

    /// Scalar field accessor.
    pub fn value(&self, key: &str) -> Option<&Value> {
        match self.fields.get(key) {
            Some(Field::Value(value)) => Some(value),
            _ => None,
        }
    }

    /// Nested record accessor.
    pub fn record(&self, key: &str) -> Option<&ResolvedRecord> {
        match self.fields.get(key) {
            Some(Field::Record(record)) => Some(record),
            _ => None,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Fields in merge order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Sets a field unconditionally. Intended for building records by
    /// hand; resolution itself only ever fills vacant keys.
    pub fn insert(&mut self, key: impl Into<String>, field: Field) {
        self.fields.insert(key.into(), field);
    }
}

/// Resolves every component under `start` into a flat record.
pub(crate) fn generate(
    root: &ConfigNode,
    start: &str,
) -> Result<ResolvedLayout, BlueprintError> {
    let branch = path::goto(root, start)?;
    let mut layout = ResolvedLayout::new();
    for (name, entry) in branch.iter() {
        if entry.is_node() {
            let mut record = ResolvedRecord::new();
            let mut active = Vec::new();
            step_in(root, &mut record, &path::join(start, name), &mut active)?;
            layout.insert(name.to_string(), record);
        }
    }
    log::debug!("resolved {} component(s) under '{}'", layout.len(), start);
    Ok(layout)
}

/// Merges the node at `step` into `record`, then drains its template
/// references depth-first.
///
/// `active` holds the paths currently being merged; revisiting one of
/// them means the `next` references form a cycle.
fn step_in(
    root: &ConfigNode,
    record: &mut ResolvedRecord,
    step: &str,
    active: &mut Vec<String>,
) -> Result<(), BlueprintError> {
    if active.iter().any(|merging| merging == step) {
        return Err(BlueprintError::CyclicInheritance {
            path: step.to_string(),
            chain: active.clone(),
        });
    }
    active.push(step.to_string());
    log::trace!("merging '{}'", step);

    let node = path::goto(root, step)?;
    let mut pending: Vec<String> = Vec::new();
    for (key, entry) in node.iter() {
        if key == NEXT_TAG {
            collect_references(entry, step, &mut pending);
            continue;
        }
        match entry {
            Entry::Node(_) => {
                if !record.fields.contains_key(key) {
                    record
                        .fields
                        .insert(key.to_string(), Field::Record(ResolvedRecord::new()));
                }
                match record.fields.get_mut(key) {
                    Some(Field::Record(sub)) => {
                        step_in(root, sub, &path::join(step, key), active)?;
                    }
                    _ => log::debug!(
                        "'{}': '{}' was already merged as a scalar, nested node skipped",
                        step,
                        key
                    ),
                }
            }
            Entry::Leaf(value) => {
                if !record.fields.contains_key(key) {
                    record
                        .fields
                        .insert(key.to_string(), Field::Value(value.clone()));
                }
            }
        }
    }

    while let Some(reference) = pending.pop() {
        step_in(root, record, &reference, active)?;
    }

    active.pop();
    Ok(())
}

/// Gathers template paths from a `next` entry, in declaration order.
///
/// A single leaf may carry several comma-separated paths; repeated
/// `next` tags arrive here as an accumulated list.
fn collect_references(entry: &Entry, step: &str, pending: &mut Vec<String>) {
    match entry {
        Entry::Leaf(value) => match value.as_list() {
            Some(items) => {
                for item in items {
                    push_reference_paths(item, pending);
                }
            }
            None => push_reference_paths(value, pending),
        },
        Entry::Node(_) => {
            log::warn!(
                "'{}': <{}> holds nested elements instead of a path, ignored",
                step,
                NEXT_TAG
            );
        }
    }
}

fn push_reference_paths(value: &Value, pending: &mut Vec<String>) {
    let text = match value.as_str() {
        Some(path) => path.to_string(),
        None => value.to_string(),
    };
    for piece in text.split(',') {
        pending.push(piece.trim().to_string());
    }
}
