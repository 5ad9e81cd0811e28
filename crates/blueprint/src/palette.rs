//! Palette harvesting: collecting every `color` leaf below a branch.
//!
//! Each harvested color is labelled with the path from the start branch
//! to the leaf's parent, segments joined by single spaces. Entries are
//! ordered by nesting depth first and alphabetically within a depth, so
//! broad group colors come before their specialisations.

use crate::error::BlueprintError;
use crate::path;
use crate::tree::{ConfigNode, Entry, Value};
use itertools::Itertools;
use serde::Serialize;

/// Tag whose leaves are collected into palettes.
pub const COLOR_TAG: &str = "color";

/// One harvested color with its path label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaletteEntry {
    pub label: String,
    pub color: Value,
}

/// Collects every color leaf under `start` into an ordered palette.
pub(crate) fn generate(
    root: &ConfigNode,
    start: &str,
) -> Result<Vec<PaletteEntry>, BlueprintError> {
    let branch = path::goto(root, start)?;
    let palette = harvest(branch)
        .into_iter()
        .sorted_by(|a, b| {
            let depth_a = a.label.matches(' ').count();
            let depth_b = b.label.matches(' ').count();
            depth_a.cmp(&depth_b).then_with(|| a.label.cmp(&b.label))
        })
        .collect::<Vec<_>>();
    log::debug!("harvested {} color(s) under '{}'", palette.len(), start);
    Ok(palette)
}

fn harvest(node: &ConfigNode) -> Vec<PaletteEntry> {
    let mut entries = Vec::new();
    for (key, entry) in node.iter() {
        match entry {
            Entry::Node(child) => {
                for sub in harvest(child) {
                    let label = if sub.label.is_empty() {
                        key.to_string()
                    } else {
                        format!("{} {}", key, sub.label)
                    };
                    entries.push(PaletteEntry {
                        label,
                        color: sub.color,
                    });
                }
            }
            Entry::Leaf(value) if key == COLOR_TAG => {
                entries.push(PaletteEntry {
                    label: String::new(),
                    color: value.clone(),
                });
            }
            Entry::Leaf(_) => {}
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Blueprint;

    #[test]
    fn test_depth_orders_before_alphabet() {
        let blueprint = Blueprint::parse(
            r#"<data>
                <colors>
                    <z><color>#030303</color></z>
                    <a>
                        <color>#010101</color>
                        <b><color>#020202</color></b>
                    </a>
                </colors>
            </data>"#,
        )
        .unwrap();

        let palette = blueprint.generate_palette("colors").unwrap();
        let labels: Vec<&str> = palette.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["a", "z", "a b"]);
    }

    #[test]
    fn test_labels_join_path_segments_with_spaces() {
        let blueprint = Blueprint::parse(
            r#"<data>
                <colors>
                    <front><border><color>#445566</color></border></front>
                </colors>
            </data>"#,
        )
        .unwrap();

        let palette = blueprint.generate_palette("colors").unwrap();
        assert_eq!(palette.len(), 1);
        assert_eq!(palette[0].label, "front border");
        assert_eq!(palette[0].color, Value::Str("#445566".into()));
    }

    #[test]
    fn test_color_directly_under_start_gets_empty_label() {
        let blueprint = Blueprint::parse(
            r#"<data>
                <colors>
                    <color>#000000</color>
                    <deep><color>#111111</color></deep>
                </colors>
            </data>"#,
        )
        .unwrap();

        let palette = blueprint.generate_palette("colors").unwrap();
        let labels: Vec<&str> = palette.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["", "deep"]);
    }

    #[test]
    fn test_other_leaves_are_ignored() {
        let blueprint = Blueprint::parse(
            r#"<data>
                <colors>
                    <a>
                        <name>not a color</name>
                        <size parse="tuple">1,2</size>
                        <color>#abcdef</color>
                    </a>
                </colors>
            </data>"#,
        )
        .unwrap();

        let palette = blueprint.generate_palette("colors").unwrap();
        assert_eq!(palette.len(), 1);
        assert_eq!(palette[0].color, Value::Str("#abcdef".into()));
    }

    #[test]
    fn test_missing_start_branch_is_reported() {
        let blueprint = Blueprint::parse(r#"<data><colors/></data>"#).unwrap();
        assert!(matches!(
            blueprint.generate_palette("palette"),
            Err(BlueprintError::PathNotFound { segment, .. }) if segment == "palette"
        ));
    }

    #[test]
    fn test_empty_branch_yields_empty_palette() {
        let blueprint = Blueprint::parse(r#"<data><colors/></data>"#).unwrap();
        assert!(blueprint.generate_palette("colors").unwrap().is_empty());
    }
}
