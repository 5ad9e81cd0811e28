//! Blueprint loading and resolution.
//!
//! A blueprint is an XML document describing cards as ordered trees of
//! settings. This crate parses the document into a [`ConfigNode`] tree,
//! resolves card branches into flat per-component records by following
//! `next` template references, and harvests `color` leaves into named
//! palettes.
//!
//! ## Example
//!
//! ```ignore
//! use cardwright_blueprint::Blueprint;
//!
//! let blueprint = Blueprint::parse(xml_source)?;
//! let layout = blueprint.generate_layout("minimal example")?;
//! for (name, record) in &layout {
//!     println!("{name}: {:?}", record.value("type"));
//! }
//! ```

pub mod error;
pub mod layout;
pub mod loader;
pub mod palette;
mod path;
pub mod tree;

// --- Public API ---
pub use error::BlueprintError;
pub use layout::{Field, ResolvedLayout, ResolvedRecord};
pub use loader::LoaderOptions;
pub use palette::{COLOR_TAG, PaletteEntry};
pub use tree::{ConfigNode, Entry, Value};

/// Tag marking a template reference inside a component node.
pub const NEXT_TAG: &str = "next";

/// A parsed blueprint document.
///
/// The XML source is consumed at parse time; the tree owns all of its
/// data, so a `Blueprint` can outlive the source string and be shared
/// across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct Blueprint {
    tree: ConfigNode,
}

impl Blueprint {
    /// Parses an XML blueprint with the default loader options.
    pub fn parse(source: &str) -> Result<Self, BlueprintError> {
        Self::parse_with(source, LoaderOptions::default())
    }

    /// Parses an XML blueprint with explicit loader options.
    pub fn parse_with(source: &str, options: LoaderOptions) -> Result<Self, BlueprintError> {
        let doc = roxmltree::Document::parse(source)?;
        let tree = loader::build(&doc, &options)?;
        Ok(Self { tree })
    }

    /// The configuration tree below the document element.
    pub fn tree(&self) -> &ConfigNode {
        &self.tree
    }

    /// Resolves a space-separated path to the node it names.
    pub fn goto(&self, path: &str) -> Result<&ConfigNode, BlueprintError> {
        path::goto(&self.tree, path)
    }

    /// Resolves every component under `start` into a flat record,
    /// applying template references nearest first.
    pub fn generate_layout(&self, start: &str) -> Result<ResolvedLayout, BlueprintError> {
        layout::generate(&self.tree, start)
    }

    /// Collects every color leaf under `start` into an ordered palette.
    pub fn generate_palette(&self, start: &str) -> Result<Vec<PaletteEntry>, BlueprintError> {
        palette::generate(&self.tree, start)
    }
}
